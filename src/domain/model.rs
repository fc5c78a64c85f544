use crate::utils::error::ContractError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    #[default]
    #[serde(alias = "servico", alias = "serviço")]
    Service,
    Freelancer,
    Nda,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Service,
        DocumentKind::Freelancer,
        DocumentKind::Nda,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DocumentKind::Service => "service",
            DocumentKind::Freelancer => "freelancer",
            DocumentKind::Nda => "nda",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Service => "Prestação de Serviços",
            DocumentKind::Freelancer => "Freelancer/Autônomo",
            DocumentKind::Nda => "Confidencialidade (NDA)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DocumentKind::Service => "Contrato padrão de serviços",
            DocumentKind::Freelancer => "Para trabalhos pontuais",
            DocumentKind::Nda => "Proteção de informações",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DocumentKind {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "service" | "servico" | "serviço" => Ok(DocumentKind::Service),
            "freelancer" => Ok(DocumentKind::Freelancer),
            "nda" => Ok(DocumentKind::Nda),
            _ => Err(ContractError::UnknownKindError {
                value: s.to_string(),
            }),
        }
    }
}

/// 草稿中的每一個欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ClientName,
    ClientTaxId,
    ClientAddress,
    ProviderName,
    ProviderTaxId,
    ProviderAddress,
    Description,
    DeliveryTerm,
    Price,
    PaymentMethod,
    ConfidentialityTerm,
    Penalty,
    City,
    Venue,
}

impl Field {
    pub const ALL: [Field; 14] = [
        Field::ClientName,
        Field::ClientTaxId,
        Field::ClientAddress,
        Field::ProviderName,
        Field::ProviderTaxId,
        Field::ProviderAddress,
        Field::Description,
        Field::DeliveryTerm,
        Field::Price,
        Field::PaymentMethod,
        Field::ConfidentialityTerm,
        Field::Penalty,
        Field::City,
        Field::Venue,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::ClientName => "client_name",
            Field::ClientTaxId => "client_tax_id",
            Field::ClientAddress => "client_address",
            Field::ProviderName => "provider_name",
            Field::ProviderTaxId => "provider_tax_id",
            Field::ProviderAddress => "provider_address",
            Field::Description => "description",
            Field::DeliveryTerm => "delivery_term",
            Field::Price => "price",
            Field::PaymentMethod => "payment_method",
            Field::ConfidentialityTerm => "confidentiality_term",
            Field::Penalty => "penalty",
            Field::City => "city",
            Field::Venue => "venue",
        }
    }

    /// 表單上顯示的標籤
    pub fn label(self) -> &'static str {
        match self {
            Field::ClientName | Field::ProviderName => "Nome completo / Razão Social",
            Field::ClientTaxId | Field::ProviderTaxId => "CPF / CNPJ",
            Field::ClientAddress | Field::ProviderAddress => "Endereço completo",
            Field::Description => "Descrição do serviço",
            Field::DeliveryTerm => "Prazo de entrega",
            Field::Price => "Valor (R$)",
            Field::PaymentMethod => "Forma de pagamento",
            Field::ConfidentialityTerm => "Prazo de confidencialidade",
            Field::Penalty => "Multa por descumprimento (R$)",
            Field::City => "Cidade de assinatura",
            Field::Venue => "Foro (cidade para resolver disputas)",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Field::ClientName => "Ex: João da Silva",
            Field::ClientTaxId => "Ex: 123.456.789-00",
            Field::ProviderName => "Ex: Maria Souza",
            Field::ProviderTaxId => "Ex: 987.654.321-00",
            Field::ClientAddress | Field::ProviderAddress => "Rua, número, bairro, cidade - UF",
            Field::Description => "Descreva detalhadamente o serviço a ser prestado...",
            Field::DeliveryTerm => "Ex: 30 dias",
            Field::Price => "Ex: 5.000,00",
            Field::PaymentMethod => "Ex: 50% entrada, 50% entrega",
            Field::ConfidentialityTerm => "Ex: 2 anos",
            Field::Penalty => "Ex: 10.000,00",
            Field::City => "Ex: São Paulo - SP",
            Field::Venue => "Ex: Comarca de São Paulo - SP",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Field::ALL
            .into_iter()
            .find(|field| field.key() == normalized)
            .ok_or_else(|| ContractError::UnknownFieldError {
                name: s.to_string(),
            })
    }
}

/// 使用者填寫的所有欄位。空字串代表尚未填寫。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Draft {
    pub client_name: String,
    pub client_tax_id: String,
    pub client_address: String,
    pub provider_name: String,
    pub provider_tax_id: String,
    pub provider_address: String,
    pub description: String,
    pub delivery_term: String,
    pub price: String,
    pub payment_method: String,
    pub confidentiality_term: String,
    pub penalty: String,
    pub city: String,
    pub venue: String,
}

pub const DEFAULT_DELIVERY_TERM: &str = "30 dias";
pub const DEFAULT_PAYMENT_METHOD: &str = "À vista, via PIX";
pub const DEFAULT_CONFIDENTIALITY_TERM: &str = "2 anos";
pub const DEFAULT_PENALTY: &str = "10.000,00";

impl Default for Draft {
    fn default() -> Self {
        Self {
            client_name: String::new(),
            client_tax_id: String::new(),
            client_address: String::new(),
            provider_name: String::new(),
            provider_tax_id: String::new(),
            provider_address: String::new(),
            description: String::new(),
            delivery_term: DEFAULT_DELIVERY_TERM.to_string(),
            price: String::new(),
            payment_method: DEFAULT_PAYMENT_METHOD.to_string(),
            confidentiality_term: DEFAULT_CONFIDENTIALITY_TERM.to_string(),
            penalty: DEFAULT_PENALTY.to_string(),
            city: String::new(),
            venue: String::new(),
        }
    }
}

impl Draft {
    /// 所有欄位皆為空字串，包含有預設值的欄位
    pub fn empty() -> Self {
        Self {
            delivery_term: String::new(),
            payment_method: String::new(),
            confidentiality_term: String::new(),
            penalty: String::new(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ClientName => &self.client_name,
            Field::ClientTaxId => &self.client_tax_id,
            Field::ClientAddress => &self.client_address,
            Field::ProviderName => &self.provider_name,
            Field::ProviderTaxId => &self.provider_tax_id,
            Field::ProviderAddress => &self.provider_address,
            Field::Description => &self.description,
            Field::DeliveryTerm => &self.delivery_term,
            Field::Price => &self.price,
            Field::PaymentMethod => &self.payment_method,
            Field::ConfidentialityTerm => &self.confidentiality_term,
            Field::Penalty => &self.penalty,
            Field::City => &self.city,
            Field::Venue => &self.venue,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::ClientName => &mut self.client_name,
            Field::ClientTaxId => &mut self.client_tax_id,
            Field::ClientAddress => &mut self.client_address,
            Field::ProviderName => &mut self.provider_name,
            Field::ProviderTaxId => &mut self.provider_tax_id,
            Field::ProviderAddress => &mut self.provider_address,
            Field::Description => &mut self.description,
            Field::DeliveryTerm => &mut self.delivery_term,
            Field::Price => &mut self.price,
            Field::PaymentMethod => &mut self.payment_method,
            Field::ConfidentialityTerm => &mut self.confidentiality_term,
            Field::Penalty => &mut self.penalty,
            Field::City => &mut self.city,
            Field::Venue => &mut self.venue,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}
