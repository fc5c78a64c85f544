//! Clause sequences of the three document kinds.

use crate::core::template::{
    in_words, money, strong, text, value, Clause, Numbering, Signatory, Template,
};
use crate::domain::model::{DocumentKind, Field, DEFAULT_CONFIDENTIALITY_TERM, DEFAULT_PENALTY};

pub fn template_for(kind: DocumentKind) -> &'static Template {
    match kind {
        DocumentKind::Service => &SERVICE,
        DocumentKind::Freelancer => &FREELANCER,
        DocumentKind::Nda => &NDA,
    }
}

pub static SERVICE: Template = Template {
    kind: DocumentKind::Service,
    title: "CONTRATO DE PRESTAÇÃO DE SERVIÇOS",
    parties: ["CONTRATANTE", "CONTRATADO"],
    numbering: Numbering::Ordinal,
    preamble: &[
        text("Pelo presente instrumento particular, de um lado "),
        value(Field::ClientName, "[NOME DO CONTRATANTE]"),
        text(", inscrito no CPF/CNPJ sob o nº "),
        value(Field::ClientTaxId, "[CPF/CNPJ]"),
        text(", com endereço em "),
        value(Field::ClientAddress, "[ENDEREÇO]"),
        text(", doravante denominado "),
        strong("CONTRATANTE"),
        text(", e de outro lado "),
        value(Field::ProviderName, "[NOME DO CONTRATADO]"),
        text(", inscrito no CPF/CNPJ sob o nº "),
        value(Field::ProviderTaxId, "[CPF/CNPJ]"),
        text(", com endereço em "),
        value(Field::ProviderAddress, "[ENDEREÇO]"),
        text(", doravante denominado "),
        strong("CONTRATADO"),
        text(", têm entre si justo e acordado o presente contrato, mediante as cláusulas e condições seguintes:"),
    ],
    clauses: &[
        Clause {
            title: "DO OBJETO",
            paragraphs: &[&[
                text("O presente contrato tem por objeto a prestação dos seguintes serviços pelo CONTRATADO ao CONTRATANTE: "),
                value(Field::Description, "[DESCRIÇÃO DO SERVIÇO]"),
                text("."),
            ]],
            items: &[],
        },
        Clause {
            title: "DO PRAZO",
            paragraphs: &[&[
                text("O prazo para execução dos serviços é de "),
                value(Field::DeliveryTerm, "[PRAZO]"),
                text(", contados a partir da assinatura deste contrato, podendo ser prorrogado mediante acordo entre as partes."),
            ]],
            items: &[],
        },
        Clause {
            title: "DO VALOR E PAGAMENTO",
            paragraphs: &[&[
                text("Pela execução dos serviços, o CONTRATANTE pagará ao CONTRATADO o valor de "),
                money(Field::Price, "[VALOR]"),
                text(" ("),
                in_words(Field::Price, "[VALOR POR EXTENSO]"),
                text("), da seguinte forma: "),
                value(Field::PaymentMethod, "[FORMA DE PAGAMENTO]"),
                text("."),
            ]],
            items: &[],
        },
        Clause {
            title: "DAS OBRIGAÇÕES DO CONTRATADO",
            paragraphs: &[&[text("O CONTRATADO obriga-se a:")]],
            items: &[
                "Executar os serviços com zelo e dedicação;",
                "Cumprir os prazos estabelecidos;",
                "Manter sigilo sobre informações confidenciais;",
                "Comunicar imediatamente qualquer impedimento na execução.",
            ],
        },
        Clause {
            title: "DAS OBRIGAÇÕES DO CONTRATANTE",
            paragraphs: &[&[text("O CONTRATANTE obriga-se a:")]],
            items: &[
                "Efetuar os pagamentos nas datas acordadas;",
                "Fornecer as informações necessárias para execução dos serviços;",
                "Comunicar alterações de escopo com antecedência razoável.",
            ],
        },
        Clause {
            title: "DA RESCISÃO",
            paragraphs: &[&[text(
                "O presente contrato poderá ser rescindido por qualquer das partes, mediante comunicação por escrito com antecedência mínima de 15 (quinze) dias, ficando ressalvado o pagamento pelos serviços já executados.",
            )]],
            items: &[],
        },
        Clause {
            title: "DO FORO",
            paragraphs: &[&[
                text("Fica eleito o foro da "),
                value(Field::Venue, "[COMARCA]"),
                text(" para dirimir quaisquer dúvidas ou controvérsias oriundas deste contrato, com renúncia expressa a qualquer outro, por mais privilegiado que seja."),
            ]],
            items: &[],
        },
    ],
    closing: Some(
        "E por estarem assim justas e contratadas, as partes assinam o presente instrumento em 2 (duas) vias de igual teor e forma, na presença de 2 (duas) testemunhas.",
    ),
    signatories: &[
        Signatory {
            role: "CONTRATANTE",
            name: Field::ClientName,
            tax_id: Some(Field::ClientTaxId),
        },
        Signatory {
            role: "CONTRATADO",
            name: Field::ProviderName,
            tax_id: Some(Field::ProviderTaxId),
        },
    ],
    witnesses: 2,
};

pub static FREELANCER: Template = Template {
    kind: DocumentKind::Freelancer,
    title: "CONTRATO DE PRESTAÇÃO DE SERVIÇOS AUTÔNOMOS",
    parties: ["CLIENTE", "FREELANCER"],
    numbering: Numbering::Arabic,
    preamble: &[
        text("Pelo presente instrumento particular, "),
        value(Field::ClientName, "[NOME DO CONTRATANTE]"),
        text(", CPF/CNPJ "),
        value(Field::ClientTaxId, "[CPF/CNPJ]"),
        text(", endereço "),
        value(Field::ClientAddress, "[ENDEREÇO]"),
        text(", doravante denominado "),
        strong("CLIENTE"),
        text(", e "),
        value(Field::ProviderName, "[NOME DO FREELANCER]"),
        text(", CPF "),
        value(Field::ProviderTaxId, "[CPF]"),
        text(", endereço "),
        value(Field::ProviderAddress, "[ENDEREÇO]"),
        text(", doravante denominado "),
        strong("FREELANCER"),
        text(", acordam:"),
    ],
    clauses: &[
        Clause {
            title: "SERVIÇO",
            paragraphs: &[&[value(Field::Description, "[DESCRIÇÃO DO SERVIÇO]")]],
            items: &[],
        },
        Clause {
            title: "PRAZO",
            paragraphs: &[&[
                value(Field::DeliveryTerm, "[PRAZO]"),
                text(" a partir da data de assinatura."),
            ]],
            items: &[],
        },
        Clause {
            title: "VALOR",
            paragraphs: &[
                &[money(Field::Price, "[VALOR]")],
                &[
                    text("Forma de pagamento: "),
                    value(Field::PaymentMethod, "[FORMA DE PAGAMENTO]"),
                ],
            ],
            items: &[],
        },
        Clause {
            title: "RELAÇÃO DE TRABALHO",
            paragraphs: &[&[text(
                "Fica expressamente estabelecido que não há qualquer vínculo empregatício entre as partes, sendo o FREELANCER profissional autônomo, responsável pelos seus próprios tributos e obrigações fiscais.",
            )]],
            items: &[],
        },
        Clause {
            title: "PROPRIEDADE INTELECTUAL",
            paragraphs: &[&[text(
                "Após o pagamento integral, todos os direitos sobre o trabalho entregue serão transferidos ao CLIENTE.",
            )]],
            items: &[],
        },
        Clause {
            title: "REVISÕES",
            paragraphs: &[&[text(
                "Estão incluídas até 2 (duas) rodadas de revisão. Revisões adicionais serão cobradas à parte.",
            )]],
            items: &[],
        },
        Clause {
            title: "FORO",
            paragraphs: &[&[
                text("Comarca de "),
                value(Field::Venue, "[COMARCA]"),
                text("."),
            ]],
            items: &[],
        },
    ],
    closing: None,
    signatories: &[
        Signatory {
            role: "CLIENTE",
            name: Field::ClientName,
            tax_id: None,
        },
        Signatory {
            role: "FREELANCER",
            name: Field::ProviderName,
            tax_id: None,
        },
    ],
    witnesses: 0,
};

// 保密期限與罰款在空白時沿用業務預設值，而不是方括號佔位字串
pub static NDA: Template = Template {
    kind: DocumentKind::Nda,
    title: "TERMO DE CONFIDENCIALIDADE E SIGILO (NDA)",
    parties: ["PARTE REVELADORA", "PARTE RECEPTORA"],
    numbering: Numbering::Arabic,
    preamble: &[
        text("Pelo presente instrumento, "),
        value(Field::ClientName, "[PARTE REVELADORA]"),
        text(", CPF/CNPJ "),
        value(Field::ClientTaxId, "[CPF/CNPJ]"),
        text(", doravante denominado "),
        strong("PARTE REVELADORA"),
        text(", e "),
        value(Field::ProviderName, "[PARTE RECEPTORA]"),
        text(", CPF/CNPJ "),
        value(Field::ProviderTaxId, "[CPF/CNPJ]"),
        text(", doravante denominado "),
        strong("PARTE RECEPTORA"),
        text(", acordam os seguintes termos de confidencialidade:"),
    ],
    clauses: &[
        Clause {
            title: "INFORMAÇÕES CONFIDENCIAIS",
            paragraphs: &[
                &[text(
                    "Consideram-se informações confidenciais todas as informações, dados, documentos, know-how, segredos comerciais, estratégias, planos de negócio, códigos-fonte, algoritmos, processos, técnicas, desenhos, especificações e quaisquer outras informações, sejam elas orais, escritas ou em qualquer outro formato, incluindo:",
                )],
                &[value(Field::Description, "[DESCRIÇÃO DAS INFORMAÇÕES]")],
            ],
            items: &[],
        },
        Clause {
            title: "OBRIGAÇÕES DA PARTE RECEPTORA",
            paragraphs: &[&[text("A PARTE RECEPTORA compromete-se a:")]],
            items: &[
                "Manter sigilo absoluto sobre todas as informações confidenciais;",
                "Não divulgar, publicar, reproduzir ou transmitir as informações a terceiros;",
                "Utilizar as informações apenas para os fins expressamente autorizados;",
                "Devolver ou destruir todas as informações ao término deste acordo;",
                "Notificar imediatamente qualquer uso ou divulgação não autorizada.",
            ],
        },
        Clause {
            title: "PRAZO",
            paragraphs: &[&[
                text("Este termo terá vigência pelo período de "),
                value(Field::ConfidentialityTerm, DEFAULT_CONFIDENTIALITY_TERM),
                text(", contados a partir da data de assinatura, permanecendo em vigor mesmo após o término de qualquer relação comercial entre as partes."),
            ]],
            items: &[],
        },
        Clause {
            title: "PENALIDADES",
            paragraphs: &[&[
                text("O descumprimento de qualquer obrigação prevista neste termo sujeitará a PARTE RECEPTORA ao pagamento de multa no valor de "),
                money(Field::Penalty, DEFAULT_PENALTY),
                text(", sem prejuízo de indenização por perdas e danos."),
            ]],
            items: &[],
        },
        Clause {
            title: "EXCEÇÕES",
            paragraphs: &[&[text("Não são consideradas confidenciais as informações que:")]],
            items: &[
                "Já eram de conhecimento público antes da divulgação;",
                "Tornaram-se públicas sem culpa da PARTE RECEPTORA;",
                "Foram obtidas legalmente de terceiros sem restrição de confidencialidade;",
                "Devam ser divulgadas por força de lei ou ordem judicial.",
            ],
        },
        Clause {
            title: "FORO",
            paragraphs: &[&[
                text("Comarca de "),
                value(Field::Venue, "[COMARCA]"),
                text("."),
            ]],
            items: &[],
        },
    ],
    closing: None,
    signatories: &[
        Signatory {
            role: "PARTE REVELADORA",
            name: Field::ClientName,
            tax_id: Some(Field::ClientTaxId),
        },
        Signatory {
            role: "PARTE RECEPTORA",
            name: Field::ProviderName,
            tax_id: Some(Field::ProviderTaxId),
        },
    ],
    witnesses: 2,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_for_matches_kind() {
        for kind in DocumentKind::ALL {
            assert_eq!(template_for(kind).kind, kind);
        }
    }

    #[test]
    fn test_signatories_use_party_roles() {
        for kind in DocumentKind::ALL {
            let template = template_for(kind);
            let roles: Vec<&str> = template.signatories.iter().map(|s| s.role).collect();
            assert_eq!(roles, template.parties.to_vec());
        }
    }

    #[test]
    fn test_nda_does_not_reference_deal_fields() {
        let fields = NDA.referenced_fields();
        assert!(!fields.contains(&Field::Price));
        assert!(!fields.contains(&Field::DeliveryTerm));
        assert!(!fields.contains(&Field::PaymentMethod));
        assert!(!fields.contains(&Field::ProviderAddress));
        assert!(fields.contains(&Field::Penalty));
    }

    #[test]
    fn test_service_references_every_non_nda_field() {
        let fields = SERVICE.referenced_fields();
        assert_eq!(fields.len(), 12);
        assert!(!fields.contains(&Field::ConfidentialityTerm));
        assert!(!fields.contains(&Field::Penalty));
    }

    #[test]
    fn test_only_service_has_a_closing() {
        assert!(SERVICE.closing.is_some());
        assert!(FREELANCER.closing.is_none());
        assert!(NDA.closing.is_none());
        assert_eq!(FREELANCER.witnesses, 0);
    }
}
