use crate::core::format::OutputFormat;
use crate::core::renderer::{render_on, Document};
use crate::domain::model::{DocumentKind, Draft, Field};
use crate::domain::ports::Storage;
use crate::utils::date;
use crate::utils::error::Result;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Editing,
    Previewing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSection {
    pub title: &'static str,
    pub fields: Vec<(Field, &'static str)>,
}

/// 單一使用者、單一工作階段的表單狀態
#[derive(Debug, Clone, Default)]
pub struct FormState {
    kind: DocumentKind,
    draft: Draft,
    mode: Mode,
    signing_date: Option<NaiveDate>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(kind: DocumentKind, draft: Draft) -> Self {
        Self {
            kind,
            draft,
            ..Self::default()
        }
    }

    /// Fixes the signing date instead of using today's date.
    pub fn with_signing_date(mut self, date: NaiveDate) -> Self {
        self.signing_date = Some(date);
        self
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn signing_date(&self) -> NaiveDate {
        self.signing_date.unwrap_or_else(date::today)
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!("Setting {} ({} chars)", field, value.chars().count());
        self.draft.set(field, value);
    }

    /// Field values are shared across kinds and survive the switch.
    pub fn set_document_kind(&mut self, kind: DocumentKind) {
        if self.kind != kind {
            tracing::debug!("Switching document kind {} -> {}", self.kind, kind);
        }
        self.kind = kind;
    }

    pub fn generate(&mut self) -> Document {
        self.mode = Mode::Previewing;
        self.render()
    }

    pub fn back_to_edit(&mut self) {
        self.mode = Mode::Editing;
    }

    pub fn preview(&self) -> Option<Document> {
        match self.mode {
            Mode::Previewing => Some(self.render()),
            Mode::Editing => None,
        }
    }

    pub fn render(&self) -> Document {
        render_on(self.kind, &self.draft, self.signing_date())
    }

    /// 只有在預覽狀態才會輸出；回傳寫入的位置
    pub fn print<S: Storage>(&self, storage: &S, file_name: &str) -> Result<Option<String>> {
        let Some(document) = self.preview() else {
            tracing::warn!("Print requested while editing; generate the document first");
            return Ok(None);
        };

        let html = OutputFormat::Html.format(&document)?;
        let location = storage.write_file(file_name, html.as_bytes())?;
        tracing::info!("🖨️ Document sent to {}", location);
        Ok(Some(location))
    }

    pub fn form_sections(&self) -> Vec<FormSection> {
        form_sections(self.kind)
    }
}

fn with_labels(fields: &[Field]) -> Vec<(Field, &'static str)> {
    fields.iter().map(|f| (*f, f.label())).collect()
}

pub fn form_sections(kind: DocumentKind) -> Vec<FormSection> {
    let mut sections = vec![
        FormSection {
            title: "CONTRATANTE",
            fields: with_labels(&[Field::ClientName, Field::ClientTaxId, Field::ClientAddress]),
        },
        FormSection {
            title: "CONTRATADO",
            fields: with_labels(&[
                Field::ProviderName,
                Field::ProviderTaxId,
                Field::ProviderAddress,
            ]),
        },
    ];

    match kind {
        DocumentKind::Service | DocumentKind::Freelancer => sections.push(FormSection {
            title: "OBJETO DO CONTRATO",
            fields: with_labels(&[
                Field::Description,
                Field::DeliveryTerm,
                Field::Price,
                Field::PaymentMethod,
            ]),
        }),
        DocumentKind::Nda => sections.push(FormSection {
            title: "TERMOS DE CONFIDENCIALIDADE",
            fields: vec![
                (Field::Description, "Informações confidenciais (descreva)"),
                (Field::ConfidentialityTerm, Field::ConfidentialityTerm.label()),
                (Field::Penalty, Field::Penalty.label()),
            ],
        }),
    }

    sections.push(FormSection {
        title: "LOCALIDADE",
        fields: with_labels(&[Field::City, Field::Venue]),
    });

    sections
}
