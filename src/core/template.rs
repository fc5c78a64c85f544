//! Declarative description of a contract: fixed text interleaved with
//! interpolation points. Each [`Template`] is plain data; the renderer walks it.

use crate::domain::model::{DocumentKind, Field};

pub const NAME_PLACEHOLDER: &str = "[NOME]";
pub const TAX_ID_PLACEHOLDER: &str = "[CPF/CNPJ]";
pub const CITY_PLACEHOLDER: &str = "[CIDADE]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Text(&'static str),
    /// Fixed text shown in bold, e.g. a party role label.
    Strong(&'static str),
    /// The field's value, or `placeholder` when empty. Shown in bold.
    Value {
        field: Field,
        placeholder: &'static str,
    },
    /// `R$ <value>`, or `R$ <placeholder>` when empty. Shown in bold.
    Money {
        field: Field,
        placeholder: &'static str,
    },
    /// `<value> reais`, or `placeholder` when empty.
    InWords {
        field: Field,
        placeholder: &'static str,
    },
}

impl Span {
    pub fn field(&self) -> Option<Field> {
        match *self {
            Span::Text(_) | Span::Strong(_) => None,
            Span::Value { field, .. } | Span::Money { field, .. } | Span::InWords { field, .. } => {
                Some(field)
            }
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match *self {
            Span::Text(_) | Span::Strong(_) => None,
            Span::Value { placeholder, .. }
            | Span::Money { placeholder, .. }
            | Span::InWords { placeholder, .. } => Some(placeholder),
        }
    }
}

pub const fn text(s: &'static str) -> Span {
    Span::Text(s)
}

pub const fn strong(s: &'static str) -> Span {
    Span::Strong(s)
}

pub const fn value(field: Field, placeholder: &'static str) -> Span {
    Span::Value { field, placeholder }
}

pub const fn money(field: Field, placeholder: &'static str) -> Span {
    Span::Money { field, placeholder }
}

pub const fn in_words(field: Field, placeholder: &'static str) -> Span {
    Span::InWords { field, placeholder }
}

/// 條款標題的編號方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numbering {
    /// `CLÁUSULA PRIMEIRA – DO OBJETO`
    Ordinal,
    /// `1. SERVIÇO`
    Arabic,
}

const ORDINALS: [&str; 10] = [
    "PRIMEIRA", "SEGUNDA", "TERCEIRA", "QUARTA", "QUINTA", "SEXTA", "SÉTIMA", "OITAVA", "NONA",
    "DÉCIMA",
];

impl Numbering {
    /// `index` starts at zero.
    pub fn heading(self, index: usize, title: &str) -> String {
        match self {
            Numbering::Ordinal => match ORDINALS.get(index) {
                Some(ordinal) => format!("CLÁUSULA {} – {}", ordinal, title),
                None => format!("CLÁUSULA {}ª – {}", index + 1, title),
            },
            Numbering::Arabic => format!("{}. {}", index + 1, title),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Clause {
    pub title: &'static str,
    pub paragraphs: &'static [&'static [Span]],
    /// Enumerated after the paragraphs as `a)`, `b)`, ...
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Signatory {
    pub role: &'static str,
    pub name: Field,
    pub tax_id: Option<Field>,
}

#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub kind: DocumentKind,
    pub title: &'static str,
    /// Role labels of the first and second party.
    pub parties: [&'static str; 2],
    pub numbering: Numbering,
    pub preamble: &'static [Span],
    pub clauses: &'static [Clause],
    pub closing: Option<&'static str>,
    pub signatories: &'static [Signatory],
    pub witnesses: usize,
}

impl Template {
    fn spans(&self) -> impl Iterator<Item = &Span> + '_ {
        self.preamble.iter().chain(
            self.clauses
                .iter()
                .flat_map(|clause| clause.paragraphs.iter().flat_map(|p| p.iter())),
        )
    }

    /// Fields read by this template, in order of first appearance.
    pub fn referenced_fields(&self) -> Vec<Field> {
        let mut fields = Vec::new();
        let signature_fields = self
            .signatories
            .iter()
            .flat_map(|s| std::iter::once(s.name).chain(s.tax_id));
        let all = self
            .spans()
            .filter_map(Span::field)
            .chain(std::iter::once(Field::City))
            .chain(signature_fields);
        for field in all {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        fields
    }

    /// Every placeholder this template can emit, deduplicated.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut placeholders = Vec::new();
        let signature_placeholders = self.signatories.iter().flat_map(|s| {
            std::iter::once(NAME_PLACEHOLDER).chain(s.tax_id.map(|_| TAX_ID_PLACEHOLDER))
        });
        let all = self
            .spans()
            .filter_map(Span::placeholder)
            .chain(std::iter::once(CITY_PLACEHOLDER))
            .chain(signature_placeholders);
        for placeholder in all {
            if !placeholders.contains(&placeholder) {
                placeholders.push(placeholder);
            }
        }
        placeholders
    }
}
