use crate::core::clauses::template_for;
use crate::core::template::{
    Span, Template, CITY_PLACEHOLDER, NAME_PLACEHOLDER, TAX_ID_PLACEHOLDER,
};
use crate::domain::model::{DocumentKind, Draft, Field};
use crate::utils::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const BLANK_LINE: &str = "______________________";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub strong: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub marker: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureBlock {
    pub role: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph(Paragraph),
    Clause {
        heading: String,
        paragraphs: Vec<Paragraph>,
        items: Vec<Item>,
    },
    PlaceAndDate {
        text: String,
    },
    Signatures {
        blocks: Vec<SignatureBlock>,
    },
}

/// 已填入欄位值的文件，可交給任何輸出格式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub kind: DocumentKind,
    pub title: String,
    pub blocks: Vec<Block>,
}

/// Renders with today's date as the signing date.
pub fn render(kind: DocumentKind, draft: &Draft) -> Document {
    render_on(kind, draft, date::today())
}

pub fn render_on(kind: DocumentKind, draft: &Draft, signing_date: NaiveDate) -> Document {
    let template = template_for(kind);
    tracing::debug!("Rendering {} document dated {}", kind, signing_date);
    Renderer::new(draft, signing_date).render(template)
}

struct Renderer<'a> {
    draft: &'a Draft,
    signing_date: NaiveDate,
}

impl<'a> Renderer<'a> {
    fn new(draft: &'a Draft, signing_date: NaiveDate) -> Self {
        Self {
            draft,
            signing_date,
        }
    }

    fn render(&self, template: &Template) -> Document {
        let mut blocks = vec![Block::Paragraph(self.paragraph(template.preamble))];

        for (index, clause) in template.clauses.iter().enumerate() {
            blocks.push(Block::Clause {
                heading: template.numbering.heading(index, clause.title),
                paragraphs: clause
                    .paragraphs
                    .iter()
                    .map(|spans| self.paragraph(spans))
                    .collect(),
                items: clause
                    .items
                    .iter()
                    .enumerate()
                    .map(|(i, text)| Item {
                        marker: item_marker(i),
                        text: (*text).to_string(),
                    })
                    .collect(),
            });
        }

        if let Some(closing) = template.closing {
            blocks.push(Block::Paragraph(Paragraph {
                runs: vec![Run {
                    text: closing.to_string(),
                    strong: false,
                }],
            }));
        }

        blocks.push(Block::PlaceAndDate {
            text: format!(
                "{}, {}.",
                self.fill(Field::City, CITY_PLACEHOLDER),
                date::format_pt_br(self.signing_date)
            ),
        });

        blocks.push(Block::Signatures {
            blocks: template
                .signatories
                .iter()
                .map(|signatory| {
                    let mut lines = vec![self.fill(signatory.name, NAME_PLACEHOLDER).to_string()];
                    if let Some(tax_id) = signatory.tax_id {
                        lines.push(format!(
                            "CPF/CNPJ: {}",
                            self.fill(tax_id, TAX_ID_PLACEHOLDER)
                        ));
                    }
                    SignatureBlock {
                        role: signatory.role.to_string(),
                        lines,
                    }
                })
                .collect(),
        });

        if template.witnesses > 0 {
            blocks.push(Block::Signatures {
                blocks: (1..=template.witnesses)
                    .map(|n| SignatureBlock {
                        role: format!("TESTEMUNHA {}", n),
                        lines: vec![format!("Nome: {}", BLANK_LINE), format!("CPF: {}", BLANK_LINE)],
                    })
                    .collect(),
            });
        }

        Document {
            kind: template.kind,
            title: template.title.to_string(),
            blocks,
        }
    }

    /// 欄位為空字串時使用佔位字串，否則原樣輸出
    fn fill(&self, field: Field, placeholder: &'static str) -> &'a str {
        let value = self.draft.get(field);
        if value.is_empty() {
            placeholder
        } else {
            value
        }
    }

    fn paragraph(&self, spans: &[Span]) -> Paragraph {
        Paragraph {
            runs: spans.iter().map(|span| self.run(span)).collect(),
        }
    }

    fn run(&self, span: &Span) -> Run {
        match *span {
            Span::Text(text) => Run {
                text: text.to_string(),
                strong: false,
            },
            Span::Strong(text) => Run {
                text: text.to_string(),
                strong: true,
            },
            Span::Value { field, placeholder } => Run {
                text: self.fill(field, placeholder).to_string(),
                strong: true,
            },
            Span::Money { field, placeholder } => Run {
                text: format!("R$ {}", self.fill(field, placeholder)),
                strong: true,
            },
            Span::InWords { field, placeholder } => {
                let value = self.draft.get(field);
                let text = if value.is_empty() {
                    placeholder.to_string()
                } else {
                    format!("{} reais", value)
                };
                Run {
                    text,
                    strong: false,
                }
            }
        }
    }
}

fn item_marker(index: usize) -> String {
    let letter = (b'a' + (index % 26) as u8) as char;
    format!("{})", letter)
}
