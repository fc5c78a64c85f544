use crate::core::renderer::{Block, Document, Paragraph, Run, SignatureBlock};
use crate::utils::error::{ContractError, Result};
use minijinja::value::{Value, ViaDeserialize};
use minijinja::{context, AutoEscape, Environment, UndefinedBehavior};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::str::FromStr;

/// 與原網頁列印樣式相同：列印時只顯示合約本身
const PRINT_STYLESHEET: &str = r#"body { font-family: 'Times New Roman', serif; max-width: 56rem; margin: 0 auto; padding: 3rem; }
#contract-preview { text-align: justify; line-height: 1.6; }
#contract-preview h1 { text-align: center; font-size: 1.5rem; margin-bottom: 2rem; }
#contract-preview h2 { font-size: 1rem; margin-top: 1.5rem; margin-bottom: 0.5rem; }
.place-date { text-align: center; margin-top: 2rem; }
.signatures { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; margin-top: 4rem; }
.signature { text-align: center; border-top: 1px solid #000; padding-top: 0.5rem; }
.signature p { margin: 0; }
@media print {
  body * { visibility: hidden; }
  #contract-preview, #contract-preview * { visibility: visible; }
  #contract-preview { position: absolute; left: 0; top: 0; width: 100%; padding: 40px; font-size: 12pt; line-height: 1.6; }
  .no-print { display: none !important; }
}"#;

const SIGNATURE_RULE: &str = "______________________________";

const MARKDOWN_SPECIAL: &[char] = &['\\', '*', '_', '#', '`', '[', ']'];

const PRINT_PAGE_NAME: &str = "contract.html";

const PRINT_PAGE: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>{{ document.title }}</title>
<style>
{{ stylesheet }}
</style>
</head>
<body>
<div id="contract-preview">
<h1>{{ document.title }}</h1>
{% for block in document.blocks %}
{% if block.type == "paragraph" %}
<p>{{ block|runs }}</p>
{% elif block.type == "clause" %}
<div class="clause">
<h2>{{ block.heading }}</h2>
{% for paragraph in block.paragraphs %}
<p>{{ paragraph|runs }}</p>
{% endfor %}
{% for item in block.items %}
<p>{{ item.marker }} {{ item.text }}</p>
{% endfor %}
</div>
{% elif block.type == "place_and_date" %}
<p class="place-date">{{ block.text }}</p>
{% elif block.type == "signatures" %}
<div class="signatures">
{% for signature in block.blocks %}
<div class="signature">
<p><strong>{{ signature.role }}</strong></p>
{% for line in signature.lines %}
<p>{{ line }}</p>
{% endfor %}
</div>
{% endfor %}
</div>
{% endif %}
{% endfor %}
</div>
</body>
</html>
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Html,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Markdown => "md",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }

    pub fn format(self, document: &Document) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(to_text(document)),
            OutputFormat::Markdown => Ok(to_markdown(document)),
            OutputFormat::Html => to_html(document),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ContractError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ContractError::InvalidConfigValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: "Valid formats: text, markdown, html, json".to_string(),
            }),
        }
    }
}

pub fn to_text(document: &Document) -> String {
    let mut out = String::new();
    out.push_str(&document.title);
    out.push('\n');

    for block in &document.blocks {
        out.push('\n');
        match block {
            Block::Paragraph(paragraph) => {
                out.push_str(&paragraph.text());
                out.push('\n');
            }
            Block::Clause {
                heading,
                paragraphs,
                items,
            } => {
                out.push_str(heading);
                out.push('\n');
                for paragraph in paragraphs {
                    out.push_str(&paragraph.text());
                    out.push('\n');
                }
                for item in items {
                    let _ = writeln!(out, "{} {}", item.marker, item.text);
                }
            }
            Block::PlaceAndDate { text } => {
                out.push_str(text);
                out.push('\n');
            }
            Block::Signatures { blocks } => {
                for (i, signature) in blocks.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    write_text_signature(&mut out, signature);
                }
            }
        }
    }

    out
}

fn write_text_signature(out: &mut String, signature: &SignatureBlock) {
    out.push_str(SIGNATURE_RULE);
    out.push('\n');
    out.push_str(&signature.role);
    out.push('\n');
    for line in &signature.lines {
        out.push_str(line);
        out.push('\n');
    }
}

pub fn to_markdown(document: &Document) -> String {
    let mut out = format!("# {}\n", document.title);

    for block in &document.blocks {
        out.push('\n');
        match block {
            Block::Paragraph(paragraph) => {
                out.push_str(&markdown_paragraph(paragraph));
                out.push('\n');
            }
            Block::Clause {
                heading,
                paragraphs,
                items,
            } => {
                let _ = writeln!(out, "## {}", heading);
                for paragraph in paragraphs {
                    out.push('\n');
                    out.push_str(&markdown_paragraph(paragraph));
                    out.push('\n');
                }
                if !items.is_empty() {
                    out.push('\n');
                }
                for item in items {
                    let _ = writeln!(out, "- {} {}", item.marker, item.text);
                }
            }
            Block::PlaceAndDate { text } => {
                out.push_str(&markdown_text(text, false));
                out.push('\n');
            }
            Block::Signatures { blocks } => {
                for (i, signature) in blocks.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    let _ = writeln!(out, "{}  ", SIGNATURE_RULE);
                    let _ = writeln!(out, "**{}**  ", signature.role);
                    for line in &signature.lines {
                        let _ = writeln!(out, "{}  ", markdown_text(line, false));
                    }
                }
            }
        }
    }

    out
}

fn markdown_paragraph(paragraph: &Paragraph) -> String {
    paragraph.runs.iter().map(markdown_run).collect()
}

fn markdown_run(run: &Run) -> String {
    markdown_text(&run.text, run.strong)
}

/// Line breaks inside a value become backslash hard breaks, so a multi-line
/// value stays inside its paragraph and keeps its emphasis on every line.
fn markdown_text(text: &str, strong: bool) -> String {
    text.split('\n')
        .map(|line| {
            let escaped = escape_markdown(line);
            if strong {
                strong_markdown(&escaped)
            } else {
                escaped
            }
        })
        .collect::<Vec<_>>()
        .join("\\\n")
}

/// `**` only binds when it touches non-space text, so surrounding spaces stay outside.
fn strong_markdown(text: &str) -> String {
    let core = text.trim();
    if core.is_empty() {
        return text.to_string();
    }
    let leading = &text[..text.len() - text.trim_start().len()];
    let trailing = &text[text.trim_end().len()..];
    format!("{}**{}**{}", leading, core, trailing)
}

fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub fn to_html(document: &Document) -> Result<String> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("runs", html_runs);
    env.add_template(PRINT_PAGE_NAME, PRINT_PAGE)?;

    let page = env.get_template(PRINT_PAGE_NAME)?.render(context! {
        document => document,
        stylesheet => Value::from_safe_string(PRINT_STYLESHEET.to_string()),
    })?;
    Ok(page)
}

/// 段落內的粗體標記在這裡組好，其餘交給模板的自動跳脫
fn html_runs(paragraph: ViaDeserialize<Paragraph>) -> Value {
    let html: String = paragraph
        .runs
        .iter()
        .map(|run| {
            let text = html_escape::encode_text(&run.text);
            if run.strong {
                format!("<strong>{}</strong>", text)
            } else {
                text.into_owned()
            }
        })
        .collect();
    Value::from_safe_string(html)
}
