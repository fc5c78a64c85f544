pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::DraftFile;
use crate::core::format::OutputFormat;
use crate::domain::model::{DocumentKind, Draft, Field};
#[cfg(feature = "cli")]
use crate::utils::date;
use crate::utils::error::{ContractError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "contract-gen")]
#[command(about = "Generate service, freelancer and NDA contracts from a draft")]
pub struct CliConfig {
    /// Path to a TOML draft file
    #[arg(short, long)]
    pub draft: Option<String>,

    /// Document kind: service, freelancer or nda
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Field assignment, e.g. --set client_name="ACME Ltda" (repeatable)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    pub assignments: Vec<String>,

    /// Output format: text, markdown, html or json
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Signing date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// List field keys and exit
    #[arg(long)]
    pub list_fields: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// 合併草稿檔與命令列覆蓋後的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub kind: DocumentKind,
    pub draft: Draft,
    pub format: OutputFormat,
    pub output: Option<String>,
    pub signing_date: NaiveDate,
}

/// `key=value`; the value may be empty and may contain `=`.
pub fn parse_assignment(input: &str) -> Result<(Field, String)> {
    let (key, value) =
        input
            .split_once('=')
            .ok_or_else(|| ContractError::InvalidAssignmentError {
                input: input.to_string(),
            })?;
    Ok((key.parse()?, value.to_string()))
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數優先於草稿檔
    pub fn resolve(&self) -> Result<GenerationRequest> {
        let file = match &self.draft {
            Some(path) => {
                tracing::info!("📁 Loading draft from: {}", path);
                let file = DraftFile::from_file(path)?;
                file.validate()?;
                file
            }
            None => DraftFile::default(),
        };

        let kind = match &self.kind {
            Some(kind) => kind.parse()?,
            None => file.kind,
        };

        let mut draft = file.draft()?;
        for assignment in &self.assignments {
            let (field, value) = parse_assignment(assignment)?;
            draft.set(field, value);
        }

        let format = match &self.format {
            Some(format) => format.parse()?,
            None => file.output_format().unwrap_or_default(),
        };

        let output = self
            .output
            .clone()
            .or_else(|| file.output_path().map(str::to_string));

        let signing_date = match &self.date {
            Some(date) => validation::validate_date("date", date)?,
            None => file.signing_date()?.unwrap_or_else(date::today),
        };

        Ok(GenerationRequest {
            kind,
            draft,
            format,
            output,
            signing_date,
        })
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.draft {
            validation::validate_path("draft", path)?;
        }
        if let Some(kind) = &self.kind {
            kind.parse::<DocumentKind>()?;
        }
        for assignment in &self.assignments {
            parse_assignment(assignment)?;
        }
        if let Some(format) = &self.format {
            format.parse::<OutputFormat>()?;
        }
        if let Some(path) = &self.output {
            validation::validate_path("output", path)?;
        }
        if let Some(date) = &self.date {
            validation::validate_date("date", date)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> CliConfig {
        CliConfig::parse_from(std::iter::once("contract-gen").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("price=5.000,00").unwrap(),
            (Field::Price, "5.000,00".to_string())
        );
        assert_eq!(
            parse_assignment("description=a=b").unwrap(),
            (Field::Description, "a=b".to_string())
        );
        assert_eq!(
            parse_assignment("venue=").unwrap(),
            (Field::Venue, String::new())
        );
        assert!(parse_assignment("price").is_err());
        assert!(parse_assignment("preco=1").is_err());
    }

    #[test]
    fn test_resolve_without_draft_file() {
        let config = config(&[
            "--kind",
            "nda",
            "--set",
            "client_name=ACME Ltda",
            "--format",
            "html",
            "--date",
            "2025-03-07",
        ]);
        assert!(config.validate().is_ok());

        let request = config.resolve().unwrap();
        assert_eq!(request.kind, DocumentKind::Nda);
        assert_eq!(request.draft.client_name, "ACME Ltda");
        assert_eq!(request.draft.penalty, "10.000,00");
        assert_eq!(request.format, OutputFormat::Html);
        assert_eq!(request.output, None);
        assert_eq!(
            request.signing_date,
            NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
        );
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        assert!(config(&["--kind", "lease"]).validate().is_err());
        assert!(config(&["--set", "price"]).validate().is_err());
        assert!(config(&["--format", "pdf"]).validate().is_err());
        assert!(config(&["--date", "tomorrow"]).validate().is_err());
    }
}
