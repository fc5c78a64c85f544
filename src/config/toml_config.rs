use crate::core::form::FormState;
use crate::core::format::OutputFormat;
use crate::domain::model::{DocumentKind, Draft, Field};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

/// 草稿檔：文件種類、欄位值與輸出設定
///
/// ```toml
/// kind = "nda"
///
/// [fields]
/// client_name = "ACME Ltda"
/// penalty = "50.000,00"
///
/// [output]
/// format = "html"
/// path = "nda.html"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DraftFile {
    #[serde(default)]
    pub kind: DocumentKind,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
    /// Signing date as `YYYY-MM-DD`; today when absent.
    pub date: Option<String>,
}

impl DraftFile {
    /// 從 TOML 檔案載入草稿
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Builds a draft starting from the business defaults.
    pub fn draft(&self) -> Result<Draft> {
        let mut draft = Draft::default();
        for (key, value) in &self.fields {
            let field: Field = key.parse()?;
            draft.set(field, value.as_str());
        }
        Ok(draft)
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn signing_date(&self) -> Result<Option<NaiveDate>> {
        self.output
            .as_ref()
            .and_then(|o| o.date.as_deref())
            .map(|date| validation::validate_date("output.date", date))
            .transpose()
    }

    /// Validated form state for the interactive shell; `[output].date` fixes the signing date.
    pub fn form_state(&self) -> Result<FormState> {
        self.validate()?;
        let state = FormState::with_draft(self.kind, self.draft()?);
        Ok(match self.signing_date()? {
            Some(date) => state.with_signing_date(date),
            None => state,
        })
    }
}

impl Validate for DraftFile {
    fn validate(&self) -> Result<()> {
        validation::validate_field_keys(self.fields.keys().map(String::as_str))?;

        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }

        self.signing_date()?;
        Ok(())
    }
}

/// 替換環境變數 (例如 ${CLIENT_NAME})；未設定的變數保持原樣
pub fn substitute_env_vars(content: &str) -> String {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
    });

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ContractError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_draft_file() {
        let toml_content = r#"
kind = "freelancer"

[fields]
client_name = "Estúdio Aurora"
price = "5.000,00"

[output]
format = "markdown"
path = "freela.md"
date = "2025-03-07"
"#;

        let file = DraftFile::from_toml_str(toml_content).unwrap();
        assert_eq!(file.kind, DocumentKind::Freelancer);
        assert_eq!(file.output_format(), Some(OutputFormat::Markdown));
        assert_eq!(file.output_path(), Some("freela.md"));
        assert_eq!(
            file.signing_date().unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 7)
        );

        let draft = file.draft().unwrap();
        assert_eq!(draft.client_name, "Estúdio Aurora");
        assert_eq!(draft.price, "5.000,00");
        assert_eq!(draft.delivery_term, "30 dias");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = DraftFile::from_toml_str("").unwrap();
        assert_eq!(file.kind, DocumentKind::Service);
        assert_eq!(file.draft().unwrap(), Draft::default());
        assert!(file.validate().is_ok());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let file = DraftFile::from_toml_str("[fields]\nvalor = \"1\"").unwrap();
        assert!(matches!(
            file.validate(),
            Err(ContractError::UnknownFieldError { .. })
        ));
        assert!(file.draft().is_err());
    }

    #[test]
    fn test_unknown_kind_is_a_parse_error() {
        let result = DraftFile::from_toml_str("kind = \"lease\"");
        assert!(matches!(result, Err(ContractError::TomlParseError(_))));
    }

    #[test]
    fn test_bad_date_fails_validation() {
        let file = DraftFile::from_toml_str("[output]\ndate = \"07/03/2025\"").unwrap();
        assert!(file.validate().is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CONTRACT_GEN_TEST_CITY", "Curitiba - PR");

        let file =
            DraftFile::from_toml_str("[fields]\ncity = \"${CONTRACT_GEN_TEST_CITY}\"\nvenue = \"${CONTRACT_GEN_UNSET_VAR}\"")
                .unwrap();
        let draft = file.draft().unwrap();
        assert_eq!(draft.city, "Curitiba - PR");
        assert_eq!(draft.venue, "${CONTRACT_GEN_UNSET_VAR}");

        std::env::remove_var("CONTRACT_GEN_TEST_CITY");
    }

    #[test]
    fn test_draft_file_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"kind = \"nda\"\n[fields]\npenalty = \"50.000,00\"\n")
            .unwrap();

        let file = DraftFile::from_file(temp_file.path()).unwrap();
        assert_eq!(file.kind, DocumentKind::Nda);
        assert_eq!(file.draft().unwrap().penalty, "50.000,00");
    }
}
