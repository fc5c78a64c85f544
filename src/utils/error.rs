use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] minijinja::Error),

    #[error("Unknown field '{name}'")]
    UnknownFieldError { name: String },

    #[error("Unknown document kind '{value}'")]
    UnknownKindError { value: String },

    #[error("Invalid field assignment '{input}': expected key=value")]
    InvalidAssignmentError { input: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::UnknownFieldError { .. }
            | ContractError::UnknownKindError { .. }
            | ContractError::InvalidAssignmentError { .. } => ErrorCategory::Input,
            ContractError::TomlParseError(_)
            | ContractError::InvalidConfigValueError { .. }
            | ContractError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ContractError::IoError(_)
            | ContractError::SerializationError(_)
            | ContractError::TemplateError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 程序結束碼：輸入/設定錯誤為 1，系統錯誤為 3
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium | ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ContractError::IoError(e) => format!("Could not read or write a file: {}", e),
            ContractError::TomlParseError(e) => format!("The draft file is not valid TOML: {}", e),
            ContractError::SerializationError(e) => {
                format!("Could not serialize the document: {}", e)
            }
            ContractError::TemplateError(e) => format!("Could not build the HTML page: {}", e),
            ContractError::UnknownFieldError { name } => {
                format!("'{}' is not a contract field", name)
            }
            ContractError::UnknownKindError { value } => {
                format!("'{}' is not a document kind", value)
            }
            ContractError::InvalidAssignmentError { input } => {
                format!("Could not understand '{}'", input)
            }
            ContractError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid '{}': {}", field, reason)
            }
            ContractError::MissingConfigError { field } => {
                format!("'{}' must be provided", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ContractError::IoError(_) => "Check that the path exists and is writable",
            ContractError::TomlParseError(_) => {
                "Check the draft file syntax; fields go under a [fields] table"
            }
            ContractError::SerializationError(_) | ContractError::TemplateError(_) => {
                "Try another output format"
            }
            ContractError::UnknownFieldError { .. } => {
                "Run with --list-fields to see the accepted field keys"
            }
            ContractError::UnknownKindError { .. } => "Use one of: service, freelancer, nda",
            ContractError::InvalidAssignmentError { .. } => {
                "Write assignments as key=value, e.g. --set price=5.000,00"
            }
            ContractError::InvalidConfigValueError { .. } => {
                "Fix the value and run the command again"
            }
            ContractError::MissingConfigError { .. } => "Add the missing setting",
        }
    }
}

pub type Result<T> = std::result::Result<T, ContractError>;
