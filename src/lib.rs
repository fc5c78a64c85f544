pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, parse_assignment, toml_config::DraftFile, GenerationRequest};
#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::form::{FormState, Mode};
pub use crate::core::format::OutputFormat;
pub use crate::core::renderer::{render, render_on, Document};
pub use crate::domain::model::{DocumentKind, Draft, Field};
pub use crate::utils::error::{ContractError, Result};
