pub mod clauses;
pub mod command;
pub mod form;
pub mod format;
pub mod renderer;
pub mod template;

pub use crate::domain::model::{DocumentKind, Draft, Field};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
