pub mod entities;
pub mod errors;
pub mod ports;
pub mod prompt;
pub mod similarity;
pub mod structured;

pub use entities::*;
pub use errors::{DomainError, Result};
pub use prompt::{PromptStrategy, TaskLabel};
pub use structured::{parse_structured, RawFallback};
