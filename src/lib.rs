//! Prompting-strategy playground backed by Gemini: templated completions,
//! an in-memory embedding search and a model-as-judge evaluation run.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
