mod evaluation;
mod prompt;
mod vector;

pub use evaluation::EvaluationService;
pub use prompt::PromptService;
pub use vector::VectorService;
