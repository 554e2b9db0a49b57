mod embedding;
mod evaluation;
mod generation;
mod vector_record;

pub use embedding::Embedding;
pub use evaluation::{EvaluationResult, EvaluationSample, Verdict, EVALUATION_SAMPLES};
pub use generation::{Generation, GenerationConfig, PersonInfo};
pub use vector_record::{ScoredRecord, VectorRecord};
