use serde::{Deserialize, Serialize};

/// One row of the built-in evaluation dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvaluationSample {
    pub task: &'static str,
    pub input: &'static str,
    pub expected: &'static str,
}

/// Fixed dataset scored by the evaluation harness, in execution order.
///
/// `task` doubles as the prompting strategy tag; tags that are not a known
/// strategy are rendered with the default template as a task description.
pub const EVALUATION_SAMPLES: [EvaluationSample; 5] = [
    EvaluationSample {
        task: "zero-shot",
        input: "Classify the sentiment of this review as Positive or Negative: \
                \"The battery lasts all day and the screen is gorgeous.\"",
        expected: "Positive",
    },
    EvaluationSample {
        task: "one-shot",
        input: "What is the capital city of Japan?",
        expected: "Tokyo",
    },
    EvaluationSample {
        task: "chain-of-thought",
        input: "A train travels 90 km in 1.5 hours. What is its average speed in km/h?",
        expected: "60 km/h",
    },
    EvaluationSample {
        task: "dynamic",
        input: "Please translate to French: Good morning",
        expected: "Bonjour",
    },
    EvaluationSample {
        task: "Summarize in one sentence",
        input: "Rust is a systems programming language focused on safety, speed and \
                concurrency. It achieves memory safety without a garbage collector by \
                using an ownership model checked at compile time.",
        expected: "Rust is a fast, memory-safe systems language that uses compile-time \
                   ownership instead of a garbage collector.",
    },
];

/// Outcome of asking the judge model to compare a candidate with the expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(rename = "match")]
    pub is_match: bool,
    pub reason: String,
}

impl Verdict {
    pub const INVALID_RESPONSE: &'static str = "Invalid judge response";

    /// Verdict substituted when the judge reply cannot be parsed.
    pub fn invalid() -> Self {
        Self {
            is_match: false,
            reason: Self::INVALID_RESPONSE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub task: String,
    pub input: String,
    pub expected: String,
    pub model_out: String,
    #[serde(rename = "match")]
    pub is_match: bool,
    pub reason: String,
}

impl EvaluationResult {
    pub fn new(sample: &EvaluationSample, model_out: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            task: sample.task.to_string(),
            input: sample.input.to_string(),
            expected: sample.expected.to_string(),
            model_out: model_out.into(),
            is_match: verdict.is_match,
            reason: verdict.reason,
        }
    }
}
