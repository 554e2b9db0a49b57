use futures::{stream, StreamExt, TryStreamExt};
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;

use crate::domain::{
    parse_structured, ports::LlmService, DomainError, EvaluationResult, EvaluationSample,
    GenerationConfig, PromptStrategy, Verdict, EVALUATION_SAMPLES,
};

const OUTPUT_INSTRUCTION: &str =
    "Respond only with a JSON object of the form {\"output\": \"<your final answer>\"}.";

#[derive(Deserialize)]
struct CandidateOutput {
    output: serde_json::Value,
}

impl CandidateOutput {
    fn into_text(self) -> String {
        match self.output {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        }
    }
}

/// Scores model answers against expected answers using the model as judge.
pub struct EvaluationService {
    llm: Arc<dyn LlmService>,
    samples: Vec<EvaluationSample>,
    config: GenerationConfig,
}

impl EvaluationService {
    pub fn new(llm: Arc<dyn LlmService>, config: GenerationConfig) -> Self {
        Self {
            llm,
            samples: EVALUATION_SAMPLES.to_vec(),
            config,
        }
    }

    pub fn with_samples(mut self, samples: Vec<EvaluationSample>) -> Self {
        self.samples = samples;
        self
    }

    /// Runs every sample in order, one provider call at a time. The first
    /// provider error aborts the run.
    #[instrument(skip(self), fields(samples = self.samples.len()))]
    pub async fn run(&self) -> Result<Vec<EvaluationResult>, DomainError> {
        let results: Vec<EvaluationResult> = stream::iter(self.samples.iter())
            .then(|sample| self.evaluate_sample(sample))
            .try_collect()
            .await?;

        let passed = results.iter().filter(|r| r.is_match).count();
        tracing::info!(passed, total = results.len(), "evaluation finished");
        Ok(results)
    }

    #[instrument(skip(self, sample), fields(task = sample.task))]
    async fn evaluate_sample(
        &self,
        sample: &EvaluationSample,
    ) -> Result<EvaluationResult, DomainError> {
        let prompt = format!(
            "{}\n\n{OUTPUT_INSTRUCTION}",
            PromptStrategy::from_tag(sample.task).render(sample.input)
        );
        let reply = self.llm.complete(&prompt, &self.config).await?;

        let model_out = match parse_structured::<CandidateOutput>(&reply) {
            Ok(candidate) => candidate.into_text(),
            Err(fallback) => {
                tracing::debug!(error = %fallback.error, "candidate was not structured, using raw text");
                fallback.text().to_string()
            }
        };

        let judge_config = GenerationConfig::default()
            .with_temperature(0.0)
            .merged_over(&self.config);
        let judgement = self
            .llm
            .complete(&judge_prompt(sample.expected, &model_out), &judge_config)
            .await?;

        let verdict = parse_structured::<Verdict>(&judgement).unwrap_or_else(|fallback| {
            tracing::warn!(raw = %fallback.text(), "judge reply was not valid JSON");
            Verdict::invalid()
        });

        tracing::debug!(is_match = verdict.is_match, "sample judged");
        Ok(EvaluationResult::new(sample, model_out, verdict))
    }
}

fn judge_prompt(expected: &str, candidate: &str) -> String {
    format!(
        "You are a strict evaluator. Decide whether the model output conveys the same answer \
         as the expected output. Minor differences in wording, casing or punctuation do not \
         matter.\n\n\
         Expected output:\n{expected}\n\n\
         Model output:\n{candidate}\n\n\
         Respond only with a JSON object of the form \
         {{\"match\": true or false, \"reason\": \"<one sentence>\"}}."
    )
}
