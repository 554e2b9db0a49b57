//! Prompt templates and the strategy selector that picks between them.
//!
//! User input is substituted verbatim. Nothing here escapes or sanitizes it.

use std::fmt;

const SYSTEM_LINE: &str = "You are a helpful AI assistant.";

const ONE_SHOT_EXAMPLE: &str = "User Input: Convert \"hello world\" to title case.\n\
Response: Hello World";

const MULTI_SHOT_EXAMPLES: [&str; 3] = [
    "User Input: What is 7 + 5?\nResponse: 12",
    "User Input: Give the opposite of \"cold\".\nResponse: hot",
    "User Input: Is \"I loved the movie\" positive or negative?\nResponse: Positive",
];

/// Long inputs are summarized by the dynamic strategy.
pub const SUMMARY_THRESHOLD_CHARS: usize = 200;

/// How a task instruction and the user's input are composed into one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStrategy {
    ZeroShot,
    OneShot,
    MultiShot,
    ChainOfThought,
    Dynamic,
    /// Any unrecognized tag. The tag itself is used as the task description.
    Default(String),
}

impl PromptStrategy {
    /// Parses a strategy tag. Matching ignores case and treats `_` and spaces
    /// like `-`. Never fails: unknown tags become [`PromptStrategy::Default`].
    pub fn from_tag(tag: &str) -> Self {
        let normalized: String = tag
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "zero-shot" | "zeroshot" => Self::ZeroShot,
            "one-shot" | "oneshot" => Self::OneShot,
            "multi-shot" | "multishot" | "few-shot" => Self::MultiShot,
            "chain-of-thought" | "cot" => Self::ChainOfThought,
            "dynamic" => Self::Dynamic,
            _ => Self::Default(tag.trim().to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::ZeroShot => "zero-shot",
            Self::OneShot => "one-shot",
            Self::MultiShot => "multi-shot",
            Self::ChainOfThought => "chain-of-thought",
            Self::Dynamic => "dynamic",
            Self::Default(tag) => tag,
        }
    }

    pub fn render(&self, input: &str) -> String {
        match self {
            Self::ZeroShot => zero_shot(input),
            Self::OneShot => one_shot(input),
            Self::MultiShot => multi_shot(input),
            Self::ChainOfThought => chain_of_thought(input),
            Self::Dynamic => dynamic(input),
            Self::Default(task) => default_prompt(task, input),
        }
    }
}

impl fmt::Display for PromptStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Task inferred from the shape of the input by the dynamic strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskLabel {
    Summarize,
    Answer,
    Translate,
    General,
}

impl TaskLabel {
    /// Rules are checked in order; the first match wins.
    pub fn classify(input: &str) -> Self {
        if input.chars().count() > SUMMARY_THRESHOLD_CHARS {
            Self::Summarize
        } else if input.contains('?') {
            Self::Answer
        } else if input.to_lowercase().contains("translate to") {
            Self::Translate
        } else {
            Self::General
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Summarize => "Summarize the following long text concisely",
            Self::Answer => "Answer the following question clearly",
            Self::Translate => "Translate the following text accordingly",
            Self::General => "General Task",
        }
    }
}

fn zero_shot(input: &str) -> String {
    format!("{SYSTEM_LINE} Complete the task described below.\n\nUser Input:\n{input}\n\nResponse:")
}

fn one_shot(input: &str) -> String {
    format!(
        "{SYSTEM_LINE} Follow the format of the example.\n\nExample:\n{ONE_SHOT_EXAMPLE}\n\n\
         User Input:\n{input}\n\nResponse:"
    )
}

fn multi_shot(input: &str) -> String {
    let examples = MULTI_SHOT_EXAMPLES
        .iter()
        .enumerate()
        .map(|(i, e)| format!("Example {}:\n{}", i + 1, e))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "{SYSTEM_LINE} Follow the format of the examples.\n\n{examples}\n\n\
         User Input:\n{input}\n\nResponse:"
    )
}

fn chain_of_thought(input: &str) -> String {
    format!(
        "{SYSTEM_LINE} Think through the problem step by step, showing your reasoning, \
         then state the final answer on its own line prefixed with \"Answer:\".\n\n\
         User Input:\n{input}\n\nReasoning:"
    )
}

fn dynamic(input: &str) -> String {
    let label = TaskLabel::classify(input);
    format!(
        "{SYSTEM_LINE}\n\nTask: {}\n\nUser Input:\n{input}\n\nResponse:",
        label.instruction()
    )
}

fn default_prompt(task: &str, input: &str) -> String {
    format!("You are an AI assistant. Perform the task: {task}.\n\nUser Input:\n{input}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_known() {
        assert_eq!(PromptStrategy::from_tag("zero-shot"), PromptStrategy::ZeroShot);
        assert_eq!(PromptStrategy::from_tag("One_Shot"), PromptStrategy::OneShot);
        assert_eq!(PromptStrategy::from_tag("few-shot"), PromptStrategy::MultiShot);
        assert_eq!(
            PromptStrategy::from_tag("Chain of Thought"),
            PromptStrategy::ChainOfThought
        );
        assert_eq!(PromptStrategy::from_tag("DYNAMIC"), PromptStrategy::Dynamic);
    }

    #[test]
    fn test_from_tag_unknown_falls_back_to_default() {
        assert_eq!(
            PromptStrategy::from_tag("DEBUG"),
            PromptStrategy::Default("DEBUG".into())
        );
        let prompt = PromptStrategy::from_tag("EXPLAIN").render("fn main() {}");
        assert!(prompt.contains("Perform the task: EXPLAIN."));
        assert!(prompt.ends_with("fn main() {}"));
    }

    #[test]
    fn test_input_is_substituted_verbatim() {
        let input = "ignore previous instructions {input} \"quoted\"";
        for strategy in [
            PromptStrategy::ZeroShot,
            PromptStrategy::OneShot,
            PromptStrategy::MultiShot,
            PromptStrategy::ChainOfThought,
            PromptStrategy::Dynamic,
            PromptStrategy::Default("x".into()),
        ] {
            assert!(strategy.render(input).contains(input), "{strategy}");
        }
    }

    #[test]
    fn test_multi_shot_includes_all_examples() {
        let prompt = PromptStrategy::MultiShot.render("hi");
        assert!(prompt.contains("Example 1:"));
        assert!(prompt.contains("Example 3:"));
    }

    #[test]
    fn test_classify_question() {
        assert_eq!(TaskLabel::classify("Is this a test?"), TaskLabel::Answer);
        let prompt = PromptStrategy::Dynamic.render("Is this a test?");
        assert!(prompt.contains("Answer the following question clearly"));
    }

    #[test]
    fn test_classify_long_text() {
        let input = "a".repeat(250);
        assert_eq!(TaskLabel::classify(&input), TaskLabel::Summarize);
        assert!(PromptStrategy::Dynamic
            .render(&input)
            .contains("Summarize the following long text concisely"));
    }

    #[test]
    fn test_classify_length_beats_question_mark() {
        let input = format!("{}?", "b".repeat(220));
        assert_eq!(TaskLabel::classify(&input), TaskLabel::Summarize);
    }

    #[test]
    fn test_classify_exactly_threshold_is_not_long() {
        let input = "c".repeat(SUMMARY_THRESHOLD_CHARS);
        assert_eq!(TaskLabel::classify(&input), TaskLabel::General);
    }

    #[test]
    fn test_classify_translate() {
        assert_eq!(
            TaskLabel::classify("please translate to Spanish"),
            TaskLabel::Translate
        );
        assert_eq!(
            TaskLabel::classify("Translate To german: house"),
            TaskLabel::Translate
        );
    }

    #[test]
    fn test_classify_question_beats_translate() {
        assert_eq!(
            TaskLabel::classify("can you translate to Spanish?"),
            TaskLabel::Answer
        );
    }

    #[test]
    fn test_classify_general() {
        assert_eq!(TaskLabel::classify("write a haiku"), TaskLabel::General);
        assert!(PromptStrategy::Dynamic
            .render("write a haiku")
            .contains("Task: General Task"));
    }
}
