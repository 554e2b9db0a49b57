//! Best-effort decoding of JSON embedded in model replies.

use serde::de::DeserializeOwned;
use std::fmt;

/// The reply could not be decoded; carries the original text for fallback use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFallback {
    pub raw: String,
    pub error: String,
}

impl RawFallback {
    /// The trimmed raw reply.
    pub fn text(&self) -> &str {
        self.raw.trim()
    }
}

impl fmt::Display for RawFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unparseable model output: {}", self.error)
    }
}

impl std::error::Error for RawFallback {}

/// Decodes `text` as `T`, tolerating Markdown code fences and prose around a
/// single JSON object.
pub fn parse_structured<T: DeserializeOwned>(text: &str) -> Result<T, RawFallback> {
    let body = strip_code_fence(text.trim());

    let first_error = match serde_json::from_str::<T>(body) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    if let Some(object) = outermost_object(body) {
        if let Ok(value) = serde_json::from_str::<T>(object) {
            return Ok(value);
        }
    }

    Err(RawFallback {
        raw: text.to_string(),
        error: first_error.to_string(),
    })
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the language tag line, e.g. ```json
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Output {
        output: String,
    }

    #[test]
    fn test_plain_json() {
        let parsed: Output = parse_structured(r#"{"output": "Tokyo"}"#).unwrap();
        assert_eq!(parsed.output, "Tokyo");
    }

    #[test]
    fn test_fenced_json() {
        let reply = "```json\n{\"output\": \"Bonjour\"}\n```";
        let parsed: Output = parse_structured(reply).unwrap();
        assert_eq!(parsed.output, "Bonjour");
    }

    #[test]
    fn test_json_surrounded_by_prose() {
        let reply = "Sure! Here it is: {\"output\": \"60 km/h\"} Hope that helps.";
        let parsed: Output = parse_structured(reply).unwrap();
        assert_eq!(parsed.output, "60 km/h");
    }

    #[test]
    fn test_fallback_keeps_raw_text() {
        let err = parse_structured::<Output>("  just text  ").unwrap_err();
        assert_eq!(err.text(), "just text");
        assert!(!err.error.is_empty());
    }

    #[test]
    fn test_wrong_shape_falls_back() {
        assert!(parse_structured::<Output>(r#"{"answer": 1}"#).is_err());
    }
}
