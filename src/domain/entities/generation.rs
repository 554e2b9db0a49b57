use serde::{Deserialize, Serialize};

/// Sampling parameters forwarded to the completion provider.
///
/// Unset fields leave the provider default in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stop_sequences: Vec<String>,
}

impl GenerationConfig {
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Fills every unset field of `self` from `base`.
    pub fn merged_over(mut self, base: &GenerationConfig) -> Self {
        self.temperature = self.temperature.or(base.temperature);
        self.top_p = self.top_p.or(base.top_p);
        self.top_k = self.top_k.or(base.top_k);
        self.max_output_tokens = self.max_output_tokens.or(base.max_output_tokens);
        if self.stop_sequences.is_empty() {
            self.stop_sequences = base.stop_sequences.clone();
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<usize>,
}

/// Target shape of the structured extraction endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInfo {
    pub name: String,
    pub age: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_explicit_values() {
        let base = GenerationConfig {
            temperature: Some(0.7),
            top_k: Some(40),
            stop_sequences: vec!["END".into()],
            ..Default::default()
        };
        let merged = GenerationConfig::default()
            .with_temperature(0.1)
            .merged_over(&base);

        assert_eq!(merged.temperature, Some(0.1));
        assert_eq!(merged.top_k, Some(40));
        assert_eq!(merged.stop_sequences, vec!["END".to_string()]);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let cfg: GenerationConfig =
            serde_json::from_str(r#"{"topP":0.9,"stopSequences":["\n\n"]}"#).unwrap();
        assert_eq!(cfg.top_p, Some(0.9));
        assert_eq!(cfg.stop_sequences.len(), 1);
        assert!(cfg.temperature.is_none());
    }
}
