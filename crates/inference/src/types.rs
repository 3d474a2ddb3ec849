use serde::{Deserialize, Serialize};

/// Text classification request (Inference API shape)
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyRequest {
    /// Input text
    pub inputs: String,
}

/// One candidate label with its score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelScore {
    /// Model label (e.g., "POSITIVE", "NEGATIVE")
    pub label: String,

    /// Score in [0, 1]
    pub score: f32,
}

/// Summarization request
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeRequest {
    /// Input text
    pub inputs: String,

    /// Generation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<SummarizeParameters>,
}

/// Summarization generation parameters
#[derive(Debug, Clone, Serialize, Default)]
pub struct SummarizeParameters {
    /// Minimum summary length in words
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,

    /// Maximum summary length in words
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    /// Whether to sample during generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_sample: Option<bool>,
}

/// One summarization result (the API returns a one-element array)
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeResponse {
    /// Generated summary text
    pub summary_text: String,
}

/// Error body returned by the Inference API on failure
#[derive(Debug, Deserialize)]
pub struct ApiError {
    /// Human-readable message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_request_serialization() {
        let request = SummarizeRequest {
            inputs: "Some article".to_string(),
            parameters: Some(SummarizeParameters {
                min_length: Some(30),
                max_length: Some(60),
                do_sample: Some(false),
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["inputs"], "Some article");
        assert_eq!(json["parameters"]["min_length"], 30);
        assert_eq!(json["parameters"]["max_length"], 60);
        assert_eq!(json["parameters"]["do_sample"], false);
    }

    #[test]
    fn test_summarize_request_skips_empty_parameters() {
        let request = SummarizeRequest {
            inputs: "text".to_string(),
            parameters: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("parameters").is_none());
    }

    #[test]
    fn test_label_score_deserialization() {
        let raw = r#"[[{"label":"POSITIVE","score":0.9998},{"label":"NEGATIVE","score":0.0002}]]"#;
        let batches: Vec<Vec<LabelScore>> = serde_json::from_str(raw).unwrap();
        assert_eq!(batches[0][0].label, "POSITIVE");
        assert!(batches[0][0].score > 0.99);
    }
}
