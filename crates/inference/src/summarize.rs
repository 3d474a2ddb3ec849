use async_trait::async_trait;
use newslens_common::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::client::HfClient;
use crate::traits::TextSummarizer;
use crate::types::SummarizeParameters;

// Rough words-per-sentence multipliers used to size summaries
const MIN_WORDS_PER_SENTENCE: u32 = 10;
const MAX_WORDS_PER_SENTENCE: u32 = 20;

/// Word-count bounds for a summary of roughly `sentence_count` sentences.
///
/// A linear heuristic, not sentence-boundary aware. Saturates at
/// `u32::MAX` since the wire type does not bound the count.
pub fn length_bounds(sentence_count: u32) -> (u32, u32) {
    (
        sentence_count.saturating_mul(MIN_WORDS_PER_SENTENCE),
        sentence_count.saturating_mul(MAX_WORDS_PER_SENTENCE),
    )
}

/// Summarizer bound to a specific model
#[derive(Debug, Clone)]
pub struct NewsSummarizer {
    client: HfClient,
    model: String,
}

impl NewsSummarizer {
    /// Create new summarizer
    pub fn new(client: HfClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl TextSummarizer for NewsSummarizer {
    async fn summarize(&self, text: &str, sentence_count: u32) -> Result<String> {
        let (min_length, max_length) = length_bounds(sentence_count);

        info!(
            "Starting summarization - Text length: {} chars, Bounds: {}..{} words",
            text.len(),
            min_length,
            max_length
        );

        let parameters = SummarizeParameters {
            min_length: Some(min_length),
            max_length: Some(max_length),
            // Deterministic output for fixed inputs and model weights
            do_sample: Some(false),
        };

        self.client.summarize(&self.model, text, parameters).await
    }
}

/// One summarization request read from stdin
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    /// Text to summarize
    #[serde(default)]
    pub text: String,

    /// Target summary length in sentences
    #[serde(default = "default_sentence_count", alias = "sentenceCount")]
    pub sentence_count: u32,
}

fn default_sentence_count() -> u32 {
    3
}

impl Default for BatchRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            sentence_count: default_sentence_count(),
        }
    }
}

/// Result written to stdout: a summary or an error object, never both
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchOutcome {
    Summary { summary: String },
    Error { error: String },
}

/// Run one summarization request.
///
/// Any failure of the summarization capability is converted into an
/// error outcome instead of propagating.
pub async fn run_batch(summarizer: &dyn TextSummarizer, request: BatchRequest) -> BatchOutcome {
    let sentence_count = request.sentence_count.max(1);

    match summarizer.summarize(&request.text, sentence_count).await {
        Ok(summary) => BatchOutcome::Summary { summary },
        Err(e) => {
            warn!("Summarization failed: {}", e);
            BatchOutcome::Error {
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newslens_common::NewsLensError;
    use std::sync::Mutex;

    struct EchoSummarizer {
        seen: Mutex<Vec<(String, u32)>>,
    }

    impl EchoSummarizer {
        fn new() -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextSummarizer for EchoSummarizer {
        async fn summarize(&self, text: &str, sentence_count: u32) -> Result<String> {
            self.seen
                .lock()
                .unwrap()
                .push((text.to_string(), sentence_count));
            Ok(format!("summary of {} chars", text.len()))
        }
    }

    struct FailingSummarizer;

    #[async_trait]
    impl TextSummarizer for FailingSummarizer {
        async fn summarize(&self, _text: &str, _sentence_count: u32) -> Result<String> {
            Err(NewsLensError::inference("index out of range in self"))
        }
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(length_bounds(3), (30, 60));
        assert_eq!(length_bounds(1), (10, 20));
        assert_eq!(length_bounds(5), (50, 100));
    }

    #[test]
    fn test_length_bounds_saturates_on_huge_counts() {
        let (min_length, max_length) = length_bounds(u32::MAX);
        assert_eq!(max_length, u32::MAX);
        assert!(min_length <= max_length);

        // Largest count whose upper bound still fits
        assert_eq!(length_bounds(214_748_364).1, 4_294_967_280);
    }

    #[test]
    fn test_batch_request_defaults() {
        let request: BatchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.text, "");
        assert_eq!(request.sentence_count, 3);
    }

    #[test]
    fn test_batch_request_camel_case_alias() {
        let request: BatchRequest =
            serde_json::from_str(r#"{"text":"hi","sentenceCount":5}"#).unwrap();
        assert_eq!(request.sentence_count, 5);
    }

    #[tokio::test]
    async fn test_run_batch_success_shape() {
        let summarizer = EchoSummarizer::new();
        let request: BatchRequest = serde_json::from_str(r#"{"text":"Stocks rallied today."}"#).unwrap();

        let outcome = run_batch(&summarizer, request).await;
        let json = serde_json::to_value(&outcome).unwrap();

        assert!(json.get("summary").is_some());
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn test_run_batch_failure_becomes_error_object() {
        let request = BatchRequest {
            text: "whatever".to_string(),
            sentence_count: 3,
        };

        let outcome = run_batch(&FailingSummarizer, request).await;
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["error"], "Inference error: index out of range in self");
        assert!(json.get("summary").is_none());
    }

    #[tokio::test]
    async fn test_run_batch_clamps_sentence_count() {
        let summarizer = EchoSummarizer::new();
        let request = BatchRequest {
            text: "t".to_string(),
            sentence_count: 0,
        };

        run_batch(&summarizer, request).await;
        assert_eq!(summarizer.seen.lock().unwrap()[0].1, 1);
    }

    #[tokio::test]
    async fn test_run_batch_empty_text_does_not_panic() {
        let summarizer = EchoSummarizer::new();
        let outcome = run_batch(&summarizer, BatchRequest::default()).await;

        match outcome {
            BatchOutcome::Summary { .. } | BatchOutcome::Error { .. } => {}
        }
        assert_eq!(summarizer.seen.lock().unwrap()[0], (String::new(), 3));
    }
}
