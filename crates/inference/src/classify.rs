use std::sync::Arc;

use async_trait::async_trait;
use newslens_common::{NewsLensError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::HfClient;
use crate::traits::TextClassifier;
use crate::types::LabelScore;

/// Sentiment classifier bound to a specific model
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    client: HfClient,
    model: String,
}

impl SentimentClassifier {
    /// Create new classifier
    pub fn new(client: HfClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl TextClassifier for SentimentClassifier {
    async fn classify(&self, text: &str) -> Result<LabelScore> {
        let candidates = self.client.classify(&self.model, text).await?;

        candidates
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or_else(|| NewsLensError::inference("Empty classification response"))
    }
}

/// Binary verdict for an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Real,
    Fake,
}

impl Verdict {
    /// Map a sentiment label to a verdict. Only "NEGATIVE" reads as fake;
    /// any other label, including ones we have never seen, reads as real.
    pub fn from_sentiment(label: &str) -> Self {
        if label == "NEGATIVE" {
            Self::Fake
        } else {
            Self::Real
        }
    }
}

/// Classification result for an article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    /// Verdict derived from the sentiment label
    pub label: Verdict,

    /// Raw top score from the model, unmodified
    pub confidence: f32,
}

/// Fake news detector delegating to a pretrained sentiment model
pub struct FakeNewsDetector {
    classifier: Arc<dyn TextClassifier>,
}

impl FakeNewsDetector {
    /// Create new detector over a classification capability
    pub fn new(classifier: Arc<dyn TextClassifier>) -> Self {
        Self { classifier }
    }

    /// Classify article text
    pub async fn detect(&self, text: &str) -> Result<Detection> {
        let top = self.classifier.classify(text).await?;

        debug!(
            "Classifier output - Label: {}, Score: {}",
            top.label, top.score
        );

        Ok(Detection {
            label: Verdict::from_sentiment(&top.label),
            confidence: top.score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClassifier {
        label: &'static str,
        score: f32,
    }

    #[async_trait]
    impl TextClassifier for FixedClassifier {
        async fn classify(&self, _text: &str) -> Result<LabelScore> {
            Ok(LabelScore {
                label: self.label.to_string(),
                score: self.score,
            })
        }
    }

    struct FailingClassifier;

    #[async_trait]
    impl TextClassifier for FailingClassifier {
        async fn classify(&self, _text: &str) -> Result<LabelScore> {
            Err(NewsLensError::inference("model is currently loading"))
        }
    }

    #[test]
    fn test_verdict_mapping() {
        assert_eq!(Verdict::from_sentiment("NEGATIVE"), Verdict::Fake);
        assert_eq!(Verdict::from_sentiment("POSITIVE"), Verdict::Real);
        // Unrecognized labels silently read as real
        assert_eq!(Verdict::from_sentiment("NEUTRAL"), Verdict::Real);
        assert_eq!(Verdict::from_sentiment(""), Verdict::Real);
    }

    #[test]
    fn test_verdict_serialization() {
        assert_eq!(serde_json::to_string(&Verdict::Real).unwrap(), "\"Real\"");
        assert_eq!(serde_json::to_string(&Verdict::Fake).unwrap(), "\"Fake\"");
    }

    #[tokio::test]
    async fn test_detect_negative_is_fake() {
        let detector = FakeNewsDetector::new(Arc::new(FixedClassifier {
            label: "NEGATIVE",
            score: 0.97,
        }));

        let detection = detector.detect("some article").await.unwrap();
        assert_eq!(detection.label, Verdict::Fake);
        assert_eq!(detection.confidence, 0.97);
    }

    #[tokio::test]
    async fn test_detect_confidence_passthrough() {
        let detector = FakeNewsDetector::new(Arc::new(FixedClassifier {
            label: "POSITIVE",
            score: 0.5123,
        }));

        let detection = detector.detect("Stocks rallied today.").await.unwrap();
        assert_eq!(detection.label, Verdict::Real);
        assert!((0.0..=1.0).contains(&detection.confidence));
        assert_eq!(detection.confidence, 0.5123);
    }

    #[tokio::test]
    async fn test_detect_propagates_inference_errors() {
        let detector = FakeNewsDetector::new(Arc::new(FailingClassifier));
        let err = detector.detect("anything").await.unwrap_err();
        assert_eq!(err.status_code(), 502);
    }
}
