use newslens_common::{AppConfig, Result};
use newslens_inference::{
    FakeNewsDetector, HfClient, NewsSummarizer, SentimentClassifier, TextClassifier,
    TextSummarizer,
};
use std::sync::Arc;

/// Shared application state
///
/// Model clients are constructed once at startup and shared read-only
/// for the process lifetime.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Fake news detector
    pub detector: FakeNewsDetector,

    /// Article summarizer
    pub summarizer: Arc<dyn TextSummarizer>,
}

impl AppState {
    /// Create new application state backed by the Inference API
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = HfClient::new(&config.hf_api_base, config.hf_api_token.clone())?;
        let classifier = SentimentClassifier::new(client.clone(), &config.classifier_model);
        let summarizer = NewsSummarizer::new(client, &config.summarizer_model);

        Ok(Self {
            config,
            detector: FakeNewsDetector::new(Arc::new(classifier)),
            summarizer: Arc::new(summarizer),
        })
    }

    /// Create state from pre-built capabilities
    pub fn with_capabilities(
        config: AppConfig,
        classifier: Arc<dyn TextClassifier>,
        summarizer: Arc<dyn TextSummarizer>,
    ) -> Self {
        Self {
            config,
            detector: FakeNewsDetector::new(classifier),
            summarizer,
        }
    }
}
