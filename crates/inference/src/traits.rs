use crate::types::LabelScore;
use async_trait::async_trait;
use newslens_common::Result;

/// Binary sentiment classification capability
#[async_trait]
pub trait TextClassifier: Send + Sync {
    /// Classify text, returning the top-scoring label
    async fn classify(&self, text: &str) -> Result<LabelScore>;
}

/// Abstractive summarization capability
#[async_trait]
pub trait TextSummarizer: Send + Sync {
    /// Summarize text to roughly `sentence_count` sentences
    async fn summarize(&self, text: &str, sentence_count: u32) -> Result<String>;
}
