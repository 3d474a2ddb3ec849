use newslens_inference::Verdict;
use serde::{Deserialize, Serialize};

/// Fake news detection request
#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    /// Article text (a missing field reads as empty)
    #[serde(default)]
    pub text: String,
}

/// Fake news detection response
#[derive(Debug, Serialize)]
pub struct DetectResponse {
    /// "Real" or "Fake"
    pub label: Verdict,

    /// Raw model score in [0, 1]
    pub confidence: f32,
}

/// Article summarization request
#[derive(Debug, Deserialize)]
pub struct SummarizeArticleRequest {
    /// Article body
    #[serde(default)]
    pub text: String,

    /// Article title
    #[serde(default)]
    pub title: String,

    /// Target summary length in sentences
    #[serde(default = "default_sentence_count", alias = "sentenceCount")]
    pub sentence_count: u32,
}

fn default_sentence_count() -> u32 {
    3
}

/// Article summarization response
#[derive(Debug, Serialize)]
pub struct SummarizeArticleResponse {
    /// Summary split into sentence bullet points
    pub summary: Vec<String>,
}

/// Generic error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub classifier_model: String,
    pub summarizer_model: String,
}
