//! NewsLens Model Inference
//!
//! Hugging Face Inference API client, sentiment-based fake news
//! detection, and text summarization

mod classify;
mod client;
mod summarize;
mod traits;
mod types;

pub use classify::{Detection, FakeNewsDetector, SentimentClassifier, Verdict};
pub use client::HfClient;
pub use summarize::{length_bounds, run_batch, BatchOutcome, BatchRequest, NewsSummarizer};
pub use traits::{TextClassifier, TextSummarizer};
pub use types::{
    ClassifyRequest, LabelScore, SummarizeParameters, SummarizeRequest, SummarizeResponse,
};
