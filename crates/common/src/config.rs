use crate::error::NewsLensError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// NewsLens application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Inference API base URL
    pub hf_api_base: String,

    /// Inference API bearer token (optional for public models)
    pub hf_api_token: Option<String>,

    /// Text classification model name
    pub classifier_model: String,

    /// Summarization model name
    pub summarizer_model: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Allowed frontend origin for CORS (permissive when unset)
    pub frontend_url: Option<String>,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hf_api_base: "https://api-inference.huggingface.co".to_string(),
            hf_api_token: None,
            classifier_model: "distilbert-base-uncased-finetuned-sst-2-english".to_string(),
            summarizer_model: "facebook/bart-large-cnn".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 5000,
            frontend_url: None,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, NewsLensError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            hf_api_base: std::env::var("HF_API_BASE")
                .unwrap_or_else(|_| "https://api-inference.huggingface.co".to_string()),
            hf_api_token: std::env::var("HF_API_TOKEN").ok().filter(|t| !t.is_empty()),
            classifier_model: std::env::var("CLASSIFIER_MODEL")
                .unwrap_or_else(|_| "distilbert-base-uncased-finetuned-sst-2-english".to_string()),
            summarizer_model: std::env::var("SUMMARIZER_MODEL")
                .unwrap_or_else(|_| "facebook/bart-large-cnn".to_string()),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),
            frontend_url: std::env::var("FRONTEND_URL").ok().filter(|u| !u.is_empty()),
            log_dir: Self::get_env_path("LOG_DIR").unwrap_or_else(|| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), NewsLensError> {
        if !self.log_dir.exists() {
            std::fs::create_dir_all(&self.log_dir).map_err(|e| {
                NewsLensError::config(format!(
                    "Failed to create directory {}: {}",
                    self.log_dir.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), NewsLensError> {
        if !self.hf_api_base.starts_with("http://") && !self.hf_api_base.starts_with("https://") {
            return Err(NewsLensError::config(
                "Inference API base URL must start with http:// or https://",
            ));
        }

        if self.classifier_model.is_empty() {
            return Err(NewsLensError::config("Classifier model name cannot be empty"));
        }

        if self.summarizer_model.is_empty() {
            return Err(NewsLensError::config("Summarizer model name cannot be empty"));
        }

        if self.server_port == 0 {
            return Err(NewsLensError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
