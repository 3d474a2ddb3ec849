use newslens_common::{NewsLensError, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::types::{
    ApiError, ClassifyRequest, LabelScore, SummarizeParameters, SummarizeRequest,
    SummarizeResponse,
};

/// Hugging Face Inference API client
#[derive(Debug, Clone)]
pub struct HfClient {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl HfClient {
    /// Create new Inference API client
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| NewsLensError::network(format!("Failed to create HTTP client: {}", e)))?;

        info!("Inference API client initialized: {}", base_url);
        Ok(Self {
            base_url,
            token,
            client,
        })
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.base_url, model)
    }

    /// Single POST attempt; non-2xx responses surface the API error message
    async fn post_json<B: serde::Serialize>(&self, url: &str, body: &B) -> Result<reqwest::Response> {
        let mut request = self.client.post(url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| NewsLensError::network(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = match response.json::<ApiError>().await {
                Ok(body) => body.error,
                Err(_) => format!("Inference API returned {}", status),
            };
            return Err(NewsLensError::inference(message));
        }

        Ok(response)
    }

    /// Classify text; returns the candidate labels for the single input
    pub async fn classify(&self, model: &str, text: &str) -> Result<Vec<LabelScore>> {
        let url = self.model_url(model);

        debug!(
            "Sending classify request - Model: {}, Text length: {}",
            model,
            text.len()
        );

        let request = ClassifyRequest {
            inputs: text.to_string(),
        };
        let response = self.post_json(&url, &request).await?;

        // The API nests candidates one level per input
        let mut batches: Vec<Vec<LabelScore>> = response.json().await.map_err(|e| {
            NewsLensError::inference(format!("Failed to parse classification response: {}", e))
        })?;

        if batches.is_empty() || batches[0].is_empty() {
            return Err(NewsLensError::inference("Empty classification response"));
        }

        Ok(batches.remove(0))
    }

    /// Summarize text with explicit generation parameters
    pub async fn summarize(
        &self,
        model: &str,
        text: &str,
        parameters: SummarizeParameters,
    ) -> Result<String> {
        let url = self.model_url(model);

        debug!(
            "Sending summarize request - Model: {}, Text length: {}",
            model,
            text.len()
        );

        let request = SummarizeRequest {
            inputs: text.to_string(),
            parameters: Some(parameters),
        };
        let response = self.post_json(&url, &request).await?;

        let mut results: Vec<SummarizeResponse> = response.json().await.map_err(|e| {
            NewsLensError::inference(format!("Failed to parse summarization response: {}", e))
        })?;

        if results.is_empty() {
            return Err(NewsLensError::inference("Empty summarization response"));
        }

        Ok(results.remove(0).summary_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_url() {
        let client = HfClient::new("https://api-inference.huggingface.co", None).unwrap();
        assert_eq!(
            client.model_url("facebook/bart-large-cnn"),
            "https://api-inference.huggingface.co/models/facebook/bart-large-cnn"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = HfClient::new("http://localhost:8080/", None).unwrap();
        assert_eq!(client.model_url("m"), "http://localhost:8080/models/m");
    }
}
