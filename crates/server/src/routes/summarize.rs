use actix_web::{http::StatusCode, post, web, HttpResponse};
use tracing::error;

use crate::state::AppState;
use crate::types::{ErrorResponse, SummarizeArticleRequest, SummarizeArticleResponse};

#[post("/api/summarize")]
pub async fn summarize_article(
    req: web::Json<SummarizeArticleRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    if req.text.is_empty() || req.title.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse {
            error: "Text and title are required".to_string(),
        }));
    }

    let input = format!("Article Title: {}\n\n{}", req.title, req.text);
    let sentence_count = req.sentence_count.max(1);

    match state.summarizer.summarize(&input, sentence_count).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(SummarizeArticleResponse {
            summary: split_into_points(&summary),
        })),
        Err(e) => {
            error!("Summarization failed: {}", e);
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Ok(HttpResponse::build(status).json(ErrorResponse {
                error: e.to_string(),
            }))
        }
    }
}

/// Split a summary into sentence bullet points
fn split_into_points(summary: &str) -> Vec<String> {
    summary
        .split(". ")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            if p.ends_with('.') {
                p.to_string()
            } else {
                format!("{}.", p)
            }
        })
        .collect()
}
