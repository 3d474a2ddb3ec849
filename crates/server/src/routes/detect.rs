use actix_web::{http::StatusCode, post, web, HttpResponse};
use tracing::error;

use crate::state::AppState;
use crate::types::{DetectRequest, DetectResponse, ErrorResponse};

#[post("/detect-fake-news")]
pub async fn detect_fake_news(
    req: web::Json<DetectRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    match state.detector.detect(&req.text).await {
        Ok(detection) => Ok(HttpResponse::Ok().json(DetectResponse {
            label: detection.label,
            confidence: detection.confidence,
        })),
        Err(e) => {
            error!("Fake news detection failed: {}", e);
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Ok(HttpResponse::build(status).json(ErrorResponse {
                error: e.to_string(),
            }))
        }
    }
}
