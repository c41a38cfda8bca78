use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::handlers::testimonial_dtos::{CreateTestimonialRequest, CreateTestimonialResponse};
use crate::models::testimonial_models::Testimonial;
use crate::AppState;

pub async fn list_testimonials(State(state): State<Arc<AppState>>) -> Json<Vec<Testimonial>> {
    Json(state.testimonials.all())
}

// The body is taken raw so a malformed payload maps to our own 500 instead
// of the Json extractor's rejection.
pub async fn create_testimonial(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CreateTestimonialResponse>, ApiError> {
    let document: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected testimonial body: {}", e);
        ApiError::CreateFailed
    })?;

    let new = CreateTestimonialRequest::from_json(document).validate()?;
    let testimonial = state.testimonials.submit(new);
    info!("Testimonial {} submitted for {}", testimonial.id, testimonial.service);

    Ok(Json(CreateTestimonialResponse::submitted(testimonial)))
}
