use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_TESTIMONIAL_IMAGE: &str = "/images/testimonials/default.jpg";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub service: String,
    /// Echoed exactly as submitted, so it may be any JSON value.
    pub rating: Value,
    pub comment: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

/// A validated submission, ready to be turned into a `Testimonial`.
#[derive(Clone, Debug)]
pub struct NewTestimonial {
    pub name: String,
    pub service: String,
    pub rating: Value,
    pub comment: String,
    pub image: Option<String>,
}
