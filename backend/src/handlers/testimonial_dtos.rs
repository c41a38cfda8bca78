use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::models::testimonial_models::{NewTestimonial, Testimonial};

/// Fields are kept loose: clients send ratings as numbers or strings, and any
/// present value is echoed back as given.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct CreateTestimonialRequest {
    pub name: Option<Value>,
    pub service: Option<Value>,
    pub rating: Option<Value>,
    pub comment: Option<Value>,
    pub image: Option<Value>,
}

/// `null`, `false`, `0`, `""` and absent values count as missing.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn required(field: Option<Value>) -> Result<Value, ApiError> {
    field.filter(is_present).ok_or(ApiError::MissingFields)
}

fn text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

impl CreateTestimonialRequest {
    /// A JSON document that is not an object carries none of the fields.
    pub fn from_json(document: Value) -> Self {
        if !document.is_object() {
            return Self::default();
        }
        serde_json::from_value(document).unwrap_or_default()
    }

    pub fn validate(self) -> Result<NewTestimonial, ApiError> {
        Ok(NewTestimonial {
            name: text(required(self.name)?),
            service: text(required(self.service)?),
            rating: required(self.rating)?,
            comment: text(required(self.comment)?),
            image: self.image.filter(is_present).map(text),
        })
    }
}

#[derive(Serialize)]
pub struct CreateTestimonialResponse {
    pub success: bool,
    pub testimonial: Testimonial,
    pub message: String,
}

impl CreateTestimonialResponse {
    pub fn submitted(testimonial: Testimonial) -> Self {
        CreateTestimonialResponse {
            success: true,
            testimonial,
            message: "Testimonial submitted successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(document: Value) -> Result<NewTestimonial, ApiError> {
        CreateTestimonialRequest::from_json(document).validate()
    }

    #[test]
    fn falsy_values_count_as_missing() {
        for rating in [json!(null), json!(0), json!(""), json!(false)] {
            let result = request(json!({"name": "Jane", "service": "Deep Cleaning", "rating": rating, "comment": "Great!"}));
            assert!(matches!(result, Err(ApiError::MissingFields)), "rating {rating}");
        }
    }

    #[test]
    fn ratings_are_echoed_as_sent() {
        for rating in [json!(5), json!("5"), json!(4.5), json!(300)] {
            let new = request(json!({"name": "Jane", "service": "Deep Cleaning", "rating": rating.clone(), "comment": "Great!"}))
                .unwrap();
            assert_eq!(new.rating, rating);
        }
    }

    #[test]
    fn non_object_documents_have_no_fields() {
        for document in [json!([]), json!(["Jane", "Deep Cleaning", 5, "Great!"]), json!("hello"), json!(42)] {
            assert!(matches!(request(document), Err(ApiError::MissingFields)));
        }
    }
}
