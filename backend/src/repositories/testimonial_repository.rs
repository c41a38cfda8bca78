use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;
use serde_json::json;

use crate::models::testimonial_models::{NewTestimonial, Testimonial, DEFAULT_TESTIMONIAL_IMAGE};

fn seeded_at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(10, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or_default()
}

static SEED: Lazy<Vec<Testimonial>> = Lazy::new(|| {
    vec![
        Testimonial {
            id: 1,
            name: "Sarah Johnson".to_string(),
            service: "House Cleaning".to_string(),
            rating: json!(5),
            comment: "Absolutely amazing service! My house has never looked this clean. The team was professional, punctual, and incredibly thorough.".to_string(),
            image: "/images/testimonials/sarah.jpg".to_string(),
            created_at: seeded_at(2024, 1, 15),
        },
        Testimonial {
            id: 2,
            name: "Michael Chen".to_string(),
            service: "Office Cleaning".to_string(),
            rating: json!(5),
            comment: "We've been using them for our office for six months now. Consistent quality and they work around our schedule perfectly.".to_string(),
            image: "/images/testimonials/michael.jpg".to_string(),
            created_at: seeded_at(2024, 1, 20),
        },
        Testimonial {
            id: 3,
            name: "Emily Rodriguez".to_string(),
            service: "Deep Cleaning".to_string(),
            rating: json!(5),
            comment: "The deep clean before we moved in was worth every penny. Every corner sparkled and they even got the grout looking new.".to_string(),
            image: "/images/testimonials/emily.jpg".to_string(),
            created_at: seeded_at(2024, 2, 2),
        },
    ]
});

/// Serves the fixed seed list. Submissions are stamped and echoed back but
/// never stored; a persistent version would replace this type with one backed
/// by a real store.
#[derive(Clone, Default)]
pub struct TestimonialRepository;

impl TestimonialRepository {
    pub fn new() -> Self {
        TestimonialRepository
    }

    pub fn all(&self) -> Vec<Testimonial> {
        SEED.clone()
    }

    pub fn submit(&self, new: NewTestimonial) -> Testimonial {
        self.submit_at(new, Utc::now())
    }

    pub fn submit_at(&self, new: NewTestimonial, now: DateTime<Utc>) -> Testimonial {
        Testimonial {
            id: now.timestamp_millis(),
            name: new.name,
            service: new.service,
            rating: new.rating,
            comment: new.comment,
            image: new
                .image
                .filter(|image| !image.is_empty())
                .unwrap_or_else(|| DEFAULT_TESTIMONIAL_IMAGE.to_string()),
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane(image: Option<&str>) -> NewTestimonial {
        NewTestimonial {
            name: "Jane".to_string(),
            service: "House Cleaning".to_string(),
            rating: json!(5),
            comment: "Great!".to_string(),
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn seed_is_stable() {
        let repo = TestimonialRepository::new();
        let all = repo.all();
        assert_eq!(all.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(all[0].name, "Sarah Johnson");
        assert_eq!(all[0].service, "House Cleaning");
        assert_eq!(all[0].rating, json!(5));
        assert_eq!(all[0].created_at.to_rfc3339(), "2024-01-15T10:00:00+00:00");
    }

    #[test]
    fn submit_stamps_id_and_time_without_storing() {
        let repo = TestimonialRepository::new();
        let now = seeded_at(2024, 6, 1);
        let created = repo.submit_at(jane(None), now);
        assert_eq!(created.id, now.timestamp_millis());
        assert_eq!(created.created_at, now);
        assert_eq!(created.image, DEFAULT_TESTIMONIAL_IMAGE);
        assert_eq!(repo.all().len(), 3);
    }

    #[test]
    fn submit_keeps_supplied_image() {
        let repo = TestimonialRepository::new();
        let created = repo.submit(jane(Some("/images/testimonials/jane.jpg")));
        assert_eq!(created.image, "/images/testimonials/jane.jpg");
        assert_eq!(repo.submit(jane(Some(""))).image, DEFAULT_TESTIMONIAL_IMAGE);
    }
}
