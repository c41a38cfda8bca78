use yew::prelude::*;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::config;
use crate::motion::{seconds, use_motion, Direction, MotionOptions};
use crate::pages::services::ServiceKind;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub service: String,
    pub rating: u8,
    pub comment: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct NewTestimonial {
    name: String,
    service: String,
    rating: u8,
    comment: String,
}

#[derive(Deserialize)]
struct SubmitResponse {
    message: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Customer reviews loaded from the API, plus a small form for leaving one.
#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let items = use_state(Vec::<Testimonial>::new);
    let load_error = use_state(|| None::<String>);

    {
        let items = items.clone();
        let load_error = load_error.clone();
        use_effect_with_deps(move |_| {
            spawn_local(async move {
                match Request::get(&format!("{}/api/testimonials", config::get_backend_url()))
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => match response.json::<Vec<Testimonial>>().await {
                        Ok(list) => {
                            info!("Loaded {} testimonials", list.len());
                            items.set(list);
                        }
                        Err(e) => {
                            warn!("Failed to parse testimonials: {}", e);
                            load_error.set(Some("Reviews are unavailable right now.".to_string()));
                        }
                    },
                    Ok(response) => {
                        warn!("Testimonials request failed with status {}", response.status());
                        load_error.set(Some("Reviews are unavailable right now.".to_string()));
                    }
                    Err(e) => {
                        warn!("Network error loading testimonials: {}", e);
                        load_error.set(Some("Reviews are unavailable right now.".to_string()));
                    }
                }
            });
            || ()
        }, ());
    }

    html! {
        <section class="testimonials-section">
            <h2 data-reveal={Direction::Up.as_attr()}>{"What our clients say"}</h2>
            {
                if let Some(err) = (*load_error).as_ref() {
                    html! { <p class="testimonials-error">{err}</p> }
                } else {
                    html! {}
                }
            }
            if !items.is_empty() {
                <TestimonialTrack items={(*items).clone()} />
            }
            <ReviewForm />
            <style>
                {r#"
                    .testimonials-section {
                        padding: 6rem 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .testimonials-section h2 {
                        font-size: 2.25rem;
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .testimonials-error {
                        text-align: center;
                        color: #b91c1c;
                    }
                    .testimonial-track {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }
                    .testimonial-card {
                        padding: 2rem;
                        border-radius: 16px;
                        background: #fff;
                        box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
                    }
                    .testimonial-avatar {
                        width: 56px;
                        height: 56px;
                        border-radius: 50%;
                        object-fit: cover;
                        background: #e0f2fe;
                    }
                    .testimonial-stars {
                        color: #f59e0b;
                        letter-spacing: 2px;
                        margin: 0.75rem 0;
                    }
                    .testimonial-card blockquote {
                        font-style: italic;
                        color: #334155;
                        margin-bottom: 1rem;
                    }
                    .testimonial-author {
                        font-weight: 600;
                    }
                    .testimonial-meta {
                        font-size: 0.85rem;
                        color: #64748b;
                    }
                    .review-form {
                        max-width: 520px;
                        margin: 4rem auto 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .review-form input,
                    .review-form select,
                    .review-form textarea {
                        padding: 0.75rem 1rem;
                        border: 1px solid #cbd5e1;
                        border-radius: 8px;
                        font: inherit;
                    }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialTrackProps {
    items: Vec<Testimonial>,
}

/// Rendered only once the reviews have loaded, so it scans its own cards
/// instead of relying on the page-level scan that ran before they existed.
#[function_component(TestimonialTrack)]
fn testimonial_track(props: &TestimonialTrackProps) -> Html {
    let root = use_node_ref();
    use_motion(root.clone(), MotionOptions::default());

    html! {
        <div class="testimonial-carousel" ref={root}>
            <div class="testimonial-track" data-stagger={seconds(0.15)}>
                { for props.items.iter().map(|t| html! {
                    <article class="testimonial-card" key={t.id}>
                        <img src={t.image.clone()} alt={t.name.clone()} loading="lazy" class="testimonial-avatar" />
                        <p class="testimonial-stars" aria-label={format!("{} out of 5", t.rating)}>{stars(t.rating)}</p>
                        <blockquote>{&t.comment}</blockquote>
                        <p class="testimonial-author">{&t.name}</p>
                        <p class="testimonial-meta">
                            {format!("{} · {}", t.service, t.created_at.format("%B %Y"))}
                        </p>
                    </article>
                }) }
            </div>
        </div>
    }
}

#[function_component(ReviewForm)]
fn review_form() -> Html {
    let name = use_state(String::new);
    let service = use_state(|| ServiceKind::House.title().to_string());
    let rating = use_state(|| 5u8);
    let comment = use_state(String::new);
    let is_sending = use_state(|| false);
    let result = use_state(|| None::<Result<String, String>>);

    let onsubmit = {
        let name = name.clone();
        let service = service.clone();
        let rating = rating.clone();
        let comment = comment.clone();
        let is_sending = is_sending.clone();
        let result = result.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let body = NewTestimonial {
                name: (*name).clone(),
                service: (*service).clone(),
                rating: *rating,
                comment: (*comment).clone(),
            };
            let is_sending = is_sending.clone();
            let result = result.clone();
            is_sending.set(true);
            spawn_local(async move {
                let request = match Request::post(&format!("{}/api/testimonials", config::get_backend_url()))
                    .json(&body)
                {
                    Ok(request) => request,
                    Err(e) => {
                        result.set(Some(Err(format!("Could not send review: {}", e))));
                        is_sending.set(false);
                        return;
                    }
                };
                match request.send().await {
                    Ok(response) if response.ok() => match response.json::<SubmitResponse>().await {
                        Ok(resp) => result.set(Some(Ok(resp.message))),
                        Err(_) => result.set(Some(Ok("Thanks for your review!".to_string()))),
                    },
                    Ok(response) => match response.json::<ErrorResponse>().await {
                        Ok(err) => result.set(Some(Err(err.error))),
                        Err(_) => result.set(Some(Err("Could not send review".to_string()))),
                    },
                    Err(e) => result.set(Some(Err(format!("Request failed: {}", e)))),
                }
                is_sending.set(false);
            });
        })
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_service = {
        let service = service.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            service.set(select.value());
        })
    };
    let on_rating = {
        let rating = rating.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            rating.set(select.value().parse().unwrap_or(5));
        })
    };
    let on_comment = {
        let comment = comment.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            comment.set(area.value());
        })
    };

    html! {
        <form class="review-form" {onsubmit} data-reveal={Direction::Scale.as_attr()}>
            <h3>{"Leave a review"}</h3>
            <input type="text" placeholder="Your name" value={(*name).clone()} oninput={on_name} />
            <select onchange={on_service}>
                { for ServiceKind::ALL.iter().map(|kind| html! {
                    <option value={kind.title()} selected={*service == kind.title()}>{kind.title()}</option>
                }) }
            </select>
            <select onchange={on_rating}>
                { for (1..=5u8).rev().map(|r| html! {
                    <option value={r.to_string()} selected={*rating == r}>{stars(r)}</option>
                }) }
            </select>
            <textarea placeholder="How did we do?" rows="3" value={(*comment).clone()} oninput={on_comment} />
            <button type="submit" class="hero-cta" disabled={*is_sending}>
                { if *is_sending { "Sending..." } else { "Submit review" } }
            </button>
            {
                match (*result).as_ref() {
                    Some(Ok(message)) => html! { <p class="success-message">{message}</p> },
                    Some(Err(error)) => html! { <p class="error-message">{error}</p> },
                    None => html! {},
                }
            }
        </form>
    }
}
