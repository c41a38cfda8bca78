use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use log::info;

use crate::motion::{seconds, use_motion, Direction, MotionOptions};
use crate::pages::services::ServiceKind;

/// Booking request form. Nothing is sent anywhere; the form only confirms
/// locally so the page can ship before a booking backend exists.
#[function_component(Contact)]
pub fn contact() -> Html {
    let root = use_node_ref();
    use_motion(root.clone(), MotionOptions::default());

    let name = use_state(String::new);
    let email = use_state(String::new);
    let service = use_state(|| ServiceKind::House.slug().to_string());
    let message = use_state(String::new);
    let submitted = use_state(|| false);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let service = service.clone();
        let submitted = submitted.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if name.trim().is_empty() || email.trim().is_empty() {
                error.set(Some("Please tell us your name and email.".to_string()));
                return;
            }
            info!("Booking request captured for {}", *service);
            error.set(None);
            submitted.set(true);
        })
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_service = {
        let service = service.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            service.set(select.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    html! {
        <div class="contact-page" ref={root}>
            <section class="contact-hero">
                <h1 data-reveal={Direction::Up.as_attr()}>{"Book a Clean"}</h1>
                <p data-reveal={Direction::Up.as_attr()} data-delay={seconds(0.15)}>
                    {"Tell us a little about your space and we'll get back to you with a quote within one business day."}
                </p>
            </section>

            <section class="contact-body">
                <div class="contact-details" data-stagger={seconds(0.1)} data-stagger-direction={Direction::Left.as_attr()}>
                    <div class="contact-card"><h3>{"Call"}</h3><p>{"(555) 555-0142"}</p></div>
                    <div class="contact-card"><h3>{"Email"}</h3><p>{"hello@spotlesscleaning.co"}</p></div>
                    <div class="contact-card"><h3>{"Hours"}</h3><p>{"Mon–Sat, 7am–7pm"}</p></div>
                </div>

                <div class="contact-form-card" data-reveal={Direction::Right.as_attr()}>
                    if *submitted {
                        <div class="success-message">
                            <h3>{"Thanks! We've got your request."}</h3>
                            <p>{"A coordinator will reach out shortly to confirm your booking."}</p>
                        </div>
                    } else {
                        <form class="contact-form" {onsubmit}>
                            <label for="contact-name">{"Name"}</label>
                            <input id="contact-name" type="text" value={(*name).clone()} oninput={on_name} />
                            <label for="contact-email">{"Email"}</label>
                            <input id="contact-email" type="email" value={(*email).clone()} oninput={on_email} />
                            <label for="contact-service">{"Service"}</label>
                            <select id="contact-service" onchange={on_service}>
                                { for ServiceKind::ALL.iter().map(|kind| html! {
                                    <option value={kind.slug()} selected={*service == kind.slug()}>{kind.title()}</option>
                                }) }
                            </select>
                            <label for="contact-message">{"Anything we should know?"}</label>
                            <textarea id="contact-message" rows="4" value={(*message).clone()} oninput={on_message} />
                            {
                                if let Some(err) = (*error).as_ref() {
                                    html! { <p class="error-message">{err}</p> }
                                } else {
                                    html! {}
                                }
                            }
                            <button type="submit" class="hero-cta" data-magnetic="0.25">{"Request a quote"}</button>
                        </form>
                    }
                </div>
            </section>
            <style>
                {r#"
                    .contact-hero {
                        padding: 10rem 2rem 4rem;
                        text-align: center;
                        color: #fff;
                        background: linear-gradient(160deg, #0c4a6e, #0369a1);
                    }
                    .contact-hero h1 {
                        font-size: clamp(2rem, 5vw, 3rem);
                        margin-bottom: 1rem;
                    }
                    .contact-body {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 4rem 2rem 6rem;
                        display: grid;
                        grid-template-columns: 1fr 2fr;
                        gap: 3rem;
                    }
                    .contact-details {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .contact-card,
                    .contact-form-card {
                        padding: 1.5rem 2rem;
                        border-radius: 16px;
                        background: #fff;
                        box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
                    }
                    .contact-card h3 {
                        color: #0369a1;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .contact-form input,
                    .contact-form select,
                    .contact-form textarea {
                        padding: 0.75rem 1rem;
                        margin-bottom: 0.75rem;
                        border: 1px solid #cbd5e1;
                        border-radius: 8px;
                        font: inherit;
                    }
                    .contact-form button {
                        align-self: flex-start;
                    }
                    @media (max-width: 768px) {
                        .contact-body {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
