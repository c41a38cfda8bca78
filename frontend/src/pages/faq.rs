use yew::prelude::*;
use yew::{Children, Properties};
use yew_hooks::prelude::*;
use web_sys::MouseEvent;

use crate::motion::{seconds, use_motion, Direction, MotionOptions};

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_bool_toggle(false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.toggle();
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

/// Styles for [`FaqItem`], included once by each page that lists questions.
pub const FAQ_ITEM_STYLES: &str = r#"
    .faq-item {
        border-bottom: 1px solid #e2e8f0;
    }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1.25rem 0;
        background: none;
        border: none;
        font: inherit;
        font-weight: 600;
        text-align: left;
        cursor: pointer;
        color: inherit;
    }
    .toggle-icon {
        font-size: 1.5rem;
        color: #0369a1;
    }
    .faq-answer {
        max-height: 0;
        overflow: hidden;
        color: #475569;
        transition: max-height 0.3s ease;
    }
    .faq-item.open .faq-answer {
        max-height: 400px;
        padding-bottom: 1.25rem;
    }
"#;

pub const GENERAL_FAQS: [(&str, &str); 4] = [
    (
        "Do I need to be home during the cleaning?",
        "No. Most clients give us a key, a door code or lockbox access. Every cleaner is background-checked, insured and bonded.",
    ),
    (
        "Do you bring your own supplies?",
        "Yes. Our teams arrive with professional equipment and products. If you prefer we use your products, just leave a note.",
    ),
    (
        "What if I'm not happy with the clean?",
        "Tell us within 24 hours and we'll come back and re-clean the areas you're not satisfied with, free of charge.",
    ),
    (
        "How do I pay?",
        "We charge the card on file after each visit. There are no contracts and you can pause or cancel any time.",
    ),
];

pub const BOOKING_FAQS: [(&str, &str); 3] = [
    (
        "How far in advance should I book?",
        "We usually have openings within the week. Move-out and post-construction jobs are best booked 5–7 days ahead.",
    ),
    (
        "Can I reschedule a visit?",
        "Yes, free of charge with at least 48 hours' notice. Later changes may carry a small fee.",
    ),
    (
        "Do you clean offices on weekends?",
        "Yes. Commercial and office cleaning can be scheduled evenings and weekends so your team isn't disturbed.",
    ),
];

#[function_component(Faq)]
pub fn faq() -> Html {
    let root = use_node_ref();
    use_motion(root.clone(), MotionOptions::default());

    html! {
        <div class="faq-page" ref={root}>
            <section class="faq-hero">
                <h1 data-reveal={Direction::Down.as_attr()}>{"Frequently Asked Questions"}</h1>
                <p data-reveal={Direction::Up.as_attr()} data-delay={seconds(0.2)}>
                    {"Everything you need to know before your first clean"}
                </p>
            </section>

            <section class="faq-section">
                <h2 data-reveal={Direction::Left.as_attr()}>{"General"}</h2>
                <div data-stagger={seconds(0.1)}>
                    { for GENERAL_FAQS.iter().map(|(q, a)| html! {
                        <FaqItem question={q.to_string()}><p>{*a}</p></FaqItem>
                    }) }
                </div>

                <h2 data-reveal={Direction::Left.as_attr()}>{"Booking & Scheduling"}</h2>
                <div data-stagger={seconds(0.1)}>
                    { for BOOKING_FAQS.iter().map(|(q, a)| html! {
                        <FaqItem question={q.to_string()}><p>{*a}</p></FaqItem>
                    }) }
                </div>
            </section>
            <style>{FAQ_ITEM_STYLES}</style>
            <style>
                {r#"
                    .faq-hero {
                        padding: 10rem 2rem 4rem;
                        text-align: center;
                        color: #fff;
                        background: linear-gradient(160deg, #0c4a6e, #0369a1);
                    }
                    .faq-hero h1 {
                        font-size: clamp(2rem, 5vw, 3rem);
                        margin-bottom: 1rem;
                    }
                    .faq-section {
                        max-width: 800px;
                        margin: 0 auto;
                        padding: 4rem 2rem 6rem;
                    }
                    .faq-section h2 {
                        margin: 2.5rem 0 1rem;
                        color: #0369a1;
                    }
                "#}
            </style>
        </div>
    }
}
