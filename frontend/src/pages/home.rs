use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::testimonials::Testimonials;
use crate::motion::{seconds, use_motion, Direction, MotionOptions};
use crate::pages::faq::{FaqItem, FAQ_ITEM_STYLES, GENERAL_FAQS};
use crate::pages::services::ServiceKind;

const BUBBLES: usize = 6;

const REASONS: [(&str, &str); 4] = [
    ("Vetted professionals", "Every cleaner is background-checked, trained in-house and insured."),
    ("Same team, every time", "You get a crew that knows your home and how you like it."),
    ("Green by default", "Plant-based products unless you ask for something stronger."),
    ("Happiness guarantee", "Not right? We come back within 24 hours and make it right."),
];

#[function_component(Home)]
pub fn home() -> Html {
    let root = use_node_ref();
    use_motion(root.clone(), MotionOptions::default());

    html! {
        <div class="landing-page" ref={root}>
            <header class="hero">
                <div class="hero-background" data-parallax="0.5"></div>
                <div class="hero-particles" data-particles="24"></div>
                <div class="hero-bubbles">
                    { for (0..BUBBLES).map(|i| html! {
                        <span
                            class={format!("bubble bubble-{}", i)}
                            data-float={(12 + i * 4).to_string()}
                            data-float-duration={seconds(2.5 + i as f64 * 0.5)}
                        />
                    }) }
                </div>
                <div class="hero-content">
                    <h1 class="hero-title" data-reveal={Direction::Up.as_attr()}>
                        {"A spotless home,"}<br/>{"without lifting a finger."}
                    </h1>
                    <p class="hero-subtitle" data-reveal={Direction::Up.as_attr()} data-delay={seconds(0.2)}>
                        {"Trusted residential and commercial cleaning, booked in under a minute."}
                    </p>
                    <div class="hero-cta-group" data-reveal={Direction::Scale.as_attr()} data-delay={seconds(0.4)}>
                        <Link<Route> to={Route::Contact} classes="hero-cta">
                            <span data-magnetic="0.3">{"Get a free quote"}</span>
                        </Link<Route>>
                    </div>
                </div>
            </header>

            <section class="services-section">
                <h2 data-reveal={Direction::Up.as_attr()}>{"Our services"}</h2>
                <div class="services-grid" data-stagger={seconds(0.08)} data-stagger-direction={Direction::Up.as_attr()}>
                    { for ServiceKind::ALL.iter().map(|kind| {
                        let content = kind.content();
                        html! {
                            <Link<Route> to={Route::Service { slug: kind.slug().to_string() }} classes="service-card">
                                <h3>{content.title}</h3>
                                <p>{content.tagline}</p>
                                <span class="service-card-price">{format!("From ${}", content.price_from)}</span>
                            </Link<Route>>
                        }
                    }) }
                </div>
            </section>

            <section class="why-us-section">
                <div
                    class="why-us-panel"
                    data-morph=""
                    data-morph-from-scale="0.85"
                    data-morph-to-scale="1"
                    data-morph-from-rotate="-4"
                    data-morph-to-rotate="0"
                >
                    <h2 data-reveal={Direction::Flip.as_attr()}>{"Why Spotless?"}</h2>
                    <div class="why-us-grid" data-stagger={seconds(0.12)} data-stagger-direction={Direction::Scale.as_attr()}>
                        { for REASONS.iter().map(|(title, body)| html! {
                            <div class="why-us-item">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <Testimonials />

            <section class="faq-preview">
                <h2 data-reveal={Direction::Left.as_attr()}>{"Questions?"}</h2>
                <div data-stagger={seconds(0.1)}>
                    { for GENERAL_FAQS.iter().take(3).map(|(q, a)| html! {
                        <FaqItem question={q.to_string()}><p>{*a}</p></FaqItem>
                    }) }
                </div>
                <Link<Route> to={Route::Faq} classes="faq-more-link">{"See all questions"}</Link<Route>>
            </section>

            <section class="cta-section">
                <h2 data-reveal={Direction::Down.as_attr()}>{"Ready for a cleaner space?"}</h2>
                <p data-reveal={Direction::Fade.as_attr()} data-delay={seconds(0.2)}>
                    {"Tell us about your home or office and we'll send a quote today."}
                </p>
                <Link<Route> to={Route::Contact} classes="hero-cta">
                    <span data-magnetic="0.5">{"Book a clean"}</span>
                </Link<Route>>
            </section>
            <style>{FAQ_ITEM_STYLES}</style>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        padding: 8rem 2rem 4rem;
                        text-align: center;
                    }
                    .hero-background {
                        position: absolute;
                        inset: -20% 0;
                        background: linear-gradient(160deg, #0c4a6e 0%, #0369a1 45%, #38bdf8 100%);
                        z-index: -2;
                        will-change: transform;
                    }
                    .hero-particles,
                    .hero-bubbles {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        overflow: hidden;
                        z-index: -1;
                    }
                    .bubble {
                        position: absolute;
                        display: block;
                        border-radius: 50%;
                        background: radial-gradient(circle at 30% 30%, rgba(255, 255, 255, 0.6), rgba(186, 230, 253, 0.15));
                        border: 1px solid rgba(255, 255, 255, 0.35);
                    }
                    .bubble-0 { width: 80px; height: 80px; left: 8%; top: 20%; }
                    .bubble-1 { width: 40px; height: 40px; left: 22%; top: 70%; }
                    .bubble-2 { width: 120px; height: 120px; left: 78%; top: 15%; }
                    .bubble-3 { width: 56px; height: 56px; left: 65%; top: 72%; }
                    .bubble-4 { width: 28px; height: 28px; left: 45%; top: 12%; }
                    .bubble-5 { width: 96px; height: 96px; left: 88%; top: 60%; }
                    .hero-content {
                        max-width: 760px;
                        color: #fff;
                    }
                    .hero-title {
                        font-size: clamp(2.4rem, 6vw, 4.2rem);
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: rgba(255, 255, 255, 0.85);
                        margin-bottom: 2.5rem;
                    }
                    .services-section,
                    .why-us-section,
                    .faq-preview,
                    .cta-section {
                        padding: 6rem 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .services-section h2,
                    .faq-preview h2,
                    .cta-section h2 {
                        font-size: 2.25rem;
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }
                    .service-card {
                        display: block;
                        padding: 2rem;
                        border-radius: 16px;
                        background: #fff;
                        box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
                        color: inherit;
                        text-decoration: none;
                    }
                    .service-card h3 {
                        margin-bottom: 0.75rem;
                        color: #0369a1;
                    }
                    .service-card-price {
                        display: block;
                        margin-top: 1rem;
                        font-weight: 600;
                    }
                    .why-us-panel {
                        padding: 4rem 3rem;
                        border-radius: 24px;
                        background: #0c4a6e;
                        color: #fff;
                        will-change: transform;
                    }
                    .why-us-panel h2 {
                        text-align: center;
                        font-size: 2.25rem;
                        margin-bottom: 2.5rem;
                    }
                    .why-us-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                    }
                    .why-us-item h3 {
                        color: #7dd3fc;
                        margin-bottom: 0.5rem;
                    }
                    .faq-more-link {
                        display: block;
                        margin-top: 2rem;
                        text-align: center;
                        color: #0369a1;
                    }
                    .cta-section {
                        text-align: center;
                    }
                    .cta-section p {
                        margin-bottom: 2rem;
                        color: #475569;
                    }
                    @media (max-width: 768px) {
                        .hero {
                            padding-top: 6rem;
                        }
                        .why-us-panel {
                            padding: 2.5rem 1.5rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
