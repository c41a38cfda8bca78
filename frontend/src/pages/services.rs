use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::motion::{seconds, use_motion, Direction, MotionOptions, ReplayPolicy};

/// Every service the business sells. Landing pages are rendered from this
/// table rather than hand-written per service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceKind {
    House,
    Office,
    Deep,
    MoveInOut,
    Carpet,
    Window,
    PostConstruction,
    VacationRental,
    Commercial,
    Eco,
}

pub struct ServiceContent {
    pub title: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub price_from: u32,
    pub highlights: [&'static str; 4],
    pub checklist: [&'static str; 6],
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 10] = [
        ServiceKind::House,
        ServiceKind::Office,
        ServiceKind::Deep,
        ServiceKind::MoveInOut,
        ServiceKind::Carpet,
        ServiceKind::Window,
        ServiceKind::PostConstruction,
        ServiceKind::VacationRental,
        ServiceKind::Commercial,
        ServiceKind::Eco,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ServiceKind::House => "house-cleaning",
            ServiceKind::Office => "office-cleaning",
            ServiceKind::Deep => "deep-cleaning",
            ServiceKind::MoveInOut => "move-in-move-out",
            ServiceKind::Carpet => "carpet-cleaning",
            ServiceKind::Window => "window-cleaning",
            ServiceKind::PostConstruction => "post-construction",
            ServiceKind::VacationRental => "vacation-rental",
            ServiceKind::Commercial => "commercial-cleaning",
            ServiceKind::Eco => "eco-friendly-cleaning",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ServiceKind> {
        ServiceKind::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    pub fn title(self) -> &'static str {
        self.content().title
    }

    pub fn content(self) -> ServiceContent {
        match self {
            ServiceKind::House => ServiceContent {
                title: "House Cleaning",
                tagline: "Come home to a place that feels brand new.",
                summary: "Weekly, bi-weekly or monthly visits from the same trusted team, tailored to how you live.",
                image: "/assets/services/house.jpg",
                price_from: 120,
                highlights: ["Same crew every visit", "Pet-safe products", "Flexible scheduling", "100% satisfaction guarantee"],
                checklist: ["Dusting of all reachable surfaces", "Kitchen counters and appliance exteriors", "Bathrooms scrubbed and sanitized", "Floors vacuumed and mopped", "Beds made and linens changed", "Trash emptied and liners replaced"],
            },
            ServiceKind::Office => ServiceContent {
                title: "Office Cleaning",
                tagline: "A workspace your team actually wants to walk into.",
                summary: "After-hours cleaning for offices of every size, scheduled around your business so nothing stops.",
                image: "/assets/services/office.jpg",
                price_from: 180,
                highlights: ["After-hours service", "Insured and bonded staff", "Supply restocking", "Custom checklists"],
                checklist: ["Desks and shared surfaces wiped", "Break room and kitchen cleaned", "Restrooms sanitized and restocked", "Floors vacuumed and mopped", "Glass doors and partitions polished", "Waste and recycling removed"],
            },
            ServiceKind::Deep => ServiceContent {
                title: "Deep Cleaning",
                tagline: "The top-to-bottom reset your home has been waiting for.",
                summary: "Every corner, baseboard and vent. Ideal before a first recurring visit or once a season.",
                image: "/assets/services/deep.jpg",
                price_from: 250,
                highlights: ["Inside appliances", "Baseboards and trim", "Grout scrubbing", "Detailed checklist"],
                checklist: ["Inside oven and refrigerator", "Baseboards, doors and frames", "Light fixtures and ceiling fans", "Cabinet fronts degreased", "Tile grout scrubbed", "Window sills and tracks"],
            },
            ServiceKind::MoveInOut => ServiceContent {
                title: "Move-In / Move-Out",
                tagline: "Hand over the keys without a second thought.",
                summary: "Empty-home cleaning that meets landlord and realtor standards, so you get your deposit back.",
                image: "/assets/services/move.jpg",
                price_from: 280,
                highlights: ["Deposit-ready results", "Inside all cabinets", "Walls spot-cleaned", "Realtor approved"],
                checklist: ["Inside cabinets and drawers", "Closets and shelving", "Appliances inside and out", "Walls and switch plates", "Bathrooms descaled", "Garage swept"],
            },
            ServiceKind::Carpet => ServiceContent {
                title: "Carpet Cleaning",
                tagline: "Lift the stains, keep the softness.",
                summary: "Hot-water extraction and spot treatment that removes embedded dirt and allergens.",
                image: "/assets/services/carpet.jpg",
                price_from: 99,
                highlights: ["Hot-water extraction", "Pet stain treatment", "Fast drying", "Allergen reduction"],
                checklist: ["Pre-inspection of fibers", "Spot and stain pre-treatment", "Hot-water extraction", "Deodorizing rinse", "Furniture moved and replaced", "Grooming for even drying"],
            },
            ServiceKind::Window => ServiceContent {
                title: "Window Cleaning",
                tagline: "Let the light back in.",
                summary: "Streak-free glass inside and out, including frames, sills and screens.",
                image: "/assets/services/window.jpg",
                price_from: 89,
                highlights: ["Inside and out", "Screens included", "Pure-water poles", "Hard-water stain removal"],
                checklist: ["Glass washed inside and out", "Frames and sills wiped", "Screens brushed and rinsed", "Tracks vacuumed", "Hard-water spots treated", "Final streak check"],
            },
            ServiceKind::PostConstruction => ServiceContent {
                title: "Post-Construction",
                tagline: "From dust to done.",
                summary: "Fine dust, paint splatter and debris removed after renovations so you can move right back in.",
                image: "/assets/services/construction.jpg",
                price_from: 350,
                highlights: ["Fine dust removal", "Paint and adhesive cleanup", "HEPA vacuums", "Multi-pass cleaning"],
                checklist: ["Debris and packaging removed", "HEPA vacuum of all surfaces", "Paint splatter removed", "Fixtures and fittings polished", "Vents and returns cleaned", "Final detail pass"],
            },
            ServiceKind::VacationRental => ServiceContent {
                title: "Vacation Rental Turnover",
                tagline: "Five-star reviews start with a spotless check-in.",
                summary: "Fast turnovers between guests, with linen changes, restocking and photo reports.",
                image: "/assets/services/rental.jpg",
                price_from: 110,
                highlights: ["Same-day turnovers", "Linen service", "Photo reports", "Restocking"],
                checklist: ["Linens stripped and replaced", "Kitchen reset and restocked", "Bathrooms sanitized", "Floors cleaned throughout", "Damage check with photos", "Welcome staging"],
            },
            ServiceKind::Commercial => ServiceContent {
                title: "Commercial Cleaning",
                tagline: "Spotless spaces for customers and staff alike.",
                summary: "Retail, medical and hospitality cleaning programs with dedicated supervisors.",
                image: "/assets/services/commercial.jpg",
                price_from: 300,
                highlights: ["Dedicated supervisor", "Compliance-ready", "Floor care programs", "24/7 availability"],
                checklist: ["High-touch disinfection", "Floor scrubbing and buffing", "Restroom deep clean", "Entrance and glass care", "Waste management", "Quality inspections"],
            },
            ServiceKind::Eco => ServiceContent {
                title: "Eco-Friendly Cleaning",
                tagline: "Clean home, clean conscience.",
                summary: "Plant-based, fragrance-free products and microfiber systems that are safe for kids and pets.",
                image: "/assets/services/eco.jpg",
                price_from: 130,
                highlights: ["Plant-based products", "Fragrance-free options", "Reusable microfiber", "Zero harsh fumes"],
                checklist: ["Non-toxic surface cleaning", "Steam-cleaned bathrooms", "Natural degreasers in the kitchen", "HEPA vacuuming", "Microfiber dusting", "Refillable supply program"],
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicePageProps {
    pub slug: String,
}

#[function_component(ServicePage)]
pub fn service_page(props: &ServicePageProps) -> Html {
    match ServiceKind::from_slug(&props.slug) {
        // Keyed so navigating between services remounts and rescans.
        Some(kind) => html! { <ServiceLanding key={kind.slug()} kind={kind} /> },
        None => html! { <Redirect<Route> to={Route::NotFound} /> },
    }
}

#[derive(Properties, PartialEq)]
struct ServiceLandingProps {
    kind: ServiceKind,
}

#[function_component(ServiceLanding)]
fn service_landing(props: &ServiceLandingProps) -> Html {
    let root = use_node_ref();
    // Service pages replay their entrances when scrolled back into view.
    use_motion(root.clone(), MotionOptions { replay: ReplayPolicy::Replay, ..MotionOptions::default() });

    let content = props.kind.content();
    let others: Vec<ServiceKind> = ServiceKind::ALL
        .into_iter()
        .filter(|kind| *kind != props.kind)
        .take(3)
        .collect();

    html! {
        <div class="service-page" ref={root}>
            <header class="service-hero">
                <div class="service-hero-background" data-parallax="0.3" style={format!("background-image: url('{}');", content.image)}></div>
                <div class="service-hero-content">
                    <h1 data-reveal={Direction::Up.as_attr()}>{content.title}</h1>
                    <p class="service-tagline" data-reveal={Direction::Up.as_attr()} data-delay={seconds(0.15)}>{content.tagline}</p>
                    <p class="service-price" data-reveal={Direction::Scale.as_attr()} data-delay={seconds(0.3)}>
                        {format!("From ${}", content.price_from)}
                    </p>
                    <Link<Route> to={Route::Contact} classes="hero-cta">
                        <span data-magnetic="0.4">{"Book this service"}</span>
                    </Link<Route>>
                </div>
            </header>

            <section class="service-summary">
                <p data-reveal={Direction::Left.as_attr()}>{content.summary}</p>
                <ul class="service-highlights" data-stagger={seconds(0.12)} data-stagger-direction={Direction::Scale.as_attr()}>
                    { for content.highlights.iter().map(|h| html! { <li>{*h}</li> }) }
                </ul>
            </section>

            <section class="service-checklist" data-morph="">
                <h2 data-reveal={Direction::Flip.as_attr()}>{"What's included"}</h2>
                <ul data-stagger={seconds(0.08)} data-stagger-direction={Direction::Left.as_attr()}>
                    { for content.checklist.iter().map(|item| html! { <li>{"✓ "}{*item}</li> }) }
                </ul>
            </section>

            <section class="service-related">
                <h2 data-reveal={Direction::Up.as_attr()}>{"You might also need"}</h2>
                <div class="related-grid" data-stagger={seconds(0.15)}>
                    { for others.into_iter().map(|kind| html! {
                        <Link<Route> to={Route::Service { slug: kind.slug().to_string() }} classes="related-card">
                            <h3>{kind.title()}</h3>
                            <p>{kind.content().tagline}</p>
                        </Link<Route>>
                    }) }
                </div>
            </section>
            <style>
                {r#"
                    .service-hero {
                        position: relative;
                        min-height: 70vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        padding: 8rem 2rem 4rem;
                        text-align: center;
                        color: #fff;
                    }
                    .service-hero-background {
                        position: absolute;
                        inset: -20% 0;
                        z-index: -1;
                        background-color: #0c4a6e;
                        background-size: cover;
                        background-position: center;
                        filter: brightness(0.55);
                        will-change: transform;
                    }
                    .service-hero-content h1 {
                        font-size: clamp(2.2rem, 5vw, 3.5rem);
                        margin-bottom: 1rem;
                    }
                    .service-tagline {
                        font-size: 1.2rem;
                        margin-bottom: 1rem;
                    }
                    .service-price {
                        font-weight: 600;
                        margin-bottom: 2rem;
                    }
                    .service-summary,
                    .service-checklist,
                    .service-related {
                        max-width: 1000px;
                        margin: 0 auto;
                        padding: 5rem 2rem;
                    }
                    .service-summary > p {
                        font-size: 1.15rem;
                        color: #334155;
                        margin-bottom: 2rem;
                    }
                    .service-highlights {
                        list-style: none;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 1rem;
                    }
                    .service-highlights li {
                        padding: 1.25rem;
                        border-radius: 12px;
                        background: #e0f2fe;
                        font-weight: 600;
                        color: #0c4a6e;
                    }
                    .service-checklist {
                        border-radius: 24px;
                        background: #fff;
                        box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
                        will-change: transform;
                    }
                    .service-checklist ul {
                        list-style: none;
                        columns: 2;
                        margin-top: 1.5rem;
                    }
                    .service-checklist li {
                        margin-bottom: 0.75rem;
                    }
                    .service-related h2 {
                        margin-bottom: 2rem;
                        text-align: center;
                    }
                    .related-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }
                    .related-card {
                        display: block;
                        padding: 1.5rem;
                        border-radius: 16px;
                        background: #fff;
                        box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
                        color: inherit;
                        text-decoration: none;
                    }
                    .related-card h3 {
                        color: #0369a1;
                    }
                    @media (max-width: 768px) {
                        .service-checklist ul {
                            columns: 1;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_service_has_a_unique_resolvable_slug() {
        let slugs: HashSet<_> = ServiceKind::ALL.iter().map(|k| k.slug()).collect();
        assert_eq!(slugs.len(), ServiceKind::ALL.len());
        for kind in ServiceKind::ALL {
            assert_eq!(ServiceKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(ServiceKind::from_slug("pool-cleaning"), None);
    }
}
