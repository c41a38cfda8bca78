use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod motion;
mod pages {
    pub mod home;
    pub mod services;
    pub mod faq;
    pub mod contact;
    pub mod not_found;
}
mod components {
    pub mod testimonials;
    pub mod scroll_progress;
    pub mod footer;
}
mod auth {
    pub mod login;
}

use pages::{
    home::Home,
    services::ServicePage,
    faq::Faq,
    contact::Contact,
    not_found::NotFound,
};
use components::{
    scroll_progress::ScrollProgress,
    footer::Footer,
};
use auth::login::Login;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services/:slug")]
    Service { slug: String },
    #[at("/faq")]
    Faq,
    #[at("/contact")]
    Contact,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Service { slug } => {
            info!("Rendering Service page for {}", slug);
            html! { <ServicePage slug={slug} /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 80.0); // past the top of the hero
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = window.as_ref() {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window.as_ref() {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Spotless"}<span class="nav-logo-accent">{" Cleaning Co."}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Service { slug: "house-cleaning".to_string() }} classes="nav-link">
                            {"Services"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Faq} classes="nav-link">
                            {"FAQ"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-link">
                            {"Book a Clean"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Login} classes="nav-login-button">
                            {"Login"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ScrollProgress />
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
            <style>
                {r#"
                    *, *::before, *::after {
                        box-sizing: border-box;
                        margin: 0;
                        padding: 0;
                    }
                    body {
                        font-family: "Inter", system-ui, -apple-system, sans-serif;
                        color: #0f172a;
                        background: #f8fafc;
                        line-height: 1.6;
                        overflow-x: hidden;
                    }
                    .hero-cta {
                        display: inline-block;
                        padding: 1rem 2.25rem;
                        border: none;
                        border-radius: 999px;
                        background: #f59e0b;
                        color: #111827;
                        font-weight: 600;
                        text-decoration: none;
                        cursor: pointer;
                        transition: background 0.2s ease;
                    }
                    .hero-cta:hover {
                        background: #fbbf24;
                    }
                    .hero-cta span {
                        display: inline-block;
                    }
                    .success-message {
                        color: #15803d;
                    }
                    .error-message {
                        color: #b91c1c;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 1.25rem 2rem;
                        transition: background 0.3s ease, padding 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 2rem;
                        background: rgba(12, 74, 110, 0.92);
                        backdrop-filter: blur(8px);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        color: #fff;
                        font-size: 1.4rem;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    .nav-logo-accent {
                        font-weight: 400;
                        opacity: 0.8;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: rgba(255, 255, 255, 0.9);
                        text-decoration: none;
                    }
                    .nav-link:hover {
                        color: #fff;
                    }
                    .nav-login-button {
                        padding: 0.5rem 1.25rem;
                        border: 1px solid rgba(255, 255, 255, 0.6);
                        border-radius: 999px;
                        color: #fff;
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1.5rem;
                            background: #0c4a6e;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    let _ = console_log::init_with_level(Level::Info);

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
