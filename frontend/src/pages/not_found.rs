use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"We swept everywhere but couldn't find that page."}</p>
            <Link<Route> to={Route::Home} classes="hero-cta">{"Back to home"}</Link<Route>>
            <style>
                {r#"
                    .not-found-page {
                        min-height: 80vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        padding: 8rem 2rem 4rem;
                        text-align: center;
                    }
                    .not-found-page h1 {
                        font-size: 6rem;
                        color: #0369a1;
                    }
                "#}
            </style>
        </div>
    }
}
