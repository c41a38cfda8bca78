use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::pages::services::ServiceKind;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>{"Spotless Cleaning Co."}</h3>
                    <p>{"Homes, offices and everything in between, cleaned by insured, background-checked pros."}</p>
                </div>
                <div class="footer-links">
                    <h4>{"Services"}</h4>
                    <ul>
                        { for ServiceKind::ALL.iter().take(5).map(|kind| html! {
                            <li>
                                <Link<Route> to={Route::Service { slug: kind.slug().to_string() }}>
                                    {kind.title()}
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="footer-links">
                    <h4>{"Company"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::Faq}>{"FAQ"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Login}>{"Customer login"}</Link<Route>></li>
                    </ul>
                </div>
                <div class="footer-contact">
                    <h4>{"Get in touch"}</h4>
                    <p><a href="tel:+15555550142">{"(555) 555-0142"}</a></p>
                    <p><a href="mailto:hello@spotlesscleaning.co">{"hello@spotlesscleaning.co"}</a></p>
                    <p>{"Mon–Sat, 7am–7pm"}</p>
                </div>
            </div>
            <p class="footer-legal">{"© Spotless Cleaning Co. All rights reserved."}</p>
            <style>
                {r#"
                    .site-footer {
                        padding: 4rem 2rem 2rem;
                        background: #0f172a;
                        color: #cbd5e1;
                    }
                    .footer-grid {
                        max-width: 1200px;
                        margin: 0 auto 3rem;
                        display: grid;
                        grid-template-columns: 2fr repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .footer-grid h3,
                    .footer-grid h4 {
                        color: #fff;
                        margin-bottom: 1rem;
                    }
                    .footer-links ul {
                        list-style: none;
                    }
                    .footer-links li {
                        margin-bottom: 0.5rem;
                    }
                    .site-footer a {
                        color: #7dd3fc;
                        text-decoration: none;
                    }
                    .footer-legal {
                        text-align: center;
                        font-size: 0.85rem;
                        color: #64748b;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
