use yew::prelude::*;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use log::{info, warn};

use crate::config;

#[derive(Serialize)]
pub struct PasswordGrant {
    email: String,
    password: String,
}

/// The provider reports failures under different keys depending on which
/// layer rejected the request.
#[derive(Deserialize, Default)]
struct ErrorResponse {
    error_description: Option<String>,
    msg: Option<String>,
    error: Option<String>,
}

impl ErrorResponse {
    fn message(self) -> Option<String> {
        self.error_description.or(self.msg).or(self.error)
    }
}

fn token_endpoint() -> String {
    format!("{}/auth/v1/token?grant_type=password", config::get_auth_url())
}

#[function_component]
pub fn Login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error_setter = error.clone();
        let loading_setter = is_loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let grant = PasswordGrant {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let error_setter = error_setter.clone();
            let loading_setter = loading_setter.clone();
            loading_setter.set(true);
            error_setter.set(None);

            spawn_local(async move {
                let request = match Request::post(&token_endpoint())
                    .header("apikey", config::get_auth_anon_key())
                    .json(&grant)
                {
                    Ok(request) => request,
                    Err(e) => {
                        error_setter.set(Some(format!("Request failed: {}", e)));
                        loading_setter.set(false);
                        return;
                    }
                };

                match request.send().await {
                    Ok(response) => {
                        if response.ok() {
                            info!("Login successful, redirecting");
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href("/");
                            }
                        } else {
                            warn!("Login failed with status: {}", response.status());
                            let message = response
                                .json::<ErrorResponse>()
                                .await
                                .unwrap_or_default()
                                .message()
                                .unwrap_or_else(|| "Login failed".to_string());
                            error_setter.set(Some(message));
                        }
                    }
                    Err(e) => {
                        warn!("Network error: {}", e);
                        error_setter.set(Some(format!("Request failed: {}", e)));
                    }
                }
                loading_setter.set(false);
            });
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    html! {
        <div class="login-page">
            <div class="login-container">
                <h1>{"Welcome back"}</h1>
                <p>{"Sign in to manage your bookings."}</p>
                <form {onsubmit}>
                    <input
                        type="email"
                        placeholder="Email"
                        autocomplete="email"
                        value={(*email).clone()}
                        oninput={on_email}
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        value={(*password).clone()}
                        oninput={on_password}
                    />
                    {
                        if let Some(err) = (*error).as_ref() {
                            html! { <div class="error-message">{err}</div> }
                        } else {
                            html! {}
                        }
                    }
                    <button type="submit" class="login-button" disabled={*is_loading}>
                        { if *is_loading { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>
            </div>
            <style>
                {r#"
                    .login-page {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 8rem 1.5rem 4rem;
                        background: linear-gradient(160deg, #0c4a6e, #0369a1);
                    }
                    .login-container {
                        width: 100%;
                        max-width: 420px;
                        padding: 2.5rem;
                        border-radius: 16px;
                        background: #fff;
                        box-shadow: 0 20px 40px rgba(15, 23, 42, 0.2);
                    }
                    .login-container h1 {
                        margin-bottom: 0.5rem;
                    }
                    .login-container > p {
                        color: #64748b;
                        margin-bottom: 1.5rem;
                    }
                    .login-container form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .login-container input {
                        padding: 0.75rem 1rem;
                        border: 1px solid #cbd5e1;
                        border-radius: 8px;
                        font: inherit;
                    }
                    .login-button {
                        padding: 0.85rem;
                        border: none;
                        border-radius: 8px;
                        background: #0369a1;
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .login-button:disabled {
                        opacity: 0.6;
                        cursor: default;
                    }
                "#}
            </style>
        </div>
    }
}
