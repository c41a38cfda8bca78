use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::motion::progress::{scroll_fraction, ProgressGuard};

/// Thin bar along the top edge tracking how far down the page the reader is.
#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let fraction = use_state(|| 0.0_f64);

    {
        let fraction = fraction.clone();
        use_effect_with_deps(move |_| {
            // A second shell instance renders the bar but leaves the listener
            // to whoever already owns it.
            let guard = ProgressGuard::acquire();
            let window = web_sys::window().filter(|_| guard.is_some());

            let callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let Some(window) = window.as_ref() else { return };
                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                    let viewport = window
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    let height = window
                        .document()
                        .and_then(|d| d.document_element())
                        .map(|e| e.scroll_height() as f64)
                        .unwrap_or(0.0);
                    fraction.set(scroll_fraction(scroll_y, height, viewport));
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = window.as_ref() {
                let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window.as_ref() {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
                drop(guard);
            }
        }, ());
    }

    html! {
        <div class="scroll-progress" aria-hidden="true">
            <div class="scroll-progress-bar" style={format!("transform: scaleX({:.4});", *fraction)}></div>
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 3px;
                        z-index: 200;
                        pointer-events: none;
                    }
                    .scroll-progress-bar {
                        height: 100%;
                        background: linear-gradient(90deg, #38bdf8, #f59e0b);
                        transform-origin: left center;
                    }
                "#}
            </style>
        </div>
    }
}
