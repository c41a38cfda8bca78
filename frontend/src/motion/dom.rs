//! Browser binding for the orchestrator: `HtmlElement` nodes, window
//! listeners and the animation frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, Window};

use super::node::{MotionNode, Rect, Viewport};
use super::orchestrator::{MotionOptions, Orchestrator};
use super::transform::VisualState;

const PARTICLE_CLASS: &str = "motion-particle";
const PARTICLE_COLORS: [&str; 3] = ["rgba(255, 255, 255, 0.7)", "rgba(125, 211, 252, 0.6)", "rgba(56, 189, 248, 0.45)"];

#[derive(Clone, Debug, PartialEq)]
pub struct DomNode(pub HtmlElement);

impl MotionNode for DomNode {
    fn attr(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn query_all(&self, attr: &str) -> Vec<Self> {
        let Ok(list) = self.0.query_selector_all(&format!("[{attr}]")) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(DomNode)
            .collect()
    }

    fn children(&self) -> Vec<Self> {
        let children = self.0.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .map(DomNode)
            .collect()
    }

    fn bounds(&self) -> Option<Rect> {
        if !self.0.is_connected() {
            return None;
        }
        let r = self.0.get_bounding_client_rect();
        Some(Rect::new(r.left(), r.top(), r.width(), r.height()))
    }

    fn is_connected(&self) -> bool {
        self.0.is_connected()
    }

    fn apply(&self, state: &VisualState) {
        let style = self.0.style();
        let _ = style.set_property("transform", &state.css_transform());
        let _ = style.set_property("opacity", &state.css_opacity());
    }

    fn spawn_particle(&self, index: usize) -> Option<Self> {
        let document = self.0.owner_document()?;
        let particle = document.create_element("span").ok()?.dyn_into::<HtmlElement>().ok()?;
        particle.set_class_name(PARTICLE_CLASS);
        let _ = particle.set_attribute("aria-hidden", "true");
        let style = particle.style();
        for (property, value) in particle_style(index) {
            let _ = style.set_property(property, &value);
        }
        self.0.append_child(&particle).ok()?;
        Some(DomNode(particle))
    }

    fn remove(&self) {
        self.0.remove();
    }
}

/// Inline style for the `index`th particle. Particles are positioned inside
/// their container and never take pointer events.
fn particle_style(index: usize) -> Vec<(&'static str, String)> {
    let size = 4 + index % 5;
    vec![
        ("position", "absolute".to_string()),
        ("display", "block".to_string()),
        ("pointer-events", "none".to_string()),
        ("border-radius", "50%".to_string()),
        ("background", PARTICLE_COLORS[index % PARTICLE_COLORS.len()].to_string()),
        ("left", format!("{}%", (index * 37 + 11) % 100)),
        ("top", format!("{}%", (index * 61 + 7) % 100)),
        ("width", format!("{size}px")),
        ("height", format!("{size}px")),
    ]
}

pub fn now_seconds() -> f64 {
    web_sys::js_sys::Date::now() / 1000.0
}

fn viewport(window: &Window) -> Option<Viewport> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport { width, height })
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Ticks the orchestrator once per animation frame until it is disposed or
/// the slot is cleared.
fn schedule_frame(orchestrator: Rc<RefCell<Orchestrator<DomNode>>>, slot: FrameSlot) {
    let next = slot.clone();
    let frame = request_animation_frame(move |_| {
        next.borrow_mut().take();
        if let Ok(mut motion) = orchestrator.try_borrow_mut() {
            if motion.is_disposed() {
                return;
            }
            motion.tick(now_seconds());
        }
        schedule_frame(orchestrator, next);
    });
    *slot.borrow_mut() = Some(frame);
}

struct PointerBinding {
    element: HtmlElement,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_leave: Closure<dyn FnMut(MouseEvent)>,
}

/// A mounted orchestrator together with every listener it registered.
/// Dropping the handle tears everything down.
pub struct MotionHandle {
    orchestrator: Rc<RefCell<Orchestrator<DomNode>>>,
    window: Window,
    on_scroll: Option<Closure<dyn FnMut()>>,
    pointers: Vec<PointerBinding>,
    frame: FrameSlot,
}

impl MotionHandle {
    pub fn mount(root: HtmlElement, options: MotionOptions) -> Option<Self> {
        let window = web_sys::window()?;
        let orchestrator = Rc::new(RefCell::new(Orchestrator::mount(&DomNode(root), options, now_seconds())));

        let on_scroll = {
            let orchestrator = orchestrator.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                let Some(viewport) = viewport(&window) else {
                    return;
                };
                if let Ok(mut motion) = orchestrator.try_borrow_mut() {
                    motion.on_scroll(viewport, now_seconds());
                }
            }) as Box<dyn FnMut()>)
        };
        for event in ["scroll", "resize"] {
            if window
                .add_event_listener_with_callback(event, on_scroll.as_ref().unchecked_ref())
                .is_err()
            {
                warn!("motion: could not listen for {event}");
            }
        }
        // Initial sample so content already in view reveals without scrolling.
        if let Some(viewport) = viewport(&window) {
            orchestrator.borrow_mut().on_scroll(viewport, now_seconds());
        }

        let targets = orchestrator.borrow().magnetic_targets();
        let pointers = targets
            .into_iter()
            .map(|(id, node)| {
                let on_move = {
                    let orchestrator = orchestrator.clone();
                    Closure::wrap(Box::new(move |e: MouseEvent| {
                        if let Ok(mut motion) = orchestrator.try_borrow_mut() {
                            motion.on_pointer_move(id, (e.client_x() as f64, e.client_y() as f64), now_seconds());
                        }
                    }) as Box<dyn FnMut(MouseEvent)>)
                };
                let on_leave = {
                    let orchestrator = orchestrator.clone();
                    Closure::wrap(Box::new(move |_: MouseEvent| {
                        if let Ok(mut motion) = orchestrator.try_borrow_mut() {
                            motion.on_pointer_leave(id, now_seconds());
                        }
                    }) as Box<dyn FnMut(MouseEvent)>)
                };
                let element = node.0;
                let _ = element.add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
                let _ = element.add_event_listener_with_callback("pointerleave", on_leave.as_ref().unchecked_ref());
                PointerBinding { element, on_move, on_leave }
            })
            .collect();

        let frame = FrameSlot::default();
        schedule_frame(orchestrator.clone(), frame.clone());

        Some(Self {
            orchestrator,
            window,
            on_scroll: Some(on_scroll),
            pointers,
            frame,
        })
    }

    /// Removes every listener, stops the frame loop and disposes the
    /// orchestrator. Calling it again does nothing.
    pub fn dispose(&mut self) {
        if let Some(on_scroll) = self.on_scroll.take() {
            for event in ["scroll", "resize"] {
                let _ = self
                    .window
                    .remove_event_listener_with_callback(event, on_scroll.as_ref().unchecked_ref());
            }
        }
        for binding in self.pointers.drain(..) {
            let _ = binding
                .element
                .remove_event_listener_with_callback("pointermove", binding.on_move.as_ref().unchecked_ref());
            let _ = binding
                .element
                .remove_event_listener_with_callback("pointerleave", binding.on_leave.as_ref().unchecked_ref());
        }
        // Dropping a pending frame cancels it.
        self.frame.borrow_mut().take();
        if let Ok(mut motion) = self.orchestrator.try_borrow_mut() {
            if !motion.is_disposed() {
                motion.dispose();
                debug!("motion: handle released");
            }
        }
    }
}

impl Drop for MotionHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_are_positioned_out_of_flow() {
        for index in 0..24 {
            let style: std::collections::HashMap<_, _> = particle_style(index).into_iter().collect();
            assert_eq!(style["position"], "absolute");
            assert_eq!(style["pointer-events"], "none");
            assert_eq!(style["border-radius"], "50%");
            assert!(style["background"].starts_with("rgba("));
            let left: usize = style["left"].trim_end_matches('%').parse().unwrap();
            let top: usize = style["top"].trim_end_matches('%').parse().unwrap();
            assert!(left < 100 && top < 100);
            assert_eq!(style["width"], style["height"]);
        }
    }
}
