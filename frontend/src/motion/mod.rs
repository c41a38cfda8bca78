//! Scroll-driven reveal and motion orchestration.
//!
//! Page sections mark elements with `data-*` attributes (see [`directive`]);
//! [`use_motion`] scans a page after it renders and drives entrances,
//! staggers, parallax, morphs, magnetic buttons and idle floating until the
//! page unmounts.

pub mod directive;
pub mod dom;
pub mod hook;
pub mod idle;
pub mod node;
pub mod orchestrator;
pub mod pointer;
pub mod progress;
pub mod scan;
pub mod transform;
pub mod trigger;

#[cfg(test)]
mod testing;

pub use directive::{seconds, Axis, Direction};
pub use hook::use_motion;
pub use orchestrator::{MotionOptions, Orchestrator};
pub use trigger::ReplayPolicy;
