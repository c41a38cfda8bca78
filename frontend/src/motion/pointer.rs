//! Magnetic pointer following.

use super::directive::MagneticDirective;
use super::node::{ElementId, Rect};
use super::transform::{Easing, Tween, VisualState};

pub const FOLLOW_DURATION: f64 = 0.3;
pub const RETURN_DURATION: f64 = 0.8;

#[derive(Clone, Debug, PartialEq)]
pub struct MagneticTrack {
    pub target: ElementId,
    pub strength: f64,
    tween: Option<Tween>,
}

impl MagneticTrack {
    pub fn new(directive: &MagneticDirective) -> Self {
        Self { target: directive.target, strength: directive.strength, tween: None }
    }

    pub fn current(&self, now: f64) -> VisualState {
        self.tween.map_or(VisualState::IDENTITY, |t| t.sample(now))
    }

    /// Pulls the element toward the pointer. Ignored when the pointer is
    /// outside the element.
    pub fn follow(&mut self, bounds: &Rect, pointer: (f64, f64), now: f64) {
        if !bounds.contains(pointer.0, pointer.1) {
            return;
        }
        let (cx, cy) = bounds.center();
        let target = VisualState::translation((pointer.0 - cx) * self.strength, (pointer.1 - cy) * self.strength);
        self.retarget(target, FOLLOW_DURATION, Easing::Power2Out, now);
    }

    /// Springs back to rest.
    pub fn release(&mut self, now: f64) {
        self.retarget(VisualState::IDENTITY, RETURN_DURATION, Easing::ELASTIC_RETURN, now);
    }

    fn retarget(&mut self, target: VisualState, duration: f64, easing: Easing, now: f64) {
        let from = self.current(now);
        self.tween = Some(Tween::new(from, target, now, duration, easing));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> MagneticTrack {
        MagneticTrack::new(&MagneticDirective { target: ElementId(0), strength: 0.5 })
    }

    #[test]
    fn follows_pointer_offset_scaled_by_strength() {
        let mut magnet = track();
        let bounds = Rect::new(100.0, 100.0, 200.0, 100.0);
        magnet.follow(&bounds, (260.0, 170.0), 0.0);
        let settled = magnet.current(FOLLOW_DURATION);
        assert_eq!((settled.x, settled.y), (30.0, 10.0));
    }

    #[test]
    fn pointer_outside_the_box_is_ignored() {
        let mut magnet = track();
        magnet.follow(&Rect::new(0.0, 0.0, 10.0, 10.0), (50.0, 50.0), 0.0);
        assert_eq!(magnet.current(1.0), VisualState::IDENTITY);
    }

    #[test]
    fn release_returns_from_the_current_offset() {
        let mut magnet = track();
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        magnet.follow(&bounds, (100.0, 50.0), 0.0);
        magnet.release(1.0);
        assert_eq!(magnet.current(1.0).x, 25.0);
        assert_eq!(magnet.current(1.0 + RETURN_DURATION), VisualState::IDENTITY);
    }
}
