//! Perpetual decorative motion for floating elements and particles.

use super::directive::FloatDirective;
use super::node::ElementId;
use super::transform::{Easing, VisualState};

#[derive(Clone, Debug, PartialEq)]
pub struct FloatTrack {
    pub target: ElementId,
    pub amplitude: f64,
    pub period: f64,
    pub tilt: f64,
    /// Odd indices start at the far end so neighbours move against each other.
    pub inverted: bool,
    pub started_at: f64,
}

impl FloatTrack {
    pub fn new(directive: &FloatDirective, started_at: f64) -> Self {
        let i = directive.index;
        Self {
            target: directive.target,
            amplitude: directive.intensity * (1.0 + (i % 3) as f64 * 0.25),
            period: directive.duration.max(0.1) + (i % 4) as f64 * 0.4,
            tilt: directive.intensity * 0.1,
            inverted: i % 2 == 1,
            started_at,
        }
    }

    /// Yoyo between rest and the full lift, one leg per `period`.
    pub fn sample(&self, now: f64) -> VisualState {
        let elapsed = (now - self.started_at).max(0.0);
        let cycle = elapsed / self.period;
        let leg = cycle.fract();
        let forward = (cycle.floor() as u64) % 2 == 0;
        let mut t = if forward { leg } else { 1.0 - leg };
        if self.inverted {
            t = 1.0 - t;
        }
        let eased = Easing::SineInOut.evaluate(t);
        VisualState {
            y: -self.amplitude * eased,
            rotate: self.tilt * (eased * 2.0 - 1.0),
            ..VisualState::IDENTITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn float(index: usize) -> FloatTrack {
        FloatTrack::new(
            &FloatDirective { target: ElementId(index), intensity: 20.0, duration: 3.0, index },
            0.0,
        )
    }

    #[test]
    fn neighbours_do_not_move_in_lockstep() {
        let a = float(0);
        let b = float(1);
        assert_ne!(a.amplitude, b.amplitude);
        assert_ne!(a.period, b.period);
        assert_ne!(a.sample(1.0), b.sample(1.0));
    }

    #[test]
    fn oscillation_alternates_direction() {
        let track = float(0);
        assert_eq!(track.sample(0.0).y, 0.0);
        assert!((track.sample(track.period).y + track.amplitude).abs() < 1e-9);
        assert!(track.sample(2.0 * track.period).y.abs() < 1e-9);
    }
}
