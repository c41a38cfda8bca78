//! Visual states, the closed transform table and easing curves.

use std::f64::consts::PI;

use super::directive::Direction;
use super::node::Rect;

pub const REVEAL_DISTANCE: f64 = 60.0;
pub const STAGGER_DISTANCE: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    /// Degrees around the z axis.
    pub rotate: f64,
    /// Degrees around the x axis.
    pub rotate_x: f64,
    pub scale: f64,
}

impl VisualState {
    pub const IDENTITY: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        rotate: 0.0,
        rotate_x: 0.0,
        scale: 1.0,
    };

    pub fn lerp(&self, to: &VisualState, t: f64) -> VisualState {
        VisualState {
            opacity: lerp(self.opacity, to.opacity, t),
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            rotate: lerp(self.rotate, to.rotate, t),
            rotate_x: lerp(self.rotate_x, to.rotate_x, t),
            scale: lerp(self.scale, to.scale, t),
        }
    }

    /// Stacks `layer` on top of `self`: translations and rotations add,
    /// scales multiply, opacity stays with the base.
    pub fn compose(&self, layer: &VisualState) -> VisualState {
        VisualState {
            opacity: self.opacity,
            x: self.x + layer.x,
            y: self.y + layer.y,
            rotate: self.rotate + layer.rotate,
            rotate_x: self.rotate_x + layer.rotate_x,
            scale: self.scale * layer.scale,
        }
    }

    pub fn translation(x: f64, y: f64) -> VisualState {
        VisualState { x, y, ..VisualState::IDENTITY }
    }

    /// Screen box of `layout` once this state is applied. Transforms pivot on
    /// the box centre; rotation is ignored.
    pub fn transform_rect(&self, layout: &Rect) -> Rect {
        let (cx, cy) = layout.center();
        let scale = self.scale.abs();
        let (width, height) = (layout.width * scale, layout.height * scale);
        Rect::new(cx + self.x - width / 2.0, cy + self.y - height / 2.0, width, height)
    }

    /// Inverse of [`transform_rect`](Self::transform_rect). A collapsed scale
    /// keeps the measured size.
    pub fn untransform_rect(&self, rendered: &Rect) -> Rect {
        let (cx, cy) = rendered.center();
        let scale = self.scale.abs();
        let (width, height) = if scale > 1e-6 {
            (rendered.width / scale, rendered.height / scale)
        } else {
            (rendered.width, rendered.height)
        };
        Rect::new(cx - self.x - width / 2.0, cy - self.y - height / 2.0, width, height)
    }

    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) rotate({:.2}deg) rotateX({:.2}deg) scale({:.4})",
            self.x, self.y, self.rotate, self.rotate_x, self.scale
        )
    }

    pub fn css_opacity(&self) -> String {
        format!("{:.3}", self.opacity.clamp(0.0, 1.0))
    }
}

impl Default for VisualState {
    fn default() -> Self {
        VisualState::IDENTITY
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformPair {
    pub from: VisualState,
    pub to: VisualState,
}

/// Maps an entrance direction to its hidden and settled states.
///
/// Total over `Direction`: unknown markup values already parsed to `Fade`.
pub fn entrance_pair(direction: Direction, distance: f64) -> TransformPair {
    let hidden = VisualState { opacity: 0.0, ..VisualState::IDENTITY };
    let from = match direction {
        Direction::Up => VisualState { y: distance, ..hidden },
        Direction::Down => VisualState { y: -distance, ..hidden },
        Direction::Left => VisualState { x: -distance, ..hidden },
        Direction::Right => VisualState { x: distance, ..hidden },
        Direction::Scale => VisualState { scale: 0.8, ..hidden },
        Direction::Flip => VisualState { rotate_x: 90.0, ..hidden },
        Direction::Fade => hidden,
    };
    TransformPair { from, to: VisualState::IDENTITY }
}

pub fn reveal_pair(direction: Direction) -> TransformPair {
    entrance_pair(direction, REVEAL_DISTANCE)
}

pub fn stagger_pair(direction: Direction) -> TransformPair {
    entrance_pair(direction, STAGGER_DISTANCE)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic ease-out.
    Power3Out,
    /// Quadratic ease-out.
    Power2Out,
    /// Elastic ease-out with amplitude and period.
    ElasticOut { amplitude: f64, period: f64 },
    SineInOut,
}

impl Easing {
    pub const ELASTIC_RETURN: Easing = Easing::ElasticOut { amplitude: 1.0, period: 0.3 };

    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::Power3Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power2Out => 1.0 - (1.0 - t).powi(2),
            Easing::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let amplitude = amplitude.max(1.0);
    let shift = period / (2.0 * PI) * (1.0 / amplitude).asin();
    amplitude * 2f64.powf(-10.0 * t) * ((t - shift) * (2.0 * PI) / period).sin() + 1.0
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// A single timed interpolation between two states.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: VisualState,
    pub to: VisualState,
    /// Absolute start time in seconds, delay included.
    pub start: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: VisualState, to: VisualState, start: f64, duration: f64, easing: Easing) -> Self {
        Self { from, to, start, duration, easing }
    }

    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return if now >= self.start { 1.0 } else { 0.0 };
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now: f64) -> VisualState {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to;
        }
        self.from.lerp(&self.to, self.easing.evaluate(p))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}
