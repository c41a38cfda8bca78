//! Declarative animation directives and the `data-*` attribute vocabulary
//! page markup uses to request them.
//!
//! Attribute names here are the contract between page sections and the
//! orchestrator. Values are parsed leniently: anything missing or malformed
//! resolves to the documented default.

use super::node::ElementId;

pub const ATTR_REVEAL: &str = "data-reveal";
pub const ATTR_DELAY: &str = "data-delay";
pub const ATTR_DURATION: &str = "data-duration";
pub const ATTR_STAGGER: &str = "data-stagger";
pub const ATTR_STAGGER_DIRECTION: &str = "data-stagger-direction";
pub const ATTR_PARALLAX: &str = "data-parallax";
pub const ATTR_PARALLAX_AXIS: &str = "data-parallax-axis";
pub const ATTR_MORPH: &str = "data-morph";
pub const ATTR_MORPH_FROM_SCALE: &str = "data-morph-from-scale";
pub const ATTR_MORPH_TO_SCALE: &str = "data-morph-to-scale";
pub const ATTR_MORPH_FROM_ROTATE: &str = "data-morph-from-rotate";
pub const ATTR_MORPH_TO_ROTATE: &str = "data-morph-to-rotate";
pub const ATTR_MAGNETIC: &str = "data-magnetic";
pub const ATTR_FLOAT: &str = "data-float";
pub const ATTR_FLOAT_DURATION: &str = "data-float-duration";
pub const ATTR_PARTICLES: &str = "data-particles";

pub const DEFAULT_DELAY: f64 = 0.0;
pub const DEFAULT_DURATION: f64 = 1.0;
pub const DEFAULT_STAGGER_INTERVAL: f64 = 0.1;
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;
pub const DEFAULT_MORPH_FROM_SCALE: f64 = 0.8;
pub const DEFAULT_MORPH_TO_SCALE: f64 = 1.0;
pub const DEFAULT_MORPH_FROM_ROTATE: f64 = -5.0;
pub const DEFAULT_MORPH_TO_ROTATE: f64 = 0.0;
pub const DEFAULT_MAGNETIC_STRENGTH: f64 = 0.3;
pub const DEFAULT_FLOAT_INTENSITY: f64 = 20.0;
pub const DEFAULT_FLOAT_DURATION: f64 = 3.0;
pub const DEFAULT_PARTICLE_COUNT: usize = 20;

/// Entrance direction for reveals and stagger groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Scale,
    Flip,
    /// Anything the vocabulary does not know. Resolves to a plain fade.
    Fade,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Scale,
        Direction::Flip,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "up" => Direction::Up,
            "down" => Direction::Down,
            "left" => Direction::Left,
            "right" => Direction::Right,
            "scale" => Direction::Scale,
            "flip" => Direction::Flip,
            _ => Direction::Fade,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Scale => "scale",
            Direction::Flip => "flip",
            Direction::Fade => "fade",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|r| r.trim().to_ascii_lowercase()) {
            Some(ref r) if r == "x" => Axis::X,
            _ => Axis::Y,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealDirective {
    pub target: ElementId,
    pub direction: Direction,
    pub delay: f64,
    pub duration: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StaggerGroup {
    pub container: ElementId,
    /// Children in DOM order.
    pub children: Vec<ElementId>,
    pub interval: f64,
    pub direction: Direction,
    pub duration: f64,
}

impl StaggerGroup {
    pub fn delay_for(&self, index: usize) -> f64 {
        stagger_delay(index, self.interval)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxDirective {
    pub target: ElementId,
    pub speed: f64,
    pub axis: Axis,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MorphDirective {
    pub target: ElementId,
    pub from_scale: f64,
    pub to_scale: f64,
    pub from_rotation: f64,
    pub to_rotation: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MagneticDirective {
    pub target: ElementId,
    pub strength: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatDirective {
    pub target: ElementId,
    pub intensity: f64,
    pub duration: f64,
    /// Position among the float directives of one scan; drives the
    /// per-element amplitude and period offsets.
    pub index: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    pub container: ElementId,
    pub count: usize,
}

/// Everything one scan found, each list in DOM order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectiveSet {
    pub reveals: Vec<RevealDirective>,
    pub staggers: Vec<StaggerGroup>,
    pub parallax: Vec<ParallaxDirective>,
    pub morphs: Vec<MorphDirective>,
    pub magnetic: Vec<MagneticDirective>,
    pub floats: Vec<FloatDirective>,
    pub particles: Vec<ParticleField>,
}

impl DirectiveSet {
    pub fn is_empty(&self) -> bool {
        self.reveals.is_empty()
            && self.staggers.is_empty()
            && self.parallax.is_empty()
            && self.morphs.is_empty()
            && self.magnetic.is_empty()
            && self.floats.is_empty()
            && self.particles.is_empty()
    }
}

pub fn stagger_delay(index: usize, interval: f64) -> f64 {
    index as f64 * interval
}

/// Parses a non-negative number, falling back to `default`.
pub fn parse_seconds(raw: Option<&str>, default: f64) -> f64 {
    match parse_signed(raw, default) {
        v if v < 0.0 => default,
        v => v,
    }
}

/// Parses any finite number, falling back to `default`.
pub fn parse_signed(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|r| r.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

pub fn parse_count(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|r| r.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

/// Formats seconds for an attribute value, e.g. `seconds(0.25)` → `"0.25"`.
pub fn seconds(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_round_trip_through_attribute_text() {
        for direction in Direction::ALL {
            assert_eq!(Direction::parse(direction.as_attr()), direction);
        }
        assert_eq!(Direction::parse("  UP "), Direction::Up);
    }

    #[test]
    fn unknown_direction_is_a_fade() {
        assert_eq!(Direction::parse("diagonal"), Direction::Fade);
        assert_eq!(Direction::parse(""), Direction::Fade);
    }

    #[test]
    fn stagger_interval_defaults_when_missing_or_garbage() {
        assert_eq!(parse_seconds(None, DEFAULT_STAGGER_INTERVAL), 0.1);
        assert_eq!(parse_seconds(Some("fast"), DEFAULT_STAGGER_INTERVAL), 0.1);
        assert_eq!(parse_seconds(Some(""), DEFAULT_STAGGER_INTERVAL), 0.1);
        assert_eq!(parse_seconds(Some("-2"), DEFAULT_STAGGER_INTERVAL), 0.1);
        assert_eq!(parse_seconds(Some("NaN"), DEFAULT_STAGGER_INTERVAL), 0.1);
        assert_eq!(parse_seconds(Some(" 0.25 "), DEFAULT_STAGGER_INTERVAL), 0.25);
    }

    #[test]
    fn rotations_accept_negative_values() {
        assert_eq!(parse_signed(Some("-12.5"), 0.0), -12.5);
        assert_eq!(parse_signed(Some("inf"), 3.0), 3.0);
    }

    #[test]
    fn axis_defaults_to_vertical() {
        assert_eq!(Axis::parse(None), Axis::Y);
        assert_eq!(Axis::parse(Some("X")), Axis::X);
        assert_eq!(Axis::parse(Some("z")), Axis::Y);
    }
}
