//! Viewport triggers: one-shot entrances and continuous scroll scrubbing.

use super::directive::{Axis, MorphDirective, ParallaxDirective, RevealDirective, StaggerGroup};
use super::node::{ElementId, Rect, Viewport};
use super::transform::{reveal_pair, stagger_pair, Easing, TransformPair, Tween, VisualState};

pub const DEFAULT_START_FRACTION: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerState {
    Idle,
    Armed,
    Playing,
    Settled,
}

/// Whether an entrance replays after its trigger leaves the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReplayPolicy {
    #[default]
    Once,
    Replay,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold {
    /// Fraction of the viewport height, measured from the top, that the
    /// trigger's top edge has to reach.
    pub start_fraction: f64,
}

impl Threshold {
    pub fn new(start_fraction: f64) -> Self {
        Self { start_fraction: start_fraction.clamp(0.0, 1.0) }
    }

    pub fn is_crossed(&self, rect: &Rect, viewport: &Viewport) -> bool {
        rect.top <= viewport.height * self.start_fraction
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::new(DEFAULT_START_FRACTION)
    }
}

pub fn is_outside(rect: &Rect, viewport: &Viewport) -> bool {
    rect.bottom() < 0.0 || rect.top > viewport.height
}

#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    pub target: ElementId,
    pub delay: f64,
    pub pair: TransformPair,
}

/// A reveal or a stagger group: one trigger element, one or more animated
/// members that start at fixed offsets once the trigger fires.
#[derive(Clone, Debug, PartialEq)]
pub struct OneShot {
    pub trigger: ElementId,
    pub members: Vec<Member>,
    pub duration: f64,
    state: TriggerState,
    fired_at: Option<f64>,
}

impl OneShot {
    pub fn reveal(directive: &RevealDirective) -> Self {
        Self::new(
            directive.target,
            vec![Member {
                target: directive.target,
                delay: directive.delay,
                pair: reveal_pair(directive.direction),
            }],
            directive.duration,
        )
    }

    pub fn stagger(group: &StaggerGroup) -> Self {
        let pair = stagger_pair(group.direction);
        let members = group
            .children
            .iter()
            .enumerate()
            .map(|(index, target)| Member { target: *target, delay: group.delay_for(index), pair })
            .collect();
        Self::new(group.container, members, group.duration)
    }

    fn new(trigger: ElementId, members: Vec<Member>, duration: f64) -> Self {
        Self { trigger, members, duration, state: TriggerState::Idle, fired_at: None }
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn arm(&mut self) {
        if self.state == TriggerState::Idle {
            self.state = TriggerState::Armed;
        }
    }

    /// Feeds one scroll sample of the trigger element. Returns `true` when
    /// the state changed.
    pub fn observe(
        &mut self,
        rect: &Rect,
        viewport: &Viewport,
        threshold: &Threshold,
        policy: ReplayPolicy,
        now: f64,
    ) -> bool {
        match (self.state, policy) {
            (TriggerState::Armed, ReplayPolicy::Once) if threshold.is_crossed(rect, viewport) => {
                self.fire(now);
                true
            }
            (TriggerState::Armed, ReplayPolicy::Replay)
                if threshold.is_crossed(rect, viewport) && !is_outside(rect, viewport) =>
            {
                self.fire(now);
                true
            }
            (TriggerState::Playing, ReplayPolicy::Replay) if is_outside(rect, viewport) => {
                self.state = TriggerState::Armed;
                self.fired_at = None;
                true
            }
            _ => false,
        }
    }

    fn fire(&mut self, now: f64) {
        self.state = TriggerState::Playing;
        self.fired_at = Some(now);
    }

    pub fn tick(&mut self, policy: ReplayPolicy, now: f64) {
        if self.state == TriggerState::Playing
            && policy == ReplayPolicy::Once
            && self.members.iter().all(|m| self.tween(m).map_or(true, |t| t.is_finished(now)))
        {
            self.state = TriggerState::Settled;
        }
    }

    pub fn has_started(&self) -> bool {
        matches!(self.state, TriggerState::Playing | TriggerState::Settled)
    }

    pub fn member(&self, target: ElementId) -> Option<&Member> {
        self.members.iter().find(|m| m.target == target)
    }

    /// Seconds between the trigger firing and `target` starting to move.
    pub fn start_delay(&self, target: ElementId) -> Option<f64> {
        self.member(target).map(|m| m.delay)
    }

    pub fn sample(&self, target: ElementId, now: f64) -> Option<VisualState> {
        let member = self.member(target)?;
        Some(match self.state {
            TriggerState::Idle | TriggerState::Armed => member.pair.from,
            TriggerState::Playing => self.tween(member).map_or(member.pair.to, |t| t.sample(now)),
            TriggerState::Settled => member.pair.to,
        })
    }

    fn tween(&self, member: &Member) -> Option<Tween> {
        self.fired_at.map(|fired| {
            Tween::new(member.pair.from, member.pair.to, fired + member.delay, self.duration, Easing::Power3Out)
        })
    }
}

/// Progress through the range that starts when the element's top enters at
/// the bottom of the viewport and ends when its bottom leaves at the top.
/// `None` outside that range.
pub fn scroll_progress(rect: &Rect, viewport: &Viewport) -> Option<f64> {
    if rect.top >= viewport.height || rect.bottom() <= 0.0 {
        return None;
    }
    let span = viewport.height + rect.height;
    if span <= 0.0 {
        return None;
    }
    Some(((viewport.height - rect.top) / span).clamp(0.0, 1.0))
}

/// Translation for a parallax element, zero when it sits centred in view.
pub fn parallax_offset(directive: &ParallaxDirective, rect: &Rect, viewport: &Viewport) -> Option<VisualState> {
    scroll_progress(rect, viewport)?;
    let travelled = viewport.height - rect.top;
    let midpoint = (viewport.height + rect.height) / 2.0;
    let shift = (midpoint - travelled) * directive.speed;
    Some(match directive.axis {
        Axis::X => VisualState::translation(shift, 0.0),
        Axis::Y => VisualState::translation(0.0, shift),
    })
}

pub fn morph_state(directive: &MorphDirective, progress: f64) -> VisualState {
    let p = progress.clamp(0.0, 1.0);
    VisualState {
        scale: directive.from_scale + (directive.to_scale - directive.from_scale) * p,
        rotate: directive.from_rotation + (directive.to_rotation - directive.from_rotation) * p,
        ..VisualState::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::directive::Direction;

    const VIEW: Viewport = Viewport { width: 1200.0, height: 1000.0 };

    fn reveal() -> OneShot {
        let mut shot = OneShot::reveal(&RevealDirective {
            target: ElementId(0),
            direction: Direction::Up,
            delay: 0.0,
            duration: 1.0,
        });
        shot.arm();
        shot
    }

    fn at(top: f64) -> Rect {
        Rect::new(0.0, top, 300.0, 200.0)
    }

    #[test]
    fn fires_once_the_top_edge_reaches_eighty_percent() {
        let mut shot = reveal();
        let threshold = Threshold::default();
        assert!(!shot.observe(&at(850.0), &VIEW, &threshold, ReplayPolicy::Once, 0.0));
        assert_eq!(shot.state(), TriggerState::Armed);
        assert!(shot.observe(&at(800.0), &VIEW, &threshold, ReplayPolicy::Once, 0.0));
        assert_eq!(shot.state(), TriggerState::Playing);
    }

    #[test]
    fn settles_after_the_tween_and_ignores_later_samples() {
        let mut shot = reveal();
        let threshold = Threshold::default();
        shot.observe(&at(500.0), &VIEW, &threshold, ReplayPolicy::Once, 1.0);
        shot.tick(ReplayPolicy::Once, 1.5);
        assert_eq!(shot.state(), TriggerState::Playing);
        shot.tick(ReplayPolicy::Once, 2.0);
        assert_eq!(shot.state(), TriggerState::Settled);

        assert!(!shot.observe(&at(-900.0), &VIEW, &threshold, ReplayPolicy::Once, 3.0));
        assert!(!shot.observe(&at(500.0), &VIEW, &threshold, ReplayPolicy::Once, 4.0));
        assert_eq!(shot.sample(ElementId(0), 4.0), Some(VisualState::IDENTITY));
    }

    #[test]
    fn replay_policy_rearms_on_exit() {
        let mut shot = reveal();
        let threshold = Threshold::default();
        shot.observe(&at(500.0), &VIEW, &threshold, ReplayPolicy::Replay, 0.0);
        shot.tick(ReplayPolicy::Replay, 5.0);
        assert_eq!(shot.state(), TriggerState::Playing);

        assert!(shot.observe(&at(1200.0), &VIEW, &threshold, ReplayPolicy::Replay, 6.0));
        assert_eq!(shot.state(), TriggerState::Armed);
        assert_eq!(shot.sample(ElementId(0), 6.0), Some(reveal_pair(Direction::Up).from));

        assert!(shot.observe(&at(700.0), &VIEW, &threshold, ReplayPolicy::Replay, 7.0));
        assert_eq!(shot.state(), TriggerState::Playing);
    }

    #[test]
    fn stagger_members_start_at_index_times_interval() {
        let group = StaggerGroup {
            container: ElementId(0),
            children: (1..=5).map(ElementId).collect(),
            interval: 0.15,
            direction: Direction::Up,
            duration: 1.0,
        };
        let shot = OneShot::stagger(&group);
        assert_eq!(shot.start_delay(ElementId(1)), Some(0.0));
        assert_eq!(shot.start_delay(ElementId(2)), Some(0.15));
        assert_eq!(shot.start_delay(ElementId(5)), Some(4.0 * 0.15));
        assert_eq!(shot.trigger, ElementId(0));
    }

    #[test]
    fn progress_spans_entry_to_exit() {
        assert_eq!(scroll_progress(&at(1000.0), &VIEW), None);
        assert_eq!(scroll_progress(&at(-200.0), &VIEW), None);
        assert_eq!(scroll_progress(&at(400.0), &VIEW), Some(0.5));
    }

    #[test]
    fn parallax_is_still_when_centred() {
        let directive = ParallaxDirective { target: ElementId(0), speed: 0.5, axis: Axis::Y };
        let centred = parallax_offset(&directive, &at(400.0), &VIEW);
        assert_eq!(centred, Some(VisualState::IDENTITY));
        let later = parallax_offset(&directive, &at(200.0), &VIEW).map(|s| s.y);
        assert_eq!(later, Some(-100.0));
        assert_eq!(parallax_offset(&directive, &at(1500.0), &VIEW), None);
    }

    #[test]
    fn morph_interpolates_scale_and_rotation() {
        let directive = MorphDirective {
            target: ElementId(0),
            from_scale: 0.8,
            to_scale: 1.0,
            from_rotation: -5.0,
            to_rotation: 0.0,
        };
        let mid = morph_state(&directive, 0.5);
        assert!((mid.scale - 0.9).abs() < 1e-9);
        assert!((mid.rotate + 2.5).abs() < 1e-9);
        assert_eq!(morph_state(&directive, 2.0).scale, 1.0);
    }
}
