use std::collections::HashMap;

use log::debug;

use super::directive::{FloatDirective, MorphDirective, ParallaxDirective};
use super::idle::FloatTrack;
use super::node::{ElementId, MotionNode, Rect, Viewport};
use super::pointer::MagneticTrack;
use super::scan::{scan, Registry};
use super::transform::VisualState;
use super::trigger::{morph_state, parallax_offset, scroll_progress, OneShot, ReplayPolicy, Threshold, TriggerState, DEFAULT_START_FRACTION};

const PARTICLE_INTENSITY: f64 = 15.0;
const PARTICLE_DURATION: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionOptions {
    pub start_fraction: f64,
    pub replay: ReplayPolicy,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self { start_fraction: DEFAULT_START_FRACTION, replay: ReplayPolicy::Once }
    }
}

/// Owns every directive found under one page root and turns scroll, pointer
/// and frame samples into style writes.
///
/// Layers are composed per element in a fixed order: an entrance that has
/// not started yet pins the element to its hidden state; afterwards morph,
/// parallax, float and magnetic layers stack on top of the entrance state.
pub struct Orchestrator<N> {
    options: MotionOptions,
    threshold: Threshold,
    registry: Registry<N>,
    one_shots: Vec<OneShot>,
    parallax: Vec<ParallaxDirective>,
    morphs: Vec<MorphDirective>,
    magnets: Vec<MagneticTrack>,
    floats: Vec<FloatTrack>,
    spawned: Vec<ElementId>,
    parallax_layer: HashMap<ElementId, VisualState>,
    morph_layer: HashMap<ElementId, VisualState>,
    written: HashMap<ElementId, VisualState>,
    disposed: bool,
}

impl<N: MotionNode + PartialEq> Orchestrator<N> {
    pub fn mount(root: &N, options: MotionOptions, now: f64) -> Self {
        let (mut registry, set) = scan(root);

        let mut floats: Vec<FloatTrack> = set.floats.iter().map(|f| FloatTrack::new(f, now)).collect();
        let mut spawned = Vec::new();
        let mut index = set.floats.len();
        for field in &set.particles {
            let Some(container) = registry.get(field.container).cloned() else {
                continue;
            };
            for i in 0..field.count {
                let Some(particle) = container.spawn_particle(i) else {
                    continue;
                };
                let target = registry.intern(particle);
                spawned.push(target);
                floats.push(FloatTrack::new(
                    &FloatDirective { target, intensity: PARTICLE_INTENSITY, duration: PARTICLE_DURATION, index },
                    now,
                ));
                index += 1;
            }
        }

        let mut one_shots: Vec<OneShot> = set
            .reveals
            .iter()
            .map(OneShot::reveal)
            .chain(set.staggers.iter().map(OneShot::stagger))
            .collect();
        one_shots.iter_mut().for_each(OneShot::arm);

        let morph_layer = set.morphs.iter().map(|m| (m.target, morph_state(m, 0.0))).collect();

        debug!(
            "motion: {} one-shots, {} parallax, {} morph, {} magnetic, {} float across {} elements",
            one_shots.len(),
            set.parallax.len(),
            set.morphs.len(),
            set.magnetic.len(),
            floats.len(),
            registry.len()
        );

        let mut orchestrator = Self {
            threshold: Threshold::new(options.start_fraction),
            options,
            registry,
            one_shots,
            parallax: set.parallax,
            morphs: set.morphs,
            magnets: set.magnetic.iter().map(MagneticTrack::new).collect(),
            floats,
            spawned,
            parallax_layer: HashMap::new(),
            morph_layer,
            written: HashMap::new(),
            disposed: false,
        };
        orchestrator.render(now);
        orchestrator
    }

    pub fn on_scroll(&mut self, viewport: Viewport, now: f64) {
        if self.disposed {
            return;
        }
        let policy = self.options.replay;
        let trigger_rects: Vec<_> = self.one_shots.iter().map(|s| self.layout_bounds(s.trigger)).collect();
        for (shot, rect) in self.one_shots.iter_mut().zip(trigger_rects) {
            if let Some(rect) = rect {
                shot.observe(&rect, &viewport, &self.threshold, policy, now);
            }
        }

        let mut parallax_layer = HashMap::new();
        for directive in &self.parallax {
            let Some(rect) = self.layout_bounds(directive.target) else {
                continue;
            };
            if let Some(offset) = parallax_offset(directive, &rect, &viewport) {
                parallax_layer.insert(directive.target, offset);
            }
        }
        self.parallax_layer.extend(parallax_layer);

        let mut morph_layer = HashMap::new();
        for directive in &self.morphs {
            let Some(rect) = self.layout_bounds(directive.target) else {
                continue;
            };
            if let Some(progress) = scroll_progress(&rect, &viewport) {
                morph_layer.insert(directive.target, morph_state(directive, progress));
            }
        }
        self.morph_layer.extend(morph_layer);

        self.render(now);
    }

    pub fn on_pointer_move(&mut self, target: ElementId, pointer: (f64, f64), now: f64) {
        if self.disposed {
            return;
        }
        let Some(bounds) = self.layout_bounds(target) else {
            return;
        };
        for magnet in self.magnets.iter_mut().filter(|m| m.target == target) {
            magnet.follow(&bounds, pointer, now);
        }
        self.render(now);
    }

    pub fn on_pointer_leave(&mut self, target: ElementId, now: f64) {
        if self.disposed {
            return;
        }
        for magnet in self.magnets.iter_mut().filter(|m| m.target == target) {
            magnet.release(now);
        }
        self.render(now);
    }

    /// Advances running tweens and idle motion by one frame.
    pub fn tick(&mut self, now: f64) {
        if self.disposed {
            return;
        }
        let policy = self.options.replay;
        for shot in self.one_shots.iter_mut() {
            shot.tick(policy, now);
        }
        self.render(now);
    }

    /// Cancels everything and lets go of every node. Safe to call again.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        for id in self.spawned.drain(..) {
            if let Some(node) = self.registry.get(id) {
                node.remove();
            }
        }
        self.one_shots.clear();
        self.parallax.clear();
        self.morphs.clear();
        self.magnets.clear();
        self.floats.clear();
        self.parallax_layer.clear();
        self.morph_layer.clear();
        self.written.clear();
        self.registry.clear();
        debug!("motion: disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn id_of(&self, node: &N) -> Option<ElementId> {
        self.registry.position(node)
    }

    /// Elements that want pointer listeners.
    pub fn magnetic_targets(&self) -> Vec<(ElementId, N)> {
        self.magnets
            .iter()
            .filter_map(|m| self.registry.get(m.target).map(|n| (m.target, n.clone())))
            .collect()
    }

    pub fn trigger_state(&self, target: ElementId) -> Option<TriggerState> {
        self.one_shots
            .iter()
            .find(|s| s.trigger == target || s.member(target).is_some())
            .map(OneShot::state)
    }

    pub fn start_delay(&self, target: ElementId) -> Option<f64> {
        self.one_shots.iter().find_map(|s| s.start_delay(target))
    }

    /// Measured bounds with our own last write undone, so every sample
    /// depends on scroll position alone.
    fn layout_bounds(&self, id: ElementId) -> Option<Rect> {
        let rect = self.registry.get(id)?.bounds()?;
        Some(match self.written.get(&id) {
            Some(state) => state.untransform_rect(&rect),
            None => rect,
        })
    }

    fn render(&mut self, now: f64) {
        for index in 0..self.registry.len() {
            let id = ElementId(index);
            let Some(state) = self.compose(id, now) else {
                continue;
            };
            if self.written.get(&id) == Some(&state) {
                continue;
            }
            if let Some(node) = self.registry.get(id) {
                node.apply(&state);
                self.written.insert(id, state);
            }
        }
    }

    fn compose(&self, id: ElementId, now: f64) -> Option<VisualState> {
        let mut layered = false;
        let mut state = VisualState::IDENTITY;

        for shot in &self.one_shots {
            if let Some(sample) = shot.sample(id, now) {
                if !shot.has_started() {
                    return Some(sample);
                }
                layered = true;
                state = sample;
            }
        }

        if let Some(morph) = self.morph_layer.get(&id) {
            layered = true;
            state = state.compose(morph);
        }
        if let Some(offset) = self.parallax_layer.get(&id) {
            layered = true;
            state = state.compose(offset);
        } else if self.parallax.iter().any(|p| p.target == id) {
            layered = true;
        }
        for float in self.floats.iter().filter(|f| f.target == id) {
            layered = true;
            state = state.compose(&float.sample(now));
        }
        for magnet in self.magnets.iter().filter(|m| m.target == id) {
            layered = true;
            state = state.compose(&magnet.current(now));
        }

        layered.then_some(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::directive::*;
    use crate::motion::node::{MotionNode, Rect};
    use crate::motion::testing::MockNode;
    use crate::motion::transform::{reveal_pair, stagger_pair};

    const VIEW: Viewport = Viewport { width: 1280.0, height: 1000.0 };

    fn below_fold(node: MockNode) -> MockNode {
        node.with_bounds(Rect::new(0.0, 1400.0, 400.0, 300.0))
    }

    #[test]
    fn mount_hides_entrances_until_their_trigger_fires() {
        let root = MockNode::new("root");
        let heading = below_fold(MockNode::new("heading").with_attr(ATTR_REVEAL, "flip"));
        root.append(&heading);

        let mut motion = Orchestrator::mount(&root, MotionOptions::default(), 0.0);
        assert_eq!(heading.last_applied(), Some(reveal_pair(Direction::Flip).from));

        motion.on_scroll(VIEW, 0.1);
        assert_eq!(heading.apply_count(), 1);

        heading.set_top(790.0);
        motion.on_scroll(VIEW, 0.2);
        motion.tick(5.0);
        assert_eq!(heading.last_applied(), Some(VisualState::IDENTITY));
    }

    #[test]
    fn settled_reveal_ignores_repeat_intersections() {
        let root = MockNode::new("root");
        let card = below_fold(MockNode::new("card").with_attr(ATTR_REVEAL, "up"));
        root.append(&card);
        let mut motion = Orchestrator::mount(&root, MotionOptions::default(), 0.0);
        let id = motion.id_of(&card).expect("card is tracked");

        card.set_top(500.0);
        motion.on_scroll(VIEW, 1.0);
        motion.tick(1.5);
        motion.tick(2.5);
        assert_eq!(motion.trigger_state(id), Some(TriggerState::Settled));
        let writes = card.apply_count();

        card.set_top(-2000.0);
        motion.on_scroll(VIEW, 3.0);
        card.set_top(500.0);
        motion.on_scroll(VIEW, 4.0);
        motion.tick(4.5);
        motion.tick(9.0);

        assert_eq!(card.apply_count(), writes);
        assert_eq!(card.last_applied(), Some(VisualState::IDENTITY));
    }

    #[test]
    fn replaying_pages_hide_and_replay_on_reentry() {
        let root = MockNode::new("root");
        let card = below_fold(MockNode::new("card").with_attr(ATTR_REVEAL, "right"));
        root.append(&card);
        let options = MotionOptions { replay: ReplayPolicy::Replay, ..MotionOptions::default() };
        let mut motion = Orchestrator::mount(&root, options, 0.0);

        card.set_top(400.0);
        motion.on_scroll(VIEW, 0.0);
        motion.tick(3.0);
        assert_eq!(card.last_applied(), Some(VisualState::IDENTITY));

        card.set_top(-800.0);
        motion.on_scroll(VIEW, 4.0);
        assert_eq!(card.last_applied(), Some(reveal_pair(Direction::Right).from));

        card.set_top(400.0);
        motion.on_scroll(VIEW, 5.0);
        motion.tick(7.0);
        assert_eq!(card.last_applied(), Some(VisualState::IDENTITY));
    }

    #[test]
    fn stagger_children_start_at_index_times_interval() {
        let root = MockNode::new("root");
        let grid = below_fold(MockNode::new("grid").with_attr(ATTR_STAGGER, "0.2"));
        root.append(&grid);
        let items: Vec<MockNode> = (0..5).map(|i| MockNode::new(&format!("item-{i}"))).collect();
        for item in &items {
            grid.append(item);
        }
        let motion = Orchestrator::mount(&root, MotionOptions::default(), 0.0);

        for n in [0usize, 1, 4] {
            let id = motion.id_of(&items[n]);
            let delay = id.and_then(|id| motion.start_delay(id));
            assert_eq!(delay, Some(n as f64 * 0.2), "child {n}");
        }
        assert_eq!(items[3].last_applied(), Some(stagger_pair(Direction::Up).from));
    }

    #[test]
    fn stagger_group_fires_from_the_container_position() {
        let root = MockNode::new("root");
        let grid = below_fold(MockNode::new("grid").with_attr(ATTR_STAGGER, "0.5"));
        root.append(&grid);
        let first = MockNode::new("first").with_bounds(Rect::new(0.0, 100.0, 10.0, 10.0));
        let second = MockNode::new("second").with_bounds(Rect::new(0.0, 100.0, 10.0, 10.0));
        grid.append(&first);
        grid.append(&second);
        let mut motion = Orchestrator::mount(&root, MotionOptions::default(), 0.0);

        motion.on_scroll(VIEW, 0.0);
        motion.tick(0.2);
        assert_eq!(second.last_applied(), Some(stagger_pair(Direction::Up).from));

        grid.set_top(600.0);
        motion.on_scroll(VIEW, 1.0);
        motion.tick(1.25);
        let first_y = first.last_applied().map(|s| s.y).unwrap_or_default();
        assert!(first_y < stagger_pair(Direction::Up).from.y);
        assert_eq!(second.last_applied(), Some(stagger_pair(Direction::Up).from));

        motion.tick(3.0);
        assert_eq!(second.last_applied(), Some(VisualState::IDENTITY));
    }

    #[test]
    fn unrevealed_elements_do_not_float() {
        let root = MockNode::new("root");
        let badge = below_fold(
            MockNode::new("badge")
                .with_attr(ATTR_REVEAL, "scale")
                .with_attr(ATTR_FLOAT, "10"),
        );
        root.append(&badge);
        let mut motion = Orchestrator::mount(&root, MotionOptions::default(), 0.0);

        motion.tick(0.7);
        motion.tick(1.3);
        assert_eq!(badge.apply_count(), 1);

        badge.set_top(300.0);
        motion.on_scroll(VIEW, 2.0);
        motion.tick(3.0);
        motion.tick(4.1);
        let state = badge.last_applied().unwrap_or_default();
        assert_eq!(state.opacity, 1.0);
        assert_ne!(state.y, 0.0);
    }

    #[test]
    fn parallax_stops_sampling_outside_its_range() {
        let root = MockNode::new("root");
        let bg = MockNode::new("bg")
            .with_attr(ATTR_PARALLAX, "0.5")
            .with_bounds(Rect::new(0.0, 200.0, 400.0, 200.0));
        root.append(&bg);
        let mut motion = Orchestrator::mount(&root, MotionOptions::default(), 0.0);

        motion.on_scroll(VIEW, 0.0);
        assert_eq!(bg.last_applied().map(|s| s.y), Some(-100.0));

        bg.set_top(-500.0);
        motion.on_scroll(VIEW, 0.1);
        assert_eq!(bg.last_applied().map(|s| s.y), Some(-100.0));
    }

    #[test]
    fn parallax_ignores_its_own_transform_when_measuring() {
        for (speed, expected) in [("0.5", -100.0), ("1.5", -300.0)] {
            let root = MockNode::new("root");
            let bg = MockNode::new("bg")
                .with_attr(ATTR_PARALLAX, speed)
                .with_bounds(Rect::new(0.0, 200.0, 400.0, 200.0))
                .with_transformed_bounds();
            root.append(&bg);
            let mut motion = Orchestrator::mount(&root, MotionOptions::default(), 0.0);

            for step in 0..6 {
                motion.on_scroll(VIEW, step as f64 * 0.1);
                assert_eq!(bg.last_applied().map(|s| s.y), Some(expected), "speed {speed} step {step}");
            }

            bg.set_top(600.0);
            motion.on_scroll(VIEW, 1.0);
            motion.on_scroll(VIEW, 1.1);
            assert_eq!(bg.last_applied().map(|s| s.y), Some(-expected), "speed {speed}");
        }
    }

    #[test]
    fn reveal_threshold_uses_the_layout_position() {
        let root = MockNode::new("root");
        let card = below_fold(MockNode::new("card").with_attr(ATTR_REVEAL, "up")).with_transformed_bounds();
        root.append(&card);
        let mut motion = Orchestrator::mount(&root, MotionOptions::default(), 0.0);
        let id = motion.id_of(&card).expect("card is tracked");

        // Drawn 60px lower while hidden, but laid out above the 80% line.
        card.set_top(780.0);
        motion.on_scroll(VIEW, 1.0);
        assert_ne!(motion.trigger_state(id), Some(TriggerState::Armed));
        motion.tick(5.0);
        assert_eq!(card.last_applied(), Some(VisualState::IDENTITY));
    }

    #[test]
    fn morph_progress_is_stable_at_a_fixed_scroll() {
        let root = MockNode::new("root");
        let panel = MockNode::new("panel")
            .with_attr(ATTR_MORPH, "")
            .with_bounds(Rect::new(0.0, 500.0, 400.0, 200.0))
            .with_transformed_bounds();
        root.append(&panel);
        let mut motion = Orchestrator::mount(&root, MotionOptions::default(), 0.0);

        motion.on_scroll(VIEW, 0.0);
        let first = panel.last_applied().map(|s| s.scale).unwrap_or_default();
        assert!(first > 0.8 && first < 1.0);
        for step in 1..5 {
            motion.on_scroll(VIEW, step as f64 * 0.1);
            let scale = panel.last_applied().map(|s| s.scale).unwrap_or_default();
            assert!((scale - first).abs() < 1e-9, "step {step}: {scale} vs {first}");
        }
    }

    #[test]
    fn floating_continues_while_scrolled_out_of_view() {
        let root = MockNode::new("root");
        let bubble = MockNode::new("bubble")
            .with_attr(ATTR_FLOAT, "20")
            .with_bounds(Rect::new(0.0, 300.0, 40.0, 40.0));
        root.append(&bubble);
        let mut motion = Orchestrator::mount(&root, MotionOptions::default(), 0.0);

        let sample = |motion: &mut Orchestrator<MockNode>, now: f64| {
            motion.tick(now);
            bubble.last_applied().map(|s| s.y).unwrap_or_default()
        };

        let on_screen = sample(&mut motion, 0.5);

        bubble.set_top(-5000.0);
        motion.on_scroll(VIEW, 1.0);
        let away = [sample(&mut motion, 1.25), sample(&mut motion, 2.0), sample(&mut motion, 3.5)];
        assert_ne!(away[0], on_screen);
        assert_ne!(away[1], away[0]);
        assert_ne!(away[2], away[1]);

        bubble.set_top(300.0);
        motion.on_scroll(VIEW, 4.0);
        let back = sample(&mut motion, 4.25);
        assert_ne!(back, away[2]);
        assert!(back < 0.0);
    }

    #[test]
    fn magnetic_elements_follow_and_return() {
        let root = MockNode::new("root");
        let button = MockNode::new("cta")
            .with_attr(ATTR_MAGNETIC, "0.4")
            .with_bounds(Rect::new(0.0, 0.0, 100.0, 40.0));
        root.append(&button);
        let mut motion = Orchestrator::mount(&root, MotionOptions::default(), 0.0);
        let targets = motion.magnetic_targets();
        assert_eq!(targets.len(), 1);
        let id = targets[0].0;

        motion.on_pointer_move(id, (100.0, 20.0), 1.0);
        motion.tick(2.0);
        assert_eq!(button.last_applied().map(|s| s.x), Some(20.0));

        motion.on_pointer_leave(id, 3.0);
        motion.tick(5.0);
        assert_eq!(button.last_applied(), Some(VisualState::IDENTITY));
    }

    #[test]
    fn dispose_stops_all_writes_and_is_idempotent() {
        let root = MockNode::new("root");
        let card = below_fold(MockNode::new("card").with_attr(ATTR_REVEAL, "down"));
        let cta = MockNode::new("cta")
            .with_attr(ATTR_MAGNETIC, "0.3")
            .with_bounds(Rect::new(0.0, 0.0, 100.0, 40.0));
        let sky = MockNode::new("sky").with_attr(ATTR_PARTICLES, "6");
        root.append(&card);
        root.append(&cta);
        root.append(&sky);
        let mut motion = Orchestrator::mount(&root, MotionOptions::default(), 0.0);
        assert_eq!(sky.child_count(), 6);
        let id = motion.magnetic_targets()[0].0;
        let card_writes = card.apply_count();
        let cta_writes = cta.apply_count();

        motion.dispose();
        motion.dispose();
        assert!(motion.is_disposed());
        assert_eq!(sky.child_count(), 0);

        card.set_top(100.0);
        motion.on_scroll(VIEW, 1.0);
        motion.on_pointer_move(id, (90.0, 10.0), 1.0);
        motion.on_pointer_leave(id, 1.5);
        motion.tick(3.0);
        assert_eq!(card.apply_count(), card_writes);
        assert_eq!(cta.apply_count(), cta_writes);
        assert!(motion.magnetic_targets().is_empty());
    }

    #[test]
    fn particles_drift_without_any_scroll() {
        let root = MockNode::new("root");
        let sky = MockNode::new("sky").with_attr(ATTR_PARTICLES, "3");
        root.append(&sky);
        let mut motion = Orchestrator::mount(&root, MotionOptions::default(), 0.0);
        let particle = sky.children().remove(0);
        let before = particle.apply_count();
        motion.tick(1.0);
        motion.tick(2.0);
        assert!(particle.apply_count() > before);
    }
}
