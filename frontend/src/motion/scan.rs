//! Walks a rendered subtree and turns marker attributes into typed directives.
//!
//! The scan only reads. Hidden initial states are written later by the
//! orchestrator once every directive is known.

use super::directive::*;
use super::node::{ElementId, MotionNode};

/// Nodes seen by one scan, addressed by `ElementId`.
#[derive(Clone, Debug)]
pub struct Registry<N> {
    nodes: Vec<N>,
}

impl<N: MotionNode + PartialEq> Registry<N> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Returns the existing id when the node is already tracked.
    pub fn intern(&mut self, node: N) -> ElementId {
        if let Some(pos) = self.nodes.iter().position(|n| *n == node) {
            return ElementId(pos);
        }
        self.nodes.push(node);
        ElementId(self.nodes.len() - 1)
    }

    pub fn position(&self, node: &N) -> Option<ElementId> {
        self.nodes.iter().position(|n| n == node).map(ElementId)
    }

    pub fn get(&self, id: ElementId) -> Option<&N> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<N: MotionNode + PartialEq> Default for Registry<N> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn scan<N: MotionNode + PartialEq>(root: &N) -> (Registry<N>, DirectiveSet) {
    let mut registry = Registry::new();
    let mut set = DirectiveSet::default();

    for node in live(root.query_all(ATTR_REVEAL)) {
        let direction = Direction::parse(&node.attr(ATTR_REVEAL).unwrap_or_default());
        let delay = parse_seconds(node.attr(ATTR_DELAY).as_deref(), DEFAULT_DELAY);
        let duration = parse_seconds(node.attr(ATTR_DURATION).as_deref(), DEFAULT_DURATION);
        set.reveals.push(RevealDirective {
            target: registry.intern(node),
            direction,
            delay,
            duration,
        });
    }

    for node in live(root.query_all(ATTR_STAGGER)) {
        let interval = parse_seconds(node.attr(ATTR_STAGGER).as_deref(), DEFAULT_STAGGER_INTERVAL);
        let direction = node
            .attr(ATTR_STAGGER_DIRECTION)
            .map(|d| Direction::parse(&d))
            .unwrap_or(Direction::Up);
        let duration = parse_seconds(node.attr(ATTR_DURATION).as_deref(), DEFAULT_DURATION);
        let children = live(node.children())
            .map(|child| registry.intern(child))
            .collect();
        set.staggers.push(StaggerGroup {
            container: registry.intern(node),
            children,
            interval,
            direction,
            duration,
        });
    }

    for node in live(root.query_all(ATTR_PARALLAX)) {
        let speed = parse_signed(node.attr(ATTR_PARALLAX).as_deref(), DEFAULT_PARALLAX_SPEED);
        let axis = Axis::parse(node.attr(ATTR_PARALLAX_AXIS).as_deref());
        set.parallax.push(ParallaxDirective { target: registry.intern(node), speed, axis });
    }

    for node in live(root.query_all(ATTR_MORPH)) {
        let read = |name: &str, default: f64| parse_signed(node.attr(name).as_deref(), default);
        let directive = MorphDirective {
            target: ElementId(0),
            from_scale: read(ATTR_MORPH_FROM_SCALE, DEFAULT_MORPH_FROM_SCALE),
            to_scale: read(ATTR_MORPH_TO_SCALE, DEFAULT_MORPH_TO_SCALE),
            from_rotation: read(ATTR_MORPH_FROM_ROTATE, DEFAULT_MORPH_FROM_ROTATE),
            to_rotation: read(ATTR_MORPH_TO_ROTATE, DEFAULT_MORPH_TO_ROTATE),
        };
        set.morphs.push(MorphDirective { target: registry.intern(node), ..directive });
    }

    for node in live(root.query_all(ATTR_MAGNETIC)) {
        let strength = parse_seconds(node.attr(ATTR_MAGNETIC).as_deref(), DEFAULT_MAGNETIC_STRENGTH);
        set.magnetic.push(MagneticDirective { target: registry.intern(node), strength });
    }

    for (index, node) in live(root.query_all(ATTR_FLOAT)).enumerate() {
        let intensity = parse_seconds(node.attr(ATTR_FLOAT).as_deref(), DEFAULT_FLOAT_INTENSITY);
        let duration = parse_seconds(node.attr(ATTR_FLOAT_DURATION).as_deref(), DEFAULT_FLOAT_DURATION);
        set.floats.push(FloatDirective {
            target: registry.intern(node),
            intensity,
            duration,
            index,
        });
    }

    for node in live(root.query_all(ATTR_PARTICLES)) {
        let count = parse_count(node.attr(ATTR_PARTICLES).as_deref(), DEFAULT_PARTICLE_COUNT);
        set.particles.push(ParticleField { container: registry.intern(node), count });
    }

    (registry, set)
}

// Nodes detached between render and scan are skipped.
fn live<N: MotionNode>(nodes: Vec<N>) -> impl Iterator<Item = N> {
    nodes.into_iter().filter(|n| n.is_connected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::MockNode;

    #[test]
    fn reveal_attributes_resolve_with_defaults() {
        let root = MockNode::new("root");
        let card = MockNode::new("card").with_attr(ATTR_REVEAL, "left").with_attr(ATTR_DELAY, "0.3");
        let odd = MockNode::new("odd").with_attr(ATTR_REVEAL, "wobble").with_attr(ATTR_DURATION, "slow");
        root.append(&card);
        root.append(&odd);

        let (registry, set) = scan(&root);
        assert_eq!(registry.len(), 2);
        assert_eq!(set.reveals[0].direction, Direction::Left);
        assert_eq!(set.reveals[0].delay, 0.3);
        assert_eq!(set.reveals[0].duration, DEFAULT_DURATION);
        assert_eq!(set.reveals[1].direction, Direction::Fade);
        assert_eq!(set.reveals[1].duration, 1.0);
    }

    #[test]
    fn stagger_children_keep_dom_order_and_default_interval() {
        let root = MockNode::new("root");
        let grid = MockNode::new("grid").with_attr(ATTR_STAGGER, "quick");
        root.append(&grid);
        for name in ["a", "b", "c"] {
            grid.append(&MockNode::new(name));
        }

        let (registry, set) = scan(&root);
        let group = &set.staggers[0];
        assert_eq!(group.interval, DEFAULT_STAGGER_INTERVAL);
        assert_eq!(group.direction, Direction::Up);
        let names: Vec<_> = group
            .children
            .iter()
            .map(|id| registry.get(*id).map(|n| n.name()).unwrap_or_default())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn one_element_with_several_markers_is_tracked_once() {
        let root = MockNode::new("root");
        let badge = MockNode::new("badge")
            .with_attr(ATTR_REVEAL, "scale")
            .with_attr(ATTR_FLOAT, "12");
        root.append(&badge);

        let (registry, set) = scan(&root);
        assert_eq!(registry.len(), 1);
        assert_eq!(set.reveals[0].target, set.floats[0].target);
        assert_eq!(set.floats[0].intensity, 12.0);
    }

    #[test]
    fn detached_nodes_are_skipped() {
        let root = MockNode::new("root");
        let gone = MockNode::new("gone").with_attr(ATTR_MAGNETIC, "0.5");
        root.append(&gone);
        gone.detach();

        let (registry, set) = scan(&root);
        assert!(registry.is_empty());
        assert!(set.is_empty());
    }

    #[test]
    fn continuous_and_pointer_markers_parse() {
        let root = MockNode::new("root");
        root.append(
            &MockNode::new("bg")
                .with_attr(ATTR_PARALLAX, "-0.2")
                .with_attr(ATTR_PARALLAX_AXIS, "x"),
        );
        root.append(&MockNode::new("panel").with_attr(ATTR_MORPH, "").with_attr(ATTR_MORPH_TO_ROTATE, "3"));
        root.append(&MockNode::new("cta").with_attr(ATTR_MAGNETIC, ""));
        root.append(&MockNode::new("sky").with_attr(ATTR_PARTICLES, "many"));

        let (_, set) = scan(&root);
        assert_eq!(set.parallax[0].speed, -0.2);
        assert_eq!(set.parallax[0].axis, Axis::X);
        assert_eq!(set.morphs[0].from_scale, DEFAULT_MORPH_FROM_SCALE);
        assert_eq!(set.morphs[0].to_rotation, 3.0);
        assert_eq!(set.magnetic[0].strength, DEFAULT_MAGNETIC_STRENGTH);
        assert_eq!(set.particles[0].count, DEFAULT_PARTICLE_COUNT);
    }
}
