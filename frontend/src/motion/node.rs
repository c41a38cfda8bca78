use super::transform::VisualState;

/// Index of a tracked element inside one orchestrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// Viewport-relative bounding box, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.bottom()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// What the orchestrator needs from a rendered element.
///
/// The browser implementation lives in `dom.rs`; tests use a recording mock.
pub trait MotionNode: Clone {
    fn attr(&self, name: &str) -> Option<String>;

    /// Descendants carrying `attr`, in document order.
    fn query_all(&self, attr: &str) -> Vec<Self>;

    /// Direct element children, in document order.
    fn children(&self) -> Vec<Self>;

    /// `None` when the node can no longer be measured.
    fn bounds(&self) -> Option<Rect>;

    fn is_connected(&self) -> bool;

    fn apply(&self, state: &VisualState);

    /// Appends a decorative particle to this node and returns it.
    fn spawn_particle(&self, index: usize) -> Option<Self>;

    /// Removes a node this orchestrator created.
    fn remove(&self);
}
