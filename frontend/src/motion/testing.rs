//! In-memory `MotionNode` used by the orchestrator tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::node::{MotionNode, Rect};
use super::transform::VisualState;

struct Inner {
    name: String,
    attrs: HashMap<String, String>,
    children: Vec<MockNode>,
    parent: Weak<RefCell<Inner>>,
    bounds: Option<Rect>,
    connected: bool,
    transformed_bounds: bool,
    applied: Vec<VisualState>,
}

#[derive(Clone)]
pub struct MockNode(Rc<RefCell<Inner>>);

impl PartialEq for MockNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for MockNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockNode({})", self.name())
    }
}

impl MockNode {
    pub fn new(name: &str) -> Self {
        MockNode(Rc::new(RefCell::new(Inner {
            name: name.to_string(),
            attrs: HashMap::new(),
            children: Vec::new(),
            parent: Weak::new(),
            bounds: Some(Rect::new(0.0, 0.0, 100.0, 100.0)),
            connected: true,
            transformed_bounds: false,
            applied: Vec::new(),
        })))
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0.borrow_mut().attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_bounds(self, rect: Rect) -> Self {
        self.set_bounds(rect);
        self
    }

    /// Reports bounds with the last applied state baked in, the way
    /// `getBoundingClientRect` does.
    pub fn with_transformed_bounds(self) -> Self {
        self.0.borrow_mut().transformed_bounds = true;
        self
    }

    pub fn append(&self, child: &MockNode) {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    pub fn set_bounds(&self, rect: Rect) {
        self.0.borrow_mut().bounds = Some(rect);
    }

    /// Moves the node vertically so its top edge sits at `top`.
    pub fn set_top(&self, top: f64) {
        let mut inner = self.0.borrow_mut();
        let rect = inner.bounds.unwrap_or_default();
        inner.bounds = Some(Rect { top, ..rect });
    }

    pub fn detach(&self) {
        self.0.borrow_mut().connected = false;
    }

    pub fn last_applied(&self) -> Option<VisualState> {
        self.0.borrow().applied.last().copied()
    }

    pub fn apply_count(&self) -> usize {
        self.0.borrow().applied.len()
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    fn collect(&self, attr: &str, out: &mut Vec<MockNode>) {
        for child in self.0.borrow().children.iter() {
            if child.0.borrow().attrs.contains_key(attr) {
                out.push(child.clone());
            }
            child.collect(attr, out);
        }
    }
}

impl MotionNode for MockNode {
    fn attr(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.get(name).cloned()
    }

    fn query_all(&self, attr: &str) -> Vec<Self> {
        let mut out = Vec::new();
        self.collect(attr, &mut out);
        out
    }

    fn children(&self) -> Vec<Self> {
        self.0.borrow().children.clone()
    }

    fn bounds(&self) -> Option<Rect> {
        let inner = self.0.borrow();
        if !inner.connected {
            return None;
        }
        let layout = inner.bounds?;
        match inner.applied.last() {
            Some(state) if inner.transformed_bounds => Some(state.transform_rect(&layout)),
            _ => Some(layout),
        }
    }

    fn is_connected(&self) -> bool {
        self.0.borrow().connected
    }

    fn apply(&self, state: &VisualState) {
        self.0.borrow_mut().applied.push(*state);
    }

    fn spawn_particle(&self, index: usize) -> Option<Self> {
        let particle = MockNode::new(&format!("particle-{index}"));
        self.append(&particle);
        Some(particle)
    }

    fn remove(&self) {
        let parent = self.0.borrow().parent.upgrade();
        if let Some(parent) = parent {
            parent.borrow_mut().children.retain(|c| c != self);
        }
        self.detach();
    }
}
