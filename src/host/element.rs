use std::{cell::Cell, rc::Rc};

use crate::{
    animation::property::{Property, Style},
    foundation::core::{ElementId, Rect},
};

/// The imperative escape hatch into the element tree.
///
/// Everything the orchestration core does to an element goes through this
/// trait. Implementations must treat every call on a detached or unknown
/// element as a no-op (`None` for queries): unmount can race a running
/// interpolation and that must never fault.
pub trait Host {
    fn is_attached(&self, el: ElementId) -> bool;

    /// Attached descendants of `root` (excluding `root`) carrying class
    /// `marker`, in document order.
    fn marked_descendants(&self, root: ElementId, marker: &str) -> Vec<ElementId>;

    /// Layout box in page coordinates.
    fn bounds(&self, el: ElementId) -> Option<Rect>;

    fn attribute(&self, el: ElementId, name: &str) -> Option<String>;

    fn style(&self, el: ElementId) -> Option<Style>;

    fn write_style(&mut self, el: ElementId, property: Property, value: f64);

    fn write_text(&mut self, el: ElementId, text: &str);
}

/// Opaque, shareable reference a section attaches to the element it owns.
///
/// Cloning yields another handle to the same slot, so the section can keep
/// one copy while the watch or pointer effect holds another.
#[derive(Clone, Debug, Default)]
pub struct NodeRef {
    slot: Rc<Cell<Option<ElementId>>>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, el: ElementId) {
        self.slot.set(Some(el));
    }

    pub fn detach(&self) {
        self.slot.set(None);
    }

    pub fn get(&self) -> Option<ElementId> {
        self.slot.get()
    }

    /// The attached element, if it is still live in `host`.
    pub fn resolve(&self, host: &dyn Host) -> Option<ElementId> {
        self.get().filter(|&el| host.is_attached(el))
    }
}
