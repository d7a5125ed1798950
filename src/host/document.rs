use std::collections::BTreeMap;

use crate::{
    animation::property::{Property, Style},
    foundation::core::{ElementId, Rect},
    host::element::Host,
};

#[derive(Clone, Debug)]
struct Node {
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    bounds: Rect,
    style: Style,
    text: String,
    attached: bool,
}

/// In-memory element tree implementing [`Host`].
///
/// Used by the `reveal simulate` command and by tests; a browser embedding
/// implements [`Host`] over the real DOM instead.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A document containing only the body element.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                classes: Vec::new(),
                attributes: BTreeMap::new(),
                bounds: Rect::ZERO,
                style: Style::default(),
                text: String::new(),
                attached: true,
            }],
        }
    }

    pub fn body(&self) -> ElementId {
        ElementId(0)
    }

    /// Appends a new child under `parent`. A child of a detached parent starts
    /// out detached.
    pub fn create(&mut self, parent: ElementId, bounds: Rect) -> ElementId {
        let id = ElementId(self.nodes.len() as u32);
        let attached = self.node(parent).is_some_and(|p| p.attached);
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            bounds,
            style: Style::default(),
            text: String::new(),
            attached,
        });
        if let Some(p) = self.node_mut(parent) {
            p.children.push(id);
        }
        id
    }

    pub fn add_class(&mut self, el: ElementId, class: &str) {
        if let Some(n) = self.node_mut(el)
            && !n.classes.iter().any(|c| c == class)
        {
            n.classes.push(class.to_string());
        }
    }

    pub fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.node(el)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    pub fn set_attribute(&mut self, el: ElementId, name: &str, value: &str) {
        if let Some(n) = self.node_mut(el) {
            n.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn set_bounds(&mut self, el: ElementId, bounds: Rect) {
        if let Some(n) = self.node_mut(el) {
            n.bounds = bounds;
        }
    }

    /// Replaces the whole style, bypassing any interpolation.
    pub fn set_style(&mut self, el: ElementId, style: Style) {
        if let Some(n) = self.node_mut(el) {
            n.style = style;
        }
    }

    pub fn text(&self, el: ElementId) -> Option<&str> {
        self.node(el).map(|n| n.text.as_str())
    }

    pub fn parent(&self, el: ElementId) -> Option<ElementId> {
        self.node(el).and_then(|n| n.parent)
    }

    /// Detaches `el` and its subtree. Ids stay reserved; every later query on
    /// them answers as for a missing element.
    pub fn remove(&mut self, el: ElementId) {
        if el == self.body() {
            return;
        }
        if let Some(parent) = self.parent(el)
            && let Some(p) = self.node_mut(parent)
        {
            p.children.retain(|&c| c != el);
        }
        let mut stack = vec![el];
        while let Some(id) = stack.pop() {
            if let Some(n) = self.node_mut(id) {
                n.attached = false;
                stack.extend(n.children.iter().copied());
            }
        }
    }

    /// Attached elements in document order, body first.
    pub fn elements(&self) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![self.body()];
        while let Some(id) = stack.pop() {
            let Some(n) = self.live(id) else {
                continue;
            };
            out.push(id);
            stack.extend(n.children.iter().rev().copied());
        }
        out
    }

    fn node(&self, el: ElementId) -> Option<&Node> {
        self.nodes.get(el.0 as usize)
    }

    fn node_mut(&mut self, el: ElementId) -> Option<&mut Node> {
        self.nodes.get_mut(el.0 as usize)
    }

    fn live(&self, el: ElementId) -> Option<&Node> {
        self.node(el).filter(|n| n.attached)
    }

    fn live_mut(&mut self, el: ElementId) -> Option<&mut Node> {
        self.node_mut(el).filter(|n| n.attached)
    }
}

impl Host for Document {
    fn is_attached(&self, el: ElementId) -> bool {
        self.live(el).is_some()
    }

    fn marked_descendants(&self, root: ElementId, marker: &str) -> Vec<ElementId> {
        let Some(r) = self.live(root) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = r.children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let Some(n) = self.live(id) else {
                continue;
            };
            if n.classes.iter().any(|c| c == marker) {
                out.push(id);
            }
            stack.extend(n.children.iter().rev().copied());
        }
        out
    }

    fn bounds(&self, el: ElementId) -> Option<Rect> {
        self.live(el).map(|n| n.bounds)
    }

    fn attribute(&self, el: ElementId, name: &str) -> Option<String> {
        self.live(el).and_then(|n| n.attributes.get(name).cloned())
    }

    fn style(&self, el: ElementId) -> Option<Style> {
        self.live(el).map(|n| n.style)
    }

    fn write_style(&mut self, el: ElementId, property: Property, value: f64) {
        if let Some(n) = self.live_mut(el) {
            n.style.set(property, value);
        }
    }

    fn write_text(&mut self, el: ElementId, text: &str) {
        if let Some(n) = self.live_mut(el) {
            n.text.clear();
            n.text.push_str(text);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/document.rs"]
mod tests;
