use crate::{
    animation::property::Property,
    foundation::error::{RevealError, RevealResult},
    host::element::{Host, NodeRef},
    visibility::intersection::Viewport,
};

pub const PARALLAX_SPEED: f64 = 0.5;

/// Scroll-linked drift: while on screen the element sits at
/// `translateY = scroll_y * speed`. Written directly, not interpolated.
#[derive(Debug)]
pub struct Parallax {
    node: NodeRef,
    speed: f64,
}

impl Parallax {
    pub fn new(speed: f64) -> RevealResult<Self> {
        if !speed.is_finite() {
            return Err(RevealError::validation(format!(
                "parallax speed must be finite, got {speed}"
            )));
        }
        Ok(Self {
            node: NodeRef::new(),
            speed,
        })
    }

    pub fn node_ref(&self) -> NodeRef {
        self.node.clone()
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Returns whether anything was written.
    pub fn on_scroll(&self, host: &mut dyn Host, viewport: &Viewport) -> bool {
        let Some(el) = self.node.resolve(host) else {
            return false;
        };
        let Some(bounds) = host.bounds(el) else {
            return false;
        };
        if !viewport.overlaps(bounds) {
            return false;
        }
        host.write_style(el, Property::TranslateY, viewport.scroll_y * self.speed);
        true
    }
}
