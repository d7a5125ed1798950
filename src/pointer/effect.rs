use crate::{
    animation::sequencer::{OwnerId, RunId, Sequencer},
    foundation::core::{Point, offset_from_center},
    host::element::{Host, NodeRef},
    pointer::kind::PointerKind,
};

/// Hover-driven effect bound to one element.
///
/// Every move replaces the previous target through
/// [`Sequencer::retarget`], so there is never a backlog of stale
/// interpolations. Dropping the effect drops its listeners; a release still
/// in flight is left to finish (or to be abandoned if the element goes away).
#[derive(Debug)]
pub struct PointerEffect {
    owner: OwnerId,
    node: NodeRef,
    kind: PointerKind,
    hovered: bool,
}

impl PointerEffect {
    pub fn new(owner: OwnerId, kind: PointerKind) -> Self {
        Self {
            owner,
            node: NodeRef::new(),
            kind,
            hovered: false,
        }
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    pub fn node_ref(&self) -> NodeRef {
        self.node.clone()
    }

    pub fn kind(&self) -> PointerKind {
        self.kind
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Pointer moved to `point` (page coordinates). A point outside the
    /// element's box counts as leaving it.
    pub fn pointer_move(
        &mut self,
        host: &mut dyn Host,
        seq: &mut dyn Sequencer,
        point: Point,
    ) -> Option<RunId> {
        let el = self.node.resolve(host)?;
        let bounds = host.bounds(el)?;
        if !bounds.contains(point) {
            return self.pointer_leave(host, seq);
        }

        let entering = !self.hovered;
        self.hovered = true;
        if !entering && !self.kind.follows_moves() {
            return None;
        }
        let targets = self.kind.hover_targets(offset_from_center(bounds, point));
        let (duration, ease) = self.kind.hover_motion();
        tracing::trace!(owner = self.owner.0, entering, "pointer retarget");
        seq.retarget(host, self.owner, el, &targets, duration, ease)
    }

    /// Pointer left the element. No-op unless it was hovered.
    pub fn pointer_leave(&mut self, host: &mut dyn Host, seq: &mut dyn Sequencer) -> Option<RunId> {
        if !std::mem::replace(&mut self.hovered, false) {
            return None;
        }
        let el = self.node.resolve(host)?;
        let (duration, ease) = self.kind.rest_motion();
        tracing::trace!(owner = self.owner.0, "pointer release");
        seq.retarget(host, self.owner, el, &self.kind.rest_targets(), duration, ease)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pointer/effect.rs"]
mod tests;
