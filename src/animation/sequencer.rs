use crate::{
    animation::{ease::Ease, property::Property, request::AnimationRequest},
    foundation::core::{ElementId, Millis},
    host::element::Host,
};

/// Identifies whoever issued an interpolation (a watch, a pointer effect, an
/// intro), so that unmounting it can cancel what it still has in flight.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct OwnerId(pub u64);

/// One issued request (or one retarget). Completion is observable through
/// [`Animator::is_running`](crate::Animator::is_running) and the tick report.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct RunId(pub u64);

/// The interpolation engine seen by the visibility and pointer layers.
///
/// Not idempotent: running the same request twice schedules two overlapping
/// interpolations. Preventing that is the caller's job.
pub trait Sequencer {
    /// Schedules `request` starting now. Targets that are not attached are
    /// skipped; `None` when nothing was scheduled.
    fn run(
        &mut self,
        host: &mut dyn Host,
        owner: OwnerId,
        request: &AnimationRequest,
    ) -> Option<RunId>;

    /// Moves `element` from its current values toward `targets`, replacing any
    /// in-flight interpolation of the same properties on that element.
    fn retarget(
        &mut self,
        host: &mut dyn Host,
        owner: OwnerId,
        element: ElementId,
        targets: &[(Property, f64)],
        duration: Millis,
        ease: Ease,
    ) -> Option<RunId>;

    /// Drops every in-flight interpolation issued by `owner`. Returns how many were dropped.
    fn cancel_owner(&mut self, owner: OwnerId) -> usize;
}
