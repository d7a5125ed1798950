use crate::{
    animation::{
        request::{AnimationRequest, Timing},
        sequencer::{OwnerId, RunId, Sequencer},
        variant::{AnimationVariant, TargetPolicy},
    },
    foundation::core::{ElementId, Millis},
    host::element::{Host, NodeRef},
    visibility::{
        intersection::{Viewport, intersection_ratio},
        watch::{Transition, WatchConfig, WatchState},
    },
};

/// Class of numeric displays driven by [`Cue::Counters`].
pub const STAT_NUMBER: &str = "stat-number";
/// Attribute holding a counter's final value.
pub const COUNTER_TARGET_ATTR: &str = "data-target";

/// One thing a firing does. All cues of a firing are issued together and run
/// concurrently; relative ordering comes only from their delays.
#[derive(Clone, Debug)]
pub enum Cue {
    /// Animate the root's marked descendants as one staggered request, or the
    /// root itself when the variant allows it and nothing is marked.
    Entrance {
        variant: AnimationVariant,
        timing: Timing,
    },
    /// Animate one specific element inside the section.
    Element {
        target: NodeRef,
        variant: AnimationVariant,
        timing: Timing,
    },
    /// Count every descendant carrying `marker` up from zero to its
    /// `data-target` value.
    Counters { marker: String, timing: Timing },
}

impl Cue {
    pub fn entrance(variant: AnimationVariant, timing: Timing) -> Self {
        Self::Entrance { variant, timing }
    }

    /// Stat counters: `.stat-number`, 2 s, all at once.
    pub fn counters() -> Self {
        Self::Counters {
            marker: STAT_NUMBER.to_string(),
            timing: Timing::new(Millis(2000), Millis::ZERO, Millis::ZERO),
        }
    }
}

/// Turns cues into concrete requests against the tree as it is right now.
pub fn resolve_cues(
    host: &dyn Host,
    root: ElementId,
    marker: &str,
    cues: &[Cue],
) -> Vec<AnimationRequest> {
    let mut out = Vec::new();
    for cue in cues {
        match cue {
            Cue::Entrance { variant, timing } => {
                let marked = host.marked_descendants(root, marker);
                let targets = match (variant.targets(), marked.is_empty()) {
                    (TargetPolicy::MarkedOrRoot, true) => vec![root],
                    _ => marked,
                };
                if !targets.is_empty() {
                    out.push(AnimationRequest::variant(targets, *variant, *timing));
                }
            }
            Cue::Element {
                target,
                variant,
                timing,
            } => {
                if let Some(el) = target.resolve(host) {
                    out.push(AnimationRequest::variant(vec![el], *variant, *timing));
                }
            }
            Cue::Counters { marker, timing } => {
                for el in host.marked_descendants(root, marker) {
                    let to = host
                        .attribute(el, COUNTER_TARGET_ATTR)
                        .and_then(|v| v.trim().parse::<u64>().ok())
                        .unwrap_or(0);
                    out.push(AnimationRequest::counter(el, 0, to, *timing));
                }
            }
        }
    }
    out
}

/// Visibility detector for one section root.
///
/// Owns its [`WatchState`] and issues its cues through whatever
/// [`Sequencer`] it is handed, exactly once per firing.
#[derive(Debug)]
pub struct Watch {
    owner: OwnerId,
    root: NodeRef,
    config: WatchConfig,
    cues: Vec<Cue>,
    state: WatchState,
    fired: u32,
}

impl Watch {
    pub fn new(owner: OwnerId, config: WatchConfig, cues: Vec<Cue>) -> Self {
        Self {
            owner,
            root: NodeRef::new(),
            config,
            cues,
            state: WatchState::Unarmed,
            fired: 0,
        }
    }

    /// The common case: one entrance cue.
    pub fn entrance(
        owner: OwnerId,
        variant: AnimationVariant,
        config: WatchConfig,
        timing: Timing,
    ) -> Self {
        Self::new(owner, config, vec![Cue::entrance(variant, timing)])
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Handle for the section to attach its root element to.
    pub fn node_ref(&self) -> NodeRef {
        self.root.clone()
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    pub fn fire_count(&self) -> u32 {
        self.fired
    }

    /// Starts observing if the root is attached. A watch whose root never
    /// attaches stays `Unarmed` and never fires.
    pub fn mount(&mut self, host: &dyn Host) -> Transition {
        if self.root.resolve(host).is_none() {
            return Transition::Stay;
        }
        let t = self.state.arm();
        if t == Transition::Armed {
            tracing::debug!(owner = self.owner.0, "watch armed");
        }
        t
    }

    /// Feeds one intersection ratio; on firing, issues every cue.
    pub fn observe(
        &mut self,
        ratio: f64,
        host: &mut dyn Host,
        seq: &mut dyn Sequencer,
    ) -> Vec<RunId> {
        if self.state.observe(ratio, &self.config) != Transition::Fired {
            return Vec::new();
        }
        self.fired += 1;

        let runs = match self.root.resolve(host) {
            Some(root) => {
                let requests = resolve_cues(host, root, &self.config.marker, &self.cues);
                requests
                    .iter()
                    .filter_map(|r| seq.run(host, self.owner, r))
                    .collect()
            }
            None => Vec::new(),
        };
        tracing::debug!(
            owner = self.owner.0,
            ratio,
            runs = runs.len(),
            firing = self.fired,
            "watch fired"
        );

        if self.state.settle(&self.config) == Transition::Disposed {
            tracing::debug!(owner = self.owner.0, "watch disposed after firing");
        }
        runs
    }

    /// Measures the root against `viewport` and feeds the ratio. No-op while
    /// the root is not attached.
    pub fn check(
        &mut self,
        viewport: &Viewport,
        host: &mut dyn Host,
        seq: &mut dyn Sequencer,
    ) -> Vec<RunId> {
        if !self.state.is_watching() {
            return Vec::new();
        }
        let Some(bounds) = self.root.resolve(host).and_then(|el| host.bounds(el)) else {
            return Vec::new();
        };
        self.observe(intersection_ratio(bounds, viewport.rect()), host, seq)
    }

    /// Stops observing and cancels whatever this watch still has in flight.
    pub fn unmount(&mut self, seq: &mut dyn Sequencer) -> usize {
        if self.state.dispose() == Transition::Disposed {
            tracing::debug!(owner = self.owner.0, "watch disposed on unmount");
        }
        seq.cancel_owner(self.owner)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visibility/detector.rs"]
mod tests;
