use std::collections::BTreeMap;

use crate::{
    animation::{
        animator::{Animator, FrameReport},
        request::{AnimationRequest, Timing},
        sequencer::{OwnerId, RunId, Sequencer},
        variant::AnimationVariant,
    },
    foundation::{
        clock::Clock,
        core::Point,
        error::RevealResult,
    },
    host::element::{Host, NodeRef},
    pointer::{effect::PointerEffect, kind::PointerKind, parallax::Parallax},
    visibility::{
        detector::{Cue, Watch, resolve_cues},
        intersection::Viewport,
        watch::{WatchConfig, WatchState},
    },
};

/// Returned by every attach call: the owner id to unmount with, and the slot
/// the section attaches its element to.
#[derive(Clone, Debug)]
pub struct Attachment {
    pub owner: OwnerId,
    pub node: NodeRef,
}

/// Application root: owns the one [`Animator`] and every watch and effect,
/// and routes scroll, pointer and frame events to them.
#[derive(Debug)]
pub struct Stage {
    animator: Animator,
    viewport: Viewport,
    watches: BTreeMap<OwnerId, Watch>,
    effects: BTreeMap<OwnerId, PointerEffect>,
    layers: BTreeMap<OwnerId, Parallax>,
    next_owner: u64,
}

impl Stage {
    pub fn new(clock: impl Clock + 'static, viewport: Viewport) -> Self {
        Self {
            animator: Animator::new(clock),
            viewport,
            watches: BTreeMap::new(),
            effects: BTreeMap::new(),
            layers: BTreeMap::new(),
            next_owner: 1,
        }
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn alloc_owner(&mut self) -> OwnerId {
        let id = OwnerId(self.next_owner);
        self.next_owner += 1;
        id
    }

    /// Registers a visibility watch. It stays unarmed until [`Stage::mount`].
    pub fn watch(&mut self, config: WatchConfig, cues: Vec<Cue>) -> RevealResult<Attachment> {
        config.validate()?;
        let owner = self.alloc_owner();
        let w = Watch::new(owner, config, cues);
        let node = w.node_ref();
        self.watches.insert(owner, w);
        Ok(Attachment { owner, node })
    }

    pub fn watch_entrance(
        &mut self,
        variant: AnimationVariant,
        config: WatchConfig,
        timing: Timing,
    ) -> RevealResult<Attachment> {
        self.watch(config, vec![Cue::entrance(variant, timing)])
    }

    pub fn watch_state(&self, owner: OwnerId) -> Option<WatchState> {
        self.watches.get(&owner).map(Watch::state)
    }

    pub fn fire_count(&self, owner: OwnerId) -> u32 {
        self.watches.get(&owner).map_or(0, Watch::fire_count)
    }

    /// Arms a watch and evaluates it against the current viewport right away,
    /// so a section already on screen fires on mount. For parallax layers the
    /// current scroll offset is applied.
    pub fn mount(&mut self, host: &mut dyn Host, owner: OwnerId) -> Vec<RunId> {
        if let Some(layer) = self.layers.get(&owner) {
            layer.on_scroll(host, &self.viewport);
            return Vec::new();
        }
        let Some(w) = self.watches.get_mut(&owner) else {
            return Vec::new();
        };
        w.mount(host);
        w.check(&self.viewport, host, &mut self.animator)
    }

    /// Releases whatever `owner` is. A watch also cancels its in-flight
    /// interpolations; a pointer effect only stops listening.
    pub fn unmount(&mut self, owner: OwnerId) -> bool {
        if let Some(mut w) = self.watches.remove(&owner) {
            w.unmount(&mut self.animator);
            return true;
        }
        if self.effects.remove(&owner).is_some() {
            tracing::debug!(owner = owner.0, "pointer effect released");
            return true;
        }
        self.layers.remove(&owner).is_some()
    }

    #[tracing::instrument(skip(self, host), fields(watches = self.watches.len()))]
    pub fn scroll_to(&mut self, host: &mut dyn Host, y: f64) -> Vec<RunId> {
        self.viewport.scroll_y = y;
        self.refresh(host)
    }

    pub fn resize(&mut self, host: &mut dyn Host, width: f64, height: f64) -> Vec<RunId> {
        self.viewport.width = width;
        self.viewport.height = height;
        self.refresh(host)
    }

    fn refresh(&mut self, host: &mut dyn Host) -> Vec<RunId> {
        let mut runs = Vec::new();
        for w in self.watches.values_mut() {
            runs.extend(w.check(&self.viewport, host, &mut self.animator));
        }
        for layer in self.layers.values() {
            layer.on_scroll(host, &self.viewport);
        }
        runs
    }

    pub fn pointer(&mut self, kind: PointerKind) -> RevealResult<Attachment> {
        kind.validate()?;
        let owner = self.alloc_owner();
        let fx = PointerEffect::new(owner, kind);
        let node = fx.node_ref();
        self.effects.insert(owner, fx);
        Ok(Attachment { owner, node })
    }

    pub fn magnetic(&mut self, strength: f64) -> RevealResult<Attachment> {
        self.pointer(PointerKind::magnetic(strength))
    }

    pub fn tilt(&mut self) -> RevealResult<Attachment> {
        self.pointer(PointerKind::tilt())
    }

    pub fn lift(&mut self) -> RevealResult<Attachment> {
        self.pointer(PointerKind::lift())
    }

    pub fn parallax(&mut self, speed: f64) -> RevealResult<Attachment> {
        let layer = Parallax::new(speed)?;
        let owner = self.alloc_owner();
        let node = layer.node_ref();
        self.layers.insert(owner, layer);
        Ok(Attachment { owner, node })
    }

    pub fn pointer_move(&mut self, host: &mut dyn Host, point: Point) -> Vec<RunId> {
        self.effects
            .values_mut()
            .filter_map(|fx| fx.pointer_move(host, &mut self.animator, point))
            .collect()
    }

    /// The pointer left the page.
    pub fn pointer_exit(&mut self, host: &mut dyn Host) -> Vec<RunId> {
        self.effects
            .values_mut()
            .filter_map(|fx| fx.pointer_leave(host, &mut self.animator))
            .collect()
    }

    pub fn tick(&mut self, host: &mut dyn Host) -> FrameReport {
        self.animator.tick(host)
    }

    /// Runs `cues` against `root` immediately, without waiting for visibility.
    /// The returned owner can be passed to [`Stage::cancel`].
    pub fn intro(
        &mut self,
        host: &mut dyn Host,
        root: &NodeRef,
        marker: &str,
        cues: &[Cue],
    ) -> (OwnerId, Vec<RunId>) {
        let owner = self.alloc_owner();
        let Some(el) = root.resolve(host) else {
            return (owner, Vec::new());
        };
        let runs = resolve_cues(host, el, marker, cues)
            .iter()
            .filter_map(|r| self.animator.run(host, owner, r))
            .collect();
        (owner, runs)
    }

    /// Issues one explicit request under a fresh owner.
    pub fn play(
        &mut self,
        host: &mut dyn Host,
        request: &AnimationRequest,
    ) -> RevealResult<(OwnerId, Option<RunId>)> {
        request.validate()?;
        let owner = self.alloc_owner();
        Ok((owner, self.animator.run(host, owner, request)))
    }

    /// Cancels in-flight interpolations of an intro or explicit request.
    pub fn cancel(&mut self, owner: OwnerId) -> usize {
        self.animator.cancel_owner(owner)
    }
}

#[cfg(test)]
#[path = "../tests/unit/stage.rs"]
mod tests;
