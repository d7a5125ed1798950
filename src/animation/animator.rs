use std::collections::BTreeMap;

use crate::{
    animation::{
        ease::Ease,
        property::{Property, PropertyGroup, Track},
        request::{AnimationRequest, Channels, counter_value, schedule},
        sequencer::{OwnerId, RunId, Sequencer},
    },
    foundation::{
        clock::Clock,
        core::{ElementId, Millis},
    },
    host::element::Host,
};

#[derive(Clone, Debug)]
struct ActiveTween {
    run: RunId,
    owner: OwnerId,
    element: ElementId,
    start_at: Millis,
    duration: Millis,
    ease: Ease,
    channels: Channels,
}

impl ActiveTween {
    fn touches_group(&self, group: PropertyGroup) -> bool {
        match &self.channels {
            Channels::Style { tracks } => tracks.iter().any(|t| t.property.group() == group),
            Channels::Counter { .. } => false,
        }
    }
}

/// What one frame did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub now: Millis,
    /// Interpolations that wrote a value this frame.
    pub written: usize,
    /// Runs with nothing left in flight after this frame.
    pub completed: Vec<RunId>,
    /// Interpolations dropped because their element went away.
    pub abandoned: usize,
}

/// Frame-driven interpolation engine; the one [`Sequencer`] implementation.
///
/// Holds the in-flight interpolations between ticks. The application root
/// owns exactly one and passes it explicitly to whoever issues requests; the
/// clock is injected so tests run on a [`ManualClock`](crate::ManualClock).
pub struct Animator {
    clock: Box<dyn Clock>,
    active: Vec<ActiveTween>,
    /// Remaining interpolation count per run.
    runs: BTreeMap<RunId, usize>,
    next_run: u64,
}

impl std::fmt::Debug for Animator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animator")
            .field("now", &self.clock.now())
            .field("active", &self.active.len())
            .field("runs", &self.runs.len())
            .finish()
    }
}

impl Animator {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            active: Vec::new(),
            runs: BTreeMap::new(),
            next_run: 1,
        }
    }

    pub fn now(&self) -> Millis {
        self.clock.now()
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_running(&self, run: RunId) -> bool {
        self.runs.contains_key(&run)
    }

    /// In-flight interpolations issued by `owner`.
    pub fn owned_by(&self, owner: OwnerId) -> usize {
        self.active.iter().filter(|t| t.owner == owner).count()
    }

    /// Advances every in-flight interpolation to the clock's current time.
    pub fn tick(&mut self, host: &mut dyn Host) -> FrameReport {
        let now = self.clock.now();
        let mut report = FrameReport {
            now,
            ..FrameReport::default()
        };

        let active = std::mem::take(&mut self.active);
        let mut keep = Vec::with_capacity(active.len());
        for tw in active {
            if !host.is_attached(tw.element) {
                tracing::trace!(element = tw.element.0, run = tw.run.0, "abandon detached");
                report.abandoned += 1;
                self.settle(tw.run, &mut report.completed);
                continue;
            }
            if now < tw.start_at {
                keep.push(tw);
                continue;
            }

            let elapsed = now.saturating_sub(tw.start_at);
            let progress = if tw.duration.0 == 0 {
                1.0
            } else {
                elapsed.as_f64() / tw.duration.as_f64()
            };
            report.written += 1;
            if progress >= 1.0 {
                write_final(host, tw.element, &tw.channels);
                self.settle(tw.run, &mut report.completed);
            } else {
                write_at(host, tw.element, &tw.channels, tw.ease.apply(progress));
                keep.push(tw);
            }
        }
        self.active = keep;

        tracing::trace!(
            now = now.0,
            written = report.written,
            completed = report.completed.len(),
            "tick"
        );
        report
    }

    fn alloc_run(&mut self) -> RunId {
        let id = RunId(self.next_run);
        self.next_run += 1;
        id
    }

    fn settle(&mut self, run: RunId, completed: &mut Vec<RunId>) {
        if let Some(left) = self.runs.get_mut(&run) {
            *left = left.saturating_sub(1);
            if *left == 0 {
                self.runs.remove(&run);
                completed.push(run);
            }
        }
    }

    /// Removes matching interpolations without reporting their runs as completed.
    fn drop_where(&mut self, pred: impl Fn(&ActiveTween) -> bool) -> usize {
        let before = self.active.len();
        let mut dropped_runs = Vec::new();
        self.active.retain(|t| {
            let drop = pred(t);
            if drop {
                dropped_runs.push(t.run);
            }
            !drop
        });
        for run in dropped_runs {
            if let Some(left) = self.runs.get_mut(&run) {
                *left = left.saturating_sub(1);
                if *left == 0 {
                    self.runs.remove(&run);
                }
            }
        }
        before - self.active.len()
    }
}

impl Sequencer for Animator {
    fn run(
        &mut self,
        host: &mut dyn Host,
        owner: OwnerId,
        request: &AnimationRequest,
    ) -> Option<RunId> {
        let now = self.clock.now();
        let planned: Vec<_> = schedule(request)
            .into_iter()
            .filter(|s| host.is_attached(s.element))
            .collect();
        if planned.is_empty() {
            tracing::trace!(owner = owner.0, "request with no attached targets");
            return None;
        }

        let run = self.alloc_run();
        for s in &planned {
            if let Channels::Style { tracks } = &s.channels {
                let overlaps = self.active.iter().any(|t| {
                    t.element == s.element
                        && tracks.iter().any(|tr| t.touches_group(tr.property.group()))
                });
                if overlaps {
                    tracing::warn!(
                        element = s.element.0,
                        owner = owner.0,
                        "overlapping interpolation on the same property group"
                    );
                }
            }
            // Park every target in its start state so staggered items stay
            // hidden until their turn.
            write_at(host, s.element, &s.channels, 0.0);
        }

        self.runs.insert(run, planned.len());
        self.active.extend(planned.into_iter().map(|s| ActiveTween {
            run,
            owner,
            element: s.element,
            start_at: now.saturating_add(s.start),
            duration: s.duration,
            ease: s.ease,
            channels: s.channels,
        }));
        tracing::debug!(
            run = run.0,
            owner = owner.0,
            targets = self.runs.get(&run).copied().unwrap_or(0),
            "scheduled request"
        );
        Some(run)
    }

    fn retarget(
        &mut self,
        host: &mut dyn Host,
        owner: OwnerId,
        element: ElementId,
        targets: &[(Property, f64)],
        duration: Millis,
        ease: Ease,
    ) -> Option<RunId> {
        if targets.is_empty() {
            return None;
        }
        let current = host.style(element)?;

        for tw in self.active.iter_mut().filter(|t| t.element == element) {
            if let Channels::Style { tracks } = &mut tw.channels {
                tracks.retain(|t| !targets.iter().any(|(p, _)| *p == t.property));
            }
        }
        self.drop_where(|t| {
            t.element == element
                && matches!(&t.channels, Channels::Style { tracks } if tracks.is_empty())
        });

        let tracks = targets
            .iter()
            .map(|&(p, to)| Track::new(p, current.get(p), to))
            .collect();
        let run = self.alloc_run();
        self.runs.insert(run, 1);
        self.active.push(ActiveTween {
            run,
            owner,
            element,
            start_at: self.clock.now(),
            duration,
            ease,
            channels: Channels::Style { tracks },
        });
        tracing::trace!(element = element.0, owner = owner.0, run = run.0, "retarget");
        Some(run)
    }

    fn cancel_owner(&mut self, owner: OwnerId) -> usize {
        let n = self.drop_where(|t| t.owner == owner);
        if n > 0 {
            tracing::debug!(owner = owner.0, cancelled = n, "cancelled in-flight interpolations");
        }
        n
    }
}

fn write_at(host: &mut dyn Host, el: ElementId, channels: &Channels, eased: f64) {
    match channels {
        Channels::Style { tracks } => {
            for t in tracks {
                host.write_style(el, t.property, t.sample(eased));
            }
        }
        Channels::Counter { from, to } => {
            host.write_text(el, &counter_value(*from, *to, eased).to_string());
        }
    }
}

fn write_final(host: &mut dyn Host, el: ElementId, channels: &Channels) {
    match channels {
        Channels::Style { tracks } => {
            for t in tracks {
                host.write_style(el, t.property, t.to);
            }
        }
        Channels::Counter { to, .. } => host.write_text(el, &to.to_string()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
