use crate::{
    animation::{ease::Ease, property::Track, variant::AnimationVariant},
    foundation::{
        core::{ElementId, Millis},
        error::{RevealError, RevealResult},
    },
};

/// Per-call-site timing. Everything else about an entrance comes from the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Timing {
    pub duration: Millis,
    /// Applied once, before the first target starts.
    pub delay: Millis,
    /// Gap between successive targets' start times.
    pub stagger: Millis,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration: Millis(800),
            delay: Millis::ZERO,
            stagger: Millis(100),
        }
    }
}

impl Timing {
    pub fn new(duration: Millis, delay: Millis, stagger: Millis) -> Self {
        Self {
            duration,
            delay,
            stagger,
        }
    }

    pub fn with_delay(mut self, delay: Millis) -> Self {
        self.delay = delay;
        self
    }

    /// Start offset of target `index` out of `count`. A lone target ignores the stagger.
    pub fn start_of(self, index: usize, count: usize) -> Millis {
        if count <= 1 {
            return self.delay;
        }
        self.delay.saturating_add(self.stagger.times(index as u64))
    }
}

/// What the interpolation drives.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Motion {
    Variant { variant: AnimationVariant },
    /// Integer display counting from `from` to `to`, written as text.
    Count { from: u64, to: u64 },
}

impl Motion {
    pub fn default_ease(self) -> Ease {
        match self {
            Self::Variant { variant } => variant.ease(),
            Self::Count { .. } => Ease::OutExpo,
        }
    }
}

/// Input to a [`Sequencer`](crate::Sequencer).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationRequest {
    /// Targets in document order.
    pub targets: Vec<ElementId>,
    pub motion: Motion,
    #[serde(default)]
    pub timing: Timing,
    /// Overrides the motion's default curve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<Ease>,
}

impl AnimationRequest {
    pub fn variant(targets: Vec<ElementId>, variant: AnimationVariant, timing: Timing) -> Self {
        Self {
            targets,
            motion: Motion::Variant { variant },
            timing,
            ease: None,
        }
    }

    pub fn counter(target: ElementId, from: u64, to: u64, timing: Timing) -> Self {
        Self {
            targets: vec![target],
            motion: Motion::Count { from, to },
            timing,
            ease: None,
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    pub fn ease(&self) -> Ease {
        self.ease.unwrap_or_else(|| self.motion.default_ease())
    }

    pub fn validate(&self) -> RevealResult<()> {
        let mut seen = std::collections::BTreeSet::new();
        for el in &self.targets {
            if !seen.insert(*el) {
                return Err(RevealError::animation(format!(
                    "element {} listed twice in one request",
                    el.0
                )));
            }
        }
        Ok(())
    }
}

/// Channels one scheduled interpolation writes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Channels {
    Style { tracks: Vec<Track> },
    Counter { from: u64, to: u64 },
}

impl Channels {
    pub(crate) fn for_motion(motion: Motion) -> Self {
        match motion {
            Motion::Variant { variant } => Self::Style {
                tracks: variant.tracks().to_vec(),
            },
            Motion::Count { from, to } => Self::Counter { from, to },
        }
    }
}

/// One target's slot in a request's schedule. `start` is relative to the
/// moment the request is issued.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScheduledTween {
    pub element: ElementId,
    pub index: usize,
    pub start: Millis,
    pub duration: Millis,
    pub ease: Ease,
    pub channels: Channels,
}

/// Lays out a request in time. Pure: no host, no clock.
pub fn schedule(request: &AnimationRequest) -> Vec<ScheduledTween> {
    let count = request.targets.len();
    let ease = request.ease();
    request
        .targets
        .iter()
        .enumerate()
        .map(|(index, &element)| ScheduledTween {
            element,
            index,
            start: request.timing.start_of(index, count),
            duration: request.timing.duration,
            ease,
            channels: Channels::for_motion(request.motion),
        })
        .collect()
}

/// Displayed value of a counter at eased progress `eased`.
pub fn counter_value(from: u64, to: u64, eased: f64) -> u64 {
    if eased >= 1.0 {
        return to;
    }
    let (a, b) = (from as f64, to as f64);
    let v = a + (b - a) * eased;
    v.round().max(0.0) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/animation/request.rs"]
mod tests;
