use crate::{
    animation::variant::ANIMATE_ITEM,
    foundation::error::{RevealError, RevealResult},
};

/// Trigger policy of one visibility watch.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Fraction of the root's area that must be on screen, in `(0, 1]`.
    pub threshold: f64,
    /// Dispose after the first firing.
    pub once: bool,
    /// Class collected as the stagger sequence.
    pub marker: String,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            once: true,
            marker: ANIMATE_ITEM.to_string(),
        }
    }
}

impl WatchConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn repeating(mut self) -> Self {
        self.once = false;
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn validate(&self) -> RevealResult<()> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(RevealError::validation(format!(
                "watch threshold must be in (0, 1], got {}",
                self.threshold
            )));
        }
        if self.marker.trim().is_empty() {
            return Err(RevealError::validation("watch marker must be non-empty"));
        }
        Ok(())
    }
}

/// Lifecycle of a watch.
///
/// `Fired` lasts only while the firing's requests are being issued; then
/// [`WatchState::settle`] moves a one-shot watch on to `Disposed` and a
/// repeating one back to `Watching { inside: true }`. Observations arriving
/// while `Fired` are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum WatchState {
    #[default]
    Unarmed,
    /// `inside` records whether the last observation was at or past the
    /// threshold; firing needs an outside→inside edge.
    Watching { inside: bool },
    Fired,
    Disposed,
}

/// Outcome of feeding one observation or lifecycle event to a [`WatchState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Armed,
    Fired,
    Disposed,
}

impl WatchState {
    /// Unarmed → Watching. Anything else is left alone.
    pub fn arm(&mut self) -> Transition {
        match self {
            Self::Unarmed => {
                *self = Self::Watching { inside: false };
                Transition::Armed
            }
            _ => Transition::Stay,
        }
    }

    /// Feeds one intersection ratio.
    pub fn observe(&mut self, ratio: f64, config: &WatchConfig) -> Transition {
        let Self::Watching { inside } = *self else {
            return Transition::Stay;
        };
        let now_inside = ratio >= config.threshold;
        if !now_inside {
            *self = Self::Watching { inside: false };
            return Transition::Stay;
        }
        if inside {
            return Transition::Stay;
        }
        *self = Self::Fired;
        Transition::Fired
    }

    /// Leaves `Fired`.
    pub fn settle(&mut self, config: &WatchConfig) -> Transition {
        if *self != Self::Fired {
            return Transition::Stay;
        }
        if config.once {
            *self = Self::Disposed;
            Transition::Disposed
        } else {
            *self = Self::Watching { inside: true };
            Transition::Stay
        }
    }

    /// Any state → Disposed.
    pub fn dispose(&mut self) -> Transition {
        if *self == Self::Disposed {
            return Transition::Stay;
        }
        *self = Self::Disposed;
        Transition::Disposed
    }

    pub fn is_watching(&self) -> bool {
        matches!(self, Self::Watching { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visibility/watch.rs"]
mod tests;
