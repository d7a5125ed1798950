pub use kurbo::{Point, Rect, Vec2};

/// Whole milliseconds, used for both clock timestamps and durations.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Self = Self(0);

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// `self * n`, saturating.
    pub fn times(self, n: u64) -> Self {
        Self(self.0.saturating_mul(n))
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

/// Stable identity of one element in a [`Host`](crate::Host) tree.
///
/// Ids are never reused while the host is alive, so a stale id held by a
/// detached watch or an abandoned tween resolves to nothing instead of to an
/// unrelated element.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(pub u32);

/// Offset of `p` from the centre of `bounds`.
pub fn offset_from_center(bounds: Rect, p: Point) -> Vec2 {
    p - bounds.center()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
