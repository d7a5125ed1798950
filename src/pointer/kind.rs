use crate::{
    animation::{ease::Ease, property::Property},
    foundation::{
        core::{Millis, Vec2},
        error::{RevealError, RevealResult},
    },
};

pub const MAGNETIC_STRENGTH: f64 = 0.3;
/// Degrees of tilt per pixel of pointer offset.
pub const TILT_PER_PX: f64 = 1.0 / 20.0;
pub const TILT_DEPTH: f64 = 20.0;
pub const LIFT_DEPTH: f64 = 30.0;

/// Curve every hover-following retarget uses.
pub const FOLLOW: (Millis, Ease) = (Millis(300), Ease::OutQuad);
/// Magnetic release: springs back with a little overshoot.
pub const SPRING_RELEASE: (Millis, Ease) = (Millis(500), Ease::SPRING_BACK);

fn default_strength() -> f64 {
    MAGNETIC_STRENGTH
}

fn default_per_px() -> f64 {
    TILT_PER_PX
}

fn default_tilt_depth() -> f64 {
    TILT_DEPTH
}

fn default_lift_depth() -> f64 {
    LIFT_DEPTH
}

/// What a pointer effect does while hovered.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PointerKind {
    /// Pulls the element toward the pointer by `strength` of its offset from
    /// the centre.
    Magnetic {
        #[serde(default = "default_strength")]
        strength: f64,
    },
    /// Tilts toward the pointer and pushes out by `depth`.
    Tilt {
        #[serde(default = "default_per_px")]
        per_px: f64,
        #[serde(default = "default_tilt_depth")]
        depth: f64,
    },
    /// Rises by `depth` on enter; ignores movement inside.
    Lift {
        #[serde(default = "default_lift_depth")]
        depth: f64,
    },
}

impl PointerKind {
    pub fn magnetic(strength: f64) -> Self {
        Self::Magnetic { strength }
    }

    pub fn tilt() -> Self {
        Self::Tilt {
            per_px: TILT_PER_PX,
            depth: TILT_DEPTH,
        }
    }

    pub fn lift() -> Self {
        Self::Lift { depth: LIFT_DEPTH }
    }

    pub fn validate(&self) -> RevealResult<()> {
        match *self {
            Self::Magnetic { strength } => {
                if !(strength.is_finite() && strength > 0.0) {
                    return Err(RevealError::validation(format!(
                        "magnetic strength must be a positive finite number, got {strength}"
                    )));
                }
            }
            Self::Tilt { per_px, depth } => {
                if !(per_px.is_finite() && per_px >= 0.0) {
                    return Err(RevealError::validation(format!(
                        "tilt per_px must be finite and non-negative, got {per_px}"
                    )));
                }
                if !depth.is_finite() {
                    return Err(RevealError::validation("tilt depth must be finite"));
                }
            }
            Self::Lift { depth } => {
                if !depth.is_finite() {
                    return Err(RevealError::validation("lift depth must be finite"));
                }
            }
        }
        Ok(())
    }

    /// Whether moves after the first one inside the element retarget.
    pub fn follows_moves(&self) -> bool {
        !matches!(self, Self::Lift { .. })
    }

    /// Targets while the pointer sits `offset` away from the element's centre.
    pub fn hover_targets(&self, offset: Vec2) -> Vec<(Property, f64)> {
        match *self {
            Self::Magnetic { strength } => vec![
                (Property::TranslateX, offset.x * strength),
                (Property::TranslateY, offset.y * strength),
            ],
            // Pointer above centre tips the top edge toward the viewer.
            Self::Tilt { per_px, depth } => vec![
                (Property::RotateX, -offset.y * per_px),
                (Property::RotateY, offset.x * per_px),
                (Property::TranslateZ, depth),
            ],
            Self::Lift { depth } => vec![(Property::TranslateZ, depth)],
        }
    }

    /// Targets once the pointer has left.
    pub fn rest_targets(&self) -> Vec<(Property, f64)> {
        match self {
            Self::Magnetic { .. } => vec![(Property::TranslateX, 0.0), (Property::TranslateY, 0.0)],
            Self::Tilt { .. } => vec![
                (Property::RotateX, 0.0),
                (Property::RotateY, 0.0),
                (Property::TranslateZ, 0.0),
            ],
            Self::Lift { .. } => vec![(Property::TranslateZ, 0.0)],
        }
    }

    pub fn hover_motion(&self) -> (Millis, Ease) {
        FOLLOW
    }

    pub fn rest_motion(&self) -> (Millis, Ease) {
        match self {
            Self::Magnetic { .. } => SPRING_RELEASE,
            Self::Tilt { .. } | Self::Lift { .. } => FOLLOW,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pointer/kind.rs"]
mod tests;
