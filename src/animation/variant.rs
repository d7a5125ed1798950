use std::{fmt, str::FromStr};

use crate::{
    animation::{
        ease::Ease,
        property::{Property, Track},
    },
    foundation::error::{RevealError, RevealResult},
};

/// Class that flags a descendant as an individual stagger target.
pub const ANIMATE_ITEM: &str = "animate-item";

/// Named entrance recipe. Every variant maps to one fixed row of [`RECIPES`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationVariant {
    #[default]
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    Scale,
    Blur,
    Rotate,
    StaggerUp,
    StaggerLeft,
    StaggerRight,
}

/// Which elements of a watched root a variant animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetPolicy {
    /// The marked descendants if there are any, otherwise the root itself.
    MarkedOrRoot,
    /// Only the marked descendants; nothing when there are none.
    MarkedOnly,
}

#[derive(Debug)]
pub struct Recipe {
    pub variant: AnimationVariant,
    pub tag: &'static str,
    pub tracks: &'static [Track],
    pub ease: Ease,
    pub targets: TargetPolicy,
}

const fn fade(axis: Property, from: f64) -> [Track; 2] {
    [
        Track::new(Property::Opacity, 0.0, 1.0),
        Track::new(axis, from, 0.0),
    ]
}

const FADE_UP: [Track; 2] = fade(Property::TranslateY, 40.0);
const FADE_DOWN: [Track; 2] = fade(Property::TranslateY, -40.0);
const FADE_LEFT: [Track; 2] = fade(Property::TranslateX, 60.0);
const FADE_RIGHT: [Track; 2] = fade(Property::TranslateX, -60.0);
const SCALE: [Track; 2] = [
    Track::new(Property::Opacity, 0.0, 1.0),
    Track::new(Property::Scale, 0.8, 1.0),
];
const BLUR: [Track; 3] = [
    Track::new(Property::Opacity, 0.0, 1.0),
    Track::new(Property::Blur, 10.0, 0.0),
    Track::new(Property::TranslateY, 20.0, 0.0),
];
const ROTATE: [Track; 3] = [
    Track::new(Property::Opacity, 0.0, 1.0),
    Track::new(Property::RotateX, 15.0, 0.0),
    Track::new(Property::TranslateY, 30.0, 0.0),
];
const STAGGER_UP: [Track; 2] = fade(Property::TranslateY, 50.0);
const STAGGER_LEFT: [Track; 2] = fade(Property::TranslateX, 80.0);
const STAGGER_RIGHT: [Track; 2] = fade(Property::TranslateX, -80.0);

/// The canonical variant table, indexed in declaration order of [`AnimationVariant`].
pub static RECIPES: [Recipe; 10] = [
    Recipe {
        variant: AnimationVariant::FadeUp,
        tag: "fade-up",
        tracks: &FADE_UP,
        ease: Ease::OutExpo,
        targets: TargetPolicy::MarkedOrRoot,
    },
    Recipe {
        variant: AnimationVariant::FadeDown,
        tag: "fade-down",
        tracks: &FADE_DOWN,
        ease: Ease::OutExpo,
        targets: TargetPolicy::MarkedOrRoot,
    },
    Recipe {
        variant: AnimationVariant::FadeLeft,
        tag: "fade-left",
        tracks: &FADE_LEFT,
        ease: Ease::OutExpo,
        targets: TargetPolicy::MarkedOrRoot,
    },
    Recipe {
        variant: AnimationVariant::FadeRight,
        tag: "fade-right",
        tracks: &FADE_RIGHT,
        ease: Ease::OutExpo,
        targets: TargetPolicy::MarkedOrRoot,
    },
    Recipe {
        variant: AnimationVariant::Scale,
        tag: "scale",
        tracks: &SCALE,
        ease: Ease::OutExpo,
        targets: TargetPolicy::MarkedOrRoot,
    },
    Recipe {
        variant: AnimationVariant::Blur,
        tag: "blur",
        tracks: &BLUR,
        ease: Ease::OutExpo,
        targets: TargetPolicy::MarkedOrRoot,
    },
    Recipe {
        variant: AnimationVariant::Rotate,
        tag: "rotate",
        tracks: &ROTATE,
        ease: Ease::OutExpo,
        targets: TargetPolicy::MarkedOrRoot,
    },
    Recipe {
        variant: AnimationVariant::StaggerUp,
        tag: "stagger-up",
        tracks: &STAGGER_UP,
        ease: Ease::OutExpo,
        targets: TargetPolicy::MarkedOnly,
    },
    Recipe {
        variant: AnimationVariant::StaggerLeft,
        tag: "stagger-left",
        tracks: &STAGGER_LEFT,
        ease: Ease::OutExpo,
        targets: TargetPolicy::MarkedOnly,
    },
    Recipe {
        variant: AnimationVariant::StaggerRight,
        tag: "stagger-right",
        tracks: &STAGGER_RIGHT,
        ease: Ease::OutExpo,
        targets: TargetPolicy::MarkedOnly,
    },
];

impl AnimationVariant {
    pub const ALL: [AnimationVariant; 10] = [
        AnimationVariant::FadeUp,
        AnimationVariant::FadeDown,
        AnimationVariant::FadeLeft,
        AnimationVariant::FadeRight,
        AnimationVariant::Scale,
        AnimationVariant::Blur,
        AnimationVariant::Rotate,
        AnimationVariant::StaggerUp,
        AnimationVariant::StaggerLeft,
        AnimationVariant::StaggerRight,
    ];

    pub fn recipe(self) -> &'static Recipe {
        &RECIPES[self as usize]
    }

    pub fn tracks(self) -> &'static [Track] {
        self.recipe().tracks
    }

    pub fn ease(self) -> Ease {
        self.recipe().ease
    }

    pub fn targets(self) -> TargetPolicy {
        self.recipe().targets
    }

    pub fn tag(self) -> &'static str {
        self.recipe().tag
    }
}

impl fmt::Display for AnimationVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for AnimationVariant {
    type Err = RevealError;

    fn from_str(s: &str) -> RevealResult<Self> {
        let tag = s.trim().to_ascii_lowercase().replace('_', "-");
        RECIPES
            .iter()
            .find(|r| r.tag == tag)
            .map(|r| r.variant)
            .ok_or_else(|| RevealError::validation(format!("unknown animation variant '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/variant.rs"]
mod tests;
