//! Reveal is the orchestration core behind scroll-triggered entrance animations.
//!
//! Three layers share one interpolation engine:
//!
//! - the [`Animator`], a frame-driven [`Sequencer`] that staggers property
//!   interpolations over a set of elements,
//! - visibility watches ([`Watch`]) that fire a section's entrance once enough
//!   of it is on screen,
//! - pointer effects ([`PointerEffect`], [`Parallax`]) that retarget
//!   continuously while the pointer or the page moves.
//!
//! A [`Stage`] owns all of them and routes events. Elements are reached only
//! through the [`Host`] trait; [`Document`] is the in-memory implementation
//! used by the `reveal` binary and the tests.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod host;
pub(crate) mod pointer;
/// JSON page-and-events format replayed by `reveal simulate`.
pub mod scenario;
pub(crate) mod stage;
pub(crate) mod visibility;

pub use crate::foundation::clock::{Clock, ManualClock, SystemClock};
pub use crate::foundation::core::{ElementId, Millis, Point, Rect, Vec2, offset_from_center};
pub use crate::foundation::error::{RevealError, RevealResult};

pub use crate::animation::animator::{Animator, FrameReport};
pub use crate::animation::ease::Ease;
pub use crate::animation::property::{Property, PropertyGroup, Style, Track};
pub use crate::animation::request::{
    AnimationRequest, Channels, Motion, ScheduledTween, Timing, counter_value, schedule,
};
pub use crate::animation::sequencer::{OwnerId, RunId, Sequencer};
pub use crate::animation::variant::{ANIMATE_ITEM, AnimationVariant, RECIPES, Recipe, TargetPolicy};

pub use crate::host::document::Document;
pub use crate::host::element::{Host, NodeRef};

pub use crate::visibility::detector::{COUNTER_TARGET_ATTR, Cue, STAT_NUMBER, Watch, resolve_cues};
pub use crate::visibility::intersection::{Viewport, intersection_ratio};
pub use crate::visibility::watch::{Transition, WatchConfig, WatchState};

pub use crate::pointer::effect::PointerEffect;
pub use crate::pointer::kind::{
    LIFT_DEPTH, MAGNETIC_STRENGTH, PointerKind, TILT_DEPTH, TILT_PER_PX,
};
pub use crate::pointer::parallax::{PARALLAX_SPEED, Parallax};

pub use crate::stage::{Attachment, Stage};
