pub(crate) mod animator;
pub(crate) mod ease;
pub(crate) mod property;
pub(crate) mod request;
pub(crate) mod sequencer;
pub(crate) mod variant;
