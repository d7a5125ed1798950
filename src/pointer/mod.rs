pub(crate) mod effect;
pub(crate) mod kind;
pub(crate) mod parallax;
