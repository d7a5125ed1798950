pub(crate) mod detector;
pub(crate) mod intersection;
pub(crate) mod watch;
