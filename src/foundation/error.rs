pub type RevealResult<T> = Result<T, RevealError>;

/// Errors raised at configuration boundaries.
///
/// Runtime paths (firing a watch, ticking the animator, pointer dispatch) never
/// produce one of these: a missing element is a silent no-op there.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("animation error: {0}")]
    Animation(String),

    #[error("scenario error: {0}")]
    Scenario(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    pub fn scenario(msg: impl Into<String>) -> Self {
        Self::Scenario(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
