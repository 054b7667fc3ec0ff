/// Convenience result type for the carousel engine.
pub type CarouselResult<T> = Result<T, CarouselError>;

/// Errors surfaced by the carousel engine.
///
/// Only configuration problems are fatal. Transient input (stale indices, unknown routes,
/// torn-down surfaces) is absorbed by the engine and never reaches this type.
#[derive(thiserror::Error, Debug)]
pub enum CarouselError {
    /// Invalid layer or timing configuration; indicates a caller bug.
    #[error("configuration error: {0}")]
    Config(String),

    /// Route map could not be built or is inconsistent with the master layer.
    #[error("navigation error: {0}")]
    Navigation(String),

    /// Simulation script is malformed.
    #[error("script error: {0}")]
    Script(String),

    /// JSON (de)serialization failure at the configuration boundary.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its original source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CarouselError {
    /// Build a [`CarouselError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`CarouselError::Navigation`].
    pub fn navigation(msg: impl Into<String>) -> Self {
        Self::Navigation(msg.into())
    }

    /// Build a [`CarouselError::Script`].
    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }

    /// Build a [`CarouselError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
