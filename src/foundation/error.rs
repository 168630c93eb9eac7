/// Convenience result type used across scenemark.
pub type ScenemarkResult<T> = Result<T, ScenemarkError>;

/// Top-level error taxonomy returned by the compilation entry points.
///
/// Precondition failures (`MissingTrackingFile`, `MissingMarker`, `EmptyScene`) carry stable
/// messages so the caller can report the specific problem to the author.
#[derive(thiserror::Error, Debug)]
pub enum ScenemarkError {
    /// The experience has no tracking-data (`.mind`) reference.
    #[error("missing tracking file: the experience has no compiled marker-tracking file")]
    MissingTrackingFile,

    /// The experience has no marker image.
    #[error("missing marker: the experience has no marker image")]
    MissingMarker,

    /// No scene object exists across all anchors.
    #[error("empty scene: add at least one scene object before publishing")]
    EmptyScene,

    /// The experience id cannot be used as an output file name.
    #[error("invalid experience id: {0}")]
    InvalidExperienceId(String),

    /// Invalid compiler policy or document options.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem errors while writing the compiled document.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScenemarkError {
    /// Build a [`ScenemarkError::InvalidExperienceId`] value.
    pub fn invalid_experience_id(msg: impl Into<String>) -> Self {
        Self::InvalidExperienceId(msg.into())
    }

    /// Build a [`ScenemarkError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScenemarkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for the missing-input failures an author can fix and retry.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::MissingTrackingFile | Self::MissingMarker | Self::EmptyScene
        )
    }
}

/// Non-fatal problems found while compiling; logged and reported, never raised.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A target's `markerDimensions` could not be parsed and was treated as absent.
    MarkerDimensionParse {
        /// Index of the target in its owning sequence.
        target_index: usize,
        /// Parser message.
        message: String,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MarkerDimensionParse {
                target_index,
                message,
            } => write!(
                f,
                "target {target_index}: ignoring malformed markerDimensions ({message})"
            ),
        }
    }
}

impl From<serde_json::Error> for ScenemarkError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
