use thiserror::Error;
use udmorph_epe::DecodeError;
use udmorph_session::{AnnotationError, ModelLoadError};

/// First failure of a batch. `index` is the position of the failing text.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    ModelLoad(#[from] ModelLoadError),

    #[error("text {index}: {source}")]
    Annotation {
        index: usize,
        #[source]
        source: AnnotationError,
    },

    #[error("text {index}: {source}")]
    Decode {
        index: usize,
        #[source]
        source: DecodeError,
    },
}

impl BatchError {
    /// Position of the failing text, `None` for session construction failures.
    pub fn index(&self) -> Option<usize> {
        match self {
            BatchError::ModelLoad(_) => None,
            BatchError::Annotation { index, .. } | BatchError::Decode { index, .. } => Some(*index),
        }
    }
}
