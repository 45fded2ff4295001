use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// The model could not be located, opened or loaded by the engine. Fatal for
/// the session.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("cannot determine the model base directory")]
    NoBaseDir(#[source] io::Error),

    #[error("model file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("model path '{}' is not a regular file", path.display())]
    NotAFile { path: PathBuf },

    #[error("model file '{}' is empty", path.display())]
    Empty { path: PathBuf },

    #[error("cannot read model file '{}'", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("annotation engine '{}' cannot be started", engine.display())]
    Engine {
        engine: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("annotation engine '{}' exited with {status}", engine.display())]
    EngineStatus { engine: PathBuf, status: ExitStatus },

    /// The engine could not load the file as a model. `message` is its own
    /// diagnostic.
    #[error("model file '{}' cannot be loaded: {message}", path.display())]
    Unparsable { path: PathBuf, message: String },
}

/// The engine failed on one text. `message` is its own diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("annotation failed: {message}")]
pub struct AnnotationError {
    pub message: String,
}

impl AnnotationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid session config: {0}")]
    Parse(#[from] toml::de::Error),
}
