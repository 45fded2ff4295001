//! Annotator sessions.
//!
//! A session owns one resolved model and one fixed pipeline
//! (presegmented tokenization, tagging, dependency parsing, EPE output) and
//! turns a text into the engine's raw EPE output.

pub mod annotator;
pub mod config;
pub mod error;
pub mod udpipe;

pub use annotator::Annotator;
pub use config::{PipelineStages, SessionConfig, DEFAULT_ENGINE, DEFAULT_MODEL};
pub use error::{AnnotationError, ConfigError, ModelLoadError};
pub use udpipe::UdpipeSession;
