//! Text -> UDPipe -> EPE -> typed sentences.
//!
//! ```no_run
//! use udmorph::{annotate_batch, SessionConfig};
//!
//! let config = SessionConfig::default().with_env_overrides();
//! let sentences = annotate_batch(&config, &["Huset brænder."])?;
//! for node in &sentences[0].nodes {
//!     println!("{} {:?} {:?}", node.form, node.properties.upos, node.properties.number);
//! }
//! # Ok::<(), udmorph::BatchError>(())
//! ```

pub mod batch;
pub mod error;

pub use batch::BatchProcessor;
pub use error::BatchError;

pub use udmorph_epe::{DecodeError, DecodeOptions, EpeDecoder, UnknownFeaturePolicy};
pub use udmorph_protocol as protocol;
pub use udmorph_protocol::{Node, NodeId, Properties, Sentence, SentenceId};
pub use udmorph_session::{
    AnnotationError, Annotator, ConfigError, ModelLoadError, SessionConfig, UdpipeSession,
};

/// Loads a session from `config` and annotates `texts` with it, fail-fast.
pub fn annotate_batch<S: AsRef<str>>(
    config: &SessionConfig,
    texts: &[S],
) -> Result<Vec<Sentence>, BatchError> {
    let session = UdpipeSession::new(config.clone())?;
    BatchProcessor::new(session).annotate_batch(texts)
}
