use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use crate::annotator::Annotator;
use crate::config::{PipelineStages, SessionConfig};
use crate::error::{AnnotationError, ModelLoadError};

/// A UDPipe engine bound to one model file.
///
/// Construction resolves and checks the model, checks the engine binary and
/// has the engine load the model once.
/// Each [`Annotator::annotate`] call runs the engine once over the text.
#[derive(Debug)]
pub struct UdpipeSession {
    config: SessionConfig,
    model_path: PathBuf,
    stages: PipelineStages,
}

impl UdpipeSession {
    pub fn new(config: SessionConfig) -> Result<Self, ModelLoadError> {
        let model_path = config.resolve_model_path()?;
        check_model(&model_path)?;
        check_engine(&config.engine)?;

        let session = Self {
            config,
            model_path,
            stages: PipelineStages::FIXED,
        };
        session.load_model()?;

        tracing::info!(
            engine = %session.config.engine.display(),
            model = %session.model_path.display(),
            "annotator session ready"
        );
        Ok(session)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn stages(&self) -> PipelineStages {
        self.stages
    }

    /// Runs the full pipeline once over no text, so a file the engine cannot
    /// read as a model fails here rather than on the first annotation.
    fn load_model(&self) -> Result<(), ModelLoadError> {
        self.run_engine("").map(|_| ()).map_err(|e| {
            tracing::warn!(model = %self.model_path.display(), error = %e.message, "model rejected by engine");
            ModelLoadError::Unparsable {
                path: self.model_path.clone(),
                message: e.message,
            }
        })
    }

    fn run_engine(&self, input: &str) -> Result<String, AnnotationError> {
        let engine = &self.config.engine;
        let mut child = Command::new(engine)
            .args(self.stages.engine_args())
            .arg(&self.model_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| AnnotationError::new(format!("cannot start {}: {e}", engine.display())))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| AnnotationError::new("engine stdin is not available"))?;

        // Feed stdin from a separate thread so a full stdout pipe cannot stall us.
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || -> io::Result<()> {
                stdin.write_all(input.as_bytes())?;
                stdin.flush()
            });
            let output = child.wait_with_output();
            (writer.join(), output)
        });

        let output = output.map_err(|e| AnnotationError::new(format!("engine I/O failed: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = stderr.trim();
            return Err(AnnotationError::new(if message.is_empty() {
                format!("engine exited with {}", output.status)
            } else {
                message.to_string()
            }));
        }

        match written {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                return Err(AnnotationError::new(format!("cannot send text to engine: {e}")))
            }
            Err(_) => return Err(AnnotationError::new("stdin writer panicked")),
        }

        String::from_utf8(output.stdout)
            .map_err(|e| AnnotationError::new(format!("engine output is not UTF-8: {e}")))
    }
}

impl Annotator for UdpipeSession {
    fn annotate(&mut self, text: &str) -> Result<String, AnnotationError> {
        // The presegmented tokenizer splits sentences on line breaks; one text
        // must stay one sentence. Byte offsets are unchanged.
        let input = text.replace(['\r', '\n'], " ");

        tracing::debug!(chars = input.chars().count(), "annotating text");
        self.run_engine(&input)
    }
}

fn check_model(path: &Path) -> Result<(), ModelLoadError> {
    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ModelLoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ModelLoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if !metadata.is_file() {
        return Err(ModelLoadError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    if metadata.len() == 0 {
        return Err(ModelLoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    File::open(path).map_err(|source| ModelLoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn check_engine(engine: &Path) -> Result<(), ModelLoadError> {
    let status = Command::new(engine)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| ModelLoadError::Engine {
            engine: engine.to_path_buf(),
            source,
        })?;

    if !status.success() {
        return Err(ModelLoadError::EngineStatus {
            engine: engine.to_path_buf(),
            status,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path, model: &str) -> SessionConfig {
        SessionConfig {
            model_dir: Some(dir.to_path_buf()),
            model_file: model.to_string(),
            ..SessionConfig::default()
        }
    }

    #[test]
    fn test_missing_model() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = UdpipeSession::new(config_in(dir.path(), "absent.udpipe")).unwrap_err();

        match err {
            ModelLoadError::NotFound { path } => assert!(path.ends_with("absent.udpipe")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_model_is_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("model.udpipe")).expect("mkdir");

        let err = UdpipeSession::new(config_in(dir.path(), "model.udpipe")).unwrap_err();
        assert!(matches!(err, ModelLoadError::NotAFile { .. }));
    }

    #[test]
    fn test_empty_model() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("model.udpipe"), b"").expect("write");

        let err = UdpipeSession::new(config_in(dir.path(), "model.udpipe")).unwrap_err();
        assert!(matches!(err, ModelLoadError::Empty { .. }));
    }

    #[test]
    fn test_missing_engine() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("model.udpipe"), b"model").expect("write");

        let config = SessionConfig {
            engine: dir.path().join("no-such-udpipe"),
            ..config_in(dir.path(), "model.udpipe")
        };
        let err = UdpipeSession::new(config).unwrap_err();
        assert!(matches!(err, ModelLoadError::Engine { .. }));
    }

    // `false` exits 1 even for `--version`.
    #[cfg(unix)]
    #[test]
    fn test_engine_failing_version_check() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("model.udpipe"), b"model").expect("write");

        let config = SessionConfig {
            engine: PathBuf::from("false"),
            ..config_in(dir.path(), "model.udpipe")
        };
        match UdpipeSession::new(config).unwrap_err() {
            ModelLoadError::EngineStatus { engine, status } => {
                assert_eq!(engine, PathBuf::from("false"));
                assert!(!status.success());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
