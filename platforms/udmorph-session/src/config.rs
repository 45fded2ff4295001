use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ModelLoadError};

/// Model shipped next to the executable when nothing else is configured.
pub const DEFAULT_MODEL: &str = "danish-ddt-ud-2.4-190531.udpipe";

/// UDPipe binary looked up on `PATH` by default.
pub const DEFAULT_ENGINE: &str = "udpipe";

pub const ENV_ENGINE: &str = "UDMORPH_ENGINE";
pub const ENV_MODEL_DIR: &str = "UDMORPH_MODEL_DIR";
pub const ENV_MODEL_FILE: &str = "UDMORPH_MODEL";

/// Where the engine and its model live.
///
/// ```toml
/// engine = "/opt/udpipe/bin/udpipe"
/// model_dir = "/srv/models"
/// model_file = "danish-ddt-ud-2.4-190531.udpipe"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Engine executable.
    pub engine: PathBuf,
    /// Base directory for `model_file`. Defaults to the directory of the
    /// running executable.
    pub model_dir: Option<PathBuf>,
    /// Model file name, resolved against `model_dir`.
    pub model_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            engine: PathBuf::from(DEFAULT_ENGINE),
            model_dir: None,
            model_file: DEFAULT_MODEL.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Applies `UDMORPH_ENGINE`, `UDMORPH_MODEL_DIR` and `UDMORPH_MODEL`.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Same as [`Self::with_env_overrides`] with an explicit variable lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(engine) = lookup(ENV_ENGINE).filter(|v| !v.is_empty()) {
            self.engine = PathBuf::from(engine);
        }
        if let Some(dir) = lookup(ENV_MODEL_DIR).filter(|v| !v.is_empty()) {
            self.model_dir = Some(PathBuf::from(dir));
        }
        if let Some(file) = lookup(ENV_MODEL_FILE).filter(|v| !v.is_empty()) {
            self.model_file = file;
        }
        self
    }

    /// `model_dir/model_file`, falling back to the executable's directory.
    pub fn resolve_model_path(&self) -> Result<PathBuf, ModelLoadError> {
        let base = match &self.model_dir {
            Some(dir) => dir.clone(),
            None => executable_dir()?,
        };
        Ok(base.join(&self.model_file))
    }
}

fn executable_dir() -> Result<PathBuf, ModelLoadError> {
    let exe = env::current_exe().map_err(ModelLoadError::NoBaseDir)?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Stages every session runs, in order. Not adjustable per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStages {
    /// Tokenizer options; `presegmented` keeps one input line as one sentence.
    pub tokenizer: &'static str,
    pub tag: bool,
    pub parse: bool,
    pub output: &'static str,
}

impl PipelineStages {
    pub const FIXED: PipelineStages = PipelineStages {
        tokenizer: "presegmented",
        tag: true,
        parse: true,
        output: "epe",
    };

    /// Engine command-line flags, model path excluded.
    pub fn engine_args(&self) -> Vec<String> {
        let mut args = vec![
            "--tokenize".to_string(),
            format!("--tokenizer={}", self.tokenizer),
        ];
        if self.tag {
            args.push("--tag".to_string());
        }
        if self.parse {
            args.push("--parse".to_string());
        }
        args.push(format!("--output={}", self.output));
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.engine, PathBuf::from("udpipe"));
        assert_eq!(config.model_file, DEFAULT_MODEL);
        assert!(config.model_dir.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SessionConfig::from_toml_str(r#"model_dir = "/srv/models""#).expect("valid toml");
        assert_eq!(config.model_dir, Some(PathBuf::from("/srv/models")));
        assert_eq!(config.model_file, DEFAULT_MODEL);
        assert_eq!(
            config.resolve_model_path().expect("explicit dir"),
            PathBuf::from("/srv/models").join(DEFAULT_MODEL)
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = SessionConfig::from_toml_str(r#"modle_dir = "/srv""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SessionConfig::load(Path::new("/nonexistent/udmorph.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_ENGINE, "/opt/udpipe"),
            (ENV_MODEL_DIR, "/models"),
            (ENV_MODEL_FILE, ""),
        ]
        .into_iter()
        .collect();

        let config = SessionConfig::default()
            .with_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.engine, PathBuf::from("/opt/udpipe"));
        assert_eq!(config.model_dir, Some(PathBuf::from("/models")));
        // Empty values do not clear the configured file.
        assert_eq!(config.model_file, DEFAULT_MODEL);
    }

    #[test]
    fn test_default_base_is_executable_dir() {
        let path = SessionConfig::default().resolve_model_path().expect("current_exe");
        assert!(path.ends_with(DEFAULT_MODEL));
        assert!(path.parent().is_some());
    }

    #[test]
    fn test_engine_args() {
        assert_eq!(
            PipelineStages::FIXED.engine_args(),
            vec![
                "--tokenize",
                "--tokenizer=presegmented",
                "--tag",
                "--parse",
                "--output=epe"
            ]
        );
    }
}
