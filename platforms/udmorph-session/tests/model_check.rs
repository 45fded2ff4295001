//! Session construction against an engine that refuses to load the model.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;

use udmorph_session::{Annotator, ModelLoadError, SessionConfig, UdpipeSession};

/// Loads any model except one containing "garbage", the way UDPipe reports a
/// corrupt model file.
const FAKE_UDPIPE: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    exit 0
fi
for arg in "$@"; do
    model="$arg"
done
if grep -q garbage "$model"; then
    echo "Cannot load UDPipe model '$model'!" >&2
    exit 1
fi
input=$(cat)
if [ -n "$input" ]; then
    echo '{"id": 1, "nodes": [{"id": 1, "form": "hus", "properties": {"upos": "NOUN"}}]}'
fi
"#;

// One test so the script is never exec'd while another thread writes it.
#[test]
fn test_engine_must_load_model() {
    let dir = tempfile::tempdir().expect("tempdir");
    let engine = dir.path().join("udpipe");
    fs::write(&engine, FAKE_UDPIPE).expect("engine");
    fs::set_permissions(&engine, fs::Permissions::from_mode(0o755)).expect("chmod");

    fs::write(dir.path().join("corrupt.udpipe"), b"garbage").expect("model");
    fs::write(dir.path().join("danish.udpipe"), b"a real model").expect("model");

    let config_for = |model: &str| SessionConfig {
        engine: engine.clone(),
        model_dir: Some(dir.path().to_path_buf()),
        model_file: model.to_string(),
    };

    match UdpipeSession::new(config_for("corrupt.udpipe")).unwrap_err() {
        ModelLoadError::Unparsable { path, message } => {
            assert!(path.ends_with("corrupt.udpipe"));
            assert!(message.starts_with("Cannot load UDPipe model"));
        }
        other => panic!("unexpected error: {other}"),
    }

    let mut session = UdpipeSession::new(config_for("danish.udpipe")).expect("session");
    let raw = session.annotate("hus").expect("annotate");
    assert!(raw.contains(r#""form": "hus""#));
}
