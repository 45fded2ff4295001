use std::path::PathBuf;

use udmorph::{annotate_batch, BatchError, ModelLoadError, SessionConfig};

#[test]
fn test_missing_model_fails_before_any_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = SessionConfig {
        engine: PathBuf::from("/nonexistent/udpipe"),
        model_dir: Some(dir.path().to_path_buf()),
        ..SessionConfig::default()
    };

    let err = annotate_batch(&config, &["Huset brænder."]).unwrap_err();
    assert!(matches!(err, BatchError::ModelLoad(ModelLoadError::NotFound { .. })));
    assert_eq!(err.index(), None);
}

#[cfg(unix)]
mod engine {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    use udmorph::protocol::{Definite, Gender, Number, Upos};
    use udmorph::{annotate_batch, BatchError, DecodeError, SessionConfig};

    /// Answers two known sentences the way UDPipe's EPE writer would, and
    /// fails on anything containing "explode".
    const FAKE_UDPIPE: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    exit 0
fi
input=$(cat)
case "$input" in
    "Huset brænder.")
        echo '{"id": 1, "nodes": [{"id": 1, "form": "Huset", "start": 0, "end": 5, "properties": {"xpos": "NOUN", "upos": "NOUN", "lemma": "hus", "Definite": "Def", "Gender": "Neut", "Number": "Sing"}}, {"id": 2, "form": "brænder", "start": 6, "end": 13, "top": true, "properties": {"xpos": "VERB", "upos": "VERB", "lemma": "brænde", "Mood": "Ind", "Tense": "Pres", "VerbForm": "Fin", "Voice": "Act"}, "edges": [{"label": "nsubj", "target": 1}, {"label": "punct", "target": 3}]}, {"id": 3, "form": ".", "start": 13, "end": 14, "properties": {"xpos": "PUNCT", "upos": "PUNCT", "lemma": "."}}]}'
        ;;
    "hus")
        echo '{"id": 1, "nodes": [{"id": 1, "form": "hus", "start": 0, "end": 3, "top": true, "properties": {"xpos": "NOUN", "upos": "NOUN", "lemma": "hus"}}]}'
        ;;
    *explode*)
        echo "Cannot parse input" >&2
        exit 1
        ;;
    "")
        ;;
    *)
        echo '{"id": 1, "nodes": [{"id": 1, "form": "x", "properties": {"upos": "Adjectivee"}}]}'
        ;;
esac
"#;

    // Everything that execs the script lives in one test.
    #[test]
    fn test_batch_against_fake_udpipe() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("danish.udpipe"), b"model").expect("model");
        let engine = dir.path().join("udpipe");
        fs::write(&engine, FAKE_UDPIPE).expect("engine");
        fs::set_permissions(&engine, fs::Permissions::from_mode(0o755)).expect("chmod");

        let config = SessionConfig {
            engine,
            model_dir: Some(dir.path().to_path_buf()),
            model_file: "danish.udpipe".to_string(),
        };

        let sentences = annotate_batch(&config, &["Huset brænder.", "", "hus"]).expect("batch");
        assert_eq!(sentences.len(), 3);

        let huset = &sentences[0].nodes[0];
        assert_eq!(huset.properties.upos, Upos::Noun);
        assert_eq!(huset.properties.definite, Some(Definite::Def));
        assert_eq!(huset.properties.gender, Some(Gender::Neut));
        assert_eq!(huset.properties.number, Some(Number::Sing));
        assert_eq!(sentences[0].tops().count(), 1);
        assert_eq!(sentences[0].nodes[1].edges.len(), 2);

        assert!(sentences[1].is_empty());

        let hus = &sentences[2].nodes[0].properties;
        assert_eq!(hus.upos, Upos::Noun);
        assert_eq!(hus.lemma.as_deref(), Some("hus"));
        assert!(hus.has_no_features());

        let err = annotate_batch(&config, &["hus", "please explode", "hus"]).unwrap_err();
        match err {
            BatchError::Annotation { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(source.message, "Cannot parse input");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = annotate_batch(&config, &["ukendt"]).unwrap_err();
        match err {
            BatchError::Decode {
                index: 0,
                source: DecodeError::InvalidValue { field, value, .. },
            } => {
                assert_eq!(field, "upos");
                assert_eq!(value, "Adjectivee");
            }
            other => panic!("unexpected error: {other}"),
        }

        let empty: Vec<String> = Vec::new();
        assert!(annotate_batch(&config, empty.as_slice()).expect("empty batch").is_empty());
    }
}
