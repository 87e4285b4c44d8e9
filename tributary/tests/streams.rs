//! Behaviour of the built-in stream types outside a full aggregation pass.

use camino::Utf8PathBuf;
use serde_json::json;
use test_helpers::env;
use tributary::streams::{EnvStream, FileStream, FixtureStream};
use tributary::{Stream, TributaryError};

#[test]
fn env_streams_strip_the_prefix_and_lowercase_keys() {
    let _host = env::set_var("TRIB_STREAM_TEST_HOST", "localhost");
    let _port = env::set_var("TRIB_STREAM_TEST_PORT", "6379");

    let stream = EnvStream::prefixed("env", "TRIB_STREAM_TEST_");
    let contribution = stream.get().expect("env get");
    assert_eq!(contribution.get("host"), Some(&json!("localhost")));
    assert_eq!(contribution.get("port"), Some(&json!(6379)));
}

#[test]
fn env_streams_ignore_unprefixed_variables() {
    let _other = env::set_var("TRIB_STREAM_OTHER_KEY", "ignored");

    let stream = EnvStream::prefixed("env", "TRIB_STREAM_EMPTY_");
    let contribution = stream.get().expect("env get");
    assert!(contribution.is_empty());
}

#[test]
fn file_streams_load_their_named_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
    std::fs::write(root.join("redis.toml"), "url = \"redis://localhost\"\n")
        .expect("write document");

    let stream = FileStream::new(root, "redis");
    assert_eq!(stream.name(), "redis");
    let contribution = stream.get().expect("file get");
    assert_eq!(contribution.get("url"), Some(&json!("redis://localhost")));
}

#[test]
fn file_streams_fail_hard_when_their_document_is_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");

    let stream = FileStream::new(root, "absent");
    let err = stream.get().expect_err("missing document");
    assert!(matches!(err, TributaryError::File { .. }));
}

#[test]
fn fixture_streams_are_deterministic_across_queries() {
    let values = json!({"k": "v"}).as_object().cloned().expect("object");
    let stream = FixtureStream::new("fixed", values);
    let first = stream.get().expect("first get");
    let second = stream.get().expect("second get");
    assert_eq!(first, second);
}
