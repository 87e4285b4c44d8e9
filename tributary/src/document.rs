//! Reading nested key/value documents from disk.
//!
//! The aggregator treats document loading as a collaborator: given a path
//! (or a directory plus base name) produce a nested key/value document, or
//! fail. The parser is selected by file extension; TOML is the default for
//! unknown extensions, and YAML support is gated behind the `yaml` feature.

use camino::{Utf8Path, Utf8PathBuf};
use figment::{
    Figment,
    providers::{Format, Toml},
};
use serde_json::{Map, Value};

use crate::error::{TributaryError, TributaryResult};

/// A nested key/value document keyed by top-level name.
pub type Document = Map<String, Value>;

/// Extensions tried, in declaration order, when locating a document by base
/// name.
#[cfg(feature = "yaml")]
const EXTENSIONS: &[&str] = &["toml", "json", "yaml", "yml"];
#[cfg(not(feature = "yaml"))]
const EXTENSIONS: &[&str] = &["toml", "json"];

/// Load a document from `path`, selecting the parser by extension.
///
/// # Errors
///
/// Returns a [`TributaryError::File`] if the file cannot be read or parsed.
pub fn load_document(path: &Utf8Path) -> TributaryResult<Document> {
    let data = std::fs::read_to_string(path).map_err(|e| TributaryError::file(path, e))?;
    parse_document(path, &data)
}

/// Locate and load a document named `base` under `dir`, trying each known
/// extension in a fixed order.
///
/// Returns `Ok(None)` when no candidate file exists.
///
/// # Errors
///
/// Returns a [`TributaryError::File`] if a candidate exists but cannot be
/// read or parsed.
pub fn find_document(
    dir: &Utf8Path,
    base: &str,
) -> TributaryResult<Option<(Utf8PathBuf, Document)>> {
    for ext in EXTENSIONS {
        let candidate = dir.join(format!("{base}.{ext}"));
        if candidate.is_file() {
            let document = load_document(&candidate)?;
            return Ok(Some((candidate, document)));
        }
    }
    Ok(None)
}

fn parse_document(path: &Utf8Path, data: &str) -> TributaryResult<Document> {
    let ext = path.extension().map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => serde_json::from_str(data).map_err(|e| TributaryError::file(path, e)),
        Some("yaml" | "yml") => parse_yaml(path, data),
        _ => {
            // Validate TOML first so parse failures carry this file's path
            // before Figment performs its own pass via `Toml::string`.
            toml::from_str::<toml::Value>(data).map_err(|e| TributaryError::file(path, e))?;
            Figment::from(Toml::string(data))
                .extract()
                .map_err(|e| TributaryError::file(path, e))
        }
    }
}

#[cfg(feature = "yaml")]
fn parse_yaml(path: &Utf8Path, data: &str) -> TributaryResult<Document> {
    serde_saphyr::from_str(data).map_err(|e| TributaryError::file(path, e))
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(path: &Utf8Path, _data: &str) -> TributaryResult<Document> {
    Err(TributaryError::file(
        path,
        std::io::Error::other(
            "yaml feature disabled: enable the 'yaml' feature to support this file format",
        ),
    ))
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use serde_json::json;

    use super::*;

    fn write(dir: &Utf8Path, name: &str, contents: &str) -> Utf8PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    fn tempdir() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().expect("create tempdir");
        let utf8 = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        (dir, utf8)
    }

    #[test]
    fn loads_toml_documents() {
        let (_guard, dir) = tempdir();
        let path = write(&dir, "app.toml", "host = \"localhost\"\nport = 8080\n");
        let doc = load_document(&path).expect("load toml");
        assert_eq!(doc.get("host"), Some(&json!("localhost")));
        assert_eq!(doc.get("port"), Some(&json!(8080)));
    }

    #[test]
    fn loads_json_documents() {
        let (_guard, dir) = tempdir();
        let path = write(&dir, "app.json", r#"{"host": "localhost", "nested": {"a": 1}}"#);
        let doc = load_document(&path).expect("load json");
        assert_eq!(doc.get("nested"), Some(&json!({"a": 1})));
    }

    #[test]
    fn unknown_extensions_fall_back_to_toml() {
        let (_guard, dir) = tempdir();
        let path = write(&dir, "app.conf", "key = \"value\"\n");
        let doc = load_document(&path).expect("load conf as toml");
        assert_eq!(doc.get("key"), Some(&json!("value")));
    }

    #[test]
    fn unreadable_paths_report_the_path() {
        let (_guard, dir) = tempdir();
        let missing = dir.join("absent.toml");
        let err = load_document(&missing).expect_err("missing file must fail");
        assert!(matches!(err, TributaryError::File { ref path, .. } if *path == missing));
    }

    #[test]
    fn invalid_toml_reports_the_path() {
        let (_guard, dir) = tempdir();
        let path = write(&dir, "bad.toml", "not valid toml [[[");
        let err = load_document(&path).expect_err("parse must fail");
        assert!(matches!(err, TributaryError::File { .. }));
    }

    #[test]
    fn find_document_prefers_toml_over_json() {
        let (_guard, dir) = tempdir();
        write(&dir, "app.json", r#"{"from": "json"}"#);
        let toml_path = write(&dir, "app.toml", "from = \"toml\"\n");
        let (path, doc) = find_document(&dir, "app")
            .expect("find")
            .expect("candidate exists");
        assert_eq!(path, toml_path);
        assert_eq!(doc.get("from"), Some(&json!("toml")));
    }

    #[test]
    fn find_document_returns_none_when_absent() {
        let (_guard, dir) = tempdir();
        let found = find_document(&dir, "nothing").expect("find");
        assert!(found.is_none());
    }
}
