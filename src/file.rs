//! Config file loading.
//!
//! An empty path means "no config file" and yields an empty map. Otherwise the
//! file must exist and be readable. Files with a `.json` extension are parsed
//! and flattened into dotted keys (see [`flatten`](crate::flatten)); every
//! other extension is accepted but contributes no values.

use std::path::Path;

use serde_json::Value;

use crate::error::TagfigError;
use crate::flatten::flatten;
use crate::resolve::SourceMap;

const JSON_EXTENSION: &str = "json";

pub fn load(path: &str) -> Result<SourceMap, TagfigError> {
    if path.is_empty() {
        return Ok(SourceMap::new());
    }
    let path = Path::new(path);

    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => TagfigError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => TagfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if path.extension().is_some_and(|ext| ext == JSON_EXTENSION) {
        tracing::debug!(path = %path.display(), "loading JSON config file");
        parse_json(path, &content)
    } else {
        tracing::debug!(
            path = %path.display(),
            "config file has no recognized extension, ignoring its contents"
        );
        Ok(SourceMap::new())
    }
}

fn parse_json(path: &Path, content: &str) -> Result<SourceMap, TagfigError> {
    let document: Value = serde_json::from_str(content).map_err(|e| TagfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    match document {
        Value::Object(object) => Ok(flatten(&object)),
        _ => Err(TagfigError::InvalidDocument {
            path: path.to_path_buf(),
            reason: "top level must be a JSON object".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn empty_path_is_empty_map() {
        assert!(load("").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load("/zzz.json").unwrap_err();
        assert!(matches!(err, TagfigError::FileNotFound { .. }));
    }

    #[test]
    fn json_is_flattened() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "config.json",
            r#"{"string": "value", "nested": {"int": 42, "nestedtwo": {"bool": true}}}"#,
        );
        let map = load(&path).unwrap();
        assert_eq!(map["string"], "value");
        assert_eq!(map["nested.int"], "42");
        assert_eq!(map["nested.nestedtwo.bool"], "true");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.json", r#"{"string": "value""#);
        let err = load(&path).unwrap_err();
        match err {
            TagfigError::ParseError { path: p, .. } => assert!(p.ends_with("broken.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_object_document_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "list.json", "[1, 2, 3]");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, TagfigError::InvalidDocument { .. }));
    }

    #[test]
    fn other_extensions_contribute_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "config.toml", "name = \"alice\"\n");
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn extension_match_is_exact() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "config.JSON", r#"{"name": "alice"}"#);
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn directory_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load(&dir.path().to_string_lossy()).unwrap_err();
        assert!(matches!(err, TagfigError::IoError { .. }));
    }
}
