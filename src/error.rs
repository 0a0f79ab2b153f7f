use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum TagfigError {
    #[error("Target must be a record, got {type_name}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(tagfig::not_a_record),
            help("pass a mutable reference to a struct deriving `Record`")
        )
    )]
    NotARecord { type_name: &'static str },

    #[error("Unknown mode '{token}' on field '{field}'. Available modes: cli, cfg, env")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(tagfig::unknown_mode)))]
    UnknownMode { field: String, token: String },

    #[error("Field '{field}' allows modes ({modes}) outside its parent's ({parent})")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(tagfig::mode_widening),
            help("nested fields may only narrow the modes of the record that contains them")
        )
    )]
    ModeWidening {
        field: String,
        modes: String,
        parent: String,
    },

    #[error("Bootstrap key '{key}' is claimed by both '{first}' and '{second}'")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(tagfig::duplicate_bootstrap_key)))]
    DuplicateBootstrapKey {
        key: String,
        first: String,
        second: String,
    },

    #[error("Cannot find config file {path}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(tagfig::file_not_found)))]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(tagfig::io)))]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(tagfig::parse)))]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid config document {path}: {reason}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(tagfig::invalid_document)))]
    InvalidDocument { path: PathBuf, reason: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(tagfig::invalid_value)))]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Field '{field}' has unsupported kind {kind}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(tagfig::unsupported_kind)))]
    UnsupportedKind { field: String, kind: &'static str },
}
