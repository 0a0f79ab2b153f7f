//! Field annotations: `name:port;mode:cli,env;default:8080;desc:Listen port`.
//!
//! Pairs are separated by `;`. Each pair splits on its first `:` only, so values
//! may contain further colons (`default:http://localhost`). Recognized keys are
//! `name`, `mode`, `default` and `desc`; anything else is ignored. A pair with
//! no `:` at all is read as a key with an empty value.

use serde::Serialize;

use crate::error::TagfigError;
use crate::types::{Modes, Source};

const PAIR_SEPARATOR: char = ';';
const KEY_SEPARATOR: char = ':';
const LIST_SEPARATOR: char = ',';

/// Parsed metadata for one terminal configuration field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    /// Dotted chain of field names from the root record, e.g. `"server.tls.enabled"`.
    pub path: String,
    /// The name looked up in every source.
    pub key: String,
    /// Sources eligible to supply the value. Empty means all of them.
    pub modes: Modes,
    /// `Some("")` is a real default that clears the field.
    pub default: Option<String>,
    /// Present (even if empty) when the field is listed in help.
    pub description: Option<String>,
}

impl Descriptor {
    pub fn is_help_visible(&self) -> bool {
        self.description.is_some()
    }
}

/// Parse the annotation of the field at `path`.
///
/// The returned descriptor's `key` is whatever `name:` declared (possibly empty);
/// composing it with a parent is done by the caller.
pub fn parse(path: &str, tag: &str) -> Result<Descriptor, TagfigError> {
    let mut desc = Descriptor {
        path: path.to_string(),
        key: String::new(),
        modes: Modes::UNRESTRICTED,
        default: None,
        description: None,
    };

    for pair in tag.split(PAIR_SEPARATOR) {
        let (key, value) = pair.split_once(KEY_SEPARATOR).unwrap_or((pair, ""));
        match key {
            "name" => desc.key = value.to_string(),
            "mode" => desc.modes = parse_modes(path, value)?,
            "default" => desc.default = Some(value.to_string()),
            "desc" => desc.description = Some(value.to_string()),
            _ => {}
        }
    }

    Ok(desc)
}

fn parse_modes(path: &str, list: &str) -> Result<Modes, TagfigError> {
    let mut modes = Modes::UNRESTRICTED;
    for token in list.split(LIST_SEPARATOR).filter(|t| !t.is_empty()) {
        let source = Source::from_name(token).ok_or_else(|| TagfigError::UnknownMode {
            field: path.to_string(),
            token: token.to_string(),
        })?;
        modes = modes.with(source);
    }
    Ok(modes)
}
