//! Multi-source lookup and the fill pass.
//!
//! For a key and its allowed modes, sources are consulted lowest priority
//! first and each hit overwrites the previous one:
//!
//! ```text
//! Environment    uppercase(prefix + key)
//!      ↑ overridden by
//! Config file    key
//!      ↑ overridden by
//! CLI            key
//! ```
//!
//! A miss in every eligible source falls back to the descriptor's default. With
//! no default the field is left as it was.

use std::collections::HashMap;

use crate::annotation::Descriptor;
use crate::coerce;
use crate::env::{self, Env};
use crate::error::TagfigError;
use crate::record::{Record, Slot};
use crate::tree::{DescriptorTree, join};
use crate::types::{FieldDef, Modes, Shape, Source};

/// Logical key → raw text, for one source and one pass.
pub type SourceMap = HashMap<String, String>;

/// Everything one resolution pass reads from.
pub struct Sources<'e> {
    pub cli: SourceMap,
    pub file: SourceMap,
    pub env: &'e dyn Env,
    pub env_prefix: String,
}

impl<'e> Sources<'e> {
    /// Sources before the config file has been read: CLI and environment
    /// only, with no env prefix.
    pub fn bootstrap(cli: SourceMap, env: &'e dyn Env) -> Self {
        Self {
            cli,
            file: SourceMap::new(),
            env,
            env_prefix: String::new(),
        }
    }

    /// The winning value for `key` and the source it came from.
    pub fn lookup(&self, key: &str, modes: Modes) -> Option<(String, Source)> {
        let mut found = None;

        if modes.allows(Source::Env)
            && let Some(value) = self.env.var(&env::var_name(&self.env_prefix, key))
        {
            found = Some((value, Source::Env));
        }
        if modes.allows(Source::Cfg)
            && let Some(value) = self.file.get(key)
        {
            found = Some((value.clone(), Source::Cfg));
        }
        if modes.allows(Source::Cli)
            && let Some(value) = self.cli.get(key)
        {
            found = Some((value.clone(), Source::Cli));
        }

        found
    }

    /// Lookup with default fallback. `None` is a soft miss.
    pub fn value_for(&self, desc: &Descriptor) -> Option<String> {
        self.value_within(desc, desc.modes)
    }

    fn value_within(&self, desc: &Descriptor, modes: Modes) -> Option<String> {
        if let Some((value, source)) = self.lookup(&desc.key, modes) {
            tracing::trace!(field = %desc.path, key = %desc.key, %source, "value found");
            return Some(value);
        }
        if let Some(default) = &desc.default {
            tracing::trace!(field = %desc.path, key = %desc.key, "default applied");
            return Some(default.clone());
        }
        None
    }
}

/// Resolve one of the designated bootstrap fields (config file path, env
/// prefix) before the config file exists.
///
/// Only the CLI and environment are consulted, further limited by the
/// descriptor's own modes. An empty `key` disables the lookup. More than one
/// descriptor claiming `key` is an error.
pub fn bootstrap_value(
    tree: &DescriptorTree,
    key: &str,
    sources: &Sources<'_>,
) -> Result<Option<String>, TagfigError> {
    if key.is_empty() {
        return Ok(None);
    }

    let mut claims = tree.values().filter(|d| d.key == key);
    let Some(desc) = claims.next() else {
        return Ok(None);
    };
    if let Some(other) = claims.next() {
        return Err(TagfigError::DuplicateBootstrapKey {
            key: key.to_string(),
            first: desc.path.clone(),
            second: other.path.clone(),
        });
    }

    let early = Modes::only(Source::Cli).with(Source::Env);
    match desc.modes.intersect(early) {
        Some(modes) => Ok(sources.value_within(desc, modes)),
        // Only file-sourced: nothing to look up yet.
        None => Ok(desc.default.clone()),
    }
}

/// Walk `record` alongside its schema and write every resolved terminal field.
///
/// Each annotated nested record is reset to its zero value before its fields
/// are filled. Terminal fields of `record` itself that resolve nothing keep
/// their value.
///
/// Stops at the first coercion error; fields written before it keep their new
/// values.
pub fn fill(
    record: &mut dyn Record,
    fields: &[FieldDef],
    prefix: &str,
    tree: &DescriptorTree,
    sources: &Sources<'_>,
    strict_bools: bool,
) -> Result<(), TagfigError> {
    for field in fields {
        let path = join(prefix, field.name);
        let Some(slot) = record.field_mut(field.name) else {
            continue;
        };

        match (slot, field.shape) {
            (Slot::Record(nested), Shape::Record(children)) => {
                if field.tag.is_some() {
                    nested.reset();
                    fill(nested, children, &path, tree, sources, strict_bools)?;
                }
            }
            (slot, _) => {
                let Some(desc) = tree.get(&path) else {
                    continue;
                };
                if let Some(value) = sources.value_for(desc) {
                    coerce::assign(slot, &value, &desc.path, strict_bools)?;
                }
            }
        }
    }
    Ok(())
}
