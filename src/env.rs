//! Environment variable lookup.
//!
//! The environment is never materialized as a map. Each descriptor's key is
//! looked up on demand as `uppercase(prefix + key)`; no separator is inserted,
//! so a prefix like `APP_` must carry its own trailing underscore.
//!
//! Lookups go through the [`Env`] capability so that tests (and callers that
//! keep configuration in something other than the process environment) can
//! pass synthetic data instead of mutating process globals.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read-only access to a set of environment variables.
pub trait Env {
    fn var(&self, name: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl<S: BuildHasher> Env for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Env for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// The variable name consulted for `key` under `prefix`.
pub fn var_name(prefix: &str, key: &str) -> String {
    format!("{prefix}{key}").to_uppercase()
}
