use std::fmt;

use crate::annotation::Descriptor;
use crate::cli;
use crate::env::{Env, ProcessEnv};
use crate::error::TagfigError;
use crate::file;
use crate::help;
use crate::record::{Field, Record, Slot};
use crate::resolve::{self, Sources};
use crate::tree::{self, DescriptorTree};
use crate::types::{FieldDef, Shape};

/// Binds one record instance to the CLI, a config file and the environment.
///
/// The descriptor tree is built once, in [`Parser::new`], and reused by every
/// call to [`parse`](Self::parse) / [`parse_from`](Self::parse_from). Source
/// maps are rebuilt on each call.
pub struct Parser<'a> {
    target: &'a mut dyn Record,
    fields: &'static [FieldDef],
    tree: DescriptorTree,
    strict_bools: bool,
}

impl<'a> Parser<'a> {
    /// Parse the annotations of `T` and hold on to `target` for filling.
    ///
    /// Fails if `T` is not a record, if an annotation names an unknown mode, or
    /// if a nested field widens its parent's modes.
    pub fn new<T: Field>(target: &'a mut T) -> Result<Self, TagfigError> {
        let not_a_record = || TagfigError::NotARecord {
            type_name: std::any::type_name::<T>(),
        };
        let Shape::Record(fields) = T::SHAPE else {
            return Err(not_a_record());
        };
        let tree = tree::build(fields)?;
        let Slot::Record(target) = target.slot() else {
            return Err(not_a_record());
        };

        Ok(Self {
            target,
            fields,
            tree,
            strict_bools: false,
        })
    }

    /// Enable or disable strict booleans (default: `false`).
    ///
    /// When enabled, boolean text outside `true/t/y/yes/false/f/n/no` is an
    /// error. When disabled it leaves the field unchanged.
    pub fn strict_bools(mut self, strict: bool) -> Self {
        self.strict_bools = strict;
        self
    }

    /// Descriptors in path order.
    pub fn descriptors(&self) -> impl Iterator<Item = &Descriptor> {
        self.tree.values()
    }

    /// Resolve every field from `std::env::args()` and the process environment.
    ///
    /// `config_path_key` and `env_prefix_key` name the descriptors (by key)
    /// that supply the config file path and the environment variable prefix.
    /// Pass `""` to skip either.
    pub fn parse(&mut self, config_path_key: &str, env_prefix_key: &str) -> Result<(), TagfigError> {
        self.parse_from(std::env::args(), &ProcessEnv, config_path_key, env_prefix_key)
    }

    /// Resolve every field from explicit arguments and environment.
    ///
    /// `args` includes the program path as its first element, like
    /// `std::env::args()`.
    ///
    /// 1. Tokenize `args` into the CLI map.
    /// 2. Resolve the config path and env prefix from the CLI and environment.
    /// 3. Load the config file (if any path resolved).
    /// 4. Fill every terminal field: CLI > file > env > default.
    ///
    /// The first failure aborts the pass. Fields already written keep their
    /// new values.
    pub fn parse_from<I, S>(
        &mut self,
        args: I,
        env: &dyn Env,
        config_path_key: &str,
        env_prefix_key: &str,
    ) -> Result<(), TagfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sources = Sources::bootstrap(cli::parse_args(args), env);

        let config_path = resolve::bootstrap_value(&self.tree, config_path_key, &sources)?;
        let env_prefix = resolve::bootstrap_value(&self.tree, env_prefix_key, &sources)?;

        sources.file = file::load(config_path.as_deref().unwrap_or_default())?;
        sources.env_prefix = env_prefix.unwrap_or_default();
        tracing::debug!(
            config_path = config_path.as_deref().unwrap_or(""),
            env_prefix = %sources.env_prefix,
            cli_keys = sources.cli.len(),
            file_keys = sources.file.len(),
            "sources ready"
        );

        resolve::fill(
            &mut *self.target,
            self.fields,
            "",
            &self.tree,
            &sources,
            self.strict_bools,
        )
    }

    /// Aligned usage listing of every field that declared `desc`, each line
    /// starting with `prefix`.
    pub fn help(&self, prefix: &str) -> String {
        help::render(self.tree.values(), prefix)
    }
}

impl fmt::Debug for Parser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("tree", &self.tree)
            .field("strict_bools", &self.strict_bools)
            .finish_non_exhaustive()
    }
}
