//! Bind a struct's fields to command-line flags, a JSON config file, and
//! environment variables, driven by one annotation per field.
//!
//! ```ignore
//! use tagfig::{Parser, Record};
//!
//! #[derive(Record, Default)]
//! struct AppConfig {
//!     #[config("name:config_file;mode:cli;desc:Path to a JSON config file")]
//!     config_file: String,
//!
//!     #[config("name:env_prefix;mode:cli;default:MYAPP_")]
//!     env_prefix: String,
//!
//!     #[config("name:port;default:8080;desc:Listen port")]
//!     port: u16,
//!
//!     #[config("name:db;mode:cfg,env")]
//!     db: DbConfig,
//! }
//!
//! #[derive(Record, Default)]
//! struct DbConfig {
//!     #[config("name:url;desc:Connection string")]
//!     url: String,
//! }
//!
//! let mut config = AppConfig::default();
//! let mut parser = Parser::new(&mut config)?;
//! parser.parse("config_file", "env_prefix")?;
//! ```
//!
//! # Annotations
//!
//! Each field opts in with `#[config("key:value;key:value")]`. Fields without
//! the attribute are left alone. Recognized keys:
//!
//! | Key | Meaning |
//! |-----|---------|
//! | `name` | The lookup key. Defaults to the field path. |
//! | `mode` | Comma list of `cli`, `cfg`, `env`. Absent means all three. |
//! | `default` | Used when no source has a value. `default:` is an empty default, not a missing one. |
//! | `desc` | Help text. Fields without `desc` are omitted from [`Parser::help`]. |
//!
//! Unknown keys are ignored. An unknown `mode` token fails construction.
//!
//! # Sources and precedence
//!
//! ```text
//! Default               default:...
//!        ↑ overridden by
//! Environment           uppercase(prefix + key)
//!        ↑ overridden by
//! Config file           key (JSON, nested objects flattened to dotted keys)
//!        ↑ overridden by
//! Command line          --key value, --key=value, -key value, -key=value
//! ```
//!
//! `mode` removes sources from consideration for a field; the order among the
//! remaining ones never changes. A top-level field no source and no default
//! can supply keeps whatever value it had.
//!
//! Two fields are resolved first, before the config file is read: the one
//! holding the config file path and the one holding the environment prefix.
//! Their keys are passed to [`Parser::parse`]. They can only come from the
//! command line, the unprefixed environment, or their defaults.
//!
//! # Nested records
//!
//! A field whose type is itself a record is walked recursively when it has a
//! `#[config]` attribute (bare `#[config]` is fine). Its annotation does not
//! produce a value; it shapes its children:
//!
//! - a child's key becomes `parent_key.child_key`, or just `parent_key` if the
//!   child declares no `name`;
//! - a child may narrow the parent's `mode` but not widen it, and inherits it
//!   when it declares none.
//!
//! Each annotated nested record is reset to `Default` at the start of every
//! pass, then filled. Inside it, fields nothing resolves end up at their zero
//! value rather than their previous one.
//!
//! # Field types
//!
//! `bool`, all fixed-width and pointer-width integers, `f32`, `f64` and
//! `String`. Booleans accept `true/t/y/yes` and `false/f/n/no` in any case;
//! other text is ignored unless [`Parser::strict_bools`] is on. Integers are
//! range-checked against the field's width. Collections, options, smart
//! pointers and channels compile but fail with
//! [`TagfigError::UnsupportedKind`] if a value is ever resolved for them.
//!
//! # Without the derive
//!
//! The derive implements [`Field`] and [`Record`], and requires `Default`
//! for [`Record::reset`]. Both can be written by hand for types the derive
//! cannot annotate; see [`FieldDef`] and [`Shape`].
//!
//! # Error handling
//!
//! All fallible operations return [`TagfigError`]. Construction errors
//! (bad target, bad annotation) happen in [`Parser::new`]; source and
//! coercion errors abort [`Parser::parse`] at the first failure. Enable the
//! `rich-errors` feature for `miette` diagnostics.

extern crate self as tagfig;

pub mod error;
pub mod types;

mod annotation;
mod cli;
mod coerce;
mod env;
mod file;
mod flatten;
mod help;
mod parser;
mod record;
mod resolve;
mod tree;

#[cfg(test)]
mod fixtures;

pub use annotation::Descriptor;
pub use env::{Env, ProcessEnv};
pub use error::TagfigError;
pub use parser::Parser;
pub use record::{Field, Record, Slot};
pub use tagfig_derive::Record;
pub use types::{FieldDef, Modes, Shape, Source};
