//! Command-line tokenizer.
//!
//! Turns a raw argument list into a flat `name → value` map. The first token
//! is the program path and is skipped. Recognized forms:
//!
//! - `-name=value` or `--name=value`: split on the first `=`; the value keeps
//!   any further `=` characters.
//! - `-name value` or `--name value`: the next token is the value unless it
//!   starts with `-`.
//! - `-name` / `--name` followed by another flag or by nothing: a bare flag
//!   whose value is the empty string.
//!
//! Tokens that are neither flags nor flag values are positional and ignored.
//! A flag consisting only of dashes carries no name and is ignored too.

use crate::resolve::SourceMap;

const FLAG_PREFIX: char = '-';
const VALUE_SEPARATOR: char = '=';

pub fn parse_args<I, S>(args: I) -> SourceMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = SourceMap::new();
    let mut pending: Option<String> = None;

    for arg in args.into_iter().skip(1) {
        let arg = arg.as_ref();

        if !arg.starts_with(FLAG_PREFIX) {
            if let Some(name) = pending.take() {
                map.insert(name, arg.to_string());
            }
            continue;
        }

        if let Some(name) = pending.take() {
            map.insert(name, String::new());
        }

        let (name, value) = match arg.split_once(VALUE_SEPARATOR) {
            Some((name, value)) => (name, Some(value)),
            None => (arg, None),
        };
        let name = name.trim_start_matches(FLAG_PREFIX);
        if name.is_empty() {
            continue;
        }

        match value {
            Some(value) => {
                map.insert(name.to_string(), value.to_string());
            }
            None => pending = Some(name.to_string()),
        }
    }

    if let Some(name) = pending {
        map.insert(name, String::new());
    }

    map
}
