//! Convert resolved text into a typed field.
//!
//! - Booleans accept `true/t/y/yes` and `false/f/n/no`, case-insensitively.
//!   Other text leaves the field untouched, or fails when strict booleans are
//!   enabled.
//! - Integers parse as base-10 and must fit the field's width.
//! - Floats use Rust's float grammar (`1.5`, `-2e3`, `inf`, `NaN`).
//! - Strings are assigned verbatim.
//! - Records never reach coercion; anything else is an unsupported kind.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::TagfigError;
use crate::record::Slot;

const TRUE_WORDS: [&str; 4] = ["true", "t", "y", "yes"];
const FALSE_WORDS: [&str; 4] = ["false", "f", "n", "no"];

pub fn parse_bool(value: &str) -> Option<bool> {
    let lower = value.to_lowercase();
    if TRUE_WORDS.contains(&lower.as_str()) {
        Some(true)
    } else if FALSE_WORDS.contains(&lower.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Write `value` into `slot`. `field` is the descriptor path, used in errors.
pub fn assign(
    slot: Slot<'_>,
    value: &str,
    field: &str,
    strict_bools: bool,
) -> Result<(), TagfigError> {
    match slot {
        Slot::Bool(b) => match parse_bool(value) {
            Some(parsed) => *b = parsed,
            None if strict_bools => {
                return Err(TagfigError::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                    reason: "expected one of true, t, y, yes, false, f, n, no".into(),
                });
            }
            None => {
                tracing::debug!(field, value, "unrecognized boolean text, field left unchanged");
            }
        },
        Slot::I8(v) => *v = parse_number(value, field)?,
        Slot::I16(v) => *v = parse_number(value, field)?,
        Slot::I32(v) => *v = parse_number(value, field)?,
        Slot::I64(v) => *v = parse_number(value, field)?,
        Slot::Isize(v) => *v = parse_number(value, field)?,
        Slot::U8(v) => *v = parse_number(value, field)?,
        Slot::U16(v) => *v = parse_number(value, field)?,
        Slot::U32(v) => *v = parse_number(value, field)?,
        Slot::U64(v) => *v = parse_number(value, field)?,
        Slot::Usize(v) => *v = parse_number(value, field)?,
        Slot::F32(v) => *v = parse_number(value, field)?,
        Slot::F64(v) => *v = parse_number(value, field)?,
        Slot::Str(s) => *s = value.to_string(),
        Slot::Record(_) => {
            return Err(TagfigError::UnsupportedKind {
                field: field.to_string(),
                kind: "record",
            });
        }
        Slot::Unsupported(kind) => {
            return Err(TagfigError::UnsupportedKind {
                field: field.to_string(),
                kind,
            });
        }
    }
    Ok(())
}

fn parse_number<T>(value: &str, field: &str) -> Result<T, TagfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value.parse().map_err(|e: T::Err| TagfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}
