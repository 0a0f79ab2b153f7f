//! Usage listing built from descriptors.
//!
//! One line per descriptor that declared `desc` (even an empty one):
//!
//! ```text
//! <prefix>--afffffff     Some more description (cli, cfg only)
//! <prefix>--b[=1]        Some description
//! ```
//!
//! Lines are sorted by their flag column, which is padded to the widest flag.

use std::fmt::Write;

use crate::annotation::Descriptor;

pub fn render<'a>(descriptors: impl IntoIterator<Item = &'a Descriptor>, prefix: &str) -> String {
    let mut rows: Vec<(String, String)> = descriptors
        .into_iter()
        .filter(|d| d.is_help_visible())
        .map(|d| (flag_column(d), description_column(d)))
        .collect();
    rows.sort();

    let width = rows
        .iter()
        .map(|(flag, _)| flag.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (flag, description) in rows {
        let _ = writeln!(out, "{prefix}{flag:<width$} {description}");
    }
    out
}

fn flag_column(desc: &Descriptor) -> String {
    match &desc.default {
        Some(default) => format!("--{}[={default}]", desc.key),
        None => format!("--{}", desc.key),
    }
}

fn description_column(desc: &Descriptor) -> String {
    let text = desc.description.as_deref().unwrap_or_default();
    if !desc.modes.is_partial() {
        return text.to_string();
    }
    if text.is_empty() {
        format!("({} only)", desc.modes)
    } else {
        format!("{text} ({} only)", desc.modes)
    }
}
