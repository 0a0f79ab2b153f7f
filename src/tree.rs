//! Build the flat descriptor map for a record type.
//!
//! Walks the static [`FieldDef`] schema depth-first. Terminal fields become one
//! [`Descriptor`] each, keyed by dotted path. Record fields produce no entry of
//! their own; their descriptor only serves as the parent of their children:
//!
//! - **key**: a child's key is `parent.key + "." + child.key` when the parent
//!   has a key. A child without a key takes the parent's key outright. A
//!   terminal still without a key after composition falls back to its path.
//! - **modes**: a child may narrow its parent's modes but never widen them.
//!   A child without modes inherits the parent's.
//!
//! Fields without an annotation are skipped, nested records included.

use std::collections::BTreeMap;

use crate::annotation::{self, Descriptor};
use crate::error::TagfigError;
use crate::types::{FieldDef, Shape};

const PATH_SEPARATOR: char = '.';

/// Path → descriptor, one entry per terminal field.
pub type DescriptorTree = BTreeMap<String, Descriptor>;

pub fn build(fields: &[FieldDef]) -> Result<DescriptorTree, TagfigError> {
    let mut tree = DescriptorTree::new();
    for field in fields {
        visit(field, None, &mut tree)?;
    }
    Ok(tree)
}

pub(crate) fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}{PATH_SEPARATOR}{name}")
    }
}

fn visit(
    field: &FieldDef,
    parent: Option<&Descriptor>,
    tree: &mut DescriptorTree,
) -> Result<(), TagfigError> {
    let Some(tag) = field.tag else {
        return Ok(());
    };

    let path = join(parent.map_or("", |p| p.path.as_str()), field.name);
    let mut desc = annotation::parse(&path, tag)?;
    if let Some(parent) = parent {
        inherit(&mut desc, parent)?;
    }

    match field.shape {
        Shape::Record(children) => {
            for child in children {
                visit(child, Some(&desc), tree)?;
            }
        }
        Shape::Terminal => {
            if desc.key.is_empty() {
                desc.key = desc.path.clone();
            }
            tree.insert(desc.path.clone(), desc);
        }
    }
    Ok(())
}

fn inherit(desc: &mut Descriptor, parent: &Descriptor) -> Result<(), TagfigError> {
    if !parent.key.is_empty() {
        desc.key = if desc.key.is_empty() {
            parent.key.clone()
        } else {
            format!("{}{PATH_SEPARATOR}{}", parent.key, desc.key)
        };
    }

    if desc.modes.is_unrestricted() {
        desc.modes = parent.modes;
    } else if !desc.modes.is_within(parent.modes) {
        return Err(TagfigError::ModeWidening {
            field: desc.path.clone(),
            modes: desc.modes.to_string(),
            parent: parent.modes.effective().to_string(),
        });
    }
    Ok(())
}
