use std::collections::BTreeSet;

use crate::avro::AvroType;
use crate::common::hash::FingerprintSet;
use crate::converter::conversion::translate;
use crate::converter::state::SchemaContext;
use crate::descriptor::{CompositeKind, TypeDescriptor};
use crate::error::{Error, Result, TranslationError};

/// Flatten a union type into a simplified list of unique types.
///
/// This will:
/// - Recursively expand nested unions,
/// - Remove structurally identical members, keeping the first occurrence,
/// - Move `null` to the end.
pub fn flatten_union(type_list: &[AvroType]) -> Vec<AvroType> {
    let mut seen = FingerprintSet::new();
    let mut flat_list = Vec::new();
    expand(type_list, &mut seen, &mut flat_list);

    let (nulls, mut rest): (Vec<_>, Vec<_>) = flat_list.into_iter().partition(AvroType::is_null);
    rest.extend(nulls);
    rest
}

fn expand(type_list: &[AvroType], seen: &mut FingerprintSet, out: &mut Vec<AvroType>) {
    for t in type_list {
        match t {
            AvroType::Union(inner) => expand(inner, seen, out),
            _ => {
                if seen.insert(t) {
                    out.push(t.clone());
                }
            }
        }
    }
}

/// A single member stands on its own; anything else becomes a union.
pub fn collapse_union(mut members: Vec<AvroType>) -> AvroType {
    if members.len() == 1 {
        members.remove(0)
    } else {
        AvroType::Union(members)
    }
}

/// Move `null` to the front of a union, e.g. when a field defaults to `null`.
pub fn null_first(avro_type: AvroType) -> AvroType {
    match avro_type {
        AvroType::Union(members) if members.iter().any(AvroType::is_null) => {
            let (mut nulls, rest): (Vec<_>, Vec<_>) =
                members.into_iter().partition(AvroType::is_null);
            nulls.extend(rest);
            AvroType::Union(nulls)
        }
        other => other,
    }
}

/// Translate a union descriptor.
pub fn union_to_avro_type(
    descriptor: &TypeDescriptor,
    members: &[TypeDescriptor],
    ctx: &mut SchemaContext<'_>,
) -> Result<AvroType> {
    let mut leaves = Vec::new();
    leaf_members(members, &mut leaves);
    if leaves.is_empty() {
        return Err(Error::unsupported_schema(descriptor));
    }

    let typed_dicts: BTreeSet<String> = leaves
        .iter()
        .filter_map(|member| match member {
            TypeDescriptor::Composite(c) if c.shape == CompositeKind::TypedDict => {
                Some(c.name.fqn())
            }
            _ => None,
        })
        .collect();
    if typed_dicts.len() > 1 {
        return Err(TranslationError::AmbiguousUnion(descriptor.to_string()).into());
    }

    let mut translated = Vec::with_capacity(leaves.len());
    for member in leaves {
        translated.push(translate(member, ctx)?);
    }
    Ok(collapse_union(flatten_union(&translated)))
}

/// Nested unions flattened and annotations removed, first occurrence kept.
fn leaf_members<'d>(members: &'d [TypeDescriptor], out: &mut Vec<&'d TypeDescriptor>) {
    for member in members {
        match member.peel() {
            TypeDescriptor::Union { members } => leaf_members(members, out),
            leaf => {
                if !out.contains(&leaf) {
                    out.push(leaf);
                }
            }
        }
    }
}
