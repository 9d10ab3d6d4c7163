//! Deterministic names for schema nodes that have none of their own.
//!
//! Containers and unions are anonymous, yet a wrapper record needs a name.
//! Names compose outward from the element types: `list[dict[str, A]]` is
//! `AMapList`, and union members are sorted so `A | B` and `B | A` agree.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::common::names::namespace_token;
use crate::descriptor::{TypeDescriptor, TypeName};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct NameSynthesizer {
    /// Simple names declared by more than one fully-qualified type.
    ambiguous: HashSet<String>,
}

impl NameSynthesizer {
    /// Build a synthesizer aware of every named type declared under `root`.
    pub fn for_root(root: &TypeDescriptor) -> Self {
        let mut declared: HashMap<String, BTreeSet<String>> = HashMap::new();
        collect_declared(root, &mut declared);
        let ambiguous = declared
            .into_iter()
            .filter(|(_, fqns)| fqns.len() > 1)
            .map(|(simple, _)| simple)
            .collect();
        Self { ambiguous }
    }

    /// Does the document declare two types with the same simple name?
    pub fn has_ambiguity(&self) -> bool {
        !self.ambiguous.is_empty()
    }

    pub fn is_ambiguous(&self, type_name: &TypeName) -> bool {
        self.ambiguous.contains(&type_name.name)
    }

    /// The token for a declared type: its simple name, prefixed by its
    /// namespace token when another type shares that simple name.
    pub fn type_token(&self, type_name: &TypeName) -> String {
        match &type_name.namespace {
            Some(ns) if self.is_ambiguous(type_name) => {
                format!("{}{}", namespace_token(ns), type_name.name)
            }
            _ => type_name.name.clone(),
        }
    }

    pub fn name_for(&self, descriptor: &TypeDescriptor) -> Result<String> {
        match descriptor {
            TypeDescriptor::Primitive { primitive } => Ok(primitive.token().to_string()),
            TypeDescriptor::Literal { values } => {
                let tokens: BTreeSet<&str> =
                    values.iter().map(|v| v.primitive().token()).collect();
                match tokens.len() {
                    1 => Ok(tokens.into_iter().collect()),
                    _ => Err(Error::unsupported_name(descriptor)),
                }
            }
            TypeDescriptor::NamedString { name } | TypeDescriptor::Reference { name } => {
                Ok(self.type_token(name))
            }
            TypeDescriptor::Composite(c) => Ok(self.type_token(&c.name)),
            TypeDescriptor::Enumeration(e) => Ok(self.type_token(&e.name)),
            TypeDescriptor::Sequence { items } => Ok(self.name_for(items)? + "List"),
            TypeDescriptor::Set { items } => Ok(self.name_for(items)? + "Set"),
            TypeDescriptor::Mapping { values, .. } => Ok(self.name_for(values)? + "Map"),
            TypeDescriptor::Union { members } => {
                let mut tokens = BTreeSet::new();
                self.union_tokens(members, &mut tokens)?;
                match tokens.len() {
                    0 => Err(Error::unsupported_name(descriptor)),
                    _ => Ok(tokens.into_iter().collect::<Vec<_>>().join("Or")),
                }
            }
            TypeDescriptor::Annotated { inner, .. } => self.name_for(inner),
            TypeDescriptor::Unsupported { .. } => Err(Error::unsupported_name(descriptor)),
        }
    }

    fn union_tokens(&self, members: &[TypeDescriptor], out: &mut BTreeSet<String>) -> Result<()> {
        for member in members {
            match member.peel() {
                TypeDescriptor::Union { members } => self.union_tokens(members, out)?,
                other => {
                    out.insert(self.name_for(other)?);
                }
            }
        }
        Ok(())
    }
}

/// Synthesize a name for `descriptor`, disambiguating the named types it contains.
pub fn name_for(descriptor: &TypeDescriptor) -> Result<String> {
    NameSynthesizer::for_root(descriptor).name_for(descriptor)
}

fn declare(out: &mut HashMap<String, BTreeSet<String>>, name: &TypeName) {
    out.entry(name.name.clone()).or_default().insert(name.fqn());
}

fn collect_declared(descriptor: &TypeDescriptor, out: &mut HashMap<String, BTreeSet<String>>) {
    match descriptor {
        TypeDescriptor::NamedString { name } => declare(out, name),
        TypeDescriptor::Enumeration(e) => declare(out, &e.name),
        TypeDescriptor::Composite(c) => {
            declare(out, &c.name);
            for field in &c.fields {
                collect_declared(&field.ty, out);
            }
        }
        TypeDescriptor::Sequence { items } | TypeDescriptor::Set { items } => {
            collect_declared(items, out)
        }
        TypeDescriptor::Mapping { keys, values } => {
            collect_declared(keys, out);
            collect_declared(values, out);
        }
        TypeDescriptor::Union { members } => {
            for member in members {
                collect_declared(member, out);
            }
        }
        TypeDescriptor::Annotated { inner, .. } => collect_declared(inner, out),
        TypeDescriptor::Primitive { .. }
        | TypeDescriptor::Literal { .. }
        | TypeDescriptor::Reference { .. }
        | TypeDescriptor::Unsupported { .. } => {}
    }
}
