use std::collections::HashMap;

use crate::alias::AliasRegistry;
use crate::common::names::{avro_namespace, fullname};
use crate::converter::naming::NameSynthesizer;
use crate::descriptor::{TypeDescriptor, TypeName};
use crate::options::{Options, SchemaFlag};

/// State for one top-level translation.
///
/// Tracks which named schemas already carry their full body in the document
/// being built, so that later occurrences are emitted as bare references.
/// A context is created per document and dropped afterwards, even on error.
///
/// A named body written without a `namespace` belongs to the namespace of
/// the body enclosing it, so the context also tracks that enclosing
/// namespace. References always use the full name the body was defined
/// under.
pub struct SchemaContext<'a> {
    pub options: &'a Options,
    pub aliases: &'a AliasRegistry,
    pub names: NameSynthesizer,
    /// Declared types (by fully-qualified name) and wrapper records (by
    /// synthesized name) to the Avro full name of their emitted body.
    emitted: HashMap<String, String>,
    /// Fully-qualified (and simple) type names to the reference emitted for them.
    references: HashMap<String, String>,
    enclosing: Option<String>,
}

impl<'a> SchemaContext<'a> {
    pub fn new(root: &TypeDescriptor, options: &'a Options, aliases: &'a AliasRegistry) -> Self {
        Self {
            options,
            aliases,
            names: NameSynthesizer::for_root(root),
            emitted: HashMap::new(),
            references: HashMap::new(),
            enclosing: None,
        }
    }

    pub fn has(&self, flag: SchemaFlag) -> bool {
        self.options.has(flag)
    }

    /// The reference to use for `key` if its body was already emitted.
    pub fn emitted(&self, key: &str) -> Option<&str> {
        self.emitted.get(key).map(String::as_str)
    }

    pub fn mark(&mut self, key: &str, full_name: &str) {
        self.emitted.insert(key.to_string(), full_name.to_string());
    }

    /// Mark a declared type as emitted under `full_name` and make it
    /// resolvable by name for forward references.
    pub fn register_named(&mut self, type_name: &TypeName, full_name: &str) {
        self.mark(&type_name.fqn(), full_name);
        self.references
            .insert(type_name.fqn(), full_name.to_string());
        self.references
            .entry(type_name.name.clone())
            .or_insert_with(|| full_name.to_string());
    }

    /// Resolve a reference by fully-qualified name, falling back to the simple name.
    pub fn resolve(&self, type_name: &TypeName) -> Option<&str> {
        self.references
            .get(&type_name.fqn())
            .or_else(|| self.references.get(&type_name.name))
            .map(String::as_str)
    }

    /// Namespace written on the body of a named type, if any.
    ///
    /// Once a document declares two types with the same simple name, every
    /// declared type carries its own namespace, so that no body inherits a
    /// namespace it was not declared in.
    pub fn namespace_for(&self, type_name: &TypeName) -> Option<String> {
        let own = || type_name.namespace.as_deref().map(avro_namespace);
        if self.options.do_auto_namespace || self.names.has_ambiguity() {
            own().or_else(|| self.options.namespace.clone())
        } else {
            self.options.namespace.clone()
        }
    }

    /// Name written for a named string: its full name under [`Self::namespace_for`].
    pub fn qualified_name(&self, type_name: &TypeName, simple: &str) -> String {
        fullname(simple, self.namespace_for(type_name).as_deref())
    }

    /// The namespace a body with the given `namespace` attribute ends up in.
    pub fn effective_namespace(&self, namespace: Option<&str>) -> Option<String> {
        namespace
            .map(str::to_string)
            .or_else(|| self.enclosing.clone())
    }

    /// Full name of a body named `name` written at the current position.
    pub fn full_name(&self, name: &str, namespace: Option<&str>) -> String {
        fullname(name, self.effective_namespace(namespace).as_deref())
    }

    /// Enter the body of a named type; returns the namespace to restore on leaving.
    pub fn enter_namespace(&mut self, namespace: Option<String>) -> Option<String> {
        std::mem::replace(&mut self.enclosing, namespace)
    }

    pub fn leave_namespace(&mut self, previous: Option<String>) {
        self.enclosing = previous;
    }
}
