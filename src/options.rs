use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Switches that change how types are translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaFlag {
    /// Platform integers become `"int"` instead of `"long"`.
    #[serde(rename = "INT_32")]
    Int32,
    /// Platform floats become `"float"` instead of `"double"`.
    #[serde(rename = "FLOAT_32")]
    Float32,
    /// Containers are reified as named records with an identity field.
    WrapIntoRecords,
    /// Records get a trailing nullable `__id` field.
    AddReferenceId,
    /// Optionally-absent fields get the missing-marker type unioned in.
    MarkNonTotalTypedDicts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub flags: BTreeSet<SchemaFlag>,
    /// Namespace placed on named type bodies.
    pub namespace: Option<String>,
    /// Include doc text on records, enums and fields.
    pub do_doc: bool,
    /// Use each named type's own namespace.
    pub do_auto_namespace: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flag(mut self, flag: SchemaFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_doc(mut self, do_doc: bool) -> Self {
        self.do_doc = do_doc;
        self
    }

    pub fn with_auto_namespace(mut self, do_auto_namespace: bool) -> Self {
        self.do_auto_namespace = do_auto_namespace;
        self
    }

    pub fn has(&self, flag: SchemaFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Layer `other` on top: flags are combined, set values win.
    pub fn merge(mut self, other: Options) -> Self {
        self.flags.extend(other.flags);
        if other.namespace.is_some() {
            self.namespace = other.namespace;
        }
        self.do_doc |= other.do_doc;
        self.do_auto_namespace |= other.do_auto_namespace;
        self
    }
}

impl From<SchemaFlag> for Options {
    fn from(flag: SchemaFlag) -> Self {
        Options::new().with_flag(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_partial_config() {
        let options: Options = serde_json::from_value(json!({
            "flags": ["INT_32", "WRAP_INTO_RECORDS"],
            "do_doc": true
        }))
        .unwrap();
        assert!(options.has(SchemaFlag::Int32));
        assert!(options.has(SchemaFlag::WrapIntoRecords));
        assert!(!options.has(SchemaFlag::Float32));
        assert!(options.do_doc);
        assert_eq!(options.namespace, None);
    }

    #[test]
    fn merge_keeps_flags_from_both() {
        let base = Options::from(SchemaFlag::Float32).with_namespace("a.b");
        let merged = base.merge(Options::from(SchemaFlag::AddReferenceId));
        assert!(merged.has(SchemaFlag::Float32));
        assert!(merged.has(SchemaFlag::AddReferenceId));
        assert_eq!(merged.namespace.as_deref(), Some("a.b"));
    }
}
