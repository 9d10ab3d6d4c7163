use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A node of a generated Avro schema document.
///
/// Serializes to the Avro schema JSON wire form: primitives and references
/// are bare strings, unions are bare arrays, everything else is an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AvroType {
    /// A primitive type tag such as `"string"` or `"long"`, or a bare
    /// reference to a named type already defined earlier in the document.
    Primitive(String),
    /// A string carrying the name of the string subtype it was generated from.
    NamedString {
        #[serde(rename = "type")]
        r#type: String,
        #[serde(rename = "namedString")]
        named_string: String,
    },
    Record {
        #[serde(rename = "type")]
        r#type: String,
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        namespace: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        aliases: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        doc: Option<String>,
        fields: Vec<AvroField>,
    },
    Enum {
        #[serde(rename = "type")]
        r#type: String,
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        namespace: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        aliases: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        doc: Option<String>,
        symbols: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
    Array {
        #[serde(rename = "type")]
        r#type: String,
        items: Box<AvroType>,
    },
    Map {
        #[serde(rename = "type")]
        r#type: String,
        values: Box<AvroType>,
    },
    Union(Vec<AvroType>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvroField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: AvroType,
    /// `Some(Value::Null)` serializes as `"default": null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl AvroField {
    pub fn new(name: impl Into<String>, field_type: AvroType) -> Self {
        Self {
            name: name.into(),
            field_type,
            default: None,
            aliases: Vec::new(),
            doc: None,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

impl AvroType {
    pub fn null() -> Self {
        AvroType::Primitive("null".to_string())
    }

    pub fn primitive(tag: &str) -> Self {
        AvroType::Primitive(tag.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AvroType::Primitive(p) if p == "null")
    }

    /// True for the plain `"string"` primitive and for named strings.
    pub fn is_string_like(&self) -> bool {
        match self {
            AvroType::Primitive(p) => p == "string",
            AvroType::NamedString { .. } => true,
            _ => false,
        }
    }

    /// Members of a union, or the node itself as a one-element slice.
    pub fn members(&self) -> &[AvroType] {
        match self {
            AvroType::Union(members) => members,
            other => std::slice::from_ref(other),
        }
    }

    /// Convert into a `serde_json::Value` document.
    pub fn to_value(&self) -> Value {
        // Every variant serializes to plain JSON; no map keys are non-strings.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
