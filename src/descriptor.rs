//! Type descriptors: the input side of schema generation.
//!
//! A [`TypeDescriptor`] is a host-independent view of a type declaration.
//! Rust types produce one through [`crate::reflect::Describe`]; other hosts can
//! write descriptor trees as JSON documents (see the `types2avro` binary).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A fully-qualified type name: a dotted namespace path plus a simple name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName {
    pub namespace: Option<String>,
    pub name: String,
}

impl TypeName {
    pub fn new(namespace: Option<&str>, name: &str) -> Self {
        Self {
            namespace: namespace.filter(|ns| !ns.is_empty()).map(str::to_string),
            name: name.to_string(),
        }
    }

    /// Parse a dotted path; everything before the last dot is the namespace.
    pub fn parse(path: &str) -> Self {
        match path.rsplit_once('.') {
            Some((ns, name)) => Self::new(Some(ns), name),
            None => Self::new(None, path),
        }
    }

    /// `namespace.name`, or just `name` without a namespace.
    pub fn fqn(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

impl TryFrom<String> for TypeName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() || value.ends_with('.') {
            return Err(format!("invalid type name {value:?}"));
        }
        Ok(Self::parse(&value))
    }
}

impl From<TypeName> for String {
    fn from(value: TypeName) -> Self {
        value.fqn()
    }
}

impl From<&str> for TypeName {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fqn())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    Str,
    /// Platform integer; `"long"` unless the `INT_32` flag narrows it.
    Int,
    Int32,
    Int64,
    /// Platform float; `"double"` unless the `FLOAT_32` flag narrows it.
    Float,
    Float32,
    Float64,
    Bool,
    Bytes,
    Null,
}

impl Primitive {
    /// The token used when synthesizing names from this primitive.
    pub fn token(self) -> &'static str {
        match self {
            Primitive::Str => "Str",
            Primitive::Int | Primitive::Int32 | Primitive::Int64 => "Int",
            Primitive::Float | Primitive::Float32 | Primitive::Float64 => "Float",
            Primitive::Bool => "Bool",
            Primitive::Bytes => "Bytes",
            Primitive::Null => "Null",
        }
    }
}

/// A single value of a literal type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
}

impl LiteralValue {
    pub fn primitive(&self) -> Primitive {
        match self {
            LiteralValue::Null => Primitive::Null,
            LiteralValue::Bool(_) => Primitive::Bool,
            LiteralValue::Int(_) => Primitive::Int,
            LiteralValue::Str(_) => Primitive::Str,
        }
    }
}

/// Metadata attached to a type through an [`TypeDescriptor::Annotated`] wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Annotation {
    /// Former name of the annotated field.
    Alias(String),
    Doc(String),
    /// Anything else; carries no schema effect.
    Other(String),
}

/// How a composite is shaped at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeKind {
    /// A nominal record (struct or class).
    #[default]
    Record,
    /// A typed dictionary, only distinguishable from its siblings by its keys.
    TypedDict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// An explicit `null` is a default; only an absent key means none.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
    /// Explicit required/not-required marker; unset follows the composite's totality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            aliases: Vec::new(),
            default: None,
            required: None,
            doc: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn default_value(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn default_total() -> bool {
    true
}

fn is_true(value: &bool) -> bool {
    *value
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeDescriptor {
    pub name: TypeName,
    #[serde(default)]
    pub shape: CompositeKind,
    /// Non-total composites treat fields without an explicit marker as optional.
    #[serde(default = "default_total", skip_serializing_if = "is_true")]
    pub total: bool,
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl CompositeDescriptor {
    pub fn new(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            shape: CompositeKind::Record,
            total: true,
            fields: Vec::new(),
            doc: None,
        }
    }

    pub fn typed_dict(name: impl Into<TypeName>) -> Self {
        Self {
            shape: CompositeKind::TypedDict,
            ..Self::new(name)
        }
    }

    pub fn total(mut self, total: bool) -> Self {
        self.total = total;
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn is_required(&self, field: &Field) -> bool {
        field.required.unwrap_or(self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    pub name: TypeName,
    pub members: Vec<EnumMember>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl EnumDescriptor {
    pub fn new(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            doc: None,
        }
    }

    pub fn member(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members.push(EnumMember {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Members whose value is the same as the symbol name.
    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for symbol in symbols {
            let symbol = symbol.into();
            self.members.push(EnumMember {
                value: Value::String(symbol.clone()),
                name: symbol,
            });
        }
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// The shape of a type as seen by the schema generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDescriptor {
    Primitive {
        #[serde(rename = "type")]
        primitive: Primitive,
    },
    /// A nominal subtype of the string primitive.
    NamedString {
        name: TypeName,
    },
    Literal {
        values: Vec<LiteralValue>,
    },
    Sequence {
        items: Box<TypeDescriptor>,
    },
    Set {
        items: Box<TypeDescriptor>,
    },
    Mapping {
        keys: Box<TypeDescriptor>,
        values: Box<TypeDescriptor>,
    },
    Composite(CompositeDescriptor),
    Enumeration(EnumDescriptor),
    Union {
        members: Vec<TypeDescriptor>,
    },
    Annotated {
        inner: Box<TypeDescriptor>,
        #[serde(default)]
        annotations: Vec<Annotation>,
    },
    /// A reference by name to a composite defined elsewhere in the same tree.
    Reference {
        name: TypeName,
    },
    /// Anything the host could not classify, such as an unbound type variable.
    Unsupported {
        name: String,
    },
}

impl TypeDescriptor {
    pub fn primitive(primitive: Primitive) -> Self {
        TypeDescriptor::Primitive { primitive }
    }

    pub fn named_string(name: impl Into<TypeName>) -> Self {
        TypeDescriptor::NamedString { name: name.into() }
    }

    pub fn literal(values: Vec<LiteralValue>) -> Self {
        TypeDescriptor::Literal { values }
    }

    pub fn sequence(items: TypeDescriptor) -> Self {
        TypeDescriptor::Sequence {
            items: Box::new(items),
        }
    }

    pub fn set(items: TypeDescriptor) -> Self {
        TypeDescriptor::Set {
            items: Box::new(items),
        }
    }

    pub fn mapping(keys: TypeDescriptor, values: TypeDescriptor) -> Self {
        TypeDescriptor::Mapping {
            keys: Box::new(keys),
            values: Box::new(values),
        }
    }

    pub fn union(members: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::Union { members }
    }

    /// `T | None`.
    pub fn optional(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Union {
            members: vec![inner, TypeDescriptor::primitive(Primitive::Null)],
        }
    }

    pub fn annotated(inner: TypeDescriptor, annotations: Vec<Annotation>) -> Self {
        TypeDescriptor::Annotated {
            inner: Box::new(inner),
            annotations,
        }
    }

    pub fn reference(name: impl Into<TypeName>) -> Self {
        TypeDescriptor::Reference { name: name.into() }
    }

    pub fn unsupported(name: impl Into<String>) -> Self {
        TypeDescriptor::Unsupported { name: name.into() }
    }

    /// Strip any annotation wrappers.
    pub fn peel(&self) -> &TypeDescriptor {
        match self {
            TypeDescriptor::Annotated { inner, .. } => inner.peel(),
            other => other,
        }
    }

    /// The declared name of a named type, if this is one.
    pub fn type_name(&self) -> Option<&TypeName> {
        match self.peel() {
            TypeDescriptor::NamedString { name } | TypeDescriptor::Reference { name } => {
                Some(name)
            }
            TypeDescriptor::Composite(c) => Some(&c.name),
            TypeDescriptor::Enumeration(e) => Some(&e.name),
            _ => None,
        }
    }

    /// True for descriptors whose values are always strings.
    pub fn is_string_like(&self) -> bool {
        match self.peel() {
            TypeDescriptor::Primitive { primitive } => *primitive == Primitive::Str,
            TypeDescriptor::NamedString { .. } => true,
            TypeDescriptor::Literal { values } => {
                !values.is_empty() && values.iter().all(|v| matches!(v, LiteralValue::Str(_)))
            }
            _ => false,
        }
    }
}

impl From<CompositeDescriptor> for TypeDescriptor {
    fn from(value: CompositeDescriptor) -> Self {
        TypeDescriptor::Composite(value)
    }
}

impl From<EnumDescriptor> for TypeDescriptor {
    fn from(value: EnumDescriptor) -> Self {
        TypeDescriptor::Enumeration(value)
    }
}

impl From<Primitive> for TypeDescriptor {
    fn from(value: Primitive) -> Self {
        TypeDescriptor::primitive(value)
    }
}

fn join(f: &mut fmt::Formatter<'_>, items: &[TypeDescriptor], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive { primitive } => {
                let text = match primitive {
                    Primitive::Str => "str",
                    Primitive::Int => "int",
                    Primitive::Int32 => "int32",
                    Primitive::Int64 => "int64",
                    Primitive::Float => "float",
                    Primitive::Float32 => "float32",
                    Primitive::Float64 => "float64",
                    Primitive::Bool => "bool",
                    Primitive::Bytes => "bytes",
                    Primitive::Null => "None",
                };
                f.write_str(text)
            }
            TypeDescriptor::NamedString { name } | TypeDescriptor::Reference { name } => {
                write!(f, "{name}")
            }
            TypeDescriptor::Literal { values } => {
                f.write_str("Literal[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match value {
                        LiteralValue::Null => f.write_str("None")?,
                        LiteralValue::Bool(b) => write!(f, "{b}")?,
                        LiteralValue::Int(n) => write!(f, "{n}")?,
                        LiteralValue::Str(s) => write!(f, "{s:?}")?,
                    }
                }
                f.write_str("]")
            }
            TypeDescriptor::Sequence { items } => write!(f, "list[{items}]"),
            TypeDescriptor::Set { items } => write!(f, "set[{items}]"),
            TypeDescriptor::Mapping { keys, values } => write!(f, "dict[{keys}, {values}]"),
            TypeDescriptor::Composite(c) => write!(f, "{}", c.name),
            TypeDescriptor::Enumeration(e) => write!(f, "{}", e.name),
            TypeDescriptor::Union { members } if members.is_empty() => f.write_str("Union[]"),
            TypeDescriptor::Union { members } => join(f, members, " | "),
            TypeDescriptor::Annotated { inner, .. } => write!(f, "{inner}"),
            TypeDescriptor::Unsupported { name } => f.write_str(name),
        }
    }
}
