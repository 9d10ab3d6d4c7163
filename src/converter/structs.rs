use serde_json::Value;

use crate::avro::{AvroField, AvroType};
use crate::common::names::avro_name;

/// Identity field carried by wrapper records.
pub const WRAPPER_ID_FIELD: &str = "__id";
/// Field of a wrapper record holding the wrapped schema.
pub const WRAPPER_DATA_FIELD: &str = "__data";
/// Name of the string subtype unioned into optionally-absent fields.
pub const MISSING_MARKER_NAME: &str = "TDMissingMarker";
/// Default value standing for "field absent".
pub const MISSING_MARKER_DEFAULT: &str = "__td_missing__";

/// Create an Avro record type.
///
/// A record is a structured type with named fields.
pub fn create_avro_record(name: &str, namespace: Option<&str>, fields: Vec<AvroField>) -> AvroType {
    AvroType::Record {
        r#type: "record".to_string(),
        name: avro_name(name),
        namespace: namespace.map(str::to_string),
        aliases: Vec::new(),
        doc: None,
        fields,
    }
}

/// Create a wrapper record around another type.
///
/// The wrapper gives a bare container an identity: a nullable string `__id`
/// and the original schema under `__data`.
pub fn create_wrapper_record(
    wrapper_name: &str,
    wrapper_namespace: Option<&str>,
    avro_type: AvroType,
) -> AvroType {
    create_avro_record(
        wrapper_name,
        wrapper_namespace,
        vec![
            AvroField::new(WRAPPER_ID_FIELD, nullable(AvroType::primitive("string")))
                .with_default(Value::Null),
            AvroField::new(WRAPPER_DATA_FIELD, avro_type),
        ],
    )
}

/// The `__id` field appended to records when reference ids are requested.
pub fn create_reference_id_field() -> AvroField {
    AvroField::new(WRAPPER_ID_FIELD, nullable(AvroType::primitive("long"))).with_default(Value::Null)
}

/// Create an Avro enum type. The first symbol is the default.
pub fn create_enum_type(name: &str, namespace: Option<&str>, symbols: Vec<String>) -> AvroType {
    AvroType::Enum {
        r#type: "enum".to_string(),
        name: avro_name(name),
        namespace: namespace.map(str::to_string),
        aliases: Vec::new(),
        doc: None,
        default: symbols.first().cloned(),
        symbols,
    }
}

/// Create an Avro array type.
pub fn create_array_type(items: AvroType) -> AvroType {
    AvroType::Array {
        r#type: "array".to_string(),
        items: Box::new(items),
    }
}

/// Create an Avro map type.
pub fn create_map_type(values: AvroType) -> AvroType {
    AvroType::Map {
        r#type: "map".to_string(),
        values: Box::new(values),
    }
}

/// A string tagged with the name of the string subtype it stands for.
pub fn create_named_string(name: &str) -> AvroType {
    AvroType::NamedString {
        r#type: "string".to_string(),
        named_string: name.to_string(),
    }
}

/// The schema of the missing marker.
pub fn missing_marker() -> AvroType {
    create_named_string(MISSING_MARKER_NAME)
}

/// Wrap a type in a union with `null` in front.
///
/// Avro uses this pattern to make fields nullable.
pub fn nullable(avro_type: AvroType) -> AvroType {
    let mut members = vec![AvroType::null()];
    members.extend(
        avro_type
            .members()
            .iter()
            .filter(|member| !member.is_null())
            .cloned(),
    );
    AvroType::Union(members)
}

/// Attach registry aliases and doc text to a record or enum body.
pub fn annotate_named(avro_type: &mut AvroType, new_aliases: Vec<String>, new_doc: Option<String>) {
    match avro_type {
        AvroType::Record { aliases, doc, .. } | AvroType::Enum { aliases, doc, .. } => {
            *aliases = new_aliases;
            *doc = new_doc;
        }
        _ => {}
    }
}
