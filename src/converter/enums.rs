use std::collections::BTreeSet;

use serde_json::Value;

use crate::avro::AvroType;
use crate::common::names::{avro_name, is_valid_avro_name};
use crate::converter::state::SchemaContext;
use crate::converter::structs::{annotate_named, create_enum_type};
use crate::converter::types::named_string_type;
use crate::descriptor::EnumDescriptor;
use crate::error::{Result, TranslationError};

/// Convert an enumeration into an Avro enum.
///
/// Member values become the symbols. Members repeating an earlier value are
/// dropped, so the first declared member is the default. When a value is
/// not a legal Avro symbol the enumeration is emitted as a named string.
pub fn enum_to_avro_type(
    enumeration: &EnumDescriptor,
    ctx: &mut SchemaContext<'_>,
) -> Result<AvroType> {
    let non_string: BTreeSet<&str> = enumeration
        .members
        .iter()
        .filter(|member| !member.value.is_string())
        .map(|member| json_kind(&member.value))
        .collect();
    if !non_string.is_empty() {
        return Err(TranslationError::NonStringEnumValues {
            name: enumeration.name.fqn(),
            found: non_string.into_iter().collect::<Vec<_>>().join(", "),
        }
        .into());
    }

    let mut symbols: Vec<String> = Vec::with_capacity(enumeration.members.len());
    for value in enumeration.members.iter().filter_map(|m| m.value.as_str()) {
        if !symbols.iter().any(|s| s == value) {
            symbols.push(value.to_string());
        }
    }

    if let Some(invalid) = symbols.iter().find(|s| !is_valid_avro_name(s)) {
        tracing::warn!(
            name = %enumeration.name,
            symbol = %invalid,
            "enum symbol is not a valid Avro name, emitting a named string"
        );
        return Ok(named_string_type(ctx, &enumeration.name));
    }

    if let Some(reference) = ctx.emitted(&enumeration.name.fqn()) {
        tracing::debug!(%reference, "reusing emitted enum");
        return Ok(AvroType::Primitive(reference.to_string()));
    }
    let namespace = ctx.namespace_for(&enumeration.name);
    let reference = ctx.full_name(&avro_name(&enumeration.name.name), namespace.as_deref());
    ctx.register_named(&enumeration.name, &reference);

    let mut avro_enum = create_enum_type(&enumeration.name.name, namespace.as_deref(), symbols);
    let doc = enumeration.doc.clone().filter(|_| ctx.options.do_doc);
    annotate_named(&mut avro_enum, ctx.aliases.get(&enumeration.name.fqn()), doc);
    Ok(avro_enum)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
