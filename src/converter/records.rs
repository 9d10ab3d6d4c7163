use serde_json::Value;

use crate::avro::{AvroField, AvroType};
use crate::common::names::avro_name;
use crate::converter::conversion::translate;
use crate::converter::state::SchemaContext;
use crate::converter::structs::{
    annotate_named, create_avro_record, create_reference_id_field, missing_marker,
    MISSING_MARKER_DEFAULT,
};
use crate::converter::unions::{collapse_union, null_first};
use crate::descriptor::{Annotation, CompositeDescriptor, Field, TypeDescriptor};
use crate::error::Result;
use crate::options::SchemaFlag;

/// Convert a composite declaration into an Avro record.
///
/// The first occurrence in a document carries the full body; the name is
/// registered before the fields are translated so that self references
/// resolve to it. Later occurrences are bare name references.
pub fn composite_to_avro_record(
    composite: &CompositeDescriptor,
    ctx: &mut SchemaContext<'_>,
) -> Result<AvroType> {
    if let Some(reference) = ctx.emitted(&composite.name.fqn()) {
        tracing::debug!(%reference, "reusing emitted record");
        return Ok(AvroType::Primitive(reference.to_string()));
    }
    let namespace = ctx.namespace_for(&composite.name);
    let reference = ctx.full_name(&avro_name(&composite.name.name), namespace.as_deref());
    ctx.register_named(&composite.name, &reference);

    // Fields are written inside this body, so unqualified names nested in
    // them belong to its namespace.
    let scope = ctx.effective_namespace(namespace.as_deref());
    let previous = ctx.enter_namespace(scope);
    let fields = translate_fields(composite, ctx);
    ctx.leave_namespace(previous);
    let mut fields = fields?;

    if ctx.has(SchemaFlag::AddReferenceId) {
        fields.push(create_reference_id_field());
    }

    let mut record = create_avro_record(&composite.name.name, namespace.as_deref(), fields);
    let doc = composite.doc.clone().filter(|_| ctx.options.do_doc);
    annotate_named(&mut record, ctx.aliases.get(&composite.name.fqn()), doc);
    tracing::debug!(%reference, "emitted record");
    Ok(record)
}

fn translate_fields(
    composite: &CompositeDescriptor,
    ctx: &mut SchemaContext<'_>,
) -> Result<Vec<AvroField>> {
    let mut fields = Vec::with_capacity(composite.fields.len() + 1);
    for field in &composite.fields {
        fields.push(field_to_avro_field(composite, field, ctx)?);
    }
    Ok(fields)
}

fn field_to_avro_field(
    composite: &CompositeDescriptor,
    field: &Field,
    ctx: &mut SchemaContext<'_>,
) -> Result<AvroField> {
    let mut field_type = translate(&field.ty, ctx)?;
    let mut default = field.default.clone();

    if ctx.has(SchemaFlag::MarkNonTotalTypedDicts) && !composite.is_required(field) {
        field_type = mark_missing(field_type);
        default = Some(Value::String(MISSING_MARKER_DEFAULT.to_string()));
    } else if default == Some(Value::Null) {
        field_type = null_first(field_type);
    }

    let (annotated_aliases, annotated_doc) = field_annotations(&field.ty);
    let mut aliases = field.aliases.clone();
    for alias in annotated_aliases {
        if !aliases.contains(&alias) {
            aliases.push(alias);
        }
    }
    let doc = if ctx.options.do_doc {
        field.doc.clone().or(annotated_doc)
    } else {
        None
    };

    Ok(AvroField {
        name: field.name.clone(),
        field_type,
        default,
        aliases,
        doc,
    })
}

/// Union the missing marker into a field type.
///
/// String members are absorbed by the marker, which is itself a string. The
/// marker always goes first, ahead of `null` and every other member: Avro
/// validates a union field's default against the first branch, and the
/// default here is the `"__td_missing__"` string.
pub fn mark_missing(field_type: AvroType) -> AvroType {
    let mut members = vec![missing_marker()];
    members.extend(
        field_type
            .members()
            .iter()
            .filter(|member| !member.is_string_like())
            .cloned(),
    );
    collapse_union(members)
}

/// Aliases and doc text carried by annotation wrappers around a field type.
fn field_annotations(ty: &TypeDescriptor) -> (Vec<String>, Option<String>) {
    let mut aliases = Vec::new();
    let mut doc = None;
    let mut current = ty;
    while let TypeDescriptor::Annotated { inner, annotations } = current {
        for annotation in annotations {
            match annotation {
                Annotation::Alias(alias) => aliases.push(alias.clone()),
                Annotation::Doc(text) => {
                    doc.get_or_insert_with(|| text.clone());
                }
                Annotation::Other(_) => {}
            }
        }
        current = inner;
    }
    (aliases, doc)
}
