use crate::avro::AvroType;
use crate::converter::conversion::translate;
use crate::converter::state::SchemaContext;
use crate::converter::structs::create_wrapper_record;
use crate::descriptor::TypeDescriptor;
use crate::error::Result;
use crate::options::SchemaFlag;

/// Translate an anonymous container with `build`, reifying it as a named
/// wrapper record when `WRAP_INTO_RECORDS` is set.
///
/// The wrapper is named after the descriptor and emitted once per document;
/// later occurrences of the same name are references to the full name the
/// wrapper was written under.
pub fn wrap_container<F>(
    descriptor: &TypeDescriptor,
    ctx: &mut SchemaContext<'_>,
    build: F,
) -> Result<AvroType>
where
    F: FnOnce(&mut SchemaContext<'_>) -> Result<AvroType>,
{
    if !ctx.has(SchemaFlag::WrapIntoRecords) {
        return build(ctx);
    }

    let name = ctx.names.name_for(descriptor)?;
    if let Some(reference) = ctx.emitted(&name) {
        tracing::debug!(%reference, "reusing emitted wrapper record");
        return Ok(AvroType::Primitive(reference.to_string()));
    }

    let inner = build(ctx)?;
    let full_name = ctx.full_name(&name, None);
    ctx.mark(&name, &full_name);
    tracing::debug!(%full_name, "emitted wrapper record");
    Ok(create_wrapper_record(&name, None, inner))
}

/// Translate a union at the document root, wrapping it when it is still a
/// union once its members are flattened and deduplicated.
pub fn wrap_root_union(descriptor: &TypeDescriptor, ctx: &mut SchemaContext<'_>) -> Result<AvroType> {
    let translated = translate(descriptor, ctx)?;
    if !ctx.has(SchemaFlag::WrapIntoRecords) || !matches!(translated, AvroType::Union(_)) {
        return Ok(translated);
    }
    let name = ctx.names.name_for(descriptor)?;
    tracing::debug!(%name, "emitted root union wrapper");
    Ok(create_wrapper_record(&name, None, translated))
}
