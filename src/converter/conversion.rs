use crate::avro::AvroType;
use crate::converter::enums::enum_to_avro_type;
use crate::converter::records::composite_to_avro_record;
use crate::converter::state::SchemaContext;
use crate::converter::structs::{create_array_type, create_map_type};
use crate::converter::types::{literal_to_avro_type, named_string_type, primitive_to_avro_type};
use crate::converter::unions::union_to_avro_type;
use crate::converter::wrapping::wrap_container;
use crate::descriptor::TypeDescriptor;
use crate::error::{Error, Result, TranslationError};

/// Convert a type descriptor into an Avro type.
///
/// Dispatches on the descriptor variant; named types consult and update the
/// context so each body appears once per document.
pub fn translate(descriptor: &TypeDescriptor, ctx: &mut SchemaContext<'_>) -> Result<AvroType> {
    tracing::trace!(%descriptor, "translating");
    match descriptor {
        TypeDescriptor::Primitive { primitive } => {
            Ok(primitive_to_avro_type(*primitive, ctx.options))
        }
        TypeDescriptor::NamedString { name } => Ok(named_string_type(ctx, name)),
        TypeDescriptor::Literal { values } => {
            literal_to_avro_type(descriptor, values, ctx.options)
        }
        TypeDescriptor::Sequence { items } | TypeDescriptor::Set { items } => {
            wrap_container(descriptor, ctx, |ctx| Ok(create_array_type(translate(items, ctx)?)))
        }
        TypeDescriptor::Mapping { keys, values } => {
            if !keys.is_string_like() {
                return Err(TranslationError::NonStringMapKey(descriptor.to_string()).into());
            }
            wrap_container(descriptor, ctx, |ctx| Ok(create_map_type(translate(values, ctx)?)))
        }
        TypeDescriptor::Composite(composite) => composite_to_avro_record(composite, ctx),
        TypeDescriptor::Enumeration(enumeration) => enum_to_avro_type(enumeration, ctx),
        TypeDescriptor::Union { members } => union_to_avro_type(descriptor, members, ctx),
        TypeDescriptor::Annotated { inner, .. } => translate(inner, ctx),
        TypeDescriptor::Reference { name } => ctx
            .resolve(name)
            .map(|reference| AvroType::Primitive(reference.to_string()))
            .ok_or_else(|| Error::from(TranslationError::UnresolvedReference(name.fqn()))),
        TypeDescriptor::Unsupported { .. } => Err(Error::unsupported_schema(descriptor)),
    }
}
