use crate::avro::AvroType;
use crate::converter::state::SchemaContext;
use crate::converter::structs::create_named_string;
use crate::descriptor::{LiteralValue, Primitive, TypeDescriptor, TypeName};
use crate::error::{Result, TranslationError};
use crate::options::{Options, SchemaFlag};

/// Convert a primitive into its Avro type tag.
///
/// Platform-width numbers follow the `INT_32` and `FLOAT_32` flags; explicit
/// widths always map to the matching Avro type.
pub fn primitive_to_avro_type(primitive: Primitive, options: &Options) -> AvroType {
    let tag = match primitive {
        Primitive::Str => "string",
        Primitive::Int if options.has(SchemaFlag::Int32) => "int",
        Primitive::Int | Primitive::Int64 => "long",
        Primitive::Int32 => "int",
        Primitive::Float if options.has(SchemaFlag::Float32) => "float",
        Primitive::Float | Primitive::Float64 => "double",
        Primitive::Float32 => "float",
        Primitive::Bool => "boolean",
        Primitive::Bytes => "bytes",
        Primitive::Null => "null",
    };
    AvroType::primitive(tag)
}

/// A literal type is the primitive shared by all of its values.
pub fn literal_to_avro_type(
    descriptor: &TypeDescriptor,
    values: &[LiteralValue],
    options: &Options,
) -> Result<AvroType> {
    let first = values
        .first()
        .ok_or_else(|| TranslationError::EmptyLiteral(descriptor.to_string()))?
        .primitive();
    if values.iter().any(|value| value.primitive() != first) {
        return Err(TranslationError::MixedLiteral(descriptor.to_string()).into());
    }
    Ok(primitive_to_avro_type(first, options))
}

/// A string subtype keeps its (qualified) name alongside the string tag.
pub fn named_string_type(ctx: &SchemaContext<'_>, name: &TypeName) -> AvroType {
    create_named_string(&ctx.qualified_name(name, &name.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn widths() {
        let default = Options::new();
        let narrow = Options::from(SchemaFlag::Int32).with_flag(SchemaFlag::Float32);
        assert_eq!(primitive_to_avro_type(Primitive::Int, &default), AvroType::primitive("long"));
        assert_eq!(primitive_to_avro_type(Primitive::Int, &narrow), AvroType::primitive("int"));
        assert_eq!(primitive_to_avro_type(Primitive::Int64, &narrow), AvroType::primitive("long"));
        assert_eq!(primitive_to_avro_type(Primitive::Float, &default), AvroType::primitive("double"));
        assert_eq!(primitive_to_avro_type(Primitive::Float, &narrow), AvroType::primitive("float"));
        assert_eq!(primitive_to_avro_type(Primitive::Float32, &default), AvroType::primitive("float"));
        assert_eq!(primitive_to_avro_type(Primitive::Bool, &default), AvroType::primitive("boolean"));
    }

    #[test]
    fn literals() {
        let options = Options::new();
        let strings = vec![LiteralValue::Str(String::new()), LiteralValue::Str("Hello".into())];
        let desc = TypeDescriptor::literal(strings.clone());
        assert_eq!(
            literal_to_avro_type(&desc, &strings, &options).unwrap(),
            AvroType::primitive("string")
        );

        let ints = vec![LiteralValue::Int(42)];
        let desc = TypeDescriptor::literal(ints.clone());
        assert_eq!(
            literal_to_avro_type(&desc, &ints, &options).unwrap(),
            AvroType::primitive("long")
        );

        let mixed = vec![LiteralValue::Str(String::new()), LiteralValue::Int(42)];
        let desc = TypeDescriptor::literal(mixed.clone());
        let err = literal_to_avro_type(&desc, &mixed, &options).unwrap_err();
        assert!(matches!(
            err,
            Error::Translation(TranslationError::MixedLiteral(_))
        ));
        assert!(err.to_string().contains("with mixed type values"));
    }
}
