pub mod conversion;
pub mod enums;
pub mod naming;
pub mod records;
pub mod state;
pub mod structs;
pub mod types;
pub mod unions;
pub mod wrapping;

pub use naming::{name_for, NameSynthesizer};
pub use state::SchemaContext;

use serde_json::Value;

use crate::alias::AliasRegistry;
use crate::avro::AvroType;
use crate::descriptor::TypeDescriptor;
use crate::error::Result;
use crate::options::Options;
use crate::reflect::Describe;
use conversion::translate;
use wrapping::wrap_root_union;

/// Generate the Avro schema for a type descriptor.
///
/// Each call builds a fresh [`SchemaContext`], so the result is a
/// self-contained document: every named type used in it is defined once, at
/// its first occurrence in depth-first field order.
pub fn schema(
    descriptor: &TypeDescriptor,
    options: &Options,
    aliases: &AliasRegistry,
) -> Result<AvroType> {
    let mut ctx = SchemaContext::new(descriptor, options, aliases);
    let root = descriptor.peel();
    // A bare union at the root is reified like a container; nested unions are not.
    if matches!(root, TypeDescriptor::Union { .. }) {
        wrap_root_union(root, &mut ctx)
    } else {
        translate(descriptor, &mut ctx)
    }
}

/// Like [`schema`], for a Rust type implementing [`Describe`].
pub fn schema_of<T: Describe + ?Sized>(options: &Options, aliases: &AliasRegistry) -> Result<AvroType> {
    schema(&T::describe(), options, aliases)
}

/// Generate the schema as a JSON value.
pub fn schema_value(
    descriptor: &TypeDescriptor,
    options: &Options,
    aliases: &AliasRegistry,
) -> Result<Value> {
    Ok(serde_json::to_value(schema(descriptor, options, aliases)?)?)
}

/// Generate the schema as pretty-printed JSON text.
pub fn schema_string(
    descriptor: &TypeDescriptor,
    options: &Options,
    aliases: &AliasRegistry,
) -> Result<String> {
    Ok(serde_json::to_string_pretty(&schema(descriptor, options, aliases)?)?)
}

/// Convert a type descriptor document into an Avro schema file.
///
/// Reads the descriptor (from disk or HTTP), optionally loads aliases from a
/// JSON object mapping fully-qualified names to alias lists, and writes the
/// `.avsc` file to the given path.
#[cfg(feature = "cli")]
pub fn convert_descriptor_file(
    descriptor_path: &str,
    avro_schema_path: &str,
    options: &Options,
    aliases_path: Option<&str>,
) -> Result<()> {
    use std::collections::HashMap;
    use std::fs;

    use crate::fetch::{fetch_content, ContentCache};

    let mut cache = ContentCache::new();
    let descriptor: TypeDescriptor =
        serde_json::from_str(&fetch_content(descriptor_path, &mut cache)?)?;

    let aliases = match aliases_path {
        Some(path) => {
            let table: HashMap<String, Vec<String>> =
                serde_json::from_str(&fetch_content(path, &mut cache)?)?;
            AliasRegistry::from(table)
        }
        None => AliasRegistry::new(),
    };

    let avro_schema = schema_string(&descriptor, options, &aliases)?;
    fs::write(avro_schema_path, avro_schema)?;
    tracing::info!(input = descriptor_path, output = avro_schema_path, "wrote Avro schema");
    Ok(())
}
