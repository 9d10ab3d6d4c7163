//! # typed-avro-schema
//!
//! Generate [Apache Avro](https://avro.apache.org/) schemas from native type
//! declarations.
//!
//! ## Features
//!
//! - Maps primitives, sequences, sets, string-keyed maps, enumerations,
//!   records and unions to their Avro equivalents
//! - Emits each named type once per document; later uses are references
//! - Synthesizes stable names for anonymous containers and unions
//! - Optional wrapper records with an identity field for bare containers
//! - Type and field aliases for schema evolution
//! - CLI tool `types2avro` for descriptor documents written as JSON
//!
//! ## Example (Programmatic Usage)
//!
//! ```
//! use serde_json::json;
//! use typed_avro_schema::alias::AliasRegistry;
//! use typed_avro_schema::converter::schema_value;
//! use typed_avro_schema::descriptor::{CompositeDescriptor, Field, TypeDescriptor};
//! use typed_avro_schema::options::Options;
//! use typed_avro_schema::reflect::Describe;
//!
//! let user: TypeDescriptor = CompositeDescriptor::new("app.User")
//!     .field(Field::new("name", String::describe()))
//!     .field(Field::new("emails", <Vec<String>>::describe()))
//!     .into();
//!
//! let aliases = AliasRegistry::new();
//! aliases.register("app.User", ["app.Account"]);
//!
//! let avro = schema_value(&user, &Options::new(), &aliases).unwrap();
//! assert_eq!(
//!     avro,
//!     json!({
//!         "type": "record",
//!         "name": "User",
//!         "aliases": ["app.Account"],
//!         "fields": [
//!             {"name": "name", "type": "string"},
//!             {"name": "emails", "type": {"type": "array", "items": "string"}}
//!         ]
//!     })
//! );
//! ```
//!
//! ## Example (CLI)
//!
//! ```bash
//! types2avro user.json user.avsc --wrap-into-records
//! ```
//!
//! ## Crate Layout
//!
//! - [`avro`]: Avro schema node types (`AvroType`, `AvroField`)
//! - [`descriptor`]: Input type descriptors
//! - [`reflect`]: The `Describe` trait for Rust types
//! - [`alias`]: Alias registry
//! - [`options`]: Translation options
//! - [`converter`]: Descriptor → Avro translation
//! - [`common`]: Helpers for names and structural fingerprints
//!
//! The CLI binary and remote descriptor loading are enabled with the `cli` feature.
pub mod alias;
pub mod avro;
pub mod common;
pub mod converter;
pub mod descriptor;
pub mod error;
#[cfg(feature = "cli")]
pub mod fetch;
pub mod options;
pub mod reflect;

pub use alias::AliasRegistry;
pub use avro::{AvroField, AvroType};
pub use converter::{name_for, schema, schema_of, schema_string, schema_value};
pub use descriptor::TypeDescriptor;
pub use error::{Error, Result, TranslationError};
pub use options::{Options, SchemaFlag};
pub use reflect::Describe;
