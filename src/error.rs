use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The descriptor is not a shape the generator understands.
    #[error("{0}")]
    TypeNotSupported(String),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Fetch failed: {0}")]
    Fetch(String),
}

/// A recognised descriptor that cannot be expressed as an Avro schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("Cannot generate Avro schema for {0} with mixed type values")]
    MixedLiteral(String),

    #[error("Cannot generate Avro schema for {0} without values")]
    EmptyLiteral(String),

    #[error("Cannot generate Avro mapping schema for {0} with non-string keys")]
    NonStringMapKey(String),

    #[error("Avro enum schema members must be strings. {name} uses {found} values.")]
    NonStringEnumValues { name: String, found: String },

    #[error("Cannot generate Avro union schema for {0}: more than one typed dict member")]
    AmbiguousUnion(String),

    #[error("Cannot resolve reference to {0}")]
    UnresolvedReference(String),
}

impl Error {
    pub(crate) fn unsupported_schema(descriptor: impl std::fmt::Display) -> Self {
        Error::TypeNotSupported(format!("Cannot generate Avro schema for {descriptor}"))
    }

    pub(crate) fn unsupported_name(descriptor: impl std::fmt::Display) -> Self {
        Error::TypeNotSupported(format!(
            "Cannot generate a wrapper record name for {descriptor}"
        ))
    }
}
