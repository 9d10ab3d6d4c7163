use std::collections::HashSet;

use xxhash_rust::xxh64::xxh64;

use crate::avro::AvroType;

/// Structural fingerprint of a schema node: xxh64 of its compact JSON form.
///
/// Two nodes that serialize identically share a fingerprint, so it can be
/// used to detect repeated union members.
pub fn schema_fingerprint(node: &AvroType) -> u64 {
    let json = serde_json::to_string(node).unwrap_or_default();
    xxh64(json.as_bytes(), 0)
}

/// Tracks which schema nodes have been seen, by fingerprint.
#[derive(Debug, Default)]
pub struct FingerprintSet {
    seen: HashSet<u64>,
}

impl FingerprintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `node` had not been seen before.
    pub fn insert(&mut self, node: &AvroType) -> bool {
        self.seen.insert(schema_fingerprint(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_nodes_share_fingerprint() {
        let a = AvroType::Array {
            r#type: "array".into(),
            items: Box::new(AvroType::primitive("string")),
        };
        let b = a.clone();
        let c = AvroType::Array {
            r#type: "array".into(),
            items: Box::new(AvroType::primitive("long")),
        };
        assert_eq!(schema_fingerprint(&a), schema_fingerprint(&b));
        assert_ne!(schema_fingerprint(&a), schema_fingerprint(&c));

        let mut seen = FingerprintSet::new();
        assert!(seen.insert(&a));
        assert!(!seen.insert(&b));
        assert!(seen.insert(&c));
    }
}
