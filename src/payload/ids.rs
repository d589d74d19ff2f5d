// src/payload/ids.rs
//! Identity sources for client-created records.
//!
//! New blocks and generated option ids need identifiers before the server
//! has seen them. The source is injected at every call site that mints
//! ids, so tests and reproducible fixtures can pin the sequence while
//! production draws random uuids.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// A source of fresh record identifiers.
pub trait IdGenerator {
    /// Produce one new id. Never empty.
    fn generate(&self) -> String;
}

/// The production source: random v4 uuids in simple (undashed) form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().as_simple().to_string()
    }
}

/// A deterministic source: `prefix-1`, `prefix-2`, ... in call order.
///
/// Meant for tests and fixture tooling where ids must be stable across
/// runs.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequenceIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn generate(&self) -> String {
        let next = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_generator_yields_unique_simple_uuids() {
        let ids = UuidIdGenerator;
        let first = ids.generate();
        assert_eq!(first.len(), 32);
        assert_ne!(first, ids.generate());
    }

    #[test]
    fn test_sequence_generator_counts_from_one() {
        let ids = SequenceIdGenerator::new("blk");
        assert_eq!(ids.generate(), "blk-1");
        assert_eq!(ids.generate(), "blk-2");
    }
}
