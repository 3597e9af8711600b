//! Identifier generation strategies.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::IdGenerator;

/// Counter-based generator producing `<prefix>-<n>` ids.
///
/// The counter only moves forward for the lifetime of the generator, so ids
/// are never repeated. Values are predictable; servers should prefer a random
/// generator and keep this one for tests and demos.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    prefix: &'static str,
    next: AtomicU64,
}

impl SequenceIdGenerator {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
