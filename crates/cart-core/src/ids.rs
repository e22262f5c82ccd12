//! # Item Identifiers
//!
//! The row parser asks an [`IdGenerator`] for one id per parsed row. The
//! format is up to the generator.
//!
//! - [`UuidGenerator`] - UUID v4, the default
//! - [`SequentialIds`] - `prefix` + counter, deterministic (tests, fixtures)
//! - any `Fn() -> String` closure

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces a fresh unique id on every call.
pub trait IdGenerator: Send + Sync {
    /// Returns a new id, never one handed out before by this generator.
    fn new_id(&self) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn new_id(&self) -> String {
        self()
    }
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Ids of the form `{prefix}{n}`, counting from 1.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    /// Creates a generator whose first id is `{prefix}1`.
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIds {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        SequentialIds::new("item-")
    }
}

impl IdGenerator for SequentialIds {
    fn new_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, n)
    }
}
