//! Domain library for the kitchen API.
//!
//! This crate is dependency-free (inherits workspace metadata only) and holds
//! the record types, the generic in-memory collection store, the two resource
//! schemas (shopping items and recipes), ports (traits) and error definitions.
//! Keep HTTP and serialization concerns out of this crate.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque identifier assigned by a store when a record is created.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn new<S: Into<String>>(s: S) -> Result<Self, CoreError> {
        let val = s.into();
        if val.is_empty() {
            return Err(CoreError::InvalidInput("id must not be empty".into()));
        }
        Ok(Self(val))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored item: the generated identifier plus the schema-specific fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record<T> {
    pub id: RecordId,
    pub fields: T,
}

/// Field set held by a [`store::CollectionStore`].
///
/// Implementors check their own invariants in `validate` and provide the
/// records a freshly started store is populated with.
pub trait Schema: Clone + Send {
    /// Short label used in log lines and error messages.
    const KIND: &'static str;

    fn validate(&self) -> Result<(), CoreError>;

    /// Records present in a seeded store before any client mutation.
    fn seed() -> Vec<Self>;
}

/// Identifier generator port.
///
/// Returns raw candidates. The store skips empty values and any value it has
/// already issued and asks again, so a generator must keep producing fresh
/// values. The retry runs while the store lock is held: a generator that only
/// ever yields empty or already-issued values blocks the store forever.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Core domain errors (no external error crates to keep deps at zero).
#[derive(Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Payload missing required fields or carrying invalid values.
    InvalidInput(String),
    /// No record with this id exists in the store.
    NotFound(RecordId),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            CoreError::NotFound(id) => write!(f, "no record with id {}", id),
        }
    }
}

impl Error for CoreError {}

/// Return a short about/version line for the binary to print.
pub fn about() -> String {
    let pkg = env!("CARGO_PKG_NAME");
    let ver = env!("CARGO_PKG_VERSION");
    format!("{} v{} - kitchen stores loaded", pkg, ver)
}

pub mod id;
pub mod recipes;
pub mod shopping;
pub mod store;
pub mod validate;

pub use recipes::{Recipe, RecipeStore};
pub use shopping::{ShoppingItem, ShoppingListStore};
pub use store::CollectionStore;
