use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use crate::{CoreError, IdGenerator, Record, RecordId, Schema};

/// Ordered in-memory collection of records for one resource type.
///
/// The store is the only mutation surface for its records. All operations
/// take the same mutex for their whole duration, so `add`, `update`, `delete`
/// and `list_all` never observe each other half-done. Every id the store has
/// handed out is remembered so a deleted id is never issued again.
pub struct CollectionStore<T: Schema, G: IdGenerator> {
    inner: Mutex<Inner<T>>,
    ids: G,
}

struct Inner<T> {
    records: Vec<Record<T>>,
    issued: HashSet<RecordId>,
}

impl<T: Schema, G: IdGenerator> CollectionStore<T, G> {
    /// Create an empty store.
    pub fn new(ids: G) -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: Vec::new(),
                issued: HashSet::new(),
            }),
            ids,
        }
    }

    /// Create a store populated with the schema's seed records.
    pub fn seeded(ids: G) -> Self {
        let store = Self::new(ids);
        {
            let mut inner = store.lock();
            for fields in T::seed() {
                let id = store.fresh_id(&mut inner.issued);
                inner.records.push(Record { id, fields });
            }
        }
        store
    }

    // No operation leaves `records` half-mutated, so a poisoned lock still
    // guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn fresh_id(&self, issued: &mut HashSet<RecordId>) -> RecordId {
        loop {
            let Ok(id) = RecordId::new(self.ids.next_id()) else {
                continue;
            };
            if issued.insert(id.clone()) {
                return id;
            }
        }
    }

    /// All live records in insertion order.
    pub fn list_all(&self) -> Vec<Record<T>> {
        self.lock().records.clone()
    }

    /// Look up a single record.
    pub fn get(&self, id: &RecordId) -> Result<Record<T>, CoreError> {
        self.lock()
            .records
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(id.clone()))
    }

    /// Append a new record with a freshly generated id.
    pub fn add(&self, fields: T) -> Result<Record<T>, CoreError> {
        fields.validate()?;
        let mut inner = self.lock();
        let id = self.fresh_id(&mut inner.issued);
        let record = Record { id, fields };
        inner.records.push(record.clone());
        Ok(record)
    }

    /// Replace every field of an existing record, keeping its id and position.
    pub fn update(&self, id: &RecordId, fields: T) -> Result<Record<T>, CoreError> {
        fields.validate()?;
        let mut inner = self.lock();
        match inner.records.iter_mut().find(|r| &r.id == id) {
            Some(record) => {
                record.fields = fields;
                Ok(record.clone())
            }
            None => Err(CoreError::NotFound(id.clone())),
        }
    }

    /// Remove a record permanently. Its id is never reissued.
    pub fn delete(&self, id: &RecordId) -> Result<(), CoreError> {
        let mut inner = self.lock();
        match inner.records.iter().position(|r| &r.id == id) {
            Some(pos) => {
                inner.records.remove(pos);
                Ok(())
            }
            None => Err(CoreError::NotFound(id.clone())),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
