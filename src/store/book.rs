//! The record book: an append-only slot sequence with tombstoned deletes.

use super::errors::{StoreError, StoreResult};
use super::field::FilterField;
use super::record::Record;

/// Ordered collection of crime-incident records keyed by slot index.
///
/// Invariants:
/// - a record's identifier equals its slot index at creation and never
///   changes;
/// - single deletes tombstone the slot, they never shift later slots;
/// - slot count grows only on append and resets only on [`clear`].
///
/// [`clear`]: RecordBook::clear
#[derive(Debug, Default)]
pub struct RecordBook {
    slots: Vec<Option<Record>>,
}

impl RecordBook {
    /// Create an empty book
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Number of slots, including tombstones
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether the book holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a record, assigning the next identifier.
    ///
    /// Any identifier carried by the incoming record is overwritten; the
    /// store is the only authority on identifiers.
    pub fn append(&mut self, mut record: Record) -> u64 {
        let id = self.slots.len() as u64;
        record.id = id;
        self.slots.push(Some(record));
        id
    }

    /// Every occupied record in insertion order; tombstones are skipped
    pub fn records(&self) -> Vec<&Record> {
        self.slots.iter().flatten().collect()
    }

    /// Look up one record by identifier.
    ///
    /// Out-of-range identifiers and tombstoned slots both report
    /// [`StoreError::NotFound`].
    pub fn record(&self, id: u64) -> StoreResult<&Record> {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.slots.get(index))
            .and_then(|slot| slot.as_ref())
            .ok_or(StoreError::NotFound { id })
    }

    /// Tombstone one record by identifier.
    ///
    /// The slot stays in place so later identifiers keep their meaning;
    /// the identifier is never reused.
    pub fn remove(&mut self, id: u64) -> StoreResult<()> {
        let slot = usize::try_from(id)
            .ok()
            .and_then(|index| self.slots.get_mut(index))
            .ok_or(StoreError::NotFound { id })?;
        *slot = None;
        Ok(())
    }

    /// Drop every slot; the next append starts over at identifier 0
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Records whose `field` value equals `value` exactly, in insertion
    /// order. Matching is on the one selected field only.
    pub fn matching(&self, field: FilterField, value: &str) -> Vec<&Record> {
        self.slots
            .iter()
            .flatten()
            .filter(|record| field.value_of(record) == value)
            .collect()
    }
}
