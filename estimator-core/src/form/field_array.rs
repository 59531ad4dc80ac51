//! Ordered row storage with position-independent identity.
//!
//! Rows live in an arena keyed by [`RowId`]; display order is a separate
//! list of ids. Removing a row shifts the positions of the rows after it but
//! never changes their ids, so an edit addressed to a row keeps landing on
//! that row.

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};

/// Opaque identity of a row, assigned on append and never reused within an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl fmt::Display for RowId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct FieldArray<T> {
    rows: HashMap<RowId, T>,
    order: Vec<RowId>,
    next_id: u64,
}

impl<T> FieldArray<T> {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends `record` at the end and returns its new identity.
    pub fn append(
        &mut self,
        record: T,
    ) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.insert(id, record);
        self.order.push(id);
        id
    }

    /// Removes the row at `index`. Returns `None` when `index` is out of range.
    pub fn remove(
        &mut self,
        index: usize,
    ) -> Option<T> {
        if index >= self.order.len() {
            return None;
        }
        let id = self.order.remove(index);
        self.rows.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn id_at(
        &self,
        index: usize,
    ) -> Option<RowId> {
        self.order.get(index).copied()
    }

    /// Current display position of the row with identity `id`.
    pub fn position_of(
        &self,
        id: RowId,
    ) -> Option<usize> {
        self.order.iter().position(|candidate| *candidate == id)
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&T> {
        self.id_at(index).and_then(|id| self.rows.get(&id))
    }

    pub fn get_mut(
        &mut self,
        index: usize,
    ) -> Option<&mut T> {
        let id = self.id_at(index)?;
        self.rows.get_mut(&id)
    }

    pub fn get_by_id(
        &self,
        id: RowId,
    ) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_by_id_mut(
        &mut self,
        id: RowId,
    ) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    /// Rows in display order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.rows.get(id))
    }

    /// Rows in display order, paired with their identities.
    pub fn iter_with_ids(&self) -> impl Iterator<Item = (RowId, &T)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.rows.get(id).map(|row| (*id, row)))
    }

    /// Drops every row. Identities handed out earlier are not reissued.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.order.clear();
    }
}

impl<T> Default for FieldArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for FieldArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        for record in iter {
            array.append(record);
        }
        array
    }
}

impl<T: Serialize> Serialize for FieldArray<T> {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}
