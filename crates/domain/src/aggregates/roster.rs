//! Character collection aggregate - the ordered roster of character records.
//!
//! The roster has a single owner (the UI event loop), so mutations take
//! `&mut self` and apply atomically from the caller's point of view.

use serde::{Deserialize, Serialize};

use crate::entities::{CharacterData, CharacterRecord};
use crate::ids::CharacterId;

/// Ordered sequence of character records.
///
/// New ids are `len + 1`. After [`CharacterCollection::clear`] (or any
/// removal) this can hand out an id that was used before, and id uniqueness
/// is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterCollection {
    records: Vec<CharacterRecord>,
}

impl Default for CharacterCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterCollection {
    /// A roster with one default record, id 1.
    pub fn new() -> Self {
        Self {
            records: vec![CharacterRecord::new(CharacterId::new(1))],
        }
    }

    /// A roster with no records.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a default record and return its id.
    pub fn add(&mut self) -> CharacterId {
        let id = CharacterId::new(self.records.len() as u64 + 1);
        self.records.push(CharacterRecord::new(id));
        id
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Replace the data of every record with `id`.
    ///
    /// Returns whether any record matched; order is preserved either way.
    pub fn update_by_id(&mut self, id: CharacterId, data: CharacterData) -> bool {
        let mut matched = false;
        for record in self.records.iter_mut().filter(|r| r.id == id) {
            record.data = data.clone();
            matched = true;
        }
        matched
    }

    /// First record with `id`.
    pub fn get(&self, id: CharacterId) -> Option<&CharacterRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CharacterRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CharacterRecord> {
        self.records
    }
}

impl From<Vec<CharacterRecord>> for CharacterCollection {
    fn from(records: Vec<CharacterRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a CharacterCollection {
    type Item = &'a CharacterRecord;
    type IntoIter = std::slice::Iter<'a, CharacterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
