//! In-memory notes store.
//!
//! Review is a single-user, single-device activity and the durable state
//! that matters (`next_review_date`, `review_count`) lives on each note, so
//! the storage layer is a locked vector with stable insertion order and
//! unique ids. Concurrent sessions over the same collection are permitted
//! but uncoordinated: last update wins.

use review_core::Note;
use std::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct NoteStore {
    notes: RwLock<Vec<Note>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notes in insertion order.
    pub fn all(&self) -> Vec<Note> {
        self.notes.read().expect("store lock").clone()
    }

    pub fn get(&self, id: Uuid) -> Option<Note> {
        self.notes
            .read()
            .expect("store lock")
            .iter()
            .find(|note| note.id == id)
            .cloned()
    }

    pub fn insert(&self, note: Note) {
        self.notes.write().expect("store lock").push(note);
    }

    /// Replace a note by id. Returns false when the id is unknown.
    pub fn update_note(&self, note: &Note) -> bool {
        let mut notes = self.notes.write().expect("store lock");
        match notes.iter_mut().find(|existing| existing.id == note.id) {
            Some(slot) => {
                *slot = note.clone();
                true
            }
            None => false,
        }
    }

    /// Remove a note by id, returning it when present.
    pub fn remove(&self, id: Uuid) -> Option<Note> {
        let mut notes = self.notes.write().expect("store lock");
        let index = notes.iter().position(|note| note.id == id)?;
        Some(notes.remove(index))
    }

    pub fn len(&self) -> usize {
        self.notes.read().expect("store lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note(title: &str) -> Note {
        Note::new(title, format!("{title} transcript"), Utc::now())
    }

    #[test]
    fn insertion_order_is_stable() {
        let store = NoteStore::new();
        let first = note("first");
        let second = note("second");
        store.insert(first.clone());
        store.insert(second.clone());

        let all = store.all();
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].id, second.id);
    }

    #[test]
    fn update_replaces_by_id() {
        let store = NoteStore::new();
        let mut stored = note("draft");
        store.insert(stored.clone());

        stored.review_count = 3;
        assert!(store.update_note(&stored));
        assert_eq!(store.get(stored.id).unwrap().review_count, 3);

        let stray = note("never inserted");
        assert!(!store.update_note(&stray));
    }

    #[test]
    fn remove_returns_the_note() {
        let store = NoteStore::new();
        let stored = note("gone");
        store.insert(stored.clone());

        assert_eq!(store.remove(stored.id).unwrap().id, stored.id);
        assert!(store.is_empty());
        assert!(store.remove(stored.id).is_none());
    }
}
