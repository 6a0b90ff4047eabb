//! Session-keyed store for concurrent conversations.
//!
//! Each session owns an independent `SessionState`; the store just mints ids
//! and hands out exclusive references. Single-writer discipline within a
//! session is the caller's contract (and what `&mut` enforces). The store
//! itself is not synchronized; a transport layer that serves sessions from
//! multiple threads wraps it in its own locking.

use std::collections::HashMap;

use uuid::Uuid;

use crate::session::SessionState;

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<Uuid, SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh session and return its id.
    pub fn create(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, SessionState::new());
        id
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut SessionState> {
        self.sessions.get_mut(&id)
    }

    /// Drop a session at conversation end.
    pub fn remove(&mut self, id: Uuid) -> Option<SessionState> {
        self.sessions.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_are_independent() {
        let mut store = SessionStore::new();
        let a = store.create();
        let b = store.create();
        assert_ne!(a, b);

        store
            .get_mut(a)
            .unwrap()
            .record_analysis(vec![], None);

        assert!(store.get_mut(a).unwrap().has_analysis());
        assert!(!store.get_mut(b).unwrap().has_analysis());
    }

    #[test]
    fn test_remove_ends_session() {
        let mut store = SessionStore::new();
        let id = store.create();
        assert_eq!(store.len(), 1);
        assert!(store.remove(id).is_some());
        assert!(store.is_empty());
        assert!(store.get_mut(id).is_none());
    }
}
