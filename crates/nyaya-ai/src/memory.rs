//! Bounded per-session conversation history.
//!
//! Sessions are created lazily on first append and live until cleared or
//! the process exits. Each session's turns sit behind their own mutex, so
//! an append-and-evict on one session is atomic and never waits on another
//! session. The outer map lock is held only to look up or insert a session.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use nyaya_core::{Role, Turn};
use tracing::debug;

type History = Arc<Mutex<VecDeque<Turn>>>;

/// In-process chat memory keyed by session id.
#[derive(Debug)]
pub struct SessionMemory {
    capacity: usize,
    sessions: RwLock<HashMap<String, History>>,
}

impl SessionMemory {
    /// Memory keeping at most `capacity` turns per session (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a turn, evicting the oldest turns beyond capacity.
    pub fn append_turn(&self, session_id: &str, role: Role, content: impl Into<String>) {
        let history = self.session(session_id);
        let mut turns = history.lock().unwrap_or_else(PoisonError::into_inner);
        turns.push_back(Turn {
            role,
            content: content.into(),
        });
        let mut evicted = 0;
        while turns.len() > self.capacity {
            turns.pop_front();
            evicted += 1;
        }
        debug!(
            session_id,
            role = role.as_str(),
            len = turns.len(),
            evicted,
            "appended turn"
        );
    }

    /// Turns for `session_id`, oldest first. Unknown sessions are empty.
    pub fn history(&self, session_id: &str) -> Vec<Turn> {
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        match sessions.get(session_id) {
            Some(history) => history
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .iter()
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Drop a session. Returns whether it existed.
    pub fn clear(&self, session_id: &str) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session_id)
            .is_some()
    }

    pub fn session_count(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn session(&self, session_id: &str) -> History {
        if let Some(history) = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session_id)
        {
            return Arc::clone(history);
        }
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(sessions.entry(session_id.to_string()).or_default())
    }
}

impl Default for SessionMemory {
    fn default() -> Self {
        Self::new(10)
    }
}
