//! Session store: owns every live `DialogueSession`, keyed by `(mode, id)`.
//!
//! Sessions live for the life of the process; nothing evicts them.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::dialogue::session::DialogueSession;
use crate::matching::Recommender;
use crate::models::mode::Mode;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub mode: Mode,
    pub id: String,
}

/// Result of one dialogue turn.
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    pub session_id: String,
    pub responses: Vec<String>,
}

/// Concurrent map of sessions.
///
/// The map only hands out `Arc`s; the turn runs under the session's own
/// mutex after the shard guard is dropped. Turns on one session are
/// serialized, turns on different sessions never wait on each other.
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<SessionKey, Arc<Mutex<DialogueSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Runs one turn. An absent id, or one unknown under `mode`, starts a
    /// fresh session with a newly issued id. Never fails.
    pub fn handle_turn(
        &self,
        mode: Mode,
        session_id: Option<&str>,
        text: &str,
        recommender: &Recommender,
    ) -> TurnOutcome {
        let session = self.resolve(mode, session_id);

        // A poisoned lock only means an earlier turn panicked mid-update;
        // the session data is still usable.
        let mut session = session.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = session.step;
        let responses = session.advance(mode, text, recommender);
        debug!(
            "Turn on {mode}/{}: {before:?} -> {:?} ({} messages)",
            session.id,
            session.step,
            responses.len()
        );

        TurnOutcome {
            session_id: session.id.clone(),
            responses,
        }
    }

    fn resolve(&self, mode: Mode, session_id: Option<&str>) -> Arc<Mutex<DialogueSession>> {
        if let Some(id) = session_id.filter(|id| !id.is_empty()) {
            let key = SessionKey {
                mode,
                id: id.to_string(),
            };
            if let Some(existing) = self.sessions.get(&key) {
                return Arc::clone(existing.value());
            }
        }

        let id = Uuid::new_v4().to_string();
        debug!("Created session {mode}/{id}");
        let session = Arc::new(Mutex::new(DialogueSession::new(id.clone())));
        self.sessions.insert(SessionKey { mode, id }, Arc::clone(&session));
        session
    }
}
