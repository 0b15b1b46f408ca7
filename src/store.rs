use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::repo::User;
use crate::quiz::repo::Quiz;

/// The single shared in-memory store. Owned by the caller and passed by
/// reference into every operation, so tests can run against isolated
/// instances instead of process-wide state.
///
/// Invariants held after every operation: all user and quiz ids are distinct,
/// the counters are strictly greater than every issued id (ids are never
/// reused, even after deletion), emails are unique, and quiz names are unique
/// per author.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataStore {
    pub users: Vec<User>,
    pub quizzes: Vec<Quiz>,
    pub next_user_id: u64,
    pub next_quiz_id: u64,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Administrative reset: wipes all users and quizzes and rewinds both id
    /// counters. Infallible.
    pub fn clear(&mut self) {
        *self = Self::default();
        info!("store cleared");
    }

    /// Replaces the store wholesale.
    pub fn set(&mut self, state: DataStore) {
        *self = state;
    }
}
