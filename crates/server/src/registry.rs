// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Open screen sessions, keyed by a server-assigned identifier.

use fleet_desk::Session;
use std::collections::HashMap;
use tracing::warn;

/// Number of sessions kept when no limit is configured.
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// The sessions the server currently presents.
///
/// Identifiers start at 1 and are never reused within a process. When the
/// registry is full, opening a session evicts the oldest one.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: HashMap<u64, Session>,
    last_id: u64,
    max_sessions: usize,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistry {
    /// Creates an empty registry holding at most [`DEFAULT_MAX_SESSIONS`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_sessions(DEFAULT_MAX_SESSIONS)
    }

    /// Creates an empty registry holding at most `max_sessions` sessions.
    /// A limit of 0 is treated as 1.
    #[must_use]
    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            last_id: 0,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Stores a new session and returns its identifier.
    ///
    /// Evicts the oldest open session first if the registry is full.
    pub fn open(&mut self, session: Session) -> u64 {
        while self.sessions.len() >= self.max_sessions {
            let Some(oldest) = self.sessions.keys().min().copied() else {
                break;
            };
            self.sessions.remove(&oldest);
            warn!(session_id = oldest, "Session limit reached, evicted oldest session");
        }
        self.last_id += 1;
        self.sessions.insert(self.last_id, session);
        self.last_id
    }

    /// Looks a session up.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Session> {
        self.sessions.get(&id)
    }

    /// Swaps in the session produced by a command.
    ///
    /// Returns `false` when the identifier is unknown, in which case nothing
    /// is stored.
    pub fn replace(&mut self, id: u64, session: Session) -> bool {
        match self.sessions.get_mut(&id) {
            Some(slot) => {
                *slot = session;
                true
            }
            None => false,
        }
    }

    /// Removes a session.
    pub fn close(&mut self, id: u64) -> Option<Session> {
        self.sessions.remove(&id)
    }

    /// Returns the number of open sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }
}
