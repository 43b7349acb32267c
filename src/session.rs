//! Login/logout gate
//!
//! There is no credential check here; the flag only decides whether the
//! roster view is reachable. Every transition is persisted.

use crate::consts::KEY_LOGGED_IN;
use crate::persistence::{KeyValueStore, Persistence};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn,
}

impl SessionState {
    fn from_flag(logged_in: bool) -> Self {
        if logged_in {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// Restore from the persisted flag (absent or corrupt means logged out)
    pub fn restore<S: KeyValueStore>(persistence: &Persistence<S>) -> Self {
        let logged_in = persistence.load(KEY_LOGGED_IN, false);
        Self {
            state: SessionState::from_flag(logged_in),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state == SessionState::LoggedIn
    }

    pub fn login<S: KeyValueStore>(&mut self, persistence: &mut Persistence<S>) {
        self.transition(SessionState::LoggedIn, persistence);
        log::info!("Logged in");
    }

    pub fn logout<S: KeyValueStore>(&mut self, persistence: &mut Persistence<S>) {
        self.transition(SessionState::LoggedOut, persistence);
        log::info!("Logged out");
    }

    fn transition<S: KeyValueStore>(&mut self, next: SessionState, persistence: &mut Persistence<S>) {
        self.state = next;
        persistence.save(KEY_LOGGED_IN, &self.is_logged_in());
    }
}
