//! Session store
//!
//! Holds the authenticated identity, the credential token and the
//! loading/error status. Consumers get read-only [`Session`] snapshots;
//! every change goes through one of the store's intents and is published to
//! subscribers over a `watch` channel.
//!
//! `is_authenticated` is derived from identity and token presence, so it can
//! never disagree with them.

use shared::Identity;
use std::sync::Arc;
use tokio::sync::watch;

/// Read-only view of the authentication state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    identity: Option<Identity>,
    token: Option<String>,
    pending: u32,
    error: Option<String>,
}

impl Session {
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// True iff both identity and token are present
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some() && self.token.is_some()
    }

    /// True while a gateway call is in flight
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    /// Message of the last failed gateway call
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Monotonic counter of session-changing intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Generation(u64);

#[derive(Debug, Default)]
pub(crate) struct SessionState {
    session: Session,
    generation: u64,
}

/// Shared handle to the session; clones refer to the same state
#[derive(Debug, Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<SessionState>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Empty, unauthenticated store
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionState::default());
        Self { tx: Arc::new(tx) }
    }

    /// Current session snapshot
    pub fn snapshot(&self) -> Session {
        self.tx.borrow().session.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().session.is_authenticated()
    }

    /// Watch for session changes
    pub fn subscribe(&self) -> SessionWatcher {
        SessionWatcher {
            rx: self.tx.subscribe(),
        }
    }

    // ========== Intents ==========

    /// Replace identity and token together
    pub fn set_credentials(&self, identity: Identity, token: impl Into<String>) {
        let token = token.into();
        self.tx.send_modify(|state| {
            state.generation += 1;
            state.session.identity = Some(identity);
            state.session.token = Some(token);
            state.session.error = None;
        });
    }

    /// Replace the identity, leaving the token untouched
    pub fn set_user(&self, identity: Identity) {
        self.tx.send_modify(|state| {
            state.generation += 1;
            state.session.identity = Some(identity);
        });
    }

    /// Drop identity and token
    pub fn clear_credentials(&self) {
        self.tx.send_modify(|state| {
            state.generation += 1;
            state.session.identity = None;
            state.session.token = None;
            state.session.error = None;
        });
    }

    // ========== Gateway-only intents ==========

    /// Start a session-changing operation; older in-flight operations lose
    pub(crate) fn begin_change(&self) -> Generation {
        let mut generation = Generation(0);
        self.tx.send_if_modified(|state| {
            state.generation += 1;
            generation = Generation(state.generation);
            false
        });
        generation
    }

    pub(crate) fn generation(&self) -> Generation {
        Generation(self.tx.borrow().generation)
    }

    /// Populate an empty store from durable storage. Does not supersede
    /// in-flight operations.
    pub(crate) fn hydrate(&self, identity: Identity, token: String) -> bool {
        self.tx.send_if_modified(|state| {
            if state.session.identity.is_some() {
                return false;
            }
            state.session.identity = Some(identity);
            state.session.token = Some(token);
            true
        })
    }

    /// Commit identity and token unless a newer change began. `persist`
    /// runs under the store lock, only when the commit happens.
    ///
    /// Credential stores are synchronous and write one small document, so
    /// the lock is held for the duration of that write. Stores must not
    /// await or call back into the session.
    pub(crate) fn commit_credentials(
        &self,
        generation: Generation,
        identity: Identity,
        token: String,
        persist: impl FnOnce(&Identity, &str),
    ) -> bool {
        self.tx.send_if_modified(|state| {
            if state.generation != generation.0 {
                return false;
            }
            persist(&identity, &token);
            state.session.identity = Some(identity);
            state.session.token = Some(token);
            state.session.error = None;
            true
        })
    }

    /// Replace the identity unless a newer change began
    pub(crate) fn commit_user(
        &self,
        generation: Generation,
        identity: Identity,
        persist: impl FnOnce(&Identity, Option<&str>),
    ) -> bool {
        self.tx.send_if_modified(|state| {
            if state.generation != generation.0 {
                return false;
            }
            persist(&identity, state.session.token.as_deref());
            state.session.identity = Some(identity);
            true
        })
    }

    /// Tear the session down, superseding everything in flight. `wipe`
    /// runs under the store lock.
    pub(crate) fn clear_with(&self, wipe: impl FnOnce()) {
        self.tx.send_modify(|state| {
            state.generation += 1;
            wipe();
            state.session.identity = None;
            state.session.token = None;
            state.session.error = None;
        });
    }

    /// Like [`SessionStore::clear_with`], unless a newer change began
    pub(crate) fn clear_if_current(&self, generation: Generation, wipe: impl FnOnce()) -> bool {
        self.tx.send_if_modified(|state| {
            if state.generation != generation.0 {
                return false;
            }
            state.generation += 1;
            wipe();
            state.session.identity = None;
            state.session.token = None;
            state.session.error = None;
            true
        })
    }

    pub(crate) fn begin_loading(&self) {
        self.tx.send_modify(|state| {
            state.session.pending += 1;
            state.session.error = None;
        });
    }

    pub(crate) fn finish_loading(&self, error: Option<String>) {
        self.tx.send_modify(|state| {
            state.session.pending = state.session.pending.saturating_sub(1);
            if error.is_some() {
                state.session.error = error;
            }
        });
    }
}

/// Receives a fresh snapshot whenever the session changes
#[derive(Debug)]
pub struct SessionWatcher {
    rx: watch::Receiver<SessionState>,
}

impl SessionWatcher {
    pub fn current(&self) -> Session {
        self.rx.borrow().session.clone()
    }

    /// Wait for the next change. `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<Session> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().session.clone())
    }
}
