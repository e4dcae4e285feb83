//! Auth gateway
//!
//! Talks to the identity service and keeps the [`SessionStore`] and the
//! durable [`CredentialStore`] in step.
//!
//! Overlapping calls follow a last-issued-wins rule: `login`, `register` and
//! `logout` each start a new session generation, and a remote result is only
//! committed if no newer generation began while it was in flight. A stale
//! success returns [`ClientError::Superseded`] without touching session or
//! storage.

use shared::{Identity, IdentityUpdate, LoginRequest, LoginResponse, RegisterRequest};

use crate::error::{ClientError, ClientResult};
use crate::http::IdentityService;
use crate::session::{Generation, Session, SessionStore};
use crate::storage::{CredentialStore, StoredCredential};

pub struct AuthGateway<S, C> {
    service: S,
    storage: C,
    store: SessionStore,
}

impl<S, C> AuthGateway<S, C>
where
    S: IdentityService,
    C: CredentialStore,
{
    pub fn new(service: S, storage: C, store: SessionStore) -> Self {
        Self {
            service,
            storage,
            store,
        }
    }

    /// The session store this gateway writes to
    pub fn session(&self) -> &SessionStore {
        &self.store
    }

    pub fn storage(&self) -> &C {
        &self.storage
    }

    /// Resume a previously stored session without contacting the service.
    ///
    /// Only fills an empty store; returns whether it did. Stale tokens are
    /// left for the service to reject on the next call.
    pub fn hydrate(&self) -> bool {
        if self.store.snapshot().identity().is_some() {
            return false;
        }
        let Some(credential) = self.storage.load() else {
            return false;
        };
        let username = credential.user.username.clone();
        let hydrated = self.store.hydrate(credential.user, credential.token);
        if hydrated {
            tracing::info!(username = %username, "Session restored from storage");
        }
        hydrated
    }

    pub async fn login(&self, identifier: &str, password: &str) -> ClientResult<Session> {
        let request = LoginRequest {
            identifier: identifier.to_string(),
            password: password.to_string(),
        };
        let generation = self.store.begin_change();
        let result = self.tracked(self.service.login(&request)).await;
        self.commit_login(generation, result, "login")
    }

    /// Create an account. Field validity is the service's call.
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<Session> {
        let generation = self.store.begin_change();
        let result = self.tracked(self.service.register(request)).await;
        self.commit_login(generation, result, "register")
    }

    /// Clear storage and session. Never fails.
    pub fn logout(&self) {
        self.store.clear_with(|| self.wipe_storage());
        tracing::info!("Logged out");
    }

    /// Send a partial profile update; the token is left unchanged
    pub async fn update_current_user(&self, update: &IdentityUpdate) -> ClientResult<Identity> {
        let (generation, token) = self.current_token()?;
        let result = self
            .tracked(self.service.update_current_user(&token, update))
            .await;
        self.commit_identity(generation, result)
    }

    /// Re-fetch the current identity from the service
    pub async fn refresh_current_user(&self) -> ClientResult<Identity> {
        let (generation, token) = self.current_token()?;
        let result = self.tracked(self.service.current_user(&token)).await;
        self.commit_identity(generation, result)
    }

    // ========== Internals ==========

    fn current_token(&self) -> ClientResult<(Generation, String)> {
        let generation = self.store.generation();
        let token = self
            .store
            .snapshot()
            .token()
            .map(str::to_string)
            .ok_or(ClientError::NotAuthenticated)?;
        Ok((generation, token))
    }

    /// Mark the store loading for the duration of a remote call
    async fn tracked<T>(
        &self,
        call: impl std::future::Future<Output = ClientResult<T>>,
    ) -> ClientResult<T> {
        self.store.begin_loading();
        let result = call.await;
        let error = result.as_ref().err().map(ClientError::user_message);
        self.store.finish_loading(error);
        result
    }

    fn commit_login(
        &self,
        generation: Generation,
        result: ClientResult<LoginResponse>,
        action: &str,
    ) -> ClientResult<Session> {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(action, "Authentication failed: {}", e);
                return Err(e);
            }
        };

        let username = response.user.username.clone();
        let committed =
            self.store
                .commit_credentials(generation, response.user, response.token, |user, token| {
                    self.persist(user, token)
                });
        if !committed {
            tracing::info!(action, username = %username, "Discarding superseded result");
            return Err(ClientError::Superseded);
        }

        tracing::info!(action, username = %username, "Session established");
        Ok(self.store.snapshot())
    }

    fn commit_identity(
        &self,
        generation: Generation,
        result: ClientResult<Identity>,
    ) -> ClientResult<Identity> {
        let identity = match result {
            Ok(identity) => identity,
            Err(e) if e.is_unauthorized() => {
                // the service no longer accepts the token
                if self.store.clear_if_current(generation, || self.wipe_storage()) {
                    tracing::warn!("Token rejected, session cleared");
                }
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        let committed = self
            .store
            .commit_user(generation, identity.clone(), |user, token| {
                if let Some(token) = token {
                    self.persist(user, token);
                }
            });
        if !committed {
            return Err(ClientError::Superseded);
        }
        Ok(identity)
    }

    fn persist(&self, user: &Identity, token: &str) {
        let credential = StoredCredential::new(token, user.clone());
        if let Err(e) = self.storage.save(&credential) {
            tracing::warn!("Failed to persist session: {}", e);
        }
    }

    fn wipe_storage(&self) {
        if let Err(e) = self.storage.clear() {
            tracing::warn!("Failed to clear stored session: {}", e);
        }
    }
}
