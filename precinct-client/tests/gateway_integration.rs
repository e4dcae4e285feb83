//! Auth gateway integration tests
//!
//! Drive the gateway against a scripted identity service and check what
//! ends up in the session store and in durable storage.

use async_trait::async_trait;
use precinct_client::{
    AuthGateway, Capability, ClientError, ClientResult, CredentialStore, FileCredentialStore, IdentityService,
    MemoryCredentialStore, Permissions, SessionStore, StorageError, StoredCredential,
};
use shared::{Identity, IdentityUpdate, LoginRequest, LoginResponse, RegisterRequest, RoleName};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

const BAD_CREDENTIALS: &str = r#"{"non_field_errors":["Invalid credentials"]}"#;

/// Scripted identity service
#[derive(Default)]
struct MockService {
    /// identifier -> (password, identity)
    accounts: Mutex<HashMap<String, (String, Identity)>>,
    /// tokens the service no longer accepts
    revoked: Mutex<HashSet<String>>,
    /// login for this identifier waits on the notify before answering
    gate: Mutex<Option<(String, Arc<Notify>)>>,
    /// body of a 400 returned by profile updates
    update_rejection: Mutex<Option<String>>,
}

impl MockService {
    fn with_account(self, identifier: &str, password: &str, identity: Identity) -> Self {
        self.accounts
            .lock()
            .unwrap()
            .insert(identifier.to_string(), (password.to_string(), identity));
        self
    }

    fn hold_login(self, identifier: &str, notify: Arc<Notify>) -> Self {
        *self.gate.lock().unwrap() = Some((identifier.to_string(), notify));
        self
    }

    fn token_for(identifier: &str) -> String {
        format!("token-{identifier}")
    }

    fn identity_for_token(&self, token: &str) -> ClientResult<Identity> {
        if self.revoked.lock().unwrap().contains(token) {
            return Err(ClientError::Unauthorized(
                r#"{"detail":"Invalid token."}"#.to_string(),
            ));
        }
        let identifier = token
            .strip_prefix("token-")
            .ok_or_else(|| ClientError::Unauthorized("unknown token".to_string()))?;
        self.accounts
            .lock()
            .unwrap()
            .get(identifier)
            .map(|(_, identity)| identity.clone())
            .ok_or_else(|| ClientError::Unauthorized("unknown token".to_string()))
    }
}

#[async_trait]
impl IdentityService for MockService {
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        let gate = self
            .gate
            .lock()
            .unwrap()
            .as_ref()
            .filter(|(id, _)| *id == request.identifier)
            .map(|(_, notify)| notify.clone());
        if let Some(notify) = gate {
            notify.notified().await;
        }

        let accounts = self.accounts.lock().unwrap();
        match accounts.get(&request.identifier) {
            Some((password, identity)) if *password == request.password => Ok(LoginResponse {
                user: identity.clone(),
                token: Self::token_for(&request.identifier),
            }),
            _ => Err(ClientError::Validation(BAD_CREDENTIALS.to_string())),
        }
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<LoginResponse> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(&request.username) {
            return Err(ClientError::Validation(
                r#"{"username":["A user with that username already exists."]}"#.to_string(),
            ));
        }
        let mut identity = Identity::new(accounts.len() as i64 + 100, &request.username)
            .with_roles([RoleName::BasicUser]);
        identity.email = request.email.clone();
        accounts.insert(
            request.username.clone(),
            (request.password.clone(), identity.clone()),
        );
        Ok(LoginResponse {
            user: identity,
            token: Self::token_for(&request.username),
        })
    }

    async fn current_user(&self, token: &str) -> ClientResult<Identity> {
        self.identity_for_token(token)
    }

    async fn update_current_user(
        &self,
        token: &str,
        update: &IdentityUpdate,
    ) -> ClientResult<Identity> {
        let mut identity = self.identity_for_token(token)?;
        if let Some(body) = self.update_rejection.lock().unwrap().clone() {
            return Err(ClientError::Validation(body));
        }
        if let Some(email) = &update.email {
            identity.email = email.clone();
        }
        if let Some(first_name) = &update.first_name {
            identity.first_name = first_name.clone();
        }
        let identifier = identity.username.clone();
        if let Some((_, stored)) = self.accounts.lock().unwrap().get_mut(&identifier) {
            *stored = identity.clone();
        }
        Ok(identity)
    }
}

/// Store whose writes always fail
struct ReadOnlyStore;

impl CredentialStore for ReadOnlyStore {
    fn load(&self) -> Option<StoredCredential> {
        None
    }

    fn save(&self, _credential: &StoredCredential) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        )))
    }

    fn clear(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

fn holmes() -> Identity {
    Identity::new(1, "holmes").with_roles([RoleName::Detective])
}

fn watson() -> Identity {
    Identity::new(2, "watson").with_roles([RoleName::BasicUser])
}

fn service() -> MockService {
    MockService::default()
        .with_account("holmes", "baker221b", holmes())
        .with_account("watson", "afghanistan", watson())
}

fn gateway(service: MockService) -> AuthGateway<MockService, MemoryCredentialStore> {
    AuthGateway::new(service, MemoryCredentialStore::new(), SessionStore::new())
}

// ========== Login / logout ==========

#[tokio::test]
async fn test_login_sets_session_and_storage() {
    let gateway = gateway(service());

    let session = gateway.login("holmes", "baker221b").await.unwrap();
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("token-holmes"));
    assert!(!session.is_loading());

    let stored = gateway.storage().load().unwrap();
    assert_eq!(stored.token, "token-holmes");
    assert_eq!(stored.user, holmes());

    let snapshot = gateway.session().snapshot();
    assert!(Permissions::new(&snapshot).is_detective());
    assert!(Permissions::new(&snapshot).can_use_detective_board());
}

#[tokio::test]
async fn test_failed_login_propagates_error_and_keeps_session() {
    let gateway = gateway(service());

    let err = gateway.login("holmes", "wrong").await.unwrap_err();
    match err {
        ClientError::Validation(body) => assert_eq!(body, BAD_CREDENTIALS),
        other => panic!("unexpected error: {other:?}"),
    }

    let session = gateway.session().snapshot();
    assert!(!session.is_authenticated());
    assert!(!session.is_loading());
    assert_eq!(session.error(), Some(BAD_CREDENTIALS));
    assert!(gateway.storage().load().is_none());
}

#[tokio::test]
async fn test_failed_login_keeps_existing_session() {
    let gateway = gateway(service());
    gateway.login("holmes", "baker221b").await.unwrap();

    assert!(gateway.login("watson", "wrong").await.is_err());

    let session = gateway.session().snapshot();
    assert!(session.is_authenticated());
    assert_eq!(session.identity().map(|u| u.id), Some(1));
}

#[tokio::test]
async fn test_logout_clears_session_storage_and_permissions() {
    let gateway = gateway(service());
    gateway.login("holmes", "baker221b").await.unwrap();

    gateway.logout();

    let session = gateway.session().snapshot();
    assert!(!session.is_authenticated());
    assert!(session.identity().is_none());
    assert!(session.token().is_none());
    assert!(gateway.storage().load().is_none());

    let permissions = Permissions::new(&session);
    assert!(!permissions.is_detective());
    assert!(!permissions.has_role(RoleName::Detective));
    assert_eq!(permissions.capabilities(), vec![Capability::ViewMostWanted]);
}

#[tokio::test]
async fn test_logout_clears_failed_login_message() {
    let gateway = gateway(service());
    assert!(gateway.login("holmes", "wrong").await.is_err());
    assert!(gateway.session().snapshot().error().is_some());

    gateway.logout();
    assert!(gateway.session().snapshot().error().is_none());
}

#[tokio::test]
async fn test_storage_write_failure_does_not_fail_login() {
    let gateway = AuthGateway::new(service(), ReadOnlyStore, SessionStore::new());

    let session = gateway.login("holmes", "baker221b").await.unwrap();
    assert!(session.is_authenticated());
    assert!(session.error().is_none());
    assert!(gateway.storage().load().is_none());
}

#[tokio::test]
async fn test_logout_when_signed_out_is_noop() {
    let gateway = gateway(service());
    gateway.logout();
    assert!(!gateway.session().is_authenticated());
}

#[tokio::test]
async fn test_register_signs_in() {
    let gateway = gateway(service());
    let request = RegisterRequest {
        username: "hudson".into(),
        email: "hudson@example.com".into(),
        phone_number: "02072243688".into(),
        national_id: "12345678".into(),
        first_name: "Martha".into(),
        last_name: "Hudson".into(),
        password: "tea".into(),
        password_confirm: "tea".into(),
    };

    let session = gateway.register(&request).await.unwrap();
    assert!(session.is_authenticated());
    assert_eq!(session.identity().map(|u| u.username.as_str()), Some("hudson"));
    assert!(Permissions::new(&session).is_basic_user());
    assert_eq!(gateway.storage().load().map(|c| c.token), Some("token-hudson".into()));

    // second registration with the same username is rejected verbatim
    gateway.logout();
    let err = gateway.register(&request).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(body) if body.contains("already exists")));
    assert!(!gateway.session().is_authenticated());
}

// ========== Hydration ==========

#[tokio::test]
async fn test_hydrate_from_file_storage() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileCredentialStore::new(dir.path());
    storage
        .save(&StoredCredential::new("token-holmes", holmes()))
        .unwrap();

    let gateway = AuthGateway::new(service(), storage, SessionStore::new());
    assert!(gateway.hydrate());

    let session = gateway.session().snapshot();
    assert!(session.is_authenticated());
    assert_eq!(session.identity(), Some(&holmes()));

    // already populated
    assert!(!gateway.hydrate());
}

#[tokio::test]
async fn test_hydrate_with_corrupt_storage_starts_signed_out() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileCredentialStore::new(dir.path());
    std::fs::write(storage.path(), r#"{"token": 42"#).unwrap();

    let gateway = AuthGateway::new(service(), storage, SessionStore::new());
    assert!(!gateway.hydrate());
    assert!(!gateway.session().is_authenticated());
}

#[tokio::test]
async fn test_login_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let gateway = AuthGateway::new(
            service(),
            FileCredentialStore::new(dir.path()),
            SessionStore::new(),
        );
        gateway.login("watson", "afghanistan").await.unwrap();
    }

    let gateway = AuthGateway::new(
        service(),
        FileCredentialStore::new(dir.path()),
        SessionStore::new(),
    );
    assert!(gateway.hydrate());
    assert_eq!(
        gateway.session().snapshot().token(),
        Some("token-watson")
    );
}

// ========== Current user ==========

#[tokio::test]
async fn test_update_current_user_keeps_token() {
    let gateway = gateway(service());
    gateway.login("holmes", "baker221b").await.unwrap();

    let update = IdentityUpdate {
        email: Some("sherlock@221b.example".into()),
        ..Default::default()
    };
    let identity = gateway.update_current_user(&update).await.unwrap();
    assert_eq!(identity.email, "sherlock@221b.example");

    let session = gateway.session().snapshot();
    assert_eq!(session.token(), Some("token-holmes"));
    assert_eq!(
        session.identity().map(|u| u.email.as_str()),
        Some("sherlock@221b.example")
    );
    let stored = gateway.storage().load().unwrap();
    assert_eq!(stored.user.email, "sherlock@221b.example");
    assert_eq!(stored.token, "token-holmes");
}

#[tokio::test]
async fn test_rejected_update_keeps_identity_and_storage() {
    let body = r#"{"email":["Enter a valid email address."]}"#;
    let service = service();
    *service.update_rejection.lock().unwrap() = Some(body.to_string());
    let gateway = gateway(service);
    gateway.login("holmes", "baker221b").await.unwrap();
    let stored_before = gateway.storage().load();

    let update = IdentityUpdate {
        email: Some("not-an-email".into()),
        ..Default::default()
    };
    let err = gateway.update_current_user(&update).await.unwrap_err();
    assert!(matches!(&err, ClientError::Validation(b) if b == body));

    let session = gateway.session().snapshot();
    assert!(session.is_authenticated());
    assert_eq!(session.identity(), Some(&holmes()));
    assert_eq!(session.token(), Some("token-holmes"));
    assert_eq!(session.error(), Some(body));
    assert_eq!(gateway.storage().load(), stored_before);
}

#[tokio::test]
async fn test_current_user_calls_require_session() {
    let gateway = gateway(service());
    let err = gateway.refresh_current_user().await.unwrap_err();
    assert!(matches!(err, ClientError::NotAuthenticated));
}

#[tokio::test]
async fn test_rejected_token_clears_session() {
    let service = service();
    service
        .revoked
        .lock()
        .unwrap()
        .insert("token-holmes".to_string());
    let gateway = AuthGateway::new(
        service,
        MemoryCredentialStore::with_credential(StoredCredential::new("token-holmes", holmes())),
        SessionStore::new(),
    );
    assert!(gateway.hydrate());

    let err = gateway.refresh_current_user().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!gateway.session().is_authenticated());
    assert!(gateway.storage().load().is_none());
}

// ========== Overlapping calls ==========

#[tokio::test]
async fn test_later_login_wins() {
    let notify = Arc::new(Notify::new());
    let gateway = gateway(service().hold_login("holmes", notify.clone()));

    let (first, second) = tokio::join!(gateway.login("holmes", "baker221b"), async {
        let result = gateway.login("watson", "afghanistan").await;
        notify.notify_one();
        result
    });

    assert!(matches!(first, Err(ClientError::Superseded)));
    assert!(second.is_ok());

    let session = gateway.session().snapshot();
    assert_eq!(session.identity().map(|u| u.username.as_str()), Some("watson"));
    assert!(!session.is_loading());
    assert_eq!(gateway.storage().load().map(|c| c.token), Some("token-watson".into()));
}

#[tokio::test]
async fn test_logout_during_login_wins() {
    let notify = Arc::new(Notify::new());
    let gateway = gateway(service().hold_login("holmes", notify.clone()));

    let (login, ()) = tokio::join!(gateway.login("holmes", "baker221b"), async {
        gateway.logout();
        notify.notify_one();
    });

    assert!(matches!(login, Err(ClientError::Superseded)));
    assert!(!gateway.session().is_authenticated());
    assert!(gateway.storage().load().is_none());
}

#[tokio::test]
async fn test_subscriber_sees_login() {
    let gateway = gateway(service());
    let mut watcher = gateway.session().subscribe();
    assert!(!watcher.current().is_authenticated());

    gateway.login("holmes", "baker221b").await.unwrap();

    let session = watcher.changed().await.unwrap();
    assert!(session.is_authenticated());
}
