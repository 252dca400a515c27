use std::sync::Arc;

use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::access_code::{is_valid_code, UsedAccessCode};
use crate::models::domain::User;
use crate::models::dto::LoginRequest;
use crate::repositories::{AccessCodeRepository, SessionRepository};

/// The access gate. Owns the current session; everything else reads it
/// through `current_user`.
pub struct AuthService {
    sessions: Arc<dyn SessionRepository>,
    used_codes: Arc<dyn AccessCodeRepository>,
    current_user: Option<User>,
}

impl AuthService {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        used_codes: Arc<dyn AccessCodeRepository>,
    ) -> Self {
        Self {
            sessions,
            used_codes,
            current_user: None,
        }
    }

    /// Reloads a persisted session, if any. Called once at startup; a
    /// malformed stored session reads as absent.
    pub fn restore_session(&mut self) -> Option<&User> {
        self.current_user = self.sessions.load();
        if let Some(user) = &self.current_user {
            log::info!("restored session for '{}'", user.username);
        }
        self.current_user.as_ref()
    }

    /// Validates the access code against the allowlist and its binding
    /// history, then materializes a fresh session.
    ///
    /// The submitted password is never checked: no credential store exists,
    /// the access code is the whole gate.
    pub fn login(&mut self, request: &LoginRequest) -> AppResult<User> {
        request.validate()?;

        if !is_valid_code(&request.access_code) {
            return Err(AppError::InvalidAccessCode);
        }

        if let Some(existing) = self.used_codes.find_by_code(&request.access_code) {
            if existing.email != request.email {
                return Err(AppError::AccessCodeConflict);
            }
        }

        // Append-only, even when an identical binding already exists.
        self.used_codes
            .record(UsedAccessCode::new(&request.access_code, &request.email))?;

        let user = User::new(&request.username, &request.email, &request.access_code);
        self.sessions.save(&user)?;
        log::info!("user '{}' logged in", user.username);

        self.current_user = Some(user.clone());
        Ok(user)
    }

    /// Clears the persisted session. Used-code bindings survive, so the same
    /// email can log back in with its code without conflict.
    pub fn logout(&mut self) -> AppResult<()> {
        self.sessions.clear()?;
        if let Some(user) = self.current_user.take() {
            log::info!("user '{}' logged out", user.username);
        }
        Ok(())
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{LocalAccessCodeRepository, LocalSessionRepository};
    use crate::storage::{KeyValueStore, MemoryStore, MockKeyValueStore};

    fn service_over(store: Arc<MemoryStore>) -> AuthService {
        AuthService::new(
            Arc::new(LocalSessionRepository::new(store.clone())),
            Arc::new(LocalAccessCodeRepository::new(store)),
        )
    }

    fn service() -> AuthService {
        service_over(Arc::new(MemoryStore::new()))
    }

    fn login_request(email: &str, code: &str) -> LoginRequest {
        LoginRequest::new(email, "student", "whatever", code)
    }

    #[test]
    fn login_rejects_codes_outside_the_allowlist() {
        let mut auth = service();

        let err = auth
            .login(&login_request("a@x.com", "EDU-0000-0000"))
            .unwrap_err();

        assert_eq!(err.error_code(), "INVALID_ACCESS_CODE");
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn login_rejects_malformed_email() {
        let mut auth = service();

        let err = auth
            .login(&login_request("not-an-email", "EDU-7K9D-2X3F"))
            .unwrap_err();

        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn login_accepts_allowlisted_code_case_insensitively() {
        let mut auth = service();

        let user = auth
            .login(&login_request("a@x.com", "edu-7k9d-2x3f"))
            .unwrap();

        assert!(auth.is_authenticated());
        assert_eq!(user.email, "a@x.com");
        // The code is stored as submitted, not normalized.
        assert_eq!(user.access_code, "edu-7k9d-2x3f");
    }

    #[test]
    fn second_email_on_a_bound_code_conflicts() {
        let mut auth = service();

        auth.login(&login_request("a@x.com", "edu-7k9d-2x3f"))
            .unwrap();
        let err = auth
            .login(&login_request("b@x.com", "EDU-7K9D-2X3F"))
            .unwrap_err();

        assert_eq!(err.error_code(), "ACCESS_CODE_CONFLICT");
    }

    #[test]
    fn same_email_reuses_its_code_and_appends_duplicate_bindings() {
        let store = Arc::new(MemoryStore::new());
        let bindings = LocalAccessCodeRepository::new(store.clone());
        let mut auth = service_over(store);

        auth.login(&login_request("a@x.com", "EDU-7K9D-2X3F"))
            .unwrap();
        auth.login(&login_request("a@x.com", "EDU-7K9D-2X3F"))
            .unwrap();

        assert!(auth.is_authenticated());
        assert_eq!(bindings.all().len(), 2);
    }

    #[test]
    fn logout_clears_session_but_keeps_bindings() {
        let store = Arc::new(MemoryStore::new());
        let bindings = LocalAccessCodeRepository::new(store.clone());
        let mut auth = service_over(store.clone());

        auth.login(&login_request("a@x.com", "EDU-7K9D-2X3F"))
            .unwrap();
        auth.logout().unwrap();

        assert!(!auth.is_authenticated());
        assert_eq!(store.get("user"), None);
        assert_eq!(bindings.all().len(), 1);

        // Re-login with the same email succeeds after logout.
        assert!(auth.login(&login_request("a@x.com", "EDU-7K9D-2X3F")).is_ok());
    }

    #[test]
    fn restore_session_round_trip() {
        let store = Arc::new(MemoryStore::new());
        let mut auth = service_over(store.clone());
        let user = auth
            .login(&login_request("a@x.com", "EDU-7K9D-2X3F"))
            .unwrap();

        // Simulated reload: a fresh gate over the same store.
        let mut restored = service_over(store);
        assert!(!restored.is_authenticated());
        assert_eq!(restored.restore_session(), Some(&user));
        assert!(restored.is_authenticated());
    }

    #[test]
    fn failing_store_write_surfaces_as_storage_error() {
        let mut store = MockKeyValueStore::new();
        store.expect_get().returning(|_| None);
        store
            .expect_set()
            .returning(|_, _| Err(AppError::Storage("disk full".into())));

        let store: Arc<dyn KeyValueStore> = Arc::new(store);
        let mut auth = AuthService::new(
            Arc::new(LocalSessionRepository::new(store.clone())),
            Arc::new(LocalAccessCodeRepository::new(store)),
        );

        let err = auth
            .login(&login_request("a@x.com", "EDU-7K9D-2X3F"))
            .unwrap_err();

        assert_eq!(err.error_code(), "STORAGE_ERROR");
        assert!(!auth.is_authenticated());
    }
}
