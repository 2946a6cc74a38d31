//! Login form controller.
//!
//! Owns the field values, the submission-in-flight flag and the last error,
//! and drives one login attempt at a time through a [`LoginBackend`].
//!
//! # Submission Lifecycle
//!
//! ```text
//! idle --submit--> loading --backend result--> idle (error shown)
//!                                          \-> navigated away
//! ```
//!
//! A submit while loading is ignored. Every accepted submit bumps a generation
//! counter; a response whose generation is no longer current (after
//! [`LoginController::reset`]) is dropped without touching state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};
use url::Url;

use crate::application::navigator::Navigator;
use crate::domain::error_response::ErrorResponse;
use crate::domain::login::{LoginRequest, OAuthParams};
use crate::infrastructure::backend::LoginBackend;

/// Snapshot of the form as the view renders it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub loading: bool,
    pub error: Option<ErrorResponse>,
}

/// Result of a call to [`LoginController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the credentials; the navigator was sent here.
    Navigated(String),
    /// The backend rejected the attempt; the error is now in state.
    Failed(ErrorResponse),
    /// A submission was already in flight; nothing was sent.
    Ignored,
    /// The response arrived after the submission was abandoned and was dropped.
    Stale,
}

struct Inner {
    form: FormState,
    generation: u64,
}

/// Mediates between user input, the backend and navigation.
pub struct LoginController {
    backend: Arc<dyn LoginBackend>,
    navigator: Arc<dyn Navigator>,
    endpoint: Url,
    params: OAuthParams,
    inner: Mutex<Inner>,
}

impl LoginController {
    /// Creates a controller with empty fields.
    ///
    /// # Arguments
    ///
    /// - `backend` - client used for the login call
    /// - `navigator` - receives the redirect target on success
    /// - `endpoint` - resolved backend login URL
    /// - `params` - OAuth parameters from the page URL
    pub fn new(
        backend: Arc<dyn LoginBackend>,
        navigator: Arc<dyn Navigator>,
        endpoint: Url,
        params: OAuthParams,
    ) -> Self {
        Self {
            backend,
            navigator,
            endpoint,
            params,
            inner: Mutex::new(Inner {
                form: FormState::default(),
                generation: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Updates a field by its input name.
    ///
    /// Unknown names are ignored.
    pub fn change(&self, name: &str, value: &str) {
        let mut inner = self.lock();
        match name {
            "email" => inner.form.email = value.to_string(),
            "password" => inner.form.password = value.to_string(),
            _ => debug!(name, "Ignoring change for unknown field"),
        }
    }

    /// Returns a copy of the current form state.
    pub fn snapshot(&self) -> FormState {
        self.lock().form.clone()
    }

    pub fn params(&self) -> &OAuthParams {
        &self.params
    }

    /// Abandons the in-flight submission, if any.
    ///
    /// Clears the loading flag; the pending response will be reported as
    /// [`SubmitOutcome::Stale`] and leaves state alone.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.form.loading = false;
    }

    /// Submits the current fields to the backend.
    ///
    /// At most one submission runs at a time: while loading, this returns
    /// [`SubmitOutcome::Ignored`] without a network call. The loading flag is
    /// cleared once the backend answers, whatever the result.
    pub async fn submit(&self) -> SubmitOutcome {
        let (generation, request) = {
            let mut inner = self.lock();
            if inner.form.loading {
                debug!("Submission already in flight");
                return SubmitOutcome::Ignored;
            }

            inner.form.loading = true;
            inner.form.error = None;
            inner.generation += 1;

            let request = LoginRequest::new(&self.params, &inner.form.email, &inner.form.password);
            (inner.generation, request)
        };

        let result = self.backend.login(&self.endpoint, &request).await;

        let mut inner = self.lock();
        if inner.generation != generation {
            debug!(generation, current = inner.generation, "Dropping stale login response");
            return SubmitOutcome::Stale;
        }
        inner.form.loading = false;

        match result {
            Ok(success) => {
                drop(inner);
                info!(client_id = ?request.client_id, "Login succeeded");
                self.navigator.replace(&success.redirect_uri);
                SubmitOutcome::Navigated(success.redirect_uri)
            }
            Err(error) => {
                info!(client_id = ?request.client_id, error = %error, "Login failed");
                inner.form.error = Some(error.clone());
                SubmitOutcome::Failed(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::navigator::{CapturedNavigation, MockNavigator};
    use crate::domain::error_response::ErrorKind;
    use crate::domain::login::LoginSuccess;
    use crate::infrastructure::backend::MockLoginBackend;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    fn endpoint() -> Url {
        Url::parse("https://auth.example.com/dev/oauth/login").unwrap()
    }

    fn params() -> OAuthParams {
        OAuthParams {
            client_id: Some("abc".to_string()),
            scope: Some("openid profile".to_string()),
            ..Default::default()
        }
    }

    fn filled(controller: &LoginController) {
        controller.change("email", "a@b.com");
        controller.change("password", "pw123");
    }

    /// Backend that blocks inside `login` until released.
    #[derive(Default)]
    struct GatedBackend {
        calls: AtomicUsize,
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl LoginBackend for GatedBackend {
        async fn login(
            &self,
            _endpoint: &Url,
            _request: &LoginRequest,
        ) -> Result<LoginSuccess, ErrorResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.entered.notify_one();
            self.release.notified().await;
            Ok(LoginSuccess {
                redirect_uri: "https://app/cb?code=1".to_string(),
            })
        }
    }

    #[test]
    fn test_change_updates_fields_by_name() {
        let controller = LoginController::new(
            Arc::new(MockLoginBackend::new()),
            Arc::new(MockNavigator::new()),
            endpoint(),
            params(),
        );

        filled(&controller);
        controller.change("remember_me", "on");

        let state = controller.snapshot();
        assert_eq!(state.email, "a@b.com");
        assert_eq!(state.password, "pw123");
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_submit_success_navigates() {
        let mut backend = MockLoginBackend::new();
        backend
            .expect_login()
            .withf(|endpoint, request| {
                endpoint.path() == "/dev/oauth/login"
                    && request.client_id.as_deref() == Some("abc")
                    && request.scopes == vec!["openid", "profile"]
                    && request.email == "a@b.com"
                    && request.password == "pw123"
            })
            .times(1)
            .returning(|_, _| {
                Ok(LoginSuccess {
                    redirect_uri: "https://app/cb?code=1".to_string(),
                })
            });

        let mut navigator = MockNavigator::new();
        navigator
            .expect_replace()
            .withf(|uri| uri == "https://app/cb?code=1")
            .times(1)
            .return_const(());

        let controller =
            LoginController::new(Arc::new(backend), Arc::new(navigator), endpoint(), params());
        filled(&controller);

        let outcome = controller.submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Navigated("https://app/cb?code=1".to_string())
        );
        let state = controller.snapshot();
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_fields() {
        let mut backend = MockLoginBackend::new();
        backend
            .expect_login()
            .times(1)
            .returning(|_, _| Err(ErrorResponse::server("invalid_credentials")));

        let mut navigator = MockNavigator::new();
        navigator.expect_replace().never();

        let controller =
            LoginController::new(Arc::new(backend), Arc::new(navigator), endpoint(), params());
        filled(&controller);

        let outcome = controller.submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(ErrorResponse::server("invalid_credentials"))
        );
        let state = controller.snapshot();
        assert_eq!(state.email, "a@b.com");
        assert_eq!(state.password, "pw123");
        assert!(!state.loading);
        assert_eq!(state.error.unwrap().message, "invalid_credentials");
    }

    #[tokio::test]
    async fn test_next_submit_clears_previous_error() {
        let mut backend = MockLoginBackend::new();
        let mut seq = mockall::Sequence::new();
        backend
            .expect_login()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(ErrorResponse::transport()));
        backend
            .expect_login()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(ErrorResponse::validation("password", "Wrong password")));

        let controller = LoginController::new(
            Arc::new(backend),
            Arc::new(CapturedNavigation::new()),
            endpoint(),
            params(),
        );
        filled(&controller);

        controller.submit().await;
        assert_eq!(
            controller.snapshot().error.map(|e| e.kind),
            Some(ErrorKind::Transport)
        );

        controller.submit().await;
        let error = controller.snapshot().error.unwrap();
        assert_eq!(error.kind, ErrorKind::Validation);
        assert!(error.is_for_field("password"));
    }

    #[tokio::test]
    async fn test_submit_while_loading_is_ignored() {
        let backend = Arc::new(GatedBackend::default());
        let navigator = Arc::new(CapturedNavigation::new());
        let controller = Arc::new(LoginController::new(
            backend.clone(),
            navigator.clone(),
            endpoint(),
            params(),
        ));
        filled(&controller);

        let first = tokio::spawn({
            let controller = controller.clone();
            async move { controller.submit().await }
        });

        backend.entered.notified().await;
        assert!(controller.snapshot().loading);

        assert_eq!(controller.submit().await, SubmitOutcome::Ignored);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);

        backend.release.notify_one();
        let outcome = first.await.unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Navigated("https://app/cb?code=1".to_string())
        );
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        assert!(!controller.snapshot().loading);
        assert_eq!(navigator.take().as_deref(), Some("https://app/cb?code=1"));
    }

    #[tokio::test]
    async fn test_reset_discards_stale_response() {
        let backend = Arc::new(GatedBackend::default());
        let mut navigator = MockNavigator::new();
        navigator.expect_replace().never();

        let controller = Arc::new(LoginController::new(
            backend.clone(),
            Arc::new(navigator),
            endpoint(),
            params(),
        ));
        filled(&controller);

        let pending = tokio::spawn({
            let controller = controller.clone();
            async move { controller.submit().await }
        });

        backend.entered.notified().await;
        controller.reset();
        assert!(!controller.snapshot().loading);

        backend.release.notify_one();
        assert_eq!(pending.await.unwrap(), SubmitOutcome::Stale);

        let state = controller.snapshot();
        assert!(!state.loading);
        assert!(state.error.is_none());
    }
}
