//! Form submission for sign-in and sign-up
//!
//! A submission is validated first; an invalid form never reaches the
//! network. While a call is in flight the controller reports itself pending
//! and turns further submissions away. On success the session context is
//! overwritten and the user is sent home.

use crate::context::SessionContext;
use crate::navigation::Navigator;
use crate::services::{AuthApiService, AuthError};
use inkwell_core::{AuthConfig, AuthResponse, LoginForm, RegisterForm, User, ValidationErrors};
use std::cell::Cell;
use std::rc::Rc;

/// What a form submission ended in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Rules broken; nothing was sent
    Invalid(ValidationErrors),
    /// Another submission is still in flight; nothing was sent
    Busy,
    /// The call failed; the message carries no detail about why
    Failed(String),
    /// Session stored and navigation triggered
    Succeeded(User),
}

/// Drives the sign-in and sign-up forms
pub struct AuthController {
    context: SessionContext,
    api: AuthApiService,
    navigator: Rc<dyn Navigator>,
    pending: Cell<bool>,
}

/// Clears the pending flag when the submission ends, however it ends
struct PendingGuard<'a>(&'a Cell<bool>);

impl<'a> PendingGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl AuthController {
    pub fn new(context: SessionContext, api: AuthApiService, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            context,
            api,
            navigator,
            pending: Cell::new(false),
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Whether a submission is in flight; the submit control should be disabled
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Submit the sign-in form
    pub async fn submit_login(&self, form: &LoginForm) -> SubmitOutcome {
        let request = match form.validate() {
            Ok(request) => request,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        let Some(_pending) = PendingGuard::acquire(&self.pending) else {
            tracing::debug!("Login submitted while another request is pending");
            return SubmitOutcome::Busy;
        };

        let result = self.api.login(&request).await;
        self.finish(result)
    }

    /// Submit the sign-up form
    pub async fn submit_register(&self, form: &RegisterForm) -> SubmitOutcome {
        let request = match form.validate() {
            Ok(request) => request,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        let Some(_pending) = PendingGuard::acquire(&self.pending) else {
            tracing::debug!("Registration submitted while another request is pending");
            return SubmitOutcome::Busy;
        };

        let result = self.api.register(&request).await;
        self.finish(result)
    }

    fn finish(&self, result: Result<AuthResponse, AuthError>) -> SubmitOutcome {
        match result {
            Ok(response) => {
                self.context.apply(&response);
                tracing::info!(user.uuid = %response.user.uuid, "Authentication successful");
                self.navigator.push(AuthConfig::HOME_PATH);
                SubmitOutcome::Succeeded(response.user)
            }
            Err(e) => SubmitOutcome::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, FrontendConfig};
    use crate::navigation::MockNavigator;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn auth_body() -> serde_json::Value {
        json!({
            "token": {
                "access_token": "abc",
                "refresh_token": "def",
                "expires_in": 3600,
                "token_type": "bearer"
            },
            "user": {"uuid": "1", "email": "a@b.com", "username": "a"}
        })
    }

    fn login_form(password: &str) -> LoginForm {
        LoginForm {
            email: "a@b.com".to_string(),
            password: password.to_string(),
        }
    }

    fn controller(server: &MockServer, navigator: MockNavigator) -> AuthController {
        let context = SessionContext::new();
        let config = FrontendConfig {
            api: ApiConfig {
                base_url: server.uri(),
                timeout_secs: 5,
            },
            ..FrontendConfig::default()
        };
        let client = context.api_client(&config).unwrap();
        AuthController::new(context, AuthApiService::new(client), Rc::new(navigator))
    }

    #[tokio::test]
    async fn test_success_navigates_home() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(auth_body()))
            .expect(1)
            .mount(&server)
            .await;

        let mut navigator = MockNavigator::new();
        navigator
            .expect_push()
            .withf(|path| path.to_string() == "/")
            .times(1)
            .return_const(());

        let controller = controller(&server, navigator);
        let outcome = controller.submit_login(&login_form("password1")).await;

        match outcome {
            SubmitOutcome::Succeeded(user) => assert_eq!(user.uuid, "1"),
            other => panic!("Expected success, got {other:?}"),
        }
        assert!(!controller.is_pending());
        assert!(controller.context().is_authenticated());
    }

    #[tokio::test]
    async fn test_failure_is_generic_and_stays_put() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
            .expect(1)
            .mount(&server)
            .await;

        let mut navigator = MockNavigator::new();
        navigator.expect_push().times(0);

        let controller = controller(&server, navigator);
        let outcome = controller.submit_login(&login_form("password1")).await;

        assert_eq!(outcome, SubmitOutcome::Failed("User login failed!".to_string()));
        assert!(!controller.is_pending());
        assert!(!controller.context().is_authenticated());
        assert!(controller.context().user().is_anonymous());
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(auth_body()))
            .expect(0)
            .mount(&server)
            .await;

        let mut navigator = MockNavigator::new();
        navigator.expect_push().times(0);

        let controller = controller(&server, navigator);
        for password in ["short", "much-too-long-password"] {
            match controller.submit_login(&login_form(password)).await {
                SubmitOutcome::Invalid(errors) => {
                    assert!(errors.message_for("password").is_some());
                }
                other => panic!("Expected validation failure, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_second_submission_while_pending_is_busy() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(auth_body())
                    .set_delay(Duration::from_millis(200)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut navigator = MockNavigator::new();
        navigator.expect_push().times(1).return_const(());

        let controller = controller(&server, navigator);
        let form = login_form("password1");
        let (first, second) = tokio::join!(
            controller.submit_login(&form),
            controller.submit_login(&form)
        );

        assert!(matches!(first, SubmitOutcome::Succeeded(_)));
        assert_eq!(second, SubmitOutcome::Busy);
        assert!(!controller.is_pending());
    }

    #[tokio::test]
    async fn test_register_failure_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut navigator = MockNavigator::new();
        navigator.expect_push().times(0);

        let controller = controller(&server, navigator);
        let outcome = controller
            .submit_register(&RegisterForm {
                username: "reader".to_string(),
                email: "reader@example.com".to_string(),
                password: "password1".to_string(),
            })
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed("User registration failed!".to_string())
        );
    }
}
