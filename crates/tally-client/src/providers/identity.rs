use serde::Serialize;

use crate::auth_form::{AuthForm, AuthFormKind, validate_auth_form};
use crate::providers::tokens::{ProviderResult, SessionSecret};
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub user_id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewAccount<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
    pub secret: SessionSecret,
}

pub trait IdentityProvider {
    fn create_account(&self, account: &NewAccount<'_>) -> ProviderResult<UserProfile>;
    fn create_email_password_session(&self, email: &str, password: &str)
    -> ProviderResult<Session>;
    fn current_user(&self, secret: &SessionSecret) -> ProviderResult<UserProfile>;
    fn delete_session(&self, secret: &SessionSecret) -> ProviderResult<()>;
}

/// Validates the sign-in form, then opens a password session.
pub fn sign_in<P>(provider: &P, form: &AuthForm) -> ClientResult<Session>
where
    P: IdentityProvider + ?Sized,
{
    validate_auth_form(AuthFormKind::SignIn, form)
        .map_err(ClientError::invalid_auth_form)?;
    provider
        .create_email_password_session(&form.email, &form.password)
        .map_err(|error| ClientError::provider_request_failed("create_session", &error.message))
}

/// Validates the sign-up form, creates the account and opens its first session.
pub fn sign_up<P>(provider: &P, form: &AuthForm) -> ClientResult<(UserProfile, Session)>
where
    P: IdentityProvider + ?Sized,
{
    validate_auth_form(AuthFormKind::SignUp, form)
        .map_err(ClientError::invalid_auth_form)?;

    let name = format!(
        "{} {}",
        form.first_name.as_deref().unwrap_or_default(),
        form.last_name.as_deref().unwrap_or_default()
    );
    let user = provider
        .create_account(&NewAccount {
            email: &form.email,
            password: &form.password,
            name,
        })
        .map_err(|error| ClientError::provider_request_failed("create_account", &error.message))?;
    tracing::info!(user_id = %user.user_id, "created identity account");

    let session = provider
        .create_email_password_session(&form.email, &form.password)
        .map_err(|error| ClientError::provider_request_failed("create_session", &error.message))?;
    Ok((user, session))
}

/// Profile for an open session; `None` when the provider does not accept it.
pub fn logged_in_user<P>(
    provider: &P,
    secret: &SessionSecret,
) -> ClientResult<Option<UserProfile>>
where
    P: IdentityProvider + ?Sized,
{
    match provider.current_user(secret) {
        Ok(user) => Ok(Some(user)),
        Err(error) => {
            tracing::debug!(detail = %error.message, "session not accepted");
            Ok(None)
        }
    }
}

pub fn sign_out<P>(provider: &P, secret: &SessionSecret) -> ClientResult<()>
where
    P: IdentityProvider + ?Sized,
{
    provider
        .delete_session(secret)
        .map_err(|error| ClientError::provider_request_failed("delete_session", &error.message))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::{
        IdentityProvider, NewAccount, Session, UserProfile, logged_in_user, sign_in, sign_out,
        sign_up,
    };
    use crate::auth_form::AuthForm;
    use crate::providers::tokens::{ProviderError, ProviderResult, SessionSecret};

    #[derive(Default)]
    struct FakeIdentity {
        calls: RefCell<Vec<String>>,
        reject_sessions: bool,
    }

    impl IdentityProvider for FakeIdentity {
        fn create_account(&self, account: &NewAccount<'_>) -> ProviderResult<UserProfile> {
            self.calls.borrow_mut().push(format!("create_account:{}", account.name));
            Ok(UserProfile {
                user_id: "user_1".to_string(),
                email: account.email.to_string(),
                name: account.name.clone(),
            })
        }

        fn create_email_password_session(
            &self,
            email: &str,
            _password: &str,
        ) -> ProviderResult<Session> {
            self.calls.borrow_mut().push(format!("create_session:{email}"));
            if self.reject_sessions {
                return Err(ProviderError::new("invalid credentials"));
            }
            Ok(Session {
                user_id: "user_1".to_string(),
                secret: SessionSecret::new("secret"),
            })
        }

        fn current_user(&self, secret: &SessionSecret) -> ProviderResult<UserProfile> {
            self.calls.borrow_mut().push("current_user".to_string());
            if self.reject_sessions || secret.expose() != "secret" {
                return Err(ProviderError::new("session expired"));
            }
            Ok(UserProfile {
                user_id: "user_1".to_string(),
                email: "ada@example.com".to_string(),
                name: "Ada Lovelace".to_string(),
            })
        }

        fn delete_session(&self, _secret: &SessionSecret) -> ProviderResult<()> {
            self.calls.borrow_mut().push("delete_session".to_string());
            if self.reject_sessions {
                return Err(ProviderError::new("session expired"));
            }
            Ok(())
        }
    }

    fn sign_up_form() -> AuthForm {
        AuthForm {
            email: "ada@example.com".to_string(),
            password: "correct-horse".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            address1: Some("12 Analytical Row".to_string()),
            city: Some("London".to_string()),
            state: Some("NY".to_string()),
            postal_code: Some("10001".to_string()),
            date_of_birth: Some("1815-12-10".to_string()),
            ssn: Some("1234".to_string()),
        }
    }

    #[test]
    fn sign_up_creates_account_with_full_name_then_session() {
        let provider = FakeIdentity::default();
        let result = sign_up(&provider, &sign_up_form());
        assert!(result.is_ok());
        if let Ok((user, session)) = result {
            assert_eq!(user.name, "Ada Lovelace");
            assert_eq!(session.secret.expose(), "secret");
        }
        assert_eq!(
            *provider.calls.borrow(),
            vec![
                "create_account:Ada Lovelace".to_string(),
                "create_session:ada@example.com".to_string(),
            ]
        );
    }

    #[test]
    fn invalid_form_never_reaches_the_provider() {
        let provider = FakeIdentity::default();
        let form = AuthForm {
            email: "nope".to_string(),
            password: "short".to_string(),
            ..AuthForm::default()
        };
        let result = sign_in(&provider, &form);
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "invalid_auth_form");
        }
        assert!(provider.calls.borrow().is_empty());
    }

    #[test]
    fn rejected_session_is_a_provider_failure() {
        let provider = FakeIdentity {
            reject_sessions: true,
            ..FakeIdentity::default()
        };
        let form = AuthForm {
            email: "ada@example.com".to_string(),
            password: "12345678".to_string(),
            ..AuthForm::default()
        };
        let result = sign_in(&provider, &form);
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "provider_request_failed");
            assert!(error.message.contains("invalid credentials"));
        }
    }

    #[test]
    fn logged_in_user_returns_profile_for_open_session() {
        let provider = FakeIdentity::default();
        let user = logged_in_user(&provider, &SessionSecret::new("secret"));
        assert!(user.is_ok());
        if let Ok(profile) = user {
            assert_eq!(profile.map(|value| value.user_id), Some("user_1".to_string()));
        }
    }

    #[test]
    fn rejected_session_has_no_logged_in_user() {
        let provider = FakeIdentity::default();
        let user = logged_in_user(&provider, &SessionSecret::new("stale"));
        assert!(user.is_ok());
        if let Ok(profile) = user {
            assert!(profile.is_none());
        }
        assert_eq!(*provider.calls.borrow(), vec!["current_user".to_string()]);
    }

    #[test]
    fn sign_out_deletes_the_session() {
        let provider = FakeIdentity::default();
        assert!(sign_out(&provider, &SessionSecret::new("secret")).is_ok());
        assert_eq!(*provider.calls.borrow(), vec!["delete_session".to_string()]);

        let failing = FakeIdentity {
            reject_sessions: true,
            ..FakeIdentity::default()
        };
        let result = sign_out(&failing, &SessionSecret::new("secret"));
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "provider_request_failed");
            assert!(error.message.contains("delete_session"));
        }
    }
}
