use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .ok()
});

const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFormKind {
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address1: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub date_of_birth: Option<String>,
    pub ssn: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy)]
enum LengthRule {
    AtLeast(usize),
    AtMost(usize),
    Between(usize, usize),
}

impl LengthRule {
    fn check(self, value: &str) -> Option<String> {
        let length = value.chars().count();
        match self {
            Self::AtLeast(min) if length < min => Some(format!("must be at least {min} characters")),
            Self::AtMost(max) if length > max => Some(format!("must be at most {max} characters")),
            Self::Between(min, max) if length < min || length > max => {
                if min == max {
                    Some(format!("must be exactly {min} characters"))
                } else {
                    Some(format!("must be between {min} and {max} characters"))
                }
            }
            _ => None,
        }
    }
}

/// Checks every field for `kind` and returns all failures together.
///
/// Sign-in only looks at `email` and `password`; the profile fields are
/// ignored even when present.
pub fn validate_auth_form(kind: AuthFormKind, form: &AuthForm) -> Result<(), Vec<FieldIssue>> {
    let mut issues = Vec::new();

    if !is_email(&form.email) {
        issues.push(issue("email", "must be a valid email address"));
    }
    if let Some(message) = LengthRule::AtLeast(MIN_PASSWORD_CHARS).check(&form.password) {
        issues.push(issue("password", &message));
    }

    if kind == AuthFormKind::SignUp {
        let profile_rules: [(&str, &Option<String>, LengthRule); 8] = [
            ("first_name", &form.first_name, LengthRule::AtLeast(3)),
            ("last_name", &form.last_name, LengthRule::AtLeast(3)),
            ("address1", &form.address1, LengthRule::AtMost(50)),
            ("city", &form.city, LengthRule::AtMost(50)),
            ("state", &form.state, LengthRule::Between(2, 2)),
            ("postal_code", &form.postal_code, LengthRule::Between(3, 6)),
            ("date_of_birth", &form.date_of_birth, LengthRule::AtLeast(3)),
            ("ssn", &form.ssn, LengthRule::AtLeast(3)),
        ];
        for (field, value, rule) in profile_rules {
            match value {
                Some(text) => {
                    if let Some(message) = rule.check(text) {
                        issues.push(issue(field, &message));
                    }
                }
                None => issues.push(issue(field, "is required")),
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

fn is_email(value: &str) -> bool {
    if value.starts_with('.') || value.contains("..") {
        return false;
    }
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}

fn issue(field: &str, message: &str) -> FieldIssue {
    FieldIssue {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthForm, AuthFormKind, validate_auth_form};

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

    fn issue_fields(result: Result<(), Vec<super::FieldIssue>>) -> Vec<String> {
        match result {
            Ok(()) => Vec::new(),
            Err(issues) => issues.into_iter().map(|issue| issue.field).collect(),
        }
    }

    #[test]
    fn complete_sign_up_passes() {
        assert!(validate_auth_form(AuthFormKind::SignUp, &sign_up_form()).is_ok());
    }

    #[test]
    fn sign_in_ignores_profile_fields() {
        let form = AuthForm {
            email: "ada@example.com".to_string(),
            password: "12345678".to_string(),
            state: Some("New York".to_string()),
            ..AuthForm::default()
        };
        assert!(validate_auth_form(AuthFormKind::SignIn, &form).is_ok());
    }

    #[test]
    fn sign_in_rejects_bad_email_and_short_password_together() {
        let form = AuthForm {
            email: "ada@@example".to_string(),
            password: "short".to_string(),
            ..AuthForm::default()
        };
        assert_eq!(
            issue_fields(validate_auth_form(AuthFormKind::SignIn, &form)),
            vec!["email".to_string(), "password".to_string()]
        );
    }

    #[test]
    fn email_shapes() {
        for good in ["a@b.io", "first.last+tag@mail.example.org"] {
            let form = AuthForm {
                email: good.to_string(),
                password: "12345678".to_string(),
                ..AuthForm::default()
            };
            assert!(validate_auth_form(AuthFormKind::SignIn, &form).is_ok(), "{good}");
        }
        for bad in ["", "plain", ".a@b.io", "a..b@c.io", "a@b", "a@.io"] {
            let form = AuthForm {
                email: bad.to_string(),
                password: "12345678".to_string(),
                ..AuthForm::default()
            };
            assert!(validate_auth_form(AuthFormKind::SignIn, &form).is_err(), "{bad}");
        }
    }

    #[test]
    fn sign_up_reports_each_out_of_range_field() {
        let mut form = sign_up_form();
        form.first_name = Some("Al".to_string());
        form.state = Some("NYC".to_string());
        form.postal_code = Some("12".to_string());
        form.city = Some("x".repeat(51));
        form.ssn = None;

        let result = validate_auth_form(AuthFormKind::SignUp, &form);
        assert!(result.is_err());
        if let Err(issues) = result {
            let fields = issues
                .iter()
                .map(|issue| issue.field.as_str())
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["first_name", "city", "state", "postal_code", "ssn"]);
            assert_eq!(issues[2].message, "must be exactly 2 characters");
            assert_eq!(issues[4].message, "is required");
        }
    }
}
