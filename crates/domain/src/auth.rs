//! Access gate — the client-side credential check preceding dashboard
//! display.
//!
//! This is a UI convenience gate, not a security boundary: the expected
//! pair is a cleartext literal embedded in configuration and the comparison
//! runs in client-visible logic. There is no lockout and no rate limiting.

/// The fixed credential pair the gate compares against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Build a credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Marker for an established login, recorded as a session-scoped flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session;

/// Credential mismatch. Handled entirely by the login view; never
/// propagates to the fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Compare the entered credentials against the expected pair.
///
/// The username is trimmed before comparison; the password is compared
/// exactly as typed.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] when either field differs.
pub fn attempt_login(
    expected: &Credentials,
    username: &str,
    password: &str,
) -> Result<Session, AuthError> {
    if username.trim() == expected.username && password == expected.password {
        Ok(Session)
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected() -> Credentials {
        Credentials::new("host", "login123")
    }

    #[test]
    fn should_accept_matching_credentials() {
        assert_eq!(attempt_login(&expected(), "host", "login123"), Ok(Session));
    }

    #[test]
    fn should_trim_username_before_comparing() {
        assert_eq!(attempt_login(&expected(), "  host  ", "login123"), Ok(Session));
    }

    #[test]
    fn should_reject_wrong_password() {
        assert_eq!(
            attempt_login(&expected(), "host", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn should_reject_wrong_username() {
        assert_eq!(
            attempt_login(&expected(), "admin", "login123"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn should_not_trim_password() {
        assert_eq!(
            attempt_login(&expected(), "host", " login123 "),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn should_compare_case_sensitively() {
        assert_eq!(
            attempt_login(&expected(), "Host", "login123"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn should_render_human_readable_error_message() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
    }
}
