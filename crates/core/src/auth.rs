//! Admin access check.
//!
//! One shared credential compared by literal string equality. There is no
//! hashing, rate limiting, or lockout; a wrong password surfaces as an
//! error flag on the login view and nothing else.

/// The back-office credential, with its long-standing default.
#[derive(Debug, Clone)]
pub struct AdminAccess {
    password: String,
}

impl AdminAccess {
    pub fn new(password: &str) -> Self {
        Self {
            password: password.to_string(),
        }
    }

    /// Literal comparison against the configured credential.
    pub fn verify(&self, attempt: &str) -> bool {
        attempt == self.password
    }
}

impl Default for AdminAccess {
    fn default() -> Self {
        Self::new("790922")
    }
}
