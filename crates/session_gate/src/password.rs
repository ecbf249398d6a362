//! Client-side new-password policy. Validation failures block submission
//! before any network call; the backend re-validates on its side.

use thiserror::Error;

/// Default minimum length for a new password. Deployments override this via
/// frontend configuration.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("New password is required.")]
    Required,
    #[error("Password must be at least {0} characters.")]
    TooShort(usize),
    #[error("Passwords do not match.")]
    Mismatch,
}

impl PasswordPolicy {
    /// Validates a new password and its confirmation. A mismatch blocks
    /// submission outright, it is not a warning.
    pub fn validate_new(&self, new_password: &str, confirm_password: &str) -> Result<(), PasswordError> {
        if new_password.is_empty() {
            return Err(PasswordError::Required);
        }
        if new_password.chars().count() < self.min_length {
            return Err(PasswordError::TooShort(self.min_length));
        }
        if new_password != confirm_password {
            return Err(PasswordError::Mismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{PasswordError, PasswordPolicy};

    #[test]
    fn accepts_matching_password_of_policy_length() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.validate_new("rotated-pw", "rotated-pw"), Ok(()));
    }

    #[test]
    fn rejects_short_password_before_checking_confirmation() {
        let policy = PasswordPolicy::default();
        assert_eq!(
            policy.validate_new("short", "different"),
            Err(PasswordError::TooShort(8))
        );
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        let policy = PasswordPolicy::default();
        assert_eq!(
            policy.validate_new("rotated-pw", "rotated-pW"),
            Err(PasswordError::Mismatch)
        );
    }

    #[test]
    fn rejects_empty_password() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.validate_new("", ""), Err(PasswordError::Required));
    }

    #[test]
    fn min_length_is_configurable() {
        let policy = PasswordPolicy { min_length: 6 };
        assert_eq!(policy.validate_new("sixsix", "sixsix"), Ok(()));
        assert_eq!(
            policy.validate_new("five5", "five5"),
            Err(PasswordError::TooShort(6))
        );
    }
}
