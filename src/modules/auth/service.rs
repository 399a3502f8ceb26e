use tracing::{info, warn};

use marquee_auth::{AdminAccount, CredentialStore};
use marquee_core::{AppError, verify_password};

use super::model::LoginRequest;
use crate::metrics::{track_login_failure, track_login_success};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthService;

impl AuthService {
    /// Checks a login attempt against the credential store.
    ///
    /// Unknown emails and wrong passwords produce the same 401 so the
    /// response does not reveal which accounts exist.
    pub fn authenticate(
        accounts: &dyn CredentialStore,
        dto: &LoginRequest,
    ) -> Result<AdminAccount, AppError> {
        let Some(account) = accounts.find_by_email(&dto.email) else {
            warn!(email = %dto.email, "Login attempt for unknown account");
            track_login_failure("unknown_account");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !verify_password(&dto.password, &account.password_hash)? {
            warn!(subject_id = account.id, "Login attempt with wrong password");
            track_login_failure("wrong_password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        info!(subject_id = account.id, role = %account.role, "Admin logged in");
        track_login_success(account.role.as_str());
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use marquee_auth::{Role, StaticCredentialStore};
    use marquee_core::hash_password_with_cost;

    fn store() -> StaticCredentialStore {
        StaticCredentialStore::new(vec![AdminAccount {
            id: 42,
            email: "editor@example.com".to_string(),
            name: "Eddie".to_string(),
            role: Role::Editor,
            password_hash: hash_password_with_cost("s3cret-pass", 4).unwrap(),
        }])
        .unwrap()
    }

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_authenticate_success() {
        let account =
            AuthService::authenticate(&store(), &request("editor@example.com", "s3cret-pass"))
                .unwrap();
        assert_eq!(account.id, 42);
        assert_eq!(account.role, Role::Editor);
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let err = AuthService::authenticate(&store(), &request("editor@example.com", "nope"))
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), INVALID_CREDENTIALS);
    }

    #[test]
    fn test_authenticate_unknown_email_same_error() {
        let err = AuthService::authenticate(&store(), &request("ghost@example.com", "s3cret-pass"))
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), INVALID_CREDENTIALS);
    }
}
