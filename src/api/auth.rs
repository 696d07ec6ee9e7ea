//! Auth Commands
//!
//! Login/register return a token; the role comes from a follow-up probe.

use super::client::Call;
use super::endpoints;
use crate::error::{ApiError, ApiResult};
use crate::models::{Consultancy, LoginRequest, RegisterRequest, Role, TokenResponse};

pub async fn login(username: &str, password: &str) -> ApiResult<TokenResponse> {
    Call::post(endpoints::LOGIN)
        .anonymous()
        .json(&LoginRequest { username, password })?
        .send_json()
        .await
}

pub async fn register(request: &RegisterRequest) -> ApiResult<TokenResponse> {
    Call::post(endpoints::REGISTER)
        .anonymous()
        .json(request)?
        .send_json()
        .await
}

/// Profile failures that mean "no consultancy here" rather than a broken login.
fn needs_admin_check(err: &ApiError) -> bool {
    matches!(err, ApiError::Server { status: 400 | 404, .. })
}

/// Work out the role of the account whose token is now stored.
///
/// The profile endpoint answers for consultancy accounts only. Staff
/// accounts without a consultancy get a 400 there, so those are confirmed
/// by probing an admin-only listing instead.
pub async fn resolve_role() -> ApiResult<Role> {
    match Call::get(endpoints::PROFILE).send_json::<Consultancy>().await {
        Ok(profile) => Ok(profile.role()),
        Err(e) if needs_admin_check(&e) => {
            log::debug!("profile refused ({}), probing admin access", e);
            Call::get(endpoints::ADMIN_CONSULTANCIES)
                .send_unit()
                .await
                .map(|_| Role::Admin)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_check_only_for_missing_profile() {
        let missing = |status| ApiError::Server { status, message: "User is not a consultancy".into() };
        assert!(needs_admin_check(&missing(400)));
        assert!(needs_admin_check(&missing(404)));
        assert!(!needs_admin_check(&missing(403)));
        assert!(!needs_admin_check(&missing(500)));
        assert!(!needs_admin_check(&ApiError::Unauthorized));
        assert!(!needs_admin_check(&ApiError::Timeout));
    }
}
