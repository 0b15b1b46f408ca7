use serde::Serialize;

use crate::auth::repo::UserId;

/// Response returned after register or login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUserId {
    pub auth_user_id: UserId,
}

/// Public view of a user, nested inside [`UserDetailsResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: UserId,
    /// First and last name joined by a single space.
    pub name: String,
    pub email: String,
    pub num_successful_logins: u32,
    pub num_failed_passwords_since_last_login: u32,
}

/// Response returned by user details lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDetailsResponse {
    pub user: UserProfile,
}
