use serde::{Deserialize, Serialize};

use crate::auth::password::StoredCredential;
use crate::store::DataStore;

/// Sequentially assigned user identifier, starting at 0. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub auth_user_id: UserId,
    pub name_first: String,
    pub name_last: String,
    pub email: String,
    pub password: StoredCredential,
    pub num_successful_logins: u32,
    pub num_failed_passwords_since_last_login: u32,
}

pub fn find_by_email<'a>(store: &'a DataStore, email: &str) -> Option<&'a User> {
    store.users.iter().find(|user| user.email == email)
}

pub fn find_by_email_mut<'a>(store: &'a mut DataStore, email: &str) -> Option<&'a mut User> {
    store.users.iter_mut().find(|user| user.email == email)
}

pub fn find_by_id(store: &DataStore, auth_user_id: UserId) -> Option<&User> {
    store
        .users
        .iter()
        .find(|user| user.auth_user_id == auth_user_id)
}

/// Appends a new user and advances the id counter. Field validation is the
/// caller's job; this only guards the id invariant.
pub fn create(
    store: &mut DataStore,
    email: &str,
    password: StoredCredential,
    name_first: &str,
    name_last: &str,
) -> UserId {
    let auth_user_id = UserId(store.next_user_id);
    store.next_user_id += 1;
    store.users.push(User {
        auth_user_id,
        name_first: name_first.to_owned(),
        name_last: name_last.to_owned(),
        email: email.to_owned(),
        password,
        num_successful_logins: 1,
        num_failed_passwords_since_last_login: 0,
    });
    auth_user_id
}
