use tracing::{info, instrument, warn};

use crate::auth::dto::{AuthUserId, UserDetailsResponse, UserProfile};
use crate::auth::password::StoredCredential;
use crate::auth::repo::{self, UserId};
use crate::error::Error;
use crate::store::DataStore;
use crate::validation::{is_valid_email, secured_password, valid_name};

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 20;
const PASSWORD_MIN: usize = 8;

/// Registers a new user. Validation runs in full before any mutation; the
/// first failing rule wins.
#[instrument(skip(store, password))]
pub fn register(
    store: &mut DataStore,
    email: &str,
    password: &str,
    name_first: &str,
    name_last: &str,
) -> Result<AuthUserId, Error> {
    if repo::find_by_email(store, email).is_some() {
        warn!(email, "register: email already registered");
        return Err(Error::EmailInUse);
    }
    if !is_valid_email(email) {
        warn!(email, "register: invalid email");
        return Err(Error::InvalidEmail);
    }
    if !valid_name(name_first) {
        warn!("register: nameFirst has invalid characters");
        return Err(Error::InvalidNameFirst);
    }
    let first_len = name_first.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&first_len) {
        warn!(first_len, "register: nameFirst length out of range");
        return Err(Error::NameFirstLength);
    }
    if !valid_name(name_last) {
        warn!("register: nameLast has invalid characters");
        return Err(Error::InvalidNameLast);
    }
    let last_len = name_last.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&last_len) {
        warn!(last_len, "register: nameLast length out of range");
        return Err(Error::NameLastLength);
    }
    if password.chars().count() < PASSWORD_MIN {
        warn!("register: password too short");
        return Err(Error::PasswordTooShort);
    }
    if !secured_password(password) {
        warn!("register: password missing a letter or a number");
        return Err(Error::PasswordTooWeak);
    }

    let auth_user_id = repo::create(
        store,
        email,
        StoredCredential::plaintext(password),
        name_first,
        name_last,
    );
    info!(auth_user_id = auth_user_id.0, email, "user registered");
    Ok(AuthUserId { auth_user_id })
}

/// Attempts a login. A wrong password counts against the user's failure
/// streak; a match resets it and bumps the success counter.
#[instrument(skip(store, password))]
pub fn login(store: &mut DataStore, email: &str, password: &str) -> Result<AuthUserId, Error> {
    let user = match repo::find_by_email_mut(store, email) {
        Some(user) => user,
        None => {
            warn!(email, "login: unknown email");
            return Err(Error::UnknownEmail);
        }
    };

    if !user.password.verify(password) {
        user.num_failed_passwords_since_last_login += 1;
        warn!(
            auth_user_id = user.auth_user_id.0,
            failed = user.num_failed_passwords_since_last_login,
            "login: incorrect password"
        );
        return Err(Error::IncorrectPassword);
    }

    user.num_failed_passwords_since_last_login = 0;
    user.num_successful_logins += 1;
    info!(auth_user_id = user.auth_user_id.0, "user logged in");
    Ok(AuthUserId {
        auth_user_id: user.auth_user_id,
    })
}

/// Read-only details for one user.
#[instrument(skip(store))]
pub fn user_details(store: &DataStore, auth_user_id: UserId) -> Result<UserDetailsResponse, Error> {
    let user = repo::find_by_id(store, auth_user_id).ok_or(Error::UnknownUser)?;
    Ok(UserDetailsResponse {
        user: UserProfile {
            user_id: user.auth_user_id,
            name: format!("{} {}", user.name_first, user.name_last),
            email: user.email.clone(),
            num_successful_logins: user.num_successful_logins,
            num_failed_passwords_since_last_login: user.num_failed_passwords_since_last_login,
        },
    })
}
