use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Stored form of a user's credential. Comparison and replacement go through
/// this type so the scheme can change without touching the auth control flow;
/// registration uses [`StoredCredential::plaintext`] to match the platform's
/// historical behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoredCredential {
    /// Verbatim secret, compared with string equality.
    Plaintext(String),
    /// Argon2id PHC string.
    Argon2(String),
}

impl StoredCredential {
    pub fn plaintext(secret: &str) -> Self {
        Self::Plaintext(secret.to_owned())
    }

    pub fn argon2(secret: &str) -> anyhow::Result<Self> {
        Ok(Self::Argon2(hash_password(secret)?))
    }

    /// True iff `candidate` matches the stored credential. A malformed stored
    /// hash never matches.
    pub fn verify(&self, candidate: &str) -> bool {
        match self {
            Self::Plaintext(secret) => secret == candidate,
            Self::Argon2(phc) => verify_password(candidate, phc).unwrap_or(false),
        }
    }

    /// Replaces the secret, re-deriving under the current scheme.
    pub fn set(&mut self, new_secret: &str) -> anyhow::Result<()> {
        *self = match self {
            Self::Plaintext(_) => Self::plaintext(new_secret),
            Self::Argon2(_) => Self::argon2(new_secret)?,
        };
        Ok(())
    }
}

fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}
