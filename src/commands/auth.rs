//! Session and credential handling over the keyed store.
//!
//! This is a local journal's convenience gate: passwords are compared as
//! received, with no hashing, normalization, rate limiting or lockout.

use crate::db::{Database, keys};
use crate::error::{JournalError, Result};
use crate::models::{CredentialRegistry, Session};

/// Register a new user and open a session for them. Fails with
/// [`JournalError::AlreadyExists`] if the email is already registered;
/// on failure neither the registry nor any existing session changes.
pub fn signup(db: &Database, email: &str, password: &str) -> Result<Session> {
    let mut registry: CredentialRegistry = db.get(keys::USERS_KEY)?;
    if registry.contains_key(email) {
        return Err(JournalError::AlreadyExists);
    }

    registry.insert(email.to_string(), password.to_string());
    db.set(keys::USERS_KEY, &registry)?;

    let session = Session {
        email: email.to_string(),
    };
    db.set(keys::SESSION_KEY, &session)?;
    Ok(session)
}

/// Open a session for a registered user. Unknown email and wrong password
/// are indistinguishable to the caller.
pub fn login(db: &Database, email: &str, password: &str) -> Result<Session> {
    let registry: CredentialRegistry = db.get(keys::USERS_KEY)?;
    match registry.get(email) {
        Some(stored) if stored == password => {
            let session = Session {
                email: email.to_string(),
            };
            db.set(keys::SESSION_KEY, &session)?;
            Ok(session)
        }
        _ => Err(JournalError::InvalidCredentials),
    }
}

/// Close the current session. Idempotent when already logged out.
pub fn logout(db: &Database) -> Result<()> {
    db.remove(keys::SESSION_KEY)
}

pub fn current_session(db: &Database) -> Result<Option<Session>> {
    db.get(keys::SESSION_KEY)
}

/// One-shot startup restore of a previously persisted session. A corrupted
/// session record is removed so the next start comes up unauthenticated
/// instead of tripping over it again.
pub fn restore_session(db: &Database) -> Result<Option<Session>> {
    match db.read_raw(keys::SESSION_KEY)? {
        None => Ok(None),
        Some(text) => match serde_json::from_str(&text) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                log::warn!("Discarding corrupted session record: {e}");
                db.remove(keys::SESSION_KEY)?;
                Ok(None)
            }
        },
    }
}
