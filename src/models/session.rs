use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The authenticated user. At most one session is live at a time; it exists
/// from a successful login/signup until logout or storage clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
}

/// Email -> plaintext password. Plaintext is deliberate: this is a local
/// journal's convenience gate, not a security boundary.
pub type CredentialRegistry = HashMap<String, String>;
