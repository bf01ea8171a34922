//! Deterministic store-key derivation.
//!
//! Per-day data is namespaced by the owning user's email and a `YYYY-MM-DD`
//! stamp of the LOCAL calendar date. Deriving the stamp from UTC would shift
//! the day boundary by the user's offset, filing evening trades under the
//! wrong day.

use chrono::{Local, NaiveDate};

/// Current session record, a single `Session` or absent.
pub const SESSION_KEY: &str = "user";

/// Credential registry, email -> plaintext password.
pub const USERS_KEY: &str = "users";

pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today according to the local timezone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn trades(email: &str, date: NaiveDate) -> String {
    format!("trades_{}_{}", email, date_stamp(date))
}

/// Prefix covering every dated ledger of one user.
pub fn trades_prefix(email: &str) -> String {
    format!("trades_{email}_")
}

pub fn plan(email: &str, date: NaiveDate) -> String {
    format!("plan_{}_{}", email, date_stamp(date))
}

pub fn monthly_active(email: &str) -> String {
    format!("monthlyPlan_active_{email}")
}

pub fn monthly_history(email: &str) -> String {
    format!("monthlyPlan_history_{email}")
}
