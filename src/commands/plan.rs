//! Daily trading plan persistence, one plan per (user, date).

use chrono::NaiveDate;

use crate::db::{Database, keys};
use crate::error::Result;
use crate::models::TradingPlan;

/// Install the plan for the given day, replacing any existing one whole.
/// Field validation (all inputs positive) happens at the input boundary.
pub fn create_plan(db: &Database, email: &str, date: NaiveDate, plan: &TradingPlan) -> Result<()> {
    db.set(&keys::plan(email, date), plan)
}

pub fn get_plan(db: &Database, email: &str, date: NaiveDate) -> Result<Option<TradingPlan>> {
    db.get(&keys::plan(email, date))
}

/// The "reset" operation: drop the day's plan entirely.
pub fn clear_plan(db: &Database, email: &str, date: NaiveDate) -> Result<()> {
    db.remove(&keys::plan(email, date))
}
