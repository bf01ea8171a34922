//! The append-only per-day trade ledger.
//!
//! Trades are logged interactively one at a time; ids derive from the
//! creation instant plus a UUID, so collisions within a day's list are not a
//! concern. Whether a trade may be logged at all (lock state, historical
//! day) is the caller's check, made before calling [`add_trade`] - the
//! ledger itself never refuses an append.

use chrono::{NaiveDate, Utc};

use crate::db::{Database, keys};
use crate::error::Result;
use crate::models::{NewTrade, Trade, TradeResult};

/// Append a trade to the day's ledger and return the stored record.
///
/// The supplied `profit_or_loss` is normalized against `result`: its
/// magnitude is kept and the sign re-derived (Win positive, Loss negative),
/// so contradictory input cannot put a mis-signed entry in the ledger.
pub fn add_trade(db: &Database, email: &str, date: NaiveDate, input: NewTrade) -> Result<Trade> {
    let id = format!(
        "TRADE-{}-{}",
        Utc::now().timestamp_millis(),
        uuid::Uuid::new_v4()
    );
    let profit_or_loss = match input.result {
        TradeResult::Win => input.profit_or_loss.abs(),
        TradeResult::Loss => -input.profit_or_loss.abs(),
    };

    let trade = Trade {
        id,
        asset: input.asset,
        investment: input.investment,
        direction: input.direction,
        timing: input.timing,
        concept: input.concept,
        result: input.result,
        profit_or_loss,
    };

    let key = keys::trades(email, date);
    let mut ledger: Vec<Trade> = db.get(&key)?;
    ledger.insert(0, trade.clone());
    db.set(&key, &ledger)?;

    Ok(trade)
}

/// The day's trades, most recent first.
pub fn trades(db: &Database, email: &str, date: NaiveDate) -> Result<Vec<Trade>> {
    db.get(&keys::trades(email, date))
}
