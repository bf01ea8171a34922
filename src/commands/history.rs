//! Historical review: per-day summaries across every dated ledger a user has
//! written, newest first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::commands::stats;
use crate::db::{Database, keys};
use crate::error::Result;
use crate::models::Trade;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: NaiveDate,
    pub trades: Vec<Trade>,
    pub total_pl: f64,
    pub win_rate: f64,
}

/// Scan the user's dated ledgers and summarize each day, optionally bounded
/// by an inclusive date range. Days with no trades and keys whose date
/// suffix does not parse are skipped.
pub fn daily_summaries(
    db: &Database,
    email: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Vec<DailySummary>> {
    let prefix = keys::trades_prefix(email);
    let mut summaries = Vec::new();

    for key in db.keys_with_prefix(&prefix)? {
        let Ok(date) = NaiveDate::parse_from_str(&key[prefix.len()..], "%Y-%m-%d") else {
            continue;
        };
        if start.is_some_and(|s| date < s) || end.is_some_and(|e| date > e) {
            continue;
        }

        let trades: Vec<Trade> = db.get(&key)?;
        if trades.is_empty() {
            continue;
        }

        let day = stats::aggregate(&trades);
        summaries.push(DailySummary {
            date,
            trades,
            total_pl: day.total_pl,
            win_rate: day.win_rate,
        });
    }

    summaries.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(summaries)
}
