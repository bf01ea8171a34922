use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeResult {
    Win,
    Loss,
}

/// One logged trade. Ledger entries are append-only: there is no edit or
/// delete operation. `profit_or_loss` always carries the sign implied by
/// `result` (Win >= 0, Loss <= 0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub asset: String,
    pub investment: f64,
    pub direction: TradeDirection,
    pub timing: String,
    pub concept: String,
    pub result: TradeResult,
    pub profit_or_loss: f64,
}

/// Caller-supplied fields of a trade. `profit_or_loss` may arrive with either
/// sign; `add_trade` takes its magnitude and re-applies the sign from
/// `result`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrade {
    pub asset: String,
    pub investment: f64,
    pub direction: TradeDirection,
    pub timing: String,
    pub concept: String,
    pub result: TradeResult,
    pub profit_or_loss: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enums_serialize_as_display_names() {
        assert_eq!(
            serde_json::to_string(&TradeDirection::Up).unwrap(),
            "\"Up\""
        );
        assert_eq!(
            serde_json::to_string(&TradeResult::Loss).unwrap(),
            "\"Loss\""
        );
    }

    #[test]
    fn test_trade_round_trips_through_json() {
        let trade = Trade {
            id: "TRADE-1-abc".into(),
            asset: "EUR/USD".into(),
            investment: 1_000.0,
            direction: TradeDirection::Down,
            timing: "5 Mins".into(),
            concept: "Support bounce".into(),
            result: TradeResult::Win,
            profit_or_loss: 850.0,
        };

        let json = serde_json::to_string(&trade).unwrap();
        assert!(json.contains("\"profitOrLoss\":850.0"));

        let back: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trade);
    }
}
