//! Day selection for reviewing the journal. The cursor can walk back through
//! history but never past the local today, which keeps the "historical days
//! are read-only" rule meaningful.

use chrono::NaiveDate;

use crate::db::keys;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCursor {
    selected: NaiveDate,
}

impl DayCursor {
    /// Cursor on the local today.
    pub fn new() -> Self {
        Self {
            selected: keys::local_today(),
        }
    }

    pub fn at(date: NaiveDate) -> Self {
        Self { selected: date }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected
    }

    /// Checked against the local calendar date at call time, so a cursor
    /// held open across midnight stops counting as today.
    pub fn is_today(&self) -> bool {
        self.selected == keys::local_today()
    }

    pub fn previous_day(&mut self) {
        self.selected = self.selected.pred_opt().unwrap_or(self.selected);
    }

    /// Step forward one day, refusing to pass the local today.
    pub fn next_day(&mut self) {
        if let Some(next) = self.selected.succ_opt() {
            if next <= keys::local_today() {
                self.selected = next;
            }
        }
    }
}

impl Default for DayCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor_is_today() {
        let cursor = DayCursor::new();
        assert!(cursor.is_today());
        assert_eq!(cursor.selected_date(), keys::local_today());
    }

    #[test]
    fn test_previous_then_next_round_trips() {
        let mut cursor = DayCursor::new();
        let today = cursor.selected_date();

        cursor.previous_day();
        assert!(!cursor.is_today());
        assert_eq!(cursor.selected_date(), today.pred_opt().unwrap());

        cursor.next_day();
        assert!(cursor.is_today());
    }

    #[test]
    fn test_next_day_never_passes_today() {
        let mut cursor = DayCursor::new();
        let today = cursor.selected_date();

        cursor.next_day();
        cursor.next_day();
        assert_eq!(cursor.selected_date(), today);
    }

    #[test]
    fn test_historical_cursor_is_not_today() {
        let cursor = DayCursor::at(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert!(!cursor.is_today());
    }
}
