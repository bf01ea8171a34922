//! Monthly compounding plan: a day-by-day capital growth schedule toward a
//! total percentage goal, with an active/history lifecycle per user.

use chrono::Utc;
use uuid::Uuid;

use crate::db::{Database, keys};
use crate::error::Result;
use crate::models::{DailyPlanTarget, MonthlyPlan};

/// Build the day-by-day schedule. The daily rate r solves
/// `(1 + r)^days = 1 + profit_goal_pct/100`, so compounding the per-day
/// targets lands the final ending capital on the total goal (up to float
/// rounding). Callers validate `days >= 1`; handed 0, this returns no
/// targets.
pub fn daily_targets(capital: f64, profit_goal_pct: f64, days: u32) -> Vec<DailyPlanTarget> {
    let daily_growth_rate = (1.0 + profit_goal_pct / 100.0).powf(1.0 / days as f64) - 1.0;

    let mut current_capital = capital;
    let mut targets = Vec::with_capacity(days as usize);
    for day in 1..=days {
        let target_profit = current_capital * daily_growth_rate;
        let ending_capital = current_capital + target_profit;
        targets.push(DailyPlanTarget {
            day,
            starting_capital: current_capital,
            target_profit,
            ending_capital,
            completed: false,
        });
        current_capital = ending_capital;
    }
    targets
}

/// Install a new active plan. Any existing active plan is archived first,
/// unmodified, at the head of the history list.
pub fn create_plan(
    db: &Database,
    email: &str,
    capital: f64,
    profit_goal_pct: f64,
    days: u32,
) -> Result<MonthlyPlan> {
    let active_key = keys::monthly_active(email);
    let history_key = keys::monthly_history(email);

    if let Some(previous) = db.get::<Option<MonthlyPlan>>(&active_key)? {
        let mut history: Vec<MonthlyPlan> = db.get(&history_key)?;
        history.insert(0, previous);
        db.set(&history_key, &history)?;
    }

    let plan = MonthlyPlan {
        id: Uuid::new_v4().to_string(),
        created_at: Utc::now(),
        starting_capital: capital,
        monthly_profit_goal_pct: profit_goal_pct,
        trading_days: days,
        daily_targets: daily_targets(capital, profit_goal_pct, days),
    };
    db.set(&active_key, &plan)?;

    Ok(plan)
}

pub fn active_plan(db: &Database, email: &str) -> Result<Option<MonthlyPlan>> {
    db.get(&keys::monthly_active(email))
}

/// Archived plans, most recently archived first.
pub fn historical_plans(db: &Database, email: &str) -> Result<Vec<MonthlyPlan>> {
    db.get(&keys::monthly_history(email))
}

/// Flip `completed` on one day of the ACTIVE plan. A `plan_id` that does not
/// match the active plan is a silent no-op: archived plans stay frozen.
pub fn toggle_day_completion(db: &Database, email: &str, plan_id: &str, day: u32) -> Result<()> {
    let key = keys::monthly_active(email);
    let Some(mut plan) = db.get::<Option<MonthlyPlan>>(&key)? else {
        return Ok(());
    };
    if plan.id != plan_id {
        return Ok(());
    }

    for target in &mut plan.daily_targets {
        if target.day == day {
            target.completed = !target.completed;
        }
    }
    db.set(&key, &plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().expect("temp dir");
        let db = Database::open(dir.path().join("journal.db")).expect("open database");
        (dir, db)
    }

    #[test]
    fn test_final_capital_hits_the_total_goal() {
        for (capital, goal, days) in [
            (10_000.0, 50.0, 20u32),
            (2_500.0, 10.0, 1),
            (500.0, 200.0, 31),
        ] {
            let targets = daily_targets(capital, goal, days);
            assert_eq!(targets.len(), days as usize);

            let expected = capital * (1.0 + goal / 100.0);
            let last = targets.last().unwrap();
            assert!(
                (last.ending_capital - expected).abs() < 1e-6 * expected,
                "ending capital {} should be ~{}",
                last.ending_capital,
                expected
            );
        }
    }

    #[test]
    fn test_targets_grow_strictly_for_positive_goals() {
        let targets = daily_targets(10_000.0, 50.0, 20);
        for pair in targets.windows(2) {
            assert!(pair[1].starting_capital > pair[0].starting_capital);
            assert!(pair[1].target_profit > pair[0].target_profit);
        }
        // Each day compounds from the previous day's close.
        for pair in targets.windows(2) {
            assert_eq!(pair[1].starting_capital, pair[0].ending_capital);
        }
    }

    #[test]
    fn test_worked_example_10k_50pct_20_days() {
        let targets = daily_targets(10_000.0, 50.0, 20);

        // r = 1.5^(1/20) - 1 = 0.02048
        assert!((targets[0].target_profit - 204.7).abs() < 1.0);
        assert!((targets[0].ending_capital - 10_204.7).abs() < 1.0);
        assert!((targets[19].ending_capital - 15_000.0).abs() < 0.01);
    }

    #[test]
    fn test_days_are_one_based_and_sequential() {
        let targets = daily_targets(1_000.0, 10.0, 5);
        let days: Vec<u32> = targets.iter().map(|t| t.day).collect();
        assert_eq!(days, vec![1, 2, 3, 4, 5]);
        assert!(targets.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_create_plan_archives_previous_active() {
        let (_dir, db) = test_db();

        let first = create_plan(&db, "a@x.com", 10_000.0, 50.0, 20).unwrap();
        let second = create_plan(&db, "a@x.com", 12_000.0, 30.0, 15).unwrap();
        let third = create_plan(&db, "a@x.com", 15_000.0, 20.0, 10).unwrap();

        let active = active_plan(&db, "a@x.com").unwrap().unwrap();
        assert_eq!(active.id, third.id);

        // Most recently archived first, untouched.
        let history = historical_plans(&db, "a@x.com").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, second.id);
        assert_eq!(history[1].id, first.id);
        assert_eq!(history[1], first);
    }

    #[test]
    fn test_toggle_flips_exactly_one_day() {
        let (_dir, db) = test_db();

        let plan = create_plan(&db, "a@x.com", 10_000.0, 50.0, 20).unwrap();
        toggle_day_completion(&db, "a@x.com", &plan.id, 3).unwrap();

        let active = active_plan(&db, "a@x.com").unwrap().unwrap();
        for target in &active.daily_targets {
            assert_eq!(target.completed, target.day == 3);
        }

        // Toggling again flips it back.
        toggle_day_completion(&db, "a@x.com", &plan.id, 3).unwrap();
        let active = active_plan(&db, "a@x.com").unwrap().unwrap();
        assert!(active.daily_targets.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_toggle_with_mismatched_id_is_a_no_op() {
        let (_dir, db) = test_db();

        let first = create_plan(&db, "a@x.com", 10_000.0, 50.0, 20).unwrap();
        create_plan(&db, "a@x.com", 12_000.0, 30.0, 15).unwrap();

        // The archived plan's id no longer matches the active plan.
        toggle_day_completion(&db, "a@x.com", &first.id, 3).unwrap();

        let active = active_plan(&db, "a@x.com").unwrap().unwrap();
        assert!(active.daily_targets.iter().all(|t| !t.completed));
        let history = historical_plans(&db, "a@x.com").unwrap();
        assert!(history[0].daily_targets.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_plans_are_scoped_per_user() {
        let (_dir, db) = test_db();

        create_plan(&db, "a@x.com", 10_000.0, 50.0, 20).unwrap();
        assert!(active_plan(&db, "b@x.com").unwrap().is_none());
        assert!(historical_plans(&db, "b@x.com").unwrap().is_empty());
    }
}
