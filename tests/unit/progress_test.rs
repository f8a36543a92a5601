//! Unit tests for daily goal progress.

use fittrack::workouts::{DailyProgress, DEFAULT_DAILY_GOAL, GOAL_RANGE_KCAL};

#[test]
fn test_goal_bounds() {
    assert_eq!(*GOAL_RANGE_KCAL.start(), 100);
    assert_eq!(*GOAL_RANGE_KCAL.end(), 5000);
    assert!(GOAL_RANGE_KCAL.contains(&DEFAULT_DAILY_GOAL));
}

#[test]
fn test_progress_through_the_day() {
    let goal = Some(600);

    let morning = DailyProgress::new(goal, 0.0);
    assert_eq!(morning.calories_left(), Some(600.0));
    assert!(!morning.goal_met());

    let noon = DailyProgress::new(goal, 350.25);
    assert_eq!(noon.calories_left(), Some(249.75));
    assert!(!noon.goal_met());

    let evening = DailyProgress::new(goal, 720.0);
    assert_eq!(evening.calories_left(), Some(-120.0));
    assert!(evening.goal_met());
}

#[test]
fn test_unset_goal_never_awards_badge() {
    let progress = DailyProgress::new(None, 10_000.0);
    assert!(!progress.goal_met());
    assert_eq!(progress.calories_left(), None);
}
