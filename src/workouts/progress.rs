//! Daily calorie goal progress.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Allowed daily goal (kcal).
pub const GOAL_RANGE_KCAL: RangeInclusive<u32> = 100..=5000;

/// Value pre-filled in the goal input until the user saves one.
pub const DEFAULT_DAILY_GOAL: u32 = 500;

/// Progress toward the daily goal for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    /// Goal in kcal, `None` until the user saves one
    pub goal: Option<u32>,
    /// Sum of today's workout calories
    pub burned_today: f64,
}

impl DailyProgress {
    pub fn new(goal: Option<u32>, burned_today: f64) -> Self {
        Self { goal, burned_today }
    }

    /// Goal minus burned. Negative once the goal is exceeded.
    pub fn calories_left(&self) -> Option<f64> {
        self.goal.map(|goal| goal as f64 - self.burned_today)
    }

    pub fn goal_met(&self) -> bool {
        self.goal
            .is_some_and(|goal| self.burned_today >= goal as f64)
    }

    /// Fraction of the goal reached, clamped to 0..=1 for progress bars.
    pub fn fraction(&self) -> Option<f32> {
        self.goal.map(|goal| {
            if goal == 0 {
                1.0
            } else {
                (self.burned_today / goal as f64).clamp(0.0, 1.0) as f32
            }
        })
    }
}
