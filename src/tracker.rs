//! Application controller.
//!
//! `Tracker` owns the store and the calorie predictor and implements every
//! user-facing operation. Screens call into it with the client's `Session`;
//! it never holds per-user state itself.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::accounts::{self, Account, AuthError, Registration};
use crate::ml::{CaloriePredictor, MlError, PredictionInput};
use crate::session::{Session, SessionUser};
use crate::storage::config::AdminSettings;
use crate::storage::database::{Database, DatabaseError};
use crate::workouts::{DailyProgress, NewWorkout, WorkoutEntry, WorkoutRecord, GOAL_RANGE_KCAL};

/// Errors from tracker operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Please log in first")]
    NotAuthenticated,

    #[error("Administrator access required")]
    Forbidden,

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Calorie prediction failed: {0}")]
    Ml(#[from] MlError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

/// Aggregates shown on the administrator dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminOverview {
    /// Non-admin accounts
    pub total_users: usize,
    /// Workout records across all users
    pub total_workouts: usize,
    /// Mean calories over all records, `None` without records
    pub average_calories: Option<f64>,
    /// Non-admin accounts in id order
    pub accounts: Vec<Account>,
}

impl AdminOverview {
    /// Average formatted for the metric card.
    pub fn average_calories_label(&self) -> String {
        match self.average_calories {
            Some(avg) if avg != 0.0 => format!("{:.2}", avg),
            _ => "0".to_string(),
        }
    }
}

/// Controller over the account store and the calorie model.
pub struct Tracker {
    db: Database,
    predictor: Arc<CaloriePredictor>,
}

impl Tracker {
    pub fn new(db: Database, predictor: Arc<CaloriePredictor>) -> Self {
        Self { db, predictor }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn predictor(&self) -> &Arc<CaloriePredictor> {
        &self.predictor
    }

    /// Ensure the administrator account exists.
    pub fn bootstrap_admin(&self, settings: &AdminSettings) -> Result<bool, TrackerError> {
        Ok(accounts::bootstrap_admin(&self.db, settings)?)
    }

    /// Create a regular account. Does not log it in.
    pub fn register(&self, form: &Registration, today: NaiveDate) -> Result<Account, TrackerError> {
        Ok(accounts::register(&self.db, form, today)?)
    }

    /// Authenticate and populate the session.
    pub fn login(
        &self,
        session: &mut Session,
        username: &str,
        password: &str,
    ) -> Result<(), TrackerError> {
        let account = accounts::authenticate(&self.db, username, password)?;
        session.login(&account);
        Ok(())
    }

    pub fn logout(&self, session: &mut Session) {
        if let Some(user) = session.user() {
            tracing::info!("User '{}' logged out", user.username);
        }
        session.logout();
    }

    /// Store a daily calorie goal in the session.
    pub fn set_daily_goal(&self, session: &mut Session, kcal: u32) -> Result<(), TrackerError> {
        require_user(session)?;
        if !GOAL_RANGE_KCAL.contains(&kcal) {
            return Err(TrackerError::InvalidInput(format!(
                "Goal must be between {} and {} kcal",
                GOAL_RANGE_KCAL.start(),
                GOAL_RANGE_KCAL.end()
            )));
        }
        session.set_daily_goal(kcal);
        Ok(())
    }

    /// Goal progress for the session's user on `today`.
    pub fn daily_progress(
        &self,
        session: &Session,
        today: NaiveDate,
    ) -> Result<DailyProgress, TrackerError> {
        let user = require_user(session)?;
        let burned = self.db.calories_burned_on(user.id, today)?;
        Ok(DailyProgress::new(session.daily_goal(), burned))
    }

    /// Predict calories for a workout and append it to the user's history.
    ///
    /// Changed height or weight is written to the account and the session
    /// before predicting, so the prediction and the sidebar BMI both use the
    /// new values.
    pub fn log_workout(
        &self,
        session: &mut Session,
        entry: &WorkoutEntry,
        now: NaiveDateTime,
    ) -> Result<WorkoutRecord, TrackerError> {
        entry.validate().map_err(TrackerError::InvalidInput)?;

        let user = session.user_mut().ok_or(TrackerError::NotAuthenticated)?;
        if user.height_cm != entry.height_cm || user.weight_kg != entry.weight_kg {
            self.db
                .update_body_metrics(user.id, entry.height_cm, entry.weight_kg)?;
            user.height_cm = entry.height_cm;
            user.weight_kg = entry.weight_kg;
            tracing::info!(
                "Updated body metrics for '{}': {} cm, {} kg",
                user.username,
                entry.height_cm,
                entry.weight_kg
            );
        }

        let input = PredictionInput {
            age: user.age_on(now.date()) as f64,
            bmi: user.bmi(),
            duration_minutes: entry.duration_minutes as f64,
            heart_rate_bpm: entry.heart_rate_bpm as f64,
            body_temp_c: entry.body_temp_c,
            // Gender is not collected at registration
            is_male: true,
        };
        let calories = self.predictor.predict(&input)?;

        let record = self.db.insert_workout(&NewWorkout {
            user_id: user.id,
            recorded_at: now,
            duration_minutes: entry.duration_minutes,
            heart_rate_bpm: entry.heart_rate_bpm,
            body_temp_c: entry.body_temp_c,
            calories,
        })?;

        tracing::info!(
            "Saved workout {} for '{}': {:.2} kcal",
            record.id,
            user.username,
            record.calories
        );
        Ok(record)
    }

    /// The session user's workouts, oldest first.
    pub fn history(&self, session: &Session) -> Result<Vec<WorkoutRecord>, TrackerError> {
        let user = require_user(session)?;
        Ok(self.db.list_workouts_for_user(user.id)?)
    }

    /// Aggregates for the administrator dashboard.
    pub fn admin_overview(&self, session: &Session) -> Result<AdminOverview, TrackerError> {
        require_admin(session)?;
        Ok(AdminOverview {
            total_users: self.db.count_regular_accounts()?,
            total_workouts: self.db.count_workouts()?,
            average_calories: self.db.average_calories()?,
            accounts: self.db.list_regular_accounts()?,
        })
    }

    /// One user's workouts, for the administrator drill-down.
    pub fn user_history(
        &self,
        session: &Session,
        user_id: i64,
    ) -> Result<Vec<WorkoutRecord>, TrackerError> {
        require_admin(session)?;
        Ok(self.db.list_workouts_for_user(user_id)?)
    }
}

fn require_user(session: &Session) -> Result<&SessionUser, TrackerError> {
    session.user().ok_or(TrackerError::NotAuthenticated)
}

fn require_admin(session: &Session) -> Result<&SessionUser, TrackerError> {
    let user = require_user(session)?;
    if !user.is_admin {
        return Err(TrackerError::Forbidden);
    }
    Ok(user)
}
