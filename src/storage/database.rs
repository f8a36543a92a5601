//! Database operations using rusqlite.
//!
//! A single `Connection` is shared by every caller; the UI frame loop
//! serializes access.

use crate::accounts::types::{Account, NewAccount};
use crate::storage::schema::{
    CURRENT_VERSION, DATE_FORMAT, SCHEMA, SCHEMA_VERSION_TABLE, TIMESTAMP_FORMAT,
};
use crate::workouts::types::{NewWorkout, WorkoutRecord};
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::path::Path;
use thiserror::Error;

/// Database wrapper for SQLite operations.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create a database at the given path.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DatabaseError::IoError(e.to_string()))?;
        }

        let conn =
            Connection::open(path).map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        tracing::info!("Opened database at {}", path.display());
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Initialize the database schema.
    fn initialize(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        self.conn
            .execute_batch(SCHEMA_VERSION_TABLE)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

        let current_version = self.get_schema_version()?;

        if current_version < CURRENT_VERSION {
            self.migrate(current_version)?;
        }

        Ok(())
    }

    /// Get the current schema version.
    fn get_schema_version(&self) -> Result<i32, DatabaseError> {
        let result: SqliteResult<i32> = self.conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        );

        match result {
            Ok(version) => Ok(version),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// Create the tables and record the schema version.
    fn migrate(&self, from_version: i32) -> Result<(), DatabaseError> {
        if from_version < 1 {
            self.conn
                .execute_batch(SCHEMA)
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            self.conn
                .execute(
                    "INSERT INTO schema_version (version, applied_at) VALUES (?, datetime('now'))",
                    [CURRENT_VERSION],
                )
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            tracing::info!("Database migrated to version {}", CURRENT_VERSION);
        }

        Ok(())
    }

    /// Get a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    // ========== Account Operations ==========

    /// Insert a new account.
    ///
    /// The UNIQUE constraint on `username` is the only duplicate check, so
    /// two racing registrations cannot both succeed.
    pub fn insert_account(&self, account: &NewAccount) -> Result<Account, DatabaseError> {
        let created_at = Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string();

        self.conn
            .execute(
                "INSERT INTO users (username, password_hash, dob, height_cm, weight_kg, is_admin, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    account.username,
                    account.password_hash,
                    account.dob.format(DATE_FORMAT).to_string(),
                    account.height_cm,
                    account.weight_kg,
                    account.is_admin,
                    created_at,
                ],
            )
            .map_err(|e| map_account_insert_error(e, &account.username))?;

        let id = self.conn.last_insert_rowid();
        self.get_account(id)?
            .ok_or_else(|| DatabaseError::NotFound(format!("Account {}", id)))
    }

    /// Insert an account unless the username is already taken.
    ///
    /// Returns `true` when a row was inserted.
    pub fn insert_account_if_absent(&self, account: &NewAccount) -> Result<bool, DatabaseError> {
        let created_at = Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string();

        let rows_affected = self
            .conn
            .execute(
                "INSERT INTO users (username, password_hash, dob, height_cm, weight_kg, is_admin, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 ON CONFLICT(username) DO NOTHING",
                params![
                    account.username,
                    account.password_hash,
                    account.dob.format(DATE_FORMAT).to_string(),
                    account.height_cm,
                    account.weight_kg,
                    account.is_admin,
                    created_at,
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(rows_affected > 0)
    }

    /// Get an account by ID.
    pub fn get_account(&self, id: i64) -> Result<Option<Account>, DatabaseError> {
        self.conn
            .query_row(
                "SELECT id, username, password_hash, dob, height_cm, weight_kg, is_admin, created_at
                 FROM users WHERE id = ?1",
                params![id],
                map_account_row,
            )
            .optional()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?
            .map(AccountRow::into_account)
            .transpose()
    }

    /// Look up an account by username.
    pub fn get_account_by_username(&self, username: &str) -> Result<Option<Account>, DatabaseError> {
        self.conn
            .query_row(
                "SELECT id, username, password_hash, dob, height_cm, weight_kg, is_admin, created_at
                 FROM users WHERE username = ?1",
                params![username],
                map_account_row,
            )
            .optional()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?
            .map(AccountRow::into_account)
            .transpose()
    }

    /// Patch height and weight, the only mutable account fields.
    pub fn update_body_metrics(
        &self,
        id: i64,
        height_cm: f64,
        weight_kg: f64,
    ) -> Result<(), DatabaseError> {
        let rows_affected = self
            .conn
            .execute(
                "UPDATE users SET height_cm = ?2, weight_kg = ?3 WHERE id = ?1",
                params![id, height_cm, weight_kg],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        if rows_affected == 0 {
            return Err(DatabaseError::NotFound(format!("Account {}", id)));
        }

        Ok(())
    }

    /// List all non-admin accounts ordered by ID.
    pub fn list_regular_accounts(&self) -> Result<Vec<Account>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, username, password_hash, dob, height_cm, weight_kg, is_admin, created_at
                 FROM users WHERE is_admin = 0 ORDER BY id ASC",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map([], map_account_row)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut accounts = Vec::new();
        for row in rows {
            let row = row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            accounts.push(row.into_account()?);
        }

        Ok(accounts)
    }

    /// Count non-admin accounts.
    pub fn count_regular_accounts(&self) -> Result<usize, DatabaseError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM users WHERE is_admin = 0", [], |row| {
                row.get(0)
            })
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(count as usize)
    }

    // ========== Workout Operations ==========

    /// Append a workout record.
    pub fn insert_workout(&self, workout: &NewWorkout) -> Result<WorkoutRecord, DatabaseError> {
        self.conn
            .execute(
                "INSERT INTO workouts (user_id, recorded_at, duration_minutes, heart_rate_bpm, body_temp_c, calories)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    workout.user_id,
                    workout.recorded_at.format(TIMESTAMP_FORMAT).to_string(),
                    workout.duration_minutes,
                    workout.heart_rate_bpm,
                    workout.body_temp_c,
                    workout.calories,
                ],
            )
            .map_err(|e| map_workout_insert_error(e, workout.user_id))?;

        let id = self.conn.last_insert_rowid();
        self.get_workout(id)?
            .ok_or_else(|| DatabaseError::NotFound(format!("Workout {}", id)))
    }

    /// Get a workout by ID.
    pub fn get_workout(&self, id: i64) -> Result<Option<WorkoutRecord>, DatabaseError> {
        self.conn
            .query_row(
                "SELECT id, user_id, recorded_at, duration_minutes, heart_rate_bpm, body_temp_c, calories
                 FROM workouts WHERE id = ?1",
                params![id],
                map_workout_row,
            )
            .optional()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?
            .map(WorkoutRow::into_workout)
            .transpose()
    }

    /// List every workout of one user, oldest first.
    pub fn list_workouts_for_user(&self, user_id: i64) -> Result<Vec<WorkoutRecord>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, user_id, recorded_at, duration_minutes, heart_rate_bpm, body_temp_c, calories
                 FROM workouts WHERE user_id = ?1 ORDER BY recorded_at ASC, id ASC",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![user_id], map_workout_row)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut workouts = Vec::new();
        for row in rows {
            let row = row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            workouts.push(row.into_workout()?);
        }

        Ok(workouts)
    }

    /// Sum of predicted calories for one user on one calendar day.
    pub fn calories_burned_on(&self, user_id: i64, day: NaiveDate) -> Result<f64, DatabaseError> {
        self.conn
            .query_row(
                "SELECT COALESCE(SUM(calories), 0.0) FROM workouts
                 WHERE user_id = ?1 AND DATE(recorded_at) = ?2",
                params![user_id, day.format(DATE_FORMAT).to_string()],
                |row| row.get(0),
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))
    }

    /// Count all workout records.
    pub fn count_workouts(&self) -> Result<usize, DatabaseError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM workouts", [], |row| row.get(0))
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(count as usize)
    }

    /// Average predicted calories over all workouts, `None` when there are none.
    pub fn average_calories(&self) -> Result<Option<f64>, DatabaseError> {
        self.conn
            .query_row("SELECT AVG(calories) FROM workouts", [], |row| row.get(0))
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))
    }
}

fn map_account_row(row: &rusqlite::Row) -> rusqlite::Result<AccountRow> {
    Ok(AccountRow {
        id: row.get(0)?,
        username: row.get(1)?,
        password_hash: row.get(2)?,
        dob: row.get(3)?,
        height_cm: row.get(4)?,
        weight_kg: row.get(5)?,
        is_admin: row.get(6)?,
        created_at: row.get(7)?,
    })
}

fn map_workout_row(row: &rusqlite::Row) -> rusqlite::Result<WorkoutRow> {
    Ok(WorkoutRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        recorded_at: row.get(2)?,
        duration_minutes: row.get(3)?,
        heart_rate_bpm: row.get(4)?,
        body_temp_c: row.get(5)?,
        calories: row.get(6)?,
    })
}

fn map_account_insert_error(err: rusqlite::Error, username: &str) -> DatabaseError {
    match err {
        rusqlite::Error::SqliteFailure(ref e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            DatabaseError::DuplicateUsername(username.to_string())
        }
        e => DatabaseError::QueryFailed(e.to_string()),
    }
}

fn map_workout_insert_error(err: rusqlite::Error, user_id: i64) -> DatabaseError {
    match err {
        rusqlite::Error::SqliteFailure(ref e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            DatabaseError::NotFound(format!("Account {}", user_id))
        }
        e => DatabaseError::QueryFailed(e.to_string()),
    }
}

/// Intermediate struct for reading account rows from database.
struct AccountRow {
    id: i64,
    username: String,
    password_hash: String,
    dob: String,
    height_cm: f64,
    weight_kg: f64,
    is_admin: bool,
    created_at: String,
}

impl AccountRow {
    fn into_account(self) -> Result<Account, DatabaseError> {
        let dob = NaiveDate::parse_from_str(&self.dob, DATE_FORMAT).map_err(|e| {
            DatabaseError::DeserializationError(format!("Invalid date of birth: {}", e))
        })?;

        let created_at = NaiveDateTime::parse_from_str(&self.created_at, TIMESTAMP_FORMAT)
            .map_err(|e| {
                DatabaseError::DeserializationError(format!("Invalid created date: {}", e))
            })?;

        Ok(Account {
            id: self.id,
            username: self.username,
            password_hash: self.password_hash,
            dob,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            is_admin: self.is_admin,
            created_at,
        })
    }
}

/// Intermediate struct for reading workout rows from database.
struct WorkoutRow {
    id: i64,
    user_id: i64,
    recorded_at: String,
    duration_minutes: u32,
    heart_rate_bpm: u32,
    body_temp_c: f64,
    calories: f64,
}

impl WorkoutRow {
    fn into_workout(self) -> Result<WorkoutRecord, DatabaseError> {
        let recorded_at = NaiveDateTime::parse_from_str(&self.recorded_at, TIMESTAMP_FORMAT)
            .map_err(|e| {
                DatabaseError::DeserializationError(format!("Invalid workout timestamp: {}", e))
            })?;

        Ok(WorkoutRecord {
            id: self.id,
            user_id: self.user_id,
            recorded_at,
            duration_minutes: self.duration_minutes,
            heart_rate_bpm: self.heart_rate_bpm,
            body_temp_c: self.body_temp_c,
            calories: self.calories,
        })
    }
}

/// Database errors.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}
