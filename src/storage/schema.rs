//! Database schema definitions for FitTrack.

/// SQL schema for creating all database tables.
pub const SCHEMA: &str = r#"
-- Accounts table
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    dob TEXT NOT NULL,
    height_cm REAL NOT NULL,
    weight_kg REAL NOT NULL,
    is_admin INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

-- Workout records table
CREATE TABLE IF NOT EXISTS workouts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users(id),
    recorded_at TEXT NOT NULL,
    duration_minutes INTEGER NOT NULL,
    heart_rate_bpm INTEGER NOT NULL,
    body_temp_c REAL NOT NULL,
    calories REAL NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_workouts_user_id ON workouts(user_id);
CREATE INDEX IF NOT EXISTS idx_workouts_recorded_at ON workouts(recorded_at);
"#;

/// SQL for schema version tracking
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Current schema version
pub const CURRENT_VERSION: i32 = 1;

/// Timestamp format used for `recorded_at` and `created_at` columns.
///
/// Stored as naive local time so SQLite's `DATE()` groups records by the
/// calendar day the user saw when saving.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date format used for the `dob` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
