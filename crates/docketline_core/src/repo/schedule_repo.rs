//! Schedule repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the `load`/`save` surface the schedule store persists through,
//!   keyed by case id.
//! - Keep SQL and JSON payload details inside the persistence boundary.
//!
//! # Invariants
//! - `save` fully replaces the stored schedule for a case (upsert).
//! - Read paths reject undecodable persisted payloads instead of masking
//!   them.

use crate::db::{migrations::latest_version, DbError};
use crate::model::schedule::CaseSchedule;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for schedule persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A stored payload could not be decoded into a `CaseSchedule`.
    InvalidPayload(String),
    /// The connection has not run migrations to the expected version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidPayload(message) => {
                write!(f, "invalid persisted schedule payload: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Keyed persistence contract for case schedules.
///
/// Host applications may substitute their own backing store; the engine
/// only requires these two operations.
pub trait ScheduleRepository {
    fn load(&self, case_id: &str) -> RepoResult<Option<CaseSchedule>>;
    fn save(&self, schedule: &CaseSchedule) -> RepoResult<()>;
}

/// SQLite-backed schedule repository storing one JSON payload per case.
pub struct SqliteScheduleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteScheduleRepository<'conn> {
    /// Wraps a connection after validating its schema state.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master
                WHERE type = 'table' AND name = 'case_schedules'
            );",
            [],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(RepoError::MissingRequiredTable("case_schedules"));
        }

        Ok(Self { conn })
    }
}

impl ScheduleRepository for SqliteScheduleRepository<'_> {
    fn load(&self, case_id: &str) -> RepoResult<Option<CaseSchedule>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM case_schedules WHERE case_id = ?1;",
                [case_id],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            None => Ok(None),
            Some(payload) => serde_json::from_str(&payload).map(Some).map_err(|err| {
                RepoError::InvalidPayload(format!("case `{case_id}`: {err}"))
            }),
        }
    }

    fn save(&self, schedule: &CaseSchedule) -> RepoResult<()> {
        let payload = serde_json::to_string(schedule)
            .map_err(|err| RepoError::InvalidPayload(format!("case `{}`: {err}", schedule.case_id)))?;

        self.conn.execute(
            "INSERT INTO case_schedules (case_id, payload, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(case_id) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![schedule.case_id.as_str(), payload],
        )?;

        Ok(())
    }
}
