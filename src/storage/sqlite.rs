use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::model::{GolfCourse, Putter, Round, UserProfile};
use crate::storage::{Storage, StorageError};

pub const PROFILE_KEY: &str = "putting_analyzer_user_profile";
pub const PUTTERS_KEY: &str = "putting_analyzer_putters";
pub const COURSES_KEY: &str = "putting_analyzer_courses";
pub const ROUNDS_KEY: &str = "putting_analyzer_rounds";

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);";

/// Keyed JSON document store over SQLite. Each key holds the whole
/// serialized document (the profile object or an entity list), so every
/// write is a read-modify-write of one row.
#[derive(Clone)]
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    /// # Errors
    ///
    /// Returns an error when the database file cannot be opened or the
    /// schema cannot be applied.
    pub fn new(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Throwaway database for tests.
    ///
    /// # Errors
    ///
    /// Returns an error when the in-memory database cannot be created.
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, StorageError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| StorageError::new("storage mutex poisoned"))?;
            f(&guard)
        })
        .await
        .map_err(|e| StorageError::new(format!("blocking task failed: {e}")))?
    }
}

fn read_document<T: DeserializeOwned>(
    conn: &Connection,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let raw: Option<String> = conn
        .query_row("SELECT value FROM store WHERE key = ?1", params![key], |row| {
            row.get(0)
        })
        .optional()?;
    match raw {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

fn read_list<T: DeserializeOwned>(conn: &Connection, key: &str) -> Result<Vec<T>, StorageError> {
    Ok(read_document(conn, key)?.unwrap_or_default())
}

fn write_document<T: Serialize>(
    conn: &Connection,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    conn.execute(
        "INSERT INTO store (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, json],
    )?;
    Ok(())
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn get_user_profile(&self) -> Result<Option<UserProfile>, StorageError> {
        self.with_conn(|conn| read_document(conn, PROFILE_KEY)).await
    }

    async fn save_user_profile(&self, mut profile: UserProfile) -> Result<UserProfile, StorageError> {
        self.with_conn(move |conn| {
            let now = Utc::now();
            match read_document::<UserProfile>(conn, PROFILE_KEY)? {
                Some(stored) => {
                    profile.id = stored.id;
                    profile.created_at = stored.created_at;
                }
                None => {
                    profile.id = new_id();
                    profile.created_at = now;
                }
            }
            profile.updated_at = now;
            write_document(conn, PROFILE_KEY, &profile)?;
            Ok(profile)
        })
        .await
    }

    async fn get_putters(&self) -> Result<Vec<Putter>, StorageError> {
        self.with_conn(|conn| read_list(conn, PUTTERS_KEY)).await
    }

    async fn save_putter(&self, mut putter: Putter) -> Result<Putter, StorageError> {
        self.with_conn(move |conn| {
            let mut putters: Vec<Putter> = read_list(conn, PUTTERS_KEY)?;
            let now = Utc::now();
            putter.id = new_id();
            putter.created_at = now;
            putter.updated_at = now;
            putters.push(putter.clone());
            write_document(conn, PUTTERS_KEY, &putters)?;
            Ok(putter)
        })
        .await
    }

    async fn update_putter(
        &self,
        id: &str,
        mut putter: Putter,
    ) -> Result<Option<Putter>, StorageError> {
        let id = id.to_owned();
        self.with_conn(move |conn| {
            let mut putters: Vec<Putter> = read_list(conn, PUTTERS_KEY)?;
            match putters.iter().position(|p| p.id == id) {
                Some(idx) => {
                    putter.id = putters[idx].id.clone();
                    putter.created_at = putters[idx].created_at;
                    putter.updated_at = Utc::now();
                    putters[idx] = putter.clone();
                    write_document(conn, PUTTERS_KEY, &putters)?;
                    Ok(Some(putter))
                }
                None => Ok(None),
            }
        })
        .await
    }

    async fn delete_putter(&self, id: &str) -> Result<bool, StorageError> {
        let id = id.to_owned();
        self.with_conn(move |conn| {
            let mut putters: Vec<Putter> = read_list(conn, PUTTERS_KEY)?;
            let before = putters.len();
            putters.retain(|p| p.id != id);
            if putters.len() == before {
                return Ok(false);
            }
            write_document(conn, PUTTERS_KEY, &putters)?;
            Ok(true)
        })
        .await
    }

    async fn get_courses(&self) -> Result<Vec<GolfCourse>, StorageError> {
        self.with_conn(|conn| read_list(conn, COURSES_KEY)).await
    }

    async fn save_course(&self, mut course: GolfCourse) -> Result<GolfCourse, StorageError> {
        self.with_conn(move |conn| {
            let mut courses: Vec<GolfCourse> = read_list(conn, COURSES_KEY)?;
            course.id = new_id();
            course.created_at = Utc::now();
            courses.push(course.clone());
            write_document(conn, COURSES_KEY, &courses)?;
            Ok(course)
        })
        .await
    }

    async fn delete_course(&self, id: &str) -> Result<bool, StorageError> {
        let id = id.to_owned();
        self.with_conn(move |conn| {
            let mut courses: Vec<GolfCourse> = read_list(conn, COURSES_KEY)?;
            let before = courses.len();
            courses.retain(|c| c.id != id);
            if courses.len() == before {
                return Ok(false);
            }
            write_document(conn, COURSES_KEY, &courses)?;
            Ok(true)
        })
        .await
    }

    async fn get_rounds(&self) -> Result<Vec<Round>, StorageError> {
        self.with_conn(|conn| {
            let mut rounds: Vec<Round> = read_list(conn, ROUNDS_KEY)?;
            rounds.sort_by(|a, b| b.date.cmp(&a.date));
            Ok(rounds)
        })
        .await
    }

    async fn get_round(&self, id: &str) -> Result<Option<Round>, StorageError> {
        let id = id.to_owned();
        self.with_conn(move |conn| {
            let rounds: Vec<Round> = read_list(conn, ROUNDS_KEY)?;
            Ok(rounds.into_iter().find(|r| r.id == id))
        })
        .await
    }

    async fn save_round(&self, mut round: Round) -> Result<Round, StorageError> {
        self.with_conn(move |conn| {
            let mut rounds: Vec<Round> = read_list(conn, ROUNDS_KEY)?;
            let now = Utc::now();
            round.id = new_id();
            round.created_at = now;
            round.updated_at = now;
            round.recompute_totals();
            rounds.push(round.clone());
            write_document(conn, ROUNDS_KEY, &rounds)?;
            Ok(round)
        })
        .await
    }

    async fn update_round(&self, id: &str, mut round: Round) -> Result<Option<Round>, StorageError> {
        let id = id.to_owned();
        self.with_conn(move |conn| {
            let mut rounds: Vec<Round> = read_list(conn, ROUNDS_KEY)?;
            match rounds.iter().position(|r| r.id == id) {
                Some(idx) => {
                    round.id = rounds[idx].id.clone();
                    round.created_at = rounds[idx].created_at;
                    round.updated_at = Utc::now();
                    round.recompute_totals();
                    rounds[idx] = round.clone();
                    write_document(conn, ROUNDS_KEY, &rounds)?;
                    Ok(Some(round))
                }
                None => Ok(None),
            }
        })
        .await
    }

    async fn delete_round(&self, id: &str) -> Result<bool, StorageError> {
        let id = id.to_owned();
        self.with_conn(move |conn| {
            let mut rounds: Vec<Round> = read_list(conn, ROUNDS_KEY)?;
            let before = rounds.len();
            rounds.retain(|r| r.id != id);
            if rounds.len() == before {
                return Ok(false);
            }
            write_document(conn, ROUNDS_KEY, &rounds)?;
            Ok(true)
        })
        .await
    }

    async fn clear_all(&self) -> Result<(), StorageError> {
        self.with_conn(|conn| {
            conn.execute(
                "DELETE FROM store WHERE key IN (?1, ?2, ?3, ?4)",
                params![PROFILE_KEY, PUTTERS_KEY, COURSES_KEY, ROUNDS_KEY],
            )?;
            Ok(())
        })
        .await
    }
}
