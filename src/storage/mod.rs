use async_trait::async_trait;
use std::error::Error;
use std::fmt;

use crate::model::{GolfCourse, Putter, Round, UserProfile};

pub mod sqlite;

pub use sqlite::SqliteStorage;

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::new(value.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::new(value.to_string())
    }
}

/// Persistence seam for the app. Saves assign ids and timestamps;
/// update/delete report a missing id as `None`/`false` rather than an
/// error.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_user_profile(&self) -> Result<Option<UserProfile>, StorageError>;
    async fn save_user_profile(&self, profile: UserProfile) -> Result<UserProfile, StorageError>;

    async fn get_putters(&self) -> Result<Vec<Putter>, StorageError>;
    async fn save_putter(&self, putter: Putter) -> Result<Putter, StorageError>;
    async fn update_putter(&self, id: &str, putter: Putter)
        -> Result<Option<Putter>, StorageError>;
    async fn delete_putter(&self, id: &str) -> Result<bool, StorageError>;

    async fn get_courses(&self) -> Result<Vec<GolfCourse>, StorageError>;
    async fn save_course(&self, course: GolfCourse) -> Result<GolfCourse, StorageError>;
    async fn delete_course(&self, id: &str) -> Result<bool, StorageError>;

    /// Rounds sorted by date, newest first.
    async fn get_rounds(&self) -> Result<Vec<Round>, StorageError>;
    async fn get_round(&self, id: &str) -> Result<Option<Round>, StorageError>;
    async fn save_round(&self, round: Round) -> Result<Round, StorageError>;
    async fn update_round(&self, id: &str, round: Round) -> Result<Option<Round>, StorageError>;
    async fn delete_round(&self, id: &str) -> Result<bool, StorageError>;

    async fn clear_all(&self) -> Result<(), StorageError>;
}
