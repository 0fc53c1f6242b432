use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::types::{Gender, PutterRank};

/// Meters covered by one pace step when nothing is configured.
pub const DEFAULT_STRIDE_LENGTH: f64 = 0.7;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub birth_date: Option<NaiveDate>,
    pub handicap: f64,
    /// Meters per pace step, used to turn paced-off putt lengths into meters.
    #[serde(default = "default_stride_length")]
    pub stride_length: f64,
    #[serde(default)]
    pub member_courses: Vec<String>,
    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Stand-in profile served before the player has saved one.
    #[must_use]
    pub fn default_profile() -> Self {
        let now = Utc::now();
        UserProfile {
            id: String::new(),
            name: "Golfer".to_string(),
            gender: Gender::Male,
            birth_date: None,
            handicap: 20.0,
            stride_length: DEFAULT_STRIDE_LENGTH,
            member_courses: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Putter {
    #[serde(default)]
    pub id: String,
    pub brand_name: String,
    pub product_name: String,
    /// Shaft length in inches.
    pub length: f64,
    /// Lie angle in degrees.
    pub lie_angle: f64,
    /// Head weight in grams.
    pub weight: f64,
    pub grip_name: String,
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub usage_count: u32,
    pub ranking: PutterRank,
    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GolfCourse {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub location: Option<String>,
    #[serde(default)]
    pub greens: Vec<String>,
    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,
}

fn default_stride_length() -> f64 {
    DEFAULT_STRIDE_LENGTH
}

fn default_timestamp() -> DateTime<Utc> {
    Utc::now()
}
