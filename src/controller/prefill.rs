use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::model::{GolfCourse, Putter, Round, UserProfile};
use crate::storage::Storage;

/// format we expect is this:
/// { "profile": { ... }?,
///   "putters": [{ "brand_name": ..., "product_name": ..., ... }],
///   "courses": [{ "name": ..., "greens": [...] }],
///   "rounds": [{ "date": ..., "holes": [...], ... }] }
/// Every section is optional.
#[derive(Deserialize, Default)]
pub struct PrefillData {
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub putters: Vec<Putter>,
    #[serde(default)]
    pub courses: Vec<GolfCourse>,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

/// Seeds storage from a JSON document at startup. A section is only
/// written when nothing of its kind is stored yet, so restarting with the
/// same seed file does not duplicate data.
///
/// # Errors
///
/// Returns an error when the document does not deserialize or a storage
/// write fails.
pub async fn db_prefill(json: &Value, storage: &dyn Storage) -> Result<(), CoreError> {
    let data: PrefillData = serde_json::from_value(json.clone())?;

    if let Some(profile) = data.profile {
        if storage.get_user_profile().await?.is_none() {
            storage.save_user_profile(profile).await?;
            log::info!("prefill: stored user profile");
        }
    }

    if !data.putters.is_empty() && storage.get_putters().await?.is_empty() {
        let count = data.putters.len();
        for putter in data.putters {
            storage.save_putter(putter).await?;
        }
        log::info!("prefill: stored {count} putters");
    }

    if !data.courses.is_empty() && storage.get_courses().await?.is_empty() {
        let count = data.courses.len();
        for course in data.courses {
            storage.save_course(course).await?;
        }
        log::info!("prefill: stored {count} courses");
    }

    if !data.rounds.is_empty() && storage.get_rounds().await?.is_empty() {
        let count = data.rounds.len();
        for round in data.rounds {
            storage.save_round(round).await?;
        }
        log::info!("prefill: stored {count} rounds");
    }

    Ok(())
}
