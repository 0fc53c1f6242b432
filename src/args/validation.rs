use serde_json::Value;
use std::net::SocketAddr;
use std::{fs, path::PathBuf};

use crate::args::types::Args;

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the bind address does not parse
    pub fn validate(&self) -> Result<(), String> {
        if self.bind.parse::<SocketAddr>().is_err() {
            return Err(format!("'{}' is not a valid bind address.", self.bind));
        }
        Ok(())
    }
}

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(file.to_string())
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("Failed to read '{file}': {e}"))?;
    let json: Value =
        serde_json::from_str(&contents).map_err(|e| format!("'{file}' is not valid json: {e}"))?;
    validate_seed_format(&json)?;
    Ok(json)
}

/// Validate the seed file format
/// format we expect is this:
/// { "profile": { ... }, "putters": [ ... ], "courses": [ ... ], "rounds": [ ... ] }
/// with every section optional.
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
fn validate_seed_format(json: &Value) -> Result<(), String> {
    let Some(object) = json.as_object() else {
        return Err("The seed file must be a json object.".to_string());
    };

    let expected_keys = ["profile", "putters", "courses", "rounds"];
    for key in object.keys() {
        if !expected_keys.contains(&key.as_str()) {
            return Err(format!(
                "Unexpected seed key '{key}'. Expected keys: {expected_keys:?}"
            ));
        }
    }

    if let Some(profile) = object.get("profile")
        && !profile.is_object()
    {
        return Err("The seed key profile must be an object.".to_string());
    }
    for key in ["putters", "courses", "rounds"] {
        if let Some(section) = object.get(key)
            && !section.is_array()
        {
            return Err(format!("The seed key {key} must be an array."));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn seed_format_accepts_partial_documents() {
        assert!(validate_seed_format(&json!({})).is_ok());
        assert!(validate_seed_format(&json!({"putters": []})).is_ok());
        assert!(
            validate_seed_format(&json!({"profile": {"name": "x"}, "rounds": []})).is_ok()
        );
    }

    #[test]
    fn seed_format_rejects_wrong_shapes() {
        assert!(validate_seed_format(&json!([])).is_err());
        assert!(validate_seed_format(&json!({"bogus": 1})).is_err());
        assert!(validate_seed_format(&json!({"rounds": {}})).is_err());
        assert!(validate_seed_format(&json!({"profile": []})).is_err());
    }
}
