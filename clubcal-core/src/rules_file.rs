//! Loading schedule rules exported by the club backend.
//!
//! TOML files hold a `[[rules]]` array. JSON files may be a bare array of
//! rules or an object with a `rules` array, which is what the backend's list
//! endpoint returns.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{ClubcalError, ClubcalResult};
use crate::rule::ScheduleRule;

#[derive(Deserialize)]
struct RulesDocument {
    #[serde(default)]
    rules: Vec<ScheduleRule>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonRules {
    List(Vec<ScheduleRule>),
    Document(RulesDocument),
}

/// Load rules from a .toml or .json file.
pub fn load_rules(path: &Path) -> ClubcalResult<Vec<ScheduleRule>> {
    if !path.exists() {
        return Err(ClubcalError::RulesFileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let parse_error = |message: String| ClubcalError::RulesFile {
        path: path.to_path_buf(),
        message,
    };

    let rules = match extension.as_str() {
        "toml" => parse_toml_rules(&content).map_err(parse_error)?,
        "json" => parse_json_rules(&content).map_err(parse_error)?,
        other => return Err(ClubcalError::UnsupportedFormat(other.to_string())),
    };

    debug!(path = %path.display(), count = rules.len(), "loaded rules");
    Ok(rules)
}

pub fn parse_toml_rules(content: &str) -> Result<Vec<ScheduleRule>, String> {
    toml::from_str::<RulesDocument>(content)
        .map(|doc| doc.rules)
        .map_err(|e| e.to_string())
}

pub fn parse_json_rules(content: &str) -> Result<Vec<ScheduleRule>, String> {
    match serde_json::from_str::<JsonRules>(content).map_err(|e| e.to_string())? {
        JsonRules::List(rules) => Ok(rules),
        JsonRules::Document(doc) => Ok(doc.rules),
    }
}
