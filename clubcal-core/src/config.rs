//! Global clubcal configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::color::{DEFAULT_PALETTE, HexColor};
use crate::error::{ClubcalError, ClubcalResult};
use crate::layout::GridSpan;
use crate::recurrence::DEFAULT_HORIZON_MONTHS;
use crate::window::ViewMode;

static DEFAULT_RULES_FILE: &str = "~/clubcal/schedule.toml";
static DEFAULT_GRID_START: &str = "00:00";
static DEFAULT_GRID_END: &str = "24:00";

fn default_rules_file() -> PathBuf {
    PathBuf::from(DEFAULT_RULES_FILE)
}

fn default_horizon_months() -> u32 {
    DEFAULT_HORIZON_MONTHS
}

fn default_grid_start() -> String {
    DEFAULT_GRID_START.to_string()
}

fn default_grid_end() -> String {
    DEFAULT_GRID_END.to_string()
}

/// Deserialize `T`, or warn and use `default()` if the value doesn't fit.
fn lenient<'de, D, T>(deserializer: D, key: &str, default: fn() -> T) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_else(|e| {
        warn!(key, error = %e, "invalid config value, using default");
        default()
    }))
}

fn lenient_rules_file<'de, D: Deserializer<'de>>(d: D) -> Result<PathBuf, D::Error> {
    lenient(d, "rules_file", default_rules_file)
}

fn lenient_horizon_months<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    lenient(d, "horizon_months", default_horizon_months)
}

fn lenient_default_view<'de, D: Deserializer<'de>>(d: D) -> Result<ViewMode, D::Error> {
    lenient(d, "default_view", ViewMode::default)
}

fn lenient_grid_start<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    lenient(d, "grid_start", default_grid_start)
}

fn lenient_grid_end<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    lenient(d, "grid_end", default_grid_end)
}

/// Bad entries are dropped; an empty result means the built-in palette.
fn lenient_palette<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<HexColor>, D::Error> {
    let entries: Vec<serde_json::Value> = lenient(d, "palette", Vec::new)?;
    Ok(entries
        .into_iter()
        .filter_map(|entry| {
            let shown = entry.to_string();
            HexColor::deserialize(entry)
                .inspect_err(|e| warn!(entry = %shown, error = %e, "invalid palette color, skipping"))
                .ok()
        })
        .collect())
}

/// Configuration at ~/.config/clubcal/config.toml
///
/// Values that don't parse fall back to their defaults with a warning.
#[derive(Debug, Deserialize, Clone)]
pub struct ClubcalConfig {
    /// Schedule rules exported from the club backend (.toml or .json)
    #[serde(default = "default_rules_file", deserialize_with = "lenient_rules_file")]
    pub rules_file: PathBuf,

    #[serde(default = "default_horizon_months", deserialize_with = "lenient_horizon_months")]
    pub horizon_months: u32,

    #[serde(default, deserialize_with = "lenient_default_view")]
    pub default_view: ViewMode,

    #[serde(default = "default_grid_start", deserialize_with = "lenient_grid_start")]
    pub grid_start: String,

    #[serde(default = "default_grid_end", deserialize_with = "lenient_grid_end")]
    pub grid_end: String,

    /// Discipline colors as `#rrggbb`; the built-in palette when empty
    #[serde(default, deserialize_with = "lenient_palette")]
    pub palette: Vec<HexColor>,
}

impl Default for ClubcalConfig {
    fn default() -> Self {
        ClubcalConfig {
            rules_file: default_rules_file(),
            horizon_months: DEFAULT_HORIZON_MONTHS,
            default_view: ViewMode::default(),
            grid_start: default_grid_start(),
            grid_end: default_grid_end(),
            palette: Vec::new(),
        }
    }
}

impl ClubcalConfig {
    pub fn config_path() -> ClubcalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ClubcalError::Config("Could not determine config directory".into()))?
            .join("clubcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, writing a commented default file on first run.
    pub fn load() -> ClubcalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> ClubcalResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| ClubcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ClubcalError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ClubcalResult<()> {
        let contents = format!(
            "\
# clubcal configuration

# Schedule rules exported from the club backend (.toml or .json):
# rules_file = \"{}\"

# How many months ahead classes are expanded:
# horizon_months = {}

# View shown when no subcommand option says otherwise (\"week\" or \"day\"):
# default_view = \"week\"

# Hours covered by the day grid:
# grid_start = \"{}\"
# grid_end = \"{}\"

# Discipline colors:
# palette = [\"#3b82f6\", \"#10b981\", \"#f59e0b\"]
",
            DEFAULT_RULES_FILE, DEFAULT_HORIZON_MONTHS, DEFAULT_GRID_START, DEFAULT_GRID_END
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClubcalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ClubcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// `rules_file` with `~` expanded.
    pub fn rules_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.rules_file.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    /// The grid span, falling back to a full day if the configured times are unusable.
    pub fn grid(&self) -> GridSpan {
        GridSpan::from_times(&self.grid_start, &self.grid_end).unwrap_or_else(|| {
            warn!(
                grid_start = %self.grid_start,
                grid_end = %self.grid_end,
                "invalid grid span in config, using full day"
            );
            GridSpan::default()
        })
    }

    pub fn palette(&self) -> &[HexColor] {
        if self.palette.is_empty() {
            &DEFAULT_PALETTE
        } else {
            &self.palette
        }
    }
}
