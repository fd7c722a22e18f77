use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::PathBuf};

use crate::daypart::HeadingAliases;
use crate::timeline::ParsePolicy;

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the day notes (`{notes_dir}/YYYY/MM/YYYY-MM-DD.md`).
    pub notes_dir: PathBuf,
    /// Root of the per-day location visit files.
    pub locations_dir: PathBuf,
    /// `chrono` format used when printing journal dates.
    pub date_format: String,
    /// How time tokens that fail validation are handled.
    pub parse_policy: ParsePolicy,
    /// Day note headings recognized as dayparts.
    pub headings: HeadingAliases,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    notes_dir: Option<PathBuf>,
    locations_dir: Option<PathBuf>,
    date_format: Option<String>,
    parse_policy: Option<ParsePolicy>,
    /// Optional table:
    /// [headings]
    /// evening = "night"
    /// tarde = "afternoon"
    headings: Option<HashMap<String, String>>,
}

impl Config {
    /// Load config from disk (first XDG path, then native) and apply defaults.
    /// A missing or unreadable file leaves every setting at its default.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|error| {
            tracing::warn!(error = %format!("{error:#}"), "ignoring config file");
            FileConfig::default()
        });
        let config = Self::from_file_config(file_config);
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let mut headings = HeadingAliases::default();
        if let Some(map) = &file_config.headings {
            headings.extend(map.iter().map(|(alias, target)| (alias.as_str(), target.as_str())));
        }
        Self {
            notes_dir: file_config
                .notes_dir
                .unwrap_or_else(|| Self::data_root().join("notes")),
            locations_dir: file_config
                .locations_dir
                .unwrap_or_else(|| Self::data_root().join("locations")),
            date_format: file_config
                .date_format
                .unwrap_or_else(|| "%A, %d %b %Y".to_string()),
            parse_policy: file_config.parse_policy.unwrap_or_default(),
            headings,
        }
    }

    /// Default data root: `{data_dir}/dayline`
    /// - macOS:   `~/Library/Application Support/dayline`
    /// - Linux:   `$XDG_DATA_HOME/dayline` or `~/.local/share/dayline`
    /// - Windows: `%APPDATA%\dayline`
    fn data_root() -> PathBuf {
        match BaseDirs::new() {
            Some(base) => base.data_dir().join("dayline"),
            None => PathBuf::from("./dayline"),
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            v.push(b.home_dir().join(".config").join("dayline").join("config.toml"));
            v.push(b.config_dir().join("dayline").join("config.toml"));
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
