//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::domain::value_objects::IconSet;
use crate::error::{ArborError, ArborResult};

use super::types::Config;

/// Project-local config file name
pub const PROJECT_CONFIG_FILE: &str = "arbor.toml";

/// Non-fatal configuration warning (unknown key), with a suggestion when a
/// known key is close enough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ArborResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text; `path` only labels errors and warnings.
pub fn parse_with_warnings(content: &str, path: &Path) -> ArborResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ArborError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration.
///
/// An explicit path must load. Otherwise `./arbor.toml`, then the user file
/// (`<config dir>/arbor/config.toml`), then built-in defaults. Environment
/// overrides apply last in every case.
pub fn load_or_default(explicit: Option<&Path>) -> ArborResult<Config> {
    if let Some(path) = explicit {
        return load_reporting(path).map(with_env_overrides);
    }

    let project_config = PathBuf::from(PROJECT_CONFIG_FILE);
    if project_config.exists() {
        if let Ok(config) = load_reporting(&project_config) {
            return Ok(with_env_overrides(config));
        }
    }

    if let Some(user_config_dir) = dirs::config_dir() {
        let user_config = user_config_dir.join("arbor/config.toml");
        if user_config.exists() {
            if let Ok(config) = load_reporting(&user_config) {
                return Ok(with_env_overrides(config));
            }
        }
    }

    debug!("no config file found, using defaults");
    Ok(with_env_overrides(Config::default()))
}

fn load_reporting(path: &Path) -> ArborResult<Config> {
    debug!("loading config from {}", path.display());
    let (config, warnings) = load_with_warnings(path)?;
    for warning in &warnings {
        warn!("{}", warning);
    }
    Ok(config)
}

/// Apply environment variable overrides (ARBOR_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // ARBOR_ID_FIELD
    if let Ok(field) = std::env::var("ARBOR_ID_FIELD") {
        if !field.trim().is_empty() {
            config.tree.id_field = field.trim().to_string();
        }
    }

    // ARBOR_PARENT_FIELD
    if let Ok(field) = std::env::var("ARBOR_PARENT_FIELD") {
        if !field.trim().is_empty() {
            config.tree.parent_field = field.trim().to_string();
        }
    }

    // ARBOR_PADDING (may be empty)
    if let Ok(padding) = std::env::var("ARBOR_PADDING") {
        config.tree.padding = padding;
    }

    // ARBOR_MAX_DEPTH
    if let Ok(depth) = std::env::var("ARBOR_MAX_DEPTH") {
        match depth.trim().parse::<usize>() {
            Ok(depth) if depth > 0 => config.tree.max_depth = depth,
            _ => warn!("ignoring ARBOR_MAX_DEPTH={:?}: expected a positive integer", depth),
        }
    }

    // ARBOR_ICONS (unicode | ascii)
    if let Ok(icons) = std::env::var("ARBOR_ICONS") {
        match icons.to_lowercase().as_str() {
            "ascii" => config.tree.icons = IconSet::ascii(),
            "unicode" => config.tree.icons = IconSet::unicode(),
            other => warn!("ignoring ARBOR_ICONS={:?}: expected 'unicode' or 'ascii'", other),
        }
    }

    // ARBOR_SUBMENU_OPEN
    if let Ok(val) = std::env::var("ARBOR_SUBMENU_OPEN") {
        config.menu.submenu_open = parse_flag(&val);
    }

    config
}

fn parse_flag(val: &str) -> bool {
    !matches!(val.trim().to_lowercase().as_str(), "" | "0" | "false" | "no" | "off")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "tree",
        "id_field",
        "parent_field",
        "marker",
        "padding",
        "max_depth",
        "icons",
        "vertical",
        "branch",
        "corner",
        "menu",
        "submenu_open",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
