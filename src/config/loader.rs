//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ZoteroError, ZoteroResult};

use super::types::Config;

/// Explicit config file path, bypassing the per-user location.
pub const CONFIG_PATH_ENV: &str = "ZOTERO_COLLECTION_CONFIG";

/// Non-fatal configuration warning.
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
pub fn load_with_warnings(path: &Path) -> ZoteroResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ZoteroError::Config {
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
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the user config (or defaults) and apply environment overrides.
///
/// A broken config file is reported and then ignored.
pub fn load_or_default() -> Config {
    let config = match config_path() {
        Some(path) if path.exists() => match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    tracing::warn!("{}", warning);
                }
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            Err(err) => {
                tracing::warn!(error = %err, "ignoring config file");
                Config::default()
            }
        },
        _ => Config::default(),
    };

    with_env_overrides(config, |name| std::env::var(name).ok())
}

/// `$ZOTERO_COLLECTION_CONFIG`, else `<config_dir>/zotero-collection/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => dirs::config_dir().map(|dir| dir.join("zotero-collection").join("config.toml")),
    }
}

/// Apply environment variable overrides.
///
/// - `ZOTERO_PORT` - port number
/// - `ZOTERO_COLLECTION_FINDER` - fuzzy finder program
/// - `ZOTERO_COLLECTION_NO_FZF` - any non-empty value disables the fuzzy finder
pub fn with_env_overrides<F>(mut config: Config, get_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = get_env("ZOTERO_PORT") {
        match port.trim().parse::<u16>() {
            Ok(port) => config.connection.port = port,
            Err(_) => tracing::warn!(value = %port, "ignoring invalid ZOTERO_PORT"),
        }
    }

    if let Some(program) = get_env("ZOTERO_COLLECTION_FINDER") {
        if !program.trim().is_empty() {
            config.selector.program = program.trim().to_string();
        }
    }

    if get_env("ZOTERO_COLLECTION_NO_FZF").is_some_and(|v| !v.is_empty()) {
        config.selector.fuzzy = false;
    }

    config
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
        "connection",
        "port",
        "selector",
        "fuzzy",
        "program",
        "args",
        "output",
        "color",
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
