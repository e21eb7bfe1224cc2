//! Configuration loading: TOML file, unknown-key warnings, env overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StagehandError, StagehandResult};

use super::env::parse_port_with_writer;
use super::types::{BootstrapPolicy, Config};

/// Name of the optional config file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "stagehand.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StagehandResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StagehandError::InvalidConfig {
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

/// Load from the project's stagehand.toml, or defaults, then apply env overrides
pub fn load_or_default(project_root: &Path) -> Config {
    let config_path = project_root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        if let Ok(config) = Config::load(&config_path) {
            return with_env_overrides(config);
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides
pub fn with_env_overrides(mut config: Config) -> Config {
    // DATABASE_URL selects the production store; absence keeps the local fallback
    if let Ok(url) = std::env::var("DATABASE_URL") {
        if !url.is_empty() {
            config.database_url = Some(url);
        }
    }

    // PORT - invalid values warn and keep the configured port
    if let Ok(port) = std::env::var("PORT") {
        config.server.port =
            parse_port_with_writer(&port, config.server.port, &mut std::io::stderr());
    }

    // STAGEHAND_PYTHON
    if let Ok(python) = std::env::var("STAGEHAND_PYTHON") {
        if !python.is_empty() {
            config.django.python = python;
        }
    }

    // STAGEHAND_ADMIN_PASSWORD
    if let Ok(password) = std::env::var("STAGEHAND_ADMIN_PASSWORD") {
        if !password.is_empty() {
            config.admin.password = password;
        }
    }

    // STAGEHAND_ADMIN_BOOTSTRAP
    if let Ok(policy) = std::env::var("STAGEHAND_ADMIN_BOOTSTRAP") {
        config.admin.bootstrap = match policy.to_lowercase().as_str() {
            "fatal" => BootstrapPolicy::Fatal,
            "skip" => BootstrapPolicy::Skip,
            _ => BootstrapPolicy::Advisory,
        };
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
        "django",
        "python",
        "manage_py",
        "server",
        "host",
        "port",
        "admin",
        "username",
        "email",
        "password",
        "bootstrap",
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
