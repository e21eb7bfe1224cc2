//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StagehandResult;

use super::loader::{self, ConfigWarning};

/// Django invocation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DjangoConfig {
    /// Interpreter used to run manage.py
    #[serde(default = "default_python")]
    pub python: String,

    /// Path to manage.py, relative to the project root
    #[serde(default = "default_manage_py")]
    pub manage_py: PathBuf,
}

impl Default for DjangoConfig {
    fn default() -> Self {
        Self {
            python: default_python(),
            manage_py: default_manage_py(),
        }
    }
}

fn default_python() -> String {
    "python".to_string()
}

fn default_manage_py() -> PathBuf {
    PathBuf::from("manage.py")
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Failure policy for the admin bootstrap step.
///
/// The bootstrap failure used to be silently ignored; this makes the choice
/// explicit and configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BootstrapPolicy {
    /// Warn on failure and continue
    #[default]
    Advisory,
    /// Abort the whole deployment on failure
    Fatal,
    /// Do not run the bootstrap step at all
    Skip,
}

/// Admin account bootstrap configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_admin_username")]
    pub username: String,

    #[serde(default = "default_admin_email")]
    pub email: String,

    /// Override with STAGEHAND_ADMIN_PASSWORD in real deployments
    #[serde(default = "default_admin_password")]
    pub password: String,

    #[serde(default)]
    pub bootstrap: BootstrapPolicy,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_admin_username(),
            email: default_admin_email(),
            password: default_admin_password(),
            bootstrap: BootstrapPolicy::default(),
        }
    }
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_email() -> String {
    "admin@example.com".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub django: DjangoConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub admin: AdminConfig,

    /// Database URL, normally injected via the DATABASE_URL env var.
    /// None selects Django's local file-based fallback store.
    #[serde(skip)]
    pub database_url: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StagehandResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StagehandResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the project's stagehand.toml, or defaults
    pub fn load_or_default(project_root: &Path) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Absolute path to manage.py for a given project root
    pub fn manage_py_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.django.manage_py)
    }

    /// Informational message about the selected data store.
    ///
    /// Purely advisory; the deployment proceeds either way.
    pub fn database_notice(&self) -> &'static str {
        if self.database_url.is_some() {
            "Production database configured via DATABASE_URL"
        } else {
            "DATABASE_URL not set - falling back to local SQLite database"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_original_script() {
        let config = Config::default();
        assert_eq!(config.django.python, "python");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.admin.username, "admin");
        assert_eq!(config.admin.email, "admin@example.com");
        assert_eq!(config.admin.bootstrap, BootstrapPolicy::Advisory);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn manage_py_path_joins_project_root() {
        let config = Config::default();
        assert_eq!(
            config.manage_py_path(Path::new("/srv/app")),
            PathBuf::from("/srv/app/manage.py")
        );
    }

    #[test]
    fn database_notice_reports_fallback_when_unset() {
        let config = Config::default();
        assert!(config.database_notice().contains("falling back"));

        let mut config = Config::default();
        config.database_url = Some("postgres://db/app".to_string());
        assert!(config.database_notice().contains("Production database"));
    }

    #[test]
    fn bootstrap_policy_parses_from_toml() {
        let config: Config = toml::from_str("[admin]\nbootstrap = \"fatal\"").unwrap();
        assert_eq!(config.admin.bootstrap, BootstrapPolicy::Fatal);
    }
}
