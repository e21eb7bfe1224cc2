//! Command implementations

pub mod check;
pub mod deploy;
pub mod version;

use std::path::Path;

use stagehand::config::CONFIG_FILE_NAME;
use stagehand::Config;

/// Load configuration for a project root, printing non-fatal warnings.
pub fn load_config(project_root: &Path) -> anyhow::Result<Config> {
    let config_path = project_root.join(CONFIG_FILE_NAME);
    let config = if config_path.exists() {
        let (config, warnings) = Config::load_with_warnings(&config_path)?;
        for w in &warnings {
            match w.line {
                Some(line) => eprintln!(
                    "⚠ Unknown config key '{}' in {}:{}",
                    w.key,
                    config_path.display(),
                    line
                ),
                None => eprintln!(
                    "⚠ Unknown config key '{}' in {}",
                    w.key,
                    config_path.display()
                ),
            }
            if let Some(suggestion) = &w.suggestion {
                eprintln!("   Did you mean '{}'?", suggestion);
            }
        }
        config
    } else {
        Config::default()
    };

    Ok(config.with_env_overrides())
}
