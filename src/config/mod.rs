//! Configuration: stagehand.toml in the project root, env overrides, defaults

mod env;
mod loader;
mod types;

pub use env::{parse_port, parse_port_with_writer};
pub use loader::{load_or_default, with_env_overrides, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{AdminConfig, BootstrapPolicy, Config, DjangoConfig, ServerConfig};
