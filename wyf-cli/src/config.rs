use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CliConfig {
    pub widget: Option<WidgetConfig>,
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WidgetConfig {
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExportConfig {
    /// Directory export files are written into. Defaults to the current
    /// working directory.
    pub directory: Option<String>,
}

impl CliConfig {
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        // Create default config file if it doesn't exist
        if !config_path.exists() {
            let default_config = r#"
[widget]
# title = "Friend Contact Manager"
# subtitle = "Keep track of your friends and when you last contacted them"

[export]
# Directory that export files are written into (default: current directory)
# directory = "/home/me/friends"
"#;
            std::fs::write(&config_path, default_config).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .build()?;

        let config: CliConfig = builder.try_deserialize()?;

        Ok((config, config_path))
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("water-your-friends").join("cli.toml")
    } else {
        PathBuf::from("cli.toml")
    }
}
