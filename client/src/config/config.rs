use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tictactoe_engine::config::Validate;
use tictactoe_engine::games::tictactoe::{DifficultyLevel, HARDER_EXPERT_CHANCE};

use super::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub difficulty: DifficultyLevel,
    #[serde(default = "default_harder_expert_chance")]
    pub harder_expert_chance: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_harder_expert_chance() -> f64 {
    HARDER_EXPERT_CHANCE
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.harder_expert_chance) {
            return Err(format!(
                "harder_expert_chance must be between 0.0 and 1.0, got {}",
                self.harder_expert_chance
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: DifficultyLevel::Expert,
            harder_expert_chance: HARDER_EXPERT_CHANCE,
            seed: None,
        }
    }
}
