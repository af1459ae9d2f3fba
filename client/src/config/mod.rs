mod config;

pub(crate) use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, YamlConfigSerializer,
};

pub use config::{Config, get_config_manager};
