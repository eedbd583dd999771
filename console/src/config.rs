use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::TicTacToeSessionSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";
const MAX_COMPUTER_DELAY_MS: u64 = 10_000;

pub fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<String>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub tictactoe: TicTacToeSessionSettings,
    pub computer_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "Computer delay ({} ms) cannot exceed {} ms",
                self.computer_delay_ms, MAX_COMPUTER_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tictactoe: TicTacToeSessionSettings::default(),
            computer_delay_ms: 500,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::{FirstPlayer, GameMode, SymbolSet};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_console_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_by_manager() {
        let config = Config {
            tictactoe: TicTacToeSessionSettings {
                mode: GameMode::Chaos,
                first_player: FirstPlayer::Human,
                symbol_set: SymbolSet::Shuffled,
            },
            computer_delay_ms: 0,
            seed: Some(12345),
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config(), Ok(config.clone()));

        let fresh_manager = get_config_manager(Some(file_path.clone()));
        assert_eq!(fresh_manager.get_config(), Ok(config));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some("this_file_does_not_exist.yaml".to_string()));
        assert_eq!(manager.get_config(), Ok(Config::default()));
    }

    #[test]
    fn test_seed_may_be_omitted() {
        let yaml = "tictactoe:\n  mode: two_player\n  first_player: human\n  symbol_set: classic\ncomputer_delay_ms: 250\n";
        let config: Config = YamlConfigSerializer::new().deserialize(yaml).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.tictactoe.mode, GameMode::TwoPlayer);
        assert_eq!(config.computer_delay_ms, 250);
    }

    #[test]
    fn test_too_long_delay_is_rejected() {
        let config = Config {
            computer_delay_ms: 60_000,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err("Computer delay (60000 ms) cannot exceed 10000 ms".to_string())
        );
    }

    #[test]
    fn test_provider_does_not_create_file_on_rejected_save() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));
        let config = Config {
            computer_delay_ms: 60_000,
            ..Config::default()
        };
        assert!(manager.set_config(&config).is_err());
        let provider = FileContentConfigProvider::new(file_path);
        assert_eq!(provider.get_config_content(), Ok(None));
    }
}
