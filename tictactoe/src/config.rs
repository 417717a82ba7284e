use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{check_board_size, default_players, InvalidConfig, Player, DEFAULT_BOARD_SIZE};

/// Everything needed to set up a [`Game`](crate::Game).
///
/// Both fields may be left out of the JSON representation, in which case the
/// defaults (`X` and `O` on a 3 x 3 board) are used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// In turn order. The first player starts.
    #[serde(default = "default_players")]
    pub players: Vec<Player>,
    #[serde(default = "default_board_size")]
    pub board_size: usize,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: default_players(),
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl GameConfig {
    /// Reads a config from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read game config '{}'", path.display()))?;
        let config: GameConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Could not parse game config '{}'", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.players.is_empty() {
            return Err(InvalidConfig::NoPlayers);
        }
        check_board_size(self.board_size)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::MAX_BOARD_SIZE;

    #[test]
    fn missing_fields_use_defaults() {
        let config: GameConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GameConfig::default());

        let config: GameConfig = serde_json::from_str(r#"{"board_size": 5}"#).unwrap();
        assert_eq!(config.board_size, 5);
        assert_eq!(config.players, default_players());
    }

    #[test]
    fn validate() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
        let no_players = GameConfig {
            players: vec![],
            ..GameConfig::default()
        };
        assert_eq!(no_players.validate(), Err(InvalidConfig::NoPlayers));
        let no_board = GameConfig {
            board_size: 0,
            ..GameConfig::default()
        };
        assert_eq!(no_board.validate(), Err(InvalidConfig::ZeroBoardSize));
        let huge_board = GameConfig {
            board_size: MAX_BOARD_SIZE + 1,
            ..GameConfig::default()
        };
        assert_eq!(
            huge_board.validate(),
            Err(InvalidConfig::BoardTooLarge { size: MAX_BOARD_SIZE + 1 })
        );
        let largest = GameConfig {
            board_size: MAX_BOARD_SIZE,
            ..GameConfig::default()
        };
        assert_eq!(largest.validate(), Ok(()));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"players": [{{"label": "A", "color": "green"}}, {{"label": "B", "color": "pink"}}, {{"label": "C", "color": "gray"}}], "board_size": 4}}"#
        )
        .unwrap();
        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.board_size, 4);
        assert_eq!(
            config.players.iter().map(|p| p.label.as_str()).collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn load_rejects_invalid_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"players": []}}"#).unwrap();
        let err = GameConfig::load(file.path()).unwrap_err();
        assert_eq!(err.downcast_ref::<InvalidConfig>(), Some(&InvalidConfig::NoPlayers));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"board_size": 18446744073709551615}}"#).unwrap();
        let err = GameConfig::load(file.path()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidConfig>(),
            Some(&InvalidConfig::BoardTooLarge { size: usize::MAX })
        );

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(GameConfig::load(file.path()).is_err());
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Could not read game config"));
    }
}
