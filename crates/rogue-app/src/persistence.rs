//! JSON persistence of the progression and config records.
//!
//! Two files per save directory, one per storage key. Loading never fails:
//! a missing or corrupt record falls back to defaults with a warning.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use rogue_core::config::GameConfig;
use rogue_core::progression::{Progression, ProgressionRecord};

pub const GAMESTATE_FILE: &str = "rogue-gamestate.json";
pub const CONFIG_FILE: &str = "rogue-config.json";

#[derive(Debug)]
pub enum PersistError {
    Io(io::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Io(e) => write!(f, "save file I/O failed: {e}"),
            PersistError::Serialization(e) => write!(f, "save data is not valid JSON: {e}"),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistError::Io(e) => Some(e),
            PersistError::Serialization(e) => Some(e),
        }
    }
}

impl From<io::Error> for PersistError {
    fn from(e: io::Error) -> Self {
        PersistError::Io(e)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(e: serde_json::Error) -> Self {
        PersistError::Serialization(e)
    }
}

pub fn gamestate_path(dir: &Path) -> PathBuf {
    dir.join(GAMESTATE_FILE)
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PersistError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Write both records, creating `dir` if needed.
pub fn save_records(dir: &Path, progression: &Progression, config: &GameConfig) -> Result<(), PersistError> {
    fs::create_dir_all(dir)?;
    write_json(&gamestate_path(dir), &progression.to_record())?;
    write_json(&config_path(dir), config)?;
    Ok(())
}

/// Load both records. Transient flags (pause, level-up, game over) always
/// start cleared.
pub fn load_records(dir: &Path) -> (Progression, GameConfig) {
    let progression = match read_json::<ProgressionRecord>(&gamestate_path(dir)) {
        Ok(record) => Progression::from_record(record),
        Err(e) => {
            warn!(error = %e, dir = %dir.display(), "no usable progression record, starting fresh");
            Progression::new()
        }
    };
    let config = match read_json::<GameConfig>(&config_path(dir)) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, dir = %dir.display(), "no usable config record, using defaults");
            GameConfig::default()
        }
    };
    (progression, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rogue_core::enums::GameMode;
    use rogue_core::progression::ProgressPatch;

    fn fresh_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn save_and_load_records() {
        let dir = fresh_dir("rogue_test_save_load");

        let mut progression = Progression::new();
        progression.patch(ProgressPatch {
            level: Some(4),
            score: Some(900),
            high_score: Some(1200),
            ..Default::default()
        });
        progression.set_game_mode(GameMode::Platformer);
        progression.add_score(15);
        progression.set_game_over(true);

        let mut config = GameConfig::default();
        config.player_speed = 4.5;
        config.god_mode = true;

        save_records(&dir, &progression, &config).unwrap();
        assert!(gamestate_path(&dir).exists());
        assert!(config_path(&dir).exists());

        let (loaded, loaded_config) = load_records(&dir);
        assert_eq!(loaded.current_mode, GameMode::Platformer);
        assert_eq!(loaded.progress.score, 15);
        assert_eq!(loaded.top_down.level, 4);
        assert_eq!(loaded.top_down.high_score, 1200);
        assert!(!loaded.is_game_over);
        assert!(!loaded.is_paused);
        assert_eq!(loaded_config, config);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_records_fall_back_to_defaults() {
        let dir = fresh_dir("rogue_test_missing");
        let (progression, config) = load_records(&dir);
        assert_eq!(progression, Progression::new());
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn corrupt_record_falls_back_alone() {
        let dir = fresh_dir("rogue_test_corrupt");
        fs::create_dir_all(&dir).unwrap();
        fs::write(gamestate_path(&dir), "{ not json").unwrap();
        fs::write(config_path(&dir), r#"{"playerSpeed": 6.0}"#).unwrap();

        let (progression, config) = load_records(&dir);
        assert_eq!(progression, Progression::new());
        assert_eq!(config.player_speed, 6.0);
        assert_eq!(config.player_health, 100.0);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn read_errors_are_typed() {
        let dir = fresh_dir("rogue_test_typed");
        let err = read_json::<GameConfig>(&config_path(&dir)).unwrap_err();
        assert!(matches!(err, PersistError::Io(_)));

        fs::create_dir_all(&dir).unwrap();
        fs::write(config_path(&dir), "[1, 2").unwrap();
        let err = read_json::<GameConfig>(&config_path(&dir)).unwrap_err();
        assert!(matches!(err, PersistError::Serialization(_)));
        assert!(err.to_string().contains("not valid JSON"));

        let _ = fs::remove_dir_all(&dir);
    }
}
