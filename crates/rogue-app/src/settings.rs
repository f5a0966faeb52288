//! Host settings read from the environment.

use std::path::PathBuf;

pub const DEFAULT_SAVE_DIR: &str = "./saves";
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_TICK_HZ: u32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Directory holding `rogue-gamestate.json` and `rogue-config.json`.
    pub save_dir: PathBuf,
    pub seed: u64,
    /// Game loop frequency. Zero is treated as unset.
    pub tick_hz: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            seed: DEFAULT_SEED,
            tick_hz: DEFAULT_TICK_HZ,
        }
    }
}

impl AppSettings {
    /// `ROGUE_SAVE_DIR`, `ROGUE_SEED` and `ROGUE_TICK_HZ`, each falling back
    /// to its default when unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            save_dir: lookup("ROGUE_SAVE_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.save_dir),
            seed: lookup("ROGUE_SEED")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.seed),
            tick_hz: lookup("ROGUE_TICK_HZ")
                .and_then(|v| v.parse().ok())
                .filter(|hz| *hz > 0)
                .unwrap_or(defaults.tick_hz),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = AppSettings::from_lookup(|_| None);
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.save_dir, PathBuf::from("./saves"));
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.tick_hz, 60);
    }

    #[test]
    fn reads_overrides() {
        let settings = AppSettings::from_lookup(lookup_from(&[
            ("ROGUE_SAVE_DIR", "/tmp/rogue"),
            ("ROGUE_SEED", "7"),
            ("ROGUE_TICK_HZ", "120"),
        ]));
        assert_eq!(settings.save_dir, PathBuf::from("/tmp/rogue"));
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.tick_hz, 120);
    }

    #[test]
    fn bad_values_fall_back() {
        let settings = AppSettings::from_lookup(lookup_from(&[
            ("ROGUE_SAVE_DIR", ""),
            ("ROGUE_SEED", "not-a-number"),
            ("ROGUE_TICK_HZ", "0"),
        ]));
        assert_eq!(settings, AppSettings::default());
    }
}
