//! Live-tunable game configuration.
//!
//! The engine only reads this; a debug panel or the host may change any
//! field between ticks. Values are not range-checked. A zero or negative
//! knob produces degenerate play, never a crash.

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_SPAWN_INTERVAL_SECS, SPAWN_INTERVAL_STEP_PER_WAVE};
use crate::enums::TutorialStep;

/// Tuning knobs, persisted under the `rogue-config` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Base player speed in pixels per frame.
    pub player_speed: f32,
    /// Player max hp at level 1; also the cap for heal cards.
    pub player_health: f32,
    /// Base seconds between enemy spawns at wave 1.
    pub enemy_spawn_rate: f32,
    /// Multiplier applied to every enemy's speed at spawn.
    pub enemy_speed: f32,
    /// Flat damage added to every projectile.
    pub bullet_damage: f32,
    /// Carried for the debug panel; projectile speeds come from weapon stats.
    pub bullet_speed: f32,
    #[serde(rename = "isGodMode")]
    pub god_mode: bool,
    /// Time scale applied to the incoming delta.
    pub game_speed: f32,
    pub magnet_radius: f32,
    pub damage_multiplier: f32,
    pub speed_multiplier: f32,
    pub damage_per_level: f32,
    pub speed_per_level: f32,
    pub card_damage_boost: f32,
    pub card_speed_boost: f32,
    pub tutorial: TutorialState,
}

/// Onboarding flags. Each is set once and stays set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TutorialState {
    pub has_moved: bool,
    pub has_attacked: bool,
    pub has_collected_gem: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_speed: 3.0,
            player_health: 100.0,
            enemy_spawn_rate: 2.0,
            enemy_speed: 1.0,
            bullet_damage: 25.0,
            bullet_speed: 5.0,
            god_mode: false,
            game_speed: 1.0,
            magnet_radius: 100.0,
            damage_multiplier: 1.0,
            speed_multiplier: 1.0,
            damage_per_level: 0.05,
            speed_per_level: 0.02,
            card_damage_boost: 0.25,
            card_speed_boost: 0.15,
            tutorial: TutorialState::default(),
        }
    }
}

impl GameConfig {
    /// Restore every knob to its default. Tutorial progress is kept.
    pub fn reset(&mut self) {
        let tutorial = std::mem::take(&mut self.tutorial);
        *self = Self::default();
        self.tutorial = tutorial;
    }

    /// Forget which tutorial hints were already shown.
    pub fn reset_tutorial(&mut self) {
        self.tutorial = TutorialState::default();
    }

    /// Pretty JSON export for sharing a tuning.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Import a tuning. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Damage multiplier at a player level, before run bonuses.
    pub fn damage_multiplier_at(&self, level: u32) -> f32 {
        self.damage_multiplier + level.saturating_sub(1) as f32 * self.damage_per_level
    }

    /// Speed multiplier at a player level, before run bonuses.
    pub fn speed_multiplier_at(&self, level: u32) -> f32 {
        self.speed_multiplier + level.saturating_sub(1) as f32 * self.speed_per_level
    }

    /// Seconds between spawns at `wave`, floored.
    pub fn spawn_interval(&self, wave: u32) -> f32 {
        let step = wave.saturating_sub(1) as f32 * SPAWN_INTERVAL_STEP_PER_WAVE;
        (self.enemy_spawn_rate - step).max(MIN_SPAWN_INTERVAL_SECS)
    }

    pub fn tutorial_done(&self, step: TutorialStep) -> bool {
        match step {
            TutorialStep::HasMoved => self.tutorial.has_moved,
            TutorialStep::HasAttacked => self.tutorial.has_attacked,
            TutorialStep::HasCollectedGem => self.tutorial.has_collected_gem,
        }
    }

    pub fn complete_tutorial_step(&mut self, step: TutorialStep) {
        match step {
            TutorialStep::HasMoved => self.tutorial.has_moved = true,
            TutorialStep::HasAttacked => self.tutorial.has_attacked = true,
            TutorialStep::HasCollectedGem => self.tutorial.has_collected_gem = true,
        }
    }
}
