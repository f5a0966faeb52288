//! Durable run progression: the store the engine publishes outcomes to.
//!
//! Progress is tracked per game mode. The live fields always describe the
//! current mode; the slot for the other mode is swapped in on a mode change.

use serde::{Deserialize, Serialize};

use crate::constants::{EXP_GROWTH, START_MAX_EXP};
use crate::enums::GameMode;

/// One mode's worth of progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerProgress {
    pub hp: f32,
    pub max_hp: f32,
    pub exp: f32,
    pub max_exp: f32,
    pub level: u32,
    pub score: u32,
    pub high_score: u32,
    pub wave: u32,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self {
            hp: 100.0,
            max_hp: 100.0,
            exp: 0.0,
            max_exp: START_MAX_EXP,
            level: 1,
            score: 0,
            high_score: 0,
            wave: 1,
        }
    }
}

impl PlayerProgress {
    /// A run that has not gained anything yet.
    pub fn is_pristine(&self) -> bool {
        self.level == 1 && self.exp == 0.0 && self.wave == 1
    }
}

/// Partial update, applied field by field. `None` leaves a field alone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressPatch {
    pub hp: Option<f32>,
    pub max_hp: Option<f32>,
    pub exp: Option<f32>,
    pub max_exp: Option<f32>,
    pub level: Option<u32>,
    pub score: Option<u32>,
    pub high_score: Option<u32>,
    pub wave: Option<u32>,
}

/// The live progression store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Progression {
    pub progress: PlayerProgress,
    pub is_paused: bool,
    pub is_level_up: bool,
    pub is_game_over: bool,
    pub current_mode: GameMode,
    pub top_down: PlayerProgress,
    pub platformer: PlayerProgress,
}

/// Persisted layout under the `rogue-gamestate` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressionRecord {
    #[serde(flatten)]
    pub progress: PlayerProgress,
    pub current_mode: GameMode,
    pub top_down_progress: PlayerProgress,
    pub platformer_progress: PlayerProgress,
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patch(&mut self, patch: ProgressPatch) {
        let p = &mut self.progress;
        if let Some(v) = patch.hp {
            p.hp = v;
        }
        if let Some(v) = patch.max_hp {
            p.max_hp = v;
        }
        if let Some(v) = patch.exp {
            p.exp = v;
        }
        if let Some(v) = patch.max_exp {
            p.max_exp = v;
        }
        if let Some(v) = patch.level {
            p.level = v;
        }
        if let Some(v) = patch.score {
            p.score = v;
        }
        if let Some(v) = patch.high_score {
            p.high_score = v;
        }
        if let Some(v) = patch.wave {
            p.wave = v;
        }
    }

    pub fn add_score(&mut self, amount: u32) {
        self.progress.score = self.progress.score.saturating_add(amount);
    }

    /// Grant experience. At most one threshold resolves per call: the
    /// remainder is carried forward even if it already exceeds the new
    /// `max_exp`, and the next call resolves it. Returns true on level-up.
    pub fn add_exp(&mut self, amount: f32) -> bool {
        let p = &mut self.progress;
        let total = p.exp + amount;
        if total >= p.max_exp {
            p.exp = total - p.max_exp;
            p.max_exp = (p.max_exp * EXP_GROWTH).floor();
            p.level += 1;
            self.is_level_up = true;
            self.is_paused = true;
            true
        } else {
            p.exp = total;
            false
        }
    }

    /// Set or flip the pause flag.
    pub fn toggle_pause(&mut self, paused: Option<bool>) {
        self.is_paused = paused.unwrap_or(!self.is_paused);
    }

    /// The level-up gate doubles as the pause gate.
    pub fn set_level_up(&mut self, level_up: bool) {
        self.is_level_up = level_up;
        self.is_paused = level_up;
    }

    /// Returns true when a new high score was recorded.
    pub fn set_game_over(&mut self, game_over: bool) -> bool {
        self.is_game_over = game_over;
        self.is_paused = game_over;
        if game_over && self.progress.score > self.progress.high_score {
            self.progress.high_score = self.progress.score;
            return true;
        }
        false
    }

    /// Fresh progress for the current mode. High score survives.
    pub fn reset_game(&mut self) {
        let high_score = self.progress.high_score;
        self.progress = PlayerProgress {
            high_score,
            ..PlayerProgress::default()
        };
    }

    /// Park the live progress in the current mode's slot and load `mode`'s.
    pub fn set_game_mode(&mut self, mode: GameMode) {
        *self.slot_mut(self.current_mode) = self.progress;
        self.progress = *self.slot_mut(mode);
        self.current_mode = mode;
        self.is_game_over = false;
        self.is_paused = false;
    }

    fn slot_mut(&mut self, mode: GameMode) -> &mut PlayerProgress {
        match mode {
            GameMode::TopDown => &mut self.top_down,
            GameMode::Platformer => &mut self.platformer,
        }
    }

    /// Snapshot for persistence with the current slot synced.
    pub fn to_record(&self) -> ProgressionRecord {
        let (top_down, platformer) = match self.current_mode {
            GameMode::TopDown => (self.progress, self.platformer),
            GameMode::Platformer => (self.top_down, self.progress),
        };
        ProgressionRecord {
            progress: self.progress,
            current_mode: self.current_mode,
            top_down_progress: top_down,
            platformer_progress: platformer,
        }
    }

    /// Rebuild from a persisted record. Transient flags start cleared.
    pub fn from_record(record: ProgressionRecord) -> Self {
        Self {
            progress: record.progress,
            is_paused: false,
            is_level_up: false,
            is_game_over: false,
            current_mode: record.current_mode,
            top_down: record.top_down_progress,
            platformer: record.platformer_progress,
        }
    }
}
