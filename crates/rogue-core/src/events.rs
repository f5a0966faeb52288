//! Fire-and-forget effect triggers emitted by the simulation.
//!
//! The engine never reads effect state back. Hosts drain these from the
//! frame snapshot and drive damage text, particles and camera shake.

use serde::{Deserialize, Serialize};

use crate::enums::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Floating damage number.
    DamageNumber {
        x: f32,
        y: f32,
        amount: f32,
        is_crit: bool,
    },
    /// Particle burst, color as 0xRRGGBB.
    Particles { x: f32, y: f32, count: u32, color: u32 },
    ScreenShake { intensity: f32, duration: f32 },
    EnemyKilled {
        kind: EnemyKind,
        x: f32,
        y: f32,
        score: u32,
    },
    GemCollected { value: f32 },
    LevelUp { level: u32 },
    WaveStarted { wave: u32 },
    GameOver { score: u32, new_high_score: bool },
    /// A tutorial milestone was reached for the first time.
    TutorialStep { step: TutorialStep },
}
