//! Read-only views of the simulation, rebuilt every tick for the host.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::progression::PlayerProgress;
use crate::types::{SimTime, WeaponStats};

/// Everything a host needs to draw one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub mode: GameMode,
    pub progress: ProgressView,
    /// `None` until a run has started.
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub gems: Vec<GemView>,
    pub weapons: Vec<WeaponView>,
    /// World positions of the orbit shield's orbs.
    pub orbit_points: Vec<[f32; 2]>,
    /// Pending level-up offers, empty unless the level-up gate is open.
    pub card_offers: Vec<CardOffer>,
    /// Fraction of the current wave elapsed, in [0, 1).
    pub wave_progress: f32,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressView {
    pub stats: PlayerProgress,
    pub is_paused: bool,
    pub is_level_up: bool,
    pub is_game_over: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
    pub grounded: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub shape: EnemyShape,
    pub color: u32,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub hp: f32,
    pub max_hp: f32,
    pub phase: ChargePhase,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Visual spin in radians, zero for bolts.
    pub rotation: f32,
    pub is_axe: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GemView {
    pub x: f32,
    pub y: f32,
    pub value: f32,
    pub attracted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponView {
    pub kind: WeaponKind,
    pub id: String,
    pub name: String,
    pub level: u32,
    pub max_level: u32,
    pub stats: WeaponStats,
}

/// One level-up choice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CardOffer {
    /// Level an owned weapon to `next_level`.
    Upgrade { weapon: WeaponKind, next_level: u32 },
    /// Equip a weapon not yet in the roster.
    NewWeapon { weapon: WeaponKind },
    /// Permanent damage boost for the rest of the run.
    Might { bonus: f32 },
    /// Permanent speed boost for the rest of the run.
    Haste { bonus: f32 },
    /// Restore hp, capped at the configured player health.
    Heal { amount: f32 },
}
