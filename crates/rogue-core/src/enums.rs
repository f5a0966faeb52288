//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which ruleset the arena runs under. Each mode keeps its own progress slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    /// Open arena, free movement on both axes.
    #[default]
    TopDown,
    /// Side view with gravity, a ground line and jumping.
    Platformer,
}

/// Enemy archetype, fixed at spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Steady pursuer, the basic type.
    #[default]
    Chaser,
    /// Fast, fragile, attacks in charge bursts.
    Rusher,
    /// Slow and heavily armored.
    Tank,
}

/// Silhouette hint for the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyShape {
    #[default]
    Circle,
    Triangle,
    Square,
}

/// Charge-attack sub-state. Only rushers leave `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargePhase {
    /// Steering toward the target.
    #[default]
    Idle,
    /// Holding still during windup.
    Charging,
    /// Coasting after a launch while velocity decays.
    Cooldown,
}

/// The closed set of weapons the roster can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Auto-aimed bolts at the nearest enemies.
    MagicWand,
    /// Rotating ring of damaging orbs.
    OrbitShield,
    /// Lobbed axes that arc under gravity.
    Axe,
}

/// Onboarding milestones the host may surface as hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TutorialStep {
    HasMoved,
    HasAttacked,
    HasCollectedGem,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 3] = [
        WeaponKind::MagicWand,
        WeaponKind::OrbitShield,
        WeaponKind::Axe,
    ];

    /// Stable id used for roster uniqueness and card offers.
    pub fn id(&self) -> &'static str {
        match self {
            WeaponKind::MagicWand => "magic_wand",
            WeaponKind::OrbitShield => "orbit_shield",
            WeaponKind::Axe => "axe",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WeaponKind::MagicWand => "Magic Wand",
            WeaponKind::OrbitShield => "Orbit Shield",
            WeaponKind::Axe => "Axe",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WeaponKind::MagicWand => "Fires at the nearest enemy",
            WeaponKind::OrbitShield => "Orbs rotate around you, pushing enemies away",
            WeaponKind::Axe => "Throws axes in a high arc",
        }
    }

    pub fn from_id(id: &str) -> Option<WeaponKind> {
        WeaponKind::ALL.into_iter().find(|k| k.id() == id)
    }
}
