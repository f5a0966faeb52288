//! Kind-specific enemy profiles.
//!
//! Consolidates the base stats the spawner scales and the renderer reads.

use rogue_core::enums::{EnemyKind, EnemyShape};

/// Base stats for an enemy kind, before wave scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub radius: f32,
    /// Pursuit speed in pixels per frame.
    pub speed: f32,
    pub hp: f32,
    /// Score awarded on kill.
    pub score: u32,
    /// Value of the gem dropped on kill.
    pub exp: f32,
    pub shape: EnemyShape,
    /// Body color as 0xRRGGBB, also used for death particles.
    pub color: u32,
    /// Whether this kind runs the charge-attack cycle.
    pub charges: bool,
}

/// Get the profile for a given kind.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::Chaser => EnemyProfile {
            radius: 12.0,
            speed: 1.5,
            hp: 100.0,
            score: 10,
            exp: 20.0,
            shape: EnemyShape::Circle,
            color: 0xef4444,
            charges: false,
        },
        EnemyKind::Rusher => EnemyProfile {
            radius: 10.0,
            speed: 1.0,
            hp: 60.0,
            score: 15,
            exp: 20.0,
            shape: EnemyShape::Triangle,
            color: 0xf97316,
            charges: true,
        },
        EnemyKind::Tank => EnemyProfile {
            radius: 18.0,
            speed: 0.8,
            hp: 300.0,
            score: 40,
            exp: 50.0,
            shape: EnemyShape::Square,
            color: 0xa855f7,
            charges: false,
        },
    }
}
