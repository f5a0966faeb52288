//! ECS components for hecs entities.
//!
//! Components are plain data. The one exception is `Body`, which carries
//! the damage/death contract every tracked entity shares.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Base contract for anything tracked spatially: collision radius, health
/// and the active flag. Once `active` is false the entity takes no further
/// part in the simulation and is purged at the end of the tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub radius: f32,
    pub hp: f32,
    pub max_hp: f32,
    pub active: bool,
}

impl Body {
    pub fn new(radius: f32, hp: f32) -> Self {
        Self {
            radius,
            hp,
            max_hp: hp,
            active: true,
        }
    }

    /// Subtract `amount` from hp. Returns true only on the call that
    /// killed the entity; damage to an inactive body is ignored.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.active {
            return false;
        }
        self.hp -= amount;
        if self.hp <= 0.0 {
            self.die();
            return true;
        }
        false
    }

    /// Mark the entity as destroyed.
    pub fn die(&mut self) {
        self.active = false;
    }
}

/// The player avatar. Speed is re-derived from config every tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Player {
    pub speed: f32,
}

/// Enemy data fixed at spawn plus the charge sub-state used by rushers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Pursuit speed, wave-scaled at spawn and never rescaled.
    pub speed: f32,
    pub phase: ChargePhase,
    /// Seconds left in the current charge phase.
    pub phase_timer_secs: f32,
    /// Direction snapshotted when a charge launches.
    pub charge_dir: Vec2,
}

/// How a projectile moves after it leaves the weapon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProjectileMotion {
    /// Straight line at constant velocity.
    Bolt,
    /// Ballistic arc: vertical velocity grows by `gravity` every frame.
    Arc {
        gravity: f32,
        spin: f32,
        spawn_y: f32,
    },
}

/// Damage payload carried by a projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub damage: f32,
    /// Remaining lifetime in reference frames.
    pub ttl_frames: f32,
    pub motion: ProjectileMotion,
}

/// Experience pickup dropped by a dead enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExpGem {
    pub value: f32,
    /// Once set, the gem homes toward the player until collected.
    pub attracted: bool,
    pub homing_speed: f32,
    /// Phase of the idle bob, purely cosmetic.
    pub wobble_phase: f32,
}

/// Opt-in platformer physics: gravity accumulates into `Velocity.y`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Gravity {
    pub grounded: bool,
}
