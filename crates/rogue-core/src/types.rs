//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH, GROUND_MARGIN};

/// 2D position in screen space (pixels, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// 2D velocity in pixels per reference frame (1.0 delta = one 60 Hz frame).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks actually simulated (paused ticks do not count).
    pub tick: u64,
    /// Elapsed simulated seconds (sum of `delta / 60`).
    pub elapsed_secs: f64,
}

/// Screen-space play area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }

    /// Squared distance, for ordering without the square root.
    pub fn distance_sq_to(&self, other: &Position) -> f32 {
        self.0.distance_squared(other.0)
    }

    /// Unit vector pointing at `other`, or zero when both coincide.
    pub fn direction_to(&self, other: &Position) -> Vec2 {
        (other.0 - self.0).normalize_or_zero()
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f32 {
        self.0.length()
    }
}

impl SimTime {
    /// Advance by one simulated tick covering `dt_secs` seconds.
    pub fn advance(&mut self, dt_secs: f64) {
        self.tick += 1;
        self.elapsed_secs += dt_secs;
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_WIDTH,
            height: DEFAULT_ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }

    /// Y coordinate of the platformer ground line.
    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_MARGIN
    }

    /// Whether a point lies outside the arena by more than `margin`.
    pub fn is_outside(&self, pos: &Position, margin: f32) -> bool {
        pos.x() < -margin
            || pos.x() > self.width + margin
            || pos.y() < -margin
            || pos.y() > self.height + margin
    }
}

/// Circle overlap test used for every hit check in the simulation.
///
/// Two bodies collide when the distance between centers is strictly less
/// than the sum of their radii. No swept test: fast bodies can tunnel.
pub fn collides(a: &Position, a_radius: f32, b: &Position, b_radius: f32) -> bool {
    a.distance_to(b) < a_radius + b_radius
}

/// Per-level stat bundle of a weapon. Upgrades mutate it in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub damage: f32,
    /// Seconds between fires.
    pub cooldown: f32,
    /// Targeting range for the wand, ring radius for the orbit shield.
    pub range: f32,
    /// Projectile speed per frame, or ring angular speed in rad/s.
    pub speed: f32,
    /// Projectiles per volley or orbs in the ring.
    pub amount: u32,
    /// Size factor for hit areas.
    pub area: f32,
    pub duration: Option<f32>,
}
