//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or is passed in.

pub mod cleanup;
pub mod combat;
pub mod enemy_ai;
pub mod physics;
pub mod pickups;
pub mod player;
pub mod projectiles;
pub mod snapshot;
pub mod wave_spawner;
