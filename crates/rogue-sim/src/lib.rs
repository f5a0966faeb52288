//! Simulation engine for the survival arena.
//!
//! Owns the hecs ECS world, advances it once per host frame, and produces
//! `FrameSnapshot`s for whatever renders it.

pub mod cards;
pub mod delayed;
pub mod engine;
pub mod systems;
pub mod weapons;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use rogue_core as core;
