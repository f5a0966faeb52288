//! Core types and definitions for the survival arena simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, input, live config, progression, events, snapshots
//! and constants. It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod progression;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
