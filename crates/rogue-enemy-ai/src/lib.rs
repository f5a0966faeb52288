//! Enemy AI for the survival arena.
//!
//! Per-kind enemy profiles and the pursuit / charge-attack state machine.

pub mod fsm;
pub mod profiles;

pub use rogue_core as core;

#[cfg(test)]
mod tests;
