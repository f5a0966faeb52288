//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and drained at the start of the next tick, before
//! the pause gate, so a paused run can still be resumed or steered.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Discrete actions outside of per-frame movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin a run. Progress is reset only if the previous run ended or
    /// never got started; otherwise it continues.
    StartRun,
    Pause,
    Resume,
    TogglePause,
    /// Take one of the pending level-up offers.
    ChooseCard { index: usize },
    /// Swap progress slots and restart in the other mode.
    SwitchMode { mode: GameMode },
}
