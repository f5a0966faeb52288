//! Delayed actions on the simulation's virtual clock.
//!
//! Staggered volleys schedule their later shots here instead of firing them
//! all in one frame. The queue is drained at the start of each simulated
//! tick, so paused time never releases an action. Actions are best-effort:
//! anything still queued when a run ends or the mode switches is dropped.

use hecs::Entity;

use rogue_core::types::Position;

/// A deferred spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DelayedAction {
    /// One bolt of a wand volley. Aims at `target` if it is still alive,
    /// otherwise at where it was when the volley was fired.
    SpawnBolt {
        target: Entity,
        last_known: Position,
        speed: f32,
        damage: f32,
    },
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due_secs: f64,
    action: DelayedAction,
}

/// Pending actions ordered by insertion. Due times within one volley are
/// increasing, so a linear scan stays cheap.
#[derive(Debug, Default)]
pub struct DelayedQueue {
    pending: Vec<Scheduled>,
}

impl DelayedQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to run once the clock reaches `due_secs`.
    pub fn schedule(&mut self, due_secs: f64, action: DelayedAction) {
        self.pending.push(Scheduled { due_secs, action });
    }

    /// Remove and return every action due at `now_secs`, oldest first.
    pub fn drain_due(&mut self, now_secs: f64) -> Vec<DelayedAction> {
        let mut due = Vec::new();
        self.pending.retain(|s| {
            if s.due_secs <= now_secs {
                due.push(s.action);
                false
            } else {
                true
            }
        });
        due
    }

    /// Drop everything still queued. Returns how many actions were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
