//! Wave and spawn timers.
//!
//! The wave timer advances difficulty every `WAVE_DURATION_SECS`; the spawn
//! timer releases one enemy per interval, shrinking with the wave number.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use rogue_core::config::GameConfig;
use rogue_core::constants::*;
use rogue_core::enums::{EnemyKind, GameMode};
use rogue_core::events::GameEvent;
use rogue_core::progression::{ProgressPatch, Progression};
use rogue_core::types::{Arena, Position};
use rogue_enemy_ai::profiles::get_profile;

use crate::world_setup;

/// Elapsed-seconds accumulators for the current wave and the next spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WaveTimers {
    pub wave_secs: f32,
    pub spawn_secs: f32,
}

impl WaveTimers {
    /// Fraction of the current wave elapsed, for UI feedback only.
    pub fn wave_progress(&self) -> f32 {
        (self.wave_secs / WAVE_DURATION_SECS).clamp(0.0, 1.0)
    }
}

/// Environment the spawner reads from.
pub struct SpawnContext<'a> {
    pub config: &'a GameConfig,
    pub arena: &'a Arena,
    pub mode: GameMode,
    pub player: Option<Entity>,
}

/// Advance both timers by `dt_secs`, rolling the wave and spawning as due.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timers: &mut WaveTimers,
    progression: &mut Progression,
    ctx: &SpawnContext<'_>,
    events: &mut Vec<GameEvent>,
    dt_secs: f32,
) {
    timers.wave_secs += dt_secs;
    if timers.wave_secs >= WAVE_DURATION_SECS {
        timers.wave_secs = 0.0;
        let wave = progression.progress.wave + 1;
        progression.patch(ProgressPatch {
            wave: Some(wave),
            ..Default::default()
        });
        progression.add_score(WAVE_CLEAR_BONUS);
        events.push(GameEvent::WaveStarted { wave });
        info!(wave, "wave advanced");
    }

    timers.spawn_secs += dt_secs;
    let wave = progression.progress.wave;
    if timers.spawn_secs >= ctx.config.spawn_interval(wave) {
        timers.spawn_secs = 0.0;
        let kind = pick_enemy_kind(rng, wave);
        let position = spawn_position(rng, ctx.arena, ctx.mode, kind);
        world_setup::spawn_enemy(world, kind, position, wave, ctx.config, ctx.player, ctx.mode);
        debug!(?kind, wave, x = position.x(), y = position.y(), "enemy spawned");
    }
}

/// Wave-gated weighted kind roll: chasers only before wave 3, then 20%
/// rushers, and from wave 5 another 20% tanks.
pub fn pick_enemy_kind(rng: &mut ChaCha8Rng, wave: u32) -> EnemyKind {
    if wave < RUSHER_MIN_WAVE {
        return EnemyKind::Chaser;
    }
    let roll: f64 = rng.gen();
    if roll < RUSHER_SPAWN_CHANCE {
        EnemyKind::Rusher
    } else if wave >= TANK_MIN_WAVE && roll < RUSHER_SPAWN_CHANCE + TANK_SPAWN_CHANCE {
        EnemyKind::Tank
    } else {
        EnemyKind::Chaser
    }
}

/// A point just off screen: any edge in top-down mode, the left or right
/// end of the ground line in platformer mode.
pub fn spawn_position(rng: &mut ChaCha8Rng, arena: &Arena, mode: GameMode, kind: EnemyKind) -> Position {
    let left = -SPAWN_EDGE_OFFSET;
    let right = arena.width + SPAWN_EDGE_OFFSET;
    match mode {
        GameMode::TopDown => {
            if rng.gen_bool(0.5) {
                let x = if rng.gen_bool(0.5) { left } else { right };
                Position::new(x, rng.gen_range(0.0..=arena.height))
            } else {
                let y = if rng.gen_bool(0.5) {
                    -SPAWN_EDGE_OFFSET
                } else {
                    arena.height + SPAWN_EDGE_OFFSET
                };
                Position::new(rng.gen_range(0.0..=arena.width), y)
            }
        }
        GameMode::Platformer => {
            let x = if rng.gen_bool(0.5) { left } else { right };
            Position::new(x, arena.ground_y() - get_profile(kind).radius)
        }
    }
}
