//! Enemy AI system: runs the enemy FSM and integrates enemy motion.
//!
//! Calls the FSM from rogue-enemy-ai, then writes the results back.

use hecs::{Entity, World};

use rogue_core::components::{Body, Enemy};
use rogue_core::constants::REFERENCE_FPS;
use rogue_core::enums::GameMode;
use rogue_core::types::{Position, Velocity};
use rogue_enemy_ai::fsm::{evaluate, EnemyContext, EnemyUpdate};

use crate::world_setup::PursuitTarget;

/// Evaluate every active enemy, then move it by its velocity.
pub fn run(world: &mut World, mode: GameMode, delta: f32) {
    let dt_secs = delta / REFERENCE_FPS;
    // Collect updates in a buffer to avoid borrow issues with hecs
    let mut updates: Vec<(Entity, EnemyUpdate)> = Vec::new();

    {
        let mut query =
            world.query::<(&Enemy, &Body, &Position, &Velocity, Option<&PursuitTarget>)>();
        for (entity, (enemy, body, pos, vel, target)) in query.iter() {
            if !body.active {
                continue;
            }
            let ctx = EnemyContext {
                kind: enemy.kind,
                phase: enemy.phase,
                position: *pos,
                velocity: *vel,
                target: target.and_then(|t| live_position(world, t.0)),
                speed: enemy.speed,
                phase_timer_secs: enemy.phase_timer_secs,
                charge_dir: enemy.charge_dir,
                mode,
                dt_secs,
            };
            updates.push((entity, evaluate(&ctx)));
        }
    }

    for (entity, update) in updates {
        if let Ok((enemy, pos, vel)) =
            world.query_one_mut::<(&mut Enemy, &mut Position, &mut Velocity)>(entity)
        {
            enemy.phase = update.new_phase;
            enemy.phase_timer_secs = update.phase_timer_secs;
            enemy.charge_dir = update.charge_dir;
            *vel = update.new_velocity;
            pos.0 += vel.0 * delta;
        }
    }
}

/// Position of `entity` if it still exists and is active.
fn live_position(world: &World, entity: Entity) -> Option<Position> {
    let body = world.get::<&Body>(entity).ok()?;
    if !body.active {
        return None;
    }
    world.get::<&Position>(entity).ok().map(|pos| *pos)
}
