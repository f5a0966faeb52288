//! Player system: maps input to velocity, integrates, clamps to the arena.

use hecs::{Entity, World};

use rogue_core::components::{Body, Gravity, Player};
use rogue_core::config::GameConfig;
use rogue_core::constants::{JUMP_IMPULSE, JUMP_INPUT_THRESHOLD};
use rogue_core::enums::GameMode;
use rogue_core::input::InputFrame;
use rogue_core::progression::{ProgressPatch, Progression};
use rogue_core::types::{Arena, Position, Velocity};

/// Refresh derived stats, apply input and move the player. Returns true
/// when the input asked for movement this tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    player: Entity,
    input: &InputFrame,
    speed: f32,
    config: &GameConfig,
    progression: &mut Progression,
    mode: GameMode,
    arena: &Arena,
    delta: f32,
) -> bool {
    progression.patch(ProgressPatch {
        max_hp: Some(config.player_health),
        ..Default::default()
    });

    let Ok((p, body, pos, vel, gravity)) = world.query_one_mut::<(
        &mut Player,
        &mut Body,
        &mut Position,
        &mut Velocity,
        Option<&mut Gravity>,
    )>(player) else {
        return false;
    };
    if !body.active {
        return false;
    }

    p.speed = speed;
    body.max_hp = config.player_health;
    body.hp = progression.progress.hp;

    let movement = input.movement();
    match mode {
        GameMode::TopDown => {
            vel.0 = movement.normalize_or_zero() * speed;
        }
        GameMode::Platformer => {
            vel.0.x = movement.x * speed;
            if let Some(gravity) = gravity {
                if movement.y < JUMP_INPUT_THRESHOLD && gravity.grounded {
                    vel.0.y = JUMP_IMPULSE;
                    gravity.grounded = false;
                }
            }
        }
    }

    pos.0 += vel.0 * delta;
    clamp_to_arena(pos, body.radius, mode, arena);

    movement.x != 0.0 || movement.y != 0.0
}

/// Keep the player on screen. Platformer mode bounds the vertical axis by
/// the ground line instead of the bottom edge.
pub fn clamp_to_arena(pos: &mut Position, radius: f32, mode: GameMode, arena: &Arena) {
    let max_y = match mode {
        GameMode::TopDown => arena.height - radius,
        GameMode::Platformer => arena.ground_y() - radius,
    };
    pos.0.x = pos.0.x.clamp(radius, (arena.width - radius).max(radius));
    pos.0.y = pos.0.y.clamp(radius, max_y.max(radius));
}
