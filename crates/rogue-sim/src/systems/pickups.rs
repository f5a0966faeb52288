//! Experience gems: idle bob, magnet attraction, homing and pickup.

use hecs::{Entity, World};

use rogue_core::components::{Body, ExpGem};
use rogue_core::constants::{GEM_ACCELERATION, GEM_SNAP_SPEED, GEM_WOBBLE_RATE};
use rogue_core::events::GameEvent;
use rogue_core::progression::Progression;
use rogue_core::types::{collides, Position};

/// Advance every gem and collect the ones touching the player. Homing
/// gems move at their own accelerating speed plus the player's speed, so
/// they always catch up. Returns the number of gems collected.
pub fn run(
    world: &mut World,
    player: Entity,
    player_speed: f32,
    magnet_radius: f32,
    progression: &mut Progression,
    events: &mut Vec<GameEvent>,
    delta: f32,
) -> usize {
    let Some((player_pos, player_radius)) = world
        .query_one_mut::<(&Body, &Position)>(player)
        .ok()
        .filter(|(body, _)| body.active)
        .map(|(body, pos)| (*pos, body.radius))
    else {
        return 0;
    };

    let mut collected = Vec::new();
    for (_entity, (gem, body, pos)) in world.query_mut::<(&mut ExpGem, &mut Body, &mut Position)>() {
        if !body.active {
            continue;
        }
        if gem.attracted {
            gem.homing_speed += GEM_ACCELERATION * delta;
            let dir = pos.direction_to(&player_pos);
            pos.0 += dir * (gem.homing_speed + player_speed) * delta;
        } else {
            gem.wobble_phase += GEM_WOBBLE_RATE * delta;
            if pos.distance_sq_to(&player_pos) < magnet_radius * magnet_radius {
                gem.attracted = true;
                gem.homing_speed = GEM_SNAP_SPEED;
            }
        }

        if collides(pos, body.radius, &player_pos, player_radius) {
            body.die();
            collected.push(gem.value);
        }
    }

    for value in &collected {
        events.push(GameEvent::GemCollected { value: *value });
        if progression.add_exp(*value) {
            events.push(GameEvent::LevelUp {
                level: progression.progress.level,
            });
        }
    }
    collected.len()
}
