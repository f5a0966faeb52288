//! Cleanup system: purges inactive entities once per tick.

use hecs::{Entity, World};

use rogue_core::components::Body;

/// Despawn every inactive entity except `keep` (the player, whose liveness
/// is owned by the run). Runs after collision resolution so nothing is
/// removed while another system may still reference it this tick.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, keep: Option<Entity>) {
    despawn_buffer.clear();

    for (entity, body) in world.query_mut::<&Body>() {
        if !body.active && Some(entity) != keep {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
