//! Platformer physics: gravity and ground contact.

use hecs::World;

use rogue_core::components::{Body, Gravity};
use rogue_core::constants::GRAVITY;
use rogue_core::types::{Arena, Position, Velocity};

/// Accumulate gravity for every physics-enabled entity, then land anything
/// whose lower edge reached the ground line.
pub fn run(world: &mut World, arena: &Arena, delta: f32) {
    let ground = arena.ground_y();
    for (_entity, (gravity, body, pos, vel)) in
        world.query_mut::<(&mut Gravity, &Body, &mut Position, &mut Velocity)>()
    {
        if !body.active {
            continue;
        }
        vel.0.y += GRAVITY * delta;
        if pos.0.y + body.radius >= ground {
            pos.0.y = ground - body.radius;
            if vel.0.y > 0.0 {
                vel.0.y = 0.0;
            }
            gravity.grounded = true;
        } else {
            gravity.grounded = false;
        }
    }
}
