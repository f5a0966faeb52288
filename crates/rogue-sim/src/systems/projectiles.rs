//! Projectile motion and expiry.

use hecs::World;

use rogue_core::components::{Body, Projectile, ProjectileMotion};
use rogue_core::constants::{AXE_CULL_DROP, AXE_SPIN_PER_FRAME, OUT_OF_BOUNDS_MARGIN};
use rogue_core::types::{Arena, Position, Velocity};

/// Integrate every active projectile and retire the ones that expired:
/// bolts by lifetime or leaving the arena, axes by falling far enough
/// below their launch height.
pub fn run(world: &mut World, arena: &Arena, delta: f32) {
    for (_entity, (proj, body, pos, vel)) in
        world.query_mut::<(&mut Projectile, &mut Body, &mut Position, &mut Velocity)>()
    {
        if !body.active {
            continue;
        }
        pos.0 += vel.0 * delta;
        match &mut proj.motion {
            ProjectileMotion::Bolt => {
                proj.ttl_frames -= delta;
                if proj.ttl_frames <= 0.0 || arena.is_outside(pos, OUT_OF_BOUNDS_MARGIN) {
                    body.die();
                }
            }
            ProjectileMotion::Arc {
                gravity,
                spin,
                spawn_y,
            } => {
                vel.0.y += *gravity * delta;
                *spin += AXE_SPIN_PER_FRAME * delta;
                if pos.y() > *spawn_y + AXE_CULL_DROP {
                    body.die();
                }
            }
        }
    }
}
