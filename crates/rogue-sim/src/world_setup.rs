//! Entity spawn factories.
//!
//! Creates the player, enemies, projectiles and gems with their component
//! bundles. Every entity carries a `Body`; physics-enabled entities in
//! platformer mode also get `Gravity`.

use glam::Vec2;
use hecs::{Entity, World};

use rogue_core::components::*;
use rogue_core::config::GameConfig;
use rogue_core::constants::*;
use rogue_core::enums::*;
use rogue_core::types::{Arena, Position, Velocity};
use rogue_enemy_ai::profiles::get_profile;

/// Non-owning link from an enemy to the entity it chases. Never keeps the
/// target alive: readers must check the target's `Body::active` first.
#[derive(Debug, Clone, Copy)]
pub struct PursuitTarget(pub Entity);

/// Spawn the player at arena center, or on the ground in platformer mode.
pub fn spawn_player(world: &mut World, arena: &Arena, mode: GameMode, config: &GameConfig) -> Entity {
    let body = Body::new(PLAYER_RADIUS, config.player_health);
    let player = Player {
        speed: config.player_speed,
    };
    match mode {
        GameMode::TopDown => world.spawn((
            player,
            body,
            arena.center(),
            Velocity::default(),
        )),
        GameMode::Platformer => {
            let pos = Position::new(arena.width / 2.0, arena.ground_y() - PLAYER_RADIUS);
            world.spawn((
                player,
                body,
                pos,
                Velocity::default(),
                Gravity { grounded: true },
            ))
        }
    }
}

/// Spawn an enemy with stats scaled for `wave`. The scaling is baked into
/// the entity and never revisited.
pub fn spawn_enemy(
    world: &mut World,
    kind: EnemyKind,
    position: Position,
    wave: u32,
    config: &GameConfig,
    target: Option<Entity>,
    mode: GameMode,
) -> Entity {
    let profile = get_profile(kind);
    let waves_above_first = wave.saturating_sub(1) as f32;
    let max_hp = profile.hp * (1.0 + waves_above_first * ENEMY_HP_SCALE_PER_WAVE);
    let speed =
        profile.speed * (1.0 + waves_above_first * ENEMY_SPEED_SCALE_PER_WAVE) * config.enemy_speed;

    let enemy = Enemy {
        kind,
        speed,
        phase: ChargePhase::Idle,
        phase_timer_secs: 0.0,
        charge_dir: Vec2::ZERO,
    };
    let entity = world.spawn((
        enemy,
        Body::new(profile.radius, max_hp),
        position,
        Velocity::default(),
    ));
    if let Some(target) = target {
        let _ = world.insert_one(entity, PursuitTarget(target));
    }
    if mode == GameMode::Platformer {
        let _ = world.insert_one(entity, Gravity::default());
    }
    entity
}

/// Spawn a straight-flying bolt aimed at `target`.
pub fn spawn_bolt(world: &mut World, from: Position, target: Position, speed: f32, damage: f32) -> Entity {
    let mut dir = from.direction_to(&target);
    if dir == Vec2::ZERO {
        dir = Vec2::X;
    }
    world.spawn((
        Projectile {
            damage,
            ttl_frames: BOLT_LIFETIME_FRAMES,
            motion: ProjectileMotion::Bolt,
        },
        Body::new(BOLT_RADIUS, 1.0),
        from,
        Velocity(dir * speed),
    ))
}

/// Spawn a lobbed axe. `velocity` carries both the spread and the upward impulse.
pub fn spawn_axe(world: &mut World, from: Position, velocity: Velocity, damage: f32, area: f32) -> Entity {
    world.spawn((
        Projectile {
            damage,
            ttl_frames: f32::INFINITY,
            motion: ProjectileMotion::Arc {
                gravity: AXE_GRAVITY,
                spin: 0.0,
                spawn_y: from.y(),
            },
        },
        Body::new(AXE_RADIUS * area, 1.0),
        from,
        velocity,
    ))
}

/// Drop an experience gem.
pub fn spawn_gem(world: &mut World, position: Position, value: f32, wobble_phase: f32) -> Entity {
    world.spawn((
        ExpGem {
            value,
            attracted: false,
            homing_speed: 0.0,
            wobble_phase,
        },
        Body::new(GEM_RADIUS, 1.0),
        position,
    ))
}

/// Remove every entity. Used when a run restarts or the mode switches.
pub fn clear_world(world: &mut World) {
    world.clear();
}

/// Whether `entity` still exists and is active.
pub fn is_alive(world: &World, entity: Entity) -> bool {
    world
        .get::<&Body>(entity)
        .map(|body| body.active)
        .unwrap_or(false)
}
