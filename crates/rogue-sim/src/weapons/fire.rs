//! Fire behavior for each weapon kind.

use std::f32::consts::TAU;

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rogue_core::components::{Body, Enemy};
use rogue_core::constants::*;
use rogue_core::enums::WeaponKind;
use rogue_core::events::GameEvent;
use rogue_core::types::{collides, Position, Velocity};

use super::Weapon;
use crate::delayed::{DelayedAction, DelayedQueue};
use crate::world_setup;

/// Everything a weapon may touch when it fires.
pub struct FireContext<'a> {
    pub rng: &'a mut ChaCha8Rng,
    pub delayed: &'a mut DelayedQueue,
    pub events: &'a mut Vec<GameEvent>,
    /// Enemies killed directly by a weapon (orbit pulses). The engine
    /// rewards them after the roster update.
    pub kills: &'a mut Vec<Entity>,
    pub player_pos: Position,
    /// Virtual clock, for scheduling staggered shots.
    pub now_secs: f64,
    /// Flat bonus added to projectile damage.
    pub bullet_damage: f32,
}

/// Fire `weapon` once.
pub fn fire(weapon: &mut Weapon, world: &mut World, ctx: &mut FireContext<'_>) {
    match weapon.kind {
        WeaponKind::MagicWand => fire_wand(weapon, world, ctx),
        WeaponKind::OrbitShield => fire_orbit(weapon, world, ctx),
        WeaponKind::Axe => fire_axe(weapon, world, ctx),
    }
}

/// Live enemies sorted nearest-first by squared distance to `from`.
pub fn nearest_enemies(world: &World, from: &Position, limit: usize) -> Vec<(Entity, Position)> {
    let mut candidates: Vec<(Entity, Position, f32)> = world
        .query::<(&Enemy, &Body, &Position)>()
        .iter()
        .filter(|(_, (_, body, _))| body.active)
        .map(|(entity, (_, _, pos))| (entity, *pos, from.distance_sq_to(pos)))
        .collect();
    candidates.sort_by(|a, b| a.2.total_cmp(&b.2));
    candidates
        .into_iter()
        .take(limit)
        .map(|(entity, pos, _)| (entity, pos))
        .collect()
}

/// One bolt per target. The first leaves immediately, the rest are
/// staggered on the delayed queue.
fn fire_wand(weapon: &Weapon, world: &mut World, ctx: &mut FireContext<'_>) {
    let targets = nearest_enemies(world, &ctx.player_pos, weapon.stats.amount as usize);
    let damage = weapon.stats.damage + ctx.bullet_damage;
    let speed = weapon.stats.speed;

    for (index, (target, target_pos)) in targets.into_iter().enumerate() {
        if index == 0 {
            world_setup::spawn_bolt(world, ctx.player_pos, target_pos, speed, damage);
            continue;
        }
        let due = ctx.now_secs + f64::from(WAND_STAGGER_SECS) * index as f64;
        ctx.delayed.schedule(
            due,
            DelayedAction::SpawnBolt {
                target,
                last_known: target_pos,
                speed,
                damage,
            },
        );
    }
}

/// World positions of the shield's orbs.
pub fn orbit_points(weapon: &Weapon, center: &Position) -> Vec<Position> {
    let amount = weapon.stats.amount.max(1);
    (0..amount)
        .map(|i| {
            let angle = weapon.orbit_angle + i as f32 * TAU / amount as f32;
            Position(center.0 + Vec2::from_angle(angle) * weapon.stats.range)
        })
        .collect()
}

/// Discrete damage pulse: every orb hits every enemy it overlaps and
/// knocks it away from the player. Damage is the raw weapon damage.
fn fire_orbit(weapon: &Weapon, world: &mut World, ctx: &mut FireContext<'_>) {
    let hit_radius = ORBIT_HIT_RADIUS * weapon.stats.area;
    let damage = weapon.stats.damage;
    let enemies: Vec<Entity> = world
        .query::<&Enemy>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    for point in orbit_points(weapon, &ctx.player_pos) {
        for &entity in &enemies {
            let Ok((body, pos)) = world.query_one_mut::<(&mut Body, &mut Position)>(entity) else {
                continue;
            };
            if !body.active || !collides(&point, hit_radius, pos, body.radius) {
                continue;
            }
            let killed = body.take_damage(damage);
            let away = ctx.player_pos.direction_to(pos);
            pos.0 += away * ORBIT_KNOCKBACK;
            ctx.events.push(GameEvent::DamageNumber {
                x: pos.x(),
                y: pos.y(),
                amount: damage,
                is_crit: false,
            });
            if killed {
                ctx.kills.push(entity);
            }
        }
    }
}

/// Lob `amount` axes upward with a centered horizontal spread.
fn fire_axe(weapon: &Weapon, world: &mut World, ctx: &mut FireContext<'_>) {
    let amount = weapon.stats.amount;
    let damage = weapon.stats.damage + ctx.bullet_damage;
    let from = Position::new(ctx.player_pos.x(), ctx.player_pos.y() - AXE_SPAWN_LIFT);

    for i in 0..amount {
        let spread = (i as f32 - (amount as f32 - 1.0) / 2.0) * AXE_SPREAD_STEP;
        let vx = ctx.rng.gen_range(-1.0f32..1.0) + spread;
        let vy = AXE_BASE_UPWARD_IMPULSE - ctx.rng.gen::<f32>() * AXE_UPWARD_JITTER;
        world_setup::spawn_axe(world, from, Velocity::new(vx, vy), damage, weapon.stats.area);
    }
}
