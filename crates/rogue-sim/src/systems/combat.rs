//! Combat resolution: projectile hits, contact damage and kill rewards.

use std::f32::consts::TAU;

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use rogue_core::components::{Body, Enemy, Projectile};
use rogue_core::config::GameConfig;
use rogue_core::constants::*;
use rogue_core::events::GameEvent;
use rogue_core::progression::{ProgressPatch, Progression};
use rogue_core::types::{collides, Position};
use rogue_enemy_ai::profiles::get_profile;

use crate::world_setup;

/// Roll a critical hit on `base` damage. Returns the final damage and
/// whether it crit.
pub fn roll_damage(rng: &mut ChaCha8Rng, base: f32) -> (f32, bool) {
    let is_crit = rng.gen_bool(CRIT_CHANCE);
    if is_crit {
        (base * CRIT_MULTIPLIER, true)
    } else {
        (base, false)
    }
}

/// Test every active projectile against every active enemy. A projectile
/// is consumed by its first hit. Killed enemies are appended to `kills`.
/// Returns the number of hits.
pub fn resolve_projectile_hits(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    damage_multiplier: f32,
    events: &mut Vec<GameEvent>,
    kills: &mut Vec<Entity>,
) -> usize {
    let projectiles: Vec<(Entity, Position, f32, f32)> = world
        .query::<(&Projectile, &Body, &Position)>()
        .iter()
        .filter(|(_, (_, body, _))| body.active)
        .map(|(entity, (proj, body, pos))| (entity, *pos, body.radius, proj.damage))
        .collect();
    let enemies: Vec<Entity> = world
        .query::<&Enemy>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    let mut hits = 0;
    for (projectile, proj_pos, proj_radius, damage) in projectiles {
        for &enemy in &enemies {
            let Ok((body, pos)) = world.query_one_mut::<(&mut Body, &Position)>(enemy) else {
                continue;
            };
            if !body.active || !collides(&proj_pos, proj_radius, pos, body.radius) {
                continue;
            }

            let (final_damage, is_crit) = roll_damage(rng, damage * damage_multiplier);
            let killed = body.take_damage(final_damage);
            events.push(GameEvent::DamageNumber {
                x: pos.x(),
                y: pos.y(),
                amount: final_damage,
                is_crit,
            });
            if is_crit {
                events.push(GameEvent::ScreenShake {
                    intensity: 1.0,
                    duration: 0.1,
                });
            }
            if killed {
                kills.push(enemy);
            }
            if let Ok(mut proj_body) = world.get::<&mut Body>(projectile) {
                proj_body.die();
            }
            hits += 1;
            break;
        }
    }
    hits
}

/// Reward a kill: score, an experience gem at the body, and a particle
/// burst in the enemy's color. Every damage source goes through here.
pub fn award_kill(
    world: &mut World,
    enemy: Entity,
    progression: &mut Progression,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    let Ok((kind, pos)) = world
        .query_one_mut::<(&Enemy, &Position)>(enemy)
        .map(|(e, p)| (e.kind, *p))
    else {
        return;
    };
    let profile = get_profile(kind);

    progression.add_score(profile.score);
    world_setup::spawn_gem(world, pos, profile.exp, rng.gen_range(0.0..TAU));
    events.push(GameEvent::Particles {
        x: pos.x(),
        y: pos.y(),
        count: DEATH_PARTICLE_COUNT,
        color: profile.color,
    });
    events.push(GameEvent::EnemyKilled {
        kind,
        x: pos.x(),
        y: pos.y(),
        score: profile.score,
    });
}

/// Continuous damage from every enemy overlapping the player. Game over
/// fires at most once; god mode skips damage entirely. Returns true if
/// this call ended the run.
pub fn contact_damage(
    world: &mut World,
    player: Entity,
    progression: &mut Progression,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
    delta: f32,
) -> bool {
    if config.god_mode || progression.is_game_over {
        return false;
    }
    let Some((player_pos, player_radius)) = world
        .query_one_mut::<(&Body, &Position)>(player)
        .ok()
        .filter(|(body, _)| body.active)
        .map(|(body, pos)| (*pos, body.radius))
    else {
        return false;
    };

    let touching = world
        .query::<(&Enemy, &Body, &Position)>()
        .iter()
        .filter(|(_, (_, body, pos))| {
            body.active && collides(pos, body.radius, &player_pos, player_radius)
        })
        .count();

    let mut ended = false;
    for _ in 0..touching {
        let hp = progression.progress.hp - CONTACT_DAMAGE_PER_FRAME * delta;
        if hp <= 0.0 {
            progression.patch(ProgressPatch {
                hp: Some(0.0),
                ..Default::default()
            });
            let new_high_score = progression.set_game_over(true);
            let score = progression.progress.score;
            events.push(GameEvent::GameOver {
                score,
                new_high_score,
            });
            info!(score, new_high_score, "game over");
            ended = true;
            break;
        }
        progression.patch(ProgressPatch {
            hp: Some(hp),
            ..Default::default()
        });
        events.push(GameEvent::ScreenShake {
            intensity: 2.0,
            duration: 0.2,
        });
    }

    if let Ok(mut body) = world.get::<&mut Body>(player) {
        body.hp = progression.progress.hp;
    }
    ended
}
