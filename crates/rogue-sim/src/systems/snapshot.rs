//! Snapshot system: queries the ECS world and builds a `FrameSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::{Entity, World};

use rogue_core::components::*;
use rogue_core::enums::*;
use rogue_core::events::GameEvent;
use rogue_core::progression::Progression;
use rogue_core::state::*;
use rogue_core::types::{Position, SimTime};
use rogue_enemy_ai::profiles::get_profile;

use crate::weapons::fire::orbit_points;
use crate::weapons::Roster;

/// Inputs the snapshot needs beyond the world itself.
pub struct SnapshotSource<'a> {
    pub time: SimTime,
    pub mode: GameMode,
    pub progression: &'a Progression,
    pub player: Option<Entity>,
    pub roster: &'a Roster,
    pub card_offers: &'a [CardOffer],
    pub wave_progress: f32,
}

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(world: &World, src: &SnapshotSource<'_>, events: Vec<GameEvent>) -> FrameSnapshot {
    let player = src.player.and_then(|p| build_player(world, p));

    FrameSnapshot {
        time: src.time,
        mode: src.mode,
        progress: ProgressView {
            stats: src.progression.progress,
            is_paused: src.progression.is_paused,
            is_level_up: src.progression.is_level_up,
            is_game_over: src.progression.is_game_over,
        },
        orbit_points: build_orbit_points(src.roster, player.as_ref()),
        player,
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        gems: build_gems(world),
        weapons: build_weapons(src.roster),
        card_offers: src.card_offers.to_vec(),
        wave_progress: src.wave_progress,
        events,
    }
}

fn build_player(world: &World, player: Entity) -> Option<PlayerView> {
    let mut query = world
        .query_one::<(&Player, &Body, &Position, Option<&Gravity>)>(player)
        .ok()?;
    let (p, body, pos, gravity) = query.get()?;
    Some(PlayerView {
        x: pos.x(),
        y: pos.y(),
        radius: body.radius,
        speed: p.speed,
        grounded: gravity.map(|g| g.grounded).unwrap_or(false),
    })
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Body, &Position)>()
        .iter()
        .filter(|(_, (_, body, _))| body.active)
        .map(|(_, (enemy, body, pos))| {
            let profile = get_profile(enemy.kind);
            EnemyView {
                kind: enemy.kind,
                shape: profile.shape,
                color: profile.color,
                x: pos.x(),
                y: pos.y(),
                radius: body.radius,
                hp: body.hp,
                max_hp: body.max_hp,
                phase: enemy.phase,
            }
        })
        .collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Body, &Position)>()
        .iter()
        .filter(|(_, (_, body, _))| body.active)
        .map(|(_, (proj, body, pos))| {
            let (rotation, is_axe) = match proj.motion {
                ProjectileMotion::Bolt => (0.0, false),
                ProjectileMotion::Arc { spin, .. } => (spin, true),
            };
            ProjectileView {
                x: pos.x(),
                y: pos.y(),
                radius: body.radius,
                rotation,
                is_axe,
            }
        })
        .collect()
}

fn build_gems(world: &World) -> Vec<GemView> {
    world
        .query::<(&ExpGem, &Body, &Position)>()
        .iter()
        .filter(|(_, (_, body, _))| body.active)
        .map(|(_, (gem, _, pos))| GemView {
            x: pos.x(),
            y: pos.y(),
            value: gem.value,
            attracted: gem.attracted,
        })
        .collect()
}

fn build_weapons(roster: &Roster) -> Vec<WeaponView> {
    roster
        .iter()
        .map(|w| WeaponView {
            kind: w.kind,
            id: w.kind.id().to_string(),
            name: w.kind.name().to_string(),
            level: w.level,
            max_level: w.max_level(),
            stats: w.stats,
        })
        .collect()
}

fn build_orbit_points(roster: &Roster, player: Option<&PlayerView>) -> Vec<[f32; 2]> {
    let (Some(shield), Some(player)) = (roster.get(WeaponKind::OrbitShield), player) else {
        return Vec::new();
    };
    orbit_points(shield, &Position::new(player.x, player.y))
        .into_iter()
        .map(|p| [p.x(), p.y()])
        .collect()
}
