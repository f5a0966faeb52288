//! Enemy behavior finite state machine.
//!
//! Pure functions that compute phase transitions and velocity for one enemy
//! from its kind, current phase and the target's position. No ECS
//! dependency; operates on plain data.
//!
//! Chasers and tanks only pursue. Rushers cycle idle -> charging -> cooldown.
//! A cycle cannot be interrupted by damage, and only one is in flight at a
//! time. In platformer mode enemies steer on the horizontal axis and leave
//! vertical velocity to gravity.

use glam::Vec2;
use rogue_core::constants::*;
use rogue_core::enums::{ChargePhase, EnemyKind, GameMode};
use rogue_core::types::{Position, Velocity};

use crate::profiles::get_profile;

/// Input to the FSM for a single enemy.
pub struct EnemyContext {
    pub kind: EnemyKind,
    pub phase: ChargePhase,
    pub position: Position,
    pub velocity: Velocity,
    /// Target position, `None` when the pursuit target is gone or inactive.
    pub target: Option<Position>,
    /// Spawn-scaled pursuit speed.
    pub speed: f32,
    pub phase_timer_secs: f32,
    pub charge_dir: Vec2,
    pub mode: GameMode,
    /// Seconds covered by this tick (`delta / 60`).
    pub dt_secs: f32,
}

/// Output from the FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyUpdate {
    pub new_phase: ChargePhase,
    pub new_velocity: Velocity,
    pub phase_timer_secs: f32,
    pub charge_dir: Vec2,
    pub phase_changed: bool,
}

/// Evaluate the FSM for one enemy.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    let no_change = EnemyUpdate {
        new_phase: ctx.phase,
        new_velocity: ctx.velocity,
        phase_timer_secs: ctx.phase_timer_secs,
        charge_dir: ctx.charge_dir,
        phase_changed: false,
    };

    // No live target: keep drifting on the current velocity.
    let Some(target) = ctx.target else {
        return no_change;
    };

    if !get_profile(ctx.kind).charges {
        return EnemyUpdate {
            new_velocity: pursue(ctx, &target),
            ..no_change
        };
    }

    match ctx.phase {
        ChargePhase::Idle => evaluate_idle(ctx, &target, no_change),
        ChargePhase::Charging => evaluate_charging(ctx, &target, no_change),
        ChargePhase::Cooldown => evaluate_cooldown(ctx, no_change),
    }
}

/// Velocity steering straight at the target at base speed. When the enemy
/// sits exactly on the target the previous velocity is kept.
pub fn pursue(ctx: &EnemyContext, target: &Position) -> Velocity {
    let delta = target.0 - ctx.position.0;
    match ctx.mode {
        GameMode::TopDown => {
            if delta.length_squared() > 0.0 {
                Velocity(delta.normalize() * ctx.speed)
            } else {
                ctx.velocity
            }
        }
        GameMode::Platformer => {
            if delta.x != 0.0 {
                Velocity::new(delta.x.signum() * ctx.speed, ctx.velocity.0.y)
            } else {
                ctx.velocity
            }
        }
    }
}

/// Whether a rusher at `position` is close enough to start winding up.
pub fn in_charge_range(mode: GameMode, position: &Position, target: &Position) -> bool {
    let close = position.distance_to(target) < RUSH_TRIGGER_DISTANCE;
    match mode {
        GameMode::TopDown => close,
        GameMode::Platformer => close && (target.y() - position.y()).abs() < RUSH_VERTICAL_BAND,
    }
}

fn evaluate_idle(ctx: &EnemyContext, target: &Position, no_change: EnemyUpdate) -> EnemyUpdate {
    if in_charge_range(ctx.mode, &ctx.position, target) {
        return EnemyUpdate {
            new_phase: ChargePhase::Charging,
            new_velocity: hold(ctx),
            phase_timer_secs: RUSH_WINDUP_SECS,
            phase_changed: true,
            ..no_change
        };
    }
    EnemyUpdate {
        new_velocity: pursue(ctx, target),
        ..no_change
    }
}

fn evaluate_charging(
    ctx: &EnemyContext,
    target: &Position,
    no_change: EnemyUpdate,
) -> EnemyUpdate {
    let timer = ctx.phase_timer_secs - ctx.dt_secs;
    if timer > 0.0 {
        return EnemyUpdate {
            new_velocity: hold(ctx),
            phase_timer_secs: timer,
            ..no_change
        };
    }

    // Launch: direction is snapshotted now and not re-aimed mid-charge.
    let dir = match ctx.mode {
        GameMode::TopDown => ctx.position.direction_to(target),
        GameMode::Platformer => {
            Vec2::new((target.x() - ctx.position.x()).signum(), 0.0)
        }
    };
    let burst = dir * ctx.speed * RUSH_SPEED_MULTIPLIER;
    let new_velocity = match ctx.mode {
        GameMode::TopDown => Velocity(burst),
        GameMode::Platformer => Velocity::new(burst.x, ctx.velocity.0.y),
    };
    EnemyUpdate {
        new_phase: ChargePhase::Cooldown,
        new_velocity,
        phase_timer_secs: RUSH_COOLDOWN_SECS,
        charge_dir: dir,
        phase_changed: true,
    }
}

fn evaluate_cooldown(ctx: &EnemyContext, no_change: EnemyUpdate) -> EnemyUpdate {
    let timer = ctx.phase_timer_secs - ctx.dt_secs;
    let v = ctx.velocity.0;
    let decayed = match ctx.mode {
        GameMode::TopDown => v * RUSH_COOLDOWN_DECAY,
        GameMode::Platformer => Vec2::new(v.x * RUSH_COOLDOWN_DECAY, v.y),
    };
    if timer <= 0.0 {
        return EnemyUpdate {
            new_phase: ChargePhase::Idle,
            new_velocity: Velocity(decayed),
            phase_timer_secs: 0.0,
            phase_changed: true,
            ..no_change
        };
    }
    EnemyUpdate {
        new_velocity: Velocity(decayed),
        phase_timer_secs: timer,
        ..no_change
    }
}

/// Zero velocity, except that gravity keeps acting in platformer mode.
fn hold(ctx: &EnemyContext) -> Velocity {
    match ctx.mode {
        GameMode::TopDown => Velocity::default(),
        GameMode::Platformer => Velocity::new(0.0, ctx.velocity.0.y),
    }
}
