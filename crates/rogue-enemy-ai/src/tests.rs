#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rogue_core::constants::*;
    use rogue_core::enums::{ChargePhase, EnemyKind, EnemyShape, GameMode};
    use rogue_core::types::{Position, Velocity};

    use crate::fsm::{evaluate, in_charge_range, EnemyContext};
    use crate::profiles::get_profile;

    const DT: f32 = 1.0 / 60.0;

    fn make_context(kind: EnemyKind, phase: ChargePhase, distance: f32) -> EnemyContext {
        let speed = get_profile(kind).speed;
        EnemyContext {
            kind,
            phase,
            position: Position::new(100.0 + distance, 100.0),
            velocity: Velocity::default(),
            target: Some(Position::new(100.0, 100.0)),
            speed,
            phase_timer_secs: 0.0,
            charge_dir: Vec2::ZERO,
            mode: GameMode::TopDown,
            dt_secs: DT,
        }
    }

    // ---- Profiles ----

    #[test]
    fn test_profiles_are_distinct() {
        let chaser = get_profile(EnemyKind::Chaser);
        let rusher = get_profile(EnemyKind::Rusher);
        let tank = get_profile(EnemyKind::Tank);
        assert!(tank.hp > chaser.hp && chaser.hp > rusher.hp);
        assert!(tank.radius > chaser.radius && chaser.radius > rusher.radius);
        assert!(tank.speed < chaser.speed);
        assert_eq!(rusher.shape, EnemyShape::Triangle);
        assert_eq!(tank.shape, EnemyShape::Square);
        assert!(rusher.charges && !chaser.charges && !tank.charges);
        assert!(tank.score > rusher.score && rusher.score > chaser.score);
    }

    // ---- Pursuit ----

    #[test]
    fn test_chaser_points_at_target_at_speed() {
        let mut ctx = make_context(EnemyKind::Chaser, ChargePhase::Idle, 0.0);
        ctx.position = Position::new(400.0, 500.0);
        let update = evaluate(&ctx);
        let v = update.new_velocity.0;
        assert!((v.length() - 1.5).abs() < 1e-5);
        let expected = Vec2::new(-300.0, -400.0).normalize();
        assert!((v.normalize() - expected).length() < 1e-5);
        assert!(!update.phase_changed);
        assert_eq!(update.new_phase, ChargePhase::Idle);
    }

    #[test]
    fn test_tank_never_charges() {
        let ctx = make_context(EnemyKind::Tank, ChargePhase::Idle, 50.0);
        let update = evaluate(&ctx);
        assert_eq!(update.new_phase, ChargePhase::Idle);
        assert!((update.new_velocity.speed() - 0.8).abs() < 1e-5);
    }

    #[test]
    fn test_no_target_keeps_velocity() {
        let mut ctx = make_context(EnemyKind::Chaser, ChargePhase::Idle, 300.0);
        ctx.target = None;
        ctx.velocity = Velocity::new(0.3, 0.4);
        let update = evaluate(&ctx);
        assert_eq!(update.new_velocity, Velocity::new(0.3, 0.4));
    }

    #[test]
    fn test_on_top_of_target_keeps_velocity() {
        let mut ctx = make_context(EnemyKind::Chaser, ChargePhase::Idle, 0.0);
        ctx.velocity = Velocity::new(1.0, 0.0);
        assert_eq!(evaluate(&ctx).new_velocity, Velocity::new(1.0, 0.0));
    }

    #[test]
    fn test_platformer_pursuit_is_horizontal() {
        let mut ctx = make_context(EnemyKind::Chaser, ChargePhase::Idle, 300.0);
        ctx.mode = GameMode::Platformer;
        ctx.velocity = Velocity::new(0.0, 2.0);
        let update = evaluate(&ctx);
        assert_eq!(update.new_velocity, Velocity::new(-1.5, 2.0));
    }

    // ---- Rusher charge cycle ----

    #[test]
    fn test_rusher_idle_pursues_when_far() {
        let ctx = make_context(EnemyKind::Rusher, ChargePhase::Idle, 300.0);
        let update = evaluate(&ctx);
        assert_eq!(update.new_phase, ChargePhase::Idle);
        assert_eq!(update.new_velocity, Velocity::new(-1.0, 0.0));
    }

    #[test]
    fn test_rusher_idle_to_charging() {
        let ctx = make_context(EnemyKind::Rusher, ChargePhase::Idle, 150.0);
        let update = evaluate(&ctx);
        assert_eq!(update.new_phase, ChargePhase::Charging);
        assert!(update.phase_changed);
        assert_eq!(update.new_velocity, Velocity::default());
        assert_eq!(update.phase_timer_secs, RUSH_WINDUP_SECS);
    }

    #[test]
    fn test_rusher_holds_during_windup() {
        let mut ctx = make_context(EnemyKind::Rusher, ChargePhase::Charging, 150.0);
        ctx.phase_timer_secs = 0.3;
        let update = evaluate(&ctx);
        assert_eq!(update.new_phase, ChargePhase::Charging);
        assert_eq!(update.new_velocity, Velocity::default());
        assert!((update.phase_timer_secs - (0.3 - DT)).abs() < 1e-6);
    }

    #[test]
    fn test_rusher_launches_at_six_times_speed() {
        let mut ctx = make_context(EnemyKind::Rusher, ChargePhase::Charging, 150.0);
        ctx.phase_timer_secs = DT / 2.0;
        let update = evaluate(&ctx);
        assert_eq!(update.new_phase, ChargePhase::Cooldown);
        assert_eq!(update.phase_timer_secs, RUSH_COOLDOWN_SECS);
        assert_eq!(update.charge_dir, Vec2::new(-1.0, 0.0));
        assert!((update.new_velocity.0.x + 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_rusher_cooldown_decays_then_idles() {
        let mut ctx = make_context(EnemyKind::Rusher, ChargePhase::Cooldown, 150.0);
        ctx.velocity = Velocity::new(-6.0, 0.0);
        ctx.phase_timer_secs = 0.5;
        let update = evaluate(&ctx);
        assert_eq!(update.new_phase, ChargePhase::Cooldown);
        assert!((update.new_velocity.0.x + 5.7).abs() < 1e-5);

        ctx.phase_timer_secs = DT / 2.0;
        let update = evaluate(&ctx);
        assert_eq!(update.new_phase, ChargePhase::Idle);
        assert!(update.phase_changed);
    }

    #[test]
    fn test_full_charge_cycle_duration() {
        let mut ctx = make_context(EnemyKind::Rusher, ChargePhase::Idle, 150.0);
        let mut transitions = Vec::new();
        for tick in 0..200u32 {
            let update = evaluate(&ctx);
            if update.phase_changed {
                transitions.push((tick, update.new_phase));
            }
            ctx.phase = update.new_phase;
            ctx.velocity = update.new_velocity;
            ctx.phase_timer_secs = update.phase_timer_secs;
            ctx.charge_dir = update.charge_dir;
        }
        assert_eq!(transitions[0], (0, ChargePhase::Charging));
        assert_eq!(transitions[1].1, ChargePhase::Cooldown);
        assert_eq!(transitions[2].1, ChargePhase::Idle);
        // 0.5 s windup and 1.0 s cooldown at 60 Hz, within a tick of rounding.
        assert!((transitions[1].0 - transitions[0].0).abs_diff(30) <= 1);
        assert!((transitions[2].0 - transitions[1].0).abs_diff(60) <= 1);
    }

    #[test]
    fn test_platformer_charge_needs_vertical_band() {
        let me = Position::new(0.0, 600.0);
        assert!(in_charge_range(GameMode::Platformer, &me, &Position::new(100.0, 640.0)));
        assert!(!in_charge_range(GameMode::Platformer, &me, &Position::new(50.0, 530.0)));
        assert!(in_charge_range(GameMode::TopDown, &me, &Position::new(50.0, 530.0)));
    }
}
