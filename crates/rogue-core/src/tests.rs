#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::commands::PlayerCommand;
    use crate::config::GameConfig;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::input::{InputFrame, KeyState};
    use crate::progression::{ProgressPatch, Progression, ProgressionRecord};
    use crate::types::{collides, Arena, Position, SimTime};

    // ---- Geometry ----

    #[test]
    fn test_collides_strictly_less_than_radius_sum() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(10.0, 0.0);
        assert!(collides(&a, 6.0, &b, 5.0));
        // Touching edges do not count.
        assert!(!collides(&a, 5.0, &b, 5.0));
    }

    #[test]
    fn test_direction_to_same_point_is_zero() {
        let p = Position::new(3.0, 4.0);
        assert_eq!(p.direction_to(&p), glam::Vec2::ZERO);
        let d = Position::new(0.0, 0.0).direction_to(&p);
        assert!((d.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_arena_ground_and_bounds() {
        let arena = Arena::default();
        assert_eq!(arena.ground_y(), 670.0);
        assert_eq!(arena.center(), Position::new(640.0, 360.0));
        assert!(!arena.is_outside(&Position::new(-50.0, 10.0), 100.0));
        assert!(arena.is_outside(&Position::new(-101.0, 10.0), 100.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        t.advance(0.5);
        t.advance(0.25);
        assert_eq!(t.tick, 2);
        assert!((t.elapsed_secs - 0.75).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_collision_symmetric(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
            ar in 0.0f32..50.0, br in 0.0f32..50.0,
        ) {
            let a = Position::new(ax, ay);
            let b = Position::new(bx, by);
            prop_assert_eq!(collides(&a, ar, &b, br), collides(&b, br, &a, ar));
            prop_assert_eq!(collides(&a, ar, &b, br), a.distance_to(&b) < ar + br);
        }

        #[test]
        fn prop_exp_stays_below_threshold(gains in proptest::collection::vec(0.0f32..100.0, 1..200)) {
            let mut prog = Progression::new();
            for gain in gains {
                let before_max = prog.progress.max_exp;
                let before_level = prog.progress.level;
                prog.add_exp(gain);
                let p = prog.progress;
                prop_assert!(p.exp >= 0.0);
                prop_assert!(p.exp < p.max_exp);
                prop_assert!(p.max_exp >= before_max);
                if p.level > before_level {
                    prop_assert_eq!(p.level, before_level + 1);
                    prop_assert_eq!(p.max_exp, (before_max * 1.5).floor());
                } else {
                    prop_assert_eq!(p.max_exp, before_max);
                }
            }
        }
    }

    // ---- Progression ----

    #[test]
    fn test_add_exp_level_up_opens_gate() {
        let mut prog = Progression::new();
        assert!(!prog.add_exp(60.0));
        assert!(prog.add_exp(60.0));
        assert_eq!(prog.progress.level, 2);
        assert_eq!(prog.progress.exp, 20.0);
        assert_eq!(prog.progress.max_exp, 150.0);
        assert!(prog.is_level_up);
        assert!(prog.is_paused);
    }

    #[test]
    fn test_add_exp_resolves_one_threshold_per_call() {
        let mut prog = Progression::new();
        prog.add_exp(300.0);
        assert_eq!(prog.progress.level, 2);
        assert_eq!(prog.progress.max_exp, 150.0);
        // Leftover exceeds the new threshold until the next call.
        assert_eq!(prog.progress.exp, 200.0);

        prog.add_exp(0.0);
        assert_eq!(prog.progress.level, 3);
        assert_eq!(prog.progress.exp, 50.0);
        assert_eq!(prog.progress.max_exp, 225.0);
    }

    #[test]
    fn test_set_level_up_controls_pause() {
        let mut prog = Progression::new();
        prog.set_level_up(true);
        assert!(prog.is_paused);
        prog.set_level_up(false);
        assert!(!prog.is_paused);
        assert!(!prog.is_level_up);
    }

    #[test]
    fn test_toggle_pause() {
        let mut prog = Progression::new();
        prog.toggle_pause(None);
        assert!(prog.is_paused);
        prog.toggle_pause(None);
        assert!(!prog.is_paused);
        prog.toggle_pause(Some(true));
        prog.toggle_pause(Some(true));
        assert!(prog.is_paused);
    }

    #[test]
    fn test_game_over_updates_high_score_only_when_beaten() {
        let mut prog = Progression::new();
        prog.patch(ProgressPatch {
            score: Some(120),
            high_score: Some(200),
            ..Default::default()
        });
        assert!(!prog.set_game_over(true));
        assert_eq!(prog.progress.high_score, 200);
        assert!(prog.is_paused);

        prog.set_game_over(false);
        prog.add_score(100);
        assert!(prog.set_game_over(true));
        assert_eq!(prog.progress.high_score, 220);
    }

    #[test]
    fn test_reset_game_keeps_high_score() {
        let mut prog = Progression::new();
        prog.add_score(50);
        prog.set_game_over(true);
        prog.add_exp(10.0);
        prog.reset_game();
        assert_eq!(prog.progress.high_score, 50);
        assert_eq!(prog.progress.score, 0);
        assert!(prog.progress.is_pristine());
    }

    #[test]
    fn test_set_game_mode_swaps_slots() {
        let mut prog = Progression::new();
        prog.add_score(75);
        prog.patch(ProgressPatch {
            wave: Some(4),
            ..Default::default()
        });
        prog.set_game_over(true);

        prog.set_game_mode(GameMode::Platformer);
        assert_eq!(prog.current_mode, GameMode::Platformer);
        assert_eq!(prog.progress.score, 0);
        assert_eq!(prog.top_down.score, 75);
        assert!(!prog.is_game_over);
        assert!(!prog.is_paused);

        prog.set_game_mode(GameMode::TopDown);
        assert_eq!(prog.progress.score, 75);
        assert_eq!(prog.progress.wave, 4);
    }

    #[test]
    fn test_record_syncs_current_slot() {
        let mut prog = Progression::new();
        prog.set_game_mode(GameMode::Platformer);
        prog.add_score(30);
        let record = prog.to_record();
        assert_eq!(record.platformer_progress.score, 30);
        assert_eq!(record.top_down_progress.score, 0);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["currentMode"], "PLATFORMER");
        assert_eq!(json["score"], 30);
        assert_eq!(json["platformerProgress"]["highScore"], 0);

        let back: ProgressionRecord = serde_json::from_value(json).unwrap();
        let restored = Progression::from_record(back);
        assert_eq!(restored.current_mode, GameMode::Platformer);
        assert_eq!(restored.progress.score, 30);
        assert!(!restored.is_paused);
    }

    // ---- Config ----

    #[test]
    fn test_config_defaults() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.player_speed, 3.0);
        assert_eq!(cfg.bullet_damage, 25.0);
        assert_eq!(cfg.magnet_radius, 100.0);
        assert!(!cfg.god_mode);
    }

    #[test]
    fn test_config_level_multipliers() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.damage_multiplier_at(1), 1.0);
        assert!((cfg.damage_multiplier_at(5) - 1.2).abs() < 1e-6);
        assert!((cfg.speed_multiplier_at(6) - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_spawn_interval_floors() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.spawn_interval(1), 2.0);
        assert!((cfg.spawn_interval(6) - 1.5).abs() < 1e-6);
        assert_eq!(cfg.spawn_interval(40), 0.2);
    }

    #[test]
    fn test_config_json_partial_import() {
        let cfg = GameConfig::from_json(r#"{"playerSpeed": 5, "isGodMode": true}"#).unwrap();
        assert_eq!(cfg.player_speed, 5.0);
        assert!(cfg.god_mode);
        assert_eq!(cfg.enemy_spawn_rate, 2.0);

        let exported = cfg.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&exported).unwrap(), cfg);
    }

    #[test]
    fn test_config_reset_keeps_tutorial() {
        let mut cfg = GameConfig::default();
        cfg.complete_tutorial_step(TutorialStep::HasMoved);
        cfg.player_speed = 9.0;
        cfg.reset();
        assert_eq!(cfg.player_speed, GameConfig::default().player_speed);
        assert!(cfg.tutorial_done(TutorialStep::HasMoved));
        assert!(!cfg.tutorial_done(TutorialStep::HasAttacked));
    }

    #[test]
    fn test_config_reset_tutorial_only_clears_flags() {
        let mut cfg = GameConfig::default();
        cfg.complete_tutorial_step(TutorialStep::HasMoved);
        cfg.complete_tutorial_step(TutorialStep::HasCollectedGem);
        cfg.player_speed = 9.0;
        cfg.reset_tutorial();
        assert!(!cfg.tutorial_done(TutorialStep::HasMoved));
        assert!(!cfg.tutorial_done(TutorialStep::HasCollectedGem));
        assert_eq!(cfg.player_speed, 9.0);
    }

    // ---- Input ----

    #[test]
    fn test_input_merges_keys_and_joystick() {
        let input = InputFrame {
            keys: KeyState {
                right: true,
                up: true,
                ..Default::default()
            },
            joystick: glam::Vec2::new(0.5, 0.0),
        };
        assert_eq!(input.movement(), glam::Vec2::new(1.5, -1.0));
    }

    // ---- Wire formats ----

    #[test]
    fn test_weapon_ids() {
        for kind in WeaponKind::ALL {
            assert_eq!(WeaponKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(WeaponKind::from_id("laser"), None);
    }

    #[test]
    fn test_command_tagged_json() {
        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"ChooseCard","index":2}"#).unwrap();
        assert!(matches!(cmd, PlayerCommand::ChooseCard { index: 2 }));
        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"SwitchMode","mode":"PLATFORMER"}"#).unwrap();
        assert!(matches!(
            cmd,
            PlayerCommand::SwitchMode {
                mode: GameMode::Platformer
            }
        ));
    }

    #[test]
    fn test_event_tagged_json() {
        let ev = GameEvent::WaveStarted { wave: 3 };
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["type"], "WaveStarted");
        assert_eq!(json["wave"], 3);
    }
}
