//! Headless soak run: plays one auto-piloted run as fast as possible and
//! logs how it went.

use std::process::ExitCode;

use tracing::{error, info};

use rogue_app::{AppSettings, Session};
use rogue_core::commands::PlayerCommand;
use rogue_core::events::GameEvent;
use rogue_core::input::InputFrame;

/// Ten simulated minutes at the reference rate.
const MAX_FRAMES: u64 = 60 * 60 * 10;
/// Radians per frame of the circle-strafe pattern.
const STRAFE_TURN_RATE: f32 = 0.02;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let settings = AppSettings::from_env();
    let mut session = Session::start(&settings);
    session.queue_command(PlayerCommand::StartRun);

    let mut frames = 0;
    let mut kills = 0usize;
    while frames < MAX_FRAMES {
        let angle = frames as f32 * STRAFE_TURN_RATE;
        let input = InputFrame::from_vector(angle.cos(), angle.sin());
        let snapshot = session.tick(&input, 1.0);
        frames += 1;
        kills += snapshot
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyKilled { .. }))
            .count();

        if snapshot.progress.is_level_up && !snapshot.card_offers.is_empty() {
            info!(offer = ?snapshot.card_offers[0], "auto-picking card");
            session.queue_command(PlayerCommand::ChooseCard { index: 0 });
        }
        if snapshot.progress.is_game_over {
            break;
        }
    }

    let progress = session.progression().progress;
    info!(
        frames,
        kills,
        score = progress.score,
        high_score = progress.high_score,
        wave = progress.wave,
        level = progress.level,
        game_over = session.progression().is_game_over,
        "soak finished"
    );

    match session.end() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "failed to persist session");
            ExitCode::FAILURE
        }
    }
}
