//! Real-time loop: runs a session on its own thread at a fixed rate.
//!
//! The host talks to it through an `mpsc` channel and reads the latest
//! snapshot from a shared slot. Shutting down hands the session back.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use rogue_core::commands::PlayerCommand;
use rogue_core::constants::{MAX_FRAME_DELTA, REFERENCE_FPS};
use rogue_core::input::InputFrame;
use rogue_core::state::FrameSnapshot;

use crate::session::Session;

pub type SharedSnapshot = Arc<Mutex<Option<FrameSnapshot>>>;

#[derive(Debug)]
pub enum GameLoopCommand {
    /// Replace the held input. It stays applied until the next one.
    Input(InputFrame),
    Command(PlayerCommand),
    Shutdown,
}

pub struct GameLoopHandle {
    tx: Sender<GameLoopCommand>,
    latest: SharedSnapshot,
    thread: JoinHandle<Session>,
}

impl GameLoopHandle {
    /// Returns false once the loop has stopped.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        self.tx.send(command).is_ok()
    }

    pub fn latest_snapshot(&self) -> Option<FrameSnapshot> {
        self.latest.lock().ok().and_then(|slot| slot.clone())
    }

    pub fn snapshot_slot(&self) -> SharedSnapshot {
        Arc::clone(&self.latest)
    }

    /// Stop the loop and take the session back.
    pub fn shutdown(self) -> Result<Session, String> {
        let _ = self.tx.send(GameLoopCommand::Shutdown);
        self.thread
            .join()
            .map_err(|_| "game loop thread panicked".to_string())
    }
}

/// Frames elapsed at the 60 Hz reference rate, capped so a stall never
/// turns into one giant step.
pub fn frame_delta(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() * REFERENCE_FPS).min(MAX_FRAME_DELTA)
}

/// Run `session` on a named thread at `tick_hz`.
pub fn spawn_game_loop(session: Session, tick_hz: u32) -> std::io::Result<GameLoopHandle> {
    let (tx, rx) = mpsc::channel();
    let latest: SharedSnapshot = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&latest);
    let thread = thread::Builder::new()
        .name("rogue-game-loop".into())
        .spawn(move || run_loop(session, rx, slot, tick_hz))?;
    Ok(GameLoopHandle { tx, latest, thread })
}

fn run_loop(mut session: Session, rx: Receiver<GameLoopCommand>, latest: SharedSnapshot, tick_hz: u32) -> Session {
    let tick_duration = Duration::from_secs_f64(1.0 / f64::from(tick_hz.max(1)));
    let mut input = InputFrame::default();
    let mut last_frame = Instant::now();
    info!(tick_hz, "game loop running");

    loop {
        let start = Instant::now();

        loop {
            match rx.try_recv() {
                Ok(GameLoopCommand::Input(frame)) => input = frame,
                Ok(GameLoopCommand::Command(command)) => {
                    debug!(?command, "command received");
                    session.queue_command(command);
                }
                Ok(GameLoopCommand::Shutdown) | Err(TryRecvError::Disconnected) => {
                    info!(ticks = session.engine().time().tick, "game loop stopped");
                    return session;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        let delta = frame_delta(start.duration_since(last_frame));
        last_frame = start;
        let snapshot = session.tick(&input, delta);
        if let Ok(mut slot) = latest.lock() {
            *slot = Some(snapshot);
        }

        let elapsed = start.elapsed();
        if elapsed < tick_duration {
            thread::sleep(tick_duration - elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AppSettings;
    use std::fs;

    #[test]
    fn frame_delta_normalizes_and_caps() {
        assert!((frame_delta(Duration::from_millis(1000) / 60) - 1.0).abs() < 1e-3);
        assert!((frame_delta(Duration::from_millis(25)) - 1.5).abs() < 1e-3);
        assert_eq!(frame_delta(Duration::from_secs(2)), 4.0);
        assert_eq!(frame_delta(Duration::ZERO), 0.0);
    }

    #[test]
    fn loop_runs_commands_and_hands_session_back() {
        let save_dir = std::env::temp_dir().join("rogue_test_game_loop");
        let _ = fs::remove_dir_all(&save_dir);
        let settings = AppSettings {
            save_dir: save_dir.clone(),
            tick_hz: 240,
            ..Default::default()
        };

        let handle = spawn_game_loop(Session::start(&settings), settings.tick_hz).unwrap();
        assert!(handle.send(GameLoopCommand::Command(PlayerCommand::StartRun)));
        assert!(handle.send(GameLoopCommand::Input(InputFrame::from_vector(1.0, 0.0))));

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut started = false;
        while Instant::now() < deadline {
            if handle
                .latest_snapshot()
                .is_some_and(|s| s.player.is_some() && s.time.tick > 3)
            {
                started = true;
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        assert!(started, "loop never produced a running snapshot");

        let session = handle.shutdown().unwrap();
        assert!(session.engine().player_position().is_some());
        session.end().unwrap();
        assert!(save_dir.join("rogue-gamestate.json").exists());

        let _ = fs::remove_dir_all(&save_dir);
    }
}
