//! Host-side handle to the one live session.
//!
//! Entry points return `Result<_, String>` so a UI bridge can surface the
//! message directly.

use std::sync::Mutex;

use rogue_core::commands::PlayerCommand;
use rogue_core::input::InputFrame;
use rogue_core::state::FrameSnapshot;

use crate::game_loop::{self, GameLoopCommand, GameLoopHandle};
use crate::session::Session;
use crate::settings::AppSettings;

#[derive(Default)]
pub struct AppState {
    game_loop: Mutex<Option<GameLoopHandle>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load records and start the loop. Fails if a session is already live.
    pub fn start_session(&self, settings: &AppSettings) -> Result<(), String> {
        let mut slot = self.game_loop.lock().map_err(|_| "state lock poisoned".to_string())?;
        if slot.is_some() {
            return Err("a session is already running".to_string());
        }
        let handle = game_loop::spawn_game_loop(Session::start(settings), settings.tick_hz)
            .map_err(|e| format!("failed to spawn game loop: {e}"))?;
        *slot = Some(handle);
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.game_loop
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    pub fn send_command(&self, command: PlayerCommand) -> Result<(), String> {
        self.send(GameLoopCommand::Command(command))
    }

    pub fn send_input(&self, input: InputFrame) -> Result<(), String> {
        self.send(GameLoopCommand::Input(input))
    }

    fn send(&self, command: GameLoopCommand) -> Result<(), String> {
        let slot = self.game_loop.lock().map_err(|_| "state lock poisoned".to_string())?;
        let handle = slot.as_ref().ok_or_else(|| "no session running".to_string())?;
        if handle.send(command) {
            Ok(())
        } else {
            Err("game loop has stopped".to_string())
        }
    }

    /// Latest frame, `None` when no session is running or no frame exists yet.
    pub fn latest_snapshot(&self) -> Option<FrameSnapshot> {
        let slot = self.game_loop.lock().ok()?;
        slot.as_ref()?.latest_snapshot()
    }

    /// Stop the loop and persist the session.
    pub fn end_session(&self) -> Result<(), String> {
        let handle = self
            .game_loop
            .lock()
            .map_err(|_| "state lock poisoned".to_string())?
            .take()
            .ok_or_else(|| "no session running".to_string())?;
        let session = handle.shutdown()?;
        session.end().map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn session_lifecycle_is_explicit() {
        let save_dir = std::env::temp_dir().join("rogue_test_app_state");
        let _ = fs::remove_dir_all(&save_dir);
        let settings = AppSettings {
            save_dir: save_dir.clone(),
            tick_hz: 240,
            ..Default::default()
        };
        let state = AppState::new();

        assert!(!state.is_running());
        assert!(state.latest_snapshot().is_none());
        assert!(state.send_command(PlayerCommand::StartRun).is_err());
        assert!(state.end_session().is_err());

        state.start_session(&settings).unwrap();
        assert!(state.is_running());
        let second = state.start_session(&settings);
        assert_eq!(second, Err("a session is already running".to_string()));

        state.send_command(PlayerCommand::StartRun).unwrap();
        state.send_input(InputFrame::default()).unwrap();

        state.end_session().unwrap();
        assert!(!state.is_running());
        assert!(save_dir.join("rogue-config.json").exists());

        let _ = fs::remove_dir_all(&save_dir);
    }
}
