//! One play session: the engine plus the stores it reads and writes.
//!
//! Created explicitly with `Session::start` and torn down with
//! `Session::end`. Nothing here is global; whoever starts a session owns it.

use std::path::{Path, PathBuf};

use tracing::info;

use rogue_core::commands::PlayerCommand;
use rogue_core::config::GameConfig;
use rogue_core::events::GameEvent;
use rogue_core::input::InputFrame;
use rogue_core::progression::Progression;
use rogue_core::state::FrameSnapshot;
use rogue_sim::{SimConfig, SimulationEngine};

use crate::persistence::{self, PersistError};
use crate::settings::AppSettings;

pub struct Session {
    engine: SimulationEngine,
    progression: Progression,
    config: GameConfig,
    save_dir: PathBuf,
}

impl Session {
    /// Load persisted records from the settings' save directory and build
    /// a fresh engine. No run is active until `StartRun` is queued.
    pub fn start(settings: &AppSettings) -> Self {
        let (progression, config) = persistence::load_records(&settings.save_dir);
        info!(
            seed = settings.seed,
            dir = %settings.save_dir.display(),
            high_score = progression.progress.high_score,
            "session started"
        );
        Self {
            engine: SimulationEngine::new(SimConfig {
                seed: settings.seed,
                ..Default::default()
            }),
            progression,
            config,
            save_dir: settings.save_dir.clone(),
        }
    }

    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.engine.queue_command(command);
    }

    /// Advance one frame. Tutorial milestones reported by the engine are
    /// written back to the config store.
    pub fn tick(&mut self, input: &InputFrame, delta: f32) -> FrameSnapshot {
        let snapshot = self
            .engine
            .tick(&mut self.progression, &self.config, input, delta);
        for event in &snapshot.events {
            if let GameEvent::TutorialStep { step } = event {
                self.config.complete_tutorial_step(*step);
            }
        }
        snapshot
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Debug-panel access. Changes apply from the next tick.
    pub fn config_mut(&mut self) -> &mut GameConfig {
        &mut self.config
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    pub fn save(&self) -> Result<(), PersistError> {
        persistence::save_records(&self.save_dir, &self.progression, &self.config)
    }

    /// Persist both records and drop the session.
    pub fn end(self) -> Result<(), PersistError> {
        self.save()?;
        info!(
            score = self.progression.progress.score,
            high_score = self.progression.progress.high_score,
            "session ended"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rogue_core::enums::TutorialStep;
    use std::fs;

    fn settings_in(name: &str) -> AppSettings {
        let save_dir = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&save_dir);
        AppSettings {
            save_dir,
            ..Default::default()
        }
    }

    #[test]
    fn tutorial_steps_are_written_to_config() {
        let settings = settings_in("rogue_test_session_tutorial");
        let mut session = Session::start(&settings);
        session.queue_command(PlayerCommand::StartRun);
        session.tick(&InputFrame::from_vector(1.0, 0.0), 1.0);
        assert!(session.config().tutorial_done(TutorialStep::HasMoved));
        assert!(!session.config().tutorial_done(TutorialStep::HasCollectedGem));
    }

    #[test]
    fn end_persists_and_start_restores() {
        let settings = settings_in("rogue_test_session_roundtrip");
        let mut session = Session::start(&settings);
        session.config_mut().magnet_radius = 180.0;
        session.queue_command(PlayerCommand::StartRun);
        for _ in 0..5 {
            session.tick(&InputFrame::from_vector(0.0, 1.0), 1.0);
        }
        session.end().unwrap();

        let restored = Session::start(&settings);
        assert_eq!(restored.config().magnet_radius, 180.0);
        assert!(restored.config().tutorial_done(TutorialStep::HasMoved));
        assert!(restored.engine().player_position().is_none());

        let _ = fs::remove_dir_all(&settings.save_dir);
    }
}
