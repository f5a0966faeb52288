//! Host glue for the survival arena: session lifecycle, the real-time game
//! loop thread, JSON persistence and env-driven settings.

pub mod game_loop;
pub mod persistence;
pub mod session;
pub mod settings;
pub mod state;

pub use session::Session;
pub use settings::AppSettings;
pub use state::AppState;
