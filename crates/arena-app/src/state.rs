//! State shared between the input reader, the game loop thread and `main`.

use std::sync::{Arc, Mutex};

use arena_core::commands::PlayerCommand;
use arena_core::state::GameStateSnapshot;

/// Commands sent from the input reader to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after every tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

pub fn new_shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
