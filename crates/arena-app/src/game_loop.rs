//! Game loop thread: runs the simulation engine at 60Hz and emits snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Snapshots are written as JSON lines and
//! stored in shared state for `main` to inspect after the run.

use std::io::{self, Write};
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use arena_core::constants::TICK_RATE;
use arena_core::events::{GameEvent, SoundCue};
use arena_core::state::GameStateSnapshot;
use arena_sim::engine::{SimConfig, SimulationEngine};

use crate::error::AppError;
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Stop after this many ticks.
    pub max_ticks: Option<u64>,
    /// Write every Nth snapshot. Cues and events from skipped ticks are
    /// carried into the next written one.
    pub snapshot_every: u64,
    /// Sleep between ticks to hold the tick rate.
    pub paced: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            max_ticks: None,
            snapshot_every: 1,
            paced: true,
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle yielding the number of ticks run.
pub fn spawn_game_loop<W>(
    config: SimConfig,
    options: LoopOptions,
    out: W,
    latest_snapshot: SharedSnapshot,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<Result<u64, AppError>>)>
where
    W: Write + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("arena-game-loop".into())
        .spawn(move || {
            let mut engine = SimulationEngine::new(config);
            run_game_loop(&mut engine, &cmd_rx, options, out, &latest_snapshot)
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect, the tick limit,
/// or the reader on `out` going away.
pub fn run_game_loop<W: Write>(
    engine: &mut SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    options: LoopOptions,
    mut out: W,
    latest_snapshot: &SharedSnapshot,
) -> Result<u64, AppError> {
    let stride = options.snapshot_every.max(1);
    let mut ticks: u64 = 0;
    let mut pending_cues: Vec<SoundCue> = Vec::new();
    let mut pending_events: Vec<GameEvent> = Vec::new();
    let mut next_tick_time = Instant::now();

    loop {
        if options.max_ticks.is_some_and(|max| ticks >= max) {
            info!("Reached tick limit of {ticks}");
            break;
        }

        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    info!("Game loop shutting down after {ticks} ticks");
                    return Ok(ticks);
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return Ok(ticks),
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let mut snapshot = engine.tick();
        ticks += 1;

        // 3. Write every Nth snapshot, folding in what the skipped ones carried
        pending_cues.append(&mut snapshot.sound_cues);
        pending_events.append(&mut snapshot.events);
        if ticks % stride == 0 {
            snapshot.sound_cues = std::mem::take(&mut pending_cues);
            snapshot.events = std::mem::take(&mut pending_events);
            if !write_snapshot(&mut out, &snapshot)? {
                debug!("Snapshot reader went away");
                return Ok(ticks);
            }
        }

        // 4. Store latest snapshot
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        if options.paced {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind, skip ahead instead of catching up
                next_tick_time = now;
            }
        }
    }

    out.flush()?;
    Ok(ticks)
}

/// Write one snapshot line. Returns false when the reader has hung up.
fn write_snapshot<W: Write>(out: &mut W, snapshot: &GameStateSnapshot) -> Result<bool, AppError> {
    let line = serde_json::to_string(snapshot)?;
    let result = writeln!(out, "{line}").and_then(|_| out.flush());
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(false),
        Err(e) => Err(e.into()),
    }
}
