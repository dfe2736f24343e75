//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use arena_core::commands::PlayerCommand;
use arena_core::components::{FocalPoint, PlayerInput, PowerupIndicator};
use arena_core::config::ArenaTuning;
use arena_core::constants::{DT, FALL_LIMIT_Y};
use arena_core::enums::{GamePhase, PowerupKind};
use arena_core::events::GameEvent;
use arena_core::state::{level_label, GameStateSnapshot, HudState};
use arena_core::types::SimTime;

use crate::audio::AudioDirector;
use crate::systems;
use crate::systems::physics::ContactTracker;
use crate::systems::powerup_spawner::PowerupSpawner;
use crate::systems::snapshot::SceneView;
use crate::systems::wave_spawner::WaveState;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub tuning: ArenaTuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: ArenaTuning::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    tuning: ArenaTuning,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,

    player: Entity,
    focal_point: FocalPoint,
    indicator: PowerupIndicator,
    contacts: ContactTracker,
    waves: WaveState,
    powerup_spawner: PowerupSpawner,
    hud: HudState,

    /// Survives scene reloads.
    audio: AudioDirector,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config, showing the title screen.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let player = world_setup::setup_scene(&mut world, &config.tuning);
        let audio = AudioDirector::new(config.tuning.audio.clone(), config.seed.wrapping_add(1));

        Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            tuning: config.tuning,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            player,
            focal_point: FocalPoint::default(),
            indicator: systems::indicator::new_indicator(),
            contacts: ContactTracker::default(),
            waves: WaveState::default(),
            powerup_spawner: PowerupSpawner::default(),
            hud: HudState::default(),
            audio,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// While paused the world is frozen but music fades keep running.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase != GamePhase::Paused {
            self.run_systems();
            self.time.advance();
        }

        self.audio.update(DT);

        let scene = SceneView {
            time: self.time,
            phase: self.phase,
            wave: self.waves.wave_number,
            focal_point: &self.focal_point,
            indicator: &self.indicator,
            hud: &self.hud,
            music: self.audio.music_view(),
        };
        systems::snapshot::build_snapshot(
            &self.world,
            scene,
            self.audio.drain_cues(),
            std::mem::take(&mut self.events),
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Handle of the player entity.
    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn hud(&self) -> &HudState {
        &self.hud
    }

    pub fn wave_number(&self) -> u32 {
        self.waves.wave_number
    }

    /// Mutable world access for tests that need to stage a situation.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn an enemy of the first configured archetype at a fixed spot (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, position: glam::Vec3) -> Entity {
        let profile = self.tuning.enemy.profiles[0];
        let enemy = world_setup::spawn_enemy(
            &mut self.world,
            &mut self.rng,
            &profile,
            self.tuning.enemy.drag,
            0.0,
        );
        self.place(enemy, position);
        enemy
    }

    /// Spawn a pickup at a fixed spot (for testing).
    #[cfg(test)]
    pub fn spawn_test_pickup(&mut self, kind: PowerupKind, position: glam::Vec3) -> Entity {
        let pickup = world_setup::spawn_pickup(&mut self.world, &mut self.rng, kind, 0.0);
        self.place(pickup, position);
        pickup
    }

    /// Teleport an entity (for testing).
    #[cfg(test)]
    pub fn place(&mut self, entity: Entity, position: glam::Vec3) {
        if let Ok(mut transform) = self
            .world
            .get::<&mut arena_core::components::Transform>(entity)
        {
            transform.position = position;
        }
    }

    #[cfg(test)]
    pub fn powerup_spawner(&self) -> &PowerupSpawner {
        &self.powerup_spawner
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Commands that make no sense in the
    /// current phase are ignored.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Title {
                    self.start_game();
                } else {
                    debug!("Ignoring StartGame in {:?}", self.phase);
                }
            }
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Playing => self.pause_game(),
                GamePhase::Paused => self.resume_game(),
                _ => debug!("Ignoring TogglePause in {:?}", self.phase),
            },
            PlayerCommand::Restart => {
                if self.phase == GamePhase::GameOver {
                    info!("Restarting game");
                    self.reload_scene();
                } else {
                    debug!("Ignoring Restart in {:?}", self.phase);
                }
            }
            PlayerCommand::ReturnToTitle => {
                if self.phase == GamePhase::Paused {
                    info!("Returning to title");
                    self.reload_scene();
                } else {
                    debug!("Ignoring ReturnToTitle in {:?}", self.phase);
                }
            }
            PlayerCommand::SetInput { forward, turn } => {
                if let Ok(mut input) = self.world.get::<&mut PlayerInput>(self.player) {
                    input.forward = forward.clamp(-1.0, 1.0);
                    input.turn = turn.clamp(-1.0, 1.0);
                }
            }
            PlayerCommand::FireRockets => {
                if self.phase != GamePhase::Paused && self.held_powerup() == PowerupKind::Rockets {
                    if let Some(player_pos) = systems::enemy_ai::player_position(&self.world) {
                        systems::rockets::launch(
                            &mut self.world,
                            player_pos,
                            &self.tuning.rocket,
                            &mut self.audio,
                            &mut self.events,
                        );
                    }
                }
            }
            PlayerCommand::Smash => {
                if self.phase != GamePhase::Paused && self.held_powerup() == PowerupKind::Smash {
                    systems::smash::begin(&mut self.world, self.player, &self.tuning.smash);
                }
            }
        }
    }

    fn held_powerup(&self) -> PowerupKind {
        systems::powerups::held_kind(&self.world, self.player)
    }

    fn start_game(&mut self) {
        self.phase = GamePhase::Playing;
        self.audio.play_background_music();

        self.hud.start_button_visible = false;
        self.hud.start_menu_visible = false;
        self.hud.level_text_visible = true;

        systems::wave_spawner::start(
            &mut self.world,
            &mut self.rng,
            &mut self.waves,
            &self.tuning.spawner,
            &self.tuning.enemy,
            &mut self.events,
        );
        self.hud.level_text = level_label(self.waves.wave_number);
        systems::powerup_spawner::start(&mut self.powerup_spawner, &self.tuning.spawner);

        self.events.push(GameEvent::GameStarted);
        info!("Game started");
    }

    fn end_game(&mut self) {
        self.phase = GamePhase::GameOver;
        self.audio.stop_background_music();
        info!("Game over on wave {}", self.waves.wave_number);

        systems::wave_spawner::stop(&mut self.waves);
        systems::powerup_spawner::stop(&mut self.powerup_spawner);

        self.hud.game_over_visible = true;
        self.hud.restart_button_visible = true;
        self.events.push(GameEvent::GameOver {
            wave: self.waves.wave_number,
        });
    }

    fn pause_game(&mut self) {
        self.phase = GamePhase::Paused;
        systems::physics::freeze_bodies(&mut self.world);

        self.hud.pause_visible = true;
        self.hud.return_to_title_visible = true;
        self.events.push(GameEvent::Paused);
        info!("Game paused");
    }

    fn resume_game(&mut self) {
        self.phase = GamePhase::Playing;

        self.hud.pause_visible = false;
        self.hud.return_to_title_visible = false;
        self.events.push(GameEvent::Resumed);
        info!("Game resumed");
    }

    /// Rebuild the scene from scratch and show the title screen.
    /// The audio director and RNG carry over.
    fn reload_scene(&mut self) {
        self.player = world_setup::setup_scene(&mut self.world, &self.tuning);
        self.time = SimTime::default();
        self.phase = GamePhase::Title;
        self.despawn_buffer.clear();
        self.focal_point = FocalPoint::default();
        self.indicator = systems::indicator::new_indicator();
        self.contacts.clear();
        self.waves = WaveState::default();
        self.powerup_spawner = PowerupSpawner::default();
        self.hud = HudState::default();
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let playing = self.phase == GamePhase::Playing;

        // 1. Player input forces
        systems::player_control::run(
            &mut self.world,
            &mut self.focal_point,
            &self.tuning.player,
            DT,
        );
        // 2. Smash sequence (forces vertical velocity before integration)
        systems::smash::run(
            &mut self.world,
            self.player,
            &self.tuning.smash,
            &mut self.audio,
            &mut self.events,
            DT,
        );
        // 3. Enemy chase, only while a game is running
        if playing {
            systems::enemy_ai::run(&mut self.world, DT);
        }
        // 4. Integration + island support
        systems::physics::integrate(&mut self.world, DT);
        // 5. Rocket guidance and lifetime
        systems::rockets::run(
            &mut self.world,
            &self.tuning.rocket,
            DT,
            &mut self.despawn_buffer,
        );
        // 6. Contact resolution, then gameplay reactions to new contacts
        let contacts = systems::physics::resolve_contacts(&mut self.world, &mut self.contacts);
        systems::contacts::run(
            &self.world,
            &contacts,
            &self.tuning,
            &mut self.indicator,
            &mut self.audio,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 7. Powerup countdown
        systems::powerups::run(&mut self.world, &mut self.indicator, &mut self.events, DT);
        // 8. Indicator follows the player
        let player_pos = systems::enemy_ai::player_position(&self.world);
        systems::indicator::run(&mut self.indicator, player_pos, &mut self.rng, DT);
        // 9. Cleanup (spent pickups and rockets; fallen enemies only mid-game)
        systems::cleanup::run(
            &mut self.world,
            playing,
            &mut self.despawn_buffer,
            &mut self.events,
        );

        if !playing {
            return;
        }

        // 10. Game over when the player drops off the island
        if player_pos.is_some_and(|pos| pos.y < FALL_LIMIT_Y) {
            self.end_game();
            return;
        }
        // 11. Next wave when the island is clear
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.waves,
            &self.tuning.spawner,
            &self.tuning.enemy,
            &mut self.hud,
            &mut self.events,
        );
        // 12. Powerup top-up
        systems::powerup_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.powerup_spawner,
            &self.tuning.spawner,
            &mut self.events,
            DT,
        );
    }
}
