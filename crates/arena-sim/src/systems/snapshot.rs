//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! Read-only: it never modifies the world.

use hecs::World;

use arena_core::components::*;
use arena_core::enums::GamePhase;
use arena_core::events::{GameEvent, SoundCue};
use arena_core::state::*;
use arena_core::types::SimTime;

use crate::abilities::Rocket;
use crate::systems::{rockets, smash};

/// Everything outside the world that a snapshot reports.
pub struct SceneView<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: u32,
    pub focal_point: &'a FocalPoint,
    pub indicator: &'a PowerupIndicator,
    pub hud: &'a HudState,
    pub music: MusicView,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    scene: SceneView<'_>,
    sound_cues: Vec<SoundCue>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: scene.time,
        phase: scene.phase,
        wave: scene.wave,
        player: build_player(world, scene.focal_point),
        enemies: build_enemies(world),
        pickups: build_pickups(world),
        rockets: build_rockets(world),
        indicator: IndicatorView {
            visible: scene.indicator.visible,
            position: scene.indicator.position,
            spin_degrees: scene.indicator.spin_degrees,
            scale: scene.indicator.scale,
            color: scene.indicator.color,
        },
        hud: scene.hud.clone(),
        music: scene.music,
        sound_cues,
        events,
    }
}

fn build_player(world: &World, focal_point: &FocalPoint) -> Option<PlayerView> {
    let mut query = world.query::<(&Player, &Transform, &RigidBody, &PowerupHolder)>();
    let (entity, (_, transform, body, holder)) = query.iter().next()?;

    Some(PlayerView {
        position: transform.position,
        velocity: body.velocity,
        powerup: holder.kind,
        powerup_remaining_secs: holder.remaining_secs,
        smashing: smash::is_smashing(world, entity),
        camera_yaw: focal_point.yaw_degrees,
    })
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Transform, &RigidBody)>()
        .iter()
        .map(|(_, (enemy, transform, body))| EnemyView {
            archetype: enemy.archetype,
            position: transform.position,
            velocity: body.velocity,
            radius: body.radius,
        })
        .collect()
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    world
        .query::<(&PowerupPickup, &Transform)>()
        .iter()
        .map(|(_, (pickup, transform))| PickupView {
            kind: pickup.kind,
            position: transform.position,
        })
        .collect()
}

fn build_rockets(world: &World) -> Vec<RocketView> {
    world
        .query::<(&Rocket, &Transform)>()
        .iter()
        .map(|(_, (rocket, transform))| RocketView {
            position: transform.position,
            forward: transform.forward,
            homing: rockets::is_homing(world, rocket),
        })
        .collect()
}
