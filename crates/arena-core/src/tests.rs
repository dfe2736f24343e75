#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::config::{ArenaTuning, ClipBank, ConfigError};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::{level_label, GameStateSnapshot, HudState};
    use crate::types::{flatten, forward_from_yaw, horizontal_radius, SimTime};

    use glam::Vec3;

    #[test]
    fn test_powerup_kind_serde() {
        let variants = vec![
            PowerupKind::None,
            PowerupKind::Pushback,
            PowerupKind::Rockets,
            PowerupKind::Smash,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: PowerupKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_command_tagged_json() {
        let json = r#"{"type":"SetInput","forward":1.0,"turn":-0.5}"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        match cmd {
            PlayerCommand::SetInput { forward, turn } => {
                assert_eq!(forward, 1.0);
                assert_eq!(turn, -0.5);
            }
            other => panic!("Unexpected command {other:?}"),
        }

        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"FireRockets"}"#).unwrap();
        assert!(matches!(cmd, PlayerCommand::FireRockets));
    }

    #[test]
    fn test_game_event_serde() {
        let event = GameEvent::WaveStarted { wave: 3, enemies: 3 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"WaveStarted\""));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Title);
        assert_eq!(back.hud, HudState::default());
    }

    #[test]
    fn test_hud_title_layout() {
        let hud = HudState::default();
        assert!(hud.start_menu_visible);
        assert!(hud.start_button_visible);
        assert!(!hud.game_over_visible);
        assert!(!hud.restart_button_visible);
        assert!(!hud.pause_visible);
        assert!(!hud.return_to_title_visible);
        assert!(!hud.level_text_visible);
        assert_eq!(hud.level_text, "Level: 1");
        assert_eq!(level_label(12), "Level: 12");
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_vector_helpers() {
        assert_eq!(flatten(Vec3::new(1.0, 5.0, -2.0)), Vec3::new(1.0, 0.0, -2.0));
        assert!((horizontal_radius(Vec3::new(3.0, 9.0, 4.0)) - 5.0).abs() < 1e-6);

        let north = forward_from_yaw(0.0);
        assert!((north - Vec3::Z).length() < 1e-6);
        let east = forward_from_yaw(90.0);
        assert!((east - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_spawn_area_fits_on_platform() {
        let corner = (2.0 * SPAWN_RANGE * SPAWN_RANGE).sqrt();
        assert!(corner < PLATFORM_RADIUS);
    }

    // ---- Tuning ----

    #[test]
    fn test_default_tuning_is_valid() {
        let tuning = ArenaTuning::default();
        tuning.validate().unwrap();
        assert_eq!(tuning.player.powerup_duration, 7.0);
        assert_eq!(tuning.spawner.max_enemies, 10);
        assert_eq!(tuning.spawner.max_powerups, 3);
        assert_eq!(tuning.enemy.profiles.len(), 2);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = ArenaTuning::from_json_str(r#"{"player":{"speed":8.0}}"#).unwrap();
        assert_eq!(tuning.player.speed, 8.0);
        assert_eq!(tuning.player.mass, PLAYER_MASS);
        assert_eq!(tuning.rocket.speed, ROCKET_SPEED);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml = r#"
            [spawner]
            max_enemies = 4
            powerup_kinds = ["Rockets"]

            [audio]
            min_pitch = 1.0
            max_pitch = 1.0
        "#;
        let tuning = ArenaTuning::from_toml_str(toml).unwrap();
        assert_eq!(tuning.spawner.max_enemies, 4);
        assert_eq!(tuning.spawner.powerup_kinds, vec![PowerupKind::Rockets]);
        assert_eq!(tuning.spawner.spawn_range, SPAWN_RANGE);
        assert_eq!(tuning.audio.min_pitch, 1.0);
    }

    #[test]
    fn test_inverted_pitch_rejected() {
        let result = ArenaTuning::from_json_str(r#"{"audio":{"min_pitch":1.1,"max_pitch":0.9}}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_empty_enemy_profiles_rejected() {
        let result = ArenaTuning::from_json_str(r#"{"enemy":{"profiles":[]}}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_powerup_duration_rejected() {
        let result = ArenaTuning::from_json_str(r#"{"player":{"powerup_duration":0.0}}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_negative_drag_rejected() {
        let player = ArenaTuning::from_json_str(r#"{"player":{"drag":-60.0}}"#);
        assert!(matches!(player, Err(ConfigError::Invalid(_))));
        let enemy = ArenaTuning::from_toml_str("[enemy]\ndrag = -0.5\n");
        assert!(matches!(enemy, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_drag_allowed() {
        assert!(ArenaTuning::from_json_str(r#"{"player":{"drag":0.0}}"#).is_ok());
    }

    #[test]
    fn test_zero_max_enemies_rejected() {
        let result = ArenaTuning::from_json_str(r#"{"spawner":{"max_enemies":0}}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = ArenaTuning::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let path = std::env::temp_dir().join("arena_tuning_test.yaml");
        std::fs::write(&path, "player: {}").unwrap();
        let result = ArenaTuning::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ArenaTuning::load_from_file("/definitely/not/here/tuning.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_clip_bank_lookup() {
        let bank = ClipBank::default();
        assert_eq!(
            bank.asset(SoundClip::SmashUse),
            Some("audio/smash_use.ogg")
        );
        let silent = ClipBank::silent();
        assert_eq!(silent.asset(SoundClip::BackgroundMusic), None);
    }
}
