//! Music and sound-effect direction.
//!
//! The director never mixes audio. It tracks the background music channel
//! (clip, playing flag, volume, fades) and turns gameplay sound requests into
//! [`SoundCue`]s for the host to play. One director lives for the whole
//! session and survives scene reloads.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use arena_core::config::AudioTuning;
use arena_core::enums::{PowerupKind, SoundClip};
use arena_core::events::SoundCue;
use arena_core::state::MusicView;

/// A volume ramp on the music channel, advanced with unscaled time.
#[derive(Debug, Clone, Copy)]
struct MusicFade {
    start_volume: f32,
    target_volume: f32,
    elapsed: f32,
    duration: f32,
    /// Stop playback once the ramp completes.
    stop_when_done: bool,
}

#[derive(Debug, Clone, Default)]
struct MusicChannel {
    asset: Option<String>,
    playing: bool,
    volume: f32,
}

pub struct AudioDirector {
    tuning: AudioTuning,
    rng: ChaCha8Rng,
    music: MusicChannel,
    fade: Option<MusicFade>,
    cues: Vec<SoundCue>,
}

impl AudioDirector {
    pub fn new(tuning: AudioTuning, seed: u64) -> Self {
        Self {
            tuning,
            rng: ChaCha8Rng::seed_from_u64(seed),
            music: MusicChannel::default(),
            fade: None,
            cues: Vec::new(),
        }
    }

    // --- Background music ---

    /// Start the music from silence and fade it in. No-op without a music clip.
    pub fn play_background_music(&mut self) {
        let Some(asset) = self.tuning.clips.asset(SoundClip::BackgroundMusic) else {
            return;
        };

        self.music.asset = Some(asset.to_string());
        self.music.volume = 0.0;
        self.music.playing = true;
        self.fade = Some(MusicFade {
            start_volume: 0.0,
            target_volume: 1.0,
            elapsed: 0.0,
            duration: self.tuning.fade_duration,
            stop_when_done: false,
        });
    }

    /// Fade the music out from its current volume, then stop. No-op when silent.
    pub fn stop_background_music(&mut self) {
        if !self.music.playing {
            return;
        }

        self.fade = Some(MusicFade {
            start_volume: self.music.volume,
            target_volume: 0.0,
            elapsed: 0.0,
            duration: self.tuning.fade_duration,
            stop_when_done: true,
        });
    }

    /// Advance any running fade by `dt` seconds of wall-clock time.
    pub fn update(&mut self, dt: f32) {
        let Some(fade) = self.fade.as_mut() else {
            return;
        };

        if fade.elapsed < fade.duration {
            let t = fade.elapsed / fade.duration;
            self.music.volume = fade.start_volume + (fade.target_volume - fade.start_volume) * t;
            fade.elapsed += dt;
            return;
        }

        self.music.volume = fade.target_volume;
        if fade.stop_when_done {
            self.music.playing = false;
        }
        self.fade = None;
    }

    pub fn music_view(&self) -> MusicView {
        MusicView {
            asset: self.music.asset.clone(),
            playing: self.music.playing,
            looping: true,
            volume: self.music.volume,
            fading: self.fade.is_some(),
        }
    }

    // --- Sound effects ---

    /// Queue a one-shot with a randomised pitch. No-op for an unassigned clip.
    pub fn play_sfx(&mut self, clip: SoundClip) {
        let Some(asset) = self.tuning.clips.asset(clip) else {
            return;
        };

        let pitch = self
            .rng
            .gen_range(self.tuning.min_pitch..=self.tuning.max_pitch);
        self.cues.push(SoundCue {
            clip,
            asset: asset.to_string(),
            pitch,
            volume: self.tuning.sfx_volume,
        });
    }

    pub fn play_player_enemy_collision(&mut self) {
        self.play_sfx(SoundClip::PlayerEnemyCollision);
    }

    pub fn play_enemy_enemy_collision(&mut self) {
        self.play_sfx(SoundClip::EnemyEnemyCollision);
    }

    /// Pickup jingle for a powerup kind, falling back to the generic one.
    pub fn play_powerup_pickup(&mut self, kind: PowerupKind) {
        let clip = match kind {
            PowerupKind::Pushback => SoundClip::PushbackPickup,
            PowerupKind::Rockets => SoundClip::RocketsPickup,
            PowerupKind::Smash => SoundClip::SmashPickup,
            PowerupKind::None => SoundClip::GenericPickup,
        };
        self.play_sfx(clip);
    }

    /// Activation sound for a powerup kind. `None` has no sound.
    pub fn play_powerup_use(&mut self, kind: PowerupKind) {
        let clip = match kind {
            PowerupKind::Pushback => SoundClip::PushbackUse,
            PowerupKind::Rockets => SoundClip::RocketsUse,
            PowerupKind::Smash => SoundClip::SmashUse,
            PowerupKind::None => return,
        };
        self.play_sfx(clip);
    }

    /// Take every cue queued since the last call.
    pub fn drain_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }
}
