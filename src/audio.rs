//! Sound cues
//!
//! Procedurally described sound effects. The game only decides *what* to
//! play and how loud; an audio backend drains the queue and synthesises each
//! cue from its tone recipe, so no sound files are needed.

use crate::settings::AudioSettings;
use crate::sim::{EnemyKind, GameEvent};

/// Cues the game can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Player fires
    PlayerShoot,
    /// Enemy fires
    EnemyShoot,
    /// Enemy hit but not destroyed
    EnemyHit,
    /// Enemy destroyed
    Explosion(EnemyKind),
    /// Player loses a life
    PlayerHit,
    WaveClear,
    /// Formation reached the invasion line
    Invasion,
    GameOver,
    /// Finished game took first place
    HighScore,
    /// Menu cursor moved
    MenuMove,
    /// Menu option confirmed
    MenuSelect,
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// One oscillator voice: exponential pitch glide with a decaying gain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub waveform: Waveform,
    pub start_hz: f32,
    pub end_hz: f32,
    /// Peak gain before master/sfx volume
    pub gain: f32,
    /// Seconds until the voice stops
    pub duration: f32,
}

const fn tone(waveform: Waveform, start_hz: f32, end_hz: f32, gain: f32, duration: f32) -> Tone {
    Tone {
        waveform,
        start_hz,
        end_hz,
        gain,
        duration,
    }
}

impl SoundEffect {
    /// Map a session event to its cue, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PlayerShot => Some(SoundEffect::PlayerShoot),
            GameEvent::EnemyShot => Some(SoundEffect::EnemyShoot),
            GameEvent::EnemyHit => Some(SoundEffect::EnemyHit),
            GameEvent::EnemyDestroyed { kind, .. } => Some(SoundEffect::Explosion(*kind)),
            GameEvent::PlayerHit { .. } => Some(SoundEffect::PlayerHit),
            GameEvent::WaveCleared { .. } => Some(SoundEffect::WaveClear),
            GameEvent::Invasion => Some(SoundEffect::Invasion),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::LevelUp { .. } | GameEvent::Restarted => None,
        }
    }

    /// Voices that make up this effect, all started together
    pub fn tones(self) -> &'static [Tone] {
        match self {
            SoundEffect::PlayerShoot => recipes::PLAYER_SHOOT,
            SoundEffect::EnemyShoot => recipes::ENEMY_SHOOT,
            SoundEffect::EnemyHit => recipes::ENEMY_HIT,
            SoundEffect::Explosion(EnemyKind::Basic) => recipes::EXPLOSION_BASIC,
            SoundEffect::Explosion(EnemyKind::Fast) => recipes::EXPLOSION_FAST,
            SoundEffect::Explosion(EnemyKind::Tank) => recipes::EXPLOSION_TANK,
            SoundEffect::PlayerHit => recipes::PLAYER_HIT,
            SoundEffect::WaveClear => recipes::WAVE_CLEAR,
            SoundEffect::Invasion => recipes::INVASION,
            SoundEffect::GameOver => recipes::GAME_OVER,
            SoundEffect::HighScore => recipes::HIGH_SCORE,
            SoundEffect::MenuMove => recipes::MENU_MOVE,
            SoundEffect::MenuSelect => recipes::MENU_SELECT,
        }
    }
}

mod recipes {
    use super::Waveform::*;
    use super::{Tone, tone};

    /// Short laser chirp
    pub const PLAYER_SHOOT: &[Tone] = &[tone(Square, 880.0, 220.0, 0.25, 0.12)];
    pub const ENEMY_SHOOT: &[Tone] = &[tone(Sawtooth, 300.0, 120.0, 0.2, 0.15)];
    /// Soft tap
    pub const ENEMY_HIT: &[Tone] = &[tone(Triangle, 300.0, 300.0, 0.25, 0.08)];
    pub const EXPLOSION_BASIC: &[Tone] = &[
        tone(Sawtooth, 400.0, 60.0, 0.35, 0.2),
        tone(Sine, 60.0, 40.0, 0.3, 0.12),
    ];
    pub const EXPLOSION_FAST: &[Tone] = &[
        tone(Square, 1200.0, 200.0, 0.3, 0.15),
        tone(Sine, 80.0, 50.0, 0.25, 0.1),
    ];
    /// Deep metallic clang
    pub const EXPLOSION_TANK: &[Tone] = &[
        tone(Square, 180.0, 90.0, 0.35, 0.3),
        tone(Triangle, 720.0, 540.0, 0.2, 0.25),
        tone(Sine, 45.0, 30.0, 0.4, 0.3),
    ];
    pub const PLAYER_HIT: &[Tone] = &[
        tone(Sawtooth, 200.0, 40.0, 0.5, 0.5),
        tone(Sine, 50.0, 30.0, 0.4, 0.4),
    ];
    /// Rising arpeggio
    pub const WAVE_CLEAR: &[Tone] = &[
        tone(Triangle, 523.0, 523.0, 0.3, 0.15),
        tone(Triangle, 659.0, 659.0, 0.3, 0.3),
        tone(Triangle, 784.0, 784.0, 0.3, 0.45),
    ];
    pub const INVASION: &[Tone] = &[tone(Square, 110.0, 55.0, 0.4, 0.8)];
    pub const GAME_OVER: &[Tone] = &[
        tone(Sawtooth, 440.0, 110.0, 0.4, 1.0),
        tone(Sine, 220.0, 55.0, 0.3, 1.2),
    ];
    pub const HIGH_SCORE: &[Tone] = &[
        tone(Sine, 784.0, 1568.0, 0.3, 0.6),
        tone(Triangle, 1047.0, 2093.0, 0.2, 0.6),
    ];
    pub const MENU_MOVE: &[Tone] = &[tone(Sine, 600.0, 600.0, 0.15, 0.05)];
    pub const MENU_SELECT: &[Tone] = &[tone(Sine, 600.0, 900.0, 0.2, 0.1)];
}

/// A sound to play at a resolved volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    pub effect: SoundEffect,
    pub volume: f32,
}

impl Cue {
    /// Seconds until the longest voice of this cue stops
    pub fn duration(&self) -> f32 {
        self.effect
            .tones()
            .iter()
            .map(|t| t.duration)
            .fold(0.0, f32::max)
    }
}

/// Collects cues produced during a frame for the audio backend
#[derive(Debug, Clone)]
pub struct AudioQueue {
    pending: Vec<Cue>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioQueue {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Queue configured from the audio settings section
    pub fn from_settings(settings: &AudioSettings) -> Self {
        let mut queue = Self::new();
        queue.set_master_volume(settings.master_volume);
        queue.set_sfx_volume(settings.sfx_volume);
        queue.set_muted(settings.muted);
        queue
    }

    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.sfx_volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        log::debug!("Audio {}", if muted { "muted" } else { "unmuted" });
    }

    /// Gain applied to new cues; zero when muted
    fn gain(&self) -> f32 {
        if self.muted {
            return 0.0;
        }
        self.master_volume * self.sfx_volume
    }

    /// Queue an effect; silent volume drops it
    pub fn play(&mut self, effect: SoundEffect) {
        let volume = self.gain();
        if volume <= 0.0 {
            return;
        }
        self.pending.push(Cue { effect, volume });
    }

    /// Queue the cue for a session event, if it has one
    pub fn play_event(&mut self, event: &GameEvent) {
        if let Some(effect) = SoundEffect::for_event(event) {
            self.play(effect);
        }
    }

    pub fn pending(&self) -> &[Cue] {
        &self.pending
    }

    /// Hand every queued cue to the backend
    pub fn drain(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.pending)
    }
}
