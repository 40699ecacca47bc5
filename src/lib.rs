//! Space Invaders - A formation shooter with a frame-stepped simulation core
//!
//! Core modules:
//! - `sim`: Entity simulation (player, enemies, bullets, formation, collisions)
//! - `screens`: Loading / menu / playing screen controllers
//! - `manager`: Owns the active screen and drives transitions
//! - `renderer`: Draw-hook surface and headless display list
//! - `settings`: Data-driven game balance

pub mod audio;
pub mod highscores;
pub mod input;
pub mod manager;
pub mod renderer;
pub mod screens;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use input::{InputFrame, Key};
pub use manager::GameManager;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// Speeds are expressed in pixels per second at the 60 FPS reference rate.
pub mod consts {
    /// Reference frame rate the per-frame tunings were authored against
    pub const REFERENCE_FPS: f32 = 60.0;

    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0 * REFERENCE_FPS;
    pub const PLAYER_LIVES: u32 = 3;
    /// Seconds between player shots (250 ms)
    pub const PLAYER_SHOOT_DELAY: f32 = 0.25;
    pub const PLAYER_INVULNERABLE_DURATION: f32 = 2.0;
    /// Distance of the player's top edge above the bottom of the window
    pub const PLAYER_BOTTOM_OFFSET: f32 = 100.0;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = 5.0;
    pub const BULLET_HEIGHT: f32 = 15.0;
    pub const BULLET_SPEED: f32 = 7.0 * REFERENCE_FPS;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 30.0;
    pub const ENEMY_SPEED: f32 = 1.0 * REFERENCE_FPS;
    /// Random re-arm window for an enemy's own shot timer (seconds)
    pub const ENEMY_SHOT_REARM_MIN: f32 = 1.0;
    pub const ENEMY_SHOT_REARM_MAX: f32 = 3.0;
    /// Shared timer between enemy volleys (seconds)
    pub const ENEMY_VOLLEY_INTERVAL: f32 = 1.5;

    /// Formation defaults
    pub const FORMATION_ROWS: u32 = 4;
    pub const FORMATION_COLS: u32 = 8;
    pub const FORMATION_SPACING_X: f32 = 60.0;
    pub const FORMATION_SPACING_Y: f32 = 50.0;
    pub const FORMATION_START_Y: f32 = 50.0;
    pub const FORMATION_DESCENT_STEP: f32 = 20.0;
    pub const FORMATION_DESCENT_DELAY: f32 = 0.5;
    /// Formation speed multiplier gained per cleared wave
    pub const FORMATION_SPEED_STEP: f32 = 0.2;
    /// Distance of the invasion line above the bottom of the window
    pub const INVASION_MARGIN: f32 = 100.0;

    /// Scoring table
    pub const SCORE_ENEMY_BASIC: u64 = 10;
    pub const SCORE_ENEMY_FAST: u64 = 20;
    pub const SCORE_ENEMY_TANK: u64 = 30;

    /// Loading screen progress per second (fraction of the bar)
    pub const LOADING_RATE: f32 = 0.3;
    pub const LOADING_RESOURCES: u32 = 10;
}
