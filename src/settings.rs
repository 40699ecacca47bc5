//! Game settings and balance tables
//!
//! Loaded once at startup and shared read-only with every screen.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading a settings file
#[derive(Debug)]
pub enum SettingsError {
    /// The file could not be read
    Io(std::io::Error),
    /// The file is not valid settings JSON
    Parse(serde_json::Error),
    /// A value parsed but is out of range
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read settings: {err}"),
            Self::Parse(err) => write!(f, "failed to parse settings: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid setting `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Play-area dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub width: f32,
    pub height: f32,
    /// Horizontal speed (px/s)
    pub speed: f32,
    pub lives: u32,
    /// Seconds between shots
    pub shoot_delay: f32,
    /// Seconds of damage immunity after a hit
    pub invulnerable_duration: f32,
    /// Top edge of the ship sits this far above the bottom of the window
    pub bottom_offset: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
            lives: PLAYER_LIVES,
            shoot_delay: PLAYER_SHOOT_DELAY,
            invulnerable_duration: PLAYER_INVULNERABLE_DURATION,
            bottom_offset: PLAYER_BOTTOM_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletSettings {
    pub width: f32,
    pub height: f32,
    /// Vertical speed (px/s)
    pub speed: f32,
}

impl Default for BulletSettings {
    fn default() -> Self {
        Self {
            width: BULLET_WIDTH,
            height: BULLET_HEIGHT,
            speed: BULLET_SPEED,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemySettings {
    pub width: f32,
    pub height: f32,
    /// Base horizontal speed (px/s) before type and formation multipliers
    pub speed: f32,
    pub shot_rearm_min: f32,
    pub shot_rearm_max: f32,
    /// Shared interval between enemy volleys
    pub volley_interval: f32,
}

impl Default for EnemySettings {
    fn default() -> Self {
        Self {
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            speed: ENEMY_SPEED,
            shot_rearm_min: ENEMY_SHOT_REARM_MIN,
            shot_rearm_max: ENEMY_SHOT_REARM_MAX,
            volley_interval: ENEMY_VOLLEY_INTERVAL,
        }
    }
}

/// Wave grid geometry and movement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormationSettings {
    pub rows: u32,
    pub cols: u32,
    pub spacing_x: f32,
    pub spacing_y: f32,
    pub start_y: f32,
    pub descent_step: f32,
    pub descent_delay: f32,
    pub speed_step: f32,
    pub invasion_margin: f32,
}

impl Default for FormationSettings {
    fn default() -> Self {
        Self {
            rows: FORMATION_ROWS,
            cols: FORMATION_COLS,
            spacing_x: FORMATION_SPACING_X,
            spacing_y: FORMATION_SPACING_Y,
            start_y: FORMATION_START_Y,
            descent_step: FORMATION_DESCENT_STEP,
            descent_delay: FORMATION_DESCENT_DELAY,
            speed_step: FORMATION_SPEED_STEP,
            invasion_margin: INVASION_MARGIN,
        }
    }
}

/// Points awarded per enemy type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTable {
    pub basic: u64,
    pub fast: u64,
    pub tank: u64,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            basic: SCORE_ENEMY_BASIC,
            fast: SCORE_ENEMY_FAST,
            tank: SCORE_ENEMY_TANK,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingSettings {
    /// Fraction of the progress bar filled per second
    pub rate: f32,
    pub resources: u32,
}

impl Default for LoadingSettings {
    fn default() -> Self {
        Self {
            rate: LOADING_RATE,
            resources: LOADING_RESOURCES,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

/// All tunables, injected read-only at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub player: PlayerSettings,
    pub bullet: BulletSettings,
    pub enemy: EnemySettings,
    pub formation: FormationSettings,
    pub scoring: ScoreTable,
    pub loading: LoadingSettings,
    pub audio: AudioSettings,
}

impl Settings {
    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Read settings from a file, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: "must be a positive number",
                })
            }
        }
        fn non_negative(field: &'static str, value: f32) -> Result<(), SettingsError> {
            if value >= 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: "must not be negative",
                })
            }
        }

        positive("window.width", self.window.width)?;
        positive("window.height", self.window.height)?;
        positive("player.width", self.player.width)?;
        positive("player.height", self.player.height)?;
        non_negative("player.speed", self.player.speed)?;
        non_negative("player.shoot_delay", self.player.shoot_delay)?;
        non_negative("player.invulnerable_duration", self.player.invulnerable_duration)?;
        if self.player.lives == 0 {
            return Err(SettingsError::Invalid {
                field: "player.lives",
                reason: "must be at least 1",
            });
        }
        positive("bullet.width", self.bullet.width)?;
        positive("bullet.height", self.bullet.height)?;
        positive("bullet.speed", self.bullet.speed)?;
        positive("enemy.width", self.enemy.width)?;
        positive("enemy.height", self.enemy.height)?;
        non_negative("enemy.speed", self.enemy.speed)?;
        non_negative("enemy.shot_rearm_min", self.enemy.shot_rearm_min)?;
        if self.enemy.shot_rearm_max < self.enemy.shot_rearm_min {
            return Err(SettingsError::Invalid {
                field: "enemy.shot_rearm_max",
                reason: "must not be below shot_rearm_min",
            });
        }
        positive("enemy.volley_interval", self.enemy.volley_interval)?;
        if self.formation.rows == 0 || self.formation.cols == 0 {
            return Err(SettingsError::Invalid {
                field: "formation",
                reason: "rows and cols must be at least 1",
            });
        }
        non_negative("formation.descent_step", self.formation.descent_step)?;
        non_negative("formation.descent_delay", self.formation.descent_delay)?;
        non_negative("formation.speed_step", self.formation.speed_step)?;
        positive("loading.rate", self.loading.rate)?;
        Ok(())
    }

    /// Y coordinate an enemy's lower edge must reach to count as an invasion
    pub fn invasion_line(&self) -> f32 {
        self.window.height - self.formation.invasion_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.invasion_line(), 500.0);
        assert_eq!(settings.formation.rows, 4);
        assert_eq!(settings.formation.cols, 8);
        assert_eq!(settings.player.lives, 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "player": { "lives": 5 } }"#).unwrap();
        assert_eq!(settings.player.lives, 5);
        assert_eq!(settings.player.width, PLAYER_WIDTH);
        assert_eq!(settings.window.width, WINDOW_WIDTH);
    }

    #[test]
    fn test_audio_section_parses() {
        let settings = Settings::from_json(r#"{ "audio": { "muted": true } }"#).unwrap();
        assert!(settings.audio.muted);
        assert_eq!(settings.audio.master_volume, 0.8);
        assert_eq!(settings.audio.sfx_volume, 1.0);
    }

    #[test]
    fn test_rejects_zero_lives() {
        let err = Settings::from_json(r#"{ "player": { "lives": 0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "player.lives", .. }));
    }

    #[test]
    fn test_rejects_inverted_rearm_window() {
        let json = r#"{ "enemy": { "shot_rearm_min": 3.0, "shot_rearm_max": 1.0 } }"#;
        assert!(Settings::from_json(json).is_err());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse settings"));
    }

    #[test]
    fn test_json_roundtrip_preserves_tables() {
        let mut settings = Settings::default();
        settings.scoring.tank = 99;
        let json = settings.to_json().unwrap();
        let parsed = Settings::from_json(&json).unwrap();
        assert_eq!(parsed.scoring.tank, 99);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default(Path::new("/nonexistent/settings.json"));
        assert_eq!(settings.window.height, WINDOW_HEIGHT);
    }
}
