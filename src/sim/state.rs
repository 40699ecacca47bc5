//! Play session state
//!
//! Everything a running game owns: entity collections, formation driver,
//! score, level and the paused/game-over/victory flags. A session is seeded,
//! so two sessions built from the same seed and fed the same inputs evolve
//! identically.

use std::rc::Rc;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::bullet::{Bullet, BulletOwner};
use super::collision::CollisionManager;
use super::enemy::EnemyKind;
use super::entity::Entity;
use super::spawn::SpawnManager;
use super::world::World;
use crate::settings::Settings;

/// Notable things that happened during a frame, drained by the owner
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    PlayerShot,
    EnemyShot,
    /// Enemy damaged but still alive
    EnemyHit,
    EnemyDestroyed {
        kind: EnemyKind,
        points: u64,
        at: Vec2,
    },
    PlayerHit {
        lives_left: u32,
    },
    WaveCleared {
        level: u32,
    },
    LevelUp {
        level: u32,
    },
    Invasion,
    GameOver {
        score: u64,
        level: u32,
        /// Simulated seconds played
        play_time: f32,
    },
    Restarted,
}

#[derive(Debug, Clone)]
pub struct Session {
    settings: Rc<Settings>,
    pub world: World,
    pub spawner: SpawnManager,
    pub collisions: CollisionManager,
    /// Only ever grows, except on restart
    pub score: u64,
    pub level: u32,
    pub paused: bool,
    /// Terminal until restart
    pub game_over: bool,
    /// Set on the frame a wave is cleared, cleared on the next update
    pub victory: bool,
    /// Seconds until the next enemy volley
    pub enemy_volley_timer: f32,
    /// Simulated seconds while unpaused
    pub elapsed: f32,
    seed: u64,
    pub(crate) rng: Pcg32,
    events: Vec<GameEvent>,
}

impl Session {
    /// Fresh session on level 1 with the first wave already spawned
    pub fn new(settings: Rc<Settings>, seed: u64) -> Self {
        let world = World::new(&settings);
        let spawner = SpawnManager::new(&settings);
        let collisions = CollisionManager::new(&settings);
        let mut session = Self {
            world,
            spawner,
            collisions,
            score: 0,
            level: 1,
            paused: false,
            game_over: false,
            victory: false,
            enemy_volley_timer: settings.enemy.volley_interval,
            elapsed: 0.0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            settings,
        };
        session.world.enemies = session.spawner.spawn_wave(1, &session.settings);
        log::info!("New session (seed {})", seed);
        session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Back to level 1: score 0, full lives, original wave layout.
    /// The RNG is re-seeded so a restarted run replays like a new one.
    pub fn restart(&mut self) {
        log::info!("Restarting session (final score was {})", self.score);
        self.world = World::new(&self.settings);
        self.spawner.reset();
        self.score = 0;
        self.level = 1;
        self.paused = false;
        self.game_over = false;
        self.victory = false;
        self.enemy_volley_timer = self.settings.enemy.volley_interval;
        self.elapsed = 0.0;
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.world.enemies = self.spawner.spawn_wave(1, &self.settings);
        self.events.push(GameEvent::Restarted);
    }

    /// Fire a player bullet if the cooldown allows. Returns whether one was fired.
    pub fn player_shoot(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let Some(muzzle) = self.world.player.shoot() else {
            return false;
        };
        self.world
            .add_bullet(Bullet::new(muzzle, BulletOwner::Player, &self.settings));
        self.events.push(GameEvent::PlayerShot);
        true
    }

    /// Pick one random live enemy and let it try to fire. The enemy's own
    /// shot timer may still decline.
    pub fn enemy_shoot(&mut self) -> bool {
        let live: Vec<usize> = self
            .world
            .enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_alive())
            .map(|(i, _)| i)
            .collect();
        if live.is_empty() {
            return false;
        }
        let pick = live[self.rng.random_range(0..live.len())];
        let Some(muzzle) = self.world.enemies[pick].shoot(&mut self.rng) else {
            return false;
        };
        self.world
            .add_bullet(Bullet::new(muzzle, BulletOwner::Enemy, &self.settings));
        self.events.push(GameEvent::EnemyShot);
        true
    }

    pub fn toggle_pause(&mut self) {
        if self.game_over {
            return;
        }
        self.paused = !self.paused;
        log::info!("{}", if self.paused { "Game paused" } else { "Game resumed" });
    }

    pub fn lives(&self) -> u32 {
        self.world.player.lives
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every event recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
