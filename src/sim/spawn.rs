//! Wave layout and formation movement
//!
//! The live enemy set moves as one formation: shared direction, synchronized
//! descent when any member touches a side edge, gated by a cooldown so one
//! edge contact produces exactly one descent.

use glam::Vec2;

use super::enemy::{Enemy, EnemyKind};
use super::entity::Entity;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct SpawnManager {
    pub current_level: u32,
    /// Speed multiplier applied to enemies spawned by the next wave
    pub formation_speed: f32,
    /// Seconds until another descent is allowed
    pub descent_cooldown: f32,
    base_rows: u32,
    base_cols: u32,
    spacing: Vec2,
    start_y: f32,
    descent_step: f32,
    descent_delay: f32,
    speed_step: f32,
    screen_width: f32,
    invasion_line: f32,
}

impl SpawnManager {
    pub fn new(settings: &Settings) -> Self {
        let f = &settings.formation;
        Self {
            current_level: 1,
            formation_speed: 1.0,
            descent_cooldown: 0.0,
            base_rows: f.rows,
            base_cols: f.cols,
            spacing: Vec2::new(f.spacing_x, f.spacing_y),
            start_y: f.start_y,
            descent_step: f.descent_step,
            descent_delay: f.descent_delay,
            speed_step: f.speed_step,
            screen_width: settings.window.width,
            invasion_line: settings.invasion_line(),
        }
    }

    /// Grid dimensions for a level: one extra column every two levels
    pub fn grid_for_level(&self, level: u32) -> (u32, u32) {
        (self.base_rows, self.base_cols + level / 2)
    }

    /// Build the enemy grid for `level`, centered horizontally
    pub fn spawn_wave(&self, level: u32, settings: &Settings) -> Vec<Enemy> {
        let (rows, cols) = self.grid_for_level(level);
        let formation_width = cols.saturating_sub(1) as f32 * self.spacing.x;
        let start_x = ((self.screen_width - formation_width) / 2.0).floor();

        let mut enemies = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows {
            let kind = EnemyKind::for_row(row);
            for col in 0..cols {
                let pos = Vec2::new(
                    start_x + col as f32 * self.spacing.x,
                    self.start_y + row as f32 * self.spacing.y,
                );
                enemies.push(Enemy::new(kind, pos, self.formation_speed, settings));
            }
        }

        log::info!(
            "Level {}: spawned {} enemies in a {}x{} formation",
            level,
            enemies.len(),
            rows,
            cols
        );
        enemies
    }

    /// Advance the descent cooldown and drop/reverse the formation when it
    /// touches a side edge. Returns whether any enemy crossed the invasion line.
    pub fn update_formation(&mut self, enemies: &mut [Enemy], dt: f32) -> bool {
        if self.all_enemies_dead(enemies) {
            return false;
        }

        if self.descent_cooldown > 0.0 {
            self.descent_cooldown -= dt;
        }

        let mut hit_edge = false;
        let mut hit_bottom = false;
        for enemy in enemies.iter().filter(|e| e.is_alive()) {
            let bounds = enemy.bounds();
            if bounds.left() <= 0.0 || bounds.right() >= self.screen_width {
                hit_edge = true;
            }
            if bounds.bottom() >= self.invasion_line {
                hit_bottom = true;
            }
        }

        if hit_edge && self.descent_cooldown <= 0.0 {
            for enemy in enemies.iter_mut().filter(|e| e.is_alive()) {
                enemy.move_down(self.descent_step);
                enemy.reverse_direction();
            }
            self.descent_cooldown = self.descent_delay;
            log::debug!("Formation descended and reversed");
        }

        hit_bottom
    }

    pub fn all_enemies_dead(&self, enemies: &[Enemy]) -> bool {
        !enemies.iter().any(|e| e.is_alive())
    }

    /// Advance to the next level; each call makes later waves faster
    pub fn next_level(&mut self) -> u32 {
        self.current_level += 1;
        self.formation_speed += self.speed_step;
        log::info!(
            "Level {} unlocked (formation speed x{:.1})",
            self.current_level,
            self.formation_speed
        );
        self.current_level
    }

    pub fn reset(&mut self) {
        self.current_level = 1;
        self.formation_speed = 1.0;
        self.descent_cooldown = 0.0;
    }
}
