//! Invaders

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity, Sprite};
use super::rect::Rect;
use crate::settings::{ScoreTable, Settings};

/// Enemy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Basic,
    /// Double speed
    Fast,
    /// Half speed, takes three hits
    Tank,
}

impl EnemyKind {
    pub fn speed_multiplier(self) -> f32 {
        match self {
            EnemyKind::Basic => 1.0,
            EnemyKind::Fast => 2.0,
            EnemyKind::Tank => 0.5,
        }
    }

    pub fn starting_health(self) -> i32 {
        match self {
            EnemyKind::Basic | EnemyKind::Fast => 1,
            EnemyKind::Tank => 3,
        }
    }

    pub fn points(self, table: &ScoreTable) -> u64 {
        match self {
            EnemyKind::Basic => table.basic,
            EnemyKind::Fast => table.fast,
            EnemyKind::Tank => table.tank,
        }
    }

    /// Wave row to type: the front line is tanks, the rear lines are fast
    pub fn for_row(row: u32) -> Self {
        match row {
            0 => EnemyKind::Tank,
            1 | 2 => EnemyKind::Basic,
            _ => EnemyKind::Fast,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EnemyKind::Basic => "basic",
            EnemyKind::Fast => "fast",
            EnemyKind::Tank => "tank",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    body: Body,
    pub kind: EnemyKind,
    pub health: i32,
    pub points: u64,
    /// Horizontal speed (px/s) including type and formation multipliers
    pub speed: f32,
    /// +1 moving right, -1 moving left
    pub direction: f32,
    /// Seconds until this enemy may fire again
    pub shoot_timer: f32,
    rearm_min: f32,
    rearm_max: f32,
}

impl Enemy {
    /// Spawn with the top-left corner at `pos`; `formation_speed` scales the
    /// base speed for the current level
    pub fn new(kind: EnemyKind, pos: Vec2, formation_speed: f32, settings: &Settings) -> Self {
        let e = &settings.enemy;
        let speed = e.speed * kind.speed_multiplier() * formation_speed;
        let mut body = Body::new(Rect::new(pos.x, pos.y, e.width, e.height));
        body.vel.x = speed;
        Self {
            body,
            kind,
            health: kind.starting_health(),
            points: kind.points(&settings.scoring),
            speed,
            direction: 1.0,
            shoot_timer: 0.0,
            rearm_min: e.shot_rearm_min,
            rearm_max: e.shot_rearm_max,
        }
    }

    /// Drop by `step` pixels
    pub fn move_down(&mut self, step: f32) {
        self.body.rect.pos.y += step;
    }

    pub fn reverse_direction(&mut self) {
        self.direction = -self.direction;
        self.body.vel.x = self.speed * self.direction;
    }

    pub fn can_shoot(&self) -> bool {
        self.shoot_timer <= 0.0
    }

    /// Fire if the shot timer has expired, re-arming it to a random duration.
    /// Returns the muzzle position (bottom-center).
    pub fn shoot(&mut self, rng: &mut impl Rng) -> Option<Vec2> {
        if !self.can_shoot() || !self.body.is_alive() {
            return None;
        }
        self.shoot_timer = if self.rearm_max > self.rearm_min {
            rng.random_range(self.rearm_min..=self.rearm_max)
        } else {
            self.rearm_min
        };
        Some(self.body.rect.bottom_center())
    }

    /// Apply damage. Returns the points awarded, non-zero exactly once: on
    /// the hit that brings health to zero.
    pub fn take_damage(&mut self, amount: i32) -> u64 {
        if !self.body.is_alive() {
            return 0;
        }
        self.health -= amount;
        if self.health <= 0 {
            log::debug!("Enemy {} destroyed", self.kind.as_str());
            self.body.destroy();
            self.points
        } else {
            log::debug!("Enemy {} hit, {} health left", self.kind.as_str(), self.health);
            0
        }
    }
}

impl Entity for Enemy {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.body.vel.x = self.speed * self.direction;
        self.body.advance(dt);
        self.shoot_timer -= dt;
    }

    fn sprite(&self) -> Option<Sprite> {
        Some(Sprite::Enemy(self.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn enemy(kind: EnemyKind) -> Enemy {
        Enemy::new(kind, Vec2::new(100.0, 50.0), 1.0, &Settings::default())
    }

    #[test]
    fn test_type_table() {
        let basic = enemy(EnemyKind::Basic);
        let fast = enemy(EnemyKind::Fast);
        let tank = enemy(EnemyKind::Tank);
        assert_eq!((basic.health, basic.points), (1, 10));
        assert_eq!((fast.health, fast.points), (1, 20));
        assert_eq!((tank.health, tank.points), (3, 30));
        assert_eq!(fast.speed, basic.speed * 2.0);
        assert_eq!(tank.speed, basic.speed * 0.5);
    }

    #[test]
    fn test_row_mapping() {
        assert_eq!(EnemyKind::for_row(0), EnemyKind::Tank);
        assert_eq!(EnemyKind::for_row(1), EnemyKind::Basic);
        assert_eq!(EnemyKind::for_row(2), EnemyKind::Basic);
        assert_eq!(EnemyKind::for_row(3), EnemyKind::Fast);
        assert_eq!(EnemyKind::for_row(7), EnemyKind::Fast);
    }

    #[test]
    fn test_update_moves_and_counts_down() {
        let mut e = enemy(EnemyKind::Basic);
        e.shoot_timer = 1.0;
        e.update(0.5);
        assert_eq!(e.bounds().left(), 130.0);
        assert_eq!(e.shoot_timer, 0.5);

        e.reverse_direction();
        e.update(0.5);
        assert_eq!(e.bounds().left(), 100.0);
    }

    #[test]
    fn test_tank_needs_three_hits() {
        let mut tank = enemy(EnemyKind::Tank);
        assert_eq!(tank.take_damage(1), 0);
        assert!(tank.is_alive());
        assert_eq!(tank.take_damage(1), 0);
        assert!(tank.is_alive());
        assert_eq!(tank.take_damage(1), 30);
        assert!(!tank.is_alive());
        // A dead enemy never awards again
        assert_eq!(tank.take_damage(1), 0);
    }

    #[test]
    fn test_shoot_rearms_within_window() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut e = enemy(EnemyKind::Basic);
        let muzzle = e.shoot(&mut rng).expect("timer starts expired");
        assert_eq!(muzzle, e.bounds().bottom_center());
        assert!((1.0..=3.0).contains(&e.shoot_timer));
        assert!(e.shoot(&mut rng).is_none());

        e.update(3.0);
        assert!(e.shoot(&mut rng).is_some());
    }

    #[test]
    fn test_move_down() {
        let mut e = enemy(EnemyKind::Fast);
        e.move_down(20.0);
        assert_eq!(e.bounds().top(), 70.0);
    }
}
