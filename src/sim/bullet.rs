//! Projectiles fired by the player and the enemies

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity, Sprite};
use super::rect::Rect;
use crate::settings::Settings;

/// Who fired a bullet; decides travel direction, exit edge and targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    Enemy,
}

impl BulletOwner {
    /// +1 travels up the screen, -1 travels down
    pub fn direction(self) -> f32 {
        match self {
            BulletOwner::Player => 1.0,
            BulletOwner::Enemy => -1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Bullet {
    body: Body,
    pub owner: BulletOwner,
    /// Bottom edge of the visible area
    screen_height: f32,
}

impl Bullet {
    /// Spawn centered on `center`, travelling in the owner's direction
    pub fn new(center: Vec2, owner: BulletOwner, settings: &Settings) -> Self {
        let b = &settings.bullet;
        let mut body = Body::new(Rect::from_center(center, Vec2::new(b.width, b.height)));
        // Screen y grows downward, so "up" is negative
        body.vel = Vec2::new(0.0, -b.speed * owner.direction());
        Self {
            body,
            owner,
            screen_height: settings.window.height,
        }
    }

    /// Fully past the edge this bullet travels toward
    pub fn is_off_screen(&self) -> bool {
        match self.owner {
            BulletOwner::Player => self.body.rect.bottom() < 0.0,
            BulletOwner::Enemy => self.body.rect.top() > self.screen_height,
        }
    }
}

impl Entity for Bullet {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.body.advance(dt);
        if self.is_off_screen() {
            self.body.destroy();
        }
    }

    fn sprite(&self) -> Option<Sprite> {
        Some(Sprite::for_bullet(self.owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_player_bullet_moves_up() {
        let settings = Settings::default();
        let mut b = Bullet::new(Vec2::new(100.0, 300.0), BulletOwner::Player, &settings);
        let y0 = b.bounds().top();
        b.update(DT);
        assert!((y0 - b.bounds().top() - 7.0).abs() < 1e-3);
        assert!(b.is_alive());
    }

    #[test]
    fn test_enemy_bullet_moves_down() {
        let settings = Settings::default();
        let mut b = Bullet::new(Vec2::new(100.0, 300.0), BulletOwner::Enemy, &settings);
        let y0 = b.bounds().top();
        b.update(DT);
        assert!((b.bounds().top() - y0 - 7.0).abs() < 1e-3);
    }

    #[test]
    fn test_player_bullet_dies_above_top() {
        let settings = Settings::default();
        let mut b = Bullet::new(Vec2::new(100.0, 10.0), BulletOwner::Player, &settings);
        // Still partly visible after one step
        b.update(DT);
        assert!(b.is_alive());
        for _ in 0..3 {
            b.update(DT);
        }
        assert!(b.bounds().bottom() < 0.0);
        assert!(!b.is_alive());
    }

    #[test]
    fn test_enemy_bullet_dies_below_bottom() {
        let settings = Settings::default();
        let mut b = Bullet::new(Vec2::new(100.0, 595.0), BulletOwner::Enemy, &settings);
        b.update(DT);
        assert!(b.is_alive());
        b.update(DT);
        assert!(b.bounds().top() > 600.0);
        assert!(!b.is_alive());
    }

    #[test]
    fn test_sprite_follows_owner() {
        let settings = Settings::default();
        let p = Bullet::new(Vec2::ZERO, BulletOwner::Player, &settings);
        let e = Bullet::new(Vec2::ZERO, BulletOwner::Enemy, &settings);
        assert_eq!(p.sprite(), Some(Sprite::PlayerBullet));
        assert_eq!(e.sprite(), Some(Sprite::EnemyBullet));
    }
}
