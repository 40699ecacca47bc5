//! Entity collections owned by a play session

use super::bullet::{Bullet, BulletOwner};
use super::enemy::Enemy;
use super::entity::{Entity, EntityRef};
use super::player::Player;
use crate::settings::Settings;

/// Every live entity of a session, grouped by role
#[derive(Debug, Clone)]
pub struct World {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub player_bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<Bullet>,
}

impl World {
    /// A fresh player and no enemies or bullets
    pub fn new(settings: &Settings) -> Self {
        Self {
            player: Player::new(settings),
            enemies: Vec::new(),
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
        }
    }

    /// Route a bullet into the collection matching its owner
    pub fn add_bullet(&mut self, bullet: Bullet) {
        match bullet.owner {
            BulletOwner::Player => self.player_bullets.push(bullet),
            BulletOwner::Enemy => self.enemy_bullets.push(bullet),
        }
    }

    /// Step every entity. Entities only flag themselves dead here; removal
    /// waits for `purge_dead` so no collection changes mid-pass.
    pub fn update_entities(&mut self, dt: f32) {
        self.player.update(dt);
        for enemy in &mut self.enemies {
            enemy.update(dt);
        }
        for bullet in self.player_bullets.iter_mut().chain(self.enemy_bullets.iter_mut()) {
            bullet.update(dt);
        }
    }

    /// Drop dead entities from every collection. Returns how many were removed.
    pub fn purge_dead(&mut self) -> usize {
        let before = self.entity_count();
        self.enemies.retain(|e| e.is_alive());
        self.player_bullets.retain(|b| b.is_alive());
        self.enemy_bullets.retain(|b| b.is_alive());
        before - self.entity_count()
    }

    /// Enemies, bullets and player; the player is counted even when dead
    pub fn entity_count(&self) -> usize {
        1 + self.enemies.len() + self.player_bullets.len() + self.enemy_bullets.len()
    }

    /// Draw order: enemies, bullets, then the player on top
    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> {
        self.enemies
            .iter()
            .map(EntityRef::Enemy)
            .chain(self.player_bullets.iter().map(EntityRef::Bullet))
            .chain(self.enemy_bullets.iter().map(EntityRef::Bullet))
            .chain(std::iter::once(EntityRef::Player(&self.player)))
    }

    pub fn clear(&mut self) {
        self.enemies.clear();
        self.player_bullets.clear();
        self.enemy_bullets.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_add_bullet_routes_by_owner() {
        let settings = Settings::default();
        let mut world = World::new(&settings);
        world.add_bullet(Bullet::new(Vec2::new(10.0, 10.0), BulletOwner::Player, &settings));
        world.add_bullet(Bullet::new(Vec2::new(10.0, 10.0), BulletOwner::Enemy, &settings));
        world.add_bullet(Bullet::new(Vec2::new(20.0, 10.0), BulletOwner::Enemy, &settings));
        assert_eq!(world.player_bullets.len(), 1);
        assert_eq!(world.enemy_bullets.len(), 2);
        assert_eq!(world.entity_count(), 4);
    }

    #[test]
    fn test_off_screen_bullet_purged_after_update() {
        let settings = Settings::default();
        let mut world = World::new(&settings);
        world.add_bullet(Bullet::new(Vec2::new(10.0, -5.0), BulletOwner::Player, &settings));
        world.add_bullet(Bullet::new(Vec2::new(10.0, 300.0), BulletOwner::Player, &settings));

        world.update_entities(1.0 / 60.0);
        // Flagged but still present until the purge pass
        assert_eq!(world.player_bullets.len(), 2);
        assert_eq!(world.purge_dead(), 1);
        assert_eq!(world.player_bullets.len(), 1);
        assert!(world.entities().all(|e| e.is_alive()));
    }
}
