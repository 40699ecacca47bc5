//! Collision detection and resolution
//!
//! Runs once per unpaused frame after every entity has been updated. The
//! pass order is fixed: player bullets vs enemies, enemy bullets vs player,
//! enemies vs player, then the invasion check. Resolution only touches
//! entities; turning the report into lives and game over is the session's job.

use glam::Vec2;

use super::enemy::EnemyKind;
use super::entity::Entity;
use super::world::World;
use crate::settings::Settings;

/// An enemy killed by a player bullet this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kill {
    pub kind: EnemyKind,
    pub points: u64,
    pub at: Vec2,
}

/// Aggregate outcome of one resolution pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Points gained this frame
    pub points_gained: u64,
    /// Enemies damaged but left alive
    pub enemies_hit: u32,
    pub kills: Vec<Kill>,
    /// An enemy bullet overlapped the player
    pub player_hit: bool,
    /// An enemy touched the player
    pub enemy_collision: bool,
    /// The player actually lost a life (not absorbed by invulnerability)
    pub life_lost: bool,
    /// An enemy reached the invasion line
    pub invasion: bool,
}

#[derive(Debug, Clone)]
pub struct CollisionManager {
    invasion_line: f32,
}

impl CollisionManager {
    pub fn new(settings: &Settings) -> Self {
        Self {
            invasion_line: settings.invasion_line(),
        }
    }

    /// Run all passes in order
    pub fn resolve(&self, world: &mut World) -> CollisionReport {
        let mut report = CollisionReport::default();
        self.bullets_vs_enemies(world, &mut report);
        report.player_hit = self.bullets_vs_player(world, &mut report);
        report.enemy_collision = self.enemies_vs_player(world, &mut report);
        report.invasion = self.invasion(world);
        report
    }

    /// Each overlapping pair consumes the bullet and deals one damage. Pairs
    /// are taken from a snapshot, so one bullet can damage several enemies.
    /// Killed enemies and spent bullets are removed before returning.
    pub fn bullets_vs_enemies(&self, world: &mut World, report: &mut CollisionReport) {
        let enemies = &world.enemies;
        let pairs: Vec<(usize, usize)> = world
            .player_bullets
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_alive())
            .flat_map(|(bi, bullet)| {
                let rect = bullet.bounds();
                enemies
                    .iter()
                    .enumerate()
                    .filter(move |(_, e)| e.is_alive() && e.bounds().overlaps(&rect))
                    .map(move |(ei, _)| (bi, ei))
            })
            .collect();

        if pairs.is_empty() {
            return;
        }

        for (bi, ei) in pairs {
            world.player_bullets[bi].destroy();
            let enemy = &mut world.enemies[ei];
            if !enemy.is_alive() {
                continue;
            }
            let points = enemy.take_damage(1);
            if points > 0 {
                report.points_gained += points;
                report.kills.push(Kill {
                    kind: enemy.kind,
                    points,
                    at: enemy.bounds().center(),
                });
            } else {
                report.enemies_hit += 1;
            }
        }

        world.enemies.retain(|e| e.is_alive());
        world.player_bullets.retain(|b| b.is_alive());

        if report.points_gained > 0 {
            log::debug!(
                "+{} points ({} enemies destroyed)",
                report.points_gained,
                report.kills.len()
            );
        }
    }

    /// Overlapping enemy bullets are all consumed; damage is applied once
    pub fn bullets_vs_player(&self, world: &mut World, report: &mut CollisionReport) -> bool {
        let player_rect = world.player.bounds();
        let mut hit = false;
        for bullet in world.enemy_bullets.iter_mut() {
            if bullet.is_alive() && bullet.bounds().overlaps(&player_rect) {
                bullet.destroy();
                hit = true;
            }
        }
        if hit {
            world.enemy_bullets.retain(|b| b.is_alive());
            report.life_lost |= world.player.take_damage();
        }
        hit
    }

    /// Direct contact damages the player once; enemies survive the contact
    pub fn enemies_vs_player(&self, world: &mut World, report: &mut CollisionReport) -> bool {
        let player_rect = world.player.bounds();
        let touched = world
            .enemies
            .iter()
            .any(|e| e.is_alive() && e.bounds().overlaps(&player_rect));
        if touched {
            log::info!("Enemy collided with the player");
            report.life_lost |= world.player.take_damage();
        }
        touched
    }

    pub fn invasion(&self, world: &World) -> bool {
        world
            .enemies
            .iter()
            .any(|e| e.is_alive() && e.bounds().bottom() >= self.invasion_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::bullet::{Bullet, BulletOwner};
    use crate::sim::enemy::Enemy;

    fn setup() -> (Settings, World, CollisionManager) {
        let settings = Settings::default();
        let world = World::new(&settings);
        let collisions = CollisionManager::new(&settings);
        (settings, world, collisions)
    }

    fn enemy_at(kind: EnemyKind, x: f32, y: f32, settings: &Settings) -> Enemy {
        Enemy::new(kind, Vec2::new(x, y), 1.0, settings)
    }

    #[test]
    fn test_bullet_kills_basic_enemy() {
        let (settings, mut world, collisions) = setup();
        world.enemies.push(enemy_at(EnemyKind::Basic, 100.0, 100.0, &settings));
        world.add_bullet(Bullet::new(Vec2::new(120.0, 120.0), BulletOwner::Player, &settings));

        let report = collisions.resolve(&mut world);
        assert_eq!(report.points_gained, 10);
        assert_eq!(report.kills.len(), 1);
        assert!(world.enemies.is_empty());
        assert!(world.player_bullets.is_empty());
    }

    #[test]
    fn test_miss_leaves_everything() {
        let (settings, mut world, collisions) = setup();
        world.enemies.push(enemy_at(EnemyKind::Basic, 100.0, 100.0, &settings));
        world.add_bullet(Bullet::new(Vec2::new(300.0, 120.0), BulletOwner::Player, &settings));

        let report = collisions.resolve(&mut world);
        assert_eq!(report, CollisionReport::default());
        assert_eq!(world.enemies.len(), 1);
        assert_eq!(world.player_bullets.len(), 1);
    }

    #[test]
    fn test_one_bullet_damages_two_enemies() {
        let (settings, mut world, collisions) = setup();
        // Two enemies whose edges meet under the bullet
        world.enemies.push(enemy_at(EnemyKind::Basic, 60.0, 100.0, &settings));
        world.enemies.push(enemy_at(EnemyKind::Fast, 100.0, 100.0, &settings));
        world.add_bullet(Bullet::new(Vec2::new(100.0, 110.0), BulletOwner::Player, &settings));

        let report = collisions.resolve(&mut world);
        assert_eq!(report.kills.len(), 2);
        assert_eq!(report.points_gained, 30);
        assert!(world.enemies.is_empty());
    }

    #[test]
    fn test_tank_takes_three_frames() {
        let (settings, mut world, collisions) = setup();
        world.enemies.push(enemy_at(EnemyKind::Tank, 100.0, 100.0, &settings));

        let mut total = 0;
        for frame in 0..3 {
            world.add_bullet(Bullet::new(Vec2::new(120.0, 115.0), BulletOwner::Player, &settings));
            let report = collisions.resolve(&mut world);
            total += report.points_gained;
            if frame < 2 {
                assert_eq!(report.points_gained, 0);
                assert_eq!(report.enemies_hit, 1);
                assert_eq!(world.enemies.len(), 1);
            } else {
                assert_eq!(report.points_gained, 30);
            }
            assert!(world.player_bullets.is_empty());
        }
        assert_eq!(total, 30);
        assert!(world.enemies.is_empty());
    }

    #[test]
    fn test_two_bullets_on_dying_enemy_award_once() {
        let (settings, mut world, collisions) = setup();
        world.enemies.push(enemy_at(EnemyKind::Basic, 100.0, 100.0, &settings));
        world.add_bullet(Bullet::new(Vec2::new(110.0, 115.0), BulletOwner::Player, &settings));
        world.add_bullet(Bullet::new(Vec2::new(125.0, 115.0), BulletOwner::Player, &settings));

        let report = collisions.resolve(&mut world);
        assert_eq!(report.points_gained, 10);
        assert_eq!(report.kills.len(), 1);
        // Both bullets are spent
        assert!(world.player_bullets.is_empty());
    }

    #[test]
    fn test_simultaneous_enemy_bullets_damage_once() {
        let (settings, mut world, collisions) = setup();
        let center = world.player.bounds().center();
        world.add_bullet(Bullet::new(center, BulletOwner::Enemy, &settings));
        world.add_bullet(Bullet::new(center + Vec2::new(10.0, 0.0), BulletOwner::Enemy, &settings));
        world.add_bullet(Bullet::new(Vec2::new(10.0, 10.0), BulletOwner::Enemy, &settings));

        let report = collisions.resolve(&mut world);
        assert!(report.player_hit);
        assert!(report.life_lost);
        assert_eq!(world.player.lives, 2);
        assert_eq!(world.enemy_bullets.len(), 1);
    }

    #[test]
    fn test_invulnerable_player_still_consumes_bullets() {
        let (settings, mut world, collisions) = setup();
        world.player.take_damage();
        let center = world.player.bounds().center();
        world.add_bullet(Bullet::new(center, BulletOwner::Enemy, &settings));

        let report = collisions.resolve(&mut world);
        assert!(report.player_hit);
        assert!(!report.life_lost);
        assert_eq!(world.player.lives, 2);
        assert!(world.enemy_bullets.is_empty());
    }

    #[test]
    fn test_enemy_contact_damages_player_not_enemy() {
        let (settings, mut world, collisions) = setup();
        let p = world.player.bounds();
        world.enemies.push(enemy_at(EnemyKind::Basic, p.left(), p.top() - 10.0, &settings));
        world.enemies.push(enemy_at(EnemyKind::Basic, p.left() + 20.0, p.top() - 10.0, &settings));

        let report = collisions.resolve(&mut world);
        assert!(report.enemy_collision);
        assert_eq!(world.player.lives, 2);
        assert_eq!(world.enemies.len(), 2);
    }

    #[test]
    fn test_bullet_and_contact_same_frame_single_damage() {
        let (settings, mut world, collisions) = setup();
        let p = world.player.bounds();
        world.add_bullet(Bullet::new(p.center(), BulletOwner::Enemy, &settings));
        world.enemies.push(enemy_at(EnemyKind::Basic, p.left(), p.top() - 10.0, &settings));

        let report = collisions.resolve(&mut world);
        assert!(report.player_hit);
        assert!(report.enemy_collision);
        // Second damage call is absorbed by the fresh invulnerability window
        assert_eq!(world.player.lives, 2);
    }

    #[test]
    fn test_invasion_flag() {
        let (settings, mut world, collisions) = setup();
        world.enemies.push(enemy_at(EnemyKind::Basic, 10.0, 469.0, &settings));
        assert!(!collisions.resolve(&mut world).invasion);
        world.enemies[0].move_down(1.0);
        assert!(collisions.resolve(&mut world).invasion);
    }
}
