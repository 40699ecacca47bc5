//! Shared entity capabilities
//!
//! Every simulated object owns a `Body` (box, velocity, liveness) and
//! implements `Entity`. Liveness only ever goes from alive to dead; owning
//! collections drop dead entities in the purge passes run by `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bullet::{Bullet, BulletOwner};
use super::enemy::{Enemy, EnemyKind};
use super::player::Player;
use super::rect::Rect;

/// Positioned, sized, velocity-bearing, destructible state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub rect: Rect,
    /// Velocity in px/s
    pub vel: Vec2,
    alive: bool,
}

impl Body {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            vel: Vec2::ZERO,
            alive: true,
        }
    }

    /// Integrate velocity over `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.rect.pos += self.vel * dt;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark dead; idempotent
    pub fn destroy(&mut self) {
        self.alive = false;
    }
}

/// What the rendering collaborator should draw for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Player,
    Enemy(EnemyKind),
    PlayerBullet,
    EnemyBullet,
}

impl Sprite {
    pub fn for_bullet(owner: BulletOwner) -> Self {
        match owner {
            BulletOwner::Player => Sprite::PlayerBullet,
            BulletOwner::Enemy => Sprite::EnemyBullet,
        }
    }
}

/// Common capability interface of all simulated objects
pub trait Entity {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// One simulation step; depends only on `dt` and the entity's own state
    fn update(&mut self, dt: f32);

    /// Sprite to draw this frame, `None` when the entity is hidden
    fn sprite(&self) -> Option<Sprite>;

    fn bounds(&self) -> Rect {
        self.body().rect
    }

    fn is_alive(&self) -> bool {
        self.body().is_alive()
    }

    fn destroy(&mut self) {
        self.body_mut().destroy();
    }
}

/// Borrowed view over any entity variant, used by draw and inspection passes
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Player(&'a Player),
    Enemy(&'a Enemy),
    Bullet(&'a Bullet),
}

impl EntityRef<'_> {
    fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityRef::Player(p) => *p,
            EntityRef::Enemy(e) => *e,
            EntityRef::Bullet(b) => *b,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.as_entity().bounds()
    }

    pub fn is_alive(&self) -> bool {
        self.as_entity().is_alive()
    }

    pub fn sprite(&self) -> Option<Sprite> {
        self.as_entity().sprite()
    }
}
