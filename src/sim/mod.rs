//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - `dt`-scaled motion and timers
//! - Seeded RNG only
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod bullet;
pub mod collision;
pub mod enemy;
pub mod entity;
pub mod player;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod world;

pub use bullet::{Bullet, BulletOwner};
pub use collision::{CollisionManager, CollisionReport, Kill};
pub use enemy::{Enemy, EnemyKind};
pub use entity::{Body, Entity, EntityRef, Sprite};
pub use player::Player;
pub use rect::Rect;
pub use spawn::SpawnManager;
pub use state::{GameEvent, Session};
pub use tick::{TickInput, apply_input, tick};
pub use world::World;
