//! The player's ship

use glam::Vec2;

use super::entity::{Body, Entity, Sprite};
use super::rect::Rect;
use crate::settings::Settings;

/// Player ship: horizontal movement, cooldown-gated fire, lives and
/// post-hit invulnerability
#[derive(Debug, Clone)]
pub struct Player {
    body: Body,
    /// Horizontal speed (px/s)
    pub speed: f32,
    /// Seconds until the next shot is allowed
    pub shoot_cooldown: f32,
    /// Cooldown applied after each shot
    pub shoot_delay: f32,
    pub lives: u32,
    pub invulnerable: bool,
    /// Seconds of invulnerability remaining
    pub invulnerable_time: f32,
    pub invulnerable_duration: f32,
    /// Right edge of the play area
    play_width: f32,
}

impl Player {
    /// Spawn centered horizontally near the bottom of the window
    pub fn new(settings: &Settings) -> Self {
        let p = &settings.player;
        let x = (settings.window.width - p.width) / 2.0;
        let y = settings.window.height - p.bottom_offset;
        Self::at(Vec2::new(x, y), settings)
    }

    /// Spawn with the top-left corner at `pos`
    pub fn at(pos: Vec2, settings: &Settings) -> Self {
        let p = &settings.player;
        Self {
            body: Body::new(Rect::new(pos.x, pos.y, p.width, p.height)),
            speed: p.speed,
            shoot_cooldown: 0.0,
            shoot_delay: p.shoot_delay,
            lives: p.lives,
            invulnerable: false,
            invulnerable_time: 0.0,
            invulnerable_duration: p.invulnerable_duration,
            play_width: settings.window.width,
        }
    }

    /// Map held left/right intents to horizontal velocity.
    /// Right wins when both are held.
    pub fn handle_input(&mut self, left: bool, right: bool) {
        self.body.vel.x = 0.0;
        if left {
            self.body.vel.x = -self.speed;
        }
        if right {
            self.body.vel.x = self.speed;
        }
    }

    pub fn can_shoot(&self) -> bool {
        self.shoot_cooldown <= 0.0
    }

    /// Fire if off cooldown; returns the muzzle position (top-center)
    pub fn shoot(&mut self) -> Option<Vec2> {
        if !self.can_shoot() {
            return None;
        }
        self.shoot_cooldown = self.shoot_delay;
        Some(self.body.rect.top_center())
    }

    /// Lose one life unless invulnerable. Returns whether a life was lost.
    pub fn take_damage(&mut self) -> bool {
        if self.invulnerable || !self.body.is_alive() {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives > 0 {
            self.invulnerable = true;
            self.invulnerable_time = self.invulnerable_duration;
            log::info!("Player hit, {} lives left", self.lives);
        } else {
            log::info!("Player destroyed");
            self.body.destroy();
        }
        true
    }

    /// Blink phase while invulnerable: hidden on even 0.1 s slices
    pub fn is_visible(&self) -> bool {
        !self.invulnerable || (self.invulnerable_time * 10.0) as i32 % 2 != 0
    }
}

impl Entity for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.body.advance(dt);
        self.body.rect.clamp_x(0.0, self.play_width);

        if self.shoot_cooldown > 0.0 {
            self.shoot_cooldown -= dt;
        }

        if self.invulnerable {
            self.invulnerable_time -= dt;
            if self.invulnerable_time <= 0.0 {
                self.invulnerable = false;
                self.invulnerable_time = 0.0;
            }
        }
    }

    fn sprite(&self) -> Option<Sprite> {
        self.is_visible().then_some(Sprite::Player)
    }
}
