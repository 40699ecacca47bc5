//! Playing screen: wraps a session and draws the HUD

use std::rc::Rc;

use glam::Vec2;

use super::{Screen, ScreenKind, Transition};
use crate::input::{InputFrame, Key};
use crate::renderer::{self, Align, Canvas, colors, font};
use crate::settings::Settings;
use crate::sim::{GameEvent, Rect, Session, TickInput, apply_input, tick};

const HUD_MARGIN: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct GameScreen {
    settings: Rc<Settings>,
    seed: u64,
    session: Session,
    /// Set once the session has been played and exited
    stale: bool,
}

impl GameScreen {
    pub fn new(settings: Rc<Settings>, seed: u64) -> Self {
        let session = Session::new(settings.clone(), seed);
        Self {
            settings,
            seed,
            session,
            stale: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Map this frame's keys to simulation intents
    fn tick_input(input: &InputFrame) -> TickInput {
        TickInput {
            left: input.left_held(),
            right: input.right_held(),
            fire: input.was_pressed(Key::Space),
            pause: input.was_pressed(Key::P),
            restart: input.was_pressed(Key::R),
        }
    }

    fn draw_hud(&self, canvas: &mut dyn Canvas) {
        let width = self.settings.window.width;
        let score = format!("SCORE: {}", self.session.score);
        canvas.text(&score, Vec2::splat(HUD_MARGIN), Align::TopLeft, font::HUD, colors::WHITE);

        let lives = format!("LIVES: {}", self.session.lives());
        canvas.text(
            &lives,
            Vec2::new(width - HUD_MARGIN, HUD_MARGIN),
            Align::TopRight,
            font::HUD,
            colors::GREEN,
        );

        let level = format!("LEVEL {}", self.session.level);
        canvas.text(&level, Vec2::new(width / 2.0, HUD_MARGIN), Align::MidTop, font::HUD, colors::CYAN);
    }

    fn draw_overlay(&self, canvas: &mut dyn Canvas) {
        let w = &self.settings.window;
        canvas.fill_rect(Rect::new(0.0, 0.0, w.width, w.height), colors::OVERLAY);
    }

    fn draw_paused(&self, canvas: &mut dyn Canvas) {
        let center = self.center();
        self.draw_overlay(canvas);
        canvas.text("PAUSED", center, Align::Center, font::TITLE, colors::YELLOW);
        canvas.text(
            "Press P to resume",
            center + Vec2::new(0.0, 60.0),
            Align::Center,
            font::HUD,
            colors::WHITE,
        );
    }

    fn draw_game_over(&self, canvas: &mut dyn Canvas) {
        let center = self.center();
        self.draw_overlay(canvas);
        canvas.text("GAME OVER", center - Vec2::new(0.0, 50.0), Align::Center, font::TITLE, colors::RED);
        let score = format!("Final Score: {}", self.session.score);
        canvas.text(&score, center + Vec2::new(0.0, 20.0), Align::Center, font::HUD, colors::WHITE);
        canvas.text(
            "Press R to restart",
            center + Vec2::new(0.0, 60.0),
            Align::Center,
            font::HUD,
            colors::YELLOW,
        );
        canvas.text(
            "Press ESC for menu",
            center + Vec2::new(0.0, 90.0),
            Align::Center,
            font::HUD,
            colors::GRAY,
        );
    }

    fn center(&self) -> Vec2 {
        Vec2::new(self.settings.window.width, self.settings.window.height) / 2.0
    }
}

impl Screen for GameScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Game
    }

    /// Every entry starts a fresh run; the session built by `new` is used as is
    fn enter(&mut self) {
        if self.stale {
            self.session = Session::new(self.settings.clone(), self.seed);
            self.stale = false;
        }
        log::info!("Entering game (seed {})", self.seed);
    }

    fn exit(&mut self) {
        log::info!(
            "Leaving game at level {} with score {}",
            self.session.level,
            self.session.score
        );
        self.session.world.clear();
        self.stale = true;
    }

    fn handle_events(&mut self, input: &InputFrame) -> Option<Transition> {
        if input.was_pressed(Key::Escape) {
            // Nothing was recorded while paused, so the menu we came from is still current
            if self.session.paused {
                return Some(Transition::Back);
            }
            return Some(Transition::To(ScreenKind::Menu));
        }
        apply_input(&mut self.session, &Self::tick_input(input));
        None
    }

    fn update(&mut self, dt: f32) -> Option<Transition> {
        tick(&mut self.session, dt);
        None
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.clear(colors::BACKGROUND);
        renderer::draw_world(canvas, &self.session.world);
        self.draw_hud(canvas);

        if self.session.paused {
            self.draw_paused(canvas);
        }
        if self.session.game_over {
            self.draw_game_over(canvas);
        }
    }

    fn drain_events(&mut self) -> Vec<GameEvent> {
        self.session.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DisplayList;
    use crate::sim::Entity;

    const DT: f32 = 1.0 / 60.0;

    fn screen() -> GameScreen {
        let mut s = GameScreen::new(Rc::new(Settings::default()), 11);
        s.enter();
        s
    }

    fn press(key: Key) -> InputFrame {
        let mut input = InputFrame::new();
        input.press(key);
        input
    }

    #[test]
    fn test_space_fires() {
        let mut s = screen();
        s.handle_events(&press(Key::Space));
        assert_eq!(s.session().world.player_bullets.len(), 1);
        assert!(s.drain_events().contains(&GameEvent::PlayerShot));
    }

    #[test]
    fn test_held_keys_move_player() {
        let mut s = screen();
        let x0 = s.session().world.player.bounds().left();
        let mut input = InputFrame::new();
        input.hold(Key::A);
        s.handle_events(&input);
        s.update(DT);
        assert!(s.session().world.player.bounds().left() < x0);
    }

    #[test]
    fn test_pause_toggles_and_freezes() {
        let mut s = screen();
        s.handle_events(&press(Key::P));
        assert!(s.session().paused);
        s.update(DT);
        assert_eq!(s.session().elapsed, 0.0);

        let mut list = DisplayList::new();
        s.draw(&mut list);
        assert!(list.contains_text("PAUSED"));

        s.handle_events(&press(Key::P));
        assert!(!s.session().paused);
    }

    #[test]
    fn test_escape_requests_menu() {
        let mut s = screen();
        assert_eq!(s.handle_events(&press(Key::Escape)), Some(Transition::To(ScreenKind::Menu)));
    }

    #[test]
    fn test_escape_while_paused_goes_back() {
        let mut s = screen();
        s.handle_events(&press(Key::P));
        assert_eq!(s.handle_events(&press(Key::Escape)), Some(Transition::Back));
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut s = screen();
        s.session_mut().score = 50;
        s.handle_events(&press(Key::R));
        assert_eq!(s.session().score, 50);

        s.session_mut().game_over = true;
        let mut list = DisplayList::new();
        s.draw(&mut list);
        assert!(list.contains_text("GAME OVER"));
        assert!(list.contains_text("Final Score: 50"));

        s.handle_events(&press(Key::R));
        assert!(!s.session().game_over);
        assert_eq!(s.session().score, 0);
        assert_eq!(s.session().world.enemies.len(), 32);
    }

    #[test]
    fn test_hud_shows_score_lives_level() {
        let s = screen();
        let mut list = DisplayList::new();
        s.draw(&mut list);
        assert!(list.contains_text("SCORE: 0"));
        assert!(list.contains_text("LIVES: 3"));
        assert!(list.contains_text("LEVEL 1"));
        // Background, 32 enemies and the player before any text
        assert_eq!(list.texts().count(), 3);
        assert_eq!(list.len(), 1 + 32 + 1 + 3);
    }

    #[test]
    fn test_first_enter_keeps_built_session() {
        let mut s = GameScreen::new(Rc::new(Settings::default()), 11);
        s.session_mut().score = 40;
        s.enter();
        assert_eq!(s.session().score, 40);
        assert_eq!(s.session().world.enemies.len(), 32);
    }

    #[test]
    fn test_enter_starts_fresh_run() {
        let mut s = screen();
        s.session_mut().score = 70;
        s.exit();
        assert!(s.session().world.enemies.is_empty());
        s.enter();
        assert_eq!(s.session().score, 0);
        assert_eq!(s.session().world.enemies.len(), 32);
    }
}
