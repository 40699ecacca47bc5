//! Loading screen: a progress bar that hands over to the menu

use glam::Vec2;

use super::{Screen, ScreenKind, Transition};
use crate::input::{InputFrame, Key};
use crate::renderer::{Align, Canvas, colors, font};
use crate::settings::Settings;
use crate::sim::Rect;

const BAR_WIDTH: f32 = 400.0;
const BAR_HEIGHT: f32 = 30.0;
const BAR_TOP: f32 = 350.0;

#[derive(Debug, Clone)]
pub struct LoadingScreen {
    /// 0.0..=1.0
    progress: f32,
    /// Progress per second
    rate: f32,
    loaded_resources: u32,
    total_resources: u32,
    width: f32,
}

impl LoadingScreen {
    pub fn new(settings: &Settings) -> Self {
        Self {
            progress: 0.0,
            rate: settings.loading.rate,
            loaded_resources: 0,
            total_resources: settings.loading.resources,
            width: settings.window.width,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn loaded_resources(&self) -> u32 {
        self.loaded_resources
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Jump straight to 100%
    pub fn skip(&mut self) {
        if !self.is_complete() {
            self.progress = 1.0;
            self.loaded_resources = self.total_resources;
            log::info!("Loading skipped");
        }
    }
}

impl Screen for LoadingScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Loading
    }

    fn enter(&mut self) {
        self.progress = 0.0;
        self.loaded_resources = 0;
        log::info!("Loading {} resources", self.total_resources);
    }

    fn exit(&mut self) {
        log::debug!("Leaving loading screen");
    }

    fn handle_events(&mut self, input: &InputFrame) -> Option<Transition> {
        if input.was_pressed(Key::Escape) {
            return Some(Transition::Quit);
        }
        if input.was_pressed(Key::Space) || input.was_pressed(Key::Enter) {
            self.skip();
        }
        None
    }

    /// Fill the bar; the update after it is full requests the menu
    fn update(&mut self, dt: f32) -> Option<Transition> {
        if self.is_complete() {
            log::info!("Loading complete");
            return Some(Transition::To(ScreenKind::Menu));
        }

        self.progress = (self.progress + self.rate * dt).min(1.0);
        let expected = (self.progress * self.total_resources as f32) as u32;
        if expected > self.loaded_resources {
            self.loaded_resources = expected;
            log::debug!(
                "Loaded resource {}/{}",
                self.loaded_resources,
                self.total_resources
            );
        }
        None
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let cx = self.width / 2.0;
        canvas.clear(colors::BACKGROUND);
        canvas.text("SPACE INVADERS", Vec2::new(cx, 150.0), Align::Center, font::LARGE, colors::WHITE);
        canvas.text("LOADING...", Vec2::new(cx, 300.0), Align::Center, font::HUD, colors::WHITE);

        let bar = Rect::new((self.width - BAR_WIDTH) / 2.0, BAR_TOP, BAR_WIDTH, BAR_HEIGHT);
        canvas.stroke_rect(bar, 2.0, colors::WHITE);
        let fill = Rect::new(bar.left(), bar.top(), (BAR_WIDTH * self.progress).floor(), BAR_HEIGHT);
        canvas.fill_rect(fill, colors::GREEN);

        let percent = format!("{}%", (self.progress * 100.0) as u32);
        canvas.text(&percent, Vec2::new(cx, 400.0), Align::Center, font::HUD, colors::WHITE);
        if !self.is_complete() {
            canvas.text("Press SPACE to skip", Vec2::new(cx, 450.0), Align::Center, font::HUD, colors::GRAY);
        }
    }
}
