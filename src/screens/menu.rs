//! Main menu with a wrapping cursor

use glam::Vec2;

use super::{Screen, ScreenKind, Transition};
use crate::audio::SoundEffect;
use crate::input::{InputFrame, Key};
use crate::renderer::{Align, Canvas, Rgba, colors, font};
use crate::settings::Settings;
use crate::sim::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Play,
    Quit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 2] = [MenuOption::Play, MenuOption::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Play => "Play",
            MenuOption::Quit => "Quit",
        }
    }
}

const OPTIONS_TOP: f32 = 300.0;
const OPTIONS_SPACING: f32 = 60.0;
/// Pulse cycles per second of the selected option
const PULSE_RATE: f32 = 2.0;

#[derive(Debug, Clone)]
pub struct MenuScreen {
    selected: usize,
    /// Seconds since the menu was entered, drives the pulse
    pulse_time: f32,
    best_score: Option<u64>,
    width: f32,
    height: f32,
    sounds: Vec<SoundEffect>,
}

impl MenuScreen {
    pub fn new(settings: &Settings, best_score: Option<u64>) -> Self {
        Self {
            selected: 0,
            pulse_time: 0.0,
            best_score,
            width: settings.window.width,
            height: settings.window.height,
            sounds: Vec::new(),
        }
    }

    pub fn selected(&self) -> MenuOption {
        MenuOption::ALL[self.selected]
    }

    pub fn navigate_up(&mut self) {
        let len = MenuOption::ALL.len();
        self.selected = (self.selected + len - 1) % len;
        self.sounds.push(SoundEffect::MenuMove);
        log::debug!("Menu selection: {}", self.selected().label());
    }

    pub fn navigate_down(&mut self) {
        self.selected = (self.selected + 1) % MenuOption::ALL.len();
        self.sounds.push(SoundEffect::MenuMove);
        log::debug!("Menu selection: {}", self.selected().label());
    }

    pub fn select(&mut self) -> Transition {
        self.sounds.push(SoundEffect::MenuSelect);
        let option = self.selected();
        log::info!("Menu option chosen: {}", option.label());
        match option {
            MenuOption::Play => Transition::To(ScreenKind::Game),
            MenuOption::Quit => Transition::Quit,
        }
    }

    /// Brightness of the selected option, oscillating in 0.6..=1.0
    fn pulse(&self) -> f32 {
        let phase = (self.pulse_time * PULSE_RATE * std::f32::consts::TAU).sin();
        0.8 + 0.2 * phase
    }
}

fn scaled(color: Rgba, factor: f32) -> Rgba {
    [color[0] * factor, color[1] * factor, color[2] * factor, color[3]]
}

impl Screen for MenuScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Menu
    }

    fn enter(&mut self) {
        self.selected = 0;
        self.pulse_time = 0.0;
        log::info!("Main menu");
    }

    fn exit(&mut self) {
        log::debug!("Leaving main menu");
    }

    fn handle_events(&mut self, input: &InputFrame) -> Option<Transition> {
        for key in &input.pressed {
            match key {
                Key::Up | Key::W => self.navigate_up(),
                Key::Down | Key::S => self.navigate_down(),
                Key::Enter | Key::Space => return Some(self.select()),
                Key::Escape => return Some(Transition::Quit),
                _ => {}
            }
        }
        None
    }

    fn update(&mut self, dt: f32) -> Option<Transition> {
        self.pulse_time += dt;
        None
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let cx = self.width / 2.0;
        canvas.clear(colors::BACKGROUND);
        canvas.text("SPACE INVADERS", Vec2::new(cx, 100.0), Align::Center, font::TITLE, colors::CYAN);
        canvas.fill_rect(Rect::new(cx - 200.0, 189.0, 400.0, 2.0), colors::CYAN);

        if let Some(best) = self.best_score {
            let line = format!("BEST: {}", best);
            canvas.text(&line, Vec2::new(cx, 230.0), Align::Center, font::HUD, colors::WHITE);
        }

        for (i, option) in MenuOption::ALL.iter().enumerate() {
            let y = OPTIONS_TOP + i as f32 * OPTIONS_SPACING;
            if i == self.selected {
                let color = scaled(colors::YELLOW, self.pulse());
                let label = format!("> {} <", option.label());
                canvas.text(&label, Vec2::new(cx, y), Align::Center, font::OPTION, color);
            } else {
                canvas.text(option.label(), Vec2::new(cx, y), Align::Center, font::OPTION, colors::WHITE);
            }
        }

        canvas.text(
            "UP/DOWN Navigate    ENTER Select    ESC Exit",
            Vec2::new(cx, self.height - 30.0),
            Align::Center,
            font::SMALL,
            colors::GRAY,
        );
    }

    fn drain_sounds(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.sounds)
    }
}
