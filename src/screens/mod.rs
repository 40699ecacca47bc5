//! Screen controllers
//!
//! Each screen implements the `Screen` lifecycle. Screens never swap
//! themselves out: they return a `Transition` and the `GameManager` performs
//! the exit/enter protocol.

pub mod game;
pub mod loading;
pub mod menu;

use crate::audio::SoundEffect;
use crate::input::InputFrame;
use crate::renderer::Canvas;
use crate::sim::GameEvent;

pub use game::GameScreen;
pub use loading::LoadingScreen;
pub use menu::{MenuOption, MenuScreen};

/// The screens the manager knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Loading,
    Menu,
    Game,
}

impl ScreenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ScreenKind::Loading => "Loading",
            ScreenKind::Menu => "Menu",
            ScreenKind::Game => "Game",
        }
    }
}

/// A screen's request to the manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Exit the current screen and enter a fresh one
    To(ScreenKind),
    /// Re-enter the previously exited screen
    Back,
    /// Stop the main loop after this frame
    Quit,
}

/// Lifecycle of one screen
pub trait Screen {
    fn kind(&self) -> ScreenKind;

    /// One-time setup, called by the manager when the screen becomes current
    fn enter(&mut self);

    /// One-time teardown, called by the manager before the screen is replaced
    fn exit(&mut self);

    fn handle_events(&mut self, input: &InputFrame) -> Option<Transition>;

    fn update(&mut self, dt: f32) -> Option<Transition>;

    fn draw(&self, canvas: &mut dyn Canvas);

    /// Gameplay events since the last call
    fn drain_events(&mut self) -> Vec<GameEvent> {
        Vec::new()
    }

    /// Interface sounds since the last call
    fn drain_sounds(&mut self) -> Vec<SoundEffect> {
        Vec::new()
    }
}
