//! Game manager
//!
//! Owns exactly one active screen and is the only place that calls
//! `enter`/`exit`. Screens ask for transitions through return values; the
//! manager applies them after the call that produced them returns.

use std::rc::Rc;

use crate::audio::{AudioQueue, SoundEffect};
use crate::highscores::HighScores;
use crate::input::InputFrame;
use crate::renderer::Canvas;
use crate::screens::{GameScreen, LoadingScreen, MenuScreen, Screen, ScreenKind, Transition};
use crate::settings::Settings;
use crate::sim::GameEvent;

pub struct GameManager {
    settings: Rc<Settings>,
    current: Option<Box<dyn Screen>>,
    /// Last exited screen, for `go_back`
    previous: Option<Box<dyn Screen>>,
    running: bool,
    high_scores: HighScores,
    audio: AudioQueue,
    /// Seed handed to the next game screen
    next_seed: u64,
}

impl GameManager {
    /// A manager with no active screen; call `start` or `change_state`
    pub fn new(settings: Rc<Settings>, seed: u64) -> Self {
        log::info!("Game manager initialised (seed {})", seed);
        let audio = AudioQueue::from_settings(&settings.audio);
        Self {
            settings,
            current: None,
            previous: None,
            running: true,
            high_scores: HighScores::new(),
            audio,
            next_seed: seed,
        }
    }

    /// Enter the loading screen
    pub fn start(&mut self) {
        self.change_to(ScreenKind::Loading);
    }

    /// Build a fresh screen of the given kind
    pub fn build_screen(&mut self, kind: ScreenKind) -> Box<dyn Screen> {
        match kind {
            ScreenKind::Loading => Box::new(LoadingScreen::new(&self.settings)),
            ScreenKind::Menu => Box::new(MenuScreen::new(&self.settings, self.high_scores.top_score())),
            ScreenKind::Game => {
                let seed = self.next_seed;
                self.next_seed = self.next_seed.wrapping_add(1);
                Box::new(GameScreen::new(self.settings.clone(), seed))
            }
        }
    }

    pub fn change_to(&mut self, kind: ScreenKind) {
        let screen = self.build_screen(kind);
        self.change_state(screen);
    }

    /// Exit the current screen (kept as previous), then enter `next`
    pub fn change_state(&mut self, mut next: Box<dyn Screen>) {
        if let Some(mut outgoing) = self.current.take() {
            log::info!("Exiting state: {}", outgoing.kind().as_str());
            outgoing.exit();
            self.collect(outgoing.as_mut());
            self.previous = Some(outgoing);
        }
        log::info!("Entering state: {}", next.kind().as_str());
        next.enter();
        self.current = Some(next);
    }

    /// Swap back to the previously exited screen. Returns false without one.
    pub fn go_back(&mut self) -> bool {
        match self.previous.take() {
            Some(previous) => {
                log::info!("Going back to {}", previous.kind().as_str());
                self.change_state(previous);
                true
            }
            None => false,
        }
    }

    pub fn handle_events(&mut self, input: &InputFrame) {
        let transition = self
            .current
            .as_mut()
            .and_then(|screen| screen.handle_events(input));
        self.after_call(transition);
    }

    pub fn update(&mut self, dt: f32) {
        let transition = self.current.as_mut().and_then(|screen| screen.update(dt));
        self.after_call(transition);
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if let Some(screen) = &self.current {
            screen.draw(canvas);
        }
    }

    /// Signal the main loop to stop after the current frame
    pub fn quit(&mut self) {
        if self.running {
            log::info!("Quit requested");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn current_kind(&self) -> Option<ScreenKind> {
        self.current.as_ref().map(|s| s.kind())
    }

    pub fn current_name(&self) -> &'static str {
        self.current_kind().map_or("None", ScreenKind::as_str)
    }

    pub fn previous_kind(&self) -> Option<ScreenKind> {
        self.previous.as_ref().map(|s| s.kind())
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn audio(&self) -> &AudioQueue {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioQueue {
        &mut self.audio
    }

    fn after_call(&mut self, transition: Option<Transition>) {
        if let Some(screen) = self.current.as_mut() {
            let events = screen.drain_events();
            let sounds = screen.drain_sounds();
            self.route(events, sounds);
        }
        if let Some(transition) = transition {
            self.apply(transition);
        }
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::To(kind) => self.change_to(kind),
            Transition::Back => {
                if !self.go_back() {
                    log::warn!("No previous state to go back to");
                }
            }
            Transition::Quit => self.quit(),
        }
    }

    fn collect(&mut self, screen: &mut dyn Screen) {
        let events = screen.drain_events();
        let sounds = screen.drain_sounds();
        self.route(events, sounds);
    }

    /// Feed events to the leaderboard and audio queue
    fn route(&mut self, events: Vec<GameEvent>, sounds: Vec<SoundEffect>) {
        for sound in sounds {
            self.audio.play(sound);
        }
        for event in &events {
            self.audio.play_event(event);
            if let GameEvent::GameOver {
                score,
                level,
                play_time,
            } = *event
                && self.high_scores.add_score(score, level, play_time) == Some(1)
            {
                self.audio.play(SoundEffect::HighScore);
            }
        }
    }
}
