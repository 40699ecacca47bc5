//! Space Invaders entry point
//!
//! Runs the game headlessly at a fixed 60 Hz step with a scripted pilot in
//! place of a keyboard. Each frame is drawn into a display list and
//! tessellated, so the whole pipeline short of the GPU upload is exercised.
//!
//! Usage: `space-invaders [settings.json] [seed]`

use std::path::Path;
use std::rc::Rc;

use glam::Vec2;

use space_invaders::audio::SoundEffect;
use space_invaders::consts::REFERENCE_FPS;
use space_invaders::renderer::{DisplayList, shapes};
use space_invaders::screens::ScreenKind;
use space_invaders::{GameManager, InputFrame, Key, Settings};

/// Give up after ten simulated minutes
const MAX_FRAMES: u64 = 60 * 60 * 10;
/// Frames between shots fired by the pilot
const FIRE_EVERY: u64 = 8;
/// Frames spent sweeping in one direction
const SWEEP_FRAMES: u64 = 90;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Space Invaders (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(Path::new(&path)),
        None => Settings::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(12345);

    run(Rc::new(settings), seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {}

/// Keys the pilot presses on this frame for the active screen
fn pilot(kind: Option<ScreenKind>, frame: u64, input: &mut InputFrame) {
    match kind {
        Some(ScreenKind::Loading) => input.press(Key::Space),
        Some(ScreenKind::Menu) => input.press(Key::Enter),
        Some(ScreenKind::Game) => {
            let sweep_left = (frame / SWEEP_FRAMES) % 2 == 0;
            input.release(Key::Left);
            input.release(Key::Right);
            input.hold(if sweep_left { Key::Left } else { Key::Right });
            if frame % FIRE_EVERY == 0 {
                input.press(Key::Space);
            }
        }
        None => {}
    }
}

fn run(settings: Rc<Settings>, seed: u64) {
    let dt = 1.0 / REFERENCE_FPS;
    let viewport = Vec2::new(settings.window.width, settings.window.height);
    let mut manager = GameManager::new(settings, seed);
    manager.start();

    let mut input = InputFrame::new();
    let mut list = DisplayList::new();
    let mut cues = 0usize;
    let mut sound_seconds = 0.0f32;
    let mut vertex_bytes = 0usize;
    let mut frame = 0u64;
    let mut finished = false;

    while manager.is_running() && frame < MAX_FRAMES && !finished {
        pilot(manager.current_kind(), frame, &mut input);
        manager.handle_events(&input);
        manager.update(dt);

        list.reset();
        manager.draw(&mut list);
        let mut vertices = shapes::tessellate(&list, viewport);
        shapes::to_clip_space(&mut vertices, viewport);
        vertex_bytes = vertex_bytes.max(shapes::as_bytes(&vertices).len());

        for cue in manager.audio_mut().drain() {
            cues += 1;
            sound_seconds += cue.duration();
            finished |= cue.effect == SoundEffect::GameOver;
        }
        input.end_frame();
        frame += 1;
    }

    log::info!(
        "Stopped after {} frames ({:.1}s simulated) in {} state",
        frame,
        frame as f32 * dt,
        manager.current_name()
    );
    log::info!(
        "{} audio cues ({:.1}s of sound), peak frame upload {} bytes",
        cues,
        sound_seconds,
        vertex_bytes
    );
    if manager.high_scores().is_empty() {
        log::info!("No high score recorded");
        return;
    }
    match manager.high_scores().to_json() {
        Ok(json) => log::info!("High scores: {}", json),
        Err(err) => log::error!("Failed to serialize high scores: {}", err),
    }
}
