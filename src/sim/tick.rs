//! Per-frame simulation step
//!
//! Advances a session by `dt` seconds: entities, formation, enemy volley,
//! collisions, then the game-over and wave-clear checks. Dead entities are
//! purged twice, once after the entity pass and once after collisions.

use super::collision::CollisionReport;
use super::entity::Entity;
use super::state::{GameEvent, Session};

/// Input intents for one frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move left (held)
    pub left: bool,
    /// Move right (held)
    pub right: bool,
    /// Fire (pressed this frame)
    pub fire: bool,
    /// Pause toggle
    pub pause: bool,
    /// Restart, honoured only after game over
    pub restart: bool,
}

/// Apply discrete actions and movement intents before the frame's update
pub fn apply_input(session: &mut Session, input: &TickInput) {
    if input.restart && session.game_over {
        session.restart();
        return;
    }
    if input.pause {
        session.toggle_pause();
    }
    if session.game_over {
        return;
    }
    session.world.player.handle_input(input.left, input.right);
    if input.fire {
        session.player_shoot();
    }
}

/// Advance the session by one frame
pub fn tick(session: &mut Session, dt: f32) {
    // Frozen while paused or after game over
    if session.paused || session.game_over {
        return;
    }
    session.victory = false;
    session.elapsed += dt;

    session.world.update_entities(dt);
    session.world.purge_dead();

    let formation_invaded = session
        .spawner
        .update_formation(&mut session.world.enemies, dt);

    session.enemy_volley_timer -= dt;
    if session.enemy_volley_timer <= 0.0 {
        session.enemy_volley_timer = session.settings().enemy.volley_interval;
        session.enemy_shoot();
    }

    let report = session.collisions.resolve(&mut session.world);
    session.world.purge_dead();
    apply_report(session, &report);

    if !session.world.player.is_alive() || report.invasion || formation_invaded {
        if report.invasion || formation_invaded {
            log::info!("Invasion at level {}", session.level);
            session.push_event(GameEvent::Invasion);
        }
        end_game(session);
        return;
    }

    if session.spawner.all_enemies_dead(&session.world.enemies) {
        advance_wave(session);
    }
}

fn apply_report(session: &mut Session, report: &CollisionReport) {
    session.score += report.points_gained;
    for _ in 0..report.enemies_hit {
        session.push_event(GameEvent::EnemyHit);
    }
    for kill in &report.kills {
        session.push_event(GameEvent::EnemyDestroyed {
            kind: kill.kind,
            points: kill.points,
            at: kill.at,
        });
    }
    if report.life_lost {
        let lives_left = session.world.player.lives;
        session.push_event(GameEvent::PlayerHit { lives_left });
    }
}

fn end_game(session: &mut Session) {
    session.game_over = true;
    log::info!(
        "Game over: score {} at level {} after {:.1}s",
        session.score,
        session.level,
        session.elapsed
    );
    session.push_event(GameEvent::GameOver {
        score: session.score,
        level: session.level,
        play_time: session.elapsed,
    });
}

/// Wave cleared: next level and the new wave in the same frame
fn advance_wave(session: &mut Session) {
    session.victory = true;
    session.push_event(GameEvent::WaveCleared {
        level: session.level,
    });
    session.level = session.spawner.next_level();
    let wave = session
        .spawner
        .spawn_wave(session.level, session.settings());
    session.world.enemies = wave;
    session.push_event(GameEvent::LevelUp {
        level: session.level,
    });
}
