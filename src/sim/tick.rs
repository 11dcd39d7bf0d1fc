//! Fixed-rate simulation tick
//!
//! The game-mode state machine. Each call to [`tick`] advances the session by
//! exactly one logical step and dispatches per-mode work to the glider and
//! obstacle field. Leaving `Menu` or `GameOver` only happens through [`start`].

use super::collision::CollisionResult;
use super::state::{GameEvent, GameMode, GameSession};
use crate::is_milestone;

/// Advance the session by one tick
pub fn tick(session: &mut GameSession) {
    if session.mode == GameMode::Intro {
        session.intro_ticks += 1;
        if session.intro_ticks > session.tuning.intro_ticks {
            enter_menu(session);
        }
    }

    match session.mode {
        GameMode::Playing => {
            if session.countdown_ticks > 0 {
                // Frozen while the countdown runs
                session.countdown_ticks -= 1;
                if session.countdown_ticks == 0 {
                    log::info!("Countdown finished, go!");
                }
            } else {
                advance_run(session);
            }
        }
        GameMode::GameOver => {
            let fire = session.glider.center().with_y(session.glider.pos.y + session.glider.size.y);
            let smoke = session.glider.center();
            session.emit(GameEvent::Burning { fire, smoke });
            session.glider.update(GameMode::GameOver, session.frame_count, &session.field);
        }
        mode @ (GameMode::Intro | GameMode::Menu) => {
            session.glider.update(mode, session.frame_count, &session.field);
        }
    }

    session.frame_count += 1;
}

/// Start (or restart) a run.
///
/// Accepted from `Intro` (skips it), `Menu` and `GameOver`; ignored while a
/// run is already in progress. Returns whether a run started.
pub fn start(session: &mut GameSession) -> bool {
    if session.mode == GameMode::Playing {
        log::debug!("Start ignored, run already in progress");
        return false;
    }

    log::info!("Run started (from {})", session.mode.as_str());
    session.mode = GameMode::Playing;
    session.glider.reset();
    session.obstacles.reset();
    session.score = 0;
    session.frame_count = 0;
    session.countdown_ticks = session.tuning.countdown_ticks;
    session.last_crash = None;

    session.emit(GameEvent::HideOverlays);
    session.emit(GameEvent::ScoreChanged {
        score: 0,
        milestone: false,
    });
    session.emit(GameEvent::RunStarted);
    true
}

fn enter_menu(session: &mut GameSession) {
    log::info!("Intro finished after {} ticks", session.intro_ticks);
    session.mode = GameMode::Menu;
    session.glider.pos.x = session.glider.home.x;
    session.emit(GameEvent::ShowMenu);
}

/// One live tick: glider physics, then the obstacle field
fn advance_run(session: &mut GameSession) {
    let ground = session
        .glider
        .update(GameMode::Playing, session.frame_count, &session.field);
    if ground.is_hit() {
        end_run(session, ground);
        return;
    }

    let hit_box = session.glider.hit_box();
    let outcome = session.obstacles.update(
        GameMode::Playing,
        session.frame_count,
        &session.field,
        &hit_box,
        session.glider.pos.x,
        &mut session.rng,
    );

    for _ in 0..outcome.cleared {
        award_points(session);
    }

    if outcome.collision.is_hit() {
        end_run(session, outcome.collision);
    }
}

fn award_points(session: &mut GameSession) {
    session.score += session.tuning.points_per_obstacle;
    let milestone = is_milestone(session.score, session.tuning.milestone_every);
    if milestone {
        log::info!("Milestone reached: {}", session.score);
    }
    session.emit(GameEvent::ScoreChanged {
        score: session.score,
        milestone,
    });
}

fn end_run(session: &mut GameSession, cause: CollisionResult) {
    log::info!("Game over ({:?}) with score {}", cause, session.score);
    session.mode = GameMode::GameOver;
    session.last_crash = Some(cause);
    session.emit(GameEvent::ShowGameOver {
        final_score: session.score,
    });
    let at = session.glider.center();
    session.emit(GameEvent::Crash { at });
}
