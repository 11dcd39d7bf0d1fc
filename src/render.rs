//! Per-tick draw data
//!
//! The core doesn't draw. After each tick it can hand the presentation layer
//! a [`RenderFrame`]: plain, serializable data with everything needed to
//! paint the scene.

use serde::{Deserialize, Serialize};

use crate::consts::{FLAG_WIDTH, POLE_WIDTH};
use crate::environment::{Cloud, Crack, Environment, Lightning, Particle, RainDrop, Scenario};
use crate::sim::{CollisionResult, GameMode, GameSession};

/// Glider placement for drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GliderPose {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Radians around the sprite center, positive is nose down
    pub rotation: f32,
    /// Draw the fallback rectangle instead of the sprite
    pub fallback: bool,
}

/// One obstacle's drawable geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleRect {
    pub pole_x: f32,
    pub pole_width: f32,
    pub flag_width: f32,
    /// Upper pole spans [0, top)
    pub top: f32,
    /// Lower pole spans [bottom, field height)
    pub bottom: f32,
    pub color: u32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    pub mode: GameMode,
    pub score: u32,
    /// Countdown label while a run is getting ready
    pub countdown: Option<u32>,
    /// What ended the run, while the game over screen is up
    pub crash: Option<CollisionResult>,
    pub field_width: f32,
    pub field_height: f32,
    pub glider: GliderPose,
    pub obstacles: Vec<ObstacleRect>,
    pub scenario: Scenario,
    pub sky: Vec<u32>,
    pub clouds: Vec<Cloud>,
    pub rain: Vec<RainDrop>,
    pub lightning: Option<Lightning>,
    pub particles: Vec<Particle>,
    pub cracks: Vec<Crack>,
}

impl RenderFrame {
    /// Snapshot the session and cosmetics. `sprite_ready` reports whether the
    /// glider sprite has loaded.
    pub fn capture(session: &GameSession, env: &Environment, sprite_ready: bool) -> Self {
        let glider = &session.glider;
        let obstacles = session
            .obstacles
            .obstacles()
            .iter()
            .map(|o| {
                let (span_start, _) = session.obstacles.hit_span_of(o);
                ObstacleRect {
                    pole_x: span_start,
                    pole_width: POLE_WIDTH,
                    flag_width: FLAG_WIDTH,
                    top: o.top,
                    bottom: o.bottom,
                    color: o.color,
                }
            })
            .collect();

        // Cracks and wreckage only show on the game over screen
        let game_over = session.mode == GameMode::GameOver;

        Self {
            mode: session.mode,
            score: session.score,
            countdown: session.countdown_seconds(),
            crash: if game_over { session.last_crash } else { None },
            field_width: session.field.width,
            field_height: session.field.height,
            glider: GliderPose {
                x: glider.pos.x,
                y: glider.pos.y,
                w: glider.size.x,
                h: glider.size.y,
                rotation: glider.rotation,
                fallback: !sprite_ready,
            },
            obstacles,
            scenario: env.weather.scenario,
            sky: env.weather.scenario.sky().to_vec(),
            clouds: env.weather.clouds.clone(),
            rain: env.weather.drops.clone(),
            lightning: env
                .weather
                .lightning
                .active
                .then(|| env.weather.lightning.clone()),
            particles: if game_over {
                env.effects.particles.clone()
            } else {
                Vec::new()
            },
            cracks: if game_over {
                env.effects.cracks.clone()
            } else {
                Vec::new()
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{self, ObstaclePart};
    use crate::tuning::Tuning;

    #[test]
    fn test_capture_countdown_and_pose() {
        let mut session = GameSession::new(Tuning::default());
        let env = Environment::new(1, Settings::default());
        sim::start(&mut session);
        let frame = RenderFrame::capture(&session, &env, false);
        assert_eq!(frame.mode, GameMode::Playing);
        assert_eq!(frame.countdown, Some(3));
        assert!(frame.glider.fallback);
        assert_eq!(frame.glider.y, 150.0);
    }

    #[test]
    fn test_capture_obstacle_geometry() {
        let mut session = GameSession::new(Tuning::default());
        let env = Environment::new(1, Settings::default());
        session.obstacles.push(300.0, 50.0, 0xFF0000);
        let frame = RenderFrame::capture(&session, &env, true);
        assert_eq!(frame.obstacles.len(), 1);
        let o = frame.obstacles[0];
        assert_eq!(o.pole_x, 310.0);
        assert_eq!(o.bottom - o.top, 150.0);
        assert_eq!(o.color, 0xFF0000);
    }

    #[test]
    fn test_wreckage_only_on_game_over() {
        let mut session = GameSession::new(Tuning::default());
        let mut env = Environment::new(1, Settings::default());
        env.on_crash(session.glider.center(), &session.field);

        let frame = RenderFrame::capture(&session, &env, true);
        assert!(frame.particles.is_empty());
        assert_eq!(frame.crash, None);

        session.mode = GameMode::GameOver;
        session.last_crash = Some(CollisionResult::Ground);
        let frame = RenderFrame::capture(&session, &env, true);
        assert!(!frame.particles.is_empty());
        assert!(!frame.cracks.is_empty());
        assert_eq!(frame.crash, Some(CollisionResult::Ground));
        assert!(frame.to_json().unwrap().contains("\"GameOver\""));

        session.last_crash = Some(CollisionResult::Obstacle {
            id: 4,
            part: ObstaclePart::Bottom,
        });
        let frame = RenderFrame::capture(&session, &env, true);
        assert!(matches!(
            frame.crash,
            Some(CollisionResult::Obstacle { id: 4, part: ObstaclePart::Bottom })
        ));
    }
}
