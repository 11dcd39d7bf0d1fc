//! Glider Run headless runner
//!
//! Drives the game with synthetic 60 Hz timestamps and a simple auto-pilot.
//! Useful for balancing tuning files and eyeballing the event stream:
//!
//! ```text
//! RUST_LOG=info glider-run --ticks 3600 --tuning tuning.json --quality low --json
//! ```

use glider_run::input::InputEvent;
use glider_run::sim::{GameMode, GameSession};
use glider_run::ui::{Hud, Presenter};
use glider_run::{Game, QualityPreset, Settings, Tuning};

/// Callback spacing slightly above the tick interval so every frame ticks
const FRAME_MS: f64 = 17.0;

struct Options {
    ticks: u64,
    tuning: Option<String>,
    settings: Option<String>,
    quality: Option<QualityPreset>,
    json: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Options {
    let mut opts = Options {
        ticks: 3600,
        tuning: None,
        settings: None,
        quality: None,
        json: false,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--ticks" => match args.next().and_then(|v| v.parse().ok()) {
                Some(n) => opts.ticks = n,
                None => log::warn!("--ticks needs a number, keeping {}", opts.ticks),
            },
            "--tuning" => opts.tuning = args.next(),
            "--settings" => opts.settings = args.next(),
            "--quality" => match args.next().as_deref().and_then(QualityPreset::parse) {
                Some(preset) => opts.quality = Some(preset),
                None => log::warn!("--quality expects low, medium or high"),
            },
            "--json" => opts.json = true,
            other => log::warn!("Ignoring unknown argument {}", other),
        }
    }
    opts
}

/// Logs HUD notifications and keeps the HUD model current
struct LogPresenter {
    hud: Hud,
    best: u32,
}

impl Presenter for LogPresenter {
    fn score_changed(&mut self, score: u32, milestone: bool) {
        if milestone {
            log::info!("Milestone! {}", score);
        }
        self.hud.score_changed(score, milestone);
    }

    fn show_menu(&mut self) {
        log::info!("Menu");
        self.hud.show_menu();
    }

    fn show_game_over(&mut self, final_score: u32) {
        self.best = self.best.max(final_score);
        log::info!("Game over - final score {}", final_score);
        self.hud.show_game_over(final_score);
    }

    fn hide_overlays(&mut self) {
        self.hud.hide_overlays();
    }
}

/// Fly when sinking below the middle of the next gap
fn autopilot_wants_fly(session: &GameSession) -> bool {
    let glider = &session.glider;
    let target = session
        .obstacles
        .obstacles()
        .iter()
        .find(|o| session.obstacles.hit_span_of(o).1 > glider.pos.x)
        .map(|o| (o.top + o.bottom) / 2.0)
        .unwrap_or(session.field.height / 2.0);
    glider.vel >= 0.0 && glider.center().y > target + 10.0
}

fn main() {
    env_logger::init();
    log::info!("Glider Run (headless) starting...");

    let opts = parse_args(std::env::args().skip(1));
    let tuning = opts
        .tuning
        .as_deref()
        .map(Tuning::load_or_default)
        .unwrap_or_default();
    let mut settings = opts
        .settings
        .as_deref()
        .map(Settings::load_or_default)
        .unwrap_or_default();
    if let Some(preset) = opts.quality {
        settings.apply_preset(preset);
    }

    let mut game = Game::new(tuning, settings);
    let mut presenter = LogPresenter {
        hud: Hud::default(),
        best: 0,
    };

    let mut now = 0.0;
    let mut ticks = 0;
    let mut runs = 0u32;
    while ticks < opts.ticks {
        match game.mode() {
            GameMode::Menu => {
                runs += 1;
                game.handle_input(InputEvent::StartPressed, &mut presenter);
            }
            // Let the wreck hit the ground before restarting
            GameMode::GameOver if game.session().glider.is_grounded(&game.session().field) => {
                runs += 1;
                game.handle_input(InputEvent::StartPressed, &mut presenter);
            }
            GameMode::Playing if game.session().is_live() && autopilot_wants_fly(game.session()) => {
                game.handle_input(InputEvent::PointerDown, &mut presenter);
            }
            _ => {}
        }

        if game.frame(now, &mut presenter) {
            ticks += 1;
            presenter.hud.tick();
            if opts.json {
                match game.render_frame(false).to_json() {
                    Ok(line) => println!("{}", line),
                    Err(e) => log::error!("Frame serialization failed: {}", e),
                }
            }
        }
        now += FRAME_MS;
    }

    game.stop();
    log::info!("Ran {} ticks over {} run(s)", ticks, runs);
    if !opts.json {
        println!(
            "score: {}  best: {}  mode: {}",
            game.session().score,
            presenter.best,
            game.mode().as_str()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Options {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let opts = args(&[]);
        assert_eq!(opts.ticks, 3600);
        assert_eq!(opts.quality, None);
        assert!(!opts.json);
    }

    #[test]
    fn test_quality_flag() {
        assert_eq!(args(&["--quality", "LOW"]).quality, Some(QualityPreset::Low));
        assert_eq!(args(&["--quality", "ultra"]).quality, None);
        // Missing value is ignored, later flags still parse
        let opts = args(&["--ticks", "10", "--json", "--quality"]);
        assert_eq!(opts.ticks, 10);
        assert!(opts.json);
        assert_eq!(opts.quality, None);
    }
}
