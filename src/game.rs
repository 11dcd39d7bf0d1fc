//! Game instance holding all state
//!
//! `Game::frame` is what the display callback calls. It asks the scheduler
//! whether a logical tick is due, runs the state machine, then forwards the
//! tick's events to the cosmetics and the HUD presenter.

use crate::environment::Environment;
use crate::input::{Command, InputAdapter, InputEvent};
use crate::render::RenderFrame;
use crate::settings::Settings;
use crate::sim::{self, FrameScheduler, GameEvent, GameMode, GameSession};
use crate::tuning::Tuning;
use crate::ui::Presenter;

pub struct Game {
    scheduler: FrameScheduler,
    session: GameSession,
    environment: Environment,
    input: InputAdapter,
}

impl Game {
    pub fn new(tuning: Tuning, settings: Settings) -> Self {
        let environment = Environment::new(tuning.seed, settings);
        Self {
            scheduler: FrameScheduler::default(),
            session: GameSession::new(tuning),
            environment,
            input: InputAdapter::default(),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn mode(&self) -> GameMode {
        self.session.mode
    }

    pub fn is_running(&self) -> bool {
        self.input.is_running()
    }

    /// Tear down: later frames and input do nothing
    pub fn stop(&mut self) {
        log::info!("Game loop stopped");
        self.input.set_running(false);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.session.resize(width, height);
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.environment.set_settings(settings);
    }

    /// Display callback. Returns whether a logical tick ran.
    pub fn frame(&mut self, now_ms: f64, presenter: &mut impl Presenter) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.scheduler.tick(now_ms).is_none() {
            return false;
        }
        self.step(presenter);
        true
    }

    /// Run exactly one logical tick, bypassing the scheduler
    pub fn step(&mut self, presenter: &mut impl Presenter) {
        sim::tick(&mut self.session);
        self.dispatch_events(presenter);
        self.environment
            .update(self.session.score, self.session.mode, &self.session.field);
    }

    /// Raw platform input
    pub fn handle_input(&mut self, event: InputEvent, presenter: &mut impl Presenter) -> Option<Command> {
        let command = self.input.translate(event)?;
        match command {
            Command::Fly => self.fly(),
            Command::Start => self.start(presenter),
        }
        Some(command)
    }

    /// Impulse, applied immediately. In Intro/Menu the next tick's auto-pilot
    /// overwrites it, so it has no visible effect there.
    pub fn fly(&mut self) {
        if self.is_running() {
            self.session.glider.apply_impulse();
        }
    }

    /// Start command from the overlay. Ignored after `stop`.
    pub fn start(&mut self, presenter: &mut impl Presenter) {
        if !self.is_running() {
            log::debug!("Start ignored, game loop stopped");
            return;
        }
        if sim::start(&mut self.session) {
            self.dispatch_events(presenter);
        }
    }

    pub fn render_frame(&self, sprite_ready: bool) -> RenderFrame {
        RenderFrame::capture(&self.session, &self.environment, sprite_ready)
    }

    fn dispatch_events(&mut self, presenter: &mut impl Presenter) {
        for event in self.session.drain_events() {
            self.environment.handle(&event, &self.session.field);
            match event {
                GameEvent::ScoreChanged { score, milestone } => presenter.score_changed(score, milestone),
                GameEvent::ShowMenu => presenter.show_menu(),
                GameEvent::ShowGameOver { final_score } => presenter.show_game_over(final_score),
                GameEvent::HideOverlays => presenter.hide_overlays(),
                GameEvent::RunStarted | GameEvent::Crash { .. } | GameEvent::Burning { .. } => {}
            }
        }
    }
}
