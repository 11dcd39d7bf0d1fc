//! The player's glider
//!
//! Per-mode behavior is picked by the `GameMode` passed in; the glider never
//! looks at global state.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_4;

use super::collision::{CollisionResult, Rect, touches_floor};
use super::state::{Field, GameMode};
use crate::consts::*;
use crate::tilt_for_velocity;
use crate::tuning::Tuning;

/// The player glider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Glider {
    /// Top-left of the sprite box
    pub pos: Vec2,
    /// Vertical velocity (pixels/tick, positive is down)
    pub vel: f32,
    /// Sprite size
    pub size: Vec2,
    /// Hit box inset on each side
    pub hit_inset: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Speed assigned on fly
    pub jump: f32,
    /// Post-crash fall speed
    pub fall_speed: f32,
    /// Baseline position (x pinned here, y reset here)
    pub home: Vec2,
    /// Visual tilt (radians, positive is nose down)
    pub rotation: f32,
}

impl Default for Glider {
    fn default() -> Self {
        Self::from_tuning(&Tuning::default())
    }
}

impl Glider {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        let home = Vec2::new(tuning.glider_x, tuning.glider_start_y);
        Self {
            pos: home,
            vel: 0.0,
            size: Vec2::new(tuning.glider_width, tuning.glider_height),
            hit_inset: tuning.hit_inset,
            gravity: tuning.gravity,
            jump: tuning.jump,
            fall_speed: tuning.crash_fall_speed,
            home,
            rotation: 0.0,
        }
    }

    /// Put the glider back at its start height, at rest
    pub fn reset(&mut self) {
        self.pos = self.home;
        self.vel = 0.0;
        self.rotation = 0.0;
    }

    /// Fly: absolute velocity assignment, so repeated calls before a tick
    /// have the same effect as one
    pub fn apply_impulse(&mut self) {
        self.vel = -self.jump;
    }

    /// Full sprite box (floor collision)
    pub fn sprite_box(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// Inset box (obstacle collision)
    pub fn hit_box(&self) -> Rect {
        self.sprite_box().inset(self.hit_inset)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Advance one tick in the given mode.
    ///
    /// Only `Playing` can report a collision (ground).
    pub fn update(&mut self, mode: GameMode, frame_count: u64, field: &Field) -> CollisionResult {
        match mode {
            GameMode::Intro => {
                self.hover(frame_count, INTRO_BOB_AMPLITUDE, INTRO_BOB_RATE);
                CollisionResult::Clear
            }
            GameMode::Menu => {
                self.hover(frame_count, MENU_BOB_AMPLITUDE, MENU_BOB_RATE);
                CollisionResult::Clear
            }
            GameMode::Playing => self.integrate(field.floor_y()),
            GameMode::GameOver => {
                self.crash_fall(field.floor_y());
                CollisionResult::Clear
            }
        }
    }

    /// Auto-pilot: pinned x, sinusoidal y, velocity forced to zero
    fn hover(&mut self, frame_count: u64, amplitude: f32, rate: f32) {
        self.pos.x = self.home.x;
        self.pos.y = self.home.y + (frame_count as f32 * rate).sin() * amplitude;
        self.vel = 0.0;
        self.rotation = 0.0;
    }

    /// Gravity + velocity integration with floor check
    fn integrate(&mut self, floor_y: f32) -> CollisionResult {
        self.vel += self.gravity;
        self.pos.y += self.vel;
        self.rotation = tilt_for_velocity(self.vel);

        if touches_floor(&self.sprite_box(), floor_y) {
            self.pos.y = floor_y - self.size.y;
            return CollisionResult::Ground;
        }
        CollisionResult::Clear
    }

    /// Cosmetic nose-down drop after a crash until resting on the floor
    fn crash_fall(&mut self, floor_y: f32) {
        self.rotation = FRAC_PI_4;
        if self.pos.y + self.size.y < floor_y {
            self.pos.y += self.fall_speed;
        } else {
            self.pos.y = floor_y - self.size.y;
        }
    }

    /// True once the wreck lies on the floor
    pub fn is_grounded(&self, field: &Field) -> bool {
        self.pos.y + self.size.y >= field.floor_y()
    }
}
