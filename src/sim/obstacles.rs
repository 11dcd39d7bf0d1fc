//! Obstacle field: spawning, scrolling, scoring and retiring flag-pole pairs
//!
//! Obstacles are kept in arrival order. They all scroll at the same speed
//! and spawn at the same x, so the oldest one is always the first to retire.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{CollisionResult, Rect, glider_vs_gap};
use super::state::{Field, GameMode};
use crate::tuning::Tuning;

/// A paired top/bottom obstacle with a gap between `top` and `bottom`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge of the obstacle's draw box
    pub x: f32,
    /// Gap top edge (bottom of the upper pole)
    pub top: f32,
    /// Gap bottom edge (top of the lower pole), always `top + gap`
    pub bottom: f32,
    /// Scored already
    pub passed: bool,
    /// Flag color (0xRRGGBB)
    pub color: u32,
}

/// What one field update produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldOutcome {
    /// First obstacle hit this tick (if any)
    pub collision: CollisionResult,
    /// Obstacles newly cleared this tick
    pub cleared: u32,
}

/// Manages all live obstacles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    /// Current scroll speed (pixels/tick)
    pub speed: f32,
    /// Speed restored on reset
    pub base_speed: f32,
    /// Gap height (constant for a run)
    pub gap: f32,
    /// Spawn every N ticks
    pub spawn_interval: u64,
    /// Lowest allowed gap top
    pub margin_top: f32,
    /// Space kept between the gap bottom and the floor
    pub margin_bottom: f32,
    /// Hit span offsets from x
    pub hit_span: (f32, f32),
    /// Cleared once x + this is left of the glider
    pub score_edge: f32,
    /// Retired once x + this is left of the field
    pub retire_edge: f32,
    pub palette: Vec<u32>,
    next_id: u32,
}

impl ObstacleField {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            obstacles: Vec::new(),
            speed: tuning.base_speed,
            base_speed: tuning.base_speed,
            gap: tuning.gap,
            spawn_interval: tuning.spawn_interval.max(1),
            margin_top: tuning.spawn_margin_top,
            margin_bottom: tuning.spawn_margin_bottom,
            hit_span: (tuning.hit_span_start, tuning.hit_span_end),
            score_edge: tuning.score_edge,
            retire_edge: tuning.retire_edge,
            palette: tuning.palette.clone(),
            next_id: 1,
        }
    }

    /// Live obstacles, oldest first
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Clear everything for a new run
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.speed = self.base_speed;
    }

    /// Allowed range for a gap top in this field, never inverted
    pub fn spawn_range(&self, field: &Field) -> (f32, f32) {
        let min_top = self.margin_top;
        let max_top = field.height - self.gap - self.margin_bottom;
        if max_top < min_top {
            log::warn!(
                "Field height {} too small for gap {} + margin {}, pinning gap top to {}",
                field.height,
                self.gap,
                self.margin_bottom,
                min_top
            );
            (min_top, min_top)
        } else {
            (min_top, max_top)
        }
    }

    /// Spawn one obstacle at the right edge of the field
    pub fn spawn<R: Rng>(&mut self, field: &Field, rng: &mut R) -> &Obstacle {
        let (min_top, max_top) = self.spawn_range(field);
        let top = if max_top > min_top {
            rng.random_range(min_top..max_top)
        } else {
            min_top
        };
        let color = if self.palette.is_empty() {
            0xFFFFFF
        } else {
            self.palette[rng.random_range(0..self.palette.len())]
        };
        self.push(field.width, top, color)
    }

    /// Append an obstacle with a fixed gap top
    pub fn push(&mut self, x: f32, top: f32, color: u32) -> &Obstacle {
        let id = self.next_id;
        self.next_id += 1;
        log::debug!("Spawned obstacle {} at x={} gap=[{}, {}]", id, x, top, top + self.gap);
        self.obstacles.push(Obstacle {
            id,
            x,
            top,
            bottom: top + self.gap,
            passed: false,
            color,
        });
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Hit span `[left, right)` of an obstacle
    pub fn hit_span_of(&self, obstacle: &Obstacle) -> (f32, f32) {
        (obstacle.x + self.hit_span.0, obstacle.x + self.hit_span.1)
    }

    /// Advance one tick: spawn, scroll, collide, score, retire.
    ///
    /// Does nothing outside `Playing`.
    pub fn update<R: Rng>(
        &mut self,
        mode: GameMode,
        frame_count: u64,
        field: &Field,
        hit_box: &Rect,
        glider_x: f32,
        rng: &mut R,
    ) -> FieldOutcome {
        let mut outcome = FieldOutcome::default();
        if mode != GameMode::Playing {
            return outcome;
        }

        if frame_count.is_multiple_of(self.spawn_interval) {
            self.spawn(field, rng);
        }

        let (span_start, span_end) = self.hit_span;
        for obstacle in &mut self.obstacles {
            obstacle.x -= self.speed;

            let span = (obstacle.x + span_start, obstacle.x + span_end);
            if let Some(part) = glider_vs_gap(hit_box, span, obstacle.top, obstacle.bottom) {
                outcome.collision = outcome.collision.or(CollisionResult::Obstacle {
                    id: obstacle.id,
                    part,
                });
            }

            if !obstacle.passed && obstacle.x + self.score_edge < glider_x {
                obstacle.passed = true;
                outcome.cleared += 1;
                log::debug!("Obstacle {} cleared", obstacle.id);
            }
        }

        let before = self.obstacles.len();
        let retire_edge = self.retire_edge;
        self.obstacles.retain(|o| o.x + retire_edge >= 0.0);
        if self.obstacles.len() < before {
            log::debug!("Retired {} obstacle(s)", before - self.obstacles.len());
        }

        outcome
    }
}
