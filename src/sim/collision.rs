//! Collision detection for the glider against the floor and obstacle poles
//!
//! Everything is axis-aligned: the glider's hit box is an inset rectangle and
//! each obstacle is a horizontal hit span with a vertical gap cut out of it.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Shrink by `d` on every side
    pub fn inset(&self, d: f32) -> Self {
        Self {
            x: self.x + d,
            y: self.y + d,
            w: self.w - 2.0 * d,
            h: self.h - 2.0 * d,
        }
    }

    /// Open overlap with the horizontal span `[left, right)`
    #[inline]
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.x < right && self.right() > left
    }
}

/// Which half of an obstacle was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstaclePart {
    Top,
    Bottom,
}

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionResult {
    /// Nothing hit
    #[default]
    Clear,
    /// Glider reached the floor
    Ground,
    /// Glider clipped an obstacle
    Obstacle { id: u32, part: ObstaclePart },
}

impl CollisionResult {
    #[inline]
    pub fn is_hit(&self) -> bool {
        !matches!(self, CollisionResult::Clear)
    }

    /// Keep the first hit of a tick
    pub fn or(self, other: CollisionResult) -> CollisionResult {
        if self.is_hit() { self } else { other }
    }
}

/// Check the glider hit box against one obstacle.
///
/// `span` is the obstacle's horizontal hit span, `top`/`bottom` the gap edges.
/// Top is tested first, matching the draw order of the two flags.
pub fn glider_vs_gap(hit_box: &Rect, span: (f32, f32), top: f32, bottom: f32) -> Option<ObstaclePart> {
    if !hit_box.overlaps_x(span.0, span.1) {
        return None;
    }
    if hit_box.y < top {
        Some(ObstaclePart::Top)
    } else if hit_box.bottom() > bottom {
        Some(ObstaclePart::Bottom)
    } else {
        None
    }
}

/// Check the full sprite box against the floor line
#[inline]
pub fn touches_floor(sprite: &Rect, floor_y: f32) -> bool {
    sprite.bottom() >= floor_y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_box() {
        let sprite = Rect::new(50.0, 100.0, 50.0, 35.0);
        let hit = sprite.inset(5.0);
        assert_eq!(hit, Rect::new(55.0, 105.0, 40.0, 25.0));
        assert_eq!(hit.right(), 95.0);
        assert_eq!(hit.bottom(), 130.0);
    }

    #[test]
    fn test_span_is_half_open() {
        let hit = Rect::new(55.0, 105.0, 40.0, 25.0);
        // Span ending exactly at the box's left edge does not overlap
        assert!(!hit.overlaps_x(0.0, 55.0));
        // Span starting exactly at the box's right edge does not overlap
        assert!(!hit.overlaps_x(95.0, 155.0));
        assert!(hit.overlaps_x(94.0, 155.0));
    }

    #[test]
    fn test_inside_gap_is_clear() {
        let hit = Rect::new(55.0, 105.0, 40.0, 25.0);
        assert_eq!(glider_vs_gap(&hit, (60.0, 120.0), 100.0, 250.0), None);
    }

    #[test]
    fn test_top_and_bottom_hits() {
        let high = Rect::new(55.0, 40.0, 40.0, 25.0);
        assert_eq!(glider_vs_gap(&high, (60.0, 120.0), 50.0, 200.0), Some(ObstaclePart::Top));

        let low = Rect::new(55.0, 190.0, 40.0, 25.0);
        assert_eq!(glider_vs_gap(&low, (60.0, 120.0), 50.0, 200.0), Some(ObstaclePart::Bottom));

        // Same heights but outside the span
        assert_eq!(glider_vs_gap(&low, (200.0, 260.0), 50.0, 200.0), None);
    }

    #[test]
    fn test_floor_contact_is_inclusive() {
        let sprite = Rect::new(50.0, 565.0, 50.0, 35.0);
        assert!(touches_floor(&sprite, 600.0));
        assert!(!touches_floor(&sprite, 600.5));
    }

    #[test]
    fn test_first_hit_wins() {
        let ground = CollisionResult::Ground;
        let obstacle = CollisionResult::Obstacle { id: 3, part: ObstaclePart::Top };
        assert_eq!(ground.or(obstacle), ground);
        assert_eq!(CollisionResult::Clear.or(obstacle), obstacle);
        assert!(!CollisionResult::Clear.is_hit());
    }
}
