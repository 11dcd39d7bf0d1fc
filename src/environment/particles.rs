//! Crash effects: fire, smoke, explosion burst and screen cracks

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Life lost per tick (particles start at 1.0)
pub const LIFE_DECAY: f32 = 0.02;
/// Smoke puffs grow this much per tick
pub const SMOKE_GROWTH: f32 = 0.2;
/// Particles per burning call
pub const FIRE_PER_BURN: usize = 5;
pub const SMOKE_PER_BURN: usize = 2;
/// Particles in the crash burst
pub const EXPLOSION_PARTICLES: usize = 30;
/// Main cracks radiating from the screen center
pub const MAIN_CRACKS: usize = 7;

const SMOKE_COLOR: u32 = 0x323232;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    Fire,
    Smoke,
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32, // 0-1, decreases over time
    pub size: f32,
    pub color: u32,
    pub kind: ParticleKind,
}

/// A straight crack line across the screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Crack {
    pub from: Vec2,
    pub to: Vec2,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Effects {
    pub particles: Vec<Particle>,
    pub cracks: Vec<Crack>,
}

fn fire_color<R: Rng>(rng: &mut R, max_green: u32) -> u32 {
    0xFF0000 | (rng.random_range(0..max_green) << 8)
}

impl Effects {
    pub fn clear(&mut self) {
        self.particles.clear();
        self.cracks.clear();
    }

    /// Flames or smoke around `at`, respecting the particle cap
    pub fn burn<R: Rng>(&mut self, at: Vec2, kind: ParticleKind, cap: usize, rng: &mut R) {
        let count = match kind {
            ParticleKind::Fire => FIRE_PER_BURN,
            ParticleKind::Smoke => SMOKE_PER_BURN,
        };
        for _ in 0..count {
            if self.particles.len() >= cap {
                return;
            }
            let offset = Vec2::new(rng.random_range(-20.0..20.0), rng.random_range(-10.0..10.0));
            let (vy, color) = match kind {
                ParticleKind::Fire => (-rng.random_range(1.0..4.0), fire_color(rng, 150)),
                ParticleKind::Smoke => (-rng.random_range(2.0..3.0), SMOKE_COLOR),
            };
            self.particles.push(Particle {
                pos: at + offset,
                vel: Vec2::new(rng.random_range(-1.0..1.0), vy),
                life: 1.0,
                size: rng.random_range(5.0..15.0),
                color,
                kind,
            });
        }
    }

    /// Radial fire burst
    pub fn explode<R: Rng>(&mut self, at: Vec2, cap: usize, rng: &mut R) {
        for _ in 0..EXPLOSION_PARTICLES {
            if self.particles.len() >= cap {
                return;
            }
            self.particles.push(Particle {
                pos: at,
                vel: Vec2::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0)),
                life: 1.0,
                size: rng.random_range(5.0..25.0),
                color: fire_color(rng, 200),
                kind: ParticleKind::Fire,
            });
        }
    }

    /// Replace the crack overlay with a fresh shatter pattern around `center`
    pub fn shatter<R: Rng>(&mut self, center: Vec2, rng: &mut R) {
        self.cracks.clear();
        for _ in 0..MAIN_CRACKS {
            let angle = rng.random_range(0.0..TAU);
            let len = rng.random_range(200.0..500.0);
            let dir = Vec2::from_angle(angle);
            self.cracks.push(Crack {
                from: center,
                to: center + dir * len,
            });

            // Half the cracks branch
            if rng.random_bool(0.5) {
                let branch = Vec2::from_angle(angle + rng.random_range(-0.5..0.5));
                let start = center + dir * rng.random_range(0.0..len / 2.0);
                self.cracks.push(Crack {
                    from: start,
                    to: start + branch * rng.random_range(0.0..100.0),
                });
            }
        }
    }

    /// Move, age and retire particles
    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.life -= LIFE_DECAY;
            if p.kind == ParticleKind::Smoke {
                p.size += SMOKE_GROWTH;
            }
        }
        self.particles.retain(|p| p.life > 0.0);
    }
}
