//! Per-particle displacement animation.
//!
//! Instead of handing targets to an external tweening engine, every particle
//! carries an explicit phase machine with timestamps:
//!
//! ```text
//! AtRest -> Spreading -> Returning -> AtRest      (Ordered)
//! AtRest -> Spreading -> Shrinking -> Settled     (Free)
//! ```
//!
//! A trigger during any phase replaces the in-flight motion, restarting the
//! spread from the particle's current position and size. The mode is
//! sampled at trigger time, so toggling mid-flight does not reroute
//! particles already in motion.
//!
//! All interpolation uses ease-out quadratic, and time is an explicit
//! parameter everywhere, which keeps the whole timeline steppable in tests.

use glam::{Vec2, Vec3};

use crate::field::{FieldConfig, ParticleField};
use crate::proximity::Hit;
use crate::session::InteractionMode;

/// Ease-out quadratic: fast start, gentle stop.
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Observable animation phase of one particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// At its rest position at base size.
    AtRest,
    /// Moving outward from the pointer, size swelling.
    Spreading,
    /// Easing back to the rest position, size recovering (Ordered).
    Returning,
    /// Size recovering in place, position holds (Free).
    Shrinking,
    /// Displaced and done animating (Free).
    Settled,
}

#[derive(Clone, Copy, Debug)]
enum Motion {
    AtRest,
    Spreading {
        started: f32,
        pos_from: Vec2,
        pos_to: Vec2,
        size_from: f32,
        return_home: bool,
    },
    Returning {
        started: f32,
        pos_from: Vec2,
        size_from: f32,
    },
    Shrinking {
        started: f32,
        size_from: f32,
    },
    Settled,
}

impl Motion {
    fn phase(&self) -> Phase {
        match self {
            Motion::AtRest => Phase::AtRest,
            Motion::Spreading { .. } => Phase::Spreading,
            Motion::Returning { .. } => Phase::Returning,
            Motion::Shrinking { .. } => Phase::Shrinking,
            Motion::Settled => Phase::Settled,
        }
    }
}

/// Drives displacement and size easing for every particle in a field.
///
/// The motion vector is created with the same length as the field and the
/// two are always advanced together, so indexing never leaves bounds.
pub struct DisplacementAnimator {
    motions: Vec<Motion>,
    base_size: f32,
    enlarged_size: f32,
    spread_factor: f32,
    spread_duration: f32,
    settle_duration: f32,
}

impl DisplacementAnimator {
    /// Create an animator for a field of `len` particles, all at rest.
    pub fn new(config: &FieldConfig, len: usize) -> Self {
        Self {
            motions: vec![Motion::AtRest; len],
            base_size: config.size,
            enlarged_size: config.enlarged_size,
            spread_factor: config.spread_factor,
            spread_duration: config.spread_duration,
            settle_duration: config.settle_duration,
        }
    }

    /// Observable phase of one particle.
    pub fn phase(&self, index: usize) -> Option<Phase> {
        self.motions.get(index).map(Motion::phase)
    }

    /// Whether no particle is currently mid-animation.
    pub fn is_idle(&self) -> bool {
        self.motions
            .iter()
            .all(|m| matches!(m, Motion::AtRest | Motion::Settled))
    }

    /// Start (or restart) a spread for one affected particle at time `now`.
    ///
    /// A hit whose index lies outside the field (stale, or built against a
    /// different field) is ignored.
    pub fn trigger(&mut self, field: &ParticleField, hit: &Hit, mode: InteractionMode, now: f32) {
        let (Some(particle), Some(motion)) = (field.get(hit.index), self.motions.get_mut(hit.index))
        else {
            return;
        };
        let current = Vec2::new(particle.position.x, particle.position.y);

        *motion = Motion::Spreading {
            started: now,
            pos_from: current,
            pos_to: current + hit.direction * self.spread_factor,
            size_from: particle.size,
            return_home: mode == InteractionMode::Ordered,
        };
    }

    /// Advance every in-flight motion to time `now`, writing current
    /// positions and sizes into the field.
    ///
    /// Phase transitions are carried through within a single call, so a
    /// large step settles the whole timeline rather than stalling one phase
    /// per tick.
    pub fn advance(&mut self, field: &mut ParticleField, now: f32) {
        for (motion, particle) in self.motions.iter_mut().zip(field.particles_mut()) {
            loop {
                match *motion {
                    Motion::AtRest | Motion::Settled => break,

                    Motion::Spreading {
                        started,
                        pos_from,
                        pos_to,
                        size_from,
                        return_home,
                    } => {
                        let t = progress(now, started, self.spread_duration);
                        let k = ease_out_quad(t);
                        set_planar(particle, pos_from.lerp(pos_to, k));
                        particle.size = size_from + (self.enlarged_size - size_from) * k;

                        if t < 1.0 {
                            break;
                        }
                        let started = started + self.spread_duration;
                        *motion = if return_home {
                            Motion::Returning {
                                started,
                                pos_from: pos_to,
                                size_from: self.enlarged_size,
                            }
                        } else {
                            Motion::Shrinking {
                                started,
                                size_from: self.enlarged_size,
                            }
                        };
                    }

                    Motion::Returning {
                        started,
                        pos_from,
                        size_from,
                    } => {
                        let t = progress(now, started, self.settle_duration);
                        let k = ease_out_quad(t);
                        set_planar(particle, pos_from.lerp(particle.rest, k));
                        particle.size = size_from + (self.base_size - size_from) * k;

                        if t < 1.0 {
                            break;
                        }
                        set_planar(particle, particle.rest);
                        particle.size = self.base_size;
                        *motion = Motion::AtRest;
                    }

                    Motion::Shrinking { started, size_from } => {
                        let t = progress(now, started, self.settle_duration);
                        particle.size =
                            size_from + (self.base_size - size_from) * ease_out_quad(t);

                        if t < 1.0 {
                            break;
                        }
                        particle.size = self.base_size;
                        *motion = Motion::Settled;
                    }
                }
            }
        }
    }
}

fn set_planar(particle: &mut crate::field::Particle, planar: Vec2) {
    particle.position = Vec3::new(planar.x, planar.y, particle.position.z);
}

fn progress(now: f32, started: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        1.0
    } else {
        ((now - started) / duration).clamp(0.0, 1.0)
    }
}
