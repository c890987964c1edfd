//! Particle store and disk seeding.
//!
//! A [`ParticleField`] holds a fixed set of particles created once at
//! startup. Each particle keeps its immutable rest position (assigned at
//! seeding, never changed) alongside its current position and visual size,
//! which only the displacement animator mutates.
//!
//! # Example
//!
//! ```ignore
//! let config = FieldConfig::default()
//!     .with_count(5_000)
//!     .with_group_diameter(3.0)
//!     .with_seed(42);
//!
//! let field = ParticleField::seed(&config);
//! assert_eq!(field.len(), 5_000);
//! ```

use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

use crate::error::ConfigError;

/// Configuration for a particle field session.
///
/// Defaults reproduce the original effect: 5000 particles in a disk of
/// diameter 3, base size 0.025, proximity threshold 0.1 in squared units.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Number of particles, fixed for the session.
    pub count: usize,
    /// Base visual size of a particle.
    pub size: f32,
    /// Visual size at the peak of a spread.
    pub enlarged_size: f32,
    /// Diameter of the seeding disk.
    pub group_diameter: f32,
    /// Proximity threshold, compared against *squared* planar distance.
    ///
    /// The default 0.1 preserves the original comparison, where the constant
    /// was never squared. See [`FieldConfig::with_radius`] for the corrected
    /// interpretation.
    pub radius_sq: f32,
    /// Fraction of the pointer-to-particle offset applied as displacement.
    pub spread_factor: f32,
    /// Seconds for the outward spread.
    pub spread_duration: f32,
    /// Seconds for size recovery and (in Ordered mode) the return home.
    pub settle_duration: f32,
    /// Camera roll in radians per elapsed second.
    pub roll_rate: f32,
    /// RNG seed for rest positions. `None` derives one from the clock.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 5000,
            size: 0.025,
            enlarged_size: 0.05,
            group_diameter: 3.0,
            radius_sq: 0.1,
            spread_factor: 0.5,
            spread_duration: 0.1,
            settle_duration: 1.0,
            roll_rate: 0.05,
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Create a configuration with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of particles.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the base particle size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the diameter of the seeding disk.
    pub fn with_group_diameter(mut self, diameter: f32) -> Self {
        self.group_diameter = diameter;
        self
    }

    /// Set the proximity threshold directly in squared units.
    pub fn with_radius_sq(mut self, radius_sq: f32) -> Self {
        self.radius_sq = radius_sq;
        self
    }

    /// Set the proximity threshold as a linear radius.
    ///
    /// Stores `radius * radius`, so the comparison behaves as a true
    /// distance check instead of the original unsquared constant.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius_sq = radius * radius;
        self
    }

    /// Set the RNG seed for deterministic rest positions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the camera roll rate in radians per elapsed second.
    pub fn with_roll_rate(mut self, rate: f32) -> Self {
        self.roll_rate = rate;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::ZeroParticleCount);
        }
        if !(self.group_diameter > 0.0 && self.group_diameter.is_finite()) {
            return Err(ConfigError::InvalidDiameter(self.group_diameter));
        }
        if !(self.radius_sq >= 0.0 && self.radius_sq.is_finite()) {
            return Err(ConfigError::InvalidThreshold(self.radius_sq));
        }
        Ok(())
    }
}

/// One particle of the field.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// Seed position inside the disk. Never changes after creation.
    pub rest: Vec2,
    /// Current position. The particle plane is z = 0; z stays fixed.
    pub position: Vec3,
    /// Current visual size.
    pub size: f32,
}

/// Fixed-size particle store.
///
/// Particles are created once and never destroyed, so indices handed out by
/// the proximity scan stay valid for the whole session.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Seed `config.count` particles uniformly inside the disk of radius
    /// `config.group_diameter / 2` on the z = 0 plane.
    pub fn seed(config: &FieldConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42)
        });
        let mut rng = SmallRng::seed_from_u64(seed);
        let radius = config.group_diameter / 2.0;

        let particles = (0..config.count)
            .map(|_| {
                let theta = rng.gen_range(0.0..TAU);
                // sqrt for uniform density over the disk area
                let r = radius * rng.gen::<f32>().sqrt();
                let rest = Vec2::new(r * theta.cos(), r * theta.sin());
                Particle {
                    rest,
                    position: rest.extend(0.0),
                    size: config.size,
                }
            })
            .collect();

        Self { particles }
    }

    /// Build a field from explicit rest positions.
    ///
    /// Useful for tests and custom layouts; every particle starts at its
    /// rest position with the given base size.
    pub fn from_rest_positions(rests: &[Vec2], size: f32) -> Self {
        let particles = rests
            .iter()
            .map(|&rest| Particle {
                rest,
                position: rest.extend(0.0),
                size,
            })
            .collect();
        Self { particles }
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Read access to all particles, in seeding order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Read access to one particle.
    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_stays_inside_disk() {
        let config = FieldConfig::default().with_count(2000).with_seed(7);
        let field = ParticleField::seed(&config);
        let radius = config.group_diameter / 2.0;

        assert_eq!(field.len(), 2000);
        for particle in field.particles() {
            assert!(particle.rest.length_squared() <= radius * radius + 1e-4);
            assert_eq!(particle.position.z, 0.0);
            assert_eq!(particle.size, config.size);
        }
    }

    #[test]
    fn test_seed_deterministic_with_fixed_seed() {
        let config = FieldConfig::default().with_count(100).with_seed(99);
        let a = ParticleField::seed(&config);
        let b = ParticleField::seed(&config);

        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.rest, pb.rest);
        }
    }

    #[test]
    fn test_from_rest_positions() {
        let field = ParticleField::from_rest_positions(&[Vec2::new(0.5, -0.5)], 0.025);
        assert_eq!(field.len(), 1);
        let p = field.get(0).unwrap();
        assert_eq!(p.position, Vec3::new(0.5, -0.5, 0.0));
    }

    #[test]
    fn test_with_radius_squares() {
        let config = FieldConfig::default().with_radius(0.1);
        assert!((config.radius_sq - 0.01).abs() < 1e-7);

        let literal = FieldConfig::default().with_radius_sq(0.1);
        assert_eq!(literal.radius_sq, 0.1);
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        assert_eq!(
            FieldConfig::default().with_count(0).validate(),
            Err(ConfigError::ZeroParticleCount)
        );
        assert!(FieldConfig::default()
            .with_group_diameter(-1.0)
            .validate()
            .is_err());
        assert!(FieldConfig::default()
            .with_radius_sq(-0.1)
            .validate()
            .is_err());
        assert!(FieldConfig::default().validate().is_ok());
    }
}
