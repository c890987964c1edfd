//! Proximity detection between the pointer and the field.
//!
//! A single O(N) scan over all particles, run once per pointer-move event
//! (not per frame). The threshold is compared against the squared planar
//! distance with a strict `<`, so a particle exactly at the boundary is
//! never affected.

use glam::Vec2;

use crate::field::ParticleField;

/// One particle affected by the current pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Index into the field's particle slice.
    pub index: usize,
    /// Planar offset from the pointer point to the particle,
    /// `(particle.x - point.x, particle.y - point.y)`. Points away from
    /// the pointer; the animator scales it into the spread displacement.
    pub direction: Vec2,
}

/// Scan every particle against the projected pointer point.
///
/// `radius_sq` is in squared units; see
/// [`FieldConfig::radius_sq`](crate::FieldConfig::radius_sq) for the
/// inherited unit quirk.
pub fn affected(field: &ParticleField, point: Vec2, radius_sq: f32) -> Vec<Hit> {
    let mut hits = Vec::new();
    for (index, particle) in field.particles().iter().enumerate() {
        let direction = Vec2::new(particle.position.x - point.x, particle.position.y - point.y);
        if direction.length_squared() < radius_sq {
            hits.push(Hit { index, direction });
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_particle_at(x: f32, y: f32) -> ParticleField {
        ParticleField::from_rest_positions(&[Vec2::new(x, y)], 0.025)
    }

    #[test]
    fn test_spec_scenario() {
        // Particle at rest (0,0), pointer point (0.05, 0), threshold 0.1:
        // d^2 = 0.0025 < 0.1, direction (-0.05, 0).
        let field = single_particle_at(0.0, 0.0);
        let hits = affected(&field, Vec2::new(0.05, 0.0), 0.1);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, 0);
        assert!((hits[0].direction - Vec2::new(-0.05, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_boundary_is_exclusive() {
        // d^2 is exactly the threshold: strict `<` leaves it unaffected.
        let field = single_particle_at(0.5, 0.0);
        assert!(affected(&field, Vec2::ZERO, 0.25).is_empty());
        assert_eq!(affected(&field, Vec2::ZERO, 0.250001).len(), 1);
    }

    #[test]
    fn test_far_pointer_affects_nothing() {
        let field = ParticleField::from_rest_positions(
            &[Vec2::new(0.0, 0.0), Vec2::new(1.0, -1.0), Vec2::new(-0.5, 0.5)],
            0.025,
        );
        assert!(affected(&field, Vec2::new(50.0, 50.0), 0.1).is_empty());
    }

    #[test]
    fn test_scan_uses_current_position_not_rest() {
        let mut field = single_particle_at(0.0, 0.0);
        field.particles_mut()[0].position.x = 10.0;
        assert!(affected(&field, Vec2::ZERO, 0.1).is_empty());
    }
}
