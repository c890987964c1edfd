//! End-to-end tests for the pointer/particle interaction model, driven
//! through the public `Session` API with explicit timestamps.

use driftfield::{
    pointer, proximity, Camera, FieldConfig, InteractionMode, ParticleField, Phase, Session, Vec2,
    Vec3,
};
use glam::Vec4Swizzles;

/// NDC that projects onto the given plane point for the session camera.
fn ndc_for(session: &Session, world: Vec2) -> Vec2 {
    let clip = session.camera().view_proj() * world.extend(0.0).extend(1.0);
    clip.xy() / clip.w
}

/// A session with one particle at the origin and a camera that never rolls,
/// so pointer math stays exact across advances.
fn single_particle_session() -> Session {
    let config = FieldConfig::default().with_roll_rate(0.0);
    let field = ParticleField::from_rest_positions(&[Vec2::ZERO], config.size);
    Session::with_field(config, field, 1.0).unwrap()
}

fn step_to(session: &mut Session, mut now: f32, until: f32) {
    while now < until {
        now += 1.0 / 60.0;
        session.advance(now);
    }
}

#[test]
fn seeded_rest_positions_stay_inside_disk() {
    let config = FieldConfig::default().with_seed(2024);
    let session = Session::new(config.clone(), 16.0 / 9.0).unwrap();
    let radius_sq = (config.group_diameter / 2.0).powi(2);

    assert_eq!(session.field().len(), config.count);
    for particle in session.field().particles() {
        assert!(particle.rest.length_squared() <= radius_sq + 1e-4);
    }
}

#[test]
fn pointer_projection_is_pure() {
    let camera = Camera::new(16.0 / 9.0).unwrap();
    let ndc = Vec2::new(-0.4, 0.7);
    assert_eq!(
        pointer::project_to_plane(ndc, &camera).unwrap(),
        pointer::project_to_plane(ndc, &camera).unwrap()
    );
}

#[test]
fn spec_scenario_single_particle() {
    // N=1 at rest (0,0); pointer point (0.05, 0, 0); threshold 0.1 squared
    // units: affected, direction (-0.05, 0), spread target (-0.025, 0).
    let mut session = single_particle_session();
    let ndc = ndc_for(&session, Vec2::new(0.05, 0.0));

    assert_eq!(session.pointer_moved(ndc, 0.0), 1);
    assert_eq!(session.phase(0), Some(Phase::Spreading));

    let spread = session.config().spread_duration;
    session.advance(spread);
    let p = &session.field().particles()[0];
    assert!((p.position.x - (-0.025)).abs() < 1e-3);
    assert!(p.position.y.abs() < 1e-3);
}

#[test]
fn ordered_particle_returns_to_rest() {
    let mut session = single_particle_session();
    let ndc = ndc_for(&session, Vec2::new(0.05, 0.0));
    assert_eq!(session.pointer_moved(ndc, 0.0), 1);

    // Left alone for longer than spread + settle.
    step_to(&mut session, 0.0, 1.15);

    let p = &session.field().particles()[0];
    assert!((Vec2::new(p.position.x, p.position.y) - p.rest).length() < 1e-3);
    assert!((p.size - session.config().size).abs() < 1e-4);
    assert_eq!(session.phase(0), Some(Phase::AtRest));
}

#[test]
fn free_particle_stays_displaced() {
    let mut session = single_particle_session();
    assert_eq!(session.toggle_mode(), InteractionMode::Free);

    let ndc = ndc_for(&session, Vec2::new(0.05, 0.0));
    assert_eq!(session.pointer_moved(ndc, 0.0), 1);
    step_to(&mut session, 0.0, 2.0);

    let p = &session.field().particles()[0];
    assert!(Vec2::new(p.position.x, p.position.y).length() > 1e-3);
    assert!((p.size - session.config().size).abs() < 1e-4);
    assert_eq!(session.phase(0), Some(Phase::Settled));
}

#[test]
fn mode_toggle_round_trips() {
    let mut session = single_particle_session();
    let initial = session.mode();
    session.toggle_mode();
    session.toggle_mode();
    assert_eq!(session.mode(), initial);
}

#[test]
fn far_pointer_classifies_no_particles() {
    let mut session = single_particle_session();
    let ndc = ndc_for(&session, Vec2::new(60.0, -60.0));
    assert_eq!(session.pointer_moved(ndc, 0.0), 0);
}

#[test]
fn degenerate_ray_leaves_state_untouched() {
    let mut session = single_particle_session();
    session.camera_mut().position = Vec3::new(5.0, 0.0, 0.0);

    assert_eq!(session.pointer_moved(Vec2::ZERO, 0.0), 0);
    assert!(session.pointer_world().is_none());
    assert_eq!(session.field().particles()[0].position, Vec3::ZERO);
}

#[test]
fn threshold_units_literal_vs_corrected() {
    // A particle 0.15 away: inside the literal squared-units threshold of
    // 0.1, outside the corrected radius of 0.1.
    let field = ParticleField::from_rest_positions(&[Vec2::new(0.15, 0.0)], 0.025);

    let literal = FieldConfig::default().with_radius_sq(0.1);
    assert_eq!(
        proximity::affected(&field, Vec2::ZERO, literal.radius_sq).len(),
        1
    );

    let corrected = FieldConfig::default().with_radius(0.1);
    assert!(proximity::affected(&field, Vec2::ZERO, corrected.radius_sq).is_empty());
}

#[test]
fn boundary_is_strictly_exclusive() {
    let field = ParticleField::from_rest_positions(&[Vec2::new(0.5, 0.0)], 0.025);
    // d^2 from the origin is exactly 0.25.
    assert!(proximity::affected(&field, Vec2::ZERO, 0.25).is_empty());
    assert_eq!(proximity::affected(&field, Vec2::ZERO, 0.2500001).len(), 1);
}

#[test]
fn rapid_retriggers_keep_particle_recoverable() {
    // Wiggle the pointer across the particle repeatedly, then leave it
    // alone; Ordered mode must still bring it home.
    let mut session = single_particle_session();
    let mut now = 0.0;
    for i in 0..20 {
        let x = if i % 2 == 0 { 0.04 } else { -0.04 };
        let ndc = ndc_for(&session, Vec2::new(x, 0.0));
        session.pointer_moved(ndc, now);
        now += 0.03;
        session.advance(now);
    }

    step_to(&mut session, now, now + 1.2);
    let p = &session.field().particles()[0];
    assert!((Vec2::new(p.position.x, p.position.y) - p.rest).length() < 1e-3);
    assert_eq!(session.phase(0), Some(Phase::AtRest));
}
