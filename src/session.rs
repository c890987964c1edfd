//! Session state for one particle field.
//!
//! [`Session`] is the single owner of the interaction model's state: the
//! particle store, the camera, the displacement animator, the interaction
//! mode, and the last known pointer position. The windowed harness (or a
//! test) feeds it pointer events and clock ticks; the renderer reads the
//! particle slice back each frame.
//!
//! Everything is touched from one control flow, so there is no interior
//! mutability and no locking.

use glam::{Vec2, Vec3};

use crate::animator::{DisplacementAnimator, Phase};
use crate::camera::Camera;
use crate::error::ConfigError;
use crate::field::{FieldConfig, ParticleField};
use crate::pointer;
use crate::proximity;

/// Whether displaced particles ease back to rest or stay put.
///
/// Toggled by a discrete user action (a click in the demo harness) and
/// sampled by the animator at trigger time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    /// Displaced particles return to their rest position.
    Ordered,
    /// Displaced particles stay where the spread pushed them.
    Free,
}

impl InteractionMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            InteractionMode::Ordered => InteractionMode::Free,
            InteractionMode::Free => InteractionMode::Ordered,
        }
    }
}

/// Owns the particle field and everything that perturbs it.
pub struct Session {
    config: FieldConfig,
    field: ParticleField,
    camera: Camera,
    animator: DisplacementAnimator,
    mode: InteractionMode,
    pointer_ndc: Option<Vec2>,
    pointer_world: Option<Vec3>,
}

impl Session {
    /// Create a session, seeding the field from the config.
    ///
    /// `aspect` is the initial viewport aspect ratio; keep it updated via
    /// [`Session::camera_mut`] on resize.
    pub fn new(config: FieldConfig, aspect: f32) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = ParticleField::seed(&config);
        Self::with_field(config, field, aspect)
    }

    /// Create a session around an explicit field, bypassing random seeding.
    pub fn with_field(
        config: FieldConfig,
        field: ParticleField,
        aspect: f32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let camera = Camera::new(aspect)?;
        let animator = DisplacementAnimator::new(&config, field.len());
        Ok(Self {
            config,
            field,
            camera,
            animator,
            mode: InteractionMode::Ordered,
            pointer_ndc: None,
            pointer_world: None,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// The particle store, for rendering.
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// The camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access, e.g. for aspect updates on resize.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The current interaction mode.
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Last pointer position in NDC, if any pointer event arrived yet.
    pub fn pointer_ndc(&self) -> Option<Vec2> {
        self.pointer_ndc
    }

    /// Last successfully projected pointer point on the particle plane.
    pub fn pointer_world(&self) -> Option<Vec3> {
        self.pointer_world
    }

    /// Animation phase of one particle.
    pub fn phase(&self, index: usize) -> Option<Phase> {
        self.animator.phase(index)
    }

    /// Handle a pointer-move event at time `now` (seconds of session time).
    ///
    /// Projects the pointer onto the particle plane, scans the field, and
    /// starts a spread for every particle inside the threshold. Returns the
    /// number of particles set in motion. A degenerate projection skips the
    /// whole update and returns 0.
    pub fn pointer_moved(&mut self, ndc: Vec2, now: f32) -> usize {
        self.pointer_ndc = Some(ndc);

        let point = match pointer::project_to_plane(ndc, &self.camera) {
            Ok(point) => point,
            Err(err) => {
                log::debug!("skipping pointer update: {err}");
                return 0;
            }
        };
        self.pointer_world = Some(point);

        let hits = proximity::affected(
            &self.field,
            Vec2::new(point.x, point.y),
            self.config.radius_sq,
        );
        for hit in &hits {
            self.animator.trigger(&self.field, hit, self.mode, now);
        }
        hits.len()
    }

    /// Toggle between [`InteractionMode::Ordered`] and
    /// [`InteractionMode::Free`]. Returns the new mode.
    pub fn toggle_mode(&mut self) -> InteractionMode {
        self.mode = self.mode.toggled();
        log::info!("interaction mode: {:?}", self.mode);
        self.mode
    }

    /// Per-tick update at `elapsed` seconds of session time: roll the
    /// camera and advance every in-flight displacement.
    ///
    /// Usually called through [`FrameDriver::tick`](crate::FrameDriver::tick);
    /// exposed so tests can drive session time explicitly.
    pub fn advance(&mut self, elapsed: f32) {
        self.camera.roll = elapsed * self.config.roll_rate;
        self.animator.advance(&mut self.field, elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4Swizzles;

    /// NDC that projects onto the given plane point for the session camera.
    fn ndc_for(session: &Session, world: Vec2) -> Vec2 {
        let clip = session.camera().view_proj() * world.extend(0.0).extend(1.0);
        clip.xy() / clip.w
    }

    fn test_session() -> Session {
        // roll_rate 0 keeps the camera fixed so NDC math stays exact
        // across advances.
        let config = FieldConfig::default().with_roll_rate(0.0);
        let field = ParticleField::from_rest_positions(&[Vec2::ZERO], config.size);
        Session::with_field(config, field, 1.0).unwrap()
    }

    #[test]
    fn test_toggle_roundtrip() {
        let mut session = test_session();
        assert_eq!(session.mode(), InteractionMode::Ordered);
        assert_eq!(session.toggle_mode(), InteractionMode::Free);
        assert_eq!(session.toggle_mode(), InteractionMode::Ordered);
    }

    #[test]
    fn test_pointer_move_triggers_and_ordered_returns() {
        let mut session = test_session();
        let ndc = ndc_for(&session, Vec2::new(0.05, 0.0));

        assert_eq!(session.pointer_moved(ndc, 0.0), 1);
        let point = session.pointer_world().unwrap();
        assert!((point.x - 0.05).abs() < 1e-3);
        assert!(point.y.abs() < 1e-3);

        let mut now = 0.0;
        while now < 1.2 {
            now += 1.0 / 60.0;
            session.advance(now);
        }
        let p = &session.field().particles()[0];
        assert!((Vec2::new(p.position.x, p.position.y) - p.rest).length() < 1e-3);
        assert_eq!(session.phase(0), Some(crate::animator::Phase::AtRest));
    }

    #[test]
    fn test_free_mode_never_returns() {
        let mut session = test_session();
        session.toggle_mode();
        let ndc = ndc_for(&session, Vec2::new(0.05, 0.0));

        assert_eq!(session.pointer_moved(ndc, 0.0), 1);
        session.advance(5.0);

        let p = &session.field().particles()[0];
        assert!(Vec2::new(p.position.x, p.position.y).length() > 1e-3);
        assert_eq!(session.phase(0), Some(crate::animator::Phase::Settled));
        assert!((p.size - session.config().size).abs() < 1e-5);
    }

    #[test]
    fn test_far_pointer_affects_nothing() {
        let mut session = test_session();
        let ndc = ndc_for(&session, Vec2::new(40.0, 40.0));
        assert_eq!(session.pointer_moved(ndc, 0.0), 0);
        assert_eq!(session.phase(0), Some(crate::animator::Phase::AtRest));
    }

    #[test]
    fn test_degenerate_projection_skips_update() {
        let mut session = test_session();
        // Put the camera inside the particle plane: the center ray runs
        // parallel to it.
        session.camera_mut().position = Vec3::new(5.0, 0.0, 0.0);

        assert_eq!(session.pointer_moved(Vec2::ZERO, 0.0), 0);
        assert!(session.pointer_world().is_none());
        let p = &session.field().particles()[0];
        assert_eq!(p.position, Vec3::ZERO);
    }

    #[test]
    fn test_advance_rolls_camera() {
        let config = FieldConfig::default().with_count(1).with_seed(1);
        let mut session = Session::new(config, 1.0).unwrap();
        session.advance(2.0);
        assert!((session.camera().roll - 2.0 * 0.05).abs() < 1e-6);
    }
}
