//! # driftfield - pointer-driven interactive particle field
//!
//! A field of particles is seeded inside a flat disk, then continuously
//! perturbed by pointer proximity: particles near the projected pointer
//! spread outward and swell, then ease back to their rest position (or stay
//! put, depending on the interaction mode). The interaction model runs on
//! the CPU; rendering is plain instanced point billboards on the GPU.
//!
//! ## Quick Start
//!
//! ```ignore
//! use driftfield::prelude::*;
//!
//! fn main() {
//!     env_logger::init();
//!     driftfield::window::run(FieldConfig::default()).unwrap();
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Session
//!
//! [`Session`] is the context object that owns everything the interaction
//! model needs: the particle store, the camera, the per-particle animator,
//! and the current [`InteractionMode`]. The surrounding harness feeds it two
//! inputs and reads one output:
//!
//! - `pointer_moved(ndc, now)` on every pointer-move event,
//! - `toggle_mode()` on a click,
//! - `field().particles()` once per frame for rendering.
//!
//! ### Frame loop
//!
//! [`FrameDriver`] owns the clock and is the single scheduling point: each
//! tick advances elapsed/delta time, rolls the camera, and steps every
//! in-flight displacement. All state is touched from this one control flow,
//! so there is no locking anywhere.
//!
//! ```ignore
//! let mut session = Session::new(FieldConfig::default(), 16.0 / 9.0)?;
//! let mut driver = FrameDriver::new();
//!
//! // In your render loop:
//! driver.tick(&mut session);
//! for particle in session.field().particles() {
//!     // upload particle.position / particle.size
//! }
//! ```
//!
//! ### Interaction modes
//!
//! | Mode | Behavior after a spread |
//! |------|-------------------------|
//! | [`InteractionMode::Ordered`] | particle eases back to its rest position |
//! | [`InteractionMode::Free`] | particle stays where it was pushed |
//!
//! In both modes the particle's size swells during the spread and eases back
//! down to its base value afterwards.
//!
//! ### Threshold units
//!
//! The proximity threshold [`FieldConfig::radius_sq`] is compared against the
//! *squared* planar distance to the pointer. The default (0.1) reproduces the
//! original effect, which used an unsquared constant in that comparison. Use
//! [`FieldConfig::with_radius`] if you want the threshold to behave as a
//! linear radius instead.

pub mod animator;
pub mod camera;
pub mod error;
pub mod field;
pub mod frame;
pub mod input;
pub mod pointer;
pub mod proximity;
pub mod session;
pub mod window;

pub use animator::{DisplacementAnimator, Phase};
pub use camera::Camera;
pub use error::{ConfigError, GpuError, ProjectionError, RunError};
pub use field::{FieldConfig, Particle, ParticleField};
pub use frame::{FrameClock, FrameDriver};
pub use glam::{Vec2, Vec3};
pub use input::{PointerAction, PointerTracker};
pub use proximity::Hit;
pub use session::{InteractionMode, Session};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use driftfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animator::Phase;
    pub use crate::camera::Camera;
    pub use crate::field::{FieldConfig, Particle, ParticleField};
    pub use crate::frame::{FrameClock, FrameDriver};
    pub use crate::input::{PointerAction, PointerTracker};
    pub use crate::session::{InteractionMode, Session};
    pub use crate::{Vec2, Vec3};
}
