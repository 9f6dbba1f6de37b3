//! Plane Sweep
//!
//! Continuous collision detection between a moving axis-aligned box and a
//! static one, using diagonal planes fixed to the moving box and a bisection
//! search over the motion's time interval `t ∈ [0, 1]`.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **geometry** - Boxes, axes and the fixed corner enumeration
//! 2. **motion** - Motion description and its classified lookup table
//! 3. **sweep** - Planes, plane cache and the earliest-contact search
//! 4. **error** - Validation errors for motion descriptions
//!
//! # Example
//!
//! ```
//! use glam::DVec3;
//! use plane_sweep::{earliest_collision, Aabb, MatrixLookupTable, Motion, PlaneCache, SweepConfig, Target};
//!
//! let moving = Aabb::new(DVec3::ZERO, DVec3::ONE);
//! let wall = Aabb::new(DVec3::new(1.0, 0.0, 0.0), DVec3::new(2.0, 1.0, 1.0));
//!
//! let table = MatrixLookupTable::new(&Motion::new().translate(DVec3::new(2.0, 0.0, 0.0)))?;
//! let mut cache = PlaneCache::new(moving);
//! let t = earliest_collision(&mut cache, &Target::new(wall), None, &table, &SweepConfig::default());
//! assert!(t.is_some());
//! # Ok::<(), plane_sweep::MotionError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod motion;
pub mod sweep;

pub use error::MotionError;
pub use geometry::{Aabb, Axis, BoxCorner};
pub use motion::{MatrixLookupTable, Motion, MotionKind, Pose, MAX_HALF_ROTATIONS};
pub use sweep::{
    build_planes, earliest_collision, Plane, PlaneAxes, PlaneCache, PlaneSide, Side, SweepConfig,
    Target, MAX_WINDOWS,
};

// Re-export glam for convenience
pub use glam;
