//! Motion descriptions
//!
//! A [`Motion`] describes how a box moves over the normalized time interval
//! `t ∈ [0, 1]`: a static reference [`Pose`] plus a translation and Euler
//! rotation that both grow linearly with `t` around a rotation center.
//!
//! For a local point `p`, with `c` the rotation center:
//!
//! ```text
//! R(t)    = Rz(angles.z * t) * Ry(angles.y * t) * Rx(angles.x * t)
//! A(t)(p) = R(t) * (p - c) + c + translation * t
//! O(q)    = origin.rotation * (q - c) + c + origin.translation
//! world   = O(A(t)(p))
//! ```
//!
//! The search only ever needs the inverse `A(t)⁻¹(O⁻¹(q))`, which
//! [`MatrixLookupTable`] provides per motion kind.

mod table;

pub use table::{MatrixLookupTable, MotionKind, MAX_HALF_ROTATIONS};

use glam::{DMat4, DQuat, DVec3};

use crate::geometry::Axis;

/// Static rigid pose: rotation about the motion's rotation center, then translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub rotation: DQuat,
    pub translation: DVec3,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        rotation: DQuat::IDENTITY,
        translation: DVec3::ZERO,
    };

    /// Create a pose from a rotation and a translation.
    pub fn from_rotation_translation(rotation: DQuat, translation: DVec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Create a pure translation pose.
    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            rotation: DQuat::IDENTITY,
            translation,
        }
    }

    /// Matrix applying this pose with rotations taken about `center`.
    pub fn to_matrix_about(&self, center: DVec3) -> DMat4 {
        DMat4::from_translation(center + self.translation)
            * DMat4::from_quat(self.rotation)
            * DMat4::from_translation(-center)
    }

    /// Matrix undoing this pose with rotations taken about `center`.
    pub fn inverse_matrix_about(&self, center: DVec3) -> DMat4 {
        DMat4::from_translation(center)
            * DMat4::from_quat(self.rotation.conjugate())
            * DMat4::from_translation(-center - self.translation)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Time-parameterized motion of a box over `t ∈ [0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    /// Total displacement reached at `t = 1`.
    pub translation: DVec3,
    /// Total rotation angles in radians around X, Y and Z reached at `t = 1`.
    pub rotation: DVec3,
    /// Pivot for both the animated rotation and the origin rotation.
    pub rotation_center: DVec3,
    /// Reference pose the motion starts from.
    pub origin: Pose,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            translation: DVec3::ZERO,
            rotation: DVec3::ZERO,
            rotation_center: DVec3::ZERO,
            origin: Pose::IDENTITY,
        }
    }
}

impl Motion {
    /// Create a motion that does not move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a displacement reached at `t = 1`.
    pub fn translate(mut self, offset: DVec3) -> Self {
        self.translation += offset;
        self
    }

    /// Add Euler rotation angles (radians) reached at `t = 1`.
    pub fn rotate(mut self, angles: DVec3) -> Self {
        self.rotation += angles;
        self
    }

    /// Add a rotation of `angle` radians about a single axis.
    pub fn rotate_about(self, axis: Axis, angle: f64) -> Self {
        self.rotate(axis.unit() * angle)
    }

    /// Set the rotation center.
    pub fn around(mut self, center: DVec3) -> Self {
        self.rotation_center = center;
        self
    }

    /// Set the static reference pose.
    pub fn with_origin(mut self, origin: Pose) -> Self {
        self.origin = origin;
        self
    }

    /// Forward transform of a local point at time `t`.
    pub fn apply(&self, point: DVec3, t: f64) -> DVec3 {
        let c = self.rotation_center;
        let animated = rotation_at(self.rotation, t) * (point - c) + c + self.translation * t;
        self.origin.rotation * (animated - c) + c + self.origin.translation
    }
}

/// Rotation reached at `t` for Euler `angles` applied X first, then Y, then Z.
pub(crate) fn rotation_at(angles: DVec3, t: f64) -> DQuat {
    DQuat::from_rotation_z(angles.z * t)
        * DQuat::from_rotation_y(angles.y * t)
        * DQuat::from_rotation_x(angles.x * t)
}
