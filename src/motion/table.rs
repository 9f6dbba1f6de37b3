//! Classified motion lookup table.

use std::f64::consts::PI;

use glam::{DMat4, DQuat, DVec3};

use super::{rotation_at, Motion, Pose};
use crate::error::MotionError;
use crate::geometry::Axis;

/// Slack subtracted before rounding half-rotation counts up, so an angle that
/// is an exact multiple of π does not gain a window from rounding noise.
const HALF_TURN_EPSILON: f64 = 1e-9;

/// Upper limit on half-rotation windows, reached by angles above about 3217 rad.
pub const MAX_HALF_ROTATIONS: u32 = 1024;

/// Maximum deviation from unit length accepted for the origin rotation.
const UNIT_QUAT_TOLERANCE: f64 = 1e-6;

/// Shape of a motion, which decides how the crossing search samples time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionKind {
    /// No translation and no rotation.
    Static,
    /// Pure linear translation.
    Translation { offset: DVec3 },
    /// Rotation about a single axis through the rotation center, no translation.
    Rotation { axis: Axis, angle: f64 },
    /// Any other combination of translation and rotations.
    Composite { offset: DVec3, angles: DVec3 },
}

impl MotionKind {
    /// Classify a displacement and Euler rotation.
    pub fn classify(offset: DVec3, angles: DVec3) -> Self {
        let mut rotating = Axis::ALL
            .into_iter()
            .filter(|axis| axis.component(angles) != 0.0);
        let first = rotating.next();
        let second = rotating.next();

        match (offset != DVec3::ZERO, first, second) {
            (false, None, _) => MotionKind::Static,
            (true, None, _) => MotionKind::Translation { offset },
            (false, Some(axis), None) => MotionKind::Rotation {
                axis,
                angle: axis.component(angles),
            },
            _ => MotionKind::Composite { offset, angles },
        }
    }

    /// True when the motion has no rotation component.
    pub fn is_simple(&self) -> bool {
        matches!(self, MotionKind::Static | MotionKind::Translation { .. })
    }

    /// Number of half-rotation windows the search splits `[0, 1]` into,
    /// capped at [`MAX_HALF_ROTATIONS`].
    pub fn half_rotations(&self) -> u32 {
        match *self {
            MotionKind::Static | MotionKind::Translation { .. } => 1,
            MotionKind::Rotation { angle, .. } => half_turns(angle.abs()),
            MotionKind::Composite { angles, .. } => half_turns(angles.abs().element_sum()),
        }
    }
}

fn half_turns(total_angle: f64) -> u32 {
    (total_angle / PI - HALF_TURN_EPSILON)
        .ceil()
        .clamp(1.0, f64::from(MAX_HALF_ROTATIONS)) as u32
}

fn axis_rotation(axis: Axis, angle: f64) -> DQuat {
    match axis {
        Axis::X => DQuat::from_rotation_x(angle),
        Axis::Y => DQuat::from_rotation_y(angle),
        Axis::Z => DQuat::from_rotation_z(angle),
    }
}

/// Precomputed inverse transforms for one [`Motion`].
///
/// Built once per moving object and read-only while searching.
#[derive(Debug, Clone)]
pub struct MatrixLookupTable {
    kind: MotionKind,
    rotation_center: DVec3,
    origin: Pose,
    origin_inverse: DMat4,
    half_rotations: u32,
}

impl MatrixLookupTable {
    /// Validate and classify a motion.
    pub fn new(motion: &Motion) -> Result<Self, MotionError> {
        validate(motion)?;

        let kind = MotionKind::classify(motion.translation, motion.rotation);
        let half_rotations = kind.half_rotations();
        tracing::trace!(?kind, half_rotations, "classified motion");

        Ok(Self {
            kind,
            rotation_center: motion.rotation_center,
            origin: motion.origin,
            origin_inverse: motion.origin.inverse_matrix_about(motion.rotation_center),
            half_rotations,
        })
    }

    pub fn kind(&self) -> MotionKind {
        self.kind
    }

    pub fn is_simple(&self) -> bool {
        self.kind.is_simple()
    }

    /// Whether the motion translates along `axis`.
    pub fn has_translation(&self, axis: Axis) -> bool {
        match self.kind {
            MotionKind::Translation { offset } | MotionKind::Composite { offset, .. } => {
                axis.component(offset) != 0.0
            }
            MotionKind::Static | MotionKind::Rotation { .. } => false,
        }
    }

    /// Whether the motion rotates around `axis`.
    pub fn has_rotation(&self, axis: Axis) -> bool {
        match self.kind {
            MotionKind::Rotation { axis: rotating, .. } => rotating == axis,
            MotionKind::Composite { angles, .. } => axis.component(angles) != 0.0,
            MotionKind::Static | MotionKind::Translation { .. } => false,
        }
    }

    pub fn rotation_center(&self) -> DVec3 {
        self.rotation_center
    }

    /// Static reference pose.
    pub fn origin(&self) -> Pose {
        self.origin
    }

    /// Matrix undoing the reference pose.
    pub fn origin_inverse(&self) -> DMat4 {
        self.origin_inverse
    }

    pub fn half_rotations(&self) -> u32 {
        self.half_rotations
    }

    /// Map a world point into the moving box's local frame at time `t`.
    #[inline]
    pub fn inverse_point(&self, point: DVec3, t: f64) -> DVec3 {
        let local = self.origin_inverse.transform_point3(point);
        let c = self.rotation_center;
        match self.kind {
            MotionKind::Static => local,
            MotionKind::Translation { offset } => local - offset * t,
            MotionKind::Rotation { axis, angle } => c + axis_rotation(axis, -angle * t) * (local - c),
            MotionKind::Composite { offset, angles } => {
                c + rotation_at(angles, t).conjugate() * (local - c - offset * t)
            }
        }
    }

    /// Full world-to-local matrix at time `t`.
    pub fn inverse_at(&self, t: f64) -> DMat4 {
        let c = self.rotation_center;
        let animated = match self.kind {
            MotionKind::Static => return self.origin_inverse,
            MotionKind::Translation { offset } => DMat4::from_translation(-offset * t),
            MotionKind::Rotation { axis, angle } => {
                DMat4::from_translation(c)
                    * DMat4::from_quat(axis_rotation(axis, -angle * t))
                    * DMat4::from_translation(-c)
            }
            MotionKind::Composite { offset, angles } => {
                DMat4::from_translation(c)
                    * DMat4::from_quat(rotation_at(angles, t).conjugate())
                    * DMat4::from_translation(-c - offset * t)
            }
        };
        animated * self.origin_inverse
    }
}

fn validate(motion: &Motion) -> Result<(), MotionError> {
    let fields = [
        ("translation", motion.translation),
        ("rotation", motion.rotation),
        ("rotation_center", motion.rotation_center),
        ("origin.translation", motion.origin.translation),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(MotionError::NonFinite { field });
        }
    }

    if !motion.origin.rotation.is_finite() {
        return Err(MotionError::NonFinite {
            field: "origin.rotation",
        });
    }
    let length = motion.origin.rotation.length();
    if (length - 1.0).abs() > UNIT_QUAT_TOLERANCE {
        return Err(MotionError::UnnormalizedOrigin { length });
    }

    Ok(())
}
