//! Per-box plane cache.
//!
//! Each axis contributes the two diagonal planes of the box that contain the
//! axis direction. A point rotating around that axis, or translating across
//! it, has to cross one of them before it can reach the box's center.

use glam::DVec3;

use crate::geometry::{Aabb, Axis, BoxCorner};
use crate::motion::MatrixLookupTable;

use super::plane::Plane;

/// Which of an axis' two diagonal planes to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneSide {
    Near,
    Far,
}

impl PlaneSide {
    /// Corner quadruple spanning the plane. The first three define origin and
    /// normal; the fourth is coplanar.
    pub const fn corners(axis: Axis, side: PlaneSide) -> [BoxCorner; 4] {
        use BoxCorner::*;
        match (axis, side) {
            (Axis::X, PlaneSide::Near) => [EastUpSouth, EastDownNorth, WestUpSouth, WestDownNorth],
            (Axis::X, PlaneSide::Far) => [EastDownSouth, EastUpNorth, WestDownSouth, WestUpNorth],
            (Axis::Y, PlaneSide::Near) => [EastUpSouth, WestUpNorth, EastDownSouth, WestDownNorth],
            (Axis::Y, PlaneSide::Far) => [EastUpNorth, WestUpSouth, EastDownNorth, WestDownSouth],
            (Axis::Z, PlaneSide::Near) => [EastUpSouth, WestDownSouth, EastUpNorth, WestDownNorth],
            (Axis::Z, PlaneSide::Far) => [WestUpSouth, EastDownSouth, WestUpNorth, EastDownNorth],
        }
    }
}

/// Axes whose plane pairs are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaneAxes {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl PlaneAxes {
    /// Axes needed to search the motion described by `table`.
    pub fn for_table(table: &MatrixLookupTable) -> Self {
        let mut axes = Self {
            x: table.has_rotation(Axis::X),
            y: table.has_rotation(Axis::Y),
            z: table.has_rotation(Axis::Z),
        };

        // A translation is invisible to the planes containing its own axis.
        if table.has_translation(Axis::X) && !axes.y && !axes.z {
            axes.y = true;
        }
        if table.has_translation(Axis::Y) && !axes.x && !axes.z {
            axes.x = true;
        }
        if table.has_translation(Axis::Z) && !axes.x && !axes.y {
            axes.x = true;
        }

        if axes.count() == 0 {
            axes.x = true;
        }
        axes
    }

    pub fn contains(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn count(&self) -> usize {
        usize::from(self.x) + usize::from(self.y) + usize::from(self.z)
    }
}

/// Build the planes of `aabb` needed for `table`: X pair, then Y, then Z,
/// each as Near then Far.
pub fn build_planes(aabb: &Aabb, table: &MatrixLookupTable) -> Vec<Plane> {
    planes_for_axes(aabb, PlaneAxes::for_table(table))
}

fn planes_for_axes(aabb: &Aabb, axes: PlaneAxes) -> Vec<Plane> {
    let corners = aabb.corners();
    let mut planes = Vec::with_capacity(axes.count() * 2);
    for axis in Axis::ALL.into_iter().filter(|a| axes.contains(*a)) {
        for side in [PlaneSide::Near, PlaneSide::Far] {
            planes.push(Plane::from_corners(
                &corners,
                &PlaneSide::corners(axis, side),
            ));
        }
    }
    planes
}

/// Planes and bounding sphere of one moving box in its reference pose.
#[derive(Debug, Clone)]
pub struct PlaneCache {
    aabb: Aabb,
    center: DVec3,
    radius_squared: f64,
    planes: Option<Vec<Plane>>,
    axes: PlaneAxes,
}

impl PlaneCache {
    pub fn new(aabb: Aabb) -> Self {
        Self {
            aabb,
            center: aabb.center(),
            radius_squared: aabb.bounding_radius_squared(),
            planes: None,
            axes: PlaneAxes::default(),
        }
    }

    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// See [`Aabb::bounding_radius_squared`].
    pub fn radius_squared(&self) -> f64 {
        self.radius_squared
    }

    pub fn is_cached(&self) -> bool {
        self.planes.is_some()
    }

    /// Drop the cached planes.
    pub fn reset(&mut self) {
        self.planes = None;
    }

    /// Axes the cached planes were built for, if any.
    pub fn cached_axes(&self) -> Option<PlaneAxes> {
        self.planes.as_ref().map(|_| self.axes)
    }

    /// Cached planes, empty until [`PlaneCache::planes`] has run.
    pub fn cached_planes(&self) -> &[Plane] {
        self.planes.as_deref().unwrap_or(&[])
    }

    /// Planes for `table`, building them if nothing is cached or the table
    /// needs a different set of axes.
    pub fn planes(&mut self, table: &MatrixLookupTable) -> &[Plane] {
        let axes = PlaneAxes::for_table(table);
        if self.cached_axes() != Some(axes) {
            let planes = planes_for_axes(&self.aabb, axes);
            tracing::debug!(?axes, count = planes.len(), "built sweep planes");
            self.axes = axes;
            self.planes = Some(planes);
        }
        self.cached_planes()
    }
}
