//! Diagonal planes of a moving box and the crossing search over time.

use glam::DVec3;

use crate::geometry::{Aabb, BoxCorner};
use crate::motion::MatrixLookupTable;

use super::cache::PlaneCache;
use super::{SweepConfig, Target};

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Along the normal.
    Front,
    /// Against the normal.
    Behind,
    /// Exactly on the plane.
    OnPlane,
}

/// A plane through three corners of the moving box, in its reference pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// First defining corner.
    pub origin: DVec3,
    /// `(b - origin) × (c - origin)` for the second and third corners; not normalized.
    pub normal: DVec3,
}

impl Plane {
    /// Create a plane through the first three of `selection`, taken from `corners`.
    ///
    /// `corners` must be ordered as [`BoxCorner::ALL`].
    pub fn from_corners(corners: &[DVec3; 8], selection: &[BoxCorner; 4]) -> Self {
        let origin = corners[selection[0].index()];
        let first = corners[selection[1].index()] - origin;
        let second = corners[selection[2].index()] - origin;
        Self {
            origin,
            normal: first.cross(second),
        }
    }

    /// Classify `point` against this plane.
    #[inline]
    pub fn side_of(&self, point: DVec3) -> Side {
        let scalar = (point - self.origin).dot(self.normal);
        if scalar > 0.0 {
            Side::Front
        } else if scalar < 0.0 {
            Side::Behind
        } else {
            Side::OnPlane
        }
    }

    /// Earliest confirmed time at which `target` collides with the moving box
    /// through this plane, no later than `bound`.
    ///
    /// The motion interval is split into [`SweepConfig::search_windows`]
    /// windows and each is bisected in time order. A crossing only counts
    /// once [`Plane::intersects`] confirms it.
    pub fn binary_search(
        &self,
        bound: Option<f64>,
        target: &Target,
        cache: &PlaneCache,
        table: &MatrixLookupTable,
        config: &SweepConfig,
    ) -> Option<f64> {
        let windows = config.search_windows(table);
        let size = 1.0 / f64::from(windows);

        for i in 0..windows {
            let start_t = size * f64::from(i);
            let end_t = if i + 1 == windows {
                1.0
            } else {
                size * f64::from(i + 1)
            };

            if bound.is_some_and(|b| b < start_t) {
                return None;
            }

            if let Some(t) =
                self.crossing_time(bound, target.center, table, start_t, end_t, config.accuracy_steps)
            {
                if self.intersects(target, cache, t, table) {
                    return Some(t);
                }
            }
        }

        None
    }

    /// Bisect `[start_t, end_t]` for the time `point` changes side.
    ///
    /// The window end is clamped to `bound`. Returns the exact time when a
    /// sample lands on the plane, otherwise the start of the final bracket
    /// after at most `max_steps` halvings, so the estimate never lies after
    /// the real crossing. `None` when both ends are on the same side.
    pub fn crossing_time(
        &self,
        bound: Option<f64>,
        point: DVec3,
        table: &MatrixLookupTable,
        start_t: f64,
        end_t: f64,
        max_steps: u32,
    ) -> Option<f64> {
        let end_t = match bound {
            Some(b) if b < start_t => return None,
            Some(b) => end_t.min(b),
            None => end_t,
        };

        let before = self.side_of(table.inverse_point(point, start_t));
        if before == Side::OnPlane {
            return Some(start_t);
        }

        let after = self.side_of(table.inverse_point(point, end_t));
        if after == Side::OnPlane {
            return Some(end_t);
        }

        if before == after {
            return None;
        }

        let (mut low, mut high) = (start_t, end_t);
        for _ in 0..max_steps {
            let half = (low + high) * 0.5;
            match self.side_of(table.inverse_point(point, half)) {
                Side::OnPlane => return Some(half),
                side if side == before => low = half,
                _ => high = half,
            }
        }

        tracing::trace!(low, high, "bisection depth exhausted, using bracket start");
        Some(low)
    }

    /// Whether `target` overlaps the moving box at time `t`.
    ///
    /// Rejects on bounding spheres first, then tests the target's corners in
    /// the moving box's local frame, and finally the AABB of those corners.
    pub fn intersects(
        &self,
        target: &Target,
        cache: &PlaneCache,
        t: f64,
        table: &MatrixLookupTable,
    ) -> bool {
        let bb = cache.aabb();

        let local_center = table.inverse_point(target.center, t);
        if bb.contains(local_center) {
            return true;
        }

        if (local_center - cache.center()).length_squared()
            >= target.radius_squared + cache.radius_squared()
        {
            return false;
        }

        let inverse = table.inverse_at(t);
        let mut min = DVec3::splat(f64::MAX);
        let mut max = DVec3::splat(f64::MIN);
        for corner in target.aabb.corners() {
            let local = inverse.transform_point3(corner);
            if bb.contains(local) {
                return true;
            }
            min = min.min(local);
            max = max.max(local);
        }

        bb.intersects(&Aabb::new(min, max))
    }
}
