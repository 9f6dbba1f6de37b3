//! Geometry primitives
//!
//! Axis-aligned boxes, coordinate axes and the fixed corner enumeration shared
//! by every other module.

mod corner;

pub use corner::BoxCorner;

use glam::DVec3;

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in X, Y, Z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component of `v` along this axis.
    #[inline]
    pub fn component(self, v: DVec3) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Unit vector along this axis.
    pub fn unit(self) -> DVec3 {
        match self {
            Axis::X => DVec3::X,
            Axis::Y => DVec3::Y,
            Axis::Z => DVec3::Z,
        }
    }
}

/// Axis-aligned bounding box.
///
/// Containment and overlap tests treat the box as open: points on a face are
/// outside, and boxes that only touch do not overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// Create a new AABB.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB from a set of points.
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Self {
        let mut min = DVec3::splat(f64::MAX);
        let mut max = DVec3::splat(f64::MIN);

        for p in points {
            min = min.min(p);
            max = max.max(p);
        }

        Self { min, max }
    }

    /// Get the center of the AABB.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the size of the AABB.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Get all 8 corners, ordered as [`BoxCorner::ALL`].
    pub fn corners(&self) -> [DVec3; 8] {
        BoxCorner::ALL.map(|corner| corner.point(self))
    }

    /// Squared bounding radius used for sphere rejection.
    ///
    /// This is `0.5 * |size|²`, twice the squared half-diagonal. For any two
    /// boxes the sum of their values is at least the square of the sum of
    /// their true radii.
    pub fn bounding_radius_squared(&self) -> f64 {
        self.size().length_squared() * 0.5
    }

    /// Check if a point lies strictly inside the AABB.
    #[inline]
    pub fn contains(&self, point: DVec3) -> bool {
        point.x > self.min.x
            && point.x < self.max.x
            && point.y > self.min.y
            && point.y < self.max.y
            && point.z > self.min.z
            && point.z < self.max.z
    }

    /// Test whether the interiors of two AABBs overlap.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_strict() {
        let aabb = Aabb::new(DVec3::ZERO, DVec3::ONE);
        assert!(aabb.contains(DVec3::splat(0.5)));
        assert!(!aabb.contains(DVec3::new(1.0, 0.5, 0.5)));
        assert!(!aabb.contains(DVec3::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_touching_boxes_do_not_intersect() {
        let a = Aabb::new(DVec3::ZERO, DVec3::ONE);
        let b = Aabb::new(DVec3::new(1.0, 0.0, 0.0), DVec3::new(2.0, 1.0, 1.0));
        let c = Aabb::new(DVec3::splat(0.5), DVec3::splat(1.5));
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
        assert!(a.intersects(&a));
    }

    #[test]
    fn test_from_points() {
        let aabb = Aabb::from_points([
            DVec3::new(1.0, -2.0, 3.0),
            DVec3::new(-1.0, 2.0, 0.0),
            DVec3::new(0.0, 0.0, -3.0),
        ]);
        assert_eq!(aabb.min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(aabb.max, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_bounding_radius_covers_sum_of_radii() {
        let a = Aabb::new(DVec3::ZERO, DVec3::new(2.0, 0.5, 1.0));
        let b = Aabb::new(DVec3::ZERO, DVec3::new(0.25, 3.0, 1.0));
        let ra = (a.size() * 0.5).length();
        let rb = (b.size() * 0.5).length();
        let bound = a.bounding_radius_squared() + b.bounding_radius_squared();
        assert!(bound >= (ra + rb) * (ra + rb));
    }

    #[test]
    fn test_axis_component() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        let picked: Vec<f64> = Axis::ALL.iter().map(|a| a.component(v)).collect();
        assert_eq!(picked, vec![1.0, 2.0, 3.0]);
        assert_eq!(Axis::Y.unit(), DVec3::Y);
    }
}
