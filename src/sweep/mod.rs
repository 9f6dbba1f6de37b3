//! Swept-plane collision search.
//!
//! # Pipeline
//!
//! 1. Build (or reuse) the diagonal planes of the moving box for the motion's
//!    shape ([`PlaneCache::planes`])
//! 2. Per plane, bisect each time window for the moment the target's center
//!    changes side ([`Plane::crossing_time`])
//! 3. Confirm the crossing with a box-vs-box overlap test at that time
//!    ([`Plane::intersects`])
//! 4. Keep the earliest confirmed time over all planes

pub mod cache;
pub mod plane;

use glam::DVec3;

use crate::geometry::Aabb;
use crate::motion::{MatrixLookupTable, MotionKind};

pub use self::cache::{build_planes, PlaneAxes, PlaneCache, PlaneSide};
pub use self::plane::{Plane, Side};

/// Upper limit on the time windows searched per plane.
pub const MAX_WINDOWS: u32 = 8192;

/// Configuration for the crossing search.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Maximum bisection steps per window. Default: 10.
    pub accuracy_steps: u32,
    /// Extra subdivision of each half-rotation window for composite motions.
    /// Default: 1. Values below 1 are treated as 1.
    pub composite_oversampling: u32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            accuracy_steps: 10,
            composite_oversampling: 1,
        }
    }
}

impl SweepConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of bisection steps per window.
    pub fn accuracy_steps(mut self, steps: u32) -> Self {
        self.accuracy_steps = steps;
        self
    }

    /// Set the composite-motion window oversampling factor.
    pub fn composite_oversampling(mut self, factor: u32) -> Self {
        self.composite_oversampling = factor;
        self
    }

    /// Number of equal windows `[0, 1]` is split into for `table`'s motion,
    /// at most [`MAX_WINDOWS`].
    pub fn search_windows(&self, table: &MatrixLookupTable) -> u32 {
        let windows = match table.kind() {
            MotionKind::Static | MotionKind::Translation { .. } => 1,
            MotionKind::Rotation { .. } => table.half_rotations(),
            MotionKind::Composite { .. } => table
                .half_rotations()
                .saturating_mul(self.composite_oversampling.max(1)),
        };
        windows.min(MAX_WINDOWS)
    }
}

/// A static box checked against a moving one, with its bounding sphere.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    pub aabb: Aabb,
    pub center: DVec3,
    /// See [`Aabb::bounding_radius_squared`].
    pub radius_squared: f64,
}

impl Target {
    pub fn new(aabb: Aabb) -> Self {
        Self {
            aabb,
            center: aabb.center(),
            radius_squared: aabb.bounding_radius_squared(),
        }
    }
}

/// Find the earliest time in `[0, 1]` (no later than `bound`) at which the
/// moving box described by `cache` and `table` hits `target`.
pub fn earliest_collision(
    cache: &mut PlaneCache,
    target: &Target,
    bound: Option<f64>,
    table: &MatrixLookupTable,
    config: &SweepConfig,
) -> Option<f64> {
    cache.planes(table);
    let cache = &*cache;

    let mut best = bound;
    let mut hit = None;
    for plane in cache.cached_planes() {
        if let Some(t) = plane.binary_search(best, target, cache, table, config) {
            if best.map_or(true, |b| t <= b) {
                best = Some(t);
                hit = Some(t);
            }
        }
    }

    tracing::debug!(
        planes = cache.cached_planes().len(),
        ?bound,
        ?hit,
        "swept plane search finished"
    );
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Axis;
    use crate::motion::{Motion, Pose};
    use std::f64::consts::TAU;

    fn unit_cube() -> Aabb {
        Aabb::new(DVec3::ZERO, DVec3::ONE)
    }

    fn wall_at_x1() -> Target {
        Target::new(Aabb::new(
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 1.0, 1.0),
        ))
    }

    #[test]
    fn test_translation_end_to_end() {
        let table = MatrixLookupTable::new(&Motion::new().translate(DVec3::new(2.0, 0.0, 0.0)))
            .unwrap();
        let mut cache = PlaneCache::new(unit_cube());
        let config = SweepConfig::default();
        let target = wall_at_x1();

        let t = earliest_collision(&mut cache, &target, None, &table, &config).unwrap();
        assert!((t - 0.5).abs() < 1.0 / 1024.0);

        let planes = cache.cached_planes();
        assert!(planes.iter().any(|p| p.intersects(&target, &cache, t, &table)));
    }

    #[test]
    fn test_translation_bound_excludes_hit() {
        let table = MatrixLookupTable::new(&Motion::new().translate(DVec3::new(2.0, 0.0, 0.0)))
            .unwrap();
        let mut cache = PlaneCache::new(unit_cube());
        let config = SweepConfig::default();

        let t = earliest_collision(&mut cache, &wall_at_x1(), Some(0.3), &table, &config);
        assert_eq!(t, None);
    }

    #[test]
    fn test_moving_away_never_hits() {
        let table = MatrixLookupTable::new(&Motion::new().translate(DVec3::new(-2.0, 0.0, 0.0)))
            .unwrap();
        let mut cache = PlaneCache::new(unit_cube());
        let t = earliest_collision(
            &mut cache,
            &wall_at_x1(),
            None,
            &table,
            &SweepConfig::default(),
        );
        assert_eq!(t, None);
    }

    #[test]
    fn test_rotation_end_to_end() {
        // Slab spinning a full turn about its own center; the target sits on
        // the +X side and its center crosses the z = x diagonal at 1/8 turn.
        let slab = Aabb::new(DVec3::new(-1.0, -0.25, -1.0), DVec3::new(1.0, 0.25, 1.0));
        let target = Target::new(Aabb::new(
            DVec3::new(1.5, -0.5, -0.5),
            DVec3::new(2.5, 0.5, 0.5),
        ));
        let table = MatrixLookupTable::new(&Motion::new().rotate_about(Axis::Y, TAU)).unwrap();
        let mut cache = PlaneCache::new(slab);

        let t = earliest_collision(&mut cache, &target, None, &table, &SweepConfig::default())
            .unwrap();
        assert!((t - 0.125).abs() < 1.0 / 1024.0, "t = {t}");
    }

    #[test]
    fn test_origin_pose_shifts_detection() {
        let motion = Motion::new().translate(DVec3::new(3.0, 0.0, 0.0));
        let config = SweepConfig::default();

        let table = MatrixLookupTable::new(&motion).unwrap();
        let mut cache = PlaneCache::new(unit_cube());
        let t = earliest_collision(&mut cache, &wall_at_x1(), None, &table, &config).unwrap();
        assert!((t - 1.0 / 3.0).abs() < 1.0 / 1024.0, "t = {t}");

        // Starting one unit further back delays the hit by a third.
        let shifted = motion.with_origin(Pose::from_translation(DVec3::new(-1.0, 0.0, 0.0)));
        let table = MatrixLookupTable::new(&shifted).unwrap();
        let t = earliest_collision(&mut cache, &wall_at_x1(), None, &table, &config).unwrap();
        assert!((t - 2.0 / 3.0).abs() < 1.0 / 1024.0, "t = {t}");
    }

    /// Cube at the origin rising along Y while spinning about Y (two half
    /// turns), with a cube target stacked above it on the spin axis. The
    /// target center reaches the moving cube's center plane at `t = 0.7`.
    fn rising_spinner() -> (PlaneCache, Target, MatrixLookupTable) {
        let cube = Aabb::new(DVec3::splat(-0.5), DVec3::splat(0.5));
        let target = Target::new(Aabb::new(
            DVec3::new(-0.5, 3.7, -0.5),
            DVec3::new(0.5, 4.7, 0.5),
        ));
        let motion = Motion::new()
            .rotate_about(Axis::Y, 4.0)
            .translate(DVec3::new(0.0, 6.0, 0.0));
        let table = MatrixLookupTable::new(&motion).unwrap();
        (PlaneCache::new(cube), target, table)
    }

    #[test]
    fn test_search_windows_by_motion_kind() {
        let config = SweepConfig::default();
        let windows = |motion: Motion, config: &SweepConfig| {
            config.search_windows(&MatrixLookupTable::new(&motion).unwrap())
        };

        assert_eq!(windows(Motion::new(), &config), 1);
        assert_eq!(windows(Motion::new().translate(DVec3::X), &config), 1);
        assert_eq!(windows(Motion::new().rotate_about(Axis::X, TAU), &config), 2);
        // Oversampling only splits composite motions.
        let oversampled = SweepConfig::new().composite_oversampling(3);
        assert_eq!(windows(Motion::new().rotate_about(Axis::X, TAU), &oversampled), 2);

        let (_, _, table) = rising_spinner();
        assert!(matches!(table.kind(), MotionKind::Composite { .. }));
        assert_eq!(table.half_rotations(), 2);
        assert_eq!(config.search_windows(&table), 2);
        assert_eq!(oversampled.search_windows(&table), 6);
        assert_eq!(SweepConfig::new().composite_oversampling(0).search_windows(&table), 2);
        assert_eq!(
            SweepConfig::new()
                .composite_oversampling(u32::MAX)
                .search_windows(&table),
            MAX_WINDOWS
        );
    }

    #[test]
    fn test_composite_end_to_end() {
        let (mut cache, target, table) = rising_spinner();
        let config = SweepConfig::default();

        let t = earliest_collision(&mut cache, &target, None, &table, &config).unwrap();
        assert!(t <= 0.7 && 0.7 - t <= 0.5 / 1024.0, "t = {t}");
        assert_eq!(cache.cached_planes().len(), 4);

        assert_eq!(
            earliest_collision(&mut cache, &target, Some(0.6), &table, &config),
            None
        );
    }

    #[test]
    fn test_composite_oversampling_finds_same_crossing() {
        let (mut cache, target, table) = rising_spinner();
        let config = SweepConfig::new().composite_oversampling(2);

        let t = earliest_collision(&mut cache, &target, None, &table, &config).unwrap();
        assert!(t <= 0.7 && 0.7 - t <= 0.25 / 1024.0, "t = {t}");
    }

    #[test]
    fn test_composite_bound_skips_later_windows() {
        let (mut cache, target, table) = rising_spinner();
        let config = SweepConfig::default();
        let planes = cache.planes(&table).to_vec();
        let cache = &cache;

        // The crossing lies in the second window, [0.5, 1].
        let crossing = planes[0].binary_search(Some(0.75), &target, cache, &table, &config);
        assert!(crossing.is_some_and(|t| (t - 0.7).abs() < 1.0 / 1024.0));
        for plane in &planes {
            assert_eq!(plane.binary_search(Some(0.4), &target, cache, &table, &config), None);
        }
    }

    #[test]
    fn test_huge_oversampling_does_not_overflow() {
        let (mut cache, target, table) = rising_spinner();
        let config = SweepConfig::new().composite_oversampling(u32::MAX);

        // Fine windows let the rising target's overlap be confirmed as soon
        // as its bottom face passes the cube's top, at t = 8/15.
        let t = earliest_collision(&mut cache, &target, None, &table, &config).unwrap();
        assert!(t > 8.0 / 15.0 && t <= 0.7, "t = {t}");
    }

    #[test]
    fn test_config_builder() {
        let config = SweepConfig::new()
            .accuracy_steps(4)
            .composite_oversampling(3);
        assert_eq!(config.accuracy_steps, 4);
        assert_eq!(config.composite_oversampling, 3);
    }
}
