//! Shared scenario setup for the sweep benchmarks.

use anyhow::Result;
use glam::DVec3;
use plane_sweep::{Aabb, Axis, MatrixLookupTable, Motion, PlaneCache, Target};

/// A moving box, its motion table and a row of static targets.
pub struct Scenario {
    pub cache: PlaneCache,
    pub table: MatrixLookupTable,
    pub targets: Vec<Target>,
}

/// Unit cube sliding `n` units along +X past `n` unit targets, one per unit.
pub fn sliding_row(n: usize) -> Result<Scenario> {
    let motion = Motion::new().translate(DVec3::new(n as f64, 0.0, 0.0));
    let targets = (0..n)
        .map(|i| {
            let x = i as f64 + 1.0;
            Target::new(Aabb::new(
                DVec3::new(x, 0.0, 0.0),
                DVec3::new(x + 1.0, 1.0, 1.0),
            ))
        })
        .collect();

    Ok(Scenario {
        cache: PlaneCache::new(Aabb::new(DVec3::ZERO, DVec3::ONE)),
        table: MatrixLookupTable::new(&motion)?,
        targets,
    })
}

/// Slab spinning `turns` full turns about Y while drifting along Z, with `n`
/// targets spread on a ring around it.
pub fn tumbling_ring(n: usize, turns: f64) -> Result<Scenario> {
    let motion = Motion::new()
        .rotate_about(Axis::Y, turns * std::f64::consts::TAU)
        .translate(DVec3::new(0.0, 0.0, 0.5));
    let targets = (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * std::f64::consts::TAU;
            let center = DVec3::new(angle.cos() * 1.8, 0.0, angle.sin() * 1.8);
            Target::new(Aabb::new(center - DVec3::splat(0.4), center + DVec3::splat(0.4)))
        })
        .collect();

    Ok(Scenario {
        cache: PlaneCache::new(Aabb::new(
            DVec3::new(-1.0, -0.25, -1.0),
            DVec3::new(1.0, 0.25, 1.0),
        )),
        table: MatrixLookupTable::new(&motion)?,
        targets,
    })
}
