//! Box corner enumeration.

use glam::DVec3;

use super::Aabb;

/// One of the 8 corners of a box.
///
/// East/West pick max/min x, Up/Down pick max/min y, South/North pick max/min
/// z. The declaration order is the index order, with bit 2 set for West, bit 1
/// for Down and bit 0 for South.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxCorner {
    EastUpNorth,
    EastUpSouth,
    EastDownNorth,
    EastDownSouth,
    WestUpNorth,
    WestUpSouth,
    WestDownNorth,
    WestDownSouth,
}

impl BoxCorner {
    /// All corners in index order.
    pub const ALL: [BoxCorner; 8] = [
        BoxCorner::EastUpNorth,
        BoxCorner::EastUpSouth,
        BoxCorner::EastDownNorth,
        BoxCorner::EastDownSouth,
        BoxCorner::WestUpNorth,
        BoxCorner::WestUpSouth,
        BoxCorner::WestDownNorth,
        BoxCorner::WestDownSouth,
    ];

    /// Position of this corner in [`BoxCorner::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn is_east(self) -> bool {
        self.index() & 0b100 == 0
    }

    #[inline]
    pub const fn is_up(self) -> bool {
        self.index() & 0b010 == 0
    }

    #[inline]
    pub const fn is_south(self) -> bool {
        self.index() & 0b001 != 0
    }

    /// Coordinates of this corner on `aabb`.
    #[inline]
    pub fn point(self, aabb: &Aabb) -> DVec3 {
        DVec3::new(
            if self.is_east() { aabb.max.x } else { aabb.min.x },
            if self.is_up() { aabb.max.y } else { aabb.min.y },
            if self.is_south() { aabb.max.z } else { aabb.min.z },
        )
    }
}
