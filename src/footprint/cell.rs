use std::fmt;

slotmap::new_key_type! {
    /// Unique identifier for a cell in the footprint store.
    pub struct CellId;
}

/// Integer grid coordinates of a footprint cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    /// The origin cell every footprint starts from.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset `(dx, dy)` from `self` to `other`.
    #[must_use]
    pub fn offset_to(self, other: Self) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }

    /// Returns `true` if `other` is one of the eight cells surrounding `self`.
    #[must_use]
    pub fn is_neighbor(self, other: Self) -> bool {
        let (dx, dy) = self.offset_to(other);
        dx.abs() <= 1 && dy.abs() <= 1 && self != other
    }

    /// The position reached by taking `step` from `self`.
    #[must_use]
    pub fn step(self, step: GridStep) -> Self {
        Self::new(self.x + step.dx, self.y + step.dy)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A unit move on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridStep {
    pub dx: i32,
    pub dy: i32,
}

impl GridStep {
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Exactly one component is nonzero.
    #[must_use]
    pub fn is_axis_aligned(self) -> bool {
        (self.dx == 0) != (self.dy == 0)
    }
}

/// The four axis-aligned neighbor directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    /// `(-1, 0)`
    West,
    /// `(+1, 0)`
    East,
    /// `(0, +1)`
    North,
    /// `(0, -1)`
    South,
}

impl Cardinal {
    pub const ALL: [Self; 4] = [Self::West, Self::East, Self::North, Self::South];

    /// Classifies a neighbor offset. Diagonal, zero and non-unit offsets
    /// have no cardinal direction.
    #[must_use]
    pub fn from_offset(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (-1, 0) => Some(Self::West),
            (1, 0) => Some(Self::East),
            (0, 1) => Some(Self::North),
            (0, -1) => Some(Self::South),
            _ => None,
        }
    }

    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::West => (-1, 0),
            Self::East => (1, 0),
            Self::North => (0, 1),
            Self::South => (0, -1),
        }
    }
}

/// Data associated with a footprint cell.
#[derive(Debug, Clone)]
pub struct CellData {
    /// Grid position of the cell.
    pub pos: GridPos,
    /// Cells within one step in any of the eight directions.
    pub neighbors: Vec<CellId>,
}

impl CellData {
    /// Creates a new cell with no neighbors.
    #[must_use]
    pub fn new(pos: GridPos) -> Self {
        Self {
            pos,
            neighbors: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_predicate_is_eight_connected() {
        let c = GridPos::ORIGIN;
        for dx in -1..=1 {
            for dy in -1..=1 {
                assert_eq!(c.is_neighbor(GridPos::new(dx, dy)), (dx, dy) != (0, 0));
            }
        }
        assert!(!c.is_neighbor(GridPos::new(2, 0)));
        assert!(!c.is_neighbor(GridPos::new(-1, 2)));
    }

    #[test]
    fn cardinal_offsets_round_trip() {
        for dir in Cardinal::ALL {
            let (dx, dy) = dir.offset();
            assert_eq!(Cardinal::from_offset(dx, dy), Some(dir));
        }
    }

    #[test]
    fn diagonal_and_zero_offsets_are_not_cardinal() {
        for (dx, dy) in [(0, 0), (1, 1), (-1, 1), (1, -1), (-1, -1), (2, 0)] {
            assert_eq!(Cardinal::from_offset(dx, dy), None, "({dx}, {dy})");
        }
    }

    #[test]
    fn axis_aligned_steps() {
        assert!(GridStep::new(1, 0).is_axis_aligned());
        assert!(GridStep::new(0, -1).is_axis_aligned());
        assert!(!GridStep::new(1, 1).is_axis_aligned());
        assert!(!GridStep::new(0, 0).is_axis_aligned());
    }
}
