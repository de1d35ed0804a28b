mod cell;

pub use cell::{Cardinal, CellData, CellId, GridPos, GridStep};

use std::collections::HashMap;

use crate::error::FootprintError;
use slotmap::SlotMap;

/// Arena of footprint cells and their adjacency.
///
/// Cells reference their neighbors by [`CellId`], so the adjacency graph is
/// stored without ownership cycles. Every footprint contains the origin
/// `(0, 0)`, and no two cells share a position. Iteration follows insertion
/// order.
#[derive(Debug, Clone)]
pub struct Footprint {
    cells: SlotMap<CellId, CellData>,
    index: HashMap<GridPos, CellId>,
    origin: CellId,
}

impl Default for Footprint {
    fn default() -> Self {
        Self::new()
    }
}

impl Footprint {
    /// Creates a footprint holding only the origin cell.
    #[must_use]
    pub fn new() -> Self {
        let mut cells = SlotMap::with_key();
        let origin = cells.insert(CellData::new(GridPos::ORIGIN));
        let mut index = HashMap::new();
        index.insert(GridPos::ORIGIN, origin);
        Self {
            cells,
            index,
            origin,
        }
    }

    /// Builds a footprint from the origin plus `positions`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`FootprintError::Occupied`] if a position repeats or is the origin.
    pub fn from_positions<I>(positions: I) -> Result<Self, FootprintError>
    where
        I: IntoIterator<Item = GridPos>,
    {
        let mut footprint = Self::new();
        for pos in positions {
            footprint.insert(pos)?;
        }
        Ok(footprint)
    }

    /// The ID of the origin cell.
    #[must_use]
    pub fn origin(&self) -> CellId {
        self.origin
    }

    /// Number of cells, origin included.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn contains(&self, pos: GridPos) -> bool {
        self.index.contains_key(&pos)
    }

    /// Looks up the cell at `pos`.
    #[must_use]
    pub fn cell_at(&self, pos: GridPos) -> Option<CellId> {
        self.index.get(&pos).copied()
    }

    /// Returns a reference to the cell data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`FootprintError::CellNotFound`] if the ID is not in this footprint.
    pub fn cell(&self, id: CellId) -> Result<&CellData, FootprintError> {
        self.cells.get(id).ok_or(FootprintError::CellNotFound)
    }

    /// Adds a cell at `pos` and links it with every existing neighbor, both ways.
    ///
    /// # Errors
    ///
    /// Returns [`FootprintError::Occupied`] if a cell already sits at `pos`.
    pub fn insert(&mut self, pos: GridPos) -> Result<CellId, FootprintError> {
        if self.contains(pos) {
            return Err(FootprintError::Occupied(pos));
        }

        let neighbors: Vec<CellId> = self
            .cells
            .iter()
            .filter(|(_, cell)| cell.pos.is_neighbor(pos))
            .map(|(id, _)| id)
            .collect();

        let id = self.cells.insert(CellData {
            pos,
            neighbors: neighbors.clone(),
        });
        for neighbor in neighbors {
            if let Some(cell) = self.cells.get_mut(neighbor) {
                cell.neighbors.push(id);
            }
        }
        self.index.insert(pos, id);

        Ok(id)
    }

    /// Iterates over all cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &CellData)> {
        self.cells.iter()
    }

    /// Iterates over all cell positions in insertion order.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.cells.values().map(|cell| cell.pos)
    }

    /// Positions of the neighbors of `id`, in the order they were linked.
    ///
    /// # Errors
    ///
    /// Returns [`FootprintError::CellNotFound`] if the ID is not in this footprint.
    pub fn neighbor_positions(&self, id: CellId) -> Result<Vec<GridPos>, FootprintError> {
        self.cell(id)?
            .neighbors
            .iter()
            .map(|&n| self.cell(n).map(|cell| cell.pos))
            .collect()
    }

    /// Returns `true` if `a` lists `b` as a neighbor.
    #[must_use]
    pub fn are_neighbors(&self, a: CellId, b: CellId) -> bool {
        self.cells
            .get(a)
            .is_some_and(|cell| cell.neighbors.contains(&b))
    }
}
