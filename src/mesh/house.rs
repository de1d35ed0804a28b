use crate::error::OperationError;
use crate::footprint::GridPos;

use super::TriangleMesh;

/// What a [`HousePart`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    /// The extruded wall box of a cell.
    Walls,
    /// The roof patch of a cell.
    Roof,
}

/// One mesh of a generated house, tagged with the cell it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct HousePart {
    pub cell: GridPos,
    pub kind: PartKind,
    pub mesh: TriangleMesh,
}

/// A generated house: the wall box and roof patch of every footprint cell.
///
/// Parts are stored in footprint order, walls before roof for each cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct House {
    parts: Vec<HousePart>,
}

impl House {
    #[must_use]
    pub fn new(parts: Vec<HousePart>) -> Self {
        Self { parts }
    }

    #[must_use]
    pub fn parts(&self) -> &[HousePart] {
        &self.parts
    }

    pub fn walls(&self) -> impl Iterator<Item = &HousePart> {
        self.parts.iter().filter(|p| p.kind == PartKind::Walls)
    }

    pub fn roofs(&self) -> impl Iterator<Item = &HousePart> {
        self.parts.iter().filter(|p| p.kind == PartKind::Roof)
    }

    /// The part of the given kind built for `cell`.
    #[must_use]
    pub fn part(&self, cell: GridPos, kind: PartKind) -> Option<&HousePart> {
        self.parts.iter().find(|p| p.cell == cell && p.kind == kind)
    }

    /// Total number of triangles across all parts.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.face_count()).sum()
    }

    /// Combines every part into a single mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the combined mesh overflows `u32` indices.
    pub fn merged(&self) -> Result<TriangleMesh, OperationError> {
        let mut combined = TriangleMesh::default();
        for part in &self.parts {
            combined.merge(&part.mesh)?;
        }
        Ok(combined)
    }

    /// Consumes the house, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> Vec<HousePart> {
        self.parts
    }
}
