use crate::error::{OperationError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::mesh::TriangleMesh;

/// Creates an axis-aligned box mesh from two corner points.
///
/// The corners may be given in any order. The base is wound counter-clockwise
/// seen from above; the bottom is the reversed base and each base edge
/// becomes a side quad, so every face normal points outward.
pub struct MakeBox {
    min_corner: Point3,
    max_corner: Point3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(corner_a: Point3, corner_b: Point3) -> Self {
        Self {
            min_corner: corner_a.inf(&corner_b),
            max_corner: corner_a.sup(&corner_b),
        }
    }

    /// Executes the operation, returning a closed 12-triangle mesh.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the box has zero extent
    /// along any axis.
    pub fn execute(&self) -> Result<TriangleMesh> {
        let extent = self.max_corner - self.min_corner;
        if extent.iter().any(|&e| e < TOLERANCE) {
            return Err(OperationError::InvalidInput(format!(
                "box extent {extent:?} must be positive on every axis"
            ))
            .into());
        }

        let (lo, hi) = (self.min_corner, self.max_corner);
        let base = [
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
        ];
        let top = base.map(|p| Point3::new(p.x, p.y, hi.z));

        let mut mesh = TriangleMesh::with_vertices(base.iter().chain(top.iter()).copied().collect());

        // Bottom: reversed base
        mesh.push_face(0, 2, 1)?;
        mesh.push_face(0, 3, 2)?;
        // Top: translated base
        mesh.push_face(4, 5, 6)?;
        mesh.push_face(4, 6, 7)?;
        // Sides: one quad per base edge
        for i in 0..4u32 {
            let j = (i + 1) % 4;
            mesh.push_face(i, j, 4 + j)?;
            mesh.push_face(i, 4 + j, 4 + i)?;
        }

        mesh.compute_face_normals()?;
        Ok(mesh)
    }
}
