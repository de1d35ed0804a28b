mod house;

pub use house::{House, HousePart, PartKind};

use crate::error::OperationError;
use crate::math::{triangle_normal, Point3, Vector3};

/// A flat-shaded triangle mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Triangle indices (each triple defines a counter-clockwise triangle).
    pub indices: Vec<[u32; 3]>,
    /// One unit normal per triangle, parallel to `indices`.
    pub normals: Vec<Vector3>,
}

impl TriangleMesh {
    /// Creates a mesh with the given vertices and no faces.
    #[must_use]
    pub fn with_vertices(vertices: Vec<Point3>) -> Self {
        Self {
            vertices,
            indices: Vec::new(),
            normals: Vec::new(),
        }
    }

    /// Number of triangles.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.indices.len()
    }

    /// Appends the triangle `(a, b, c)`.
    ///
    /// Normals are left stale until [`compute_face_normals`](Self::compute_face_normals).
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if an index is out of range.
    pub fn push_face(&mut self, a: u32, b: u32, c: u32) -> Result<(), OperationError> {
        let count = self.vertices.len();
        if let Some(bad) = [a, b, c].into_iter().find(|&i| i as usize >= count) {
            return Err(OperationError::InvalidInput(format!(
                "face index {bad} out of range for {count} vertices"
            )));
        }
        self.indices.push([a, b, c]);
        Ok(())
    }

    /// Recomputes one flat normal per face from its winding.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Failed`] if a face is degenerate.
    pub fn compute_face_normals(&mut self) -> Result<(), OperationError> {
        self.normals = self
            .indices
            .iter()
            .map(|&[a, b, c]| {
                triangle_normal(
                    &self.vertices[a as usize],
                    &self.vertices[b as usize],
                    &self.vertices[c as usize],
                )
                .ok_or_else(|| {
                    OperationError::Failed(format!("degenerate face ({a}, {b}, {c})"))
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    /// Appends `other`, offsetting its indices past this mesh's vertices.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Failed`] if the combined vertex count does
    /// not fit in a `u32` index.
    pub fn merge(&mut self, other: &TriangleMesh) -> Result<(), OperationError> {
        let offset = u32::try_from(self.vertices.len())
            .map_err(|_| OperationError::Failed("mesh too large for u32 indices".into()))?;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(
            other
                .indices
                .iter()
                .map(|&[a, b, c]| [a + offset, b + offset, c + offset]),
        );
        self.normals.extend_from_slice(&other.normals);
        Ok(())
    }

    /// The corners of face `i`.
    #[must_use]
    pub fn triangle(&self, i: usize) -> Option<[Point3; 3]> {
        let [a, b, c] = *self.indices.get(i)?;
        Some([
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        ])
    }
}
