use crate::error::{OperationError, Result};
use crate::footprint::Cardinal;
use crate::math::{Point3, TOLERANCE};
use crate::mesh::TriangleMesh;

use super::CellBounds;

/// Distance the roof rectangle is pulled in from the wall rectangle on each side.
pub const ROOF_INSET: f64 = 1.0;

/// Number of vertices in a roof scaffold.
pub const SCAFFOLD_VERTICES: usize = 17;

/// Index of the apex vertex, centred at ridge height.
pub const APEX: u32 = 16;

/// The four hip triangles joining the lower corners to the apex.
pub const HIP_FACES: [[u32; 3]; 4] = [[0, 2, APEX], [2, 4, APEX], [4, 6, APEX], [6, 0, APEX]];

/// Scaffold indices used to join a roof to a cardinal neighbor's roof.
///
/// The sixth index `e` is always [`APEX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GableIndices {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub f: u32,
}

impl GableIndices {
    pub const E: u32 = APEX;

    /// The index tuple for the shared edge towards `dir`.
    #[must_use]
    pub const fn for_direction(dir: Cardinal) -> Self {
        let (a, b, c, d, f) = match dir {
            Cardinal::West => (2, 11, 4, 1, 5),
            Cardinal::East => (6, 15, 0, 5, 1),
            Cardinal::North => (0, 9, 2, 7, 3),
            Cardinal::South => (4, 13, 6, 3, 7),
        };
        Self { a, b, c, d, f }
    }

    /// The six join triangles: front, rear, two left and two right connectors.
    #[must_use]
    pub const fn faces(self) -> [[u32; 3]; 6] {
        let Self { a, b, c, d, f } = self;
        let e = Self::E;
        [
            [a, c, b],
            [d, e, f],
            [d, a, b],
            [e, d, b],
            [c, f, e],
            [b, c, e],
        ]
    }
}

/// Join indices for a neighbor at offset `(dx, dy)`.
///
/// Returns `None` for diagonal and zero offsets, which get no join faces.
#[must_use]
pub fn gable_indices(dx: i32, dy: i32) -> Option<GableIndices> {
    Cardinal::from_offset(dx, dy).map(GableIndices::for_direction)
}

/// The 17 roof scaffold vertices over `bounds`.
///
/// Indices 0-7 walk the perimeter at `base_z` from the `(x0, y0)` corner:
/// corner, edge midpoint, corner, and so on. Indices 8-15 repeat them at
/// ridge height and 16 is the apex.
#[must_use]
pub fn roof_scaffold(bounds: &CellBounds, base_z: f64, height: f64) -> [Point3; SCAFFOLD_VERTICES] {
    let roof = bounds.inset(ROOF_INSET);
    let (xm, ym) = (bounds.mid_x(), bounds.mid_y());
    let ring = [
        (roof.x0, roof.y0),
        (xm, roof.y0),
        (roof.x1, roof.y0),
        (roof.x1, ym),
        (roof.x1, roof.y1),
        (xm, roof.y1),
        (roof.x0, roof.y1),
        (roof.x0, ym),
    ];
    let ridge = base_z + height;

    let mut scaffold = [Point3::new(xm, ym, ridge); SCAFFOLD_VERTICES];
    for (i, &(x, y)) in ring.iter().enumerate() {
        scaffold[i] = Point3::new(x, y, base_z);
        scaffold[i + 8] = Point3::new(x, y, ridge);
    }
    scaffold
}

/// Creates the roof patch of one footprint cell.
///
/// Four hip faces are always present; every cardinal neighbor adds six
/// faces closing the roof towards that neighbor. Diagonal neighbors add
/// nothing.
pub struct MakeRoof {
    bounds: CellBounds,
    base_z: f64,
    height: f64,
    neighbor_offsets: Vec<(i32, i32)>,
}

impl MakeRoof {
    /// Creates a new `MakeRoof` operation for a cell with no neighbors.
    #[must_use]
    pub fn new(bounds: CellBounds, base_z: f64, height: f64) -> Self {
        Self {
            bounds,
            base_z,
            height,
            neighbor_offsets: Vec::new(),
        }
    }

    /// Sets the offsets `(dx, dy)` from this cell to each of its neighbors.
    #[must_use]
    pub fn with_neighbors<I>(mut self, offsets: I) -> Self
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        self.neighbor_offsets = offsets.into_iter().collect();
        self
    }

    /// Executes the operation, returning the roof mesh with face normals.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the height is not
    /// positive or the inset roof rectangle is empty.
    pub fn execute(&self) -> Result<TriangleMesh> {
        if self.height.is_nan() || self.height < TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "roof height must be positive, got {}",
                self.height
            ))
            .into());
        }
        let roof = self.bounds.inset(ROOF_INSET);
        if roof.width() < TOLERANCE || roof.depth() < TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "cell {}x{} leaves no room for a roof inset by {ROOF_INSET}",
                self.bounds.width(),
                self.bounds.depth()
            ))
            .into());
        }

        let scaffold = roof_scaffold(&self.bounds, self.base_z, self.height);
        let mut mesh = TriangleMesh::with_vertices(scaffold.to_vec());

        for [a, b, c] in HIP_FACES {
            mesh.push_face(a, b, c)?;
        }
        for &(dx, dy) in &self.neighbor_offsets {
            let Some(gable) = gable_indices(dx, dy) else {
                continue;
            };
            for [a, b, c] in gable.faces() {
                mesh.push_face(a, b, c)?;
            }
        }

        mesh.compute_face_normals()?;
        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::footprint::GridPos;
    use approx::assert_relative_eq;

    fn origin_bounds() -> CellBounds {
        CellBounds::of(GridPos::ORIGIN, 15.0, 10.0)
    }

    fn roof(offsets: &[(i32, i32)]) -> TriangleMesh {
        MakeRoof::new(origin_bounds(), 6.0, 4.0)
            .with_neighbors(offsets.iter().copied())
            .execute()
            .unwrap()
    }

    // ── Join table ─────────────────────────────────────────────

    #[test]
    fn join_table_rows() {
        let row = |dx, dy| {
            let g = gable_indices(dx, dy).unwrap();
            (g.a, g.b, g.c, g.d, g.f)
        };
        assert_eq!(row(-1, 0), (2, 11, 4, 1, 5));
        assert_eq!(row(1, 0), (6, 15, 0, 5, 1));
        assert_eq!(row(0, 1), (0, 9, 2, 7, 3));
        assert_eq!(row(0, -1), (4, 13, 6, 3, 7));
    }

    #[test]
    fn diagonal_and_zero_offsets_have_no_join() {
        for (dx, dy) in [(0, 0), (1, 1), (1, -1), (-1, 1), (-1, -1)] {
            assert!(gable_indices(dx, dy).is_none(), "({dx}, {dy})");
        }
    }

    #[test]
    fn join_faces_follow_fixed_pattern() {
        let faces = GableIndices::for_direction(Cardinal::East).faces();
        assert_eq!(
            faces,
            [
                [6, 0, 15],
                [5, 16, 1],
                [5, 6, 15],
                [16, 5, 15],
                [0, 1, 16],
                [15, 0, 16],
            ]
        );
    }

    // ── Scaffold ───────────────────────────────────────────────

    #[test]
    fn scaffold_layout() {
        let s = roof_scaffold(&origin_bounds(), 6.0, 4.0);
        // Lower ring, inset by one unit from the 15x10 wall rectangle
        assert_eq!(s[0], Point3::new(6.5, 4.0, 6.0));
        assert_eq!(s[1], Point3::new(0.0, 4.0, 6.0));
        assert_eq!(s[2], Point3::new(-6.5, 4.0, 6.0));
        assert_eq!(s[3], Point3::new(-6.5, 0.0, 6.0));
        assert_eq!(s[4], Point3::new(-6.5, -4.0, 6.0));
        assert_eq!(s[5], Point3::new(0.0, -4.0, 6.0));
        assert_eq!(s[6], Point3::new(6.5, -4.0, 6.0));
        assert_eq!(s[7], Point3::new(6.5, 0.0, 6.0));
        for i in 0..8 {
            assert_relative_eq!(s[i + 8].x, s[i].x);
            assert_relative_eq!(s[i + 8].y, s[i].y);
            assert_relative_eq!(s[i + 8].z, 10.0);
        }
        assert_eq!(s[APEX as usize], Point3::new(0.0, 0.0, 10.0));
    }

    // ── Face counts ────────────────────────────────────────────

    #[test]
    fn isolated_cell_has_four_hip_faces() {
        let mesh = roof(&[]);
        assert_eq!(mesh.vertices.len(), SCAFFOLD_VERTICES);
        assert_eq!(mesh.indices, HIP_FACES.to_vec());
        assert_eq!(mesh.normals.len(), 4);
    }

    #[test]
    fn each_cardinal_neighbor_adds_six_faces() {
        assert_eq!(roof(&[(1, 0)]).face_count(), 10);
        assert_eq!(roof(&[(1, 0), (0, -1)]).face_count(), 16);
        assert_eq!(roof(&[(-1, 0), (1, 0), (0, 1), (0, -1)]).face_count(), 28);
    }

    #[test]
    fn diagonal_neighbors_add_nothing() {
        assert_eq!(roof(&[(1, 1), (-1, -1)]).face_count(), 4);
        assert_eq!(roof(&[(1, 1), (0, 1)]).face_count(), 10);
    }

    #[test]
    fn east_neighbor_appends_its_join_faces() {
        let mesh = roof(&[(1, 0)]);
        let expected = GableIndices::for_direction(Cardinal::East).faces();
        assert_eq!(&mesh.indices[..4], &HIP_FACES);
        assert_eq!(&mesh.indices[4..], &expected);
    }

    // ── Normals ────────────────────────────────────────────────

    #[test]
    fn hip_normals_slope_upward() {
        let mesh = roof(&[]);
        for normal in &mesh.normals {
            assert!(normal.z > 0.0, "{normal:?}");
            assert_relative_eq!(normal.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn every_join_face_has_a_unit_normal() {
        let mesh = roof(&[(-1, 0), (1, 0), (0, 1), (0, -1)]);
        assert_eq!(mesh.normals.len(), mesh.face_count());
        for normal in &mesh.normals {
            assert_relative_eq!(normal.norm(), 1.0, epsilon = 1e-12);
        }
    }

    // ── Error cases ────────────────────────────────────────────

    #[test]
    fn zero_height_returns_error() {
        let result = MakeRoof::new(origin_bounds(), 6.0, 0.0).execute();
        assert!(result.is_err());
    }

    #[test]
    fn cell_narrower_than_inset_returns_error() {
        let bounds = CellBounds::of(GridPos::ORIGIN, 2.0, 10.0);
        let result = MakeRoof::new(bounds, 6.0, 4.0).execute();
        assert!(result.is_err());
    }
}
