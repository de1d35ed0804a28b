use tracing::debug;

use crate::config::Dimensions;
use crate::error::Result;
use crate::footprint::Footprint;
use crate::math::Point3;
use crate::mesh::{House, HousePart, PartKind};

use super::creation::{CellBounds, MakeBox, MakeRoof};

/// Builds the wall box and roof patch of every cell in a footprint.
pub struct BuildHouse<'a> {
    footprint: &'a Footprint,
    dimensions: Dimensions,
}

impl<'a> BuildHouse<'a> {
    /// Creates a new `BuildHouse` operation.
    #[must_use]
    pub fn new(footprint: &'a Footprint, dimensions: Dimensions) -> Self {
        Self {
            footprint,
            dimensions,
        }
    }

    /// Executes the operation, returning the complete house.
    ///
    /// # Errors
    ///
    /// Returns a config error if the dimensions are invalid, or an
    /// operation error if a cell's geometry cannot be built.
    pub fn execute(&self) -> Result<House> {
        self.dimensions.validate()?;
        let Dimensions {
            unit_x,
            unit_y,
            wall_height,
            roof_height,
        } = self.dimensions;

        let mut parts = Vec::with_capacity(2 * self.footprint.cell_count());
        for (id, cell) in self.footprint.iter() {
            let bounds = CellBounds::of(cell.pos, unit_x, unit_y);

            let walls = MakeBox::new(
                Point3::new(bounds.x1, bounds.y1, 0.0),
                Point3::new(bounds.x0, bounds.y0, wall_height),
            )
            .execute()?;

            let offsets = self
                .footprint
                .neighbor_positions(id)?
                .into_iter()
                .map(|n| cell.pos.offset_to(n));
            let roof = MakeRoof::new(bounds, wall_height, roof_height)
                .with_neighbors(offsets)
                .execute()?;

            parts.push(HousePart {
                cell: cell.pos,
                kind: PartKind::Walls,
                mesh: walls,
            });
            parts.push(HousePart {
                cell: cell.pos,
                kind: PartKind::Roof,
                mesh: roof,
            });
        }

        debug!(cells = self.footprint.cell_count(), "built house geometry");
        Ok(House::new(parts))
    }
}
