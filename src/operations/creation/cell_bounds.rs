use crate::footprint::GridPos;

/// World-space rectangle covered by a footprint cell.
///
/// `x0`/`y0` are the high edges and `x1`/`y1` the low edges; the roof
/// scaffold numbers its vertices from the `(x0, y0)` corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBounds {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl CellBounds {
    /// The rectangle of `cell` on a grid of `unit_x` by `unit_y` cells
    /// centred on the origin cell.
    #[must_use]
    pub fn of(cell: GridPos, unit_x: f64, unit_y: f64) -> Self {
        let x0 = f64::from(cell.x) * unit_x + unit_x / 2.0;
        let y0 = f64::from(cell.y) * unit_y + unit_y / 2.0;
        Self {
            x0,
            x1: x0 - unit_x,
            y0,
            y1: y0 - unit_y,
        }
    }

    #[must_use]
    pub fn mid_x(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }

    #[must_use]
    pub fn mid_y(&self) -> f64 {
        (self.y0 + self.y1) / 2.0
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x0 - self.x1
    }

    #[must_use]
    pub fn depth(&self) -> f64 {
        self.y0 - self.y1
    }

    /// Shrinks the rectangle by `amount` on every side.
    #[must_use]
    pub fn inset(&self, amount: f64) -> Self {
        Self {
            x0: self.x0 - amount,
            x1: self.x1 + amount,
            y0: self.y0 - amount,
            y1: self.y1 + amount,
        }
    }
}
