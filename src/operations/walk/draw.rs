use rand::Rng;

use crate::footprint::GridStep;

/// Draws a unit axis-aligned move.
///
/// Each component is drawn uniformly from `{-1, 0, 1}`; the null move is
/// redrawn. A fair coin then picks an axis: the other component is zeroed
/// when the picked one is nonzero, otherwise the nonzero component is kept.
pub(crate) fn draw_step<R: Rng>(rng: &mut R) -> GridStep {
    loop {
        let mut dx: i32 = rng.gen_range(-1..=1);
        let mut dy: i32 = rng.gen_range(-1..=1);
        if dx == 0 && dy == 0 {
            continue;
        }

        let horizontal = rng.gen_range(0..=1) == 0;
        if horizontal {
            if dx != 0 {
                dy = 0;
            }
        } else if dy != 0 {
            dx = 0;
        }

        return GridStep::new(dx, dy);
    }
}
