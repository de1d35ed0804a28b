mod cell_bounds;
mod make_box;
mod make_roof;

pub use cell_bounds::CellBounds;
pub use make_box::MakeBox;
pub use make_roof::{
    gable_indices, roof_scaffold, GableIndices, MakeRoof, APEX, HIP_FACES, ROOF_INSET,
    SCAFFOLD_VERTICES,
};
