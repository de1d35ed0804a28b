pub mod build_house;
pub mod creation;
pub mod walk;

pub use build_house::BuildHouse;
pub use walk::{RandomWalk, Walk};
