pub mod config;
pub mod error;
pub mod export;
pub mod footprint;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod seed;

pub use config::{Dimensions, HouseConfig};
pub use error::{HouseError, Result};
pub use footprint::{Footprint, GridPos};
pub use mesh::{House, HousePart, PartKind, TriangleMesh};

/// Generates a house from a seed and step count.
///
/// The same arguments always produce the same house.
///
/// # Errors
///
/// Returns a config error if any dimension is not positive or a unit leaves
/// no room for the roof inset, and a walk error if the walk boxes itself in
/// beyond [`config::DEFAULT_RETRY_LIMIT`] consecutive rejected moves.
pub fn build_house(
    seed: u64,
    steps: usize,
    unit_x: f64,
    unit_y: f64,
    wall_height: f64,
    roof_height: f64,
) -> Result<House> {
    HouseConfig::new(seed, steps)
        .with_dimensions(Dimensions {
            unit_x,
            unit_y,
            wall_height,
            roof_height,
        })
        .build()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn origin_only_house_has_hip_roof() {
        let house = build_house(1, 0, 15.0, 10.0, 6.0, 4.0).unwrap();
        let roof = house.part(GridPos::ORIGIN, PartKind::Roof).unwrap();
        assert_eq!(roof.mesh.face_count(), 4);
        assert_eq!(house.parts().len(), 2);
    }

    #[test]
    fn seed_one_three_steps_is_reproducible() {
        let cells = |house: &House| -> Vec<GridPos> { house.roofs().map(|p| p.cell).collect() };
        let a = build_house(1, 3, 15.0, 10.0, 6.0, 4.0).unwrap();
        let b = build_house(1, 3, 15.0, 10.0, 6.0, 4.0).unwrap();
        assert_eq!(cells(&a).len(), 4);
        assert_eq!(cells(&a), cells(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn non_positive_unit_is_rejected() {
        assert!(build_house(1, 3, 0.0, 10.0, 6.0, 4.0).is_err());
        assert!(build_house(1, 3, 15.0, 10.0, 6.0, -4.0).is_err());
    }
}
