//! Wavefront OBJ output.

use std::io::{self, Write};

use crate::mesh::{House, PartKind};

/// Writes `house` as an OBJ document: one object per part, flat normals as
/// `vn` records, 1-based indices shared across the whole file.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_obj<W: Write>(house: &House, mut writer: W) -> io::Result<()> {
    writeln!(writer, "# housegen")?;

    let mut vertex_offset = 1usize;
    let mut normal_offset = 1usize;

    for part in house.parts() {
        let kind = match part.kind {
            PartKind::Walls => "walls",
            PartKind::Roof => "roof",
        };
        writeln!(writer, "o {kind}_{}_{}", part.cell.x, part.cell.y)?;

        let mesh = &part.mesh;
        for v in &mesh.vertices {
            writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for n in &mesh.normals {
            writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
        }
        for (i, &[a, b, c]) in mesh.indices.iter().enumerate() {
            let n = normal_offset + i;
            writeln!(
                writer,
                "f {}//{n} {}//{n} {}//{n}",
                vertex_offset + a as usize,
                vertex_offset + b as usize,
                vertex_offset + c as usize,
            )?;
        }

        vertex_offset += mesh.vertices.len();
        normal_offset += mesh.normals.len();
    }

    writer.flush()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::footprint::{Footprint, GridPos};
    use crate::operations::BuildHouse;
    use crate::Dimensions;

    fn obj_for(footprint: &Footprint) -> String {
        let house = BuildHouse::new(footprint, Dimensions::default())
            .execute()
            .unwrap();
        let mut out = Vec::new();
        write_obj(&house, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn count(obj: &str, prefix: &str) -> usize {
        obj.lines().filter(|l| l.starts_with(prefix)).count()
    }

    #[test]
    fn single_cell_document() {
        let obj = obj_for(&Footprint::new());
        assert_eq!(count(&obj, "o "), 2);
        assert_eq!(count(&obj, "v "), 8 + 17);
        assert_eq!(count(&obj, "vn "), 12 + 4);
        assert_eq!(count(&obj, "f "), 12 + 4);
        assert!(obj.contains("o walls_0_0"));
        assert!(obj.contains("o roof_0_0"));
    }

    #[test]
    fn indices_continue_across_objects() {
        let obj = obj_for(&Footprint::new());
        // First roof face references the roof's first vertex after the 8 wall vertices.
        let first_roof_face = obj
            .lines()
            .skip_while(|l| !l.starts_with("o roof"))
            .find(|l| l.starts_with("f "))
            .unwrap();
        assert_eq!(first_roof_face, "f 9//13 11//13 25//13");
    }

    #[test]
    fn every_index_is_in_range() {
        let obj = obj_for(&Footprint::from_positions([GridPos::new(0, 1), GridPos::new(-1, 1)]).unwrap());
        let vertices = count(&obj, "v ");
        let normals = count(&obj, "vn ");
        for line in obj.lines().filter(|l| l.starts_with("f ")) {
            for corner in line[2..].split(' ') {
                let (v, n) = corner.split_once("//").unwrap();
                let v: usize = v.parse().unwrap();
                let n: usize = n.parse().unwrap();
                assert!((1..=vertices).contains(&v), "{line}");
                assert!((1..=normals).contains(&n), "{line}");
            }
        }
    }
}
