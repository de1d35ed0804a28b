use super::{Point3, Vector3, TOLERANCE};

/// Unit normal of the triangle `(a, b, c)`, counter-clockwise front face.
///
/// Returns `None` if the triangle has zero area.
#[must_use]
pub fn triangle_normal(a: &Point3, b: &Point3, c: &Point3) -> Option<Vector3> {
    let cross = (b - a).cross(&(c - a));
    let len = cross.norm();
    if len < TOLERANCE {
        return None;
    }
    Some(cross / len)
}
