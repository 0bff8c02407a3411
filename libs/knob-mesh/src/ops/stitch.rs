//! # Ring Stitcher
//!
//! Turns adjacent rings into quad strips and closes rings with triangle
//! fans. Every surface of a knob is emitted through these two functions.
//!
//! For a strip between `lower` and `upper`, segment `i` is the quad
//! `(lower[i], lower[i+1], upper[i+1], upper[i])` split along the
//! `lower[i]`–`upper[i+1]` diagonal.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::profile::Ring;
use glam::DVec3;

/// Orientation of emitted triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Counter-clockwise quads, facing away from the axis on a rising wall
    /// and upwards on an annulus that shrinks towards the axis.
    Outward,
    /// The mirror image of `Outward`; used for every cavity surface.
    Inward,
}

/// Stitches two rings into a closed quad strip (2 triangles per segment).
///
/// # Errors
///
/// Returns [`MeshError::RingMismatch`] when the rings have different point
/// counts, and [`MeshError::InvalidTopology`] for rings with fewer than
/// three points.
///
/// # Example
///
/// ```rust
/// use knob_mesh::ops::{stitch, Winding};
/// use knob_mesh::profile::Profile;
/// use knob_mesh::Mesh;
///
/// let circle = Profile::circle(10.0, 16);
/// let mut mesh = Mesh::new();
/// stitch(&mut mesh, &circle.at(0.0), &circle.at(5.0), Winding::Outward).unwrap();
/// assert_eq!(mesh.triangle_count(), 32);
/// ```
pub fn stitch(
    mesh: &mut Mesh,
    lower: &Ring,
    upper: &Ring,
    winding: Winding,
) -> Result<(), MeshError> {
    if lower.len() != upper.len() {
        return Err(MeshError::RingMismatch {
            lower: lower.len(),
            upper: upper.len(),
        });
    }
    check_closed(lower)?;

    let a = lower.points();
    let b = upper.points();
    let n = a.len();

    for i in 0..n {
        let next = (i + 1) % n;
        let (p1, p2, p3, p4) = (a[i], a[next], b[next], b[i]);
        match winding {
            Winding::Outward => {
                mesh.push_triangle(p1, p2, p3);
                mesh.push_triangle(p1, p3, p4);
            }
            Winding::Inward => {
                mesh.push_triangle(p1, p3, p2);
                mesh.push_triangle(p1, p4, p3);
            }
        }
    }

    Ok(())
}

/// Closes a ring with a fan of triangles meeting at `apex`.
///
/// `Outward` faces up for an apex above or level with the ring (top caps);
/// `Inward` faces down (bore ceilings).
///
/// # Errors
///
/// Returns [`MeshError::InvalidTopology`] for rings with fewer than three
/// points.
pub fn fan(mesh: &mut Mesh, ring: &Ring, apex: DVec3, winding: Winding) -> Result<(), MeshError> {
    check_closed(ring)?;

    let points = ring.points();
    let n = points.len();
    for i in 0..n {
        let next = (i + 1) % n;
        match winding {
            Winding::Outward => mesh.push_triangle(apex, points[i], points[next]),
            Winding::Inward => mesh.push_triangle(apex, points[next], points[i]),
        }
    }

    Ok(())
}

fn check_closed(ring: &Ring) -> Result<(), MeshError> {
    if ring.len() < 3 {
        return Err(MeshError::invalid_topology(format!(
            "ring at z = {} has {} points, need at least 3",
            ring.z(),
            ring.len()
        )));
    }
    Ok(())
}
