//! # Base Cap
//!
//! Flat, downward-facing annulus between the outer shell's bottom ring and
//! the cavity outline.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::stitch::{stitch, Winding};
use crate::profile::{Profile, Ring};

/// Closes the underside of the knob.
pub fn close_base(mesh: &mut Mesh, outer: &Ring, inner: &Profile) -> Result<(), MeshError> {
    stitch(mesh, outer, &inner.at(outer.z()), Winding::Inward)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_faces_down() {
        let outer = Profile::circle(25.0, 32).at(0.0);
        let inner = Profile::polygon(5.7, 6, 32);
        let mut mesh = Mesh::new();
        close_base(&mut mesh, &outer, &inner).unwrap();
        assert_eq!(mesh.triangle_count(), 64);
        assert!((0..64).all(|i| mesh.face_normal(i).z < -0.99));
        assert!(mesh.vertices().iter().all(|v| v.z == 0.0));
    }

    #[test]
    fn test_base_rejects_resolution_mismatch() {
        let outer = Profile::circle(25.0, 32).at(0.0);
        let inner = Profile::circle(6.0, 64);
        let mut mesh = Mesh::new();
        assert!(close_base(&mut mesh, &outer, &inner).is_err());
    }
}
