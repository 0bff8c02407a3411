//! # Binary STL
//!
//! ```text
//! UINT8[80]    – Header
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use std::io::{Read, Write};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle record (normal + 3 vertices + attribute).
const TRIANGLE_SIZE: usize = 50;

/// Writes a mesh as binary STL.
///
/// Normals are recomputed from the winding; degenerate faces get a zero
/// normal. Coordinates are narrowed to `f32`.
///
/// # Example
///
/// ```rust
/// use knob_mesh::{export::write_stl_binary, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.push_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
///
/// let mut bytes = Vec::new();
/// write_stl_binary(&mesh, &mut bytes).unwrap();
/// assert_eq!(bytes.len(), 84 + 50);
/// ```
pub fn write_stl_binary<W: Write>(mesh: &Mesh, mut writer: W) -> Result<(), MeshError> {
    let mut header = [0u8; HEADER_SIZE];
    let label = b"binary STL generated by knob-mesh";
    header[..label.len()].copy_from_slice(label);
    writer.write_all(&header)?;

    let count = u32::try_from(mesh.triangle_count()).map_err(|_| {
        MeshError::malformed_stl(format!(
            "{} triangles exceed the STL count field",
            mesh.triangle_count()
        ))
    })?;
    writer.write_all(&count.to_le_bytes())?;

    let mut record = [0u8; TRIANGLE_SIZE];
    for (index, corners) in mesh.iter_triangles().enumerate() {
        let normal = mesh.face_normal(index);
        let mut offset = 0;
        for v in std::iter::once(normal).chain(corners) {
            for c in [v.x, v.y, v.z] {
                record[offset..offset + 4].copy_from_slice(&(c as f32).to_le_bytes());
                offset += 4;
            }
        }
        record[48..50].copy_from_slice(&0u16.to_le_bytes());
        writer.write_all(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Reads binary STL into a vertex-soup mesh.
///
/// Stored normals are ignored; the winding carries the orientation.
///
/// # Errors
///
/// Returns [`MeshError::MalformedStl`] when the input ends before the
/// header, the count, or the announced number of triangles.
pub fn read_stl_binary<R: Read>(mut reader: R) -> Result<Mesh, MeshError> {
    let mut header = [0u8; HEADER_SIZE + 4];
    read_record(&mut reader, &mut header, "header")?;
    let count = u32::from_le_bytes([header[80], header[81], header[82], header[83]]) as usize;

    let mut mesh = Mesh::with_capacity(count);
    let mut record = [0u8; TRIANGLE_SIZE];
    for index in 0..count {
        read_record(&mut reader, &mut record, &format!("triangle {index} of {count}"))?;
        mesh.push_triangle(
            read_vertex(&record[12..24]),
            read_vertex(&record[24..36]),
            read_vertex(&record[36..48]),
        );
    }

    Ok(mesh)
}

fn read_record<R: Read>(reader: &mut R, buf: &mut [u8], what: &str) -> Result<(), MeshError> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => {
            MeshError::malformed_stl(format!("input ends inside {what}"))
        }
        _ => MeshError::Io(e),
    })
}

fn read_vertex(buf: &[u8]) -> DVec3 {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    DVec3::new(f64::from(x), f64::from(y), f64::from(z))
}
