//! # Mesh Data Structure
//!
//! Triangle mesh stored as an append-only vertex buffer plus index triples.
//!
//! The knob generator writes every triangle with three vertices of its own
//! (vertex soup): no vertex is shared between triangles, and nothing written
//! is ever mutated afterwards. The index buffer is still kept so the mesh can
//! be handed straight to GPU consumers that expect indexed geometry.

use config::constants::EPSILON;
use glam::DVec3;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the STL and WASM boundaries.
///
/// # Example
///
/// ```rust
/// use knob_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.push_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert_eq!(mesh.triangle_count(), 1);
/// assert_eq!(mesh.vertex_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with room for the given number of triangles.
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangle_count * 3),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Appends a triangle with three fresh vertices.
    ///
    /// Counter-clockwise order (seen from outside) gives an outward normal.
    pub fn push_triangle(&mut self, a: DVec3, b: DVec3, c: DVec3) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&[a, b, c]);
        self.triangles.push([base, base + 1, base + 2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the three corner positions of a triangle.
    #[inline]
    pub fn triangle_positions(&self, index: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangles[index];
        [
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        ]
    }

    /// Iterates over every triangle as corner positions.
    pub fn iter_triangles(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        (0..self.triangles.len()).map(move |index| self.triangle_positions(index))
    }

    /// Unit normal of a triangle, or zero for a degenerate triangle.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let [v0, v1, v2] = self.triangle_positions(index);
        (v1 - v0).cross(v2 - v0).normalize_or_zero()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Signed volume enclosed by the mesh (mm³ for knob meshes).
    ///
    /// Sums the signed tetrahedra spanned by the origin and each triangle.
    /// Positive when the winding is consistently outward; only meaningful
    /// for closed meshes.
    pub fn signed_volume(&self) -> f64 {
        let volume: f64 = self
            .iter_triangles()
            .map(|[v0, v1, v2]| v0.dot(v1.cross(v2)))
            .sum();
        volume / 6.0
    }

    /// Number of triangles whose area is (numerically) zero.
    pub fn degenerate_triangle_count(&self) -> usize {
        self.iter_triangles()
            .filter(|[v0, v1, v2]| (*v1 - *v0).cross(*v2 - *v0).length() < EPSILON)
            .count()
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats an index
    /// - No zero-area triangles
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        let indices_ok = self.triangles.iter().all(|tri| {
            tri.iter().all(|&i| i < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        });

        indices_ok && self.degenerate_triangle_count() == 0
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports per-vertex normals as f32 array for GPU.
    ///
    /// Every vertex belongs to exactly one triangle, so each receives its
    /// face normal and the preview renders flat-shaded.
    pub fn normals_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for index in 0..self.triangles.len() {
            let n = self.face_normal(index);
            for _ in 0..3 {
                result.push(n.x as f32);
                result.push(n.y as f32);
                result.push(n.z as f32);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Unit cube as 12 outward-wound triangles.
    fn unit_cube() -> Mesh {
        let p = |x: f64, y: f64, z: f64| DVec3::new(x, y, z);
        let quads = [
            [p(0., 0., 0.), p(0., 1., 0.), p(1., 1., 0.), p(1., 0., 0.)],
            [p(0., 0., 1.), p(1., 0., 1.), p(1., 1., 1.), p(0., 1., 1.)],
            [p(0., 0., 0.), p(1., 0., 0.), p(1., 0., 1.), p(0., 0., 1.)],
            [p(1., 1., 0.), p(0., 1., 0.), p(0., 1., 1.), p(1., 1., 1.)],
            [p(0., 1., 0.), p(0., 0., 0.), p(0., 0., 1.), p(0., 1., 1.)],
            [p(1., 0., 0.), p(1., 1., 0.), p(1., 1., 1.), p(1., 0., 1.)],
        ];
        let mut mesh = Mesh::new();
        for [a, b, c, d] in quads {
            mesh.push_triangle(a, b, c);
            mesh.push_triangle(a, c, d);
        }
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_push_triangle_never_shares_vertices() {
        let mut mesh = Mesh::new();
        mesh.push_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
        mesh.push_triangle(DVec3::ZERO, DVec3::Y, DVec3::Z);
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangles(), &[[0, 1, 2], [3, 4, 5]]);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mesh = unit_cube();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::ONE);
    }

    #[test]
    fn test_signed_volume_unit_cube() {
        let mesh = unit_cube();
        assert_relative_eq!(mesh.signed_volume(), 1.0, epsilon = 1e-12);
        assert!(mesh.validate());
    }

    #[test]
    fn test_signed_volume_is_translation_invariant_for_closed_mesh() {
        let cube = unit_cube();
        let mut shifted = Mesh::new();
        let offset = DVec3::new(5.0, -3.0, 2.0);
        for [a, b, c] in cube.iter_triangles() {
            shifted.push_triangle(a + offset, b + offset, c + offset);
        }
        assert_relative_eq!(shifted.signed_volume(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_signed_volume_negative_when_inverted() {
        let cube = unit_cube();
        let mut inverted = Mesh::new();
        for [a, b, c] in cube.iter_triangles() {
            inverted.push_triangle(a, c, b);
        }
        assert_relative_eq!(inverted.signed_volume(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_face_normal() {
        let mut mesh = Mesh::new();
        mesh.push_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
        assert_eq!(mesh.face_normal(0), DVec3::Z);
    }

    #[test]
    fn test_degenerate_triangle_detected() {
        let mut mesh = Mesh::new();
        mesh.push_triangle(DVec3::ZERO, DVec3::X, DVec3::X * 2.0);
        assert_eq!(mesh.degenerate_triangle_count(), 1);
        assert!(!mesh.validate());
        assert_eq!(mesh.face_normal(0), DVec3::ZERO);
    }

    #[test]
    fn test_gpu_buffers() {
        let mut mesh = Mesh::new();
        mesh.push_triangle(DVec3::new(1.0, 2.0, 3.0), DVec3::X, DVec3::Y);
        assert_eq!(&mesh.vertices_f32()[..3], &[1.0f32, 2.0, 3.0]);
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
        assert_eq!(mesh.normals_f32().len(), 9);
    }
}
