//! Mesh representation for 3D models
//!
//! Provides the vertex layout shared by all demos plus procedural mesh
//! generation. Meshes are host-side geometry containers; GPU upload is
//! handled by [`crate::render::buffer::MeshBuffers`].

use crate::foundation::math::constants::{PI, TAU};

/// 3D vertex data structure for rendering
///
/// Represents a single vertex with position, normal, and texture coordinate
/// data. The `#[repr(C)]` attribute ensures a consistent 32-byte interleaved
/// memory layout, which is what the GPU buffer upload and the flat binary
/// mesh files both rely on.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in 3D space
    pub position: [f32; 3],

    /// Normal vector
    pub normal: [f32; 3],

    /// Texture coordinates
    pub tex_coord: [f32; 2],
}

// Safe to implement Pod and Zeroable for Vertex since it only contains f32 arrays
unsafe impl bytemuck::Pod for Vertex {}
unsafe impl bytemuck::Zeroable for Vertex {}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

/// 3D mesh containing vertices and indices for rendering
///
/// Represents a complete 3D model with vertex data and triangle indices.
/// Indices are triangle corners with stride 3, wound counter-clockwise when
/// viewed from outside so back-face culling can stay enabled.
///
/// Meshes are built once at startup (generated or loaded from disk) and are
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex data
    pub vertices: Vec<Vertex>,

    /// Index data for triangles
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new mesh
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Generate a UV sphere centered at the origin
    ///
    /// Produces the standard latitude/longitude tessellation: `lat_segments`
    /// rows from the north pole (+Z) to the south pole, `lon_segments`
    /// columns around the polar axis. Each grid point carries its unit
    /// direction as the normal, the direction scaled by `radius` as the
    /// position, and `(phi / 2pi, 1 - theta / pi)` as the texture
    /// coordinate.
    ///
    /// # Topology
    /// Vertices are stored row-major, `lat_segments + 1` rows of
    /// `lon_segments + 1` columns, so a grid point `(i, j)` lives at index
    /// `i * (lon_segments + 1) + j`. The pole rows and the seam column are
    /// replicated rather than special-cased; this keeps the indexing formula
    /// uniform at the cost of a few redundant vertices. Quads are split
    /// along a fixed diagonal into two counter-clockwise triangles; the
    /// cells touching the pole rows emit zero-area triangles, which
    /// rasterize to nothing and are harmless.
    ///
    /// # Determinism
    /// A pure function of its arguments: regenerating with the same
    /// `(radius, lat_segments, lon_segments)` yields a bitwise-identical
    /// mesh.
    ///
    /// Callers must pass `lat_segments >= 1` and `lon_segments >= 1`;
    /// degenerate resolutions are not guarded against.
    pub fn uv_sphere(radius: f32, lat_segments: u32, lon_segments: u32) -> Self {
        let rows = lat_segments + 1;
        let cols = lon_segments + 1;

        let mut vertices = Vec::with_capacity((rows * cols) as usize);
        for i in 0..rows {
            // Polar angle: 0 at the north pole, pi at the south pole
            let theta = PI * i as f32 / lat_segments as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();

            for j in 0..cols {
                // Azimuthal angle around the +Z polar axis
                let phi = TAU * j as f32 / lon_segments as f32;
                let (sin_phi, cos_phi) = phi.sin_cos();

                let direction = [sin_theta * cos_phi, sin_theta * sin_phi, cos_theta];
                vertices.push(Vertex::new(
                    [
                        radius * direction[0],
                        radius * direction[1],
                        radius * direction[2],
                    ],
                    direction,
                    [phi / TAU, 1.0 - theta / PI],
                ));
            }
        }

        let mut indices = Vec::with_capacity((6 * lat_segments * lon_segments) as usize);
        for i in 1..rows {
            for j in 0..lon_segments {
                let below = i * cols + j;
                let above = (i - 1) * cols + j;

                // Counter-clockwise when viewed from outside the sphere
                indices.extend_from_slice(&[below, below + 1, above]);
                indices.extend_from_slice(&[below + 1, above + 1, above]);
            }
        }

        Self::new(vertices, indices)
    }

    /// Number of triangles described by the index list
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_sphere_vertex_and_index_counts() {
        let sphere = Mesh::uv_sphere(50.0, 36, 72);

        assert_eq!(sphere.vertices.len(), 37 * 73);
        assert_eq!(sphere.indices.len(), 6 * 36 * 72);
        assert_eq!(sphere.triangle_count(), 2 * 36 * 72);
    }

    #[test]
    fn test_sphere_minimal_example_resolution() {
        // R=1, L=2, G=4 is small enough to reason about by hand
        let sphere = Mesh::uv_sphere(1.0, 2, 4);

        assert_eq!(sphere.vertices.len(), 15);
        assert_eq!(sphere.indices.len(), 48);

        // The whole first row is the north pole, the last row the south pole
        for vertex in &sphere.vertices[0..5] {
            assert_relative_eq!(vertex.position[0], 0.0, epsilon = EPSILON);
            assert_relative_eq!(vertex.position[1], 0.0, epsilon = EPSILON);
            assert_relative_eq!(vertex.position[2], 1.0, epsilon = EPSILON);
            assert_relative_eq!(vertex.normal[2], 1.0, epsilon = EPSILON);
        }
        for vertex in &sphere.vertices[10..15] {
            assert_relative_eq!(vertex.position[2], -1.0, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_sphere_normals_are_unit_scaled_positions() {
        let radius = 30.0;
        let sphere = Mesh::uv_sphere(radius, 9, 17);

        for vertex in &sphere.vertices {
            let n = vertex.normal;
            let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert_relative_eq!(length, 1.0, epsilon = EPSILON);

            // Position is computed as radius * normal, so equality is exact
            for k in 0..3 {
                assert_eq!(vertex.position[k], radius * vertex.normal[k]);
            }
        }
    }

    #[test]
    fn test_sphere_indices_in_bounds() {
        let sphere = Mesh::uv_sphere(1.0, 7, 5);
        let vertex_count = sphere.vertices.len() as u32;

        assert_eq!(sphere.indices.len() % 3, 0);
        for &index in &sphere.indices {
            assert!(index < vertex_count, "index {} out of bounds", index);
        }
    }

    #[test]
    fn test_sphere_texcoords_in_unit_square() {
        let sphere = Mesh::uv_sphere(2.5, 12, 24);

        for vertex in &sphere.vertices {
            let [u, v] = vertex.tex_coord;
            assert!((0.0..=1.0).contains(&u), "u = {} out of range", u);
            assert!((0.0..=1.0).contains(&v), "v = {} out of range", v);
        }
    }

    #[test]
    fn test_sphere_equator_lies_in_xy_plane() {
        let sphere = Mesh::uv_sphere(10.0, 8, 16);

        // Row i = 4 of 8 is the equator
        let cols = 17;
        for j in 0..cols {
            let vertex = &sphere.vertices[4 * cols + j];
            assert_relative_eq!(vertex.position[2], 0.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_sphere_generation_is_idempotent() {
        let first = Mesh::uv_sphere(50.0, 36, 72);
        let second = Mesh::uv_sphere(50.0, 36, 72);

        assert_eq!(first.indices, second.indices);
        assert_eq!(first.vertices.len(), second.vertices.len());
        for (a, b) in first.vertices.iter().zip(&second.vertices) {
            // Bitwise comparison, not approximate
            assert_eq!(a.position, b.position);
            assert_eq!(a.normal, b.normal);
            assert_eq!(a.tex_coord, b.tex_coord);
        }
    }

    #[test]
    fn test_sphere_winding_faces_outward() {
        let sphere = Mesh::uv_sphere(1.0, 8, 16);

        // For every non-degenerate triangle the geometric normal must point
        // away from the origin, otherwise culling would eat the front faces.
        for triangle in sphere.indices.chunks_exact(3) {
            let p = |i: u32| {
                let v = sphere.vertices[i as usize].position;
                crate::foundation::math::Vec3::new(v[0], v[1], v[2])
            };
            let (a, b, c) = (p(triangle[0]), p(triangle[1]), p(triangle[2]));

            let face_normal = (b - a).cross(&(c - a));
            if face_normal.norm() < 1e-4 {
                continue; // degenerate pole sliver
            }
            let centroid = (a + b + c) / 3.0;
            assert!(
                face_normal.dot(&centroid) > 0.0,
                "triangle {:?} winds clockwise",
                triangle
            );
        }
    }

    #[test]
    fn test_vertex_byte_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);

        let vertex = Vertex::new([1.0, 2.0, 3.0], [0.0, 0.0, 1.0], [0.5, 0.25]);
        let bytes: &[u8] = bytemuck::bytes_of(&vertex);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0, 0.0, 1.0, 0.5, 0.25]);
    }
}
