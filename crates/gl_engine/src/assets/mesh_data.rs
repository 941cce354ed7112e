//! Flat binary mesh file loader
//!
//! Loads the two-file mesh format used by the dragon demo: a vertex file
//! holding a raw array of 32-byte [`Vertex`] records and an index file
//! holding a raw array of `u32` triangle corners, both in native (little
//! endian) byte order.

use std::fs;
use std::mem;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::render::primitives::{Mesh, Vertex};

/// Binary mesh loading errors
#[derive(Error, Debug)]
pub enum MeshDataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("vertex file size {size} is not a multiple of the {stride}-byte vertex record")]
    MisalignedVertexData { size: usize, stride: usize },

    #[error("index file size {size} is not a multiple of 4")]
    MisalignedIndexData { size: usize },

    #[error("index count {count} is not a multiple of 3")]
    PartialTriangle { count: usize },

    #[error("index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: u32, vertex_count: usize },
}

/// Loader for the flat binary vertex/index file pair
pub struct MeshDataLoader;

impl MeshDataLoader {
    /// Load a mesh from a vertex file and an index file
    ///
    /// Validates that both files are whole multiples of their record sizes,
    /// that the indices form complete triangles, and that every index is in
    /// bounds of the vertex array.
    pub fn load(
        vertex_path: impl AsRef<Path>,
        index_path: impl AsRef<Path>,
    ) -> Result<Mesh, MeshDataError> {
        let vertex_bytes = read_file(vertex_path.as_ref())?;
        let index_bytes = read_file(index_path.as_ref())?;

        let stride = mem::size_of::<Vertex>();
        if vertex_bytes.len() % stride != 0 {
            return Err(MeshDataError::MisalignedVertexData {
                size: vertex_bytes.len(),
                stride,
            });
        }
        if index_bytes.len() % mem::size_of::<u32>() != 0 {
            return Err(MeshDataError::MisalignedIndexData {
                size: index_bytes.len(),
            });
        }

        // The byte vectors carry no alignment guarantee, so read records
        // unaligned instead of casting the slices in place.
        let vertices: Vec<Vertex> = vertex_bytes
            .chunks_exact(stride)
            .map(bytemuck::pod_read_unaligned)
            .collect();
        let indices: Vec<u32> = index_bytes
            .chunks_exact(mem::size_of::<u32>())
            .map(bytemuck::pod_read_unaligned)
            .collect();

        if indices.len() % 3 != 0 {
            return Err(MeshDataError::PartialTriangle {
                count: indices.len(),
            });
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(MeshDataError::IndexOutOfBounds {
                index,
                vertex_count: vertices.len(),
            });
        }

        log::info!(
            "Loaded binary mesh: {} vertices, {} triangles",
            vertices.len(),
            indices.len() / 3
        );

        Ok(Mesh::new(vertices, indices))
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, MeshDataError> {
    fs::read(path).map_err(|source| MeshDataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "gl_engine_mesh_data_{}_{}",
            std::process::id(),
            name
        ));
        fs::write(&path, bytes).unwrap();
        path
    }

    fn sample_vertices() -> Vec<Vertex> {
        vec![
            Vertex::new([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
            Vertex::new([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
            Vertex::new([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0]),
        ]
    }

    #[test]
    fn test_load_round_trips_byte_images() {
        let vertices = sample_vertices();
        let indices: Vec<u32> = vec![0, 1, 2];

        let vertex_path = write_temp("ok.vertex.bin", bytemuck::cast_slice(&vertices));
        let index_path = write_temp("ok.index.bin", bytemuck::cast_slice(&indices));

        let mesh = MeshDataLoader::load(&vertex_path, &index_path).unwrap();
        assert_eq!(mesh.vertices, vertices);
        assert_eq!(mesh.indices, indices);

        fs::remove_file(vertex_path).ok();
        fs::remove_file(index_path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let missing = std::env::temp_dir().join("gl_engine_definitely_missing.bin");
        let index_path = write_temp("io.index.bin", bytemuck::cast_slice(&[0u32, 1, 2]));

        let result = MeshDataLoader::load(&missing, &index_path);
        assert!(matches!(result, Err(MeshDataError::Io { .. })));

        fs::remove_file(index_path).ok();
    }

    #[test]
    fn test_truncated_vertex_file_is_rejected() {
        let vertices = sample_vertices();
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        let vertex_path = write_temp("trunc.vertex.bin", &bytes[..bytes.len() - 5]);
        let index_path = write_temp("trunc.index.bin", bytemuck::cast_slice(&[0u32, 1, 2]));

        let result = MeshDataLoader::load(&vertex_path, &index_path);
        assert!(matches!(
            result,
            Err(MeshDataError::MisalignedVertexData { .. })
        ));

        fs::remove_file(vertex_path).ok();
        fs::remove_file(index_path).ok();
    }

    #[test]
    fn test_partial_triangle_is_rejected() {
        let vertices = sample_vertices();
        let vertex_path = write_temp("partial.vertex.bin", bytemuck::cast_slice(&vertices));
        let index_path = write_temp("partial.index.bin", bytemuck::cast_slice(&[0u32, 1]));

        let result = MeshDataLoader::load(&vertex_path, &index_path);
        assert!(matches!(
            result,
            Err(MeshDataError::PartialTriangle { count: 2 })
        ));

        fs::remove_file(vertex_path).ok();
        fs::remove_file(index_path).ok();
    }

    #[test]
    fn test_out_of_bounds_index_is_rejected() {
        let vertices = sample_vertices();
        let vertex_path = write_temp("oob.vertex.bin", bytemuck::cast_slice(&vertices));
        let index_path = write_temp("oob.index.bin", bytemuck::cast_slice(&[0u32, 1, 3]));

        let result = MeshDataLoader::load(&vertex_path, &index_path);
        assert!(matches!(
            result,
            Err(MeshDataError::IndexOutOfBounds {
                index: 3,
                vertex_count: 3,
            })
        ));

        fs::remove_file(vertex_path).ok();
        fs::remove_file(index_path).ok();
    }
}
