//! GPU buffer management for mesh data
//!
//! Uploads host-side meshes once into GPU-resident vertex/index buffers
//! following RAII patterns with proper allocation and cleanup.

use std::mem;
use std::rc::Rc;

use glow::HasContext;
use thiserror::Error;

use crate::render::primitives::{Mesh, Vertex};
use crate::render::shader::ShaderProgram;

/// Buffer allocation errors
#[derive(Error, Debug)]
pub enum BufferError {
    #[error("GL buffer allocation failed: {0}")]
    Allocation(String),
}

/// Shader attribute names with component count and byte offset into [`Vertex`]
const VERTEX_ATTRIBUTES: [(&str, i32, i32); 3] = [
    ("position", 3, 0),
    ("normal", 3, 12),
    ("texcoord", 2, 24),
];

/// GPU-resident mesh: vertex array, vertex buffer, and index buffer
///
/// The upload happens once at construction; the buffers are immutable
/// afterwards and deleted on drop.
pub struct MeshBuffers {
    gl: Rc<glow::Context>,
    vao: glow::VertexArray,
    vertex_buffer: glow::Buffer,
    index_buffer: glow::Buffer,
    index_count: i32,
}

impl MeshBuffers {
    /// Upload a mesh and wire its attributes to a shader program
    ///
    /// Attributes are bound by name (`position`, `normal`, `texcoord`) with
    /// the fixed interleaved [`Vertex`] layout. Attributes the program does
    /// not declare (or that its linker dropped) are skipped.
    pub fn upload(
        gl: &Rc<glow::Context>,
        mesh: &Mesh,
        program: &ShaderProgram,
    ) -> Result<Self, BufferError> {
        let stride = mem::size_of::<Vertex>() as i32;

        unsafe {
            let vao = gl.create_vertex_array().map_err(BufferError::Allocation)?;
            let vertex_buffer = gl.create_buffer().map_err(BufferError::Allocation)?;
            let index_buffer = gl.create_buffer().map_err(BufferError::Allocation)?;

            gl.bind_vertex_array(Some(vao));

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&mesh.vertices),
                glow::STATIC_DRAW,
            );

            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(index_buffer));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(&mesh.indices),
                glow::STATIC_DRAW,
            );

            for (name, components, offset) in VERTEX_ATTRIBUTES {
                match program.attrib_location(name) {
                    Some(location) => {
                        gl.enable_vertex_attrib_array(location);
                        gl.vertex_attrib_pointer_f32(
                            location,
                            components,
                            glow::FLOAT,
                            false,
                            stride,
                            offset,
                        );
                    }
                    None => {
                        log::debug!("vertex attribute {:?} not active in program, skipping", name);
                    }
                }
            }

            gl.bind_vertex_array(None);

            log::debug!(
                "Uploaded mesh: {} vertices, {} indices",
                mesh.vertices.len(),
                mesh.indices.len()
            );

            Ok(Self {
                gl: Rc::clone(gl),
                vao,
                vertex_buffer,
                index_buffer,
                index_count: mesh.indices.len() as i32,
            })
        }
    }

    /// Issue an indexed triangle draw of the whole mesh
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl
                .draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_INT, 0);
            self.gl.bind_vertex_array(None);
        }
    }

    /// Number of indices in the uploaded mesh
    pub fn index_count(&self) -> i32 {
        self.index_count
    }
}

impl Drop for MeshBuffers {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.vertex_buffer);
            self.gl.delete_buffer(self.index_buffer);
            self.gl.delete_vertex_array(self.vao);
        }
    }
}
