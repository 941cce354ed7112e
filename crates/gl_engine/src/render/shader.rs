//! GLSL shader program management
//!
//! Loads vertex/fragment shader source from disk, compiles and links them
//! into a GL program, and exposes by-name uniform and attribute access.
//!
//! # Uniform tolerance policy
//! Setting a uniform whose name the linker did not keep (unused, optimized
//! out, or simply absent from this shader pair) is silently skipped. This
//! lets one host loop drive shaders with different uniform subsets.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use glow::HasContext;
use thiserror::Error;

use crate::foundation::math::Mat4;

/// Shader loading and build errors
#[derive(Error, Debug)]
pub enum ShaderError {
    #[error("failed to read shader source {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{stage} shader compilation failed: {log}")]
    Compile { stage: &'static str, log: String },

    #[error("shader program linking failed: {0}")]
    Link(String),

    #[error("GL object allocation failed: {0}")]
    Allocation(String),
}

/// Linked GL shader program
///
/// Deletes the underlying program object on drop.
pub struct ShaderProgram {
    gl: Rc<glow::Context>,
    program: glow::Program,
}

impl ShaderProgram {
    /// Build a program from vertex and fragment shader source files
    pub fn from_files(
        gl: &Rc<glow::Context>,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, ShaderError> {
        let vertex_src = read_source(vertex_path.as_ref())?;
        let fragment_src = read_source(fragment_path.as_ref())?;
        log::debug!(
            "Compiling shader program from {:?} and {:?}",
            vertex_path.as_ref(),
            fragment_path.as_ref()
        );
        Self::from_sources(gl, &vertex_src, &fragment_src)
    }

    /// Build a program from in-memory GLSL source strings
    pub fn from_sources(
        gl: &Rc<glow::Context>,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Self, ShaderError> {
        let vertex = compile_stage(gl, glow::VERTEX_SHADER, "vertex", vertex_src)?;
        let fragment = match compile_stage(gl, glow::FRAGMENT_SHADER, "fragment", fragment_src) {
            Ok(shader) => shader,
            Err(e) => {
                unsafe { gl.delete_shader(vertex) };
                return Err(e);
            }
        };

        let program = unsafe {
            let program = gl.create_program().map_err(ShaderError::Allocation)?;
            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);
            gl.detach_shader(program, vertex);
            gl.detach_shader(program, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(ShaderError::Link(log));
            }
            program
        };

        Ok(Self {
            gl: Rc::clone(gl),
            program,
        })
    }

    /// Make this program current
    ///
    /// Uniform setters affect the currently bound program, so call this
    /// before setting uniforms for the frame.
    pub fn bind(&self) {
        unsafe { self.gl.use_program(Some(self.program)) };
    }

    /// Set a 4x4 matrix uniform by name; missing names are skipped
    pub fn set_mat4(&self, name: &str, value: &Mat4) {
        if let Some(location) = self.uniform_location(name) {
            // nalgebra stores column-major, which is what GL expects
            unsafe {
                self.gl
                    .uniform_matrix_4_f32_slice(Some(&location), false, value.as_slice());
            }
        }
    }

    /// Set a scalar float uniform by name; missing names are skipped
    pub fn set_f32(&self, name: &str, value: f32) {
        if let Some(location) = self.uniform_location(name) {
            unsafe { self.gl.uniform_1_f32(Some(&location), value) };
        }
    }

    /// Set an unsigned integer uniform by name; missing names are skipped
    pub fn set_u32(&self, name: &str, value: u32) {
        if let Some(location) = self.uniform_location(name) {
            unsafe { self.gl.uniform_1_u32(Some(&location), value) };
        }
    }

    /// Look up a vertex attribute location by name
    ///
    /// Returns `None` for attributes the linker dropped, so callers can
    /// skip binding them.
    pub fn attrib_location(&self, name: &str) -> Option<u32> {
        unsafe { self.gl.get_attrib_location(self.program, name) }
    }

    fn uniform_location(&self, name: &str) -> Option<glow::UniformLocation> {
        unsafe { self.gl.get_uniform_location(self.program, name) }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { self.gl.delete_program(self.program) };
    }
}

fn read_source(path: &Path) -> Result<String, ShaderError> {
    fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn compile_stage(
    gl: &glow::Context,
    shader_type: u32,
    stage: &'static str,
    source: &str,
) -> Result<glow::Shader, ShaderError> {
    unsafe {
        let shader = gl.create_shader(shader_type).map_err(ShaderError::Allocation)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(ShaderError::Compile { stage, log });
        }
        Ok(shader)
    }
}
