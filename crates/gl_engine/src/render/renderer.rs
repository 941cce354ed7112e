//! Frame rendering and fixed GL state
//!
//! Owns the loaded GL context and the render state shared by all demos:
//! depth testing, back-face culling, viewport, wireframe fill mode, and the
//! per-frame clear.

use std::rc::Rc;

use glow::HasContext;
use thiserror::Error;

use crate::render::buffer::MeshBuffers;
use crate::render::window::Window;

/// Renderer initialization errors
#[derive(Error, Debug)]
pub enum RendererError {
    #[error("failed to initialize OpenGL: {0}")]
    InitializationFailed(String),
}

/// OpenGL renderer for the demo applications
///
/// Loads the GL function pointers from the window's context and applies the
/// fixed startup state. Shader programs and mesh buffers are created from
/// the shared context handle returned by [`Renderer::gl`].
pub struct Renderer {
    gl: Rc<glow::Context>,
}

impl Renderer {
    /// Load GL functions from the window's context and set startup state
    ///
    /// Enables depth testing and back-face culling; triangles are wound
    /// counter-clockwise when viewed from outside.
    pub fn new(window: &mut Window) -> Result<Self, RendererError> {
        let gl = window.load_gl();

        let version = unsafe { gl.get_parameter_string(glow::VERSION) };
        if version.is_empty() {
            return Err(RendererError::InitializationFailed(
                "no OpenGL version reported by the context".to_string(),
            ));
        }
        log::info!("OpenGL version: {}", version);

        unsafe {
            gl.enable(glow::DEPTH_TEST);
            gl.enable(glow::CULL_FACE);
            gl.line_width(1.0);
        }

        Ok(Self { gl: Rc::new(gl) })
    }

    /// Shared handle to the loaded GL context
    pub fn gl(&self) -> &Rc<glow::Context> {
        &self.gl
    }

    /// Set the background color used by [`Renderer::begin_frame`]
    pub fn set_clear_color(&self, r: f32, g: f32, b: f32) {
        unsafe { self.gl.clear_color(r, g, b, 1.0) };
    }

    /// Resize the GL viewport, typically from a framebuffer-size event
    pub fn set_viewport(&self, width: i32, height: i32) {
        unsafe { self.gl.viewport(0, 0, width, height) };
    }

    /// Toggle between filled and wireframe triangle rasterization
    pub fn set_wireframe(&self, enabled: bool) {
        let mode = if enabled { glow::LINE } else { glow::FILL };
        unsafe { self.gl.polygon_mode(glow::FRONT_AND_BACK, mode) };
    }

    /// Clear the color and depth buffers for a new frame
    pub fn begin_frame(&self) {
        unsafe { self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT) };
    }

    /// Draw an uploaded mesh with the currently bound program
    pub fn draw(&self, buffers: &MeshBuffers) {
        buffers.draw();
    }

    /// Present the finished frame
    pub fn end_frame(&self, window: &mut Window) {
        window.swap_buffers();
    }
}
