//! # GL Engine
//!
//! A small OpenGL rendering engine for interactive mesh demos.
//!
//! The crate provides the pieces a windowed demo needs and nothing more:
//!
//! - **Windowing**: GLFW window with an OpenGL 3.3 core profile context
//! - **Rendering**: GLSL program loading, GPU mesh buffers, fixed render state
//! - **Geometry**: interleaved vertex/index meshes and a UV-sphere generator
//! - **Assets**: flat binary vertex/index file loading
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_engine::render::{Camera, Mesh, MeshBuffers, Renderer, ShaderProgram, Window};
//! use gl_engine::foundation::math::Vec3;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut window = Window::new("Demo", 1024, 576)?;
//!     let renderer = Renderer::new(&mut window)?;
//!     let program = ShaderProgram::from_files(
//!         renderer.gl(),
//!         "resources/shaders/planet.vert",
//!         "resources/shaders/planet.frag",
//!     )?;
//!     let mesh = Mesh::uv_sphere(50.0, 36, 72);
//!     let buffers = MeshBuffers::upload(renderer.gl(), &mesh, &program)?;
//!     let camera = Camera::perspective(Vec3::new(0.0, 50.0, 200.0), 45.0, 16.0 / 9.0, 1.0, 1000.0);
//!
//!     while !window.should_close() {
//!         window.poll_events();
//!         renderer.begin_frame();
//!         program.bind();
//!         program.set_mat4("view_matrix", &camera.get_view_matrix());
//!         program.set_mat4("projection_matrix", &camera.get_projection_matrix());
//!         renderer.draw(&buffers);
//!         window.swap_buffers();
//!     }
//!     Ok(())
//! }
//! ```

pub mod foundation;
pub mod assets;
pub mod render;
