//! Rendering subsystem
//!
//! Window and context management, shader programs, GPU mesh buffers, and
//! the host-side geometry primitives they consume.

pub mod buffer;
pub mod primitives;
pub mod renderer;
pub mod shader;
pub mod window;

// Re-export commonly used types
pub use buffer::{BufferError, MeshBuffers};
pub use primitives::{Camera, Mesh, Vertex};
pub use renderer::{Renderer, RendererError};
pub use shader::{ShaderError, ShaderProgram};
pub use window::{Window, WindowError};
