//! Asset loading

pub mod mesh_data;

pub use mesh_data::{MeshDataError, MeshDataLoader};
