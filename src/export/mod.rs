//! Export Module
//!
//! Turns placed voxels into geometry: an in-memory triangle mesh and a
//! Wavefront OBJ writer on top of it.

pub mod mesh;
pub mod obj;

pub use mesh::{scene_mesh, MeshData, Vertex};
pub use obj::{export_obj, scene_to_obj_string, ExportError};
