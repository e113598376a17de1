//! OBJ Export
//!
//! Serializes the placed voxels to Wavefront OBJ text. Positions and
//! normals are written as `v`/`vn` lines and faces as `f i//i` triples
//! with 1-based indices, which every OBJ importer understands.

use std::fmt::Write as _;
use std::path::Path;

use crate::export::mesh::{scene_mesh, MeshData};
use crate::grid::Grid;
use crate::registry::SceneRegistry;

/// Errors that can occur during OBJ export.
#[derive(Debug)]
pub enum ExportError {
    IoError(std::io::Error),
    FmtError(std::fmt::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::IoError(e) => write!(f, "IO error: {}", e),
            ExportError::FmtError(e) => write!(f, "formatting error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::IoError(e)
    }
}

impl From<std::fmt::Error> for ExportError {
    fn from(e: std::fmt::Error) -> Self {
        ExportError::FmtError(e)
    }
}

/// Render a mesh as OBJ text.
pub fn mesh_to_obj_string(mesh: &MeshData) -> Result<String, ExportError> {
    let mut out = String::new();
    writeln!(out, "# exported by voxel_brush")?;
    writeln!(out, "o voxels")?;
    for vertex in &mesh.vertices {
        let [x, y, z] = vertex.position;
        writeln!(out, "v {} {} {}", x, y, z)?;
    }
    for vertex in &mesh.vertices {
        let [x, y, z] = vertex.normal;
        writeln!(out, "vn {} {} {}", x, y, z)?;
    }
    for triangle in mesh.indices.chunks_exact(3) {
        // OBJ indices are 1-based; position and normal arrays run in
        // lockstep so both sides of `//` match.
        let (a, b, c) = (triangle[0] + 1, triangle[1] + 1, triangle[2] + 1);
        writeln!(out, "f {}//{} {}//{} {}//{}", a, a, b, b, c, c)?;
    }
    Ok(out)
}

/// Render every placed voxel as OBJ text.
pub fn scene_to_obj_string(registry: &SceneRegistry, grid: &Grid) -> Result<String, ExportError> {
    mesh_to_obj_string(&scene_mesh(registry, grid))
}

/// Write the scene's voxels to an OBJ file on disk.
pub fn export_obj(
    registry: &SceneRegistry,
    grid: &Grid,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let contents = scene_to_obj_string(registry, grid)?;
    std::fs::write(path, contents)?;
    log::info!(
        "exported {} voxels to {}",
        registry.voxel_count(),
        path.display()
    );
    Ok(())
}
