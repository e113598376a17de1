//! Scene Persistence
//!
//! Versioned JSON save files for a painting session: the grid
//! configuration plus every placed voxel. The event queue and input
//! state are transient and never serialized.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::object::Voxel;
use crate::registry::SceneRegistry;

/// Current scene file format version.
pub const SCENE_FILE_VERSION: u32 = 1;

/// Serializable snapshot of a painting session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    pub version: u32,
    pub cell_size: f32,
    pub grid_size: u32,
    pub voxels: Vec<Voxel>,
}

impl SceneFile {
    /// Snapshot the current registry and grid.
    pub fn from_scene(registry: &SceneRegistry, grid: &Grid) -> Self {
        Self {
            version: SCENE_FILE_VERSION,
            cell_size: grid.cell_size,
            grid_size: grid.grid_size,
            voxels: registry.voxels().map(|(_, voxel)| *voxel).collect(),
        }
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.cell_size, self.grid_size)
    }
}

/// Errors that can occur during scene file operations.
#[derive(Debug)]
pub enum SceneFileError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    UnsupportedVersion(u32),
}

impl std::fmt::Display for SceneFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneFileError::IoError(e) => write!(f, "IO error: {}", e),
            SceneFileError::JsonError(e) => write!(f, "JSON error: {}", e),
            SceneFileError::UnsupportedVersion(v) => {
                write!(
                    f,
                    "unsupported scene file version: {} (expected {})",
                    v, SCENE_FILE_VERSION
                )
            }
        }
    }
}

impl std::error::Error for SceneFileError {}

impl From<std::io::Error> for SceneFileError {
    fn from(e: std::io::Error) -> Self {
        SceneFileError::IoError(e)
    }
}

impl From<serde_json::Error> for SceneFileError {
    fn from(e: serde_json::Error) -> Self {
        SceneFileError::JsonError(e)
    }
}

/// Save the current scene as pretty-printed JSON.
pub fn save_scene(
    registry: &SceneRegistry,
    grid: &Grid,
    path: impl AsRef<Path>,
) -> Result<(), SceneFileError> {
    let path = path.as_ref();
    let file = SceneFile::from_scene(registry, grid);
    let json = serde_json::to_string_pretty(&file)?;
    std::fs::write(path, json)?;
    log::info!("saved {} voxels to {}", file.voxels.len(), path.display());
    Ok(())
}

/// Load a scene file, rejecting unknown format versions.
pub fn load_scene(path: impl AsRef<Path>) -> Result<SceneFile, SceneFileError> {
    let json = std::fs::read_to_string(path.as_ref())?;
    let file: SceneFile = serde_json::from_str(&json)?;
    if file.version != SCENE_FILE_VERSION {
        log::warn!(
            "rejecting scene file version {} (supported: {})",
            file.version,
            SCENE_FILE_VERSION
        );
        return Err(SceneFileError::UnsupportedVersion(file.version));
    }
    Ok(file)
}
