//! Scene object types: the ground plane and placeable voxels.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::grid::{CellCoord, Grid};

/// Identity of an object tracked by the scene registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u32);

/// Which kind of geometry a placement creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoxelKind {
    /// Unit cube filling its cell.
    Cube,
    /// Flat tile lying on the cell's bottom face.
    Tile,
}

/// A placed voxel: kind plus the lattice cell it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voxel {
    pub kind: VoxelKind,
    pub cell: CellCoord,
}

impl Voxel {
    pub const fn new(kind: VoxelKind, cell: CellCoord) -> Self {
        Self { kind, cell }
    }

    /// World-space pivot of this voxel's geometry.
    ///
    /// Cubes pivot at the cell center; tiles pivot on the layer floor.
    pub fn world_position(&self, grid: &Grid) -> Vec3 {
        match self.kind {
            VoxelKind::Cube => grid.cube_center(self.cell),
            VoxelKind::Tile => grid.tile_origin(self.cell),
        }
    }
}

/// An object the picking ray can hit.
///
/// The ground plane is a distinct variant rather than a special voxel so
/// the placement and removal rules can be exhaustive matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneObject {
    GroundPlane,
    Voxel(Voxel),
}

impl SceneObject {
    pub fn is_ground(&self) -> bool {
        matches!(self, SceneObject::GroundPlane)
    }

    pub fn as_voxel(&self) -> Option<&Voxel> {
        match self {
            SceneObject::GroundPlane => None,
            SceneObject::Voxel(voxel) => Some(voxel),
        }
    }
}
