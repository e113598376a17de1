//! Mesh Building
//!
//! Triangle-mesh generation for placed voxels. Produces flat-shaded
//! geometry with per-face normals, which is what the OBJ writer and any
//! GPU upload path both want.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use static_assertions::assert_eq_size;

use crate::grid::Grid;
use crate::registry::SceneRegistry;

/// One mesh vertex: position and face normal.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

assert_eq_size!(Vertex, [u8; 24]);

/// Vertices plus triangle indices for a batch of voxels.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a quad given its four corners in counter-clockwise order
    /// (seen from the normal side) and the shared face normal.
    fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3) {
        let base = self.vertices.len() as u32;
        for corner in corners {
            self.vertices.push(Vertex {
                position: corner.to_array(),
                normal: normal.to_array(),
            });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Append the six faces of an axis-aligned cube centered at `center`
    /// with edge length `size`. 24 vertices, 12 triangles.
    pub fn push_cube(&mut self, center: Vec3, size: f32) {
        let h = size * 0.5;
        let (min, max) = (center - Vec3::splat(h), center + Vec3::splat(h));

        // +X
        self.push_quad(
            [
                Vec3::new(max.x, min.y, max.z),
                Vec3::new(max.x, min.y, min.z),
                Vec3::new(max.x, max.y, min.z),
                Vec3::new(max.x, max.y, max.z),
            ],
            Vec3::X,
        );
        // -X
        self.push_quad(
            [
                Vec3::new(min.x, min.y, min.z),
                Vec3::new(min.x, min.y, max.z),
                Vec3::new(min.x, max.y, max.z),
                Vec3::new(min.x, max.y, min.z),
            ],
            Vec3::NEG_X,
        );
        // +Y
        self.push_quad(
            [
                Vec3::new(min.x, max.y, max.z),
                Vec3::new(max.x, max.y, max.z),
                Vec3::new(max.x, max.y, min.z),
                Vec3::new(min.x, max.y, min.z),
            ],
            Vec3::Y,
        );
        // -Y
        self.push_quad(
            [
                Vec3::new(min.x, min.y, min.z),
                Vec3::new(max.x, min.y, min.z),
                Vec3::new(max.x, min.y, max.z),
                Vec3::new(min.x, min.y, max.z),
            ],
            Vec3::NEG_Y,
        );
        // +Z
        self.push_quad(
            [
                Vec3::new(min.x, min.y, max.z),
                Vec3::new(max.x, min.y, max.z),
                Vec3::new(max.x, max.y, max.z),
                Vec3::new(min.x, max.y, max.z),
            ],
            Vec3::Z,
        );
        // -Z
        self.push_quad(
            [
                Vec3::new(max.x, min.y, min.z),
                Vec3::new(min.x, min.y, min.z),
                Vec3::new(min.x, max.y, min.z),
                Vec3::new(max.x, max.y, min.z),
            ],
            Vec3::NEG_Z,
        );
    }

    /// Append a flat up-facing tile centered on X/Z at `origin`, lying in
    /// the plane `y = origin.y`. 4 vertices, 2 triangles.
    pub fn push_tile(&mut self, origin: Vec3, size: f32) {
        let h = size * 0.5;
        self.push_quad(
            [
                Vec3::new(origin.x - h, origin.y, origin.z + h),
                Vec3::new(origin.x + h, origin.y, origin.z + h),
                Vec3::new(origin.x + h, origin.y, origin.z - h),
                Vec3::new(origin.x - h, origin.y, origin.z - h),
            ],
            Vec3::Y,
        );
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Build one combined mesh from every placed voxel.
///
/// The ground plane, grid lines and preview cursor are view furniture and
/// never part of the export.
pub fn scene_mesh(registry: &SceneRegistry, grid: &Grid) -> MeshData {
    let mut mesh = MeshData::new();
    for (_, voxel) in registry.voxels() {
        let pivot = voxel.world_position(grid);
        match voxel.kind {
            crate::object::VoxelKind::Cube => mesh.push_cube(pivot, grid.cell_size),
            crate::object::VoxelKind::Tile => mesh.push_tile(pivot, grid.cell_size),
        }
    }
    mesh
}
