//! Grid Model and Snapping
//!
//! Defines the fixed-size ground grid the painter operates on and the
//! hit-point snapping arithmetic that maps a ray/surface intersection to
//! the adjacent grid cell. The grid is immutable for a painting session.
//!
//! ## Coordinates
//! World space is Y-up with the grid lying in the Y=0 plane, centered at
//! the origin. Cell coordinates are integer lattice triples; the `y`
//! component is the height layer. A cube occupying cell `(i, j, k)` has
//! its center at `((i+0.5)s, (j+0.5)s, (k+0.5)s)` for cell size `s`; a
//! flat tile sits on the layer floor at `y = j*s`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Default edge length of one grid cell in world units.
pub const CELL_SIZE: f32 = 1.0;

/// Default number of cells per side of the ground plane.
pub const GRID_SIZE: u32 = 30;

/// Integer cell coordinate on the placement lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CellCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Height layer of this cell (its `y` lattice index).
    pub fn layer(self) -> i32 {
        self.y
    }
}

/// Ground grid configuration.
///
/// A square region of `grid_size` x `grid_size` cells of side `cell_size`,
/// centered at the origin in the Y=0 plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Edge length of one cell in world units.
    pub cell_size: f32,
    /// Number of cells per side of the ground plane.
    pub grid_size: u32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            grid_size: GRID_SIZE,
        }
    }
}

impl Grid {
    pub fn new(cell_size: f32, grid_size: u32) -> Self {
        Self {
            cell_size,
            grid_size,
        }
    }

    /// Half the ground-plane edge length in world units.
    ///
    /// The plane spans `[-half_extent, +half_extent]` on X and Z.
    pub fn half_extent(&self) -> f32 {
        self.cell_size * self.grid_size as f32 * 0.5
    }

    /// Check whether a world-space point lies over the ground plane.
    ///
    /// Only X and Z are considered; Y is ignored.
    pub fn contains_xz(&self, point: Vec3) -> bool {
        let half = self.half_extent();
        point.x.abs() <= half && point.z.abs() <= half
    }

    /// Snap a hit point plus face normal to the adjacent grid cell.
    ///
    /// The hit point is nudged half a cell along the face normal so that
    /// the resulting cell is the one in front of the hit face, then
    /// floored onto the lattice. Total and deterministic for any finite
    /// input; no side effects.
    pub fn snap_to_cell(&self, point: Vec3, normal: Vec3) -> CellCoord {
        let s = self.cell_size;
        let p = point + normal * (0.5 * s);
        CellCoord::new(
            (p.x / s).floor() as i32,
            (p.y / s).floor() as i32,
            (p.z / s).floor() as i32,
        )
    }

    /// World-space center of a cell (cube pivot).
    pub fn cube_center(&self, cell: CellCoord) -> Vec3 {
        let s = self.cell_size;
        Vec3::new(
            (cell.x as f32 + 0.5) * s,
            (cell.y as f32 + 0.5) * s,
            (cell.z as f32 + 0.5) * s,
        )
    }

    /// World-space pivot of a flat tile in a cell.
    ///
    /// Tiles are centered on X/Z but sit on the layer floor, so the Y
    /// component is the cell's bottom face rather than its center.
    pub fn tile_origin(&self, cell: CellCoord) -> Vec3 {
        let s = self.cell_size;
        Vec3::new(
            (cell.x as f32 + 0.5) * s,
            cell.y as f32 * s,
            (cell.z as f32 + 0.5) * s,
        )
    }

    /// Map an arbitrary world-space point to the cell containing it.
    pub fn world_to_cell(&self, point: Vec3) -> CellCoord {
        let s = self.cell_size;
        CellCoord::new(
            (point.x / s).floor() as i32,
            (point.y / s).floor() as i32,
            (point.z / s).floor() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let grid = Grid::default();
        assert_eq!(grid.cell_size, 1.0);
        assert_eq!(grid.grid_size, 30);
        assert_eq!(grid.half_extent(), 15.0);
    }

    #[test]
    fn test_snap_on_ground_hit() {
        let grid = Grid::default();
        // Hit on top of the ground plane near the origin, normal up.
        let cell = grid.snap_to_cell(Vec3::new(0.2, 0.0, 0.3), Vec3::Y);
        assert_eq!(cell, CellCoord::new(0, 0, 0));
        assert_eq!(grid.cube_center(cell), Vec3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_snap_negative_quadrant() {
        let grid = Grid::default();
        let cell = grid.snap_to_cell(Vec3::new(-0.2, 0.0, -1.7), Vec3::Y);
        assert_eq!(cell, CellCoord::new(-1, 0, -2));
        assert_eq!(grid.cube_center(cell), Vec3::new(-0.5, 0.5, -1.5));
    }

    #[test]
    fn test_snap_against_side_face() {
        let grid = Grid::default();
        // Hit the +X face of the cube in cell (0,0,0): the snapped cell
        // must be its +X neighbor.
        let cell = grid.snap_to_cell(Vec3::new(1.0, 0.5, 0.5), Vec3::X);
        assert_eq!(cell, CellCoord::new(1, 0, 0));
    }

    #[test]
    fn test_snap_on_top_of_voxel_stacks() {
        let grid = Grid::default();
        // Top face of the cube in cell (0,0,0) -> cell (0,1,0).
        let cell = grid.snap_to_cell(Vec3::new(0.5, 1.0, 0.5), Vec3::Y);
        assert_eq!(cell, CellCoord::new(0, 1, 0));
        assert_eq!(cell.layer(), 1);
    }

    #[test]
    fn test_cube_centers_lie_on_lattice() {
        let grid = Grid::new(2.0, 10);
        for x in -3..3 {
            for z in -3..3 {
                let center = grid.cube_center(CellCoord::new(x, 0, z));
                // Center coordinates are of the form (i + 0.5) * s.
                let fx = center.x / grid.cell_size - 0.5;
                let fz = center.z / grid.cell_size - 0.5;
                assert!((fx - fx.round()).abs() < 1e-6);
                assert!((fz - fz.round()).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_tile_origin_on_layer_floor() {
        let grid = Grid::default();
        let origin = grid.tile_origin(CellCoord::new(2, 0, -1));
        assert_eq!(origin, Vec3::new(2.5, 0.0, -0.5));
    }

    #[test]
    fn test_contains_xz() {
        let grid = Grid::default();
        assert!(grid.contains_xz(Vec3::new(0.0, 5.0, 0.0)));
        assert!(grid.contains_xz(Vec3::new(14.9, 0.0, -14.9)));
        assert!(!grid.contains_xz(Vec3::new(15.1, 0.0, 0.0)));
    }
}
