//! Picking
//!
//! CPU raycasting against the scene registry: ray vs. the bounded ground
//! plane and ray vs. voxel boxes, returning intersections ordered nearest
//! first. Keeps hit-testing on the CPU so the painter needs nothing from
//! the host renderer beyond a camera.

use glam::Vec3;

use crate::grid::Grid;
use crate::object::{ObjectId, SceneObject, VoxelKind};
use crate::registry::SceneRegistry;

/// Tiles are picked as very thin boxes so the slab test stays numerically
/// well behaved; the fraction is of one cell size.
const TILE_PICK_THICKNESS: f32 = 0.02;

/// A ray defined by origin and normalized direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    /// Precomputed 1/direction for the slab test.
    inv_direction: Vec3,
}

impl Ray {
    /// Create a new ray; `direction` should be normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            inv_direction: Vec3::new(
                1.0 / direction.x,
                1.0 / direction.y,
                1.0 / direction.z,
            ),
        }
    }

    /// Point along the ray at parameter `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Axis-aligned box used for voxel picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extent(center: Vec3, half_extent: Vec3) -> Self {
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }
}

/// A ray/object intersection. `normal` is the outward normal of the face
/// that was hit.
#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    pub object: ObjectId,
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
}

/// Slab-method ray/AABB test.
///
/// Returns the entry distance and the outward normal of the entered face,
/// or `None` when the box is missed or lies behind the origin.
fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<(f32, Vec3)> {
    let t1 = (aabb.min - ray.origin) * ray.inv_direction;
    let t2 = (aabb.max - ray.origin) * ray.inv_direction;

    let t_min = t1.min(t2);
    let t_max = t1.max(t2);

    let t_near = t_min.x.max(t_min.y).max(t_min.z);
    let t_far = t_max.x.min(t_max.y).min(t_max.z);

    if t_near > t_far || t_far < 0.0 || t_near < 0.0 {
        return None;
    }

    // The axis contributing t_near is the entered face; its outward
    // normal opposes the ray on that axis.
    let normal = if t_near == t_min.x {
        Vec3::new(-ray.direction.x.signum(), 0.0, 0.0)
    } else if t_near == t_min.y {
        Vec3::new(0.0, -ray.direction.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, -ray.direction.z.signum())
    };

    Some((t_near, normal))
}

/// Ray vs. the bounded ground plane at Y=0.
///
/// The plane is single-sided: only rays approaching from above hit it.
fn ray_ground(ray: &Ray, grid: &Grid) -> Option<(f32, Vec3)> {
    if ray.direction.y.abs() < 1e-6 || ray.direction.y > 0.0 {
        return None;
    }
    let t = -ray.origin.y / ray.direction.y;
    if t < 0.0 {
        return None;
    }
    let hit = ray.at(t);
    if !grid.contains_xz(hit) {
        return None;
    }
    Some((t, Vec3::Y))
}

/// Picking box of a voxel in world space.
pub fn voxel_aabb(kind: VoxelKind, center: Vec3, grid: &Grid) -> Aabb {
    let half = grid.cell_size * 0.5;
    match kind {
        VoxelKind::Cube => Aabb::from_center_half_extent(center, Vec3::splat(half)),
        VoxelKind::Tile => {
            let thickness = grid.cell_size * TILE_PICK_THICKNESS;
            Aabb::new(
                Vec3::new(center.x - half, center.y, center.z - half),
                Vec3::new(center.x + half, center.y + thickness, center.z + half),
            )
        }
    }
}

/// Intersect a ray with every registry object, nearest first.
pub fn intersect_scene(ray: &Ray, registry: &SceneRegistry, grid: &Grid) -> Vec<Intersection> {
    let mut hits = Vec::new();
    for (id, object) in registry.iter() {
        let hit = match object {
            SceneObject::GroundPlane => ray_ground(ray, grid),
            SceneObject::Voxel(voxel) => {
                let aabb = voxel_aabb(voxel.kind, voxel.world_position(grid), grid);
                ray_aabb(ray, &aabb)
            }
        };
        if let Some((t, normal)) = hit {
            hits.push(Intersection {
                object: id,
                point: ray.at(t),
                normal,
                distance: t,
            });
        }
    }
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Nearest intersection, if any.
pub fn pick_nearest(ray: &Ray, registry: &SceneRegistry, grid: &Grid) -> Option<Intersection> {
    intersect_scene(ray, registry, grid).into_iter().next()
}
