//! Placement Engine
//!
//! Decides, for one qualifying pointer event, whether a voxel is added or
//! removed, and enforces the two placement constraints: drag-painting
//! stays on one height layer, and tiles only go on the ground plane.

use crate::grid::Grid;
use crate::input::{ModifierState, MouseButton};
use crate::object::{ObjectId, SceneObject, Voxel, VoxelKind};
use crate::pick::Intersection;
use crate::registry::SceneRegistry;

/// Which preview cursor is active and what kind new placements create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    #[default]
    Cube,
    Tile,
}

impl CursorMode {
    /// The other mode; toggled by the space key.
    pub fn toggled(self) -> Self {
        match self {
            CursorMode::Cube => CursorMode::Tile,
            CursorMode::Tile => CursorMode::Cube,
        }
    }

    pub fn kind(self) -> VoxelKind {
        match self {
            CursorMode::Cube => VoxelKind::Cube,
            CursorMode::Tile => VoxelKind::Tile,
        }
    }
}

/// What a qualifying pointer event does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintAction {
    Place,
    Remove,
}

/// Removal is chosen for the secondary button or while shift is held;
/// everything else places.
pub fn select_action(button: MouseButton, modifiers: &ModifierState) -> PaintAction {
    if button == MouseButton::Right || modifiers.shift {
        PaintAction::Remove
    } else {
        PaintAction::Place
    }
}

/// Drag-paint state: the height layer locked by the first placement while
/// the primary button stays held.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementSession {
    locked_layer: Option<i32>,
}

impl PlacementSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.locked_layer.is_some()
    }

    /// Whether a placement on `layer` is allowed under the current lock.
    pub fn allows(&self, layer: i32) -> bool {
        match self.locked_layer {
            None => true,
            Some(locked) => locked == layer,
        }
    }

    pub fn lock(&mut self, layer: i32) {
        self.locked_layer = Some(layer);
    }

    /// Called on pointer release; the next drag may pick a new layer.
    pub fn clear(&mut self) {
        self.locked_layer = None;
    }
}

/// Try to place a voxel at the cell adjacent to the hit face.
///
/// Rejected when the cursor is in tile mode and the hit target is not
/// the ground plane, when a tile would leave the floor layer, or when the
/// session has locked a different height layer. On success the registry
/// is mutated and the session lock updated.
pub fn try_place(
    registry: &mut SceneRegistry,
    grid: &Grid,
    hit: &Intersection,
    mode: CursorMode,
    session: &mut PlacementSession,
) -> Option<ObjectId> {
    let target = registry.get(hit.object)?;
    match (mode, target) {
        (CursorMode::Tile, SceneObject::Voxel(_)) => return None,
        (CursorMode::Tile, SceneObject::GroundPlane) => {}
        (CursorMode::Cube, _) => {}
    }

    let cell = grid.snap_to_cell(hit.point, hit.normal);
    if mode == CursorMode::Tile && cell.layer() != 0 {
        return None;
    }
    if !session.allows(cell.layer()) {
        return None;
    }

    let id = registry.add_voxel(Voxel::new(mode.kind(), cell));
    session.lock(cell.layer());
    Some(id)
}

/// Try to remove the intersected object.
///
/// The ground plane is never removable; anything else leaves the
/// registry and a `Removed` event is queued.
pub fn try_remove(registry: &mut SceneRegistry, hit: &Intersection) -> Option<ObjectId> {
    match registry.get(hit.object)? {
        SceneObject::GroundPlane => None,
        SceneObject::Voxel(_) => {
            registry.remove(hit.object)?;
            Some(hit.object)
        }
    }
}
