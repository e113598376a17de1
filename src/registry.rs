//! Scene Registry
//!
//! The flat collection of hit-testable objects: the ground plane plus all
//! placed voxels. This is deliberately smaller than a full render scene
//! (which also holds grid lines, lights and the preview cursor); the host
//! renderer mirrors registry mutations by draining [`SceneEvent`]s after
//! each batch of input events.

use crate::grid::CellCoord;
use crate::object::{ObjectId, SceneObject, Voxel};

/// A registry mutation the host renderer has not yet observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    Added { id: ObjectId, object: SceneObject },
    Removed { id: ObjectId, object: SceneObject },
}

/// Flat object set with identity-stable ids and a pending event queue.
#[derive(Debug)]
pub struct SceneRegistry {
    objects: Vec<(ObjectId, SceneObject)>,
    next_id: u32,
    events: Vec<SceneEvent>,
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneRegistry {
    /// Create a registry containing only the ground plane.
    pub fn new() -> Self {
        let mut registry = Self {
            objects: Vec::new(),
            next_id: 0,
            events: Vec::new(),
        };
        let ground = registry.alloc_id();
        registry
            .objects
            .push((ground, SceneObject::GroundPlane));
        registry
            .events
            .push(SceneEvent::Added {
                id: ground,
                object: SceneObject::GroundPlane,
            });
        registry
    }

    fn alloc_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Id of the ground plane. Always present; allocated first.
    pub fn ground_id(&self) -> ObjectId {
        ObjectId(0)
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects
            .iter()
            .find(|(oid, _)| *oid == id)
            .map(|(_, object)| object)
    }

    /// Add a voxel and queue the matching event.
    ///
    /// Cells are not deduplicated; two voxels may occupy the same cell.
    /// Hosts that care can check [`Self::voxels_in_cell`] first.
    pub fn add_voxel(&mut self, voxel: Voxel) -> ObjectId {
        let id = self.alloc_id();
        let object = SceneObject::Voxel(voxel);
        self.objects.push((id, object));
        self.events.push(SceneEvent::Added { id, object });
        log::debug!(
            "added {:?} voxel at cell ({}, {}, {}) as {:?}",
            voxel.kind,
            voxel.cell.x,
            voxel.cell.y,
            voxel.cell.z,
            id
        );
        id
    }

    /// Remove an object by id and queue the matching event.
    ///
    /// The ground plane is never removed; asking for it returns `None`.
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let index = self.objects.iter().position(|(oid, _)| *oid == id)?;
        if self.objects[index].1.is_ground() {
            return None;
        }
        let (_, object) = self.objects.remove(index);
        self.events.push(SceneEvent::Removed { id, object });
        log::debug!("removed {:?}", id);
        Some(object)
    }

    /// All tracked objects, ground plane included.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().map(|(id, object)| (*id, object))
    }

    /// All placed voxels.
    pub fn voxels(&self) -> impl Iterator<Item = (ObjectId, &Voxel)> {
        self.objects
            .iter()
            .filter_map(|(id, object)| object.as_voxel().map(|voxel| (*id, voxel)))
    }

    /// Voxels occupying a given cell. Lets a host warn about overlap if
    /// it cares; the registry itself allows duplicates.
    pub fn voxels_in_cell(&self, cell: CellCoord) -> impl Iterator<Item = (ObjectId, &Voxel)> {
        self.voxels().filter(move |(_, voxel)| voxel.cell == cell)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of placed voxels (registry size minus the ground plane).
    pub fn voxel_count(&self) -> usize {
        self.objects.len() - 1
    }

    /// Take all pending scene events for the host renderer.
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }
}
