//! Interaction Controller
//!
//! The per-session state machine driving the painter: it consumes
//! windowing-agnostic pointer and key events, runs picking and the
//! placement rules, and maintains the preview cursor. What used to live
//! in a handful of globals is one explicit struct a host owns.

use glam::Vec3;
use std::path::Path;

use crate::camera::OrbitCamera;
use crate::export::{self, ExportError};
use crate::grid::{CellCoord, Grid};
use crate::input::{InputState, KeyCode, MouseButton, Position};
use crate::pick::{self, Intersection};
use crate::placement::{self, CursorMode, PaintAction, PlacementSession};
use crate::registry::{SceneEvent, SceneRegistry};
use crate::scene_file::{self, SceneFileError};

/// The ghost preview shown under the pointer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewCursor {
    /// Which kind the next placement creates; space toggles this.
    pub mode: CursorMode,
    /// Cell the cursor last targeted, once the pointer has hit the scene.
    pub cell: Option<CellCoord>,
    /// World-space pivot where the preview mesh should be drawn.
    pub position: Option<Vec3>,
}

/// Owns all mutable painting state for one session.
#[derive(Debug)]
pub struct PainterController {
    pub grid: Grid,
    pub camera: OrbitCamera,
    pub registry: SceneRegistry,
    pub cursor: PreviewCursor,
    session: PlacementSession,
    input: InputState,
}

impl Default for PainterController {
    fn default() -> Self {
        Self::new(Grid::default())
    }
}

impl PainterController {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            camera: OrbitCamera::default(),
            registry: SceneRegistry::new(),
            cursor: PreviewCursor::default(),
            session: PlacementSession::new(),
            input: InputState::new(),
        }
    }

    // ========================================================================
    // Pointer events
    // ========================================================================

    /// Pointer moved to a new position.
    ///
    /// Updates the preview cursor, and drag-paints when only the primary
    /// button is held (the erase/place choice still follows shift).
    pub fn pointer_moved(&mut self, position: Position) {
        self.input.mouse.set_position(position);
        self.refresh_cursor();

        let buttons = self.input.mouse.buttons;
        if buttons.left && !buttons.right && !buttons.middle {
            self.apply_paint(MouseButton::Left);
        }
    }

    /// A mouse button went down at `position`.
    pub fn pointer_pressed(&mut self, position: Position, button: MouseButton) {
        self.input.mouse.set_position(position);
        self.input.mouse.set_button(button, true);
        if matches!(button, MouseButton::Left | MouseButton::Right) {
            self.apply_paint(button);
        }
    }

    /// A mouse button was released. Any release ends the drag layer lock.
    pub fn pointer_released(&mut self, button: MouseButton) {
        self.input.mouse.set_button(button, false);
        self.session.clear();
    }

    /// Whether a drag-paint stroke is in progress.
    pub fn is_dragging(&self) -> bool {
        self.input.mouse.buttons.left && self.session.is_active()
    }

    // ========================================================================
    // Key events
    // ========================================================================

    pub fn key_pressed(&mut self, key: KeyCode) {
        self.input.keyboard.handle_key(key, true);
    }

    /// Space toggles the cursor mode on release, matching the usual
    /// keyup-driven toggle so holding the key does not flicker the mode.
    pub fn key_released(&mut self, key: KeyCode) {
        self.input.keyboard.handle_key(key, false);
        if key == KeyCode::Space {
            self.cursor.mode = self.cursor.mode.toggled();
            self.refresh_cursor();
        }
    }

    // ========================================================================
    // Painting
    // ========================================================================

    fn pick_under_pointer(&self) -> Option<Intersection> {
        let position = self.input.mouse.position?;
        let ray = self.camera.screen_ray(position.to_tuple());
        pick::pick_nearest(&ray, &self.registry, &self.grid)
    }

    /// Run one paint step at the current pointer position. Missing the
    /// scene entirely is silently a no-op.
    fn apply_paint(&mut self, button: MouseButton) {
        let Some(hit) = self.pick_under_pointer() else {
            return;
        };
        match placement::select_action(button, &self.input.keyboard.modifiers) {
            PaintAction::Place => {
                placement::try_place(
                    &mut self.registry,
                    &self.grid,
                    &hit,
                    self.cursor.mode,
                    &mut self.session,
                );
            }
            PaintAction::Remove => {
                placement::try_remove(&mut self.registry, &hit);
            }
        }
        self.refresh_cursor();
    }

    /// Re-derive the preview cursor from the current pointer position.
    /// Missing the scene leaves the cursor where it was.
    fn refresh_cursor(&mut self) {
        if let Some(hit) = self.pick_under_pointer() {
            let cell = self.grid.snap_to_cell(hit.point, hit.normal);
            self.cursor.cell = Some(cell);
            self.cursor.position = Some(match self.cursor.mode {
                CursorMode::Cube => self.grid.cube_center(cell),
                CursorMode::Tile => self.grid.tile_origin(cell),
            });
        }
    }

    // ========================================================================
    // Host integration
    // ========================================================================

    /// Take the registry mutations accumulated since the last drain so
    /// the host renderer can mirror them.
    pub fn drain_scene_events(&mut self) -> Vec<SceneEvent> {
        self.registry.drain_events()
    }

    /// Export all placed voxels as a Wavefront OBJ file.
    pub fn export_obj(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        export::export_obj(&self.registry, &self.grid, path)
    }

    /// Save the current scene to a JSON file.
    pub fn save_scene(&self, path: impl AsRef<Path>) -> Result<(), SceneFileError> {
        scene_file::save_scene(&self.registry, &self.grid, path)
    }

    /// Replace the current scene with one loaded from disk.
    ///
    /// Existing voxels are removed through the registry so the host sees
    /// matching `Removed` events before the loaded `Added` ones.
    pub fn load_scene(&mut self, path: impl AsRef<Path>) -> Result<(), SceneFileError> {
        let file = scene_file::load_scene(path)?;

        let existing: Vec<_> = self.registry.voxels().map(|(id, _)| id).collect();
        for id in existing {
            self.registry.remove(id);
        }
        self.grid = file.grid();
        for voxel in &file.voxels {
            self.registry.add_voxel(*voxel);
        }
        self.session.clear();
        self.refresh_cursor();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::VoxelKind;

    // Camera straight above the center of cell (0,0,0) so the screen
    // center picks that cell without floor ambiguity.
    fn test_controller() -> PainterController {
        let mut controller = PainterController::new(Grid::default());
        controller.camera.target = Vec3::new(0.5, 0.0, 0.5);
        controller.camera.pitch = 1.55;
        controller.camera.distance = 20.0;
        controller.drain_scene_events();
        controller
    }

    const CENTER: Position = Position { x: 0.5, y: 0.5 };

    #[test]
    fn test_click_places_cube() {
        let mut controller = test_controller();
        controller.pointer_pressed(CENTER, MouseButton::Left);
        controller.pointer_released(MouseButton::Left);

        assert_eq!(controller.registry.voxel_count(), 1);
        let (_, voxel) = controller.registry.voxels().next().unwrap();
        assert_eq!(voxel.kind, VoxelKind::Cube);
        assert_eq!(voxel.cell, CellCoord::new(0, 0, 0));
    }

    #[test]
    fn test_right_click_removes() {
        let mut controller = test_controller();
        controller.pointer_pressed(CENTER, MouseButton::Left);
        controller.pointer_released(MouseButton::Left);

        controller.pointer_pressed(CENTER, MouseButton::Right);
        controller.pointer_released(MouseButton::Right);
        assert_eq!(controller.registry.voxel_count(), 0);
    }

    #[test]
    fn test_shift_click_removes() {
        let mut controller = test_controller();
        controller.pointer_pressed(CENTER, MouseButton::Left);
        controller.pointer_released(MouseButton::Left);

        controller.key_pressed(KeyCode::ShiftLeft);
        controller.pointer_pressed(CENTER, MouseButton::Left);
        controller.pointer_released(MouseButton::Left);
        assert_eq!(controller.registry.voxel_count(), 0);
    }

    #[test]
    fn test_ground_never_removed() {
        let mut controller = test_controller();
        controller.pointer_pressed(CENTER, MouseButton::Right);
        controller.pointer_released(MouseButton::Right);
        assert_eq!(controller.registry.len(), 1);
    }

    #[test]
    fn test_space_toggles_cursor_mode() {
        let mut controller = test_controller();
        assert_eq!(controller.cursor.mode, CursorMode::Cube);
        controller.key_pressed(KeyCode::Space);
        // Still cube while held.
        assert_eq!(controller.cursor.mode, CursorMode::Cube);
        controller.key_released(KeyCode::Space);
        assert_eq!(controller.cursor.mode, CursorMode::Tile);
        controller.key_released(KeyCode::Space);
        assert_eq!(controller.cursor.mode, CursorMode::Cube);
    }

    #[test]
    fn test_cursor_tracks_pointer() {
        let mut controller = test_controller();
        controller.pointer_moved(CENTER);
        assert_eq!(controller.cursor.cell, Some(CellCoord::new(0, 0, 0)));
        assert_eq!(controller.cursor.position, Some(Vec3::new(0.5, 0.5, 0.5)));

        controller.key_released(KeyCode::Space);
        assert_eq!(controller.cursor.position, Some(Vec3::new(0.5, 0.0, 0.5)));
    }

    #[test]
    fn test_tile_mode_places_tile() {
        let mut controller = test_controller();
        controller.key_released(KeyCode::Space);
        controller.pointer_pressed(CENTER, MouseButton::Left);
        controller.pointer_released(MouseButton::Left);

        let (_, voxel) = controller.registry.voxels().next().unwrap();
        assert_eq!(voxel.kind, VoxelKind::Tile);
        assert_eq!(voxel.cell.layer(), 0);
    }

    #[test]
    fn test_any_release_ends_layer_lock() {
        let mut controller = test_controller();
        controller.pointer_pressed(CENTER, MouseButton::Left);
        assert_eq!(controller.registry.voxel_count(), 1);

        // Releasing a different button mid-drag still unlocks the layer,
        // so the continuing left-drag may stack onto the placed cube.
        controller.pointer_released(MouseButton::Right);
        controller.pointer_moved(CENTER);
        assert_eq!(controller.registry.voxel_count(), 2);
        let layers: Vec<i32> = controller
            .registry
            .voxels()
            .map(|(_, voxel)| voxel.cell.layer())
            .collect();
        assert_eq!(layers, vec![0, 1]);
    }

    #[test]
    fn test_events_mirror_clicks() {
        let mut controller = test_controller();
        controller.pointer_pressed(CENTER, MouseButton::Left);
        controller.pointer_released(MouseButton::Left);
        controller.pointer_pressed(CENTER, MouseButton::Right);
        controller.pointer_released(MouseButton::Right);

        let events = controller.drain_scene_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], SceneEvent::Added { .. }));
        assert!(matches!(events[1], SceneEvent::Removed { .. }));
    }

    #[test]
    fn test_missed_pick_is_noop() {
        let mut controller = test_controller();
        // Aim well off the grid.
        controller.camera.target = Vec3::new(100.0, 0.0, 100.0);
        controller.pointer_pressed(CENTER, MouseButton::Left);
        assert_eq!(controller.registry.voxel_count(), 0);
        assert!(controller.cursor.cell.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut controller = test_controller();
        controller.pointer_pressed(CENTER, MouseButton::Left);
        controller.pointer_released(MouseButton::Left);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        controller.save_scene(&path).unwrap();

        let mut restored = test_controller();
        restored.load_scene(&path).unwrap();
        assert_eq!(restored.registry.voxel_count(), 1);
        let (_, voxel) = restored.registry.voxels().next().unwrap();
        assert_eq!(voxel.cell, CellCoord::new(0, 0, 0));
    }
}
