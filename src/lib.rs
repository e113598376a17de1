//! Voxel Brush Library
//!
//! The core of a grid-based voxel painting tool: snapping, placement
//! rules, scene bookkeeping and OBJ export, all decoupled from any
//! rendering or windowing backend. A host maps its native input events
//! onto the [`controller::PainterController`] and mirrors scene changes
//! by draining [`registry::SceneEvent`]s.
//!
//! # Modules
//!
//! - [`grid`] - Grid model and the hit-point snapping arithmetic
//! - [`object`] - Scene object types (ground plane, cubes, tiles)
//! - [`registry`] - Flat object registry with a pending-event queue
//! - [`pick`] - CPU raycasting against the registry
//! - [`camera`] - Orbit camera and screen-to-world ray construction
//! - [`placement`] - Place/remove rules, cursor mode and drag sessions
//! - [`controller`] - The per-session interaction state machine
//! - [`input`] - Windowing-agnostic mouse and keyboard state
//! - [`export`] - Triangle mesh building and Wavefront OBJ output
//! - [`scene_file`] - Versioned JSON scene persistence
//!
//! # Example
//!
//! ```
//! use voxel_brush::controller::PainterController;
//! use voxel_brush::grid::Grid;
//! use voxel_brush::input::{MouseButton, Position};
//!
//! let mut painter = PainterController::new(Grid::default());
//!
//! // Host forwards pointer events in normalized screen coordinates.
//! painter.pointer_pressed(Position::new(0.5, 0.5), MouseButton::Left);
//! painter.pointer_released(MouseButton::Left);
//!
//! // Renderer mirrors whatever changed.
//! for event in painter.drain_scene_events() {
//!     let _ = event;
//! }
//! ```

pub mod camera;
pub mod controller;
pub mod export;
pub mod grid;
pub mod input;
pub mod object;
pub mod pick;
pub mod placement;
pub mod registry;
pub mod scene_file;

pub use camera::OrbitCamera;
pub use controller::{PainterController, PreviewCursor};
pub use grid::{CellCoord, Grid};
pub use object::{ObjectId, SceneObject, Voxel, VoxelKind};
pub use placement::{CursorMode, PaintAction, PlacementSession};
pub use registry::{SceneEvent, SceneRegistry};
