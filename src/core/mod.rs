//! Core-Domänentypen: Entity-Identität, Registry, Rechteck-Geometrie, Drag-Tracker.

pub mod drag_rect;
pub mod entity;
pub mod error;
pub mod input;
pub mod marker;
/// Entity-Registry
///
/// Hält den Geometrie-Snapshot aller selektierbaren Entities:
/// - EntityRegistry: Identität → Geometrie, Position, Gruppen
/// - Iteration in Registrierungsreihenfolge
pub mod registry;
pub mod rect;

pub use drag_rect::DragRectTracker;
pub use entity::{EntityGeometry, EntityId, RegisteredEntity};
pub use error::SelectionError;
pub use input::{Modifiers, PointerButton};
pub use marker::SelectionMarker;
pub use rect::WorldRect;
pub use registry::EntityRegistry;
