//! Pointer Selection Library.
//! Zeiger-gesteuerte Mehrfach-Selektion als Library für Host-Anwendungen und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppState, DragPhase, SelectionCommand, SelectionController, SelectionEvent, SelectionIntent,
    SelectionObserver, SelectionState, ViewState,
};
pub use core::{
    DragRectTracker, EntityGeometry, EntityId, EntityRegistry, Modifiers, PointerButton,
    RegisteredEntity, SelectionError, SelectionMarker, WorldRect,
};
pub use shared::SelectionOptions;
