//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod observer;
/// Selection State und Controller
///
/// Dieses Modul verwaltet den Zustand der Selektion (Registry, Auswahl, Drag, View).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::SelectionController;
pub use events::{SelectionCommand, SelectionEvent, SelectionIntent};
pub use observer::SelectionObserver;
pub use state::{AppState, DragPhase, DragState, SelectionState, ViewState};
