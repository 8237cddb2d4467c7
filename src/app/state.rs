//! Application State: zentrale Datenhaltung der Selektion.

mod app_state;
mod drag;
mod selection;
mod view;

pub use app_state::AppState;
pub use drag::{DragPhase, DragState};
pub use selection::SelectionState;
pub use view::ViewState;
