//! Handler für die View-Transformation.

use crate::app::AppState;

/// Setzt den Welt-Ursprung der Zeigerkoordinaten.
pub fn set_origin(state: &mut AppState, origin: glam::Vec2) {
    state.view.origin = origin;
    log::debug!("View-Ursprung auf {:?} gesetzt", origin);
}
