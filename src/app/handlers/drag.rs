//! Handler für die Rechteck-Geste.

use glam::Vec2;

use super::notify_if_selection_changed;
use crate::app::use_cases;
use crate::app::AppState;

/// Startet das Drag-Rechteck.
pub fn begin(state: &mut AppState, world_pos: Vec2) {
    use_cases::selection::begin_drag_rect(state, world_pos);
}

/// Aktualisiert das Drag-Rechteck und meldet Selektionsänderungen.
pub fn update(state: &mut AppState, world_pos: Vec2) {
    let old = state.selection.ids();
    use_cases::selection::update_drag_rect(state, world_pos);
    notify_if_selection_changed(state, old);
}

/// Beendet das Drag-Rechteck.
pub fn finish(state: &mut AppState) {
    use_cases::selection::finish_drag_rect(state);
}

/// Bricht das Drag-Rechteck ab.
pub fn cancel(state: &mut AppState) {
    use_cases::selection::cancel_drag_rect(state);
}
