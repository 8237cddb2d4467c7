//! Handler für Selektions-Operationen.

use glam::Vec2;

use super::{notify_if_selection_changed, notify_selection_changed};
use crate::app::use_cases;
use crate::app::use_cases::selection::ClearOutcome;
use crate::app::AppState;
use crate::core::{EntityId, SelectionError};

/// Fügt eine Entity explizit hinzu.
pub fn add(state: &mut AppState, entity: EntityId) -> Result<(), SelectionError> {
    use_cases::selection::add_to_selection(state, entity)?;
    notify_selection_changed(state);
    Ok(())
}

/// Schaltet die Mitgliedschaft einer Entity explizit um.
pub fn toggle(state: &mut AppState, entity: EntityId) -> Result<(), SelectionError> {
    use_cases::selection::toggle_selection(state, entity)?;
    notify_selection_changed(state);
    Ok(())
}

/// Hebt die Selektion auf (sofern nicht durch `ignore_next_input` unterdrückt).
pub fn clear(state: &mut AppState) {
    if let ClearOutcome::Cleared { .. } = use_cases::selection::clear_selection(state) {
        notify_selection_changed(state);
    }
}

/// Hebt die Selektion per Rechtsklick auf dem Hintergrund auf.
pub fn clear_from_pointer(state: &mut AppState) {
    let old = state.selection.ids();
    use_cases::selection::clear_selection(state);
    notify_if_selection_changed(state, old);
}

/// Klick-Selektion über den Zeiger-Pfad (Umschalten).
pub fn click_select(state: &mut AppState, entity: EntityId, additive: bool) {
    let old = state.selection.ids();
    use_cases::selection::click_select_entity(state, entity, additive);
    notify_if_selection_changed(state, old);
}

/// Direkte Entity-Selektion ohne Abwählen.
pub fn select(state: &mut AppState, entity: EntityId, additive: bool) {
    let old = state.selection.ids();
    use_cases::selection::select_entity(state, entity, additive);
    notify_if_selection_changed(state, old);
}

/// Loslass-Klick auf dem Hintergrund.
pub fn release_click(state: &mut AppState, world_pos: Vec2) {
    use_cases::selection::release_click(state, world_pos);
}

/// Explizite Bewegungsanforderung.
pub fn request_move(state: &mut AppState, world_pos: Vec2, force: bool) {
    use_cases::selection::request_move(state, world_pos, force);
}
