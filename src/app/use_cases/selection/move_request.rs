//! Use-Case: Bewegungsanforderungen an die selektierten Entities.

use glam::Vec2;

use crate::app::{AppState, SelectionEvent};

/// Loslass-Klick auf dem Hintergrund.
///
/// Ein gesetztes `ignore_next_input` wird verbraucht, sonst erhält jede
/// selektierte Entity ein `MoveRequested`. Gibt die Anzahl der Anforderungen zurück.
pub fn release_click(state: &mut AppState, world_pos: Vec2) -> usize {
    if state.selection.ignore_next_input {
        state.selection.ignore_next_input = false;
        log::debug!("Loslass-Klick nach selektierendem Klick ignoriert");
        return 0;
    }

    broadcast_move(state, world_pos)
}

/// Explizite Bewegungsanforderung des Hosts.
///
/// Während einer aktiven Rechteck-Geste nur mit `force`.
pub fn request_move(state: &mut AppState, world_pos: Vec2, force: bool) -> usize {
    if state.drag.is_active() && !force {
        log::debug!("Bewegungsanforderung während Drag-Rechteck verworfen");
        return 0;
    }

    broadcast_move(state, world_pos)
}

fn broadcast_move(state: &mut AppState, target: Vec2) -> usize {
    let selection = state.selection.ids();
    for &entity in &selection {
        state.emit(SelectionEvent::MoveRequested { entity, target });
    }

    if !selection.is_empty() {
        log::info!("Bewegung von {} Entities nach {:?} angefordert", selection.len(), target);
    }
    selection.len()
}
