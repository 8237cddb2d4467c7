//! Feature-Handler für SelectionCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs
//! und meldet `SelectionChanged` nach außen. Der Controller dispatcht an die
//! passende Handler-Funktion.

pub mod drag;
pub mod registry;
pub mod selection;
pub mod view;

use crate::app::{AppState, SelectionEvent};
use crate::core::EntityId;

/// Meldet den aktuellen Selektionsstand.
fn notify_selection_changed(state: &mut AppState) {
    let selection = state.selection.ids();
    state.emit(SelectionEvent::SelectionChanged { selection });
}

/// Meldet `SelectionChanged` nur, wenn sich die Selektion geändert hat.
fn notify_if_selection_changed(state: &mut AppState, old_selection: Vec<EntityId>) {
    if !state.selection.selected.iter().eq(old_selection.iter()) {
        notify_selection_changed(state);
    }
}
