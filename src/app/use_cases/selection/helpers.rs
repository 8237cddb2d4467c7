//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::app::{AppState, SelectionEvent};
use crate::core::{EntityGeometry, EntityId, SelectionMarker};

/// Ergebnis eines `clear_selection`-Aufrufs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Durch `ignore_next_input` unterdrückt, Flag wurde verbraucht
    Suppressed,
    /// Selektion geleert
    Cleared { removed: usize },
}

/// Fügt eine registrierte Entity hinzu und meldet den Marker.
///
/// Gibt `false` zurück, wenn sie bereits selektiert war.
pub(crate) fn insert_into_selection(
    state: &mut AppState,
    entity: EntityId,
    geometry: EntityGeometry,
) -> bool {
    insert_into_selection_at(state, entity, geometry, None)
}

/// Wie `insert_into_selection`, optional an einem Index (auf die Länge begrenzt).
pub(crate) fn insert_into_selection_at(
    state: &mut AppState,
    entity: EntityId,
    geometry: EntityGeometry,
    index: Option<usize>,
) -> bool {
    if state.selection.contains(entity) {
        return false;
    }

    match index {
        Some(index) => {
            let index = index.min(state.selection.len());
            state.selection.selected.shift_insert(index, entity);
        }
        None => {
            state.selection.selected.insert(entity);
        }
    }

    let marker = SelectionMarker::for_geometry(
        &geometry,
        state.options.marker_padding,
        state.options.marker_edge_divisor,
        state.options.marker_edge_width,
    );
    state.emit(SelectionEvent::EntitySelected { entity, marker });
    log::debug!("Entity {} zur Selektion hinzugefügt", entity);
    true
}

/// Entfernt eine Entity aus der Selektion und gibt ihren Marker frei.
pub(crate) fn remove_from_selection(state: &mut AppState, entity: EntityId) -> bool {
    if !state.selection.selected.shift_remove(&entity) {
        return false;
    }

    state.emit(SelectionEvent::EntityDeselected { entity });
    log::debug!("Entity {} aus Selektion entfernt", entity);
    true
}

/// Löscht die aktuelle Selektion.
///
/// Ist `ignore_next_input` gesetzt, wird stattdessen nur das Flag verbraucht.
pub fn clear_selection(state: &mut AppState) -> ClearOutcome {
    if state.selection.ignore_next_input {
        state.selection.ignore_next_input = false;
        log::debug!("Selektion aufheben nach selektierendem Klick unterdrückt");
        return ClearOutcome::Suppressed;
    }

    // Rückwärts, damit jedes Entfernen am Ende der IndexSet passiert
    let removed: Vec<EntityId> = state.selection.selected.iter().rev().copied().collect();
    for &entity in &removed {
        remove_from_selection(state, entity);
    }

    if !removed.is_empty() {
        log::info!("Selektion aufgehoben ({} Entities)", removed.len());
    }

    ClearOutcome::Cleared {
        removed: removed.len(),
    }
}
