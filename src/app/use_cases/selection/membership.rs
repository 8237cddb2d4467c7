//! Use-Case: Explizites Hinzufügen und Umschalten einzelner Entities.

use crate::app::AppState;
use crate::core::{EntityId, SelectionError};

use super::helpers::{insert_into_selection, insert_into_selection_at, remove_from_selection};

/// Fügt eine Entity idempotent zur Selektion hinzu.
///
/// Unbekannte Identitäten liefern `NotRegistered`, die Selektion bleibt unverändert.
pub fn add_to_selection(state: &mut AppState, entity: EntityId) -> Result<(), SelectionError> {
    let geometry = state.registry.bounds_of(entity).inspect_err(|_| {
        log::warn!("Unregistrierte Entity {} sollte selektiert werden", entity);
    })?;

    insert_into_selection(state, entity, geometry);
    Ok(())
}

/// Entfernt die Entity, falls selektiert, sonst wird sie hinzugefügt.
///
/// Wird dieselbe Entity direkt wieder eingeschaltet, landet sie an ihrem
/// alten Index. Gibt den neuen Selektionszustand der Entity zurück.
pub fn toggle_selection(state: &mut AppState, entity: EntityId) -> Result<bool, SelectionError> {
    let geometry = state.registry.bounds_of(entity).inspect_err(|_| {
        log::warn!("Unregistrierte Entity {} sollte umgeschaltet werden", entity);
    })?;

    if let Some(index) = state.selection.selected.get_index_of(&entity) {
        remove_from_selection(state, entity);
        state.selection.last_toggled_off = Some((entity, index));
        return Ok(false);
    }

    let restore_index = match state.selection.last_toggled_off.take() {
        Some((previous, index)) if previous == entity => Some(index),
        _ => None,
    };
    insert_into_selection_at(state, entity, geometry, restore_index);
    Ok(true)
}
