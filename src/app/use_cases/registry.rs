//! Use-Cases für An- und Abmeldung selektierbarer Entities.

use glam::Vec2;

use crate::app::AppState;
use crate::core::{EntityGeometry, EntityId, SelectionError};

use super::selection::remove_from_selection;

/// Registriert eine Entity. Bereits bekannte Identitäten bleiben unverändert.
pub fn register_entity(state: &mut AppState, entity: EntityId, geometry: EntityGeometry) -> bool {
    let inserted = state.registry.register(entity, geometry);
    if inserted {
        log::info!(
            "Entity {} registriert (Größe {:?}, Offset {:?})",
            entity,
            geometry.bounding_size,
            geometry.anchor_offset
        );
    } else {
        log::debug!("Entity {} ist bereits registriert", entity);
    }
    inserted
}

/// Meldet eine Entity ab und entfernt sie ggf. aus der Selektion.
///
/// Gibt `true` zurück, wenn die Entity selektiert war.
pub fn unregister_entity(state: &mut AppState, entity: EntityId) -> bool {
    if state.registry.unregister(entity).is_none() {
        log::debug!("Abmelden der unbekannten Entity {} ignoriert", entity);
        return false;
    }

    if matches!(state.selection.last_toggled_off, Some((id, _)) if id == entity) {
        state.selection.last_toggled_off = None;
    }

    let was_selected = remove_from_selection(state, entity);
    log::info!("Entity {} abgemeldet", entity);
    was_selected
}

/// Übernimmt die vom Host gemeldete Position.
pub fn set_entity_position(
    state: &mut AppState,
    entity: EntityId,
    position: Vec2,
) -> Result<(), SelectionError> {
    state.registry.set_position(entity, position)
}

/// Ordnet die Entity einer Gruppe zu.
pub fn assign_entity_group(
    state: &mut AppState,
    entity: EntityId,
    group: &str,
) -> Result<bool, SelectionError> {
    let added = state.registry.assign_group(entity, group)?;
    if added {
        log::debug!("Entity {} der Gruppe '{}' zugeordnet", entity, group);
    }
    Ok(added)
}
