//! Handler für Registrierung, Position und Gruppen.

use glam::Vec2;

use super::notify_selection_changed;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{EntityGeometry, EntityId};

/// Registriert eine Entity.
pub fn register(state: &mut AppState, entity: EntityId, geometry: EntityGeometry) {
    use_cases::registry::register_entity(state, entity, geometry);
}

/// Meldet eine Entity ab. War sie selektiert, ändert sich die Selektion.
pub fn unregister(state: &mut AppState, entity: EntityId) {
    if use_cases::registry::unregister_entity(state, entity) {
        notify_selection_changed(state);
    }
}

/// Übernimmt eine Positionsmeldung des Hosts.
pub fn set_position(state: &mut AppState, entity: EntityId, position: Vec2) {
    if let Err(e) = use_cases::registry::set_entity_position(state, entity, position) {
        log::warn!("Positionsmeldung verworfen: {}", e);
    }
}

/// Ordnet eine Entity einer Gruppe zu.
pub fn assign_group(state: &mut AppState, entity: EntityId, group: &str) {
    if let Err(e) = use_cases::registry::assign_entity_group(state, entity, group) {
        log::warn!("Gruppenzuordnung verworfen: {}", e);
    }
}
