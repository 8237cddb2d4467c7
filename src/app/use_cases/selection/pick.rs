//! Use-Case: Entity-Selektion per Klick (mit und ohne Modifier).

use crate::app::AppState;
use crate::core::EntityId;

use super::helpers::{clear_selection, insert_into_selection, remove_from_selection};

/// Klick-Selektion über den Zeiger-Pfad.
///
/// Ohne `additive` wird zuerst die bestehende Selektion aufgehoben, danach
/// wird die Entity umgeschaltet. Der folgende Loslass-Klick wird ignoriert.
pub fn click_select_entity(state: &mut AppState, entity: EntityId, additive: bool) {
    let Ok(geometry) = state.registry.bounds_of(entity) else {
        log::warn!("Klick auf unregistrierte Entity {} ignoriert", entity);
        return;
    };

    if !additive {
        state.selection.ignore_next_input = false;
        clear_selection(state);
    }

    if !remove_from_selection(state, entity) {
        insert_into_selection(state, entity, geometry);
    }

    state.selection.ignore_next_input = true;
}

/// Selektiert eine noch nicht selektierte Entity (direkter Entity-Klick).
///
/// Anders als `click_select_entity` wird nie abgewählt.
pub fn select_entity(state: &mut AppState, entity: EntityId, additive: bool) {
    let Ok(geometry) = state.registry.bounds_of(entity) else {
        log::warn!("Klick auf unregistrierte Entity {} ignoriert", entity);
        return;
    };

    if !additive {
        state.selection.ignore_next_input = false;
        clear_selection(state);
    }

    insert_into_selection(state, entity, geometry);
    state.selection.ignore_next_input = true;
}
