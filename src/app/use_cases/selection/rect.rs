//! Use-Case: Rechteck-Selektion (Marquee) mit Schrumpf-Hysterese.

use glam::Vec2;

use crate::app::{AppState, DragPhase, SelectionEvent};
use crate::core::{EntityGeometry, EntityId};

use super::helpers::{clear_selection, insert_into_selection};

/// Startet ein Drag-Rechteck am Weltpunkt. Die Geste ist danach `Armed`.
pub fn begin_drag_rect(state: &mut AppState, world_pos: Vec2) {
    state.drag.tracker.begin(world_pos);
    state.drag.last_observed_size = Vec2::ZERO;
    state.drag.phase = DragPhase::Armed;
    log::debug!("Drag-Rechteck gestartet bei {:?}", world_pos);
}

/// Aktualisiert die Endecke und selektiert alle Entities im Rechteck.
///
/// Schrumpft das vorzeichenbehaftete Delta gegenüber dem letzten Update auf
/// beiden Achsen, wird die Selektion vor dem Hit-Test aufgehoben. Rechtecke
/// unterhalb von `minimal_selection_size` werden nicht getestet.
pub fn update_drag_rect(state: &mut AppState, world_pos: Vec2) {
    match state.drag.phase {
        DragPhase::Idle => return,
        DragPhase::Armed => state.drag.phase = DragPhase::Dragging,
        DragPhase::Dragging => {}
    }

    state.drag.tracker.update_end(world_pos);
    let (Some(rect), Some(delta)) = (
        state.drag.tracker.normalized_rect(),
        state.drag.tracker.signed_delta(),
    ) else {
        return;
    };

    if !rect.is_smaller_than(state.options.minimal_selection_size) {
        if delta.cmplt(state.drag.last_observed_size).all() {
            log::debug!("Drag-Rechteck schrumpft, Selektion wird neu aufgebaut");
            clear_selection(state);
        }

        let hits: Vec<(EntityId, EntityGeometry)> = state
            .registry
            .iter()
            .filter(|(_, entry)| rect.intersects(&entry.bounds()))
            .map(|(id, entry)| (id, entry.geometry))
            .collect();

        for (entity, geometry) in hits {
            insert_into_selection(state, entity, geometry);
        }
    }

    state.drag.last_observed_size = delta;
}

/// Beendet ein aktives Drag-Rechteck und meldet `SelectionFinished`.
///
/// Ohne `Dragging` wirkungslos. Ob das Loslassen zusätzlich als Klick zählt,
/// entscheidet das Intent-Mapping über `DragState::is_below_minimum`.
pub fn finish_drag_rect(state: &mut AppState) {
    if state.drag.phase != DragPhase::Dragging {
        return;
    }

    state.drag.reset();

    let selection = state.selection.ids();
    log::info!("Rechteck-Selektion beendet: {} Entities", selection.len());
    state.emit(SelectionEvent::SelectionFinished { selection });
}

/// Verwirft eine Rechteck-Geste ohne Selektionsänderung.
///
/// Gibt `true` zurück, wenn eine Geste aktiv war.
pub fn cancel_drag_rect(state: &mut AppState) -> bool {
    if !state.drag.is_active() {
        return false;
    }

    state.drag.reset();
    log::debug!("Drag-Rechteck abgebrochen");
    true
}
