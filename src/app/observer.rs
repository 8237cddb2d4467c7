//! Observer-Schnittstelle für Kollaborateure der Selektion.
//!
//! Overlay, Bewegungssystem und UI implementieren nur die Methoden, die sie
//! interessieren. Alle Methoden sind standardmäßig No-ops.

use glam::Vec2;

use super::SelectionEvent;
use crate::core::{EntityId, SelectionMarker};

/// Empfänger für ausgehende Selektions-Benachrichtigungen.
pub trait SelectionObserver {
    /// Entity wurde selektiert, Marker mit der übergebenen Geometrie anzeigen.
    fn entity_selected(&mut self, _entity: EntityId, _marker: &SelectionMarker) {}

    /// Entity wurde deselektiert, ihr Marker wird freigegeben.
    fn entity_deselected(&mut self, _entity: EntityId) {}

    /// Selektion hat sich geändert, `selection` in aktueller Reihenfolge.
    fn selection_changed(&mut self, _selection: &[EntityId]) {}

    /// Rechteck-Geste abgeschlossen mit der resultierenden Selektion.
    fn selection_finished(&mut self, _selection: &[EntityId]) {}

    /// Entity soll sich zur Zielposition bewegen.
    fn move_requested(&mut self, _entity: EntityId, _target: Vec2) {}
}

impl SelectionEvent {
    /// Leitet die Benachrichtigung an die passende Observer-Methode weiter.
    pub fn dispatch(&self, observer: &mut (impl SelectionObserver + ?Sized)) {
        match self {
            SelectionEvent::EntitySelected { entity, marker } => {
                observer.entity_selected(*entity, marker)
            }
            SelectionEvent::EntityDeselected { entity } => observer.entity_deselected(*entity),
            SelectionEvent::SelectionChanged { selection } => observer.selection_changed(selection),
            SelectionEvent::SelectionFinished { selection } => {
                observer.selection_finished(selection)
            }
            SelectionEvent::MoveRequested { entity, target } => {
                observer.move_requested(*entity, *target)
            }
        }
    }
}
