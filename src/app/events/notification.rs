use crate::core::{EntityId, SelectionMarker};

/// Ausgehende Benachrichtigungen an Kollaborateure (Overlay, Bewegung, UI).
///
/// Pro Intent werden sie synchron in Ausführungsreihenfolge gesammelt.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// Entity wurde selektiert, Marker anzeigen
    EntitySelected {
        entity: EntityId,
        marker: SelectionMarker,
    },
    /// Entity wurde deselektiert, Marker freigeben
    EntityDeselected { entity: EntityId },
    /// Selektion hat sich geändert (aktuelle Reihenfolge)
    SelectionChanged { selection: Vec<EntityId> },
    /// Rechteck-Geste abgeschlossen
    SelectionFinished { selection: Vec<EntityId> },
    /// Entity soll sich zur Zielposition bewegen
    MoveRequested {
        entity: EntityId,
        target: glam::Vec2,
    },
}
