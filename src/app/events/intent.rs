use crate::core::{EntityId, Modifiers, PointerButton};

/// Eingehende Host-Events ohne direkte Mutationslogik.
///
/// Positionen sind Zeigerkoordinaten; der Core rechnet sie über
/// `ViewState::to_world` in den Koordinatenraum der Entities um.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionIntent {
    /// Maustaste gedrückt oder losgelassen
    PointerButton {
        button: PointerButton,
        pressed: bool,
        position: glam::Vec2,
        modifiers: Modifiers,
        /// Vom Host aufgelöste Entity unter dem Zeiger (None = Hintergrund)
        hovered_entity: Option<EntityId>,
    },
    /// Zeiger bewegt
    PointerMotion { position: glam::Vec2 },
    /// Direkter Klick auf eine Entity (Host hat den Treffer bereits aufgelöst)
    EntityClicked {
        entity: EntityId,
        button: PointerButton,
        pressed: bool,
        modifiers: Modifiers,
    },

    /// Entity mit Selektionsgeometrie registrieren
    RegisterEntity {
        entity: EntityId,
        bounding_size: glam::Vec2,
        anchor_offset: glam::Vec2,
    },
    /// Entity abmelden (inkl. Entfernen aus der Selektion)
    UnregisterEntity { entity: EntityId },
    /// Position einer Entity hat sich geändert
    EntityMoved {
        entity: EntityId,
        position: glam::Vec2,
    },
    /// Entity einer Gruppe zuordnen
    EntityGroupAssigned { entity: EntityId, group: String },
    /// Ursprung der Zeigerfläche im Entity-Koordinatenraum geändert
    ViewOriginChanged { origin: glam::Vec2 },

    /// Entity explizit zur Selektion hinzufügen
    AddToSelectionRequested { entity: EntityId },
    /// Selektionszustand einer Entity umschalten
    ToggleSelectionRequested { entity: EntityId },
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Zielposition für alle selektierten Entities setzen
    MoveTargetRequested {
        position: glam::Vec2,
        /// Auch während eines aktiven Drag-Rechtecks senden
        force: bool,
    },
    /// Aktives Drag-Rechteck ohne Abschluss verwerfen
    DragCancelRequested,
}
