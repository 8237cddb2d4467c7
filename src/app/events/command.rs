use crate::core::{EntityGeometry, EntityId};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionCommand {
    /// Entity registrieren (No-op wenn bereits bekannt)
    RegisterEntity {
        entity: EntityId,
        geometry: EntityGeometry,
    },
    /// Entity abmelden und aus der Selektion entfernen
    UnregisterEntity { entity: EntityId },
    /// Gemeldete Position einer Entity setzen
    SetEntityPosition {
        entity: EntityId,
        position: glam::Vec2,
    },
    /// Entity einer Gruppe zuordnen
    AssignEntityGroup { entity: EntityId, group: String },
    /// Ursprung der Zeigerfläche setzen
    SetViewOrigin { origin: glam::Vec2 },

    /// Explizit hinzufügen (Fehler bei unbekannter Identität)
    AddToSelection { entity: EntityId },
    /// Explizit umschalten (Fehler bei unbekannter Identität)
    ToggleSelection { entity: EntityId },
    /// Klick auf Entity über den Zeigerpfad: ggf. leeren, dann umschalten
    ClickSelectEntity { entity: EntityId, additive: bool },
    /// Direkter Entity-Klick: selektieren (additiv oder exklusiv)
    SelectEntity { entity: EntityId, additive: bool },
    /// Selektion aufheben (meldet immer, außer unterdrückt)
    ClearSelection,
    /// Selektion per Rechtsklick aufheben (meldet nur bei Änderung)
    ClearSelectionFromPointer,

    /// Drag-Rechteck an Weltposition beginnen (Armed)
    BeginDragRect { world_pos: glam::Vec2 },
    /// Endecke aktualisieren und Hit-Test ausführen
    UpdateDragRect { world_pos: glam::Vec2 },
    /// Drag-Rechteck abschließen und `SelectionFinished` melden
    FinishDragRect,
    /// Drag-Rechteck ohne Meldung verwerfen
    CancelDragRect,
    /// Klick-Logik beim Loslassen der linken Taste
    ReleaseClick { world_pos: glam::Vec2 },
    /// Zielposition an alle selektierten Entities senden
    RequestMove { world_pos: glam::Vec2, force: bool },
}
