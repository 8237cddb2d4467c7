use crate::core::EntityId;
use indexmap::IndexSet;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Aktuell selektierte Entities in Einfügereihenfolge (ohne Duplikate)
    pub selected: IndexSet<EntityId>,
    /// Einmal-Flag: ein selektierender Klick ist gerade erfolgt.
    ///
    /// Wird vom nächsten Loslassen bzw. vom nächsten `ClearSelection` verbraucht.
    pub ignore_next_input: bool,
    /// Zuletzt per Umschalten entfernte Entity mit ihrem Index
    pub(crate) last_toggled_off: Option<(EntityId, usize)>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected: IndexSet::new(),
            ignore_next_input: false,
            last_toggled_off: None,
        }
    }

    /// Gibt `true` zurück, wenn die Entity selektiert ist.
    #[inline]
    pub fn contains(&self, entity: EntityId) -> bool {
        self.selected.contains(&entity)
    }

    /// Anzahl selektierter Entities.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Kopie der Selektion in aktueller Reihenfolge (für Benachrichtigungen).
    pub fn ids(&self) -> Vec<EntityId> {
        self.selected.iter().copied().collect()
    }
}
