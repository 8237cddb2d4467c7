use crate::app::{CommandLog, SelectionEvent};
use crate::core::{EntityId, EntityRegistry};
use crate::shared::SelectionOptions;

use super::{DragState, SelectionState, ViewState};

/// Hauptzustand der Selektion
///
/// Registry und Selektion werden ausschließlich im Aufrufstapel eines
/// einzelnen Events mutiert (single-threaded, event-getrieben).
pub struct AppState {
    /// Registrierte Entities mit Geometrie
    pub registry: EntityRegistry,
    /// Selection-State
    pub selection: SelectionState,
    /// Drag-Rechteck-State
    pub drag: DragState,
    /// View-State
    pub view: ViewState,
    /// Laufzeit-Optionen
    pub options: SelectionOptions,
    /// Trace der zuletzt ausgeführten Commands
    pub command_log: CommandLog,
    /// Gesammelte Benachrichtigungen, bis der Host sie abholt
    outbox: Vec<SelectionEvent>,
}

impl AppState {
    /// Erstellt einen neuen, leeren State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(SelectionOptions::default())
    }

    /// Erstellt einen neuen, leeren State mit den übergebenen Optionen
    pub fn with_options(options: SelectionOptions) -> Self {
        Self {
            registry: EntityRegistry::new(),
            selection: SelectionState::new(),
            drag: DragState::new(),
            view: ViewState::new(),
            command_log: CommandLog::with_capacity(options.command_log_capacity),
            options,
            outbox: Vec::new(),
        }
    }

    /// Hängt eine Benachrichtigung an die Outbox an.
    pub fn emit(&mut self, event: SelectionEvent) {
        self.outbox.push(event);
    }

    /// Read-only Sicht auf noch nicht abgeholte Benachrichtigungen.
    pub fn pending_events(&self) -> &[SelectionEvent] {
        &self.outbox
    }

    /// Entnimmt alle gesammelten Benachrichtigungen in Emissionsreihenfolge.
    pub fn take_events(&mut self) -> Vec<SelectionEvent> {
        std::mem::take(&mut self.outbox)
    }

    /// Selektierte Entities einer Gruppe in Selektionsreihenfolge.
    pub fn selected_in_group(&self, group: &str) -> Vec<EntityId> {
        self.selection
            .selected
            .iter()
            .copied()
            .filter(|id| {
                self.registry
                    .get(*id)
                    .is_some_and(|entry| entry.is_in_group(group))
            })
            .collect()
    }

    /// Anzahl registrierter Entities (für UI-Anzeige)
    pub fn entity_count(&self) -> usize {
        self.registry.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
