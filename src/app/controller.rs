//! Selection Controller für zentrale Event-Verarbeitung.

use super::observer::SelectionObserver;
use super::{AppState, SelectionCommand, SelectionEvent, SelectionIntent};

/// Orchestriert Zeiger- und Host-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct SelectionController;

impl SelectionController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Schlägt ein Command fehl, werden die folgenden Commands nicht mehr ausgeführt.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        intent: SelectionIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(
        &self,
        state: &AppState,
        intent: SelectionIntent,
    ) -> Vec<SelectionCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: SelectionCommand,
    ) -> anyhow::Result<()> {
        if state.command_log.is_enabled() {
            state.command_log.record(command.clone());
        }
        use super::handlers;

        match command {
            // === Registry ===
            SelectionCommand::RegisterEntity { entity, geometry } => {
                handlers::registry::register(state, entity, geometry)
            }
            SelectionCommand::UnregisterEntity { entity } => {
                handlers::registry::unregister(state, entity)
            }
            SelectionCommand::SetEntityPosition { entity, position } => {
                handlers::registry::set_position(state, entity, position)
            }
            SelectionCommand::AssignEntityGroup { entity, group } => {
                handlers::registry::assign_group(state, entity, &group)
            }

            // === View ===
            SelectionCommand::SetViewOrigin { origin } => handlers::view::set_origin(state, origin),

            // === Selektion ===
            SelectionCommand::AddToSelection { entity } => {
                handlers::selection::add(state, entity)?
            }
            SelectionCommand::ToggleSelection { entity } => {
                handlers::selection::toggle(state, entity)?
            }
            SelectionCommand::ClickSelectEntity { entity, additive } => {
                handlers::selection::click_select(state, entity, additive)
            }
            SelectionCommand::SelectEntity { entity, additive } => {
                handlers::selection::select(state, entity, additive)
            }
            SelectionCommand::ClearSelection => handlers::selection::clear(state),
            SelectionCommand::ClearSelectionFromPointer => {
                handlers::selection::clear_from_pointer(state)
            }

            // === Drag-Rechteck ===
            SelectionCommand::BeginDragRect { world_pos } => {
                handlers::drag::begin(state, world_pos)
            }
            SelectionCommand::UpdateDragRect { world_pos } => {
                handlers::drag::update(state, world_pos)
            }
            SelectionCommand::FinishDragRect => handlers::drag::finish(state),
            SelectionCommand::CancelDragRect => handlers::drag::cancel(state),

            // === Bewegung ===
            SelectionCommand::ReleaseClick { world_pos } => {
                handlers::selection::release_click(state, world_pos)
            }
            SelectionCommand::RequestMove { world_pos, force } => {
                handlers::selection::request_move(state, world_pos, force)
            }
        }

        Ok(())
    }

    /// Entnimmt alle seit dem letzten Aufruf gesammelten Benachrichtigungen.
    pub fn drain_events(&mut self, state: &mut AppState) -> Vec<SelectionEvent> {
        state.take_events()
    }

    /// Leitet alle gesammelten Benachrichtigungen an einen Observer weiter.
    ///
    /// Gibt die Anzahl der zugestellten Benachrichtigungen zurück.
    pub fn dispatch_events(
        &mut self,
        state: &mut AppState,
        observer: &mut impl SelectionObserver,
    ) -> usize {
        let events = state.take_events();
        for event in &events {
            event.dispatch(observer);
        }
        events.len()
    }
}
