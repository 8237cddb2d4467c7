//! Mapping von Host-Intents auf mutierende Selection-Commands.
//!
//! Hier lebt die Zustandsmaschine der Zeiger-Geste (Idle/Armed/Dragging):
//! welcher Command folgt, hängt von `DragState::phase` zum Eingangszeitpunkt ab.

use glam::Vec2;

use super::{AppState, DragPhase, SelectionCommand, SelectionIntent};
use crate::core::{EntityGeometry, EntityId, Modifiers, PointerButton};

/// Übersetzt einen `SelectionIntent` in eine Sequenz ausführbarer `SelectionCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: SelectionIntent) -> Vec<SelectionCommand> {
    match intent {
        SelectionIntent::PointerButton {
            button,
            pressed,
            position,
            modifiers,
            hovered_entity,
        } => map_pointer_button(state, button, pressed, position, modifiers, hovered_entity),
        SelectionIntent::PointerMotion { position } => match state.drag.phase {
            DragPhase::Armed | DragPhase::Dragging => vec![SelectionCommand::UpdateDragRect {
                world_pos: state.view.to_world(position),
            }],
            DragPhase::Idle => vec![],
        },
        SelectionIntent::EntityClicked {
            entity,
            button,
            pressed,
            modifiers,
        } => map_entity_click(state, entity, button, pressed, modifiers),

        SelectionIntent::RegisterEntity {
            entity,
            bounding_size,
            anchor_offset,
        } => vec![SelectionCommand::RegisterEntity {
            entity,
            geometry: EntityGeometry::new(bounding_size, anchor_offset),
        }],
        SelectionIntent::UnregisterEntity { entity } => {
            vec![SelectionCommand::UnregisterEntity { entity }]
        }
        SelectionIntent::EntityMoved { entity, position } => {
            vec![SelectionCommand::SetEntityPosition { entity, position }]
        }
        SelectionIntent::EntityGroupAssigned { entity, group } => {
            vec![SelectionCommand::AssignEntityGroup { entity, group }]
        }
        SelectionIntent::ViewOriginChanged { origin } => {
            vec![SelectionCommand::SetViewOrigin { origin }]
        }

        SelectionIntent::AddToSelectionRequested { entity } => {
            vec![SelectionCommand::AddToSelection { entity }]
        }
        SelectionIntent::ToggleSelectionRequested { entity } => {
            vec![SelectionCommand::ToggleSelection { entity }]
        }
        SelectionIntent::ClearSelectionRequested => vec![SelectionCommand::ClearSelection],
        SelectionIntent::MoveTargetRequested { position, force } => {
            vec![SelectionCommand::RequestMove {
                world_pos: state.view.to_world(position),
                force,
            }]
        }
        SelectionIntent::DragCancelRequested => vec![SelectionCommand::CancelDragRect],
    }
}

fn map_pointer_button(
    state: &AppState,
    button: PointerButton,
    pressed: bool,
    position: Vec2,
    modifiers: Modifiers,
    hovered_entity: Option<EntityId>,
) -> Vec<SelectionCommand> {
    let world_pos = state.view.to_world(position);

    match (button, pressed) {
        (PointerButton::Primary, true) => {
            if state.drag.phase != DragPhase::Idle {
                return vec![];
            }
            match hovered_entity {
                Some(entity) => vec![SelectionCommand::ClickSelectEntity {
                    entity,
                    additive: modifiers.is_additive(),
                }],
                None => vec![SelectionCommand::BeginDragRect { world_pos }],
            }
        }
        (PointerButton::Primary, false) => match state.drag.phase {
            DragPhase::Dragging => {
                let degenerate = state
                    .drag
                    .is_below_minimum(state.options.minimal_selection_size);
                let mut commands = vec![SelectionCommand::FinishDragRect];
                if degenerate {
                    commands.push(SelectionCommand::ReleaseClick { world_pos });
                }
                commands
            }
            DragPhase::Armed => vec![
                SelectionCommand::CancelDragRect,
                SelectionCommand::ReleaseClick { world_pos },
            ],
            DragPhase::Idle => vec![SelectionCommand::ReleaseClick { world_pos }],
        },
        (PointerButton::Secondary, false) if !modifiers.is_additive() => {
            vec![SelectionCommand::ClearSelectionFromPointer]
        }
        _ => vec![],
    }
}

fn map_entity_click(
    state: &AppState,
    entity: EntityId,
    button: PointerButton,
    pressed: bool,
    modifiers: Modifiers,
) -> Vec<SelectionCommand> {
    if !pressed {
        return vec![];
    }

    match button {
        PointerButton::Primary if !state.selection.contains(entity) => {
            vec![SelectionCommand::SelectEntity {
                entity,
                additive: modifiers.is_additive(),
            }]
        }
        PointerButton::Secondary => vec![SelectionCommand::ClearSelection],
        _ => vec![],
    }
}
