use approx::assert_relative_eq;
use glam::Vec2;
use pointer_selection::{
    EntityId, Modifiers, PointerButton, SelectionCommand, SelectionError, SelectionEvent,
    SelectionIntent, SelectionMarker, SelectionObserver, SelectionOptions,
};

use super::common::{changes, moves, Harness};

#[test]
fn registering_twice_keeps_single_entry_and_first_geometry() {
    let mut h = Harness::new();
    h.register(1, 10.0, Vec2::ZERO);

    h.send(SelectionIntent::RegisterEntity {
        entity: EntityId(1),
        bounding_size: Vec2::splat(40.0),
        anchor_offset: Vec2::ONE,
    });

    assert_eq!(h.state.entity_count(), 1);
    let geometry = h
        .state
        .registry
        .bounds_of(EntityId(1))
        .expect("Entity sollte registriert sein");
    assert_eq!(geometry.bounding_size, Vec2::splat(10.0));
    assert!(h.events().is_empty());
}

#[test]
fn add_of_unregistered_entity_surfaces_not_registered() {
    let mut h = Harness::new();
    let a = h.register(1, 10.0, Vec2::ZERO);
    h.send(SelectionIntent::AddToSelectionRequested { entity: a });
    h.events();

    let err = h
        .controller
        .handle_intent(
            &mut h.state,
            SelectionIntent::AddToSelectionRequested {
                entity: EntityId(99),
            },
        )
        .expect_err("Unbekannte Entity sollte fehlschlagen");

    assert_eq!(
        err.downcast_ref::<SelectionError>(),
        Some(&SelectionError::NotRegistered(EntityId(99)))
    );
    assert_eq!(h.state.selection.ids(), vec![a]);
    assert!(h.events().is_empty());
}

#[test]
fn explicit_add_and_toggle_always_report_selection() {
    let mut h = Harness::new();
    let a = h.register(1, 10.0, Vec2::ZERO);

    h.send(SelectionIntent::AddToSelectionRequested { entity: a });
    h.send(SelectionIntent::AddToSelectionRequested { entity: a });
    h.send(SelectionIntent::ToggleSelectionRequested { entity: a });

    assert_eq!(changes(&h.events()), vec![vec![a], vec![a], vec![]]);
}

#[test]
fn clear_request_is_suppressed_right_after_selecting_click() {
    let mut h = Harness::new();
    let a = h.register(1, 10.0, Vec2::ZERO);
    h.press(Vec2::ZERO, Some(a));
    h.events();

    h.send(SelectionIntent::ClearSelectionRequested);
    assert_eq!(h.state.selection.ids(), vec![a]);
    assert!(h.events().is_empty());

    h.send(SelectionIntent::ClearSelectionRequested);
    assert!(h.state.selection.is_empty());
    assert_eq!(
        h.events(),
        vec![
            SelectionEvent::EntityDeselected { entity: a },
            SelectionEvent::SelectionChanged { selection: vec![] },
        ]
    );
}

#[test]
fn direct_entity_click_selects_and_right_click_clears() {
    let mut h = Harness::new();
    let a = h.register(1, 10.0, Vec2::ZERO);
    let b = h.register(2, 10.0, Vec2::new(40.0, 0.0));

    h.send(SelectionIntent::EntityClicked {
        entity: a,
        button: PointerButton::Primary,
        pressed: true,
        modifiers: Modifiers::NONE,
    });
    h.send(SelectionIntent::EntityClicked {
        entity: b,
        button: PointerButton::Primary,
        pressed: true,
        modifiers: Modifiers::SHIFT,
    });
    assert_eq!(h.state.selection.ids(), vec![a, b]);

    // Ein erneuter Klick auf eine selektierte Entity ändert nichts
    h.send(SelectionIntent::EntityClicked {
        entity: a,
        button: PointerButton::Primary,
        pressed: true,
        modifiers: Modifiers::NONE,
    });
    assert_eq!(h.state.selection.ids(), vec![a, b]);

    // Loslassen verbraucht den Flag des letzten Klicks
    h.release(Vec2::new(40.0, 0.0));
    h.send(SelectionIntent::EntityClicked {
        entity: b,
        button: PointerButton::Secondary,
        pressed: true,
        modifiers: Modifiers::CTRL,
    });
    assert!(h.state.selection.is_empty());
}

#[test]
fn unregistering_selected_entity_releases_marker_and_reports_change() {
    let mut h = Harness::new();
    let a = h.register(1, 10.0, Vec2::ZERO);
    let b = h.register(2, 10.0, Vec2::new(40.0, 0.0));
    h.send(SelectionIntent::AddToSelectionRequested { entity: a });
    h.send(SelectionIntent::AddToSelectionRequested { entity: b });
    h.events();

    h.send(SelectionIntent::UnregisterEntity { entity: a });

    assert_eq!(h.state.selection.ids(), vec![b]);
    assert!(!h.state.registry.contains(a));
    assert_eq!(
        h.events(),
        vec![
            SelectionEvent::EntityDeselected { entity: a },
            SelectionEvent::SelectionChanged { selection: vec![b] },
        ]
    );

    // Neu registriert ist die Identität wieder frei, aber nicht selektiert
    h.register(1, 10.0, Vec2::ZERO);
    assert_eq!(h.state.selection.ids(), vec![b]);
}

#[test]
fn move_request_during_drag_needs_force() {
    let mut h = Harness::new();
    let a = h.register(1, 10.0, Vec2::ZERO);
    h.send(SelectionIntent::AddToSelectionRequested { entity: a });
    h.press(Vec2::new(50.0, 50.0), None);
    h.events();

    h.send(SelectionIntent::MoveTargetRequested {
        position: Vec2::new(7.0, 7.0),
        force: false,
    });
    assert!(moves(&h.events()).is_empty());

    h.send(SelectionIntent::MoveTargetRequested {
        position: Vec2::new(7.0, 7.0),
        force: true,
    });
    assert_eq!(moves(&h.events()), vec![(a, Vec2::new(7.0, 7.0))]);
}

#[test]
fn group_query_follows_selection_order() {
    let mut h = Harness::new();
    let a = h.register(1, 10.0, Vec2::ZERO);
    let b = h.register(2, 10.0, Vec2::new(20.0, 0.0));
    let c = h.register(3, 10.0, Vec2::new(40.0, 0.0));
    for (entity, group) in [(a, "workers"), (b, "soldiers"), (c, "workers")] {
        h.send(SelectionIntent::EntityGroupAssigned {
            entity,
            group: group.to_string(),
        });
    }

    h.send(SelectionIntent::AddToSelectionRequested { entity: c });
    h.send(SelectionIntent::AddToSelectionRequested { entity: b });
    h.send(SelectionIntent::AddToSelectionRequested { entity: a });

    assert_eq!(h.state.selected_in_group("workers"), vec![c, a]);
    assert_eq!(h.state.selected_in_group("soldiers"), vec![b]);
    assert!(h.state.selected_in_group("scouts").is_empty());
}

#[test]
fn position_report_for_unknown_entity_is_ignored() {
    let mut h = Harness::new();

    h.send(SelectionIntent::EntityMoved {
        entity: EntityId(8),
        position: Vec2::ONE,
    });
    h.send(SelectionIntent::EntityGroupAssigned {
        entity: EntityId(8),
        group: "ghosts".to_string(),
    });

    assert_eq!(h.state.entity_count(), 0);
}

#[derive(Default)]
struct RecordingOverlay {
    markers: Vec<(EntityId, SelectionMarker)>,
    released: Vec<EntityId>,
    finished: Vec<Vec<EntityId>>,
}

impl SelectionObserver for RecordingOverlay {
    fn entity_selected(&mut self, entity: EntityId, marker: &SelectionMarker) {
        self.markers.push((entity, *marker));
    }

    fn entity_deselected(&mut self, entity: EntityId) {
        self.released.push(entity);
    }

    fn selection_finished(&mut self, selection: &[EntityId]) {
        self.finished.push(selection.to_vec());
    }
}

#[test]
fn observer_receives_markers_in_emission_order() {
    let mut h = Harness::with_options(SelectionOptions {
        marker_padding: 2.0,
        ..SelectionOptions::default()
    });
    let a = h.register(1, 14.0, Vec2::ZERO);
    h.drag(Vec2::new(-10.0, -10.0), Vec2::new(10.0, 10.0));
    h.send(SelectionIntent::ClearSelectionRequested);

    let mut overlay = RecordingOverlay::default();
    let delivered = h.controller.dispatch_events(&mut h.state, &mut overlay);

    assert_eq!(delivered, 5);
    assert_eq!(overlay.markers.len(), 1);
    let (entity, marker) = overlay.markers[0];
    assert_eq!(entity, a);
    assert_eq!(marker.size, Vec2::splat(16.0));
    assert_relative_eq!(marker.edge_length, 2.0);
    assert_eq!(overlay.finished, vec![vec![a]]);
    assert_eq!(overlay.released, vec![a]);
    assert!(h.state.pending_events().is_empty());
}

#[test]
fn gesture_trace_shows_marquee_commands() {
    let mut h = Harness::new();
    h.register(1, 10.0, Vec2::ZERO);
    h.drag(Vec2::new(-5.0, -5.0), Vec2::new(5.0, 5.0));

    assert_eq!(
        h.state.command_log.last_gesture(),
        vec![
            &SelectionCommand::BeginDragRect {
                world_pos: Vec2::new(-5.0, -5.0)
            },
            &SelectionCommand::UpdateDragRect {
                world_pos: Vec2::new(5.0, 5.0)
            },
            &SelectionCommand::FinishDragRect,
        ]
    );
}

#[test]
fn gesture_trace_shows_tiny_drag_falling_through_to_click() {
    let mut h = Harness::new();
    h.drag(Vec2::ZERO, Vec2::new(3.0, 30.0));

    assert_eq!(
        h.state.command_log.last_gesture(),
        vec![
            &SelectionCommand::BeginDragRect {
                world_pos: Vec2::ZERO
            },
            &SelectionCommand::UpdateDragRect {
                world_pos: Vec2::new(3.0, 30.0)
            },
            &SelectionCommand::FinishDragRect,
            &SelectionCommand::ReleaseClick {
                world_pos: Vec2::new(3.0, 30.0)
            },
        ]
    );
}

#[test]
fn gesture_trace_shows_entity_click_and_release() {
    let mut h = Harness::new();
    let a = h.register(1, 10.0, Vec2::ZERO);
    h.press(Vec2::ZERO, Some(a));
    h.release(Vec2::ZERO);

    assert_eq!(
        h.state.command_log.last_gesture(),
        vec![
            &SelectionCommand::ClickSelectEntity {
                entity: a,
                additive: false
            },
            &SelectionCommand::ReleaseClick {
                world_pos: Vec2::ZERO
            },
        ]
    );
}

#[test]
fn gesture_trace_respects_configured_capacity() {
    let mut small = Harness::with_options(SelectionOptions {
        command_log_capacity: 2,
        ..SelectionOptions::default()
    });
    small.drag(Vec2::ZERO, Vec2::new(20.0, 20.0));
    assert_eq!(
        small.state.command_log.drain(),
        vec![
            SelectionCommand::UpdateDragRect {
                world_pos: Vec2::new(20.0, 20.0)
            },
            SelectionCommand::FinishDragRect,
        ]
    );

    let mut quiet = Harness::with_options(SelectionOptions {
        command_log_capacity: 0,
        ..SelectionOptions::default()
    });
    quiet.register(1, 10.0, Vec2::ZERO);
    assert!(quiet.state.command_log.is_empty());
}
