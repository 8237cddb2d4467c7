use glam::Vec2;
use pointer_selection::{
    AppState, EntityId, Modifiers, PointerButton, SelectionController, SelectionEvent,
    SelectionIntent, SelectionOptions,
};

/// Test-Harness: Controller + State mit Log-Ausgabe.
pub struct Harness {
    pub controller: SelectionController,
    pub state: AppState,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_options(SelectionOptions::default())
    }

    pub fn with_options(options: SelectionOptions) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            controller: SelectionController::new(),
            state: AppState::with_options(options),
        }
    }

    pub fn send(&mut self, intent: SelectionIntent) {
        self.controller
            .handle_intent(&mut self.state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    /// Registriert eine Entity mit quadratischer Box an einer Position.
    pub fn register(&mut self, id: u64, size: f32, position: Vec2) -> EntityId {
        let entity = EntityId(id);
        self.send(SelectionIntent::RegisterEntity {
            entity,
            bounding_size: Vec2::splat(size),
            anchor_offset: Vec2::ZERO,
        });
        self.send(SelectionIntent::EntityMoved { entity, position });
        entity
    }

    pub fn press(&mut self, position: Vec2, hovered_entity: Option<EntityId>) {
        self.press_with(PointerButton::Primary, position, Modifiers::NONE, hovered_entity);
    }

    pub fn press_with(
        &mut self,
        button: PointerButton,
        position: Vec2,
        modifiers: Modifiers,
        hovered_entity: Option<EntityId>,
    ) {
        self.send(SelectionIntent::PointerButton {
            button,
            pressed: true,
            position,
            modifiers,
            hovered_entity,
        });
    }

    pub fn release(&mut self, position: Vec2) {
        self.release_with(PointerButton::Primary, position, Modifiers::NONE);
    }

    pub fn release_with(&mut self, button: PointerButton, position: Vec2, modifiers: Modifiers) {
        self.send(SelectionIntent::PointerButton {
            button,
            pressed: false,
            position,
            modifiers,
            hovered_entity: None,
        });
    }

    pub fn motion(&mut self, position: Vec2) {
        self.send(SelectionIntent::PointerMotion { position });
    }

    pub fn drag(&mut self, from: Vec2, to: Vec2) {
        self.press(from, None);
        self.motion(to);
        self.release(to);
    }

    pub fn events(&mut self) -> Vec<SelectionEvent> {
        self.controller.drain_events(&mut self.state)
    }
}

pub fn moves(events: &[SelectionEvent]) -> Vec<(EntityId, Vec2)> {
    events
        .iter()
        .filter_map(|event| match event {
            SelectionEvent::MoveRequested { entity, target } => Some((*entity, *target)),
            _ => None,
        })
        .collect()
}

pub fn changes(events: &[SelectionEvent]) -> Vec<Vec<EntityId>> {
    events
        .iter()
        .filter_map(|event| match event {
            SelectionEvent::SelectionChanged { selection } => Some(selection.clone()),
            _ => None,
        })
        .collect()
}
