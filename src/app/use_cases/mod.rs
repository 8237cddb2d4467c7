//! Use-Cases: reine Zustandsübergänge auf dem `AppState`.
//!
//! Use-Cases mutieren Registry, Selektion und Drag-Zustand und legen
//! Marker-/Bewegungs-Benachrichtigungen in die Outbox. `SelectionChanged`
//! melden die Handler.

pub mod registry;
pub mod selection;
