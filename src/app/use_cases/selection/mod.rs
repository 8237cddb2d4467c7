//! Use-Case-Funktionen für Entity-Selektion.
//!
//! Aufgeteilt nach Selektionsmodus:
//! - `pick`: Klick auf eine Entity (Zeigerpfad und direkter Entity-Klick)
//! - `membership`: explizites Hinzufügen/Umschalten
//! - `rect`: Rechteck-Selektion (Drag über Hintergrund)
//! - `move_request`: Zielposition an selektierte Entities
//! - `helpers`: Gemeinsame Hilfsfunktionen

mod helpers;
mod membership;
mod move_request;
mod pick;
mod rect;

pub use helpers::{clear_selection, ClearOutcome};
pub(crate) use helpers::remove_from_selection;
pub use membership::{add_to_selection, toggle_selection};
pub use move_request::{release_click, request_move};
pub use pick::{click_select_entity, select_entity};
pub use rect::{begin_drag_rect, cancel_drag_rect, finish_drag_rect, update_drag_rect};
