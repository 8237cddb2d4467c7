//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die Host und Selektions-Core teilen.

pub mod options;

pub use options::SelectionOptions;
pub use options::{MARKER_EDGE_DIVISOR, MINIMAL_SELECTION_SIZE};
