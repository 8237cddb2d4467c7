//! Minimales Zeiger-Eingabemodell: Taste und Modifier-Flags.
//!
//! Modifier werden explizit mit dem Event geliefert, der Core fragt keinen
//! globalen Tastaturzustand ab.

use serde::{Deserialize, Serialize};

/// Maustaste eines Zeiger-Events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    /// Linke Taste: Klick-Selektion, Rechteck-Selektion, Zielposition
    Primary,
    /// Rechte Taste: Selektion aufheben
    Secondary,
    /// Mittlere Taste (von der Selektion ignoriert)
    Middle,
}

/// Modifier-Zustand zum Zeitpunkt eines Tasten-Events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift gehalten
    pub shift: bool,
    /// Ctrl gehalten
    pub ctrl: bool,
}

impl Modifiers {
    /// Keine Modifier gehalten.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };

    /// Nur Shift gehalten.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
    };

    /// Nur Ctrl gehalten.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
    };

    /// Additive Selektion: Shift oder Ctrl gehalten.
    #[inline]
    pub fn is_additive(&self) -> bool {
        self.shift || self.ctrl
    }
}
