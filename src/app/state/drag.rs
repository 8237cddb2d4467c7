use crate::core::DragRectTracker;

/// Phase des Drag-Rechtecks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// Kein Rechteck aktiv
    #[default]
    Idle,
    /// Taste über Hintergrund gedrückt, noch keine Bewegung
    Armed,
    /// Bewegung seit dem Drücken beobachtet
    Dragging,
}

/// Zustand der Rechteck-Geste (existiert nur zwischen Drücken und Loslassen)
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Aktuelle Phase
    pub phase: DragPhase,
    /// Eckpunkte des Rechtecks
    pub tracker: DragRectTracker,
    /// Vorzeichenbehaftetes Delta des vorherigen Updates (Schrumpf-Erkennung)
    pub last_observed_size: glam::Vec2,
}

impl DragState {
    /// Erstellt einen inaktiven Drag-Zustand.
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            tracker: DragRectTracker::new(),
            last_observed_size: glam::Vec2::ZERO,
        }
    }

    /// Gibt `true` zurück, solange die Geste nicht Idle ist.
    pub fn is_active(&self) -> bool {
        self.phase != DragPhase::Idle
    }

    /// `true`, wenn das aktuelle Rechteck auf einer Achse unter `min_size`
    /// liegt oder kein Rechteck verfolgt wird. Loslassen zählt dann als Klick.
    pub fn is_below_minimum(&self, min_size: f32) -> bool {
        self.tracker
            .normalized_rect()
            .is_none_or(|rect| rect.is_smaller_than(min_size))
    }

    /// Setzt Phase, Tracker und Schrumpf-Referenz zurück.
    pub fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.tracker.end();
        self.last_observed_size = glam::Vec2::ZERO;
    }
}
