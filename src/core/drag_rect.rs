//! Geometrie des Drag-Rechtecks (Marquee): Eckpunkte, Delta, Normalisierung.
//!
//! Der Tracker kennt nur die Geometrie. Die Phasen Idle/Armed/Dragging
//! verwaltet der Aufrufer (`DragState`).

use glam::Vec2;

use super::WorldRect;

/// Eckpunkte eines aktiven Drag-Rechtecks
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragCorners {
    start: Vec2,
    end: Vec2,
}

/// Verfolgt die beiden Ecken des Marquee-Rechtecks.
///
/// Nach `end()` liefern `signed_delta()` und `normalized_rect()` `None`,
/// bis `begin()` erneut aufgerufen wird.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragRectTracker {
    corners: Option<DragCorners>,
}

impl DragRectTracker {
    /// Erstellt einen inaktiven Tracker.
    pub fn new() -> Self {
        Self { corners: None }
    }

    /// Startet ein neues Rechteck: Start- und Endecke liegen auf `point`.
    pub fn begin(&mut self, point: Vec2) {
        self.corners = Some(DragCorners {
            start: point,
            end: point,
        });
    }

    /// Setzt die Endecke. Ohne aktives Rechteck wirkungslos (`false`).
    pub fn update_end(&mut self, point: Vec2) -> bool {
        match self.corners.as_mut() {
            Some(corners) => {
                corners.end = point;
                true
            }
            None => false,
        }
    }

    /// Gibt `true` zurück, solange ein Rechteck verfolgt wird.
    pub fn is_active(&self) -> bool {
        self.corners.is_some()
    }

    /// Startecke des aktiven Rechtecks.
    pub fn start_corner(&self) -> Option<Vec2> {
        self.corners.map(|c| c.start)
    }

    /// Endecke des aktiven Rechtecks.
    pub fn end_corner(&self) -> Option<Vec2> {
        self.corners.map(|c| c.end)
    }

    /// Vorzeichenbehafteter Delta-Vektor `end - start` (komponentenweise, auch negativ).
    pub fn signed_delta(&self) -> Option<Vec2> {
        self.corners.map(|c| c.end - c.start)
    }

    /// Normalisiertes Rechteck für Hit-Tests, unabhängig von der Drag-Richtung.
    pub fn normalized_rect(&self) -> Option<WorldRect> {
        self.corners.map(|c| WorldRect::from_corners(c.start, c.end))
    }

    /// Verwirft die Eckpunkte und gibt das letzte normalisierte Rechteck zurück.
    pub fn end(&mut self) -> Option<WorldRect> {
        let last = self.normalized_rect();
        self.corners = None;
        last
    }
}
