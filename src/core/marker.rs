//! Beschreibung der Selektionsmarker für den Overlay-Kollaborateur.

use glam::Vec2;

use super::{EntityGeometry, WorldRect};

/// Darstellungsdaten eines Selektionsmarkers.
///
/// Der Core zeichnet nichts selbst; der Marker wird mit der
/// `EntitySelected`-Benachrichtigung an das Overlay übergeben.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionMarker {
    /// Markergröße (Bounding-Größe + Padding)
    pub size: Vec2,
    /// Versatz zum Box-Mittelpunkt (aus der Entity-Geometrie)
    pub anchor_offset: Vec2,
    /// Länge der Eck-Kanten
    pub edge_length: f32,
    /// Linienbreite der Eck-Kanten
    pub edge_width: f32,
}

impl SelectionMarker {
    /// Leitet den Marker aus der Entity-Geometrie ab.
    ///
    /// Kantenlänge = Markerbreite / `edge_divisor` (Divisor ≤ 0 → volle Breite).
    pub fn for_geometry(
        geometry: &EntityGeometry,
        padding: f32,
        edge_divisor: f32,
        edge_width: f32,
    ) -> Self {
        let size = geometry.bounding_size + Vec2::splat(padding);
        let edge_length = if edge_divisor > 0.0 {
            size.x / edge_divisor
        } else {
            size.x
        };

        Self {
            size,
            anchor_offset: geometry.anchor_offset,
            edge_length,
            edge_width,
        }
    }

    /// Marker-Rechteck an der aktuellen Entity-Position.
    pub fn rect_at(&self, position: Vec2) -> WorldRect {
        WorldRect::new(position - self.size / 2.0 + self.anchor_offset, self.size)
    }
}
