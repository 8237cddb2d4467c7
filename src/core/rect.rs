//! Achsen-aligniertes Rechteck im Weltkoordinatensystem.

use glam::Vec2;

/// Achsen-aligniertes Rechteck (Ursprung = minimale Ecke, Größe nicht negativ).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldRect {
    /// Minimale Ecke
    pub origin: Vec2,
    /// Breite/Höhe
    pub size: Vec2,
}

impl WorldRect {
    /// Erstellt ein Rechteck aus Ursprung und Größe.
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Normalisiert zwei beliebige Eckpunkte, unabhängig von der Drag-Richtung.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            origin: a.min(b),
            size: (b - a).abs(),
        }
    }

    /// Minimale Ecke.
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.origin
    }

    /// Maximale Ecke.
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Breite des Rechtecks.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Höhe des Rechtecks.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Überlappung beider Achsen-Intervalle (berührende Kanten zählen).
    pub fn intersects(&self, other: &WorldRect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());

        a_min.x <= b_max.x && b_min.x <= a_max.x && a_min.y <= b_max.y && b_min.y <= a_max.y
    }

    /// `true`, wenn Breite oder Höhe unter `min_size` liegt.
    pub fn is_smaller_than(&self, min_size: f32) -> bool {
        self.size.x < min_size || self.size.y < min_size
    }
}
