//! Identität und Selektionsgeometrie einer selektierbaren Entity.

use std::fmt;

use glam::Vec2;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::WorldRect;

/// Stabile, vergleichbare Identität einer Entity (keine Speicheradresse).
///
/// Nach `unregister` kann dieselbe Identität erneut registriert werden,
/// ohne dass alte Referenzen auf den neuen Eintrag zeigen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Selektionsgeometrie, wie sie bei der Registrierung übergeben wird.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityGeometry {
    /// Breite/Höhe der Bounding-Box
    pub bounding_size: Vec2,
    /// Versatz von der gemeldeten Position zum Box-Mittelpunkt
    pub anchor_offset: Vec2,
}

impl EntityGeometry {
    /// Erstellt eine Geometrie aus Größe und Anker-Versatz.
    pub fn new(bounding_size: Vec2, anchor_offset: Vec2) -> Self {
        Self {
            bounding_size,
            anchor_offset,
        }
    }

    /// Bounding-Rechteck an einer Position: `position - size / 2 + offset`, Größe `size`.
    pub fn bounds_at(&self, position: Vec2) -> WorldRect {
        WorldRect::new(
            position - self.bounding_size / 2.0 + self.anchor_offset,
            self.bounding_size,
        )
    }
}

/// Registry-Eintrag: Geometrie-Snapshot, aktuelle Position und Gruppen.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredEntity {
    /// Geometrie-Snapshot zum Registrierungszeitpunkt
    pub geometry: EntityGeometry,
    /// Zuletzt gemeldete Position (Host aktualisiert per `EntityMoved`)
    pub position: Vec2,
    /// Gruppen-Tags in Zuweisungsreihenfolge
    pub groups: IndexSet<String>,
}

impl RegisteredEntity {
    /// Erstellt einen Eintrag ohne Gruppen.
    pub fn new(geometry: EntityGeometry, position: Vec2) -> Self {
        Self {
            geometry,
            position,
            groups: IndexSet::new(),
        }
    }

    /// Aktuelles Bounding-Rechteck im Weltkoordinatensystem.
    pub fn bounds(&self) -> WorldRect {
        self.geometry.bounds_at(self.position)
    }

    /// Gibt `true` zurück, wenn die Entity der Gruppe zugeordnet ist.
    pub fn is_in_group(&self, group: &str) -> bool {
        self.groups.contains(group)
    }
}
