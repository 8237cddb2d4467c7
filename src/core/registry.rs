//! Entity-Registry: Identität → Selektionsgeometrie, in Registrierungsreihenfolge.

use glam::Vec2;
use indexmap::IndexMap;

use super::{EntityGeometry, EntityId, RegisteredEntity, SelectionError};

/// Nicht-besitzende Zuordnung von Entity-Identitäten zu ihrer Selektionsgeometrie.
///
/// Die Registry kennt keinen Selektionszustand; das Entfernen aus der Selektion
/// beim Abmelden übernimmt der Use-Case `unregister_entity`.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entries: IndexMap<EntityId, RegisteredEntity>,
}

impl EntityRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Registriert eine Entity am Ursprung.
    ///
    /// Gibt `false` zurück, wenn die Identität bereits registriert ist (No-op).
    pub fn register(&mut self, id: EntityId, geometry: EntityGeometry) -> bool {
        self.register_at(id, geometry, Vec2::ZERO)
    }

    /// Registriert eine Entity mit Startposition. Idempotent wie `register`.
    pub fn register_at(&mut self, id: EntityId, geometry: EntityGeometry, position: Vec2) -> bool {
        if self.entries.contains_key(&id) {
            return false;
        }
        self.entries.insert(id, RegisteredEntity::new(geometry, position));
        true
    }

    /// Entfernt die Zuordnung (Reihenfolge der übrigen Einträge bleibt erhalten).
    pub fn unregister(&mut self, id: EntityId) -> Option<RegisteredEntity> {
        self.entries.shift_remove(&id)
    }

    /// Liefert die Selektionsgeometrie einer Entity.
    pub fn bounds_of(&self, id: EntityId) -> Result<EntityGeometry, SelectionError> {
        self.entries
            .get(&id)
            .map(|entry| entry.geometry)
            .ok_or(SelectionError::NotRegistered(id))
    }

    /// Liefert den vollständigen Eintrag einer Entity.
    pub fn get(&self, id: EntityId) -> Option<&RegisteredEntity> {
        self.entries.get(&id)
    }

    /// Gibt `true` zurück, wenn die Identität registriert ist.
    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Aktualisiert die gemeldete Position einer Entity.
    pub fn set_position(&mut self, id: EntityId, position: Vec2) -> Result<(), SelectionError> {
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or(SelectionError::NotRegistered(id))?;
        entry.position = position;
        Ok(())
    }

    /// Ordnet die Entity einer Gruppe zu. `Ok(false)`, wenn sie bereits Mitglied ist.
    pub fn assign_group(
        &mut self,
        id: EntityId,
        group: impl Into<String>,
    ) -> Result<bool, SelectionError> {
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or(SelectionError::NotRegistered(id))?;
        Ok(entry.groups.insert(group.into()))
    }

    /// Lazy-Iterator über alle Identitäten in Registrierungsreihenfolge.
    ///
    /// Spiegelt den Live-Zustand zum Iterationszeitpunkt; erneut aufrufbar.
    pub fn all_identities(&self) -> impl Iterator<Item = EntityId> + Clone + '_ {
        self.entries.keys().copied()
    }

    /// Iteriert über alle Einträge in Registrierungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &RegisteredEntity)> + '_ {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    /// Anzahl registrierter Entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Entity registriert ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
