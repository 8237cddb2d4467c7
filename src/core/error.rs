//! Fehlerarten der Selektions-Domäne.

use super::EntityId;

/// Fehler bei Operationen, die eine Entity-Identität referenzieren.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// Die Identität ist nicht in der Registry vorhanden
    #[error("Entity {0} ist nicht registriert")]
    NotRegistered(EntityId),
}
