//! Gesten-Trace: die zuletzt ausgeführten Selection-Commands.
//!
//! Hosts und Tests lesen daraus ab, in welche Commands eine Zeiger-Geste
//! zerlegt wurde (z. B. ob ein Loslassen als Klick durchgefallen ist).

use std::collections::VecDeque;

use super::SelectionCommand;

/// Ringpuffer ausgeführter Commands mit fester Kapazität.
///
/// Bei voller Kapazität fällt jeweils der älteste Eintrag heraus.
/// Kapazität 0 schaltet die Aufzeichnung ab.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    entries: VecDeque<SelectionCommand>,
    capacity: usize,
}

impl CommandLog {
    /// Erstellt einen leeren Trace mit der angegebenen Kapazität.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// `false`, wenn die Aufzeichnung per Kapazität 0 abgeschaltet ist.
    pub fn is_enabled(&self) -> bool {
        self.capacity > 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Hängt einen ausgeführten Command an.
    pub fn record(&mut self, command: SelectionCommand) {
        if !self.is_enabled() {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alle Einträge, älteste zuerst.
    pub fn iter(&self) -> impl Iterator<Item = &SelectionCommand> + '_ {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&SelectionCommand> {
        self.entries.back()
    }

    /// Commands der letzten Zeiger-Geste.
    ///
    /// Eine Geste beginnt mit `BeginDragRect` oder `ClickSelectEntity`.
    /// Ohne aufgezeichneten Gestenstart ist das Ergebnis leer.
    pub fn last_gesture(&self) -> Vec<&SelectionCommand> {
        let start = self.entries.iter().rposition(|command| {
            matches!(
                command,
                SelectionCommand::BeginDragRect { .. } | SelectionCommand::ClickSelectEntity { .. }
            )
        });

        match start {
            Some(index) => self.entries.range(index..).collect(),
            None => Vec::new(),
        }
    }

    /// Entnimmt alle Einträge, älteste zuerst.
    pub fn drain(&mut self) -> Vec<SelectionCommand> {
        self.entries.drain(..).collect()
    }
}
