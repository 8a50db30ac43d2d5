//! Minimales Command-Log für Diagnose und Tests.

use super::AppCommand;

/// Obergrenze des Logs; beim Erreichen wird die ältere Hälfte verworfen.
const MAX_ENTRIES: usize = 1000;

/// Speichert ausgeführte Commands in Ausführungsreihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen ausgeführten Command an.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.drain(..MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_order_and_caps_at_limit() {
        let mut log = CommandLog::new();
        assert!(log.is_empty());

        for _ in 0..MAX_ENTRIES {
            log.record(&AppCommand::ZoomIn);
        }
        assert_eq!(log.len(), MAX_ENTRIES);

        log.record(&AppCommand::ZoomOut);
        assert_eq!(log.len(), MAX_ENTRIES / 2 + 1);
        assert!(matches!(log.entries().last(), Some(AppCommand::ZoomOut)));
    }
}
