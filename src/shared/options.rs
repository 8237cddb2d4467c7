//! Zentrale Konfiguration der Selektion.
//!
//! `SelectionOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Rechteck-Selektion ──────────────────────────────────────────────

/// Mindestbreite/-höhe des Drag-Rechtecks, ab der Hit-Tests laufen.
pub const MINIMAL_SELECTION_SIZE: f32 = 5.0;

// ── Marker ──────────────────────────────────────────────────────────

/// Zusätzliche Markergröße um die Bounding-Box (Welteinheiten).
pub const MARKER_PADDING: f32 = 0.0;
/// Eck-Kantenlänge = Markerbreite / Divisor.
pub const MARKER_EDGE_DIVISOR: f32 = 8.0;
/// Linienbreite der Marker-Kanten.
pub const MARKER_EDGE_WIDTH: f32 = 1.0;

// ── Diagnose ────────────────────────────────────────────────────────

/// Anzahl der Commands, die der Gesten-Trace vorhält.
pub const COMMAND_LOG_CAPACITY: usize = 256;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Selektions-Optionen.
/// Der Host lädt und speichert sie als TOML-Datei (`load_from_file`/`save_to_file`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionOptions {
    // ── Rechteck ────────────────────────────────────────────────
    /// Mindestgröße des Drag-Rechtecks pro Achse
    #[serde(default = "default_minimal_selection_size")]
    pub minimal_selection_size: f32,

    // ── Marker ──────────────────────────────────────────────────
    /// Padding um die Bounding-Box des Markers
    #[serde(default)]
    pub marker_padding: f32,
    /// Divisor für die Eck-Kantenlänge
    #[serde(default = "default_marker_edge_divisor")]
    pub marker_edge_divisor: f32,
    /// Linienbreite der Eck-Kanten
    #[serde(default = "default_marker_edge_width")]
    pub marker_edge_width: f32,

    // ── Diagnose ────────────────────────────────────────────────
    /// Kapazität des Gesten-Traces (0 = keine Aufzeichnung)
    #[serde(default = "default_command_log_capacity")]
    pub command_log_capacity: usize,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            minimal_selection_size: MINIMAL_SELECTION_SIZE,
            marker_padding: MARKER_PADDING,
            marker_edge_divisor: MARKER_EDGE_DIVISOR,
            marker_edge_width: MARKER_EDGE_WIDTH,
            command_log_capacity: COMMAND_LOG_CAPACITY,
        }
    }
}

/// Serde-Default für `minimal_selection_size` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_minimal_selection_size() -> f32 {
    MINIMAL_SELECTION_SIZE
}

/// Serde-Default für `marker_edge_divisor`.
fn default_marker_edge_divisor() -> f32 {
    MARKER_EDGE_DIVISOR
}

/// Serde-Default für `marker_edge_width`.
fn default_marker_edge_width() -> f32 {
    MARKER_EDGE_WIDTH
}

fn default_command_log_capacity() -> usize {
    COMMAND_LOG_CAPACITY
}

impl SelectionOptions {
    /// Lädt Optionen aus einer TOML-Datei.
    ///
    /// Eine fehlende Datei liefert still die Standardwerte, eine unlesbare
    /// oder fehlerhafte Datei ebenfalls, aber mit Warnung.
    pub fn load_from_file(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Keine Optionen unter {}, Standardwerte", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Optionen unter {} nicht lesbar: {}", path.display(), e);
                return Self::default();
            }
        };

        Self::from_toml(&content).unwrap_or_else(|e| {
            log::warn!("Optionen unter {} verworfen: {:#}", path.display(), e);
            Self::default()
        })
    }

    /// Parst Optionen aus TOML-Text. Fehlende Felder erhalten Standardwerte.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let options: Self = toml::from_str(content).context("TOML der Selektions-Optionen")?;
        if !options.minimal_selection_size.is_finite() || options.minimal_selection_size < 0.0 {
            anyhow::bail!(
                "minimal_selection_size muss endlich und >= 0 sein, ist {}",
                options.minimal_selection_size
            );
        }
        Ok(options)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nach {} schreiben", path.display()))?;
        log::info!("Selektions-Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}
