//! Zentrale Konfiguration des Konverters.
//!
//! `ConverterOptions` wird aus einer TOML-Datei geladen; die `const`-Werte
//! bleiben als Fallback/Default erhalten.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Standard-Winkelschritt der Bogen-Tessellierung in Grad.
pub const ARC_STEP_DEGREES: f64 = 5.0;
/// Name der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "aixm2openair.toml";

/// Alle Laufzeit-Optionen des Konverters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConverterOptions {
    /// Hilfspunkte (Bogen-Start/-Zentrum/-Ende, Stützpunkte) als Marker ausgeben
    #[serde(default)]
    pub make_map_markers: bool,
    /// Winkelschritt für Kreise und Bögen in Grad
    #[serde(default = "default_arc_step_degrees")]
    pub arc_step_degrees: f64,
    /// OpenAir-Dateien schreiben
    #[serde(default = "default_true")]
    pub export_openair: bool,
    /// GeoJSON-Datei schreiben
    #[serde(default = "default_true")]
    pub export_geojson: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            make_map_markers: false,
            arc_step_degrees: ARC_STEP_DEGREES,
            export_openair: true,
            export_geojson: true,
        }
    }
}

/// Serde-Default für `arc_step_degrees` (Abwärtskompatibilität).
fn default_arc_step_degrees() -> f64 {
    ARC_STEP_DEGREES
}

fn default_true() -> bool {
    true
}

impl ConverterOptions {
    /// Liest Optionen aus TOML-Text; fehlende Schlüssel erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Self>(content).map(Self::sanitized)
    }

    /// Lädt Optionen aus `path`. Fehlt die Datei oder ist sie fehlerhaft,
    /// gelten die Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Keine Optionen-Datei unter {}", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Optionen-Datei {} nicht lesbar: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_toml_str(&content) {
            Ok(opts) => {
                log::info!("Optionen geladen aus: {}", path.display());
                opts
            }
            Err(e) => {
                log::warn!(
                    "Optionen-Datei {} fehlerhaft, verwende Standardwerte: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Standard-Optionen-Datei: zuerst im Arbeitsverzeichnis, sonst neben der Binary.
    pub fn config_path() -> PathBuf {
        let local = PathBuf::from(OPTIONS_FILE_NAME);
        if local.is_file() {
            return local;
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(OPTIONS_FILE_NAME)))
            .unwrap_or(local)
    }

    /// Ersetzt einen nicht positiven Winkelschritt durch den Standardwert.
    fn sanitized(mut self) -> Self {
        if !(self.arc_step_degrees.is_finite() && self.arc_step_degrees > 0.0) {
            log::warn!(
                "arc_step_degrees = {} ungültig, verwende {}",
                self.arc_step_degrees,
                ARC_STEP_DEGREES
            );
            self.arc_step_degrees = ARC_STEP_DEGREES;
        }
        self
    }
}
