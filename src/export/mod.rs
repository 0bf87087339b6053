//! Export der Konvertierungsergebnisse (OpenAir-Text und GeoJSON).

pub mod geojson;
pub mod openair;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::app::ConversionOutput;
use crate::shared::ConverterOptions;

pub use self::geojson::{feature_collection, write_geojson};
pub use self::openair::{OpenAirArchive, RecordSink};

/// Schreibt alle aktivierten Ausgaben nach `<dir>/<stem>-*`.
pub fn write_outputs(
    output: &ConversionOutput,
    dir: &Path,
    stem: &str,
    options: &ConverterOptions,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Ausgabeverzeichnis nicht anlegbar: {}", dir.display()))?;

    let mut written = Vec::new();

    if options.export_openair {
        written.extend(output.archive.write_to_dir(dir, stem)?);
    }

    if options.export_geojson {
        let path = dir.join(format!("{stem}-{}.geojson", openair::AIRSPACES_CATEGORY));
        write_geojson(&output.features, &path)?;
        written.push(path);
    }

    if written.is_empty() {
        log::warn!("Alle Exporte deaktiviert, nichts geschrieben");
    }

    Ok(written)
}
