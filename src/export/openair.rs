//! Writer für OpenAir-Textdateien.
//!
//! Records werden pro Kategorie (`borders`, `airspaces`) gesammelt und erst am
//! Ende des Laufs als Ganzes geschrieben.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use geo::Coord;
use indexmap::IndexMap;

use crate::core::{format_openair_position, AssembledGeometry, ZoneMeta};

/// Kategorie der Grenz-Records.
pub const BORDERS_CATEGORY: &str = "borders";
/// Kategorie der Luftraum-Records.
pub const AIRSPACES_CATEGORY: &str = "airspaces";

/// Empfänger für textuelle Feature-Records.
pub trait RecordSink {
    /// Nimmt einen Record (geordnete Textzeilen) für eine Kategorie entgegen.
    fn emit(&mut self, category: &str, lines: Vec<String>);
}

/// Sammelt OpenAir-Records pro Kategorie in Einfügereihenfolge.
#[derive(Debug, Clone, Default)]
pub struct OpenAirArchive {
    categories: IndexMap<String, Vec<Vec<String>>>,
}

impl RecordSink for OpenAirArchive {
    fn emit(&mut self, category: &str, lines: Vec<String>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .push(lines);
    }
}

impl OpenAirArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records einer Kategorie.
    pub fn records(&self, category: &str) -> &[Vec<String>] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Kategorien in Einfügereihenfolge.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Rendert eine Kategorie als OpenAir-Text (Records durch Leerzeile getrennt).
    pub fn render(&self, category: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "* {} - aixm2openair v{}\n",
            category,
            env!("CARGO_PKG_VERSION")
        ));
        for record in self.records(category) {
            output.push('\n');
            for line in record {
                output.push_str(line);
                output.push('\n');
            }
        }
        output
    }

    /// Schreibt jede Kategorie nach `<dir>/<stem>-<category>.txt`.
    pub fn write_to_dir(&self, dir: &Path, stem: &str) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for category in self.categories() {
            let path = dir.join(format!("{stem}-{category}.txt"));
            std::fs::write(&path, self.render(category))
                .with_context(|| format!("OpenAir-Datei konnte nicht geschrieben werden: {}", path.display()))?;
            log::info!(
                "{} {}-Records geschrieben nach: {}",
                self.records(category).len(),
                category,
                path.display()
            );
            written.push(path);
        }
        Ok(written)
    }
}

/// OpenAir-Record einer geografischen Grenze.
pub fn border_record(name: &str, vertices: &[Coord<f64>]) -> Vec<String> {
    let mut lines = vec![
        "AC G".to_string(),
        format!("AN Geographic border - {name}"),
        "AH SFC".to_string(),
        "AL SFC".to_string(),
    ];
    lines.extend(vertices.iter().map(|c| dp_line(*c)));
    lines
}

/// OpenAir-Record eines Luftraums.
///
/// Der Schlusspunkt eines Polygons entfällt, OpenAir schließt implizit.
/// Aufeinanderfolgende gleiche `DP`-Zeilen werden zusammengefasst, die
/// Geometrie selbst bleibt unverändert.
pub fn airspace_record(zone: &ZoneMeta, geometry: &AssembledGeometry) -> Vec<String> {
    let mut lines = vec![
        format!("AC {}", zone.openair_class()),
        format!("AN {}", zone.name),
        format!("AH {}", zone.upper),
        format!("AL {}", zone.lower),
    ];

    let points = match geometry {
        AssembledGeometry::Polygon(ring) => &ring[..ring.len().saturating_sub(1)],
        other => other.points(),
    };
    let mut dp_lines: Vec<String> = points.iter().map(|c| dp_line(*c)).collect();
    dp_lines.dedup();
    lines.extend(dp_lines);
    lines
}

fn dp_line(coord: Coord<f64>) -> String {
    format!("DP {}", format_openair_position(coord))
}
