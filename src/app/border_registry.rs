//! Registry der geografischen Grenzen (`Gbr`).
//!
//! Zweiphasiger Lebenszyklus: `Unbuilt → Built`. Nur der gebaute
//! `BorderIndex` bietet `lookup` an, damit kein FNT-Segment vor dem Aufbau
//! verarbeitet werden kann.

use std::collections::HashMap;

use crate::core::{
    decode_position, fault::require, Border, BorderRecord, SegmentCode, StructuralFault,
};
use crate::export::openair::{border_record, RecordSink, BORDERS_CATEGORY};

use super::diagnostics::{ConversionIssue, Diagnostics};

/// Nachschlage-Index aller registrierten Grenzen. Wird nach dem Aufbau nie verändert.
#[derive(Debug, Clone, Default)]
pub struct BorderIndex {
    borders: HashMap<String, Border>,
}

impl BorderIndex {
    /// Grenze nach `GbrUid`.
    pub fn lookup(&self, border_id: &str) -> Option<&Border> {
        self.borders.get(border_id)
    }

    pub fn len(&self) -> usize {
        self.borders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.borders.is_empty()
    }
}

#[derive(Debug, Default)]
enum RegistryState {
    #[default]
    Unbuilt,
    Built(BorderIndex),
}

/// Build-once-Cache der Grenzkurven.
#[derive(Debug, Default)]
pub struct BorderRegistry {
    state: RegistryState,
}

impl BorderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut den Index beim ersten Aufruf; spätere Aufrufe sind No-ops.
    ///
    /// Pro Grenze wird ein OpenAir-Record in die Kategorie `borders` emittiert.
    pub fn ensure_built(
        &mut self,
        records: &[BorderRecord],
        sink: &mut dyn RecordSink,
        diagnostics: &mut Diagnostics,
    ) -> Result<&BorderIndex, StructuralFault> {
        if let RegistryState::Unbuilt = self.state {
            let index = build_index(records, sink, diagnostics)?;
            log::info!("{} geografische Grenzen registriert", index.len());
            self.state = RegistryState::Built(index);
        }

        match &self.state {
            RegistryState::Built(index) => Ok(index),
            RegistryState::Unbuilt => unreachable!("Registry wurde soeben aufgebaut"),
        }
    }
}

fn build_index(
    records: &[BorderRecord],
    sink: &mut dyn RecordSink,
    diagnostics: &mut Diagnostics,
) -> Result<BorderIndex, StructuralFault> {
    let mut borders = HashMap::with_capacity(records.len());

    for record in records {
        let context = format!("Gbv von GbrUid={}", record.uid);
        let mut vertices = Vec::with_capacity(record.vertices.len());

        for gbv in &record.vertices {
            let code = SegmentCode::parse(require(&gbv.code_type, &context, "codeType")?);
            if !matches!(code, SegmentCode::GreatCircle | SegmentCode::End) {
                diagnostics.report(ConversionIssue::UnrecognizedSegmentCode {
                    context: context.clone(),
                    code: code.as_str().to_string(),
                });
            }

            vertices.push(decode_position(
                require(&gbv.geo_lat, &context, "geoLat")?,
                require(&gbv.geo_long, &context, "geoLong")?,
            )?);
        }

        sink.emit(BORDERS_CATEGORY, border_record(&record.name, &vertices));
        borders.insert(
            record.uid.clone(),
            Border::new(record.uid.clone(), record.name.clone(), vertices),
        );
    }

    Ok(BorderIndex { borders })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BorderVertexRecord;
    use crate::export::openair::OpenAirArchive;

    fn gbv(code: &str, lat: &str, long: &str) -> BorderVertexRecord {
        BorderVertexRecord {
            code_type: Some(code.to_string()),
            geo_lat: Some(lat.to_string()),
            geo_long: Some(long.to_string()),
        }
    }

    fn records() -> Vec<BorderRecord> {
        vec![BorderRecord {
            uid: "GBR1".to_string(),
            name: "FRANCE-BELGIQUE".to_string(),
            vertices: vec![
                gbv("GRC", "500000N", "0020000E"),
                gbv("RHL", "503000N", "0030000E"),
                gbv("END", "510000N", "0040000E"),
            ],
        }]
    }

    #[test]
    fn build_is_idempotent_and_emits_once() {
        let mut registry = BorderRegistry::new();
        let mut archive = OpenAirArchive::new();
        let mut diagnostics = Diagnostics::new();
        let records = records();

        assert!(archive.records(BORDERS_CATEGORY).is_empty());
        let first = registry
            .ensure_built(&records, &mut archive, &mut diagnostics)
            .unwrap();
        let first_len = first.len();
        let first_border = first.lookup("GBR1").cloned();

        let second = registry
            .ensure_built(&records, &mut archive, &mut diagnostics)
            .unwrap();

        assert_eq!(first_len, 1);
        assert_eq!(second.len(), 1);
        assert_eq!(second.lookup("GBR1").cloned(), first_border);
        assert_eq!(archive.records(BORDERS_CATEGORY).len(), 1);
    }

    #[test]
    fn unexpected_vertex_code_is_reported_but_used() {
        let mut registry = BorderRegistry::new();
        let mut archive = OpenAirArchive::new();
        let mut diagnostics = Diagnostics::new();

        let index = registry
            .ensure_built(&records(), &mut archive, &mut diagnostics)
            .unwrap();

        assert_eq!(index.lookup("GBR1").unwrap().vertex_count(), 3);
        assert_eq!(diagnostics.unrecognized_code_count(), 1);
        assert!(index.lookup("GBR2").is_none());
    }

    #[test]
    fn missing_latitude_aborts_the_build() {
        let mut records = records();
        records[0].vertices[1].geo_lat = None;

        let mut registry = BorderRegistry::new();
        let mut archive = OpenAirArchive::new();
        let result = registry.ensure_built(
            &records,
            &mut archive,
            &mut Diagnostics::new(),
        );

        assert!(result.is_err());
        assert!(archive.records(BORDERS_CATEGORY).is_empty());
    }
}
