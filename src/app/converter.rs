//! Konvertierungslauf: Registry aufbauen, Zonen auflösen, assemblieren, sammeln.

use std::rc::Rc;

use crate::core::{AixmCatalog, StructuralFault};
use crate::export::openair::{airspace_record, OpenAirArchive, RecordSink, AIRSPACES_CATEGORY};
use crate::shared::{ConverterOptions, GreatCircleTessellator};

use super::assembler::GeometryAssembler;
use super::border_registry::BorderRegistry;
use super::diagnostics::Diagnostics;
use super::features::FeatureCollector;
use super::resolver::{BoundaryResolver, Resolution, ResolveContext};

/// Kennzahlen eines Laufs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub borders_registered: usize,
    pub zones_in_catalog: usize,
    pub grouping_zones_skipped: usize,
    /// Zonen-Features (eigene und geteilte Geometrien)
    pub features_produced: usize,
    /// Davon mit Geometrie der Basis-Zone
    pub shared_geometries: usize,
    pub markers: usize,
    pub missing_data: usize,
    pub unrecognized_codes: usize,
    pub empty_geometries: usize,
}

impl RunSummary {
    /// Loggt die Zusammenfassung auf Info-Level.
    pub fn log(&self) {
        log::info!(
            "Konvertierung abgeschlossen: {} Zonen, {} Features ({} geteilt), {} Gruppen uebersprungen, {} Marker",
            self.zones_in_catalog,
            self.features_produced,
            self.shared_geometries,
            self.grouping_zones_skipped,
            self.markers
        );
        log::info!(
            "Warnungen: {} fehlende Daten, {} unbekannte codeType, {} leere Geometrien",
            self.missing_data,
            self.unrecognized_codes,
            self.empty_geometries
        );
    }
}

/// Ergebnis eines Laufs. Wird erst am Ende als Ganzes geschrieben.
#[derive(Debug)]
pub struct ConversionOutput {
    pub features: FeatureCollector,
    pub archive: OpenAirArchive,
    pub diagnostics: Diagnostics,
    pub summary: RunSummary,
}

/// Konvertiert einen AIXM-Katalog in Features und OpenAir-Records.
pub struct Converter {
    options: ConverterOptions,
    resolver: BoundaryResolver,
}

impl Converter {
    pub fn new(options: ConverterOptions) -> Self {
        Self {
            options,
            resolver: BoundaryResolver::new(),
        }
    }

    /// Führt den Lauf aus. Ein `StructuralFault` bricht ohne Teilergebnis ab.
    pub fn run(&self, catalog: &AixmCatalog) -> Result<ConversionOutput, StructuralFault> {
        let mut archive = OpenAirArchive::new();
        let mut diagnostics = Diagnostics::new();
        let mut features = FeatureCollector::new();
        let mut summary = RunSummary {
            zones_in_catalog: catalog.zone_count(),
            ..Default::default()
        };

        let mut registry = BorderRegistry::new();
        let borders =
            registry.ensure_built(catalog.border_records(), &mut archive, &mut diagnostics)?;
        summary.borders_registered = borders.len();

        let tessellator = GreatCircleTessellator::new(self.options.arc_step_degrees);
        let assembler =
            GeometryAssembler::new(borders, &tessellator, self.options.make_map_markers);

        log::info!(
            "Verarbeite {} Zonen ({} Grenzdefinitionen)",
            catalog.zone_count(),
            catalog.boundary_count()
        );

        for zone in catalog.zones() {
            if zone.is_grouping_zone {
                log::debug!("AseUid={} ist Regroupement, uebersprungen", zone.uid);
                summary.grouping_zones_skipped += 1;
                continue;
            }

            let context = ResolveContext {
                catalog,
                collected: &features,
            };

            match self.resolver.resolve(zone, &context)? {
                Resolution::Definition { definition, .. } => {
                    let assembly = assembler.assemble(zone, &definition, &mut diagnostics);
                    // Hilfspunkte stehen vor dem Feature ihrer Zone
                    for marker in assembly.markers {
                        features.add_marker(marker);
                    }
                    if let Some(geometry) = assembly.geometry {
                        log::debug!(
                            "AseUid={} '{}': {} mit {} Punkten",
                            zone.uid,
                            zone.name,
                            geometry.kind(),
                            geometry.points().len()
                        );
                        archive.emit(AIRSPACES_CATEGORY, airspace_record(zone, &geometry));
                        features.add(zone.clone(), Rc::new(geometry));
                    }
                }
                Resolution::Shared {
                    geometry,
                    base_zone,
                } => {
                    log::debug!(
                        "AseUid={} uebernimmt Geometrie von AseUid={}",
                        zone.uid,
                        base_zone
                    );
                    archive.emit(AIRSPACES_CATEGORY, airspace_record(zone, &geometry));
                    features.add(zone.clone(), geometry);
                    summary.shared_geometries += 1;
                }
                Resolution::Missing(issue) => diagnostics.report(issue),
            }
        }

        summary.features_produced = features.zone_count();
        summary.markers = features.marker_count();
        summary.missing_data = diagnostics.missing_data_count();
        summary.unrecognized_codes = diagnostics.unrecognized_code_count();
        summary.empty_geometries = diagnostics.empty_geometry_count();

        Ok(ConversionOutput {
            features,
            archive,
            diagnostics,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        AssembledGeometry, BorderRecord, BorderVertexRecord, BoundaryRecord, CircleRecord,
        DerivationRecord, VertexRecord, ZoneRecord,
    };
    use crate::export::openair::BORDERS_CATEGORY;

    fn avx(code: &str, lat: &str, long: &str) -> VertexRecord {
        VertexRecord {
            code_type: Some(code.to_string()),
            geo_lat: Some(lat.to_string()),
            geo_long: Some(long.to_string()),
            ..Default::default()
        }
    }

    fn triangle(zone_uid: &str) -> BoundaryRecord {
        BoundaryRecord {
            zone_uid: zone_uid.to_string(),
            circle: None,
            vertices: vec![
                avx("GRC", "480000N", "0020000E"),
                avx("GRC", "480000N", "0030000E"),
                avx("GRC", "490000N", "0030000E"),
            ],
        }
    }

    fn zone(uid: &str, name: &str) -> ZoneRecord {
        ZoneRecord {
            uid: uid.to_string(),
            code_type: Some("CTR".to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn catalog() -> AixmCatalog {
        let borders = vec![BorderRecord {
            uid: "GBR1".to_string(),
            name: "FRANCE-SUISSE".to_string(),
            vertices: vec![
                BorderVertexRecord {
                    code_type: Some("GRC".to_string()),
                    geo_lat: Some("460000N".to_string()),
                    geo_long: Some("0060000E".to_string()),
                },
                BorderVertexRecord {
                    code_type: Some("END".to_string()),
                    geo_lat: Some("470000N".to_string()),
                    geo_long: Some("0070000E".to_string()),
                },
            ],
        }];

        let mut unknown_border = avx("FNT", "460000N", "0060000E");
        unknown_border.border_uid = Some("GBR404".to_string());
        unknown_border.border_name = Some("NOWHERE".to_string());

        let boundaries = vec![
            triangle("1"),
            BoundaryRecord {
                zone_uid: "5".to_string(),
                circle: Some(CircleRecord {
                    geo_lat_cen: Some("480000N".to_string()),
                    geo_long_cen: Some("0020000E".to_string()),
                    val_radius: Some("5".to_string()),
                    uom_radius: Some("NM".to_string()),
                }),
                vertices: Vec::new(),
            },
            BoundaryRecord {
                zone_uid: "6".to_string(),
                circle: None,
                vertices: vec![unknown_border],
            },
        ];

        let zones = vec![
            zone("1", "CTR BASE"),
            zone("2", "CTR SAME EXTENT"),
            zone("3", "GROUP"),
            zone("4", "NO BORDERS"),
            zone("5", "CIRCLE"),
            zone("6", "UNKNOWN BORDER"),
        ];

        let derivations = vec![
            DerivationRecord {
                zone_uid: "2".to_string(),
                same_extent_uid: Some("1".to_string()),
                ..Default::default()
            },
            DerivationRecord {
                zone_uid: "3".to_string(),
                component_uids: vec!["1".to_string(), "5".to_string()],
                ..Default::default()
            },
        ];

        AixmCatalog::from_records(borders, boundaries, zones, derivations)
    }

    #[test]
    fn full_run_collects_expected_features() {
        let output = Converter::new(ConverterOptions::default())
            .run(&catalog())
            .unwrap();

        let ids: Vec<&str> = output
            .features
            .zone_features()
            .map(|(zone, _)| zone.uid.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "5", "6"]);

        let summary = &output.summary;
        assert_eq!(summary.borders_registered, 1);
        assert_eq!(summary.zones_in_catalog, 6);
        assert_eq!(summary.grouping_zones_skipped, 1);
        assert_eq!(summary.features_produced, 4);
        assert_eq!(summary.shared_geometries, 1);
        assert_eq!(summary.markers, 0);
        // Zone 4 ohne Grenze, Zone 6 mit unbekannter Grenze
        assert_eq!(summary.missing_data, 2);

        assert_eq!(output.archive.records(BORDERS_CATEGORY).len(), 1);
        assert_eq!(output.archive.records(AIRSPACES_CATEGORY).len(), 4);
    }

    #[test]
    fn same_extent_zone_shares_geometry_instance() {
        let output = Converter::new(ConverterOptions::default())
            .run(&catalog())
            .unwrap();

        let base = output.features.find_by_zone_id("1").unwrap();
        let derived = output.features.find_by_zone_id("2").unwrap();
        assert!(Rc::ptr_eq(&base, &derived));
    }

    #[test]
    fn grouping_zone_is_never_a_feature() {
        let output = Converter::new(ConverterOptions::default())
            .run(&catalog())
            .unwrap();

        assert!(output.features.find_by_zone_id("3").is_none());
    }

    #[test]
    fn unknown_border_degrades_to_point() {
        let output = Converter::new(ConverterOptions::default())
            .run(&catalog())
            .unwrap();

        let geometry = output.features.find_by_zone_id("6").unwrap();
        assert!(matches!(*geometry, AssembledGeometry::Point(_)));
    }

    #[test]
    fn marker_mode_adds_marker_features() {
        let options = ConverterOptions {
            make_map_markers: true,
            ..Default::default()
        };
        let output = Converter::new(options).run(&catalog()).unwrap();

        // 3 Stützpunkte von Zone 1, Kreiszentrum von Zone 5
        assert_eq!(output.summary.markers, 4);
        assert_eq!(output.summary.features_produced, 4);
    }

    #[test]
    fn markers_precede_their_zone_feature() {
        let options = ConverterOptions {
            make_map_markers: true,
            ..Default::default()
        };
        let output = Converter::new(options).run(&catalog()).unwrap();

        let order: Vec<&str> = output
            .features
            .features()
            .iter()
            .map(|f| f.zone().map_or("marker", |z| z.uid.as_str()))
            .collect();
        assert_eq!(
            order,
            vec!["marker", "marker", "marker", "1", "2", "marker", "5", "6"]
        );
    }

    #[test]
    fn structural_fault_aborts_run() {
        let mut broken = triangle("1");
        broken.vertices[1].geo_long = Some("kaputt".to_string());
        let catalog = AixmCatalog::from_records(
            Vec::new(),
            vec![broken],
            vec![zone("1", "BROKEN")],
            Vec::new(),
        );

        let result = Converter::new(ConverterOptions::default()).run(&catalog);
        assert!(result.is_err());
    }
}
