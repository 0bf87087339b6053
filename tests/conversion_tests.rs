/// Integration-Tests für den kompletten Konvertierungslauf
use std::rc::Rc;

use aixm2openair::app::ConversionIssue;
use aixm2openair::export::openair::{AIRSPACES_CATEGORY, BORDERS_CATEGORY};
use aixm2openair::shared::arc_geometry::haversine_distance;
use aixm2openair::{
    parse_aixm_document, write_outputs, AixmCatalog, AssembledGeometry, ConversionOutput,
    Converter, ConverterOptions,
};
use approx::assert_relative_eq;
use geo::Coord;

fn load_fixture() -> AixmCatalog {
    let xml_content = include_str!("fixtures/sample_aixm.xml");
    parse_aixm_document(xml_content).expect("Fixture muss parsebar sein")
}

fn convert(options: ConverterOptions) -> ConversionOutput {
    Converter::new(options)
        .run(&load_fixture())
        .expect("Konvertierung darf nicht abbrechen")
}

#[test]
fn test_fixture_catalog_contents() {
    let catalog = load_fixture();

    assert_eq!(catalog.zone_count(), 7);
    assert_eq!(catalog.boundary_count(), 4);
    assert_eq!(catalog.border_records().len(), 1);
    assert!(catalog.zone("2004").unwrap().is_grouping_zone);
    assert_eq!(catalog.base_zone_id("2002"), Some("2001"));
}

#[test]
fn test_conversion_summary() {
    let output = convert(ConverterOptions::default());

    let ids: Vec<&str> = output
        .features
        .zone_features()
        .map(|(zone, _)| zone.uid.as_str())
        .collect();
    assert_eq!(ids, vec!["2001", "2002", "2003", "2006", "2007"]);

    let summary = &output.summary;
    assert_eq!(summary.borders_registered, 1);
    assert_eq!(summary.zones_in_catalog, 7);
    assert_eq!(summary.grouping_zones_skipped, 1);
    assert_eq!(summary.features_produced, 5);
    assert_eq!(summary.shared_geometries, 1);
    assert_eq!(summary.missing_data, 2);
    assert_eq!(summary.unrecognized_codes, 0);
    assert_eq!(summary.empty_geometries, 0);

    assert!(output.diagnostics.issues().contains(&ConversionIssue::MissingBoundary {
        zone: "2005".to_string()
    }));
}

#[test]
fn test_grouping_zone_is_not_a_feature() {
    let output = convert(ConverterOptions::default());
    assert!(output.features.find_by_zone_id("2004").is_none());
}

#[test]
fn test_same_extent_shares_geometry_instance() {
    let output = convert(ConverterOptions::default());

    let base = output.features.find_by_zone_id("2001").unwrap();
    let derived = output.features.find_by_zone_id("2002").unwrap();
    assert!(Rc::ptr_eq(&base, &derived));
}

#[test]
fn test_every_polygon_is_closed() {
    let output = convert(ConverterOptions::default());

    for (zone, geometry) in output.features.zone_features() {
        if let AssembledGeometry::Polygon(ring) = geometry.as_ref() {
            assert!(ring.len() >= 4, "Ring von {} zu kurz", zone.uid);
            assert_eq!(ring.first(), ring.last(), "Ring von {} offen", zone.uid);
        }
    }
}

#[test]
fn test_border_follow_extracts_border_section() {
    let output = convert(ConverterOptions::default());

    let geometry = output.features.find_by_zone_id("2001").unwrap();
    let AssembledGeometry::Polygon(ring) = geometry.as_ref() else {
        panic!("Polygon erwartet");
    };

    let expected = [
        (6.5, 46.0),
        (7.0, 46.0),
        (7.5, 46.0),
        (7.5, 46.0),
        (7.0, 47.0),
        (6.5, 46.0),
    ];
    assert_eq!(ring.len(), expected.len());
    for (point, (x, y)) in ring.iter().zip(expected) {
        assert_relative_eq!(point.x, x, epsilon = 1e-9);
        assert_relative_eq!(point.y, y, epsilon = 1e-9);
    }

    // Grenzpunkte in Laufrichtung der Grenze
    assert!(ring[0].x <= ring[1].x && ring[1].x <= ring[2].x);
}

#[test]
fn test_circle_radius_in_nautical_miles() {
    let output = convert(ConverterOptions::default());

    let geometry = output.features.find_by_zone_id("2003").unwrap();
    let AssembledGeometry::Polygon(ring) = geometry.as_ref() else {
        panic!("Polygon erwartet");
    };

    let center = Coord { x: 2.0, y: 48.0 };
    for point in ring {
        assert_relative_eq!(
            haversine_distance(center, *point),
            5.0 * 1852.0,
            max_relative = 1e-6
        );
    }
}

#[test]
fn test_arc_reaches_following_vertex() {
    let output = convert(ConverterOptions::default());

    let geometry = output.features.find_by_zone_id("2006").unwrap();
    let AssembledGeometry::Polygon(ring) = geometry.as_ref() else {
        panic!("Polygon erwartet");
    };

    assert!(ring.len() > 6);
    // Bogen im Uhrzeigersinn über Osten
    assert!(ring.iter().any(|p| p.x > 3.5));
    assert!(ring.contains(&Coord { x: 3.0, y: 48.0 }));
}

#[test]
fn test_unknown_border_degrades_to_start_point() {
    let output = convert(ConverterOptions::default());

    let geometry = output.features.find_by_zone_id("2007").unwrap();
    assert_eq!(
        geometry.points(),
        &[
            Coord { x: 5.0, y: 45.0 },
            Coord { x: 6.0, y: 45.0 },
            Coord { x: 5.5, y: 45.5 },
            Coord { x: 5.0, y: 45.0 },
        ]
    );
    assert!(output
        .diagnostics
        .issues()
        .iter()
        .any(|issue| matches!(issue, ConversionIssue::MissingBorder { border, .. } if border == "9999")));
}

#[test]
fn test_marker_mode_adds_markers_only() {
    let plain = convert(ConverterOptions::default());
    let marked = convert(ConverterOptions {
        make_map_markers: true,
        ..Default::default()
    });

    assert_eq!(plain.summary.markers, 0);
    // 2001: 2 Stützpunkte, 2003: Kreiszentrum, 2006: 2 Stützpunkte + 3 Bogenpunkte, 2007: 2 Stützpunkte
    assert_eq!(marked.summary.markers, 10);
    assert_eq!(
        marked.summary.features_produced,
        plain.summary.features_produced
    );
}

#[test]
fn test_openair_records() {
    let output = convert(ConverterOptions::default());

    assert_eq!(output.archive.records(BORDERS_CATEGORY).len(), 1);
    let airspaces = output.archive.records(AIRSPACES_CATEGORY);
    assert_eq!(airspaces.len(), 5);

    assert_eq!(
        airspaces[0],
        vec![
            "AC D",
            "AN ALPHA CTR",
            "AH 3500 FT AMSL",
            "AL SFC",
            "DP 46:00:00 N 006:30:00 E",
            "DP 46:00:00 N 007:00:00 E",
            "DP 46:00:00 N 007:30:00 E",
            "DP 47:00:00 N 007:00:00 E",
        ]
    );
    assert_eq!(airspaces[1][0], "AC TMZ");
    assert_eq!(airspaces[2][2], "AH FL115");

    let borders = output.archive.render(BORDERS_CATEGORY);
    assert!(borders.contains("AN Geographic border - FRANCE_SUISSE"));
    assert_eq!(borders.matches("DP ").count(), 3);
}

#[test]
fn test_write_outputs_to_directory() {
    let output = convert(ConverterOptions::default());
    let dir = std::env::temp_dir().join(format!("aixm2openair-test-{}", std::process::id()));

    let written = write_outputs(&output, &dir, "sample", &ConverterOptions::default()).unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "sample-borders.txt",
            "sample-airspaces.txt",
            "sample-airspaces.geojson"
        ]
    );

    let geojson = std::fs::read_to_string(dir.join("sample-airspaces.geojson")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&geojson).unwrap();
    assert_eq!(value["features"].as_array().unwrap().len(), 5);

    let airspaces = std::fs::read_to_string(dir.join("sample-airspaces.txt")).unwrap();
    assert!(airspaces.contains("AN ARC ZONE"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_disabled_exports_write_nothing() {
    let output = convert(ConverterOptions::default());
    let dir = std::env::temp_dir().join(format!(
        "aixm2openair-test-disabled-{}",
        std::process::id()
    ));
    let options = ConverterOptions {
        export_openair: false,
        export_geojson: false,
        ..Default::default()
    };

    let written = write_outputs(&output, &dir, "sample", &options).unwrap();
    assert!(written.is_empty());

    std::fs::remove_dir_all(&dir).ok();
}
