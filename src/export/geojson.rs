//! GeoJSON-Export der gesammelten Features.

use std::path::Path;

use anyhow::{bail, Context, Result};
use geo::Coord;
use ::geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

use crate::app::{FeatureCollector, FeatureProperties};
use crate::core::{AssembledGeometry, ZoneMeta};

/// Baut eine `FeatureCollection` in Sammel-Reihenfolge.
pub fn feature_collection(collector: &FeatureCollector) -> Result<FeatureCollection> {
    let features = collector
        .features()
        .iter()
        .map(|feature| -> Result<Feature> {
            let properties = match &feature.properties {
                FeatureProperties::Zone(zone) => zone_properties(zone)?,
                FeatureProperties::Marker { label } => marker_properties(label),
            };
            Ok(Feature {
                bbox: None,
                geometry: Some(Geometry::new(geometry_value(&feature.geometry))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            })
        })
        .collect::<Result<Vec<Feature>>>()?;

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// Schreibt die `FeatureCollection` als formatiertes JSON.
pub fn write_geojson(collector: &FeatureCollector, path: &Path) -> Result<()> {
    let collection = feature_collection(collector)?;
    let content = serde_json::to_string_pretty(&collection)?;
    std::fs::write(path, content)
        .with_context(|| format!("GeoJSON konnte nicht geschrieben werden: {}", path.display()))?;
    log::info!(
        "{} Features geschrieben nach: {}",
        collector.len(),
        path.display()
    );
    Ok(())
}

fn zone_properties(zone: &ZoneMeta) -> Result<JsonObject> {
    let value = serde_json::to_value(zone)
        .with_context(|| format!("Zone {} nicht serialisierbar", zone.uid))?;
    match value {
        JsonValue::Object(properties) => Ok(properties),
        other => bail!("Zone {} ergibt kein JSON-Objekt: {}", zone.uid, other),
    }
}

fn marker_properties(label: &str) -> JsonObject {
    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), JsonValue::from(label));
    properties.insert("marker".to_string(), JsonValue::from(true));
    properties
}

fn geometry_value(geometry: &AssembledGeometry) -> Value {
    match geometry {
        AssembledGeometry::Point(point) => Value::Point(position(point)),
        AssembledGeometry::LineString(points) => {
            Value::LineString(points.iter().map(position).collect())
        }
        AssembledGeometry::Polygon(ring) => Value::Polygon(vec![ring.iter().map(position).collect()]),
    }
}

fn position(coord: &Coord<f64>) -> Vec<f64> {
    vec![coord.x, coord.y]
}
