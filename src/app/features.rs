//! Geordnete Sammlung der erzeugten Features (Zonen und Hilfspunkte).

use std::rc::Rc;

use geo::Coord;

use crate::core::{AssembledGeometry, SharedGeometry, ZoneMeta};

/// Eigenschaften eines Features.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureProperties {
    /// Luftraum mit seinen Katalog-Metadaten
    Zone(ZoneMeta),
    /// Beschrifteter Hilfspunkt (Bogen-Zentrum, Stützpunkt, ...)
    Marker { label: String },
}

/// Ein Feature: Eigenschaften plus geteilte Geometrie.
#[derive(Debug, Clone)]
pub struct Feature {
    pub properties: FeatureProperties,
    pub geometry: SharedGeometry,
}

impl Feature {
    /// Zonen-Metadaten, falls es sich um ein Zonen-Feature handelt.
    pub fn zone(&self) -> Option<&ZoneMeta> {
        match &self.properties {
            FeatureProperties::Zone(zone) => Some(zone),
            FeatureProperties::Marker { .. } => None,
        }
    }
}

/// Beschrifteter Hilfspunkt, vom Assembler im Marker-Modus erzeugt.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub label: String,
    pub position: Coord<f64>,
}

impl MapMarker {
    pub fn new(label: String, position: Coord<f64>) -> Self {
        Self { label, position }
    }
}

/// Sammelt Features in Einfügereihenfolge (= Katalog-Reihenfolge).
#[derive(Debug, Clone, Default)]
pub struct FeatureCollector {
    features: Vec<Feature>,
}

impl FeatureCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt ein Zonen-Feature an. Keine Deduplizierung.
    pub fn add(&mut self, zone: ZoneMeta, geometry: SharedGeometry) {
        self.features.push(Feature {
            properties: FeatureProperties::Zone(zone),
            geometry,
        });
    }

    /// Hängt einen Hilfspunkt als Punkt-Feature an.
    pub fn add_marker(&mut self, marker: MapMarker) {
        self.features.push(Feature {
            properties: FeatureProperties::Marker {
                label: marker.label,
            },
            geometry: Rc::new(AssembledGeometry::Point(marker.position)),
        });
    }

    /// Geometrie des ersten Zonen-Features mit der gegebenen ID (lineare Suche).
    pub fn find_by_zone_id(&self, zone_uid: &str) -> Option<SharedGeometry> {
        self.features
            .iter()
            .find(|f| f.zone().is_some_and(|z| z.uid == zone_uid))
            .map(|f| Rc::clone(&f.geometry))
    }

    /// Alle Features in Reihenfolge.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Nur die Zonen-Features.
    pub fn zone_features(&self) -> impl Iterator<Item = (&ZoneMeta, &SharedGeometry)> {
        self.features
            .iter()
            .filter_map(|f| f.zone().map(|z| (z, &f.geometry)))
    }

    pub fn zone_count(&self) -> usize {
        self.zone_features().count()
    }

    pub fn marker_count(&self) -> usize {
        self.features.len() - self.zone_count()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
