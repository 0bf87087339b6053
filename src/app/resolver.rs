//! Auflösung der Grenzdefinition einer Zone.
//!
//! Geordnete Strategie-Kette: eigene Definition → bereits assemblierte
//! Geometrie der Basis-Zone → Definition der Basis-Zone.

use crate::core::{
    AixmCatalog, BoundaryDefinition, SharedGeometry, StructuralFault, ZoneMeta,
};

use super::diagnostics::ConversionIssue;
use super::features::FeatureCollector;

/// Herkunft einer noch zu assemblierenden Definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionSource {
    /// Die Zone hat eine eigene `<Abd>`
    Own,
    /// Definition der Basis-Zone
    Base(String),
}

/// Ergebnis der Auflösung.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// Definition, die für die aktuelle Zone assembliert werden muss
    Definition {
        definition: BoundaryDefinition,
        source: DefinitionSource,
    },
    /// Bereits assemblierte Geometrie der Basis-Zone (gleiche Instanz)
    Shared {
        geometry: SharedGeometry,
        base_zone: String,
    },
    /// Keine Grenze auffindbar, Zone entfällt
    Missing(ConversionIssue),
}

/// Read-only Kontext einer Auflösung.
pub struct ResolveContext<'a> {
    pub catalog: &'a AixmCatalog,
    pub collected: &'a FeatureCollector,
}

/// Ein Glied der Auflösungskette. `Ok(None)` reicht an die nächste Strategie weiter.
pub trait ResolutionStrategy {
    fn name(&self) -> &'static str;

    fn resolve(
        &self,
        zone: &ZoneMeta,
        context: &ResolveContext<'_>,
    ) -> Result<Option<Resolution>, StructuralFault>;
}

/// Eigene Grenzdefinition der Zone.
pub struct DirectDefinition;

impl ResolutionStrategy for DirectDefinition {
    fn name(&self) -> &'static str {
        "DirectDefinition"
    }

    fn resolve(
        &self,
        zone: &ZoneMeta,
        context: &ResolveContext<'_>,
    ) -> Result<Option<Resolution>, StructuralFault> {
        let Some(record) = context.catalog.boundary(&zone.uid) else {
            return Ok(None);
        };
        Ok(Some(Resolution::Definition {
            definition: BoundaryDefinition::from_record(record)?,
            source: DefinitionSource::Own,
        }))
    }
}

/// Geometrie der Basis-Zone, falls diese schon gesammelt wurde.
pub struct SharedBaseGeometry;

impl ResolutionStrategy for SharedBaseGeometry {
    fn name(&self) -> &'static str {
        "SharedBaseGeometry"
    }

    fn resolve(
        &self,
        zone: &ZoneMeta,
        context: &ResolveContext<'_>,
    ) -> Result<Option<Resolution>, StructuralFault> {
        let Some(base) = zone.base_zone_id.as_deref() else {
            return Ok(None);
        };
        Ok(context
            .collected
            .find_by_zone_id(base)
            .map(|geometry| Resolution::Shared {
                geometry,
                base_zone: base.to_string(),
            }))
    }
}

/// Grenzdefinition der Basis-Zone, für die aktuelle Zone neu assembliert.
pub struct BaseDefinition;

impl ResolutionStrategy for BaseDefinition {
    fn name(&self) -> &'static str {
        "BaseDefinition"
    }

    fn resolve(
        &self,
        zone: &ZoneMeta,
        context: &ResolveContext<'_>,
    ) -> Result<Option<Resolution>, StructuralFault> {
        let Some(base) = zone.base_zone_id.as_deref() else {
            return Ok(None);
        };
        let Some(record) = context.catalog.boundary(base) else {
            return Ok(None);
        };
        Ok(Some(Resolution::Definition {
            definition: BoundaryDefinition::from_record(record)?,
            source: DefinitionSource::Base(base.to_string()),
        }))
    }
}

/// Führt die Strategien in fester Reihenfolge aus.
pub struct BoundaryResolver {
    strategies: Vec<Box<dyn ResolutionStrategy>>,
}

impl Default for BoundaryResolver {
    fn default() -> Self {
        Self {
            strategies: vec![
                Box::new(DirectDefinition),
                Box::new(SharedBaseGeometry),
                Box::new(BaseDefinition),
            ],
        }
    }
}

impl BoundaryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Löst die Grenze einer Zone auf. Fehler in den Roh-Daten sind fatal.
    pub fn resolve(
        &self,
        zone: &ZoneMeta,
        context: &ResolveContext<'_>,
    ) -> Result<Resolution, StructuralFault> {
        for strategy in &self.strategies {
            if let Some(resolution) = strategy.resolve(zone, context)? {
                log::debug!("AseUid={} aufgeloest via {}", zone.uid, strategy.name());
                return Ok(resolution);
            }
        }

        let issue = match &zone.base_zone_id {
            Some(base) => ConversionIssue::MissingBaseBoundary {
                zone: zone.uid.clone(),
                base: base.clone(),
            },
            None => ConversionIssue::MissingBoundary {
                zone: zone.uid.clone(),
            },
        };
        Ok(Resolution::Missing(issue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AssembledGeometry, BoundaryRecord, CircleRecord, VertexRecord};
    use geo::Coord;
    use std::rc::Rc;

    fn vertex(lat: &str, long: &str) -> VertexRecord {
        VertexRecord {
            code_type: Some("GRC".to_string()),
            geo_lat: Some(lat.to_string()),
            geo_long: Some(long.to_string()),
            ..Default::default()
        }
    }

    fn boundary(zone_uid: &str) -> BoundaryRecord {
        BoundaryRecord {
            zone_uid: zone_uid.to_string(),
            circle: None,
            vertices: vec![vertex("480000N", "0020000E")],
        }
    }

    fn derived(uid: &str, base: &str) -> ZoneMeta {
        let mut zone = ZoneMeta::new(uid, format!("Zone {uid}"));
        zone.base_zone_id = Some(base.to_string());
        zone
    }

    fn catalog_with(boundaries: Vec<BoundaryRecord>) -> AixmCatalog {
        let mut catalog = AixmCatalog::new();
        for record in boundaries {
            catalog.insert_boundary(record);
        }
        catalog
    }

    #[test]
    fn own_definition_wins() {
        let catalog = catalog_with(vec![boundary("1"), boundary("2")]);
        let collected = FeatureCollector::new();
        let context = ResolveContext {
            catalog: &catalog,
            collected: &collected,
        };

        let resolution = BoundaryResolver::new()
            .resolve(&derived("2", "1"), &context)
            .unwrap();

        assert!(matches!(
            resolution,
            Resolution::Definition {
                source: DefinitionSource::Own,
                ..
            }
        ));
    }

    #[test]
    fn collected_base_geometry_is_shared_by_identity() {
        let catalog = catalog_with(vec![boundary("1")]);
        let mut collected = FeatureCollector::new();
        let base_geometry = Rc::new(AssembledGeometry::Point(Coord { x: 2.0, y: 48.0 }));
        collected.add(ZoneMeta::new("1", "Base"), Rc::clone(&base_geometry));
        let context = ResolveContext {
            catalog: &catalog,
            collected: &collected,
        };

        let resolution = BoundaryResolver::new()
            .resolve(&derived("2", "1"), &context)
            .unwrap();

        let Resolution::Shared { geometry, base_zone } = resolution else {
            panic!("Shared erwartet");
        };
        assert_eq!(base_zone, "1");
        assert!(Rc::ptr_eq(&geometry, &base_geometry));
    }

    #[test]
    fn uncollected_base_falls_back_to_base_definition() {
        let catalog = catalog_with(vec![boundary("1")]);
        let collected = FeatureCollector::new();
        let context = ResolveContext {
            catalog: &catalog,
            collected: &collected,
        };

        let resolution = BoundaryResolver::new()
            .resolve(&derived("2", "1"), &context)
            .unwrap();

        let Resolution::Definition { source, .. } = resolution else {
            panic!("Definition erwartet");
        };
        assert_eq!(source, DefinitionSource::Base("1".to_string()));
    }

    #[test]
    fn missing_boundary_distinguishes_base_case() {
        let catalog = AixmCatalog::new();
        let collected = FeatureCollector::new();
        let context = ResolveContext {
            catalog: &catalog,
            collected: &collected,
        };
        let resolver = BoundaryResolver::new();

        let Resolution::Missing(without_base) =
            resolver.resolve(&ZoneMeta::new("1", "Alone"), &context).unwrap()
        else {
            panic!("Missing erwartet");
        };
        let Resolution::Missing(with_base) = resolver.resolve(&derived("2", "9"), &context).unwrap()
        else {
            panic!("Missing erwartet");
        };

        assert_eq!(
            without_base,
            ConversionIssue::MissingBoundary {
                zone: "1".to_string()
            }
        );
        assert_eq!(
            with_base,
            ConversionIssue::MissingBaseBoundary {
                zone: "2".to_string(),
                base: "9".to_string()
            }
        );
    }

    #[test]
    fn structural_fault_in_definition_propagates() {
        let mut record = boundary("1");
        record.circle = Some(CircleRecord {
            geo_lat_cen: Some("480000N".to_string()),
            geo_long_cen: Some("0020000E".to_string()),
            val_radius: None,
            uom_radius: Some("NM".to_string()),
        });
        let catalog = catalog_with(vec![record]);
        let collected = FeatureCollector::new();
        let context = ResolveContext {
            catalog: &catalog,
            collected: &collected,
        };

        let result = BoundaryResolver::new().resolve(&ZoneMeta::new("1", "Circle"), &context);
        assert!(matches!(result, Err(StructuralFault::MissingField { .. })));
    }
}
