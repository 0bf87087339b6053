//! Luftraum-Katalog: Grenzen, Grenzdefinitionen und Zonen eines AIXM-Dokuments.

use std::collections::HashMap;

use indexmap::IndexMap;

use super::records::{BorderRecord, BoundaryRecord, DerivationRecord, ZoneRecord};
use super::zone::ZoneMeta;

/// Read-only Sicht auf alle für die Konvertierung relevanten AIXM-Daten.
#[derive(Debug, Clone, Default)]
pub struct AixmCatalog {
    borders: Vec<BorderRecord>,
    boundaries: HashMap<String, BoundaryRecord>,
    /// Zonen in Dokument-Reihenfolge
    zones: IndexMap<String, ZoneMeta>,
}

impl AixmCatalog {
    /// Erstellt einen leeren Katalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut den Katalog aus den Roh-Records auf.
    ///
    /// `Adg`-Records setzen die Basis-Zone (`AseUidSameExtent` vor
    /// `AseUidBase`) bzw. markieren Zonen mit Komponenten als Regroupement.
    pub fn from_records(
        borders: Vec<BorderRecord>,
        boundaries: Vec<BoundaryRecord>,
        zones: Vec<ZoneRecord>,
        derivations: Vec<DerivationRecord>,
    ) -> Self {
        let mut catalog = Self::new();
        catalog.borders = borders;

        for boundary in boundaries {
            catalog.insert_boundary(boundary);
        }

        for record in &zones {
            catalog.insert_zone(ZoneMeta::from_record(record));
        }

        for derivation in derivations {
            let Some(zone) = catalog.zones.get_mut(&derivation.zone_uid) else {
                log::warn!(
                    "Adg verweist auf unbekannte Zone AseUid={}",
                    derivation.zone_uid
                );
                continue;
            };

            let base = derivation.same_extent_uid.or(derivation.base_uid);
            if base.is_none() && !derivation.component_uids.is_empty() {
                zone.is_grouping_zone = true;
            }
            zone.base_zone_id = base;
        }

        catalog
    }

    /// Fügt eine Grenzdefinition hinzu. Bei Duplikaten gilt die erste.
    pub fn insert_boundary(&mut self, boundary: BoundaryRecord) {
        if self.boundaries.contains_key(&boundary.zone_uid) {
            log::warn!(
                "Doppelte Grenzdefinition fuer AseUid={} ignoriert",
                boundary.zone_uid
            );
            return;
        }
        self.boundaries.insert(boundary.zone_uid.clone(), boundary);
    }

    /// Fügt eine Zone hinzu (Katalog-Reihenfolge = Einfügereihenfolge).
    pub fn insert_zone(&mut self, zone: ZoneMeta) {
        self.zones.insert(zone.uid.clone(), zone);
    }

    /// Alle Grenz-Records.
    pub fn border_records(&self) -> &[BorderRecord] {
        &self.borders
    }

    /// Grenzdefinition einer Zone (falls direkt vorhanden).
    pub fn boundary(&self, zone_uid: &str) -> Option<&BoundaryRecord> {
        self.boundaries.get(zone_uid)
    }

    /// Zone nach ID.
    pub fn zone(&self, zone_uid: &str) -> Option<&ZoneMeta> {
        self.zones.get(zone_uid)
    }

    /// Basis-Zone, von der eine Zone ihre Grenze erbt.
    pub fn base_zone_id(&self, zone_uid: &str) -> Option<&str> {
        self.zones.get(zone_uid)?.base_zone_id.as_deref()
    }

    /// Iteriert über alle Zonen in Katalog-Reihenfolge.
    pub fn zones(&self) -> impl Iterator<Item = &ZoneMeta> {
        self.zones.values()
    }

    /// Anzahl Zonen
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Anzahl Grenzdefinitionen
    pub fn boundary_count(&self) -> usize {
        self.boundaries.len()
    }
}
