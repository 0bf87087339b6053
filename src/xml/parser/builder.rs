//! Record-Aufbau: ordnet Elementpfade innerhalb eines Records den Feldern zu.

use crate::core::{
    BorderRecord, BorderVertexRecord, BoundaryRecord, CircleRecord, DerivationRecord,
    VertexRecord, ZoneRecord,
};

/// Alle gelesenen Roh-Records in Dokument-Reihenfolge.
#[derive(Debug, Default)]
pub(super) struct CatalogRecords {
    pub borders: Vec<BorderRecord>,
    pub boundaries: Vec<BoundaryRecord>,
    pub zones: Vec<ZoneRecord>,
    pub derivations: Vec<DerivationRecord>,
}

/// Record im Aufbau. Pfade sind relativ zum Record-Element.
#[derive(Debug)]
pub(super) enum RecordBuilder {
    Border(BorderRecord),
    Boundary(BoundaryRecord),
    Zone(ZoneRecord),
    Derivation(DerivationRecord),
}

impl RecordBuilder {
    /// Beginnt einen Record, falls `tag` ein unterstütztes Element ist.
    pub fn start(tag: &str) -> Option<Self> {
        match tag {
            "Gbr" => Some(RecordBuilder::Border(BorderRecord::default())),
            "Abd" => Some(RecordBuilder::Boundary(BoundaryRecord::default())),
            "Ase" => Some(RecordBuilder::Zone(ZoneRecord::default())),
            "Adg" => Some(RecordBuilder::Derivation(DerivationRecord::default())),
            _ => None,
        }
    }

    /// Ein Kind-Element wurde geöffnet. Legt Listeneinträge an.
    pub fn open(&mut self, path: &[String]) {
        match (self, path_key(path).as_str()) {
            (RecordBuilder::Border(border), "Gbv") => {
                border.vertices.push(BorderVertexRecord::default());
            }
            (RecordBuilder::Boundary(boundary), "Avx") => {
                boundary.vertices.push(VertexRecord::default());
            }
            (RecordBuilder::Boundary(boundary), "Circle") => {
                boundary.circle = Some(CircleRecord::default());
            }
            _ => {}
        }
    }

    /// Übernimmt ein `mid`-Attribut.
    pub fn set_mid(&mut self, path: &[String], mid: String) {
        match (self, path_key(path).as_str()) {
            (RecordBuilder::Border(border), "GbrUid") => border.uid = mid,
            (RecordBuilder::Boundary(boundary), "AbdUid/AseUid") => boundary.zone_uid = mid,
            (RecordBuilder::Boundary(boundary), "Avx/GbrUid") => {
                if let Some(avx) = boundary.vertices.last_mut() {
                    avx.border_uid = Some(mid);
                }
            }
            (RecordBuilder::Zone(zone), "AseUid") => zone.uid = mid,
            (RecordBuilder::Derivation(adg), "AdgUid/AseUid") => adg.zone_uid = mid,
            (RecordBuilder::Derivation(adg), "AseUidBase") => adg.base_uid = Some(mid),
            (RecordBuilder::Derivation(adg), "AseUidSameExtent") => {
                adg.same_extent_uid = Some(mid)
            }
            (RecordBuilder::Derivation(adg), "AseUidComponent") => adg.component_uids.push(mid),
            _ => {}
        }
    }

    /// Übernimmt den (getrimmten) Textinhalt eines Blatt-Elements.
    pub fn set_text(&mut self, path: &[String], text: String) {
        let key = path_key(path);
        match self {
            RecordBuilder::Border(border) => set_border_text(border, &key, text),
            RecordBuilder::Boundary(boundary) => set_boundary_text(boundary, &key, text),
            RecordBuilder::Zone(zone) => set_zone_text(zone, &key, text),
            RecordBuilder::Derivation(_) => {}
        }
    }

    /// Schließt den Record ab. Records ohne `mid` werden verworfen.
    pub fn finish_into(self, records: &mut CatalogRecords) {
        match self {
            RecordBuilder::Border(border) => {
                if border.uid.is_empty() {
                    log::warn!("Gbr ohne GbrUid@mid uebersprungen");
                } else {
                    records.borders.push(border);
                }
            }
            RecordBuilder::Boundary(boundary) => {
                if boundary.zone_uid.is_empty() {
                    log::warn!("Abd ohne AseUid@mid uebersprungen");
                } else {
                    records.boundaries.push(boundary);
                }
            }
            RecordBuilder::Zone(zone) => {
                if zone.uid.is_empty() {
                    log::warn!("Ase ohne AseUid@mid uebersprungen");
                } else {
                    records.zones.push(zone);
                }
            }
            RecordBuilder::Derivation(adg) => {
                if adg.zone_uid.is_empty() {
                    log::warn!("Adg ohne AseUid@mid uebersprungen");
                } else {
                    records.derivations.push(adg);
                }
            }
        }
    }
}

fn path_key(path: &[String]) -> String {
    path.join("/")
}

fn set_border_text(border: &mut BorderRecord, key: &str, text: String) {
    if key == "GbrUid/txtName" {
        border.name = text;
        return;
    }

    let Some(gbv) = border.vertices.last_mut() else {
        return;
    };
    match key {
        "Gbv/codeType" => gbv.code_type = Some(text),
        "Gbv/geoLat" => gbv.geo_lat = Some(text),
        "Gbv/geoLong" => gbv.geo_long = Some(text),
        _ => {}
    }
}

fn set_boundary_text(boundary: &mut BoundaryRecord, key: &str, text: String) {
    if let Some(field) = key.strip_prefix("Circle/") {
        let Some(circle) = boundary.circle.as_mut() else {
            return;
        };
        match field {
            "geoLatCen" => circle.geo_lat_cen = Some(text),
            "geoLongCen" => circle.geo_long_cen = Some(text),
            "valRadius" => circle.val_radius = Some(text),
            "uomRadius" => circle.uom_radius = Some(text),
            _ => {}
        }
        return;
    }

    let Some(field) = key.strip_prefix("Avx/") else {
        return;
    };
    let Some(avx) = boundary.vertices.last_mut() else {
        return;
    };
    match field {
        "codeType" => avx.code_type = Some(text),
        "geoLat" => avx.geo_lat = Some(text),
        "geoLong" => avx.geo_long = Some(text),
        "geoLatArc" => avx.geo_lat_arc = Some(text),
        "geoLongArc" => avx.geo_long_arc = Some(text),
        "valRadiusArc" => avx.val_radius_arc = Some(text),
        "uomRadiusArc" => avx.uom_radius_arc = Some(text),
        "GbrUid/txtName" => avx.border_name = Some(text),
        _ => {}
    }
}

fn set_zone_text(zone: &mut ZoneRecord, key: &str, text: String) {
    let field = match key {
        "AseUid/codeType" => &mut zone.code_type,
        "AseUid/codeId" => &mut zone.code_id,
        "txtName" => &mut zone.name,
        "codeClass" => &mut zone.code_class,
        "codeDistVerUpper" => &mut zone.code_dist_ver_upper,
        "valDistVerUpper" => &mut zone.val_dist_ver_upper,
        "uomDistVerUpper" => &mut zone.uom_dist_ver_upper,
        "codeDistVerLower" => &mut zone.code_dist_ver_lower,
        "valDistVerLower" => &mut zone.val_dist_ver_lower,
        "uomDistVerLower" => &mut zone.uom_dist_ver_lower,
        _ => return,
    };
    *field = Some(text);
}
