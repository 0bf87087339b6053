//! Rohe AIXM-Records, so wie sie der XML-Reader liefert.
//!
//! Alle Felder bleiben Strings; dekodiert wird erst bei der Übernahme in die
//! typisierten Strukturen (`Segment`, `BoundaryDefinition`, `Border`).

/// Ein Stützpunkt einer geografischen Grenze (`<Gbv>`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderVertexRecord {
    pub code_type: Option<String>,
    pub geo_lat: Option<String>,
    pub geo_long: Option<String>,
}

/// Eine geografische/politische Grenze (`<Gbr>`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderRecord {
    /// `GbrUid@mid`
    pub uid: String,
    /// `GbrUid/txtName`
    pub name: String,
    pub vertices: Vec<BorderVertexRecord>,
}

/// Ein Segment einer Luftraumgrenze (`<Avx>`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexRecord {
    pub code_type: Option<String>,
    pub geo_lat: Option<String>,
    pub geo_long: Option<String>,
    pub geo_lat_arc: Option<String>,
    pub geo_long_arc: Option<String>,
    pub val_radius_arc: Option<String>,
    pub uom_radius_arc: Option<String>,
    /// `GbrUid@mid` bei FNT-Segmenten
    pub border_uid: Option<String>,
    /// `GbrUid/txtName` bei FNT-Segmenten
    pub border_name: Option<String>,
}

/// Kreisförmige Luftraumgrenze (`<Circle>`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleRecord {
    pub geo_lat_cen: Option<String>,
    pub geo_long_cen: Option<String>,
    pub val_radius: Option<String>,
    pub uom_radius: Option<String>,
}

/// Grenzdefinition eines Luftraums (`<Abd>`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryRecord {
    /// `AbdUid/AseUid@mid`
    pub zone_uid: String,
    pub circle: Option<CircleRecord>,
    pub vertices: Vec<VertexRecord>,
}

/// Luftraum-Stammdaten (`<Ase>`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneRecord {
    pub uid: String,
    pub code_type: Option<String>,
    pub code_id: Option<String>,
    pub name: Option<String>,
    pub code_class: Option<String>,
    pub code_dist_ver_upper: Option<String>,
    pub val_dist_ver_upper: Option<String>,
    pub uom_dist_ver_upper: Option<String>,
    pub code_dist_ver_lower: Option<String>,
    pub val_dist_ver_lower: Option<String>,
    pub uom_dist_ver_lower: Option<String>,
}

/// Abgeleitete Geometrie (`<Adg>`): Basis-Zone bzw. Komponenten einer Gruppe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivationRecord {
    /// `AdgUid/AseUid@mid`
    pub zone_uid: String,
    pub base_uid: Option<String>,
    pub same_extent_uid: Option<String>,
    pub component_uids: Vec<String>,
}
