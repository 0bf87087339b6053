//! Typisierte Segmente einer Luftraumgrenze.
//!
//! Der AIXM-`codeType` wird genau einmal bei der Übernahme aufgelöst; der
//! Assembler arbeitet nur noch mit der geschlossenen `Segment`-Variante.

use geo::Coord;

use super::coordinate::decode_position;
use super::fault::require;
use super::records::VertexRecord;
use super::StructuralFault;

/// Meter pro Seemeile.
pub const NAUTICAL_MILE_M: f64 = 1852.0;

/// Einheit eines Radius (`uomRadius` / `uomRadiusArc`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadiusUnit {
    NauticalMiles,
    Kilometers,
    /// Jede andere Einheit: Wert wird unverändert übernommen
    Unconverted(String),
}

impl RadiusUnit {
    pub fn parse(code: &str) -> Self {
        match code.trim() {
            "NM" => RadiusUnit::NauticalMiles,
            "KM" => RadiusUnit::Kilometers,
            other => RadiusUnit::Unconverted(other.to_string()),
        }
    }
}

/// Radius mit Einheit, wie er im Record steht.
#[derive(Debug, Clone, PartialEq)]
pub struct Radius {
    pub value: f64,
    pub unit: RadiusUnit,
}

impl Radius {
    /// Liest Wert und Einheit aus den Record-Feldern.
    pub fn from_fields(
        value: &Option<String>,
        unit: &Option<String>,
        record: &str,
        value_field: &'static str,
        unit_field: &'static str,
    ) -> Result<Self, StructuralFault> {
        let raw = require(value, record, value_field)?;
        let value = raw
            .parse::<f64>()
            .map_err(|_| StructuralFault::InvalidNumber {
                field: value_field,
                value: raw.to_string(),
            })?;
        let unit = RadiusUnit::parse(require(unit, record, unit_field)?);
        Ok(Self { value, unit })
    }

    /// Radius in Metern. Unbekannte Einheiten (auch `M`) bleiben unkonvertiert.
    pub fn to_meters(&self) -> f64 {
        match self.unit {
            RadiusUnit::NauticalMiles => self.value * NAUTICAL_MILE_M,
            RadiusUnit::Kilometers => self.value * 1000.0,
            RadiusUnit::Unconverted(_) => self.value,
        }
    }
}

/// AIXM-Segmenttyp (`Avx/codeType`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentCode {
    /// `GRC` — Großkreis
    GreatCircle,
    /// `RHL` — Loxodrome
    RhumbLine,
    /// `CWA` — Bogen im Uhrzeigersinn
    ClockwiseArc,
    /// `CCA` — Bogen gegen den Uhrzeigersinn
    CounterClockwiseArc,
    /// `FNT` — Folge einer registrierten Grenze
    BorderFollow,
    /// `END` — Grenz-Endpunkt (nur in `Gbv`)
    End,
    Unknown(String),
}

impl SegmentCode {
    pub fn parse(code: &str) -> Self {
        match code.trim() {
            "GRC" => SegmentCode::GreatCircle,
            "RHL" => SegmentCode::RhumbLine,
            "CWA" => SegmentCode::ClockwiseArc,
            "CCA" => SegmentCode::CounterClockwiseArc,
            "FNT" => SegmentCode::BorderFollow,
            "END" => SegmentCode::End,
            other => SegmentCode::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SegmentCode::GreatCircle => "GRC",
            SegmentCode::RhumbLine => "RHL",
            SegmentCode::ClockwiseArc => "CWA",
            SegmentCode::CounterClockwiseArc => "CCA",
            SegmentCode::BorderFollow => "FNT",
            SegmentCode::End => "END",
            SegmentCode::Unknown(code) => code,
        }
    }
}

/// Ein Segment der Grenze, bereits mit dekodierten Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Stützpunkt, erreicht über Großkreis oder Loxodrome
    EdgeVertex { vertex: Coord<f64>, code: SegmentCode },
    /// Bogen vom eigenen Stützpunkt zum nächsten Stützpunkt
    Arc {
        start: Coord<f64>,
        center: Coord<f64>,
        radius: Radius,
        clockwise: bool,
    },
    /// Teilstück einer registrierten Grenze bis zum nächsten Stützpunkt
    BorderFollow {
        border_id: String,
        border_name: Option<String>,
        start: Coord<f64>,
    },
    /// Unbekannter Typ, wird als einfacher Stützpunkt behandelt
    Other { vertex: Coord<f64>, code: String },
}

impl Segment {
    /// Übernimmt einen `<Avx>`-Record.
    pub fn from_record(record: &VertexRecord, zone_uid: &str) -> Result<Self, StructuralFault> {
        let context = format!("Avx von {zone_uid}");
        let code = SegmentCode::parse(require(&record.code_type, &context, "codeType")?);
        let vertex = decode_position(
            require(&record.geo_lat, &context, "geoLat")?,
            require(&record.geo_long, &context, "geoLong")?,
        )?;

        let segment = match code {
            SegmentCode::GreatCircle | SegmentCode::RhumbLine => {
                Segment::EdgeVertex { vertex, code }
            }
            SegmentCode::ClockwiseArc | SegmentCode::CounterClockwiseArc => {
                let center = decode_position(
                    require(&record.geo_lat_arc, &context, "geoLatArc")?,
                    require(&record.geo_long_arc, &context, "geoLongArc")?,
                )?;
                let radius = Radius::from_fields(
                    &record.val_radius_arc,
                    &record.uom_radius_arc,
                    &context,
                    "valRadiusArc",
                    "uomRadiusArc",
                )?;
                Segment::Arc {
                    start: vertex,
                    center,
                    radius,
                    clockwise: code == SegmentCode::ClockwiseArc,
                }
            }
            SegmentCode::BorderFollow => Segment::BorderFollow {
                border_id: require(&record.border_uid, &context, "GbrUid")?.to_string(),
                border_name: record.border_name.clone(),
                start: vertex,
            },
            other => Segment::Other {
                vertex,
                code: other.as_str().to_string(),
            },
        };

        Ok(segment)
    }

    /// Der eigene Stützpunkt des Segments (Startpunkt bei Bogen/Grenzfolge).
    pub fn vertex(&self) -> Coord<f64> {
        match self {
            Segment::EdgeVertex { vertex, .. } | Segment::Other { vertex, .. } => *vertex,
            Segment::Arc { start, .. } | Segment::BorderFollow { start, .. } => *start,
        }
    }
}
