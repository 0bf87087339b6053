//! Typisierte Grenzdefinition eines Luftraums: Kreis oder Segmentliste.

use geo::Coord;

use super::coordinate::decode_position;
use super::fault::require;
use super::records::BoundaryRecord;
use super::segment::{Radius, Segment};
use super::StructuralFault;

/// Kreisförmige Grenze.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Coord<f64>,
    pub radius: Radius,
}

/// Grenzdefinition eines Luftraums.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryDefinition {
    Circle(Circle),
    Segments(Vec<Segment>),
}

impl BoundaryDefinition {
    /// Übernimmt einen `<Abd>`-Record. Fehlende Pflichtfelder sind fatal.
    pub fn from_record(record: &BoundaryRecord) -> Result<Self, StructuralFault> {
        if let Some(circle) = &record.circle {
            let context = format!("Circle von {}", record.zone_uid);
            let center = decode_position(
                require(&circle.geo_lat_cen, &context, "geoLatCen")?,
                require(&circle.geo_long_cen, &context, "geoLongCen")?,
            )?;
            let radius = Radius::from_fields(
                &circle.val_radius,
                &circle.uom_radius,
                &context,
                "valRadius",
                "uomRadius",
            )?;
            return Ok(BoundaryDefinition::Circle(Circle { center, radius }));
        }

        let segments = record
            .vertices
            .iter()
            .map(|avx| Segment::from_record(avx, &record.zone_uid))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BoundaryDefinition::Segments(segments))
    }
}
