//! Core-Domänentypen: Koordinaten, Segmente, Grenzen, Zonen, Katalog.

pub mod border;
pub mod boundary;
pub mod catalog;
pub mod coordinate;
pub mod fault;
pub mod geometry;
pub mod records;
pub mod segment;
pub mod zone;

pub use border::Border;
pub use boundary::{BoundaryDefinition, Circle};
pub use catalog::AixmCatalog;
pub use coordinate::{decode_position, format_openair_position, Axis};
pub use fault::StructuralFault;
pub use geometry::{AssembledGeometry, SharedGeometry};
pub use records::{
    BorderRecord, BorderVertexRecord, BoundaryRecord, CircleRecord, DerivationRecord,
    VertexRecord, ZoneRecord,
};
pub use segment::{Radius, RadiusUnit, Segment, SegmentCode, NAUTICAL_MILE_M};
pub use zone::ZoneMeta;
