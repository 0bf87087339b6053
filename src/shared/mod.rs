//! Layer-neutrale Bausteine: Optionen und reine Geometrie-Funktionen.

pub mod arc_geometry;
pub mod linear_ref;
pub mod options;

pub use arc_geometry::{ArcTessellator, GreatCircleTessellator};
pub use linear_ref::{extract_subcurve, project_normalized};
pub use options::ConverterOptions;
