//! Application-Layer: Grenz-Registry, Auflösung, Assemblierung und Lauf-Steuerung.

pub mod assembler;
pub mod border_registry;
pub mod converter;
pub mod diagnostics;
pub mod features;
pub mod resolver;

pub use assembler::{Assembly, GeometryAssembler};
pub use border_registry::{BorderIndex, BorderRegistry};
pub use converter::{ConversionOutput, Converter, RunSummary};
pub use diagnostics::{ConversionIssue, Diagnostics};
pub use features::{Feature, FeatureCollector, FeatureProperties, MapMarker};
pub use resolver::{BoundaryResolver, DefinitionSource, Resolution, ResolveContext};
