//! aixm2openair Library.
//! Konvertierung von AIXM-Luftraumgrenzen als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod export;
pub mod shared;
pub mod xml;

pub use app::{ConversionOutput, Converter, Diagnostics, FeatureCollector, RunSummary};
pub use core::{AixmCatalog, AssembledGeometry, BoundaryDefinition, Segment, ZoneMeta};
pub use export::write_outputs;
pub use shared::ConverterOptions;
pub use xml::{load_aixm_file, parse_aixm_document};
