//! Nicht-fatale Konvertierungsprobleme: werden geloggt, gezählt, übersprungen.

use thiserror::Error;

/// Ein lokal behandeltes Problem während der Konvertierung.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionIssue {
    /// Zone ohne Grenzdefinition und ohne Basis-Zone
    #[error("Missing Airspaces Borders AseUid={zone}")]
    MissingBoundary { zone: String },
    /// Basis-Zone existiert, hat aber selbst keine Grenzdefinition
    #[error("Missing Airspaces Borders AseUid={zone} AseUidBase={base}")]
    MissingBaseBoundary { zone: String, base: String },
    /// FNT-Segment verweist auf eine nicht registrierte Grenze
    #[error("Missing geoBorder GbrUid='{border}' Name={name} (Zone {zone})")]
    MissingBorder {
        zone: String,
        border: String,
        name: String,
    },
    /// Unerwarteter `codeType` an einem Stützpunkt
    #[error("codeType '{code}' nicht erkannt in {context}")]
    UnrecognizedSegmentCode { context: String, code: String },
    /// Assemblierung ergab keinen einzigen Punkt
    #[error("Geometrie leer fuer AseUid={zone}")]
    EmptyGeometry { zone: String },
}

impl ConversionIssue {
    fn category(&self) -> IssueCategory {
        match self {
            ConversionIssue::MissingBoundary { .. }
            | ConversionIssue::MissingBaseBoundary { .. }
            | ConversionIssue::MissingBorder { .. } => IssueCategory::MissingData,
            ConversionIssue::UnrecognizedSegmentCode { .. } => IssueCategory::UnrecognizedCode,
            ConversionIssue::EmptyGeometry { .. } => IssueCategory::EmptyGeometry,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IssueCategory {
    MissingData,
    UnrecognizedCode,
    EmptyGeometry,
}

/// Sammelt alle Probleme eines Laufs und loggt sie beim Melden.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    issues: Vec<ConversionIssue>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Meldet ein Problem: loggt es (leere Geometrie als Fehler) und merkt es vor.
    pub fn report(&mut self, issue: ConversionIssue) {
        match issue.category() {
            IssueCategory::EmptyGeometry => log::error!("{}", issue),
            _ => log::warn!("{}", issue),
        }
        self.issues.push(issue);
    }

    /// Alle gemeldeten Probleme in Meldereihenfolge.
    pub fn issues(&self) -> &[ConversionIssue] {
        &self.issues
    }

    pub fn missing_data_count(&self) -> usize {
        self.count(IssueCategory::MissingData)
    }

    pub fn unrecognized_code_count(&self) -> usize {
        self.count(IssueCategory::UnrecognizedCode)
    }

    pub fn empty_geometry_count(&self) -> usize {
        self.count(IssueCategory::EmptyGeometry)
    }

    /// Gesamtzahl aller Warnungen und Fehler.
    pub fn total(&self) -> usize {
        self.issues.len()
    }

    fn count(&self, category: IssueCategory) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.category() == category)
            .count()
    }
}
