//! Strukturelle Eingabefehler, für die kein sinnvolles Ersatzverhalten existiert.

use thiserror::Error;

/// Fataler Fehler in einem Eingabe-Record. Bricht den Lauf ab.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StructuralFault {
    /// Pflichtfeld fehlt im Record
    #[error("Pflichtfeld <{field}> fehlt in {record}")]
    MissingField {
        record: String,
        field: &'static str,
    },
    /// Koordinate konnte nicht dekodiert werden
    #[error("ungueltige Koordinate '{value}'")]
    InvalidCoordinate { value: String },
    /// Zahlenwert konnte nicht gelesen werden
    #[error("ungueltiger Zahlenwert '{value}' in <{field}>")]
    InvalidNumber { field: &'static str, value: String },
}

/// Liefert den Feldinhalt oder einen `MissingField`-Fehler.
pub(crate) fn require<'a>(
    value: &'a Option<String>,
    record: &str,
    field: &'static str,
) -> Result<&'a str, StructuralFault> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| StructuralFault::MissingField {
            record: record.to_string(),
            field,
        })
}
