//! Luftraum-Metadaten (Zone) und Formatierung der Vertikalgrenzen.

use serde::Serialize;

use super::records::ZoneRecord;

/// Metadaten eines Luftraums aus dem Katalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneMeta {
    /// `AseUid@mid`
    pub uid: String,
    /// AIXM-Typ (`CTR`, `TMA`, `R`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_class: Option<String>,
    /// Obergrenze im OpenAir-Format (`FL115`, `3500 FT AMSL`, ...)
    pub upper: String,
    /// Untergrenze im OpenAir-Format
    pub lower: String,
    /// Regroupement: wird nie eigenständig assembliert
    pub is_grouping_zone: bool,
    /// Zone, von der die Grenze geerbt wird
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_zone_id: Option<String>,
}

impl ZoneMeta {
    /// Minimal-Zone (v.a. für Tests und abgeleitete Einträge).
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            code_type: None,
            code_id: None,
            name: name.into(),
            code_class: None,
            upper: "UNL".to_string(),
            lower: "SFC".to_string(),
            is_grouping_zone: false,
            base_zone_id: None,
        }
    }

    /// Übernimmt einen `<Ase>`-Record.
    pub fn from_record(record: &ZoneRecord) -> Self {
        let name = record
            .name
            .clone()
            .or_else(|| record.code_id.clone())
            .unwrap_or_else(|| record.uid.clone());

        Self {
            uid: record.uid.clone(),
            code_type: record.code_type.clone(),
            code_id: record.code_id.clone(),
            name,
            code_class: record.code_class.clone(),
            upper: format_vertical_limit(
                record.code_dist_ver_upper.as_deref(),
                record.val_dist_ver_upper.as_deref(),
                record.uom_dist_ver_upper.as_deref(),
                "UNL",
            ),
            lower: format_vertical_limit(
                record.code_dist_ver_lower.as_deref(),
                record.val_dist_ver_lower.as_deref(),
                record.uom_dist_ver_lower.as_deref(),
                "SFC",
            ),
            is_grouping_zone: false,
            base_zone_id: None,
        }
    }

    /// OpenAir-Klasse (`AC`): Luftraumklasse, sonst aus dem AIXM-Typ abgeleitet.
    pub fn openair_class(&self) -> String {
        if let Some(class) = self.code_class.as_deref() {
            if matches!(class, "A" | "B" | "C" | "D" | "E" | "F" | "G") {
                return class.to_string();
            }
        }

        match self.code_type.as_deref() {
            Some("R" | "R-AMC" | "RAS") => "R".to_string(),
            Some("P") => "P".to_string(),
            Some("D" | "D-AMC" | "D-OTHER") => "Q".to_string(),
            Some("CTR") => "CTR".to_string(),
            Some("TMZ") => "TMZ".to_string(),
            Some("RMZ") => "RMZ".to_string(),
            Some("W") => "W".to_string(),
            Some(other) => other.to_string(),
            None => "G".to_string(),
        }
    }
}

/// Formatiert eine AIXM-Vertikalgrenze (`codeDistVer*`, `valDistVer*`, `uomDistVer*`).
pub fn format_vertical_limit(
    code: Option<&str>,
    value: Option<&str>,
    unit: Option<&str>,
    fallback: &str,
) -> String {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return fallback.to_string();
    };

    if value.eq_ignore_ascii_case("UNL") {
        return "UNL".to_string();
    }

    let unit = unit.map(str::trim).unwrap_or("FT");
    if unit == "FL" || code == Some("STD") {
        return format!("FL{value}");
    }

    let numeric_zero = value.parse::<f64>().map(|v| v == 0.0).unwrap_or(false);
    match code {
        Some("HEI") if numeric_zero => "SFC".to_string(),
        Some("HEI") => format!("{value} {unit} AGL"),
        Some("ALT") if numeric_zero => "SFC".to_string(),
        _ => format!("{value} {unit} AMSL"),
    }
}
