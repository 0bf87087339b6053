//! Dekodierung und Formatierung von AIXM-Koordinaten.
//!
//! AIXM 4.5 schreibt Breiten als `DDMMSS.ssN`, `DDMM.mmN` oder `DD.ddddN`
//! (Längen mit drei Grad-Stellen und `E`/`W`). Zusätzlich wird eine einfache
//! vorzeichenbehaftete Dezimalzahl akzeptiert.

use std::sync::OnceLock;

use geo::Coord;
use regex::Regex;

use super::StructuralFault;

/// Achse einer Koordinatenkomponente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Geografische Breite (2 Grad-Stellen, N/S)
    Latitude,
    /// Geografische Länge (3 Grad-Stellen, E/W)
    Longitude,
}

impl Axis {
    fn degree_digits(self) -> usize {
        match self {
            Axis::Latitude => 2,
            Axis::Longitude => 3,
        }
    }

    fn limit(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    fn hemispheres(self) -> (char, char) {
        match self {
            Axis::Latitude => ('N', 'S'),
            Axis::Longitude => ('E', 'W'),
        }
    }
}

fn aixm_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<int>[0-9]+)(?:\.(?P<frac>[0-9]+))?(?P<hem>[NSEW])$")
            .expect("statisches Regex-Muster ist gueltig")
    })
}

/// Dekodiert eine einzelne AIXM-Koordinatenkomponente in Dezimalgrad.
pub fn decode_component(raw: &str, axis: Axis) -> Result<f64, StructuralFault> {
    let text = raw.trim();
    let invalid = || StructuralFault::InvalidCoordinate {
        value: text.to_string(),
    };

    let Some(caps) = aixm_pattern().captures(text) else {
        // Fallback: Dezimalgrad ohne Hemisphäre
        let value: f64 = text.parse().map_err(|_| invalid())?;
        if !value.is_finite() || value.abs() > axis.limit() {
            return Err(invalid());
        }
        return Ok(value);
    };

    let int = &caps["int"];
    let frac = caps.name("frac").map(|m| m.as_str());
    let hem = caps["hem"].chars().next().ok_or_else(invalid)?;

    let (positive, negative) = axis.hemispheres();
    let sign = if hem == positive {
        1.0
    } else if hem == negative {
        -1.0
    } else {
        return Err(invalid());
    };

    let dd = axis.degree_digits();
    let with_frac = |digits: &str| -> Result<f64, StructuralFault> {
        let joined = match frac {
            Some(f) => format!("{digits}.{f}"),
            None => digits.to_string(),
        };
        joined.parse::<f64>().map_err(|_| invalid())
    };

    let value = match int.len() {
        n if n == dd => with_frac(int)?,
        n if n == dd + 2 => {
            let degrees: f64 = int[..dd].parse().map_err(|_| invalid())?;
            let minutes = with_frac(&int[dd..])?;
            if minutes >= 60.0 {
                return Err(invalid());
            }
            degrees + minutes / 60.0
        }
        n if n == dd + 4 => {
            let degrees: f64 = int[..dd].parse().map_err(|_| invalid())?;
            let minutes: f64 = int[dd..dd + 2].parse().map_err(|_| invalid())?;
            let seconds = with_frac(&int[dd + 2..])?;
            if minutes >= 60.0 || seconds >= 60.0 {
                return Err(invalid());
            }
            degrees + minutes / 60.0 + seconds / 3600.0
        }
        _ => return Err(invalid()),
    };

    if value > axis.limit() {
        return Err(invalid());
    }

    Ok(sign * value)
}

/// Dekodiert ein Breite/Länge-Paar zu einer Koordinate (`x` = Länge, `y` = Breite).
pub fn decode_position(lat: &str, long: &str) -> Result<Coord<f64>, StructuralFault> {
    let y = decode_component(lat, Axis::Latitude)?;
    let x = decode_component(long, Axis::Longitude)?;
    Ok(Coord { x, y })
}

/// Formatiert eine Komponente als `DD:MM:SS H` (Sekunden gerundet, mit Übertrag).
pub fn format_dms(value: f64, axis: Axis) -> String {
    let (positive, negative) = axis.hemispheres();
    let hem = if value < 0.0 { negative } else { positive };

    let total_seconds = (value.abs() * 3600.0).round() as u64;
    let degrees = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    match axis {
        Axis::Latitude => format!("{degrees:02}:{minutes:02}:{seconds:02} {hem}"),
        Axis::Longitude => format!("{degrees:03}:{minutes:02}:{seconds:02} {hem}"),
    }
}

/// Formatiert eine Position im OpenAir-Stil: `48:45:30 N 002:10:00 E`.
pub fn format_openair_position(coord: Coord<f64>) -> String {
    format!(
        "{} {}",
        format_dms(coord.y, Axis::Latitude),
        format_dms(coord.x, Axis::Longitude)
    )
}
