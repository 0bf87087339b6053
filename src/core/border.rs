//! Registrierte Referenzkurve (politische/geografische Grenze).

use geo::{Coord, LineString};

/// Unveränderliche Grenzkurve, adressiert über ihre `GbrUid`.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    /// `GbrUid@mid`
    pub id: String,
    /// Anzeigename (`txtName`)
    pub name: String,
    curve: LineString<f64>,
}

impl Border {
    /// Erstellt eine neue Grenze aus geordneten (Länge, Breite)-Stützpunkten.
    pub fn new(id: String, name: String, vertices: Vec<Coord<f64>>) -> Self {
        Self {
            id,
            name,
            curve: LineString::new(vertices),
        }
    }

    /// Die Kurve der Grenze.
    pub fn curve(&self) -> &LineString<f64> {
        &self.curve
    }

    /// Anzahl Stützpunkte
    pub fn vertex_count(&self) -> usize {
        self.curve.0.len()
    }
}
