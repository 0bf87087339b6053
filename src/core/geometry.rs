//! Ergebnis-Geometrien der Grenz-Assemblierung.

use std::rc::Rc;

use geo::Coord;

/// Fertig assemblierte, unveränderliche Geometrie einer Luftraumgrenze.
#[derive(Debug, Clone, PartialEq)]
pub enum AssembledGeometry {
    Point(Coord<f64>),
    /// Genau zwei Punkte
    LineString(Vec<Coord<f64>>),
    /// Geschlossener Ring (mind. 3 Punkte, erster == letzter)
    Polygon(Vec<Coord<f64>>),
}

/// Geteilte Referenz auf eine Geometrie. Zonen mit gemeinsamer Grenze halten
/// dieselbe Instanz.
pub type SharedGeometry = Rc<AssembledGeometry>;

impl AssembledGeometry {
    /// Baut die Geometrie aus der akkumulierten Punktliste.
    ///
    /// Leere Listen ergeben `None`. Ab drei Punkten wird der Ring geschlossen.
    pub fn from_points(mut points: Vec<Coord<f64>>) -> Option<Self> {
        match points.len() {
            0 => None,
            1 => Some(AssembledGeometry::Point(points[0])),
            2 => Some(AssembledGeometry::LineString(points)),
            _ => {
                let first = points[0];
                if points.last() != Some(&first) {
                    points.push(first);
                }
                Some(AssembledGeometry::Polygon(points))
            }
        }
    }

    /// GeoJSON-Typname.
    pub fn kind(&self) -> &'static str {
        match self {
            AssembledGeometry::Point(_) => "Point",
            AssembledGeometry::LineString(_) => "LineString",
            AssembledGeometry::Polygon(_) => "Polygon",
        }
    }

    /// Alle Stützpunkte in Reihenfolge (beim Polygon inkl. Schlusspunkt).
    pub fn points(&self) -> &[Coord<f64>] {
        match self {
            AssembledGeometry::Point(p) => std::slice::from_ref(p),
            AssembledGeometry::LineString(points) | AssembledGeometry::Polygon(points) => points,
        }
    }
}
