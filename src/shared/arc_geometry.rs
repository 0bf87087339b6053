//! Tessellierung von Kreisen und Kreisbögen auf der Kugel.
//!
//! Reine Geometrie-Funktionen ohne Abhängigkeit zum Assembler. Der Assembler
//! spricht nur das `ArcTessellator`-Trait an, damit Tests die übergebenen
//! Parameter beobachten können.

use geo::{Bearing, Coord, Destination, Distance, Haversine, Point};

/// Erzeugt Punktfolgen für Kreise und Bögen.
pub trait ArcTessellator {
    /// Geschlossener Ring um `center` (erster == letzter Punkt).
    fn circle(&self, center: Coord<f64>, radius_m: f64) -> Vec<Coord<f64>>;

    /// Bogen von `start` nach `stop` um `center`.
    ///
    /// `clockwise` bezieht sich auf die Kompassrichtung (steigende Peilung).
    fn arc(
        &self,
        center: Coord<f64>,
        start: Coord<f64>,
        stop: Coord<f64>,
        radius_m: f64,
        clockwise: bool,
    ) -> Vec<Coord<f64>>;
}

/// Großkreis-Tessellierung mit fester Winkelschrittweite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreatCircleTessellator {
    /// Winkelschritt zwischen zwei Bogenpunkten in Grad
    pub step_degrees: f64,
}

impl Default for GreatCircleTessellator {
    fn default() -> Self {
        Self { step_degrees: 5.0 }
    }
}

impl GreatCircleTessellator {
    pub fn new(step_degrees: f64) -> Self {
        let step_degrees = if step_degrees.is_finite() && step_degrees > 0.0 {
            step_degrees.min(90.0)
        } else {
            log::warn!(
                "Ungueltige Bogen-Schrittweite {}, verwende 5 Grad",
                step_degrees
            );
            5.0
        };
        Self { step_degrees }
    }
}

impl ArcTessellator for GreatCircleTessellator {
    fn circle(&self, center: Coord<f64>, radius_m: f64) -> Vec<Coord<f64>> {
        let steps = step_count(360.0, self.step_degrees).max(3);
        let mut ring: Vec<Coord<f64>> = (0..steps)
            .map(|i| destination(center, 360.0 * i as f64 / steps as f64, radius_m))
            .collect();
        ring.push(ring[0]);
        ring
    }

    fn arc(
        &self,
        center: Coord<f64>,
        start: Coord<f64>,
        stop: Coord<f64>,
        radius_m: f64,
        clockwise: bool,
    ) -> Vec<Coord<f64>> {
        // Radius 0: aus dem Abstand Zentrum → Start ableiten
        let radius_m = if radius_m > 0.0 {
            radius_m
        } else {
            haversine_distance(center, start)
        };

        let from = bearing(center, start);
        let to = bearing(center, stop);

        let mut sweep = if clockwise {
            (to - from).rem_euclid(360.0)
        } else {
            -(from - to).rem_euclid(360.0)
        };
        if sweep.abs() < 1e-9 {
            // Start == Stop: Vollkreis
            sweep = if clockwise { 360.0 } else { -360.0 };
        }

        let steps = step_count(sweep.abs(), self.step_degrees).max(1);
        let mut points = Vec::with_capacity(steps + 1);
        points.push(start);
        for i in 1..steps {
            let angle = from + sweep * i as f64 / steps as f64;
            points.push(destination(center, angle, radius_m));
        }
        points.push(stop);
        points
    }
}

/// Anzahl Schritte für einen Winkel; Rundungsrauschen der Peilung zählt nicht
/// als zusätzlicher Schritt.
fn step_count(angle: f64, step: f64) -> usize {
    (angle / step - 1e-6).ceil().max(0.0) as usize
}

/// Anfangspeilung von `origin` nach `target` in Grad [0, 360).
pub fn bearing(origin: Coord<f64>, target: Coord<f64>) -> f64 {
    Haversine::bearing(Point::from(origin), Point::from(target)).rem_euclid(360.0)
}

/// Zielpunkt nach `distance_m` Metern in Richtung `bearing_deg`.
pub fn destination(origin: Coord<f64>, bearing_deg: f64, distance_m: f64) -> Coord<f64> {
    let target = Haversine::destination(Point::from(origin), bearing_deg, distance_m);
    Coord {
        x: (target.x() + 540.0).rem_euclid(360.0) - 180.0,
        y: target.y(),
    }
}

/// Großkreis-Distanz in Metern (mittlerer Erdradius).
pub fn haversine_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    Haversine::distance(Point::from(a), Point::from(b))
}
