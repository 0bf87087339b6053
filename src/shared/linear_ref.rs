//! Lineare Referenzierung auf Grenzkurven.
//!
//! Positionen entlang einer Kurve werden als normierter Wert in [0, 1]
//! ausgedrückt (planare Länge in Grad, wie `geo` sie misst).

use geo::{Coord, LineInterpolatePoint, LineLocatePoint, LineString, Point};

/// Projiziert einen Punkt auf die Kurve und liefert seine normierte Position.
pub fn project_normalized(curve: &LineString<f64>, point: Coord<f64>) -> f64 {
    curve
        .line_locate_point(&Point::from(point))
        .unwrap_or(0.0)
        .clamp(0.0, 1.0)
}

/// Schneidet das Kurvenstück zwischen zwei normierten Positionen heraus.
///
/// Ist `from > to`, läuft das Ergebnis rückwärts entlang der Kurve. Bei
/// `from == to` besteht es aus genau einem Punkt.
pub fn extract_subcurve(curve: &LineString<f64>, from: f64, to: f64) -> Vec<Coord<f64>> {
    let coords = &curve.0;
    let Some(&first) = coords.first() else {
        return Vec::new();
    };

    let reversed = from > to;
    let (lo, hi) = if reversed { (to, from) } else { (from, to) };
    let lo = lo.clamp(0.0, 1.0);
    let hi = hi.clamp(0.0, 1.0);

    let total = polyline_length(coords);
    if total <= 0.0 {
        return vec![first];
    }

    let interpolate = |fraction: f64| {
        curve
            .line_interpolate_point(fraction)
            .map(|p| p.0)
            .unwrap_or(first)
    };

    let start = interpolate(lo);
    if lo == hi {
        return vec![start];
    }

    let mut result = vec![start];
    let mut travelled = 0.0;
    for pair in coords.windows(2) {
        travelled += distance(pair[0], pair[1]);
        let fraction = travelled / total;
        if fraction >= hi {
            break;
        }
        if fraction > lo {
            result.push(pair[1]);
        }
    }
    result.push(interpolate(hi));

    if reversed {
        result.reverse();
    }
    result
}

/// Planare Länge einer Polyline.
pub fn polyline_length(points: &[Coord<f64>]) -> f64 {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}

fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}
