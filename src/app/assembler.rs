//! Geometrie-Assembler: setzt eine Grenzdefinition zu einer Geometrie zusammen.
//!
//! Segment-Dispatch über die geschlossene `Segment`-Variante. Geometrische
//! Berechnungen (Bögen, lineare Referenzierung) werden delegiert.

use geo::Coord;

use crate::core::{AssembledGeometry, BoundaryDefinition, Circle, Segment, ZoneMeta};
use crate::shared::{extract_subcurve, project_normalized, ArcTessellator};

use super::border_registry::BorderIndex;
use super::diagnostics::{ConversionIssue, Diagnostics};
use super::features::MapMarker;

/// Ergebnis einer Assemblierung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assembly {
    /// `None` bei leerer Punktliste
    pub geometry: Option<AssembledGeometry>,
    /// Hilfspunkte (nur im Marker-Modus)
    pub markers: Vec<MapMarker>,
}

/// Setzt Grenzdefinitionen gegen einen gebauten Grenz-Index zusammen.
pub struct GeometryAssembler<'a> {
    borders: &'a BorderIndex,
    tessellator: &'a dyn ArcTessellator,
    make_markers: bool,
}

impl<'a> GeometryAssembler<'a> {
    pub fn new(
        borders: &'a BorderIndex,
        tessellator: &'a dyn ArcTessellator,
        make_markers: bool,
    ) -> Self {
        Self {
            borders,
            tessellator,
            make_markers,
        }
    }

    /// Assembliert die Grenze einer Zone.
    pub fn assemble(
        &self,
        zone: &ZoneMeta,
        definition: &BoundaryDefinition,
        diagnostics: &mut Diagnostics,
    ) -> Assembly {
        let mut markers = Vec::new();

        let geometry = match definition {
            BoundaryDefinition::Circle(circle) => {
                Some(self.assemble_circle(zone, circle, &mut markers))
            }
            BoundaryDefinition::Segments(segments) => {
                let points = self.collect_segment_points(zone, segments, &mut markers, diagnostics);
                let geometry = AssembledGeometry::from_points(points);
                if geometry.is_none() {
                    diagnostics.report(ConversionIssue::EmptyGeometry {
                        zone: zone.uid.clone(),
                    });
                }
                geometry
            }
        };

        Assembly { geometry, markers }
    }

    fn assemble_circle(
        &self,
        zone: &ZoneMeta,
        circle: &Circle,
        markers: &mut Vec<MapMarker>,
    ) -> AssembledGeometry {
        if self.make_markers {
            markers.push(MapMarker::new(
                format!("Circle Center of {}", zone.name),
                circle.center,
            ));
        }

        let mut ring = self
            .tessellator
            .circle(circle.center, circle.radius.to_meters());
        if let Some(&first) = ring.first() {
            if ring.last() != Some(&first) {
                ring.push(first);
            }
        }
        AssembledGeometry::Polygon(ring)
    }

    fn collect_segment_points(
        &self,
        zone: &ZoneMeta,
        segments: &[Segment],
        markers: &mut Vec<MapMarker>,
        diagnostics: &mut Diagnostics,
    ) -> Vec<Coord<f64>> {
        let mut g: Vec<Coord<f64>> = Vec::new();

        for (index, segment) in segments.iter().enumerate() {
            // Zielpunkt: nächster Stützpunkt, beim letzten Segment der Ringanfang
            let stop = || match segments.get(index + 1) {
                Some(next) => next.vertex(),
                None => g.first().copied().unwrap_or_else(|| segment.vertex()),
            };

            match segment {
                Segment::EdgeVertex { vertex, code } => {
                    if self.make_markers {
                        markers.push(MapMarker::new(
                            format!(
                                "Point {} of {}; type={}",
                                index,
                                zone.name,
                                code.as_str()
                            ),
                            *vertex,
                        ));
                    }
                    g.push(*vertex);
                }
                Segment::Arc {
                    start,
                    center,
                    radius,
                    clockwise,
                } => {
                    let stop = stop();
                    if self.make_markers {
                        markers.push(MapMarker::new(
                            format!("Arc Start {} of {}", index, zone.name),
                            *start,
                        ));
                        markers.push(MapMarker::new(
                            format!("Arc Center {} of {}", index, zone.name),
                            *center,
                        ));
                        markers.push(MapMarker::new(
                            format!("Arc Stop {} of {}", index, zone.name),
                            stop,
                        ));
                    }
                    let arc = self.tessellator.arc(
                        *center,
                        *start,
                        stop,
                        radius.to_meters(),
                        *clockwise,
                    );
                    g.extend(arc);
                }
                Segment::BorderFollow {
                    border_id,
                    border_name,
                    start,
                } => {
                    let stop = stop();
                    match self.borders.lookup(border_id) {
                        Some(border) => {
                            let from = project_normalized(border.curve(), *start);
                            let to = project_normalized(border.curve(), stop);
                            g.extend(extract_subcurve(border.curve(), from, to));
                        }
                        None => {
                            diagnostics.report(ConversionIssue::MissingBorder {
                                zone: zone.uid.clone(),
                                border: border_id.clone(),
                                name: border_name.clone().unwrap_or_default(),
                            });
                            g.push(*start);
                        }
                    }
                }
                Segment::Other { vertex, code } => {
                    diagnostics.report(ConversionIssue::UnrecognizedSegmentCode {
                        context: format!("Avx {} von AseUid={}", index, zone.uid),
                        code: code.clone(),
                    });
                    g.push(*vertex);
                }
            }
        }

        g
    }
}
