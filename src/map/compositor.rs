use super::shape::{Shape, ShapeKind};
use super::style::{self, Stroke, THIN_STROKE_WIDTH};
use super::viewport::PixelPoint;
use crate::render::Surface;

/// Outcome of one compositing pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompositeStats {
    /// Shapes that issued at least one surface call
    pub painted: usize,
    /// Shapes with nothing to draw (hidden, empty, or area roads)
    pub skipped: usize,
}

impl Shape<PixelPoint> {
    /// Issue this shape's surface calls. Returns false when nothing was drawn.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S, labels: bool) -> bool {
        let points = self.points();
        if points.is_empty() {
            return false;
        }

        match self.kind() {
            ShapeKind::Terrain(category) => {
                let color = style::terrain_color(*category);
                if self.is_area() {
                    surface.fill_polygon(points, color);
                } else {
                    surface.draw_path(points, &Stroke::solid(color, THIN_STROKE_WIDTH));
                }
            }
            ShapeKind::Railway => {
                surface.draw_path(points, &style::RAIL_BED);
                surface.draw_path(points, &style::RAIL_TIES);
            }
            ShapeKind::Settlement(label) => {
                if !label.visible || !labels {
                    return false;
                }
                surface.draw_text(&label.name, points[0], &style::SETTLEMENT_LABEL);
            }
            ShapeKind::Border => {
                surface.draw_path(points, &style::BORDER);
            }
            ShapeKind::Waterway => {
                if self.is_area() {
                    surface.fill_polygon(points, style::WATERWAY_COLOR);
                } else {
                    surface.draw_path(
                        points,
                        &Stroke::solid(style::WATERWAY_COLOR, THIN_STROKE_WIDTH),
                    );
                }
            }
            ShapeKind::Road => {
                // Area roads are not drawn
                if self.is_area() {
                    return false;
                }
                surface.draw_path(points, &style::ROAD_EDGE);
                surface.draw_path(points, &style::ROAD_TOP);
            }
        }

        true
    }
}

/// Paint `shapes` back to front by stack priority. Shapes of equal priority
/// keep their incoming order.
pub fn composite<S: Surface + ?Sized>(
    mut shapes: Vec<Shape<PixelPoint>>,
    surface: &mut S,
    labels: bool,
) -> CompositeStats {
    shapes.sort_by_key(|s| s.priority());

    let mut stats = CompositeStats::default();
    for shape in &shapes {
        if shape.paint(surface, labels) {
            stats.painted += 1;
        } else {
            stats.skipped += 1;
        }
    }

    log::debug!(
        "composited {} shapes ({} skipped)",
        stats.painted,
        stats.skipped
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;
    use crate::map::projection::PlanePoint;
    use crate::map::shape::TerrainCategory;
    use crate::map::style::Rgba;
    use crate::map::viewport::{fit, FitParams};
    use crate::render::{DrawCmd, DrawList};

    fn coords(n: usize) -> Vec<Coordinate> {
        (0..n).map(|i| Coordinate::new(i as f64, i as f64 * 0.5)).collect()
    }

    fn pixels(shapes: Vec<Shape<PlanePoint>>) -> Vec<Shape<PixelPoint>> {
        fit(shapes, &FitParams::new(0.0, 0.0, 1.0, 0.0))
    }

    fn colors(list: &DrawList) -> Vec<Rgba> {
        list.cmds()
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::Path { stroke, .. } => stroke.color,
                DrawCmd::Fill { color, .. } => *color,
                DrawCmd::Text { style, .. } => style.color,
            })
            .collect()
    }

    #[test]
    fn test_sorted_by_priority() {
        let c = coords(3);
        let shapes = pixels(vec![
            Shape::settlement(&c[..1], Some("Town")),
            Shape::road(&c, false),
            Shape::terrain(&c, TerrainCategory::Water, true),
            Shape::border(&c),
            Shape::terrain(&c, TerrainCategory::Mountains, true),
            Shape::terrain(&c, TerrainCategory::Unknown, true),
        ]);

        let mut list = DrawList::new();
        let stats = composite(shapes, &mut list, true);
        assert_eq!(stats, CompositeStats { painted: 6, skipped: 0 });

        assert_eq!(
            colors(&list),
            vec![
                Rgba::MAGENTA,
                Rgba::LIGHT_GRAY,
                Rgba::GRAY,
                Rgba::LIGHT_BLUE,
                Rgba::YELLOW,
                Rgba::CORAL,
                Rgba::BLACK,
            ]
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let c = coords(3);
        // Water terrain and waterways share priority 40
        let shapes = pixels(vec![
            Shape::waterway(&c, false),
            Shape::terrain(&c, TerrainCategory::Water, true),
            Shape::waterway(&c, true),
            Shape::terrain(&c, TerrainCategory::Residential, true),
        ]);

        let mut list = DrawList::new();
        composite(shapes, &mut list, true);

        let kinds: Vec<&str> = list
            .cmds()
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::Path { .. } => "path",
                DrawCmd::Fill { .. } => "fill",
                DrawCmd::Text { .. } => "text",
            })
            .collect();
        assert_eq!(kinds, vec!["path", "fill", "fill", "fill"]);
        assert_eq!(colors(&list)[3], Rgba::LIGHT_CORAL);
    }

    #[test]
    fn test_terrain_line_stroke() {
        let shapes = pixels(vec![Shape::terrain(&coords(2), TerrainCategory::Forest, false)]);
        let mut list = DrawList::new();
        composite(shapes, &mut list, true);
        match &list.cmds()[0] {
            DrawCmd::Path { stroke, .. } => {
                assert_eq!(stroke.color, Rgba::GREEN);
                assert_eq!(stroke.width, 1.2);
                assert!(stroke.dash.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_railway_two_strokes() {
        let c = coords(4);
        let shapes = pixels(vec![Shape::railway(&c)]);
        let mut list = DrawList::new();
        composite(shapes, &mut list, true);

        assert_eq!(list.len(), 2);
        match (&list.cmds()[0], &list.cmds()[1]) {
            (DrawCmd::Path { stroke: bed, points: a }, DrawCmd::Path { stroke: ties, points: b }) => {
                assert!(bed.dash.is_none());
                assert!(ties.dash.is_some());
                assert!(bed.width > ties.width);
                assert_eq!(a, b);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_settlement_label_at_first_point() {
        let shapes = pixels(vec![Shape::settlement(&[Coordinate::new(0.0, 0.0)], Some("Springfield"))]);
        let mut list = DrawList::new();
        composite(shapes, &mut list, true);

        match &list.cmds()[0] {
            DrawCmd::Text { text, anchor, style } => {
                assert_eq!(text, "Springfield");
                assert_eq!(*anchor, PixelPoint::new(0.0, 0.0));
                assert!(style.bold);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_skips() {
        let c = coords(3);
        let shapes = pixels(vec![
            Shape::settlement(&c[..1], None),
            Shape::settlement(&c[..1], Some("")),
            Shape::road(&c, true),
            Shape::border(&[]),
            Shape::terrain(&[], TerrainCategory::Plain, true),
            Shape::settlement(&[], Some("Nowhere")),
        ]);

        let mut list = DrawList::new();
        let stats = composite(shapes, &mut list, true);
        assert!(list.is_empty());
        assert_eq!(stats, CompositeStats { painted: 0, skipped: 6 });
    }

    #[test]
    fn test_labels_disabled() {
        let c = coords(2);
        let shapes = pixels(vec![Shape::settlement(&c[..1], Some("Town")), Shape::border(&c)]);
        let mut list = DrawList::new();
        let stats = composite(shapes, &mut list, false);
        assert_eq!(list.len(), 1);
        assert_eq!(stats.skipped, 1);
    }
}
