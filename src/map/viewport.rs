use super::projection::PlanePoint;
use super::shape::Shape;
use glam::DVec2;

/// Point in canvas pixels (y growing downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint(pub DVec2);

impl PixelPoint {
    #[inline(always)]
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    #[inline(always)]
    pub fn x(self) -> f64 {
        self.0.x
    }

    #[inline(always)]
    pub fn y(self) -> f64 {
        self.0.y
    }
}

/// Bounding box of projected points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: DVec2,
    pub max: DVec2,
}

impl Extent {
    /// Extent of every point of every shape, `None` if there are no points
    pub fn of(shapes: &[Shape<PlanePoint>]) -> Option<Self> {
        shapes
            .iter()
            .flat_map(|s| s.points().iter())
            .fold(None, |acc: Option<Extent>, p| {
                Some(match acc {
                    Some(e) => Extent {
                        min: e.min.min(p.0),
                        max: e.max.max(p.0),
                    },
                    None => Extent { min: p.0, max: p.0 },
                })
            })
    }

    #[inline(always)]
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }
}

/// Translation and uniform scale from the projected plane to a canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitParams {
    pub min_x: f64,
    pub min_y: f64,
    pub scale: f64,
    pub canvas_height: f64,
}

impl FitParams {
    pub fn new(min_x: f64, min_y: f64, scale: f64, canvas_height: f64) -> Self {
        Self {
            min_x,
            min_y,
            scale,
            canvas_height,
        }
    }

    /// Largest uniform scale that fits `extent` onto the pixels `0..width`
    /// by `0..height`, keeping `padding` pixels clear along the left and
    /// bottom edges and at least that much along the others.
    ///
    /// The last pixel of a row is `width - 1`, so the extent spans at most
    /// `width - 1 - 2 * padding` pixels across (and likewise down).
    pub fn for_canvas(extent: &Extent, width: f64, height: f64, padding: f64) -> Self {
        let usable_w = (width - 1.0 - 2.0 * padding).max(1.0);
        let usable_h = (height - 1.0 - 2.0 * padding).max(1.0);
        let size = extent.size();

        let scale = match (size.x > 0.0, size.y > 0.0) {
            (true, true) => (usable_w / size.x).min(usable_h / size.y),
            (true, false) => usable_w / size.x,
            (false, true) => usable_h / size.y,
            (false, false) => 1.0,
        };

        Self {
            min_x: extent.min.x - padding / scale,
            // The bottom row is `height - 1`
            min_y: extent.min.y - (padding + 1.0) / scale,
            scale,
            canvas_height: height,
        }
    }

    #[inline(always)]
    pub fn apply(&self, p: PlanePoint) -> PixelPoint {
        PixelPoint(DVec2::new(
            (p.x() - self.min_x) * self.scale,
            self.canvas_height - (p.y() - self.min_y) * self.scale,
        ))
    }
}

/// Move every shape from the projected plane onto the canvas.
///
/// Consumes the projected shapes, so a shape cannot be fitted twice.
pub fn fit(shapes: Vec<Shape<PlanePoint>>, params: &FitParams) -> Vec<Shape<PixelPoint>> {
    shapes
        .into_iter()
        .map(|shape| shape.map_points(|p| params.apply(p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;
    use crate::map::projection::project;

    fn plane(x: f64, y: f64) -> PlanePoint {
        PlanePoint(DVec2::new(x, y))
    }

    #[test]
    fn test_identity_fit_flips_y() {
        let params = FitParams::new(0.0, 0.0, 1.0, 100.0);
        for (x, y) in [(0.0, 0.0), (12.5, 40.25), (100.0, 100.0), (-3.0, 7.0)] {
            let p = params.apply(plane(x, y));
            assert_eq!(p.x(), x);
            assert_eq!(p.y(), 100.0 - y);
        }
    }

    #[test]
    fn test_translate_and_scale() {
        let params = FitParams::new(10.0, 20.0, 2.0, 50.0);
        let p = params.apply(plane(15.0, 25.0));
        assert_eq!(p, PixelPoint::new(10.0, 40.0));
    }

    #[test]
    fn test_fit_preserves_counts_and_order() {
        let coords: Vec<Coordinate> = (0..5).map(|i| Coordinate::new(i as f64, i as f64)).collect();
        let shapes = vec![Shape::road(&coords, false), Shape::border(&coords[..2]), Shape::border(&[])];
        let extent = Extent::of(&shapes).unwrap();
        let params = FitParams::for_canvas(&extent, 200.0, 100.0, 0.0);
        let fitted = fit(shapes, &params);

        assert_eq!(fitted.len(), 3);
        assert_eq!(fitted[0].points().len(), 5);
        assert_eq!(fitted[1].points().len(), 2);
        assert!(fitted[2].points().is_empty());
        assert_eq!(fitted[0].variant(), crate::map::Variant::Road);
    }

    #[test]
    fn test_extent_covers_all_points() {
        let shapes = vec![
            Shape::border(&[Coordinate::new(-10.0, 5.0), Coordinate::new(0.0, 0.0)]),
            Shape::border(&[Coordinate::new(20.0, -5.0)]),
        ];
        let extent = Extent::of(&shapes).unwrap();
        assert_eq!(extent.min.x, project(Coordinate::new(-10.0, 0.0)).x());
        assert_eq!(extent.max.x, project(Coordinate::new(20.0, 0.0)).x());
        assert_eq!(extent.min.y, project(Coordinate::new(0.0, -5.0)).y());
        assert_eq!(extent.max.y, project(Coordinate::new(0.0, 5.0)).y());
    }

    #[test]
    fn test_extent_of_nothing() {
        assert!(Extent::of(&[]).is_none());
        assert!(Extent::of(&[Shape::road(&[], false)]).is_none());
    }

    #[test]
    fn test_canvas_fit_stays_inside() {
        let extent = Extent {
            min: DVec2::new(100.0, 200.0),
            max: DVec2::new(300.0, 300.0),
        };
        let params = FitParams::for_canvas(&extent, 80.0, 80.0, 4.0);
        // Width limits: 71 usable pixels across 200 units
        assert!((params.scale - 0.355).abs() < 1e-12);

        for corner in [extent.min, extent.max, DVec2::new(100.0, 300.0), DVec2::new(300.0, 200.0)] {
            let p = params.apply(PlanePoint(corner));
            assert!(p.x() >= 4.0 - 1e-9 && p.x() <= 75.0 + 1e-9, "{p:?}");
            assert!(p.y() >= 4.0 - 1e-9 && p.y() <= 75.0 + 1e-9, "{p:?}");
        }

        // Same margin on the left and bottom: pixels 76..=79 stay clear below
        let bottom_left = params.apply(PlanePoint(extent.min));
        assert!((bottom_left.x() - 4.0).abs() < 1e-9);
        assert!((bottom_left.y() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_unpadded_fit_reaches_last_pixel() {
        let extent = Extent {
            min: DVec2::new(0.0, 0.0),
            max: DVec2::new(10.0, 10.0),
        };
        let params = FitParams::for_canvas(&extent, 40.0, 40.0, 0.0);

        let south_west = params.apply(PlanePoint(extent.min));
        let north_east = params.apply(PlanePoint(extent.max));
        assert!((south_west.x() - 0.0).abs() < 1e-9);
        assert!((south_west.y() - 39.0).abs() < 1e-9);
        assert!((north_east.x() - 39.0).abs() < 1e-9);
        assert!((north_east.y() - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_extent() {
        let extent = Extent {
            min: DVec2::new(5.0, 5.0),
            max: DVec2::new(5.0, 5.0),
        };
        let params = FitParams::for_canvas(&extent, 10.0, 10.0, 0.0);
        assert_eq!(params.scale, 1.0);
        assert_eq!(params.apply(PlanePoint(extent.min)), PixelPoint::new(0.0, 9.0));

        let flat = Extent {
            min: DVec2::new(0.0, 5.0),
            max: DVec2::new(50.0, 5.0),
        };
        let params = FitParams::for_canvas(&flat, 101.0, 10.0, 0.0);
        assert_eq!(params.scale, 2.0);
    }
}
