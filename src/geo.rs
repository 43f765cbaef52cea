/// Geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    #[inline(always)]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<(f64, f64)> for Coordinate {
    #[inline(always)]
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

/// Geometry kind of a source feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    Line,
    Polygon,
}

/// A classified-ready feature as handed over by the feature source
#[derive(Debug, Clone)]
pub struct FeatureRecord {
    pub kind: GeometryKind,
    pub coords: Vec<Coordinate>,
    /// Property codes, see [`crate::codes::CodeTable`]
    pub codes: Vec<u16>,
    pub label: Option<String>,
}

impl FeatureRecord {
    pub fn new(kind: GeometryKind, coords: Vec<Coordinate>, codes: Vec<u16>) -> Self {
        Self {
            kind,
            coords,
            codes,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[inline(always)]
    pub fn is_polygon(&self) -> bool {
        self.kind == GeometryKind::Polygon
    }

    /// Label text, treating an empty string as absent
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }
}
