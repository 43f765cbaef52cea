use super::projection::{project, PlanePoint};
use crate::geo::Coordinate;
use std::cmp::Ordering;

/// Stacking key for shapes. Higher values are painted on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct StackPriority(pub i32);

impl Ord for StackPriority {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for StackPriority {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Land cover drawn by a terrain shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerrainCategory {
    Plain,
    Hills,
    Mountains,
    Forest,
    Desert,
    Unknown,
    Water,
    Residential,
}

/// Terrain priorities, indexed by [`TerrainCategory::index`]
const TERRAIN_PRIORITY: [i32; TerrainCategory::COUNT] = [
    10, // Plain
    12, // Hills
    13, // Mountains
    11, // Forest
    9,  // Desert
    8,  // Unknown
    40, // Water
    41, // Residential
];

impl TerrainCategory {
    pub const COUNT: usize = 8;

    pub const ALL: [TerrainCategory; Self::COUNT] = [
        Self::Plain,
        Self::Hills,
        Self::Mountains,
        Self::Forest,
        Self::Desert,
        Self::Unknown,
        Self::Water,
        Self::Residential,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub fn priority(self) -> StackPriority {
        StackPriority(TERRAIN_PRIORITY[self.index()])
    }
}

/// Fieldless tag of a [`ShapeKind`], used for counting and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Terrain,
    Railway,
    Settlement,
    Border,
    Waterway,
    Road,
}

impl Variant {
    pub const COUNT: usize = 6;

    pub const ALL: [Variant; Self::COUNT] = [
        Self::Terrain,
        Self::Railway,
        Self::Settlement,
        Self::Border,
        Self::Waterway,
        Self::Road,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Terrain => "terrain",
            Variant::Railway => "railway",
            Variant::Settlement => "settlement",
            Variant::Border => "border",
            Variant::Waterway => "waterway",
            Variant::Road => "road",
        }
    }
}

pub const RAILWAY_PRIORITY: StackPriority = StackPriority(45);
pub const SETTLEMENT_PRIORITY: StackPriority = StackPriority(60);
pub const BORDER_PRIORITY: StackPriority = StackPriority(30);
pub const WATERWAY_PRIORITY: StackPriority = StackPriority(40);
pub const ROAD_PRIORITY: StackPriority = StackPriority(50);

/// Name used for settlements whose source carries no label
pub const UNNAMED_SETTLEMENT: &str = "Unknown";

/// Settlement label. Unlabelled settlements keep their geometry but are not painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Terrain(TerrainCategory),
    Railway,
    Settlement(Label),
    Border,
    Waterway,
    Road,
}

impl ShapeKind {
    pub fn variant(&self) -> Variant {
        match self {
            ShapeKind::Terrain(_) => Variant::Terrain,
            ShapeKind::Railway => Variant::Railway,
            ShapeKind::Settlement(_) => Variant::Settlement,
            ShapeKind::Border => Variant::Border,
            ShapeKind::Waterway => Variant::Waterway,
            ShapeKind::Road => Variant::Road,
        }
    }

    pub fn priority(&self) -> StackPriority {
        match self {
            ShapeKind::Terrain(category) => category.priority(),
            ShapeKind::Railway => RAILWAY_PRIORITY,
            ShapeKind::Settlement(_) => SETTLEMENT_PRIORITY,
            ShapeKind::Border => BORDER_PRIORITY,
            ShapeKind::Waterway => WATERWAY_PRIORITY,
            ShapeKind::Road => ROAD_PRIORITY,
        }
    }
}

/// A drawable map shape.
///
/// `P` is the coordinate space of the points: [`PlanePoint`] straight out of
/// classification, [`super::PixelPoint`] once the viewport fit has run. Shapes
/// are read-only apart from that one stage change.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape<P> {
    kind: ShapeKind,
    is_area: bool,
    points: Vec<P>,
}

fn project_all(coords: &[Coordinate]) -> Vec<PlanePoint> {
    coords.iter().copied().map(project).collect()
}

impl Shape<PlanePoint> {
    pub fn terrain(coords: &[Coordinate], category: TerrainCategory, is_area: bool) -> Self {
        Self::projected(ShapeKind::Terrain(category), coords, is_area)
    }

    pub fn railway(coords: &[Coordinate]) -> Self {
        Self::projected(ShapeKind::Railway, coords, false)
    }

    /// Settlement named after `label`; an absent or empty label yields an invisible shape
    pub fn settlement(coords: &[Coordinate], label: Option<&str>) -> Self {
        let label = match label.filter(|l| !l.is_empty()) {
            Some(name) => Label {
                name: name.to_string(),
                visible: true,
            },
            None => Label {
                name: UNNAMED_SETTLEMENT.to_string(),
                visible: false,
            },
        };
        Self::projected(ShapeKind::Settlement(label), coords, false)
    }

    pub fn border(coords: &[Coordinate]) -> Self {
        Self::projected(ShapeKind::Border, coords, false)
    }

    pub fn waterway(coords: &[Coordinate], is_area: bool) -> Self {
        Self::projected(ShapeKind::Waterway, coords, is_area)
    }

    pub fn road(coords: &[Coordinate], is_area: bool) -> Self {
        Self::projected(ShapeKind::Road, coords, is_area)
    }

    fn projected(kind: ShapeKind, coords: &[Coordinate], is_area: bool) -> Self {
        Self {
            kind,
            is_area,
            points: project_all(coords),
        }
    }
}

impl<P> Shape<P> {
    #[inline(always)]
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    #[inline(always)]
    pub fn variant(&self) -> Variant {
        self.kind.variant()
    }

    #[inline(always)]
    pub fn is_area(&self) -> bool {
        self.is_area
    }

    #[inline(always)]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    #[inline(always)]
    pub fn priority(&self) -> StackPriority {
        self.kind.priority()
    }

    /// Move every point into another coordinate space. Point count is preserved.
    pub(crate) fn map_points<Q>(self, f: impl FnMut(P) -> Q) -> Shape<Q> {
        Shape {
            kind: self.kind,
            is_area: self.is_area,
            points: self.points.into_iter().map(f).collect(),
        }
    }
}
