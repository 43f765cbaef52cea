use super::projection::PlanePoint;
use super::shape::{Shape, TerrainCategory};
use crate::codes::CodeTable;
use crate::geo::{FeatureRecord, GeometryKind};

/// Feature layer chosen upstream of classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Decide from geometry and property codes
    Auto,
    Railway,
    Waterway,
    Road,
    /// Terrain of a fixed category
    Terrain(TerrainCategory),
}

/// A feature together with its upstream layer
#[derive(Debug, Clone)]
pub struct TaggedFeature {
    pub layer: Layer,
    pub record: FeatureRecord,
}

impl TaggedFeature {
    pub fn auto(record: FeatureRecord) -> Self {
        Self {
            layer: Layer::Auto,
            record,
        }
    }
}

type TerrainRule = (fn(&CodeTable, u16) -> bool, TerrainCategory);

/// Terrain rules in resolution order; the first rule matched by any code wins
const TERRAIN_RULES: [TerrainRule; 5] = [
    (CodeTable::is_open_land, TerrainCategory::Plain),
    (CodeTable::is_forest, TerrainCategory::Forest),
    (CodeTable::is_rock, TerrainCategory::Mountains),
    (CodeTable::is_sand, TerrainCategory::Desert),
    (CodeTable::is_water, TerrainCategory::Water),
];

/// Both the administrative boundary marker and the admin level marker present
pub fn is_border(record: &FeatureRecord, table: &CodeTable) -> bool {
    let mut boundary = false;
    let mut level = false;

    for &code in &record.codes {
        if code == table.admin_boundary {
            boundary = true;
        }
        if code == table.admin_level {
            level = true;
        }

        if boundary && level {
            return true;
        }
    }

    false
}

/// Point geometry carrying a place-size code
pub fn is_settlement(record: &FeatureRecord, table: &CodeTable) -> bool {
    record.kind == GeometryKind::Point && record.codes.iter().any(|&c| table.is_place(c))
}

/// Terrain category for a set of codes, `Unknown` when nothing matches
pub fn terrain_category(codes: &[u16], table: &CodeTable) -> TerrainCategory {
    TERRAIN_RULES
        .iter()
        .find(|(matches, _)| codes.iter().any(|&c| matches(table, c)))
        .map(|&(_, category)| category)
        .unwrap_or(TerrainCategory::Unknown)
}

/// Classify a feature from its geometry and codes: border, then settlement,
/// then terrain. Every feature yields exactly one shape.
pub fn classify(record: &FeatureRecord, table: &CodeTable) -> Shape<PlanePoint> {
    let shape = if is_border(record, table) {
        Shape::border(&record.coords)
    } else if is_settlement(record, table) {
        Shape::settlement(&record.coords, record.label())
    } else {
        let category = terrain_category(&record.codes, table);
        Shape::terrain(&record.coords, category, record.is_polygon())
    };

    log::trace!(
        "classified {:?} feature with {} codes as {:?}",
        record.kind,
        record.codes.len(),
        shape.kind()
    );

    shape
}

/// Build the shape for a feature whose layer was already chosen upstream
pub fn classify_tagged(feature: &TaggedFeature, table: &CodeTable) -> Shape<PlanePoint> {
    let record = &feature.record;
    match feature.layer {
        Layer::Auto => classify(record, table),
        Layer::Railway => Shape::railway(&record.coords),
        Layer::Waterway => Shape::waterway(&record.coords, record.is_polygon()),
        Layer::Road => Shape::road(&record.coords, record.is_polygon()),
        Layer::Terrain(category) => Shape::terrain(&record.coords, category, record.is_polygon()),
    }
}
