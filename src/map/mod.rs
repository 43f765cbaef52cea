mod classify;
mod compositor;
mod projection;
mod shape;
pub mod style;
mod viewport;

pub use classify::{classify, classify_tagged, is_border, is_settlement, terrain_category, Layer, TaggedFeature};
pub use compositor::{composite, CompositeStats};
pub use projection::{lat_to_y, lon_to_x, project, PlanePoint};
pub use shape::{Label, Shape, ShapeKind, StackPriority, TerrainCategory, Variant};
pub use style::{Rgba, Stroke, TextStyle};
pub use viewport::{fit, Extent, FitParams, PixelPoint};
