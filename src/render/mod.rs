//! Drawing surfaces shapes are painted onto.

mod record;

pub use record::{DrawCmd, DrawList};

use crate::map::{PixelPoint, Rgba, Stroke, TextStyle};

/// A raster target. Implementations rasterize; callers only issue calls.
pub trait Surface {
    /// Stroke an open path through `points`
    fn draw_path(&mut self, points: &[PixelPoint], stroke: &Stroke);

    /// Fill the closed polygon outlined by `points`
    fn fill_polygon(&mut self, points: &[PixelPoint], color: Rgba);

    /// Draw `text` with its origin at `anchor`
    fn draw_text(&mut self, text: &str, anchor: PixelPoint, style: &TextStyle);
}
