//! One render pass: classify, fit, composite.

use crate::braille::BrailleCanvas;
use crate::codes::CodeTable;
use crate::map::{self, CompositeStats, Extent, FitParams, TaggedFeature, Variant};
use crate::render::Surface;
use rayon::prelude::*;

/// Canvas and paint settings for a render pass
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// Pixels kept clear around the fitted map
    pub padding: f64,
    pub show_labels: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 160,
            height: 96,
            padding: 2.0,
            show_labels: true,
        }
    }
}

/// Shape counts and paint results of a render pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Shapes per variant, indexed by [`Variant::index`]
    pub shapes: [usize; Variant::COUNT],
    pub composite: CompositeStats,
}

impl RenderSummary {
    #[inline]
    pub fn count(&self, variant: Variant) -> usize {
        self.shapes[variant.index()]
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.shapes.iter().sum()
    }
}

/// Render one tile of features onto `surface`
pub fn render_tile<S: Surface + ?Sized>(
    features: &[TaggedFeature],
    table: &CodeTable,
    config: &RenderConfig,
    surface: &mut S,
) -> RenderSummary {
    let mut summary = RenderSummary::default();

    let shapes: Vec<_> = features
        .iter()
        .map(|f| map::classify_tagged(f, table))
        .inspect(|s| summary.shapes[s.variant().index()] += 1)
        .collect();

    let Some(extent) = Extent::of(&shapes) else {
        log::debug!("nothing to render for {} features", features.len());
        return summary;
    };

    let params = FitParams::for_canvas(
        &extent,
        config.width as f64,
        config.height as f64,
        config.padding,
    );
    let fitted = map::fit(shapes, &params);
    summary.composite = map::composite(fitted, surface, config.show_labels);

    log::debug!(
        "rendered {} shapes at scale {:.3e}: {}",
        summary.total(),
        params.scale,
        Variant::ALL
            .iter()
            .map(|v| format!("{}={}", v.name(), summary.count(*v)))
            .collect::<Vec<_>>()
            .join(" ")
    );

    summary
}

/// Render independent tiles in parallel, each onto its own canvas.
/// Results keep the order of `tiles`.
pub fn render_tiles(
    tiles: &[Vec<TaggedFeature>],
    table: &CodeTable,
    config: &RenderConfig,
) -> Vec<(BrailleCanvas, RenderSummary)> {
    tiles
        .par_iter()
        .map(|features| {
            let mut canvas = BrailleCanvas::for_pixels(config.width, config.height);
            let summary = render_tile(features, table, config, &mut canvas);
            (canvas, summary)
        })
        .collect()
}
