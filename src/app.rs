use anyhow::Result;
use std::path::PathBuf;
use tile_compositor::braille::BrailleCanvas;
use tile_compositor::codes::CodeTable;
use tile_compositor::data;
use tile_compositor::map::TaggedFeature;
use tile_compositor::pipeline::{render_tile, RenderConfig, RenderSummary};

/// Application state
pub struct App {
    pub paths: Vec<PathBuf>,
    pub features: Vec<TaggedFeature>,
    pub table: CodeTable,
    pub config: RenderConfig,
    /// Last rendered frame
    pub canvas: BrailleCanvas,
    pub summary: RenderSummary,
    /// Why the last reload failed, if it did
    pub load_error: Option<String>,
    pub should_quit: bool,
}

/// Braille pixel size of the map area inside a terminal of `width` x `height` cells
fn map_pixels(width: usize, height: usize) -> (usize, usize) {
    // Account for border (2 chars horizontal, 2 chars vertical plus status bar)
    let inner_width = width.saturating_sub(2);
    let inner_height = height.saturating_sub(3);
    // Braille gives 2x4 resolution per character
    (inner_width * 2, inner_height * 4)
}

impl App {
    /// Load every file and render the first frame. Fails if any file
    /// cannot be loaded.
    pub fn new(paths: Vec<PathBuf>, mut config: RenderConfig, width: usize, height: usize) -> Result<Self> {
        let (pixel_width, pixel_height) = map_pixels(width, height);
        config.width = pixel_width;
        config.height = pixel_height;

        let mut app = Self {
            features: data::load_all(&paths)?,
            paths,
            table: CodeTable::default(),
            canvas: BrailleCanvas::for_pixels(pixel_width, pixel_height),
            config,
            summary: RenderSummary::default(),
            load_error: None,
            should_quit: false,
        };
        app.render();
        Ok(app)
    }

    /// Re-render the canvas from the loaded features
    pub fn render(&mut self) {
        self.canvas = BrailleCanvas::for_pixels(self.config.width, self.config.height);
        self.summary = render_tile(&self.features, &self.table, &self.config, &mut self.canvas);
    }

    /// Update canvas size when terminal resizes
    pub fn resize(&mut self, width: usize, height: usize) {
        let (pixel_width, pixel_height) = map_pixels(width, height);
        self.config.width = pixel_width;
        self.config.height = pixel_height;
        self.render();
    }

    /// Reload all files from disk, keeping the current features if any
    /// file fails
    pub fn reload(&mut self) {
        match data::load_all(&self.paths) {
            Ok(features) => {
                self.features = features;
                self.load_error = None;
                self.render();
            }
            Err(e) => {
                log::warn!("reload failed: {e:#}");
                self.load_error = Some(format!("{e:#}"));
            }
        }
    }

    /// Toggle settlement labels
    pub fn toggle_labels(&mut self) {
        self.config.show_labels = !self.config.show_labels;
        self.render();
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
