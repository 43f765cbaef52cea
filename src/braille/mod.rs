mod canvas;
mod raster;

pub use canvas::{BrailleCanvas, CanvasLabel};
