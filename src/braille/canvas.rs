use super::raster;
use crate::map::{PixelPoint, Rgba, Stroke, TextStyle};
use crate::render::Surface;

/// A text label placed on the canvas, in character cells
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasLabel {
    pub col: u16,
    pub row: u16,
    pub text: String,
    pub color: Rgba,
    pub bold: bool,
}

/// Braille Unicode canvas for high-resolution terminal graphics.
/// Each character cell represents a 2x4 pixel grid (8 dots).
/// Unicode Braille patterns: U+2800 to U+28FF
///
/// A cell has a single foreground color: the color of the last dot written
/// into it, so later paint calls win.
pub struct BrailleCanvas {
    width: usize,  // Characters
    height: usize, // Characters
    pixels: Vec<Vec<u8>>, // Bit patterns per char
    colors: Vec<Vec<Option<Rgba>>>,
    labels: Vec<CanvasLabel>,
}

impl BrailleCanvas {
    /// Create a new canvas with the given character dimensions.
    /// Effective pixel resolution: width*2 x height*4
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![vec![0u8; width]; height],
            colors: vec![vec![None; width]; height],
            labels: Vec::new(),
        }
    }

    /// Smallest canvas covering `width` x `height` pixels
    pub fn for_pixels(width: usize, height: usize) -> Self {
        Self::new(width.div_ceil(2), height.div_ceil(4))
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub fn pixel_width(&self) -> usize {
        self.width * 2
    }

    #[inline(always)]
    pub fn pixel_height(&self) -> usize {
        self.height * 4
    }

    /// Set a pixel at the given coordinates.
    /// Braille dot layout per character:
    /// ```text
    /// (0,0) (1,0)   bits: 0x01 0x08
    /// (0,1) (1,1)   bits: 0x02 0x10
    /// (0,2) (1,2)   bits: 0x04 0x20
    /// (0,3) (1,3)   bits: 0x40 0x80
    /// ```
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgba) {
        let cx = x / 2;
        let cy = y / 4;

        if cx >= self.width || cy >= self.height {
            return;
        }

        let bit = match (x % 2, y % 4) {
            (0, 0) => 0x01,
            (1, 0) => 0x08,
            (0, 1) => 0x02,
            (1, 1) => 0x10,
            (0, 2) => 0x04,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => 0,
        };

        self.pixels[cy][cx] |= bit;
        self.colors[cy][cx] = Some(color);
    }

    /// Set a pixel using signed coordinates (ignores negative values)
    #[inline(always)]
    pub fn set_pixel_signed(&mut self, x: i32, y: i32, color: Rgba) {
        if x >= 0 && y >= 0 {
            self.set_pixel(x as usize, y as usize, color);
        }
    }

    /// Color of a character cell, `None` while nothing was drawn into it
    pub fn cell_color(&self, col: usize, row: usize) -> Option<Rgba> {
        self.colors.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Labels in the order they were drawn
    pub fn labels(&self) -> &[CanvasLabel] {
        &self.labels
    }

    /// Erase all dots, colors and labels
    pub fn clear(&mut self) {
        for row in &mut self.pixels {
            row.fill(0);
        }
        for row in &mut self.colors {
            row.fill(None);
        }
        self.labels.clear();
    }

    /// Convert the canvas to a string of Braille characters
    #[cfg(test)]
    pub fn to_string(&self) -> String {
        self.pixels
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&b| char::from_u32(0x2800 + b as u32).unwrap_or(' '))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Get a specific row as a string (for line-by-line rendering)
    pub fn row_to_string(&self, row: usize) -> String {
        if row >= self.height {
            return String::new();
        }
        self.pixels[row]
            .iter()
            .map(|&b| char::from_u32(0x2800 + b as u32).unwrap_or(' '))
            .collect()
    }

    /// Get all rows as an iterator of strings
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(|i| self.row_to_string(i))
    }
}

impl Surface for BrailleCanvas {
    fn draw_path(&mut self, points: &[PixelPoint], stroke: &Stroke) {
        raster::stroke_path(self, points, stroke);
    }

    fn fill_polygon(&mut self, points: &[PixelPoint], color: Rgba) {
        raster::fill_polygon(self, points, color);
    }

    fn draw_text(&mut self, text: &str, anchor: PixelPoint, style: &TextStyle) {
        let (x, y) = raster::to_pixel(anchor);
        if x < 0 || y < 0 {
            return;
        }
        let (col, row) = (x as usize / 2, y as usize / 4);
        if col >= self.width || row >= self.height {
            return;
        }
        self.labels.push(CanvasLabel {
            col: col as u16,
            row: row as u16,
            text: text.to_string(),
            color: style.color,
            bold: style.bold,
        });
    }
}
