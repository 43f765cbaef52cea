//! Fixed paint styles. Every variant and terrain category looks the same in
//! every frame, so the styles are plain constants and lookup tables.

use super::shape::TerrainCategory;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const CORAL: Self = Self::rgb(255, 127, 80);
    pub const DARK_GRAY: Self = Self::rgb(169, 169, 169);
    pub const DARK_GREEN: Self = Self::rgb(0, 100, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    pub const LIGHT_BLUE: Self = Self::rgb(173, 216, 230);
    pub const LIGHT_CORAL: Self = Self::rgb(240, 128, 128);
    pub const LIGHT_GRAY: Self = Self::rgb(211, 211, 211);
    pub const LIGHT_GREEN: Self = Self::rgb(144, 238, 144);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const SANDY_BROWN: Self = Self::rgb(244, 164, 96);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
}

/// Line style for path strokes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
    /// Alternating on/off lengths in stroke-width units; `None` is solid
    pub dash: Option<&'static [f32]>,
}

impl Stroke {
    pub const fn solid(color: Rgba, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub const fn dashed(color: Rgba, width: f32, dash: &'static [f32]) -> Self {
        Self {
            color,
            width,
            dash: Some(dash),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Rgba,
    pub size: f32,
    pub bold: bool,
}

/// Width of terrain and waterway outlines
pub const THIN_STROKE_WIDTH: f32 = 1.2;

/// Terrain colors, indexed by [`TerrainCategory::index`]
const TERRAIN_COLORS: [Rgba; TerrainCategory::COUNT] = [
    Rgba::LIGHT_GREEN, // Plain
    Rgba::DARK_GREEN,  // Hills
    Rgba::LIGHT_GRAY,  // Mountains
    Rgba::GREEN,       // Forest
    Rgba::SANDY_BROWN, // Desert
    Rgba::MAGENTA,     // Unknown
    Rgba::LIGHT_BLUE,  // Water
    Rgba::LIGHT_CORAL, // Residential
];

#[inline(always)]
pub fn terrain_color(category: TerrainCategory) -> Rgba {
    TERRAIN_COLORS[category.index()]
}

pub const RAIL_BED: Stroke = Stroke::solid(Rgba::DARK_GRAY, 2.0);
pub const RAIL_TIES: Stroke = Stroke::dashed(Rgba::LIGHT_GRAY, 1.2, &[2.0, 4.0, 2.0]);

pub const BORDER: Stroke = Stroke::solid(Rgba::GRAY, 2.0);

pub const WATERWAY_COLOR: Rgba = Rgba::LIGHT_BLUE;

pub const ROAD_EDGE: Stroke = Stroke::solid(Rgba::YELLOW, 2.2);
pub const ROAD_TOP: Stroke = Stroke::solid(Rgba::CORAL, 2.0);

pub const SETTLEMENT_LABEL: TextStyle = TextStyle {
    color: Rgba::BLACK,
    size: 12.0,
    bold: true,
};
