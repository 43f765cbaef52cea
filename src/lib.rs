//! Turns classified map features into layered shapes and composites them
//! onto a raster surface in a fixed stacking order.
//!
//! A render pass runs in three stages, each consuming the previous one's
//! output: [`map::classify_tagged`] builds projected shapes, [`map::fit`]
//! moves them onto the canvas, and [`map::composite`] paints them back to
//! front. [`pipeline::render_tile`] runs all three.

pub mod braille;
pub mod codes;
pub mod data;
pub mod geo;
pub mod logging;
pub mod map;
pub mod pipeline;
pub mod render;
