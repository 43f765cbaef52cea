use super::Surface;
use crate::map::{PixelPoint, Rgba, Stroke, TextStyle};

/// A recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Path {
        points: Vec<PixelPoint>,
        stroke: Stroke,
    },
    Fill {
        points: Vec<PixelPoint>,
        color: Rgba,
    },
    Text {
        text: String,
        anchor: PixelPoint,
        style: TextStyle,
    },
}

/// Surface that keeps every call in issue order instead of rasterizing.
#[derive(Debug, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in issue order
    #[inline]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }
}

impl Surface for DrawList {
    fn draw_path(&mut self, points: &[PixelPoint], stroke: &Stroke) {
        self.cmds.push(DrawCmd::Path {
            points: points.to_vec(),
            stroke: *stroke,
        });
    }

    fn fill_polygon(&mut self, points: &[PixelPoint], color: Rgba) {
        self.cmds.push(DrawCmd::Fill {
            points: points.to_vec(),
            color,
        });
    }

    fn draw_text(&mut self, text: &str, anchor: PixelPoint, style: &TextStyle) {
        self.cmds.push(DrawCmd::Text {
            text: text.to_string(),
            anchor,
            style: *style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::style::{BORDER, SETTLEMENT_LABEL};

    #[test]
    fn test_records_in_order() {
        let mut list = DrawList::new();
        let pts = [PixelPoint::new(0.0, 0.0), PixelPoint::new(1.0, 1.0)];
        list.fill_polygon(&pts, Rgba::GREEN);
        list.draw_path(&pts, &BORDER);
        list.draw_text("x", pts[0], &SETTLEMENT_LABEL);

        assert_eq!(list.len(), 3);
        assert!(matches!(list.cmds()[0], DrawCmd::Fill { color: Rgba::GREEN, .. }));
        assert!(matches!(list.cmds()[1], DrawCmd::Path { .. }));
        assert!(matches!(&list.cmds()[2], DrawCmd::Text { text, .. } if text == "x"));

        list.clear();
        assert!(list.is_empty());
    }
}
