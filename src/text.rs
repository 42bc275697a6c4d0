//! Multi-line text blocks: measure with glyph pixel bounding boxes, then
//! draw center-aligned with the whole block centered on an anchor point.

use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::scene::Canvas;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockMetrics {
    pub width: i32,
    pub height: i32,
    pub line_height: i32,
}

fn line_glyphs<'font>(
    text: &str,
    font: &Font<'font>,
    scale: Scale,
) -> Vec<PositionedGlyph<'font>> {
    let v_metrics = font.v_metrics(scale);
    font.layout(text, scale, point(0.0, v_metrics.ascent)).collect()
}

/// Ink extents of one laid-out line. Lines with no visible ink (empty or
/// whitespace) measure zero wide.
fn line_bounds(glyphs: &[PositionedGlyph]) -> (i32, i32) {
    let (min_x, max_x) = glyphs.iter().filter_map(|g| g.pixel_bounding_box()).fold(
        (i32::MAX, i32::MIN),
        |(min_x, max_x), bb| (min_x.min(bb.min.x), max_x.max(bb.max.x)),
    );
    if min_x < max_x {
        (min_x, max_x - min_x)
    } else {
        (0, 0)
    }
}

pub fn measure_block(lines: &[String], font: &Font, scale: Scale) -> BlockMetrics {
    let v_metrics = font.v_metrics(scale);
    let line_height = (v_metrics.ascent - v_metrics.descent + v_metrics.line_gap).ceil() as i32;
    let width = lines
        .iter()
        .map(|line| line_bounds(&line_glyphs(line, font, scale)).1)
        .max()
        .unwrap_or(0);
    BlockMetrics {
        width,
        height: line_height * lines.len() as i32,
        line_height,
    }
}

/// Draws `lines` with the measured block box centered on (`anchor_x`,
/// `anchor_y`) and each line horizontally centered within the block.
pub fn draw_block_centered(
    canvas: &mut Canvas,
    anchor_x: f64,
    anchor_y: f64,
    lines: &[String],
    font: &Font,
    scale: Scale,
    color: (u8, u8, u8),
) {
    let metrics = measure_block(lines, font, scale);
    let block_top = anchor_y - metrics.height as f64 / 2.0;

    for (row, line) in lines.iter().enumerate() {
        let glyphs = line_glyphs(line, font, scale);
        let (ink_min_x, ink_width) = line_bounds(&glyphs);
        let line_left = (anchor_x - ink_width as f64 / 2.0) as i32;
        let line_top = (block_top + row as f64 * metrics.line_height as f64) as i32;

        for glyph in &glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    let px = line_left + gx as i32 + bb.min.x - ink_min_x;
                    let py = line_top + gy as i32 + bb.min.y;
                    canvas.blend_pixel(px, py, color, v);
                });
            }
        }
    }
}
