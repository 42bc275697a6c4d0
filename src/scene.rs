//! Retained-mode draw layer: a render builds a list of [`DrawCommand`]s and
//! replays them once onto an owned RGBA canvas. Keeping the command list
//! inspectable lets the geometry and ordering be asserted without reading
//! pixels back.

use rusttype::{Font, Scale};

use crate::config::{Color, Rgba};
use crate::text;

/// Owned straight-alpha RGBA framebuffer.
pub struct Canvas {
    pub frame: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            frame: vec![0; width * height * 4],
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Rgba) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        let idx = (y * self.width + x) * 4;
        Rgba::new(
            self.frame[idx],
            self.frame[idx + 1],
            self.frame[idx + 2],
            self.frame[idx + 3],
        )
    }

    /// Source-over composite of an opaque color at `coverage` onto the
    /// straight-alpha destination. The background may be fully transparent,
    /// so the destination alpha participates instead of being forced opaque.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: (u8, u8, u8), coverage: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let sa = coverage.clamp(0.0, 1.0);
        let da = self.frame[idx + 3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return;
        }
        let src = [color.0 as f32, color.1 as f32, color.2 as f32];
        for c in 0..3 {
            let dst = self.frame[idx + c] as f32;
            self.frame[idx + c] = ((src[c] * sa + dst * da * (1.0 - sa)) / out_a).round() as u8;
        }
        self.frame[idx + 3] = (out_a * 255.0).round() as u8;
    }

    /// Punches transparency into the canvas: alpha is scaled down by
    /// `strength`, color channels stay so the rim anti-aliases cleanly.
    pub fn erase_pixel(&mut self, x: i32, y: i32, strength: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let keep = 1.0 - strength.clamp(0.0, 1.0);
        self.frame[idx + 3] = (self.frame[idx + 3] as f32 * keep).round() as u8;
    }
}

#[derive(Clone, Debug)]
pub enum DrawCommand {
    Clear(Rgba),
    /// Filled pie wedge from `start_deg` to `end_deg` (clockwise, degrees,
    /// 0 at 3 o'clock). A span of 360 or more fills the whole disc.
    Wedge {
        cx: f64,
        cy: f64,
        radius: f64,
        start_deg: f64,
        end_deg: f64,
        color: Color,
    },
    /// Full-circle transparent punch for the donut cutout.
    EraseDisc { cx: f64, cy: f64, radius: f64 },
    /// Multi-line text block whose measured bounding box is centered on
    /// (`x`, `y`), each line center-aligned within the block.
    LabelBlock {
        x: f64,
        y: f64,
        lines: Vec<String>,
        color: Color,
    },
}

#[derive(Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn render(&self, canvas: &mut Canvas, font: &Font, font_size: f32) {
        let scale = Scale::uniform(font_size);
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => canvas.clear(*color),
                DrawCommand::Wedge {
                    cx,
                    cy,
                    radius,
                    start_deg,
                    end_deg,
                    color,
                } => fill_wedge(canvas, *cx, *cy, *radius, *start_deg, *end_deg, *color),
                DrawCommand::EraseDisc { cx, cy, radius } => {
                    erase_disc(canvas, *cx, *cy, *radius);
                }
                DrawCommand::LabelBlock { x, y, lines, color } => {
                    text::draw_block_centered(canvas, *x, *y, lines, font, scale, color.as_tuple());
                }
            }
        }
    }
}

/// Scans the wedge's bounding square and tests each pixel radially and
/// angularly. The outer radial edge is anti-aliased; angular edges stay
/// hard.
fn fill_wedge(
    canvas: &mut Canvas,
    cx: f64,
    cy: f64,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    color: Color,
) {
    let full_circle = end_deg - start_deg >= 360.0;
    let start = normalize_deg(start_deg);
    let end = normalize_deg(end_deg);

    let (x0, y0, x1, y1) = bounding_box(canvas, cx, cy, radius);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > radius + 1.0 {
                continue;
            }
            if !full_circle {
                let angle = normalize_deg(dy.atan2(dx).to_degrees());
                // Wrap-safe membership test: the wedge may straddle 0 deg.
                let in_wedge = if start <= end {
                    angle >= start && angle <= end
                } else {
                    angle >= start || angle <= end
                };
                if !in_wedge {
                    continue;
                }
            }
            let aa = if dist > radius {
                1.0 - (dist - radius).min(1.0)
            } else {
                1.0
            };
            if aa > 0.0 {
                canvas.blend_pixel(x, y, color.as_tuple(), aa as f32);
            }
        }
    }
}

fn erase_disc(canvas: &mut Canvas, cx: f64, cy: f64, radius: f64) {
    let (x0, y0, x1, y1) = bounding_box(canvas, cx, cy, radius);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > radius + 1.0 {
                continue;
            }
            let strength = if dist > radius {
                1.0 - (dist - radius).min(1.0)
            } else {
                1.0
            };
            canvas.erase_pixel(x, y, strength as f32);
        }
    }
}

fn normalize_deg(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d < 0.0 {
        d += 360.0;
    }
    d
}

fn bounding_box(canvas: &Canvas, cx: f64, cy: f64, radius: f64) -> (i32, i32, i32, i32) {
    let x0 = ((cx - radius - 1.0).floor() as i32).max(0);
    let y0 = ((cy - radius - 1.0).floor() as i32).max(0);
    let x1 = ((cx + radius + 1.0).ceil() as i32).min(canvas.width as i32 - 1);
    let y1 = ((cy + radius + 1.0).ceil() as i32).min(canvas.height as i32 - 1);
    (x0, y0, x1, y1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_fully_transparent() {
        let canvas = Canvas::new(8, 8);
        assert_eq!(canvas.pixel(3, 4), Rgba::new(0, 0, 0, 0));
    }

    #[test]
    fn clear_writes_background_alpha() {
        let mut canvas = Canvas::new(4, 4);
        canvas.clear(Rgba::new(0xff, 0xff, 0xff, 0x00));
        assert_eq!(canvas.pixel(0, 0), Rgba::new(0xff, 0xff, 0xff, 0x00));
    }

    #[test]
    fn opaque_blend_over_transparent_background() {
        let mut canvas = Canvas::new(2, 2);
        canvas.clear(Rgba::new(0xff, 0xff, 0xff, 0x00));
        canvas.blend_pixel(0, 0, (10, 20, 30), 1.0);
        assert_eq!(canvas.pixel(0, 0), Rgba::new(10, 20, 30, 255));
    }

    #[test]
    fn erase_zeroes_alpha() {
        let mut canvas = Canvas::new(2, 2);
        canvas.blend_pixel(1, 1, (10, 20, 30), 1.0);
        canvas.erase_pixel(1, 1, 1.0);
        assert_eq!(canvas.pixel(1, 1).a, 0);
    }

    #[test]
    fn wedge_fill_respects_angular_bounds() {
        let mut canvas = Canvas::new(100, 100);
        // Right-pointing wedge around 0 degrees.
        fill_wedge(&mut canvas, 50.0, 50.0, 40.0, -30.0, 30.0, Color::new(9, 9, 9));
        assert_eq!(canvas.pixel(80, 50).a, 255); // inside, along 0 deg
        assert_eq!(canvas.pixel(20, 50).a, 0); // opposite side untouched
        assert_eq!(canvas.pixel(50, 15).a, 0); // straight up is outside
    }

    #[test]
    fn full_span_fills_the_disc() {
        let mut canvas = Canvas::new(60, 60);
        fill_wedge(&mut canvas, 30.0, 30.0, 20.0, -270.0, 90.0, Color::new(1, 2, 3));
        assert_eq!(canvas.pixel(30, 30).a, 255);
        assert_eq!(canvas.pixel(30, 12).a, 255);
        assert_eq!(canvas.pixel(12, 30).a, 255);
    }

    #[test]
    fn erase_disc_punches_a_hole() {
        let mut canvas = Canvas::new(60, 60);
        fill_wedge(&mut canvas, 30.0, 30.0, 25.0, -270.0, 90.0, Color::new(5, 5, 5));
        erase_disc(&mut canvas, 30.0, 30.0, 10.0);
        assert_eq!(canvas.pixel(30, 30).a, 0); // hole
        assert_eq!(canvas.pixel(30, 8).a, 255); // crust survives
    }
}
