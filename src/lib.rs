//! heatwheel renders a per-player win-rate probability vector as an annular,
//! gapped pie heat-map: one colored wedge per player, a transparent donut
//! cutout that leaves only the crust visible, and a centered three-line
//! label per slice (player id, win rate, deviation from uniform chance).
//!
//! The pipeline is one synchronous pass: normalize counts, compute slice
//! geometry and colors, build a [`scene::Scene`] of draw commands, replay it
//! onto an owned RGBA [`scene::Canvas`], and write a PNG. Everything up to
//! the file write is a pure function of the probability vector and a
//! [`HeatMapConfig`], so the geometry/color core is testable without pixels
//! or a filesystem.

pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod geometry;
pub mod label;
pub mod output;
pub mod probability;
pub mod render;
pub mod scene;
pub mod text;

pub use config::{Color, HeatMapConfig, Rgba, RotationOrigin, TiePolicy};
pub use error::HeatMapError;
pub use scene::Canvas;

use rusttype::Font;

/// Renders a probability vector onto a fresh canvas. `probabilities` is
/// expected to sum to 1 (see [`probability::normalize`]); the vector's index
/// is the player identity.
pub fn render_heat_map(
    probabilities: &[f64],
    config: &HeatMapConfig,
    font: &Font,
) -> Result<Canvas, HeatMapError> {
    let scene = render::build_scene(probabilities, config)?;
    let mut canvas = Canvas::new(config.image_size, config.image_size);
    scene.render(&mut canvas, font, config.font_size);
    Ok(canvas)
}
