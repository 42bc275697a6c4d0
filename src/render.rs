//! Scene assembly: turns a probability vector plus configuration into the
//! ordered draw-command list. Order matters: every wedge first, then one
//! cutout erase, then every label, so labels sit on top of the crust and
//! the cutout never clips text.

use tracing::debug;

use crate::color::{interp_srgb, standing};
use crate::config::HeatMapConfig;
use crate::error::HeatMapError;
use crate::geometry::{resolve_rotation, slice_angles, slice_center_deg, WheelGeometry};
use crate::label::label_lines;
use crate::scene::{DrawCommand, Scene};

pub fn build_scene(
    probabilities: &[f64],
    config: &HeatMapConfig,
) -> Result<Scene, HeatMapError> {
    if probabilities.is_empty() {
        return Err(HeatMapError::EmptyInput);
    }
    let num_players = probabilities.len();
    let wheel = WheelGeometry::new(config);
    let rotation = resolve_rotation(config.rotation_origin, num_players);

    let mut scene = Scene::new();
    scene.add_command(DrawCommand::Clear(config.background));

    for (player, _) in probabilities.iter().enumerate() {
        let angles = slice_angles(num_players, player);
        let pct = standing(probabilities, player, config.tie_policy);
        let color = interp_srgb(config.worst_color, config.best_color, pct);
        debug!(
            player,
            start_deg = angles.start_deg + rotation,
            end_deg = angles.end_deg + rotation,
            standing = pct,
            "slice"
        );
        scene.add_command(DrawCommand::Wedge {
            cx: wheel.cx,
            cy: wheel.cy,
            radius: wheel.outer_radius,
            start_deg: angles.start_deg + rotation,
            end_deg: angles.end_deg + rotation,
            color,
        });
    }

    scene.add_command(DrawCommand::EraseDisc {
        cx: wheel.cx,
        cy: wheel.cy,
        radius: wheel.cutout_radius,
    });

    for (player, &rate) in probabilities.iter().enumerate() {
        let center_deg = slice_center_deg(num_players, player) + rotation;
        let (x, y) = wheel.label_anchor(center_deg);
        scene.add_command(DrawCommand::LabelBlock {
            x,
            y,
            lines: label_lines(player, rate, num_players),
            color: config.label_color,
        });
    }

    Ok(scene)
}
