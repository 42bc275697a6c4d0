//! Slice geometry: converts a player count into angular spans, the donut
//! cutout radius, and label anchor points in pixel coordinates.
//!
//! Degrees follow the raster convention: 0 at 3 o'clock, increasing
//! clockwise (canvas y grows downward, so plain `cos`/`sin` projection
//! already produces clockwise angles on screen).

use crate::config::{HeatMapConfig, RotationOrigin};

/// Fixed gap ratio: each slice gives up `base / 7.5` degrees to the gap on
/// each side, truncated to whole degrees. Floors to zero past 48 players.
const BUFFER_RATIO: f64 = 7.5;

/// Radial bias pulling label anchors slightly inward from mid-crust.
const LABEL_RADIUS_TWEAK: f64 = 0.02;

pub fn deg_per_player(num_players: usize) -> f64 {
    360.0 / num_players as f64
}

/// Angular gap inserted on each side of a slice boundary. A single player
/// gets the full circle, so no gap applies.
pub fn buffer_deg(num_players: usize) -> f64 {
    if num_players <= 1 {
        return 0.0;
    }
    (deg_per_player(num_players) / BUFFER_RATIO).trunc()
}

/// Center of a player's slice in degrees. Slice 0 is centered at the top of
/// the circle and slices proceed clockwise.
pub fn slice_center_deg(num_players: usize, player: usize) -> f64 {
    -90.0 + player as f64 * deg_per_player(num_players)
}

/// One player's angular bounds, before the global rotation origin is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceAngles {
    pub center_deg: f64,
    pub start_deg: f64,
    pub end_deg: f64,
}

pub fn slice_angles(num_players: usize, player: usize) -> SliceAngles {
    let base = deg_per_player(num_players);
    let buffer = buffer_deg(num_players);
    let center_deg = slice_center_deg(num_players, player);
    SliceAngles {
        center_deg,
        start_deg: center_deg - base / 2.0 + buffer,
        end_deg: center_deg + base / 2.0 - buffer,
    }
}

/// Whole-wheel rotation so the gap preceding slice 0, not the slice itself,
/// sits at 12 o'clock. Truncated to whole degrees like the buffer.
pub fn rotation_offset_deg(num_players: usize) -> f64 {
    (-90.0 - deg_per_player(num_players) / 2.0 - buffer_deg(num_players) / 2.0).trunc()
}

pub fn resolve_rotation(origin: RotationOrigin, num_players: usize) -> f64 {
    match origin {
        RotationOrigin::Auto => rotation_offset_deg(num_players),
        RotationOrigin::Fixed(deg) => deg,
    }
}

/// Pixel-space circle layout shared by every draw command in one render.
#[derive(Debug, Clone, Copy)]
pub struct WheelGeometry {
    pub cx: f64,
    pub cy: f64,
    pub outer_radius: f64,
    pub cutout_radius: f64,
    pub label_radius: f64,
}

impl WheelGeometry {
    pub fn new(config: &HeatMapConfig) -> Self {
        let size = config.image_size as f64;
        let buffer = config.circle_buffer as f64;
        let outer_radius = size / 2.0 - buffer;

        // The cutout inset is measured against a radius that only backs out
        // half the buffer, so the crust is slightly thinner than
        // slice_visible_pct of the drawn outer radius.
        let big_circle_radius = (size - (buffer / 2.0).trunc()) / 2.0;
        let cutout_radius = outer_radius - big_circle_radius * config.slice_visible_pct;

        let label_radius =
            outer_radius * (1.0 - config.slice_visible_pct / 2.0 - LABEL_RADIUS_TWEAK);

        Self {
            cx: size / 2.0,
            cy: size / 2.0,
            outer_radius,
            cutout_radius,
            label_radius,
        }
    }

    /// Anchor point for a label block centered on `angle_deg`.
    pub fn label_anchor(&self, angle_deg: f64) -> (f64, f64) {
        let rad = angle_deg.to_radians();
        (
            self.cx + rad.cos() * self.label_radius,
            self.cy + rad.sin() * self.label_radius,
        )
    }
}
