use bon::Builder;

/// Opaque RGB color for wedge fills and label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// RGBA color for the canvas background. Straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// What the color mapper does when every player has the same win rate and the
/// min/max standing range collapses to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TiePolicy {
    /// Every slice gets the midpoint color (standing 0.5).
    #[default]
    Neutral,
    /// Every slice gets the worst-reference color (standing 0.0).
    Worst,
}

/// Rotation applied once to the whole wheel before slice 0 is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum RotationOrigin {
    /// `trunc(-90 - degPerPlayer/2 - bufferDeg/2)` degrees, which centers the
    /// inter-slice gap at 12 o'clock.
    #[default]
    Auto,
    /// Fixed offset in degrees. `Fixed(0.0)` leaves slice 0 centered at top.
    Fixed(f64),
}

/// Fixed per-render configuration. Built once, never mutated during a render.
#[derive(Debug, Clone, Builder)]
pub struct HeatMapConfig {
    /// Image side length in pixels, both x and y.
    #[builder(default = 4096)]
    pub image_size: usize,

    /// Canvas background. Transparent so the donut cutout reads as a hole.
    #[builder(default = Rgba::new(0xff, 0xff, 0xff, 0x00))]
    pub background: Rgba,

    /// Empty pixels between each side of the image and the outer circle.
    #[builder(default = 500)]
    pub circle_buffer: usize,

    /// Fraction of the outer radius left visible as crust after the cutout.
    #[builder(default = 0.20)]
    pub slice_visible_pct: f64,

    #[builder(default = 72.0)]
    pub font_size: f32,

    /// Color of the lowest win rate in the batch.
    #[builder(default = Color::new(0xff, 0x00, 0x00))]
    pub worst_color: Color,

    /// Color of the highest win rate in the batch.
    #[builder(default = Color::new(0x00, 0xff, 0x00))]
    pub best_color: Color,

    #[builder(default = Color::new(0x00, 0x00, 0x00))]
    pub label_color: Color,

    #[builder(default)]
    pub tie_policy: TiePolicy,

    #[builder(default)]
    pub rotation_origin: RotationOrigin,
}

impl Default for HeatMapConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = HeatMapConfig::default();
        assert_eq!(config.image_size, 4096);
        assert_eq!(config.circle_buffer, 500);
        assert_eq!(config.background, Rgba::new(0xff, 0xff, 0xff, 0x00));
        assert_eq!(config.slice_visible_pct, 0.20);
        assert_eq!(config.worst_color, Color::new(0xff, 0x00, 0x00));
        assert_eq!(config.best_color, Color::new(0x00, 0xff, 0x00));
        assert_eq!(config.tie_policy, TiePolicy::Neutral);
        assert_eq!(config.rotation_origin, RotationOrigin::Auto);
    }

    #[test]
    fn builder_overrides_stick() {
        let config = HeatMapConfig::builder()
            .image_size(256)
            .tie_policy(TiePolicy::Worst)
            .rotation_origin(RotationOrigin::Fixed(0.0))
            .build();
        assert_eq!(config.image_size, 256);
        assert_eq!(config.tie_policy, TiePolicy::Worst);
        assert_eq!(config.rotation_origin, RotationOrigin::Fixed(0.0));
    }
}
