use crate::config::{Color, TiePolicy};

/// A player's standing within the batch, normalized against the batch's
/// min/max win rate. When every rate is identical the range is zero and the
/// tie policy decides the standing instead of dividing by zero.
pub fn standing(rates: &[f64], index: usize, policy: TiePolicy) -> f64 {
    let min = rates.iter().copied().fold(f64::INFINITY, f64::min);
    let max = rates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range == 0.0 {
        return match policy {
            TiePolicy::Neutral => 0.5,
            TiePolicy::Worst => 0.0,
        };
    }
    (rates[index] - min) / range
}

/// Linear per-channel interpolation between a worst and best reference color.
/// The multiply truncates toward zero instead of rounding, which biases
/// midpoint colors slightly toward `worst`.
pub fn interp_srgb(worst: Color, best: Color, percentage: f64) -> Color {
    let channel = |lo: u8, hi: u8| {
        let diff = hi as i32 - lo as i32;
        (lo as i32 + (diff as f64 * percentage) as i32) as u8
    };
    Color::new(
        channel(worst.r, best.r),
        channel(worst.g, best.g),
        channel(worst.b, best.b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORST: Color = Color::new(0xff, 0x00, 0x00);
    const BEST: Color = Color::new(0x00, 0xff, 0x00);

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(interp_srgb(WORST, BEST, 0.0), WORST);
        assert_eq!(interp_srgb(WORST, BEST, 1.0), BEST);
    }

    #[test]
    fn interpolation_truncates_toward_zero() {
        // 255 * 0.5 = 127.5 truncates to 127 on the rising channel, and
        // 255 - 127.5 = 127.5 -> 255 + (-127) = 128 on the falling one.
        let mid = interp_srgb(WORST, BEST, 0.5);
        assert_eq!(mid, Color::new(128, 127, 0));
    }

    #[test]
    fn channels_stay_between_the_references_across_the_domain() {
        for i in 0..=100 {
            let p = i as f64 / 100.0;
            let c = interp_srgb(Color::new(10, 250, 128), Color::new(240, 5, 128), p);
            assert!((10..=240).contains(&c.r), "r={} at p={p}", c.r);
            assert!((5..=250).contains(&c.g), "g={} at p={p}", c.g);
            assert_eq!(c.b, 128);
        }
    }

    #[test]
    fn standing_spans_the_batch_range() {
        let rates = [0.1, 0.2, 0.3, 0.4];
        assert_eq!(standing(&rates, 0, TiePolicy::Neutral), 0.0);
        assert_eq!(standing(&rates, 3, TiePolicy::Neutral), 1.0);
        assert!((standing(&rates, 1, TiePolicy::Neutral) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn tied_batch_follows_policy() {
        let rates = [0.25; 4];
        for i in 0..4 {
            assert_eq!(standing(&rates, i, TiePolicy::Neutral), 0.5);
            assert_eq!(standing(&rates, i, TiePolicy::Worst), 0.0);
        }
    }

    #[test]
    fn tied_batch_produces_defined_colors() {
        let rates = [0.25; 4];
        let p = standing(&rates, 2, TiePolicy::Neutral);
        let c = interp_srgb(WORST, BEST, p);
        assert_eq!(c, Color::new(128, 127, 0));
    }
}
