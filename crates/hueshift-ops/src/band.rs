//! Hue band selection.
//!
//! A [`HueBand`] is the inclusive range of hue values selected for
//! transformation, centered on a target hue with a given half-width and
//! clamped to `[0, 180]`.
//!
//! The band is clamped, never wrapped, at the circular boundary: a
//! target near 0 or 180 produces a one-sided band rather than one that
//! wraps around the hue circle. This asymmetry is intentional and
//! matches the established output of the tool.

use hueshift_core::HUE_SCALE;

/// An inclusive range of hue values on the `[0, 180]` scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueBand {
    /// Inclusive lower bound, `>= 0`.
    pub lower: u8,
    /// Inclusive upper bound, `<= 180`.
    pub upper: u8,
}

impl HueBand {
    /// Builds the band `[max(0, h - x), min(180, h + x)]` where
    /// `h = target_hue mod 180` (Euclidean, so negative targets
    /// normalize into range).
    ///
    /// # Example
    ///
    /// ```
    /// use hueshift_ops::HueBand;
    ///
    /// let band = HueBand::centered(0, 10);
    /// assert_eq!((band.lower, band.upper), (0, 10));
    ///
    /// // Normalization: 190 mod 180 == 10
    /// let band = HueBand::centered(190, 5);
    /// assert_eq!((band.lower, band.upper), (5, 15));
    /// ```
    pub fn centered(target_hue: i32, half_width: u32) -> Self {
        let h = target_hue.rem_euclid(HUE_SCALE as i32);
        let x = half_width.min(HUE_SCALE as u32) as i32;
        let lower = (h - x).clamp(0, HUE_SCALE as i32);
        let upper = (h + x).clamp(0, HUE_SCALE as i32);
        Self {
            lower: lower as u8,
            upper: upper as u8,
        }
    }

    /// Returns `true` if the hue falls inside the band (inclusive).
    #[inline]
    pub fn contains(&self, hue: u8) -> bool {
        hue >= self.lower && hue <= self.upper
    }

    /// Number of hue values covered by the band.
    #[inline]
    pub fn width(&self) -> u8 {
        self.upper - self.lower + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_basic() {
        let band = HueBand::centered(90, 10);
        assert_eq!((band.lower, band.upper), (80, 100));
    }

    #[test]
    fn test_clamped_at_low_edge() {
        let band = HueBand::centered(5, 10);
        assert_eq!((band.lower, band.upper), (0, 15));
        assert!(band.contains(0));
        // No wrap: hues near 180 stay out
        assert!(!band.contains(175));
    }

    #[test]
    fn test_clamped_at_high_edge() {
        let band = HueBand::centered(175, 10);
        assert_eq!((band.lower, band.upper), (165, 180));
        assert!(band.contains(179));
        assert!(!band.contains(0));
    }

    #[test]
    fn test_zero_half_width_selects_single_hue() {
        let band = HueBand::centered(45, 0);
        assert_eq!((band.lower, band.upper), (45, 45));
        assert!(band.contains(45));
        assert!(!band.contains(44));
        assert!(!band.contains(46));
    }

    #[test]
    fn test_target_normalization() {
        assert_eq!(HueBand::centered(180, 10), HueBand::centered(0, 10));
        assert_eq!(HueBand::centered(-30, 5), HueBand::centered(150, 5));
        assert_eq!(HueBand::centered(365, 5), HueBand::centered(5, 5));
    }

    #[test]
    fn test_oversized_half_width_covers_full_scale() {
        let band = HueBand::centered(90, 400);
        assert_eq!((band.lower, band.upper), (0, 180));
        assert_eq!(band.width(), 181);
    }
}
