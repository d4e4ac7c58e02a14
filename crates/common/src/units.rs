//! Device-independent distance conversion.
//!
//! Swipe thresholds are configured in density-independent pixels (dp) so a
//! gesture feels the same on every screen. The dispatcher only ever sees raw
//! pixels; callers convert with [`dip_to_pixels`] before construction.

/// Convert a dp distance to physical pixels for the given display density
/// (pixels per dp).
pub fn dip_to_pixels(dp: f64, density: f64) -> f64 {
    dp * density
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dip_to_pixels_scales_by_density() {
        assert!((dip_to_pixels(10.0, 2.75) - 27.5).abs() < 1e-9);
        assert_eq!(dip_to_pixels(1.0, 1.0), 1.0);
    }
}
