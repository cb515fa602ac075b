//! Unit conversion utilities.
//!
//! DrawingML positions and sizes are expressed in English Metric Units (EMU).
//! Deck layouts are authored in inches and font sizes in points; these helpers
//! convert between them.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Hundredths of a point, the unit of `sz` on DrawingML run properties.
pub const CENTIPOINTS_PER_PT: f64 = 100.0;

/// Convert inches to EMUs, rounding to the nearest unit.
#[inline]
pub fn inches(value: f64) -> i64 {
    (value * EMUS_PER_INCH as f64).round() as i64
}

/// Convert points to EMUs, rounding to the nearest unit.
#[inline]
pub fn pt(value: f64) -> i64 {
    (value * EMUS_PER_PT as f64).round() as i64
}

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

/// Font size in points to the `sz` attribute value.
#[inline]
pub fn pt_to_centipoints(size: f64) -> u32 {
    (size * CENTIPOINTS_PER_PT).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_slide_size() {
        assert_eq!(inches(10.0), 9_144_000);
        assert_eq!(inches(7.5), 6_858_000);
    }

    #[test]
    fn test_fractional_inches_round() {
        // 3.2in and 0.85in come up in the architecture layout
        assert_eq!(inches(3.2), 2_926_080);
        assert_eq!(inches(0.05), 45_720);
        assert_eq!(inches(2.0 + 0.85), 2_606_040);
    }

    #[test]
    fn test_points() {
        assert_eq!(pt(2.0), 25_400);
        assert_eq!(pt_to_centipoints(72.0), 7200);
        assert_eq!(pt_to_centipoints(12.0), 1200);
    }

    #[test]
    fn test_emu_back_to_inches() {
        assert!((emu_to_inches(inches(4.5)) - 4.5).abs() < f64::EPSILON);
    }
}
