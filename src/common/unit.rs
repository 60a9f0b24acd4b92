//! Unit conversion utilities.
//!
//! PresentationML measures geometry in EMUs (English Metric Units).

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_PT: i64 = 12_700;

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_inches() {
        assert_eq!(inches_to_emu(10.0), 9_144_000);
        assert_eq!(inches_to_emu(7.5), 6_858_000);
        assert_eq!(inches_to_emu(1.0 / 72.0), EMUS_PER_PT);
    }
}
