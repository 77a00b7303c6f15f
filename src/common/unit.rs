//! Length units.
//!
//! DrawingML positions and sizes are integer EMUs (English Metric Units).
//! Conversions from inches truncate toward zero.

/// A length in English Metric Units.
pub type Emu = i64;

pub const EMUS_PER_INCH: i64 = 914_400;

/// Convert inches to EMUs.
#[inline]
pub fn inches(value: f64) -> Emu {
    (value * EMUS_PER_INCH as f64) as i64
}

/// Convert points to the hundredths-of-a-point used by `sz` and `spcPts`.
#[inline]
pub fn centipoints(points: f64) -> u32 {
    (points * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_truncate() {
        assert_eq!(inches(1.0), 914_400);
        assert_eq!(inches(7.5), 6_858_000);
        // 13.333 * 914400 = 12191695.2
        assert_eq!(inches(13.333), 12_191_695);
    }

    #[test]
    fn test_centipoints() {
        assert_eq!(centipoints(54.0), 5400);
        assert_eq!(centipoints(13.5), 1350);
    }
}
