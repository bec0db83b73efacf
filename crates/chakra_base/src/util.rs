//! Shared angle helpers.

/// Width of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// Normalize an angle to [0, 360) degrees.
///
/// Equivalent to `((deg % 360) + 360) % 360`. The final guard folds the
/// `-tiny + 360.0 == 360.0` rounding case back to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}

/// 0-based rashi index (0 = Mesha) of an already-normalized longitude.
pub(crate) fn sign_index(normalized_deg: f64) -> u8 {
    ((normalized_deg / RASHI_SPAN).floor() as u8).min(11)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_positive() {
        assert!((normalize_360(45.0) - 45.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_large_negative() {
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-20);
        assert!((0.0..360.0).contains(&r), "got {r}");
    }

    #[test]
    fn sign_index_clamps() {
        assert_eq!(sign_index(0.0), 0);
        assert_eq!(sign_index(29.999), 0);
        assert_eq!(sign_index(30.0), 1);
        assert_eq!(sign_index(359.999), 11);
    }
}
