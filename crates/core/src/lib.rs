//! Core units, constants, and shared primitives for the Enginuity workspace.

pub mod error;

pub use error::{DomainError, DomainResult};

/// Physical constants. Orbital quantities are in km and km/s; the aero and
/// plasma models work in SI unless stated otherwise.
pub mod constants {
    /// Earth gravitational parameter (km³/s²).
    pub const MU_EARTH_KM3_S2: f64 = 398_600.441_8;
    /// Mean Earth radius (km).
    pub const EARTH_RADIUS_KM: f64 = 6_371.0;
    /// Seconds per minute.
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Ratio of specific heats for dry air.
    pub const GAMMA_AIR: f64 = 1.4;
    /// Specific gas constant for dry air (J/(kg·K)).
    pub const R_AIR_J_KG_K: f64 = 287.0;
    /// Sea-level air density (kg/m³).
    pub const SEA_LEVEL_DENSITY_KG_M3: f64 = 1.225;
    /// Density scale height of the exponential atmosphere (m).
    pub const ATMOSPHERE_SCALE_HEIGHT_M: f64 = 8_400.0;
    /// Dynamic viscosity of air near sea level (kg/(m·s)).
    pub const AIR_VISCOSITY_KG_M_S: f64 = 1.789e-5;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Metres per international foot.
    pub const METRES_PER_FOOT: f64 = 0.3048;

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v * std::f64::consts::PI / 180.0
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v * 180.0 / std::f64::consts::PI
    }

    /// Convert feet to metres.
    #[inline]
    pub fn ft_to_m(v: f64) -> f64 {
        v * METRES_PER_FOOT
    }

    /// Convert seconds to minutes.
    #[inline]
    pub fn seconds_to_minutes(v: f64) -> f64 {
        v / super::constants::SECONDS_PER_MINUTE
    }
}

/// Number formatting shared by reports.
pub mod display {
    /// Fixed-point text with `digits` decimals. Exact binary ties round away
    /// from zero, as the dashboard's `toFixed` does (`0.125` gives `"0.13"`).
    pub fn to_fixed(value: f64, digits: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let sign = if value < 0.0 { "-" } else { "" };
        let magnitude = value.abs();
        let rounded = if is_decimal_tie(magnitude, digits) {
            // Next representable value above the tie.
            f64::from_bits(magnitude.to_bits() + 1)
        } else {
            magnitude
        };
        format!("{sign}{rounded:.digits$}")
    }

    /// Whether the exact decimal expansion of `magnitude` ends in a single 5
    /// right after `digits` decimals.
    fn is_decimal_tie(magnitude: f64, digits: usize) -> bool {
        // A finite f64 has at most 1074 fractional decimal digits.
        let exact = format!("{magnitude:.1074}");
        let Some((_, fraction)) = exact.split_once('.') else {
            return false;
        };
        let Some(tail) = fraction.get(digits..) else {
            return false;
        };
        let mut tail = tail.chars();
        tail.next() == Some('5') && tail.all(|c| c == '0')
    }
}

#[cfg(test)]
mod tests {
    use super::display::to_fixed;
    use super::units::*;

    #[test]
    fn angle_conversions_invert() {
        assert!((rad_to_deg(deg_to_rad(28.5)) - 28.5).abs() < 1e-12);
        assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn feet_and_minutes() {
        assert!((ft_to_m(35_000.0) - 10_668.0).abs() < 1e-9);
        assert_eq!(seconds_to_minutes(90.0), 1.5);
    }

    #[test]
    fn fixed_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(1.125, 2), "1.13");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn fixed_non_ties_match_plain_formatting() {
        // 2.675 is stored just below the tie.
        assert_eq!(to_fixed(2.675, 2), "2.67");
        assert_eq!(to_fixed(2.2386, 2), "2.24");
        assert_eq!(to_fixed(1.0, 2), "1.00");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
    }
}
