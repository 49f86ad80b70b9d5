//! Exponential atmosphere and speed of sound.

use enginuity_core::constants::{
    ATMOSPHERE_SCALE_HEIGHT_M, GAMMA_AIR, R_AIR_J_KG_K, SEA_LEVEL_DENSITY_KG_M3,
};
use enginuity_core::units::ft_to_m;

/// Air density (kg/m³) at `altitude_ft` using a single scale height.
pub fn density_kg_m3(altitude_ft: f64) -> f64 {
    SEA_LEVEL_DENSITY_KG_M3 * (-ft_to_m(altitude_ft) / ATMOSPHERE_SCALE_HEIGHT_M).exp()
}

/// Speed of sound (m/s) in dry air at `temperature_k`.
pub fn speed_of_sound_m_s(temperature_k: f64) -> f64 {
    (GAMMA_AIR * R_AIR_J_KG_K * temperature_k).sqrt()
}

/// True airspeed (m/s) for a Mach number at `temperature_k`.
pub fn mach_to_velocity_m_s(mach: f64, temperature_k: f64) -> f64 {
    mach * speed_of_sound_m_s(temperature_k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_values() {
        assert_eq!(density_kg_m3(0.0), SEA_LEVEL_DENSITY_KG_M3);
        assert!((speed_of_sound_m_s(288.15) - 340.26).abs() < 0.05);
    }

    #[test]
    fn density_decays_by_e_per_scale_height() {
        let feet = ATMOSPHERE_SCALE_HEIGHT_M / 0.3048;
        let ratio = density_kg_m3(feet) / SEA_LEVEL_DENSITY_KG_M3;
        assert!((ratio - (-1.0_f64).exp()).abs() < 1e-12);
    }
}
