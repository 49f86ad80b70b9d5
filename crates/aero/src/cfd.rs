//! Closed-form subsonic aerodynamic estimate used when no solver is available.
//!
//! Lift uses the Prandtl-Glauert compressibility correction, which diverges at
//! `M = 1`; the estimate is therefore limited to `0 <= M < 1`.

use enginuity_core::DomainResult;
use enginuity_core::constants::AIR_VISCOSITY_KG_M_S;
use enginuity_core::error::{ensure_finite, ensure_half_open, ensure_positive};
use enginuity_core::units::deg_to_rad;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::atmosphere::{density_kg_m3, mach_to_velocity_m_s};

/// Zero-lift drag coefficient.
pub const CD0: f64 = 0.02;
/// Induced drag factor.
pub const INDUCED_DRAG_FACTOR: f64 = 0.05;
/// Reference length for the Reynolds number (m).
pub const REFERENCE_LENGTH_M: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightConditions {
    pub mach: f64,
    pub altitude_ft: f64,
    pub angle_of_attack_deg: f64,
    pub temperature_k: f64,
    pub pressure_pa: f64,
}

impl Default for FlightConditions {
    /// Cruise point the AeroIQ panel opens with.
    fn default() -> Self {
        Self {
            mach: 0.8,
            altitude_ft: 35_000.0,
            angle_of_attack_deg: 5.0,
            temperature_k: 288.15,
            pressure_pa: 101_325.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfdResult {
    pub mach_number: f64,
    pub dynamic_pressure_pa: f64,
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
    pub lift_to_drag_ratio: f64,
    pub reynolds_number: f64,
}

pub fn compute_cfd(conditions: &FlightConditions) -> DomainResult<CfdResult> {
    let mach = ensure_half_open("mach", conditions.mach, 0.0, 1.0)?;
    let temperature = ensure_positive("temperature_k", conditions.temperature_k)?;
    ensure_finite("altitude_ft", conditions.altitude_ft)?;
    ensure_finite("angle_of_attack_deg", conditions.angle_of_attack_deg)?;

    let rho = density_kg_m3(conditions.altitude_ft);
    let velocity = mach_to_velocity_m_s(mach, temperature);
    let alpha = deg_to_rad(conditions.angle_of_attack_deg);

    let lift = lift_coefficient(alpha, mach);
    let drag = drag_coefficient(alpha, mach);
    let reynolds = rho * velocity * REFERENCE_LENGTH_M / AIR_VISCOSITY_KG_M_S;

    debug!(mach, alpha, lift, drag, "cfd estimate");

    Ok(CfdResult {
        mach_number: mach,
        dynamic_pressure_pa: 0.5 * rho * velocity * velocity,
        lift_coefficient: lift,
        drag_coefficient: drag,
        lift_to_drag_ratio: lift / drag,
        reynolds_number: reynolds,
    })
}

/// Thin-airfoil lift slope with compressibility correction and a mild
/// high-Mach taper. `alpha` in radians.
pub fn lift_coefficient(alpha: f64, mach: f64) -> f64 {
    let cl_alpha = 2.0 * std::f64::consts::PI / (1.0 - mach * mach).sqrt();
    cl_alpha * alpha * (1.0 - 0.1 * mach)
}

/// Parabolic drag polar plus a wave-drag term past Mach 1. `alpha` in radians.
pub fn drag_coefficient(alpha: f64, mach: f64) -> f64 {
    let wave = if mach > 1.0 { 0.1 * (mach - 1.0) } else { 0.0 };
    CD0 + INDUCED_DRAG_FACTOR * alpha * alpha + wave
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_speed_lift_matches_thin_airfoil() {
        let result = compute_cfd(&FlightConditions {
            mach: 0.0,
            ..FlightConditions::default()
        })
        .unwrap();
        let alpha = 5.0_f64.to_radians();
        assert!((result.lift_coefficient - 2.0 * std::f64::consts::PI * alpha).abs() < 1e-12);
        assert_eq!(result.dynamic_pressure_pa, 0.0);
        assert_eq!(result.reynolds_number, 0.0);
    }

    #[test]
    fn cruise_point_is_plausible() {
        let result = compute_cfd(&FlightConditions::default()).unwrap();
        assert!(result.lift_coefficient > 0.8 && result.lift_coefficient < 0.9);
        let expected_cd = 0.02 + 0.05 * 5.0_f64.to_radians().powi(2);
        assert!((result.drag_coefficient - expected_cd).abs() < 1e-12);
        assert!(result.lift_to_drag_ratio > 30.0);
        assert!(result.reynolds_number > 1.0e6);
        assert!(result.dynamic_pressure_pa > 0.0);
    }

    #[test]
    fn transonic_and_bad_temperature_rejected() {
        let sonic = FlightConditions {
            mach: 1.0,
            ..FlightConditions::default()
        };
        assert_eq!(compute_cfd(&sonic).unwrap_err().parameter(), "mach");
        let frozen = FlightConditions {
            temperature_k: 0.0,
            ..FlightConditions::default()
        };
        assert_eq!(
            compute_cfd(&frozen).unwrap_err().parameter(),
            "temperature_k"
        );
    }

    #[test]
    fn wave_drag_only_past_mach_one() {
        assert_eq!(drag_coefficient(0.0, 0.9), CD0);
        assert!((drag_coefficient(0.0, 1.5) - (CD0 + 0.05)).abs() < 1e-12);
    }
}
