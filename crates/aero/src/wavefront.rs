//! Supersonic wavefront (Mach cone) relations.
//!
//! Every relation here is only defined for `M >= 1`; `asin(1/M)` has no real
//! value below that, so subsonic input is an error rather than NaN.

use enginuity_core::DomainError;
use enginuity_core::DomainResult;
use enginuity_core::error::{ensure_at_least, ensure_finite};
use enginuity_core::units::{deg_to_rad, rad_to_deg};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WavefrontResult {
    pub mach: f64,
    pub altitude_ft: f64,
    /// Mach angle, half-angle of the shock cone (deg).
    pub wavefront_angle: f64,
    /// Isentropic stagnation-to-static pressure ratio (gamma = 1.4).
    pub pressure_ratio: f64,
    pub shock_strength: f64,
    /// Boom intensity index (dB-like scale).
    pub sonic_boom_intensity: f64,
}

/// Shock-cone quantities at `mach`; `altitude_ft` is carried through.
pub fn compute_wavefront(mach: f64, altitude_ft: f64) -> DomainResult<WavefrontResult> {
    ensure_at_least("mach", mach, 1.0)?;
    ensure_finite("altitude_ft", altitude_ft)?;

    let wavefront_angle = rad_to_deg((1.0 / mach).asin());
    let pressure_ratio = (1.0 + 0.2 * mach * mach).powf(3.5);
    let excess = mach - 1.0;

    debug!(mach, altitude_ft, wavefront_angle, "wavefront");

    Ok(WavefrontResult {
        mach,
        altitude_ft,
        wavefront_angle,
        pressure_ratio,
        shock_strength: excess * 100.0,
        sonic_boom_intensity: excess.powi(2) * 50.0,
    })
}

/// Linearised (Ackeret) pressure coefficient on a thin surface at angle of
/// attack `angle_of_attack_deg`. Requires strictly supersonic flow.
pub fn ackeret_pressure_coefficient(mach: f64, angle_of_attack_deg: f64) -> DomainResult<f64> {
    ensure_finite("mach", mach)?;
    ensure_finite("angle_of_attack_deg", angle_of_attack_deg)?;
    if mach <= 1.0 {
        return Err(DomainError::invalid("mach", mach, "Ackeret theory needs supersonic flow"));
    }
    Ok(2.0 * deg_to_rad(angle_of_attack_deg) / (mach * mach - 1.0).sqrt())
}
