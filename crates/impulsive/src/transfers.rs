//! Analytic estimators for impulsive transfers in the coplanar, circular limit.
//!
//! Returns signed burn components and the half-period time of flight for
//! two-body Keplerian motion about a central body with gravitational parameter `mu`.

use enginuity_core::DomainResult;
use enginuity_core::constants::MU_EARTH_KM3_S2;
use enginuity_core::error::ensure_positive;
use enginuity_core::units::seconds_to_minutes;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Propellant mass booked per km/s of total delta-v by the dashboard estimate.
pub const FUEL_MASS_KG_PER_KM_S: f64 = 100.0;

/// Pair of circular orbit radii about Earth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub initial_radius_km: f64,
    pub target_radius_km: f64,
}

impl TransferRequest {
    pub fn evaluate(&self) -> DomainResult<TransferResult> {
        compute_hohmann_transfer(self.initial_radius_km, self.target_radius_km)
    }
}

/// Result for a Hohmann transfer between circular, coplanar orbits of radii r1 and r2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResult {
    /// km/s, signed: negative for an inward (retro) burn.
    pub delta_v1: f64,
    /// km/s, signed: negative for retro capture when arriving inward.
    pub delta_v2: f64,
    /// |dv1| + |dv2|.
    pub total_delta_v: f64,
    pub time_of_flight_min: f64,
    pub transfer_semi_major_axis_km: f64,
    pub initial_velocity_km_s: f64,
    pub final_velocity_km_s: f64,
    pub fuel_mass_kg: f64,
}

/// Hohmann transfer about Earth.
pub fn compute_hohmann_transfer(r1_km: f64, r2_km: f64) -> DomainResult<TransferResult> {
    hohmann(r1_km, r2_km, MU_EARTH_KM3_S2)
}

/// Compute the classical Hohmann transfer between two circular coplanar orbits.
///
/// Inputs:
/// - `r1_km`: initial circular orbit radius (km)
/// - `r2_km`: target circular orbit radius (km)
/// - `mu_km3_s2`: gravitational parameter of central body (km^3/s^2)
///
/// Equal radii give a degenerate transfer with zero burns.
pub fn hohmann(r1_km: f64, r2_km: f64, mu_km3_s2: f64) -> DomainResult<TransferResult> {
    ensure_positive("initial_radius_km", r1_km)?;
    ensure_positive("target_radius_km", r2_km)?;
    ensure_positive("mu_km3_s2", mu_km3_s2)?;

    let v1 = (mu_km3_s2 / r1_km).sqrt();
    let v2 = (mu_km3_s2 / r2_km).sqrt();
    let sum = r1_km + r2_km;

    // Transfer periapsis speed (at r1) and apoapsis speed (at r2)
    let v_t1 = (2.0 * mu_km3_s2 * r2_km / (r1_km * sum)).sqrt();
    let v_t2 = (2.0 * mu_km3_s2 * r1_km / (r2_km * sum)).sqrt();

    let dv1 = v_t1 - v1;
    let dv2 = v2 - v_t2;
    let dv_total = dv1.abs() + dv2.abs();
    let tof_s = std::f64::consts::PI * (sum.powi(3) / (8.0 * mu_km3_s2)).sqrt();

    debug!(r1_km, r2_km, dv_total, "hohmann transfer");

    Ok(TransferResult {
        delta_v1: dv1,
        delta_v2: dv2,
        total_delta_v: dv_total,
        time_of_flight_min: seconds_to_minutes(tof_s),
        transfer_semi_major_axis_km: 0.5 * sum,
        initial_velocity_km_s: v1,
        final_velocity_km_s: v2,
        fuel_mass_kg: dv_total * FUEL_MASS_KG_PER_KM_S,
    })
}
