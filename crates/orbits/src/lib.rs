//! Orbit utility helpers: sample a Keplerian ellipse in its plane and derive
//! the scalar quantities shown next to the trace.
//!
//! The inclination handling is a projection, not a rotation: the 2D trace
//! keeps `y·cos(i)` and drops the out-of-plane part, which only the 3D variant
//! reports as `z = y·sin(i)`.

use enginuity_core::DomainError;
use enginuity_core::DomainResult;
use enginuity_core::constants::{EARTH_RADIUS_KM, MU_EARTH_KM3_S2};
use enginuity_core::error::{ensure_finite, ensure_half_open, ensure_positive};
use enginuity_core::units::{deg_to_rad, seconds_to_minutes};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Samples per revolution used when the caller does not ask for a count.
pub const DEFAULT_SAMPLES: usize = 360;

/// Shape and tilt of an Earth orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalElements {
    pub semi_major_axis_km: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
}

impl OrbitalElements {
    /// Build validated elements: `a > 0`, `0 <= e < 1`, finite inclination.
    pub fn new(
        semi_major_axis_km: f64,
        eccentricity: f64,
        inclination_deg: f64,
    ) -> DomainResult<Self> {
        let elements = Self {
            semi_major_axis_km,
            eccentricity,
            inclination_deg,
        };
        elements.validate()?;
        Ok(elements)
    }

    pub fn validate(&self) -> DomainResult<()> {
        ensure_positive("semi_major_axis_km", self.semi_major_axis_km)?;
        ensure_half_open("eccentricity", self.eccentricity, 0.0, 1.0)?;
        ensure_finite("inclination_deg", self.inclination_deg)?;
        Ok(())
    }

    /// Farthest distance from the focus (km).
    pub fn apoapsis_km(&self) -> f64 {
        self.semi_major_axis_km * (1.0 + self.eccentricity)
    }

    /// Closest distance from the focus (km).
    pub fn periapsis_km(&self) -> f64 {
        self.semi_major_axis_km * (1.0 - self.eccentricity)
    }

    /// Keplerian period about Earth in minutes.
    pub fn period_min(&self) -> f64 {
        period_minutes(self.semi_major_axis_km, MU_EARTH_KM3_S2)
    }

    /// Conic radius at true anomaly `theta` (radians).
    pub fn radius_at(&self, theta: f64) -> f64 {
        let e = self.eccentricity;
        self.semi_major_axis_km * (1.0 - e * e) / (1.0 + e * theta.cos())
    }
}

/// Sampled planar orbit plus its scalar parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitEphemeris {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub apoapsis_km: f64,
    pub periapsis_km: f64,
    pub orbital_period_min: f64,
    pub elements: OrbitalElements,
}

impl OrbitEphemeris {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Sampled orbit with the synthesized out-of-plane component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitEphemeris3d {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub apoapsis_km: f64,
    pub periapsis_km: f64,
    pub orbital_period_min: f64,
    pub elements: OrbitalElements,
}

/// Scalar view of an orbit as the dashboard's "orbital" analysis reports it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitSummary {
    pub orbital_period_min: f64,
    pub orbital_velocity_km_s: f64,
    pub apogee_altitude_km: f64,
    pub perigee_altitude_km: f64,
    pub specific_energy_km2_s2: f64,
    pub elements: OrbitalElements,
}

struct PlanarSamples {
    x: Vec<f64>,
    y_raw: Vec<f64>,
}

fn sample_plane(elements: &OrbitalElements, num_points: usize) -> DomainResult<PlanarSamples> {
    if num_points == 0 {
        return Err(DomainError::invalid("num_points", 0.0, "sample count must be positive"));
    }
    let step = 2.0 * std::f64::consts::PI / num_points as f64;
    let mut x = Vec::with_capacity(num_points);
    let mut y_raw = Vec::with_capacity(num_points);
    for i in 0..num_points {
        let theta = i as f64 * step;
        let r = elements.radius_at(theta);
        x.push(r * theta.cos());
        y_raw.push(r * theta.sin());
    }
    Ok(PlanarSamples { x, y_raw })
}

/// Sample `num_points` positions of the orbit in its (projected) plane.
pub fn compute_orbit(
    semi_major_axis_km: f64,
    eccentricity: f64,
    inclination_deg: f64,
    num_points: usize,
) -> DomainResult<OrbitEphemeris> {
    let elements = OrbitalElements::new(semi_major_axis_km, eccentricity, inclination_deg)?;
    let samples = sample_plane(&elements, num_points)?;
    let cos_i = deg_to_rad(inclination_deg).cos();
    let y = samples.y_raw.iter().map(|v| v * cos_i).collect();

    debug!(
        a_km = semi_major_axis_km,
        e = eccentricity,
        samples = num_points,
        "sampled planar orbit"
    );

    Ok(OrbitEphemeris {
        x: samples.x,
        y,
        apoapsis_km: elements.apoapsis_km(),
        periapsis_km: elements.periapsis_km(),
        orbital_period_min: elements.period_min(),
        elements,
    })
}

/// Like [`compute_orbit`] but keeps the out-of-plane component as `z`.
pub fn compute_orbit_3d(
    semi_major_axis_km: f64,
    eccentricity: f64,
    inclination_deg: f64,
    num_points: usize,
) -> DomainResult<OrbitEphemeris3d> {
    let elements = OrbitalElements::new(semi_major_axis_km, eccentricity, inclination_deg)?;
    let samples = sample_plane(&elements, num_points)?;
    let incl = deg_to_rad(inclination_deg);
    let (sin_i, cos_i) = incl.sin_cos();
    let y = samples.y_raw.iter().map(|v| v * cos_i).collect();
    let z = samples.y_raw.iter().map(|v| v * sin_i).collect();

    debug!(
        a_km = semi_major_axis_km,
        e = eccentricity,
        samples = num_points,
        "sampled 3d orbit"
    );

    Ok(OrbitEphemeris3d {
        x: samples.x,
        y,
        z,
        apoapsis_km: elements.apoapsis_km(),
        periapsis_km: elements.periapsis_km(),
        orbital_period_min: elements.period_min(),
        elements,
    })
}

/// Period, circular speed at `a`, apsis altitudes above the mean Earth radius
/// and specific orbital energy.
pub fn summarize_orbit(elements: &OrbitalElements) -> DomainResult<OrbitSummary> {
    elements.validate()?;
    let a = elements.semi_major_axis_km;
    Ok(OrbitSummary {
        orbital_period_min: elements.period_min(),
        orbital_velocity_km_s: (MU_EARTH_KM3_S2 / a).sqrt(),
        apogee_altitude_km: elements.apoapsis_km() - EARTH_RADIUS_KM,
        perigee_altitude_km: elements.periapsis_km() - EARTH_RADIUS_KM,
        specific_energy_km2_s2: -MU_EARTH_KM3_S2 / (2.0 * a),
        elements: *elements,
    })
}

/// Keplerian period in minutes for semi-major axis `a_km` about `mu_km3_s2`.
pub fn period_minutes(a_km: f64, mu_km3_s2: f64) -> f64 {
    seconds_to_minutes(2.0 * std::f64::consts::PI * (a_km.powi(3) / mu_km3_s2).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_orbit_has_constant_radius() {
        let eph = compute_orbit(7_000.0, 0.0, 0.0, 72).unwrap();
        for (x, y) in eph.x.iter().zip(&eph.y) {
            assert!(((x * x + y * y).sqrt() - 7_000.0).abs() < 1e-9);
        }
    }

    #[test]
    fn first_sample_sits_at_periapsis() {
        let eph = compute_orbit(10_000.0, 0.3, 45.0, DEFAULT_SAMPLES).unwrap();
        assert!((eph.x[0] - eph.periapsis_km).abs() < 1e-9);
        assert_eq!(eph.y[0], 0.0);
        // Sample 180 of 360 is theta = pi, the apoapsis side.
        assert!((eph.x[180] + eph.apoapsis_km).abs() < 1e-6);
    }

    #[test]
    fn inclination_projects_y_only() {
        let flat = compute_orbit(8_000.0, 0.1, 0.0, 36).unwrap();
        let tilted = compute_orbit(8_000.0, 0.1, 60.0, 36).unwrap();
        assert_eq!(flat.x, tilted.x);
        for (a, b) in flat.y.iter().zip(&tilted.y) {
            assert!((a * 0.5 - b).abs() < 1e-9);
        }
    }

    #[test]
    fn leo_period_is_about_ninety_seven_minutes() {
        let eph = compute_orbit(7_000.0, 0.1, 28.5, 4).unwrap();
        assert!(
            (eph.orbital_period_min - 97.14).abs() < 0.05,
            "{}",
            eph.orbital_period_min
        );
    }

    #[test]
    fn rejects_open_orbits_and_bad_axes() {
        assert!(compute_orbit(7_000.0, 1.0, 0.0, 360).is_err());
        assert!(compute_orbit(7_000.0, -0.01, 0.0, 360).is_err());
        assert!(compute_orbit(0.0, 0.1, 0.0, 360).is_err());
        assert!(compute_orbit(-7_000.0, 0.1, 0.0, 360).is_err());
        assert!(compute_orbit(7_000.0, 0.1, f64::NAN, 360).is_err());
        assert!(compute_orbit(7_000.0, 0.1, 0.0, 0).is_err());
    }

    #[test]
    fn three_d_components_recombine() {
        let eph = compute_orbit_3d(9_000.0, 0.2, 30.0, 90).unwrap();
        let flat = compute_orbit(9_000.0, 0.2, 0.0, 90).unwrap();
        for i in 0..90 {
            let planar = eph.y[i].hypot(eph.z[i]);
            assert!((planar - flat.y[i].abs()).abs() < 1e-9);
        }
    }

    #[test]
    fn summary_altitudes_subtract_earth_radius() {
        let elements = OrbitalElements::new(7_000.0, 0.1, 28.5).unwrap();
        let summary = summarize_orbit(&elements).unwrap();
        assert!((summary.apogee_altitude_km - (7_700.0 - EARTH_RADIUS_KM)).abs() < 1e-9);
        assert!((summary.perigee_altitude_km - (6_300.0 - EARTH_RADIUS_KM)).abs() < 1e-9);
        assert!((summary.orbital_velocity_km_s - 7.546).abs() < 1e-3);
        assert!(summary.specific_energy_km2_s2 < 0.0);
    }
}
