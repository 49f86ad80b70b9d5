//! Stability screening for a proposed operating point.

use enginuity_core::DomainResult;
use enginuity_core::error::{ensure_finite, ensure_positive};
use serde::{Deserialize, Serialize};

/// Scores below this are flagged as marginally stable.
pub const MIN_STABILITY_SCORE: f64 = 0.5;
/// Neutron flux (n/(m²·s)) above which wall degradation is flagged.
pub const MAX_NEUTRON_FLUX: f64 = 1.0e14;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StabilityInputs {
    pub beta_ratio: f64,
    pub safety_factor: f64,
    pub neutron_flux: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StabilityReport {
    pub stability_score: f64,
    pub recommendations: Vec<String>,
}

impl StabilityReport {
    pub fn is_nominal(&self) -> bool {
        self.recommendations.is_empty()
    }
}

pub fn diagnose(inputs: &StabilityInputs) -> DomainResult<StabilityReport> {
    ensure_finite("beta_ratio", inputs.beta_ratio)?;
    ensure_positive("safety_factor", inputs.safety_factor)?;
    ensure_finite("neutron_flux", inputs.neutron_flux)?;

    let stability_score = inputs.beta_ratio / inputs.safety_factor;
    let mut recommendations = Vec::new();
    if stability_score < MIN_STABILITY_SCORE {
        recommendations
            .push("Plasma stability is low. Adjust magnetic field strength.".to_string());
    }
    if inputs.neutron_flux > MAX_NEUTRON_FLUX {
        recommendations
            .push("Excessive neutron flux detected. Material degradation risk.".to_string());
    }

    Ok(StabilityReport {
        stability_score,
        recommendations,
    })
}
