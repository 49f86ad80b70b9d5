//! Internal (pipe) flow estimates for the FlowCore panel.

use enginuity_core::DomainResult;
use enginuity_core::error::{ensure_finite, ensure_positive};
use serde::{Deserialize, Serialize};

pub const LAMINAR_LIMIT: f64 = 2_300.0;
pub const TURBULENT_ONSET: f64 = 4_000.0;
/// Prandtl number of air, held constant.
pub const AIR_PRANDTL: f64 = 0.7;
/// Fully developed laminar Nusselt number at constant wall temperature.
pub const LAMINAR_NUSSELT: f64 = 3.66;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    pub fn classify(reynolds_number: f64) -> Self {
        if reynolds_number < LAMINAR_LIMIT {
            FlowRegime::Laminar
        } else if reynolds_number > TURBULENT_ONSET {
            FlowRegime::Turbulent
        } else {
            FlowRegime::Transitional
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipeFlow {
    pub reynolds_number: f64,
    pub temperature_k: f64,
    pub pressure_pa: f64,
    pub velocity_m_s: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowResult {
    pub flow_regime: FlowRegime,
    pub friction_factor: f64,
    pub heat_transfer_coefficient: f64,
    pub pressure_drop: f64,
    pub nusselt_number: f64,
    pub prandtl_number: f64,
    pub efficiency: f64,
}

pub fn compute_flow(flow: &PipeFlow) -> DomainResult<FlowResult> {
    let re = ensure_positive("reynolds_number", flow.reynolds_number)?;
    let pressure = ensure_positive("pressure_pa", flow.pressure_pa)?;
    let velocity = ensure_finite("velocity_m_s", flow.velocity_m_s)?;
    ensure_finite("temperature_k", flow.temperature_k)?;

    let friction_factor = friction_factor(re);
    let nusselt = nusselt_number(re, AIR_PRANDTL);
    let pressure_drop = friction_factor * velocity * velocity / 2.0;

    Ok(FlowResult {
        flow_regime: FlowRegime::classify(re),
        friction_factor,
        heat_transfer_coefficient: nusselt,
        pressure_drop,
        nusselt_number: nusselt,
        prandtl_number: AIR_PRANDTL,
        efficiency: (1.0 - (pressure_drop / pressure) * 10.0).max(0.7),
    })
}

/// Darcy friction factor: Hagen-Poiseuille below the laminar limit, Blasius above.
pub fn friction_factor(re: f64) -> f64 {
    if re < LAMINAR_LIMIT {
        64.0 / re
    } else {
        0.316 / re.powf(0.25)
    }
}

/// Laminar constant or Dittus-Boelter correlation.
pub fn nusselt_number(re: f64, prandtl: f64) -> f64 {
    if re < LAMINAR_LIMIT {
        LAMINAR_NUSSELT
    } else {
        0.023 * re.powf(0.8) * prandtl.powf(0.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regime_boundaries() {
        assert_eq!(FlowRegime::classify(2_299.0), FlowRegime::Laminar);
        assert_eq!(FlowRegime::classify(2_300.0), FlowRegime::Transitional);
        assert_eq!(FlowRegime::classify(4_000.0), FlowRegime::Transitional);
        assert_eq!(FlowRegime::classify(4_001.0), FlowRegime::Turbulent);
    }

    #[test]
    fn laminar_pipe() {
        let result = compute_flow(&PipeFlow {
            reynolds_number: 1_000.0,
            temperature_k: 300.0,
            pressure_pa: 101_325.0,
            velocity_m_s: 2.0,
        })
        .unwrap();
        assert_eq!(result.flow_regime, FlowRegime::Laminar);
        assert!((result.friction_factor - 0.064).abs() < 1e-15);
        assert!((result.pressure_drop - 0.128).abs() < 1e-12);
        assert_eq!(result.nusselt_number, LAMINAR_NUSSELT);
        assert!(result.efficiency > 0.99);
    }

    #[test]
    fn turbulent_efficiency_is_floored() {
        let result = compute_flow(&PipeFlow {
            reynolds_number: 1.0e5,
            temperature_k: 300.0,
            pressure_pa: 10.0,
            velocity_m_s: 50.0,
        })
        .unwrap();
        assert_eq!(result.flow_regime, FlowRegime::Turbulent);
        assert!((result.friction_factor - 0.316 / 1.0e5_f64.powf(0.25)).abs() < 1e-15);
        assert_eq!(result.efficiency, 0.7);
    }

    #[test]
    fn zero_reynolds_is_rejected() {
        let flow = PipeFlow {
            reynolds_number: 0.0,
            temperature_k: 300.0,
            pressure_pa: 101_325.0,
            velocity_m_s: 1.0,
        };
        assert_eq!(
            compute_flow(&flow).unwrap_err().parameter(),
            "reynolds_number"
        );
    }
}
