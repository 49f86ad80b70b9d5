//! Steady-state response of a series RLC circuit to a sinusoidal source.

use std::f64::consts::PI;

use enginuity_core::DomainResult;
use enginuity_core::error::{ensure_at_least, ensure_positive};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lower bound reported for the power-delivery efficiency.
pub const EFFICIENCY_FLOOR: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitInputs {
    /// Source amplitude (V).
    pub voltage_v: f64,
    pub frequency_hz: f64,
    pub resistance_ohm: f64,
    /// Series capacitance (F); zero means no capacitor.
    pub capacitance_f: f64,
    /// Series inductance (H); zero means no inductor.
    pub inductance_h: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitResult {
    /// A.
    pub current: f64,
    /// Power dissipated in the resistor (W).
    pub power: f64,
    /// Ω.
    pub impedance: f64,
    /// Degrees; positive when the circuit is inductive.
    pub phase_angle: f64,
    pub power_factor: f64,
    /// Hz, zero unless both L and C are present.
    pub resonant_frequency: f64,
    /// Half-power bandwidth (Hz); absent without an inductor.
    pub bandwidth: Option<f64>,
    pub efficiency: f64,
}

pub fn analyze_circuit(inputs: &CircuitInputs) -> DomainResult<CircuitResult> {
    let voltage = ensure_positive("voltage_v", inputs.voltage_v)?;
    let resistance = ensure_positive("resistance_ohm", inputs.resistance_ohm)?;
    let capacitance = ensure_at_least("capacitance_f", inputs.capacitance_f, 0.0)?;
    let inductance = ensure_at_least("inductance_h", inputs.inductance_h, 0.0)?;
    // A capacitor blocks DC entirely.
    let frequency = if capacitance > 0.0 {
        ensure_positive("frequency_hz", inputs.frequency_hz)?
    } else {
        ensure_at_least("frequency_hz", inputs.frequency_hz, 0.0)?
    };

    let omega = 2.0 * PI * frequency;
    let reactance = reactance(omega, inductance, capacitance);
    let impedance = (resistance * resistance + reactance * reactance).sqrt();
    let current = voltage / impedance;
    let power = current * current * resistance;
    let phase = reactance.atan2(resistance);

    debug!(frequency, impedance, current, "series RLC");

    Ok(CircuitResult {
        current,
        power,
        impedance,
        phase_angle: phase.to_degrees(),
        power_factor: phase.cos(),
        resonant_frequency: resonant_frequency(inductance, capacitance),
        bandwidth: if inductance > 0.0 {
            Some(resistance / (2.0 * PI * inductance))
        } else {
            None
        },
        efficiency: (power / (voltage * current)).max(EFFICIENCY_FLOOR),
    })
}

/// Net series reactance `X_L + X_C` at angular frequency `omega`.
pub fn reactance(omega: f64, inductance: f64, capacitance: f64) -> f64 {
    let capacitive = if capacitance > 0.0 {
        -1.0 / (omega * capacitance)
    } else {
        0.0
    };
    omega * inductance + capacitive
}

pub fn resonant_frequency(inductance: f64, capacitance: f64) -> f64 {
    if inductance > 0.0 && capacitance > 0.0 {
        1.0 / (2.0 * PI * (inductance * capacitance).sqrt())
    } else {
        0.0
    }
}
