//! CircuitIQ, ProtoPrint and CodeMotion kernels: a series RLC circuit driven
//! by a sinusoidal source, a sliced 3D print job, and a trapezoidal
//! point-to-point move.

use serde::{Deserialize, Serialize};

pub mod circuit;
pub mod motion;
pub mod printing;

pub use circuit::{CircuitInputs, CircuitResult, analyze_circuit};
pub use motion::{MotionProfile, MotionResult, simulate_motion};
pub use printing::{PrintEstimate, PrintJob, simulate_print};

/// Three-step qualitative rating used for warping and vibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// `High` strictly above `high`, `Medium` strictly above `medium`.
    pub fn grade(value: f64, medium: f64, high: f64) -> Self {
        if value > high {
            Severity::High
        } else if value > medium {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}
