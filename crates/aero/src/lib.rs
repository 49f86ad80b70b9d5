//! AeroIQ and FlowCore kernels: Mach-cone quantities, a subsonic lift/drag
//! approximation over an exponential atmosphere, and pipe-flow estimates.

pub mod atmosphere;
pub mod cfd;
pub mod flow;
pub mod wavefront;

pub use cfd::{CfdResult, FlightConditions, compute_cfd};
pub use flow::{FlowRegime, FlowResult, PipeFlow, compute_flow};
pub use wavefront::{WavefrontResult, ackeret_pressure_coefficient, compute_wavefront};
