//! Enginuity computation kernels behind one crate.
//!
//! Orbit sampling, impulsive transfers, plasma confinement, the aero estimates
//! and the circuit/print/motion models live in their own workspace crates; this
//! crate re-exports them so front-ends (the CLI, the plotter) depend on a single
//! library.

pub mod plot;

pub use enginuity_aero as aero;
pub use enginuity_config as config;
pub use enginuity_core as domain;
pub use enginuity_export as export;
pub use enginuity_impulsive as impulsive;
pub use enginuity_mechatronics as mechatronics;
pub use enginuity_orbits as orbits;
pub use enginuity_plasma as plasma;
pub use enginuity_simulation as simulation;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
