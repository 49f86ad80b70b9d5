//! Simulation façade crate: turns analysis requests into kernel calls and exposes the kernels.

pub mod analysis;

pub use enginuity_aero as aero;
pub use enginuity_impulsive as impulsive;
pub use enginuity_mechatronics as mechatronics;
pub use enginuity_orbits as orbits;
pub use enginuity_plasma as plasma;
pub use facade::*;

mod facade;
