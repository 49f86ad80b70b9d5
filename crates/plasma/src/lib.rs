//! FusionX plasma kernels.
//!
//! The confinement and yield relations are simple closed forms (thermal and
//! magnetic confinement assumptions without derivation), evaluated as the
//! FusionX dashboard does.

pub mod confinement;
pub mod diagnostics;
pub mod materials;

pub use confinement::{
    EnergyYield, MagneticField, PlasmaState, TemperatureMap, TemperatureZone,
    calculate_energy_yield, simulate_plasma_confinement,
};
pub use diagnostics::{StabilityInputs, StabilityReport, diagnose};
pub use materials::{MaterialCatalog, MaterialProperties, NamedMaterial};
