//! Impulsive transfer utilities: classical two-burn transfers between circular orbits.

pub mod transfers;

pub use transfers::{TransferRequest, TransferResult, compute_hohmann_transfer, hohmann};
