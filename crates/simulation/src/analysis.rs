//! Analysis dispatcher: one request in, one kernel evaluation out.
//!
//! Mirrors the dashboard panels (AeroIQ, FusionX, FlowCore, CircuitIQ, ProtoPrint,
//! CodeMotion) minus the UI: each
//! request names an analysis and carries its inputs; nothing is cached or shared
//! between evaluations.

use enginuity_aero::{
    CfdResult, FlightConditions, FlowResult, PipeFlow, WavefrontResult, compute_cfd, compute_flow,
    compute_wavefront,
};
use enginuity_core::DomainError;
use enginuity_impulsive::{TransferRequest, TransferResult};
use enginuity_mechatronics::{
    CircuitInputs, CircuitResult, MotionProfile, MotionResult, PrintEstimate, PrintJob,
    analyze_circuit, simulate_motion, simulate_print,
};
use enginuity_orbits::{
    OrbitEphemeris, OrbitEphemeris3d, OrbitSummary, OrbitalElements, compute_orbit,
    compute_orbit_3d, summarize_orbit,
};
use enginuity_plasma::{
    EnergyYield, MaterialCatalog, PlasmaState, StabilityInputs, StabilityReport,
    calculate_energy_yield, diagnose, simulate_plasma_confinement,
};
use serde::Serialize;
use tracing::{debug, warn};

/// Plasma run inputs; `material` is resolved against a [`MaterialCatalog`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlasmaRequest {
    pub geometry: String,
    pub material: String,
    pub input_power_w: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisRequest {
    Orbit {
        elements: OrbitalElements,
        num_points: usize,
    },
    Orbit3d {
        elements: OrbitalElements,
        num_points: usize,
    },
    OrbitSummary(OrbitalElements),
    Hohmann(TransferRequest),
    Plasma(PlasmaRequest),
    Wavefront { mach: f64, altitude_ft: f64 },
    Cfd(FlightConditions),
    Flow(PipeFlow),
    Diagnostics(StabilityInputs),
    Circuit(CircuitInputs),
    Print(PrintJob),
    Motion(MotionProfile),
}

impl AnalysisRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisRequest::Orbit { .. } => "orbit",
            AnalysisRequest::Orbit3d { .. } => "orbit3d",
            AnalysisRequest::OrbitSummary(_) => "orbit_summary",
            AnalysisRequest::Hohmann(_) => "hohmann",
            AnalysisRequest::Plasma(_) => "plasma",
            AnalysisRequest::Wavefront { .. } => "wavefront",
            AnalysisRequest::Cfd(_) => "cfd",
            AnalysisRequest::Flow(_) => "flow",
            AnalysisRequest::Diagnostics(_) => "diagnostics",
            AnalysisRequest::Circuit(_) => "circuit",
            AnalysisRequest::Print(_) => "print",
            AnalysisRequest::Motion(_) => "motion",
        }
    }
}

/// Plasma state together with the yield derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlasmaOutcome {
    pub material: String,
    pub plasma_state: PlasmaState,
    pub yield_report: EnergyYield,
}

/// Kernel result; serializes as the bare result, the kind travels alongside.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Orbit(OrbitEphemeris),
    Orbit3d(OrbitEphemeris3d),
    OrbitSummary(OrbitSummary),
    Hohmann(TransferResult),
    Plasma(PlasmaOutcome),
    Wavefront(WavefrontResult),
    Cfd(CfdResult),
    Flow(FlowResult),
    Diagnostics(StabilityReport),
    Circuit(CircuitResult),
    Print(PrintEstimate),
    Motion(MotionResult),
}

impl AnalysisOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisOutcome::Orbit(_) => "orbit",
            AnalysisOutcome::Orbit3d(_) => "orbit3d",
            AnalysisOutcome::OrbitSummary(_) => "orbit_summary",
            AnalysisOutcome::Hohmann(_) => "hohmann",
            AnalysisOutcome::Plasma(_) => "plasma",
            AnalysisOutcome::Wavefront(_) => "wavefront",
            AnalysisOutcome::Cfd(_) => "cfd",
            AnalysisOutcome::Flow(_) => "flow",
            AnalysisOutcome::Diagnostics(_) => "diagnostics",
            AnalysisOutcome::Circuit(_) => "circuit",
            AnalysisOutcome::Print(_) => "print",
            AnalysisOutcome::Motion(_) => "motion",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("{analysis} analysis rejected input: {source}")]
    Domain {
        analysis: &'static str,
        #[source]
        source: DomainError,
    },
}

impl SimulationError {
    pub fn domain(&self) -> &DomainError {
        match self {
            SimulationError::Domain { source, .. } => source,
        }
    }
}

/// Evaluate a single request.
pub fn run_analysis(
    request: &AnalysisRequest,
    catalog: &MaterialCatalog,
) -> Result<AnalysisOutcome, SimulationError> {
    let kind = request.kind();
    debug!(analysis = kind, "running analysis");
    evaluate(request, catalog).map_err(|source| {
        warn!(analysis = kind, error = %source, "analysis rejected");
        SimulationError::Domain {
            analysis: kind,
            source,
        }
    })
}

fn evaluate(
    request: &AnalysisRequest,
    catalog: &MaterialCatalog,
) -> Result<AnalysisOutcome, DomainError> {
    let outcome = match request {
        AnalysisRequest::Orbit {
            elements,
            num_points,
        } => AnalysisOutcome::Orbit(compute_orbit(
            elements.semi_major_axis_km,
            elements.eccentricity,
            elements.inclination_deg,
            *num_points,
        )?),
        AnalysisRequest::Orbit3d {
            elements,
            num_points,
        } => AnalysisOutcome::Orbit3d(compute_orbit_3d(
            elements.semi_major_axis_km,
            elements.eccentricity,
            elements.inclination_deg,
            *num_points,
        )?),
        AnalysisRequest::OrbitSummary(elements) => {
            AnalysisOutcome::OrbitSummary(summarize_orbit(elements)?)
        }
        AnalysisRequest::Hohmann(transfer) => AnalysisOutcome::Hohmann(transfer.evaluate()?),
        AnalysisRequest::Plasma(plasma) => {
            let props = catalog.lookup(&plasma.material);
            let state =
                simulate_plasma_confinement(&plasma.geometry, &props, plasma.input_power_w)?;
            let yield_report = calculate_energy_yield(&state);
            AnalysisOutcome::Plasma(PlasmaOutcome {
                material: plasma.material.clone(),
                plasma_state: state,
                yield_report,
            })
        }
        AnalysisRequest::Wavefront { mach, altitude_ft } => {
            AnalysisOutcome::Wavefront(compute_wavefront(*mach, *altitude_ft)?)
        }
        AnalysisRequest::Cfd(conditions) => AnalysisOutcome::Cfd(compute_cfd(conditions)?),
        AnalysisRequest::Flow(flow) => AnalysisOutcome::Flow(compute_flow(flow)?),
        AnalysisRequest::Diagnostics(inputs) => AnalysisOutcome::Diagnostics(diagnose(inputs)?),
        AnalysisRequest::Circuit(inputs) => AnalysisOutcome::Circuit(analyze_circuit(inputs)?),
        AnalysisRequest::Print(job) => AnalysisOutcome::Print(simulate_print(job)?),
        AnalysisRequest::Motion(profile) => AnalysisOutcome::Motion(simulate_motion(profile)?),
    };
    Ok(outcome)
}

/// Evaluate every request independently; one rejected input does not stop the rest.
pub fn run_batch(
    requests: &[AnalysisRequest],
    catalog: &MaterialCatalog,
) -> Vec<Result<AnalysisOutcome, SimulationError>> {
    requests
        .iter()
        .map(|request| run_analysis(request, catalog))
        .collect()
}
