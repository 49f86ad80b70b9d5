//! Re-exported APIs for consumers of the simulation crate.

pub use crate::analysis::{
    AnalysisOutcome, AnalysisRequest, PlasmaOutcome, PlasmaRequest, SimulationError, run_analysis,
    run_batch,
};
pub use enginuity_core::{DomainError, DomainResult};
pub use enginuity_plasma::MaterialCatalog;

pub mod request {
    use enginuity_aero::{FlightConditions, PipeFlow};
    use enginuity_config::AnalysisConfig;
    use enginuity_impulsive::TransferRequest;
    use enginuity_mechatronics::{CircuitInputs, MotionProfile, PrintJob};
    use enginuity_orbits::OrbitalElements;
    use enginuity_plasma::StabilityInputs;

    use crate::analysis::{AnalysisRequest, PlasmaRequest};

    /// Convert an `AnalysisConfig` into its runtime request. Values are checked when the request
    /// runs.
    pub fn from_config(config: &AnalysisConfig) -> AnalysisRequest {
        match config {
            AnalysisConfig::Orbit {
                semi_major_axis_km,
                eccentricity,
                inclination_deg,
                num_points,
            } => AnalysisRequest::Orbit {
                elements: elements(*semi_major_axis_km, *eccentricity, *inclination_deg),
                num_points: *num_points,
            },
            AnalysisConfig::Orbit3d {
                semi_major_axis_km,
                eccentricity,
                inclination_deg,
                num_points,
            } => AnalysisRequest::Orbit3d {
                elements: elements(*semi_major_axis_km, *eccentricity, *inclination_deg),
                num_points: *num_points,
            },
            AnalysisConfig::OrbitSummary {
                semi_major_axis_km,
                eccentricity,
                inclination_deg,
            } => AnalysisRequest::OrbitSummary(elements(
                *semi_major_axis_km,
                *eccentricity,
                *inclination_deg,
            )),
            AnalysisConfig::Hohmann {
                initial_radius_km,
                target_radius_km,
            } => AnalysisRequest::Hohmann(TransferRequest {
                initial_radius_km: *initial_radius_km,
                target_radius_km: *target_radius_km,
            }),
            AnalysisConfig::Plasma {
                geometry,
                material,
                input_power_w,
            } => AnalysisRequest::Plasma(PlasmaRequest {
                geometry: geometry.clone(),
                material: material.clone(),
                input_power_w: *input_power_w,
            }),
            AnalysisConfig::Wavefront { mach, altitude_ft } => AnalysisRequest::Wavefront {
                mach: *mach,
                altitude_ft: *altitude_ft,
            },
            AnalysisConfig::Cfd {
                mach,
                altitude_ft,
                angle_of_attack_deg,
                temperature_k,
                pressure_pa,
            } => AnalysisRequest::Cfd(FlightConditions {
                mach: *mach,
                altitude_ft: *altitude_ft,
                angle_of_attack_deg: *angle_of_attack_deg,
                temperature_k: *temperature_k,
                pressure_pa: *pressure_pa,
            }),
            AnalysisConfig::Flow {
                reynolds_number,
                temperature_k,
                pressure_pa,
                velocity_m_s,
            } => AnalysisRequest::Flow(PipeFlow {
                reynolds_number: *reynolds_number,
                temperature_k: *temperature_k,
                pressure_pa: *pressure_pa,
                velocity_m_s: *velocity_m_s,
            }),
            AnalysisConfig::Diagnostics {
                beta_ratio,
                safety_factor,
                neutron_flux,
            } => AnalysisRequest::Diagnostics(StabilityInputs {
                beta_ratio: *beta_ratio,
                safety_factor: *safety_factor,
                neutron_flux: *neutron_flux,
            }),
            AnalysisConfig::Circuit {
                voltage_v,
                frequency_hz,
                resistance_ohm,
                capacitance_f,
                inductance_h,
            } => AnalysisRequest::Circuit(CircuitInputs {
                voltage_v: *voltage_v,
                frequency_hz: *frequency_hz,
                resistance_ohm: *resistance_ohm,
                capacitance_f: *capacitance_f,
                inductance_h: *inductance_h,
            }),
            AnalysisConfig::Print {
                layer_height_mm,
                infill_percent,
                print_speed_mm_s,
                temperature_c,
                volume,
            } => AnalysisRequest::Print(PrintJob {
                layer_height_mm: *layer_height_mm,
                infill_percent: *infill_percent,
                print_speed_mm_s: *print_speed_mm_s,
                temperature_c: *temperature_c,
                volume: *volume,
            }),
            AnalysisConfig::Motion {
                speed_m_s,
                acceleration_m_s2,
                distance_m,
                payload_kg,
            } => AnalysisRequest::Motion(MotionProfile {
                speed_m_s: *speed_m_s,
                acceleration_m_s2: *acceleration_m_s2,
                distance_m: *distance_m,
                payload_kg: *payload_kg,
            }),
        }
    }

    fn elements(
        semi_major_axis_km: f64,
        eccentricity: f64,
        inclination_deg: f64,
    ) -> OrbitalElements {
        OrbitalElements {
            semi_major_axis_km,
            eccentricity,
            inclination_deg,
        }
    }
}

pub mod materials {
    use enginuity_config::MaterialConfig;
    use enginuity_core::DomainResult;
    use enginuity_plasma::{MaterialCatalog, MaterialProperties, NamedMaterial};

    /// Builtin catalog extended with configured entries; rejects non-positive properties.
    pub fn catalog_from_configs(configs: &[MaterialConfig]) -> DomainResult<MaterialCatalog> {
        MaterialCatalog::with_materials(configs.iter().map(|config| NamedMaterial {
            name: config.name.clone(),
            properties: MaterialProperties {
                heat_capacity: config.heat_capacity,
                permeability: config.permeability,
                density: config.density,
                area: config.area,
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enginuity_config::{MaterialConfig, parse_analyses_yaml};

    #[test]
    fn yaml_batch_runs_end_to_end() {
        let configs = parse_analyses_yaml(
            "- analysis: hohmann\n  initial_radius_km: 6678\n  target_radius_km: 42164\n\
             - analysis: orbit\n  semi_major_axis_km: 7000\n  eccentricity: 1.2\n",
        )
        .unwrap();
        let requests: Vec<AnalysisRequest> = configs.iter().map(request::from_config).collect();
        assert_eq!(requests[0].kind(), configs[0].kind());

        let results = run_batch(&requests, &MaterialCatalog::default());
        assert!(matches!(results[0], Ok(AnalysisOutcome::Hohmann(_))));
        let err = results[1].as_ref().unwrap_err();
        assert_eq!(err.domain().parameter(), "eccentricity");
    }

    #[test]
    fn yaml_motion_reaches_motion_kernel() {
        let configs = parse_analyses_yaml(
            "- analysis: motion\n  speed_m_s: 2\n  acceleration_m_s2: 1\n  distance_m: 1\n",
        )
        .unwrap();
        let request = request::from_config(&configs[0]);
        assert_eq!(request.kind(), "motion");
        match run_analysis(&request, &MaterialCatalog::default()).unwrap() {
            AnalysisOutcome::Motion(motion) => {
                assert_eq!(motion.total_time, 4.0);
                assert_eq!(motion.power, 0.0);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn configured_material_overrides_builtin() {
        let catalog = materials::catalog_from_configs(&[MaterialConfig {
            name: "Tungsten".into(),
            heat_capacity: 140.0,
            permeability: 1.1e-6,
            density: 19_300.0,
            area: 0.9,
        }])
        .unwrap();
        assert_eq!(catalog.get("tungsten").unwrap().heat_capacity, 140.0);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn invalid_material_is_rejected() {
        let err = materials::catalog_from_configs(&[MaterialConfig {
            name: "void".into(),
            heat_capacity: 0.0,
            permeability: 1.0e-6,
            density: 1.0,
            area: 1.0,
        }])
        .unwrap_err();
        assert_eq!(err.parameter(), "heat_capacity");
    }
}
