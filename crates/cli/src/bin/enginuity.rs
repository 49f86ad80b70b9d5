use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use enginuity::aero::{FlightConditions, PipeFlow};
use enginuity::config::{load_analyses, load_materials};
use enginuity::export::{report, trace, writer_for_path};
use enginuity::impulsive::TransferRequest;
use enginuity::mechatronics::{CircuitInputs, MotionProfile, PrintJob};
use enginuity::orbits::{DEFAULT_SAMPLES, OrbitalElements};
use enginuity::plasma::{NamedMaterial, StabilityInputs};
use enginuity::simulation::{
    AnalysisOutcome, AnalysisRequest, MaterialCatalog, PlasmaRequest,
    materials::catalog_from_configs, request as analysis_request, run_analysis, run_batch,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[path = "enginuity/batch.rs"]
mod batch;

/// Evaluate the Enginuity kernels from the command line.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Orbit, transfer, plasma, aero and bench estimates as JSON"
)]
struct Cli {
    /// Output JSON file (use '-' for stdout)
    #[arg(long, global = true, default_value = "-")]
    output: PathBuf,

    /// Extra material catalog (YAML list, TOML file or directory of TOML files)
    #[arg(long, global = true)]
    materials: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample a Keplerian orbit around Earth
    Orbit {
        #[arg(long)]
        semi_major_axis_km: f64,
        #[arg(long)]
        eccentricity: f64,
        #[arg(long, default_value_t = 0.0)]
        inclination_deg: f64,
        #[arg(long, default_value_t = DEFAULT_SAMPLES)]
        num_points: usize,
        /// Keep the out-of-plane component (z)
        #[arg(long, default_value_t = false)]
        three_d: bool,
        /// Report period, speed, altitudes and energy instead of samples
        #[arg(long, default_value_t = false, conflicts_with_all = ["three_d", "csv"])]
        summary: bool,
        /// Also write the sampled trace as CSV (use '-' for stdout)
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Coplanar circular Hohmann transfer about Earth
    Hohmann {
        #[arg(long)]
        initial_radius_km: f64,
        #[arg(long)]
        target_radius_km: f64,
    },
    /// Plasma confinement state and energy yield
    Plasma {
        #[arg(long, default_value = "tokamak")]
        geometry: String,
        #[arg(long, default_value = "lithium")]
        material: String,
        #[arg(long)]
        input_power_w: f64,
    },
    /// Supersonic shock-cone estimate (Mach >= 1)
    Wavefront {
        #[arg(long)]
        mach: f64,
        #[arg(long, default_value_t = 0.0)]
        altitude_ft: f64,
    },
    /// Subsonic lift/drag estimate (0 <= Mach < 1)
    Cfd {
        #[arg(long, default_value_t = 0.8)]
        mach: f64,
        #[arg(long, default_value_t = 35_000.0)]
        altitude_ft: f64,
        #[arg(long, default_value_t = 5.0)]
        angle_of_attack_deg: f64,
        #[arg(long, default_value_t = 288.15)]
        temperature_k: f64,
        #[arg(long, default_value_t = 101_325.0)]
        pressure_pa: f64,
    },
    /// Internal pipe flow regime, friction and heat transfer
    Flow {
        #[arg(long)]
        reynolds_number: f64,
        #[arg(long, default_value_t = 300.0)]
        temperature_k: f64,
        #[arg(long, default_value_t = 101_325.0)]
        pressure_pa: f64,
        #[arg(long)]
        velocity_m_s: f64,
    },
    /// Plasma stability screening
    Diagnostics {
        #[arg(long)]
        beta_ratio: f64,
        #[arg(long)]
        safety_factor: f64,
        #[arg(long, default_value_t = 0.0)]
        neutron_flux: f64,
    },
    /// Series RLC circuit driven by a sinusoidal source
    Circuit {
        #[arg(long)]
        voltage_v: f64,
        #[arg(long, default_value_t = 0.0)]
        frequency_hz: f64,
        #[arg(long)]
        resistance_ohm: f64,
        /// Series capacitance in farads (0 for none)
        #[arg(long, default_value_t = 0.0)]
        capacitance_f: f64,
        /// Series inductance in henries (0 for none)
        #[arg(long, default_value_t = 0.0)]
        inductance_h: f64,
    },
    /// 3D print job time, material and cost
    Print {
        #[arg(long, default_value_t = 0.2)]
        layer_height_mm: f64,
        #[arg(long, default_value_t = 20.0)]
        infill_percent: f64,
        #[arg(long, default_value_t = 50.0)]
        print_speed_mm_s: f64,
        #[arg(long, default_value_t = 200.0)]
        temperature_c: f64,
        #[arg(long)]
        volume: f64,
    },
    /// Trapezoidal point-to-point move
    Motion {
        #[arg(long)]
        speed_m_s: f64,
        #[arg(long)]
        acceleration_m_s2: f64,
        #[arg(long)]
        distance_m: f64,
        #[arg(long, default_value_t = 0.0)]
        payload_kg: f64,
    },
    /// List the material catalog
    Materials,
    /// Run every analysis in a config file or directory
    Run {
        #[arg(long)]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.materials.as_deref())?;

    let request = match cli.command {
        Command::Orbit {
            semi_major_axis_km,
            eccentricity,
            inclination_deg,
            num_points,
            three_d,
            summary,
            csv,
        } => {
            let elements = OrbitalElements {
                semi_major_axis_km,
                eccentricity,
                inclination_deg,
            };
            let request = if summary {
                AnalysisRequest::OrbitSummary(elements)
            } else if three_d {
                AnalysisRequest::Orbit3d {
                    elements,
                    num_points,
                }
            } else {
                AnalysisRequest::Orbit {
                    elements,
                    num_points,
                }
            };
            if csv.as_deref().is_some_and(is_stdout) && is_stdout(&cli.output) {
                return Err(anyhow!("--csv and --output cannot both write to stdout"));
            }
            let outcome = run_analysis(&request, &catalog)?;
            if let Some(path) = csv {
                write_trace(&path, &outcome)?;
            }
            return write_outcome(&cli.output, &outcome);
        }
        Command::Hohmann {
            initial_radius_km,
            target_radius_km,
        } => AnalysisRequest::Hohmann(TransferRequest {
            initial_radius_km,
            target_radius_km,
        }),
        Command::Plasma {
            geometry,
            material,
            input_power_w,
        } => AnalysisRequest::Plasma(PlasmaRequest {
            geometry,
            material,
            input_power_w,
        }),
        Command::Wavefront { mach, altitude_ft } => {
            AnalysisRequest::Wavefront { mach, altitude_ft }
        }
        Command::Cfd {
            mach,
            altitude_ft,
            angle_of_attack_deg,
            temperature_k,
            pressure_pa,
        } => AnalysisRequest::Cfd(FlightConditions {
            mach,
            altitude_ft,
            angle_of_attack_deg,
            temperature_k,
            pressure_pa,
        }),
        Command::Flow {
            reynolds_number,
            temperature_k,
            pressure_pa,
            velocity_m_s,
        } => AnalysisRequest::Flow(PipeFlow {
            reynolds_number,
            temperature_k,
            pressure_pa,
            velocity_m_s,
        }),
        Command::Diagnostics {
            beta_ratio,
            safety_factor,
            neutron_flux,
        } => AnalysisRequest::Diagnostics(StabilityInputs {
            beta_ratio,
            safety_factor,
            neutron_flux,
        }),
        Command::Circuit {
            voltage_v,
            frequency_hz,
            resistance_ohm,
            capacitance_f,
            inductance_h,
        } => AnalysisRequest::Circuit(CircuitInputs {
            voltage_v,
            frequency_hz,
            resistance_ohm,
            capacitance_f,
            inductance_h,
        }),
        Command::Print {
            layer_height_mm,
            infill_percent,
            print_speed_mm_s,
            temperature_c,
            volume,
        } => AnalysisRequest::Print(PrintJob {
            layer_height_mm,
            infill_percent,
            print_speed_mm_s,
            temperature_c,
            volume,
        }),
        Command::Motion {
            speed_m_s,
            acceleration_m_s2,
            distance_m,
            payload_kg,
        } => AnalysisRequest::Motion(MotionProfile {
            speed_m_s,
            acceleration_m_s2,
            distance_m,
            payload_kg,
        }),
        Command::Materials => {
            let writer = writer_for_path(&cli.output)?;
            let entries: Vec<&NamedMaterial> = catalog.iter().collect();
            report::write_report(writer, "materials", &entries)?;
            return Ok(());
        }
        Command::Run { config } => {
            let configs = load_analyses(&config)
                .with_context(|| format!("loading analyses from {}", config.display()))?;
            let requests: Vec<AnalysisRequest> =
                configs.iter().map(analysis_request::from_config).collect();
            let results = run_batch(&requests, &catalog);
            let entries = batch::entries(&requests, &results);
            let writer = writer_for_path(&cli.output)?;
            report::write_report(writer, "batch", &entries)?;

            let failed = results.iter().filter(|r| r.is_err()).count();
            if failed > 0 {
                return Err(anyhow!("{failed} of {} analyses failed", results.len()));
            }
            return Ok(());
        }
    };

    let outcome = run_analysis(&request, &catalog)?;
    write_outcome(&cli.output, &outcome)
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<MaterialCatalog> {
    match path {
        Some(path) => {
            let configs = load_materials(path)
                .with_context(|| format!("loading materials from {}", path.display()))?;
            Ok(catalog_from_configs(&configs)?)
        }
        None => Ok(MaterialCatalog::builtin()),
    }
}

fn is_stdout(path: &Path) -> bool {
    path == Path::new("-")
}

fn write_outcome(output: &Path, outcome: &AnalysisOutcome) -> anyhow::Result<()> {
    let writer = writer_for_path(output)?;
    report::write_report(writer, outcome.kind(), outcome)?;
    Ok(())
}

fn write_trace(path: &Path, outcome: &AnalysisOutcome) -> anyhow::Result<()> {
    let writer = writer_for_path(path)?;
    match outcome {
        AnalysisOutcome::Orbit(ephemeris) => {
            trace::write_planar(writer, &ephemeris.x, &ephemeris.y)?
        }
        AnalysisOutcome::Orbit3d(ephemeris) => {
            trace::write_spatial(writer, &ephemeris.x, &ephemeris.y, &ephemeris.z)?
        }
        other => return Err(anyhow!("{} analysis has no trace to write", other.kind())),
    }
    Ok(())
}
