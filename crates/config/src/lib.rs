//! Configuration models and loaders for Enginuity analysis batches.
//!
//! A path may point at a YAML file holding a list of records, a single TOML
//! record, or a directory of TOML records (read in file-name order).

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

fn default_samples() -> usize {
    360
}

fn default_geometry() -> String {
    "tokamak".to_string()
}

fn default_material() -> String {
    "lithium".to_string()
}

/// One analysis to run, tagged by `analysis`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "analysis", rename_all = "snake_case")]
pub enum AnalysisConfig {
    Orbit {
        semi_major_axis_km: f64,
        eccentricity: f64,
        #[serde(default)]
        inclination_deg: f64,
        #[serde(default = "default_samples")]
        num_points: usize,
    },
    #[serde(rename = "orbit3d")]
    Orbit3d {
        semi_major_axis_km: f64,
        eccentricity: f64,
        #[serde(default)]
        inclination_deg: f64,
        #[serde(default = "default_samples")]
        num_points: usize,
    },
    OrbitSummary {
        semi_major_axis_km: f64,
        eccentricity: f64,
        #[serde(default)]
        inclination_deg: f64,
    },
    Hohmann {
        initial_radius_km: f64,
        target_radius_km: f64,
    },
    Plasma {
        #[serde(default = "default_geometry")]
        geometry: String,
        #[serde(default = "default_material")]
        material: String,
        input_power_w: f64,
    },
    Wavefront {
        mach: f64,
        #[serde(default)]
        altitude_ft: f64,
    },
    Cfd {
        mach: f64,
        altitude_ft: f64,
        angle_of_attack_deg: f64,
        temperature_k: f64,
        pressure_pa: f64,
    },
    Flow {
        reynolds_number: f64,
        temperature_k: f64,
        pressure_pa: f64,
        velocity_m_s: f64,
    },
    Diagnostics {
        beta_ratio: f64,
        safety_factor: f64,
        #[serde(default)]
        neutron_flux: f64,
    },
    Circuit {
        voltage_v: f64,
        #[serde(default)]
        frequency_hz: f64,
        resistance_ohm: f64,
        #[serde(default)]
        capacitance_f: f64,
        #[serde(default)]
        inductance_h: f64,
    },
    Print {
        layer_height_mm: f64,
        infill_percent: f64,
        print_speed_mm_s: f64,
        temperature_c: f64,
        volume: f64,
    },
    Motion {
        speed_m_s: f64,
        acceleration_m_s2: f64,
        distance_m: f64,
        #[serde(default)]
        payload_kg: f64,
    },
}

impl AnalysisConfig {
    /// Short tag used in logs and report envelopes.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisConfig::Orbit { .. } => "orbit",
            AnalysisConfig::Orbit3d { .. } => "orbit3d",
            AnalysisConfig::OrbitSummary { .. } => "orbit_summary",
            AnalysisConfig::Hohmann { .. } => "hohmann",
            AnalysisConfig::Plasma { .. } => "plasma",
            AnalysisConfig::Wavefront { .. } => "wavefront",
            AnalysisConfig::Cfd { .. } => "cfd",
            AnalysisConfig::Flow { .. } => "flow",
            AnalysisConfig::Diagnostics { .. } => "diagnostics",
            AnalysisConfig::Circuit { .. } => "circuit",
            AnalysisConfig::Print { .. } => "print",
            AnalysisConfig::Motion { .. } => "motion",
        }
    }
}

/// Material entry for the plasma catalog.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MaterialConfig {
    pub name: String,
    pub heat_capacity: f64,
    pub permeability: f64,
    pub density: f64,
    pub area: f64,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load analysis requests from a YAML list, a TOML file, or a directory of TOML files.
pub fn load_analyses<P: AsRef<Path>>(path: P) -> Result<Vec<AnalysisConfig>, ConfigError> {
    load_records(path)
}

/// Load material entries using the same layout rules as [`load_analyses`].
pub fn load_materials<P: AsRef<Path>>(path: P) -> Result<Vec<MaterialConfig>, ConfigError> {
    load_records(path)
}

/// Parse a YAML list of analyses held in memory.
pub fn parse_analyses_yaml(contents: &str) -> Result<Vec<AnalysisConfig>, ConfigError> {
    Ok(serde_yaml::from_str(contents)?)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn yaml_list_with_defaults() {
        let yaml = r#"
- analysis: orbit
  semi_major_axis_km: 7000
  eccentricity: 0.1
- analysis: plasma
  input_power_w: 1000000
- analysis: wavefront
  mach: 2.0
  altitude_ft: 40000
"#;
        let analyses = parse_analyses_yaml(yaml).unwrap();
        assert_eq!(analyses.len(), 3);
        assert_eq!(
            analyses[0],
            AnalysisConfig::Orbit {
                semi_major_axis_km: 7000.0,
                eccentricity: 0.1,
                inclination_deg: 0.0,
                num_points: 360,
            }
        );
        match &analyses[1] {
            AnalysisConfig::Plasma {
                geometry, material, ..
            } => {
                assert_eq!(geometry, "tokamak");
                assert_eq!(material, "lithium");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(analyses[2].kind(), "wavefront");
    }

    #[test]
    fn bench_analyses_with_defaults() {
        let yaml = r#"
- analysis: circuit
  voltage_v: 12
  resistance_ohm: 6
- analysis: print
  layer_height_mm: 0.2
  infill_percent: 20
  print_speed_mm_s: 50
  temperature_c: 210
  volume: 100
- analysis: motion
  speed_m_s: 2
  acceleration_m_s2: 1
  distance_m: 10
"#;
        let analyses = parse_analyses_yaml(yaml).unwrap();
        assert_eq!(
            analyses[0],
            AnalysisConfig::Circuit {
                voltage_v: 12.0,
                frequency_hz: 0.0,
                resistance_ohm: 6.0,
                capacitance_f: 0.0,
                inductance_h: 0.0,
            }
        );
        assert_eq!(analyses[1].kind(), "print");
        assert!(matches!(
            analyses[2],
            AnalysisConfig::Motion { payload_kg, .. } if payload_kg == 0.0
        ));
    }

    #[test]
    fn unknown_analysis_is_a_parse_error() {
        let err = parse_analyses_yaml("- analysis: warp_drive\n  factor: 9\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn toml_directory_is_read_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut second = File::create(dir.path().join("b_hohmann.toml")).unwrap();
        writeln!(
            second,
            "analysis = \"hohmann\"\ninitial_radius_km = 6678.0\ntarget_radius_km = 42164.0"
        )
        .unwrap();
        let mut first = File::create(dir.path().join("a_orbit3d.toml")).unwrap();
        writeln!(
            first,
            "analysis = \"orbit3d\"\nsemi_major_axis_km = 8000.0\n\
             eccentricity = 0.0\ninclination_deg = 51.6"
        )
        .unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        let analyses = load_analyses(dir.path()).unwrap();
        assert_eq!(analyses.len(), 2);
        assert_eq!(analyses[0].kind(), "orbit3d");
        assert_eq!(analyses[1].kind(), "hohmann");
    }

    #[test]
    fn materials_from_single_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beryllium.toml");
        std::fs::write(
            &path,
            "name = \"beryllium\"\nheat_capacity = 1825.0\npermeability = 1.25e-6\n\
             density = 1850.0\narea = 1.0\n",
        )
        .unwrap();
        let materials = load_materials(&path).unwrap();
        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].name, "beryllium");
        assert_eq!(materials[0].density, 1850.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_materials("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
