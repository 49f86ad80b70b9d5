//! Print-job estimate for the ProtoPrint panel.

use enginuity_core::DomainResult;
use enginuity_core::error::{ensure_at_least, ensure_finite, ensure_positive, ensure_within};
use serde::{Deserialize, Serialize};

use crate::Severity;

/// Extra filament consumed by purges, skirts and failed starts.
pub const WASTE_FACTOR: f64 = 1.2;
/// Printer draw per minute of printing (kWh/min).
pub const ENERGY_PER_MINUTE_KWH: f64 = 0.2;
pub const MATERIAL_COST_PER_UNIT: f64 = 0.05;
pub const ENERGY_COST_PER_KWH: f64 = 0.12;
/// Sparse infill below this percentage needs support structures.
pub const SUPPORT_INFILL_LIMIT: f64 = 30.0;
pub const SUPPORT_FRACTION: f64 = 0.15;
pub const QUALITY_FLOOR: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintJob {
    pub layer_height_mm: f64,
    /// 0 to 100.
    pub infill_percent: f64,
    pub print_speed_mm_s: f64,
    /// Nozzle temperature (°C).
    pub temperature_c: f64,
    /// Part volume (cm³).
    pub volume: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintEstimate {
    pub estimated_layers: u64,
    /// Minutes.
    pub print_time: f64,
    pub material_usage: f64,
    /// kWh.
    pub energy_consumption: f64,
    pub cost: f64,
    pub quality: f64,
    pub warping: Severity,
    pub support_material: f64,
}

pub fn simulate_print(job: &PrintJob) -> DomainResult<PrintEstimate> {
    let layer_height = ensure_positive("layer_height_mm", job.layer_height_mm)?;
    let infill = ensure_within("infill_percent", job.infill_percent, 0.0, 100.0)?;
    let speed = ensure_positive("print_speed_mm_s", job.print_speed_mm_s)?;
    let temperature = ensure_finite("temperature_c", job.temperature_c)?;
    let volume = ensure_at_least("volume", job.volume, 0.0)?;

    let layers = (volume / layer_height).ceil() as u64;
    let material_usage = volume * (infill / 100.0) * WASTE_FACTOR;
    let print_time = layers as f64 * layer_height * 60.0 / speed;
    let energy_consumption = print_time * ENERGY_PER_MINUTE_KWH;

    Ok(PrintEstimate {
        estimated_layers: layers,
        print_time,
        material_usage,
        energy_consumption,
        cost: material_usage * MATERIAL_COST_PER_UNIT + energy_consumption * ENERGY_COST_PER_KWH,
        quality: (1.0 - (speed / 100.0) * 0.3).max(QUALITY_FLOOR),
        warping: Severity::grade(temperature, 200.0, 250.0),
        support_material: if infill < SUPPORT_INFILL_LIMIT {
            material_usage * SUPPORT_FRACTION
        } else {
            0.0
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pla_job() -> PrintJob {
        PrintJob {
            layer_height_mm: 0.2,
            infill_percent: 20.0,
            print_speed_mm_s: 50.0,
            temperature_c: 210.0,
            volume: 100.0,
        }
    }

    #[test]
    fn standard_pla_job() {
        let estimate = simulate_print(&pla_job()).unwrap();
        assert_eq!(estimate.estimated_layers, 500);
        assert_eq!(estimate.material_usage, 24.0);
        assert!((estimate.print_time - 120.0).abs() < 1e-9);
        assert!((estimate.energy_consumption - 24.0).abs() < 1e-9);
        assert!((estimate.cost - 4.08).abs() < 1e-9);
        assert!((estimate.quality - 0.85).abs() < 1e-12);
        assert_eq!(estimate.warping, Severity::Medium);
        assert!((estimate.support_material - 3.6).abs() < 1e-12);
    }

    #[test]
    fn partial_top_layer_counts_as_a_layer() {
        let estimate = simulate_print(&PrintJob {
            layer_height_mm: 0.3,
            volume: 10.0,
            ..pla_job()
        })
        .unwrap();
        assert_eq!(estimate.estimated_layers, 34);
        assert!((estimate.print_time - 34.0 * 0.3 * 60.0 / 50.0).abs() < 1e-9);
    }

    #[test]
    fn dense_fast_hot_print() {
        let estimate = simulate_print(&PrintJob {
            infill_percent: 30.0,
            print_speed_mm_s: 200.0,
            temperature_c: 260.0,
            ..pla_job()
        })
        .unwrap();
        assert_eq!(estimate.support_material, 0.0);
        assert_eq!(estimate.quality, QUALITY_FLOOR);
        assert_eq!(estimate.warping, Severity::High);
    }

    #[test]
    fn invalid_jobs_are_rejected() {
        let flat = PrintJob {
            layer_height_mm: 0.0,
            ..pla_job()
        };
        assert_eq!(
            simulate_print(&flat).unwrap_err().parameter(),
            "layer_height_mm"
        );
        let overfull = PrintJob {
            infill_percent: 120.0,
            ..pla_job()
        };
        assert_eq!(
            simulate_print(&overfull).unwrap_err().parameter(),
            "infill_percent"
        );
    }
}
