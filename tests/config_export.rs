use enginuity::config::{AnalysisConfig, load_analyses};
use enginuity::export::{report, trace, writer_for_path};
use enginuity::orbits::{OrbitEphemeris, compute_orbit};
use enginuity::simulation::{AnalysisOutcome, MaterialCatalog, request::from_config, run_batch};
use std::fs;

#[test]
fn yaml_batch_to_csv_trace() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("analyses.yaml");
    fs::write(
        &config,
        "- analysis: orbit\n  semi_major_axis_km: 7000\n  eccentricity: 0.05\n  num_points: 24\n\
         - analysis: orbit_summary\n  semi_major_axis_km: 7000\n  eccentricity: 0.05\n",
    )
    .unwrap();

    let configs = load_analyses(&config).unwrap();
    assert!(matches!(configs[0], AnalysisConfig::Orbit { num_points: 24, .. }));
    let requests: Vec<_> = configs.iter().map(from_config).collect();
    let results = run_batch(&requests, &MaterialCatalog::builtin());

    let orbit = match &results[0] {
        Ok(AnalysisOutcome::Orbit(orbit)) => orbit,
        other => panic!("unexpected {other:?}"),
    };
    let csv_path = dir.path().join("traces/orbit.csv");
    {
        let writer = writer_for_path(&csv_path).unwrap();
        trace::write_planar(writer, &orbit.x, &orbit.y).unwrap();
    }
    let text = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(text.lines().count(), 25);
    assert!(text.starts_with("index,x_km,y_km\n0,6650.000000,0.000000\n"));

    assert!(matches!(results[1], Ok(AnalysisOutcome::OrbitSummary(_))));
}

#[test]
fn report_round_trips_orbit_exactly() {
    let orbit = compute_orbit(12_345.6, 0.321, 12.5, 73).unwrap();
    let mut buf = Vec::new();
    report::write_report(&mut buf, "orbit", &orbit).unwrap();

    let envelope: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(envelope["analysis"], "orbit");
    let back: OrbitEphemeris = serde_json::from_value(envelope["result"].clone()).unwrap();
    assert_eq!(back, orbit);
}
