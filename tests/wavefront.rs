use enginuity::aero::{
    FlightConditions, ackeret_pressure_coefficient, compute_cfd, compute_wavefront,
};

#[test]
fn mach_two_cone_is_thirty_degrees() {
    let w = compute_wavefront(2.0, 40_000.0).unwrap();
    assert!((w.wavefront_angle - 30.0).abs() < 1e-9);
    assert!((w.pressure_ratio - 1.8_f64.powf(3.5)).abs() < 1e-12);
    assert_eq!(w.shock_strength, 100.0);
    assert_eq!(w.sonic_boom_intensity, 50.0);
    assert_eq!(w.altitude_ft, 40_000.0);
}

#[test]
fn sonic_point_has_no_shock() {
    let w = compute_wavefront(1.0, 0.0).unwrap();
    assert_eq!(w.shock_strength, 0.0);
    assert_eq!(w.sonic_boom_intensity, 0.0);
    assert!((w.wavefront_angle - 90.0).abs() < 1e-9);
}

#[test]
fn subsonic_and_non_finite_mach_rejected() {
    for mach in [0.0, 0.99, f64::NAN, f64::INFINITY] {
        let err = compute_wavefront(mach, 0.0).unwrap_err();
        assert_eq!(err.parameter(), "mach", "mach = {mach}");
    }
}

#[test]
fn cone_narrows_with_speed() {
    let angles: Vec<f64> = [1.2, 1.5, 2.0, 3.0, 5.0]
        .iter()
        .map(|&m| compute_wavefront(m, 0.0).unwrap().wavefront_angle)
        .collect();
    assert!(angles.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn ackeret_needs_supersonic_flow() {
    let cp = ackeret_pressure_coefficient(2.0, 2.0).unwrap();
    assert!((cp - 2.0 * 2.0_f64.to_radians() / 3.0_f64.sqrt()).abs() < 1e-12);
    assert!(ackeret_pressure_coefficient(1.0, 2.0).is_err());
}

#[test]
fn cfd_rejects_supersonic_conditions() {
    let conditions = FlightConditions {
        mach: 1.6,
        ..FlightConditions::default()
    };
    assert_eq!(compute_cfd(&conditions).unwrap_err().parameter(), "mach");
}
