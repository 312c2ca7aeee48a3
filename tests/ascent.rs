use approx::assert_relative_eq;

use balloon_ascent::balloon::{radius_from_volume, Balloon, Payload};
use balloon_ascent::io::csv;
use balloon_ascent::physics::atmosphere::{isa, AtmosphereSample};
use balloon_ascent::sim::{self, Flight, RunSettings, Termination};
use balloon_ascent::{Error, SimConfig};

fn hab_3000_settings(dt: f64) -> RunSettings {
    RunSettings {
        duration: 3000.0,
        dt,
        initial_altitude: 0.0,
        initial_velocity: 0.0,
    }
}

fn fly_hab_3000(dt: f64) -> (Flight, Balloon) {
    let mut balloon = Balloon::from_part_number("HAB-3000").unwrap();
    balloon.lift_gas_mut().mass = 3.0;
    let payload = Payload::new(2.0, 0.0);
    let flight = sim::simulate_standard(&mut balloon, &payload, &hab_3000_settings(dt)).unwrap();
    (flight, balloon)
}

/// Diameter a balloon of this gas would have at the given altitude.
fn implied_diameter(balloon: &Balloon, altitude: f64) -> f64 {
    let mut probe = balloon.clone();
    probe.match_ambient(&isa(altitude));
    2.0 * radius_from_volume(probe.volume()).unwrap()
}

#[test]
fn hab_3000_rises_from_launch() {
    let (flight, _) = fly_hab_3000(0.1);
    let early = &flight.samples[..200];
    assert!(early.windows(2).all(|w| w[1].altitude >= w[0].altitude));
    assert!(early[0].ascent_accel > 0.0);
    assert!(early[199].altitude > 0.0);
}

#[test]
fn hab_3000_ends_by_duration_or_burst() {
    let (flight, balloon) = fly_hab_3000(0.1);
    let burst_diameter = balloon.spec().burst_diameter;

    match flight.termination {
        Termination::DurationComplete => {
            assert_eq!(flight.samples.len(), 30_000);
        }
        Termination::Burst { time, diameter, .. } => {
            assert!(time < 3000.0);
            assert!(diameter >= burst_diameter);
            assert!(flight.samples.iter().all(|s| s.time < time));

            let n = flight.samples.len();
            let last = flight.samples[n - 1];
            let before = flight.samples[n - 2];
            assert!(last.balloon_diameter >= burst_diameter);
            assert!(before.balloon_diameter < burst_diameter);
            assert!(implied_diameter(&balloon, last.altitude) >= burst_diameter);
        }
    }
}

#[test]
fn identical_runs_are_bit_for_bit_equal() {
    let (a, _) = fly_hab_3000(0.1);
    let (b, _) = fly_hab_3000(0.1);
    assert_eq!(a, b);
}

#[test]
fn halving_dt_preserves_trajectory() {
    let (coarse, _) = fly_hab_3000(0.1);
    let (fine, _) = fly_hab_3000(0.05);

    for t in [60.0, 300.0, 600.0, 900.0] {
        let c = coarse.samples[(t / 0.1_f64).round() as usize];
        let f = fine.samples[(t / 0.05_f64).round() as usize];
        assert_relative_eq!(c.time, f.time, epsilon = 1e-6);
        assert_relative_eq!(c.altitude, f.altitude, max_relative = 0.01);
    }
}

#[test]
fn sample_config_round_trip_through_csv() {
    let config = SimConfig::from_json(include_str!("../sim_config.json")).unwrap();
    let flight = sim::run(&config).unwrap();
    assert!(!flight.samples.is_empty());

    let mut buf = Vec::new();
    csv::write_series(&mut buf, &flight.samples).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), flight.samples.len() + 1);
    assert!(text.starts_with("time,altitude,ascent_rate,ascent_accel\n"));
}

#[test]
fn time_step_outside_band_is_clamped_not_rejected() {
    let mut config = SimConfig::from_json(include_str!("../sim_config.json")).unwrap();
    config.simulation.duration = 10.0;

    config.simulation.dt = 0.9;
    let flight = sim::run(&config).unwrap();
    assert_eq!(flight.time_step.effective, 0.5);
    assert_eq!(flight.samples.len(), 20);

    config.simulation.dt = 0.0001;
    let flight = sim::run(&config).unwrap();
    assert_eq!(flight.time_step.effective, 0.001);
    assert_eq!(flight.samples.len(), 10_000);
}

#[test]
fn configuration_errors_abort_before_stepping() {
    let mut config = SimConfig::from_json(include_str!("../sim_config.json")).unwrap();
    config.balloon.part_number = "HAB-9001".into();
    let err = sim::run(&config).unwrap_err();
    assert!(matches!(err, Error::UnknownBalloon(_)));
    assert!(err.is_configuration());
}

#[test]
fn neutral_buoyancy_floats_in_place() {
    let air = |altitude: f64| AtmosphereSample {
        altitude,
        temperature: 250.0,
        pressure: 40_000.0,
        density: 40_000.0 / (287.052_87 * 250.0),
        gravity: -9.7,
    };

    let mut balloon = Balloon::from_part_number("HAB-1500").unwrap();
    balloon.lift_gas_mut().mass = 1.0;
    balloon.match_ambient(&air(7_000.0));
    let gas = balloon.lift_gas();
    let lift_kg = gas.volume() * (air(7_000.0).density - gas.density());
    let payload = Payload::new(lift_kg - balloon.mass(), 0.0);

    let settings = RunSettings {
        duration: 60.0,
        dt: 0.1,
        initial_altitude: 7_000.0,
        initial_velocity: 0.0,
    };
    let flight = sim::simulate(&air, &mut balloon, &payload, &settings).unwrap();
    for s in &flight.samples {
        assert!(s.ascent_accel.abs() < 1e-9);
        assert!((s.altitude - 7_000.0).abs() < 1e-6);
    }
}
