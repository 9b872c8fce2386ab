use approx::assert_relative_eq;

use cycles_core::{Model, Snapshot, constraint::ConstraintError};

use crate::{Cycle, CycleError, CycleParameters, Field, compute_efficiency};

use super::{
    CycleDiagram, DiagramBuilder, DiagramSettings, LegFilter, ProcessKind, StatePoint,
    build_diagram, build_diagram_with,
};

const INTAKE: StatePoint = StatePoint {
    volume: 1.0,
    pressure: 1.0,
};

fn full(cycle: Cycle, params: &CycleParameters) -> CycleDiagram {
    build_diagram(cycle, params, &LegFilter::all()).unwrap()
}

fn fine(cycle: Cycle, params: &CycleParameters) -> CycleDiagram {
    let settings = DiagramSettings::default().with_samples(2000).unwrap();
    build_diagram_with(cycle, params, &LegFilter::all(), &settings).unwrap()
}

fn kinds(diagram: &CycleDiagram) -> Vec<ProcessKind> {
    diagram.legs.iter().map(|leg| leg.kind()).collect()
}

#[test]
fn every_cycle_closes_at_the_intake_state() {
    let params = CycleParameters::default();
    for cycle in Cycle::ALL {
        let diagram = full(cycle, &params);
        let first = diagram.points().next().unwrap();
        let last = diagram.points().last().unwrap();
        assert_eq!(first, INTAKE, "{cycle}");
        assert_eq!(last, INTAKE, "{cycle}");
        assert_eq!(diagram.states[0], INTAKE, "{cycle}");
    }
}

#[test]
fn legs_join_end_to_start() {
    let params = CycleParameters::default();
    for cycle in Cycle::ALL {
        let diagram = full(cycle, &params);
        for pair in diagram.legs.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start(), "{cycle}");
        }
        for (leg, state) in diagram.legs.iter().zip(&diagram.states) {
            assert_eq!(leg.start(), *state, "{cycle}");
        }
    }
}

fn assert_monotonic_legs(diagram: &CycleDiagram) {
    for leg in &diagram.legs {
        let points = leg.points();
        assert!(points.len() >= 2, "{}", leg.kind());
        for pair in points.windows(2) {
            let [a, b] = [pair[0], pair[1]];
            match leg.kind() {
                ProcessKind::Compression => assert!(b.volume < a.volume),
                ProcessKind::Expansion => assert!(b.volume > a.volume),
                ProcessKind::IsobaricHeating => {
                    assert!(b.volume > a.volume);
                    assert_eq!(b.pressure, a.pressure);
                }
                ProcessKind::IsochoricHeating | ProcessKind::HeatRejection => {
                    assert_eq!(b.volume, a.volume);
                }
            }
        }
    }
}

#[test]
fn legs_are_monotonic_in_volume() {
    let params = CycleParameters::default();
    for cycle in Cycle::ALL {
        assert_monotonic_legs(&full(cycle, &params));
    }
}

#[test]
fn cutoff_barely_above_one_stays_monotonic() {
    let params = CycleParameters::new(18.0, 1.0 + 1e-15, 0.5, 1.4).unwrap();
    for cycle in [Cycle::Diesel, Cycle::Seliger] {
        assert_monotonic_legs(&full(cycle, &params));
    }
}

#[test]
fn legs_follow_the_sample_counts() {
    let settings = DiagramSettings::new(7, 3, 3.0, 2.5).unwrap();
    let diagram = build_diagram_with(
        Cycle::Seliger,
        &CycleParameters::default(),
        &LegFilter::all(),
        &settings,
    )
    .unwrap();

    for leg in &diagram.legs {
        let expected = if leg.kind().is_isochoric() { 3 } else { 7 };
        assert_eq!(leg.points().len(), expected, "{}", leg.kind());
    }
}

#[test]
fn leg_order_per_cycle() {
    let params = CycleParameters::default();

    assert_eq!(
        kinds(&full(Cycle::Otto, &params)),
        vec![
            ProcessKind::Compression,
            ProcessKind::IsochoricHeating,
            ProcessKind::Expansion,
            ProcessKind::HeatRejection,
        ]
    );
    assert_eq!(
        kinds(&full(Cycle::Diesel, &params)),
        vec![
            ProcessKind::Compression,
            ProcessKind::IsobaricHeating,
            ProcessKind::Expansion,
            ProcessKind::HeatRejection,
        ]
    );
    assert_eq!(kinds(&full(Cycle::Seliger, &params)), ProcessKind::ALL.to_vec());
    assert_eq!(full(Cycle::Seliger, &params).states.len(), 5);
}

#[test]
fn filter_selects_legs_without_changing_the_cycle() {
    let params = CycleParameters::default();
    let complete = full(Cycle::Seliger, &params);

    let filter = LegFilter::none()
        .with(ProcessKind::IsochoricHeating)
        .with(ProcessKind::IsobaricHeating);
    let combustion = build_diagram(Cycle::Seliger, &params, &filter).unwrap();

    assert_eq!(
        kinds(&combustion),
        vec![ProcessKind::IsochoricHeating, ProcessKind::IsobaricHeating]
    );
    assert_eq!(combustion.states, complete.states);
    assert_eq!(combustion.efficiency, complete.efficiency);
    assert_eq!(combustion.work().to_bits(), complete.work().to_bits());

    let empty = build_diagram(Cycle::Seliger, &params, &LegFilter::none()).unwrap();
    assert!(empty.legs.is_empty());
    assert_eq!(empty.points().count(), 0);
    assert_eq!(empty.states, complete.states);
}

#[test]
fn leg_lookup() {
    let diagram = full(Cycle::Diesel, &CycleParameters::default());
    assert!(diagram.leg(ProcessKind::IsochoricHeating).is_none());

    let isobaric = diagram.leg(ProcessKind::IsobaricHeating).unwrap();
    assert_relative_eq!(isobaric.end().volume, 2.0 / 18.0);
}

#[test]
fn diagram_carries_the_cycle_efficiency() {
    let params = CycleParameters::default();
    for cycle in Cycle::ALL {
        let diagram = full(cycle, &params);
        assert_eq!(diagram.cycle, cycle);
        assert_eq!(diagram.efficiency, compute_efficiency(cycle, &params).unwrap());
    }
}

#[test]
fn otto_loop_area_matches_efficiency() {
    let params = CycleParameters::default();
    let diagram = fine(Cycle::Otto, &params);

    let kappa = params.heat_capacity_ratio();
    let &[_, compressed, peak, ..] = &diagram.states[..] else {
        panic!("expected four Otto states");
    };
    let heat_in = compressed.volume * (peak.pressure - compressed.pressure) / (kappa - 1.0);

    assert_relative_eq!(
        diagram.work() / heat_in,
        diagram.efficiency.eta,
        max_relative = 1e-4
    );
}

#[test]
fn diesel_loop_area_matches_efficiency() {
    let params = CycleParameters::default();
    let diagram = fine(Cycle::Diesel, &params);

    let kappa = params.heat_capacity_ratio();
    let &[_, compressed, cutoff, ..] = &diagram.states[..] else {
        panic!("expected four Diesel states");
    };
    let heat_in =
        kappa / (kappa - 1.0) * compressed.pressure * (cutoff.volume - compressed.volume);

    assert_relative_eq!(
        diagram.work() / heat_in,
        diagram.efficiency.eta,
        max_relative = 1e-4
    );
}

#[test]
fn seliger_diagram_reduces_to_its_limits() {
    let settings = DiagramSettings::default();

    // With a matching rise, α = 1 draws the Otto cycle.
    let otto_like = CycleParameters::default().with_heat_release_split(1.0).unwrap();
    let matched = settings
        .with_seliger_pressure_rise(settings.peak_pressure_ratio() - 1.0)
        .unwrap();
    let seliger = build_diagram_with(Cycle::Seliger, &otto_like, &LegFilter::all(), &matched)
        .unwrap();
    let otto = full(Cycle::Otto, &otto_like);
    assert_eq!(seliger.legs, otto.legs);
    assert_eq!(seliger.states, otto.states);
    assert_eq!(seliger.efficiency.eta, otto.efficiency.eta);

    // α = 0 draws the Diesel cycle.
    let diesel_like = CycleParameters::default().with_heat_release_split(0.0).unwrap();
    let seliger = full(Cycle::Seliger, &diesel_like);
    let diesel = full(Cycle::Diesel, &diesel_like);
    assert_eq!(seliger.legs, diesel.legs);
    assert_eq!(seliger.efficiency.eta, diesel.efficiency.eta);
}

#[test]
fn net_work_is_positive_and_grows_with_cutoff() {
    let work = |rho: f64| {
        let params = CycleParameters::new(18.0, rho, 0.5, 1.4).unwrap();
        full(Cycle::Diesel, &params).work()
    };

    assert!(work(1.5) > 0.0);
    assert!(work(2.5) > work(1.5));
}

#[test]
fn cutoff_at_compression_ratio_is_rejected() {
    let rejected = CycleError::InvalidParameter {
        field: Field::CutoffRatio,
        value: 10.0,
        reason: ConstraintError::AboveMaximum,
    };

    let params = CycleParameters::new(10.0, 10.0, 0.5, 1.4).unwrap();
    assert_eq!(
        build_diagram(Cycle::Diesel, &params, &LegFilter::all()).unwrap_err(),
        rejected
    );
    assert!(build_diagram(Cycle::Otto, &params, &LegFilter::all()).is_ok());

    // Half the heat goes in at constant volume, so V4 = 0.55·V1.
    let seliger = build_diagram(Cycle::Seliger, &params, &LegFilter::all()).unwrap();
    let burnt = seliger.leg(ProcessKind::IsobaricHeating).unwrap().end();
    assert_relative_eq!(burnt.volume, 0.55, max_relative = 1e-12);

    let params = CycleParameters::new(10.0, 10.0, 0.0, 1.4).unwrap();
    assert_eq!(
        build_diagram(Cycle::Seliger, &params, &LegFilter::all()).unwrap_err(),
        rejected
    );
}

#[test]
fn overflowing_peak_pressure_is_rejected() {
    let settings = DiagramSettings::default()
        .with_peak_pressure_ratio(f64::MAX)
        .unwrap();
    let err = build_diagram_with(
        Cycle::Otto,
        &CycleParameters::default(),
        &LegFilter::all(),
        &settings,
    )
    .unwrap_err();
    assert_eq!(err.field(), Field::PeakPressureRatio);
}

#[test]
fn identical_inputs_give_identical_diagrams() {
    let params = CycleParameters::new(21.5, 1.7, 0.3, 1.33).unwrap();
    for cycle in Cycle::ALL {
        let a = full(cycle, &params);
        let b = full(cycle, &params);
        assert_eq!(a, b);
        assert_eq!(a.work().to_bits(), b.work().to_bits());
    }
}

#[test]
fn builder_is_a_model() {
    let builder = DiagramBuilder::new(Cycle::Diesel)
        .with_filter(LegFilter::all().without(ProcessKind::HeatRejection));
    let params = CycleParameters::default();

    let Snapshot { input, output } = builder.snapshot(params).unwrap();
    assert_eq!(input, params);
    assert_eq!(output.legs.len(), 3);
    assert_eq!(builder.cycle(), Cycle::Diesel);

    let too_far = CycleParameters::new(2.0, 2.0, 0.5, 1.4).unwrap();
    assert!(builder.call(&too_far).is_err());
}

#[test]
fn diagram_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CycleDiagram>();
    assert_send_sync::<DiagramBuilder>();
    assert_send_sync::<CycleError>();
}
