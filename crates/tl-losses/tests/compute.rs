use tl_core::{Tolerances, nearly_equal};
use tl_losses::*;

fn nameplate() -> InputParameters {
    InputParameters {
        primary_voltage: 230.0,
        secondary_voltage: 115.0,
        rated_power: 100.0,
        frequency: 50.0,
        winding_resistance: 2.0,
        core_type: CoreType::Crgo,
        core_size: 50.0,
        temperature: 25.0,
        load_level_percent: 50,
    }
}

#[test]
fn worked_example() {
    let analysis = compute(&nameplate()).unwrap();

    assert_eq!(analysis.sweep.len(), SWEEP_POINTS);
    assert_eq!(analysis.sweep[0], 0.0);
    assert_eq!(analysis.sweep[49], 100.0);

    assert!((analysis.curves.copper[49] - 200.0).abs() < 1e-9);
    assert!((analysis.curves.iron[0] - 1.255).abs() < 1e-9);
    assert_eq!(analysis.curves.efficiency[0], 0.0);
}

#[test]
fn every_curve_spans_the_sweep() {
    let analysis = compute(&nameplate()).unwrap();
    let c = &analysis.curves;
    for curve in [&c.iron, &c.copper, &c.stray, &c.dielectric, &c.total, &c.efficiency] {
        assert_eq!(curve.len(), SWEEP_POINTS);
    }
}

#[test]
fn total_is_sum_of_components() {
    let analysis = compute(&nameplate()).unwrap();
    let c = &analysis.curves;
    let tol = Tolerances::default();
    for i in 0..c.len() {
        let sum = c.iron[i] + c.copper[i] + c.stray[i] + c.dielectric[i];
        assert!(nearly_equal(c.total[i], sum, tol), "sample {}", i);
    }
}

#[test]
fn compute_is_deterministic() {
    let a = compute(&nameplate()).unwrap();
    let b = compute(&nameplate()).unwrap();
    assert_eq!(a, b);
    let fa: Vec<_> = a.frames().collect();
    let fb: Vec<_> = b.frames().collect();
    assert_eq!(fa, fb);
}

#[test]
fn unused_fields_do_not_change_curves() {
    let base = compute(&nameplate()).unwrap();
    let mut p = nameplate();
    p.core_type = CoreType::Amorphous;
    p.load_level_percent = 100;
    let other = compute(&p).unwrap();
    assert_eq!(base.sweep, other.sweep);
    assert_eq!(base.curves, other.curves);
    assert_eq!(base.bounds, other.bounds);
}

#[test]
fn animation_ends_fully_drawn() {
    let analysis = compute(&nameplate()).unwrap();
    let frames: Vec<_> = analysis.frames().collect();
    let last = frames.last().unwrap();
    assert_eq!(last.len, SWEEP_POINTS);
    for trace in &last.traces {
        assert_eq!(trace.x.len(), SWEEP_POINTS);
        assert_eq!(trace.y.len(), SWEEP_POINTS);
    }
    assert!(frames.windows(2).all(|w| w[0].len < w[1].len));
}

#[test]
fn frames_are_restartable() {
    let analysis = compute(&nameplate()).unwrap();
    let mut first = analysis.frames();
    first.next();
    first.next();
    let restarted = analysis.frames().next().unwrap();
    assert_eq!(restarted.index, 0);
    assert_eq!(restarted.len, 1);
}

#[test]
fn frame_traces_follow_legend_order() {
    let analysis = compute(&nameplate()).unwrap();
    let frame = analysis.frame(9).unwrap();
    let names: Vec<_> = frame.traces.iter().map(|t| t.name()).collect();
    assert_eq!(
        names,
        ["Iron Loss", "Copper Loss", "Stray Loss", "Dielectric Loss", "Efficiency (%)"]
    );
    assert_eq!(frame.traces[4].y, &analysis.curves.efficiency[..10]);
}

#[test]
fn each_gated_field_rejects_non_positive() {
    let fields: [(&str, fn(&mut InputParameters)); 5] = [
        ("primary_voltage", |p| p.primary_voltage = 0.0),
        ("secondary_voltage", |p| p.secondary_voltage = -1.0),
        ("rated_power", |p| p.rated_power = 0.0),
        ("frequency", |p| p.frequency = -50.0),
        ("winding_resistance", |p| p.winding_resistance = 0.0),
    ];
    for (name, break_it) in fields {
        let mut p = nameplate();
        break_it(&mut p);
        match compute(&p) {
            Err(ValidationError::NonPositive { field, .. }) => assert_eq!(field, name),
            Ok(_) => panic!("{} should be rejected", name),
        }
    }
}

#[test]
fn extreme_temperature_still_computes() {
    for temperature in [-50.0, 200.0] {
        let mut p = nameplate();
        p.temperature = temperature;
        let analysis = compute(&p).unwrap();
        assert!(analysis.curves.efficiency.iter().all(|v| v.is_finite()));
        assert!(analysis.bounds.y_max.is_finite());
    }
}
