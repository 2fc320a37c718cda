#![allow(dead_code)]

use transyn::model::ModelParameters;

/// Jupiter-size planet on a 3 day orbit at 0.05 AU, slightly inclined so that
/// mid transit sits at z ≈ 0.375.
pub fn hot_jupiter() -> ModelParameters {
    ModelParameters::builder()
        .name("hot jupiter")
        .a(0.05)
        .rs(1.0)
        .rp(1.0)
        .period(3.0)
        .i(88.0)
        .epoch(0.0)
        .limb_darkening(0.2, 0.1, 0.05, 0.05)
        .build()
        .expect("valid hot jupiter model")
}

/// Same system seen edge-on, without limb darkening coefficients.
pub fn edge_on_plain() -> ModelParameters {
    ModelParameters {
        a: 0.05,
        rs: 1.0,
        rp: 1.0,
        period: 3.0,
        i: 90.0,
        epoch: 0.0,
        c1: 0.0,
        c2: 0.0,
        c3: 0.0,
        c4: 0.0,
        ..Default::default()
    }
}

/// Times at the given orbital phases over `2 * cycles + 1` periods around the epoch.
pub fn phase_grid(model: &ModelParameters, phases: &[f64], cycles: i32) -> Vec<f64> {
    (-cycles..=cycles)
        .flat_map(|n| {
            phases
                .iter()
                .map(move |ph| model.epoch + (n as f64 + ph) * model.period)
        })
        .collect()
}
