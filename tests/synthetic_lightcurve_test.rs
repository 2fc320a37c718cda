mod common;

use approx::assert_relative_eq;
use common::{edge_on_plain, hot_jupiter, phase_grid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use transyn::generate_synthetic;
use transyn::lightcurve::Lightcurve;
use transyn::model::ModelParameters;
use transyn::synthetic::{generate_synthetic_with, SynthesisParams};

#[test]
fn test_output_length_matches_input() {
    let model = hot_jupiter();
    let mut rng = StdRng::seed_from_u64(42);

    for &n in &[0usize, 1, 7, 1000] {
        let jd: Vec<f64> = (0..n).map(|_| rng.random_range(-10.0..10.0)).collect();
        assert_eq!(generate_synthetic(&jd, &model).len(), n);
    }
}

#[test]
fn test_mid_transit_flux() {
    let flux = generate_synthetic(&[0.0, 0.02], &hot_jupiter());
    assert_relative_eq!(flux[0], 0.9886951210834365, epsilon = 1e-9);
    assert_relative_eq!(flux[1], 0.9897557750394204, epsilon = 1e-9);

    // Leading packed coefficients all zero: uniform disk inside the quadrature
    let uniform = ModelParameters {
        c1: 0.0,
        c2: 0.0,
        c3: 0.0,
        c4: 1.0,
        ..hot_jupiter()
    };
    let flux = generate_synthetic(&[0.0], &uniform);
    assert_relative_eq!(flux[0], 0.9788457067832117, epsilon = 1e-9);
}

#[test]
fn test_outside_phase_window_is_unity() {
    // Edge-on: phase 0.5 puts the planet right behind the star
    let model = edge_on_plain();
    let jd = phase_grid(&model, &[0.26, 0.3, 0.4, 0.5, 0.6, 0.7, 0.74], 3);
    let flux = generate_synthetic(&jd, &model);
    assert!(flux.iter().all(|&f| f == 1.0), "{flux:?}");
}

#[test]
fn test_no_overlap_is_unity() {
    let model = hot_jupiter();
    let jd = phase_grid(&model, &[-0.2, -0.1, -0.05, 0.05, 0.1, 0.2, 0.24], 2);
    let flux = generate_synthetic(&jd, &model);
    assert!(flux.iter().all(|&f| f == 1.0), "{flux:?}");
}

#[test]
fn test_transit_is_symmetric() {
    let model = hot_jupiter();
    for &x in &[0.001, 0.005, 0.01, 0.015, 0.03, 0.05, 0.2] {
        let flux = generate_synthetic(&[x, -x], &model);
        assert_relative_eq!(flux[0], flux[1], epsilon = 1e-12);
    }

    let shifted = ModelParameters {
        epoch: 2455000.5,
        ..hot_jupiter()
    };
    for &x in &[0.005, 0.015, 0.03] {
        let flux = generate_synthetic(&[shifted.epoch + x, shifted.epoch - x], &shifted);
        assert_relative_eq!(flux[0], flux[1], epsilon = 1e-7);
    }
}

#[test]
fn test_transit_repeats_every_period() {
    let model = hot_jupiter();
    let reference = generate_synthetic(&[0.01], &model)[0];
    for n in 1..5 {
        let flux = generate_synthetic(&[0.01 + n as f64 * model.period], &model)[0];
        assert_relative_eq!(flux, reference, epsilon = 1e-6);
    }
}

#[test]
fn test_ingress_dims_towards_mid_transit() {
    let model = hot_jupiter();
    // From before first contact (~0.046 d) down to mid transit
    let jd: Vec<f64> = (0..=50).map(|k| 0.05 - k as f64 * 1e-3).collect();
    let flux = generate_synthetic(&jd, &model);
    for pair in flux.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-4, "{} -> {}", pair[0], pair[1]);
    }
    assert_eq!(flux[0], 1.0);
    assert!(flux[50] < 0.99);
}

#[test]
fn test_edge_on_mid_transit_is_degenerate() {
    // cos(90°) is not exactly zero: z is a few 1e-16 and the full-overlap
    // normalisation 1 / (4zp) blows up
    let flux = generate_synthetic(&[0.0], &edge_on_plain());
    assert_eq!(flux.len(), 1);
    assert!(!(0.0..=1.0).contains(&flux[0]), "got {}", flux[0]);
}

#[test]
fn test_phase_window_threshold() {
    // Compact orbit (D ≈ 0.86): the planet overlaps the disk at every phase,
    // so only the phase gate can bring the flux back to 1
    let model = ModelParameters {
        a: 0.004,
        ..hot_jupiter()
    };
    // 0.75 d is exactly a quarter period
    let flux = generate_synthetic(&[0.74, 0.75, 0.76], &model);
    assert!(flux[0] < 1.0, "{flux:?}");
    assert_relative_eq!(flux[0], 0.992645761159659, epsilon = 1e-9);
    assert_eq!(flux[1], 1.0);
    assert_eq!(flux[2], 1.0);
}

#[test]
fn test_planet_larger_than_star_does_not_panic() {
    // 15 Jupiter radii around a Sun-like star: p ≈ 1.54, outside the
    // small-planet approximation and rejected by the builder
    let model = ModelParameters {
        rp: 15.0,
        ..hot_jupiter()
    };
    assert!(model.radius_ratio() >= 1.0);
    assert!(ModelParameters::builder().rp(15.0).build().is_err());

    let jd = [0.0, 0.3, 1.5];
    let flux = generate_synthetic(&jd, &model);
    assert_eq!(flux.len(), jd.len());
    // Partial branch integrates over r < -1: the result is not a number
    assert!(!flux[0].is_finite());
    // Well clear of the disk, and gated out at secondary conjunction
    assert_eq!(flux[1], 1.0);
    assert_eq!(flux[2], 1.0);
}

#[test]
fn test_phase_window_hides_secondary_conjunction() {
    let model = ModelParameters {
        i: 88.0,
        ..edge_on_plain()
    };
    let gated = generate_synthetic(&[1.49], &model);
    assert_eq!(gated[0], 1.0);

    // Opening the window to the whole orbit lets the far-side conjunction occult
    let params = SynthesisParams::builder()
        .phase_window(0.5)
        .build()
        .unwrap();
    let open = generate_synthetic_with(&[1.49], &model, &params);
    assert!(open[0] < 1.0);
}

#[test]
fn test_lightcurve_matches_generator() {
    let model = hot_jupiter();
    let jd: Vec<f64> = (-50..=50).map(|k| k as f64 * 1e-3).collect();
    let lc = Lightcurve::synthetic(jd.clone(), &model);

    let observed = generate_synthetic(&jd, &model);
    let residuals = lc.residuals(&observed).unwrap();
    assert!(residuals.iter().all(|&r| r == 0.0));

    let sigma = vec![1e-4; jd.len()];
    assert_eq!(lc.chi_squared(&observed, &sigma).unwrap(), 0.0);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_matches_sequential() {
    use transyn::synthetic::generate_synthetic_par;

    let model = hot_jupiter();
    let mut rng = StdRng::seed_from_u64(7);
    let jd: Vec<f64> = (0..5000).map(|_| rng.random_range(-0.1..0.1)).collect();

    let params = SynthesisParams::default();
    assert_eq!(
        generate_synthetic_par(&jd, &model, &params),
        generate_synthetic(&jd, &model)
    );
}
