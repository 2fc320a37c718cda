//! # Synthetic transit lightcurves
//!
//! Forward model of the relative stellar flux during a planetary transit, using the
//! small-planet approximation of Mandel & Agol (2002, ApJ 580, L171) with the
//! 4-coefficient nonlinear limb darkening law.
//!
//! ## Algorithm
//!
//! For each timestamp `t_jd` (Julian Date):
//!
//! 1. Seconds since mid transit: `t = (t_jd - epoch) · 86400`.
//! 2. Sky-plane separation in stellar radii, for a circular orbit:
//!
//!    ```text
//!    z = D · sqrt( sin²(ωt) + (cos i · cos(ωt))² )
//!    ```
//!
//! 3. Orbital phase folded to `(-0.5, 0.5]`. Only `|phase| < phase_window` is
//!    considered for occultation, which keeps the secondary eclipse at full brightness.
//! 4. Regime selection against the radius ratio `p`, see [`OcclusionRegime`]:
//!
//!    * no overlap, `z ≥ 1 + p`: `F = 1`
//!    * planet fully on the disk, `z ≤ 1 - p`:
//!
//!      ```text
//!      F = 1 - p² · [ ∫_{z-p}^{z+p} I(r) 2r dr / (4zp) ] / 4 / Ω
//!      ```
//!
//!    * partial overlap:
//!
//!      ```text
//!      I*(z) = ∫_{z-p}^{1} I(r) 2r dr / (1 - (z-p)²)
//!      F = 1 - I*(z) · [ p² acos((z-1)/p) - (z-1) sqrt(p² - (z-1)²) ] / (4πΩ)
//!      ```
//!
//! Degenerate geometry is not filtered out: an exact `z = 0`, a radius ratio `p ≥ 1`
//! or an `acos` argument outside `[-1, 1]` produce NaN or infinite flux values,
//! which callers must read as an unevaluable region of parameter space.
//!
//! ## Example
//!
//! ```rust
//! use transyn::model::ModelParameters;
//! use transyn::synthetic::generate_synthetic;
//!
//! let model = ModelParameters {
//!     i: 88.0,
//!     c1: 0.2,
//!     c2: 0.1,
//!     c3: 0.05,
//!     c4: 0.05,
//!     ..Default::default()
//! };
//!
//! let flux = generate_synthetic(&[-1.0, 0.0, 1.0], &model);
//! assert_eq!(flux.len(), 3);
//! assert!(flux[1] < 1.0);
//! ```
use std::f64::consts::PI;

use log::{debug, trace};

use crate::constants::{Flux, PHASE_WINDOW, RADIAL_STEP, SECONDS_PER_DAY, JD};
use crate::model::ModelParameters;
use crate::quadrature::integrated_intensity_packed;
use crate::transyn_errors::TransynError;

/// Numerical settings of a lightcurve evaluation.
///
/// Fields
/// -----------------
/// * `radial_step` – step of the annulus quadrature in normalised stellar radii.
/// * `phase_window` – half-width of the phase window around primary transit in which
///   the occultation is evaluated; outside it the flux is exactly `1`.
///
/// Defaults
/// -----------------
/// * `radial_step`: 0.001
/// * `phase_window`: 0.25
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisParams {
    pub radial_step: f64,
    pub phase_window: f64,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        SynthesisParams {
            radial_step: RADIAL_STEP,
            phase_window: PHASE_WINDOW,
        }
    }
}

impl SynthesisParams {
    pub fn builder() -> SynthesisParamsBuilder {
        SynthesisParamsBuilder::default()
    }
}

/// Builder for [`SynthesisParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct SynthesisParamsBuilder {
    params: SynthesisParams,
}

impl SynthesisParamsBuilder {
    pub fn radial_step(mut self, v: f64) -> Self {
        self.params.radial_step = v;
        self
    }
    pub fn phase_window(mut self, v: f64) -> Self {
        self.params.phase_window = v;
        self
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `radial_step > 0` and finite,
    /// * `0 < phase_window ≤ 0.5`.
    pub fn build(self) -> Result<SynthesisParams, TransynError> {
        let p = self.params;
        if !(p.radial_step.is_finite() && p.radial_step > 0.0) {
            return Err(TransynError::InvalidSynthesisParams(format!(
                "radial_step must be finite and > 0 (got {})",
                p.radial_step
            )));
        }
        if !(p.phase_window > 0.0 && p.phase_window <= 0.5) {
            return Err(TransynError::InvalidSynthesisParams(format!(
                "phase_window must lie in (0, 0.5] (got {})",
                p.phase_window
            )));
        }
        Ok(p)
    }
}

/// Geometric overlap between the planet and stellar disks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OcclusionRegime {
    /// `z ≥ 1 + p`
    NoOverlap,
    /// `1 - p < z < 1 + p`
    Partial,
    /// `z ≤ 1 - p`
    Full,
}

impl OcclusionRegime {
    /// Classify a separation `z` against the radius ratio `p`.
    ///
    /// A NaN separation falls through to [`OcclusionRegime::Partial`].
    pub fn classify(z: f64, p: f64) -> Self {
        if z <= 1. - p {
            OcclusionRegime::Full
        } else if z >= 1. + p {
            OcclusionRegime::NoOverlap
        } else {
            OcclusionRegime::Partial
        }
    }
}

/// Fold a time offset into an orbital phase in `(-0.5, 0.5]`.
///
/// Arguments
/// -----------------
/// * `t`: seconds since mid transit
/// * `period_seconds`: orbital period in seconds
pub fn orbital_phase(t: f64, period_seconds: f64) -> f64 {
    let phase = (t / period_seconds).fract().abs();
    if phase > 0.5 {
        phase - 1.0
    } else {
        phase
    }
}

/// Relative flux for a given sky-plane separation.
///
/// Arguments
/// -----------------
/// * `z`: star–planet separation in stellar radii
/// * `p`: planet-to-star radius ratio
/// * `coeffs`: packed `[c0..c4]` limb darkening set, forwarded as is to the quadrature
/// * `omega`: normalisation `Ω` of `coeffs`
/// * `dr`: quadrature step
///
/// Return
/// ----------
/// * The relative flux, `1` out of transit. NaN or infinite in degenerate geometry.
///
/// See also
/// ------------
/// * [`OcclusionRegime::classify`] – regime decision used here.
/// * [`integrated_intensity_packed`] – annulus quadrature.
pub fn relative_flux(z: f64, p: f64, coeffs: &[f64; 5], omega: f64, dr: f64) -> Flux {
    match OcclusionRegime::classify(z, p) {
        OcclusionRegime::NoOverlap => 1.,
        OcclusionRegime::Full => {
            let norm = 1. / (4. * z * p);
            let integral = integrated_intensity_packed(dr, coeffs, z - p, z + p) * norm;
            1. - (p * p * integral / 4. / omega)
        }
        OcclusionRegime::Partial => {
            let start_point = z - p;
            let norm = 1. / (1. - start_point * start_point);

            // I*(z): mean intensity of the annulus under the planet
            let integral = integrated_intensity_packed(dr, coeffs, start_point, 1.) * norm;

            let sqrt_term = (z - 1.) * (p * p - (z - 1.) * (z - 1.)).sqrt();
            let acos_term = p * p * ((z - 1.) / p).acos();

            1. - (integral * (acos_term - sqrt_term) / (4. * PI * omega))
        }
    }
}

/// Per-call geometry derived once from the model.
#[derive(Debug, Clone, Copy)]
struct TransitGeometry {
    epoch: f64,
    normalised_distance: f64,
    radius_ratio: f64,
    angular_frequency: f64,
    period_seconds: f64,
    cos_i: f64,
    coeffs: [f64; 5],
    omega: f64,
}

impl TransitGeometry {
    fn new(model: &ModelParameters) -> Self {
        let limb_darkening = model.limb_darkening();
        TransitGeometry {
            epoch: model.epoch,
            normalised_distance: model.normalised_distance(),
            radius_ratio: model.radius_ratio(),
            angular_frequency: model.angular_frequency(),
            period_seconds: model.period_seconds(),
            cos_i: model.cos_inclination(),
            coeffs: *limb_darkening.coefficients(),
            omega: limb_darkening.omega(),
        }
    }

    /// Separation `z` and folded phase at a Julian Date.
    fn separation_and_phase(&self, jd: JD) -> (f64, f64) {
        let t = (jd - self.epoch) * SECONDS_PER_DAY;
        let wt = self.angular_frequency * t;

        let first_term = wt.sin().powi(2);
        let second_term = (self.cos_i * wt.cos()).powi(2);
        let z = self.normalised_distance * (first_term + second_term).sqrt();

        (z, orbital_phase(t, self.period_seconds))
    }

    /// Regime at `jd`, `None` when the phase lies outside the evaluation window.
    fn regime(&self, jd: JD, phase_window: f64) -> Option<OcclusionRegime> {
        let (z, phase) = self.separation_and_phase(jd);
        (phase > -phase_window && phase < phase_window)
            .then(|| OcclusionRegime::classify(z, self.radius_ratio))
    }

    fn flux(&self, jd: JD, params: &SynthesisParams) -> Flux {
        let (z, phase) = self.separation_and_phase(jd);

        if phase > -params.phase_window && phase < params.phase_window {
            relative_flux(
                z,
                self.radius_ratio,
                &self.coeffs,
                self.omega,
                params.radial_step,
            )
        } else {
            1.
        }
    }
}

/// Log the derived geometry of a call, and the regime census at trace level.
fn log_geometry(geometry: &TransitGeometry, jd: &[JD], params: &SynthesisParams) {
    debug!(
        "synthetic lightcurve: {} samples, D = {:.6}, p = {:.6}, omega = {:.6}",
        jd.len(),
        geometry.normalised_distance,
        geometry.radius_ratio,
        geometry.omega
    );

    if log::log_enabled!(log::Level::Trace) {
        let (mut gated, mut none, mut partial, mut full) = (0usize, 0usize, 0usize, 0usize);
        for &t in jd {
            match geometry.regime(t, params.phase_window) {
                None => gated += 1,
                Some(OcclusionRegime::NoOverlap) => none += 1,
                Some(OcclusionRegime::Partial) => partial += 1,
                Some(OcclusionRegime::Full) => full += 1,
            }
        }
        trace!(
            "regimes: {gated} outside phase window, {none} no overlap, {partial} partial, {full} full"
        );
    }
}

/// Compute a synthetic lightcurve with the default numerical settings.
///
/// Arguments
/// -----------------
/// * `jd`: observation times (Julian Date), any length
/// * `model`: star–planet system
///
/// Return
/// ----------
/// * One relative flux value per timestamp, in the same order, normalised so that
///   out-of-transit points are exactly `1`.
///
/// See also
/// ------------
/// * [`generate_synthetic_with`] – explicit quadrature step and phase window.
/// * [`relative_flux`] – flux at a given separation.
pub fn generate_synthetic(jd: &[JD], model: &ModelParameters) -> Vec<Flux> {
    generate_synthetic_with(jd, model, &SynthesisParams::default())
}

/// Compute a synthetic lightcurve with explicit [`SynthesisParams`].
pub fn generate_synthetic_with(
    jd: &[JD],
    model: &ModelParameters,
    params: &SynthesisParams,
) -> Vec<Flux> {
    let geometry = TransitGeometry::new(model);
    log_geometry(&geometry, jd, params);

    jd.iter().map(|&t| geometry.flux(t, params)).collect()
}

/// Data-parallel version of [`generate_synthetic_with`].
///
/// Timestamps are evaluated independently on the rayon thread pool; the output
/// keeps the input order.
#[cfg(feature = "parallel")]
pub fn generate_synthetic_par(
    jd: &[JD],
    model: &ModelParameters,
    params: &SynthesisParams,
) -> Vec<Flux> {
    use rayon::prelude::*;

    let geometry = TransitGeometry::new(model);
    log_geometry(&geometry, jd, params);

    jd.par_iter().map(|&t| geometry.flux(t, params)).collect()
}
