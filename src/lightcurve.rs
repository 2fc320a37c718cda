//! # Lightcurve container
//!
//! A [`Lightcurve`] pairs observation times with relative flux values, index for index.
//! It is the natural output of [`Lightcurve::synthetic`] and the input of the
//! residual helpers a fitting loop needs to compare a model with photometry.
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::constants::{Flux, JD};
use crate::model::ModelParameters;
use crate::synthetic::{generate_synthetic_with, SynthesisParams};
use crate::transyn_errors::TransynError;

/// Times (JD) and relative fluxes of equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lightcurve {
    jd: Vec<JD>,
    flux: Vec<Flux>,
}

impl Lightcurve {
    /// Pair times with fluxes.
    ///
    /// Errors
    /// ------
    /// Returns [`TransynError::LengthMismatch`] when the two vectors differ in length.
    pub fn new(jd: Vec<JD>, flux: Vec<Flux>) -> Result<Self, TransynError> {
        if jd.len() != flux.len() {
            return Err(TransynError::LengthMismatch(jd.len(), flux.len()));
        }
        Ok(Lightcurve { jd, flux })
    }

    /// Evaluate `model` at every time of `jd` with the default numerical settings.
    pub fn synthetic(jd: Vec<JD>, model: &ModelParameters) -> Self {
        Self::synthetic_with(jd, model, &SynthesisParams::default())
    }

    pub fn synthetic_with(jd: Vec<JD>, model: &ModelParameters, params: &SynthesisParams) -> Self {
        let flux = generate_synthetic_with(&jd, model, params);
        Lightcurve { jd, flux }
    }

    pub fn jd(&self) -> &[JD] {
        &self.jd
    }

    pub fn flux(&self) -> &[Flux] {
        &self.flux
    }

    pub fn len(&self) -> usize {
        self.jd.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jd.is_empty()
    }

    /// Iterate over `(jd, flux)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (JD, Flux)> + '_ {
        self.jd.iter().copied().zip_eq(self.flux.iter().copied())
    }

    /// Observed minus model flux, one value per point.
    ///
    /// Errors
    /// ------
    /// Returns [`TransynError::LengthMismatch`] if `observed` does not have one value per point.
    pub fn residuals(&self, observed: &[Flux]) -> Result<Vec<Flux>, TransynError> {
        if observed.len() != self.len() {
            return Err(TransynError::LengthMismatch(self.len(), observed.len()));
        }
        Ok(observed
            .iter()
            .zip_eq(&self.flux)
            .map(|(obs, model)| obs - model)
            .collect())
    }

    /// `χ² = Σ ((observed - model) / σ)²` with per-point uncertainties.
    ///
    /// A non-finite model flux makes the statistic non-finite, which a minimiser can
    /// use to reject the parameters that produced it.
    pub fn chi_squared(&self, observed: &[Flux], sigma: &[f64]) -> Result<f64, TransynError> {
        if sigma.len() != self.len() {
            return Err(TransynError::LengthMismatch(self.len(), sigma.len()));
        }
        let residuals = self.residuals(observed)?;
        Ok(residuals
            .iter()
            .zip_eq(sigma)
            .map(|(r, s)| (r / s).powi(2))
            .sum())
    }
}
