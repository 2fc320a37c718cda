//! # Star–planet model parameters
//!
//! This module defines [`ModelParameters`], the immutable description of a transiting
//! system consumed by [`generate_synthetic`](crate::synthetic::generate_synthetic), and
//! its validating builder.
//!
//! ## Units
//!
//! | field     | unit            |
//! |-----------|-----------------|
//! | `a`       | AU              |
//! | `rs`      | solar radii     |
//! | `rp`      | Jupiter radii   |
//! | `period`  | days            |
//! | `i`       | degrees (90° = edge-on) |
//! | `epoch`   | Julian Date of mid transit |
//! | `mstar`   | solar masses    |
//! | `teff`    | Kelvin          |
//!
//! Only `a`, `rs`, `rp`, `period`, `i`, `epoch` and `c1..c4` enter the lightcurve.
//! `id`, `name`, `submodel_id`, `mstar` and `teff` are carried for bookkeeping by
//! callers and can be left at their defaults.
//!
//! ## Example
//!
//! ```rust
//! use transyn::model::ModelParameters;
//!
//! let model = ModelParameters::builder()
//!     .a(0.05)
//!     .rs(1.0)
//!     .rp(1.0)
//!     .period(3.0)
//!     .i(88.0)
//!     .epoch(2455000.5)
//!     .limb_darkening(0.2, 0.1, 0.05, 0.05)
//!     .build()
//!     .unwrap();
//!
//! assert!(model.radius_ratio() < 0.11);
//! ```
use crate::constants::{Degree, AU, DPI, RADEG, R_JUP, R_SUN, SECONDS_PER_DAY};
use crate::limb_darkening::LimbDarkening;
use crate::transyn_errors::TransynError;
use serde::{Deserialize, Serialize};

/// Parameters of a star–planet system on a circular orbit.
///
/// Building the struct literally performs no validation, so every degenerate regime
/// of the lightcurve (planet larger than the star, zero separation) stays reachable.
/// Use [`ModelParameters::builder`] to reject physically meaningless inputs up front.
///
/// See also
/// ------------
/// * [`ModelParametersBuilder::build`] – validation rules.
/// * [`crate::synthetic::generate_synthetic`] – consumer of these parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    pub id: i32,
    pub name: String,
    /// Link to a subtraction model, if any.
    pub submodel_id: i32,

    /// Orbital period (days)
    pub period: f64,
    /// Time of mid transit (JD)
    pub epoch: f64,
    /// Orbital separation (AU)
    pub a: f64,
    /// Orbital inclination, 90° being edge-on
    pub i: Degree,
    /// Stellar radius (solar radii)
    pub rs: f64,
    /// Planetary radius (Jupiter radii)
    pub rp: f64,
    /// Stellar mass (solar masses)
    pub mstar: f64,

    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,

    /// Stellar effective temperature (K)
    pub teff: f64,
}

impl Default for ModelParameters {
    /// A Jupiter-size planet on a 3 day orbit around a Sun-like star, no limb darkening.
    fn default() -> Self {
        ModelParameters {
            id: 0,
            name: String::new(),
            submodel_id: 0,
            period: 3.0,
            epoch: 0.0,
            a: 0.05,
            i: 90.0,
            rs: 1.0,
            rp: 1.0,
            mstar: 1.0,
            c1: 0.0,
            c2: 0.0,
            c3: 0.0,
            c4: 0.0,
            teff: 5778.0,
        }
    }
}

impl ModelParameters {
    /// Create a new [`ModelParametersBuilder`] starting from [`ModelParameters::default`].
    pub fn builder() -> ModelParametersBuilder {
        ModelParametersBuilder::new()
    }

    /// Planet-to-star radius ratio `p = rp·R_JUP / (rs·R_SUN)`.
    pub fn radius_ratio(&self) -> f64 {
        (self.rp * R_JUP) / (self.rs * R_SUN)
    }

    /// Orbital distance in stellar radii, `D = a·AU / (rs·R_SUN)`.
    pub fn normalised_distance(&self) -> f64 {
        self.a * AU / (self.rs * R_SUN)
    }

    pub fn period_seconds(&self) -> f64 {
        self.period * SECONDS_PER_DAY
    }

    /// Orbital angular frequency (rad/s).
    pub fn angular_frequency(&self) -> f64 {
        DPI / self.period_seconds()
    }

    pub fn cos_inclination(&self) -> f64 {
        (self.i * RADEG).cos()
    }

    /// The packed `[c0..c4]` limb darkening set of this model.
    pub fn limb_darkening(&self) -> LimbDarkening {
        LimbDarkening::from_nonlinear(self.c1, self.c2, self.c3, self.c4)
    }
}

/// Builder for [`ModelParameters`], with validation.
#[derive(Debug, Clone, Default)]
pub struct ModelParametersBuilder {
    params: ModelParameters,
}

impl ModelParametersBuilder {
    pub fn new() -> Self {
        Self {
            params: ModelParameters::default(),
        }
    }

    pub fn id(mut self, v: i32) -> Self {
        self.params.id = v;
        self
    }
    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.params.name = v.into();
        self
    }
    pub fn submodel_id(mut self, v: i32) -> Self {
        self.params.submodel_id = v;
        self
    }

    // --- Orbit ---
    pub fn period(mut self, v: f64) -> Self {
        self.params.period = v;
        self
    }
    pub fn epoch(mut self, v: f64) -> Self {
        self.params.epoch = v;
        self
    }
    pub fn a(mut self, v: f64) -> Self {
        self.params.a = v;
        self
    }
    pub fn i(mut self, v: Degree) -> Self {
        self.params.i = v;
        self
    }

    // --- Bodies ---
    pub fn rs(mut self, v: f64) -> Self {
        self.params.rs = v;
        self
    }
    pub fn rp(mut self, v: f64) -> Self {
        self.params.rp = v;
        self
    }
    pub fn mstar(mut self, v: f64) -> Self {
        self.params.mstar = v;
        self
    }
    pub fn teff(mut self, v: f64) -> Self {
        self.params.teff = v;
        self
    }

    /// Set the four nonlinear limb darkening coefficients at once.
    pub fn limb_darkening(mut self, c1: f64, c2: f64, c3: f64, c4: f64) -> Self {
        self.params.c1 = c1;
        self.params.c2 = c2;
        self.params.c3 = c3;
        self.params.c4 = c4;
        self
    }

    /// Finalize the builder and produce a [`ModelParameters`] instance.
    ///
    /// Validation rules
    /// -----------------
    /// * every orbital, radius and limb darkening value must be finite,
    /// * `a > 0`, `rs > 0`, `period > 0`,
    /// * `rp >= 0`,
    /// * the radius ratio `p` must stay below `1` (small-planet approximation).
    ///
    /// Returns
    /// -----------------
    /// * `Ok(ModelParameters)` if all values are valid.
    /// * `Err(TransynError::InvalidModelParameter)` naming the first failing rule.
    pub fn build(self) -> Result<ModelParameters, TransynError> {
        let p = &self.params;

        let finite = [
            ("period", p.period),
            ("epoch", p.epoch),
            ("a", p.a),
            ("i", p.i),
            ("rs", p.rs),
            ("rp", p.rp),
            ("c1", p.c1),
            ("c2", p.c2),
            ("c3", p.c3),
            ("c4", p.c4),
        ];
        if let Some((name, v)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TransynError::InvalidModelParameter(format!(
                "{name} must be finite (got {v})"
            )));
        }

        if p.a <= 0.0 {
            return Err(TransynError::InvalidModelParameter(format!(
                "a must be > 0 (got {})",
                p.a
            )));
        }
        if p.rs <= 0.0 {
            return Err(TransynError::InvalidModelParameter(format!(
                "rs must be > 0 (got {})",
                p.rs
            )));
        }
        if p.period <= 0.0 {
            return Err(TransynError::InvalidModelParameter(format!(
                "period must be > 0 (got {})",
                p.period
            )));
        }
        if p.rp < 0.0 {
            return Err(TransynError::InvalidModelParameter(format!(
                "rp must be >= 0 (got {})",
                p.rp
            )));
        }
        let ratio = p.radius_ratio();
        if ratio >= 1.0 {
            return Err(TransynError::InvalidModelParameter(format!(
                "radius ratio rp/rs must be < 1 (got {ratio})"
            )));
        }

        Ok(self.params)
    }
}
