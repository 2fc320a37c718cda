//! # Nonlinear limb darkening
//!
//! Stellar surface brightness under the 4-coefficient nonlinear law (Claret 2000):
//!
//! ```text
//! I(r) = 1 - Σ_{n=1}^{4} c_n (1 - μ^{n/2}),   μ = sqrt(1 - r²)
//! ```
//!
//! with the implicit zeroth coefficient `c0 = 1 - c1 - c2 - c3 - c4`.
//!
//! The disk-integrated normalisation is
//!
//! ```text
//! Ω = Σ_{n=0}^{4} c_n / (n + 4)
//! ```
//!
//! No domain checks are made: for `r > 1` the fractional powers are taken on a
//! negative base and the intensity is NaN.

use crate::transyn_errors::TransynError;
use serde::{Deserialize, Serialize};

/// Intensity at normalised disk radius `r`.
///
/// Arguments
/// -----------------
/// * `r`: normalised radial coordinate on the stellar disk, expected in `[0, 1]`
/// * `c1`, `c2`, `c3`, `c4`: nonlinear limb darkening coefficients
///
/// Return
/// ----------
/// * The relative surface brightness, `1` at disk centre and `1 - c1 - c2 - c3 - c4` at the limb.
pub fn intensity(r: f64, c1: f64, c2: f64, c3: f64, c4: f64) -> f64 {
    let mu_sq = 1. - r * r;

    let mut i = 1.;
    i -= c1 * (1. - mu_sq.powf(1. / 4.));
    i -= c2 * (1. - mu_sq.powf(2. / 4.));
    i -= c3 * (1. - mu_sq.powf(3. / 4.));
    i -= c4 * (1. - mu_sq.powf(4. / 4.));
    i
}

/// Intensity at `r` with the coefficients packed in a 5-element set.
///
/// Indices `0..=3` of `coeffs` are passed as `c1..c4` to [`intensity`];
/// the last entry is not read.
pub fn intensity_packed(r: f64, coeffs: &[f64; 5]) -> f64 {
    intensity(r, coeffs[0], coeffs[1], coeffs[2], coeffs[3])
}

/// Disk-integrated normalisation `Ω = Σ c_n / (n + 4)` of a full `[c0..c4]` set.
pub fn omega(coeffs: &[f64; 5]) -> f64 {
    coeffs
        .iter()
        .enumerate()
        .map(|(n, c)| c / (n as f64 + 4.))
        .sum()
}

/// Limb darkening coefficient set `[c0, c1, c2, c3, c4]`.
///
/// Built once per lightcurve evaluation from the four model coefficients,
/// `c0` being derived so that the set sums to one.
///
/// See also
/// ------------
/// * [`omega`] – normalisation constant of the set.
/// * [`crate::quadrature::integrated_intensity_packed`] – annulus quadrature over the packed set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimbDarkening {
    coeffs: [f64; 5],
}

impl LimbDarkening {
    /// Build the full set from the four nonlinear coefficients.
    pub fn from_nonlinear(c1: f64, c2: f64, c3: f64, c4: f64) -> Self {
        let c0 = 1. - c1 - c2 - c3 - c4;
        LimbDarkening {
            coeffs: [c0, c1, c2, c3, c4],
        }
    }

    /// The packed `[c0, c1, c2, c3, c4]` sequence.
    pub fn coefficients(&self) -> &[f64; 5] {
        &self.coeffs
    }

    pub fn omega(&self) -> f64 {
        omega(&self.coeffs)
    }

    /// Intensity at `r` using the true `c1..c4` of this set.
    pub fn intensity(&self, r: f64) -> f64 {
        let [_, c1, c2, c3, c4] = self.coeffs;
        intensity(r, c1, c2, c3, c4)
    }
}

impl TryFrom<&[f64]> for LimbDarkening {
    type Error = TransynError;

    /// Take an already packed `[c0..c4]` slice, rejecting any other length.
    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        let coeffs: [f64; 5] = value
            .try_into()
            .map_err(|_| TransynError::InvalidCoefficientCount(value.len()))?;
        Ok(LimbDarkening { coeffs })
    }
}
