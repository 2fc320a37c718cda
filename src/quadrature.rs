//! # Annulus-integrated intensity
//!
//! Fixed-step rectangle quadrature of
//!
//! ```text
//! ∫_{r_low}^{r_high} I(r) · 2r dr
//! ```
//!
//! The rule samples the left edge of every step, starting at `r_low`. The number
//! of steps is fixed up front as `ceil((r_high - r_low) / dr)` rather than by
//! accumulating `dr` and comparing against `r_high`, so the step count does not
//! depend on rounding of the running radius. The last rectangle may overrun
//! `r_high` by less than one step; this is part of the quadrature error budget
//! and is not corrected.

use crate::limb_darkening::intensity;

/// Number of left-edge samples used between `r_low` and `r_high`.
///
/// Return
/// ----------
/// * `Some(0)` for an empty, reversed or NaN interval.
/// * `None` when the step count is not finite (infinite bound or zero step).
pub(crate) fn quadrature_steps(dr: f64, r_low: f64, r_high: f64) -> Option<usize> {
    let n = ((r_high - r_low) / dr).ceil();
    if n.is_nan() || n <= 0.0 {
        Some(0)
    } else if n.is_finite() {
        Some(n as usize)
    } else {
        None
    }
}

/// Integrate `I(r) · 2r` between two radii with explicit limb darkening coefficients.
///
/// Arguments
/// -----------------
/// * `dr`: radial step, in normalised stellar radii
/// * `c1`, `c2`, `c3`, `c4`: nonlinear limb darkening coefficients
/// * `r_low`: lower radius of the annulus
/// * `r_high`: upper radius of the annulus
///
/// Return
/// ----------
/// * The rectangle-rule sum, `0` for an empty interval and NaN if the
///   interval cannot be covered by a finite number of steps.
///
/// See also
/// ------------
/// * [`integrated_intensity_packed`] – same quadrature over a packed coefficient set.
pub fn integrated_intensity(
    dr: f64,
    c1: f64,
    c2: f64,
    c3: f64,
    c4: f64,
    r_low: f64,
    r_high: f64,
) -> f64 {
    let Some(steps) = quadrature_steps(dr, r_low, r_high) else {
        return f64::NAN;
    };

    (0..steps)
        .map(|k| {
            let r = r_low + k as f64 * dr;
            intensity(r, c1, c2, c3, c4) * dr * 2. * r
        })
        .sum()
}

/// Integrate `I(r) · 2r` between two radii over a packed 5-entry coefficient set.
///
/// Indices `0..=3` of `coeffs` are forwarded as `c1..c4`, the same way as
/// [`crate::limb_darkening::intensity_packed`].
pub fn integrated_intensity_packed(dr: f64, coeffs: &[f64; 5], r_low: f64, r_high: f64) -> f64 {
    integrated_intensity(dr, coeffs[0], coeffs[1], coeffs[2], coeffs[3], r_low, r_high)
}
