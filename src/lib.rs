//! # transyn
//!
//! Synthetic transit lightcurves for fitting loops.
//!
//! Given observation times and a [`ModelParameters`](crate::model::ModelParameters) record
//! (orbital period, separation, inclination, stellar and planetary radii, nonlinear limb
//! darkening), [`generate_synthetic`] returns the relative stellar flux at each time under
//! the small-planet approximation of Mandel & Agol (2002).
//!
//! ## Modules
//!
//! - [`constants`] – astronomical scales and unit conversions
//! - [`limb_darkening`] – intensity law and its normalisation `Ω`
//! - [`quadrature`] – fixed-step annulus integral of the intensity
//! - [`synthetic`] – the lightcurve generator
//! - [`lightcurve`] – time/flux container and residual helpers
//! - [`time`] – JD/MJD/epoch conversions
//!
//! ## Example
//!
//! ```rust
//! use transyn::generate_synthetic;
//! use transyn::model::ModelParameters;
//!
//! let model = ModelParameters::builder()
//!     .a(0.05)
//!     .period(3.0)
//!     .i(88.0)
//!     .limb_darkening(0.2, 0.1, 0.05, 0.05)
//!     .build()
//!     .unwrap();
//!
//! let jd: Vec<f64> = (0..200).map(|k| -0.1 + k as f64 * 1e-3).collect();
//! let flux = generate_synthetic(&jd, &model);
//! assert_eq!(flux.len(), jd.len());
//! ```
pub mod constants;
pub mod lightcurve;
pub mod limb_darkening;
pub mod model;
pub mod quadrature;
pub mod synthetic;
pub mod time;
pub mod transyn_errors;

pub use synthetic::generate_synthetic;
