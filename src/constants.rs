//! # Physical constants and type aliases
//!
//! Unit conversions and astronomical scales consumed by the lightcurve generator.
//! Every length below is expressed in **meters** so that the ratios
//! `a·AU / (rs·R_SUN)` and `rp·R_JUP / (rs·R_SUN)` are dimensionless.

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Astronomical Unit in meters (IAU 2012)
pub const AU: f64 = 149_597_870_700.0;

/// Nominal solar radius in meters (IAU 2015 Resolution B3)
pub const R_SUN: f64 = 6.957e8;

/// Nominal equatorial Jupiter radius in meters (IAU 2015 Resolution B3)
pub const R_JUP: f64 = 7.1492e7;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Radial step of the annulus quadrature, in normalised stellar radii
pub const RADIAL_STEP: f64 = 0.001;

/// Half-width of the phase window around primary transit where occultation is evaluated
pub const PHASE_WINDOW: f64 = 0.25;

/// Angle in degrees
pub type Degree = f64;
/// Julian Date (days)
pub type JD = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
/// Relative flux, 1 = unocculted star
pub type Flux = f64;
