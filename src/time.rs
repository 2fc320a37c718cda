use hifitime::Epoch;

use crate::constants::{JD, MJD};

/// Julian Dates of observation times tabulated as MJD (UTC).
///
/// Lightcurve archives usually store MJD while the flux generator and the model
/// `epoch` work in JD; this goes through [`epochs_to_jd`].
pub fn mjd_to_jd(mjd: &[MJD]) -> Vec<JD> {
    let epochs: Vec<Epoch> = mjd.iter().copied().map(Epoch::from_mjd_utc).collect();
    epochs_to_jd(&epochs)
}

/// Back to MJD (UTC), e.g. to report a fitted mid-transit epoch.
pub fn jd_to_mjd(jd: &[JD]) -> Vec<MJD> {
    jd.iter()
        .copied()
        .map(Epoch::from_jde_utc)
        .map(|e| e.to_mjd_utc_days())
        .collect()
}

/// Julian Dates (UTC) of a sequence of epochs.
///
/// Useful to build the timestamp grid of a lightcurve from instrument time stamps.
pub fn epochs_to_jd(epochs: &[Epoch]) -> Vec<JD> {
    epochs.iter().map(|e| e.to_jde_utc_days()).collect()
}
