//! Deterministic diurnal irradiance schedule over the 48-hour horizon.

use crate::sim::types::HORIZON_HOURS;

/// Builds the per-hour irradiance fractions for the full horizon.
///
/// For hour `h`, let `m = h mod 24`. Between sunrise (inclusive) and sunset
/// (exclusive) the irradiance follows a half-sine arc peaking at solar noon:
/// `peak * sin(pi * (m - sunrise) / (sunset - sunrise))`. Outside daylight
/// it is zero. The 24-hour pattern repeats identically on both days.
///
/// `sunset <= sunrise` yields an all-zero schedule rather than an error
/// (polar night is a valid input, not a failure).
///
/// # Examples
///
/// ```
/// use vessel_sim::sim::irradiance::create_irr_schedule;
///
/// let irr = create_irr_schedule(6.0, 18.0, 1.0);
/// assert_eq!(irr.len(), 48);
/// assert_eq!(irr[0], 0.0);
/// assert!((irr[12] - 1.0).abs() < 1e-5);
/// ```
pub fn create_irr_schedule(sunrise: f32, sunset: f32, peak: f32) -> Vec<f32> {
    let mut arr = vec![0.0; HORIZON_HOURS];
    let daylight = sunset - sunrise;
    if daylight > 0.0 {
        for (h, slot) in arr.iter_mut().enumerate() {
            let mod_hour = (h % 24) as f32;
            if sunrise <= mod_hour && mod_hour < sunset {
                let frac = (mod_hour - sunrise) / daylight;
                *slot = peak * (std::f32::consts::PI * frac).sin();
            }
        }
    }
    arr
}
