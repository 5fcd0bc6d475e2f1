//! Per-sample gate evaluators.
//!
//! Gate-A is the basic threshold check against the raw limits. Gate-B
//! re-checks with additive squall/gust buffers and an estimated peak wave
//! height. Both are pure functions of one sample and the limits; each check
//! contributes its reason code independently, so a sample can fail several
//! checks at once.

use crate::models::{GateResult, OperationalLimits, ReasonCode, WeatherSample};

/// Ratio between significant wave height and the expected maximum wave
/// height within an observation window (Hmax ~ 1.86 x Hs). A policy
/// parameter of the domain, not derived from the sample.
pub const PEAK_WAVE_FACTOR: f64 = 1.86;

/// Gate-A: basic threshold check.
///
/// Passes when wave height and wind speed are both at or below the basic
/// limits. Wave and wind are checked independently; both reason codes can
/// be present on the same sample.
pub fn evaluate_gate_a(sample: &WeatherSample, limits: &OperationalLimits) -> GateResult {
    let mut reason_codes = Vec::new();
    let mut details_parts = Vec::new();

    let wave_ok = sample.wave_height_m <= limits.wave_limit_m;
    let wind_ok = sample.wind_speed_kt <= limits.wind_limit_kt;

    if !wave_ok {
        reason_codes.push(ReasonCode::WaveExceeds);
        details_parts.push(format!(
            "Wave height {:.2}m exceeds limit {}m",
            sample.wave_height_m, limits.wave_limit_m
        ));
    }
    if !wind_ok {
        reason_codes.push(ReasonCode::WindExceeds);
        details_parts.push(format!(
            "Wind speed {:.1}kt exceeds limit {}kt",
            sample.wind_speed_kt, limits.wind_limit_kt
        ));
    }

    let details = if details_parts.is_empty() {
        "All thresholds within limits".to_string()
    } else {
        details_parts.join(" AND ")
    };

    GateResult::new(wave_ok && wind_ok, reason_codes, details)
}

/// Gate-B: squall/peak-wave buffer check.
///
/// Applies the additive squall and gust buffers, estimates the peak wave
/// height from the buffered significant wave height, and runs three
/// independent checks. A caller may skip Gate-B entirely; that absence is
/// represented upstream as a distinct "not evaluated" outcome.
pub fn evaluate_gate_b(sample: &WeatherSample, limits: &OperationalLimits) -> GateResult {
    let effective_wave_m = sample.wave_height_m + limits.squall_wave_buffer_m;
    let effective_wind_kt = sample.wind_speed_kt + limits.gust_buffer_kt;
    let estimated_peak_m = PEAK_WAVE_FACTOR * effective_wave_m;

    let mut reason_codes = Vec::new();
    let mut details_parts = Vec::new();

    let wave_ok = effective_wave_m <= limits.wave_limit_m;
    let wind_ok = effective_wind_kt <= limits.wind_limit_kt;
    let peak_ok = estimated_peak_m <= limits.max_peak_wave_m;

    if !wave_ok {
        reason_codes.push(ReasonCode::WaveExceedsSquall);
        details_parts.push(format!(
            "Wave with squall buffer {:.2}m exceeds limit {}m",
            effective_wave_m, limits.wave_limit_m
        ));
    }
    if !wind_ok {
        reason_codes.push(ReasonCode::WindExceedsGust);
        details_parts.push(format!(
            "Wind with gust {:.1}kt exceeds limit {}kt",
            effective_wind_kt, limits.wind_limit_kt
        ));
    }
    if !peak_ok {
        reason_codes.push(ReasonCode::PeakWaveExceeds);
        details_parts.push(format!(
            "Estimated Hmax {:.2}m exceeds limit {}m",
            estimated_peak_m, limits.max_peak_wave_m
        ));
    }

    let details = if details_parts.is_empty() {
        "Squall buffers within limits".to_string()
    } else {
        details_parts.join(" AND ")
    };

    GateResult::new(wave_ok && wind_ok && peak_ok, reason_codes, details)
}
