//! Sample normalization: raw forecast observations to canonical units.
//!
//! Pure and stateless. Conversion factors are fixed constants; validation
//! rejects non-finite measurements before any gate sees the data.

use crate::error::EvaluationError;
use crate::models::{LengthUnit, RawObservation, WeatherSample};

/// Feet to meters conversion factor.
pub const FEET_TO_METERS: f64 = 0.3048;

/// Convert feet to meters.
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * FEET_TO_METERS
}

/// Normalize one raw observation into canonical units (meters / knots).
///
/// `index` is the observation's position in its series, carried into the
/// error so the caller can pinpoint the bad sample.
pub fn normalize_observation(
    obs: &RawObservation,
    index: usize,
) -> Result<WeatherSample, EvaluationError> {
    if !obs.wave_height.is_finite() {
        return Err(EvaluationError::InvalidSample {
            index,
            message: format!("wave height is not finite: {}", obs.wave_height),
        });
    }
    if !obs.wind_speed_kt.is_finite() {
        return Err(EvaluationError::InvalidSample {
            index,
            message: format!("wind speed is not finite: {}", obs.wind_speed_kt),
        });
    }
    if let Some(period) = obs.wave_period_s {
        if !period.is_finite() {
            return Err(EvaluationError::InvalidSample {
                index,
                message: format!("wave period is not finite: {period}"),
            });
        }
    }

    let wave_height_m = match obs.wave_unit {
        LengthUnit::Meters => obs.wave_height,
        LengthUnit::Feet => feet_to_meters(obs.wave_height),
    };

    Ok(WeatherSample {
        timestamp_unix: obs.timestamp_unix,
        wave_height_m,
        wind_speed_kt: obs.wind_speed_kt,
        wave_period_s: obs.wave_period_s,
    })
}

/// Normalize a whole observation series, failing on the first bad sample.
pub fn normalize_series(
    observations: &[RawObservation],
) -> Result<Vec<WeatherSample>, EvaluationError> {
    observations
        .iter()
        .enumerate()
        .map(|(i, obs)| normalize_observation(obs, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(wave_height: f64, wave_unit: LengthUnit, wind_kt: f64) -> RawObservation {
        RawObservation {
            timestamp_unix: 1_760_000_000,
            wave_height,
            wave_unit,
            wind_speed_kt: wind_kt,
            wave_period_s: None,
        }
    }

    #[test]
    fn test_feet_to_meters_exact() {
        assert!((feet_to_meters(6.5) - 1.9812).abs() < 1e-12);
        assert_eq!(feet_to_meters(0.0), 0.0);
        assert_eq!(feet_to_meters(1.0), 0.3048);
    }

    #[test]
    fn test_normalize_feet_converts_once() {
        let sample = normalize_observation(&obs(12.0, LengthUnit::Feet, 15.0), 0).unwrap();
        assert!((sample.wave_height_m - 3.6576).abs() < 1e-12);
        assert_eq!(sample.wind_speed_kt, 15.0);
    }

    #[test]
    fn test_normalize_meters_passthrough() {
        let sample = normalize_observation(&obs(2.5, LengthUnit::Meters, 20.0), 0).unwrap();
        assert_eq!(sample.wave_height_m, 2.5);
    }

    #[test]
    fn test_normalize_rejects_non_finite() {
        let err = normalize_observation(&obs(f64::NAN, LengthUnit::Feet, 15.0), 4).unwrap_err();
        assert!(matches!(
            err,
            EvaluationError::InvalidSample { index: 4, .. }
        ));

        let err =
            normalize_observation(&obs(2.0, LengthUnit::Meters, f64::INFINITY), 0).unwrap_err();
        assert!(matches!(err, EvaluationError::InvalidSample { index: 0, .. }));

        let mut bad_period = obs(2.0, LengthUnit::Meters, 15.0);
        bad_period.wave_period_s = Some(f64::NEG_INFINITY);
        let err = normalize_observation(&bad_period, 1).unwrap_err();
        assert!(matches!(err, EvaluationError::InvalidSample { index: 1, .. }));
    }

    #[test]
    fn test_normalize_series_reports_first_bad_index() {
        let series = vec![
            obs(2.0, LengthUnit::Meters, 15.0),
            obs(f64::NAN, LengthUnit::Meters, 15.0),
            obs(2.0, LengthUnit::Meters, f64::NAN),
        ];
        let err = normalize_series(&series).unwrap_err();
        assert!(matches!(err, EvaluationError::InvalidSample { index: 1, .. }));
    }

    #[test]
    fn test_normalize_series_preserves_order_and_timestamps() {
        let mut series = vec![
            obs(6.5, LengthUnit::Feet, 18.0),
            obs(7.0, LengthUnit::Feet, 19.0),
        ];
        series[0].timestamp_unix = 1_760_000_000;
        series[1].timestamp_unix = 1_760_003_600;

        let samples = normalize_series(&series).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].timestamp_unix, 1_760_000_000);
        assert_eq!(samples[1].timestamp_unix, 1_760_003_600);
        assert!((samples[0].wave_height_m - 1.9812).abs() < 1e-12);
    }
}
