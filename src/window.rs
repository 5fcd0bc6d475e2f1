//! Gate-C: continuous weather window aggregation.
//!
//! Scans the evaluated series chronologically for the longest run of
//! consecutive samples in which Gate-A passed and, when Gate-B was
//! evaluated, Gate-B passed too. The transit needs sailing time plus
//! reserve time of uninterrupted passing conditions; one sample counts as
//! one interval unit (conventionally one hour). A single failing sample
//! severs the window - there is no partial credit or smoothing.

use crate::error::EvaluationError;
use crate::models::{GateResult, OperationalLimits, ReasonCode, WeatherSample};

/// Required continuous window length in hours (sailing + reserve).
pub fn required_window_hr(limits: &OperationalLimits) -> f64 {
    limits.sailing_time_hr + limits.reserve_time_hr
}

/// Evaluate Gate-C over the whole series.
///
/// `gate_a` must have one result per sample; `gate_b`, when present, must
/// too. On failure the result carries the union of every failing sample's
/// reason codes plus [`ReasonCode::WindowInsufficient`].
pub fn evaluate_gate_c(
    samples: &[WeatherSample],
    gate_a: &[GateResult],
    gate_b: Option<&[GateResult]>,
    limits: &OperationalLimits,
) -> Result<GateResult, EvaluationError> {
    if gate_a.len() != samples.len() {
        return Err(EvaluationError::MismatchedSeries {
            samples: samples.len(),
            results: gate_a.len(),
        });
    }
    if let Some(gate_b) = gate_b {
        if gate_b.len() != samples.len() {
            return Err(EvaluationError::MismatchedSeries {
                samples: samples.len(),
                results: gate_b.len(),
            });
        }
    }

    let required_hr = required_window_hr(limits);

    if samples.is_empty() {
        return Ok(GateResult::new(
            false,
            vec![ReasonCode::WindowInsufficient],
            format!(
                "No forecast data available; max continuous window 0.0hr < required {required_hr:.1}hr"
            ),
        ));
    }

    let mut run: u32 = 0;
    let mut max_run: u32 = 0;
    let mut reason_codes = Vec::new();

    for (i, a) in gate_a.iter().enumerate() {
        let b = gate_b.map(|results| &results[i]);
        let is_go = a.passed && b.map_or(true, |b| b.passed);

        if is_go {
            run += 1;
            max_run = max_run.max(run);
        } else {
            run = 0;
            reason_codes.extend_from_slice(&a.reason_codes);
            if let Some(b) = b {
                reason_codes.extend_from_slice(&b.reason_codes);
            }
        }
    }

    let passed = f64::from(max_run) >= required_hr;

    if passed {
        Ok(GateResult::new(
            true,
            Vec::new(),
            format!(
                "Continuous window of {:.1}hr >= required {required_hr:.1}hr",
                f64::from(max_run)
            ),
        ))
    } else {
        reason_codes.push(ReasonCode::WindowInsufficient);
        Ok(GateResult::new(
            false,
            reason_codes,
            format!(
                "Max continuous window {:.1}hr < required {required_hr:.1}hr",
                f64::from(max_run)
            ),
        ))
    }
}
