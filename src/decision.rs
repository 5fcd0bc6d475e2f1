//! Decision classification: combines the three gate outcomes into a final
//! GO / NO-GO / CONDITIONAL status with reason codes, rationale, and
//! recommendations.
//!
//! The whole evaluation is a synchronous, side-effect-free computation over
//! immutable inputs; identical inputs always yield an identical
//! [`Decision`]. Rendering (HTML, CLI, reports) is a downstream concern
//! that consumes the decision's fields.

use crate::error::EvaluationError;
use crate::gates::{evaluate_gate_a, evaluate_gate_b};
use crate::models::{
    Decision, DecisionStatus, GateBOutcome, GateResult, OperationalLimits, RawObservation,
    ReasonCode, WeatherSample,
};
use crate::normalize::normalize_series;
use crate::window::evaluate_gate_c;

/// Fraction of a basic limit above which a passing sample counts as
/// "near-limit" and downgrades GO to CONDITIONAL.
pub const NEAR_LIMIT_FRACTION: f64 = 0.85;

/// Reject negative limits. Zero is legal (trivially restrictive).
pub fn validate_limits(limits: &OperationalLimits) -> Result<(), EvaluationError> {
    let fields = [
        ("wave_limit_m", limits.wave_limit_m),
        ("wind_limit_kt", limits.wind_limit_kt),
        ("sailing_time_hr", limits.sailing_time_hr),
        ("reserve_time_hr", limits.reserve_time_hr),
        ("squall_wave_buffer_m", limits.squall_wave_buffer_m),
        ("gust_buffer_kt", limits.gust_buffer_kt),
        ("max_peak_wave_m", limits.max_peak_wave_m),
    ];
    for (field, value) in fields {
        if value < 0.0 {
            return Err(EvaluationError::NegativeLimit {
                field: field.to_string(),
                value,
            });
        }
    }
    Ok(())
}

/// Reject series whose timestamps are not strictly ascending with uniform
/// spacing. Gate-C counts one interval unit per sample, so a gap or overlap
/// would silently distort the continuous window. Series of fewer than two
/// samples trivially pass.
pub fn validate_spacing(samples: &[WeatherSample]) -> Result<(), EvaluationError> {
    if samples.len() < 2 {
        return Ok(());
    }
    let expected_sec = samples[1].timestamp_unix - samples[0].timestamp_unix;
    for i in 1..samples.len() {
        let actual_sec = samples[i].timestamp_unix - samples[i - 1].timestamp_unix;
        if actual_sec <= 0 {
            return Err(EvaluationError::NonChronological { index: i });
        }
        if actual_sec != expected_sec {
            return Err(EvaluationError::NonUniformSpacing {
                index: i,
                expected_sec,
                actual_sec,
            });
        }
    }
    Ok(())
}

fn summarize_gate(results: &[GateResult]) -> GateResult {
    let passed_count = results.iter().filter(|r| r.passed).count();
    let mut codes = Vec::new();
    for result in results {
        codes.extend_from_slice(&result.reason_codes);
    }
    GateResult::new(
        results.iter().all(|r| r.passed),
        codes,
        format!("{passed_count}/{} time points passed", results.len()),
    )
}

fn go_recommendations() -> Vec<String> {
    vec![
        "Monitor weather continuously during transit".to_string(),
        "Prepare contingency plans if conditions deteriorate".to_string(),
        "Confirm latest forecast before departure".to_string(),
    ]
}

fn nogo_recommendations() -> Vec<String> {
    vec![
        "Wait for weather window to improve".to_string(),
        "Monitor 2-day hourly forecasts for next opportunity".to_string(),
        "Consider alternative timing or route if available".to_string(),
    ]
}

/// True when a Gate-A-passing sample sits above the near-limit fraction of
/// either basic (unbuffered) limit.
fn has_marginal_sample(
    samples: &[WeatherSample],
    gate_a: &[GateResult],
    limits: &OperationalLimits,
) -> bool {
    samples.iter().zip(gate_a.iter()).any(|(sample, result)| {
        result.passed
            && (sample.wave_height_m > NEAR_LIMIT_FRACTION * limits.wave_limit_m
                || sample.wind_speed_kt > NEAR_LIMIT_FRACTION * limits.wind_limit_kt)
    })
}

/// Combine per-sample gate results and the Gate-C outcome into a Decision.
///
/// Base status follows Gate-C; a GO with any near-limit passing sample is
/// downgraded to CONDITIONAL with a caution recommendation prepended. A
/// NO-GO is never reclassified.
pub fn classify(
    samples: &[WeatherSample],
    gate_a: &[GateResult],
    gate_b: Option<&[GateResult]>,
    gate_c: GateResult,
    limits: &OperationalLimits,
) -> Result<Decision, EvaluationError> {
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

    let mut all_codes: Vec<ReasonCode> = Vec::new();
    for result in gate_a {
        all_codes.extend_from_slice(&result.reason_codes);
    }
    if let Some(gate_b) = gate_b {
        for result in gate_b {
            all_codes.extend_from_slice(&result.reason_codes);
        }
    }
    all_codes.extend_from_slice(&gate_c.reason_codes);
    all_codes.sort();
    all_codes.dedup();

    let (base_status, rationale, mut recommendations) = if gate_c.passed {
        (
            DecisionStatus::Go,
            format!("All gates passed. {}", gate_c.details),
            go_recommendations(),
        )
    } else {
        (
            DecisionStatus::NoGo,
            format!("Gate-C failed. {}", gate_c.details),
            nogo_recommendations(),
        )
    };

    let status = if base_status == DecisionStatus::Go
        && has_marginal_sample(samples, gate_a, limits)
    {
        recommendations.insert(
            0,
            "Weather is near operational limits - proceed with caution".to_string(),
        );
        DecisionStatus::Conditional
    } else {
        base_status
    };

    Ok(Decision {
        status,
        reason_codes: all_codes,
        gate_a: summarize_gate(gate_a),
        gate_b: match gate_b {
            Some(results) => GateBOutcome::Evaluated(summarize_gate(results)),
            None => GateBOutcome::NotEvaluated,
        },
        gate_c,
        rationale,
        recommendations,
    })
}

/// Complete three-gate evaluation over a normalized sample series.
///
/// Validates the limits and the series spacing, evaluates Gate-A (and
/// Gate-B when `use_gate_b` is set) per sample, aggregates the continuous
/// window through Gate-C, then classifies.
pub fn evaluate(
    samples: &[WeatherSample],
    limits: &OperationalLimits,
    use_gate_b: bool,
) -> Result<Decision, EvaluationError> {
    validate_limits(limits)?;
    validate_spacing(samples)?;

    let gate_a: Vec<GateResult> = samples.iter().map(|s| evaluate_gate_a(s, limits)).collect();
    let gate_b: Option<Vec<GateResult>> = use_gate_b
        .then(|| samples.iter().map(|s| evaluate_gate_b(s, limits)).collect());

    let gate_c = evaluate_gate_c(samples, &gate_a, gate_b.as_deref(), limits)?;

    classify(samples, &gate_a, gate_b.as_deref(), gate_c, limits)
}

/// Evaluation from raw observations: normalization composed in front of
/// [`evaluate`]. Fails before any gate runs if a sample is invalid.
pub fn evaluate_observations(
    observations: &[RawObservation],
    limits: &OperationalLimits,
    use_gate_b: bool,
) -> Result<Decision, EvaluationError> {
    let samples = normalize_series(observations)?;
    evaluate(&samples, limits, use_gate_b)
}

// FFI entry points. Bindings pass owned values across the boundary.

#[uniffi::export]
pub fn evaluate_forecast(
    samples: Vec<WeatherSample>,
    limits: OperationalLimits,
    use_gate_b: bool,
) -> Result<Decision, EvaluationError> {
    evaluate(&samples, &limits, use_gate_b)
}

#[uniffi::export]
pub fn evaluate_raw_forecast(
    observations: Vec<RawObservation>,
    limits: OperationalLimits,
    use_gate_b: bool,
) -> Result<Decision, EvaluationError> {
    evaluate_observations(&observations, &limits, use_gate_b)
}

#[uniffi::export]
pub fn standard_limits() -> OperationalLimits {
    OperationalLimits::standard()
}
