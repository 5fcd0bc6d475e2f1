//! Boundary data types for the Go/No-Go decision core.
//!
//! All types are plain immutable data - no I/O, no presentation formatting.
//! Timestamps are Unix epoch seconds (UTC instants). Wave heights are meters,
//! wind speeds are knots once normalized.

/// Source unit of a raw wave-height measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum LengthUnit {
    Meters,
    Feet,
}

/// One raw forecast observation, in source units, before normalization.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct RawObservation {
    /// Observation time as Unix timestamp (UTC).
    pub timestamp_unix: i64,
    /// Combined sea+swell significant wave height, in `wave_unit`.
    pub wave_height: f64,
    /// Unit the wave height was measured in.
    pub wave_unit: LengthUnit,
    /// Wind speed in knots.
    pub wind_speed_kt: f64,
    /// Wave period in seconds (optional).
    pub wave_period_s: Option<f64>,
}

/// One normalized observation in canonical units (meters / knots).
///
/// A series of samples is ordered by ascending timestamp with uniform
/// spacing (the evaluation granularity, conventionally one hour).
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct WeatherSample {
    /// Observation time as Unix timestamp (UTC).
    pub timestamp_unix: i64,
    /// Significant wave height in meters.
    pub wave_height_m: f64,
    /// Wind speed in knots.
    pub wind_speed_kt: f64,
    /// Wave period in seconds (optional).
    pub wave_period_s: Option<f64>,
}

/// Operational limits for sea transit, supplied by the caller per evaluation.
///
/// All fields must be non-negative; zero is legal (trivially restrictive).
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct OperationalLimits {
    /// Max allowed significant wave height (meters).
    pub wave_limit_m: f64,
    /// Max allowed wind speed (knots).
    pub wind_limit_kt: f64,
    /// Expected sailing time (hours).
    pub sailing_time_hr: f64,
    /// Reserve time for safety (hours).
    pub reserve_time_hr: f64,
    /// Squall wave buffer added to wave height for Gate-B (meters).
    pub squall_wave_buffer_m: f64,
    /// Gust buffer added to wind speed for Gate-B (knots).
    pub gust_buffer_kt: f64,
    /// Max allowed estimated peak wave height (meters).
    pub max_peak_wave_m: f64,
}

impl OperationalLimits {
    /// Standard sea-transit policy limits.
    pub fn standard() -> Self {
        OperationalLimits {
            wave_limit_m: 3.0,
            wind_limit_kt: 25.0,
            sailing_time_hr: 8.0,
            reserve_time_hr: 4.0,
            squall_wave_buffer_m: 0.5,
            gust_buffer_kt: 10.0,
            max_peak_wave_m: 5.5,
        }
    }
}

/// Machine-readable tag for a specific failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, uniffi::Enum)]
pub enum ReasonCode {
    /// Wave height exceeds the basic limit (Gate-A).
    WaveExceeds,
    /// Wind speed exceeds the basic limit (Gate-A).
    WindExceeds,
    /// Wave height with squall buffer exceeds the limit (Gate-B).
    WaveExceedsSquall,
    /// Wind speed with gust buffer exceeds the limit (Gate-B).
    WindExceedsGust,
    /// Estimated peak wave height exceeds the limit (Gate-B).
    PeakWaveExceeds,
    /// No continuous passing window of the required length (Gate-C).
    WindowInsufficient,
}

impl ReasonCode {
    /// Stable wire tag used by downstream reporting.
    pub fn code(&self) -> &'static str {
        match self {
            ReasonCode::WaveExceeds => "WX_WAVE",
            ReasonCode::WindExceeds => "WX_WIND",
            ReasonCode::WaveExceedsSquall => "WX_WAVE_SQUALL",
            ReasonCode::WindExceedsGust => "WX_WIND_GUST",
            ReasonCode::PeakWaveExceeds => "WX_HMAX",
            ReasonCode::WindowInsufficient => "WX_WINDOW_INSUFFICIENT",
        }
    }
}

/// Result of one gate evaluation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct GateResult {
    pub passed: bool,
    /// Sorted, deduplicated reason codes for the failed checks (empty on pass).
    pub reason_codes: Vec<ReasonCode>,
    /// Human-readable summary of which checks failed and by how much.
    pub details: String,
}

impl GateResult {
    /// Build a result from accumulated reason codes, sorting and
    /// deduplicating so identical inputs yield identical results.
    pub fn new(passed: bool, mut reason_codes: Vec<ReasonCode>, details: String) -> Self {
        reason_codes.sort();
        reason_codes.dedup();
        GateResult {
            passed,
            reason_codes,
            details,
        }
    }
}

/// Gate-B outcome for a whole evaluation.
///
/// "Not evaluated" is a first-class state, distinct from "evaluated and
/// passed" - downstream logic must match both arms.
#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum GateBOutcome {
    Evaluated(GateResult),
    NotEvaluated,
}

/// Final voyage decision status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum DecisionStatus {
    Go,
    NoGo,
    Conditional,
}

impl DecisionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DecisionStatus::Go => "GO",
            DecisionStatus::NoGo => "NO-GO",
            DecisionStatus::Conditional => "CONDITIONAL",
        }
    }
}

/// Complete Go/No-Go decision for one evaluation call.
///
/// A deterministic, pure function of (sample series, limits, Gate-B flag):
/// identical inputs always yield an identical Decision.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct Decision {
    pub status: DecisionStatus,
    /// Sorted, deduplicated union of reason codes across all gates.
    pub reason_codes: Vec<ReasonCode>,
    /// Gate-A summary across the whole series.
    pub gate_a: GateResult,
    /// Gate-B summary, or NotEvaluated when the caller disabled Gate-B.
    pub gate_b: GateBOutcome,
    /// Gate-C continuous-window result.
    pub gate_c: GateResult,
    pub rationale: String,
    /// Ordered recommendations for the operator.
    pub recommendations: Vec<String>,
}
