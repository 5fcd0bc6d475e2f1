pub mod decision;
pub mod error;
pub mod gates;
pub mod models;
pub mod normalize;
pub mod window;

uniffi::setup_scaffolding!();

pub use decision::{classify, evaluate, evaluate_observations, NEAR_LIMIT_FRACTION};
pub use error::EvaluationError;
pub use gates::{evaluate_gate_a, evaluate_gate_b, PEAK_WAVE_FACTOR};
pub use models::{
    Decision, DecisionStatus, GateBOutcome, GateResult, LengthUnit, OperationalLimits,
    RawObservation, ReasonCode, WeatherSample,
};
pub use normalize::{feet_to_meters, normalize_observation, normalize_series, FEET_TO_METERS};
pub use window::{evaluate_gate_c, required_window_hr};
