use air_core::{IndividualProfile, IndividualSkill, TuningParameters};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One line of input.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Score(ScoreRequest),
    Simulate(SimulateRequest),
    Catalog,
}

/// Either `profile` or `individual_id` (a stored profile) must be given.
#[derive(Debug, Default, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub individual_id: Option<String>,
    #[serde(default)]
    pub profile: Option<IndividualProfile>,
    pub occupation: String,
    #[serde(default)]
    pub individual_skills: Option<Vec<IndividualSkill>>,
    #[serde(default)]
    pub tuning: Option<TuningOverride>,
}

/// Partial tuning; absent fields keep the process defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TuningOverride {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    #[serde(alias = "lambda_val")]
    pub lambda: Option<f64>,
    #[serde(alias = "gamma_val")]
    pub gamma: Option<f64>,
    pub max_possible_match: Option<f64>,
}

impl TuningOverride {
    pub fn apply(self, base: TuningParameters) -> TuningParameters {
        TuningParameters {
            alpha: self.alpha.unwrap_or(base.alpha),
            beta: self.beta.unwrap_or(base.beta),
            lambda: self.lambda.unwrap_or(base.lambda),
            gamma: self.gamma.unwrap_or(base.gamma),
            max_possible_match: self.max_possible_match.unwrap_or(base.max_possible_match),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    #[serde(flatten)]
    pub score: ScoreRequest,
    pub pathway: String,
    #[serde(default = "full")]
    pub completion: f64,
    #[serde(default = "full")]
    pub mastery: f64,
}

const fn full() -> f64 {
    1.0
}

/// One line of output.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn success(result: Value) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(message.into()),
        }
    }
}
