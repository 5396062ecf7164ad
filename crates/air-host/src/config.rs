use std::path::PathBuf;

use air_core::TuningParameters;

/// Process-level defaults. Per-request `tuning` overrides `tuning`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostConfig {
    pub tuning: TuningParameters,
    pub catalog_path: Option<PathBuf>,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = TuningParameters::default();
        let f64_var = |name: &str, default: f64, min: f64, max: f64| {
            lookup(name)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .unwrap_or(default)
                .clamp(min, max)
        };

        let tuning = TuningParameters {
            alpha: f64_var("AIR_ALPHA", d.alpha, 0.0, 1.0),
            beta: f64_var("AIR_BETA", d.beta, 0.0, f64::MAX),
            lambda: f64_var("AIR_LAMBDA", d.lambda, 0.0, f64::MAX),
            gamma: f64_var("AIR_GAMMA", d.gamma, 0.0, f64::MAX),
            max_possible_match: f64_var(
                "AIR_MAX_POSSIBLE_MATCH",
                d.max_possible_match,
                f64::MIN_POSITIVE,
                f64::MAX,
            ),
        };
        let catalog_path = lookup("AIR_CATALOG")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            tuning,
            catalog_path,
        }
    }
}
