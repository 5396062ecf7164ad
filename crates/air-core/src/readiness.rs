use serde::{Deserialize, Serialize};

use crate::c01;

/// Pillar weights for idiosyncratic readiness (V^R).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessWeights {
    pub ai_fluency: f64,
    pub domain_expertise: f64,
    pub adaptive_capacity: f64,
}

impl Default for ReadinessWeights {
    fn default() -> Self {
        Self {
            ai_fluency: 0.45,
            domain_expertise: 0.35,
            adaptive_capacity: 0.20,
        }
    }
}

impl ReadinessWeights {
    pub fn sum(&self) -> f64 {
        self.ai_fluency + self.domain_expertise + self.adaptive_capacity
    }
}

/// The three V^R pillars, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PillarScores {
    pub ai_fluency: f64,
    pub domain_expertise: f64,
    pub adaptive_capacity: f64,
}

impl PillarScores {
    pub fn clamped(self) -> Self {
        Self {
            ai_fluency: c01(self.ai_fluency),
            domain_expertise: c01(self.domain_expertise),
            adaptive_capacity: c01(self.adaptive_capacity),
        }
    }
}

/// V^R on the [0, 1] scale. Callers report it multiplied by 100.
pub fn idiosyncratic_readiness(pillars: &PillarScores, weights: &ReadinessWeights) -> f64 {
    let p = pillars.clamped();
    c01(weights.ai_fluency * p.ai_fluency
        + weights.domain_expertise * p.domain_expertise
        + weights.adaptive_capacity * p.adaptive_capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((ReadinessWeights::default().sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fluency_outweighs_other_pillars() {
        let w = ReadinessWeights::default();
        let fluency_only = PillarScores {
            ai_fluency: 1.0,
            ..PillarScores::default()
        };
        let domain_only = PillarScores {
            domain_expertise: 1.0,
            ..PillarScores::default()
        };
        let adaptive_only = PillarScores {
            adaptive_capacity: 1.0,
            ..PillarScores::default()
        };
        let f = idiosyncratic_readiness(&fluency_only, &w);
        let d = idiosyncratic_readiness(&domain_only, &w);
        let a = idiosyncratic_readiness(&adaptive_only, &w);
        assert!(f > d && d > a);
    }

    #[test]
    fn weighted_sum() {
        let pillars = PillarScores {
            ai_fluency: 0.8,
            domain_expertise: 0.6,
            adaptive_capacity: 0.5,
        };
        let vr = idiosyncratic_readiness(&pillars, &ReadinessWeights::default());
        assert!((vr - (0.36 + 0.21 + 0.10)).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_pillars_are_clamped() {
        let pillars = PillarScores {
            ai_fluency: 3.0,
            domain_expertise: 3.0,
            adaptive_capacity: 3.0,
        };
        assert_eq!(
            idiosyncratic_readiness(&pillars, &ReadinessWeights::default()),
            1.0
        );
    }
}
