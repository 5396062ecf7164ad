use serde::{Deserialize, Serialize};

use crate::c01;
use crate::readiness::PillarScores;
use crate::types::LearningPathway;

/// How much of a pathway was completed and how well it was mastered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathwayProgress {
    pub completion: f64,
    pub mastery: f64,
}

impl Default for PathwayProgress {
    fn default() -> Self {
        Self {
            completion: 1.0,
            mastery: 1.0,
        }
    }
}

impl PathwayProgress {
    pub fn new(completion: f64, mastery: f64) -> Self {
        Self {
            completion: c01(completion),
            mastery: c01(mastery),
        }
    }

    /// Share of the nominal impact that is delivered.
    pub fn dampening(&self) -> f64 {
        c01(self.completion) * c01(self.mastery)
    }
}

/// Shifts each pillar by its pathway delta scaled by completion and mastery, clamped to [0, 1].
pub fn simulate_pathway_impact(
    current: &PillarScores,
    pathway: &LearningPathway,
    progress: &PathwayProgress,
) -> PillarScores {
    let k = progress.dampening();
    let delta = |d: f64| d.clamp(-1.0, 1.0) * k;
    PillarScores {
        ai_fluency: c01(current.ai_fluency + delta(pathway.impact_ai_fluency)),
        domain_expertise: c01(current.domain_expertise + delta(pathway.impact_domain_expertise)),
        adaptive_capacity: c01(current.adaptive_capacity + delta(pathway.impact_adaptive_capacity)),
    }
}
