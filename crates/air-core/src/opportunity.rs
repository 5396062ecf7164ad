use serde::{Deserialize, Serialize};

use crate::c01;
use crate::policy::{degenerate, DegenerateCase};

/// Weights of the four base-opportunity factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpportunityWeights {
    pub ai_enhancement: f64,
    pub job_growth: f64,
    pub wage_premium: f64,
    pub entry_accessibility: f64,
}

impl Default for OpportunityWeights {
    fn default() -> Self {
        Self {
            ai_enhancement: 0.30,
            job_growth: 0.30,
            wage_premium: 0.25,
            entry_accessibility: 0.15,
        }
    }
}

impl OpportunityWeights {
    pub fn sum(&self) -> f64 {
        self.ai_enhancement + self.job_growth + self.wage_premium + self.entry_accessibility
    }
}

pub const fn ai_enhancement_potential(ai_enhancement_score: f64) -> f64 {
    ai_enhancement_score
}

/// Growth rate mapped onto 0-100 around a neutral 50, truncated.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn job_growth_projection(growth_rate: f64) -> u32 {
    let score = (50.0 + 100.0 * growth_rate).clamp(0.0, 100.0);
    // clamp leaves NaN untouched, and `as` maps NaN to 0
    score.trunc() as u32
}

/// Unclamped premium; the aggregator caps it to [0, 1].
pub fn wage_premium(ai_skilled_wage: f64, median_wage: f64) -> f64 {
    if median_wage <= 0.0 {
        return degenerate(DegenerateCase::WageNoMedian);
    }
    (ai_skilled_wage - median_wage) / median_wage
}

pub fn entry_accessibility(education_years_required: f64, experience_years_required: f64) -> f64 {
    let years = (education_years_required + experience_years_required).max(0.0);
    1.0 / (1.0 + 0.1 * years)
}

pub fn base_opportunity_score(
    ai_enhancement: f64,
    job_growth: f64,
    wage_premium: f64,
    entry_accessibility: f64,
    weights: &OpportunityWeights,
) -> f64 {
    weights.ai_enhancement * c01(ai_enhancement)
        + weights.job_growth * c01(job_growth)
        + weights.wage_premium * c01(wage_premium)
        + weights.entry_accessibility * c01(entry_accessibility)
}

/// `(current / previous)^lambda`; negative lambda is treated as zero.
pub fn growth_multiplier(current_postings: u64, previous_postings: u64, lambda: f64) -> f64 {
    if previous_postings == 0 {
        return degenerate(DegenerateCase::GrowthNoHistory);
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = current_postings as f64 / previous_postings as f64;
    finite_multiplier(ratio.powf(lambda.max(0.0)))
}

pub fn regional_multiplier(
    local_demand: f64,
    national_avg_demand: f64,
    remote_work_factor: f64,
    gamma: f64,
) -> f64 {
    if national_avg_demand <= 0.0 {
        return degenerate(DegenerateCase::RegionalNoNational);
    }
    let demand_ratio = local_demand / national_avg_demand;
    finite_multiplier(1.0 + gamma * (demand_ratio + remote_work_factor - 1.0))
}

fn finite_multiplier(m: f64) -> f64 {
    if m.is_finite() {
        m
    } else {
        degenerate(DegenerateCase::MultiplierOverflow)
    }
}

/// H^R on the [0, 1] scale. Callers report it multiplied by 100.
pub fn systematic_opportunity(h_base: f64, growth: f64, regional: f64) -> f64 {
    c01(h_base * growth * regional)
}
