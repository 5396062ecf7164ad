use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::adaptive::adaptive_capacity;
use crate::combiner::{ai_readiness_score, ai_readiness_uncapped};
use crate::domain::{
    domain_expertise, education_foundation, practical_experience, specialization_depth,
    EXPERIENCE_GAMMA,
};
use crate::error::{ensure_finite, Result};
use crate::fluency::{
    ai_augmented_productivity, ai_fluency, ai_learning_velocity, critical_ai_judgment,
    normalized_productivity, technical_ai_skills,
};
use crate::opportunity::{
    ai_enhancement_potential, base_opportunity_score, entry_accessibility, growth_multiplier,
    job_growth_projection, regional_multiplier, systematic_opportunity, wage_premium,
    OpportunityWeights,
};
use crate::pathway::{simulate_pathway_impact, PathwayProgress};
use crate::readiness::{idiosyncratic_readiness, PillarScores, ReadinessWeights};
use crate::synergy::{alignment_factor, skills_match_score, synergy_percentage, timing_factor};
use crate::types::{IndividualProfile, LearningPathway, Occupation, ScoringInput, TuningParameters};
use crate::{c01, c100};

/// Keys of [`ScoreReport::breakdown`].
pub mod keys {
    pub const TECHNICAL_AI_SKILLS: &str = "fluency.technical_ai_skills";
    pub const PRODUCTIVITY_RAW: &str = "fluency.productivity_raw";
    pub const PRODUCTIVITY: &str = "fluency.productivity";
    pub const CRITICAL_JUDGMENT: &str = "fluency.critical_judgment";
    pub const LEARNING_VELOCITY: &str = "fluency.learning_velocity";
    pub const AI_FLUENCY: &str = "fluency.ai_fluency";
    pub const EDUCATION_FOUNDATION: &str = "domain.education_foundation";
    pub const PRACTICAL_EXPERIENCE: &str = "domain.practical_experience";
    pub const SPECIALIZATION_DEPTH: &str = "domain.specialization_depth";
    pub const DOMAIN_EXPERTISE: &str = "domain.domain_expertise";
    pub const ADAPTIVE_CAPACITY: &str = "adaptive.adaptive_capacity";
    pub const AI_ENHANCEMENT: &str = "opportunity.ai_enhancement";
    pub const JOB_GROWTH: &str = "opportunity.job_growth";
    pub const WAGE_PREMIUM_RAW: &str = "opportunity.wage_premium_raw";
    pub const WAGE_PREMIUM: &str = "opportunity.wage_premium";
    pub const ENTRY_ACCESSIBILITY: &str = "opportunity.entry_accessibility";
    pub const BASE_OPPORTUNITY: &str = "opportunity.base";
    pub const GROWTH_MULTIPLIER: &str = "opportunity.growth_multiplier";
    pub const REGIONAL_MULTIPLIER: &str = "opportunity.regional_multiplier";
    pub const SKILLS_MATCH: &str = "synergy.skills_match";
    pub const TIMING_FACTOR: &str = "synergy.timing_factor";
    pub const ALIGNMENT: &str = "synergy.alignment";
}

/// Result of one scoring run. Headline scores are on the 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub vr_score: f64,
    pub hr_score: f64,
    pub synergy_pct: f64,
    pub ai_r: f64,
    /// AI-R before the [0, 100] clamp.
    pub ai_r_uncapped: f64,
    pub pillars: PillarScores,
    pub skills_match: f64,
    pub timing_factor: f64,
    pub alignment: f64,
    pub breakdown: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDeltas {
    pub vr_score: f64,
    pub hr_score: f64,
    pub synergy_pct: f64,
    pub ai_r: f64,
}

/// Baseline and projected scores for one learning pathway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub baseline: ScoreReport,
    pub pathway_id: String,
    pub progress: PathwayProgress,
    pub pillars_before: PillarScores,
    pub pillars_after: PillarScores,
    pub vr_score: f64,
    pub hr_score: f64,
    pub synergy_pct: f64,
    pub ai_r: f64,
    pub ai_r_uncapped: f64,
}

impl SimulationReport {
    pub fn deltas(&self) -> ScoreDeltas {
        ScoreDeltas {
            vr_score: self.vr_score - self.baseline.vr_score,
            hr_score: self.hr_score - self.baseline.hr_score,
            synergy_pct: self.synergy_pct - self.baseline.synergy_pct,
            ai_r: self.ai_r - self.baseline.ai_r,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Headline {
    vr_score: f64,
    synergy_pct: f64,
    ai_r: f64,
    ai_r_uncapped: f64,
}

/// Runs the full V^R / H^R / synergy / AI-R chain.
///
/// The engine keeps only weights; every call is a pure function of its input.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    readiness_weights: ReadinessWeights,
    opportunity_weights: OpportunityWeights,
    experience_gamma: f64,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self {
            readiness_weights: ReadinessWeights::default(),
            opportunity_weights: OpportunityWeights::default(),
            experience_gamma: EXPERIENCE_GAMMA,
        }
    }

    pub fn with_weights(readiness: ReadinessWeights, opportunity: OpportunityWeights) -> Self {
        Self {
            readiness_weights: readiness,
            opportunity_weights: opportunity,
            experience_gamma: EXPERIENCE_GAMMA,
        }
    }

    #[must_use]
    pub fn with_experience_gamma(mut self, gamma: f64) -> Self {
        self.experience_gamma = gamma;
        self
    }

    pub const fn readiness_weights(&self) -> &ReadinessWeights {
        &self.readiness_weights
    }

    pub const fn opportunity_weights(&self) -> &OpportunityWeights {
        &self.opportunity_weights
    }

    pub fn score(&self, input: &ScoringInput) -> Result<ScoreReport> {
        let tuning = validate_input(input)?;
        self.score_validated(input, &tuning)
    }

    fn score_validated(
        &self,
        input: &ScoringInput,
        tuning: &TuningParameters,
    ) -> Result<ScoreReport> {
        let mut breakdown = BTreeMap::new();

        let pillars = PillarScores {
            ai_fluency: fluency_pillar(&input.profile, &mut breakdown)?,
            domain_expertise: self.domain_pillar(&input.profile, &mut breakdown),
            adaptive_capacity: adaptive_pillar(&input.profile, &mut breakdown),
        };

        let hr_score = self.opportunity_pillar(&input.occupation, tuning, &mut breakdown) * 100.0;

        let skills_match = skills_match_score(&input.individual_skills, &input.required_skills);
        let timing = timing_factor(input.profile.years_experience);
        let alignment = alignment_factor(skills_match, tuning.max_possible_match, timing);
        record(&mut breakdown, keys::SKILLS_MATCH, skills_match);
        record(&mut breakdown, keys::TIMING_FACTOR, timing);
        record(&mut breakdown, keys::ALIGNMENT, alignment);

        let headline = self.headline(&pillars, hr_score, alignment, tuning);

        tracing::debug!(
            occupation = %input.occupation.occupation_name,
            vr = headline.vr_score,
            hr = hr_score,
            synergy = headline.synergy_pct,
            ai_r = headline.ai_r,
            "scored ai-readiness"
        );

        Ok(ScoreReport {
            vr_score: headline.vr_score,
            hr_score,
            synergy_pct: headline.synergy_pct,
            ai_r: headline.ai_r,
            ai_r_uncapped: headline.ai_r_uncapped,
            pillars,
            skills_match,
            timing_factor: timing,
            alignment,
            breakdown,
        })
    }

    /// Projects the scores after `pathway`. H^R and the alignment factor are held at baseline.
    pub fn simulate(
        &self,
        input: &ScoringInput,
        pathway: &LearningPathway,
        progress: PathwayProgress,
    ) -> Result<SimulationReport> {
        for (field, value) in [
            ("impact_ai_fluency", pathway.impact_ai_fluency),
            ("impact_domain_expertise", pathway.impact_domain_expertise),
            ("impact_adaptive_capacity", pathway.impact_adaptive_capacity),
            ("completion", progress.completion),
            ("mastery", progress.mastery),
        ] {
            ensure_finite(field, value)?;
        }

        let tuning = validate_input(input)?;
        let baseline = self.score_validated(input, &tuning)?;
        let progress = PathwayProgress::new(progress.completion, progress.mastery);

        let pillars_after = simulate_pathway_impact(&baseline.pillars, pathway, &progress);
        let projected = self.headline(&pillars_after, baseline.hr_score, baseline.alignment, &tuning);

        tracing::debug!(
            pathway = %pathway.pathway_id,
            vr_before = baseline.vr_score,
            vr_after = projected.vr_score,
            ai_r_before = baseline.ai_r,
            ai_r_after = projected.ai_r,
            "simulated pathway impact"
        );

        Ok(SimulationReport {
            pathway_id: pathway.pathway_id.clone(),
            progress,
            pillars_before: baseline.pillars,
            pillars_after,
            vr_score: projected.vr_score,
            hr_score: baseline.hr_score,
            synergy_pct: projected.synergy_pct,
            ai_r: projected.ai_r,
            ai_r_uncapped: projected.ai_r_uncapped,
            baseline,
        })
    }

    fn headline(
        &self,
        pillars: &PillarScores,
        hr_score: f64,
        alignment: f64,
        tuning: &TuningParameters,
    ) -> Headline {
        let vr_score = c100(idiosyncratic_readiness(pillars, &self.readiness_weights) * 100.0);
        let synergy_pct = synergy_percentage(vr_score, hr_score, alignment);
        Headline {
            vr_score,
            synergy_pct,
            ai_r: ai_readiness_score(vr_score, hr_score, synergy_pct, tuning.alpha, tuning.beta),
            ai_r_uncapped: ai_readiness_uncapped(
                vr_score,
                hr_score,
                synergy_pct,
                tuning.alpha,
                tuning.beta,
            ),
        }
    }

    fn domain_pillar(&self, p: &IndividualProfile, breakdown: &mut BTreeMap<String, f64>) -> f64 {
        let education = education_foundation(p.education_level);
        let experience = c01(practical_experience(p.years_experience, self.experience_gamma));
        let specialization = c01(specialization_depth(
            p.portfolio_score,
            p.recognition_score,
            p.credentials_score,
        ));
        let pillar = c01(domain_expertise(education, experience, specialization));

        record(breakdown, keys::EDUCATION_FOUNDATION, education);
        record(breakdown, keys::PRACTICAL_EXPERIENCE, experience);
        record(breakdown, keys::SPECIALIZATION_DEPTH, specialization);
        record(breakdown, keys::DOMAIN_EXPERTISE, pillar);
        pillar
    }

    fn opportunity_pillar(
        &self,
        occ: &Occupation,
        tuning: &TuningParameters,
        breakdown: &mut BTreeMap<String, f64>,
    ) -> f64 {
        let enhancement = c01(ai_enhancement_potential(occ.ai_enhancement_score));
        let job_growth = f64::from(job_growth_projection(occ.job_growth_rate_g)) / 100.0;
        let premium_raw = wage_premium(occ.ai_skilled_wage, occ.median_wage);
        let premium = c01(premium_raw);
        let access = c01(entry_accessibility(
            occ.education_years_required,
            occ.experience_years_required,
        ));

        let h_base = base_opportunity_score(
            enhancement,
            job_growth,
            premium,
            access,
            &self.opportunity_weights,
        );
        let m_growth = growth_multiplier(
            occ.current_job_postings,
            occ.previous_job_postings,
            tuning.lambda,
        );
        let m_regional = regional_multiplier(
            occ.local_demand,
            occ.national_avg_demand,
            occ.remote_work_factor,
            tuning.gamma,
        );

        record(breakdown, keys::AI_ENHANCEMENT, enhancement);
        record(breakdown, keys::JOB_GROWTH, job_growth);
        record(breakdown, keys::WAGE_PREMIUM_RAW, premium_raw);
        record(breakdown, keys::WAGE_PREMIUM, premium);
        record(breakdown, keys::ENTRY_ACCESSIBILITY, access);
        record(breakdown, keys::BASE_OPPORTUNITY, h_base);
        record(breakdown, keys::GROWTH_MULTIPLIER, m_growth);
        record(breakdown, keys::REGIONAL_MULTIPLIER, m_regional);

        systematic_opportunity(h_base, m_growth, m_regional)
    }
}

fn validate_input(input: &ScoringInput) -> Result<TuningParameters> {
    input.profile.validate()?;
    input.occupation.validate()?;
    for skill in &input.individual_skills {
        ensure_finite("individual_skill_score", skill.individual_skill_score)?;
    }
    for skill in &input.required_skills {
        ensure_finite("required_skill_score", skill.required_skill_score)?;
        ensure_finite("skill_importance", skill.skill_importance)?;
    }
    input.tuning.validate()?;
    Ok(input.tuning.sanitized())
}

fn fluency_pillar(p: &IndividualProfile, breakdown: &mut BTreeMap<String, f64>) -> Result<f64> {
    let technical = c01(technical_ai_skills(
        p.prompting_score,
        p.tools_score,
        p.understanding_score,
        p.datalit_score,
    ));
    let productivity_raw = ai_augmented_productivity(
        p.output_quality_with_ai,
        p.output_quality_without_ai,
        p.time_without_ai,
        p.time_with_ai,
    );
    let productivity = normalized_productivity(productivity_raw);
    let judgment = c01(critical_ai_judgment(
        p.errors_caught,
        p.total_ai_errors,
        p.appropriate_trust_decisions,
        p.total_decisions,
    ));
    let velocity = c01(ai_learning_velocity(
        p.delta_proficiency,
        p.delta_t_hours_invested,
    )?);
    let pillar = c01(ai_fluency(technical, productivity, judgment, velocity));

    record(breakdown, keys::TECHNICAL_AI_SKILLS, technical);
    record(breakdown, keys::PRODUCTIVITY_RAW, productivity_raw);
    record(breakdown, keys::PRODUCTIVITY, productivity);
    record(breakdown, keys::CRITICAL_JUDGMENT, judgment);
    record(breakdown, keys::LEARNING_VELOCITY, velocity);
    record(breakdown, keys::AI_FLUENCY, pillar);
    Ok(pillar)
}

fn adaptive_pillar(p: &IndividualProfile, breakdown: &mut BTreeMap<String, f64>) -> f64 {
    let pillar = adaptive_capacity(
        p.cognitive_flexibility,
        p.social_emotional_intelligence,
        p.strategic_career_management,
    );
    record(breakdown, keys::ADAPTIVE_CAPACITY, pillar);
    pillar
}

fn record(breakdown: &mut BTreeMap<String, f64>, key: &str, value: f64) {
    breakdown.insert(key.to_string(), value);
}
