use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ReadinessError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EducationLevel {
    PhD,
    Masters,
    Bachelors,
    AssociatesOrCertificate,
    SomeCollege,
    HighSchoolPlusCoursework,
    #[default]
    Other,
}

impl EducationLevel {
    pub const ALL: [Self; 7] = [
        Self::PhD,
        Self::Masters,
        Self::Bachelors,
        Self::AssociatesOrCertificate,
        Self::SomeCollege,
        Self::HighSchoolPlusCoursework,
        Self::Other,
    ];

    /// Unmapped labels resolve to [`EducationLevel::Other`].
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|level| level.label() == label.trim())
            .unwrap_or(Self::Other)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PhD => "PhD",
            Self::Masters => "Master's",
            Self::Bachelors => "Bachelor's",
            Self::AssociatesOrCertificate => "Associate's/Certificate",
            Self::SomeCollege => "Some College",
            Self::HighSchoolPlusCoursework => "HS + significant coursework",
            Self::Other => "Other",
        }
    }
}

impl From<String> for EducationLevel {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<EducationLevel> for String {
    fn from(value: EducationLevel) -> Self {
        value.label().to_string()
    }
}

/// Raw attributes of one individual.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndividualProfile {
    pub individual_id: String,

    // AI-Fluency, each in [0, 1]
    pub prompting_score: f64,
    pub tools_score: f64,
    pub understanding_score: f64,
    pub datalit_score: f64,
    pub output_quality_with_ai: f64,
    pub output_quality_without_ai: f64,
    pub time_without_ai: f64,
    pub time_with_ai: f64,
    pub errors_caught: u32,
    pub total_ai_errors: u32,
    pub appropriate_trust_decisions: u32,
    pub total_decisions: u32,
    pub delta_proficiency: f64,
    pub delta_t_hours_invested: f64,

    // Domain-Expertise
    pub education_level: EducationLevel,
    pub years_experience: f64,
    pub portfolio_score: f64,
    pub recognition_score: f64,
    pub credentials_score: f64,

    // Adaptive-Capacity, each 0-100
    pub cognitive_flexibility: f64,
    pub social_emotional_intelligence: f64,
    pub strategic_career_management: f64,
}

impl IndividualProfile {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("prompting_score", self.prompting_score),
            ("tools_score", self.tools_score),
            ("understanding_score", self.understanding_score),
            ("datalit_score", self.datalit_score),
            ("output_quality_with_ai", self.output_quality_with_ai),
            ("output_quality_without_ai", self.output_quality_without_ai),
            ("time_without_ai", self.time_without_ai),
            ("time_with_ai", self.time_with_ai),
            ("delta_proficiency", self.delta_proficiency),
            ("delta_t_hours_invested", self.delta_t_hours_invested),
            ("years_experience", self.years_experience),
            ("portfolio_score", self.portfolio_score),
            ("recognition_score", self.recognition_score),
            ("credentials_score", self.credentials_score),
            ("cognitive_flexibility", self.cognitive_flexibility),
            ("social_emotional_intelligence", self.social_emotional_intelligence),
            ("strategic_career_management", self.strategic_career_management),
        ] {
            ensure_finite(field, value)?;
        }
        Ok(())
    }
}

/// Market attributes of one occupation. `occupation_name` is the unique key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Occupation {
    pub occupation_name: String,
    pub ai_enhancement_score: f64,
    #[serde(alias = "job_growth_rate")]
    pub job_growth_rate_g: f64,
    pub ai_skilled_wage: f64,
    pub median_wage: f64,
    pub education_years_required: f64,
    pub experience_years_required: f64,
    pub current_job_postings: u64,
    pub previous_job_postings: u64,
    pub remote_work_factor: f64,
    pub local_demand: f64,
    pub national_avg_demand: f64,
}

impl Default for Occupation {
    fn default() -> Self {
        Self {
            occupation_name: String::new(),
            ai_enhancement_score: 0.0,
            job_growth_rate_g: 0.0,
            ai_skilled_wage: 0.0,
            median_wage: 0.0,
            education_years_required: 0.0,
            experience_years_required: 0.0,
            current_job_postings: 0,
            previous_job_postings: 0,
            remote_work_factor: 0.0,
            local_demand: 1.0,
            national_avg_demand: 1.0,
        }
    }
}

impl Occupation {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("ai_enhancement_score", self.ai_enhancement_score),
            ("job_growth_rate_g", self.job_growth_rate_g),
            ("ai_skilled_wage", self.ai_skilled_wage),
            ("median_wage", self.median_wage),
            ("education_years_required", self.education_years_required),
            ("experience_years_required", self.experience_years_required),
            ("remote_work_factor", self.remote_work_factor),
            ("local_demand", self.local_demand),
            ("national_avg_demand", self.national_avg_demand),
        ] {
            ensure_finite(field, value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualSkill {
    pub skill_name: String,
    pub individual_skill_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub skill_name: String,
    pub required_skill_score: f64,
    #[serde(default = "default_importance")]
    pub skill_importance: f64,
}

const fn default_importance() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPathway {
    pub pathway_id: String,
    pub pathway_name: String,
    #[serde(default)]
    pub impact_ai_fluency: f64,
    #[serde(default)]
    pub impact_domain_expertise: f64,
    #[serde(default)]
    pub impact_adaptive_capacity: f64,
}

/// Per-invocation coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningParameters {
    pub alpha: f64,
    pub beta: f64,
    #[serde(alias = "lambda_val")]
    pub lambda: f64,
    #[serde(alias = "gamma_val")]
    pub gamma: f64,
    pub max_possible_match: f64,
}

impl Default for TuningParameters {
    fn default() -> Self {
        Self {
            alpha: 0.6,
            beta: 0.15,
            lambda: 0.3,
            gamma: 0.2,
            max_possible_match: 100.0,
        }
    }
}

impl TuningParameters {
    pub fn validate(&self) -> Result<()> {
        let alpha = ensure_finite("alpha", self.alpha)?;
        ensure_finite("beta", self.beta)?;
        ensure_finite("lambda", self.lambda)?;
        ensure_finite("gamma", self.gamma)?;
        ensure_finite("max_possible_match", self.max_possible_match)?;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ReadinessError::invalid(
                "alpha",
                format!("must lie in [0, 1], got {alpha}"),
            ));
        }
        Ok(())
    }

    /// Negative beta, lambda and gamma are floored at zero.
    pub fn sanitized(self) -> Self {
        Self {
            beta: self.beta.max(0.0),
            lambda: self.lambda.max(0.0),
            gamma: self.gamma.max(0.0),
            ..self
        }
    }
}

/// Everything one scoring run reads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringInput {
    pub profile: IndividualProfile,
    pub occupation: Occupation,
    #[serde(default)]
    pub individual_skills: Vec<IndividualSkill>,
    #[serde(default)]
    pub required_skills: Vec<RequiredSkill>,
    #[serde(default)]
    pub tuning: TuningParameters,
}
