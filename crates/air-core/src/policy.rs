//! Degenerate-input policy.
//!
//! Zero denominators, empty skill tables and non-positive normalizers are not
//! errors. Each such condition is named here once, together with the neutral
//! value the calculators substitute for it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegenerateCase {
    ProductivityUndefined,
    JudgmentNoEvidence,
    JudgmentNoErrors,
    JudgmentNoDecisions,
    VelocityNoChange,
    ExperienceNoDecay,
    WageNoMedian,
    GrowthNoHistory,
    RegionalNoNational,
    MultiplierOverflow,
    SkillsNoOverlap,
    TimingNewcomer,
    AlignmentNoNormalizer,
}

pub const POLICY_TABLE: [DegenerateCase; 13] = [
    DegenerateCase::ProductivityUndefined,
    DegenerateCase::JudgmentNoEvidence,
    DegenerateCase::JudgmentNoErrors,
    DegenerateCase::JudgmentNoDecisions,
    DegenerateCase::VelocityNoChange,
    DegenerateCase::ExperienceNoDecay,
    DegenerateCase::WageNoMedian,
    DegenerateCase::GrowthNoHistory,
    DegenerateCase::RegionalNoNational,
    DegenerateCase::MultiplierOverflow,
    DegenerateCase::SkillsNoOverlap,
    DegenerateCase::TimingNewcomer,
    DegenerateCase::AlignmentNoNormalizer,
];

impl DegenerateCase {
    pub const fn fallback(self) -> f64 {
        match self {
            Self::JudgmentNoEvidence
            | Self::GrowthNoHistory
            | Self::RegionalNoNational
            | Self::MultiplierOverflow
            | Self::TimingNewcomer => 1.0,
            Self::ProductivityUndefined
            | Self::JudgmentNoErrors
            | Self::JudgmentNoDecisions
            | Self::VelocityNoChange
            | Self::ExperienceNoDecay
            | Self::WageNoMedian
            | Self::SkillsNoOverlap
            | Self::AlignmentNoNormalizer => 0.0,
        }
    }

    pub const fn condition(self) -> &'static str {
        match self {
            Self::ProductivityUndefined => "output quality without AI <= 0 or time with AI <= 0",
            Self::JudgmentNoEvidence => "no AI errors and no trust decisions recorded",
            Self::JudgmentNoErrors => "no AI errors recorded",
            Self::JudgmentNoDecisions => "no trust decisions recorded",
            Self::VelocityNoChange => "no hours invested and no proficiency change",
            Self::ExperienceNoDecay => "experience gamma <= 0",
            Self::WageNoMedian => "median wage <= 0",
            Self::GrowthNoHistory => "no previous job postings",
            Self::RegionalNoNational => "national average demand <= 0",
            Self::MultiplierOverflow => "growth or regional multiplier is not finite",
            Self::SkillsNoOverlap => "empty skill table, empty join or zero total importance",
            Self::TimingNewcomer => "years of experience <= 0",
            Self::AlignmentNoNormalizer => "max possible match <= 0",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ProductivityUndefined => "productivity_undefined",
            Self::JudgmentNoEvidence => "judgment_no_evidence",
            Self::JudgmentNoErrors => "judgment_no_errors",
            Self::JudgmentNoDecisions => "judgment_no_decisions",
            Self::VelocityNoChange => "velocity_no_change",
            Self::ExperienceNoDecay => "experience_no_decay",
            Self::WageNoMedian => "wage_no_median",
            Self::GrowthNoHistory => "growth_no_history",
            Self::RegionalNoNational => "regional_no_national",
            Self::MultiplierOverflow => "multiplier_overflow",
            Self::SkillsNoOverlap => "skills_no_overlap",
            Self::TimingNewcomer => "timing_newcomer",
            Self::AlignmentNoNormalizer => "alignment_no_normalizer",
        }
    }
}

pub(crate) fn degenerate(case: DegenerateCase) -> f64 {
    tracing::trace!(
        case = case.label(),
        condition = case.condition(),
        fallback = case.fallback(),
        "degenerate input, using fallback"
    );
    case.fallback()
}
