use std::collections::HashMap;

use crate::c100;
use crate::policy::{degenerate, DegenerateCase};
use crate::types::{IndividualSkill, RequiredSkill};

/// Importance-weighted coverage of the required skills, 0-100.
///
/// Skills are joined by exact, case-sensitive name. The denominator is the
/// importance of every required skill, so a missing skill lowers the score.
/// When the individual table repeats a name, the first row wins.
pub fn skills_match_score(individual: &[IndividualSkill], required: &[RequiredSkill]) -> f64 {
    if individual.is_empty() || required.is_empty() {
        return degenerate(DegenerateCase::SkillsNoOverlap);
    }

    let mut held: HashMap<&str, f64> = HashMap::with_capacity(individual.len());
    for skill in individual {
        held.entry(skill.skill_name.as_str())
            .or_insert(skill.individual_skill_score);
    }

    let total_importance: f64 = required.iter().map(|r| r.skill_importance.max(0.0)).sum();
    if total_importance <= 0.0 {
        return degenerate(DegenerateCase::SkillsNoOverlap);
    }

    let mut matched = 0_usize;
    let mut weighted = 0.0;
    for req in required {
        let Some(&score) = held.get(req.skill_name.as_str()) else {
            continue;
        };
        matched += 1;
        let covered = c100(score).min(c100(req.required_skill_score)) / 100.0;
        weighted += covered * req.skill_importance.max(0.0);
    }

    if matched == 0 {
        return degenerate(DegenerateCase::SkillsNoOverlap);
    }

    weighted / total_importance * 100.0
}

pub fn timing_factor(years_experience: f64) -> f64 {
    if years_experience <= 0.0 {
        return degenerate(DegenerateCase::TimingNewcomer);
    }
    1.0 + years_experience / 5.0
}

pub fn alignment_factor(skills_match: f64, max_possible_match: f64, timing: f64) -> f64 {
    if max_possible_match <= 0.0 {
        return degenerate(DegenerateCase::AlignmentNoNormalizer);
    }
    skills_match / max_possible_match * timing
}

/// Multiplicative coupling of V^R and H^R (both 0-100) scaled by alignment, clamped to 0-100.
pub fn synergy_percentage(vr_score: f64, hr_score: f64, alignment: f64) -> f64 {
    c100(vr_score * hr_score * alignment / 100.0)
}
