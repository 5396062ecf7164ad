use crate::c01;
use crate::policy::{degenerate, DegenerateCase};
use crate::types::EducationLevel;

/// Default saturation rate of the experience curve; 1/gamma years scores 0.5.
pub const EXPERIENCE_GAMMA: f64 = 0.15;

pub const EDUCATION_WEIGHT: f64 = 0.125;
pub const EXPERIENCE_WEIGHT: f64 = 0.25;
pub const SPECIALIZATION_WEIGHT: f64 = 0.625;

pub const fn education_foundation(level: EducationLevel) -> f64 {
    match level {
        EducationLevel::PhD => 1.0,
        EducationLevel::Masters => 0.8,
        EducationLevel::Bachelors => 0.6,
        EducationLevel::AssociatesOrCertificate => 0.4,
        EducationLevel::SomeCollege => 0.3,
        EducationLevel::HighSchoolPlusCoursework => 0.2,
        EducationLevel::Other => 0.0,
    }
}

/// Saturating experience curve `years / (years + 1/gamma)`. Negative years count as zero.
pub fn practical_experience(years: f64, gamma: f64) -> f64 {
    if gamma <= 0.0 {
        return degenerate(DegenerateCase::ExperienceNoDecay);
    }
    let years = years.max(0.0);
    years / (years + 1.0 / gamma)
}

pub fn specialization_depth(portfolio: f64, recognition: f64, credentials: f64) -> f64 {
    (portfolio + recognition + credentials) / 3.0
}

pub fn domain_expertise(education: f64, experience: f64, specialization: f64) -> f64 {
    EDUCATION_WEIGHT * c01(education)
        + EXPERIENCE_WEIGHT * c01(experience)
        + SPECIALIZATION_WEIGHT * c01(specialization)
}
