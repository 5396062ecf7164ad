use crate::error::{ensure_finite, ReadinessError, Result};
use crate::policy::{degenerate, DegenerateCase};
use crate::c01;

/// Raw productivity ratio that maps to a full score.
pub const PRODUCTIVITY_CEILING: f64 = 4.0;

pub const TECHNICAL_WEIGHT: f64 = 0.10;
pub const PRODUCTIVITY_WEIGHT: f64 = 0.20;
pub const JUDGMENT_WEIGHT: f64 = 0.30;
pub const VELOCITY_WEIGHT: f64 = 0.40;

pub fn technical_ai_skills(prompting: f64, tools: f64, understanding: f64, data_lit: f64) -> f64 {
    (prompting + tools + understanding + data_lit) / 4.0
}

/// Quality ratio times speed-up. Not normalized; see [`normalized_productivity`].
pub fn ai_augmented_productivity(
    quality_with_ai: f64,
    quality_without_ai: f64,
    time_without_ai: f64,
    time_with_ai: f64,
) -> f64 {
    if quality_without_ai <= 0.0 || time_with_ai <= 0.0 {
        return degenerate(DegenerateCase::ProductivityUndefined);
    }
    (quality_with_ai / quality_without_ai) * (time_without_ai / time_with_ai)
}

pub fn normalized_productivity(raw: f64) -> f64 {
    c01(raw / PRODUCTIVITY_CEILING)
}

pub fn critical_ai_judgment(
    errors_caught: u32,
    total_ai_errors: u32,
    appropriate_trust_decisions: u32,
    total_decisions: u32,
) -> f64 {
    if total_ai_errors == 0 && total_decisions == 0 {
        return degenerate(DegenerateCase::JudgmentNoEvidence);
    }

    let error_ratio = if total_ai_errors > 0 {
        f64::from(errors_caught) / f64::from(total_ai_errors)
    } else {
        degenerate(DegenerateCase::JudgmentNoErrors)
    };
    let trust_ratio = if total_decisions > 0 {
        f64::from(appropriate_trust_decisions) / f64::from(total_decisions)
    } else {
        degenerate(DegenerateCase::JudgmentNoDecisions)
    };

    c01(1.0 - (error_ratio + trust_ratio) / 2.0)
}

/// Proficiency gained per hour invested.
///
/// Zero hours with zero change is "no velocity". Zero hours with a nonzero
/// change cannot happen in valid data and is rejected, as are negative hours.
pub fn ai_learning_velocity(delta_proficiency: f64, hours_invested: f64) -> Result<f64> {
    let delta = ensure_finite("delta_proficiency", delta_proficiency)?;
    let hours = ensure_finite("delta_t_hours_invested", hours_invested)?;

    if hours < 0.0 {
        return Err(ReadinessError::invalid(
            "delta_t_hours_invested",
            format!("hours invested cannot be negative, got {hours}"),
        ));
    }
    if hours == 0.0 {
        if delta == 0.0 {
            return Ok(degenerate(DegenerateCase::VelocityNoChange));
        }
        return Err(ReadinessError::invalid(
            "delta_t_hours_invested",
            format!("proficiency changed by {delta} with zero hours invested"),
        ));
    }

    Ok(delta / hours)
}

pub fn ai_fluency(technical: f64, productivity: f64, judgment: f64, velocity: f64) -> f64 {
    TECHNICAL_WEIGHT * c01(technical)
        + PRODUCTIVITY_WEIGHT * c01(productivity)
        + JUDGMENT_WEIGHT * c01(judgment)
        + VELOCITY_WEIGHT * c01(velocity)
}
