use crate::c100;

/// `alpha * vr + (1 - alpha) * hr + beta * synergy` without the display clamp.
///
/// A large beta can push this past 100.
pub fn ai_readiness_uncapped(vr: f64, hr: f64, synergy: f64, alpha: f64, beta: f64) -> f64 {
    alpha * vr + (1.0 - alpha) * hr + beta * synergy
}

/// AI-R clamped to [0, 100]. Scoring and simulation both report this value.
pub fn ai_readiness_score(vr: f64, hr: f64, synergy: f64, alpha: f64, beta: f64) -> f64 {
    c100(ai_readiness_uncapped(vr, hr, synergy, alpha, beta))
}
