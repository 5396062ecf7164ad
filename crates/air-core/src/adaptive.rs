use crate::c01;

/// Equal-weight mean of three 0-100 ratings, rescaled to [0, 1].
pub fn adaptive_capacity(
    cognitive_flexibility: f64,
    social_emotional_intelligence: f64,
    strategic_career_management: f64,
) -> f64 {
    let mean =
        (cognitive_flexibility + social_emotional_intelligence + strategic_career_management) / 3.0;
    c01(mean / 100.0)
}
