pub mod adaptive;
pub mod combiner;
pub mod domain;
pub mod engine;
pub mod error;
pub mod fluency;
pub mod opportunity;
pub mod pathway;
pub mod policy;
pub mod readiness;
pub mod synergy;
pub mod types;

pub use adaptive::*;
pub use combiner::*;
pub use domain::*;
pub use engine::*;
pub use error::ReadinessError;
pub use fluency::*;
pub use opportunity::*;
pub use pathway::*;
pub use policy::{DegenerateCase, POLICY_TABLE};
pub use readiness::*;
pub use synergy::*;
pub use types::*;

// NaN maps to the lower bound.
pub(crate) fn c01(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

pub(crate) fn c100(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 100.0)
    }
}
