use std::fs;
use std::path::PathBuf;

use air_catalog::Catalog;
use air_core::{PathwayProgress, ScoringEngine, TuningParameters};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    individual_id: String,
    occupation_name: String,
    tuning: TuningParameters,
    pathway_id: String,
    completion: f64,
    mastery: f64,
    expected: Expected,
    expected_projection: ExpectedProjection,
}

#[derive(Debug, Deserialize)]
struct Expected {
    vr_score: f64,
    hr_score: f64,
    synergy_pct: f64,
    ai_r: f64,
    ai_r_uncapped: f64,
    skills_match: f64,
    timing_factor: f64,
    alignment: f64,
}

#[derive(Debug, Deserialize)]
struct ExpectedProjection {
    vr_score: f64,
    synergy_pct: f64,
    ai_r: f64,
    ai_r_uncapped: f64,
}

fn close(case: &str, what: &str, got: f64, want: f64) {
    assert!(
        (got - want).abs() < 1e-6,
        "case {case}: {what} = {got}, expected {want}"
    );
}

#[test]
fn holdout_cases_pass() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fixture = root
        .join("..")
        .join("..")
        .join("data")
        .join("holdout")
        .join("scoring_cases.json");

    let content = fs::read_to_string(&fixture)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", fixture.display()));
    let cases: Vec<Case> = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", fixture.display()));
    assert!(!cases.is_empty());
    assert!(
        cases
            .iter()
            .any(|c| c.expected.ai_r < 100.0 && c.expected_projection.ai_r_uncapped > 100.0),
        "fixture needs a projection that crosses the cap"
    );

    let catalog = Catalog::builtin().expect("builtin catalog");
    let engine = ScoringEngine::new();

    for case in cases {
        let input = catalog
            .stored_scoring_input(&case.individual_id, &case.occupation_name, case.tuning)
            .expect("scoring input");
        let pathway = catalog.pathway(&case.pathway_id).expect("pathway");
        let report = engine
            .simulate(
                &input,
                pathway,
                PathwayProgress::new(case.completion, case.mastery),
            )
            .unwrap_or_else(|e| panic!("case {} failed: {e}", case.name));

        let base = &report.baseline;
        let want = &case.expected;
        close(&case.name, "vr_score", base.vr_score, want.vr_score);
        close(&case.name, "hr_score", base.hr_score, want.hr_score);
        close(&case.name, "synergy_pct", base.synergy_pct, want.synergy_pct);
        close(&case.name, "ai_r", base.ai_r, want.ai_r);
        close(&case.name, "ai_r_uncapped", base.ai_r_uncapped, want.ai_r_uncapped);
        close(&case.name, "skills_match", base.skills_match, want.skills_match);
        close(&case.name, "timing_factor", base.timing_factor, want.timing_factor);
        close(&case.name, "alignment", base.alignment, want.alignment);

        let proj = &case.expected_projection;
        close(&case.name, "projected vr_score", report.vr_score, proj.vr_score);
        close(&case.name, "projected synergy_pct", report.synergy_pct, proj.synergy_pct);
        close(&case.name, "projected ai_r", report.ai_r, proj.ai_r);
        close(
            &case.name,
            "projected ai_r_uncapped",
            report.ai_r_uncapped,
            proj.ai_r_uncapped,
        );
        assert!((0.0..=100.0).contains(&report.ai_r), "case {}", case.name);
        assert_eq!(report.hr_score, base.hr_score, "case {}", case.name);
    }
}
