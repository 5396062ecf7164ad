use air_core::*;
use proptest::prelude::*;

fn arb_pillars() -> impl Strategy<Value = PillarScores> {
    (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(|(f, d, a)| PillarScores {
        ai_fluency: f,
        domain_expertise: d,
        adaptive_capacity: a,
    })
}

fn arb_education() -> impl Strategy<Value = EducationLevel> {
    prop::sample::select(EducationLevel::ALL.to_vec())
}

fn arb_input() -> impl Strategy<Value = ScoringInput> {
    (
        (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0),
        (0.0f64..100.0, 1.0f64..100.0, 0.0f64..24.0, 0.5f64..24.0),
        (0u32..50, 1u32..50, 0u32..50, 1u32..50),
        (0.0f64..1.0, 1.0f64..100.0, arb_education(), 0.0f64..40.0),
        (0.0f64..=100.0, 0.0f64..=100.0, 0.0f64..=100.0),
        (0.0f64..=1.0, -0.6f64..0.6, 0.0f64..300_000.0, 0.0f64..200_000.0),
        (0u64..2000, 0u64..2000, 0.0f64..=1.0, 0.0f64..3.0, 0.0f64..3.0),
        (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..2.0, 0.0f64..=1.0),
    )
        .prop_map(
            |(tech, prod, judg, (delta, hours, edu, years), adapt, occ, market, tuning)| {
                ScoringInput {
                    profile: IndividualProfile {
                        individual_id: "P".to_string(),
                        prompting_score: tech.0,
                        tools_score: tech.1,
                        understanding_score: tech.2,
                        datalit_score: tech.3,
                        output_quality_with_ai: prod.0,
                        output_quality_without_ai: prod.1,
                        time_without_ai: prod.2,
                        time_with_ai: prod.3,
                        errors_caught: judg.0,
                        total_ai_errors: judg.1,
                        appropriate_trust_decisions: judg.2,
                        total_decisions: judg.3,
                        delta_proficiency: delta,
                        delta_t_hours_invested: hours,
                        education_level: edu,
                        years_experience: years,
                        portfolio_score: tech.0,
                        recognition_score: tech.1,
                        credentials_score: tech.2,
                        cognitive_flexibility: adapt.0,
                        social_emotional_intelligence: adapt.1,
                        strategic_career_management: adapt.2,
                    },
                    occupation: Occupation {
                        occupation_name: "Any".to_string(),
                        ai_enhancement_score: occ.0,
                        job_growth_rate_g: occ.1,
                        ai_skilled_wage: occ.2,
                        median_wage: occ.3,
                        education_years_required: 4.0,
                        experience_years_required: 2.0,
                        current_job_postings: market.0,
                        previous_job_postings: market.1,
                        remote_work_factor: market.2,
                        local_demand: market.3,
                        national_avg_demand: market.4,
                    },
                    individual_skills: vec![IndividualSkill {
                        skill_name: "Python".to_string(),
                        individual_skill_score: adapt.0,
                    }],
                    required_skills: vec![
                        RequiredSkill {
                            skill_name: "Python".to_string(),
                            required_skill_score: adapt.1,
                            skill_importance: 0.6,
                        },
                        RequiredSkill {
                            skill_name: "SQL".to_string(),
                            required_skill_score: adapt.2,
                            skill_importance: 0.4,
                        },
                    ],
                    tuning: TuningParameters {
                        alpha: tuning.0,
                        beta: tuning.1,
                        lambda: tuning.2,
                        gamma: tuning.3,
                        max_possible_match: 100.0,
                    },
                }
            },
        )
}

proptest! {
    #[test]
    fn fluency_stays_in_unit_range(
        s1 in 0.0f64..=1.0, s2 in 0.0f64..=1.0, s3 in 0.0f64..=1.0, s4 in 0.0f64..=1.0,
    ) {
        let f = ai_fluency(s1, s2, s3, s4);
        prop_assert!((0.0..=1.0 + 1e-12).contains(&f), "fluency {}", f);
    }

    #[test]
    fn growth_multiplier_without_history_is_one(current in 0u64..1_000_000, lambda in -5.0f64..5.0) {
        prop_assert_eq!(growth_multiplier(current, 0, lambda), 1.0);
    }

    #[test]
    fn wage_premium_without_median_is_zero(ai_wage in -1e6f64..1e6) {
        prop_assert_eq!(wage_premium(ai_wage, 0.0), 0.0);
    }

    #[test]
    fn vr_is_monotone_in_each_pillar(base in arb_pillars(), bump in 0.0f64..=1.0, which in 0usize..3) {
        let w = ReadinessWeights::default();
        let mut raised = base;
        match which {
            0 => raised.ai_fluency = (raised.ai_fluency + bump).min(1.0),
            1 => raised.domain_expertise = (raised.domain_expertise + bump).min(1.0),
            _ => raised.adaptive_capacity = (raised.adaptive_capacity + bump).min(1.0),
        }
        prop_assert!(idiosyncratic_readiness(&raised, &w) >= idiosyncratic_readiness(&base, &w));
    }

    #[test]
    fn fluency_is_monotone_in_each_sub_score(
        s in (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0),
        bump in 0.0f64..=1.0,
        which in 0usize..4,
    ) {
        let base = ai_fluency(s.0, s.1, s.2, s.3);
        let raised = match which {
            0 => ai_fluency(s.0 + bump, s.1, s.2, s.3),
            1 => ai_fluency(s.0, s.1 + bump, s.2, s.3),
            2 => ai_fluency(s.0, s.1, s.2 + bump, s.3),
            _ => ai_fluency(s.0, s.1, s.2, s.3 + bump),
        };
        prop_assert!(raised >= base);
    }

    #[test]
    fn domain_expertise_is_monotone_in_each_sub_score(
        s in (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0),
        bump in 0.0f64..=1.0,
        which in 0usize..3,
    ) {
        let base = domain_expertise(s.0, s.1, s.2);
        let raised = match which {
            0 => domain_expertise(s.0 + bump, s.1, s.2),
            1 => domain_expertise(s.0, s.1 + bump, s.2),
            _ => domain_expertise(s.0, s.1, s.2 + bump),
        };
        prop_assert!(raised >= base);
    }

    #[test]
    fn skills_match_is_a_percentage(scores in prop::collection::vec(0.0f64..=100.0, 1..6)) {
        let individual: Vec<_> = scores
            .iter()
            .enumerate()
            .map(|(i, s)| IndividualSkill { skill_name: format!("s{i}"), individual_skill_score: *s })
            .collect();
        let required: Vec<_> = scores
            .iter()
            .enumerate()
            .map(|(i, s)| RequiredSkill {
                skill_name: format!("s{i}"),
                required_skill_score: 100.0 - s,
                skill_importance: 1.0 + *s,
            })
            .collect();
        let m = skills_match_score(&individual, &required);
        prop_assert!((0.0..=100.0 + 1e-9).contains(&m));
    }

    #[test]
    fn full_pipeline_is_bounded_and_idempotent(input in arb_input()) {
        let engine = ScoringEngine::new();
        let a = engine.score(&input).unwrap();
        let b = engine.score(&input).unwrap();
        prop_assert_eq!(a.ai_r.to_bits(), b.ai_r.to_bits());
        prop_assert_eq!(&a, &b);
        for v in [a.vr_score, a.hr_score, a.synergy_pct, a.ai_r] {
            prop_assert!((0.0..=100.0).contains(&v), "score {}", v);
        }
    }

    #[test]
    fn extreme_market_ratios_stay_bounded(
        input in arb_input(),
        local in 0.0f64..1e300,
        national in 1e-320f64..1e-300,
        current in 0u64..=u64::MAX,
        lambda in 0.0f64..2000.0,
        gamma in 0.0f64..2.0,
    ) {
        let mut input = input;
        input.occupation.local_demand = local;
        input.occupation.national_avg_demand = national;
        input.occupation.current_job_postings = current;
        input.occupation.previous_job_postings = 1;
        input.tuning.lambda = lambda;
        input.tuning.gamma = gamma;
        let report = ScoringEngine::new().score(&input).unwrap();
        for v in [report.hr_score, report.synergy_pct, report.ai_r] {
            prop_assert!((0.0..=100.0).contains(&v), "score {}", v);
        }
        prop_assert!(report.ai_r_uncapped.is_finite());
    }

    #[test]
    fn simulation_never_lowers_vr_for_positive_pathways(
        input in arb_input(),
        impact in (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0),
        completion in 0.0f64..=1.0,
        mastery in 0.0f64..=1.0,
    ) {
        let pathway = LearningPathway {
            pathway_id: "LP".to_string(),
            pathway_name: "Positive".to_string(),
            impact_ai_fluency: impact.0,
            impact_domain_expertise: impact.1,
            impact_adaptive_capacity: impact.2,
        };
        let report = ScoringEngine::new()
            .simulate(&input, &pathway, PathwayProgress::new(completion, mastery))
            .unwrap();
        prop_assert!(report.vr_score >= report.baseline.vr_score);
        prop_assert_eq!(report.hr_score, report.baseline.hr_score);
        prop_assert!((0.0..=100.0).contains(&report.ai_r));
    }
}
