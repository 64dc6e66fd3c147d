//! BSc (physical and biological science) rule sets

use super::rules::{
    self, all_courses_with_grade, credits_registered, english, overall_gpa, percent_with_grade,
    unavailable, RuleContext, OTHER_PRACTICALS_REASON, SPECIALIZATION_PRACTICALS_REASON,
    SPECIALIZATION_REASON,
};
use crate::core::aggregate::PASS_GRADE_SCALE;
use crate::core::models::Requirement;

/// D+ bar for optional units
const OPTIONAL_GRADE_SCALE: f64 = 1.3;
/// C- bar for practical units
const PRACTICAL_GRADE_SCALE: f64 = 1.7;

pub fn general(ctx: &RuleContext<'_>) -> Vec<Requirement> {
    let mut requirements = vec![
        credits_registered(ctx, 90.0),
        percent_with_grade(
            "Core Theory with C (≥ 60%)",
            ctx.partition.core_theory.clone(),
            PASS_GRADE_SCALE,
            60.0,
            "core theory",
        ),
        percent_with_grade(
            "Optional with D+ (≥ 60%)",
            ctx.partition.optional.clone(),
            OPTIONAL_GRADE_SCALE,
            60.0,
            "optional",
        ),
        all_courses_with_grade(
            "All Core Practicals with C-",
            ctx.partition.core_practical.clone(),
            PRACTICAL_GRADE_SCALE,
            "core practical units",
        ),
        overall_gpa(ctx, 2.0),
        english(ctx, 2),
    ];
    requirements.extend(rules::mathematics_for_biology(ctx));
    requirements.extend(rules::computer_literacy(ctx));
    requirements
}

pub fn special_selection(ctx: &RuleContext<'_>) -> Vec<Requirement> {
    vec![
        credits_registered(ctx, 60.0),
        unavailable(
            "60% of Credits in the relevant subjects with C (Theory)",
            SPECIALIZATION_REASON,
        ),
        unavailable(
            "All Practical Course Units of specializing subject with C-",
            SPECIALIZATION_PRACTICALS_REASON,
        ),
        unavailable(
            "Other Practicals: D+ (Optional), C- (Core)",
            OTHER_PRACTICALS_REASON,
        ),
        overall_gpa(ctx, 2.0),
        unavailable("80% of specializing subject with B-", SPECIALIZATION_REASON),
        english(ctx, 2),
    ]
}

pub fn special_completion(ctx: &RuleContext<'_>) -> Vec<Requirement> {
    let mut requirements = vec![
        overall_gpa(ctx, 2.0),
        unavailable("52 Credits in specializing subject", SPECIALIZATION_REASON),
        unavailable(
            "60% of specialization Theory credits with C",
            SPECIALIZATION_REASON,
        ),
        unavailable(
            "All Practicals of specialization with C-",
            SPECIALIZATION_PRACTICALS_REASON,
        ),
        unavailable("Specialization subject GPA (≥ 2.00)", SPECIALIZATION_REASON),
        rules::research_project(ctx),
        rules::fourth_year_with_c(ctx),
        english(ctx, 3),
    ];
    requirements.extend(rules::mathematics_for_biology(ctx));
    requirements.extend(rules::computer_literacy(ctx));
    requirements
}
