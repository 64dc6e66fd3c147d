//! BCS (computer science) rule sets

use super::rules::{
    self, credits_registered, english, overall_gpa, percent_with_grade, RuleContext,
};
use crate::core::aggregate::PASS_GRADE_SCALE;
use crate::core::models::Requirement;
use crate::core::partition::DepartmentGroup;

/// B- bar for computing units in the special-degree selection
const SELECTION_GRADE_SCALE: f64 = 2.7;

pub fn general(ctx: &RuleContext<'_>) -> Vec<Requirement> {
    let partition = &ctx.partition;
    vec![
        credits_registered(ctx, 90.0),
        percent_with_grade(
            "CS Core with C grade (≥ 60%)",
            partition.core_groups.computing.clone(),
            PASS_GRADE_SCALE,
            60.0,
            "CS core",
        ),
        percent_with_grade(
            "Maths Core with C grade (≥ 60%)",
            partition.core_groups.mathematics.clone(),
            PASS_GRADE_SCALE,
            60.0,
            "Maths core",
        ),
        percent_with_grade(
            "Optional with C grade (≥ 60%)",
            partition.optional.clone(),
            PASS_GRADE_SCALE,
            60.0,
            "optional",
        ),
        rules::industry_placement(ctx),
        english(ctx, 2),
    ]
}

pub fn special_selection(ctx: &RuleContext<'_>) -> Vec<Requirement> {
    let partition = &ctx.partition;
    vec![
        credits_registered(ctx, 90.0),
        percent_with_grade(
            "CS Courses with B- (≥ 80%)",
            partition.group_subjects(DepartmentGroup::Computing),
            SELECTION_GRADE_SCALE,
            80.0,
            "CS",
        ),
        percent_with_grade(
            "Maths Courses with C (≥ 60%)",
            partition.group_subjects(DepartmentGroup::Mathematics),
            PASS_GRADE_SCALE,
            60.0,
            "Maths",
        ),
        rules::industry_placement(ctx),
        overall_gpa(ctx, 2.0),
        english(ctx, 2),
    ]
}

pub fn special_completion(ctx: &RuleContext<'_>) -> Vec<Requirement> {
    vec![
        credits_registered(ctx, 120.0),
        rules::fourth_year_credits(ctx, 30.0),
        overall_gpa(ctx, 2.5),
        rules::research_project(ctx),
        rules::fourth_year_with_c(ctx),
        english(ctx, 3),
    ]
}
