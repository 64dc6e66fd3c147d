//! Classify command handler

use crate::args::FamilyArg;
use degree_progress::core::{
    models::{normalize, Family},
    registry::Registry,
};

/// Print the handbook classification of each code
pub fn run(codes: &[String], family: Option<FamilyArg>) {
    let registry = Registry::handbook();
    let family = family.map(|f| match f {
        FamilyArg::Bsc => Family::Bsc,
        FamilyArg::Bcs => Family::Bcs,
    });

    for code in codes {
        match registry.lookup(code, family) {
            Some(class) => println!(
                "{}: {} / {}",
                normalize(code),
                class.course_type,
                class.nature
            ),
            None => println!("{}: unclassified", normalize(code)),
        }
    }
}
