//! Programs command handler

use degree_progress::core::models::{DegreeProgram, Family};

/// List program ids grouped by family
pub fn run() {
    for family in Family::ALL {
        println!("{family}:");
        for program in family.programs() {
            let marker = if program == family.default_program() {
                " (default)"
            } else {
                ""
            };
            println!("  {:<24} {}{marker}", program.id(), program.label());
        }
    }
    println!("\n{} programs", DegreeProgram::ALL.len());
}
