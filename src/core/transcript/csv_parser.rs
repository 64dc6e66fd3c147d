//! CSV reader for transcript exports
//!
//! Layout: `Key,Value` metadata lines, then a `Results` marker line, a
//! header row and one row per result.
//!
//! ```text
//! Student,SC/2021/12345
//! GPA,3.12
//! Confirmed Credits,96
//! Departments,Computer Science;Mathematics
//! Non Degree,FSC115α
//! Results
//! Code,Name,Grade,Credit,Grade Scale,Year,Semester
//! CSC1113,Programming Techniques,A,3,4.0,2021,1
//! ```

use crate::core::models::{grade_points, SubjectRecord, Transcript};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Transcript-level values from the metadata header
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptMetadata {
    /// Student identifier
    pub student: Option<String>,
    /// Published overall GPA
    pub gpa: Option<f64>,
    /// Confirmed (registered) credits
    pub confirmed_credits: Option<f64>,
    /// Department tags
    pub departments: Vec<String>,
    /// Codes outside the degree structure
    pub non_degree: Vec<String>,
}

/// Read a transcript CSV file
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// The transcript with its subjects in file order
///
/// # Errors
/// Returns an error if the file cannot be read or is missing the GPA,
/// the `Results` section or its header row
pub fn parse_transcript_csv<P: AsRef<Path>>(path: P) -> Result<Transcript, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_transcript_str(&content)
}

/// Parse transcript CSV text
///
/// # Errors
/// Same conditions as [`parse_transcript_csv`], minus the file read
pub fn parse_transcript_str(content: &str) -> Result<Transcript, Box<dyn Error>> {
    let lines: Vec<&str> = content.lines().collect();

    let results_start = lines
        .iter()
        .position(|line| {
            parse_csv_line(line)
                .first()
                .is_some_and(|field| field.eq_ignore_ascii_case("results"))
        })
        .ok_or("No 'Results' section found in CSV")?;

    let metadata = parse_metadata(&lines[..results_start]);
    let gpa = metadata.gpa.ok_or("Missing GPA")?;

    let header_line = lines
        .get(results_start + 1)
        .ok_or("No results header found")?;
    let headers = parse_csv_line(header_line);
    if column(&headers, "Code").is_none() {
        return Err("Results header has no 'Code' column".into());
    }

    let mut subjects = Vec::new();
    for (offset, line) in lines.iter().enumerate().skip(results_start + 2) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_result_line(line, &headers) {
            Some(subject) => subjects.push(subject),
            None => logger::warn!("Skipping result on line {}: no course code", offset + 1),
        }
    }

    let confirmed_credits = metadata.confirmed_credits.unwrap_or_else(|| {
        subjects
            .iter()
            .filter(|s| s.is_credit_bearing())
            .map(|s| s.credit)
            .sum()
    });

    let mut transcript = Transcript::new(gpa, confirmed_credits, subjects)
        .with_excluded(&metadata.non_degree)
        .with_departments(metadata.departments);
    transcript.student = metadata.student;
    Ok(transcript)
}

/// Parse metadata from the lines preceding the results section
fn parse_metadata(lines: &[&str]) -> TranscriptMetadata {
    let mut metadata = TranscriptMetadata::default();

    for line in lines {
        let parts = parse_csv_line(line);
        if parts.len() < 2 {
            continue;
        }

        let key = parts[0].to_lowercase();
        let value = parts[1].as_str();

        match key.as_str() {
            "student" => metadata.student = Some(value.to_string()).filter(|s| !s.is_empty()),
            "gpa" => metadata.gpa = value.parse().ok(),
            "confirmed credits" => metadata.confirmed_credits = value.parse().ok(),
            "departments" => metadata.departments = split_list(value),
            "non degree" => metadata.non_degree = split_list(value),
            _ => {}
        }
    }

    metadata
}

/// Split a semicolon-separated list, dropping empty items
fn split_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a CSV line into trimmed fields; double quotes protect commas
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if quoted && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Index of a header column (case-insensitive)
fn column(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(name))
}

/// Parse one result row; `None` when the row has no course code.
///
/// Unparseable credits become 0 so the row is treated as non-credit. A
/// missing grade-scale is looked up from the letter grade.
fn parse_result_line(line: &str, headers: &[String]) -> Option<SubjectRecord> {
    let fields = parse_csv_line(line);
    let field = |name: &str| {
        column(headers, name)
            .and_then(|idx| fields.get(idx))
            .map_or("", String::as_str)
    };

    let code = field("Code");
    if code.is_empty() {
        return None;
    }
    let grade = field("Grade");

    let credit = field("Credit").parse::<f64>().unwrap_or_else(|_| {
        logger::warn!("{code}: unreadable credit '{}', treating as non-credit", field("Credit"));
        0.0
    });
    let grade_scale = field("Grade Scale")
        .parse::<f64>()
        .ok()
        .or_else(|| grade_points(grade))
        .unwrap_or_else(|| {
            logger::debug!("{code}: no grade-scale for grade '{grade}', using 0.0");
            0.0
        });
    let year = field("Year").parse::<u32>().unwrap_or(0);

    Some(
        SubjectRecord::new(code, field("Name"), grade, credit, grade_scale)
            .in_term(year, field("Semester")),
    )
}
