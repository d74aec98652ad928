//! Line-based prompting and output helpers for the interactive CLI.

use std::io::{self, BufRead, Write};

use crate::models::FieldMap;

pub const PREVIEW_LINES: usize = 20;
pub const TRUNCATION_MARKER: &str = "... (truncated - see full XML in output file)";

/// Interactive prompts: request key, prompt label, default answer.
pub const INTERACTIVE_PROMPTS: &[(&str, &str, &str)] = &[
    ("memberId", "Member ID", "MBR987654321"),
    ("medicareId", "Medicare Beneficiary ID", "9ZY8XW7VU65"),
    ("firstName", "First Name", "Jane"),
    ("lastName", "Last Name", "Smith"),
    ("dateOfBirth", "Date of Birth (YYYY-MM-DD)", "1950-03-20"),
    ("gender", "Gender (M/F)", "F"),
    ("street", "Street Address", "789 Oak Avenue"),
    ("city", "City", "Springfield"),
    ("state", "State", "IL"),
    ("zipCode", "ZIP Code", "62701"),
    ("planType", "Plan Type", "Medicare Part A"),
    ("serviceDate", "Service Date (YYYY-MM-DD)", "2023-12-01"),
];

/// Writes `"<prompt> [<default>]: "` and reads one line.
/// A blank answer or end of input yields the default.
pub fn prompt_with_default<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: &str,
) -> io::Result<String> {
    write!(output, "{} [{}]: ", prompt, default)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = line.trim();
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Asks for every interactive field in order.
pub fn collect_membership<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<FieldMap> {
    let mut membership = FieldMap::new();
    for (key, prompt, default) in INTERACTIVE_PROMPTS {
        let value = prompt_with_default(input, output, prompt, default)?;
        membership.insert(key.to_string(), value);
    }
    Ok(membership)
}

/// Summary lines for a membership record.
pub fn describe_membership(membership: &FieldMap) -> Vec<String> {
    let get = |key: &str| membership.get(key).map(String::as_str).unwrap_or("");

    vec![
        format!("  Member ID: {}", get("memberId")),
        format!("  Medicare ID: {}", get("medicareId")),
        format!("  Name: {} {}", get("firstName"), get("lastName")),
        format!("  DOB: {}", get("dateOfBirth")),
        format!(
            "  Address: {}, {}, {} {}",
            get("street"),
            get("city"),
            get("state"),
            get("zipCode")
        ),
        format!("  Plan Type: {}", get("planType")),
    ]
}

/// The first `max_lines` lines of `xml`, followed by the truncation
/// marker when anything was cut.
pub fn preview(xml: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = xml.lines().collect();
    let mut shown = lines
        .iter()
        .take(max_lines)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    if lines.len() > max_lines {
        shown.push('\n');
        shown.push_str(TRUNCATION_MARKER);
    }

    shown
}
