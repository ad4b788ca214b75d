//! The `explain` use case: look up check/code documentation.

use safezone_types::explain::{self, Explanation};
use std::fmt::Write;

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available check_ids and codes.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a check_id or code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    heading(&mut out, exp.title, '=');
    let _ = writeln!(out, "{}\n", exp.description);

    heading(&mut out, "Remediation", '-');
    let _ = writeln!(out, "{}\n", exp.remediation);

    heading(&mut out, "Examples", '-');
    out.push('\n');
    example(&mut out, "Before (finding):", exp.examples.before);
    out.push('\n');
    example(&mut out, "After (safe):", exp.examples.after);

    out
}

fn heading(out: &mut String, title: &str, underline: char) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}\n", underline.to_string().repeat(title.len()));
}

/// Scenario examples are JSON, config examples are TOML.
fn example(out: &mut String, label: &str, body: &str) {
    let lang = if body.trim_start().starts_with('{') {
        "json"
    } else {
        "toml"
    };
    let _ = writeln!(out, "{label}\n```{lang}\n{body}\n```");
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    check_ids: &[&'static str],
    codes: &[&'static str],
) -> String {
    let mut out = format!("Unknown check_id or code: {identifier}\n");
    for (title, ids) in [("Available check_ids:", check_ids), ("Available codes:", codes)] {
        let _ = writeln!(out, "\n{title}");
        for id in ids {
            let _ = writeln!(out, "  - {id}");
        }
    }
    out
}
