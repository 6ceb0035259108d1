use serde_json::{json, Value};

use crate::worksheet_engine::{
    error::WorksheetError,
    models::{Exercise, Problem},
    steps::{is_header, strip_markers},
    worked::worked_example_flags,
};

/// LaTeX-friendly operator for the vertical layout.
fn latex_symbol(problem: &Problem) -> &'static str {
    match problem {
        Problem::Subtraction(_)    => "-",
        Problem::Multiplication(_) => "\\times",
        _                          => "+",
    }
}

/// LaTeX source for one exercise card.
///
/// Division uses the long-division bracket, equations use their text with
/// `x²` rewritten, everything else is stacked vertically.
fn card_latex(ex: &Exercise) -> String {
    match ex.problem {
        Problem::Division(o) => format!(
            "\\begin{{array}}{{r|l}} & \\phantom{{{}}} \\\\ \\hline {} & {} \\\\ \\end{{array}}",
            o.top / o.bottom.max(1),
            o.bottom,
            o.top
        ),
        Problem::LinearEquation(_) | Problem::QuadraticEquation(_) => {
            ex.equation_text().unwrap_or_default().replace("x²", "x^2")
        }
        Problem::Addition(o) | Problem::Subtraction(o) | Problem::Multiplication(o) => format!(
            "\\begin{{array}}{{r}} {} \\\\ {} \\; {} \\\\ \\hline \\end{{array}}",
            o.top,
            latex_symbol(&ex.problem),
            o.bottom
        ),
    }
}

/// Split explanation lines into header/item entries with markers removed.
fn step_entries(steps: &[String]) -> Value {
    Value::Array(
        steps
            .iter()
            .map(|s| json!({ "header": is_header(s), "text": strip_markers(s) }))
            .collect(),
    )
}

fn card(ex: &Exercise, is_example: bool) -> Result<Value, WorksheetError> {
    let steps = if is_example { step_entries(&ex.explanation()?) } else { Value::Array(Vec::new()) };
    Ok(json!({
        "id":         ex.id,
        "operation":  ex.kind().name(),
        "symbol":     ex.symbol(),
        "display":    ex.to_string(),
        "equation":   ex.equation_text(),
        "latex":      card_latex(ex),
        "answer":     ex.result.to_string(),
        "is_example": is_example,
        "steps":      steps,
    }))
}

/// Map a generated batch to the card list the worksheet front end renders.
///
/// Only worked examples (first of each kind) carry explanation steps.
pub fn to_worksheet_json(exercises: &[Exercise]) -> Result<Value, WorksheetError> {
    let cards = exercises
        .iter()
        .zip(worked_example_flags(exercises))
        .map(|(ex, is_example)| card(ex, is_example))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(json!({
        "count": exercises.len(),
        "cards": cards,
    }))
}
