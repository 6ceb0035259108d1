//! Step explainers: deterministic, hand-method traces for every operation kind.
//!
//! Each explainer returns a flat `Vec<String>`.  A line that starts with `**`
//! is a section header; the presentation layer strips every `**` before
//! display (see [`strip_markers`]).
//!
//! | Module       | Operations |
//! |--------------|------------|
//! | `arithmetic` | addition, subtraction, multiplication, long division |
//! | `equations`  | linear (`ax + b = c`), quadratic (general formula) |

pub mod arithmetic;
pub mod equations;

pub use arithmetic::explain_arithmetic;
pub use equations::{explain_linear, explain_quadratic};

use crate::worksheet_engine::{
    error::WorksheetError,
    models::{ArithmeticOp, Problem},
};

const HEADER_MARKER: &str = "**";

/// Dispatch to the explainer for the problem's kind.
pub fn explain(problem: &Problem) -> Result<Vec<String>, WorksheetError> {
    match *problem {
        Problem::Addition(o)           => explain_arithmetic(o.top, o.bottom, ArithmeticOp::Addition),
        Problem::Subtraction(o)        => explain_arithmetic(o.top, o.bottom, ArithmeticOp::Subtraction),
        Problem::Multiplication(o)     => explain_arithmetic(o.top, o.bottom, ArithmeticOp::Multiplication),
        Problem::Division(o)           => explain_arithmetic(o.top, o.bottom, ArithmeticOp::Division),
        Problem::LinearEquation(co)    => explain_linear(&co),
        Problem::QuadraticEquation(co) => explain_quadratic(&co),
    }
}

pub fn is_header(step: &str) -> bool {
    step.starts_with(HEADER_MARKER)
}

/// Remove every formatting marker from a step line.
pub fn strip_markers(step: &str) -> String {
    step.replace(HEADER_MARKER, "")
}
