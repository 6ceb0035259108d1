//! Core worksheet engine — exercise generation and step-by-step explanations.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: operation kinds, problems, solutions, request structs |
//! | `error`     | `WorksheetError`, returned for out-of-contract input |
//! | `helpers`   | Bounded random draws, digit handling, equation term rendering |
//! | `generator` | `generate()` with an explicit RNG and `generate_worksheet()` from a request |
//! | `steps`     | Column-by-column and equation-isolation traces |
//! | `worked`    | First-of-kind worked-example selection |

pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod steps;
pub mod worked;

// Re-export the public API surface so callers can use
// `worksheet_engine::generate_worksheet` without reaching into sub-modules.
pub use error::WorksheetError;
pub use generator::{generate, generate_worksheet};
pub use models::{
    ArithmeticOp, Exercise, LinearCoefficients, OperationKind, OperationSelector, Operands,
    Problem, QuadraticCoefficients, Solution, WorksheetConfig, WorksheetRequest,
    MAX_DIGITS, MAX_EXERCISES, MIN_DIGITS,
};
pub use steps::{explain, explain_arithmetic, explain_linear, explain_quadratic, is_header, strip_markers};
pub use worked::{explain_worked_examples, worked_example_flags, worked_examples};
