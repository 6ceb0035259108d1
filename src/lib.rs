//! # xmath_worksheet_gen
//!
//! An offline, deterministic generator for arithmetic and algebra practice
//! worksheets, with step-by-step explanations of how each exercise is solved
//! by hand.
//!
//! ## How it works
//!
//! 1. Build a [`WorksheetRequest`] with a count, the operand digit widths, an
//!    operation selector, and an optional RNG seed.
//! 2. Call [`generate_worksheet`] — the engine draws operands (or equation
//!    coefficients), repairs them so every answer is well formed (no negative
//!    differences, exact divisions, integer roots), and computes the result.
//! 3. For the first exercise of each kind, call [`Exercise::explanation`] to
//!    get the written-method trace: carries, borrows, partial products, long
//!    division, or isolation of `x`.
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces the same batch, and
//!   explanations are pure functions of the exercise.
//! - **Typed problems**: [`Problem`] has one variant per operation kind, so
//!   equations carry coefficients and arithmetic carries operands, never both.
//! - **Fail fast**: out-of-range counts, digit widths, zero divisors and
//!   similar input yield [`WorksheetError::InvalidConfiguration`].
//!
//! ## Quick start
//!
//! ```rust
//! use xmath_worksheet_gen::{
//!     generate_worksheet, worked_example_flags, OperationKind, OperationSelector,
//!     WorksheetConfig, WorksheetRequest,
//! };
//!
//! // Minimal — only the operation is required (defaults: 12 exercises, 2×2 digits, entropy):
//! let sheet = generate_worksheet(&WorksheetRequest::new(OperationKind::Subtraction)).unwrap();
//! assert_eq!(sheet.len(), 12);
//!
//! // Full control:
//! let sheet = generate_worksheet(&WorksheetRequest {
//!     count: 8,
//!     config: WorksheetConfig {
//!         digits_top: 3,
//!         digits_bottom: 2,
//!         operation: OperationSelector::Mixed,
//!     },
//!     rng_seed: Some(42),
//! })
//! .unwrap();
//!
//! for (ex, worked) in sheet.iter().zip(worked_example_flags(&sheet)) {
//!     println!("#{} {}  {}", ex.id, ex, ex.result);
//!     if worked {
//!         for step in ex.explanation().unwrap() {
//!             println!("    {step}");
//!         }
//!     }
//! }
//! ```

pub mod card_adapter;
pub mod worksheet_engine;

// Convenience re-exports so callers can use `xmath_worksheet_gen::generate_worksheet`
// directly without reaching into `worksheet_engine::`.
pub use card_adapter::to_worksheet_json;
pub use worksheet_engine::{
    explain, explain_arithmetic, explain_linear, explain_quadratic, explain_worked_examples,
    generate, generate_worksheet, is_header, strip_markers, worked_example_flags, worked_examples,
    ArithmeticOp, Exercise, LinearCoefficients, OperationKind, OperationSelector, Operands,
    Problem, QuadraticCoefficients, Solution, WorksheetConfig, WorksheetError, WorksheetRequest,
};
