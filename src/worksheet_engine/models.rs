use std::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

use crate::worksheet_engine::{
    error::WorksheetError,
    helpers::{format_real, linear_equation_text, quadratic_equation_text},
    steps,
};

/// Largest batch a single request may ask for.
pub const MAX_EXERCISES: usize = 100;
/// Narrowest operand width, in decimal digits.
pub const MIN_DIGITS: u32 = 1;
/// Widest operand width, in decimal digits.
pub const MAX_DIGITS: u32 = 6;

// ---------------------------------------------------------------------------
// Operation kinds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    LinearEquation,
    QuadraticEquation,
}

impl OperationKind {
    pub const ALL: [OperationKind; 6] = [
        OperationKind::Addition,
        OperationKind::Subtraction,
        OperationKind::Multiplication,
        OperationKind::Division,
        OperationKind::LinearEquation,
        OperationKind::QuadraticEquation,
    ];

    /// Display glyph used on the worksheet.
    pub fn symbol(self) -> &'static str {
        match self {
            OperationKind::Addition          => "+",
            OperationKind::Subtraction       => "−",
            OperationKind::Multiplication    => "×",
            OperationKind::Division          => "÷",
            OperationKind::LinearEquation    => "=",
            OperationKind::QuadraticEquation => "=",
        }
    }

    /// Stable snake_case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Addition          => "addition",
            OperationKind::Subtraction       => "subtraction",
            OperationKind::Multiplication    => "multiplication",
            OperationKind::Division          => "division",
            OperationKind::LinearEquation    => "linear_equation",
            OperationKind::QuadraticEquation => "quadratic_equation",
        }
    }

    pub fn is_equation(self) -> bool {
        matches!(self, OperationKind::LinearEquation | OperationKind::QuadraticEquation)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperationKind::Addition          => "Addition",
            OperationKind::Subtraction       => "Subtraction",
            OperationKind::Multiplication    => "Multiplication",
            OperationKind::Division          => "Division",
            OperationKind::LinearEquation    => "Linear Equation",
            OperationKind::QuadraticEquation => "Quadratic Equation",
        };
        write!(f, "{}", s)
    }
}

/// The four column-algorithm operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArithmeticOp {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl ArithmeticOp {
    /// Pool drawn from when the selector is `Mixed`. Equations are never mixed in.
    pub const MIXED_POOL: [ArithmeticOp; 4] = [
        ArithmeticOp::Addition,
        ArithmeticOp::Subtraction,
        ArithmeticOp::Multiplication,
        ArithmeticOp::Division,
    ];
}

impl From<ArithmeticOp> for OperationKind {
    fn from(op: ArithmeticOp) -> Self {
        match op {
            ArithmeticOp::Addition       => OperationKind::Addition,
            ArithmeticOp::Subtraction    => OperationKind::Subtraction,
            ArithmeticOp::Multiplication => OperationKind::Multiplication,
            ArithmeticOp::Division       => OperationKind::Division,
        }
    }
}

/// What the caller asks for: one fixed kind, or a random arithmetic kind per exercise.
///
/// Serialized as a bare name: `"addition"` … `"quadratic_equation"`, or `"mixed"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum OperationSelector {
    Single(OperationKind),
    Mixed,
}

impl From<OperationKind> for OperationSelector {
    fn from(kind: OperationKind) -> Self {
        OperationSelector::Single(kind)
    }
}

impl From<ArithmeticOp> for OperationSelector {
    fn from(op: ArithmeticOp) -> Self {
        OperationSelector::Single(op.into())
    }
}

impl fmt::Display for OperationSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationSelector::Single(kind) => write!(f, "{}", kind.name()),
            OperationSelector::Mixed        => write!(f, "mixed"),
        }
    }
}

impl FromStr for OperationSelector {
    type Err = WorksheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "mixed" {
            return Ok(OperationSelector::Mixed);
        }
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .map(OperationSelector::Single)
            .ok_or_else(|| WorksheetError::InvalidConfiguration(format!("unknown operation `{s}`")))
    }
}

impl TryFrom<String> for OperationSelector {
    type Error = WorksheetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<OperationSelector> for String {
    fn from(selector: OperationSelector) -> Self {
        selector.to_string()
    }
}

// ---------------------------------------------------------------------------
// Problem payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operands {
    pub top: u64,
    pub bottom: u64,
}

/// `a·x + b = c`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearCoefficients {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl LinearCoefficients {
    pub fn equation_text(&self) -> String {
        linear_equation_text(self.a, self.b, self.c)
    }
}

/// `a·x² + b·x + c = 0`, built from the integer roots `r1`, `r2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadraticCoefficients {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub r1: i64,
    pub r2: i64,
}

impl QuadraticCoefficients {
    /// Expand `a·(x - r1)(x - r2)`, failing if a coefficient leaves the `i64` range.
    pub fn from_roots(a: i64, r1: i64, r2: i64) -> Result<Self, WorksheetError> {
        let b = r1
            .checked_add(r2)
            .and_then(|s| s.checked_mul(a))
            .and_then(i64::checked_neg);
        let c = a.checked_mul(r1).and_then(|p| p.checked_mul(r2));
        match (b, c) {
            (Some(b), Some(c)) => Ok(QuadraticCoefficients { a, b, c, r1, r2 }),
            _ => Err(WorksheetError::overflow(format!("{a}·(x - {r1})(x - {r2})"))),
        }
    }

    /// `a·x² + b·x + c`, or `None` on overflow.
    pub fn evaluate(&self, x: i64) -> Option<i64> {
        let ax2 = self.a.checked_mul(x)?.checked_mul(x)?;
        ax2.checked_add(self.b.checked_mul(x)?)?.checked_add(self.c)
    }

    /// `b² - 4ac`, or `None` on overflow.
    pub fn discriminant(&self) -> Option<i64> {
        let four_ac = self.a.checked_mul(self.c)?.checked_mul(4)?;
        self.b.checked_mul(self.b)?.checked_sub(four_ac)
    }

    pub fn equation_text(&self) -> String {
        quadratic_equation_text(self.a, self.b, self.c)
    }
}

/// One exercise, tagged by its operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    Addition(Operands),
    Subtraction(Operands),
    Multiplication(Operands),
    Division(Operands),
    LinearEquation(LinearCoefficients),
    QuadraticEquation(QuadraticCoefficients),
}

impl Problem {
    pub fn arithmetic(op: ArithmeticOp, top: u64, bottom: u64) -> Self {
        let operands = Operands { top, bottom };
        match op {
            ArithmeticOp::Addition       => Problem::Addition(operands),
            ArithmeticOp::Subtraction    => Problem::Subtraction(operands),
            ArithmeticOp::Multiplication => Problem::Multiplication(operands),
            ArithmeticOp::Division       => Problem::Division(operands),
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Problem::Addition(_)          => OperationKind::Addition,
            Problem::Subtraction(_)       => OperationKind::Subtraction,
            Problem::Multiplication(_)    => OperationKind::Multiplication,
            Problem::Division(_)          => OperationKind::Division,
            Problem::LinearEquation(_)    => OperationKind::LinearEquation,
            Problem::QuadraticEquation(_) => OperationKind::QuadraticEquation,
        }
    }

    /// The arithmetic operation and its operands, for the four column kinds.
    pub fn as_arithmetic(&self) -> Option<(ArithmeticOp, Operands)> {
        match *self {
            Problem::Addition(o)       => Some((ArithmeticOp::Addition, o)),
            Problem::Subtraction(o)    => Some((ArithmeticOp::Subtraction, o)),
            Problem::Multiplication(o) => Some((ArithmeticOp::Multiplication, o)),
            Problem::Division(o)       => Some((ArithmeticOp::Division, o)),
            Problem::LinearEquation(_) | Problem::QuadraticEquation(_) => None,
        }
    }

    /// Canonical infix text, only for equation kinds.
    pub fn equation_text(&self) -> Option<String> {
        match self {
            Problem::LinearEquation(co)    => Some(co.equation_text()),
            Problem::QuadraticEquation(co) => Some(co.equation_text()),
            _ => None,
        }
    }

    /// Compute the answer, rejecting problems no worksheet could contain.
    pub fn solve(&self) -> Result<Solution, WorksheetError> {
        match *self {
            Problem::Addition(o) => o
                .top
                .checked_add(o.bottom)
                .map(Solution::Number)
                .ok_or_else(|| WorksheetError::overflow(format!("{} + {}", o.top, o.bottom))),
            Problem::Subtraction(o) => o
                .top
                .checked_sub(o.bottom)
                .map(Solution::Number)
                .ok_or_else(|| WorksheetError::InvalidConfiguration(format!(
                    "subtraction {} - {} would be negative", o.top, o.bottom
                ))),
            Problem::Multiplication(o) => o
                .top
                .checked_mul(o.bottom)
                .map(Solution::Number)
                .ok_or_else(|| WorksheetError::overflow(format!("{} × {}", o.top, o.bottom))),
            Problem::Division(o) => {
                if o.bottom == 0 {
                    return Err(WorksheetError::InvalidConfiguration(format!(
                        "division {} ÷ 0 has a zero divisor", o.top
                    )));
                }
                let (quotient, remainder) = (o.top / o.bottom, o.top % o.bottom);
                Ok(if remainder == 0 {
                    Solution::Number(quotient)
                } else {
                    Solution::Remainder { quotient, remainder }
                })
            }
            Problem::LinearEquation(co) => {
                if co.a == 0 {
                    return Err(WorksheetError::InvalidConfiguration(
                        "linear equation has a zero coefficient on x".to_string(),
                    ));
                }
                let right = co
                    .c
                    .checked_sub(co.b)
                    .ok_or_else(|| WorksheetError::overflow(format!("{} - ({})", co.c, co.b)))?;
                Ok(Solution::Root(right as f64 / co.a as f64))
            }
            Problem::QuadraticEquation(co) => {
                if co.a == 0 {
                    return Err(WorksheetError::InvalidConfiguration(
                        "quadratic equation has a zero coefficient on x²".to_string(),
                    ));
                }
                let at = |x: i64| {
                    co.evaluate(x)
                        .ok_or_else(|| WorksheetError::overflow(format!("{} at x = {x}", co.equation_text())))
                };
                if at(co.r1)? != 0 || at(co.r2)? != 0 {
                    return Err(WorksheetError::InvalidConfiguration(format!(
                        "{} does not vanish at x = {} and x = {}",
                        co.equation_text(), co.r1, co.r2
                    )));
                }
                Ok(if co.r1 == co.r2 {
                    Solution::DoubleRoot(co.r1)
                } else {
                    Solution::TwoRoots(co.r1.min(co.r2), co.r1.max(co.r2))
                })
            }
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::LinearEquation(co)    => write!(f, "{}", co.equation_text()),
            Problem::QuadraticEquation(co) => write!(f, "{}", co.equation_text()),
            Problem::Addition(o) | Problem::Subtraction(o)
            | Problem::Multiplication(o) | Problem::Division(o) => {
                write!(f, "{} {} {}", o.top, self.kind().symbol(), o.bottom)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Solutions and exercises
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Solution {
    /// Sum, difference, product, or exact quotient.
    Number(u64),
    /// Quotient of a division that does not come out even.
    Remainder { quotient: u64, remainder: u64 },
    /// Root of a linear equation; not necessarily an integer.
    Root(f64),
    DoubleRoot(i64),
    /// Two distinct roots, smaller first.
    TwoRoots(i64, i64),
}

impl Solution {
    /// Real roots of an equation solution, ascending. Empty for arithmetic answers.
    pub fn roots(&self) -> Vec<f64> {
        match *self {
            Solution::Root(x)          => vec![x],
            Solution::DoubleRoot(x)    => vec![x as f64],
            Solution::TwoRoots(lo, hi) => vec![lo as f64, hi as f64],
            Solution::Number(_) | Solution::Remainder { .. } => Vec::new(),
        }
    }
}

/// Answer text shown when answers are revealed.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Number(n) => write!(f, "= {n}"),
            Solution::Remainder { quotient, remainder } => {
                write!(f, "= {quotient} con residuo {remainder}")
            }
            Solution::Root(x)          => write!(f, "x = {}", format_real(*x)),
            Solution::DoubleRoot(x)    => write!(f, "x = {x} (raíz doble)"),
            Solution::TwoRoots(lo, hi) => write!(f, "x₁ = {lo}, x₂ = {hi}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Position in the batch; the only identity-bearing field.
    pub id: usize,
    pub problem: Problem,
    pub result: Solution,
}

impl Exercise {
    pub fn new(id: usize, problem: Problem) -> Result<Self, WorksheetError> {
        let result = problem.solve()?;
        Ok(Exercise { id, problem, result })
    }

    pub fn kind(&self) -> OperationKind {
        self.problem.kind()
    }

    pub fn symbol(&self) -> &'static str {
        self.kind().symbol()
    }

    pub fn equation_text(&self) -> Option<String> {
        self.problem.equation_text()
    }

    /// Hand-method trace for this exercise; recomputed on every call.
    pub fn explanation(&self) -> Result<Vec<String>, WorksheetError> {
        steps::explain(&self.problem)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.problem)
    }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetConfig {
    pub digits_top: u32,
    pub digits_bottom: u32,
    pub operation: OperationSelector,
}

impl Default for WorksheetConfig {
    fn default() -> Self {
        WorksheetConfig {
            digits_top: 2,
            digits_bottom: 2,
            operation: OperationSelector::Single(OperationKind::Addition),
        }
    }
}

impl WorksheetConfig {
    pub fn validate(&self) -> Result<(), WorksheetError> {
        for (field, digits) in [("digits_top", self.digits_top), ("digits_bottom", self.digits_bottom)] {
            if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
                return Err(WorksheetError::InvalidConfiguration(format!(
                    "{field} must be between {MIN_DIGITS} and {MAX_DIGITS}, got {digits}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetRequest {
    pub count: usize,
    pub config: WorksheetConfig,
    pub rng_seed: Option<u64>,
}

impl WorksheetRequest {
    /// Twelve two-by-two-digit exercises from entropy; only the operation is chosen.
    pub fn new(operation: impl Into<OperationSelector>) -> Self {
        WorksheetRequest {
            count: 12,
            config: WorksheetConfig { operation: operation.into(), ..WorksheetConfig::default() },
            rng_seed: None,
        }
    }

    pub fn validate(&self) -> Result<(), WorksheetError> {
        validate_count(self.count)?;
        self.config.validate()
    }
}

pub(crate) fn validate_count(count: usize) -> Result<(), WorksheetError> {
    if count == 0 || count > MAX_EXERCISES {
        return Err(WorksheetError::InvalidConfiguration(format!(
            "count must be between 1 and {MAX_EXERCISES}, got {count}"
        )));
    }
    Ok(())
}
