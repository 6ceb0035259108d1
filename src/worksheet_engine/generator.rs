use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, warn};

use crate::worksheet_engine::{
    error::WorksheetError,
    helpers::{random_sign, random_with_digits},
    models::{
        validate_count, ArithmeticOp, Exercise, LinearCoefficients, OperationKind,
        OperationSelector, Operands, Problem, QuadraticCoefficients, WorksheetConfig,
        WorksheetRequest,
    },
};

/// Resolve `Mixed` to one of the four arithmetic kinds.
fn resolve_operation<R: Rng>(rng: &mut R, selector: OperationSelector) -> OperationKind {
    match selector {
        OperationSelector::Single(kind) => kind,
        OperationSelector::Mixed => {
            let pool = ArithmeticOp::MIXED_POOL;
            pool[rng.gen_range(0..pool.len())].into()
        }
    }
}

fn draw_operands<R: Rng>(rng: &mut R, config: &WorksheetConfig) -> Operands {
    Operands {
        top: random_with_digits(rng, config.digits_top),
        bottom: random_with_digits(rng, config.digits_bottom),
    }
}

/// `a` in ±[2,9], root in [-10,10], `b` in [-20,20]; `c` follows.
fn random_linear<R: Rng>(rng: &mut R) -> LinearCoefficients {
    let a = rng.gen_range(2..=9i64) * random_sign(rng, 0.5);
    let x = rng.gen_range(-10..=10i64);
    let b = rng.gen_range(-20..=20i64);
    LinearCoefficients { a, b, c: a * x + b }
}

/// Integer roots in [-8,8], leading coefficient in [1,3], negative ~30% of the time.
fn random_quadratic<R: Rng>(rng: &mut R) -> Result<QuadraticCoefficients, WorksheetError> {
    let r1 = rng.gen_range(-8..=8i64);
    let r2 = rng.gen_range(-8..=8i64);
    let a = rng.gen_range(1..=3i64) * random_sign(rng, 0.3);
    QuadraticCoefficients::from_roots(a, r1, r2)
}

fn generate_problem<R: Rng>(rng: &mut R, config: &WorksheetConfig) -> Result<Problem, WorksheetError> {
    let problem = match resolve_operation(rng, config.operation) {
        OperationKind::Addition => Problem::Addition(draw_operands(rng, config)),

        OperationKind::Subtraction => {
            let mut o = draw_operands(rng, config);
            if o.bottom > o.top {
                std::mem::swap(&mut o.top, &mut o.bottom);
            }
            Problem::Subtraction(o)
        }

        OperationKind::Multiplication => Problem::Multiplication(draw_operands(rng, config)),

        // The dividend is a product, so it may be wider than `digits_top`.
        OperationKind::Division => {
            let divisor = random_with_digits(rng, config.digits_bottom);
            let quotient = random_with_digits(rng, config.digits_top);
            Problem::Division(Operands { top: divisor * quotient, bottom: divisor })
        }

        OperationKind::LinearEquation => Problem::LinearEquation(random_linear(rng)),

        OperationKind::QuadraticEquation => Problem::QuadraticEquation(random_quadratic(rng)?),
    };
    Ok(problem)
}

/// Generate `count` exercises from an explicit random source.
///
/// Ids are `0..count` in order.  Every draw is bounded, so for a valid
/// configuration this never fails.
pub fn generate<R: Rng>(
    rng: &mut R,
    count: usize,
    config: &WorksheetConfig,
) -> Result<Vec<Exercise>, WorksheetError> {
    validate_count(count)?;
    config.validate()?;

    (0..count)
        .map(|id| Exercise::new(id, generate_problem(rng, config)?))
        .collect()
}

/// Entry point: seeds the RNG from the request (or entropy) and builds the batch.
pub fn generate_worksheet(request: &WorksheetRequest) -> Result<Vec<Exercise>, WorksheetError> {
    if let Err(err) = request.validate() {
        warn!(%err, count = request.count, "rejected worksheet request");
        return Err(err);
    }

    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let exercises = generate(&mut rng, request.count, &request.config)?;
    debug!(
        count = exercises.len(),
        digits_top = request.config.digits_top,
        digits_bottom = request.config.digits_bottom,
        operation = %request.config.operation,
        seeded = request.rng_seed.is_some(),
        "generated worksheet"
    );
    Ok(exercises)
}
