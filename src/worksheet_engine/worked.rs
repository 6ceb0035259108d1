//! Worked-example selection.
//!
//! The first exercise of each operation kind in a batch is shown with its full
//! explanation.  Flags are computed in one forward pass with a set of kinds
//! already seen.

use std::collections::HashSet;

use crate::worksheet_engine::{
    error::WorksheetError,
    models::{Exercise, OperationKind},
};

/// `flags[i]` is true iff `exercises[i]` is the first of its kind.
pub fn worked_example_flags(exercises: &[Exercise]) -> Vec<bool> {
    let mut seen: HashSet<OperationKind> = HashSet::with_capacity(OperationKind::ALL.len());
    exercises.iter().map(|ex| seen.insert(ex.kind())).collect()
}

/// The worked examples of a batch, in batch order.
pub fn worked_examples(exercises: &[Exercise]) -> impl Iterator<Item = &Exercise> {
    exercises
        .iter()
        .zip(worked_example_flags(exercises))
        .filter_map(|(ex, worked)| worked.then_some(ex))
}

/// Explanations for the worked examples only, keyed by exercise id.
pub fn explain_worked_examples(
    exercises: &[Exercise],
) -> Result<Vec<(usize, Vec<String>)>, WorksheetError> {
    worked_examples(exercises)
        .map(|ex| Ok((ex.id, ex.explanation()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worksheet_engine::models::{ArithmeticOp, LinearCoefficients, Problem};

    fn batch() -> Vec<Exercise> {
        let problems = [
            Problem::arithmetic(ArithmeticOp::Addition, 12, 34),
            Problem::arithmetic(ArithmeticOp::Subtraction, 50, 8),
            Problem::arithmetic(ArithmeticOp::Addition, 7, 9),
            Problem::LinearEquation(LinearCoefficients { a: 2, b: 1, c: 7 }),
            Problem::arithmetic(ArithmeticOp::Subtraction, 90, 1),
        ];
        problems
            .into_iter()
            .enumerate()
            .map(|(id, p)| Exercise::new(id, p).unwrap())
            .collect()
    }

    #[test]
    fn flags_first_occurrence_of_each_kind() {
        assert_eq!(worked_example_flags(&batch()), vec![true, true, false, true, false]);
    }

    #[test]
    fn explains_only_worked_examples() {
        let b = batch();
        let explained = explain_worked_examples(&b).unwrap();
        let ids: Vec<usize> = explained.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![0, 1, 3]);
        assert_eq!(explained[0].1.last().unwrap(), "Resultado: 12 + 34 = 46");
    }

    #[test]
    fn empty_batch_has_no_flags() {
        assert!(worked_example_flags(&[]).is_empty());
    }
}
