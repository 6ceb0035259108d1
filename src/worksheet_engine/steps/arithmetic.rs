//! Column-by-column traces of the four written algorithms.
//!
//! Every trace mirrors the way the operation is done on paper: addition and
//! subtraction walk the aligned columns from units leftwards, multiplication
//! builds one place-shifted partial product per digit of the bottom operand,
//! and division brings dividend digits down one at a time.

use crate::worksheet_engine::{
    error::WorksheetError,
    helpers::{aligned_digits, capitalize, digits, digits_to_number, place_name},
    models::ArithmeticOp,
};

/// Step-by-step trace for one of the four arithmetic operations.
pub fn explain_arithmetic(
    top: u64,
    bottom: u64,
    op: ArithmeticOp,
) -> Result<Vec<String>, WorksheetError> {
    match op {
        ArithmeticOp::Addition       => explain_addition(top, bottom),
        ArithmeticOp::Subtraction    => explain_subtraction(top, bottom),
        ArithmeticOp::Multiplication => explain_multiplication(top, bottom),
        ArithmeticOp::Division       => explain_division(top, bottom),
    }
}

fn column_label(col: usize) -> String {
    capitalize(&place_name(col))
}

fn explain_addition(top: u64, bottom: u64) -> Result<Vec<String>, WorksheetError> {
    let total = top
        .checked_add(bottom)
        .ok_or_else(|| WorksheetError::overflow(format!("{top} + {bottom}")))?;
    let (top_digits, bottom_digits) = aligned_digits(top, bottom);
    let width = top_digits.len();
    let mut steps = Vec::with_capacity(width + 2);
    let mut sum_digits = Vec::with_capacity(width + 1);
    let mut carry = 0u8;

    for col in 0..width {
        let i = width - 1 - col;
        let (dt, db) = (top_digits[i], bottom_digits[i]);
        let sum = dt + db + carry;
        let digit = sum % 10;
        let new_carry = sum / 10;
        sum_digits.push(digit);

        let mut line = format!("{}: {dt} + {db}", column_label(col));
        if carry > 0 {
            line.push_str(&format!(" + {carry} (acarreo)"));
        }
        line.push_str(&format!(" = {sum}"));
        if new_carry > 0 {
            line.push_str(&format!(" → escribimos {digit}, llevamos {new_carry}"));
        }
        steps.push(line);
        carry = new_carry;
    }

    if carry > 0 {
        sum_digits.push(carry);
        steps.push(format!("Acarreo final: {carry}"));
    }

    sum_digits.reverse();
    debug_assert_eq!(digits_to_number(&sum_digits), Some(total));
    steps.push(format!("Resultado: {top} + {bottom} = {total}"));
    Ok(steps)
}

fn explain_subtraction(top: u64, bottom: u64) -> Result<Vec<String>, WorksheetError> {
    if bottom > top {
        return Err(WorksheetError::InvalidConfiguration(format!(
            "subtraction {top} - {bottom} would be negative"
        )));
    }

    let (top_digits, bottom_digits) = aligned_digits(top, bottom);
    let width = top_digits.len();
    let mut steps = Vec::with_capacity(width + 1);
    let mut diff_digits = Vec::with_capacity(width);
    let mut borrow = 0i8;

    for col in 0..width {
        let i = width - 1 - col;
        let raw = top_digits[i] as i8;
        let db = bottom_digits[i] as i8;
        let dt = raw - borrow;

        let mut line = format!("{}: ", column_label(col));
        if borrow > 0 {
            line.push_str(&format!("{raw} - 1 (préstamo) = {dt}; "));
        }
        let digit = if dt < db {
            let lent = dt + 10;
            line.push_str(&format!("{dt} < {db}, pedimos 10 → {lent} - {db} = {}", lent - db));
            borrow = 1;
            lent - db
        } else {
            line.push_str(&format!("{dt} - {db} = {}", dt - db));
            borrow = 0;
            dt - db
        };
        diff_digits.push(digit as u8);
        steps.push(line);
    }

    diff_digits.reverse();
    let leading_zeros = diff_digits.iter().take_while(|&&d| d == 0).count();
    let kept = &diff_digits[leading_zeros.min(diff_digits.len() - 1)..];

    let difference = digits_to_number(kept)
        .ok_or_else(|| WorksheetError::overflow(format!("{top} - {bottom}")))?;
    steps.push(format!("Resultado: {top} - {bottom} = {difference}"));
    Ok(steps)
}

fn explain_multiplication(top: u64, bottom: u64) -> Result<Vec<String>, WorksheetError> {
    // Every partial product and their running sum stay below the full product.
    let product = top
        .checked_mul(bottom)
        .ok_or_else(|| WorksheetError::overflow(format!("{top} × {bottom}")))?;
    let top_digits = digits(top);
    let bottom_digits = digits(bottom);
    let mut steps = vec![format!("Multiplicamos {top} × {bottom}")];
    let mut partials = Vec::with_capacity(bottom_digits.len());

    for (position, &db) in bottom_digits.iter().rev().enumerate() {
        steps.push(format!("Multiplicamos por {db} ({}):", place_name(position)));

        // Least significant first; the leading zeros realise the place shift.
        let mut partial_digits = vec![0u8; position];
        let mut carry = 0u8;

        for &dt in top_digits.iter().rev() {
            let product = dt * db + carry;
            let digit = product % 10;
            let new_carry = product / 10;
            partial_digits.push(digit);

            let mut line = format!("  {dt} × {db}");
            if carry > 0 {
                line.push_str(&format!(" + {carry} (acarreo)"));
            }
            line.push_str(&format!(" = {product}"));
            if new_carry > 0 {
                line.push_str(&format!(" → escribimos {digit}, llevamos {new_carry}"));
            }
            steps.push(line);
            carry = new_carry;
        }

        if carry > 0 {
            partial_digits.push(carry);
        }
        partial_digits.reverse();
        let partial = digits_to_number(&partial_digits)
            .ok_or_else(|| WorksheetError::overflow(format!("{top} × {db}")))?;
        steps.push(format!("  Producto parcial: {partial}"));
        partials.push(partial);
    }

    if partials.len() > 1 {
        steps.push("Sumamos los productos parciales:".to_string());
        let last = partials.len() - 1;
        for (idx, p) in partials.iter().enumerate() {
            if idx < last {
                steps.push(format!("  {p} +"));
            } else {
                steps.push(format!("  {p}"));
            }
        }
        steps.push(format!("  = {product}"));
    }

    steps.push(format!("Resultado: {top} × {bottom} = {product}"));
    Ok(steps)
}

fn explain_division(dividend: u64, divisor: u64) -> Result<Vec<String>, WorksheetError> {
    if divisor == 0 {
        return Err(WorksheetError::InvalidConfiguration(format!(
            "division {dividend} ÷ 0 has a zero divisor"
        )));
    }

    let mut steps = vec![format!("Dividimos {dividend} ÷ {divisor}")];
    let mut remainder = 0u64;
    let mut quotient = 0u64;

    for (i, d) in digits(dividend).into_iter().enumerate() {
        remainder = remainder * 10 + d as u64;
        if i == 0 {
            steps.push(format!("Tomamos el primer dígito: {d}"));
        } else {
            steps.push(format!("Bajamos el {d}, tenemos: {remainder}"));
        }

        let times = remainder / divisor;
        quotient = quotient * 10 + times;

        if remainder < divisor {
            steps.push(format!("{remainder} < {divisor}, escribimos 0 en el cociente"));
        } else {
            let product = times * divisor;
            let left = remainder - product;
            let veces = if times == 1 { "vez" } else { "veces" };
            steps.push(format!(
                "{divisor} cabe {times} {veces} en {remainder} ({times} × {divisor} = {product})"
            ));
            steps.push(format!("{remainder} - {product} = {left}"));
            remainder = left;
        }
    }

    if remainder == 0 {
        steps.push(format!("Resultado: {dividend} ÷ {divisor} = {quotient} (división exacta)"));
    } else {
        steps.push(format!(
            "Resultado: {dividend} ÷ {divisor} = {quotient} con residuo {remainder}"
        ));
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(top: u64, bottom: u64, op: ArithmeticOp) -> Vec<String> {
        explain_arithmetic(top, bottom, op).expect("valid arithmetic problem")
    }

    #[test]
    fn addition_with_final_carry() {
        let s = steps(99, 99, ArithmeticOp::Addition);
        assert_eq!(
            s,
            vec![
                "Unidades: 9 + 9 = 18 → escribimos 8, llevamos 1",
                "Decenas: 9 + 9 + 1 (acarreo) = 19 → escribimos 9, llevamos 1",
                "Acarreo final: 1",
                "Resultado: 99 + 99 = 198",
            ]
        );
    }

    #[test]
    fn addition_aligns_unequal_widths() {
        let s = steps(1205, 7, ArithmeticOp::Addition);
        assert_eq!(s[0], "Unidades: 5 + 7 = 12 → escribimos 2, llevamos 1");
        assert_eq!(s[1], "Decenas: 0 + 0 + 1 (acarreo) = 1");
        assert_eq!(s[3], "Millares: 1 + 0 = 1");
        assert_eq!(s.last().unwrap(), "Resultado: 1205 + 7 = 1212");
    }

    #[test]
    fn addition_summary_matches_sum_for_every_width() {
        for dt in 1..=6u32 {
            for db in 1..=6u32 {
                let top = 10u64.pow(dt) - 1;
                let bottom = 10u64.pow(db - 1) + 7;
                let s = steps(top, bottom, ArithmeticOp::Addition);
                assert_eq!(
                    s.last().unwrap(),
                    &format!("Resultado: {top} + {bottom} = {}", top + bottom)
                );
            }
        }
    }

    #[test]
    fn subtraction_borrows_through_zeros() {
        let s = steps(100, 1, ArithmeticOp::Subtraction);
        assert_eq!(
            s,
            vec![
                "Unidades: 0 < 1, pedimos 10 → 10 - 1 = 9",
                "Decenas: 0 - 1 (préstamo) = -1; -1 < 0, pedimos 10 → 9 - 0 = 9",
                "Centenas: 1 - 1 (préstamo) = 0; 0 - 0 = 0",
                "Resultado: 100 - 1 = 99",
            ]
        );
    }

    #[test]
    fn subtraction_to_zero_keeps_one_digit() {
        let s = steps(555, 555, ArithmeticOp::Subtraction);
        assert_eq!(s.last().unwrap(), "Resultado: 555 - 555 = 0");
    }

    #[test]
    fn operations_past_u64_are_rejected() {
        for (top, bottom, op) in [
            (u64::MAX / 2, 3, ArithmeticOp::Multiplication),
            (u64::MAX, u64::MAX, ArithmeticOp::Multiplication),
            (u64::MAX, 1, ArithmeticOp::Addition),
        ] {
            assert!(
                matches!(explain_arithmetic(top, bottom, op), Err(WorksheetError::InvalidConfiguration(_))),
                "{top} {op:?} {bottom}"
            );
        }
    }

    #[test]
    fn widest_u64_operands_still_explain() {
        let s = steps(u64::MAX - 1, 1, ArithmeticOp::Addition);
        assert_eq!(s.last().unwrap(), &format!("Resultado: {} + 1 = {}", u64::MAX - 1, u64::MAX));
        let s = steps(u64::MAX, u64::MAX, ArithmeticOp::Subtraction);
        assert_eq!(s.last().unwrap(), &format!("Resultado: {0} - {0} = 0", u64::MAX));
        let s = steps(u64::MAX / 2, 2, ArithmeticOp::Multiplication);
        assert_eq!(s.last().unwrap(), &format!("Resultado: {} × 2 = {}", u64::MAX / 2, u64::MAX - 1));
        let s = steps(u64::MAX, 7, ArithmeticOp::Division);
        assert!(s.last().unwrap().starts_with(&format!("Resultado: {} ÷ 7 = {}", u64::MAX, u64::MAX / 7)));
    }

    #[test]
    fn subtraction_rejects_negative_result() {
        assert!(matches!(
            explain_arithmetic(3, 40, ArithmeticOp::Subtraction),
            Err(WorksheetError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn multiplication_partial_products_sum_to_product() {
        let s = steps(123, 45, ArithmeticOp::Multiplication);
        assert!(s.contains(&"  Producto parcial: 615".to_string()));
        assert!(s.contains(&"  Producto parcial: 4920".to_string()));
        assert!(s.contains(&"Sumamos los productos parciales:".to_string()));
        assert!(s.contains(&"  = 5535".to_string()));
        assert_eq!(s.last().unwrap(), "Resultado: 123 × 45 = 5535");
    }

    #[test]
    fn multiplication_reports_carry_from_product() {
        let s = steps(123, 45, ArithmeticOp::Multiplication);
        assert_eq!(s[1], "Multiplicamos por 5 (unidades):");
        assert_eq!(s[2], "  3 × 5 = 15 → escribimos 5, llevamos 1");
        assert_eq!(s[3], "  2 × 5 + 1 (acarreo) = 11 → escribimos 1, llevamos 1");
        assert_eq!(s[4], "  1 × 5 + 1 (acarreo) = 6");
        assert_eq!(s[6], "Multiplicamos por 4 (decenas):");
    }

    #[test]
    fn single_digit_multiplication_has_no_sum_block() {
        let s = steps(7, 8, ArithmeticOp::Multiplication);
        assert!(!s.iter().any(|l| l.starts_with("Sumamos")));
        assert_eq!(s.last().unwrap(), "Resultado: 7 × 8 = 56");
    }

    #[test]
    fn division_reports_remainder() {
        let s = steps(17, 5, ArithmeticOp::Division);
        assert_eq!(
            s,
            vec![
                "Dividimos 17 ÷ 5",
                "Tomamos el primer dígito: 1",
                "1 < 5, escribimos 0 en el cociente",
                "Bajamos el 7, tenemos: 17",
                "5 cabe 3 veces en 17 (3 × 5 = 15)",
                "17 - 15 = 2",
                "Resultado: 17 ÷ 5 = 3 con residuo 2",
            ]
        );
    }

    #[test]
    fn exact_division_is_labelled() {
        let s = steps(144, 12, ArithmeticOp::Division);
        assert!(s.contains(&"12 cabe 1 vez en 14 (1 × 12 = 12)".to_string()));
        assert_eq!(s.last().unwrap(), "Resultado: 144 ÷ 12 = 12 (división exacta)");
    }

    #[test]
    fn division_by_zero_is_rejected() {
        assert!(explain_arithmetic(10, 0, ArithmeticOp::Division).is_err());
    }
}
