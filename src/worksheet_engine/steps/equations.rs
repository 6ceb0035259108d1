use crate::worksheet_engine::{
    error::WorksheetError,
    helpers::{format_real, leading_term, paren},
    models::{LinearCoefficients, QuadraticCoefficients},
};

/// Two-step isolation of `x` in `ax + b = c`.
pub fn explain_linear(co: &LinearCoefficients) -> Result<Vec<String>, WorksheetError> {
    let LinearCoefficients { a, b, c } = *co;
    if a == 0 {
        return Err(WorksheetError::InvalidConfiguration(
            "linear equation has a zero coefficient on x".to_string(),
        ));
    }

    let x_term = leading_term(a, "x");
    let right = c
        .checked_sub(b)
        .ok_or_else(|| WorksheetError::overflow(format!("{c} - ({b})")))?;
    let mut steps = vec![
        "**Paso 1: Agrupar las constantes en el lado derecho**".to_string(),
        "Ecuación original:".to_string(),
        format!("    {}", co.equation_text()),
    ];

    if b != 0 {
        let magnitude = b.unsigned_abs();
        if b > 0 {
            steps.push(format!("Restamos {magnitude} en ambos lados:"));
            steps.push(format!("    {x_term} + {magnitude} - {magnitude} = {c} - {magnitude}"));
        } else {
            steps.push(format!("Sumamos {magnitude} en ambos lados:"));
            steps.push(format!("    {x_term} - {magnitude} + {magnitude} = {c} + {magnitude}"));
        }
        steps.push("Simplificamos:".to_string());
        steps.push(format!("    {x_term} = {right}"));
    }

    steps.push("**Paso 2: Aislar la x**".to_string());
    let x = right as f64 / a as f64;
    match a {
        1 => {
            steps.push("La x ya está aislada:".to_string());
            steps.push(format!("    x = {right}"));
        }
        -1 => {
            let negated = right
                .checked_neg()
                .ok_or_else(|| WorksheetError::overflow(format!("-({right})")))?;
            steps.push("Tenemos -x, multiplicamos ambos lados por -1:".to_string());
            steps.push(format!("    -x = {right}"));
            steps.push(format!("    x = {negated}"));
        }
        _ => {
            steps.push(format!("Dividimos ambos lados entre {}:", paren(a)));
            steps.push(format!("    {a}x ÷ {} = {right} ÷ {}", paren(a), paren(a)));
            steps.push(format!("    x = {}", format_real(x)));
        }
    }

    steps.push(format!("**✓ Solución: x = {}**", format_real(x)));
    Ok(steps)
}

/// General-formula solution of `ax² + bx + c = 0`.
///
/// A negative discriminant cannot come out of the generator, but hand-built
/// coefficients get a "no real roots" ending instead of a panic.
pub fn explain_quadratic(co: &QuadraticCoefficients) -> Result<Vec<String>, WorksheetError> {
    let QuadraticCoefficients { a, b, c, .. } = *co;
    if a == 0 {
        return Err(WorksheetError::InvalidConfiguration(
            "quadratic equation has a zero coefficient on x²".to_string(),
        ));
    }

    let overflow = || WorksheetError::overflow(co.equation_text());
    let discriminant = co.discriminant().ok_or_else(overflow)?;
    let two_a = a.checked_mul(2).ok_or_else(overflow)?;
    let neg_b = b.checked_neg().ok_or_else(overflow)?;
    let mut steps = vec![
        format!("**Ecuación:** {}", co.equation_text()),
        "**Método: Fórmula General**".to_string(),
        format!("a = {a}, b = {b}, c = {c}"),
        "x = (-b ± √(b² - 4ac)) / 2a".to_string(),
        format!(
            "Discriminante: b² - 4ac = {}² - 4({a})({c}) = {discriminant}",
            paren(b)
        ),
    ];

    if discriminant > 0 {
        let sqrt_d = (discriminant as f64).sqrt();
        let s = format_real(sqrt_d);
        let x1 = (neg_b as f64 + sqrt_d) / two_a as f64;
        let x2 = (neg_b as f64 - sqrt_d) / two_a as f64;
        steps.push(format!("√{discriminant} = {s}"));
        steps.push(format!("x = ({neg_b} ± {s}) / {two_a}"));
        steps.push(format!("x₁ = ({neg_b} + {s}) / {two_a} = {}", format_real(x1)));
        steps.push(format!("x₂ = ({neg_b} - {s}) / {two_a} = {}", format_real(x2)));
        steps.push(format!(
            "✓ Resultado: x₁ = {}, x₂ = {}",
            format_real(x1.min(x2)),
            format_real(x1.max(x2))
        ));
    } else if discriminant == 0 {
        let x = neg_b as f64 / two_a as f64;
        steps.push("Discriminante = 0 → raíz doble".to_string());
        steps.push(format!("x = {neg_b} / {two_a} = {}", format_real(x)));
        steps.push(format!("✓ Resultado: x = {} (raíz doble)", format_real(x)));
    } else {
        steps.push("Discriminante < 0 → no hay raíces reales".to_string());
        steps.push("✓ Resultado: sin solución real".to_string());
    }

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_moves_positive_constant_then_divides() {
        let s = explain_linear(&LinearCoefficients { a: 3, b: 5, c: 11 }).unwrap();
        assert_eq!(
            s,
            vec![
                "**Paso 1: Agrupar las constantes en el lado derecho**",
                "Ecuación original:",
                "    3x + 5 = 11",
                "Restamos 5 en ambos lados:",
                "    3x + 5 - 5 = 11 - 5",
                "Simplificamos:",
                "    3x = 6",
                "**Paso 2: Aislar la x**",
                "Dividimos ambos lados entre 3:",
                "    3x ÷ 3 = 6 ÷ 3",
                "    x = 2",
                "**✓ Solución: x = 2**",
            ]
        );
    }

    #[test]
    fn linear_adds_negative_constant() {
        let s = explain_linear(&LinearCoefficients { a: -4, b: -7, c: 9 }).unwrap();
        assert!(s.contains(&"Sumamos 7 en ambos lados:".to_string()));
        assert!(s.contains(&"    -4x - 7 + 7 = 9 + 7".to_string()));
        assert!(s.contains(&"    -4x ÷ (-4) = 16 ÷ (-4)".to_string()));
        assert_eq!(s.last().unwrap(), "**✓ Solución: x = -4**");
    }

    #[test]
    fn linear_skips_move_step_without_constant() {
        let s = explain_linear(&LinearCoefficients { a: 1, b: 0, c: 7 }).unwrap();
        assert!(!s.iter().any(|l| l.starts_with("Restamos") || l.starts_with("Sumamos")));
        assert!(s.contains(&"La x ya está aislada:".to_string()));
        assert_eq!(s.last().unwrap(), "**✓ Solución: x = 7**");
    }

    #[test]
    fn linear_negates_for_minus_x() {
        let s = explain_linear(&LinearCoefficients { a: -1, b: 2, c: 5 }).unwrap();
        assert!(s.contains(&"Tenemos -x, multiplicamos ambos lados por -1:".to_string()));
        assert!(s.contains(&"    x = -3".to_string()));
        assert_eq!(s.last().unwrap(), "**✓ Solución: x = -3**");
    }

    #[test]
    fn linear_keeps_non_integer_quotient() {
        let s = explain_linear(&LinearCoefficients { a: 2, b: 0, c: 5 }).unwrap();
        assert_eq!(s.last().unwrap(), "**✓ Solución: x = 2.5**");
    }

    #[test]
    fn linear_rejects_zero_coefficient() {
        assert!(explain_linear(&LinearCoefficients { a: 0, b: 1, c: 1 }).is_err());
    }

    #[test]
    fn linear_terms_past_i64_are_rejected() {
        let wide = LinearCoefficients { a: 3, b: -1, c: i64::MAX };
        assert!(matches!(explain_linear(&wide), Err(WorksheetError::InvalidConfiguration(_))));
        let unnegatable = LinearCoefficients { a: -1, b: 0, c: i64::MIN };
        assert!(matches!(explain_linear(&unnegatable), Err(WorksheetError::InvalidConfiguration(_))));
    }

    #[test]
    fn quadratic_terms_past_i64_are_rejected() {
        assert!(QuadraticCoefficients::from_roots(1, i64::MAX, 1).is_err());
        assert!(QuadraticCoefficients::from_roots(2, 1 << 32, 1 << 32).is_err());
        for co in [
            QuadraticCoefficients { a: 1, b: i64::MIN, c: 0, r1: 0, r2: 0 },
            QuadraticCoefficients { a: i64::MAX, b: 0, c: -1, r1: 0, r2: 0 },
            QuadraticCoefficients { a: i64::MIN, b: 0, c: 0, r1: 0, r2: 0 },
        ] {
            assert!(
                matches!(explain_quadratic(&co), Err(WorksheetError::InvalidConfiguration(_))),
                "{co:?}"
            );
        }
    }

    #[test]
    fn quadratic_two_roots() {
        let co = QuadraticCoefficients::from_roots(1, 2, 3).unwrap();
        let s = explain_quadratic(&co).unwrap();
        assert_eq!(
            s,
            vec![
                "**Ecuación:** x² - 5x + 6 = 0",
                "**Método: Fórmula General**",
                "a = 1, b = -5, c = 6",
                "x = (-b ± √(b² - 4ac)) / 2a",
                "Discriminante: b² - 4ac = (-5)² - 4(1)(6) = 1",
                "√1 = 1",
                "x = (5 ± 1) / 2",
                "x₁ = (5 + 1) / 2 = 3",
                "x₂ = (5 - 1) / 2 = 2",
                "✓ Resultado: x₁ = 2, x₂ = 3",
            ]
        );
    }

    #[test]
    fn quadratic_negative_leading_coefficient_orders_roots() {
        let co = QuadraticCoefficients::from_roots(-2, -3, 4).unwrap();
        let s = explain_quadratic(&co).unwrap();
        assert_eq!(s.last().unwrap(), "✓ Resultado: x₁ = -3, x₂ = 4");
    }

    #[test]
    fn quadratic_double_root() {
        let co = QuadraticCoefficients::from_roots(3, -2, -2).unwrap();
        let s = explain_quadratic(&co).unwrap();
        assert!(s.contains(&"Discriminante = 0 → raíz doble".to_string()));
        assert!(s.contains(&"x = -12 / 6 = -2".to_string()));
        assert_eq!(s.last().unwrap(), "✓ Resultado: x = -2 (raíz doble)");
    }

    #[test]
    fn quadratic_without_real_roots_does_not_panic() {
        let co = QuadraticCoefficients { a: 1, b: 0, c: 1, r1: 0, r2: 0 };
        let s = explain_quadratic(&co).unwrap();
        assert_eq!(s.last().unwrap(), "✓ Resultado: sin solución real");
    }
}
