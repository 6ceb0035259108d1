//! Shared helpers used by both the generator and the step explainers.
//!
//! The generator needs bounded random draws; the explainers need digit
//! splitting, column names and sign-aware rendering of equation terms.  Both
//! sides render equations through the same functions here so the text on the
//! worksheet and the text inside the explanation never drift apart.

use rand::Rng;

/// Place-value names indexed by column, units first.
pub const PLACE_NAMES: [&str; 6] = [
    "unidades",
    "decenas",
    "centenas",
    "millares",
    "decenas de millar",
    "centenas de millar",
];

/// Draw a genuine `digits`-digit number, i.e. from `[10^(d-1), 10^d - 1]`.
///
/// `digits` must already be validated to `1..=6`.
pub fn random_with_digits<R: Rng>(rng: &mut R, digits: u32) -> u64 {
    let min = 10u64.pow(digits - 1);
    let max = 10u64.pow(digits) - 1;
    rng.gen_range(min..=max)
}

/// `1` or `-1`, negative with probability `p_negative`.
pub fn random_sign<R: Rng>(rng: &mut R, p_negative: f64) -> i64 {
    if rng.gen_bool(p_negative) { -1 } else { 1 }
}

/// Decimal digits of `n`, most significant first.
pub fn digits(n: u64) -> Vec<u8> {
    n.to_string().bytes().map(|b| b - b'0').collect()
}

/// Digits of both operands, left-padded with zeros to a common width.
pub fn aligned_digits(top: u64, bottom: u64) -> (Vec<u8>, Vec<u8>) {
    let (t, b) = (digits(top), digits(bottom));
    let width = t.len().max(b.len());
    let pad = |ds: Vec<u8>| {
        let mut padded = vec![0u8; width - ds.len()];
        padded.extend(ds);
        padded
    };
    (pad(t), pad(b))
}

/// Reassemble digits (most significant first) into a number; `None` past `u64::MAX`.
pub fn digits_to_number(ds: &[u8]) -> Option<u64> {
    ds.iter()
        .try_fold(0u64, |acc, &d| acc.checked_mul(10)?.checked_add(u64::from(d)))
}

/// Name of column `index` (0 = units); `columna N` past the table.
pub fn place_name(index: usize) -> String {
    PLACE_NAMES
        .get(index)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("columna {}", index + 1))
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Wrap negative numbers in parentheses, e.g. `(-3)`.
pub fn paren(n: i64) -> String {
    if n < 0 { format!("({n})") } else { n.to_string() }
}

/// Print integral values without a fractional part, others in shortest form.
pub fn format_real(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// First term of an expression: `x`, `-x`, `3x`.
pub fn leading_term(coef: i64, var: &str) -> String {
    match coef {
        1 if !var.is_empty()  => var.to_string(),
        -1 if !var.is_empty() => format!("-{var}"),
        _ => format!("{coef}{var}"),
    }
}

/// A following term with its sign as an operator: ` + x`, ` - 4x`, ` + 7`.
/// Zero terms render as nothing.
pub fn trailing_term(coef: i64, var: &str) -> String {
    if coef == 0 {
        return String::new();
    }
    let sign = if coef > 0 { '+' } else { '-' };
    let magnitude = coef.unsigned_abs();
    if magnitude == 1 && !var.is_empty() {
        format!(" {sign} {var}")
    } else {
        format!(" {sign} {magnitude}{var}")
    }
}

/// `ax + b = c`
pub fn linear_equation_text(a: i64, b: i64, c: i64) -> String {
    format!("{}{} = {c}", leading_term(a, "x"), trailing_term(b, ""))
}

/// `ax² + bx + c = 0`
pub fn quadratic_equation_text(a: i64, b: i64, c: i64) -> String {
    format!("{}{}{} = 0", leading_term(a, "x²"), trailing_term(b, "x"), trailing_term(c, ""))
}
