// ============================================================================
// Decimal Evaluator
// Arbitrary-precision arithmetic behind the calculator's binary operations
// ============================================================================

use super::errors::{EvalError, EvalResult};
use crate::domain::Operation;
use rust_decimal::{Decimal, MathematicalOps};
use std::str::FromStr;

// ============================================================================
// Operations on Decimal
// ============================================================================

/// Checked addition.
///
/// # Errors
/// Returns `Overflow` if the result is out of range.
#[inline]
pub fn add(a: Decimal, b: Decimal) -> EvalResult<Decimal> {
    a.checked_add(b).ok_or(EvalError::Overflow)
}

/// Checked subtraction.
#[inline]
pub fn subtract(a: Decimal, b: Decimal) -> EvalResult<Decimal> {
    a.checked_sub(b).ok_or(EvalError::Overflow)
}

/// Checked multiplication.
///
/// Digits beyond the 28 significant digits of `Decimal` are rounded away;
/// only the integer part overflowing is an error.
#[inline]
pub fn multiply(a: Decimal, b: Decimal) -> EvalResult<Decimal> {
    a.checked_mul(b).ok_or(EvalError::Overflow)
}

/// Checked division.
///
/// Terminating quotients are exact (`15 / 4 = 3.75`); others are rounded to
/// 28 significant digits.
///
/// # Errors
/// - `DivisionByZero` if `b` is zero
/// - `Overflow` if the quotient is out of range
#[inline]
pub fn divide(a: Decimal, b: Decimal) -> EvalResult<Decimal> {
    if b.is_zero() {
        return Err(EvalError::DivisionByZero);
    }
    a.checked_div(b).ok_or(EvalError::Overflow)
}

/// Significant digits kept from `exp(b * ln a)`; the last places of the
/// series carry rounding noise.
const FRACTIONAL_POWER_DIGITS: u32 = 26;

/// Real-valued power `base ^ exponent`.
///
/// Integral exponents are computed exactly by repeated squaring, fractional
/// exponents as `exp(exponent * ln(base))` rounded to
/// `FRACTIONAL_POWER_DIGITS` significant digits, so `4 ^ 0.5` is exactly 2.
/// Results below the smallest representable magnitude are zero.
///
/// # Errors
/// - `DivisionByZero` for zero raised to a negative power
/// - `Undefined` for a negative base with a fractional exponent
/// - `Overflow` if the result is out of range
pub fn power(base: Decimal, exponent: Decimal) -> EvalResult<Decimal> {
    if exponent.is_zero() {
        return Ok(Decimal::ONE);
    }

    if base.is_zero() {
        return if exponent.is_sign_negative() {
            Err(EvalError::DivisionByZero)
        } else {
            Ok(Decimal::ZERO)
        };
    }

    if exponent.fract().is_zero() {
        return base
            .checked_powd(exponent)
            .or_else(|| reciprocal_power(base, exponent))
            .ok_or(EvalError::Overflow);
    }

    if base.is_sign_negative() {
        return Err(EvalError::Undefined);
    }

    let ln = base.checked_ln().ok_or(EvalError::Overflow)?;
    // exp of a large negative argument is too small to represent
    let vanishes = ln.is_sign_negative() != exponent.is_sign_negative();

    match ln.checked_mul(exponent).and_then(|scaled| scaled.checked_exp()) {
        Some(value) => Ok(value.round_sf(FRACTIONAL_POWER_DIGITS).unwrap_or(value)),
        None if vanishes => Ok(Decimal::ZERO),
        None => Err(EvalError::Overflow),
    }
}

/// `base ^ -n` as `(1 / base) ^ n`.
///
/// `checked_powd` divides one by `base ^ n`, which fails once `base ^ n`
/// leaves the decimal range even though the quotient merely rounds to zero.
fn reciprocal_power(base: Decimal, exponent: Decimal) -> Option<Decimal> {
    if !exponent.is_sign_negative() {
        return None;
    }
    Decimal::ONE.checked_div(base)?.checked_powd(-exponent)
}

/// Apply `operation` to two decimals
pub fn apply(a: Decimal, b: Decimal, operation: Operation) -> EvalResult<Decimal> {
    match operation {
        Operation::Add => add(a, b),
        Operation::Subtract => subtract(a, b),
        Operation::Multiply => multiply(a, b),
        Operation::Divide => divide(a, b),
        Operation::Power => power(a, b),
    }
}

// ============================================================================
// String Boundary
// ============================================================================

/// Parse a display literal into a decimal.
///
/// A trailing decimal point is accepted (`"5."` is 5), as the display shows
/// one while the user is still typing.
pub fn parse_operand(literal: &str) -> EvalResult<Decimal> {
    let trimmed = literal.strip_suffix('.').unwrap_or(literal);
    Decimal::from_str(trimmed).map_err(|_| EvalError::InvalidInput)
}

/// Canonical text form: no trailing zeros, no negative zero, no exponent.
pub fn render(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Resolve `a <operation> b` on display literals.
///
/// # Example
/// ```
/// use calculator_engine::domain::Operation;
/// use calculator_engine::numeric::calculate;
///
/// assert_eq!(calculate("0.1", "0.2", Operation::Add).unwrap(), "0.3");
/// assert_eq!(calculate("15", "4", Operation::Divide).unwrap(), "3.75");
/// ```
pub fn calculate(a: &str, b: &str, operation: Operation) -> EvalResult<String> {
    let lhs = parse_operand(a)?;
    let rhs = parse_operand(b)?;
    apply(lhs, rhs, operation).map(render)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_decimal_exactness() {
        assert_eq!(calculate("0.1", "0.2", Operation::Add).unwrap(), "0.3");
        assert_eq!(calculate("0.1", "0.2", Operation::Multiply).unwrap(), "0.02");
        assert_eq!(calculate("15", "4", Operation::Divide).unwrap(), "3.75");
        assert_eq!(calculate("0.3", "0.1", Operation::Subtract).unwrap(), "0.2");
    }

    #[test]
    fn test_trailing_zeros_stripped() {
        assert_eq!(calculate("1.50", "1.50", Operation::Add).unwrap(), "3");
        assert_eq!(calculate("2.5", "4", Operation::Multiply).unwrap(), "10");
        assert_eq!(calculate("-5", "0", Operation::Multiply).unwrap(), "0");
    }

    #[test]
    fn test_non_terminating_division_rounds() {
        let third = calculate("1", "3", Operation::Divide).unwrap();
        assert!(third.starts_with("0.3333333333"));
        assert!(!third.contains('e'));

        let two_thirds = calculate("2", "3", Operation::Divide).unwrap();
        assert!(two_thirds.starts_with("0.6666666666"));
        assert!(two_thirds.ends_with('7'));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            calculate("1", "0", Operation::Divide),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            calculate("0", "0", Operation::Divide),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            calculate("7", "0.", Operation::Divide),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_integer_power() {
        assert_eq!(calculate("2", "10", Operation::Power).unwrap(), "1024");
        assert_eq!(calculate("-2", "3", Operation::Power).unwrap(), "-8");
        assert_eq!(calculate("2", "-1", Operation::Power).unwrap(), "0.5");
        assert_eq!(calculate("1.5", "2", Operation::Power).unwrap(), "2.25");
        assert_eq!(calculate("9", "0", Operation::Power).unwrap(), "1");
        assert_eq!(calculate("0", "3", Operation::Power).unwrap(), "0");
    }

    #[test]
    fn test_fractional_power() {
        let root_two = power(dec("2"), dec("0.5")).unwrap();
        assert!((root_two - dec("1.41421356237")).abs() < dec("0.000000001"));
        assert_eq!(root_two.round_dp(10), dec("1.4142135624"));

        let root_four = power(dec("4"), dec("0.5")).unwrap();
        assert!((root_four - Decimal::TWO).abs() < dec("0.0000000001"));
    }

    #[test]
    fn test_perfect_roots_are_exact() {
        assert_eq!(calculate("4", "0.5", Operation::Power).unwrap(), "2");
        assert_eq!(calculate("9", "0.5", Operation::Power).unwrap(), "3");
    }

    #[test]
    fn test_vanishing_powers_round_to_zero() {
        assert_eq!(calculate("2", "-96", Operation::Power).unwrap(), "0");
        assert_eq!(calculate("2", "-100", Operation::Power).unwrap(), "0");
        assert_eq!(calculate("10", "-29", Operation::Power).unwrap(), "0");
        assert_eq!(calculate("0.5", "100", Operation::Power).unwrap(), "0");
        assert_eq!(calculate("0.5", "100.5", Operation::Power).unwrap(), "0");
        assert_eq!(calculate("2", "-100.5", Operation::Power).unwrap(), "0");

        // Representable negative powers keep their exact value
        assert_eq!(calculate("2", "-2", Operation::Power).unwrap(), "0.25");
        assert_eq!(
            calculate("10", "-28", Operation::Power).unwrap(),
            "0.0000000000000000000000000001"
        );
    }

    #[test]
    fn test_large_reciprocal_powers_overflow() {
        assert_eq!(
            calculate("0.5", "-100", Operation::Power),
            Err(EvalError::Overflow)
        );
        assert_eq!(
            calculate("2", "100.5", Operation::Power),
            Err(EvalError::Overflow)
        );
    }

    #[test]
    fn test_power_domain_errors() {
        assert_eq!(
            calculate("0", "-2", Operation::Power),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            calculate("-8", "0.5", Operation::Power),
            Err(EvalError::Undefined)
        );
        assert_eq!(
            calculate("10", "40", Operation::Power),
            Err(EvalError::Overflow)
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            calculate("10000000000000000", "10000000000000000", Operation::Multiply),
            Err(EvalError::Overflow)
        );
        assert_eq!(
            calculate("79228162514264337593543950335", "1", Operation::Add),
            Err(EvalError::Overflow)
        );
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("5.").unwrap(), dec("5"));
        assert_eq!(parse_operand("-0.").unwrap(), Decimal::ZERO);
        assert_eq!(parse_operand("abc"), Err(EvalError::InvalidInput));
        assert_eq!(parse_operand(""), Err(EvalError::InvalidInput));
        assert_eq!(calculate("5.", "1", Operation::Add).unwrap(), "6");
    }

    fn decimal_literal() -> impl Strategy<Value = String> {
        (-1_000_000_000i64..1_000_000_000, 0u32..8)
            .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale).to_string())
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in decimal_literal(), b in decimal_literal()) {
            prop_assert_eq!(
                calculate(&a, &b, Operation::Add),
                calculate(&b, &a, Operation::Add)
            );
        }

        #[test]
        fn prop_subtract_antisymmetric(a in decimal_literal(), b in decimal_literal()) {
            let forward = dec(&calculate(&a, &b, Operation::Subtract).unwrap());
            let backward = dec(&calculate(&b, &a, Operation::Subtract).unwrap());
            prop_assert_eq!(forward, -backward);
        }

        #[test]
        fn prop_divide_by_zero_always_fails(a in decimal_literal()) {
            prop_assert_eq!(
                calculate(&a, "0", Operation::Divide),
                Err(EvalError::DivisionByZero)
            );
        }

        #[test]
        fn prop_results_are_canonical(
            a in decimal_literal(),
            b in decimal_literal(),
            op in prop::sample::select(vec![
                Operation::Add,
                Operation::Subtract,
                Operation::Multiply,
                Operation::Divide,
            ]),
        ) {
            if let Ok(result) = calculate(&a, &b, op) {
                prop_assert!(!result.contains('e'));
                prop_assert!(result != "-0");
                if result.contains('.') {
                    prop_assert!(!result.ends_with('0'));
                }
            }
        }
    }
}
