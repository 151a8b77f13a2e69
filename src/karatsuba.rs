use std::fmt;
use std::str::FromStr;

use malachite::Integer;

use crate::errors::DncError;
use crate::integer_ext::{digit_count, is_single_digit, pow10};

/*
                                                  ╒══════════════════╕
    ============================================= │  IMPLEMENTATION  │ =============================================
                                                  ╘══════════════════╛
*/

/// A dynamically typed multiplication operand. Only `Int` operands can be multiplied,
/// floats are rejected even when their value is integral.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Int(Integer),
    Float(f64)
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(n) => write!(f, "{}", n),
            Operand::Float(n) => write!(f, "{:?}", n)
        }
    }
}

impl From<Integer> for Operand {
    fn from(n: Integer) -> Self {
        Operand::Int(n)
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Float(n)
    }
}

macro_rules! impl_int_conversion {
    ($($t: ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(n: $t) -> Self {
                    Operand::Int(Integer::from(n))
                }
            }
        )*
    };
}

impl_int_conversion!(i32, i64, u32, u64);

fn check_integer_format(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);

    !digits.is_empty() && digits.chars().all(|i| i.is_ascii_digit())
}

impl FromStr for Operand {
    type Err = DncError;

    fn from_str(s: &str) -> Result<Operand, Self::Err> {
        let s = s.trim();

        if check_integer_format(s) {
            if let Ok(n) = s.strip_prefix('+').unwrap_or(s).parse::<Integer>() {
                return Ok(Operand::Int(n));
            }
        }

        match s.parse::<f64>() {
            Ok(n) => Ok(Operand::Float(n)),
            Err(_) => Err(DncError::invalid_operand(format!("Unable to parse a number from {:?}", s)))
        }
    }
}

/*
    ╒══════════════════════════╕
    │ Karatsuba multiplication │
    ╘══════════════════════════╛
*/

/// Multiplies two operands, failing with `InvalidOperand` unless both are integers.
pub fn multiply(x: &Operand, y: &Operand) -> Result<Integer, DncError> {
    match (x, y) {
        (Operand::Int(a), Operand::Int(b)) => Ok(karatsuba(a, b)),

        _ => Err(DncError::invalid_operand(format!("Input values must be integers (got {} and {})", x, y)))
    }
}

/// Digits kept in the low half when splitting operands with `m` digits (`ceil(m / 2)`).
#[inline]
pub fn split_digits(m: usize) -> usize {
    (m + 1) / 2
}

/// Karatsuba multiplication over decimal digits.
///
/// Each operand is split as `x = a·10^n + b` and `y = c·10^n + d`, where `n` is half the digit count
/// of the shorter operand, and the product is rebuilt from three recursive products instead of four:
/// `ac·10^(2n) + (ad + bc)·10^n + bd` with `ad + bc = (a + b)(c + d) - ac - bd`.
///
/// Division truncates toward zero, so `a` and `b` share the sign of `x` and the identity holds for
/// negative operands as well.
pub fn karatsuba(x: &Integer, y: &Integer) -> Integer {
    if is_single_digit(x) || is_single_digit(y) {
        return x * y;
    }

    let n = split_digits(digit_count(x).min(digit_count(y)));
    let p = pow10(n);

    let a = x / &p;
    let b = x % &p;
    let c = y / &p;
    let d = y % &p;

    let ac = karatsuba(&a, &c);
    let bd = karatsuba(&b, &d);
    let ad_bc = karatsuba(&(&a + &b), &(&c + &d)) - &ac - &bd;

    ac * pow10(2 * n) + ad_bc * p + bd
}

/*
                                                  ╒═════════╕
    ============================================= │  TESTS  │ =============================================
                                                  ╘═════════╛
*/
