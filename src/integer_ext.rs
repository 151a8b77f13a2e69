use malachite::integer::random::uniform_random_integer_range;
use malachite::num::arithmetic::traits::Pow;
use malachite::Integer;
use rand::{Rng, RngCore};

/// Number of decimal digits of `|n|`. Zero has a single digit.
pub fn digit_count(n: &Integer) -> usize {
    n.to_string().trim_start_matches('-').len()
}

pub fn pow10(n: usize) -> Integer {
    Integer::from(10u32).pow(n as u64)
}

pub fn is_single_digit(n: &Integer) -> bool {
    *n < Integer::from(10) && *n > Integer::from(-10)
}

/// Uniform random integer in `[f, t)`. Panics if the range is empty.
pub fn randint(f: Integer, t: Integer) -> Integer {
    let mut bytes = [0; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    let s = malachite::random::Seed { bytes };

    let mut r = uniform_random_integer_range(s, f, t);
    r.next().expect("Random integer ranges never run out of values")
}

/// Random integer with exactly `digits` decimal digits (zero when `digits` is zero).
pub fn rand_with_digits(digits: usize, can_be_negative: bool) -> Integer {
    if digits == 0 {
        return Integer::from(0);
    }

    let lower = if digits == 1 { Integer::from(0) } else { pow10(digits - 1) };
    let res = randint(lower, pow10(digits));

    if can_be_negative && rand::thread_rng().gen::<bool>() {
        -res

    } else {
        res
    }
}

/*
                                                  ╒═════════╕
    ============================================= │  TESTS  │ =============================================
                                                  ╘═════════╛
*/
