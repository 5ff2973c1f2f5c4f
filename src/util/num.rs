use crate::error::ConfigError;

/// Modulus used when none is configured.
pub const DEFAULT_MODULUS: u64 = 1_234_577;
/// Largest modulus whose canonical residues can be multiplied without
/// overflowing an `i64` (`floor(sqrt(i64::MAX))`).
pub const MAX_MODULUS: u64 = 3_037_000_499;

/// Returns `true` if `n` is prime.
///
/// Plain trial division by `6k ± 1`. Moduli are bounded by [`MAX_MODULUS`], so
/// this never needs more than about eighteen thousand divisions.
///
/// ## Example
/// ```
/// use modcalc::util::num::{DEFAULT_MODULUS, is_prime};
///
/// assert!(is_prime(DEFAULT_MODULUS));
/// assert!(is_prime(2));
/// assert!(!is_prime(1));
/// assert!(!is_prime(1_234_576));
/// ```
#[must_use]
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut divisor = 5;
    while divisor * divisor <= n {
        if n % divisor == 0 || n % (divisor + 2) == 0 {
            return false;
        }
        divisor += 6;
    }
    true
}

/// Checks that `modulus` can serve as the field modulus and converts it to the
/// signed representation used by the arithmetic.
///
/// ## Errors
/// - `ConfigError::ModulusTooSmall` for `0` and `1`.
/// - `ConfigError::ModulusTooLarge` above [`MAX_MODULUS`].
/// - `ConfigError::ModulusNotPrime` for composite values.
///
/// ## Example
/// ```
/// use modcalc::{error::ConfigError, util::num::checked_modulus};
///
/// assert_eq!(checked_modulus(7).unwrap(), 7);
/// assert!(matches!(checked_modulus(8), Err(ConfigError::ModulusNotPrime { modulus: 8 })));
/// ```
pub fn checked_modulus(modulus: u64) -> Result<i64, ConfigError> {
    if modulus < 2 {
        return Err(ConfigError::ModulusTooSmall { modulus });
    }
    if modulus > MAX_MODULUS {
        return Err(ConfigError::ModulusTooLarge { modulus,
                                                  max: MAX_MODULUS });
    }
    if !is_prime(modulus) {
        return Err(ConfigError::ModulusNotPrime { modulus });
    }

    i64::try_from(modulus).map_err(|_| ConfigError::ModulusTooLarge { modulus,
                                                                      max: MAX_MODULUS })
}

/// Reduces a string of ASCII decimal digits modulo `modulus` using Horner's
/// rule, so literals of any length are reduced exactly.
///
/// Non-digit characters are ignored; the lexer only ever hands over digits.
///
/// ## Parameters
/// - `digits`: The decimal digits, most significant first.
/// - `modulus`: A positive modulus not larger than [`MAX_MODULUS`].
///
/// ## Returns
/// The remainder in `[0, modulus)`.
///
/// ## Example
/// ```
/// use modcalc::util::num::reduce_decimal;
///
/// assert_eq!(reduce_decimal("1024", 1_234_577), 1024);
/// assert_eq!(reduce_decimal("12345678901234567890", 1_234_577), 1_022_579);
/// ```
#[must_use]
pub fn reduce_decimal(digits: &str, modulus: i64) -> i64 {
    digits.bytes()
          .filter(u8::is_ascii_digit)
          .fold(0, |acc, digit| (acc * 10 + i64::from(digit - b'0')) % modulus)
}
