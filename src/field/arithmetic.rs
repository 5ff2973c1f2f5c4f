use crate::{
    error::ConfigError,
    field::element::FieldElement,
    util::num::{DEFAULT_MODULUS, checked_modulus, reduce_decimal},
};

/// Arithmetic over the integers modulo a fixed prime.
///
/// Every operation accepts arbitrary integers (including already canonical
/// [`FieldElement`]s), normalises its operands, and returns a normalised
/// result. The modulus is fixed when the `Field` is created.
///
/// ## Usage
///
/// ```
/// use modcalc::field::Field;
///
/// let field = Field::default();
/// assert_eq!(field.add(1, 2).value(), 3);
/// assert_eq!(field.subtract(2, 3).value(), 1_234_576);
/// assert_eq!(field.multiply(field.inverse(2), 2).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    modulus: i64,
}

impl Default for Field {
    #[allow(clippy::cast_possible_wrap)]
    fn default() -> Self {
        Self { modulus: DEFAULT_MODULUS as i64 }
    }
}

impl Field {
    /// Creates a field over the given prime modulus.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the modulus is not a prime in
    /// `[2, MAX_MODULUS]`.
    ///
    /// # Example
    /// ```
    /// use modcalc::field::Field;
    ///
    /// assert_eq!(Field::new(7).unwrap().modulus(), 7);
    /// assert!(Field::new(9).is_err());
    /// ```
    pub fn new(modulus: u64) -> Result<Self, ConfigError> {
        Ok(Self { modulus: checked_modulus(modulus)? })
    }

    /// Returns the modulus `Z`.
    #[must_use]
    pub const fn modulus(&self) -> i64 {
        self.modulus
    }

    /// Maps any integer, including negative ones, into `[0, Z)`.
    ///
    /// `normalise(x) = ((x mod Z) + Z) mod Z`.
    #[must_use]
    pub const fn normalise(&self, x: i64) -> FieldElement {
        FieldElement::from_canonical(((x % self.modulus) + self.modulus) % self.modulus)
    }

    /// Reduces a decimal literal of any length into the field.
    ///
    /// # Example
    /// ```
    /// use modcalc::field::Field;
    ///
    /// let field = Field::default();
    /// assert_eq!(field.normalise_decimal("1234578").value(), 1);
    /// ```
    #[must_use]
    pub fn normalise_decimal(&self, digits: &str) -> FieldElement {
        FieldElement::from_canonical(reduce_decimal(digits, self.modulus))
    }

    /// Returns `x + y` in the field.
    #[must_use]
    pub fn add(&self, x: impl Into<i64>, y: impl Into<i64>) -> FieldElement {
        self.normalise(self.normalise(x.into()).value() + self.normalise(y.into()).value())
    }

    /// Returns `x - y` in the field.
    #[must_use]
    pub fn subtract(&self, x: impl Into<i64>, y: impl Into<i64>) -> FieldElement {
        self.normalise(self.normalise(x.into()).value() - self.normalise(y.into()).value())
    }

    /// Returns `x * y` in the field.
    #[must_use]
    pub fn multiply(&self, x: impl Into<i64>, y: impl Into<i64>) -> FieldElement {
        self.normalise(self.normalise(x.into()).value() * self.normalise(y.into()).value())
    }

    /// Returns `-x` in the field.
    #[must_use]
    pub fn unary_minus(&self, x: impl Into<i64>) -> FieldElement {
        // Normalise first: `-i64::MIN` overflows.
        self.normalise(-self.normalise(x.into()).value())
    }

    /// Raises `x` to the `y`-th power.
    ///
    /// `y` is an iteration count, not a field element: the result equals `y`
    /// successive modular multiplications of `1` by `x`, and is `1` for every
    /// `y <= 0`. It is computed by square-and-multiply.
    ///
    /// # Example
    /// ```
    /// use modcalc::field::Field;
    ///
    /// let field = Field::default();
    /// assert_eq!(field.power(2, 10).value(), 1024);
    /// assert_eq!(field.power(0, 0).value(), 1);
    /// assert_eq!(field.power(5, -3).value(), 1);
    /// ```
    #[must_use]
    pub fn power(&self, x: impl Into<i64>, y: impl Into<i64>) -> FieldElement {
        let mut base = self.normalise(x.into()).value();
        let mut exponent: i64 = y.into();
        let mut result = 1;

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = (result * base) % self.modulus;
            }
            base = (base * base) % self.modulus;
            exponent >>= 1;
        }

        FieldElement::from_canonical(result)
    }

    /// Returns the multiplicative inverse of `a`, computed with the iterative
    /// extended Euclidean algorithm on `(a, Z)`.
    ///
    /// The modulus is prime, so every nonzero residue is invertible. For the
    /// zero residue the loop never runs and the result is `1`, a placeholder
    /// that is only reached after a division by zero has been reported.
    ///
    /// # Example
    /// ```
    /// use modcalc::field::Field;
    ///
    /// let field = Field::new(7).unwrap();
    /// assert_eq!(field.inverse(3).value(), 5);
    /// assert_eq!(field.inverse(0).value(), 1);
    /// ```
    #[must_use]
    pub fn inverse(&self, a: impl Into<i64>) -> FieldElement {
        let mut a = self.normalise(a.into()).value();
        let mut m = self.modulus;
        let mut x = 1;
        let mut y = 0;

        while a > 1 {
            let quotient = a / m;
            let t = m;

            m = a % m;
            a = t;
            let t = y;

            y = x - quotient * y;
            x = t;
        }

        if x < 0 {
            x += self.modulus;
        }

        FieldElement::from_canonical(x)
    }

    /// Returns `x * inverse(y)` without checking `y` for zero.
    #[must_use]
    pub fn divide_unchecked(&self, x: impl Into<i64>, y: impl Into<i64>) -> FieldElement {
        self.multiply(x, self.inverse(y))
    }

    /// Returns the integer remainder of the canonical representatives of `x`
    /// and `y`, without checking `y` for zero.
    ///
    /// A zero divisor yields `normalise(x)`.
    ///
    /// # Example
    /// ```
    /// use modcalc::field::Field;
    ///
    /// let field = Field::default();
    /// assert_eq!(field.mod_unchecked(17, 5).value(), 2);
    /// assert_eq!(field.mod_unchecked(-1, 10).value(), 6);
    /// assert_eq!(field.mod_unchecked(17, 0).value(), 17);
    /// ```
    #[must_use]
    pub fn mod_unchecked(&self, x: impl Into<i64>, y: impl Into<i64>) -> FieldElement {
        let dividend = self.normalise(x.into()).value();
        let divisor = self.normalise(y.into()).value();
        self.normalise(dividend.checked_rem(divisor).unwrap_or(dividend))
    }

    /// Maps an exponent into the ring of integers modulo `Z - 1`.
    ///
    /// By Fermat's little theorem `a^(Z-1) = 1` for nonzero `a`, so exponents
    /// can be reduced modulo `Z - 1` without changing the power of a nonzero
    /// base. The result lies in `[0, Z - 1)` and is therefore canonical in the
    /// field as well.
    ///
    /// # Example
    /// ```
    /// use modcalc::field::Field;
    ///
    /// let field = Field::default();
    /// assert_eq!(field.normalise_exponent(-1).value(), 1_234_575);
    /// ```
    #[must_use]
    pub const fn normalise_exponent(&self, x: i64) -> FieldElement {
        let ring = self.modulus - 1;
        FieldElement::from_canonical(((x % ring) + ring) % ring)
    }

    /// Reduces a decimal literal into the ring of exponents modulo `Z - 1`.
    #[must_use]
    pub fn normalise_exponent_decimal(&self, digits: &str) -> FieldElement {
        FieldElement::from_canonical(reduce_decimal(digits, self.modulus - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn power_by_repeated_multiplication(field: &Field, x: i64, y: i64) -> FieldElement {
        let x = field.normalise(x);
        let mut result = FieldElement::ONE;
        for _ in 0..y {
            result = field.multiply(result, x);
        }
        result
    }

    #[test]
    fn power_matches_repeated_multiplication() {
        let field = Field::default();
        for x in [-3, 0, 1, 2, 7, 1_234_576, 99_999_999] {
            for y in [0, 1, 2, 3, 10, 31, 64, 257] {
                assert_eq!(field.power(x, y), power_by_repeated_multiplication(&field, x, y));
            }
        }
    }

    #[test]
    fn inverse_of_one_is_one() {
        assert_eq!(Field::default().inverse(1), FieldElement::ONE);
    }

    #[test]
    fn inverse_reduces_unnormalised_input() {
        let field = Field::new(7).unwrap();
        assert_eq!(field.inverse(10), field.inverse(3));
        assert_eq!(field.inverse(-4), field.inverse(3));
    }

    #[test]
    fn exponent_ring_over_two_collapses_to_zero() {
        let field = Field::new(2).unwrap();
        assert_eq!(field.normalise_exponent(5), FieldElement::ZERO);
        assert_eq!(field.normalise_exponent_decimal("12345"), FieldElement::ZERO);
    }
}
