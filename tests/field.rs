use modcalc::{
    error::ConfigError,
    field::Field,
    util::num::{MAX_MODULUS, is_prime},
};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// Maps an arbitrary integer onto a nonzero residue of `field`.
fn nonzero(field: &Field, x: u32) -> i64 {
    i64::from(x) % (field.modulus() - 1) + 1
}

#[quickcheck]
fn normalise_is_canonical(x: i64) -> bool {
    let field = Field::default();
    (0..field.modulus()).contains(&field.normalise(x).value())
}

#[quickcheck]
fn normalise_is_idempotent(x: i64) -> bool {
    let field = Field::default();
    let once = field.normalise(x);
    field.normalise(once.value()) == once
}

#[quickcheck]
fn decimal_reduction_matches_normalise(x: u32) -> bool {
    let field = Field::default();
    field.normalise_decimal(&x.to_string()) == field.normalise(i64::from(x))
}

#[quickcheck]
fn addition_and_multiplication_commute(x: i64, y: i64) -> bool {
    let field = Field::default();
    field.add(x, y) == field.add(y, x) && field.multiply(x, y) == field.multiply(y, x)
}

#[quickcheck]
fn subtraction_undoes_addition(x: i64, y: i64) -> bool {
    let field = Field::default();
    field.subtract(field.add(x, y), y) == field.normalise(x)
}

#[quickcheck]
fn unary_minus_is_the_additive_inverse(x: i64) -> bool {
    let field = Field::default();
    field.add(x, field.unary_minus(x)).is_zero()
}

#[quickcheck]
fn inverse_is_the_multiplicative_inverse(x: u32) -> bool {
    let field = Field::default();
    let a = nonzero(&field, x);
    field.multiply(a, field.inverse(a)).value() == 1
}

#[quickcheck]
fn division_multiplies_by_the_inverse(x: i64, y: i64) -> TestResult {
    let field = Field::default();
    if field.normalise(y).is_zero() {
        return TestResult::discard();
    }

    let quotient = field.divide_unchecked(x, y);
    TestResult::from_bool(quotient == field.multiply(x, field.inverse(y))
                          && field.multiply(quotient, y) == field.normalise(x))
}

#[quickcheck]
fn power_matches_repeated_multiplication(x: i64, y: u8) -> bool {
    let field = Field::default();
    let expected = (0..y).fold(field.normalise(1), |acc, _| field.multiply(acc, x));
    field.power(x, i64::from(y)) == expected
}

#[quickcheck]
fn ring_reduced_exponents_agree_for_nonzero_bases(x: u32, y: u32) -> bool {
    let field = Field::default();
    let base = nonzero(&field, x);
    let exponent = i64::from(y);
    field.power(base, field.normalise_exponent(exponent)) == field.power(base, exponent)
}

#[quickcheck]
fn ring_exponents_are_canonical(x: i64) -> bool {
    let field = Field::default();
    (0..field.modulus() - 1).contains(&field.normalise_exponent(x).value())
}

#[test]
fn power_does_not_overflow() {
    let field = Field::default();

    assert_eq!(field.power(2, 10).value(), 1024);
    assert_eq!(field.power(1_234_576, 1_234_575).value(), 1_234_576);
    assert_eq!(field.power(3, 1_234_576).value(), 1);
}

#[test]
fn every_nonzero_residue_of_a_small_field_is_invertible() {
    let field = Field::new(101).unwrap();

    for a in 1..101 {
        assert_eq!(field.multiply(a, field.inverse(a)).value(), 1, "inverse of {a}");
    }
}

#[test]
fn largest_modulus_multiplies_without_overflow() {
    let largest_prime = (2..=MAX_MODULUS).rev().find(|&n| is_prime(n)).unwrap();
    let field = Field::new(largest_prime).unwrap();
    let minus_one = field.unary_minus(1);

    assert_eq!(field.multiply(minus_one, minus_one).value(), 1);
    assert_eq!(field.multiply(minus_one, field.inverse(minus_one)).value(), 1);
}

#[test]
fn field_rejects_bad_moduli() {
    assert_eq!(Field::new(1), Err(ConfigError::ModulusTooSmall { modulus: 1 }));
    assert_eq!(Field::new(91), Err(ConfigError::ModulusNotPrime { modulus: 91 }));
    assert_eq!(Field::new(MAX_MODULUS + 1),
               Err(ConfigError::ModulusTooLarge { modulus: MAX_MODULUS + 1,
                                                  max:     MAX_MODULUS, }));
}
