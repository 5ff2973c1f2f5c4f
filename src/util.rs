/// Numeric helpers.
///
/// This module holds the arithmetic that sits below the field itself: the
/// modulus bounds, primality testing for configured moduli and exact reduction
/// of decimal literals of arbitrary length.
pub mod num;
