use clap::ValueEnum;

use crate::util::num::DEFAULT_MODULUS;

/// How the right operand of `^` is reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExponentMode {
    /// Exponents are field elements, reduced modulo `Z`.
    #[default]
    Field,
    /// Exponents are reduced modulo `Z - 1`, so `a ^ -1` is the inverse of a
    /// nonzero `a`.
    Ring,
}

impl std::fmt::Display for ExponentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field => write!(f, "field"),
            Self::Ring => write!(f, "ring"),
        }
    }
}

/// Settings fixed for the lifetime of a [`Session`](crate::interpreter::session::Session).
///
/// The configuration is validated when the session is created; see
/// [`Field::new`](crate::field::Field::new) for the accepted moduli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// The prime modulus `Z`.
    pub modulus:       u64,
    /// How exponents are reduced.
    pub exponent_mode: ExponentMode,
}

impl Default for Config {
    fn default() -> Self {
        Self { modulus:       DEFAULT_MODULUS,
               exponent_mode: ExponentMode::Field, }
    }
}
