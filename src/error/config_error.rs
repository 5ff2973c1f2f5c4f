#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while validating the configuration.
pub enum ConfigError {
    /// The modulus is `0` or `1`.
    ModulusTooSmall {
        /// The rejected modulus.
        modulus: u64,
    },
    /// The modulus is too large for exact `i64` multiplication.
    ModulusTooLarge {
        /// The rejected modulus.
        modulus: u64,
        /// The largest accepted modulus.
        max:     u64,
    },
    /// The modulus is composite, so not every nonzero residue is invertible.
    ModulusNotPrime {
        /// The rejected modulus.
        modulus: u64,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ModulusTooSmall { modulus } => {
                write!(f, "Modulus {modulus} is too small. It must be a prime of at least 2.")
            },
            Self::ModulusTooLarge { modulus, max } => {
                write!(f, "Modulus {modulus} is too large. The maximum is {max}.")
            },
            Self::ModulusNotPrime { modulus } => write!(f, "Modulus {modulus} is not prime."),
        }
    }
}

impl std::error::Error for ConfigError {}
