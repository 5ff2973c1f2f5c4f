/// An element of the prime field, held in canonical form `0 <= v < Z`.
///
/// Elements can only be produced by [`Field`](crate::field::Field)
/// operations, which normalise every result, so the canonical-form invariant
/// holds for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FieldElement(i64);

impl FieldElement {
    /// The additive identity.
    pub const ZERO: Self = Self(0);
    /// The multiplicative identity. Canonical for every prime modulus.
    pub const ONE: Self = Self(1);

    /// Wraps a value the caller has already reduced into `[0, Z)`.
    pub(in crate::field) const fn from_canonical(value: i64) -> Self {
        Self(value)
    }

    /// Returns the canonical integer representative.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns `true` for the zero residue.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<FieldElement> for i64 {
    fn from(value: FieldElement) -> Self {
        value.0
    }
}

impl std::fmt::Display for FieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
