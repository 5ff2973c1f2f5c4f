/// Field operations.
///
/// Defines [`Field`], which fixes the prime modulus and implements
/// normalisation, addition, subtraction, multiplication, exponentiation,
/// negation, modular inversion and the unchecked division and remainder used
/// by the evaluator.
pub mod arithmetic;
/// Field elements.
///
/// Defines [`FieldElement`], the canonical representative of a residue class.
pub mod element;

pub use arithmetic::Field;
pub use element::FieldElement;
