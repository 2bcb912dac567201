/// Errors raised while constructing or computing with [`crate::Data`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DataError {
    /// `Data::from_hex` was given a string without the required `0x` prefix.
    #[error("invalid hex string {0:?}: expected \"0x\" prefix")]
    InvalidHex(String),

    /// A difference/quotient/remainder operand list did not contain exactly two entries.
    #[error("{operator} requires exactly 2 operands, got {got}")]
    InvalidArithmetic { operator: &'static str, got: usize },

    /// The divisor of a quotient or remainder evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,
}
