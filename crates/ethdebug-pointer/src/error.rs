/// Errors raised while parsing a pointer/expression/template JSON tree into the
/// in-memory AST. Schema *validation* (e.g. that a stack region supplies a
/// `slot`) is the external schema generator's job per the engine's scope; this
/// crate only rejects JSON shapes it cannot assign any AST variant to.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PointerError {
    #[error("unrecognized expression shape: {0}")]
    UnrecognizedExpression(String),

    #[error("unrecognized pointer shape: {0}")]
    UnrecognizedPointer(String),

    #[error("$sized discriminator has a non-numeric size: {0:?}")]
    InvalidSizedDiscriminator(String),

    #[error("{0:?} is a reserved identifier and may not be used as a variable or region name")]
    ReservedIdentifier(String),
}
