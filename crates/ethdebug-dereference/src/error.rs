use ethdebug_data::DataError;
use ethdebug_pointer::{Identifier, RegionProperty};

/// The complete error taxonomy for a dereference call. Every variant aborts
/// the current dereference stream; the resolver's internal `PropertyAbsent`
/// catch is the only intentional recovery and never reaches a caller.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DereferenceError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("unknown variable: {0}")]
    UnknownVariable(Identifier),

    #[error("unknown pointer template: {0}")]
    UnknownTemplate(Identifier),

    #[error("reference to template {template} is missing expected variables: {missing:?}")]
    MissingTemplateVariables {
        template: Identifier,
        missing: Vec<Identifier>,
    },

    #[error("region not found: {0}")]
    RegionNotFound(String),

    #[error("region {region} does not have its {property:?} property resolved")]
    PropertyAbsent { region: String, property: RegionProperty },

    #[error("circular reference resolving region {0:?}")]
    CircularReference(Option<Identifier>),

    #[error("invalid location for a region: {0}")]
    InvalidRegion(String),

    #[error("invalid resize: size must be positive, got {0}")]
    InvalidResize(i64),
}
