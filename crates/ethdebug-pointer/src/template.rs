use crate::identifier::Identifier;
use crate::pointer::Pointer;
use serde::Deserialize;

/// A named, parameterised sub-pointer. `expect` lists the variables that must
/// already be bound wherever a `Pointer::Reference { template }` expands this
/// template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub expect: Vec<Identifier>,
    #[serde(rename = "for")]
    pub for_: Box<Pointer>,
}
