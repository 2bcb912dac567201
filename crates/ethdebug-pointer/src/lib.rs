//! # ethdebug-pointer
//!
//! The pointer/expression/template AST that a compiler's debug-info emitter
//! produces and the dereference engine consumes, plus the JSON parsing that
//! sits at the external `ethdebug/format/pointer/...` schema boundary.
//!
//! ## Architecture
//!
//! - [`identifier`]: [`Identifier`] (user-chosen names) and [`identifier::Reference`]
//!   (an identifier or the reserved `$this`)
//! - [`data_value`]: [`data_value::DataValue`], the schema-constrained unsigned integer behind a `Literal`
//! - [`location`]: the seven EVM state segments a region may address
//! - [`expression`]: the expression sum type and its JSON-shape dispatch
//! - [`region`]: the raw (unresolved) region AST node
//! - [`pointer`]: the pointer collection sum type (`Group`, `List`, `Conditional`, `Scope`, `Reference`)
//! - [`template`]: named parameterised sub-pointers
//!
//! Parsing is deliberately permissive about *shape* (any JSON object with a
//! recognized discriminator key parses) and silent about schema-level
//! constraints (e.g. that a stack region needs a `slot`). Validating those is
//! the external schema generator's job, not this engine's.

mod data_value;
mod error;
mod expression;
mod identifier;
mod location;
mod pointer;
mod region;
mod template;

pub use data_value::DataValue;
pub use error::PointerError;
pub use expression::{Expression, Literal, Operands, RegionProperty};
pub use identifier::{Identifier, Reference};
pub use location::Location;
pub use pointer::{ListSpec, Pointer};
pub use region::Region;
pub use template::Template;
