use crate::expression::Expression;
use crate::identifier::Identifier;
use crate::location::Location;
use serde::Deserialize;

/// A raw pointer-region AST node: `{location, name?, slot?, offset?, length?}`.
///
/// Schema-level constraints (`slot` required for `stack`/`storage`/`transient`,
/// forbidden elsewhere) are the external schema generator's responsibility; the
/// engine tolerates an absent `slot` by defaulting to 0 at read time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Region {
    pub location: Location,
    #[serde(default)]
    pub name: Option<Identifier>,
    #[serde(default)]
    pub slot: Option<Expression>,
    #[serde(default)]
    pub offset: Option<Expression>,
    #[serde(default)]
    pub length: Option<Expression>,
}
