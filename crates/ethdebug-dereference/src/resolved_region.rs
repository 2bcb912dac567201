use ethdebug_data::Data;
use ethdebug_pointer::{Identifier, Location};

/// A region whose `slot`/`offset`/`length` fields are each either `Data` or
/// absent, never still an expression. This is what the driver emits and what
/// `$this`/by-name lookups resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRegion {
    pub name: Option<Identifier>,
    pub location: Location,
    pub slot: Option<Data>,
    pub offset: Option<Data>,
    pub length: Option<Data>,
}
