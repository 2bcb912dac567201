use crate::error::PointerError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-chosen name: a variable binding, a region name, or a template name.
/// `$this` is reserved and can never be constructed as an `Identifier`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Identifier(String);

pub const THIS: &str = "$this";

impl Identifier {
    pub fn new(name: impl Into<String>) -> Result<Self, PointerError> {
        let name = name.into();
        if name == THIS {
            return Err(PointerError::ReservedIdentifier(name));
        }
        Ok(Identifier(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Identifier::new(raw).map_err(serde::de::Error::custom)
    }
}

/// The target of a `Lookup` or `Read` expression: either the region currently
/// being resolved (`$this`) or a previously-named region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    This,
    Named(Identifier),
}

impl Reference {
    pub fn parse(raw: &str) -> Self {
        if raw == THIS {
            Reference::This
        } else {
            // Identifier::new only fails for "$this", which is excluded above.
            Reference::Named(Identifier::new(raw).expect("already excluded $this"))
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::This => write!(f, "{THIS}"),
            Reference::Named(id) => write!(f, "{id}"),
        }
    }
}
