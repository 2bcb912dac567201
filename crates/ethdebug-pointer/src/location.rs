use serde::{Deserialize, Serialize};

/// One of the seven EVM state segments a region may address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Stack,
    Memory,
    Storage,
    Calldata,
    Returndata,
    Transient,
    Code,
}

impl Location {
    /// Whether this location addresses its bytes through a `slot` index
    /// (as opposed to a flat, sequential byte space).
    pub fn is_slotted(self) -> bool {
        matches!(self, Location::Stack | Location::Storage | Location::Transient)
    }
}
