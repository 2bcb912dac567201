use ethdebug_data::Data;
use ethdebug_pointer::Identifier;
use std::collections::HashMap;

/// The driver's variable environment. Bindings are additive for the lifetime
/// of one dereference call: scope/list bindings are never popped on sub-tree
/// exit, so a later same-named binding simply overwrites the earlier value
/// rather than being scoped away.
#[derive(Debug, Clone, Default)]
pub struct Variables {
    bindings: HashMap<Identifier, Data>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, name: Identifier, value: Data) {
        self.bindings.insert(name, value);
    }

    pub fn extend(&mut self, bindings: impl IntoIterator<Item = (Identifier, Data)>) {
        self.bindings.extend(bindings);
    }

    pub fn get(&self, name: &Identifier) -> Option<&Data> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &Identifier) -> bool {
        self.bindings.contains_key(name)
    }
}
