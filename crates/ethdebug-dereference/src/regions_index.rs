use crate::resolved_region::ResolvedRegion;
use ethdebug_pointer::{Identifier, Reference};

/// An append-only, ordered name → resolved-region mapping, plus the
/// distinguished `$this` slot. Lookup by name returns the most-recently-
/// appended entry with that name; earlier entries are shadowed, never
/// removed, so the full history remains available for whoever needs the
/// traversal order (the driver's output stream is independent of this index).
#[derive(Debug, Clone, Default)]
pub struct RegionsIndex {
    entries: Vec<(Identifier, ResolvedRegion)>,
    this: Option<ResolvedRegion>,
}

impl RegionsIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs (or replaces) the `$this` slot.
    pub fn set_this(&mut self, region: ResolvedRegion) {
        self.this = Some(region);
    }

    pub fn this(&self) -> Option<&ResolvedRegion> {
        self.this.as_ref()
    }

    /// Appends a named resolved region, making it visible to later lookups.
    /// A no-op if the region is unnamed (unnamed regions are never visible by
    /// name, only reachable via the emitted stream).
    pub fn save(&mut self, region: ResolvedRegion) {
        if let Some(name) = region.name.clone() {
            self.entries.push((name, region));
        }
    }

    /// Resolves a `Lookup`/`Read` target: `$this` goes through the distinguished
    /// slot, anything else searches by name, most-recent-wins.
    pub fn lookup(&self, reference: &Reference) -> Option<&ResolvedRegion> {
        match reference {
            Reference::This => self.this(),
            Reference::Named(name) => self
                .entries
                .iter()
                .rev()
                .find(|(entry_name, _)| entry_name == name)
                .map(|(_, region)| region),
        }
    }
}
