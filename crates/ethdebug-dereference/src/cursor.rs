use crate::driver::Driver;
use crate::error::DereferenceError;
use crate::resolved_region::ResolvedRegion;
use ethdebug_machine::{MachineState, Stack};
use ethdebug_pointer::{Identifier, Pointer, Template};
use futures_core::Stream;
use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;

/// The immutable map a `Reference { template }` pointer node is expanded
/// against.
pub type Templates = HashMap<Identifier, Template>;

/// The lazy, finite, order-preserving stream a [`Cursor`] produces for one
/// machine-state snapshot.
pub type RegionStream<'a> = Pin<Box<dyn Stream<Item = Result<ResolvedRegion, DereferenceError>> + 'a>>;

/// A reusable dereferencer: re-invoking [`Cursor::dereference`] against a
/// different machine state replays the same pointer tree without
/// re-authoring it. Each call gets a fresh [`Driver`] with its own
/// variable/regions environment; the cursor itself holds no mutable state
/// and can be dereferenced any number of times.
pub struct Cursor {
    pointer: Arc<Pointer>,
    templates: Arc<Templates>,
    initial_stack_length: usize,
}

impl Cursor {
    /// Re-dereferences the pointer against `state`, producing a fresh stream
    /// of resolved regions. Dropping the stream before exhaustion abandons
    /// further expansion; no rollback is needed since the driver owns no
    /// shared state.
    pub fn dereference<'a, M>(&'a self, state: &'a M) -> RegionStream<'a>
    where
        M: MachineState + Sync,
    {
        let pointer = self.pointer.clone();
        let templates = self.templates.clone();
        let initial_stack_length = self.initial_stack_length;
        Box::pin(async_stream::try_stream! {
            let mut driver = Driver::new(pointer, templates, initial_stack_length, state).await;
            while let Some(region) = driver.step().await? {
                yield region;
            }
        })
    }
}

/// Entry point: dereferences `pointer` against `state`, capturing the
/// stack's current length as the baseline future re-dereferences adjust
/// their stack slots against. Returns a [`Cursor`] rather than the region
/// stream directly so the caller can re-dereference against a later machine
/// state without re-walking the pointer tree from scratch.
pub async fn dereference<M>(pointer: Arc<Pointer>, templates: Arc<Templates>, state: &M) -> Cursor
where
    M: MachineState + Sync,
{
    let initial_stack_length = state.stack().length().await;
    Cursor { pointer, templates, initial_stack_length }
}
