use crate::state::MachineState;
use async_trait::async_trait;

/// An entire execution trace: the sequence of steps a debugger host walks,
/// dereferencing the same pointer against each in turn (pointers are authored
/// once and dereferenced repeatedly against changing machine states). The
/// dereference engine itself never depends on this trait, since one
/// dereference call takes a single [`MachineState`].
pub trait Trace {
    type State: MachineState;

    /// Number of steps recorded.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The state at `step`, if the trace is that long.
    fn step(&self, step: usize) -> Option<&Self::State>;
}

/// A source of execution traces, e.g. a transaction replay driver.
#[async_trait]
pub trait Machine {
    type Trace: Trace;

    async fn trace(&self) -> Self::Trace;
}
