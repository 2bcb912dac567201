//! # ethdebug-machine
//!
//! The abstract machine-state interface the dereference engine reads through.
//! This crate defines no concrete EVM: it is the boundary a real interpreter
//! implements so the dereference engine can read stack/memory/storage/
//! calldata/returndata/transient/code without knowing how execution actually
//! works.
//!
//! ## Architecture
//!
//! - [`segment`]: one trait per EVM state segment, each an `async_trait` so the
//!   engine's single suspension point (suspension occurs only at machine-state
//!   reads) is exactly these trait methods
//! - [`state`]: [`MachineState`], aggregating the seven segments plus the
//!   scalar step accessors (`trace_index`, `program_counter`, `opcode`)
//! - [`trace`]: [`Trace`]/[`Machine`], the "iterate every step" surface a
//!   debugger host needs even though a single dereference call only ever
//!   consumes one [`MachineState`]

mod segment;
mod state;
mod trace;

pub use segment::{Calldata, Code, Memory, Returndata, Stack, Storage, Transient};
pub use state::MachineState;
pub use trace::{Machine, Trace};
