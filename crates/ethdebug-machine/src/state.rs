use crate::segment::{Calldata, Code, Memory, Returndata, Stack, Storage, Transient};

/// A single execution step's complete read surface: the seven state segments
/// plus the scalar accessors identifying the step itself.
pub trait MachineState {
    type Stack: Stack + Sync;
    type Memory: Memory + Sync;
    type Storage: Storage + Sync;
    type Calldata: Calldata + Sync;
    type Returndata: Returndata + Sync;
    type Transient: Transient + Sync;
    type Code: Code + Sync;

    fn stack(&self) -> &Self::Stack;
    fn memory(&self) -> &Self::Memory;
    fn storage(&self) -> &Self::Storage;
    fn calldata(&self) -> &Self::Calldata;
    fn returndata(&self) -> &Self::Returndata;
    fn transient(&self) -> &Self::Transient;
    fn code(&self) -> &Self::Code;

    fn trace_index(&self) -> u64;
    fn program_counter(&self) -> u64;
    fn opcode(&self) -> &str;
}
