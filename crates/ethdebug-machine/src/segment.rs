use async_trait::async_trait;
use ethdebug_data::Data;
use num_bigint::BigUint;

/// The EVM operand stack at one execution step. `slot` is a depth index from
/// the top of the stack, not a storage key.
#[async_trait]
pub trait Stack {
    async fn length(&self) -> usize;
    async fn read(&self, slot: &BigUint, offset: usize, length: usize) -> Data;
}

/// Linear, byte-addressed memory.
#[async_trait]
pub trait Memory {
    async fn length(&self) -> usize;
    async fn read(&self, offset: usize, length: usize) -> Data;
}

/// Persistent, slot-addressed contract storage.
#[async_trait]
pub trait Storage {
    async fn read(&self, slot: &BigUint, offset: usize, length: usize) -> Data;
}

/// The current call's input data.
#[async_trait]
pub trait Calldata {
    async fn length(&self) -> usize;
    async fn read(&self, offset: usize, length: usize) -> Data;
}

/// The most recent call's output data.
#[async_trait]
pub trait Returndata {
    async fn length(&self) -> usize;
    async fn read(&self, offset: usize, length: usize) -> Data;
}

/// Transaction-scoped, slot-addressed storage (`TLOAD`/`TSTORE`).
#[async_trait]
pub trait Transient {
    async fn read(&self, slot: &BigUint, offset: usize, length: usize) -> Data;
}

/// The executing contract's bytecode.
#[async_trait]
pub trait Code {
    async fn length(&self) -> usize;
    async fn read(&self, offset: usize, length: usize) -> Data;
}
