//! # ethdebug-data
//!
//! The value type the ethdebug pointer-dereference engine computes with: a
//! variable-length, big-endian, unsigned byte string.
//!
//! ## Key Features
//!
//! - Construction from integers, hex strings, and raw bytes ([`Data::from_int`],
//!   [`Data::from_hex`], [`Data::from_bytes`])
//! - Length-preserving arithmetic (`sum`, `difference`, `product`, `quotient`,
//!   `remainder`) with the padding and saturation rules an EVM debugger needs
//! - Padding and resizing ([`Data::pad_until_at_least`], [`Data::resize_to`])
//!
//! ## Architecture
//!
//! - [`data`]: the [`Data`] type itself and its conversions
//! - [`arith`]: the five arithmetic operators, kept separate from `Data` because
//!   they operate over *operand lists*, not a single value
//! - [`error`]: the [`DataError`] taxonomy

mod arith;
mod data;
mod error;

pub use arith::{difference, product, quotient, remainder, sum};
pub use data::Data;
pub use error::DataError;
