//! # ethdebug-dereference
//!
//! Dereferences an `ethdebug-pointer` tree against an `ethdebug-machine`
//! state snapshot, producing the stream of resolved regions the pointer
//! denotes.
//!
//! ## Architecture
//!
//! - [`regions_index`]: the ordered name → resolved-region map plus the
//!   distinguished `$this` slot
//! - [`resolved_region`]: [`ResolvedRegion`], a region whose fields are all
//!   `Data`-or-absent
//! - [`variables`]: the driver's lexically-scoped (additively) identifier →
//!   `Data` environment
//! - [`reader`]: projects a resolved region onto its machine-state segment
//! - [`evaluate`]: the expression interpreter
//! - [`resolve`]: the region fixed-point resolver and stack-slot adjustment
//! - [`driver`]: the work-stack dereferencer, including template expansion
//! - [`cursor`]: the public [`cursor::dereference`] entry point and reusable
//!   [`cursor::Cursor`]
//! - [`error`]: the [`error::DereferenceError`] taxonomy

mod cursor;
mod driver;
mod error;
mod evaluate;
mod reader;
mod regions_index;
mod resolve;
mod resolved_region;
mod variables;

pub use cursor::{dereference, Cursor, RegionStream, Templates};
pub use error::DereferenceError;
pub use evaluate::{evaluate, Env};
pub use reader::read;
pub use regions_index::RegionsIndex;
pub use resolve::{adjust_for_stack_delta, resolve};
pub use resolved_region::ResolvedRegion;
pub use variables::Variables;
