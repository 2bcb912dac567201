use crate::error::DereferenceError;
use crate::resolved_region::ResolvedRegion;
use ethdebug_data::Data;
use ethdebug_machine::{Calldata, Code, Memory, MachineState, Returndata, Stack, Storage, Transient};
use ethdebug_pointer::Location;

/// `offset` defaults to 0 and `length` to 32 (one EVM word) when the region
/// doesn't carry them.
const DEFAULT_LENGTH: usize = 32;

fn as_usize(data: &Data) -> usize {
    use num_traits::ToPrimitive;
    data.as_uint().to_usize().unwrap_or(usize::MAX)
}

/// Projects a fully resolved region onto its machine-state segment and
/// returns the raw bytes read. `region.location` is one of the seven schema
/// locations by construction ([`Location`] is a closed enum), so the
/// invalid-region error can only ever be raised for the schema-level "unknown
/// location string" case, which is rejected earlier at the JSON parsing
/// boundary and has no live code path here.
pub async fn read<M: MachineState>(region: &ResolvedRegion, state: &M) -> Result<Data, DereferenceError> {
    let offset = region.offset.as_ref().map(as_usize).unwrap_or(0);
    let length = region.length.as_ref().map(as_usize).unwrap_or(DEFAULT_LENGTH);
    let slot = || region.slot.clone().unwrap_or_else(Data::zero).as_uint();

    let bytes = match region.location {
        Location::Stack => state.stack().read(&slot(), offset, length).await,
        Location::Memory => state.memory().read(offset, length).await,
        Location::Storage => state.storage().read(&slot(), offset, length).await,
        Location::Calldata => state.calldata().read(offset, length).await,
        Location::Returndata => state.returndata().read(offset, length).await,
        Location::Transient => state.transient().read(&slot(), offset, length).await,
        Location::Code => state.code().read(offset, length).await,
    };
    Ok(bytes)
}
