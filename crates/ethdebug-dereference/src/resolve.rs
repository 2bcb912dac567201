use crate::error::DereferenceError;
use crate::evaluate::{evaluate, Env};
use crate::regions_index::RegionsIndex;
use crate::resolved_region::ResolvedRegion;
use crate::variables::Variables;
use ethdebug_data::Data;
use ethdebug_machine::MachineState;
use ethdebug_pointer::{Expression, Location, Region};

/// One of a region's three expression-typed fields, mid fixed-point
/// resolution: absent fields never gain an expression, and once a field
/// resolves to `Data` it never reverts.
#[derive(Clone)]
enum Field {
    Absent,
    Expr(Expression),
    Value(Data),
}

impl Field {
    fn from_option(expr: Option<Expression>) -> Self {
        match expr {
            None => Field::Absent,
            Some(expr) => Field::Expr(expr),
        }
    }

    fn is_expr(&self) -> bool {
        matches!(self, Field::Expr(_))
    }

    fn as_value(&self) -> Option<Data> {
        match self {
            Field::Value(data) => Some(data.clone()),
            _ => None,
        }
    }
}

/// Rewrites a stack region's `slot` expression to compensate for stack growth
/// or shrinkage since the pointer was authored. Non-stack regions, and stack
/// regions with an absent `slot`, are returned unchanged.
pub fn adjust_for_stack_delta(region: &Region, delta: i64) -> Region {
    if region.location != Location::Stack || delta == 0 {
        return region.clone();
    }
    let Some(slot) = region.slot.clone() else {
        return region.clone();
    };
    let mut adjusted = region.clone();
    adjusted.slot = Some(if delta > 0 {
        Expression::Sum(vec![slot, Expression::literal_int(delta as u64)])
    } else {
        Expression::Difference(vec![slot, Expression::literal_int((-delta) as u64)])
    });
    adjusted
}

/// Drives a raw region node to a fully resolved one by repeatedly evaluating
/// its `slot`/`offset`/`length` expressions against an environment whose
/// `$this` slot mirrors the region's own in-progress state. Terminates either
/// when every field is `Data`-or-absent, or when an iteration leaves the set
/// of still-unresolved fields unchanged, which can only happen for a
/// self-referential definition that never bottoms out.
pub async fn resolve<M>(
    region: &Region,
    regions: &mut RegionsIndex,
    variables: &Variables,
    state: &M,
) -> Result<ResolvedRegion, DereferenceError>
where
    M: MachineState + Sync,
{
    let mut slot = Field::from_option(region.slot.clone());
    let mut offset = Field::from_option(region.offset.clone());
    let mut length = Field::from_option(region.length.clone());

    let mut iteration = 0u32;
    loop {
        iteration += 1;
        tracing::trace!(name = ?region.name, iteration, "resolver fixed-point iteration");
        let shape_before = (slot.is_expr(), offset.is_expr(), length.is_expr());

        regions.set_this(ResolvedRegion {
            name: None,
            location: region.location,
            slot: slot.as_value(),
            offset: offset.as_value(),
            length: length.as_value(),
        });

        for field in [&mut slot, &mut offset, &mut length] {
            if let Field::Expr(expr) = field {
                let env = Env { regions: &*regions, variables, state };
                match evaluate(expr, &env).await {
                    Ok(data) => *field = Field::Value(data),
                    Err(DereferenceError::PropertyAbsent { .. }) => {}
                    Err(other) => return Err(other),
                }
            }
        }

        if !slot.is_expr() && !offset.is_expr() && !length.is_expr() {
            break;
        }

        let shape_after = (slot.is_expr(), offset.is_expr(), length.is_expr());
        if shape_after == shape_before {
            tracing::debug!(name = ?region.name, "resolver reached a non-terminal fixed point");
            return Err(DereferenceError::CircularReference(region.name.clone()));
        }
    }

    Ok(ResolvedRegion {
        name: region.name.clone(),
        location: region.location,
        slot: slot.as_value(),
        offset: offset.as_value(),
        length: length.as_value(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethdebug_machine::{Calldata, Code, Memory, Returndata, Stack, Storage, Transient};
    use proptest::prelude::*;
    use ethdebug_pointer::{Identifier, Reference, RegionProperty};
    use num_bigint::BigUint;

    struct NullSegment;
    #[async_trait::async_trait]
    impl Stack for NullSegment {
        async fn length(&self) -> usize {
            0
        }
        async fn read(&self, _: &BigUint, _: usize, _: usize) -> Data {
            Data::zero()
        }
    }
    #[async_trait::async_trait]
    impl Memory for NullSegment {
        async fn length(&self) -> usize {
            0
        }
        async fn read(&self, _: usize, _: usize) -> Data {
            Data::zero()
        }
    }
    #[async_trait::async_trait]
    impl Storage for NullSegment {
        async fn read(&self, _: &BigUint, _: usize, _: usize) -> Data {
            Data::zero()
        }
    }
    #[async_trait::async_trait]
    impl Calldata for NullSegment {
        async fn length(&self) -> usize {
            0
        }
        async fn read(&self, _: usize, _: usize) -> Data {
            Data::zero()
        }
    }
    #[async_trait::async_trait]
    impl Returndata for NullSegment {
        async fn length(&self) -> usize {
            0
        }
        async fn read(&self, _: usize, _: usize) -> Data {
            Data::zero()
        }
    }
    #[async_trait::async_trait]
    impl Transient for NullSegment {
        async fn read(&self, _: &BigUint, _: usize, _: usize) -> Data {
            Data::zero()
        }
    }
    #[async_trait::async_trait]
    impl Code for NullSegment {
        async fn length(&self) -> usize {
            0
        }
        async fn read(&self, _: usize, _: usize) -> Data {
            Data::zero()
        }
    }

    struct NullState;
    impl MachineState for NullState {
        type Stack = NullSegment;
        type Memory = NullSegment;
        type Storage = NullSegment;
        type Calldata = NullSegment;
        type Returndata = NullSegment;
        type Transient = NullSegment;
        type Code = NullSegment;
        fn stack(&self) -> &Self::Stack {
            &NullSegment
        }
        fn memory(&self) -> &Self::Memory {
            &NullSegment
        }
        fn storage(&self) -> &Self::Storage {
            &NullSegment
        }
        fn calldata(&self) -> &Self::Calldata {
            &NullSegment
        }
        fn returndata(&self) -> &Self::Returndata {
            &NullSegment
        }
        fn transient(&self) -> &Self::Transient {
            &NullSegment
        }
        fn code(&self) -> &Self::Code {
            &NullSegment
        }
        fn trace_index(&self) -> u64 {
            0
        }
        fn program_counter(&self) -> u64 {
            0
        }
        fn opcode(&self) -> &str {
            "STOP"
        }
    }

    #[tokio::test]
    async fn resolves_a_region_with_no_this_reference_in_one_pass() {
        let region = Region {
            location: Location::Memory,
            name: Some(Identifier::new("m").unwrap()),
            slot: None,
            offset: Some(Expression::literal_int(0xa0u32)),
            length: Some(Expression::literal_int(11u32)),
        };
        let mut regions = RegionsIndex::new();
        let variables = Variables::new();
        let resolved = resolve(&region, &mut regions, &variables, &NullState).await.unwrap();
        assert_eq!(resolved.offset, Some(Data::from_int(0xa0u32)));
        assert_eq!(resolved.length, Some(Data::from_int(11u32)));
    }

    #[tokio::test]
    async fn a_length_defined_purely_in_terms_of_itself_is_circular() {
        let region = Region {
            location: Location::Memory,
            name: None,
            slot: None,
            offset: None,
            length: Some(Expression::Lookup(RegionProperty::Length, Reference::This)),
        };
        let mut regions = RegionsIndex::new();
        let variables = Variables::new();
        let err = resolve(&region, &mut regions, &variables, &NullState).await.unwrap_err();
        assert!(matches!(err, DereferenceError::CircularReference(None)));
    }

    #[tokio::test]
    async fn a_field_can_depend_on_a_sibling_field_of_the_same_region() {
        // offset is defined, length = $sum[.offset($this), 1], resolves in two iterations.
        let region = Region {
            location: Location::Memory,
            name: None,
            slot: None,
            offset: Some(Expression::literal_int(5u32)),
            length: Some(Expression::Sum(vec![
                Expression::Lookup(RegionProperty::Offset, Reference::This),
                Expression::literal_int(1u32),
            ])),
        };
        let mut regions = RegionsIndex::new();
        let variables = Variables::new();
        let resolved = resolve(&region, &mut regions, &variables, &NullState).await.unwrap();
        assert_eq!(resolved.length, Some(Data::from_int(6u32)));
    }

    #[test]
    fn stack_adjustment_rewrites_slot_by_delta() {
        let region = Region {
            location: Location::Stack,
            name: None,
            slot: Some(Expression::literal_int(3u32)),
            offset: None,
            length: None,
        };
        let up = adjust_for_stack_delta(&region, 5);
        assert_eq!(
            up.slot,
            Some(Expression::Sum(vec![Expression::literal_int(3u32), Expression::literal_int(5u32)]))
        );
        let down = adjust_for_stack_delta(&region, -2);
        assert_eq!(
            down.slot,
            Some(Expression::Difference(vec![Expression::literal_int(3u32), Expression::literal_int(2u32)]))
        );
        let unchanged = adjust_for_stack_delta(&region, 0);
        assert_eq!(unchanged.slot, region.slot);
    }

    #[test]
    fn stack_adjustment_ignores_non_stack_locations() {
        let region = Region {
            location: Location::Memory,
            name: None,
            slot: Some(Expression::literal_int(3u32)),
            offset: None,
            length: None,
        };
        assert_eq!(adjust_for_stack_delta(&region, 5).slot, region.slot);
    }

    proptest::proptest! {
        #[test]
        fn stack_adjustment_by_zero_is_always_a_noop(slot: u32) {
            let region = Region {
                location: Location::Stack,
                name: None,
                slot: Some(Expression::literal_int(slot)),
                offset: None,
                length: None,
            };
            prop_assert_eq!(adjust_for_stack_delta(&region, 0).slot, region.slot);
        }

        #[test]
        fn growing_then_shrinking_a_stack_slot_by_the_same_amount_resolves_to_the_original_value(
            slot: u32,
            delta in 1i64..1000,
        ) {
            let region = Region {
                location: Location::Stack,
                name: None,
                slot: Some(Expression::literal_int(slot)),
                offset: None,
                length: None,
            };
            let grown = adjust_for_stack_delta(&region, delta);
            let back = adjust_for_stack_delta(&grown, -delta);
            let mut regions = RegionsIndex::new();
            let variables = Variables::new();
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let resolved = runtime.block_on(resolve(&back, &mut regions, &variables, &NullState)).unwrap();
            prop_assert_eq!(resolved.slot, Some(Data::from_int(slot)));
        }
    }
}
