use crate::error::DereferenceError;
use crate::evaluate::{evaluate, Env};
use crate::regions_index::RegionsIndex;
use crate::resolve::{adjust_for_stack_delta, resolve};
use crate::resolved_region::ResolvedRegion;
use crate::variables::Variables;
use crate::Templates;
use ethdebug_data::Data;
use ethdebug_machine::{MachineState, Stack};
use ethdebug_pointer::{Identifier, Pointer};
use num_traits::ToPrimitive;
use std::sync::Arc;

/// A unit of pending work on the driver's explicit traversal stack.
/// Expanding a pointer node produces zero or more of these, pushed in reverse
/// so the first logical step is popped first.
enum Memo {
    DereferencePointer(Pointer),
    SaveRegions(Vec<ResolvedRegion>),
    SaveVariables(Vec<(Identifier, Data)>),
}

/// The work-stack dereferencer. One `Driver` exists per `Cursor::dereference`
/// call: it owns the variable and regions environments for that call and is
/// discarded once its stream is exhausted or dropped.
pub struct Driver<'a, M: MachineState> {
    work: Vec<Memo>,
    regions: RegionsIndex,
    variables: Variables,
    templates: Arc<Templates>,
    state: &'a M,
    stack_delta: i64,
}

impl<'a, M> Driver<'a, M>
where
    M: MachineState + Sync,
{
    pub async fn new(pointer: Arc<Pointer>, templates: Arc<Templates>, initial_stack_length: usize, state: &'a M) -> Self {
        let current_stack_length = state.stack().length().await;
        let stack_delta = current_stack_length as i64 - initial_stack_length as i64;
        Self {
            work: vec![Memo::DereferencePointer((*pointer).clone())],
            regions: RegionsIndex::new(),
            variables: Variables::new(),
            templates,
            state,
            stack_delta,
        }
    }

    /// Advances the driver until it either emits the next resolved region or
    /// exhausts the work stack, the latter signalling the end of the stream.
    pub async fn step(&mut self) -> Result<Option<ResolvedRegion>, DereferenceError> {
        while let Some(memo) = self.work.pop() {
            match memo {
                Memo::SaveRegions(regions) => {
                    for region in regions {
                        self.regions.save(region);
                    }
                }
                Memo::SaveVariables(bindings) => {
                    self.variables.extend(bindings);
                }
                Memo::DereferencePointer(pointer) => {
                    if let Some(region) = self.expand(pointer).await? {
                        return Ok(Some(region));
                    }
                }
            }
        }
        Ok(None)
    }

    fn env(&self) -> Env<'_, M> {
        Env { regions: &self.regions, variables: &self.variables, state: self.state }
    }

    async fn expand(&mut self, pointer: Pointer) -> Result<Option<ResolvedRegion>, DereferenceError> {
        match pointer {
            Pointer::Region(raw) => {
                tracing::trace!(name = ?raw.name, location = ?raw.location, "expanding region");
                let adjusted = adjust_for_stack_delta(&raw, self.stack_delta);
                let resolved = resolve(&adjusted, &mut self.regions, &self.variables, self.state).await?;
                if resolved.name.is_some() {
                    self.work.push(Memo::SaveRegions(vec![resolved.clone()]));
                }
                Ok(Some(resolved))
            }
            Pointer::Group(children) => {
                tracing::trace!(len = children.len(), "expanding group");
                for child in children.into_iter().rev() {
                    self.work.push(Memo::DereferencePointer(child));
                }
                Ok(None)
            }
            Pointer::List(spec) => {
                let count = evaluate(&spec.count, &self.env()).await?;
                let count = count.as_uint().to_u64().unwrap_or(u64::MAX);
                tracing::debug!(each = %spec.each, count, "expanding list");
                for i in (0..count).rev() {
                    self.work.push(Memo::DereferencePointer((*spec.is).clone()));
                    self.work.push(Memo::SaveVariables(vec![(spec.each.clone(), Data::from_int(i))]));
                }
                Ok(None)
            }
            Pointer::Conditional { condition, then, otherwise } => {
                let condition = evaluate(&condition, &self.env()).await?;
                let taken = !condition.as_uint().eq(&0u32.into());
                tracing::trace!(taken, "expanding conditional");
                if taken {
                    self.work.push(Memo::DereferencePointer(*then));
                } else if let Some(otherwise) = otherwise {
                    self.work.push(Memo::DereferencePointer(*otherwise));
                }
                Ok(None)
            }
            Pointer::Scope { define, body } => {
                tracing::trace!(bindings = define.len(), "expanding scope");
                let mut scoped = self.variables.clone();
                let mut bindings = Vec::with_capacity(define.len());
                for (name, expr) in define {
                    let env = Env { regions: &self.regions, variables: &scoped, state: self.state };
                    let value = evaluate(&expr, &env).await?;
                    scoped.bind(name.clone(), value.clone());
                    bindings.push((name, value));
                }
                self.work.push(Memo::DereferencePointer(*body));
                self.work.push(Memo::SaveVariables(bindings));
                Ok(None)
            }
            Pointer::Reference { template } => {
                tracing::debug!(template = %template, "expanding template reference");
                let found = self
                    .templates
                    .get(&template)
                    .ok_or_else(|| DereferenceError::UnknownTemplate(template.clone()))?;
                let missing: Vec<Identifier> = found
                    .expect
                    .iter()
                    .filter(|name| !self.variables.contains(name))
                    .cloned()
                    .collect();
                if !missing.is_empty() {
                    return Err(DereferenceError::MissingTemplateVariables { template, missing });
                }
                self.work.push(Memo::DereferencePointer((*found.for_).clone()));
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethdebug_machine::{Calldata, Code, Memory, Returndata, Storage, Transient};
    use ethdebug_pointer::{Expression, Location, Region, Template};
    use num_bigint::BigUint;
    use std::collections::HashMap;

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

    async fn drain(mut driver: Driver<'_, NullState>) -> Result<Vec<ResolvedRegion>, DereferenceError> {
        let mut out = Vec::new();
        while let Some(region) = driver.step().await? {
            out.push(region);
        }
        Ok(out)
    }

    #[tokio::test]
    async fn a_list_emits_regions_in_index_order_and_the_index_survives_in_the_regions_index() {
        let pointer = Pointer::List(ethdebug_pointer::ListSpec {
            count: Expression::literal_int(3u32),
            each: Identifier::new("i").unwrap(),
            is: Box::new(Pointer::Region(Region {
                location: Location::Stack,
                name: Some(Identifier::new("slot_i").unwrap()),
                slot: Some(Expression::variable("i").unwrap()),
                offset: None,
                length: None,
            })),
        });
        let driver = Driver::new(Arc::new(pointer), Arc::new(HashMap::new()), 0, &NullState).await;
        let regions = drain(driver).await.unwrap();
        let slots: Vec<_> = regions.iter().map(|r| r.slot.clone().unwrap()).collect();
        assert_eq!(slots, vec![Data::from_int(0u32), Data::from_int(1u32), Data::from_int(2u32)]);
    }

    #[tokio::test]
    async fn a_group_preserves_declaration_order() {
        let pointer = Pointer::Group(vec![
            Pointer::Region(Region {
                location: Location::Memory,
                name: Some(Identifier::new("a").unwrap()),
                slot: None,
                offset: Some(Expression::literal_int(1u32)),
                length: None,
            }),
            Pointer::Region(Region {
                location: Location::Memory,
                name: Some(Identifier::new("b").unwrap()),
                slot: None,
                offset: Some(Expression::literal_int(2u32)),
                length: None,
            }),
        ]);
        let driver = Driver::new(Arc::new(pointer), Arc::new(HashMap::new()), 0, &NullState).await;
        let regions = drain(driver).await.unwrap();
        assert_eq!(regions[0].offset, Some(Data::from_int(1u32)));
        assert_eq!(regions[1].offset, Some(Data::from_int(2u32)));
    }

    #[tokio::test]
    async fn template_reference_checks_expected_variables() {
        let mut templates = HashMap::new();
        templates.insert(
            Identifier::new("t").unwrap(),
            Template {
                expect: vec![Identifier::new("base").unwrap()],
                for_: Box::new(Pointer::Region(Region {
                    location: Location::Memory,
                    name: None,
                    slot: None,
                    offset: Some(Expression::variable("base").unwrap()),
                    length: None,
                })),
            },
        );
        let pointer = Pointer::Reference { template: Identifier::new("t").unwrap() };
        let driver = Driver::new(Arc::new(pointer), Arc::new(templates), 0, &NullState).await;
        let err = drain(driver).await.unwrap_err();
        assert!(matches!(err, DereferenceError::MissingTemplateVariables { .. }));
    }

    #[tokio::test]
    async fn scope_definitions_see_earlier_siblings_in_the_same_scope() {
        let pointer = Pointer::Scope {
            define: vec![
                (Identifier::new("a").unwrap(), Expression::literal_int(1u32)),
                (
                    Identifier::new("b").unwrap(),
                    Expression::Sum(vec![Expression::variable("a").unwrap(), Expression::literal_int(1u32)]),
                ),
            ],
            body: Box::new(Pointer::Region(Region {
                location: Location::Memory,
                name: None,
                slot: None,
                offset: Some(Expression::variable("b").unwrap()),
                length: None,
            })),
        };
        let driver = Driver::new(Arc::new(pointer), Arc::new(HashMap::new()), 0, &NullState).await;
        let regions = drain(driver).await.unwrap();
        assert_eq!(regions[0].offset, Some(Data::from_int(2u32)));
    }
}
