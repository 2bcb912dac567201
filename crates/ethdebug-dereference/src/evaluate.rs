use crate::error::DereferenceError;
use crate::reader;
use crate::regions_index::RegionsIndex;
use crate::variables::Variables;
use async_recursion::async_recursion;
use ethdebug_data::{difference, product, quotient, remainder, sum, Data};
use ethdebug_machine::MachineState;
use ethdebug_pointer::{Expression, Literal, RegionProperty};

/// The read-only context an expression is evaluated against: the regions
/// visible so far, the current variable bindings, and the machine state
/// driving any `$read`.
pub struct Env<'a, M: MachineState> {
    pub regions: &'a RegionsIndex,
    pub variables: &'a Variables,
    pub state: &'a M,
}

/// Recursively interprets an expression into a concrete [`Data`] value.
/// Operands are evaluated strictly left-to-right; a parent never starts
/// composing its result before every child has completed.
#[async_recursion]
pub async fn evaluate<M>(expr: &Expression, env: &Env<'_, M>) -> Result<Data, DereferenceError>
where
    M: MachineState + Sync,
{
    match expr {
        Expression::Literal(Literal::Integer(value)) => Ok(Data::from_int(value.as_biguint().clone())),
        Expression::Literal(Literal::Hex(hex)) => Ok(Data::from_hex(hex)?),
        Expression::WordsizeConstant => Ok(Data::from_int(32u32)),
        Expression::Variable(name) => env
            .variables
            .get(name)
            .cloned()
            .ok_or_else(|| DereferenceError::UnknownVariable(name.clone())),
        Expression::Sum(operands) => Ok(sum(&evaluate_all(operands, env).await?)),
        Expression::Product(operands) => Ok(product(&evaluate_all(operands, env).await?)),
        Expression::Difference(operands) => Ok(difference(&evaluate_all(operands, env).await?)?),
        Expression::Quotient(operands) => Ok(quotient(&evaluate_all(operands, env).await?)?),
        Expression::Remainder(operands) => Ok(remainder(&evaluate_all(operands, env).await?)?),
        Expression::WordsizedResize(inner) => Ok(evaluate(inner, env).await?.resize_to(32)),
        Expression::SizedResize(size, inner) => {
            if *size <= 0 {
                return Err(DereferenceError::InvalidResize(*size));
            }
            Ok(evaluate(inner, env).await?.resize_to(*size as usize))
        }
        Expression::Keccak256(operands) => {
            let parts = evaluate_all(operands, env).await?;
            let concatenated = Data::zero().concat(&parts);
            let digest = alloy_primitives::keccak256(concatenated.as_bytes());
            Ok(Data::from_bytes(digest.0.to_vec()))
        }
        Expression::Lookup(property, reference) => {
            let region = env
                .regions
                .lookup(reference)
                .ok_or_else(|| DereferenceError::RegionNotFound(reference.to_string()))?;
            let field = match property {
                RegionProperty::Slot => &region.slot,
                RegionProperty::Offset => &region.offset,
                RegionProperty::Length => &region.length,
            };
            field.clone().ok_or_else(|| DereferenceError::PropertyAbsent {
                region: reference.to_string(),
                property: *property,
            })
        }
        Expression::Read(reference) => {
            let region = env
                .regions
                .lookup(reference)
                .ok_or_else(|| DereferenceError::RegionNotFound(reference.to_string()))?
                .clone();
            reader::read(&region, env.state).await
        }
    }
}

async fn evaluate_all<M>(exprs: &[Expression], env: &Env<'_, M>) -> Result<Vec<Data>, DereferenceError>
where
    M: MachineState + Sync,
{
    let mut out = Vec::with_capacity(exprs.len());
    for expr in exprs {
        out.push(evaluate(expr, env).await?);
    }
    Ok(out)
}
