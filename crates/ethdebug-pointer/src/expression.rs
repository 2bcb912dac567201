use crate::data_value::DataValue;
use crate::error::PointerError;
use crate::identifier::{Identifier, Reference, THIS};
use num_bigint::BigUint;
use serde::Deserialize;
use serde_json::Value as Json;

/// An ordered list of sub-expressions, as consumed by arithmetic and `$keccak256`.
pub type Operands = Vec<Expression>;

/// A literal value: either a decimal/JSON integer or a `0x`-prefixed hex string.
/// These are kept distinct (rather than collapsed to a single integer) because
/// hex literals preserve their exact byte length (leading zeros included) while
/// integer literals always encode to the minimal byte count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Integer(DataValue),
    Hex(String),
}

/// The `.slot` / `.offset` / `.length` property a `Lookup` expression reads
/// off a (possibly still-resolving) region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionProperty {
    Slot,
    Offset,
    Length,
}

impl RegionProperty {
    pub fn discriminator(self) -> &'static str {
        match self {
            RegionProperty::Slot => ".slot",
            RegionProperty::Offset => ".offset",
            RegionProperty::Length => ".length",
        }
    }
}

/// The pointer expression AST: a sum type dispatched, at the JSON boundary, by
/// which discriminator key is present (`$sum`, `.slot`, `$read`, ...) or, for
/// literals/variables/the `$wordsize` constant, by the shape of a bare JSON
/// scalar. Evaluation semantics for each variant live with the evaluator that
/// interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Literal(Literal),
    /// The only defined constant: `$wordsize`, evaluating to 32.
    WordsizeConstant,
    Variable(Identifier),
    Sum(Operands),
    Difference(Operands),
    Product(Operands),
    Quotient(Operands),
    Remainder(Operands),
    WordsizedResize(Box<Expression>),
    SizedResize(i64, Box<Expression>),
    Keccak256(Operands),
    Lookup(RegionProperty, Reference),
    Read(Reference),
}

impl Expression {
    /// Convenience constructor used heavily by tests and by callers building
    /// pointers programmatically rather than parsing them from JSON.
    pub fn literal_int(value: impl Into<BigUint>) -> Self {
        Expression::Literal(Literal::Integer(DataValue::new(value)))
    }

    pub fn literal_hex(hex: impl Into<String>) -> Self {
        Expression::Literal(Literal::Hex(hex.into()))
    }

    pub fn variable(name: &str) -> Result<Self, PointerError> {
        Ok(Expression::Variable(Identifier::new(name)?))
    }
}

impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Json::deserialize(deserializer)?;
        parse_expression(&value).map_err(serde::de::Error::custom)
    }
}

fn parse_expression(value: &Json) -> Result<Expression, PointerError> {
    match value {
        Json::Number(n) => {
            let unsigned = n
                .as_u64()
                .ok_or_else(|| PointerError::UnrecognizedExpression(value.to_string()))?;
            Ok(Expression::literal_int(unsigned))
        }
        Json::String(s) if s == THIS => Err(PointerError::UnrecognizedExpression(
            "$this is only valid as a Lookup/Read reference, not a standalone expression".into(),
        )),
        Json::String(s) if s == "$wordsize" => Ok(Expression::WordsizeConstant),
        Json::String(s) if s.starts_with("0x") => Ok(Expression::literal_hex(s.clone())),
        Json::String(s) => Ok(Expression::Variable(Identifier::new(s.clone())?)),
        Json::Object(map) if map.len() == 1 => {
            let (key, val) = map.iter().next().expect("len == 1");
            parse_keyed_expression(key, val)
        }
        other => Err(PointerError::UnrecognizedExpression(other.to_string())),
    }
}

fn parse_keyed_expression(key: &str, val: &Json) -> Result<Expression, PointerError> {
    match key {
        "$sum" => Ok(Expression::Sum(parse_operands(val)?)),
        "$difference" => Ok(Expression::Difference(parse_operands(val)?)),
        "$product" => Ok(Expression::Product(parse_operands(val)?)),
        "$quotient" => Ok(Expression::Quotient(parse_operands(val)?)),
        "$remainder" => Ok(Expression::Remainder(parse_operands(val)?)),
        "$keccak256" => Ok(Expression::Keccak256(parse_operands(val)?)),
        "$wordsized" => Ok(Expression::WordsizedResize(Box::new(parse_expression(val)?))),
        "$read" => Ok(Expression::Read(parse_reference(val)?)),
        ".slot" => Ok(Expression::Lookup(RegionProperty::Slot, parse_reference(val)?)),
        ".offset" => Ok(Expression::Lookup(RegionProperty::Offset, parse_reference(val)?)),
        ".length" => Ok(Expression::Lookup(RegionProperty::Length, parse_reference(val)?)),
        _ if key.starts_with("$sized") => {
            let digits = &key["$sized".len()..];
            let n: i64 = digits
                .parse()
                .map_err(|_| PointerError::InvalidSizedDiscriminator(key.to_string()))?;
            Ok(Expression::SizedResize(n, Box::new(parse_expression(val)?)))
        }
        _ => Err(PointerError::UnrecognizedExpression(format!(
            "{{\"{key}\": ...}}"
        ))),
    }
}

fn parse_operands(val: &Json) -> Result<Operands, PointerError> {
    let Json::Array(items) = val else {
        return Err(PointerError::UnrecognizedExpression(val.to_string()));
    };
    items.iter().map(parse_expression).collect()
}

fn parse_reference(val: &Json) -> Result<Reference, PointerError> {
    let Json::String(s) = val else {
        return Err(PointerError::UnrecognizedExpression(val.to_string()));
    };
    Ok(Reference::parse(s))
}
