use crate::error::PointerError;
use crate::expression::Expression;
use crate::identifier::Identifier;
use crate::region::Region;
use serde::Deserialize;
use serde_json::Value as Json;

/// `{count, each, is}`: expands `is` once per index `0..count`, binding `each`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSpec {
    pub count: Expression,
    pub each: Identifier,
    pub is: Box<Pointer>,
}

/// A pointer collection node. `Region` is the only leaf; every other variant
/// expands into further pointers during dereference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pointer {
    Region(Region),
    Group(Vec<Pointer>),
    List(ListSpec),
    Conditional {
        condition: Expression,
        then: Box<Pointer>,
        otherwise: Option<Box<Pointer>>,
    },
    /// `define` is evaluated in declaration order; later definitions may
    /// reference earlier ones, so this is a `Vec`, not a map.
    Scope {
        define: Vec<(Identifier, Expression)>,
        body: Box<Pointer>,
    },
    Reference {
        template: Identifier,
    },
}

impl<'de> Deserialize<'de> for Pointer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Json::deserialize(deserializer)?;
        parse_pointer(&value).map_err(serde::de::Error::custom)
    }
}

fn parse_pointer(value: &Json) -> Result<Pointer, PointerError> {
    let Json::Object(map) = value else {
        return Err(PointerError::UnrecognizedPointer(value.to_string()));
    };

    if map.contains_key("location") {
        let region: Region =
            serde_json::from_value(value.clone()).map_err(|e| PointerError::UnrecognizedPointer(e.to_string()))?;
        return Ok(Pointer::Region(region));
    }
    if let Some(Json::Array(items)) = map.get("group") {
        return Ok(Pointer::Group(items.iter().map(parse_pointer).collect::<Result<_, _>>()?));
    }
    if let Some(list) = map.get("list") {
        return Ok(Pointer::List(parse_list(list)?));
    }
    if let Some(condition) = map.get("if") {
        let condition = parse_expression_value(condition)?;
        let then = Box::new(parse_pointer(
            map.get("then")
                .ok_or_else(|| PointerError::UnrecognizedPointer("conditional missing \"then\"".into()))?,
        )?);
        let otherwise = map.get("else").map(parse_pointer).transpose()?.map(Box::new);
        return Ok(Pointer::Conditional { condition, then, otherwise });
    }
    if let (Some(Json::Object(define)), Some(body)) = (map.get("define"), map.get("in")) {
        let define = define
            .iter()
            .map(|(k, v)| Ok((Identifier::new(k.clone())?, parse_expression_value(v)?)))
            .collect::<Result<_, PointerError>>()?;
        return Ok(Pointer::Scope {
            define,
            body: Box::new(parse_pointer(body)?),
        });
    }
    if let Some(Json::String(template)) = map.get("template") {
        return Ok(Pointer::Reference {
            template: Identifier::new(template.clone())?,
        });
    }

    Err(PointerError::UnrecognizedPointer(value.to_string()))
}

fn parse_list(value: &Json) -> Result<ListSpec, PointerError> {
    let Json::Object(map) = value else {
        return Err(PointerError::UnrecognizedPointer(value.to_string()));
    };
    let count = parse_expression_value(
        map.get("count")
            .ok_or_else(|| PointerError::UnrecognizedPointer("list missing \"count\"".into()))?,
    )?;
    let Some(Json::String(each)) = map.get("each") else {
        return Err(PointerError::UnrecognizedPointer("list missing \"each\"".into()));
    };
    let is = map
        .get("is")
        .ok_or_else(|| PointerError::UnrecognizedPointer("list missing \"is\"".into()))?;
    Ok(ListSpec {
        count,
        each: Identifier::new(each.clone())?,
        is: Box::new(parse_pointer(is)?),
    })
}

fn parse_expression_value(value: &Json) -> Result<Expression, PointerError> {
    serde_json::from_value(value.clone()).map_err(|e| PointerError::UnrecognizedPointer(e.to_string()))
}
