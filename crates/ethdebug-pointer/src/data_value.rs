use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// A schema-constrained non-negative integer literal, as it appears in a
/// `Literal` expression before being turned into [`ethdebug_data::Data`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataValue(#[serde(with = "biguint_decimal")] BigUint);

impl DataValue {
    pub fn new(value: impl Into<BigUint>) -> Self {
        DataValue(value.into())
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

mod biguint_decimal {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        value.to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        match raw {
            serde_json::Value::Number(n) => n
                .as_u64()
                .map(BigUint::from)
                .ok_or_else(|| serde::de::Error::custom(format!("not a non-negative integer: {n}"))),
            serde_json::Value::String(s) => s
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("not a non-negative integer: {s:?}"))),
            other => Err(serde::de::Error::custom(format!(
                "expected a number or numeric string, got {other}"
            ))),
        }
    }
}
