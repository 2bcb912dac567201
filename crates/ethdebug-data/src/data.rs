use crate::error::DataError;
use num_bigint::BigUint;
use std::fmt;

/// A variable-length byte sequence interpreted big-endian as an unsigned integer.
///
/// Leading zero bytes are preserved rather than canonicalized: two `Data` values
/// that differ only in leading zeros compare unequal even though they are
/// arithmetically equivalent. This matches the semantics every machine-state read
/// and region property carries in the original ethdebug implementation, where a
/// region's declared `length` is meaningful independent of its numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Data(Vec<u8>);

impl Data {
    /// The empty byte string, equal to the integer zero.
    pub fn zero() -> Self {
        Data(Vec::new())
    }

    /// The minimal big-endian encoding of `value`. `from_int(0)` is the empty string.
    pub fn from_int(value: impl Into<BigUint>) -> Self {
        let value: BigUint = value.into();
        if value == BigUint::ZERO {
            return Data::zero();
        }
        Data(value.to_bytes_be())
    }

    /// Parses a `0x`-prefixed hex string into its raw bytes.
    pub fn from_hex(hex_str: &str) -> Result<Self, DataError> {
        let Some(stripped) = hex_str.strip_prefix("0x") else {
            return Err(DataError::InvalidHex(hex_str.to_string()));
        };
        let digits = if stripped.len() % 2 == 1 {
            format!("0{stripped}")
        } else {
            stripped.to_string()
        };
        let bytes = alloy_primitives::hex::decode(digits)
            .map_err(|_| DataError::InvalidHex(hex_str.to_string()))?;
        Ok(Data(bytes))
    }

    /// Wraps raw bytes directly, as returned by a machine-state read or a hash.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Data(bytes.into())
    }

    /// The big-endian unsigned integer this `Data` encodes.
    pub fn as_uint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }

    /// The `0x`-prefixed lowercase hex encoding of the raw bytes.
    pub fn to_hex(&self) -> String {
        format!("0x{}", alloy_primitives::hex::encode(&self.0))
    }

    /// The raw bytes, in big-endian order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes in this `Data`.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this `Data` has zero bytes (note: distinct from being numerically zero
    /// once padded; `Data::from_bytes([0])` is not empty but is numerically zero).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Left-pads with zero bytes until at least `n` bytes long; returns `self`
    /// unchanged (not merely equal) if already long enough.
    pub fn pad_until_at_least(&self, n: usize) -> Self {
        if self.0.len() >= n {
            return self.clone();
        }
        self.resize_to(n)
    }

    /// Left-pads or left-truncates to exactly `n` bytes.
    pub fn resize_to(&self, n: usize) -> Self {
        if self.0.len() == n {
            return self.clone();
        }
        if self.0.len() < n {
            let mut out = vec![0u8; n - self.0.len()];
            out.extend_from_slice(&self.0);
            Data(out)
        } else {
            Data(self.0[self.0.len() - n..].to_vec())
        }
    }

    /// Appends `others` after `self`, without padding either side.
    pub fn concat(&self, others: &[Data]) -> Self {
        let mut out = self.0.clone();
        for other in others {
            out.extend_from_slice(&other.0);
        }
        Data(out)
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Data[{}]", self.to_hex())
    }
}
