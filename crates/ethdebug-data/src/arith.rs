//! The five arithmetic operators over [`Data`] operand lists.
//!
//! Every operator returns a result padded to the maximum byte length of its
//! operands (`Data::pad_until_at_least`), so that e.g. summing two 32-byte words
//! never silently shrinks to a narrower representation.

use crate::{Data, DataError};
use num_bigint::BigUint;

fn max_len(operands: &[Data]) -> usize {
    operands.iter().map(Data::len).max().unwrap_or(0)
}

/// `$sum`: left-to-right addition, identity 0 for zero operands.
pub fn sum(operands: &[Data]) -> Data {
    let total: BigUint = operands.iter().map(Data::as_uint).sum();
    Data::from_int(total).pad_until_at_least(max_len(operands))
}

/// `$product`: left-to-right multiplication, identity 1 for zero operands.
pub fn product(operands: &[Data]) -> Data {
    let total = operands
        .iter()
        .map(Data::as_uint)
        .fold(BigUint::from(1u32), |acc, v| acc * v);
    Data::from_int(total).pad_until_at_least(max_len(operands))
}

/// `$difference`: `operands[0] - operands[1]`, saturating at zero. Requires exactly 2 operands.
pub fn difference(operands: &[Data]) -> Result<Data, DataError> {
    let [a, b] = require_pair(operands, "$difference")?;
    let (a_uint, b_uint) = (a.as_uint(), b.as_uint());
    let result = if a_uint >= b_uint {
        a_uint - b_uint
    } else {
        BigUint::ZERO
    };
    Ok(Data::from_int(result).pad_until_at_least(max_len(operands)))
}

/// `$quotient`: `operands[0] / operands[1]`. Requires exactly 2 operands and a nonzero divisor.
pub fn quotient(operands: &[Data]) -> Result<Data, DataError> {
    let [a, b] = require_pair(operands, "$quotient")?;
    let b_uint = b.as_uint();
    if b_uint == BigUint::ZERO {
        return Err(DataError::DivisionByZero);
    }
    Ok(Data::from_int(a.as_uint() / b_uint).pad_until_at_least(max_len(operands)))
}

/// `$remainder`: `operands[0] % operands[1]`. Requires exactly 2 operands and a nonzero divisor.
pub fn remainder(operands: &[Data]) -> Result<Data, DataError> {
    let [a, b] = require_pair(operands, "$remainder")?;
    let b_uint = b.as_uint();
    if b_uint == BigUint::ZERO {
        return Err(DataError::DivisionByZero);
    }
    Ok(Data::from_int(a.as_uint() % b_uint).pad_until_at_least(max_len(operands)))
}

fn require_pair<'a>(operands: &'a [Data], operator: &'static str) -> Result<[&'a Data; 2], DataError> {
    match operands {
        [a, b] => Ok([a, b]),
        _ => Err(DataError::InvalidArithmetic {
            operator,
            got: operands.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(n: u64) -> Data {
        Data::from_int(n as u32)
    }

    #[test]
    fn sum_of_no_operands_is_zero() {
        assert_eq!(sum(&[]), Data::zero());
    }

    #[test]
    fn sum_matches_the_worked_example() {
        // 42 + 0x1f + 42 + 31 = 146 = 0x92
        let operands = [d(42), Data::from_hex("0x1f").unwrap(), d(42), d(31)];
        assert_eq!(sum(&operands), Data::from_int(146u32));
    }

    #[test]
    fn product_of_no_operands_is_one() {
        assert_eq!(product(&[]), Data::from_int(1u32));
    }

    #[test]
    fn difference_saturates_at_zero() {
        assert_eq!(difference(&[d(42), d(31)]).unwrap(), d(11));
        assert_eq!(difference(&[d(31), d(42)]).unwrap(), Data::from_bytes(vec![0x00]));
    }

    #[test]
    fn difference_rejects_wrong_arity() {
        assert!(matches!(
            difference(&[d(1), d(2), d(3)]),
            Err(DataError::InvalidArithmetic { operator: "$difference", got: 3 })
        ));
    }

    #[test]
    fn quotient_rejects_division_by_zero() {
        assert_eq!(quotient(&[d(42), d(0)]), Err(DataError::DivisionByZero));
    }

    #[test]
    fn remainder_rejects_division_by_zero() {
        assert_eq!(remainder(&[d(42), d(0)]), Err(DataError::DivisionByZero));
    }

    #[test]
    fn result_length_is_at_least_the_max_operand_length() {
        let wide = Data::zero().pad_until_at_least(32);
        let narrow = d(1);
        assert_eq!(sum(&[wide.clone(), narrow.clone()]).len(), 32);
        assert_eq!(product(&[wide, narrow]).len(), 32);
    }

    proptest::proptest! {
        #[test]
        fn sum_length_is_at_least_the_max_operand_length(a: u32, b: u32, pad in 0usize..64) {
            let operands = [d(a as u64).pad_until_at_least(pad), d(b as u64)];
            let max_len = operands.iter().map(Data::len).max().unwrap();
            prop_assert!(sum(&operands).len() >= max_len);
        }

        #[test]
        fn product_length_is_at_least_the_max_operand_length(a: u32, b: u32, pad in 0usize..64) {
            let operands = [d(a as u64).pad_until_at_least(pad), d(b as u64)];
            let max_len = operands.iter().map(Data::len).max().unwrap();
            prop_assert!(product(&operands).len() >= max_len);
        }

        #[test]
        fn difference_never_underflows(a: u32, b: u32) {
            let result = difference(&[d(a as u64), d(b as u64)]).unwrap();
            let expected: u64 = if a >= b { (a - b) as u64 } else { 0 };
            prop_assert_eq!(result.as_uint(), BigUint::from(expected));
        }
    }
}
