// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

use codec::{Decode, Encode};
use num_bigint::BigInt;
use scale_info::TypeInfo;
use sp_std::vec::Vec;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use crate::Amount;

/// An arbitrary-precision fixed-point rational, used for percentages and
/// ratios in Params/governance payloads (e.g. a reported delegator share).
///
/// `value = numerator / 10^scale`. All multiplication truncates toward
/// zero, matching the rest of this module's integer-division discipline;
/// there is no rounding mode configurable here on purpose.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decimal {
    numerator: BigInt,
    scale: u32,
}

impl Decimal {
    pub fn new(numerator: i128, scale: u32) -> Self {
        Self {
            numerator: BigInt::from(numerator),
            scale,
        }
    }

    pub fn from_ratio(num: u128, den: u128, scale: u32) -> Self {
        let pow: BigInt = num_bigint::BigUint::from(10u32).pow(scale).into();
        let scaled = BigInt::from(num) * pow / BigInt::from(den.max(1));
        Self {
            numerator: scaled,
            scale,
        }
    }

    /// Multiplies an [`Amount`] by this decimal, truncating toward zero.
    pub fn checked_mul_amount(&self, amount: &Amount) -> Option<Amount> {
        let amount_u128 = amount.to_u128()?;
        let scale_pow: BigInt = num_bigint::BigUint::from(10u32).pow(self.scale).into();
        let product = BigInt::from(amount_u128) * &self.numerator / scale_pow;
        if product.sign() == num_bigint::Sign::Minus {
            return None;
        }
        let (_, bytes) = product.to_bytes_be();
        let mut buf = [0u8; 16];
        if bytes.len() > 16 {
            return None;
        }
        buf[16 - bytes.len()..].copy_from_slice(&bytes);
        Some(Amount::from_u128(u128::from_be_bytes(buf)))
    }
}

fn encode_decimal(value: &Decimal) -> Vec<u8> {
    let (sign, bytes) = value.numerator.to_bytes_be();
    let negative = sign == num_bigint::Sign::Minus;
    (negative, bytes, value.scale).encode()
}

fn decode_decimal<I: codec::Input>(input: &mut I) -> Result<Decimal, codec::Error> {
    let (negative, bytes, scale): (bool, Vec<u8>, u32) = Decode::decode(input)?;
    let sign = if negative {
        num_bigint::Sign::Minus
    } else {
        num_bigint::Sign::Plus
    };
    Ok(Decimal {
        numerator: BigInt::from_bytes_be(sign, &bytes),
        scale,
    })
}

impl Encode for Decimal {
    fn encode(&self) -> Vec<u8> {
        encode_decimal(self)
    }
}

impl codec::EncodeLike for Decimal {}

impl Decode for Decimal {
    fn decode<I: codec::Input>(input: &mut I) -> Result<Self, codec::Error> {
        decode_decimal(input)
    }
}

impl TypeInfo for Decimal {
    type Identity = Self;

    fn type_info() -> scale_info::Type {
        scale_info::Type::builder()
            .path(scale_info::Path::new("Decimal", module_path!()))
            .composite(
                scale_info::build::Fields::named()
                    .field(|f| f.ty::<bool>().name("negative"))
                    .field(|f| f.ty::<Vec<u8>>().name("magnitude"))
                    .field(|f| f.ty::<u32>().name("scale")),
            )
    }
}

#[cfg(feature = "std")]
impl Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&std::format!("{}e-{}", self.numerator, self.scale))
    }
}

#[cfg(feature = "std")]
impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only used for human-readable genesis/RPC payloads; accepts the
        // `<int>e-<scale>` form produced by `serialize` above.
        let s = std::string::String::deserialize(deserializer)?;
        let mut parts = s.splitn(2, "e-");
        let num = parts.next().ok_or_else(|| serde::de::Error::custom("missing numerator"))?;
        let scale = parts
            .next()
            .ok_or_else(|| serde::de::Error::custom("missing scale"))?
            .parse::<u32>()
            .map_err(serde::de::Error::custom)?;
        let numerator = num
            .parse::<i128>()
            .map_err(serde::de::Error::custom)?;
        Ok(Decimal::new(numerator, scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_amount_truncates_toward_zero() {
        // 0.5 * 3 = 1 (truncated), not 1.5 rounded.
        let half = Decimal::from_ratio(1, 2, 4);
        let result = half.checked_mul_amount(&Amount::from_u128(3)).unwrap();
        assert_eq!(result, Amount::from_u128(1));
    }

    #[test]
    fn encode_decode_round_trips() {
        let d = Decimal::new(-12345, 3);
        let encoded = d.encode();
        let decoded = Decimal::decode(&mut &encoded[..]).unwrap();
        assert_eq!(d, decoded);
    }
}
