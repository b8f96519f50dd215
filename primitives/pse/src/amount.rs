// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

use codec::{Decode, Encode};
use num_bigint::BigUint;
use num_traits::Zero;
use scale_info::TypeInfo;
use sp_std::vec::Vec;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// An arbitrary-precision, non-negative integer amount.
///
/// Treasury balances handled by the PSE module are not bounded by a 64-bit
/// (or even 128-bit) native integer, so this wraps [`BigUint`] rather than
/// the usual FRAME `Balance: AtLeast32BitUnsigned` associated type. This is
/// the same idea as `fvm_shared::econ::TokenAmount` wrapping `BigInt` for
/// Filecoin's actor reward accounting, specialised to non-negative values.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(BigUint);

impl Amount {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn from_u128(value: u128) -> Self {
        Self(BigUint::from(value))
    }

    /// Converts to `u128`, failing if the amount does not fit.
    ///
    /// This is the one narrowing point where an arbitrary-precision PSE
    /// amount must cross into the runtime's native `Currency` balance type
    /// to actually move funds; every other `Amount` operation stays at full
    /// precision.
    pub fn to_u128(&self) -> Option<u128> {
        use num_traits::ToPrimitive;
        self.0.to_u128()
    }

    pub fn checked_add(&self, other: &Self) -> Self {
        Self(&self.0 + &other.0)
    }

    /// Returns `None` if `other > self`.
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if other.0 > self.0 {
            None
        } else {
            Some(Self(&self.0 - &other.0))
        }
    }

    pub fn saturating_mul_u64(&self, factor: u64) -> Self {
        Self(&self.0 * BigUint::from(factor))
    }

    /// `self * numerator / denominator`, truncated toward zero (the only
    /// rounding mode this module ever uses, per the distribution algorithm).
    ///
    /// Returns `Amount::zero()` if `denominator` is zero; callers are
    /// expected to have already checked that invariant (a zero total score
    /// is handled before this is ever called).
    pub fn mul_div_trunc(&self, numerator: &Self, denominator: &Self) -> Self {
        if denominator.is_zero() {
            return Self::zero();
        }
        Self(&self.0 * &numerator.0 / &denominator.0)
    }

    fn to_bytes_be(&self) -> Vec<u8> {
        self.0.to_bytes_be()
    }

    fn from_bytes_be(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes))
    }
}

impl core::ops::Add for Amount {
    type Output = Amount;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl Encode for Amount {
    fn encode(&self) -> Vec<u8> {
        self.to_bytes_be().encode()
    }
}

impl codec::EncodeLike for Amount {}

impl Decode for Amount {
    fn decode<I: codec::Input>(input: &mut I) -> Result<Self, codec::Error> {
        let bytes = Vec::<u8>::decode(input)?;
        Ok(Self::from_bytes_be(&bytes))
    }
}

impl TypeInfo for Amount {
    type Identity = Self;

    fn type_info() -> scale_info::Type {
        scale_info::Type::builder()
            .path(scale_info::Path::new("Amount", module_path!()))
            .composite(scale_info::build::Fields::unnamed().field(|f| f.ty::<Vec<u8>>()))
    }
}

#[cfg(feature = "std")]
impl Serialize for Amount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_str_radix(10))
    }
}

#[cfg(feature = "std")]
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = std::string::String::deserialize(deserializer)?;
        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(Self)
            .ok_or_else(|| serde::de::Error::custom("invalid decimal amount"))
    }
}
