// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

#![cfg_attr(not(feature = "std"), no_std)]

//! Primitives shared between the PSE (Proof-of-Stake-Engagement) pallet, its
//! runtime API, and any runtime that wires the pallet in.
//!
//! This crate carries no Substrate storage macros of its own; it only
//! defines the arbitrary-precision numeric types, the clearing-account
//! vocabulary, and the small collaborator traits the pallet is generic
//! over, the same way `xp-mining-common` / `xp-mining-staking` carry the
//! shared vocabulary for the staking pallet.

mod amount;
mod clearing;
mod decimal;
mod error;
mod schedule;
mod traits;

pub use amount::Amount;
pub use clearing::{ClearingAccount, ClearingAccountAllocation, ClearingAccountMapping};
pub use decimal::Decimal;
pub use error::DistributionError;
pub use schedule::{Params, ScheduledDistribution};
pub use traits::{CommunityPoolSink, PseObserver};

/// Unix timestamp, seconds since epoch.
pub type UnixSeconds = u64;

/// Sort a vector of `(K, V)` pairs by the SCALE encoding of `K`.
///
/// FRAME storage-map iteration order is a function of the hasher used for
/// the key, not insertion order, so any "canonical address order" iteration
/// that this module performs re-sorts explicitly rather than relying on the
/// trie order. Bytewise order over the SCALE encoding of an `AccountId32`
/// (or any fixed-width account id) matches ordering by canonical textual
/// encoding, since SS58/hex encodings are monotonic in the underlying bytes
/// for same-length identifiers.
pub fn sort_by_canonical_key<K: codec::Encode, V>(mut entries: sp_std::vec::Vec<(K, V)>) -> sp_std::vec::Vec<(K, V)> {
    entries.sort_by(|(a, _), (b, _)| a.encode().cmp(&b.encode()));
    entries
}
