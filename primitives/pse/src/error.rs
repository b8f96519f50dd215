// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

/// Internal failure of a single distribution attempt.
///
/// This is not a dispatch error: it never reaches an extrinsic caller. The
/// Distributor returns it to the EndBlock Orchestrator, which logs it and
/// latches the kill-switch; it never causes a partial state mutation
/// itself, since the Distributor always runs inside a storage transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DistributionError {
    /// A clearing account's balance could not cover its allocation.
    InsufficientClearingFunds,
    /// A non-community clearing account has no recipient mapping in Params.
    MissingMapping,
    /// A bank-ledger transfer failed for a reason opaque to this module.
    TransferFailed,
    /// An arithmetic invariant that should be impossible was violated.
    InternalArithmetic,
}

impl core::fmt::Display for DistributionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            DistributionError::InsufficientClearingFunds => "insufficient clearing account funds",
            DistributionError::MissingMapping => "missing clearing account mapping",
            DistributionError::TransferFailed => "bank ledger transfer failed",
            DistributionError::InternalArithmetic => "internal arithmetic invariant violated",
        };
        f.write_str(msg)
    }
}
