// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

//! The Schedule Store: an ordered queue of future timestamped distributions.
//!
//! Governance is the sole mutator, and mutates by wholesale replacement
//! (`do_upsert_schedule`) rather than incremental insert/remove, keeping a
//! proposal auditable as a single payload instead of a sequence of diffs.

use sp_std::{collections::btree_set::BTreeSet, vec::Vec};

use crate::*;

impl<T: Config> Pallet<T> {
    /// Replaces the schedule wholesale. Rejects the whole list if any
    /// timestamp is not strictly in the future, or if any timestamp repeats.
    pub(crate) fn do_upsert_schedule(schedule: Vec<ScheduledDistribution>) -> Result<(), ()> {
        let now = Self::now();
        let mut seen = BTreeSet::new();
        for entry in &schedule {
            if entry.timestamp <= now || !seen.insert(entry.timestamp) {
                return Err(());
            }
        }

        let stale: Vec<UnixSeconds> = Schedule::<T>::iter_keys().collect();
        for timestamp in stale {
            Schedule::<T>::remove(timestamp);
        }
        for entry in schedule {
            Schedule::<T>::insert(entry.timestamp, entry.allocations);
        }
        Ok(())
    }

    /// The earliest entry whose timestamp is at most `now`, if any.
    pub fn peek_due(now: UnixSeconds) -> Option<(UnixSeconds, Vec<ClearingAccountAllocation>)> {
        Schedule::<T>::iter()
            .filter(|(timestamp, _)| *timestamp <= now)
            .min_by_key(|(timestamp, _)| *timestamp)
    }

    /// The full schedule, in strictly ascending timestamp order.
    ///
    /// Unlike the address-keyed stores, sorting here is a plain numeric sort
    /// on the timestamp itself rather than on its SCALE encoding: SCALE
    /// encodes integers little-endian, which is not byte-order-monotonic.
    pub fn list() -> Vec<ScheduledDistribution> {
        let mut entries: Vec<ScheduledDistribution> = Schedule::<T>::iter()
            .map(|(timestamp, allocations)| ScheduledDistribution {
                timestamp,
                allocations,
            })
            .collect();
        entries.sort_by_key(|entry| entry.timestamp);
        entries
    }
}
