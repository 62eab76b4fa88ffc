//! Cliff-then-linear release curve.

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{helpers_128bit::multiply_by_rational_with_rounding, Rounding, RuntimeDebug};

/// Why a set of schedule parameters was rejected.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum ScheduleError {
    CliffBeforeBegin,
    EndBeforeCliff,
}

/// Immutable parameters of a single-beneficiary vesting plan.
///
/// Timestamps are unix seconds. `begin <= cliff <= end` holds for every constructed value.
#[derive(Clone, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub struct VestingSchedule<AccountId> {
    pub beneficiary: AccountId,
    pub total: u128,
    pub begin: u64,
    pub cliff: u64,
    pub end: u64,
}

impl<AccountId> VestingSchedule<AccountId> {
    pub fn new(
        beneficiary: AccountId,
        total: u128,
        begin: u64,
        cliff: u64,
        end: u64,
    ) -> Result<Self, ScheduleError> {
        if cliff < begin {
            return Err(ScheduleError::CliffBeforeBegin);
        }
        if end < cliff {
            return Err(ScheduleError::EndBeforeCliff);
        }
        Ok(Self { beneficiary, total, begin, cliff, end })
    }

    /// Amount vested at `now`.
    ///
    /// Zero before the cliff, `total` from `end` on, and in between the straight line from
    /// `begin` to `end`, rounded down. The cliff only gates release; it does not move the origin
    /// of the line.
    pub fn vested_amount(&self, now: u64) -> u128 {
        if now < self.cliff {
            return 0;
        }
        if now >= self.end {
            return self.total;
        }
        // begin <= cliff <= now < end
        let elapsed = u128::from(now - self.begin);
        let duration = u128::from(self.end - self.begin);
        multiply_by_rational_with_rounding(self.total, elapsed, duration, Rounding::Down)
            .unwrap_or(self.total)
            .min(self.total)
    }

    /// Vested but not yet released at `now`.
    pub fn releasable(&self, released: u128, now: u64) -> u128 {
        self.vested_amount(now).saturating_sub(released)
    }
}
