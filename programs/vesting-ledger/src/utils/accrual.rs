//! Cliff + linear accrual.
//! - elapsed = now - start_time (nothing before start)
//! - elapsed < cliff => 0 (the cliff gates claimability, it does not shift the ramp)
//! - otherwise floor(allocated * min(elapsed, period) / period)

use crate::error::VestingError;
use crate::state::VestingSchedule;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VestingPhase {
    PreCliff,
    Vesting,
    FullyVested,
}

pub fn cliff_end(schedule: &VestingSchedule) -> Result<i64, VestingError> {
    schedule
        .start_time
        .checked_add(schedule.cliff_duration)
        .ok_or(VestingError::MathOverflow)
}

pub fn vesting_end(schedule: &VestingSchedule) -> Result<i64, VestingError> {
    schedule
        .start_time
        .checked_add(schedule.vesting_period)
        .ok_or(VestingError::MathOverflow)
}

pub fn phase(schedule: &VestingSchedule, now: i64) -> Result<VestingPhase, VestingError> {
    if now < cliff_end(schedule)? {
        Ok(VestingPhase::PreCliff)
    } else if now < vesting_end(schedule)? {
        Ok(VestingPhase::Vesting)
    } else {
        Ok(VestingPhase::FullyVested)
    }
}

pub fn vested_amount(schedule: &VestingSchedule, now: i64) -> Result<u64, VestingError> {
    if now < schedule.start_time {
        return Ok(0);
    }
    let elapsed = now
        .checked_sub(schedule.start_time)
        .ok_or(VestingError::MathOverflow)?;
    if elapsed < schedule.cliff_duration {
        return Ok(0);
    }
    if elapsed >= schedule.vesting_period {
        return Ok(schedule.allocated_amount);
    }

    // 0 < cliff <= elapsed < period here, so the division is safe.
    let v = (schedule.allocated_amount as u128)
        .checked_mul(elapsed as u128)
        .ok_or(VestingError::MathOverflow)?
        / (schedule.vesting_period as u128);
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

pub fn claimable_amount(schedule: &VestingSchedule, now: i64) -> Result<u64, VestingError> {
    let vested = vested_amount(schedule, now)?;
    Ok(vested.saturating_sub(schedule.claimed_amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;
    use anchor_lang::prelude::Pubkey;

    const DAY: i64 = SECONDS_PER_DAY;
    const START: i64 = 1_700_000_000;

    fn schedule(allocated: u64, cliff_days: i64, period_days: i64) -> VestingSchedule {
        VestingSchedule {
            id: 1,
            recipient: Pubkey::new_unique(),
            allocated_amount: allocated,
            start_time: START,
            cliff_duration: cliff_days * DAY,
            vesting_period: period_days * DAY,
            claimed_amount: 0,
        }
    }

    #[test]
    fn nothing_before_start() {
        let s = schedule(1_000, 30, 360);
        assert_eq!(vested_amount(&s, START - 1).unwrap(), 0);
        assert_eq!(phase(&s, START - 1).unwrap(), VestingPhase::PreCliff);
    }

    #[test]
    fn cliff_suppresses_linear_share() {
        let s = schedule(360_000, 30, 360);
        // 10 days elapsed would be 10_000 linearly, but the cliff hides it.
        assert_eq!(vested_amount(&s, START + 10 * DAY).unwrap(), 0);
        // One second before the cliff boundary.
        assert_eq!(vested_amount(&s, START + 30 * DAY - 1).unwrap(), 0);
        assert_eq!(phase(&s, START + 30 * DAY - 1).unwrap(), VestingPhase::PreCliff);
    }

    #[test]
    fn cliff_boundary_is_inclusive_and_ramp_starts_at_start_time() {
        let s = schedule(360_000, 30, 360);
        assert_eq!(vested_amount(&s, START + 30 * DAY).unwrap(), 30_000);
        assert_eq!(phase(&s, START + 30 * DAY).unwrap(), VestingPhase::Vesting);
    }

    #[test]
    fn linear_share_is_floored() {
        let s = schedule(666_666_666_700_000, 30, 360);
        assert_eq!(
            vested_amount(&s, START + 90 * DAY).unwrap(),
            666_666_666_700_000 * 90 / 360
        );

        let odd = schedule(1_000, 1, 3);
        // 1000 * 2 / 3 = 666.66..
        assert_eq!(vested_amount(&odd, START + 2 * DAY).unwrap(), 666);
    }

    #[test]
    fn full_allocation_at_and_after_period_end() {
        let s = schedule(1_001, 30, 360);
        assert_eq!(vested_amount(&s, START + 360 * DAY).unwrap(), 1_001);
        assert_eq!(vested_amount(&s, START + 9_999 * DAY).unwrap(), 1_001);
        assert_eq!(phase(&s, START + 360 * DAY).unwrap(), VestingPhase::FullyVested);
    }

    #[test]
    fn cliff_equal_to_period_unlocks_everything_at_once() {
        let s = schedule(500, 90, 90);
        assert_eq!(vested_amount(&s, START + 90 * DAY - 1).unwrap(), 0);
        assert_eq!(vested_amount(&s, START + 90 * DAY).unwrap(), 500);
    }

    #[test]
    fn claimable_subtracts_claimed_and_never_underflows() {
        let mut s = schedule(360_000, 30, 360);
        s.claimed_amount = 50_000;
        assert_eq!(claimable_amount(&s, START + 90 * DAY).unwrap(), 40_000);
        // More claimed than currently vested.
        assert_eq!(claimable_amount(&s, START + 40 * DAY).unwrap(), 0);

        s.claimed_amount = 360_000;
        assert_eq!(claimable_amount(&s, START + 400 * DAY).unwrap(), 0);
    }

    #[test]
    fn large_allocations_do_not_overflow() {
        let s = schedule(u64::MAX, 1, 4);
        assert_eq!(vested_amount(&s, START + 2 * DAY).unwrap(), u64::MAX / 2);
    }

    #[test]
    fn overflowing_boundaries_are_reported() {
        let mut s = schedule(1, 1, 2);
        s.start_time = i64::MAX - DAY;
        assert!(matches!(vesting_end(&s), Err(VestingError::MathOverflow)));
    }
}
